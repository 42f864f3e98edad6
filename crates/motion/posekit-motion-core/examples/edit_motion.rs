use std::collections::HashMap;

use posekit_motion_core::MotionEditor;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: edit_motion <motion.yaml>"))?;

    let mut editor = MotionEditor::new();
    editor.load(&path)?;

    let names = editor.frame_names();
    println!("frame names:");
    for name in &names {
        println!("  {name}");
    }

    let Some(first) = names.first() else {
        println!("document has no frames");
        return Ok(());
    };
    if let Some(frame) = editor.frame(first) {
        MotionEditor::print_frame(&frame);
    }

    // Nudge a couple of joints on the first frame; unknown names are skipped
    // in non-strict mode.
    let updates = HashMap::from([
        ("rotate_1".to_string(), 0.33),
        ("rotate_7".to_string(), -0.11),
    ]);
    editor.edit_joints(first, &updates, false)?;

    editor.save(&path)?;
    println!("done");
    Ok(())
}
