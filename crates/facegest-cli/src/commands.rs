//! Output for the `inspect` and `select` subcommands.

use anyhow::Result;
use facegest_core::{ActiveSet, SceneNode};
use facegest_feed::RecordingStats;
use std::io::Write;

/// Print a recording summary.
pub fn inspect<W: Write>(stats: &RecordingStats, out: &mut W) -> Result<()> {
    writeln!(out, "events:      {}", stats.events)?;
    writeln!(out, "faces added: {}", stats.faces_added)?;
    writeln!(out, "faces lost:  {}", stats.faces_removed)?;
    writeln!(out, "selections:  {}", stats.selections)?;
    for (face, frames) in &stats.frames_per_face {
        writeln!(out, "face {face}: {frames} frames")?;
    }
    Ok(())
}

/// Build the accessory set from `children`, show `index`, and list every item.
pub fn select<W: Write>(
    children: Vec<SceneNode>,
    occluder: &str,
    index: usize,
    out: &mut W,
) -> Result<()> {
    let mut set = ActiveSet::accessories(children, occluder);
    set.activate(index)?;
    for (i, node) in set.items().iter().enumerate() {
        let mark = if node.active { "*" } else { " " };
        writeln!(out, "{mark} {i} {}", node.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_nodes;
    use facegest_core::selector::OCCLUDER_NAME;
    use facegest_feed::Recording;

    fn run_select(items: &str, index: usize) -> Result<String> {
        let mut out = Vec::new();
        select(parse_nodes(items), OCCLUDER_NAME, index, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_select_marks_active() {
        let text = run_select("canonical_face_mesh,aviator,round", 1).unwrap();
        assert_eq!(text, "  0 aviator\n* 1 round\n");
    }

    #[test]
    fn test_select_out_of_range_marks_none() {
        let text = run_select("canonical_face_mesh,aviator,round", 5).unwrap();
        assert!(!text.contains('*'));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_select_only_occluder_errors() {
        let err = run_select("canonical_face_mesh", 0).unwrap_err();
        assert!(err.to_string().contains("not initialized"));
    }

    #[test]
    fn test_inspect_lists_faces() {
        let rec = Recording::parse(
            r#"{"event":"face_added","face":1}
{"event":"face_updated","face":1,"euler":[0,0,0]}
{"event":"face_updated","face":1,"euler":[0,0,0]}
{"event":"face_updated","face":3,"euler":[0,0,0]}
{"event":"select_frame","index":0}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        inspect(&rec.stats(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("events:      5\n"));
        assert!(text.contains("faces added: 1\n"));
        assert!(text.contains("selections:  1\n"));
        assert!(text.ends_with("face 1: 2 frames\nface 3: 1 frames\n"));
    }
}
