//! Mutually exclusive display objects: exactly one active at a time.
//!
//! Backs both the frame switcher (children tagged `Frame`) and the accessory
//! switcher (every child of the face except the occluder mesh).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag carried by frame children.
pub const FRAME_TAG: &str = "Frame";
/// Name of the face-mesh occluder, never part of the accessory set.
pub const OCCLUDER_NAME: &str = "canonical_face_mesh";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection set not initialized: no items")]
    NotInitialized,
}

/// Something that can be shown or hidden.
pub trait Activatable {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// A named child object in the scene hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub tag: Option<String>,
    #[serde(default)]
    pub active: bool,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            active: true,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

impl Activatable for SceneNode {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// A set of items where at most one is active.
#[derive(Debug, Clone)]
pub struct ActiveSet<T> {
    items: Vec<T>,
    active: Option<usize>,
}

impl<T: Activatable> ActiveSet<T> {
    /// Take ownership of `items`, hide them all, then show the first.
    pub fn new(mut items: Vec<T>) -> Self {
        for item in items.iter_mut() {
            item.set_active(false);
        }
        let active = if let Some(first) = items.first_mut() {
            first.set_active(true);
            Some(0)
        } else {
            None
        };
        Self { items, active }
    }

    /// Show the item at `index` and hide every other one.
    ///
    /// An index past the end hides everything.
    pub fn activate(&mut self, index: usize) -> Result<(), SelectionError> {
        if self.items.is_empty() {
            tracing::warn!(index, "activate on empty selection set");
            return Err(SelectionError::NotInitialized);
        }

        for (i, item) in self.items.iter_mut().enumerate() {
            item.set_active(i == index);
        }

        if index < self.items.len() {
            self.active = Some(index);
        } else {
            tracing::warn!(index, len = self.items.len(), "index out of range; all items hidden");
            self.active = None;
        }
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&T> {
        self.active.and_then(|i| self.items.get(i))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ActiveSet<SceneNode> {
    /// Frames are the children carrying `tag`, hidden ones included.
    pub fn frames(children: impl IntoIterator<Item = SceneNode>, tag: &str) -> Self {
        let frames: Vec<SceneNode> = children
            .into_iter()
            .filter(|c| c.tag.as_deref() == Some(tag))
            .collect();
        if frames.is_empty() {
            tracing::warn!(tag, "no frames found");
        } else {
            tracing::info!(count = frames.len(), "frames found and initialized");
        }
        Self::new(frames)
    }

    /// Accessories are every child except the occluder.
    pub fn accessories(children: impl IntoIterator<Item = SceneNode>, occluder: &str) -> Self {
        let accessories: Vec<SceneNode> = children
            .into_iter()
            .filter(|c| c.name != occluder)
            .collect();
        if accessories.is_empty() {
            tracing::warn!(occluder, "no accessories found");
        } else {
            tracing::info!(count = accessories.len(), "accessories initialized");
        }
        Self::new(accessories)
    }

    /// Name of the active item.
    pub fn active_name(&self) -> Option<&str> {
        self.active().map(|n| n.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_flags(set: &ActiveSet<SceneNode>) -> Vec<bool> {
        set.items().iter().map(|n| n.is_active()).collect()
    }

    fn face_children() -> Vec<SceneNode> {
        vec![
            SceneNode::new(OCCLUDER_NAME),
            SceneNode::new("aviators"),
            SceneNode::new("round"),
            SceneNode::new("visor"),
        ]
    }

    #[test]
    fn test_new_shows_first_only() {
        let set = ActiveSet::new(vec![SceneNode::new("a"), SceneNode::new("b")]);
        assert_eq!(active_flags(&set), vec![true, false]);
        assert_eq!(set.active_index(), Some(0));
    }

    #[test]
    fn test_activate_exactly_one() {
        let mut set = ActiveSet::accessories(face_children(), OCCLUDER_NAME);
        assert_eq!(set.len(), 3);

        set.activate(2).unwrap();
        assert_eq!(active_flags(&set), vec![false, false, true]);
        assert_eq!(set.active_name(), Some("visor"));

        set.activate(0).unwrap();
        assert_eq!(active_flags(&set), vec![true, false, false]);
    }

    #[test]
    fn test_activate_out_of_range_hides_all() {
        let mut set = ActiveSet::accessories(face_children(), OCCLUDER_NAME);
        set.activate(10).unwrap();
        assert_eq!(active_flags(&set), vec![false, false, false]);
        assert_eq!(set.active_index(), None);
        assert!(set.active().is_none());
    }

    #[test]
    fn test_activate_empty_errors() {
        let mut set: ActiveSet<SceneNode> = ActiveSet::new(Vec::new());
        assert_eq!(set.activate(0), Err(SelectionError::NotInitialized));
        assert!(set.is_empty());
        assert_eq!(set.active_index(), None);
    }

    #[test]
    fn test_accessories_skip_occluder() {
        let set = ActiveSet::accessories(face_children(), OCCLUDER_NAME);
        assert!(set.items().iter().all(|n| n.name != OCCLUDER_NAME));
        assert_eq!(set.active_name(), Some("aviators"));
    }

    #[test]
    fn test_frames_by_tag_include_hidden() {
        let mut hidden = SceneNode::new("frame_b").with_tag(FRAME_TAG);
        hidden.active = false;
        let children = vec![
            SceneNode::new("frame_a").with_tag(FRAME_TAG),
            SceneNode::new("label").with_tag("UI"),
            hidden,
            SceneNode::new("untagged"),
        ];
        let set = ActiveSet::frames(children, FRAME_TAG);
        let names: Vec<_> = set.items().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["frame_a", "frame_b"]);
        assert_eq!(active_flags(&set), vec![true, false]);
    }

    #[test]
    fn test_frames_none_found() {
        let set = ActiveSet::frames(vec![SceneNode::new("x")], FRAME_TAG);
        assert!(set.is_empty());
    }
}
