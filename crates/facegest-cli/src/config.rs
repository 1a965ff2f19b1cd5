use facegest_core::selector::{FRAME_TAG, OCCLUDER_NAME};
use facegest_core::SceneNode;
use facegest_feed::profiles::DEFAULT_PROFILE;

const DEFAULT_ACCESSORIES: &str = "canonical_face_mesh,shades_aviator,shades_round,shades_cat_eye";
const DEFAULT_FRAMES: &str = "frame_0:Frame,frame_1:Frame,frame_2:Frame";

/// CLI configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Camera profile used for viewport projection (default: iphone-truedepth).
    pub camera_profile: String,
    /// Child objects of the tracked face, occluder included.
    pub face_children: Vec<SceneNode>,
    /// Name of the occluder mesh excluded from the accessory set.
    pub occluder_name: String,
    /// Children of the frame container, `name[:tag]`.
    pub frame_children: Vec<SceneNode>,
    /// Tag that marks a frame child.
    pub frame_tag: String,
}

impl Config {
    /// Load configuration from `FACEGEST_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let accessories = get("FACEGEST_ACCESSORIES").unwrap_or_else(|| DEFAULT_ACCESSORIES.to_string());
        let frames = get("FACEGEST_FRAMES").unwrap_or_else(|| DEFAULT_FRAMES.to_string());

        Self {
            camera_profile: get("FACEGEST_CAMERA_PROFILE")
                .unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
            face_children: parse_nodes(&accessories),
            occluder_name: get("FACEGEST_OCCLUDER_NAME")
                .unwrap_or_else(|| OCCLUDER_NAME.to_string()),
            frame_children: parse_nodes(&frames),
            frame_tag: get("FACEGEST_FRAME_TAG").unwrap_or_else(|| FRAME_TAG.to_string()),
        }
    }
}

/// Parse a comma-separated `name[:tag]` list.
pub fn parse_nodes(list: &str) -> Vec<SceneNode> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|item| match item.split_once(':') {
            Some((name, tag)) => SceneNode::new(name.trim()).with_tag(tag.trim()),
            None => SceneNode::new(item),
        })
        .collect()
}
