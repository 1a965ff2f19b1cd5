//! Camera profile database.
//!
//! Maps a profile name to the field of view and aspect ratio needed to
//! project a face position into viewport space. Profile files are embedded
//! at compile time from `contrib/cameras/*.toml`.

use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

const PROFILE_IPHONE_TRUEDEPTH: &str = include_str!("../../../contrib/cameras/iphone-truedepth.toml");
const PROFILE_IPAD_TRUEDEPTH: &str = include_str!("../../../contrib/cameras/ipad-truedepth.toml");

/// Profile used when none is configured.
pub const DEFAULT_PROFILE: &str = "iphone-truedepth";

static PROFILE_DB: OnceLock<Vec<CameraProfile>> = OnceLock::new();

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("unknown camera profile: {0}")]
    Unknown(String),
}

/// Top-level profile file structure (one per `contrib/cameras/*.toml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileFile {
    pub camera: CameraProfile,
}

/// Camera parameters from the `[camera]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Full vertical field of view in degrees.
    pub vertical_fov_deg: f32,
    /// Viewport width / height.
    pub aspect_ratio: f32,
}

fn profile_db() -> &'static Vec<CameraProfile> {
    PROFILE_DB.get_or_init(|| parse_profiles(&[PROFILE_IPHONE_TRUEDEPTH, PROFILE_IPAD_TRUEDEPTH]))
}

fn parse_profiles(sources: &[&str]) -> Vec<CameraProfile> {
    let mut db = Vec::new();
    for src in sources {
        match toml::from_str::<ProfileFile>(src) {
            Ok(p) => db.push(p.camera),
            Err(e) => tracing::warn!(error = %e, "bad camera profile TOML; skipped"),
        }
    }
    db
}

/// Look up a profile by name.
pub fn lookup_profile(name: &str) -> Option<&'static CameraProfile> {
    profile_db().iter().find(|p| p.name == name)
}

/// Look up a profile by name, failing when it is not known.
pub fn require_profile(name: &str) -> Result<&'static CameraProfile, ProfileError> {
    lookup_profile(name).ok_or_else(|| ProfileError::Unknown(name.to_string()))
}

/// List all known profiles.
pub fn list_profiles() -> &'static [CameraProfile] {
    profile_db()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profiles_parse() {
        assert_eq!(list_profiles().len(), 2);
        let p = lookup_profile(DEFAULT_PROFILE).unwrap();
        assert!(p.vertical_fov_deg > 0.0);
        assert!(p.aspect_ratio > 0.0);
    }

    #[test]
    fn test_unknown_profile() {
        assert!(lookup_profile("webcam-9000").is_none());
        let err = require_profile("webcam-9000").unwrap_err();
        assert_eq!(err.to_string(), "unknown camera profile: webcam-9000");
    }

    #[test]
    fn test_bad_profile_skipped() {
        let good = "[camera]\nname = \"a\"\nvertical_fov_deg = 60.0\naspect_ratio = 1.0\n";
        let bad = "[camera]\nname = \"b\"\n";
        let db = parse_profiles(&[good, bad]);
        assert_eq!(db.len(), 1);
        assert_eq!(db[0].name, "a");
        assert!(db[0].description.is_empty());
    }
}
