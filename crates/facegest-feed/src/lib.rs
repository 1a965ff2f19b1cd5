//! facegest-feed — Tracking input for the gesture classifier.
//!
//! Reads recorded face-tracking sessions (JSON lines), and projects face
//! positions into viewport space using embedded camera profiles.

pub mod profiles;
pub mod projection;
pub mod recording;

pub use profiles::{list_profiles, lookup_profile, require_profile, CameraProfile, ProfileError};
pub use projection::{NoViewport, PerspectiveCamera, ViewportProjector};
pub use recording::{Recording, RecordingError, RecordingStats, TrackingEvent};
