use serde::{Deserialize, Serialize};
use std::fmt;

/// Head orientation as raw Euler angles in degrees, each in [0, 360).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadEuler {
    /// Pitch.
    pub x: f32,
    /// Yaw.
    pub y: f32,
    /// Roll.
    pub z: f32,
}

impl HeadEuler {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for HeadEuler {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// One frame of tracking input for a single face.
///
/// Coefficients are nominally in [0, 1] but are not clamped; out-of-range
/// values simply take part in the threshold comparisons as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSample {
    pub jaw_open: f32,
    pub eye_blink_left: f32,
    pub eye_blink_right: f32,
    pub mouth_smile_left: f32,
    pub mouth_smile_right: f32,
    pub brow_inner_up: f32,
    /// `None` when the tracker did not report this channel.
    pub brow_outer_up_left: Option<f32>,
    /// `None` when the tracker did not report this channel.
    pub brow_outer_up_right: Option<f32>,
    pub head_euler: HeadEuler,
    /// Horizontal viewport position of the face (0 = left edge, 1 = right edge).
    /// `None` when no camera projection was available.
    pub viewport_x: Option<f32>,
}

/// Discretized mouth state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouthState {
    Open,
    #[default]
    Closed,
}

impl MouthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

/// Head nod ("yes") classification from pitch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadNod {
    Yes,
    #[default]
    Neutral,
}

impl HeadNod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Neutral => "Neutral",
        }
    }
}

/// Head shake ("no") classification from yaw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadShake {
    No,
    #[default]
    Neutral,
}

impl HeadShake {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for MouthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HeadNod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HeadShake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
