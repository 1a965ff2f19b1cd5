//! ARKit blend-shape locations and folding raw coefficients into a sample.

use crate::types::{CoefficientSample, HeadEuler};
use serde::{Deserialize, Serialize};

/// ARKit blend-shape location.
///
/// Serialized with ARKit's own lowerCamelCase names (`jawOpen`, `eyeBlinkLeft`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendShapeLocation {
    BrowDownLeft,
    BrowDownRight,
    BrowInnerUp,
    BrowOuterUpLeft,
    BrowOuterUpRight,
    CheekPuff,
    CheekSquintLeft,
    CheekSquintRight,
    EyeBlinkLeft,
    EyeBlinkRight,
    EyeLookDownLeft,
    EyeLookDownRight,
    EyeLookInLeft,
    EyeLookInRight,
    EyeLookOutLeft,
    EyeLookOutRight,
    EyeLookUpLeft,
    EyeLookUpRight,
    EyeSquintLeft,
    EyeSquintRight,
    EyeWideLeft,
    EyeWideRight,
    JawForward,
    JawLeft,
    JawOpen,
    JawRight,
    MouthClose,
    MouthDimpleLeft,
    MouthDimpleRight,
    MouthFrownLeft,
    MouthFrownRight,
    MouthFunnel,
    MouthLeft,
    MouthLowerDownLeft,
    MouthLowerDownRight,
    MouthPressLeft,
    MouthPressRight,
    MouthPucker,
    MouthRight,
    MouthRollLower,
    MouthRollUpper,
    MouthShrugLower,
    MouthShrugUpper,
    MouthSmileLeft,
    MouthSmileRight,
    MouthStretchLeft,
    MouthStretchRight,
    MouthUpperUpLeft,
    MouthUpperUpRight,
    NoseSneerLeft,
    NoseSneerRight,
    TongueOut,
}

/// A single coefficient reported by the tracker for one location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendShapeCoefficient {
    pub location: BlendShapeLocation,
    pub coefficient: f32,
}

impl BlendShapeCoefficient {
    pub fn new(location: BlendShapeLocation, coefficient: f32) -> Self {
        Self {
            location,
            coefficient,
        }
    }
}

impl CoefficientSample {
    /// Build a sample from the coefficients the tracker reported this frame.
    ///
    /// Locations the classifier does not use are ignored. Unreported locations
    /// read as 0, except the outer brow channels which stay `None`.
    /// A repeated location keeps its last value.
    pub fn from_coefficients<I>(coefficients: I, head_euler: HeadEuler, viewport_x: Option<f32>) -> Self
    where
        I: IntoIterator<Item = BlendShapeCoefficient>,
    {
        let mut sample = CoefficientSample {
            head_euler,
            viewport_x,
            ..Default::default()
        };

        for c in coefficients {
            let v = c.coefficient;
            match c.location {
                BlendShapeLocation::JawOpen => sample.jaw_open = v,
                BlendShapeLocation::EyeBlinkLeft => sample.eye_blink_left = v,
                BlendShapeLocation::EyeBlinkRight => sample.eye_blink_right = v,
                BlendShapeLocation::MouthSmileLeft => sample.mouth_smile_left = v,
                BlendShapeLocation::MouthSmileRight => sample.mouth_smile_right = v,
                BlendShapeLocation::BrowInnerUp => sample.brow_inner_up = v,
                BlendShapeLocation::BrowOuterUpLeft => sample.brow_outer_up_left = Some(v),
                BlendShapeLocation::BrowOuterUpRight => sample.brow_outer_up_right = Some(v),
                _ => {}
            }
        }

        sample
    }
}
