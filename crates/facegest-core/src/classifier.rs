//! Blend-shape gesture classifier.
//!
//! Each call takes one frame's sample plus the previous frame's
//! [`GestureState`] and returns the next state with a [`GestureFrameResult`].
//! Counters fire on rising edges only, the mouth label is reported on change,
//! and head-pose labels are recomputed every frame.

use crate::sink::{DisplayField, DisplaySink};
use crate::types::{CoefficientSample, HeadNod, HeadShake, MouthState};
use serde::{Deserialize, Serialize};

// --- Named constants ---
const BLINK_THRESHOLD: f32 = 0.5;
const JAW_OPEN_THRESHOLD: f32 = 0.3;
const SMILE_THRESHOLD: f32 = 0.5;
const EYEBROW_RAISE_THRESHOLD: f32 = 0.40;
/// Normalized pitch below this reads as a nod.
const NOD_PITCH_DEG: f32 = -20.0;
/// Normalized yaw magnitude above this reads as a shake.
const SHAKE_YAW_DEG: f32 = 5.0;

/// Map an angle in [0, 360) to (-180, 180].
pub fn normalize_angle(deg: f32) -> f32 {
    if deg > 180.0 {
        deg - 360.0
    } else {
        deg
    }
}

/// Discrete gesture memory for one tracked face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureState {
    pub blink_count: u32,
    pub smile_count: u32,
    pub eyebrow_raise_count: u32,
    pub was_blinking: bool,
    pub was_smiling: bool,
    pub was_eyebrow_raised: bool,
    pub mouth_state: MouthState,
}

/// Outcome of classifying one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureFrameResult {
    pub blink_count: u32,
    pub smile_count: u32,
    pub eyebrow_raise_count: u32,
    /// Blink started this frame.
    pub blink_detected: bool,
    /// Smile started this frame.
    pub smile_detected: bool,
    /// Eyebrow raise started this frame.
    pub eyebrow_raised: bool,
    pub mouth_state: MouthState,
    /// Mouth state differs from the previous frame.
    pub mouth_changed: bool,
    /// Normalized roll in degrees.
    pub head_tilt_deg: f32,
    pub head_nod: HeadNod,
    pub head_shake: HeadShake,
    /// Horizontal offset in [-1, 1] from screen center; `None` without a viewport.
    pub head_pos_x: Option<f32>,
    pub eyebrow_average: f32,
}

impl GestureFrameResult {
    /// Tilt formatted to one decimal place.
    pub fn head_tilt_text(&self) -> String {
        format!("{:.1}", self.head_tilt_deg)
    }

    /// Horizontal offset formatted to two decimal places.
    pub fn head_pos_x_text(&self) -> Option<String> {
        self.head_pos_x.map(|x| format!("{x:.2}"))
    }

    /// Display updates produced by this frame, in field order.
    ///
    /// Counters appear only on their rising edge and the mouth only when it
    /// changed; tilt, nod, shake and (when known) horizontal offset appear
    /// every frame.
    pub fn updates(&self) -> Vec<(DisplayField, String)> {
        let mut out = Vec::with_capacity(8);
        if self.blink_detected {
            out.push((DisplayField::BlinkCounter, self.blink_count.to_string()));
        }
        if self.mouth_changed {
            out.push((DisplayField::MouthState, self.mouth_state.to_string()));
        }
        out.push((DisplayField::HeadTiltValue, self.head_tilt_text()));
        if self.smile_detected {
            out.push((DisplayField::SmileCounter, self.smile_count.to_string()));
        }
        if let Some(text) = self.head_pos_x_text() {
            out.push((DisplayField::HeadPosX, text));
        }
        out.push((DisplayField::HeadNodYes, self.head_nod.to_string()));
        out.push((DisplayField::HeadShakeNo, self.head_shake.to_string()));
        if self.eyebrow_raised {
            out.push((DisplayField::EyebrowValue, self.eyebrow_raise_count.to_string()));
        }
        out
    }

    /// Push this frame's updates into `sink`.
    pub fn apply_to<S: DisplaySink + ?Sized>(&self, sink: &mut S) {
        for (field, text) in self.updates() {
            sink.show(field, &text);
        }
    }
}

/// Stateless gesture classifier; all memory lives in [`GestureState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureClassifier;

impl GestureClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify one frame.
    pub fn process(
        &self,
        sample: &CoefficientSample,
        state: GestureState,
    ) -> (GestureState, GestureFrameResult) {
        let mut next = state;

        let is_blinking =
            sample.eye_blink_left > BLINK_THRESHOLD && sample.eye_blink_right > BLINK_THRESHOLD;
        let is_mouth_open = sample.jaw_open > JAW_OPEN_THRESHOLD;
        let is_smiling = (sample.mouth_smile_left + sample.mouth_smile_right) / 2.0 > SMILE_THRESHOLD;
        let eyebrow_average = eyebrow_average(sample);
        let is_eyebrow_raised = eyebrow_average > EYEBROW_RAISE_THRESHOLD;

        let blink_detected = is_blinking && !state.was_blinking;
        if blink_detected {
            next.blink_count = next.blink_count.saturating_add(1);
            tracing::debug!(count = next.blink_count, "blink");
        }
        next.was_blinking = is_blinking;

        let mouth_state = if is_mouth_open {
            MouthState::Open
        } else {
            MouthState::Closed
        };
        let mouth_changed = mouth_state != state.mouth_state;
        if mouth_changed {
            tracing::debug!(mouth = %mouth_state, "mouth state changed");
        }
        next.mouth_state = mouth_state;

        let smile_detected = is_smiling && !state.was_smiling;
        if smile_detected {
            next.smile_count = next.smile_count.saturating_add(1);
            tracing::debug!(count = next.smile_count, "smile");
        }
        next.was_smiling = is_smiling;

        let eyebrow_raised = is_eyebrow_raised && !state.was_eyebrow_raised;
        if eyebrow_raised {
            next.eyebrow_raise_count = next.eyebrow_raise_count.saturating_add(1);
            tracing::debug!(count = next.eyebrow_raise_count, average = eyebrow_average, "eyebrow raise");
        }
        next.was_eyebrow_raised = is_eyebrow_raised;

        let head_tilt_deg = normalize_angle(sample.head_euler.z);
        let head_pitch_deg = normalize_angle(sample.head_euler.x);
        let head_yaw_deg = normalize_angle(sample.head_euler.y);

        let head_nod = if head_pitch_deg < NOD_PITCH_DEG {
            HeadNod::Yes
        } else {
            HeadNod::Neutral
        };
        let head_shake = if head_yaw_deg.abs() > SHAKE_YAW_DEG {
            HeadShake::No
        } else {
            HeadShake::Neutral
        };

        let result = GestureFrameResult {
            blink_count: next.blink_count,
            smile_count: next.smile_count,
            eyebrow_raise_count: next.eyebrow_raise_count,
            blink_detected,
            smile_detected,
            eyebrow_raised,
            mouth_state,
            mouth_changed,
            head_tilt_deg,
            head_nod,
            head_shake,
            head_pos_x: sample.viewport_x.map(|vx| (vx - 0.5) * 2.0),
            eyebrow_average,
        };

        (next, result)
    }
}

/// Inner brow averaged with the mean of whichever outer brow channels are present.
fn eyebrow_average(sample: &CoefficientSample) -> f32 {
    let (total, count) = [sample.brow_outer_up_left, sample.brow_outer_up_right]
        .into_iter()
        .flatten()
        .fold((0.0f32, 0u32), |(t, n), v| (t + v, n + 1));
    let outer = if count > 0 { total / count as f32 } else { 0.0 };
    (sample.brow_inner_up + outer) / 2.0
}
