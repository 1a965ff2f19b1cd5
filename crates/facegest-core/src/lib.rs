//! facegest-core — Facial gesture classification from blend-shape coefficients.
//!
//! Turns per-frame blend-shape coefficients and head angles into debounced
//! gesture counters (blinks, smiles, eyebrow raises) and head-pose labels.
//! Also holds per-face session bookkeeping and the active-index selector
//! used by the frame and accessory switchers.

pub mod blendshape;
pub mod classifier;
pub mod selector;
pub mod session;
pub mod sink;
pub mod types;

pub use blendshape::{BlendShapeCoefficient, BlendShapeLocation};
pub use classifier::{normalize_angle, GestureClassifier, GestureFrameResult, GestureState};
pub use selector::{Activatable, ActiveSet, SceneNode, SelectionError};
pub use session::{FaceSessions, TrackableId};
pub use sink::{DisplayField, DisplaySink, RecordingSink};
pub use types::{CoefficientSample, HeadEuler, HeadNod, HeadShake, MouthState};
