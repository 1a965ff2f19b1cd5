//! Recorded tracking sessions.
//!
//! A recording is JSON lines, one [`TrackingEvent`] per line:
//!
//! ```text
//! {"event":"face_added","face":1}
//! {"event":"face_updated","face":1,"euler":[0,0,0],"position":[0,0,0.4],
//!  "coefficients":[{"location":"jawOpen","coefficient":0.5}]}
//! {"event":"face_removed","face":1}
//! ```
//!
//! Blank lines and `#` comments are skipped.

use crate::projection::ViewportProjector;
use facegest_core::{BlendShapeCoefficient, CoefficientSample, HeadEuler, TrackableId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordingError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One event from the tracking source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackingEvent {
    /// A face started being tracked.
    FaceAdded { face: TrackableId },
    /// New coefficients and pose for a tracked face.
    FaceUpdated {
        face: TrackableId,
        #[serde(default)]
        coefficients: Vec<BlendShapeCoefficient>,
        /// Raw Euler angles in degrees: pitch, yaw, roll.
        euler: [f32; 3],
        /// Camera-space position in metres.
        #[serde(default)]
        position: Option<[f32; 3]>,
    },
    /// Tracking was lost for a face.
    FaceRemoved { face: TrackableId },
    /// Switch the visible accessory.
    SelectAccessory { index: usize },
    /// Switch the visible frame.
    SelectFrame { index: usize },
}

impl TrackingEvent {
    /// Build the classifier input for a `FaceUpdated` event.
    pub fn sample<P: ViewportProjector + ?Sized>(
        &self,
        projector: &P,
    ) -> Option<(TrackableId, CoefficientSample)> {
        let TrackingEvent::FaceUpdated {
            face,
            coefficients,
            euler,
            position,
        } = self
        else {
            return None;
        };
        let viewport_x = position.and_then(|p| projector.viewport_x(p));
        let sample = CoefficientSample::from_coefficients(
            coefficients.iter().copied(),
            HeadEuler::from(*euler),
            viewport_x,
        );
        Some((*face, sample))
    }
}

/// Summary of a recording's contents.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingStats {
    pub events: usize,
    pub faces_added: usize,
    pub faces_removed: usize,
    pub selections: usize,
    /// Update count per face id.
    pub frames_per_face: BTreeMap<TrackableId, usize>,
}

/// A parsed recording.
#[derive(Debug, Default, Clone)]
pub struct Recording {
    pub events: Vec<TrackingEvent>,
}

impl Recording {
    /// Read a recording from disk.
    pub fn open(path: &Path) -> Result<Self, RecordingError> {
        let file = std::fs::File::open(path)?;
        let recording = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            events = recording.events.len(),
            "recording loaded"
        );
        Ok(recording)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RecordingError> {
        let mut events = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(event) = parse_line(&line, i + 1)? {
                events.push(event);
            }
        }
        Ok(Self { events })
    }

    pub fn parse(text: &str) -> Result<Self, RecordingError> {
        Self::from_reader(text.as_bytes())
    }

    pub fn stats(&self) -> RecordingStats {
        let mut stats = RecordingStats {
            events: self.events.len(),
            ..Default::default()
        };
        for event in &self.events {
            match event {
                TrackingEvent::FaceAdded { .. } => stats.faces_added += 1,
                TrackingEvent::FaceRemoved { .. } => stats.faces_removed += 1,
                TrackingEvent::FaceUpdated { face, .. } => {
                    *stats.frames_per_face.entry(*face).or_default() += 1
                }
                TrackingEvent::SelectAccessory { .. } | TrackingEvent::SelectFrame { .. } => {
                    stats.selections += 1
                }
            }
        }
        stats
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<TrackingEvent>, RecordingError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|source| RecordingError::Parse {
            line: line_no,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{NoViewport, PerspectiveCamera};
    use facegest_core::BlendShapeLocation;

    const SESSION: &str = r#"
# two faces, one accessory switch
{"event":"face_added","face":1}
{"event":"face_added","face":2}
{"event":"face_updated","face":1,"euler":[0,0,350],"position":[0,0,0.4],"coefficients":[{"location":"jawOpen","coefficient":0.5},{"location":"browOuterUpLeft","coefficient":0.2}]}
{"event":"face_updated","face":2,"euler":[0,0,0]}
{"event":"select_accessory","index":1}
{"event":"face_removed","face":1}
"#;

    #[test]
    fn test_parse_session() {
        let rec = Recording::parse(SESSION).unwrap();
        assert_eq!(rec.events.len(), 6);
        assert_eq!(rec.events[0], TrackingEvent::FaceAdded { face: 1 });
        assert_eq!(rec.events[4], TrackingEvent::SelectAccessory { index: 1 });

        let TrackingEvent::FaceUpdated { coefficients, position, .. } = &rec.events[2] else {
            panic!("expected face_updated");
        };
        assert_eq!(coefficients[0].location, BlendShapeLocation::JawOpen);
        assert_eq!(*position, Some([0.0, 0.0, 0.4]));
    }

    #[test]
    fn test_parse_crlf_and_comments() {
        let text = "# header\r\n{\"event\":\"face_added\",\"face\":7}\r\n\r\n{\"event\":\"face_removed\",\"face\":7}\r\n";
        let rec = Recording::parse(text).unwrap();
        assert_eq!(
            rec.events,
            vec![
                TrackingEvent::FaceAdded { face: 7 },
                TrackingEvent::FaceRemoved { face: 7 },
            ]
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let text = "{\"event\":\"face_added\",\"face\":1}\n\n{\"event\":\"face_updated\",\"face\":1}\n";
        match Recording::parse(text) {
            Err(RecordingError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_location_rejected() {
        let text = r#"{"event":"face_updated","face":1,"euler":[0,0,0],"coefficients":[{"location":"earWiggle","coefficient":1}]}"#;
        assert!(matches!(
            Recording::parse(text),
            Err(RecordingError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_sample_from_update() {
        let rec = Recording::parse(SESSION).unwrap();
        let cam = PerspectiveCamera::new(60.0, 1.0);

        let (face, sample) = rec.events[2].sample(&cam).unwrap();
        assert_eq!(face, 1);
        assert_eq!(sample.jaw_open, 0.5);
        assert_eq!(sample.brow_outer_up_left, Some(0.2));
        assert_eq!(sample.head_euler.z, 350.0);
        assert!((sample.viewport_x.unwrap() - 0.5).abs() < 1e-6);

        let (_, no_pos) = rec.events[3].sample(&cam).unwrap();
        assert!(no_pos.viewport_x.is_none());

        let (_, no_cam) = rec.events[2].sample(&NoViewport).unwrap();
        assert!(no_cam.viewport_x.is_none());

        assert!(rec.events[0].sample(&cam).is_none());
    }

    #[test]
    fn test_stats() {
        let stats = Recording::parse(SESSION).unwrap().stats();
        assert_eq!(stats.events, 6);
        assert_eq!(stats.faces_added, 2);
        assert_eq!(stats.faces_removed, 1);
        assert_eq!(stats.selections, 1);
        assert_eq!(stats.frames_per_face.get(&1), Some(&1));
        assert_eq!(stats.frames_per_face.get(&2), Some(&1));
    }
}
