//! Drive a recorded session through face sessions and selectors.

use anyhow::Result;
use facegest_core::{
    ActiveSet, DisplayField, DisplaySink, FaceSessions, GestureState, RecordingSink, SceneNode,
    TrackableId,
};
use facegest_feed::{TrackingEvent, ViewportProjector};
use std::collections::BTreeMap;
use std::io::Write;

/// Writes `face=1 frame=3 BlinkCounter=2` lines.
struct LineSink<'w, W: Write> {
    out: &'w mut W,
    face: TrackableId,
    frame: u64,
    error: Option<std::io::Error>,
}

impl<W: Write> DisplaySink for LineSink<'_, W> {
    fn show(&mut self, field: DisplayField, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "face={} frame={} {field}={text}", self.face, self.frame) {
            self.error = Some(e);
        }
    }
}

/// Replays tracking events, writing display updates to `out`.
pub struct Replay<'a, W: Write> {
    sessions: FaceSessions,
    projector: &'a dyn ViewportProjector,
    accessories: ActiveSet<SceneNode>,
    frames: ActiveSet<SceneNode>,
    frame_counts: BTreeMap<TrackableId, u64>,
    json: bool,
    out: W,
}

impl<'a, W: Write> Replay<'a, W> {
    pub fn new(
        projector: &'a dyn ViewportProjector,
        accessories: ActiveSet<SceneNode>,
        frames: ActiveSet<SceneNode>,
        json: bool,
        out: W,
    ) -> Self {
        Self {
            sessions: FaceSessions::new(),
            projector,
            accessories,
            frames,
            frame_counts: BTreeMap::new(),
            json,
            out,
        }
    }

    pub fn run<'e>(mut self, events: impl IntoIterator<Item = &'e TrackingEvent>) -> Result<W> {
        for event in events {
            self.handle(event)?;
        }
        let remaining: Vec<TrackableId> = self.sessions.ids().collect();
        for face in remaining {
            if let Some(state) = self.sessions.state(face).copied() {
                self.write_summary(face, "tracked", &state)?;
            }
        }
        Ok(self.out)
    }

    pub fn handle(&mut self, event: &TrackingEvent) -> Result<()> {
        match event {
            TrackingEvent::FaceAdded { face } => {
                self.sessions.track(*face);
                self.frame_counts.insert(*face, 0);
            }
            TrackingEvent::FaceUpdated { .. } => {
                let Some((face, sample)) = event.sample(self.projector) else {
                    return Ok(());
                };
                let frame = {
                    let n = self.frame_counts.entry(face).or_insert(0);
                    *n += 1;
                    *n
                };
                let result = self.sessions.update(face, &sample);
                if self.json {
                    let mut sink = RecordingSink::new();
                    result.apply_to(&mut sink);
                    let updates: serde_json::Map<String, serde_json::Value> = sink
                        .updates
                        .into_iter()
                        .map(|(field, text)| (field.to_string(), serde_json::Value::String(text)))
                        .collect();
                    let line = serde_json::json!({ "face": face, "frame": frame, "updates": updates });
                    writeln!(self.out, "{line}")?;
                } else {
                    let mut sink = LineSink {
                        out: &mut self.out,
                        face,
                        frame,
                        error: None,
                    };
                    result.apply_to(&mut sink);
                    if let Some(e) = sink.error {
                        return Err(e.into());
                    }
                }
            }
            TrackingEvent::FaceRemoved { face } => {
                self.frame_counts.remove(face);
                if let Some(state) = self.sessions.lose(*face) {
                    self.write_summary(*face, "lost", &state)?;
                }
            }
            TrackingEvent::SelectAccessory { index } => {
                if let Err(e) = self.accessories.activate(*index) {
                    tracing::warn!(error = %e, index, "accessory switch ignored");
                    return Ok(());
                }
                let name = self.accessories.active_name().map(str::to_owned);
                self.write_selection("accessory", name)?;
            }
            TrackingEvent::SelectFrame { index } => {
                if let Err(e) = self.frames.activate(*index) {
                    tracing::warn!(error = %e, index, "frame switch ignored");
                    return Ok(());
                }
                let name = self.frames.active_name().map(str::to_owned);
                self.write_selection("frame", name)?;
            }
        }
        Ok(())
    }

    fn write_summary(&mut self, face: TrackableId, status: &str, state: &GestureState) -> Result<()> {
        if self.json {
            let line = serde_json::json!({ "face": face, "status": status, "state": state });
            writeln!(self.out, "{line}")?;
        } else {
            writeln!(
                self.out,
                "face={face} {status} blinks={} smiles={} eyebrow_raises={}",
                state.blink_count, state.smile_count, state.eyebrow_raise_count
            )?;
        }
        Ok(())
    }

    fn write_selection(&mut self, kind: &str, name: Option<String>) -> Result<()> {
        if self.json {
            let line = serde_json::json!({ kind: name });
            writeln!(self.out, "{line}")?;
        } else {
            writeln!(self.out, "{kind}={}", name.as_deref().unwrap_or("none"))?;
        }
        Ok(())
    }
}
