//! Per-face gesture sessions.
//!
//! Every tracked face owns its own [`GestureState`]; a session starts when
//! the face is tracked and is dropped when tracking is lost.

use crate::classifier::{GestureClassifier, GestureFrameResult, GestureState};
use crate::types::CoefficientSample;
use std::collections::BTreeMap;

/// Identifier assigned to a face by the tracking source.
pub type TrackableId = u64;

/// Gesture state for every currently tracked face.
#[derive(Debug, Default)]
pub struct FaceSessions {
    classifier: GestureClassifier,
    states: BTreeMap<TrackableId, GestureState>,
}

impl FaceSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `id`. An already tracked face keeps its state.
    pub fn track(&mut self, id: TrackableId) {
        if self.states.contains_key(&id) {
            tracing::debug!(face = id, "face already tracked");
            return;
        }
        self.states.insert(id, GestureState::default());
        tracing::debug!(face = id, tracked = self.states.len(), "face tracked");
    }

    /// Classify one frame for `id`.
    ///
    /// An update for a face that was never tracked starts its session.
    pub fn update(&mut self, id: TrackableId, sample: &CoefficientSample) -> GestureFrameResult {
        let state = self.states.entry(id).or_insert_with(|| {
            tracing::debug!(face = id, "update for untracked face; starting session");
            GestureState::default()
        });
        let (next, result) = self.classifier.process(sample, *state);
        *state = next;
        result
    }

    /// End the session for `id`, returning its final state.
    pub fn lose(&mut self, id: TrackableId) -> Option<GestureState> {
        let state = self.states.remove(&id);
        match &state {
            Some(s) => tracing::debug!(
                face = id,
                blinks = s.blink_count,
                smiles = s.smile_count,
                eyebrow_raises = s.eyebrow_raise_count,
                "face lost"
            ),
            None => tracing::debug!(face = id, "lost face was not tracked"),
        }
        state
    }

    pub fn state(&self, id: TrackableId) -> Option<&GestureState> {
        self.states.get(&id)
    }

    /// Tracked face ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = TrackableId> + '_ {
        self.states.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
