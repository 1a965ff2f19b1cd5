//! Display sinks for gesture results.
//!
//! A sink is handed to whoever drives the classifier; nothing is looked up
//! by name at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// On-screen field a gesture result can update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayField {
    BlinkCounter,
    MouthState,
    HeadTiltValue,
    SmileCounter,
    EyebrowValue,
    HeadPosX,
    HeadNodYes,
    HeadShakeNo,
}

impl DisplayField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlinkCounter => "BlinkCounter",
            Self::MouthState => "MouthState",
            Self::HeadTiltValue => "HeadTiltValue",
            Self::SmileCounter => "SmileCounter",
            Self::EyebrowValue => "EyebrowValue",
            Self::HeadPosX => "HeadPosX",
            Self::HeadNodYes => "HeadNodYes",
            Self::HeadShakeNo => "HeadShakeNo",
        }
    }
}

impl fmt::Display for DisplayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives text updates for display fields.
pub trait DisplaySink {
    fn show(&mut self, field: DisplayField, text: &str);
}

/// Sink that keeps every update in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub updates: Vec<(DisplayField, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent text shown for `field`, if any.
    pub fn last(&self, field: DisplayField) -> Option<&str> {
        self.updates
            .iter()
            .rev()
            .find(|(f, _)| *f == field)
            .map(|(_, text)| text.as_str())
    }

    /// Number of times `field` was updated.
    pub fn count(&self, field: DisplayField) -> usize {
        self.updates.iter().filter(|(f, _)| *f == field).count()
    }

    pub fn clear(&mut self) {
        self.updates.clear();
    }
}

impl DisplaySink for RecordingSink {
    fn show(&mut self, field: DisplayField, text: &str) {
        self.updates.push((field, text.to_string()));
    }
}
