use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Result of [`SoundRecording::analyze_sound`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundAnalysis {
    pub duration: u32,
    pub format: String,
}

/// Metadata for an underwater audio capture. Duration is in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundRecording {
    timestamp: NaiveDateTime,
    file_format: String,
    duration: u32,
    analyzed: bool,
}

impl SoundRecording {
    pub fn new(timestamp: NaiveDateTime, file_format: impl Into<String>, duration: u32) -> Self {
        Self {
            timestamp,
            file_format: file_format.into(),
            duration,
            analyzed: false,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn file_format(&self) -> &str {
        &self.file_format
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn is_analyzed(&self) -> bool {
        self.analyzed
    }

    /// Marks the recording as analyzed and returns its basic properties.
    pub fn analyze_sound(&mut self) -> SoundAnalysis {
        self.analyzed = true;
        SoundAnalysis {
            duration: self.duration,
            format: self.file_format.clone(),
        }
    }

    /// Timestamp is always rendered to whole seconds as `YYYY-MM-DDTHH:MM:SS`.
    pub fn export_data(&self) -> String {
        format!(
            "Recording from {} - Duration: {}s",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            self.duration
        )
    }
}
