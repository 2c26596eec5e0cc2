//! Display strings for reports.
//!
//! Report layout is fixed; only the label text changes between locales.
//! A label file is a plain JSON object, any key left out falls back to
//! the English text:
//! ```json
//! {
//!   "report_title": "Rapport d'étude",
//!   "period": "Période"
//! }
//! ```

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Built-in label sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub report_title: String,
    pub period: String,
    pub total_observations: String,
    pub total_samples: String,
    pub total_recordings: String,
    pub photos_attached: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::En)
    }
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                report_title: "Study Report".into(),
                period: "Period".into(),
                total_observations: "Total observations".into(),
                total_samples: "Total samples".into(),
                total_recordings: "Total recordings".into(),
                photos_attached: "Photos attached".into(),
            },
            Locale::Fr => Self {
                report_title: "Rapport d'étude".into(),
                period: "Période".into(),
                total_observations: "Nombre total d'observations".into(),
                total_samples: "Nombre total d'échantillons".into(),
                total_recordings: "Nombre total d'enregistrements".into(),
                photos_attached: "Photos jointes".into(),
            },
        }
    }

    /// Loads a label table from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read label file '{path}'"))?;
        Self::from_json(&content).with_context(|| format!("invalid label file '{path}'"))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
