use serde::{Deserialize, Serialize};

/// Size class of a captured fish, derived from its length alone.
///
/// | Length (cm) | Category |
/// |-------------|----------|
/// | < 10        | small    |
/// | < 30        | medium   |
/// | >= 30       | large    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub fn from_length(length: f64) -> Self {
        match length {
            l if l < 10.0 => SizeCategory::Small,
            l if l < 30.0 => SizeCategory::Medium,
            _ => SizeCategory::Large,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
        }
    }
}

/// Metrics derived from a single [`FishSample`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleMetrics {
    pub length_weight_ratio: f64,
    pub size_category: SizeCategory,
}

/// A captured fish. Length is in centimeters, weight in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishSample {
    species: String,
    length: f64,
    weight: f64,
    behavior: String,
}

impl FishSample {
    pub fn new(
        species: impl Into<String>,
        length: f64,
        weight: f64,
        behavior: impl Into<String>,
    ) -> Self {
        Self {
            species: species.into(),
            length,
            weight,
            behavior: behavior.into(),
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn behavior(&self) -> &str {
        &self.behavior
    }

    /// Length/weight ratio is 0 for a zero weight.
    pub fn calculate_metrics(&self) -> SampleMetrics {
        let length_weight_ratio = if self.weight != 0.0 {
            self.length / self.weight
        } else {
            0.0
        };

        SampleMetrics {
            length_weight_ratio,
            size_category: SizeCategory::from_length(self.length),
        }
    }

    pub fn classify_species(&self) -> String {
        format!(
            "Classification for {} based on L:{:.2}cm, W:{:.2}g",
            self.species, self.length, self.weight
        )
    }
}
