//! Study-level aggregation: the summary report, species trends and the
//! per-species size profile.
//!
//! Nothing here is cached. Every figure is recomputed from the observations
//! on each call.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use tracing::debug;

use crate::field::{Observation, SizeCategory};
use crate::labels::Labels;

/// Species counts keyed by name, in order of first occurrence.
///
/// Serializes as a map so JSON output reads `{"Trout": 2, "Pike": 1}`.
#[derive(Clone, Default, PartialEq)]
pub struct SpeciesDistribution(Vec<(String, usize)>);

impl SpeciesDistribution {
    pub fn increment(&mut self, species: &str) {
        match self.0.iter_mut().find(|(name, _)| name == species) {
            Some((_, count)) => *count += 1,
            None => self.0.push((species.to_string(), 1)),
        }
    }

    pub fn get(&self, species: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(name, _)| name == species)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of samples counted.
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, count)| count).sum()
    }
}

impl fmt::Debug for SpeciesDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for SpeciesDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Result of [`FishStudy::analyze_trends`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trends {
    pub species_distribution: SpeciesDistribution,
    pub observation_count: usize,
}

/// Totals behind the study report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudySummary {
    pub project_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_observations: usize,
    pub total_samples: usize,
    pub total_recordings: usize,
}

impl StudySummary {
    pub fn render(&self, labels: &Labels) -> String {
        format!(
            "{}: {}\n{}: {} - {}\n{}: {}\n{}: {}\n{}: {}\n",
            labels.report_title,
            self.project_name,
            labels.period,
            self.start_date,
            self.end_date,
            labels.total_observations,
            self.total_observations,
            labels.total_samples,
            self.total_samples,
            labels.total_recordings,
            self.total_recordings,
        )
    }
}

/// Length statistics for one species across the whole study.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesSize {
    pub species: String,
    pub samples: usize,
    pub mean_length: f64,
    pub stddev_length: f64,
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

fn mean_length(lengths: &[f64]) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }
    lengths.iter().sum::<f64>() / lengths.len() as f64
}

/// Population standard deviation of `lengths` around `avg`.
fn length_stddev(lengths: &[f64], avg: f64) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }
    let n = lengths.len() as f64;
    (lengths.iter().map(|l| (l - avg).powi(2)).sum::<f64>() / n).sqrt()
}

/// A named project collecting observations over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishStudy {
    project_name: String,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    observations: Vec<Observation>,
}

impl FishStudy {
    pub fn new(
        project_name: impl Into<String>,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            start_date,
            end_date,
            observations: Vec::new(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn observations_mut(&mut self) -> impl Iterator<Item = &mut Observation> {
        self.observations.iter_mut()
    }

    /// Appends an observation. The same visit may be added more than once.
    pub fn add_observation(&mut self, observation: Observation) {
        debug!(
            project = %self.project_name,
            samples = observation.fish_samples().len(),
            recordings = observation.sound_recordings().len(),
            "Observation added"
        );
        self.observations.push(observation);
    }

    pub fn summary(&self) -> StudySummary {
        let total_samples = self
            .observations
            .iter()
            .map(|obs| obs.fish_samples().len())
            .sum();
        let total_recordings = self
            .observations
            .iter()
            .map(|obs| obs.sound_recordings().len())
            .sum();

        StudySummary {
            project_name: self.project_name.clone(),
            start_date: self.start_date.date(),
            end_date: self.end_date.date(),
            total_observations: self.observations.len(),
            total_samples,
            total_recordings,
        }
    }

    pub fn generate_report(&self, labels: &Labels) -> String {
        self.summary().render(labels)
    }

    pub fn analyze_trends(&self) -> Trends {
        let mut species_distribution = SpeciesDistribution::default();

        for sample in self.observations.iter().flat_map(|obs| obs.fish_samples()) {
            species_distribution.increment(sample.species());
        }

        debug!(
            species = species_distribution.len(),
            samples = species_distribution.total(),
            "Trends computed"
        );

        Trends {
            species_distribution,
            observation_count: self.observations.len(),
        }
    }

    /// Per-species length statistics, in order of first occurrence.
    pub fn size_profile(&self) -> Vec<SpeciesSize> {
        let mut lengths: Vec<(&str, Vec<f64>)> = Vec::new();

        for sample in self.observations.iter().flat_map(|obs| obs.fish_samples()) {
            match lengths.iter_mut().find(|(name, _)| *name == sample.species()) {
                Some((_, series)) => series.push(sample.length()),
                None => lengths.push((sample.species(), vec![sample.length()])),
            }
        }

        lengths
            .into_iter()
            .map(|(species, series)| {
                let avg = mean_length(&series);
                let count_of = |category: SizeCategory| {
                    series
                        .iter()
                        .filter(|l| SizeCategory::from_length(**l) == category)
                        .count()
                };

                SpeciesSize {
                    species: species.to_string(),
                    samples: series.len(),
                    mean_length: avg,
                    stddev_length: length_stddev(&series, avg),
                    small: count_of(SizeCategory::Small),
                    medium: count_of(SizeCategory::Medium),
                    large: count_of(SizeCategory::Large),
                }
            })
            .collect()
    }
}
