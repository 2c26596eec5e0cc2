//! The built-in survey used by the CLI: one study, one site visit, one
//! trout and one hydrophone recording.

use chrono::{NaiveDate, NaiveDateTime};

use crate::field::{FishSample, Location, Observation, SoundRecording};
use crate::study::FishStudy;

/// Builds the demo study. `now` stamps the observation and the recording.
pub fn demo_study(now: NaiveDateTime) -> FishStudy {
    let mut study = FishStudy::new("Torul Dam Study", year_start(), year_end());

    let location = Location::new("Point A", 40.5678, 39.8765, 15.5);
    let mut observation = Observation::new(now, "Sunny", 18.5, "Dr. Smith", location);

    observation.record_data(FishSample::new("Trout", 25.5, 500.0, "Active swimming"));
    observation.add_sound_recording(SoundRecording::new(now, "WAV", 120));

    study.add_observation(observation);
    study
}

fn year_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn year_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 0))
        .unwrap_or_default()
}
