use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{FishSample, Location, SoundRecording, TrapData};
use crate::labels::Labels;

/// One field visit at a single [`Location`].
///
/// Samples, recordings and photos are append-only and keep insertion order.
/// Accessors hand out slices so callers cannot reorder or drop entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    date: NaiveDateTime,
    weather: String,
    water_temp: f64,
    observer: String,
    location: Location,
    fish_samples: Vec<FishSample>,
    sound_recordings: Vec<SoundRecording>,
    trap_data: Option<TrapData>,
    photos: Vec<String>,
}

impl Observation {
    pub fn new(
        date: NaiveDateTime,
        weather: impl Into<String>,
        water_temp: f64,
        observer: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            date,
            weather: weather.into(),
            water_temp,
            observer: observer.into(),
            location,
            fish_samples: Vec::new(),
            sound_recordings: Vec::new(),
            trap_data: None,
            photos: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn weather(&self) -> &str {
        &self.weather
    }

    pub fn water_temp(&self) -> f64 {
        self.water_temp
    }

    pub fn observer(&self) -> &str {
        &self.observer
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }

    pub fn record_data(&mut self, sample: FishSample) {
        debug!(species = sample.species(), length = sample.length(), "Fish sample recorded");
        self.fish_samples.push(sample);
    }

    pub fn add_sound_recording(&mut self, recording: SoundRecording) {
        debug!(
            format = recording.file_format(),
            duration = recording.duration(),
            "Sound recording added"
        );
        self.sound_recordings.push(recording);
    }

    /// Keeps the photo paths on the observation and logs the listing.
    pub fn attach_photos<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.photos.len();
        self.photos.extend(paths.into_iter().map(Into::into));

        let listing = self.photos[start..].join(", ");
        info!(count = self.photos.len() - start, photos = %listing, "Photos attached");
    }

    /// Renders the attached photos as `<label>: a.jpg, b.jpg`.
    pub fn photo_listing(&self, labels: &Labels) -> String {
        format!("{}: {}", labels.photos_attached, self.photos.join(", "))
    }

    pub fn set_trap_data(&mut self, trap: TrapData) {
        self.trap_data = Some(trap);
    }

    pub fn trap_data(&self) -> Option<&TrapData> {
        self.trap_data.as_ref()
    }

    pub fn trap_data_mut(&mut self) -> Option<&mut TrapData> {
        self.trap_data.as_mut()
    }

    pub fn fish_samples(&self) -> &[FishSample] {
        &self.fish_samples
    }

    pub fn sound_recordings(&self) -> &[SoundRecording] {
        &self.sound_recordings
    }

    /// Mutable access to each recording without exposing the backing list.
    pub fn sound_recordings_mut(&mut self) -> impl Iterator<Item = &mut SoundRecording> {
        self.sound_recordings.iter_mut()
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 12)
            .unwrap()
            .and_hms_opt(7, 15, 0)
            .unwrap()
    }

    fn observation() -> Observation {
        Observation::new(
            morning(),
            "Sunny",
            18.5,
            "Dr. Smith",
            Location::new("Point A", 40.5678, 39.8765, 15.5),
        )
    }

    #[test]
    fn test_new_observation_is_empty() {
        let obs = observation();

        assert!(obs.fish_samples().is_empty());
        assert!(obs.sound_recordings().is_empty());
        assert!(obs.photos().is_empty());
        assert!(obs.trap_data().is_none());
        assert_eq!(obs.observer(), "Dr. Smith");
        assert_eq!(obs.weather(), "Sunny");
        assert_eq!(obs.water_temp(), 18.5);
    }

    #[test]
    fn test_record_data_keeps_order() {
        let mut obs = observation();
        obs.record_data(FishSample::new("Trout", 25.5, 500.0, "Active swimming"));
        obs.record_data(FishSample::new("Pike", 48.0, 900.0, "Ambush"));
        obs.record_data(FishSample::new("Trout", 22.0, 410.0, "Schooling"));

        let species: Vec<_> = obs.fish_samples().iter().map(|s| s.species()).collect();
        assert_eq!(species, vec!["Trout", "Pike", "Trout"]);
    }

    #[test]
    fn test_add_sound_recording_keeps_order() {
        let mut obs = observation();
        obs.add_sound_recording(SoundRecording::new(morning(), "WAV", 120));
        obs.add_sound_recording(SoundRecording::new(morning(), "FLAC", 30));

        let formats: Vec<_> = obs
            .sound_recordings()
            .iter()
            .map(|r| r.file_format())
            .collect();
        assert_eq!(formats, vec!["WAV", "FLAC"]);
    }

    #[test]
    fn test_analyze_through_mutable_iterator() {
        let mut obs = observation();
        obs.add_sound_recording(SoundRecording::new(morning(), "WAV", 120));
        obs.add_sound_recording(SoundRecording::new(morning(), "WAV", 60));

        for rec in obs.sound_recordings_mut() {
            rec.analyze_sound();
        }

        assert!(obs.sound_recordings().iter().all(|r| r.is_analyzed()));
        assert_eq!(obs.sound_recordings().len(), 2);
    }

    #[test]
    fn test_attach_photos_stores_paths() {
        let mut obs = observation();
        obs.attach_photos(["trout_1.jpg", "trout_2.jpg"]);
        obs.attach_photos(vec!["site.png".to_string()]);

        assert_eq!(obs.photos(), ["trout_1.jpg", "trout_2.jpg", "site.png"]);
        assert_eq!(
            obs.photo_listing(&Labels::default()),
            "Photos attached: trout_1.jpg, trout_2.jpg, site.png"
        );
    }

    #[test]
    fn test_trap_data_is_optional() {
        let mut obs = observation();
        obs.set_trap_data(TrapData::new("Fyke net", morning()));

        if let Some(trap) = obs.trap_data_mut() {
            trap.record_catch(10, morning() + Duration::hours(5));
        }

        assert_eq!(obs.trap_data().unwrap().calculate_efficiency(), 2.0);
    }

    #[test]
    fn test_location_can_be_updated_in_place() {
        let mut obs = observation();
        obs.location_mut().update_location(40.6, 39.9, 12.0);

        assert_eq!(obs.location().coordinates(), (40.6, 39.9));
        assert_eq!(obs.location().depth(), 12.0);
    }
}
