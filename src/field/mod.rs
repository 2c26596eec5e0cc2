//! Field data recorded during a site visit.
//!
//! An [`Observation`] owns everything captured on one visit: the
//! [`Location`], the [`FishSample`]s and [`SoundRecording`]s taken there,
//! and an optional [`TrapData`] deployment.

pub mod location;
pub mod observation;
pub mod recording;
pub mod sample;
pub mod trap;

pub use location::Location;
pub use observation::Observation;
pub use recording::{SoundAnalysis, SoundRecording};
pub use sample::{FishSample, SampleMetrics, SizeCategory};
pub use trap::TrapData;
