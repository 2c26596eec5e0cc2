use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A trap deployment and the catch recorded when it was checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapData {
    trap_type: String,
    set_time: NaiveDateTime,
    check_time: Option<NaiveDateTime>,
    catch_count: u32,
}

impl TrapData {
    pub fn new(trap_type: impl Into<String>, set_time: NaiveDateTime) -> Self {
        Self {
            trap_type: trap_type.into(),
            set_time,
            check_time: None,
            catch_count: 0,
        }
    }

    pub fn trap_type(&self) -> &str {
        &self.trap_type
    }

    pub fn set_time(&self) -> NaiveDateTime {
        self.set_time
    }

    pub fn check_time(&self) -> Option<NaiveDateTime> {
        self.check_time
    }

    pub fn catch_count(&self) -> u32 {
        self.catch_count
    }

    /// Replaces any previous catch. Counts do not accumulate.
    pub fn record_catch(&mut self, count: u32, check_time: NaiveDateTime) {
        self.catch_count = count;
        self.check_time = Some(check_time);
    }

    /// Whole hours between setting and checking the trap, truncated toward zero.
    pub fn hours_deployed(&self) -> Option<i64> {
        self.check_time.map(|check| (check - self.set_time).num_hours())
    }

    /// Catches per deployed hour. Returns 0.0 when the trap was never checked
    /// or was checked within the first hour.
    pub fn calculate_efficiency(&self) -> f64 {
        match self.hours_deployed() {
            Some(hours) if hours > 0 => self.catch_count as f64 / hours as f64,
            _ => 0.0,
        }
    }
}
