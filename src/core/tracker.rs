//! Glue between the timer state machine, the weather provider and the
//! session store: finalizing a stopped timer into a persisted session.

use crate::core::timer::StudyTimer;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::subject::Subject;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_hms;
use crate::weather::WeatherService;

pub struct SessionTracker<'a> {
    pub timer: StudyTimer,
    pub subject: Subject,
    pub location: String,
    pool: &'a mut DbPool,
    weather: &'a mut WeatherService,
}

impl<'a> SessionTracker<'a> {
    pub fn new(
        pool: &'a mut DbPool,
        weather: &'a mut WeatherService,
        subject: Subject,
        location: String,
    ) -> Self {
        Self {
            timer: StudyTimer::new(),
            subject,
            location,
            pool,
            weather,
        }
    }

    pub fn start(&mut self) -> AppResult<()> {
        self.timer.start()
    }

    /// Stop the timer and attempt to persist the accumulated interval.
    /// Returns the new session id, or `None` when nothing was saved
    /// (zero accumulated time).
    pub fn stop(&mut self) -> AppResult<Option<i64>> {
        self.timer.stop();
        self.finalize()
    }

    /// Reset: finalize any in-progress interval first (so tracked time is
    /// offered for saving), then return the timer to zero.
    pub fn reset(&mut self) -> AppResult<Option<i64>> {
        self.timer.stop();
        let saved = self.finalize();
        self.timer.clear();
        saved
    }

    pub fn display(&self) -> String {
        self.timer.display()
    }

    /// Persist the accumulated time as a session. The accumulator clears
    /// once the save attempt has run, success or not: the session boundary
    /// closed when the timer stopped, and a retry must not double-count.
    fn finalize(&mut self) -> AppResult<Option<i64>> {
        let secs = self.timer.take_elapsed().as_secs() as i64;

        if secs == 0 {
            warning("Nothing to save: no time tracked.");
            return Ok(None);
        }

        let condition = self.weather.snapshot_condition();

        match queries::save_session(
            self.pool,
            secs,
            self.subject.name(),
            &condition,
            &self.location,
        ) {
            Ok(id) => {
                success(format!(
                    "Session saved: {} ({}, {})",
                    format_hms(secs),
                    self.subject.name(),
                    condition
                ));
                if let Err(e) = ttlog(
                    &self.pool.conn,
                    "session_saved",
                    self.subject.name(),
                    &format!("Saved {} session of {}", self.subject.name(), format_hms(secs)),
                ) {
                    warning(format!("Failed to write internal log: {}", e));
                }
                Ok(Some(id))
            }
            Err(e) => {
                warning(format!(
                    "Session not saved: {} of tracked time was discarded.",
                    format_hms(secs)
                ));
                Err(e)
            }
        }
    }
}
