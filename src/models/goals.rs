use serde::Serialize;

/// User-configured study targets, in seconds. Singleton record: there is
/// at most one logical row and every save fully replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StudyGoals {
    pub daily_secs: i64,
    pub weekly_secs: i64,
}

impl StudyGoals {
    pub fn new(daily_secs: i64, weekly_secs: i64) -> Self {
        Self {
            daily_secs,
            weekly_secs,
        }
    }

    pub fn is_set(&self) -> bool {
        self.daily_secs > 0 || self.weekly_secs > 0
    }
}
