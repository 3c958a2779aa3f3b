use crate::errors::{AppError, AppResult};
use crate::models::subject::Subject;

/// Validate study session parameters before any mutation.
///
/// Duration must be strictly positive and the subject must match one of
/// the five canonical names exactly. Returns the parsed subject on success.
pub fn validate_study_session(duration_secs: i64, subject: &str) -> AppResult<Subject> {
    if duration_secs <= 0 {
        return Err(AppError::Validation(
            "Duration must be a positive number".to_string(),
        ));
    }

    Subject::from_db_str(subject).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid subject '{}'. Valid options: {}",
            subject,
            Subject::valid_names()
        ))
    })
}
