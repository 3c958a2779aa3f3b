use crate::models::session::StudySession;
use csv::Writer;
use std::path::Path;

/// Write sessions as CSV, one row per session.
pub fn write_csv(path: &Path, sessions: &[StudySession]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "start_time",
        "end_time",
        "duration",
        "subject",
        "weather_condition",
        "location",
    ])?;

    for s in sessions {
        wtr.write_record(&[
            s.id.to_string(),
            s.start_str(),
            s.end_str(),
            s.duration_secs.to_string(),
            s.subject.name().to_string(),
            s.weather_condition.clone(),
            s.location.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
