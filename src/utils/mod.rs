pub mod colors;
pub mod date;
pub mod time;

pub use time::format_hms;
pub use time::parse_duration_spec;
