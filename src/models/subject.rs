use serde::Serialize;

/// The fixed set of study subjects accepted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subject {
    General,
    Math,
    Science,
    History,
    Language,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::General,
        Subject::Math,
        Subject::Science,
        Subject::History,
        Subject::Language,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subject::General => "General",
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::History => "History",
            Subject::Language => "Language",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.name()
    }

    /// Convert DB string → enum. Exact match; anything else is rejected
    /// by validation before it reaches the store.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "General" => Some(Subject::General),
            "Math" => Some(Subject::Math),
            "Science" => Some(Subject::Science),
            "History" => Some(Subject::History),
            "Language" => Some(Subject::Language),
            _ => None,
        }
    }

    /// Helper: convert input from the CLI (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.to_lowercase();
        Subject::ALL
            .iter()
            .find(|s| s.name().to_lowercase() == lower)
            .copied()
    }

    /// Comma-separated list of the valid names, for error messages.
    pub fn valid_names() -> String {
        Subject::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
