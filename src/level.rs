// Severity levels for the logging facility

use serde::{Deserialize, Serialize};

/// Log severity levels
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Developer-facing messages (debugging). Gated by the global trace
    /// switch in addition to per-group enablement.
    Trace = 0,
    /// Operator-facing messages (logins, requests, failures). Never gated
    /// by the trace switch.
    Info = 1,
}

impl Level {
    /// Get level name as static string
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Info => "INFO",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Trace), "TRACE");
        assert_eq!(format!("{}", Level::Info), "INFO");
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Info);
    }

    #[test]
    fn test_level_serde_round_trip() {
        let json = serde_json::to_string(&Level::Trace).unwrap();
        assert_eq!(json, "\"Trace\"");
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Level::Trace);
    }
}
