use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::task::Task;

/// Which slice of the collection is shown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Pending,
}

impl FilterMode {
    pub const ALL_MODES: [FilterMode; 3] = [FilterMode::All, FilterMode::Completed, FilterMode::Pending];

    /// Parses a mode name. Anything unrecognised falls back to `All`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "completed" => FilterMode::Completed,
            "pending" => FilterMode::Pending,
            _ => FilterMode::All,
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => task.completed,
            FilterMode::Pending => !task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Pending => "Pending",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Pending => "pending",
        }
    }

    pub fn index(self) -> usize {
        match self {
            FilterMode::All => 0,
            FilterMode::Completed => 1,
            FilterMode::Pending => 2,
        }
    }

    /// Cycles All -> Completed -> Pending -> All.
    pub fn next(self) -> Self {
        Self::ALL_MODES[(self.index() + 1) % Self::ALL_MODES.len()]
    }
}

impl From<String> for FilterMode {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskId;

    #[test]
    fn parses_known_modes_case_insensitively() {
        assert_eq!(FilterMode::parse_lenient("completed"), FilterMode::Completed);
        assert_eq!(FilterMode::parse_lenient(" Pending "), FilterMode::Pending);
        assert_eq!(FilterMode::parse_lenient("ALL"), FilterMode::All);
    }

    #[test]
    fn unknown_modes_degrade_to_all() {
        assert_eq!(FilterMode::parse_lenient("archived"), FilterMode::All);
        assert_eq!(FilterMode::parse_lenient(""), FilterMode::All);
    }

    #[test]
    fn next_cycles_through_every_mode() {
        let mut mode = FilterMode::All;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, FilterMode::All);
        assert_eq!(seen, FilterMode::ALL_MODES.to_vec());
    }

    #[test]
    fn matches_follows_completion_flag() {
        let mut task = Task::new(TaskId(1), "x");
        assert!(FilterMode::Pending.matches(&task));
        assert!(!FilterMode::Completed.matches(&task));
        task.completed = true;
        assert!(FilterMode::Completed.matches(&task));
        assert!(FilterMode::All.matches(&task));
    }

    #[test]
    fn deserializes_leniently() {
        let mode: FilterMode = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(mode, FilterMode::Pending);
        let mode: FilterMode = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(mode, FilterMode::All);
        assert_eq!(serde_json::to_string(&FilterMode::Completed).unwrap(), "\"completed\"");
    }
}
