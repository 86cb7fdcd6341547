//! Tri-state guard for long-running operations.

use serde::{Deserialize, Serialize};

/// Progress of an operation that runs outside the store.
///
/// Acts as a single-slot guard: while a flag is `InProgress`, every request
/// other than `Done` is absorbed, so at most one instance of the guarded
/// operation is ever underway.
///
/// ```text
/// Idle ──→ InProgress ──→ Done
///   ↑          │ ↺          │
///   └──────────┴────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFlag {
    #[default]
    Idle,
    InProgress,
    Done,
}

impl TaskFlag {
    /// Apply a requested value, returning the flag that results.
    pub fn request(self, value: TaskFlag) -> TaskFlag {
        if self.accepts(value) {
            value
        } else {
            self
        }
    }

    /// Whether `value` would be taken rather than ignored.
    pub fn accepts(self, value: TaskFlag) -> bool {
        !(self == TaskFlag::InProgress && value != TaskFlag::Done)
    }

    pub fn is_in_progress(self) -> bool {
        self == TaskFlag::InProgress
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskFlag::Idle => "idle",
            TaskFlag::InProgress => "in progress",
            TaskFlag::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(TaskFlag::default(), TaskFlag::Idle);
    }

    #[test]
    fn idle_accepts_any_request() {
        assert_eq!(TaskFlag::Idle.request(TaskFlag::InProgress), TaskFlag::InProgress);
        assert_eq!(TaskFlag::Idle.request(TaskFlag::Done), TaskFlag::Done);
    }

    #[test]
    fn in_progress_absorbs_everything_but_done() {
        let flag = TaskFlag::InProgress;
        assert_eq!(flag.request(TaskFlag::InProgress), TaskFlag::InProgress);
        assert_eq!(flag.request(TaskFlag::Idle), TaskFlag::InProgress);
        assert_eq!(flag.request(TaskFlag::Done), TaskFlag::Done);
    }

    #[test]
    fn done_can_restart() {
        assert_eq!(TaskFlag::Done.request(TaskFlag::InProgress), TaskFlag::InProgress);
        assert_eq!(TaskFlag::Done.request(TaskFlag::Idle), TaskFlag::Idle);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&TaskFlag::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
