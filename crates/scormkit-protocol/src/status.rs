//! Lesson status tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `cmi.core.lesson_status` tokens this package reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Incomplete,
    Completed,
    Passed,
    Failed,
}

impl LessonStatus {
    /// The lowercase wire/CMI token.
    pub fn as_token(self) -> &'static str {
        match self {
            LessonStatus::Incomplete => "incomplete",
            LessonStatus::Completed => "completed",
            LessonStatus::Passed => "passed",
            LessonStatus::Failed => "failed",
        }
    }

    /// Parse a wire token. Unknown tokens yield `None` (the message that
    /// carried them is dropped, not errored).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "incomplete" => Some(LessonStatus::Incomplete),
            "completed" => Some(LessonStatus::Completed),
            "passed" => Some(LessonStatus::Passed),
            "failed" => Some(LessonStatus::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
