//! The raw message shapes a frame boundary delivers.

use serde_json::Value;

/// A message as it arrives from the other side of the frame boundary:
/// either a bare string token or a structured JSON object.
///
/// The legacy command tokens (`"setScore:42"`, `"markFinished"`, ...) use
/// the text form; readiness announcements and identity replies use the
/// object form.
#[derive(Debug, Clone, PartialEq)]
pub enum WireMessage {
    Text(String),
    Object(Value),
}

impl WireMessage {
    pub fn text(s: impl Into<String>) -> Self {
        WireMessage::Text(s.into())
    }

    pub fn object(value: Value) -> Self {
        WireMessage::Object(value)
    }
}
