//! Content -> host page commands.

use crate::status::LessonStatus;
use crate::wire::WireMessage;
use serde_json::json;

/// A command the embedded content sends to the SCORM host page.
///
/// Every inbound message decodes to exactly one variant or to `None`;
/// dispatching over this enum keeps the handler exhaustive.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Ask the host page to initialize the LMS session.
    Init,
    /// Report a raw score on the 0..=100 scale.
    SetScore(i32),
    /// Write a lesson status token.
    SetStatus(LessonStatus),
    /// Legacy shorthand for `SetStatus(Completed)`.
    SetStatusCompleted,
    /// Write a resume bookmark (`cmi.core.lesson_location`).
    SetLocation(String),
    /// Ask the host page to close the LMS session.
    Finish,
    /// Ask for the student identity snapshot.
    RequestStudentInfo,
    /// Announce that the content frame is ready to receive replies.
    ContentReady,
}

impl Command {
    /// Decode an inbound message. Unknown payloads, non-numeric scores and
    /// unknown status tokens all yield `None`; the caller drops them.
    pub fn decode(msg: &WireMessage) -> Option<Command> {
        match msg {
            WireMessage::Object(value) => {
                (value.get("type")?.as_str()? == "unityReady").then_some(Command::ContentReady)
            }
            WireMessage::Text(text) => match text.as_str() {
                "initSCORM" => Some(Command::Init),
                "setStatusCompleted" => Some(Command::SetStatusCompleted),
                "markFinished" => Some(Command::Finish),
                "requestStudentInfo" => Some(Command::RequestStudentInfo),
                other => {
                    if let Some(raw) = other.strip_prefix("setScore:") {
                        raw.trim().parse::<i32>().ok().map(Command::SetScore)
                    } else if let Some(token) = other.strip_prefix("setStatus:") {
                        LessonStatus::parse(token).map(Command::SetStatus)
                    } else if let Some(bookmark) = other.strip_prefix("setLocation:") {
                        Some(Command::SetLocation(bookmark.to_string()))
                    } else {
                        None
                    }
                }
            },
        }
    }

    /// Encode for transmission. `decode(encode(cmd)) == Some(cmd)` for
    /// every variant.
    pub fn encode(&self) -> WireMessage {
        match self {
            Command::Init => WireMessage::text("initSCORM"),
            Command::SetScore(score) => WireMessage::text(format!("setScore:{score}")),
            Command::SetStatus(status) => WireMessage::text(format!("setStatus:{status}")),
            Command::SetStatusCompleted => WireMessage::text("setStatusCompleted"),
            Command::SetLocation(bookmark) => WireMessage::text(format!("setLocation:{bookmark}")),
            Command::Finish => WireMessage::text("markFinished"),
            Command::RequestStudentInfo => WireMessage::text("requestStudentInfo"),
            Command::ContentReady => WireMessage::object(json!({ "type": "unityReady" })),
        }
    }
}
