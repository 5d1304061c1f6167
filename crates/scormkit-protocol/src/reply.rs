//! Host page -> content replies.

use crate::wire::WireMessage;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Student identity as read back from the LMS.
///
/// An immutable snapshot: each identity reply replaces the whole value,
/// fields are never merged individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub id: String,
    pub name: String,
}

/// A reply the host page sends back into the content frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    StudentInfo(StudentInfo),
}

impl Reply {
    /// Decode an inbound object message. Anything that is not a known
    /// reply shape yields `None`.
    pub fn decode(msg: &WireMessage) -> Option<Reply> {
        let WireMessage::Object(value) = msg else {
            return None;
        };
        if value.get("type")?.as_str()? != "studentInfo" {
            return None;
        }
        Some(Reply::StudentInfo(StudentInfo {
            id: value.get("id")?.as_str()?.to_string(),
            name: value.get("name")?.as_str()?.to_string(),
        }))
    }

    pub fn encode(&self) -> WireMessage {
        match self {
            Reply::StudentInfo(info) => WireMessage::object(json!({
                "type": "studentInfo",
                "id": info.id,
                "name": info.name,
            })),
        }
    }
}
