//! Message contracts shared by both sides of the frame boundary.
//!
//! The embedded content and the SCORM host page cannot share memory; the
//! only channel between them is asynchronous, untyped message passing.
//! This crate pins down the shapes that cross that boundary:
//!
//! - [`Command`]: content -> host page (init, score, status, finish, ...)
//! - [`Reply`]: host page -> content (the student identity snapshot)
//! - [`WireMessage`]: the raw encoded form either side actually receives
//!
//! Decoding is total and forgiving: unknown payloads decode to `None` and
//! are dropped by the receiver without error. Nothing here touches the LMS.

pub mod cmi;
pub mod command;
pub mod reply;
pub mod status;
pub mod wire;

pub use command::Command;
pub use reply::{Reply, StudentInfo};
pub use status::LessonStatus;
pub use wire::WireMessage;
