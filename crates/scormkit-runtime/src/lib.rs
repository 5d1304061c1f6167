//! The SCORM runtime bridge and the content-side client.
//!
//! Two independent single-threaded execution contexts sit on either side
//! of an iframe boundary: the host page (which can reach the LMS API) and
//! the embedded content (which cannot). This crate implements both sides:
//!
//! - [`Bridge`]: discovers the SCORM 1.2 API in the page hierarchy, owns
//!   the session state machine (uninitialized -> initialized -> finished),
//!   and dispatches inbound [`Command`]s into LMS calls.
//! - [`ContentClient`]: issues commands from inside the sandbox and gates
//!   progress reports behind a monotonic high-water mark so regressive
//!   updates never reach the LMS.
//! - [`Mailbox`]: an in-process model of the asynchronous message channel,
//!   one FIFO inbox per side, drained one message at a time.
//!
//! Nothing in the bridge is fatal to the hosting page: every failure
//! degrades to the bool-like string `"false"` plus a logged diagnostic,
//! and malformed inbound messages are dropped silently.
//!
//! The composition root constructs exactly one [`Bridge`] per page and
//! calls [`Bridge::initialize`] at load time, before the content starts
//! reporting.
//!
//! [`Command`]: scormkit_protocol::Command

pub mod api;
pub mod bridge;
pub mod channel;
pub mod client;
pub mod errors;
pub mod frame;

pub use api::{LmsApi, SharedApi};
pub use bridge::{Bridge, ReplySink};
pub use channel::{Mailbox, MailboxSender};
pub use client::{CommandSender, ContentClient, IdentityDisplay};
pub use errors::ProtocolError;
pub use frame::{find_api, Frame};
