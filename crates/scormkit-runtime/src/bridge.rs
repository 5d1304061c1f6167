//! The SCORM runtime bridge: session state machine and command dispatch.

use crate::api::{is_truthy, SharedApi, FALSE, TRUE};
use crate::errors::ProtocolError;
use crate::frame::{find_api, Frame};
use scormkit_protocol::{cmi, Command, LessonStatus, Reply, StudentInfo, WireMessage};
use std::rc::{Rc, Weak};
use tracing::{debug, info, warn};

/// Pass/fail threshold applied when a raw score is written.
const PASSING_SCORE: i32 = 50;

/// Receives replies addressed to the content frame.
///
/// Implemented by whatever stands in for the content window on this side
/// of the boundary (in-process: the content mailbox).
pub trait ReplySink {
    fn deliver(&self, reply: Reply);
}

/// One SCORM session for one page lifetime.
///
/// Explicitly constructed by the page's composition root and handed to
/// whoever needs it; there is no global accessor. The session survives
/// `finish()` — finishing clears the initialized flag so a later
/// [`initialize`](Bridge::initialize) can run the full sequence again.
pub struct Bridge {
    window: Rc<Frame>,
    api: Option<SharedApi>,
    initialized: bool,
    /// Most recently announced content frame. Non-owning: the sink may be
    /// dropped at any time, in which case replies are logged and dropped.
    content: Option<Weak<dyn ReplySink>>,
}

impl Bridge {
    pub fn new(window: Rc<Frame>) -> Self {
        Bridge {
            window,
            api: None,
            initialized: false,
            content: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Resolve the API handle, running discovery when nothing is cached.
    ///
    /// Only a successful discovery is cached; a cached handle is never
    /// re-searched, even if later calls through it fail.
    fn api(&mut self) -> Option<SharedApi> {
        if self.api.is_none() {
            self.api = find_api(&self.window);
            if self.api.is_none() {
                warn!("unable to find SCORM API");
            }
        }
        self.api.clone()
    }

    /// Initialize the LMS session.
    ///
    /// A no-op returning `"true"` when already initialized. Otherwise the
    /// raw LMS result is returned, and the session becomes initialized iff
    /// the LMS reported success.
    pub fn initialize(&mut self) -> String {
        if self.initialized {
            return TRUE.to_string();
        }
        let Some(api) = self.api() else {
            return FALSE.to_string();
        };
        let result = api.borrow_mut().initialize("");
        self.initialized = is_truthy(&result);
        debug!(result = %result, "lms initialize");
        result
    }

    /// Close the LMS session.
    ///
    /// The initialized flag is cleared no matter what the LMS answers, so
    /// a subsequent session can re-initialize from scratch.
    pub fn finish(&mut self) -> String {
        let Some(api) = self.api() else {
            return FALSE.to_string();
        };
        let result = api.borrow_mut().finish("");
        self.initialized = false;
        debug!(result = %result, "lms finish");
        result
    }

    /// Write one CMI field, committing afterwards when the API supports it.
    ///
    /// Writes require an initialized session; the initialize call itself is
    /// the only LMS call allowed beforehand. Violations degrade to `"false"`.
    pub fn set_value(&mut self, field: &str, value: &str) -> String {
        match self.checked_set_value(field, value) {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "set_value degraded to failure");
                FALSE.to_string()
            }
        }
    }

    fn checked_set_value(&mut self, field: &str, value: &str) -> Result<String, ProtocolError> {
        let api = self.api().ok_or(ProtocolError::ApiUnavailable)?;
        if !self.initialized {
            return Err(ProtocolError::WriteBeforeInit {
                field: field.to_string(),
            });
        }
        let result = api.borrow_mut().set_value(field, value);
        if api.borrow().has_commit() {
            let committed = api.borrow_mut().commit("");
            if !is_truthy(&committed) {
                // Commit failures are logged, never escalated.
                warn!(field, "lms commit failed");
            }
        }
        debug!(field, value, result = %result, "lms set_value");
        Ok(result)
    }

    /// Read one CMI field. Guarded only by API availability; returns the
    /// empty string when no API is reachable.
    pub fn get_value(&mut self, field: &str) -> String {
        let Some(api) = self.api() else {
            warn!(field, "get_value without SCORM API");
            return String::new();
        };
        let value = api.borrow_mut().get_value(field);
        debug!(field, value = %value, "lms get_value");
        value
    }

    /// Decode and dispatch one inbound message.
    ///
    /// `origin` identifies the sender's frame when the channel can supply
    /// it; only readiness announcements use it. Messages that do not
    /// decode to a command are dropped silently.
    pub fn handle_message(&mut self, msg: &WireMessage, origin: Option<&Rc<dyn ReplySink>>) {
        let Some(cmd) = Command::decode(msg) else {
            debug!("ignoring unrecognized message");
            return;
        };
        self.dispatch(cmd, origin);
    }

    /// Exhaustive dispatch over the command variants.
    pub fn dispatch(&mut self, cmd: Command, origin: Option<&Rc<dyn ReplySink>>) {
        match cmd {
            Command::Init => {
                self.initialize();
            }
            Command::SetScore(score) => self.write_score(score),
            Command::SetStatus(status) => {
                self.set_value(cmi::LESSON_STATUS, status.as_token());
            }
            Command::SetStatusCompleted => {
                self.set_value(cmi::LESSON_STATUS, LessonStatus::Completed.as_token());
            }
            Command::SetLocation(bookmark) => {
                self.set_value(cmi::LESSON_LOCATION, &bookmark);
            }
            Command::Finish => {
                self.finish();
            }
            Command::RequestStudentInfo => self.send_student_info(),
            Command::ContentReady => self.register_content(origin),
        }
    }

    /// Record the announcing content frame for future replies.
    ///
    /// Idempotent: each announcement simply overwrites the previous
    /// reference. Touches no LMS state.
    fn register_content(&mut self, origin: Option<&Rc<dyn ReplySink>>) {
        match origin {
            Some(sink) => {
                self.content = Some(Rc::downgrade(sink));
                info!("content frame registered with the bridge");
            }
            None => debug!("readiness announcement without an origin frame"),
        }
    }

    /// Write the raw score plus the derived pass/fail status.
    ///
    /// Four sequential writes; they are not atomic, and a failure partway
    /// through leaves the earlier fields as already written.
    fn write_score(&mut self, score: i32) {
        self.set_value(cmi::SCORE_MIN, "0");
        self.set_value(cmi::SCORE_MAX, "100");
        self.set_value(cmi::SCORE_RAW, &score.to_string());
        let status = if score >= PASSING_SCORE {
            LessonStatus::Passed
        } else {
            LessonStatus::Failed
        };
        self.set_value(cmi::LESSON_STATUS, status.as_token());
    }

    /// Read the student identity and reply to the registered content frame.
    ///
    /// With no live registration the reply is logged and dropped — it is
    /// not queued or retried.
    fn send_student_info(&mut self) {
        let id = self.get_value(cmi::STUDENT_ID);
        let name = self.get_value(cmi::STUDENT_NAME);
        match self.content.as_ref().and_then(Weak::upgrade) {
            Some(sink) => {
                sink.deliver(Reply::StudentInfo(StudentInfo { id, name }));
                debug!("student info sent to the content frame");
            }
            None => info!("content frame not yet available for the student info reply"),
        }
    }
}
