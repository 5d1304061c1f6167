//! The LMS-side contract the bridge consumes.

use std::cell::RefCell;
use std::rc::Rc;

/// Bool-like string result the SCORM 1.2 RTE returns.
pub const TRUE: &str = "true";
/// Bool-like string failure result.
pub const FALSE: &str = "false";

/// The SCORM 1.2 Run-Time Environment surface.
///
/// Four required entry points plus the optional Commit. Results are the
/// bool-like strings the RTE defines (`"true"` / `"false"`); `get_value`
/// returns the stored string, empty when the field is unset.
///
/// Calls are synchronous foreign calls modeled as instantaneous
/// completions; there is no timeout or cancellation.
pub trait LmsApi {
    fn initialize(&mut self, arg: &str) -> String;
    fn finish(&mut self, arg: &str) -> String;
    fn set_value(&mut self, field: &str, value: &str) -> String;
    fn get_value(&mut self, field: &str) -> String;

    /// Whether the API exposes the optional Commit entry point.
    fn has_commit(&self) -> bool {
        false
    }

    fn commit(&mut self, _arg: &str) -> String {
        TRUE.to_string()
    }
}

/// A discovered API handle. The page model is single-threaded, so shared
/// ownership without locking is sound.
pub type SharedApi = Rc<RefCell<dyn LmsApi>>;

/// Wrap an API implementation for placement in a [`Frame`].
///
/// [`Frame`]: crate::frame::Frame
pub fn shared<A: LmsApi + 'static>(api: A) -> SharedApi {
    Rc::new(RefCell::new(api))
}

/// Whether an RTE result string reports success.
pub fn is_truthy(result: &str) -> bool {
    result == TRUE
}
