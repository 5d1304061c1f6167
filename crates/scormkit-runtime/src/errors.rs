//! Bridge-internal failure taxonomy.
//!
//! None of these ever cross the frame boundary: every public bridge entry
//! point maps them to the string failure result `"false"` (or the empty
//! string for reads) and a logged diagnostic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    /// No API object was found within the frame-walk bound.
    #[error("no SCORM API available in the page hierarchy")]
    ApiUnavailable,

    /// An LMS write was attempted before the session was initialized.
    #[error("LMS write to `{field}` before session initialization")]
    WriteBeforeInit { field: String },
}
