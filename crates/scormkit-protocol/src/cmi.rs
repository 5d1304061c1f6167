//! SCORM 1.2 CMI data model field names consumed by this package.
//!
//! Only the score/status/location/student-identity slice of the data model
//! is covered; the rest of `cmi.*` is out of scope.

pub const SCORE_MIN: &str = "cmi.core.score.min";
pub const SCORE_MAX: &str = "cmi.core.score.max";
pub const SCORE_RAW: &str = "cmi.core.score.raw";
pub const LESSON_STATUS: &str = "cmi.core.lesson_status";
pub const LESSON_LOCATION: &str = "cmi.core.lesson_location";
pub const STUDENT_ID: &str = "cmi.core.student_id";
pub const STUDENT_NAME: &str = "cmi.core.student_name";
