//! Shared fake LMS for integration tests.

use scormkit_runtime::LmsApi;
use std::collections::HashMap;

/// Records every RTE call so tests can assert exact write sequences.
#[derive(Default)]
pub struct RecordingLms {
    /// `set_value` calls in order, as (field, value).
    pub writes: Vec<(String, String)>,
    /// Values served by `get_value`.
    pub values: HashMap<String, String>,
    pub initialize_calls: usize,
    pub finish_calls: usize,
    pub commit_calls: usize,
    /// When set, `initialize` reports failure.
    pub refuse_initialize: bool,
    /// When set, `finish` reports failure.
    pub refuse_finish: bool,
    /// Whether the optional Commit entry point is exposed.
    pub with_commit: bool,
    /// When set, `commit` reports failure.
    pub refuse_commit: bool,
}

impl RecordingLms {
    pub fn with_student(id: &str, name: &str) -> Self {
        let mut lms = RecordingLms::default();
        lms.values
            .insert("cmi.core.student_id".to_string(), id.to_string());
        lms.values
            .insert("cmi.core.student_name".to_string(), name.to_string());
        lms
    }
}

impl LmsApi for RecordingLms {
    fn initialize(&mut self, _arg: &str) -> String {
        self.initialize_calls += 1;
        if self.refuse_initialize { "false" } else { "true" }.to_string()
    }

    fn finish(&mut self, _arg: &str) -> String {
        self.finish_calls += 1;
        if self.refuse_finish { "false" } else { "true" }.to_string()
    }

    fn set_value(&mut self, field: &str, value: &str) -> String {
        self.writes.push((field.to_string(), value.to_string()));
        self.values.insert(field.to_string(), value.to_string());
        "true".to_string()
    }

    fn get_value(&mut self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn has_commit(&self) -> bool {
        self.with_commit
    }

    fn commit(&mut self, _arg: &str) -> String {
        self.commit_calls += 1;
        if self.refuse_commit { "false" } else { "true" }.to_string()
    }
}
