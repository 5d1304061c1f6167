//! Export run settings.

/// Settings for one export run. Immutable once assembly starts.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Unique SCORM package identifier.
    pub identifier: String,
    /// Title displayed by the LMS.
    pub title: String,
    /// Name of the generated host page inside the package.
    pub host_page_file: String,
    /// Name of the bridge script the host page loads.
    pub bridge_file: String,
    /// Host the build on an external server (two-archive mode).
    pub host_elsewhere: bool,
    /// Base URL of the externally hosted build. Only read when
    /// `host_elsewhere` is set; a trailing slash is tolerated.
    pub hosted_build_base_url: String,
    /// Reveal the output folder when the export completes.
    pub open_folder: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            identifier: "ScormkitPackage".to_string(),
            title: "Scormkit Package".to_string(),
            host_page_file: "index_scorm.html".to_string(),
            bridge_file: "scorm-bridge.js".to_string(),
            host_elsewhere: false,
            hosted_build_base_url: "./".to_string(),
            open_folder: false,
        }
    }
}
