//! The export pipeline.
//!
//! Runs once, offline, to turn a build output directory into a deployable
//! SCORM 1.2 package: render the manifest and the host page into the build
//! directory, then archive everything in one of two modes.
//!
//! - embedded (`host_elsewhere = false`): one archive holding the whole
//!   build directory.
//! - externally hosted (`host_elsewhere = true`): a minimal core archive
//!   holding {manifest, host page, bridge script} for the LMS, plus a
//!   content archive holding every remaining build artifact for
//!   independent hosting.
//!
//! File names referenced by the manifest must match files the host page
//! loads; both come from the same [`ExportConfig`], which keeps the two in
//! lock step.

pub mod assemble;
pub mod config;
pub mod host_page;
pub mod manifest;

pub use assemble::{assemble, ExportError, ExportOutput};
pub use config::ExportConfig;
pub use host_page::render_host_page;
pub use manifest::{render_manifest, MANIFEST_FILE};
