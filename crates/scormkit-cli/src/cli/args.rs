use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scormkit",
    version,
    about = "SCORM 1.2 packaging for iframe-sandboxed content — manifest generation, host-page rendering, and archive assembly"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Package a build directory into a deployable SCORM archive
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Build output directory to package
    #[arg(long)]
    pub build_dir: PathBuf,

    /// Unique SCORM package identifier
    #[arg(long, default_value = "ScormkitPackage")]
    pub identifier: String,

    /// Title displayed in the LMS
    #[arg(long, default_value = "Scormkit Package")]
    pub title: String,

    /// Name of the generated host page
    #[arg(long, default_value = "index_scorm.html")]
    pub host_page_file: String,

    /// Name of the bridge script the host page loads
    #[arg(long, default_value = "scorm-bridge.js")]
    pub bridge_file: String,

    /// Host the build on an external server (produces two archives)
    #[arg(long)]
    pub host_elsewhere: bool,

    /// Base URL where the build will be hosted (with --host-elsewhere)
    #[arg(long, default_value = "./")]
    pub base_url: String,

    /// Where to place the archives (defaults next to the build directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Open the output folder when the export completes
    #[arg(long)]
    pub open_folder: bool,
}
