//! Archive assembly.

use crate::config::ExportConfig;
use crate::host_page::render_host_page;
use crate::manifest::{render_manifest, MANIFEST_FILE};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ExportError {
    /// The build output directory does not exist.
    #[error("build output directory not found: {0}")]
    MissingBuildDir(PathBuf),

    /// The build output directory has no usable final path component.
    #[error("build output directory has no usable name: {0}")]
    InvalidBuildName(PathBuf),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    fn io(context: impl Into<String>) -> impl FnOnce(io::Error) -> ExportError {
        let context = context.into();
        move |source| ExportError::Io { context, source }
    }
}

/// Paths of the archives one export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutput {
    /// The archive an LMS ingests.
    pub package_archive: PathBuf,
    /// The separately hosted content archive (two-archive mode only).
    pub content_archive: Option<PathBuf>,
}

/// Assemble the deployable package from `build_dir`.
///
/// Renders the host page and `imsmanifest.xml` into `build_dir`, then
/// archives per `config.host_elsewhere`. Archives land in `out_dir` when
/// given, otherwise next to `build_dir`. A pre-existing archive at a
/// target path is deleted before writing; staging directories never
/// outlive the call, on any exit path.
pub fn assemble(
    config: &ExportConfig,
    build_dir: &Path,
    out_dir: Option<&Path>,
) -> Result<ExportOutput, ExportError> {
    if !build_dir.is_dir() {
        return Err(ExportError::MissingBuildDir(build_dir.to_path_buf()));
    }
    let build_name = build_dir
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| ExportError::InvalidBuildName(build_dir.to_path_buf()))?;

    let host_page_path = build_dir.join(&config.host_page_file);
    fs::write(&host_page_path, render_host_page(config, &build_name))
        .map_err(ExportError::io(format!(
            "writing host page {}",
            host_page_path.display()
        )))?;
    debug!(path = %host_page_path.display(), "host page rendered");

    let manifest_path = build_dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, render_manifest(config)).map_err(ExportError::io(format!(
        "writing manifest {}",
        manifest_path.display()
    )))?;
    debug!(path = %manifest_path.display(), "manifest rendered");

    let out_dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => parent_of(build_dir),
    };

    let output = if config.host_elsewhere {
        two_archives(config, build_dir, &out_dir, &build_name)?
    } else {
        single_archive(build_dir, &out_dir, &build_name)?
    };
    info!(package = %output.package_archive.display(), "export complete");
    Ok(output)
}

fn parent_of(build_dir: &Path) -> PathBuf {
    match build_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Everything in one archive: manifest, host page, bridge script, and all
/// build artifacts, flat at the archive root.
fn single_archive(
    build_dir: &Path,
    out_dir: &Path,
    build_name: &str,
) -> Result<ExportOutput, ExportError> {
    let package = out_dir.join(format!("{build_name}_scorm_full.tar.gz"));
    write_archive(&package, build_dir)?;
    Ok(ExportOutput {
        package_archive: package,
        content_archive: None,
    })
}

/// Core archive {manifest, host page, bridge script} plus a content
/// archive holding every remaining artifact with relative paths preserved.
fn two_archives(
    config: &ExportConfig,
    build_dir: &Path,
    out_dir: &Path,
    build_name: &str,
) -> Result<ExportOutput, ExportError> {
    let core_names = [
        MANIFEST_FILE,
        config.host_page_file.as_str(),
        config.bridge_file.as_str(),
    ];

    let package = out_dir.join(format!("{build_name}_scorm.tar.gz"));
    {
        let staging = fresh_staging("scormkit-core-")?;
        for name in core_names {
            fs::copy(build_dir.join(name), staging.path().join(name)).map_err(ExportError::io(
                format!("staging core file {name}"),
            ))?;
        }
        write_archive(&package, staging.path())?;
        // staging removed on drop, success or not
    }

    let content = out_dir.join(format!("{build_name}.tar.gz"));
    {
        let staging = fresh_staging("scormkit-content-")?;
        copy_tree_excluding(build_dir, staging.path(), &core_names)
            .map_err(ExportError::io("staging content files"))?;
        write_archive(&content, staging.path())?;
    }

    Ok(ExportOutput {
        package_archive: package,
        content_archive: Some(content),
    })
}

fn fresh_staging(prefix: &str) -> Result<TempDir, ExportError> {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .map_err(ExportError::io("creating staging directory"))
}

/// Compress `dir` into a tar.gz at `archive_path`, contents at the archive
/// root. Overwrites any archive already there.
fn write_archive(archive_path: &Path, dir: &Path) -> Result<(), ExportError> {
    if archive_path.exists() {
        fs::remove_file(archive_path).map_err(ExportError::io(format!(
            "removing stale archive {}",
            archive_path.display()
        )))?;
    }
    let in_context = ExportError::io(format!("writing archive {}", archive_path.display()));
    match try_write_archive(archive_path, dir) {
        Ok(()) => {
            debug!(path = %archive_path.display(), "archive written");
            Ok(())
        }
        Err(err) => Err(in_context(err)),
    }
}

fn try_write_archive(archive_path: &Path, dir: &Path) -> io::Result<()> {
    let file = File::create(archive_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    // Top-level entries keep their bare names so the SCORM-required files
    // end up as siblings at the archive root.
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = PathBuf::from(entry.file_name());
        if entry.file_type()?.is_dir() {
            builder.append_dir_all(&name, entry.path())?;
        } else {
            builder.append_path_with_name(entry.path(), &name)?;
        }
    }
    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(())
}

/// Recursively copy `src` into `dst`, skipping any file whose name matches
/// one of `excluded` (at any depth, mirroring the core/content split).
fn copy_tree_excluding(src: &Path, dst: &Path, excluded: &[&str]) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copy_tree_excluding(&path, &target, excluded)?;
        } else {
            let name = entry.file_name();
            if name.to_str().is_some_and(|n| excluded.contains(&n)) {
                continue;
            }
            fs::copy(&path, &target)?;
        }
    }
    Ok(())
}
