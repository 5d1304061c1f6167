use crate::cli::args::ExportArgs;
use crate::{exit_codes, templates};
use anyhow::Result;
use scormkit_export::{assemble, ExportConfig, ExportError};
use std::fs;
use std::path::Path;
use tracing::warn;

pub fn run(args: ExportArgs) -> Result<i32> {
    let config = ExportConfig {
        identifier: args.identifier,
        title: args.title,
        host_page_file: args.host_page_file,
        bridge_file: args.bridge_file,
        host_elsewhere: args.host_elsewhere,
        hosted_build_base_url: args.base_url,
        open_folder: args.open_folder,
    };

    // Builds produced without the bridge script get the stock one.
    if args.build_dir.is_dir() {
        let bridge_path = args.build_dir.join(&config.bridge_file);
        if !bridge_path.exists() {
            fs::write(&bridge_path, templates::BRIDGE_JS)?;
            println!("Wrote stock bridge script: {}", bridge_path.display());
        }
    }

    match assemble(&config, &args.build_dir, args.out_dir.as_deref()) {
        Ok(output) => {
            println!("SCORM package: {}", output.package_archive.display());
            if let Some(content) = &output.content_archive {
                println!("Content archive: {}", content.display());
            }
            if config.open_folder {
                let folder = output
                    .package_archive
                    .parent()
                    .unwrap_or_else(|| Path::new("."));
                open_folder(folder);
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(err @ (ExportError::MissingBuildDir(_) | ExportError::InvalidBuildName(_))) => {
            eprintln!("error: {err}");
            Ok(exit_codes::CONFIG_ERROR)
        }
        Err(err) => {
            eprintln!("error: {err}");
            Ok(exit_codes::IO_ERROR)
        }
    }
}

/// Best-effort folder reveal; failures are logged, never fatal.
fn open_folder(path: &Path) {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    };
    if let Err(err) = std::process::Command::new(opener).arg(path).spawn() {
        warn!(error = %err, "could not open the output folder");
    }
}
