//! End-to-end export runs over a synthetic build directory.

use flate2::read::GzDecoder;
use scormkit_export::{assemble, ExportConfig, ExportError, MANIFEST_FILE};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

/// File entry paths inside a tar.gz, sorted.
fn archive_files(path: &Path) -> BTreeSet<String> {
    let file = File::open(path).expect("archive opens");
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive
        .entries()
        .expect("archive lists")
        .map(|entry| entry.expect("entry reads"))
        .filter(|entry| entry.header().entry_type().is_file())
        .map(|entry| {
            entry
                .path()
                .expect("entry path")
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

/// A build directory with two artifacts (one nested) and a bridge script.
fn build_fixture() -> (TempDir, std::path::PathBuf) {
    let root = TempDir::new().expect("tempdir");
    let build_dir = root.path().join("mygame");
    fs::create_dir(&build_dir).expect("build dir");
    fs::write(build_dir.join("a.txt"), "artifact a").expect("a");
    fs::create_dir(build_dir.join("Build")).expect("nested dir");
    fs::write(build_dir.join("Build").join("b.wasm"), "artifact b").expect("b");
    fs::write(build_dir.join("scorm-bridge.js"), "// bridge").expect("bridge");
    (root, build_dir)
}

#[test]
fn embedded_export_produces_one_archive_with_everything() {
    let (_root, build_dir) = build_fixture();
    let config = ExportConfig::default();

    let output = assemble(&config, &build_dir, None).expect("export succeeds");
    assert!(output.content_archive.is_none());
    assert_eq!(
        output.package_archive.file_name().unwrap(),
        "mygame_scorm_full.tar.gz"
    );

    let files = archive_files(&output.package_archive);
    let expected: BTreeSet<String> = [
        "a.txt",
        "Build/b.wasm",
        "scorm-bridge.js",
        "index_scorm.html",
        "imsmanifest.xml",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(files, expected);
}

#[test]
fn external_export_partitions_core_and_content_exactly() {
    let (_root, build_dir) = build_fixture();
    let config = ExportConfig {
        host_elsewhere: true,
        hosted_build_base_url: "https://cdn.example.com/builds".to_string(),
        ..ExportConfig::default()
    };

    let output = assemble(&config, &build_dir, None).expect("export succeeds");
    let content_archive = output.content_archive.expect("content archive produced");
    assert_eq!(
        output.package_archive.file_name().unwrap(),
        "mygame_scorm.tar.gz"
    );
    assert_eq!(content_archive.file_name().unwrap(), "mygame.tar.gz");

    let core: BTreeSet<String> = ["imsmanifest.xml", "index_scorm.html", "scorm-bridge.js"]
        .into_iter()
        .map(String::from)
        .collect();
    let content: BTreeSet<String> = ["a.txt", "Build/b.wasm"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(archive_files(&output.package_archive), core);
    assert_eq!(archive_files(&content_archive), content);
}

#[test]
fn generated_files_land_inside_the_build_directory() {
    let (_root, build_dir) = build_fixture();
    assemble(&ExportConfig::default(), &build_dir, None).expect("export succeeds");
    assert!(build_dir.join(MANIFEST_FILE).is_file());
    assert!(build_dir.join("index_scorm.html").is_file());

    let manifest = fs::read_to_string(build_dir.join(MANIFEST_FILE)).expect("manifest reads");
    assert!(manifest.contains(r#"href="index_scorm.html""#));
}

#[test]
fn external_host_page_points_at_the_hosted_build() {
    let (_root, build_dir) = build_fixture();
    let config = ExportConfig {
        host_elsewhere: true,
        hosted_build_base_url: "https://cdn.example.com/builds/".to_string(),
        ..ExportConfig::default()
    };
    assemble(&config, &build_dir, None).expect("export succeeds");
    let page = fs::read_to_string(build_dir.join("index_scorm.html")).expect("page reads");
    assert!(page.contains(r#"src="https://cdn.example.com/builds/mygame/index.html""#));
}

#[test]
fn a_stale_archive_is_overwritten() {
    let (root, build_dir) = build_fixture();
    let stale = root.path().join("mygame_scorm_full.tar.gz");
    fs::write(&stale, "not an archive").expect("stale file");

    let output = assemble(&ExportConfig::default(), &build_dir, None).expect("export succeeds");
    assert_eq!(output.package_archive, stale);
    // Readable as a real archive now.
    assert!(!archive_files(&stale).is_empty());
}

#[test]
fn archives_follow_the_out_dir_override() {
    let (_root, build_dir) = build_fixture();
    let out = TempDir::new().expect("out dir");
    let output =
        assemble(&ExportConfig::default(), &build_dir, Some(out.path())).expect("export succeeds");
    assert_eq!(output.package_archive.parent().unwrap(), out.path());
}

#[test]
fn missing_build_directory_blocks_before_any_write() {
    let root = TempDir::new().expect("tempdir");
    let build_dir = root.path().join("never-built");
    let err = assemble(&ExportConfig::default(), &build_dir, None)
        .expect_err("missing dir is an error");
    assert!(matches!(err, ExportError::MissingBuildDir(_)));
    // Nothing was produced next to the (absent) build directory.
    assert_eq!(fs::read_dir(root.path()).expect("list").count(), 0);
}

#[test]
fn external_export_requires_the_bridge_script() {
    let (_root, build_dir) = build_fixture();
    fs::remove_file(build_dir.join("scorm-bridge.js")).expect("remove bridge");
    let config = ExportConfig {
        host_elsewhere: true,
        ..ExportConfig::default()
    };
    let err = assemble(&config, &build_dir, None).expect_err("core staging fails");
    assert!(matches!(err, ExportError::Io { .. }));
}
