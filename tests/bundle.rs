use std::fs;

use tinker_maven_publish::bundler::{
    ArtifactBundler, ArtifactKind, Error, PartialArtifactWarning, SettingsBuilder,
};

mod common;

use common::BuildOutput;

fn bundler() -> ArtifactBundler {
    ArtifactBundler::new(SettingsBuilder::new().version("1.0.0").build())
}

#[test]
fn full_build_output_yields_all_three_artifacts() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());

    let set = bundler().bundle(&dir).expect("bundle");

    assert_eq!(set.package_file, Some(dir.join("app-release.apk")));
    assert_eq!(set.mapping_file, Some(dir.join("mapping.txt")));
    assert_eq!(set.resource_table_file, Some(dir.join("R.txt")));
    assert!(set.warnings.is_empty());

    let classifiers: Vec<_> = set.artifacts().map(|(kind, _)| kind.classifier()).collect();
    assert_eq!(classifiers, vec!["apk", "mapping", "r-file"]);
}

#[test]
fn missing_package_is_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput {
        apk: false,
        mapping: true,
        symbol: true,
    }
    .write(temp.path());

    let err = bundler().bundle(&dir).unwrap_err();
    assert!(matches!(err, Error::MissingArtifact { .. }), "{err:?}");
}

#[test]
fn missing_resource_table_is_a_warning() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput {
        apk: true,
        mapping: true,
        symbol: false,
    }
    .write(temp.path());

    let set = bundler().bundle(&dir).expect("bundle");

    assert!(set.package_file.is_some());
    assert!(set.mapping_file.is_some());
    assert!(set.resource_table_file.is_none());
    assert_eq!(set.warnings.len(), 1);
    assert_eq!(set.warnings[0].kind(), ArtifactKind::ResourceTable);
    assert!(matches!(
        set.warnings[0],
        PartialArtifactWarning::Missing { .. }
    ));
}

#[test]
fn package_alone_is_publishable() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput {
        apk: true,
        mapping: false,
        symbol: false,
    }
    .write(temp.path());

    let set = bundler().bundle(&dir).expect("bundle");
    assert_eq!(set.warnings.len(), 2);
    set.validate().expect("package alone validates");
}

#[test]
fn skip_mapping_omits_mapping_without_warning() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());

    let settings = SettingsBuilder::new()
        .version("1.0.0")
        .skip_mapping(true)
        .build();
    let set = ArtifactBundler::new(settings).bundle(&dir).expect("bundle");

    assert!(set.mapping_file.is_none());
    assert!(set.resource_table_file.is_some());
    assert!(set.warnings.is_empty());
}

#[test]
fn coordinates_default_from_settings_and_package_name() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());

    let set = bundler().bundle(&dir).expect("bundle");
    assert_eq!(set.group_coordinate, "org.tinker.app");
    assert_eq!(set.artifact_id, "app-release");
    assert_eq!(set.version, "1.0.0");

    let settings = SettingsBuilder::new()
        .group_id("io.github.noproxy")
        .artifact_id("demo")
        .version("2.0")
        .build();
    let set = ArtifactBundler::new(settings).bundle(&dir).expect("bundle");
    assert_eq!(set.coordinates(), "io.github.noproxy:demo:2.0");
}

#[test]
fn missing_version_is_rejected() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());

    let err = ArtifactBundler::new(SettingsBuilder::new().build())
        .bundle(&dir)
        .unwrap_err();
    assert!(matches!(err, Error::MissingVersion));
}

#[test]
fn signed_package_wins_over_unsigned() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());
    fs::write(dir.join("app-release-unsigned.apk"), b"unsigned").expect("apk");

    let set = bundler().bundle(&dir).expect("bundle");
    assert_eq!(set.package_file, Some(dir.join("app-release.apk")));
    assert_eq!(set.artifact_id, "app-release");
}

#[test]
fn several_packages_pick_first_by_name() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());
    fs::write(dir.join("app-debug.apk"), b"another").expect("apk");

    let set = bundler().bundle(&dir).expect("bundle");
    assert_eq!(set.package_file, Some(dir.join("app-debug.apk")));
    set.validate().expect("valid set");
}

#[test]
fn path_like_artifact_id_is_rejected() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());

    let settings = SettingsBuilder::new()
        .artifact_id("../../../escaped")
        .version("1")
        .build();
    let err = ArtifactBundler::new(settings).bundle(&dir).unwrap_err();
    assert!(matches!(err, Error::InvalidCoordinate { .. }), "{err:?}");
}

#[test]
fn empty_package_is_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app-release.apk"), b"").expect("apk");

    let err = bundler().bundle(temp.path()).unwrap_err();
    assert!(matches!(err, Error::EmptyArtifact(_)));
}

#[test]
fn file_instead_of_directory_is_rejected() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("not-a-dir");
    fs::write(&file, b"x").expect("file");

    let err = bundler().bundle(&file).unwrap_err();
    assert!(matches!(err, Error::NotADirectory(_)));
}

#[test]
fn resguard_output_replaces_original_package() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());
    let resguard = dir.join("AndResGuard_app-release");
    fs::create_dir(&resguard).expect("resguard dir");
    fs::write(resguard.join("app-release_aligned_unsigned.apk"), b"shrunk").expect("apk");

    let set = bundler().bundle(&dir).expect("bundle");
    assert_eq!(
        set.package_file,
        Some(resguard.join("app-release_aligned_unsigned.apk"))
    );
    assert_eq!(set.artifact_id, "app-release");
}

#[test]
fn empty_resguard_output_keeps_original_package() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());
    let resguard = dir.join("AndResGuard_app-release");
    fs::create_dir(&resguard).expect("resguard dir");
    fs::write(resguard.join("app-release_aligned_unsigned.apk"), b"").expect("apk");

    let set = bundler().bundle(&dir).expect("bundle");
    assert_eq!(set.package_file, Some(dir.join("app-release.apk")));
    set.validate().expect("bundled set is valid");
}

#[test]
fn validate_rejects_vanished_files() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());

    let set = bundler().bundle(&dir).expect("bundle");
    fs::remove_file(dir.join("R.txt")).expect("remove");

    assert!(matches!(
        set.validate().unwrap_err(),
        Error::ArtifactNotFound(_)
    ));
}

#[test]
fn validate_rejects_set_without_files() {
    let temp = tempfile::tempdir().expect("tempdir");
    let dir = BuildOutput::FULL.write(temp.path());

    let mut set = bundler().bundle(&dir).expect("bundle");
    set.package_file = None;
    set.mapping_file = None;
    set.resource_table_file = None;

    assert!(matches!(
        set.validate().unwrap_err(),
        Error::EmptyArtifactSet(_)
    ));
}
