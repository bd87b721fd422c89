//! Discovery of the well-known artifact files in a build output directory.

use crate::bundler::{ArtifactKind, Error, PartialArtifactWarning, Result, error::ErrorExt};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of looking for an optional artifact.
#[derive(Debug)]
pub enum Located {
    Found(PathBuf),
    Omitted(PartialArtifactWarning),
}

/// Picks the application package among the `*.apk` files directly inside `dir`.
///
/// Several candidates are common (`app-release.apk` next to
/// `app-release-unsigned.apk`). A name without the `-unsigned` suffix wins,
/// then the first in name order.
///
/// # Errors
///
/// - [`Error::MissingArtifact`] if there is none
/// - [`Error::EmptyArtifact`] if the chosen package has no content
pub fn find_package(dir: &Path) -> Result<PathBuf> {
    let candidates = apk_files(dir)?;

    let apk = candidates
        .iter()
        .find(|candidate| !is_unsigned(candidate))
        .or_else(|| candidates.first())
        .cloned()
        .ok_or_else(|| Error::MissingArtifact {
            dir: dir.to_path_buf(),
        })?;

    if candidates.len() > 1 {
        log::warn!(
            "found {} apk files in {}: {:?}, use: {}",
            candidates.len(),
            dir.display(),
            candidates,
            apk.display()
        );
    }

    ensure_non_empty(&apk)?;
    Ok(apk)
}

/// Prefers the AndResGuard output for `apk` when the resource shrinker ran.
///
/// Looks for `AndResGuard_<stem>/<stem>_aligned_unsigned.apk` next to the
/// package, then any `<stem>*.apk` in that directory. Empty outputs are
/// skipped. Falls back to `apk`.
pub fn prefer_resguard(apk: &Path) -> Result<PathBuf> {
    let (Some(parent), Some(stem)) = (apk.parent(), apk.file_stem()) else {
        return Ok(apk.to_path_buf());
    };
    let stem = stem.to_string_lossy();

    let resguard_dir = parent.join(format!("AndResGuard_{stem}"));
    if !resguard_dir.is_dir() {
        return Ok(apk.to_path_buf());
    }

    let primary = resguard_dir.join(format!("{stem}_aligned_unsigned.apk"));
    if primary.is_file() {
        if has_content(&primary)? {
            log::info!("we found resguard apk: {}", primary.display());
            return Ok(primary);
        }
        log::warn!("ignore empty resguard apk: {}", primary.display());
    }

    let mut fallback = None;
    for candidate in apk_files(&resguard_dir)? {
        let prefixed = candidate
            .file_name()
            .map(|name| name.to_string_lossy().starts_with(&*stem))
            .unwrap_or(false);
        if prefixed && candidate != primary && has_content(&candidate)? {
            fallback = Some(candidate);
            break;
        }
    }

    match fallback {
        Some(candidate) => {
            log::warn!(
                "we found dir {}, but the primary apk not found: {}, use: {}",
                resguard_dir.display(),
                primary.display(),
                candidate.display()
            );
            Ok(candidate)
        }
        None => {
            log::warn!(
                "we found dir {}, but no apk found",
                resguard_dir.display()
            );
            Ok(apk.to_path_buf())
        }
    }
}

/// Looks for an optional artifact by its conventional file name.
///
/// Missing and empty files are reported as warnings, never as errors.
pub fn find_optional(dir: &Path, kind: ArtifactKind) -> Result<Located> {
    let Some(file_name) = kind.file_name() else {
        return Err(Error::GenericError(format!(
            "{kind} has no conventional file name"
        )));
    };
    let path = dir.join(file_name);

    let metadata = match std::fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => return Ok(Located::Omitted(PartialArtifactWarning::Missing { kind, path })),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Located::Omitted(PartialArtifactWarning::Missing { kind, path }));
        }
        Err(e) => return Err(e).fs_context("reading artifact metadata", &path),
    };

    if metadata.len() == 0 {
        return Ok(Located::Omitted(PartialArtifactWarning::Empty { kind, path }));
    }
    Ok(Located::Found(path))
}

/// Regular `*.apk` files directly inside `dir`, sorted by name.
fn apk_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut apks = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_apk = entry
            .path()
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("apk"))
            .unwrap_or(false);
        if is_apk {
            apks.push(entry.into_path());
        }
    }
    Ok(apks)
}

fn is_unsigned(path: &Path) -> bool {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().ends_with("-unsigned"))
        .unwrap_or(false)
}

fn has_content(path: &Path) -> Result<bool> {
    let metadata = std::fs::metadata(path).fs_context("reading artifact metadata", path)?;
    Ok(metadata.len() > 0)
}

fn ensure_non_empty(path: &Path) -> Result<()> {
    if !has_content(path)? {
        return Err(Error::EmptyArtifact(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resguard_primary_wins() {
        let dir = tempfile::tempdir().unwrap();
        let apk = dir.path().join("app-release.apk");
        fs::write(&apk, b"apk").unwrap();
        let resguard = dir.path().join("AndResGuard_app-release");
        fs::create_dir(&resguard).unwrap();
        fs::write(resguard.join("app-release_signed.apk"), b"x").unwrap();
        fs::write(resguard.join("app-release_aligned_unsigned.apk"), b"y").unwrap();

        let chosen = prefer_resguard(&apk).unwrap();
        assert_eq!(chosen, resguard.join("app-release_aligned_unsigned.apk"));
    }

    #[test]
    fn resguard_falls_back_to_prefixed_apk() {
        let dir = tempfile::tempdir().unwrap();
        let apk = dir.path().join("app-release.apk");
        fs::write(&apk, b"apk").unwrap();
        let resguard = dir.path().join("AndResGuard_app-release");
        fs::create_dir(&resguard).unwrap();
        fs::write(resguard.join("other.apk"), b"x").unwrap();
        fs::write(resguard.join("app-release_signed.apk"), b"y").unwrap();

        let chosen = prefer_resguard(&apk).unwrap();
        assert_eq!(chosen, resguard.join("app-release_signed.apk"));
    }

    #[test]
    fn empty_resguard_primary_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let apk = dir.path().join("app-release.apk");
        fs::write(&apk, b"apk").unwrap();
        let resguard = dir.path().join("AndResGuard_app-release");
        fs::create_dir(&resguard).unwrap();
        fs::write(resguard.join("app-release_aligned_unsigned.apk"), b"").unwrap();
        fs::write(resguard.join("app-release_signed.apk"), b"y").unwrap();

        let chosen = prefer_resguard(&apk).unwrap();
        assert_eq!(chosen, resguard.join("app-release_signed.apk"));
    }

    #[test]
    fn unsigned_package_loses_to_signed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app-release-unsigned.apk"), b"u").unwrap();
        fs::write(dir.path().join("app-release.apk"), b"s").unwrap();

        let chosen = find_package(dir.path()).unwrap();
        assert_eq!(chosen, dir.path().join("app-release.apk"));
    }

    #[test]
    fn empty_resguard_dir_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        let apk = dir.path().join("app-release.apk");
        fs::write(&apk, b"apk").unwrap();
        fs::create_dir(dir.path().join("AndResGuard_app-release")).unwrap();

        assert_eq!(prefer_resguard(&apk).unwrap(), apk);
    }

    #[test]
    fn empty_optional_file_is_omitted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("R.txt"), b"").unwrap();

        match find_optional(dir.path(), ArtifactKind::ResourceTable).unwrap() {
            Located::Omitted(PartialArtifactWarning::Empty { kind, .. }) => {
                assert_eq!(kind, ArtifactKind::ResourceTable)
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
