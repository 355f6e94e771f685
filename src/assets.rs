//! Static asset staging into the output directory.
//!
//! Asset sources fall into three classes, configured in `[build]`:
//!
//! - `volatile`: directories replaced wholesale on every build (css, js).
//! - `stable`: directories copied only when absent from the output. These
//!   hold large unchanging trees (vendor bundles, images, document scans);
//!   re-copying them on rapid rebuilds races with the dev server reading
//!   the files it is serving.
//! - `static_files`: individual root-level files (favicons, robots.txt),
//!   copied unconditionally.
//!
//! A missing source is skipped silently in every class, so one project
//! layout file covers setups that do not use all asset kinds.

use crate::{config::SiteConfig, log};
use std::{fs, io, path::Path, path::PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// A failed copy, with both endpoints.
#[derive(Debug, Error)]
#[error("failed to copy `{from}` to `{to}`")]
pub struct AssetCopyError {
    pub from: PathBuf,
    pub to: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Stage all configured assets into the output directory.
pub fn stage(config: &SiteConfig) -> Result<(), AssetCopyError> {
    let root = config.get_root().to_path_buf();
    let output = &config.build.output;

    for dir in &config.build.volatile {
        let src = root.join(dir);
        if !src.exists() {
            continue;
        }
        let dest = output.join(dir);
        if dest.exists() {
            fs::remove_dir_all(&dest).map_err(|err| copy_error(&src, &dest, err))?;
        }
        copy_tree(&src, &dest)?;
        log!("build"; "Staged {}/", dir.display());
    }

    for dir in &config.build.stable {
        let src = root.join(dir);
        let dest = output.join(dir);
        if !src.exists() || dest.exists() {
            continue;
        }
        copy_tree(&src, &dest)?;
        log!("build"; "Staged {}/ (initial)", dir.display());
    }

    for file in &config.build.static_files {
        let src = root.join(file);
        if !src.exists() {
            continue;
        }
        let dest = output.join(file);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|err| copy_error(&src, &dest, err))?;
        }
        fs::copy(&src, &dest).map_err(|err| copy_error(&src, &dest, err))?;
    }

    Ok(())
}

/// Recursively copy a directory tree (or a single file) to `dest`.
fn copy_tree(src: &Path, dest: &Path) -> Result<(), AssetCopyError> {
    if src.is_file() {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|err| copy_error(src, dest, err))?;
        }
        fs::copy(src, dest).map_err(|err| copy_error(src, dest, err))?;
        return Ok(());
    }

    for entry in WalkDir::new(src).into_iter().filter_map(Result::ok) {
        let relative = entry
            .path()
            .strip_prefix(src)
            .unwrap_or_else(|_| entry.path());
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|err| copy_error(entry.path(), &target, err))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|err| copy_error(entry.path(), &target, err))?;
            }
            fs::copy(entry.path(), &target)
                .map_err(|err| copy_error(entry.path(), &target, err))?;
        }
    }
    Ok(())
}

fn copy_error(from: &Path, to: &Path, source: io::Error) -> AssetCopyError {
    AssetCopyError {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config(root: &Path, output: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.build.output = output.to_path_buf();
        config.build.volatile = vec![PathBuf::from("css")];
        config.build.stable = vec![PathBuf::from("vendor")];
        config.build.static_files = vec![PathBuf::from("robots.txt")];
        config
    }

    #[test]
    fn test_stage_copies_all_classes() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("css")).unwrap();
        fs::write(root.join("css/resume.css"), "body {}").unwrap();
        fs::create_dir_all(root.join("vendor/bootstrap")).unwrap();
        fs::write(root.join("vendor/bootstrap/bootstrap.min.css"), "x").unwrap();
        fs::write(root.join("robots.txt"), "User-agent: *").unwrap();

        let output = root.join("dist");
        stage(&test_config(root, &output)).unwrap();

        assert!(output.join("css/resume.css").exists());
        assert!(output.join("vendor/bootstrap/bootstrap.min.css").exists());
        assert!(output.join("robots.txt").exists());
    }

    #[test]
    fn test_volatile_dir_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("css")).unwrap();
        fs::write(root.join("css/new.css"), "new").unwrap();

        // Stale file from a previous build
        let output = root.join("dist");
        fs::create_dir_all(output.join("css")).unwrap();
        fs::write(output.join("css/old.css"), "old").unwrap();

        stage(&test_config(root, &output)).unwrap();

        assert!(output.join("css/new.css").exists());
        assert!(!output.join("css/old.css").exists());
    }

    #[test]
    fn test_stable_dir_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::write(root.join("vendor/lib.js"), "source").unwrap();

        // Already staged, possibly being served right now
        let output = root.join("dist");
        fs::create_dir_all(output.join("vendor")).unwrap();
        fs::write(output.join("vendor/lib.js"), "staged").unwrap();

        stage(&test_config(root, &output)).unwrap();

        assert_eq!(
            fs::read_to_string(output.join("vendor/lib.js")).unwrap(),
            "staged"
        );
    }

    #[test]
    fn test_missing_sources_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let output = root.join("dist");

        // No css/, vendor/ or robots.txt in the root at all
        stage(&test_config(root, &output)).unwrap();

        assert!(!output.join("css").exists());
        assert!(!output.join("vendor").exists());
        assert!(!output.join("robots.txt").exists());
    }

    #[test]
    fn test_nested_tree_copied() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("css/themes/dark")).unwrap();
        fs::write(root.join("css/themes/dark/main.css"), "x").unwrap();

        let output = root.join("dist");
        stage(&test_config(root, &output)).unwrap();

        assert!(output.join("css/themes/dark/main.css").exists());
    }
}
