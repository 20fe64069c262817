//! References from `bundled-cores` into the per-core module trees.
//!
//! A relative symlink keeps the whole output tree relocatable. Where symlinks
//! can't be created (Windows without developer mode, some mounted filesystems)
//! the binary is copied instead.

use crate::errors::Result;
use crate::types::{LinkKind, LinkPreference};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

pub trait LinkStrategy {
    fn kind(&self) -> LinkKind;

    /// Create `dest` referring to `target`. `dest` must not exist.
    fn link(&self, target: &Path, dest: &Path) -> Result<()>;
}

/// Symlink whose content is `target` relative to `dest`'s directory.
pub struct SymlinkStrategy;

/// Plain byte copy.
pub struct CopyStrategy;

impl LinkStrategy for SymlinkStrategy {
    fn kind(&self) -> LinkKind {
        LinkKind::Symlink
    }

    fn link(&self, target: &Path, dest: &Path) -> Result<()> {
        let dest_dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let rel = relative_path(dest_dir, target);
        symlink_file(&rel, dest)?;
        Ok(())
    }
}

impl LinkStrategy for CopyStrategy {
    fn kind(&self) -> LinkKind {
        LinkKind::Copy
    }

    fn link(&self, target: &Path, dest: &Path) -> Result<()> {
        fs::copy(target, dest)?;
        Ok(())
    }
}

#[cfg(unix)]
fn symlink_file(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink_file(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(original, link)
}

#[cfg(not(any(unix, windows)))]
fn symlink_file(_original: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "symlinks unsupported on this platform",
    ))
}

/// Pick the strategy for this run. `Auto` tries one throwaway relative
/// symlink inside `dir` and falls back to copying if that fails.
pub fn select(pref: LinkPreference, dir: &Path) -> Box<dyn LinkStrategy> {
    let strategy: Box<dyn LinkStrategy> = match pref {
        LinkPreference::Symlink => Box::new(SymlinkStrategy),
        LinkPreference::Copy => Box::new(CopyStrategy),
        LinkPreference::Auto => {
            if can_symlink(dir) {
                Box::new(SymlinkStrategy)
            } else {
                Box::new(CopyStrategy)
            }
        }
    };
    info!(strategy = ?strategy.kind(), "bundled-cores link strategy");
    strategy
}

fn can_symlink(dir: &Path) -> bool {
    if fs::create_dir_all(dir).is_err() {
        return false;
    }
    let target = dir.join(".link-probe-target");
    let link = dir.join(".link-probe");
    let _ = fs::remove_file(&link);

    let ok = fs::write(&target, b"probe").is_ok()
        && symlink_file(Path::new(".link-probe-target"), &link).is_ok()
        && fs::read(&link).map(|b| b == b"probe").unwrap_or(false);

    let _ = fs::remove_file(&link);
    let _ = fs::remove_file(&target);
    debug!(dir = %dir.display(), ok, "symlink probe");
    ok
}

/// Replace whatever sits at `dest` (file, link, dangling link) with a fresh
/// reference to `target`.
pub fn link_bundled(strategy: &dyn LinkStrategy, target: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    // symlink_metadata so dangling links are seen too.
    if fs::symlink_metadata(dest).is_ok() {
        fs::remove_file(dest)?;
    }
    strategy.link(target, dest)
}

/// Path to `to` as seen from directory `from`. Both must share a root
/// (both absolute, or both relative to the same base).
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = normalized(from);
    let to: Vec<Component> = normalized(to);

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut out = PathBuf::new();
    for _ in common..from.len() {
        out.push("..");
    }
    for c in &to[common..] {
        out.push(c.as_os_str());
    }
    out
}

fn normalized(p: &Path) -> Vec<Component<'_>> {
    p.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
