use crate::tools::Toolset;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of unpacking one downloaded archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Binary renamed into place.
    Installed(PathBuf),
    /// Extraction failed; the archive has still been removed.
    ExtractFailed(String),
    /// Archive extracted but did not contain the expected binary.
    BinaryMissing,
}

/// Extract `archive` into `arch_dir`, drop the archive, and rename
/// `source_name` to `target_name` if the archive produced it.
pub fn install(
    tools: &dyn Toolset,
    archive: &Path,
    arch_dir: &Path,
    source_name: &str,
    target_name: &str,
) -> InstallOutcome {
    let extracted = tools.extract(archive, arch_dir);

    // Always, even after a failed extraction.
    if let Err(e) = tools.remove(archive) {
        warn!(archive = %archive.display(), error = %e, "could not remove archive");
    }

    if let Err(e) = extracted {
        return InstallOutcome::ExtractFailed(e.to_string());
    }

    let source = arch_dir.join(source_name);
    let target = arch_dir.join(target_name);
    if !source.is_file() {
        return InstallOutcome::BinaryMissing;
    }
    if source != target {
        if let Err(e) = fs::rename(&source, &target) {
            return InstallOutcome::ExtractFailed(format!(
                "rename {} -> {}: {e}",
                source.display(),
                target.display()
            ));
        }
    }

    debug!(binary = %target.display(), "installed");
    InstallOutcome::Installed(target)
}
