//! Remove / fetch / extract capabilities, picked once per run.
//!
//! `NativeTools` does everything in-process. The shell toolsets delegate to
//! whatever the host provides (`rm`/`wget`/`unzip`, or `cmd`/PowerShell).

mod native;
mod shell;

pub use native::NativeTools;
pub use shell::{UnixTools, WindowsTools};

use crate::errors::{Result, SyncError};
use crate::types::ToolsKind;
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub trait Toolset {
    fn name(&self) -> &'static str;

    /// Remove a file or directory tree. A missing path is not an error.
    fn remove(&self, path: &Path) -> Result<()>;

    /// Download `url` to `dest`, creating `dest`'s parent if needed.
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;

    /// Extract every entry of `archive` into `dest`, overwriting.
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()>;
}

/// Build the toolset for this host.
pub fn select(kind: ToolsKind) -> Result<Box<dyn Toolset>> {
    let tools: Box<dyn Toolset> = match kind {
        ToolsKind::Native => Box::new(NativeTools::new()?),
        ToolsKind::Shell if cfg!(windows) => Box::new(WindowsTools),
        ToolsKind::Shell => Box::new(UnixTools),
    };
    debug!(toolset = tools.name(), "selected toolset");
    Ok(tools)
}

/// Run a command to completion, turning a non-zero exit into `SyncError::Command`.
pub(crate) fn run(cmd: &mut Command) -> Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    debug!(command = ?cmd, "running");

    let output = cmd
        .output()
        .map_err(|e| SyncError::Msg(format!("failed to spawn {program}: {e}")))?;
    if !output.status.success() {
        return Err(SyncError::Command {
            program,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
