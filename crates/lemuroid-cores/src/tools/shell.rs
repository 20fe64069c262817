use super::{run, Toolset};
use crate::errors::Result;
use std::fs;
use std::path::Path;
use std::process::Command;

/// `rm -rf`, `wget`, `unzip -o`.
pub struct UnixTools;

impl Toolset for UnixTools {
    fn name(&self) -> &'static str {
        "unix-shell"
    }

    fn remove(&self, path: &Path) -> Result<()> {
        run(Command::new("rm").arg("-rf").arg(path))
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        run(Command::new("wget")
            .arg("-q")
            .arg("-O")
            .arg(dest)
            .arg(url))
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        run(Command::new("unzip")
            .arg("-o")
            .arg("-q")
            .arg(archive)
            .arg("-d")
            .arg(dest))
    }
}

/// `cmd` for removal, PowerShell for download and extraction.
pub struct WindowsTools;

impl WindowsTools {
    fn powershell(script: &str) -> Command {
        let mut cmd = Command::new("powershell");
        cmd.args(["-NoProfile", "-NonInteractive", "-Command", script]);
        cmd
    }
}

/// Single-quote for PowerShell: embedded quotes are doubled.
fn ps_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

impl Toolset for WindowsTools {
    fn name(&self) -> &'static str {
        "windows-shell"
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let meta = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(_) => return Ok(()),
        };
        if meta.is_dir() {
            run(Command::new("cmd").args(["/C", "rmdir", "/S", "/Q"]).arg(path))
        } else {
            run(Command::new("cmd").args(["/C", "del", "/F", "/Q"]).arg(path))
        }
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let script = format!(
            "$ProgressPreference = 'SilentlyContinue'; Invoke-WebRequest -Uri {} -OutFile {}",
            ps_quote(url),
            ps_quote(&dest.to_string_lossy())
        );
        run(&mut Self::powershell(&script))
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        let script = format!(
            "Expand-Archive -Path {} -DestinationPath {} -Force",
            ps_quote(&archive.to_string_lossy()),
            ps_quote(&dest.to_string_lossy())
        );
        run(&mut Self::powershell(&script))
    }
}
