use crate::types::{Arch, LinkKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened to one (core, arch) unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Installed { linked: LinkKind },
    DownloadFailed(String),
    ExtractFailed(String),
    /// Archive did not contain `<core>_libretro_android.so`.
    BinaryMissing,
    /// Module binary is in place but the bundled-cores reference is not.
    LinkFailed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Installed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Installed {
                linked: LinkKind::Symlink,
            } => f.write_str("ok (symlink)"),
            Outcome::Installed {
                linked: LinkKind::Copy,
            } => f.write_str("ok (copy)"),
            Outcome::DownloadFailed(e) => write!(f, "download failed: {e}"),
            Outcome::ExtractFailed(e) => write!(f, "extract failed: {e}"),
            Outcome::BinaryMissing => f.write_str("binary missing from archive"),
            Outcome::LinkFailed(e) => write!(f, "link failed: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitReport {
    pub arch: Arch,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreReport {
    pub core: String,
    pub local: String,
    /// Set when the module directory could not be reset or scaffolded;
    /// no architectures were attempted in that case.
    pub reset_error: Option<String>,
    pub units: Vec<UnitReport>,
}

impl CoreReport {
    pub fn is_success(&self) -> bool {
        self.reset_error.is_none() && self.units.iter().all(|u| u.outcome.is_success())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub cores: Vec<CoreReport>,
}

impl RunSummary {
    pub fn installed(&self) -> usize {
        self.units().filter(|(_, u)| u.outcome.is_success()).count()
    }

    /// Failed units, plus one per core that never got past its reset.
    pub fn failed(&self) -> usize {
        let units = self.units().filter(|(_, u)| !u.outcome.is_success()).count();
        let resets = self.cores.iter().filter(|c| c.reset_error.is_some()).count();
        units + resets
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    fn units(&self) -> impl Iterator<Item = (&CoreReport, &UnitReport)> {
        self.cores
            .iter()
            .flat_map(|c| c.units.iter().map(move |u| (c, u)))
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cores {
            writeln!(f, "{} ({})", c.local, c.core)?;
            if let Some(e) = &c.reset_error {
                writeln!(f, "  skipped: {e}")?;
            }
            for u in &c.units {
                writeln!(f, "  {:<12} {}", u.arch.as_str(), u.outcome)?;
            }
        }
        write!(
            f,
            "{} installed, {} failed across {} core(s)",
            self.installed(),
            self.failed(),
            self.cores.len()
        )
    }
}
