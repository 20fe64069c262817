use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Android ABIs published by the buildbot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arch {
    #[serde(rename = "armeabi-v7a")]
    ArmeabiV7a,
    #[serde(rename = "arm64-v8a")]
    Arm64V8a,
    #[serde(rename = "x86")]
    X86,
    #[serde(rename = "x86_64")]
    X86_64,
}

impl Arch {
    pub const ALL: [Arch; 4] = [Arch::ArmeabiV7a, Arch::Arm64V8a, Arch::X86, Arch::X86_64];

    pub fn as_str(self) -> &'static str {
        match self {
            Arch::ArmeabiV7a => "armeabi-v7a",
            Arch::Arm64V8a => "arm64-v8a",
            Arch::X86 => "x86",
            Arch::X86_64 => "x86_64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arch::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown architecture `{s}`"))
    }
}

/// Delivery block written into each module's AndroidManifest.xml.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    /// On-demand, but installed at install time on leanback (TV) devices.
    #[default]
    OnDemand,
    /// Always installed with the base APK.
    InstallTime,
}

impl FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on-demand" => Ok(DeliveryMode::OnDemand),
            "install-time" => Ok(DeliveryMode::InstallTime),
            other => Err(format!(
                "unknown delivery mode `{other}` (expected on-demand | install-time)"
            )),
        }
    }
}

/// Which toolset performs remove/fetch/extract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolsKind {
    /// In-process: reqwest + zip + std::fs.
    #[default]
    Native,
    /// Host shell tools (wget/unzip/rm or PowerShell), picked by platform.
    Shell,
}

impl FromStr for ToolsKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(ToolsKind::Native),
            "shell" => Ok(ToolsKind::Shell),
            other => Err(format!("unknown toolset `{other}` (expected native | shell)")),
        }
    }
}

/// Operator preference for bundled-cores references. Auto = probe once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPreference {
    #[default]
    Auto,
    Symlink,
    Copy,
}

impl FromStr for LinkPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(LinkPreference::Auto),
            "symlink" => Ok(LinkPreference::Symlink),
            "copy" => Ok(LinkPreference::Copy),
            other => Err(format!(
                "unknown link mode `{other}` (expected auto | symlink | copy)"
            )),
        }
    }
}

/// How a bundled-cores entry was materialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Symlink,
    Copy,
}

/// One entry of the active core list after name mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorePlan {
    pub core: String,  // upstream name, e.g. "melondsds"
    pub local: String, // Lemuroid name, e.g. "melonds"
}
