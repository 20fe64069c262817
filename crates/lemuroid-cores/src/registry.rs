//! Known libretro cores and the upstream → Lemuroid name mapping.

use crate::errors::{Result, SyncError};
use crate::types::CorePlan;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Every core Lemuroid ships a dynamic-feature module for.
pub const KNOWN_CORES: &[&str] = &[
    "stella",
    "fceumm",
    "snes9x",
    "genesis_plus_gx",
    "gambatte",
    "melonds",
    "melondsds",
    "mgba",
    "mupen64plus_next_gles3",
    "pcsx_rearmed",
    "ppsspp",
    "fbneo",
    "desmume",
    "mame2003_plus",
    "prosystem",
    "handy",
    "mednafen_pce_fast",
    "dosbox_pure",
    "mednafen_ngp",
    "mednafen_wswan",
    "citra",
    "yabasanshiro",
    "mednafen_saturn",
    "yabause",
    "flycast",
    "mednafen_pcfx",
];

/// Refreshed when neither the config nor the command line names any cores.
pub const DEFAULT_CORES: &[&str] = &[
    "fbneo",
    "desmume",
    "mame2003_plus",
    "prosystem",
    "handy",
    "mednafen_pce_fast",
    "dosbox_pure",
    "mednafen_ngp",
    "mednafen_wswan",
    "citra",
    "yabasanshiro",
    "mednafen_saturn",
    "yabause",
    "flycast",
    "mednafen_pcfx",
];

/// Upstream names that Lemuroid knows under a different name.
static LOCAL_NAMES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("melondsds", "melonds")]));

static KNOWN: Lazy<HashSet<&'static str>> = Lazy::new(|| KNOWN_CORES.iter().copied().collect());

/// Lemuroid-side name for an upstream core; identity unless overridden.
pub fn resolve(core: &str) -> &str {
    LOCAL_NAMES.get(core).copied().unwrap_or(core)
}

pub fn is_known(core: &str) -> bool {
    KNOWN.contains(core)
}

/// Every known core except those replaced by an override
/// (`melonds` gives way to `melondsds`, which installs under the same name).
pub fn all_cores() -> Vec<&'static str> {
    KNOWN_CORES
        .iter()
        .copied()
        .filter(|core| {
            !LOCAL_NAMES
                .iter()
                .any(|(upstream, local)| upstream != core && local == core)
        })
        .collect()
}

/// Validate and map the active core list. Repeated names are dropped, first
/// one wins. Two different cores that install under the same Lemuroid name
/// are rejected: they would overwrite each other's module.
pub fn plan<S: AsRef<str>>(cores: &[S]) -> Result<Vec<CorePlan>> {
    if cores.is_empty() {
        return Err(SyncError::NoCores);
    }

    let mut by_local: HashMap<&str, &str> = HashMap::new();
    let mut out = Vec::with_capacity(cores.len());
    for c in cores {
        let core = c.as_ref().trim();
        if !is_known(core) {
            return Err(SyncError::UnknownCore(core.to_string()));
        }
        let local = resolve(core);
        match by_local.get(local) {
            Some(&first) if first == core => continue,
            Some(&first) => {
                return Err(SyncError::CoreCollision {
                    first: first.to_string(),
                    second: core.to_string(),
                    local: local.to_string(),
                })
            }
            None => {}
        }
        by_local.insert(local, core);
        out.push(CorePlan {
            core: core.to_string(),
            local: local.to_string(),
        });
    }
    Ok(out)
}
