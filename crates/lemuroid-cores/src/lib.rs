//! lemuroid-cores
//!
//! Blocking helpers that refresh Lemuroid's libretro core modules.
//! - Validates the requested cores and maps upstream names to Lemuroid names.
//! - Downloads each core for every Android ABI from the libretro buildbot.
//! - Unzips, renames, and writes the dynamic-feature module scaffold.
//! - Links every binary into `bundled-cores` (symlink, or copy as fallback).
//!
//! Failures are per (core, arch) and end up in the returned `RunSummary`.

pub mod config;
pub mod errors;
pub mod install;
pub mod link;
pub mod net;
pub mod paths;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod scaffold;
pub mod tools;
pub mod types;

pub use config::Config;
pub use errors::{Result, SyncError};
pub use link::LinkStrategy;
pub use paths::Layout;
pub use pipeline::Updater;
pub use registry::{plan, resolve};
pub use report::{CoreReport, Outcome, RunSummary, UnitReport};
pub use tools::Toolset;
pub use types::*;
