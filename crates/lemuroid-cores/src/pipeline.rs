//! The batch run: one core at a time, one architecture at a time.
//!
//! Per core: reset module dir → write scaffold → for each arch:
//! fetch → extract → rename → link. Failures are recorded and the run moves
//! on; nothing is rolled back.

use crate::install::{install, InstallOutcome};
use crate::link::{link_bundled, LinkStrategy};
use crate::net::core_url;
use crate::paths::{archive_name, lemuroid_so_name, libretro_so_name, Layout};
use crate::report::{CoreReport, Outcome, RunSummary, UnitReport};
use crate::scaffold;
use crate::tools::Toolset;
use crate::types::{Arch, CorePlan, DeliveryMode};
use tracing::{info, warn};

pub struct Updater {
    pub layout: Layout,
    pub tools: Box<dyn Toolset>,
    pub linker: Box<dyn LinkStrategy>,
    pub base_url: String,
    pub delivery: DeliveryMode,
}

impl Updater {
    pub fn run(&self, plans: &[CorePlan]) -> RunSummary {
        let mut summary = RunSummary::default();
        for plan in plans {
            summary.cores.push(self.process_core(plan));
        }
        info!(
            installed = summary.installed(),
            failed = summary.failed(),
            "run finished"
        );
        summary
    }

    pub fn process_core(&self, plan: &CorePlan) -> CoreReport {
        let CorePlan { core, local } = plan;
        info!(core = %local, upstream = %core, "processing core");

        let mut report = CoreReport {
            core: core.clone(),
            local: local.clone(),
            reset_error: None,
            units: Vec::with_capacity(Arch::ALL.len()),
        };

        let module_dir = self.layout.core_module_dir(local);
        let reset = self
            .tools
            .remove(&module_dir)
            .and_then(|_| scaffold::write(&self.layout, local, self.delivery));
        if let Err(e) = reset {
            warn!(core = %local, error = %e, "could not reset module directory; skipping core");
            report.reset_error = Some(e.to_string());
            return report;
        }

        for arch in Arch::ALL {
            let outcome = self.process_arch(plan, arch);
            if !outcome.is_success() {
                warn!(core = %local, %arch, %outcome, "unit failed");
            }
            report.units.push(UnitReport { arch, outcome });
        }

        info!(core = %local, ok = report.is_success(), "core done");
        report
    }

    pub fn process_arch(&self, plan: &CorePlan, arch: Arch) -> Outcome {
        let CorePlan { core, local } = plan;
        let arch_dir = self.layout.arch_dir(local, arch);
        if let Err(e) = std::fs::create_dir_all(&arch_dir) {
            return Outcome::DownloadFailed(e.to_string());
        }

        let url = core_url(&self.base_url, arch, core);
        let archive = arch_dir.join(archive_name(core));
        info!(%arch, %url, "downloading");
        if let Err(e) = self.tools.fetch(&url, &archive) {
            // Partial downloads must not linger next to the binaries.
            if let Err(rm) = self.tools.remove(&archive) {
                warn!(archive = %archive.display(), error = %rm, "could not remove partial download");
            }
            return Outcome::DownloadFailed(e.to_string());
        }

        let binary = match install(
            self.tools.as_ref(),
            &archive,
            &arch_dir,
            &libretro_so_name(core),
            &lemuroid_so_name(local),
        ) {
            InstallOutcome::Installed(path) => path,
            InstallOutcome::ExtractFailed(e) => return Outcome::ExtractFailed(e),
            InstallOutcome::BinaryMissing => return Outcome::BinaryMissing,
        };

        let bundled = self.layout.bundled_binary(local, arch);
        match link_bundled(self.linker.as_ref(), &binary, &bundled) {
            Ok(()) => Outcome::Installed {
                linked: self.linker.kind(),
            },
            Err(e) => Outcome::LinkFailed(e.to_string()),
        }
    }
}
