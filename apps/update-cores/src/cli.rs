use clap::Parser;
use lemuroid_cores::registry;
use lemuroid_cores::{Config, DeliveryMode, LinkPreference, ToolsKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "update-cores",
    about = "Download libretro cores and regenerate Lemuroid's dynamic-feature core modules",
    version
)]
pub struct Cli {
    /// Cores to refresh (upstream names, e.g. `handy melondsds`)
    #[arg(conflicts_with = "all")]
    pub cores: Vec<String>,

    /// Refresh every known core (`melondsds` stands in for `melonds`)
    #[arg(long)]
    pub all: bool,

    /// JSON config file (cores, base_url, delivery, tools, link)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Gradle project root that holds the lemuroid_core_* modules
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Buildbot folder to download from
    #[arg(long)]
    pub base_url: Option<String>,

    /// Delivery block for generated manifests: on-demand | install-time
    #[arg(long)]
    pub delivery: Option<DeliveryMode>,

    /// native (reqwest + zip) or shell (wget/unzip, PowerShell on Windows)
    #[arg(long)]
    pub tools: Option<ToolsKind>,

    /// bundled-cores references: auto | symlink | copy
    #[arg(long)]
    pub link: Option<LinkPreference>,

    /// Shorthand for `--link copy`
    #[arg(long, conflicts_with = "link")]
    pub copy: bool,

    /// Print the known cores and their Lemuroid names, then exit
    #[arg(long)]
    pub list: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Log filter (error, warn, info, debug, trace); RUST_LOG wins when set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Layer command-line overrides on top of a loaded (or default) config.
    pub fn apply(&self, mut cfg: Config) -> Config {
        if self.all {
            cfg.cores = registry::all_cores().iter().map(|c| c.to_string()).collect();
        } else if !self.cores.is_empty() {
            cfg.cores = self.cores.clone();
        }
        if let Some(url) = &self.base_url {
            cfg.base_url = url.clone();
        }
        if let Some(d) = self.delivery {
            cfg.delivery = d;
        }
        if let Some(t) = self.tools {
            cfg.tools = t;
        }
        if self.copy {
            cfg.link = LinkPreference::Copy;
        } else if let Some(l) = self.link {
            cfg.link = l;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("update-cores").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn positional_cores_replace_config_list() {
        let cli = parse(&["handy", "melondsds"]);
        let cfg = cli.apply(Config::default());
        assert_eq!(cfg.cores, vec!["handy", "melondsds"]);
        assert_eq!(cfg.link, LinkPreference::Auto);
    }

    #[test]
    fn no_cores_keeps_config_list() {
        let cfg = parse(&[]).apply(Config::default());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn all_selects_registry() {
        let cfg = parse(&["--all"]).apply(Config::default());
        assert_eq!(cfg.cores.len(), registry::all_cores().len());
        assert!(cfg.cores.iter().any(|c| c == "melondsds"));
        assert!(!cfg.cores.iter().any(|c| c == "melonds"));

        let plans = registry::plan(&cfg.cores).unwrap();
        let mut locals: Vec<&str> = plans.iter().map(|p| p.local.as_str()).collect();
        locals.sort_unstable();
        locals.dedup();
        assert_eq!(locals.len(), plans.len());
    }

    #[test]
    fn all_conflicts_with_explicit_cores() {
        assert!(Cli::try_parse_from(["update-cores", "--all", "handy"]).is_err());
    }

    #[test]
    fn value_flags_parse_through_from_str() {
        let cli = parse(&[
            "--delivery",
            "install-time",
            "--tools",
            "shell",
            "--copy",
            "--base-url",
            "http://mirror/latest",
        ]);
        let cfg = cli.apply(Config::default());
        assert_eq!(cfg.delivery, DeliveryMode::InstallTime);
        assert_eq!(cfg.tools, ToolsKind::Shell);
        assert_eq!(cfg.link, LinkPreference::Copy);
        assert_eq!(cfg.base_url, "http://mirror/latest");
    }

    #[test]
    fn bad_delivery_is_rejected() {
        assert!(Cli::try_parse_from(["update-cores", "--delivery", "sometimes"]).is_err());
    }

    #[test]
    fn cli_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cores.json");
        fs::write(&path, r#"{ "cores": ["fbneo"], "delivery": "install-time" }"#).unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "handy"]);
        let cfg = cli.apply(Config::load(cli.config.as_ref().unwrap()).unwrap());
        assert_eq!(cfg.cores, vec!["handy"]);
        assert_eq!(cfg.delivery, DeliveryMode::InstallTime);
    }
}
