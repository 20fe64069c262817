use super::Toolset;
use crate::errors::Result;
use crate::install::unzip_into;
use crate::net::{download_to_path, http_client};
use reqwest::blocking::Client;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// reqwest + zip + std::fs; no external programs.
pub struct NativeTools {
    client: Client,
}

impl NativeTools {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http_client()?,
        })
    }
}

impl Toolset for NativeTools {
    fn name(&self) -> &'static str {
        "native"
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let meta = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        if meta.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        download_to_path(&self.client, url, dest)
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        unzip_into(archive, dest).map(|_| ())
    }
}
