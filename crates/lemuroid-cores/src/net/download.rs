use crate::errors::{Result, SyncError};
use crate::paths::archive_name;
use crate::types::Arch;
use anyhow::Context;
use reqwest::blocking::Client;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// `<base>/<arch>/<core>_libretro_android.so.zip`
pub fn core_url(base: &str, arch: Arch, core: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        arch.as_str(),
        archive_name(core)
    )
}

/// Shared blocking client with rustls; built once per run.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(600))
        .user_agent(concat!("lemuroid-cores/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Blocking HTTPS download. Non-2xx responses are errors; nothing is written for them.
pub fn download_to_path(client: &Client, url: &str, dest: &Path) -> Result<()> {
    let mut resp = client
        .get(url)
        .send()
        .with_context(|| format!("GET {url}"))?;
    if !resp.status().is_success() {
        return Err(SyncError::Msg(format!(
            "download failed: {} ({url})",
            resp.status()
        )));
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut out = fs::File::create(dest)?;
    let mut buf = [0u8; 128 * 1024];
    let mut total = 0usize;

    loop {
        let n = resp.read(&mut buf)?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n])?;
        total += n;
    }

    debug!(url, bytes = total, dest = %dest.display(), "downloaded");
    Ok(())
}
