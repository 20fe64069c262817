//! Offline stand-in for the buildbot: archives are built in memory and
//! served by URL.

#![allow(dead_code)]

use lemuroid_cores::install::unzip_into;
use lemuroid_cores::link::{self, CopyStrategy, LinkStrategy, SymlinkStrategy};
use lemuroid_cores::net::core_url;
use lemuroid_cores::{
    Arch, DeliveryMode, Layout, LinkPreference, Result, SyncError, Toolset, Updater,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const BASE: &str = "https://buildbot.test/nightly/android/latest";

pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut w = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = FileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, data) in entries {
        w.start_file(*name, opts).unwrap();
        w.write_all(data).unwrap();
    }
    w.finish().unwrap().into_inner()
}

/// Fake payload for `core` on `arch`; distinct per pair.
pub fn payload(core: &str, arch: Arch) -> Vec<u8> {
    format!("\x7fELF {core} {arch}").into_bytes()
}

#[derive(Default)]
pub struct Served {
    pub archives: HashMap<String, Vec<u8>>,
    pub requested: Vec<String>,
    /// URLs whose download dies halfway, leaving a truncated file behind.
    pub truncated: HashSet<String>,
    /// File names `remove` refuses to delete.
    pub locked: HashSet<String>,
}

/// Toolset backed by an in-memory URL table; std::fs for the rest.
#[derive(Clone, Default)]
pub struct FakeTools {
    pub served: Rc<RefCell<Served>>,
}

impl FakeTools {
    /// Serve a well-formed archive for every arch of `core`.
    pub fn serve_core(&self, core: &str) {
        for arch in Arch::ALL {
            let name = format!("{core}_libretro_android.so");
            let data = payload(core, arch);
            self.serve(
                arch,
                core,
                zip_bytes(&[(name.as_str(), data.as_slice()), ("README.txt", b"notes")]),
            );
        }
    }

    pub fn serve(&self, arch: Arch, core: &str, bytes: Vec<u8>) {
        self.served
            .borrow_mut()
            .archives
            .insert(core_url(BASE, arch, core), bytes);
    }

    pub fn withdraw(&self, arch: Arch, core: &str) {
        self.served
            .borrow_mut()
            .archives
            .remove(&core_url(BASE, arch, core));
    }

    pub fn truncate(&self, arch: Arch, core: &str) {
        self.served
            .borrow_mut()
            .truncated
            .insert(core_url(BASE, arch, core));
    }

    pub fn lock(&self, file_name: &str) {
        self.served.borrow_mut().locked.insert(file_name.to_string());
    }

    pub fn requested(&self) -> Vec<String> {
        self.served.borrow().requested.clone()
    }
}

impl Toolset for FakeTools {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if self.served.borrow().locked.contains(name) {
            return Err(SyncError::Msg(format!("{} is locked", path.display())));
        }
        match fs::symlink_metadata(path) {
            Ok(m) if m.is_dir() => fs::remove_dir_all(path)?,
            Ok(_) => fs::remove_file(path)?,
            Err(_) => {}
        }
        Ok(())
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let mut served = self.served.borrow_mut();
        served.requested.push(url.to_string());
        if served.truncated.contains(url) {
            fs::write(dest, b"PK\x03\x04 truncated")?;
            return Err(SyncError::Msg(format!("connection reset ({url})")));
        }
        let bytes = served
            .archives
            .get(url)
            .cloned()
            .ok_or_else(|| SyncError::Msg(format!("download failed: 404 Not Found ({url})")))?;
        fs::write(dest, bytes)?;
        Ok(())
    }

    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        unzip_into(archive, dest).map(|_| ())
    }
}

pub fn updater(root: &Path, tools: &FakeTools, linker: Box<dyn LinkStrategy>) -> Updater {
    Updater {
        layout: Layout::new(root),
        tools: Box::new(tools.clone()),
        linker,
        base_url: BASE.to_string(),
        delivery: DeliveryMode::OnDemand,
    }
}

pub fn symlinking(root: &Path, tools: &FakeTools) -> Updater {
    updater(root, tools, Box::new(SymlinkStrategy))
}

/// Whatever the host supports, as the CLI would pick it.
pub fn probing(root: &Path, tools: &FakeTools) -> Updater {
    let probe_dir = root.join("bundled-cores");
    updater(root, tools, link::select(LinkPreference::Auto, &probe_dir))
}

pub fn copying(root: &Path, tools: &FakeTools) -> Updater {
    updater(root, tools, Box::new(CopyStrategy))
}

/// Every file under `dir`, relative, sorted, with contents (links followed).
pub fn snapshot(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if fs::symlink_metadata(&path).unwrap().is_dir() {
                walk(base, &path, out);
            } else {
                let rel = path.strip_prefix(base).unwrap().to_path_buf();
                out.push((rel, fs::read(&path).unwrap()));
            }
        }
    }
    let mut out = Vec::new();
    walk(dir, dir, &mut out);
    out.sort();
    out
}
