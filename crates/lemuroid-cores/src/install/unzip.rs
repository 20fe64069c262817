use crate::errors::Result;
use std::fs;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// Extract every entry into `dest`, overwriting files of the same name.
/// Returns the number of files written.
pub fn unzip_into(zip_path: &Path, dest: &Path) -> Result<usize> {
    let f = fs::File::open(zip_path)?;
    let mut archive = ZipArchive::new(f)?;
    fs::create_dir_all(dest)?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let outpath = dest.join(file.mangled_name());
        if file.name().ends_with('/') {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            // Replace rather than write through: the old file may be a link.
            if fs::symlink_metadata(&outpath).is_ok() {
                fs::remove_file(&outpath)?;
            }
            let mut out = fs::File::create(&outpath)?;
            std::io::copy(&mut file, &mut out)?;
            written += 1;
        }
    }

    debug!(archive = %zip_path.display(), files = written, "extracted");
    Ok(written)
}
