//! Archive extraction for downloaded package artifacts.
//!
//! The corpus is untrusted third-party data, so malformed archives are an
//! expected condition rather than an error: every decode or I/O fault
//! collapses to `false` and the caller abandons the candidate. Success is
//! only reported when the whole archive unpacked cleanly.

use std::fs::File;
use std::path::Path;

use anyhow::Result;
use flate2::read::GzDecoder;

/// Unpack `path` into `into` based on its lowercased file name.
///
/// `.tar.gz` and `.zip` are the supported formats; anything else returns
/// `false` without touching the file. Decode failures (including zip
/// entry names that cannot be decoded) also return `false`.
pub fn extract(path: &Path, into: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if name.ends_with(".tar.gz") {
        extract_tar_gz(path, into).is_ok()
    } else if name.ends_with(".zip") {
        extract_zip(path, into).is_ok()
    } else {
        false
    }
}

fn extract_tar_gz(path: &Path, into: &Path) -> Result<()> {
    let file = File::open(path)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive.unpack(into)?;
    Ok(())
}

fn extract_zip(path: &Path, into: &Path) -> Result<()> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    archive.extract(into)?;
    Ok(())
}
