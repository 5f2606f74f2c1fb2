// Author: Dustin Pilgrim
// License: MIT

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tempfile::NamedTempFile;

use boxdraw_state::{Parcel, read_parcel, write_parcel};

use crate::paths::ensure_parent_dir;

pub fn load_state(path: &Path) -> Result<Parcel, String> {
    let file = File::open(path).map_err(|e| format!("open state {}: {e}", path.display()))?;
    read_parcel(BufReader::new(file)).map_err(|e| format!("read state {}: {e}", path.display()))
}

/// Writes next to the target and renames over it, so a crash mid-write never
/// leaves a truncated state file behind.
pub fn save_state(path: &Path, parcel: &Parcel) -> Result<(), String> {
    ensure_parent_dir(path).map_err(|e| format!("create state dir: {e}"))?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| format!("tempfile: {e}"))?;
    write_parcel(&mut tmp, parcel).map_err(|e| format!("write state: {e}"))?;
    tmp.persist(path)
        .map_err(|e| format!("save state {}: {e}", path.display()))?;

    Ok(())
}
