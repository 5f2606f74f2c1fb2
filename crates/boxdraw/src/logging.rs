// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use eventline::runtime::{self, LogLevel};

use crate::paths::ensure_parent_dir;

/// Level used for a run: Debug with `--verbose`, Info otherwise.
fn level_for(verbose: bool) -> LogLevel {
    if verbose { LogLevel::Debug } else { LogLevel::Info }
}

/// Starts eventline with a file sink at `log_path`. The console sink only
/// comes up with `--verbose`, so `draw`/`inspect` output stays clean.
pub fn init_logging(log_path: &Path, verbose: bool) -> Result<(), String> {
    ensure_parent_dir(log_path)
        .map_err(|e| format!("create log dir {}: {e}", log_path.display()))?;

    async_io::block_on(runtime::init());

    runtime::enable_file_output(log_path)
        .map_err(|e| format!("log to {}: {e}", log_path.display()))?;
    runtime::enable_console_output(verbose);
    runtime::enable_console_color(verbose);
    runtime::set_log_level(level_for(verbose));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert!(matches!(level_for(true), LogLevel::Debug));
        assert!(matches!(level_for(false), LogLevel::Info));
    }

    #[test]
    fn init_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("state").join("boxdraw.log");

        init_logging(&log_path, false).unwrap();
        assert!(log_path.parent().unwrap().is_dir());
    }
}
