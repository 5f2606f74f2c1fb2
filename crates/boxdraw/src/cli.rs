// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "boxdraw", version, about = "Drag to draw boxes, headless.")]
pub struct Args {
    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/boxdraw/boxdraw.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Override config file (default: $XDG_CONFIG_HOME/boxdraw/boxdraw.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Replay a gesture script into the view and render the result
    Draw {
        /// Gesture script (one `down|move|up|cancel x y` per line)
        #[arg(long, short = 's')]
        script: Option<PathBuf>,

        /// Restore view state saved by an earlier run before replaying
        #[arg(long)]
        restore: Option<PathBuf>,

        /// Save view state here after replaying
        #[arg(long)]
        save: Option<PathBuf>,

        /// PNG output (default: <output_directory>/boxdraw.png)
        #[arg(long)]
        png: Option<PathBuf>,

        /// Surface width (default: restored size, else 480)
        #[arg(long)]
        width: Option<u32>,

        /// Surface height (default: restored size, else 800)
        #[arg(long)]
        height: Option<u32>,
    },

    /// Print the boxes held in a saved state file
    Inspect {
        /// State file written by `draw --save`
        state: PathBuf,
    },
}
