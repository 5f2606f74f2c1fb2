// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use eventline::{debug, info};

use boxdraw_core::{DragBox, RecordingCanvas, RectF};

use crate::cli::Cmd;
use crate::config::BoxdrawConfig;
use crate::pixels::PixelCanvas;
use crate::script::load_script;
use crate::state_file::{load_state, save_state};
use crate::surface::Surface;
use crate::view::BoxDrawingView;

pub struct DrawOpts {
    pub script: Option<PathBuf>,
    pub restore: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub png: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

pub fn run(cmd: Cmd, cfg: &BoxdrawConfig) -> Result<(), String> {
    match cmd {
        Cmd::Draw {
            script,
            restore,
            save,
            png,
            width,
            height,
        } => {
            let opts = DrawOpts {
                script,
                restore,
                save,
                png,
                width,
                height,
            };
            let summary = draw(&opts, cfg)?;
            println!(
                "{} boxes, {} redraws requested, wrote {}",
                summary.boxes,
                summary.redraws,
                summary.png.display()
            );
            Ok(())
        }
        Cmd::Inspect { state } => {
            for line in inspect(&state, cfg)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

#[derive(Debug)]
pub struct DrawSummary {
    pub boxes: usize,
    pub redraws: usize,
    pub png: PathBuf,
}

pub fn draw(opts: &DrawOpts, cfg: &BoxdrawConfig) -> Result<DrawSummary, String> {
    let mut view = BoxDrawingView::new(Surface::default(), cfg.paints());

    if let Some(path) = &opts.restore {
        info!("restoring state from {}", path.display());
        let parcel = load_state(path)?;
        view.on_restore_instance_state(parcel)
            .map_err(|e| format!("restore {}: {e}", path.display()))?;
        // the restored frame is drawn below anyway
        view.take_invalidated();
    }

    let current = *view.parent();
    *view.parent_mut() = Surface::new(
        opts.width.unwrap_or(current.width),
        opts.height.unwrap_or(current.height),
    );

    let mut redraws = 0;
    if let Some(path) = &opts.script {
        let events = load_script(path)?;
        debug!("replaying {} events from {}", events.len(), path.display());

        for event in events {
            view.on_touch_event(event);
            if view.take_invalidated() {
                redraws += 1;
            }
        }
    }

    let surface = *view.parent();
    let mut canvas = PixelCanvas::new(surface.width, surface.height)?;
    view.on_draw(&mut canvas);

    let png = match &opts.png {
        Some(p) => p.clone(),
        None => cfg.output_directory.join("boxdraw.png"),
    };
    crate::paths::ensure_parent_dir(&png)
        .map_err(|e| format!("create output dir for {}: {e}", png.display()))?;
    canvas.save_png(&png)?;
    info!("wrote {}x{} frame to {}", surface.width, surface.height, png.display());

    if let Some(path) = &opts.save {
        save_state(path, &view.on_save_instance_state())?;
        info!("saved {} boxes to {}", view.boxes().len(), path.display());
    }

    Ok(DrawSummary {
        boxes: view.boxes().len(),
        redraws,
        png,
    })
}

/// One line for the surface, then one per box in draw order.
pub fn inspect(path: &Path, cfg: &BoxdrawConfig) -> Result<Vec<String>, String> {
    let parcel = load_state(path)?;

    let mut view = BoxDrawingView::new(Surface::default(), cfg.paints());
    view.on_restore_instance_state(parcel)
        .map_err(|e| format!("restore {}: {e}", path.display()))?;

    let mut canvas = RecordingCanvas::new();
    view.on_draw(&mut canvas);

    let surface = view.parent();
    let mut lines = vec![format!(
        "surface {}x{}, {} boxes",
        surface.width,
        surface.height,
        view.boxes().len()
    )];

    for (i, (b, rect)) in view.boxes().iter().zip(canvas.rects()).enumerate() {
        lines.push(format_box(i + 1, b, rect));
    }

    Ok(lines)
}

fn format_box(index: usize, b: &DragBox, r: RectF) -> String {
    let o = b.origin();
    let c = b.current;
    format!(
        "box{index}: origin=({}, {}) current=({}, {}) rect=[left={} top={} right={} bottom={}]",
        o.x, o.y, c.x, c.y, r.left, r.top, r.right, r.bottom
    )
}
