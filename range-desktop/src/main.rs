mod setup;
mod config_gen;

use std::env;

use range_core::config::{DataConfig, DataSource, WidgetConfig};
use range_core::services::{self, JsonFileService};
use range_core::{Driver, Exercise, Page, TerminalRenderer};

fn main() {
    let args: Vec<String> = env::args().collect();
    let arg_tui = args.iter().any(|a| a == "--tui");
    let exercise = if args.iter().any(|a| a == "--fixed") {
        Exercise::Fixed
    } else {
        Exercise::Normal
    };

    let is_tui_mode = cfg!(feature = "tui") && arg_tui;
    if arg_tui && !is_tui_mode {
        eprintln!("--tui requested but this build has no 'tui' feature, using the terminal driver.");
    }

    setup::init(is_tui_mode);
    log::info!(">>> Range Desktop Launcher Started (TUI: {}) <<<", is_tui_mode);

    let widget_cfg: WidgetConfig = range_shared::config::get("widget");
    let data_cfg: DataConfig = range_shared::config::get("data");

    if data_cfg.source == DataSource::Json {
        let seed = JsonFileService::new(&data_cfg.json_dir);
        if let Err(e) = seed.write_defaults() {
            log::warn!("Could not seed {:?}: {:#}", seed.dir(), e);
        }
    }

    let service = services::from_config(&data_cfg);
    let page = Page::load(exercise, service.as_ref(), widget_cfg.policy());
    log::info!("Loaded page: {}", page.title());

    #[cfg(feature = "tui")]
    if is_tui_mode {
        log::info!("Mode: TUI");
        run_tui(&page, widget_cfg.track_width);
        return;
    }

    log::info!("Mode: Terminal");
    let mut driver = Driver::new(page, widget_cfg.track_width, TerminalRenderer::stdio());
    driver.run();
}

#[cfg(feature = "tui")]
fn run_tui(page: &Page, track_width: u16) {
    use range_core::TuiRenderer;

    match TuiRenderer::new() {
        Ok(mut renderer) => {
            if let Err(e) = renderer.run_event_loop(page, track_width) {
                log::error!("TUI event loop failed: {}", e);
            }
        }
        Err(e) => {
            log::error!("Failed to initialize TUI: {}", e);
        }
    }
}
