//! Standalone demo: opens a window with the hex picker.
//!
//! Pass a TOML file path as the first argument to override sizing.

use std::path::Path;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hexpick::{hex_picker_with_config, PickerConfig, PickerController};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = std::env::args()
        .nth(1)
        .map(|path| PickerConfig::load_or_default(Path::new(&path)))
        .unwrap_or_default();
    let size = (config.field_width + 40.0, config.field_height + 200.0);

    let controller = RwSignal::new(PickerController::new());

    floem::Application::new()
        .window(
            move |_| {
                hex_picker_with_config(controller, config.clone())
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(WindowConfig::default().size(size).title("floem-hexpick")),
        )
        .run();
}
