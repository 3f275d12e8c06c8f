//! Drag-to-scroll frontend entry point

use zoon::*;

mod app;
mod config;
mod dragging;

pub fn main() {
    let config = config::load_config();
    let app = app::DragScrollApp::new(config);
    start_app("app", move || app.root());
}
