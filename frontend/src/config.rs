use shared::DragScrollConfig;

const BUNDLED_CONFIG: &str = include_str!("../drag_scroll.toml");

/// Parse the bundled drag scroll config, falling back to defaults on any error.
pub fn load_config() -> DragScrollConfig {
    if BUNDLED_CONFIG.trim().is_empty() {
        return DragScrollConfig::default();
    }

    match DragScrollConfig::from_toml_str(BUNDLED_CONFIG) {
        Ok(config) => {
            zoon::println!(
                "drag_scroll: config loaded (sensitivity={}, coordinates={:?}, events={:?}, active_class='{}')",
                config.sensitivity,
                config.coordinate_preference,
                config.input_events,
                config.active_class,
            );
            config
        }
        Err(error) => {
            zoon::eprintln!("drag_scroll: {} (using defaults)", error);
            DragScrollConfig::default()
        }
    }
}
