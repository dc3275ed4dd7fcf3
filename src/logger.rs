use log::LevelFilter;

/// Initialize the logger; `RUST_LOG` still refines the level.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
