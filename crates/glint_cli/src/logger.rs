use log::LevelFilter;

/// Initialize the logger, layering `level` over `RUST_LOG`.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
