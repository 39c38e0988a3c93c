pub fn setup_logging() {
    logger_builder(std::env::var("RUST_LOG").ok().as_deref()).init();
}

fn logger_builder(rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, log::LevelFilter::Info);

    if let Some(rust_log) = rust_log {
        builder.parse_filters(rust_log);
    }

    builder
}
