//! Demo entry point (native).

#[cfg(feature = "native")]
fn main() {
    use starrate_app::{App, AppConfig};

    env_logger::init();
    log::info!("Starting star rating demo");

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path).unwrap_or_else(|e| {
            log::error!("{}; using defaults", e);
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    if let Err(e) = App::with_config(config).run() {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
