//! logger.rs
//! Configuración del logger usando env_logger.

use env_logger;

pub fn init_logger() {
    // Nivel tomado de RUST_LOG; "info" si no está definido.
    let log_env = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_env))
        .format_timestamp_secs()
        .init();
}
