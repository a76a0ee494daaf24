//! Console logging for the wasm module

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route `log` records and `tracing` events to the browser console.
pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::default());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        // std::time is not available on wasm32-unknown-unknown
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(fmt_layer);

    // Another module on the page may have claimed the global default first
    let _ = tracing::subscriber::set_global_default(subscriber);
}
