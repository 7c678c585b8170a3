// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use sysinfo::System;

use tajweed_onboarding::error::AppResult;
use tajweed_onboarding::gui::OnboardingApp;

const LOG_TARGET_STARTUP: &str = "tajweed_onboarding::startup";

/// Initialize tracing with file rotation
///
/// Logs are written to:
/// - macOS: ~/Library/Application Support/TajweedApp/logs/
/// - Windows: %APPDATA%/TajweedApp/logs/
/// - Linux: ~/.config/TajweedApp/logs/
///
/// Daily rotation, one file per day. Debug builds also log to the console;
/// release builds log to file only.
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("TajweedApp").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "tajweed-onboarding.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

fn log_runtime_environment() {
    let version = env!("CARGO_PKG_VERSION");
    let os_name = System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| "Unknown OS".to_string());
    let kernel = System::kernel_version().unwrap_or_else(|| "Unknown Kernel".to_string());
    let architecture = std::env::consts::ARCH;

    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting Tajweed App onboarding v{} ({})",
        version,
        architecture
    );
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Operating System: {} (kernel {})",
        os_name,
        kernel
    );
}

fn main() -> AppResult<()> {
    initialize_tracing();
    log_runtime_environment();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 680.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tajweed App",
        options,
        Box::new(|cc| Ok(Box::new(OnboardingApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run onboarding window: {err}"))
}
