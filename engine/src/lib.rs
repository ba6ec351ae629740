//! Captionista Core Library
//!
//! Composes stylized, multilingual captions for images: a style phrase (or
//! a model-generated description), a decorative emoji, optional translation
//! and a Unicode font style.
//!
//! The `ipc` module is the boundary a front-end binds to; everything it needs
//! lives in [`AppState`].

pub mod core;
pub mod ipc;

use std::sync::{Arc, OnceLock};

use crate::core::service::CaptionService;
use crate::core::settings::{CaptionSettings, LoggingSettings, SettingsManager};
use crate::core::CoreResult;

// =============================================================================
// Application State
// =============================================================================

/// Application state shared across all commands
pub struct AppState {
    /// Caption pipeline; immutable after construction
    pub caption_service: Arc<CaptionService>,
}

impl AppState {
    pub fn new(caption_service: CaptionService) -> Self {
        Self {
            caption_service: Arc::new(caption_service),
        }
    }

    /// Creates the app state from explicit settings
    pub fn from_settings(settings: &CaptionSettings) -> CoreResult<Self> {
        Ok(Self::new(CaptionService::from_settings(settings)?))
    }

    /// Loads settings from the platform config directory (or defaults) and
    /// builds the app state
    pub fn load() -> CoreResult<Self> {
        let settings = SettingsManager::default_location()
            .map(|manager| manager.load())
            .unwrap_or_default();
        Self::from_settings(&settings)
    }
}

// =============================================================================
// Logging
// =============================================================================

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. When a log
/// directory is configured, a daily rolling file is written as well.
/// Calling this more than once is harmless.
pub fn init_logging(settings: &LoggingSettings) {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.level));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(cfg!(debug_assertions));

    let file_layer = settings.log_dir.as_ref().map(|log_dir| {
        // Best effort: the appender reports its own errors on write.
        let _ = std::fs::create_dir_all(log_dir);

        let file_appender = tracing_appender::rolling::daily(log_dir, "captionista.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = LOG_GUARD.set(guard);

        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
    });

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer);

    // Avoid panics if already initialized (tests, embedding hosts).
    let _ = tracing::subscriber::set_global_default(subscriber);
}
