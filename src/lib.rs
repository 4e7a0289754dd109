//! # DrapeKit
//!
//! Virtual try-on layout: garment images are placed over a photograph of a
//! person with one- and two-pointer gestures, then exported as a layout and an
//! instruction prompt for an image-generation call.
//!
//! ## Architecture
//!
//! DrapeKit is organized as a workspace with multiple crates:
//!
//! 1. **drapekit-core** - Identifiers, points, transforms, errors, event bus
//! 2. **drapekit-designer** - Gesture engine, canvas, layers, layout export
//! 3. **drapekit-settings** - Configuration files and validation
//! 4. **drapekit** - This crate: re-exports, logging setup and the replay binary

use std::path::Path;

use anyhow::Context;

pub use drapekit_core::data;
pub use drapekit_designer as designer;
pub use drapekit_settings as settings;

pub use drapekit_core::{
    AppEvent, CanvasEvent, Error, EventBus, LayerEvent, ObjectId, PointerId, Result, ScreenPoint,
    SettingsEvent, SurfacePoint, Transform,
};

pub use drapekit_designer::{
    Canvas, Garment, GestureConfig, GestureEngine, GestureHost, GestureKind, LayerMove, Layout,
    PointerEvent, PromptBuilder, Session, SharedCanvas, TargetKind, Viewport, WearMode,
};

pub use drapekit_settings::{default_config_path, Config, LoggingSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - `RUST_LOG` support, falling back to the configured level
/// - Pretty or JSON lines output on stderr
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .with_context(|| format!("Invalid log level '{}'", settings.level))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if settings.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init()
    };

    result.context("Logging already initialized")
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one the platform default is used when
/// present, otherwise built-in defaults apply. The outcome is announced on
/// `bus` when given.
pub fn load_config(path: Option<&Path>, bus: Option<&EventBus>) -> anyhow::Result<Config> {
    let source = match path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path()
            .ok()
            .filter(|candidate| candidate.exists()),
    };

    let (config, event) = match source {
        Some(path) => {
            let config = Config::load_from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (config, SettingsEvent::Loaded { path })
        }
        None => (Config::default(), SettingsEvent::DefaultsApplied),
    };

    if let Some(bus) = bus {
        let _ = bus.publish(AppEvent::Settings(event));
    }
    Ok(config)
}

/// Layout payload and prompt text for one generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub layout_json: String,
    pub prompt: String,
}

/// Exports the canvas as a generation request.
pub fn prepare_request(canvas: &Canvas, prompt: &PromptBuilder) -> anyhow::Result<GenerationRequest> {
    let layout = canvas.layout().context("Failed to export layout")?;
    let prompt = prompt
        .build(&layout)
        .context("Failed to build instruction prompt")?;
    let layout_json = layout.to_json().context("Failed to serialize layout")?;
    Ok(GenerationRequest {
        layout_json,
        prompt,
    })
}

/// Empty canvas over the configured surface with the configured gesture tuning.
pub fn canvas_from_config(config: &Config) -> Canvas {
    Canvas::with_config(
        config.canvas.to_viewport(),
        config.gesture.to_engine_config(),
    )
}

/// Replays a recorded session under `config` and exports the result.
///
/// A session without recorded surface geometry is replayed over the configured
/// canvas.
pub fn replay_session(session: &Session, config: &Config) -> anyhow::Result<GenerationRequest> {
    let canvas = session.replay(
        config.canvas.to_viewport(),
        config.gesture.to_engine_config(),
    );
    tracing::info!(
        "Replayed {} events over {} garments",
        session.events.len(),
        canvas.garment_count()
    );
    prepare_request(&canvas, &PromptBuilder::new())
}
