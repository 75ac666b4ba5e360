//! # Flexnesse Storefront Library
//!
//! Application layer of the Flexnesse clothing store: the state a session
//! holds, the commands the host calls on user events, and the screen model
//! it paints. Nothing here talks to a window system; any host (web view,
//! terminal, test) drives the same functions.
//!
//! ## Module Organization
//! ```text
//! flexnesse_storefront/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs          ◄─── AppState, the one container of session state
//! │   ├── view.rs         ◄─── Current screen
//! │   ├── catalog.rs      ◄─── Product list
//! │   ├── cart.rs         ◄─── Cart entries & drawer flag
//! │   ├── draft.rs        ◄─── Add-product form & image preview
//! │   ├── notification.rs ◄─── Toast with auto-dismiss timer
//! │   └── config.rs       ◄─── Store name, currency, dismiss delay
//! ├── commands/
//! │   ├── view.rs     ◄─── Navigation
//! │   ├── product.rs  ◄─── Listing, admin counters, delete
//! │   ├── cart.rs     ◄─── Add to cart, drawer toggle
//! │   └── draft.rs    ◄─── Form edits, image capture, submit
//! ├── render.rs       ◄─── Screen view model
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppState                                             │
//! │                                                                         │
//! │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌──────────┐  │
//! │  │ ViewState │ │ Catalog   │ │ CartState │ │ DraftState│ │ Notific. │  │
//! │  │           │ │ State     │ │           │ │           │ │ State    │  │
//! │  └───────────┘ └───────────┘ └───────────┘ └───────────┘ └──────────┘  │
//! │                                                                         │
//! │  Each part sits behind its own lock. Commands take &AppState.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that show a toast must run inside a Tokio runtime so the
//! dismiss timer can be scheduled.

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AppState, ConfigError, StoreConfig};

/// Starts a storefront session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, DEBUG for flexnesse crates                         │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • FLEXNESSE_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • store view, empty catalog, empty cart, blank draft, no toast      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn start() -> Result<AppState, ConfigError> {
    init_tracing();

    let config = StoreConfig::from_env()?;
    info!(
        store_name = %config.store_name,
        dismiss_ms = config.notification_dismiss_ms,
        "Starting Flexnesse storefront"
    );

    Ok(AppState::new(config))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=flexnesse=trace` - Show trace for flexnesse crates only
/// - Default: INFO, DEBUG for flexnesse crates
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,flexnesse=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
