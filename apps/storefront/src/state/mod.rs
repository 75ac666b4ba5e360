//! # State Module
//!
//! All storefront state, owned by one [`AppState`] that the host keeps for
//! the lifetime of the page and passes by reference to every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         AppState                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │          │            │            │            │            │          │
//! │          ▼            ▼            ▼            ▼            ▼          │
//! │  ┌──────────┐ ┌────────────┐ ┌──────────┐ ┌──────────┐ ┌───────────┐  │
//! │  │ViewState │ │CatalogState│ │CartState │ │DraftState│ │Notification│  │
//! │  │  View    │ │ Vec<Prod>  │ │ entries  │ │ draft +  │ │ slot +    │  │
//! │  │          │ │            │ │ drawer   │ │ preview  │ │ timer     │  │
//! │  └──────────┘ └────────────┘ └──────────┘ └──────────┘ └───────────┘  │
//! │                                                                         │
//! │  Each piece has its own lock, so the dismiss timer only ever touches   │
//! │  the notification slot.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is persisted. A new `AppState` is an empty store.

mod cart;
mod catalog;
mod config;
mod draft;
mod notification;
mod view;

pub use cart::{Cart, CartState};
pub use catalog::{Catalog, CatalogState};
pub use config::{ConfigError, StoreConfig, TextDirection};
pub use draft::{Draft, DraftState, DraftUpdate};
pub use notification::NotificationState;
pub use view::ViewState;

/// Everything the storefront knows.
#[derive(Debug)]
pub struct AppState {
    pub config: StoreConfig,
    pub view: ViewState,
    pub catalog: CatalogState,
    pub cart: CartState,
    pub draft: DraftState,
    pub notifications: NotificationState,
}

impl AppState {
    pub fn new(config: StoreConfig) -> Self {
        let notifications = NotificationState::new(config.notification_delay());
        AppState {
            config,
            view: ViewState::new(),
            catalog: CatalogState::new(),
            cart: CartState::new(),
            draft: DraftState::new(),
            notifications,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(StoreConfig::default())
    }
}
