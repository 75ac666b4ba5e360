//! # Commands Module
//!
//! Every handler the host calls in response to a user event.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── view.rs     ◄─── Header / panel navigation
//! ├── product.rs  ◄─── Catalog listing, admin counters, delete
//! ├── cart.rs     ◄─── Add to cart, drawer toggle
//! └── draft.rs    ◄─── Add-product form, image capture, submit
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Host event (click, submit, file pick)                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(&app, id)   ◄── AppState by reference     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  state replaced under its own lock, toast armed                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  host calls render::render(&app) and repaints                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers that show a toast arm its timer on the current Tokio runtime.

pub mod cart;
pub mod draft;
pub mod product;
pub mod view;
