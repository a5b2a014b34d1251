//! # API crate — typed HTTP client for the shelf service
//!
//! This crate is the network edge of the client data layer. It wraps the
//! shelf service's versioned REST API in a typed [`ShelfClient`] and wires
//! it into the `store` crate's state container.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ShelfClient`], one method per API route, plus the [`store::ShelfApi`] implementation that plugs it into a [`store::ShelfStore`] |
//! | [`error`] | [`ApiError`], the error taxonomy surfaced to callers |
//! | [`models`] | Wire models for sections and links (shelf models are re-exported from `store`) |
//! | [`settings`] | [`Settings`], loaded from `config.toml` and the environment |
//!
//! ## Getting a synced store
//!
//! ```rust,ignore
//! let settings = api::Settings::new()?;
//! let client = api::ShelfClient::from_settings(&settings)?;
//! let shelves = api::ShelfStore::new(client);
//! shelves.fetch().await?;
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod settings;

pub use client::ShelfClient;
pub use error::ApiError;
pub use models::{ApiMessage, Link, LinkBase, Section, SectionBase};
pub use settings::Settings;

pub use store::{Shelf, ShelfBase, ShelfStore};
