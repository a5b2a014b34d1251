//! # ShelfStore: client-side mirror of the server's shelf collection
//!
//! [`ShelfStore`] keeps a session-scoped, in-memory copy of the shelves the
//! backend knows about, and synchronises it through the [`ShelfApi`] trait.
//! All network I/O goes through that trait, so the same store works against
//! the HTTP client (the `api` crate) or an in-memory backend
//! ([`crate::MemoryShelfApi`]) in tests and offline development.
//!
//! ## [`ShelfApi`] trait
//!
//! An async interface with two methods: `list_shelves` returns the
//! authoritative full collection, `create_shelf` submits a [`ShelfBase`]
//! payload and returns the persisted record. Each implementation brings its
//! own error type; the store surfaces those errors to the caller unchanged.
//!
//! ## State handling
//!
//! The shelf sequence lives behind `Arc<Mutex<…>>`, so clones of a store
//! share one collection. The sequence is only ever replaced wholesale
//! ([`fetch`](ShelfStore::fetch)) or appended to
//! ([`create`](ShelfStore::create)); there are no in-place edits or
//! removals. The lock is held only while applying a response, never across
//! an await, so overlapping calls through clones of the same store resolve
//! in whatever order their responses arrive.

use std::sync::{Arc, Mutex};

use crate::models::{Shelf, ShelfBase};

/// Async interface to the shelf endpoints of the backend.
pub trait ShelfApi {
    /// Error type surfaced by the backend, passed through to callers as-is.
    type Error: std::fmt::Display;

    fn list_shelves(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Shelf>, Self::Error>>;
    fn create_shelf(
        &self,
        shelf: ShelfBase,
    ) -> impl std::future::Future<Output = Result<Shelf, Self::Error>>;
}

/// Session-scoped shelf collection backed by a [`ShelfApi`].
///
/// Create one per session and hand clones to whatever needs shelf data;
/// clones share the same underlying collection.
#[derive(Clone, Debug)]
pub struct ShelfStore<A: ShelfApi> {
    api: A,
    shelves: Arc<Mutex<Vec<Shelf>>>,
}

impl<A: ShelfApi> ShelfStore<A> {
    /// Create an empty store on top of the given backend.
    pub fn new(api: A) -> Self {
        Self {
            api,
            shelves: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the current shelf sequence, in fetch/creation order.
    pub fn shelves(&self) -> Vec<Shelf> {
        self.shelves.lock().unwrap().clone()
    }

    /// Replace the local collection with the server's.
    ///
    /// On failure the error is returned unchanged and the local collection
    /// keeps its pre-call contents.
    pub async fn fetch(&self) -> Result<(), A::Error> {
        let fetched = self.api.list_shelves().await.inspect_err(|e| {
            tracing::warn!("listing shelves failed: {e}");
        })?;
        tracing::debug!(count = fetched.len(), "refreshed shelves");
        *self.shelves.lock().unwrap() = fetched;
        Ok(())
    }

    /// Create a shelf on the server and append the persisted record.
    ///
    /// The appended record is the server's response, not the submitted
    /// payload (the id is assigned server-side). On failure the error is
    /// returned unchanged and nothing is appended.
    pub async fn create(&self, shelf: ShelfBase) -> Result<(), A::Error> {
        let created = self.api.create_shelf(shelf).await.inspect_err(|e| {
            tracing::warn!("creating shelf failed: {e}");
        })?;
        tracing::debug!(id = %created.id, "created shelf");
        self.shelves.lock().unwrap().push(created);
        Ok(())
    }
}
