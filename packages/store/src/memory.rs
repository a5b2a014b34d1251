use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use crate::models::{Shelf, ShelfBase};
use crate::shelves::ShelfApi;

/// In-memory ShelfApi for testing and offline development.
///
/// Behaves like the real backend as far as the store can tell: ids are
/// assigned on creation and listing returns the full collection in
/// creation order. Clones share the same collection.
#[derive(Clone, Debug, Default)]
pub struct MemoryShelfApi {
    shelves: Arc<Mutex<Vec<Shelf>>>,
    next_id: Arc<Mutex<u64>>,
}

impl MemoryShelfApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every shelf, keeping the id counter running.
    pub fn clear(&self) {
        self.shelves.lock().unwrap().clear();
    }
}

impl ShelfApi for MemoryShelfApi {
    type Error = Infallible;

    async fn list_shelves(&self) -> Result<Vec<Shelf>, Infallible> {
        Ok(self.shelves.lock().unwrap().clone())
    }

    async fn create_shelf(&self, shelf: ShelfBase) -> Result<Shelf, Infallible> {
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            next_id.to_string()
        };
        let created = Shelf { id, base: shelf };
        self.shelves.lock().unwrap().push(created.clone());
        Ok(created)
    }
}
