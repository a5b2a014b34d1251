pub mod models;
pub mod shelves;

mod memory;
pub use memory::MemoryShelfApi;

pub use models::{Shelf, ShelfBase};
pub use shelves::{ShelfApi, ShelfStore};
