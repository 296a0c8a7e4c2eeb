pub mod generation;
pub mod pagination;

pub use generation::FetchGeneration;
pub use pagination::PageWindow;
