pub mod api;
pub mod transport;

pub use api::*;
