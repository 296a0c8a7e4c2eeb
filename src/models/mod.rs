pub mod broadcast;
pub mod contact;
pub mod page;
pub mod recipient;
pub mod segment;
pub mod sync;

pub use broadcast::*;
pub use contact::*;
pub use page::*;
pub use recipient::*;
pub use segment::*;
pub use sync::*;
