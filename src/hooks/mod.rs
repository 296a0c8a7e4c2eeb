pub mod use_detail;
pub mod use_paginated;
pub mod use_sync;

pub use use_detail::{use_detail, UseDetailHandle};
pub use use_paginated::{use_paginated, UsePaginatedHandle};
pub use use_sync::{use_sync, UseSyncHandle};
