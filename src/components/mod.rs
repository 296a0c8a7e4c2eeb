pub mod app;
pub mod broadcast_detail_page;
pub mod broadcasts_page;
pub mod layout;
pub mod pager;
pub mod segment_detail_page;
pub mod segments_page;
pub mod user_detail_page;
pub mod users_page;

pub use app::App;
pub use broadcast_detail_page::BroadcastDetailPage;
pub use broadcasts_page::BroadcastsPage;
pub use layout::Layout;
pub use pager::Pager;
pub use segment_detail_page::SegmentDetailPage;
pub use segments_page::SegmentsPage;
pub use user_detail_page::UserDetailPage;
pub use users_page::UsersPage;
