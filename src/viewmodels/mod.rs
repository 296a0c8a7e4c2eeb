pub mod sync_viewmodel;
