pub mod merge;
pub mod paging;
pub mod sync_engine;
pub mod sync_state;

pub use merge::merge_posts;
pub use paging::{item_range, page_numbers, parse_page, total_pages, PageSlot};
pub use sync_engine::{PostCache, PostSource, SyncEngine};
pub use sync_state::SyncState;
