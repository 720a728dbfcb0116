pub mod app;
pub mod auth_modal;
pub mod create_edit_modal;
pub mod discovery;
pub mod header;
pub mod masonry_grid;
pub mod pagination;
pub mod pin_card;
pub mod search_by_id;

pub use app::App;
pub use auth_modal::AuthModal;
pub use create_edit_modal::CreateEditModal;
pub use discovery::Discovery;
pub use header::Header;
pub use masonry_grid::MasonryGrid;
pub use pagination::Pagination;
pub use pin_card::PinCard;
pub use search_by_id::SearchById;
