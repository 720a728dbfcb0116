pub mod discovery;
pub mod post;

pub use discovery::DiscoveryPhoto;
pub use post::{Post, PostInput, PostsPage};
