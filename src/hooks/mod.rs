pub mod use_posts;
pub mod use_session;

pub use use_posts::{use_posts, AppEngine, UsePostsHandle};
pub use use_session::{use_session, UseSessionHandle};
