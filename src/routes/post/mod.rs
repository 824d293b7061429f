mod handler;
pub mod model;

pub use handler::{create_post, delete_post, import_posts, list_posts, read_post, update_post};
pub use model::{CreatePost, Post};
