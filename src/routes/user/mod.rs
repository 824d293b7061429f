mod handler;
pub mod model;

pub use handler::{create_user, delete_user, import_users, list_users, read_user, update_user};
pub use model::{CreateUser, User};
