mod handler;
pub mod model;

pub use handler::{
    create_product, delete_product, import_products, list_products, read_product, update_product,
};
pub use model::{CreateProduct, Product};
