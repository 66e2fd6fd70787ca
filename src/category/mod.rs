//! Category Domain Module
//!
//! Categories are created and read; each read lists the category's products.

pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::routes;
pub use models::Category;
pub use repository::CategoryRepository;
