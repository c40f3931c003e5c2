pub mod model;
pub mod queries;
pub mod repository;

pub use model::Category;
pub use repository::{CategoryRepository, PgCategoryRepository};
