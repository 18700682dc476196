pub mod articles;
pub mod audit;
pub mod health;

pub use articles::{create_article, list_articles};
pub use audit::create_audit;
pub use health::{diagnostics, read_root};
