pub mod article;
pub mod audit;

pub use article::Article;
pub use audit::AuditRequest;
