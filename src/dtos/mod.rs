use serde::Serialize;

pub mod articles;
pub mod audit;

pub use articles::{ArticleListResponse, ArticleResponse, CreateArticleRequest, ListArticlesParams};
pub use audit::CreateAuditRequest;

/// Response body for successful inserts.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub ok: bool,
    pub id: String,
}
