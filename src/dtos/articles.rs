use crate::models::Article;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListArticlesParams {
    pub published: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub created_at: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: article.title,
            slug: article.slug,
            summary: article.summary,
            content: article.content,
            author: article.author,
            tags: article.tags,
            published: article.published,
            published_at: article.published_at.map(|t| t.to_rfc3339()),
            created_at: article.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_and_published_default_when_omitted() {
        let request: CreateArticleRequest = serde_json::from_value(json!({
            "title": "Hello World",
            "summary": "s",
            "content": "c",
            "author": "a"
        }))
        .expect("Failed to deserialize request");

        assert!(request.tags.is_empty());
        assert!(!request.published);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let request: CreateArticleRequest = serde_json::from_value(json!({
            "title": "",
            "summary": "s",
            "content": "c",
            "author": "a"
        }))
        .expect("Failed to deserialize request");

        assert!(request.validate().is_err());
    }

    #[test]
    fn missing_required_field_fails_to_deserialize() {
        let result = serde_json::from_value::<CreateArticleRequest>(json!({
            "title": "Hello World",
            "summary": "s"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn response_exposes_hex_id_and_string_timestamps() {
        use chrono::Utc;
        use mongodb::bson::oid::ObjectId;

        let oid = ObjectId::new();
        let mut article = crate::models::Article::new(
            "Hello World".to_string(),
            "s".to_string(),
            "c".to_string(),
            "a".to_string(),
            vec!["governance".to_string()],
            true,
        );
        article.id = Some(oid);
        article.published_at = Some(Utc::now());

        let response = ArticleResponse::from(article);

        assert_eq!(response.id, oid.to_hex());
        assert!(response.published_at.is_some());
        assert!(!response.created_at.is_empty());
    }
}
