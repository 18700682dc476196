use crate::dtos::{
    ArticleListResponse, ArticleResponse, CreateArticleRequest, CreatedResponse,
    ListArticlesParams,
};
use crate::error::AppError;
use crate::models::Article;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::doc;
use validator::Validate;

pub const ARTICLE_COLLECTION: &str = "article";

const LIST_LIMIT: i64 = 50;

pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListArticlesParams>,
) -> Result<Json<ArticleListResponse>, AppError> {
    let published = params.published.unwrap_or(true);

    // A false flag clears the filter entirely, so drafts and published
    // articles come back together.
    let filter = if published {
        doc! { "published": true }
    } else {
        doc! {}
    };

    let articles: Vec<Article> = state
        .store
        .find(ARTICLE_COLLECTION, filter, LIST_LIMIT)
        .await?;

    let items = articles.into_iter().map(ArticleResponse::from).collect();

    Ok(Json(ArticleListResponse { items }))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_article(
    State(state): State<AppState>,
    Json(request): Json<CreateArticleRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    request.validate()?;

    let article = Article::new(
        request.title,
        request.summary,
        request.content,
        request.author,
        request.tags,
        request.published,
    );

    let id = state.store.insert(ARTICLE_COLLECTION, &article).await?;

    tracing::info!(article_id = %id, slug = %article.slug, "Article created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { ok: true, id })))
}
