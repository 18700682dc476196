use crate::dtos::{CreateAuditRequest, CreatedResponse};
use crate::error::AppError;
use crate::models::AuditRequest;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

pub const AUDIT_COLLECTION: &str = "auditrequest";

#[tracing::instrument(skip(state, request))]
pub async fn create_audit(
    State(state): State<AppState>,
    Json(request): Json<CreateAuditRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    request.validate()?;

    let audit = AuditRequest::from(request);
    let id = state.store.insert(AUDIT_COLLECTION, &audit).await?;

    tracing::info!(audit_id = %id, firm = %audit.firm, "Audit request recorded");

    Ok((StatusCode::CREATED, Json(CreatedResponse { ok: true, id })))
}
