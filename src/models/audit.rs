use crate::dtos::CreateAuditRequest;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Lead submission for the marketing governance audit.
/// Collection: `auditrequest`.
///
/// Insert-only from this API: never read back, updated, or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub firm: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_marketing_spend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    pub source: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<CreateAuditRequest> for AuditRequest {
    fn from(request: CreateAuditRequest) -> Self {
        Self {
            id: None,
            name: request.name,
            email: request.email,
            firm: request.firm,
            industry: request.industry,
            monthly_marketing_spend: request.monthly_marketing_spend,
            phone: request.phone,
            notes: request.notes,
            preferred_time: request.preferred_time,
            source: request.source,
            created_at: Utc::now(),
        }
    }
}
