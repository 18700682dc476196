use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAuditRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Firm cannot be empty"))]
    pub firm: String,
    #[validate(length(min = 1, message = "Industry cannot be empty"))]
    pub industry: String,
    #[validate(range(min = 0.0, message = "Monthly marketing spend must be non-negative"))]
    pub monthly_marketing_spend: Option<f64>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub preferred_time: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "website".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_payload() -> serde_json::Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@firm.example",
            "firm": "Doe Capital",
            "industry": "wealth management"
        })
    }

    #[test]
    fn minimal_payload_passes_with_defaults() {
        let request: CreateAuditRequest =
            serde_json::from_value(minimal_payload()).expect("Failed to deserialize request");

        assert!(request.validate().is_ok());
        assert_eq!(request.source, "website");
        assert!(request.monthly_marketing_spend.is_none());
        assert!(request.phone.is_none());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut payload = minimal_payload();
        payload["email"] = json!("not-an-email");

        let request: CreateAuditRequest =
            serde_json::from_value(payload).expect("Failed to deserialize request");

        assert!(request.validate().is_err());
    }

    #[test]
    fn negative_marketing_spend_is_rejected() {
        let mut payload = minimal_payload();
        payload["monthly_marketing_spend"] = json!(-5.0);

        let request: CreateAuditRequest =
            serde_json::from_value(payload).expect("Failed to deserialize request");

        assert!(request.validate().is_err());
    }

    #[test]
    fn zero_marketing_spend_is_accepted() {
        let mut payload = minimal_payload();
        payload["monthly_marketing_spend"] = json!(0.0);

        let request: CreateAuditRequest =
            serde_json::from_value(payload).expect("Failed to deserialize request");

        assert!(request.validate().is_ok());
    }

    #[test]
    fn missing_required_field_fails_to_deserialize() {
        let mut payload = minimal_payload();
        payload.as_object_mut().unwrap().remove("firm");

        assert!(serde_json::from_value::<CreateAuditRequest>(payload).is_err());
    }

    #[test]
    fn explicit_source_overrides_default() {
        let mut payload = minimal_payload();
        payload["source"] = json!("referral");

        let request: CreateAuditRequest =
            serde_json::from_value(payload).expect("Failed to deserialize request");

        assert_eq!(request.source, "referral");
    }
}
