//! Lead data model shared across the alert pipeline.

use serde::{Deserialize, Serialize};

pub mod pool;

pub use pool::LeadPool;

/// An inbound contact record the surrounding system has matched.
///
/// The alert screen displays only name, location, and score; the remaining
/// fields travel with the record for follow-up outside this app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub location: String,
    pub match_score_percent: u8,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Transient payload handed to the alert screen at launch.
///
/// All fields are unconstrained text; absent values are empty strings and
/// render as blank. No validation happens here or on the screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertRequest {
    pub lead_name: String,
    pub lead_location: String,
    pub match_score: String,
}

impl AlertRequest {
    /// Build a request from raw text parts.
    pub fn new(
        lead_name: impl Into<String>,
        lead_location: impl Into<String>,
        match_score: impl Into<String>,
    ) -> Self {
        Self {
            lead_name: lead_name.into(),
            lead_location: lead_location.into(),
            match_score: match_score.into(),
        }
    }
}

impl From<&Lead> for AlertRequest {
    fn from(lead: &Lead) -> Self {
        Self {
            lead_name: lead.name.clone(),
            lead_location: lead.location.clone(),
            match_score: lead.match_score_percent.to_string(),
        }
    }
}

/// Built-in demo leads used when the config carries no custom pool.
pub fn demo_leads() -> Vec<Lead> {
    fn lead(id: &str, name: &str, location: &str, score: u8, phone: &str, email: &str) -> Lead {
        Lead {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            match_score_percent: score,
            phone: phone.into(),
            email: email.into(),
        }
    }

    vec![
        lead(
            "lead_001",
            "Rajesh Kumar",
            "T. Nagar, Chennai, Tamil Nadu",
            94,
            "+91 98765 43210",
            "rajesh.kumar@email.com",
        ),
        lead(
            "lead_002",
            "Priya Sharma",
            "Anna Nagar, Chennai, Tamil Nadu",
            88,
            "+91 87654 32109",
            "priya.sharma@email.com",
        ),
        lead(
            "lead_003",
            "Arjun Patel",
            "Adyar, Chennai, Tamil Nadu",
            76,
            "+91 76543 21098",
            "arjun.patel@email.com",
        ),
        lead(
            "lead_004",
            "Sneha Reddy",
            "Velachery, Chennai, Tamil Nadu",
            91,
            "+91 65432 10987",
            "sneha.reddy@email.com",
        ),
        lead(
            "lead_005",
            "Vikram Singh",
            "Mylapore, Chennai, Tamil Nadu",
            83,
            "+91 54321 09876",
            "vikram.singh@email.com",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_from_lead_stringifies_score() {
        let leads = demo_leads();
        let request = AlertRequest::from(&leads[0]);
        assert_eq!(request.lead_name, "Rajesh Kumar");
        assert_eq!(request.lead_location, "T. Nagar, Chennai, Tamil Nadu");
        assert_eq!(request.match_score, "94");
    }

    #[test]
    fn default_request_is_all_empty() {
        let request = AlertRequest::default();
        assert!(request.lead_name.is_empty());
        assert!(request.lead_location.is_empty());
        assert!(request.match_score.is_empty());
    }

    #[test]
    fn lead_optional_contact_fields_default_when_absent() {
        let lead: Lead = toml::from_str(
            r#"
            id = "lead_x"
            name = "Acme Corp"
            location = "Austin, TX"
            match_score_percent = 87
            "#,
        )
        .unwrap();
        assert!(lead.phone.is_empty());
        assert!(lead.email.is_empty());
    }
}
