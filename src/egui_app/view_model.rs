//! Helpers to convert an alert request into the texts the screen renders.
//!
//! Display text is a pure function of the request: no validation, no
//! defaults. Empty inputs keep the constant prefixes intact.

use crate::leads::AlertRequest;

/// Constant banner shown above the lead details.
pub const ALERT_TITLE: &str = "🔔 New Lead Alert!";

/// Name line, verbatim from the request.
pub fn name_text(request: &AlertRequest) -> String {
    request.lead_name.clone()
}

/// Location line with the pin prefix.
pub fn location_text(request: &AlertRequest) -> String {
    format!("📍 {}", request.lead_location)
}

/// Score line with the label and percent suffix.
pub fn score_text(request: &AlertRequest) -> String {
    format!("Match Score: {}%", request.match_score)
}

/// Fully derived view texts for one alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertViewModel {
    pub title: &'static str,
    pub name: String,
    pub location: String,
    pub score: String,
}

impl AlertViewModel {
    /// Derive every display field from the request.
    pub fn from_request(request: &AlertRequest) -> Self {
        Self {
            title: ALERT_TITLE,
            name: name_text(request),
            location: location_text(request),
            score: score_text(request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_request_renders_all_fields() {
        let request = AlertRequest::new("Acme Corp", "Austin, TX", "87");
        let view = AlertViewModel::from_request(&request);
        assert_eq!(view.title, "🔔 New Lead Alert!");
        assert_eq!(view.name, "Acme Corp");
        assert_eq!(view.location, "📍 Austin, TX");
        assert_eq!(view.score, "Match Score: 87%");
    }

    #[test]
    fn empty_request_keeps_constant_prefixes() {
        let request = AlertRequest::default();
        let view = AlertViewModel::from_request(&request);
        assert_eq!(view.title, "🔔 New Lead Alert!");
        assert_eq!(view.name, "");
        assert_eq!(view.location, "📍 ");
        assert_eq!(view.score, "Match Score: %");
    }
}
