//! Wire types for the event platform API. Field names follow the server's
//! camelCase JSON convention.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::mint::validate::MintValues;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub network_id: u64,
    pub token_count: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    /// Inverse of the form's "public" toggle: a managed event restricts
    /// who may join.
    pub is_managed: bool,
}

impl CreateEventRequest {
    pub fn from_values(values: &MintValues, network_id: u64) -> Self {
        Self {
            network_id,
            token_count: values.token_count,
            title: values.title.clone(),
            description: values.description.clone(),
            location: values.location.clone(),
            image_url: values.image_url.clone(),
            date_start: values.date_start,
            date_end: values.date_end,
            is_managed: !values.is_public,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
    pub event_id: u64,
}

/// Structured error payload the server returns on rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mint::form::MintDraft;
    use crate::mint::validate;

    fn values() -> MintValues {
        let mut draft = MintDraft::new();
        draft.title.set_text("Launch party");
        draft.description.set_text("An evening of demos.");
        draft.location.set_text("Berlin");
        draft.image_url.set_text("https://img.example.com/launch.png");
        draft.token_count.set_text("50");
        draft.date_start.set_text("2026-09-01");
        draft.date_end.set_text("2026-09-02");
        draft.is_public = true;
        validate::validate(&draft).unwrap()
    }

    #[test]
    fn request_inverts_public_into_managed() {
        let mut values = values();
        assert!(!CreateEventRequest::from_values(&values, 1).is_managed);
        values.is_public = false;
        assert!(CreateEventRequest::from_values(&values, 1).is_managed);
    }

    #[test]
    fn request_serializes_camel_case() {
        let json = serde_json::to_value(CreateEventRequest::from_values(&values(), 5)).unwrap();
        assert_eq!(json["networkId"], 5);
        assert_eq!(json["tokenCount"], 50);
        assert_eq!(json["imageUrl"], "https://img.example.com/launch.png");
        assert_eq!(json["dateStart"], "2026-09-01");
        assert_eq!(json["isManaged"], false);
    }

    #[test]
    fn response_parses_event_id() {
        let resp: CreateEventResponse = serde_json::from_str(r#"{"eventId": 42}"#).unwrap();
        assert_eq!(resp.event_id, 42);
    }
}
