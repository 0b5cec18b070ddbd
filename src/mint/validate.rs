//! Mint form validation.
//!
//! `validate` is a pure function from a raw draft to either a fully typed
//! record or a per-field error map. It owns coercion (trimming, integer and
//! date parsing) and the cross-field date rule; declarative length/range/URL
//! constraints live on [`MintValues`] via the `validator` derive.

use chrono::NaiveDate;
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::Validate;

use crate::mint::form::MintDraft;

/// Earliest date the platform accepts for an event schedule.
pub const MIN_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(d) => d,
    None => unreachable!(),
};

/// Maximum number of tokens a single event may mint.
pub const MAX_TOKEN_COUNT: i64 = 200;

/// Fields of the mint form that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Location,
    ImageUrl,
    TokenCount,
    DateStart,
    DateEnd,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Location => "Location",
            FormField::ImageUrl => "Image URL",
            FormField::TokenCount => "Token count",
            FormField::DateStart => "Start date",
            FormField::DateEnd => "End date",
        }
    }
}

/// Field name to human-readable message. The first error recorded for a
/// field wins; later rules never overwrite it.
pub type FieldErrors = BTreeMap<FormField, String>;

/// Typed, coerced mint record. Built only by [`validate`].
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct MintValues {
    #[validate(length(min = 1, max = 256, message = "Title must be 1-256 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 10000, message = "Description must be 1-10000 characters"))]
    pub description: String,
    #[validate(length(min = 1, max = 256, message = "Location must be 1-256 characters"))]
    pub location: String,
    #[validate(url(message = "Image URL must be a valid absolute URL"))]
    pub image_url: String,
    #[validate(range(min = 1, max = 200, message = "Token count must be between 1 and 200"))]
    pub token_count: i64,
    pub is_public: bool,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

/// Validate a draft, returning the typed record or a map of field errors.
///
/// Coercion errors (unparseable number/date, missing date) are recorded
/// first; constraint errors from the `validator` derive are merged in only
/// for fields that do not already carry an error, so a missing end date
/// reports "required" rather than the date-ordering failure.
pub fn validate(draft: &MintDraft) -> Result<MintValues, FieldErrors> {
    let mut errors = FieldErrors::new();

    let token_count = match draft.token_count.text.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            errors.insert(
                FormField::TokenCount,
                "Token count must be a whole number".to_string(),
            );
            0
        }
    };

    let date_start = coerce_date(&draft.date_start.text, FormField::DateStart, &mut errors);
    let date_end = coerce_date(&draft.date_end.text, FormField::DateEnd, &mut errors);

    // Placeholder dates are only reachable alongside an error on that field,
    // so a successful return never exposes them.
    let values = MintValues {
        title: draft.title.text.trim().to_string(),
        description: draft.description.text.clone(),
        location: draft.location.text.trim().to_string(),
        image_url: draft.image_url.text.trim().to_string(),
        token_count,
        is_public: draft.is_public,
        date_start: date_start.unwrap_or(MIN_DATE),
        date_end: date_end.unwrap_or(MIN_DATE),
    };

    if let Err(constraint_errors) = values.validate() {
        for (name, field_errors) in constraint_errors.field_errors() {
            let Some(field) = field_from_name(name) else {
                continue;
            };
            let Some(first) = field_errors.first() else {
                continue;
            };
            let message = first
                .message
                .clone()
                .unwrap_or(Cow::Borrowed("is invalid"))
                .into_owned();
            errors.entry(field).or_insert(message);
        }
    }

    // Cross-field rule: end must not precede start. Attaches to the end-date
    // field, and a missing-date "required" error there takes precedence.
    if let (Some(start), Some(end)) = (date_start, date_end) {
        if end < start {
            errors
                .entry(FormField::DateEnd)
                .or_insert_with(|| "End date must not be before the start date".to_string());
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

fn coerce_date(text: &str, field: FormField, errors: &mut FieldErrors) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        errors.insert(field, format!("{} is required", field.label()));
        return None;
    }
    match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) if date < MIN_DATE => {
            errors.insert(field, format!("{} must be on or after 1900-01-01", field.label()));
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, format!("{} must be a date like 2026-08-01", field.label()));
            None
        }
    }
}

fn field_from_name(name: &str) -> Option<FormField> {
    match name {
        "title" => Some(FormField::Title),
        "description" => Some(FormField::Description),
        "location" => Some(FormField::Location),
        "image_url" => Some(FormField::ImageUrl),
        "token_count" => Some(FormField::TokenCount),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mint::form::MintDraft;

    fn filled_draft() -> MintDraft {
        let mut draft = MintDraft::new();
        draft.title.set_text("  Launch party  ");
        draft.description.set_text("An evening of demos.");
        draft.location.set_text("Berlin");
        draft.image_url.set_text("https://img.example.com/launch.png");
        draft.token_count.set_text("50");
        draft.date_start.set_text("2026-09-01");
        draft.date_end.set_text("2026-09-02");
        draft.is_public = true;
        draft
    }

    #[test]
    fn accepts_valid_draft_and_trims() {
        let values = validate(&filled_draft()).unwrap();
        assert_eq!(values.title, "Launch party");
        assert_eq!(values.token_count, 50);
        assert!(values.is_public);
    }

    #[test]
    fn token_count_boundaries() {
        for (input, ok) in [("0", false), ("1", true), ("200", true), ("201", false)] {
            let mut draft = filled_draft();
            draft.token_count.set_text(input);
            assert_eq!(validate(&draft).is_ok(), ok, "token_count = {}", input);
        }
    }

    #[test]
    fn token_count_must_be_numeric() {
        let mut draft = filled_draft();
        draft.token_count.set_text("lots");
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors[&FormField::TokenCount],
            "Token count must be a whole number"
        );
    }

    #[test]
    fn title_length_boundaries() {
        let mut draft = filled_draft();
        draft.title.set_text(&"a".repeat(256));
        assert!(validate(&draft).is_ok());

        draft.title.set_text(&"a".repeat(257));
        let errors = validate(&draft).unwrap_err();
        assert!(errors.contains_key(&FormField::Title));

        draft.title.set_text("");
        let errors = validate(&draft).unwrap_err();
        assert!(errors.contains_key(&FormField::Title));
    }

    #[test]
    fn rejects_relative_url() {
        let mut draft = filled_draft();
        draft.image_url.set_text("/images/launch.png");
        let errors = validate(&draft).unwrap_err();
        assert!(errors.contains_key(&FormField::ImageUrl));
    }

    #[test]
    fn equal_dates_are_accepted() {
        let mut draft = filled_draft();
        draft.date_start.set_text("2026-09-01");
        draft.date_end.set_text("2026-09-01");
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn end_before_start_errors_on_end_date() {
        let mut draft = filled_draft();
        draft.date_start.set_text("2026-09-02");
        draft.date_end.set_text("2026-09-01");
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors[&FormField::DateEnd],
            "End date must not be before the start date"
        );
        assert!(!errors.contains_key(&FormField::DateStart));
    }

    #[test]
    fn missing_end_date_reports_required_not_ordering() {
        let mut draft = filled_draft();
        draft.date_end.set_text("");
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors[&FormField::DateEnd], "End date is required");
    }

    #[test]
    fn rejects_dates_before_1900() {
        let mut draft = filled_draft();
        draft.date_start.set_text("1899-12-31");
        let errors = validate(&draft).unwrap_err();
        assert!(errors[&FormField::DateStart].contains("1900-01-01"));
    }

    #[test]
    fn unparseable_date_is_a_field_error() {
        let mut draft = filled_draft();
        draft.date_start.set_text("next tuesday");
        let errors = validate(&draft).unwrap_err();
        assert!(errors.contains_key(&FormField::DateStart));
    }
}
