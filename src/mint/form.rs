//! Mint form draft state: raw per-field input buffers, focus order, and the
//! lifecycle rules (fresh defaults on open, reset on cancel or success).

use crate::mint::validate::{self, FieldErrors, FormField};

/// A single-line text input with a byte-indexed cursor.
#[derive(Debug, Default, Clone)]
pub struct FieldInput {
    pub text: String,
    pub cursor: usize,
}

impl FieldInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Everything the mint dialog can focus, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FormField),
    Visibility,
    Submit,
    Cancel,
}

const FOCUS_ORDER: [FormFocus; 10] = [
    FormFocus::Field(FormField::Title),
    FormFocus::Field(FormField::Description),
    FormFocus::Field(FormField::Location),
    FormFocus::Field(FormField::ImageUrl),
    FormFocus::Field(FormField::TokenCount),
    FormFocus::Field(FormField::DateStart),
    FormFocus::Field(FormField::DateEnd),
    FormFocus::Visibility,
    FormFocus::Submit,
    FormFocus::Cancel,
];

/// Raw state of the mint form while the user edits it.
///
/// Field values stay as typed text until submit; `errors` is refreshed by
/// [`MintDraft::revalidate`] after every edit so the dialog can render
/// inline messages without re-running validation per frame.
#[derive(Debug, Clone)]
pub struct MintDraft {
    pub title: FieldInput,
    pub description: FieldInput,
    pub location: FieldInput,
    pub image_url: FieldInput,
    pub token_count: FieldInput,
    pub date_start: FieldInput,
    pub date_end: FieldInput,
    pub is_public: bool,
    pub focus: FormFocus,
    pub errors: FieldErrors,
}

impl MintDraft {
    pub fn new() -> Self {
        Self {
            title: FieldInput::new(),
            description: FieldInput::new(),
            location: FieldInput::new(),
            image_url: FieldInput::new(),
            token_count: FieldInput::new(),
            date_start: FieldInput::new(),
            date_end: FieldInput::new(),
            is_public: false,
            focus: FormFocus::Field(FormField::Title),
            errors: FieldErrors::new(),
        }
    }

    /// Back to empty defaults, as on open, cancel, or successful mint.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn field(&self, field: FormField) -> &FieldInput {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Location => &self.location,
            FormField::ImageUrl => &self.image_url,
            FormField::TokenCount => &self.token_count,
            FormField::DateStart => &self.date_start,
            FormField::DateEnd => &self.date_end,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut FieldInput {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Location => &mut self.location,
            FormField::ImageUrl => &mut self.image_url,
            FormField::TokenCount => &mut self.token_count,
            FormField::DateStart => &mut self.date_start,
            FormField::DateEnd => &mut self.date_end,
        }
    }

    /// The focused text field, if focus is on one.
    pub fn focused_field_mut(&mut self) -> Option<&mut FieldInput> {
        match self.focus {
            FormFocus::Field(field) => Some(self.field_mut(field)),
            _ => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = Self::step(self.focus, 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = Self::step(self.focus, FOCUS_ORDER.len() - 1);
    }

    fn step(focus: FormFocus, by: usize) -> FormFocus {
        let idx = FOCUS_ORDER.iter().position(|f| *f == focus).unwrap_or(0);
        FOCUS_ORDER[(idx + by) % FOCUS_ORDER.len()]
    }

    /// Re-run validation and cache the outcome for rendering.
    pub fn revalidate(&mut self) {
        self.errors = match validate::validate(self) {
            Ok(_) => FieldErrors::new(),
            Err(errors) => errors,
        };
    }

    pub fn is_valid(&self) -> bool {
        validate::validate(self).is_ok()
    }
}

impl Default for MintDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_fields_and_errors() {
        let mut draft = MintDraft::new();
        draft.title.set_text("Launch party");
        draft.is_public = true;
        draft.focus = FormFocus::Submit;
        draft.revalidate();
        assert!(!draft.errors.is_empty());

        draft.reset();
        assert!(draft.title.text.is_empty());
        assert!(!draft.is_public);
        assert_eq!(draft.focus, FormFocus::Field(FormField::Title));
        assert!(draft.errors.is_empty());
    }

    #[test]
    fn focus_cycles_through_all_widgets_and_wraps() {
        let mut draft = MintDraft::new();
        for _ in 0..FOCUS_ORDER.len() {
            draft.focus_next();
        }
        assert_eq!(draft.focus, FormFocus::Field(FormField::Title));

        draft.focus_prev();
        assert_eq!(draft.focus, FormFocus::Cancel);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut input = FieldInput::new();
        input.insert_char('é');
        input.insert_char('x');
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_right();
        assert_eq!(input.cursor, 'é'.len_utf8());
        input.delete_back();
        assert_eq!(input.text, "x");
    }
}
