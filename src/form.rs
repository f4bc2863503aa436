use crate::percentile::Gender;
use thiserror::Error;

/// Longest accepted text in a form field, in characters
const MAX_FIELD_CHARS: usize = 32;

/// Reasons a submission is rejected before any calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("height {0:?} is not a finite number")]
    InvalidHeight(String),
}

/// Validated form contents
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: String,
    pub height_cm: f64,
    pub gender: Gender,
}

/// Check the raw form values and convert them into a submission
pub fn validate(name: &str, height: &str, gender: Gender) -> Result<Submission, InputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }

    let height_cm = height
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite())
        .ok_or_else(|| InputError::InvalidHeight(height.to_string()))?;

    Ok(Submission {
        name: name.to_string(),
        height_cm,
        gender,
    })
}

/// Focusable elements of the form card, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Height,
    Gender,
    Submit,
    ThemeToggle,
}

impl FormField {
    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Height,
            FormField::Height => FormField::Gender,
            FormField::Gender => FormField::Submit,
            FormField::Submit => FormField::ThemeToggle,
            FormField::ThemeToggle => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::ThemeToggle,
            FormField::Height => FormField::Name,
            FormField::Gender => FormField::Height,
            FormField::Submit => FormField::Gender,
            FormField::ThemeToggle => FormField::Submit,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Name | FormField::Height)
    }
}

/// Editable form state
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: String,
    pub height: String,
    pub gender: Gender,
    pub focus: FormField,
}

impl FormState {
    /// Append a typed character to the focused text field
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(text) = self.focused_text_mut() {
            if text.chars().count() < MAX_FIELD_CHARS {
                text.push(c);
            }
        }
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn toggle_gender(&mut self) {
        self.gender = self.gender.toggle();
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn validate(&self) -> Result<Submission, InputError> {
        validate(&self.name, &self.height, self.gender)
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Height => Some(&mut self.height),
            _ => None,
        }
    }
}
