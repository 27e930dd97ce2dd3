use std::fmt;

/// One of the three billed token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenField {
    Text,
    Image,
    Output,
}

impl TokenField {
    pub const ALL: [TokenField; 3] = [TokenField::Text, TokenField::Image, TokenField::Output];

    pub fn label(self) -> &'static str {
        match self {
            TokenField::Text => "Text",
            TokenField::Image => "Image",
            TokenField::Output => "Output",
        }
    }
}

impl fmt::Display for TokenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenField::Text => write!(f, "text input"),
            TokenField::Image => write!(f, "image input"),
            TokenField::Output => write!(f, "output"),
        }
    }
}

/// Canonical token counts. `None` means the field has not been entered,
/// which is distinct from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenCounts {
    pub text: Option<u64>,
    pub image: Option<u64>,
    pub output: Option<u64>,
}

impl TokenCounts {
    pub fn new(text: u64, image: u64, output: u64) -> Self {
        Self {
            text: Some(text),
            image: Some(image),
            output: Some(output),
        }
    }

    pub fn get(&self, field: TokenField) -> Option<u64> {
        match field {
            TokenField::Text => self.text,
            TokenField::Image => self.image,
            TokenField::Output => self.output,
        }
    }

    pub fn set(&mut self, field: TokenField, value: Option<u64>) {
        match field {
            TokenField::Text => self.text = value,
            TokenField::Image => self.image = value,
            TokenField::Output => self.output = value,
        }
    }

    /// All three values, or `None` if any is unset.
    pub fn complete(&self) -> Option<(u64, u64, u64)> {
        Some((self.text?, self.image?, self.output?))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of interpreting raw text typed into a manual field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    /// Empty input: the field becomes unset.
    Unset,
    Value(u64),
    /// Negative, fractional or non-numeric input; the field keeps its value.
    Rejected,
}

pub fn parse_field_input(raw: &str) -> FieldInput {
    let trimmed = raw.trim();
    if raw.is_empty() {
        return FieldInput::Unset;
    }
    match trimmed.parse::<u64>() {
        Ok(value) => FieldInput::Value(value),
        Err(_) => FieldInput::Rejected,
    }
}
