use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a provider measurement reported both as display text ("12.3 mi",
/// "25 mins") and as its numeric value (meters or seconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: i32,
}

impl TextValue {
    pub fn new(text: &str, value: i32) -> Self {
        Self {
            text: text.to_string(),
            value,
        }
    }
}

impl Display for TextValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
