use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    MissingElement(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::MissingElement(what) => write!(f, "Missing Element Error: {}", what),
        }
    }
}
