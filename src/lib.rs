pub mod views;
pub mod utils;
pub mod binding;
mod error;

#[cfg(test)]
mod tests;

pub use crate::binding::{MarkerTarget, ThemeBinding, ToggleControl, DARK_MARKER, LIGHT_MARKER};
pub use crate::error::ThemeError;
pub use crate::utils::*;
