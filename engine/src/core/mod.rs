//! Captionista Core Engine
//!
//! Caption composition pipeline: style phrase selection, emoji, translation
//! with fallback and Unicode font styling, plus the external collaborators
//! (translation service, caption model) behind async traits.

pub mod captioning;
pub mod composer;
pub mod emoji;
pub mod fonts;
pub mod languages;
pub mod service;
pub mod settings;
pub mod styles;
pub mod translation;

mod error;
pub use error::*;

#[cfg(test)]
mod tests_destructive;
