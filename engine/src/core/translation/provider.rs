//! Translation Provider Module
//!
//! Defines the trait implemented by translation services.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::core::{CoreError, CoreResult};

// =============================================================================
// Translation Provider Trait
// =============================================================================

/// Trait for translation services (Google Translate, LibreTranslate, etc.)
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Returns the provider name
    fn name(&self) -> &str;

    /// Translates `text` from `source` (or `"auto"`) into `target`.
    ///
    /// Codes are the ones stored in the language table (e.g. "fr", "zh-CN").
    async fn translate(&self, text: &str, source: &str, target: &str) -> CoreResult<String>;

    /// Checks if the provider is available
    fn is_available(&self) -> bool {
        true
    }
}

// =============================================================================
// Mock Provider (for testing)
// =============================================================================

#[derive(Clone, Debug)]
enum MockBehavior {
    Prefix,
    Fixed(String),
    Fail,
    Delay(Duration),
}

/// Mock translation provider for testing
///
/// By default it returns `"[<target>] <text>"`.
pub struct MockTranslationProvider {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl Default for MockTranslationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTranslationProvider {
    /// Creates a mock that prefixes the target code
    pub fn new() -> Self {
        Self {
            behavior: MockBehavior::Prefix,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always returns `response`
    pub fn with_response(mut self, response: &str) -> Self {
        self.behavior = MockBehavior::Fixed(response.to_string());
        self
    }

    /// Always fails
    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleeps for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.behavior = MockBehavior::Delay(delay);
        self
    }

    /// Number of translate calls received
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for MockTranslationProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn translate(&self, text: &str, _source: &str, target: &str) -> CoreResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Prefix => Ok(format!("[{}] {}", target, text)),
            MockBehavior::Fixed(response) => Ok(response.clone()),
            MockBehavior::Fail => Err(CoreError::TranslationFailed(
                "Mock translation failure".to_string(),
            )),
            MockBehavior::Delay(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(format!("[{}] {}", target, text))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
