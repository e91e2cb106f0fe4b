//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for the strategy advisor.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini `generateContent` (default)
//! - `OpenAIProvider` - OpenAI chat completions
//! - `MockAIProvider` - Configurable mock for testing and offline runs

mod gemini_provider;
mod mock_provider;
mod openai_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
