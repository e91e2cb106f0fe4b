//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value stores (file, in-memory)
//! - `ai` - Text-generation providers (Gemini, OpenAI, mock)
//! - `http` - axum REST API

pub mod ai;
pub mod http;
pub mod storage;
