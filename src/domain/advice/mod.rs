//! Advice module - cache fingerprint and instruction template for the
//! AI strategy advisor.

mod fingerprint;
mod prompt;

pub use fingerprint::{AdviceKey, ADVICE_KEY_PREFIX};
pub use prompt::{advice_prompt, ADVICE_FALLBACK_MESSAGE};
