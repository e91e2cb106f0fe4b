//! Application layer - services over the domain and ports.
//!
//! Each service owns its slice of state, coordinates storage side effects
//! and logs what it does. HTTP handlers call only into this layer.

mod advice;
mod document_store;
mod theme;

pub use advice::{AdviceOutcome, AdviceService, AdviceSource, AdviceStatus};
pub use document_store::{DocumentStore, DocumentUpdate, ACTIVE_ID_KEY, CONTOURS_KEY};
pub use theme::{ThemeService, THEME_KEY};
