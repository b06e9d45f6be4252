// src/domain/mod.rs
pub mod error;
pub mod html;
pub mod note;
pub mod preferences;

pub use error::{DomainError, StoreError};
pub use html::TrustedHtml;
pub use note::{Note, NoteId, NotePatch};
pub use preferences::Theme;
