// src/application/mod.rs
pub mod clock;
pub mod note_repository;
pub mod preferences;
pub mod session;
pub mod state_store;

pub use clock::{Clock, SystemClock};
pub use note_repository::NoteRepository;
pub use preferences::Preferences;
pub use session::{KeyOutcome, KeyPress, Session};
pub use state_store::{keys, KeyValueStore, StateStore, StoreKey};
