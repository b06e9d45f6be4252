// src/infrastructure/mod.rs
pub mod config;
pub mod file_store;
pub mod markdown;
pub mod memory_store;
pub mod renderer;

pub use config::Config;
pub use file_store::FileStore;
pub use markdown::{RenderOptions, RenderPipeline};
pub use memory_store::MemoryStore;
pub use renderer::BrowserPreview;
