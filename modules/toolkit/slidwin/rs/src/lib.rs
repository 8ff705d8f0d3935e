pub use builder::EngineBuilder;
pub use chunking::{chunk, Chunker, Chunks};
pub use config::{Config, LengthSource, DEFAULT_INCREMENT, DEFAULT_WINDOW};
pub use engine::Engine;
pub use error::Error;
pub use result::{Outcome, Summary};
pub use window::roll;

mod builder;
mod chunking;
mod config;
mod engine;
mod error;
mod result;
mod window;
mod worker;
