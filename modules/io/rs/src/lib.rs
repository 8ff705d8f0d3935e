pub mod compression;
pub mod depth;
pub mod meme;
pub mod pwm;
pub mod sizes;
mod traits;

pub use traits::{ReadRecord, WriteRecord};
