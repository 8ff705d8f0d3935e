pub use converter::{motif_name, Converter};
pub use result::Converted;

mod converter;
mod result;
