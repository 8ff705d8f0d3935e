pub use sum::KahanSum;
pub use table::Table;

pub mod genome;
pub mod num;
pub mod parallelism;
mod sum;
mod table;
