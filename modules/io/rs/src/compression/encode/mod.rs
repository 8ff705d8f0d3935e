mod config;
pub mod params;
mod stream;

use eyre::WrapErr;

pub use config::Config;
pub use stream::Stream;

/// Create the file and wrap it into an encoder chosen from the file extension.
pub fn infer_from_path(path: impl AsRef<std::path::Path>) -> eyre::Result<Stream<std::fs::File>> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
    Stream::new(file, &Config::infer_from_path(path))
}
