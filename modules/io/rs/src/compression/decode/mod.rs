mod config;
mod stream;

use eyre::WrapErr;

pub use config::Config;
pub use stream::Stream;

/// Open the file and wrap it into a decoder chosen from the file extension or signature.
pub fn infer_from_path(path: impl AsRef<std::path::Path>) -> eyre::Result<Stream<std::fs::File>> {
    let path = path.as_ref();
    let config = Config::detect(path)
        .wrap_err_with(|| format!("Failed to inspect {}", path.display()))?;
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("Failed to open {}", path.display()))?;
    Ok(Stream::new(file, &config))
}
