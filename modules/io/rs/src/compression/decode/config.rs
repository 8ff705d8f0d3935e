use eyre::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Config {
    #[default]
    Plain,
    Gzip,
    Bgzf,
}

impl Config {
    pub fn infer_from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("gz" | "gzip") => Config::Gzip,
            Some("bgz" | "bgzf") => Config::Bgzf,
            _ => Config::Plain,
        }
    }

    /// Same as [`Config::infer_from_path`], but falls back to the file signature when the
    /// extension says nothing about the compression.
    pub fn detect(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::infer_from_path(path);
        if config != Config::Plain {
            return Ok(config);
        }

        let config = match infer::get_from_path(path)? {
            // BGZF is a valid multi-member GZIP stream
            Some(kind) if kind.mime_type() == "application/gzip" => Config::Gzip,
            _ => Config::Plain,
        };
        Ok(config)
    }
}
