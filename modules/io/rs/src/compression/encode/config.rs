use super::params::Deflate;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Config {
    #[default]
    Plain,
    Gzip(Deflate),
    Bgzf(Deflate),
}

impl Config {
    pub fn infer_from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("gz" | "gzip") => Config::Gzip(Default::default()),
            Some("bgz" | "bgzf") => Config::Bgzf(Default::default()),
            _ => Config::Plain,
        }
    }

    /// Same container, but with the given DEFLATE level. Plain outputs are left as is.
    pub fn with_deflate(self, deflate: Deflate) -> Self {
        match self {
            Config::Plain => self,
            Config::Gzip(_) => Config::Gzip(deflate),
            Config::Bgzf(_) => Config::Bgzf(deflate),
        }
    }
}
