use super::config::Config;
use eyre::{OptionExt, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use noodles::bgzf;
use std::io::Write;

pub enum Stream<W: Write> {
    Plain(W),
    Gzip(GzEncoder<W>),
    Bgzf(bgzf::io::Writer<W>),
}

impl<W: Write> Stream<W> {
    pub fn new(inner: W, config: &Config) -> Result<Self> {
        let stream = match config {
            Config::Plain => Stream::Plain(inner),
            Config::Gzip(params) => Stream::Gzip(GzEncoder::new(
                inner,
                Compression::new(u32::from(*params.level())),
            )),
            Config::Bgzf(params) => {
                let level = bgzf::io::writer::CompressionLevel::new(*params.level())
                    .ok_or_eyre("Invalid BGZF compression level")?;
                Stream::Bgzf(
                    bgzf::io::writer::Builder::default()
                        .set_compression_level(level)
                        .build_from_writer(inner),
                )
            }
        };
        Ok(stream)
    }

    /// Write the compression trailer (the BGZF EOF block included) and flush the inner writer.
    pub fn finish(self) -> Result<()> {
        let mut inner = match self {
            Stream::Plain(w) => w,
            Stream::Gzip(encoder) => encoder.finish()?,
            Stream::Bgzf(writer) => writer.finish()?,
        };
        inner.flush()?;
        Ok(())
    }
}

impl<W: Write> Write for Stream<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Stream::Plain(w) => w.write(buf),
            Stream::Gzip(w) => w.write(buf),
            Stream::Bgzf(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Stream::Plain(w) => w.flush(),
            Stream::Gzip(w) => w.flush(),
            Stream::Bgzf(w) => w.flush(),
        }
    }
}
