use super::config::Config;
use flate2::read::MultiGzDecoder;
use noodles::bgzf;
use std::io::Read;

pub enum Stream<R: Read> {
    Plain(R),
    Gzip(MultiGzDecoder<R>),
    Bgzf(bgzf::io::Reader<R>),
}

impl<R: Read> Stream<R> {
    pub fn new(inner: R, config: &Config) -> Self {
        match config {
            Config::Plain => Stream::Plain(inner),
            Config::Gzip => Stream::Gzip(MultiGzDecoder::new(inner)),
            Config::Bgzf => Stream::Bgzf(bgzf::io::Reader::new(inner)),
        }
    }
}

impl<R: Read> Read for Stream<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Stream::Plain(r) => r.read(buf),
            Stream::Gzip(r) => r.read(buf),
            Stream::Bgzf(r) => r.read(buf),
        }
    }
}
