use std::path::PathBuf;

use clap::Args;
use eyre::{bail, Result};
use itertools::Itertools;

use depthwin_core_rs::genome::ContigSizes;
use depthwin_io_rs::compression::encode::params::Deflate;
use depthwin_io_rs::sizes;
use depthwin_slidwin_rs::{
    Config, Engine, Error, LengthSource, Outcome, DEFAULT_INCREMENT, DEFAULT_WINDOW,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct SlidwinArgs {
    /// Read depth tables (plain, gzip or BGZF)
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Window size in positions, must be a multiple of the increment
    #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// Chunk size in positions, also the stride between windows
    #[arg(short, long, default_value_t = DEFAULT_INCREMENT)]
    pub increment: usize,

    /// Number of files processed in parallel
    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,

    /// Take the sequence length from the contig table instead of counting rows
    #[arg(short, long)]
    pub contig: Option<String>,

    /// Two-column contig sizes file used instead of the built-in mm10 table
    #[arg(long, requires = "contig")]
    pub chrom_sizes: Option<PathBuf>,

    /// Working directory for inputs and outputs
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Also write the intermediate chunk averages (Chunks_<file>)
    #[arg(long)]
    pub chunks: bool,

    /// Gzip compression level of the outputs
    #[arg(short = 'l', long, default_value_t = 6)]
    pub level: u8,
}

impl SlidwinArgs {
    fn length(&self) -> Result<LengthSource> {
        let Some(contig) = &self.contig else {
            return Ok(LengthSource::Data);
        };
        let table = match &self.chrom_sizes {
            Some(path) => sizes::from_path(path)?,
            None => ContigSizes::mm10(),
        };
        log::debug!("Looking up {} among {} contig(s)", contig, table.len());
        let length = table
            .get(contig)
            .map_err(|err| Error::configuration(err.to_string()))?;
        log::info!("Using length {} for contig {}", length, contig);
        Ok(LengthSource::Fixed(length))
    }

    fn config(&self) -> Result<Config> {
        let deflate =
            Deflate::new(self.level).map_err(|err| Error::configuration(err.to_string()))?;
        let config = Config::new(self.increment, self.window)?
            .with_length(self.length()?)?
            .with_chunks(self.chunks)
            .with_deflate(deflate)
            .with_outdir(self.directory.clone());
        Ok(config)
    }

    fn inputs(&self) -> Vec<PathBuf> {
        match &self.directory {
            Some(directory) => self.files.iter().map(|x| directory.join(x)).collect(),
            None => self.files.clone(),
        }
    }

    pub fn run(&self) -> Result<()> {
        let mut engine = Engine::<f64>::builder()
            .set_config(self.config()?)
            .set_workers(self.threads)
            .add_inputs(self.inputs())
            .build::<f64>()?;

        let outcomes = engine.run();
        report(&outcomes)
    }
}

fn report(outcomes: &[Outcome]) -> Result<()> {
    let mut failed = Vec::new();
    for outcome in outcomes {
        match outcome.result() {
            Ok(summary) => println!(
                "{}\t{}\tlength={}\tchunks={}\twindows={}\t{:.2}s",
                summary.input().display(),
                summary.output().display(),
                summary.length(),
                summary.chunks(),
                summary.windows(),
                summary.time_s()
            ),
            Err(_) => failed.push(outcome.input().display().to_string()),
        }
    }

    if !failed.is_empty() {
        bail!(
            "{} of {} file(s) failed: {}",
            failed.len(),
            outcomes.len(),
            failed.iter().join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Wrapper {
        #[clap(flatten)]
        args: SlidwinArgs,
    }

    fn parse(args: &[&str]) -> Result<SlidwinArgs> {
        let args = std::iter::once("slidwin").chain(args.iter().copied());
        Ok(Wrapper::try_parse_from(args)?.args)
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let args = parse(&["chr19.txt.gz"])?;
        let config = args.config()?;
        assert_eq!(*config.window(), 1000);
        assert_eq!(*config.increment(), 500);
        assert_eq!(config.length(), &LengthSource::Data);
        assert_eq!(args.threads, 1);
        assert_eq!(args.inputs(), vec![PathBuf::from("chr19.txt.gz")]);
        Ok(())
    }

    #[test]
    fn test_contig_lengths() -> Result<()> {
        let args = parse(&["--contig", "chr19", "-d", "data", "chr19.txt.gz"])?;
        let config = args.config()?;
        assert_eq!(config.length(), &LengthSource::Fixed(61_431_566));
        assert_eq!(config.outdir(), &Some(PathBuf::from("data")));
        assert_eq!(args.inputs(), vec![PathBuf::from("data/chr19.txt.gz")]);

        let args = parse(&["--contig", "chrUnknown", "chr19.txt.gz"])?;
        let err = args.config().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Configuration { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_arguments() -> Result<()> {
        for args in [
            &["-w", "1000", "-i", "300", "chr19.txt.gz"][..],
            &["-w", "0", "chr19.txt.gz"][..],
            &["-l", "12", "chr19.txt.gz"][..],
        ] {
            let err = parse(args)?.config().unwrap_err();
            assert!(matches!(
                err.downcast_ref::<Error>(),
                Some(Error::Configuration { .. })
            ));
        }

        let err = parse(&["-t", "0", "chr19.txt.gz"])?.run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Configuration { .. })
        ));

        assert!(parse(&["--chrom-sizes", "mm10.sizes", "chr19.txt.gz"]).is_err());
        Ok(())
    }
}
