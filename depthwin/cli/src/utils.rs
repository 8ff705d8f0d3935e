use clap::Args;
use eyre::Result;
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    /// Increase logging verbosity (-v for debug, -vv for trace). RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl UtilsArgs {
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn setup(&self) -> Result<()> {
        let mut builder = pretty_env_logger::formatted_builder();
        match std::env::var("RUST_LOG") {
            Ok(filters) => builder.parse_filters(&filters),
            Err(_) => builder.filter_level(self.level()),
        };
        builder.try_init()?;
        Ok(())
    }
}
