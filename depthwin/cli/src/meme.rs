use std::path::PathBuf;

use clap::Args;
use eyre::{bail, Result};

use depthwin_meme_rs::Converter;

#[derive(Args, Debug, Clone)]
pub(crate) struct MemeArgs {
    /// PWM text files: a header line followed by the A, C, G and T rows
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Working directory for inputs and outputs
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Motif name, allowed only with a single input file. Derived from the file name by default
    #[arg(short, long)]
    pub name: Option<String>,
}

impl MemeArgs {
    pub fn run(&self) -> Result<()> {
        let inputs: Vec<PathBuf> = match &self.directory {
            Some(directory) => self.files.iter().map(|x| directory.join(x)).collect(),
            None => self.files.clone(),
        };
        let converter = Converter::new()
            .with_name(self.name.clone())
            .with_outdir(self.directory.clone());

        let results = converter.run(&inputs)?;
        let mut failed = 0;
        for (_, result) in &results {
            match result {
                Ok(converted) => println!(
                    "{}\t{}\t{}",
                    converted.input().display(),
                    converted.output().display(),
                    converted.motif()
                ),
                Err(_) => failed += 1,
            }
        }
        if failed > 0 {
            bail!("{} of {} PWM file(s) failed", failed, results.len());
        }
        Ok(())
    }
}
