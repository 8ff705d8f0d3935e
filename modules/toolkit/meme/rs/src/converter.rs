use std::path::{Path, PathBuf};

use ahash::AHashMap;
use derive_getters::Getters;
use eyre::{bail, ensure, OptionExt, Result, WrapErr};
use itertools::Itertools;

use depthwin_io_rs::{meme, pwm};

use crate::result::Converted;

const PWM_SUFFIX: &str = "_pwm";
const TXT_EXTENSION: &str = ".txt";
const MEME_SUFFIX: &str = "_MEME.txt";

/// Motif name derived from the PWM file name: `Foxa2_pwm.txt` -> `Foxa2`.
pub fn motif_name(path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .and_then(|x| x.to_str())
        .ok_or_eyre("PWM path doesn't end with a valid file name")?;
    let name = name.replace(PWM_SUFFIX, "").replace(TXT_EXTENSION, "");
    ensure!(
        !name.is_empty(),
        "Motif name derived from {} is empty",
        path.display()
    );
    Ok(name)
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Getters)]
pub struct Converter {
    // Explicit motif name, only allowed for single-file conversions
    name: Option<String>,
    outdir: Option<PathBuf>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Directory for the MEME files. By default, they are placed next to their inputs.
    pub fn with_outdir(mut self, outdir: Option<PathBuf>) -> Self {
        self.outdir = outdir;
        self
    }

    pub fn output_path(&self, input: &Path, motif: &str) -> PathBuf {
        let name = format!("{motif}{MEME_SUFFIX}");
        match (&self.outdir, input.parent()) {
            (Some(outdir), _) => outdir.join(name),
            (None, Some(parent)) => parent.join(name),
            (None, None) => PathBuf::from(name),
        }
    }

    fn motif(&self, input: &Path) -> Result<String> {
        match &self.name {
            Some(name) => Ok(name.clone()),
            None => motif_name(input),
        }
    }

    /// Convert a single PWM file into `<motif>_MEME.txt`.
    pub fn convert(&self, input: &Path) -> Result<Converted> {
        let motif = self.motif(input)?;

        let matrix = pwm::Reader::from_path(input)?
            .read()
            .wrap_err_with(|| format!("Failed to parse PWM file {}", input.display()))?;

        let output = self.output_path(input, &motif);
        let mut writer = meme::Writer::from_path(&output)
            .wrap_err_with(|| format!("Failed to create {}", output.display()))?;
        writer.write_motif(&motif, &matrix)?;
        writer.finish()?;

        log::info!(
            "{}: motif {} (w={}) -> {}",
            input.display(),
            motif,
            matrix.width(),
            output.display()
        );
        Ok(Converted::new(
            input.to_path_buf(),
            output,
            motif,
            matrix.width(),
        ))
    }

    /// Convert every file independently. Results are returned in the input order.
    pub fn run(&self, inputs: &[PathBuf]) -> Result<Vec<(PathBuf, Result<Converted>)>> {
        ensure!(!inputs.is_empty(), "No PWM files were provided");
        ensure!(
            self.name.is_none() || inputs.len() == 1,
            "A motif name can only be set when converting a single file, got {} files",
            inputs.len()
        );

        // Inputs without a valid motif name fail on their own in `convert`
        let mut outputs = AHashMap::with_capacity(inputs.len());
        for input in inputs {
            let Ok(motif) = self.motif(input) else {
                continue;
            };
            let output = self.output_path(input, &motif);
            if let Some(other) = outputs.insert(output.clone(), input) {
                bail!(
                    "PWM files {} and {} would both be written to {}",
                    other.display(),
                    input.display(),
                    output.display()
                );
            }
        }

        let results = inputs
            .iter()
            .map(|input| {
                let result = self.convert(input);
                if let Err(err) = &result {
                    log::error!(
                        "{}: {}",
                        input.display(),
                        err.chain().map(|x| x.to_string()).join(": ")
                    );
                }
                (input.clone(), result)
            })
            .collect();
        Ok(results)
    }
}
