use std::path::{Component, Path, PathBuf};

use ahash::{AHashMap, AHashSet};
use eyre::Result;
use rayon::{ThreadPool, ThreadPoolBuilder};
use thread_local::ThreadLocal;

use depthwin_core_rs::num::Float;
use depthwin_core_rs::parallelism;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::Error;

pub struct EngineBuilder {
    config: Config,
    inputs: Vec<PathBuf>,
    workers: usize,
    thread_pool: Option<ThreadPool>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            inputs: Vec::new(),
            workers: 1,
            thread_pool: None,
        }
    }
}

impl EngineBuilder {
    pub fn set_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn add_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.inputs.push(input.into());
        self
    }

    pub fn add_inputs<T: Into<PathBuf>>(mut self, inputs: impl IntoIterator<Item = T>) -> Self {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Number of files processed concurrently. Ignored if a thread pool is set explicitly.
    pub fn set_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    pub fn build<F: Float>(mut self) -> Result<Engine<F>> {
        if self.inputs.is_empty() {
            return Err(Error::configuration("No input files were provided").into());
        }

        // The same file would be processed twice and race on its outputs
        let total = self.inputs.len();
        let mut seen = AHashSet::with_capacity(total);
        let mut unique = Vec::with_capacity(total);
        for input in self.inputs {
            if seen.insert(normalize(&input)) {
                unique.push(input);
            }
        }
        if unique.len() != total {
            log::warn!(
                "Ignoring {} duplicated input file(s)",
                total - unique.len()
            );
        }

        // Distinct inputs may still map to the same output, e.g. a/x.txt and b/x.txt with an outdir
        let mut outputs = AHashMap::with_capacity(unique.len());
        // Inputs without a file name fail on their own in the worker
        for input in &unique {
            let mut paths = vec![self.config.windows_path(input)];
            if *self.config.chunks() {
                paths.push(self.config.chunks_path(input));
            }
            for path in paths.into_iter().flatten() {
                if let Some(other) = outputs.insert(normalize(&path), input) {
                    return Err(Error::configuration(format!(
                        "Inputs {} and {} would both be written to {}",
                        other.display(),
                        input.display(),
                        path.display()
                    ))
                    .into());
                }
            }
        }

        let pool = match self.thread_pool.take() {
            Some(pool) => pool,
            None => {
                let workers = parallelism::workers(self.workers, unique.len())
                    .map_err(|err| Error::configuration(err.to_string()))?;
                ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|ind| format!("depthwin-{ind}"))
                    .build()?
            }
        };
        log::debug!(
            "Processing {} file(s) with {} worker(s)",
            unique.len(),
            pool.current_num_threads()
        );

        Ok(Engine::new(Some(pool), self.config, unique, ThreadLocal::new()))
    }
}

// Lexical only: drops `.` components without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|x| !matches!(x, Component::CurDir))
        .collect()
}
