use std::cell::RefCell;
use std::path::PathBuf;

use derive_getters::Getters;
use derive_more::Constructor;
use itertools::Itertools;
use rayon::prelude::*;
use rayon::ThreadPool;
use thread_local::ThreadLocal;

use depthwin_core_rs::num::Float;

use crate::builder::EngineBuilder;
use crate::config::Config;
use crate::result::Outcome;
use crate::worker::Worker;

/// Runs the chunk-and-window pipeline over a batch of independent depth tables.
#[derive(Constructor, Getters)]
pub struct Engine<F: Float> {
    #[getter(skip)]
    thread_pool: Option<ThreadPool>,
    config: Config,
    inputs: Vec<PathBuf>,
    #[getter(skip)]
    workers: ThreadLocal<RefCell<Worker<F>>>,
}

impl<F: Float> Engine<F> {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Process every input, one task per file. A failing file doesn't affect the others, and
    /// outcomes are returned in the input order.
    pub fn run(&mut self) -> Vec<Outcome> {
        match self.thread_pool.take() {
            Some(pool) => {
                let result = pool.install(|| self._run());
                self.thread_pool = Some(pool);
                result
            }
            None => self._run(),
        }
    }

    fn _run(&self) -> Vec<Outcome> {
        self.inputs
            .par_iter()
            .map(|input| {
                let result = self
                    .workers
                    .get_or_default()
                    .borrow_mut()
                    .process(&self.config, input);

                if let Err(err) = &result {
                    log::error!(
                        "{}: {}",
                        input.display(),
                        err.chain().map(|x| x.to_string()).join(": ")
                    );
                }
                Outcome::new(input.clone(), result)
            })
            .collect()
    }
}
