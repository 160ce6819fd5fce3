use std::fmt;
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how data parallel parts of the pipeline are executed.
/// Both modes produce identical results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    /// Everything runs on the calling thread.
    #[default]
    Sequential,
    /// Independent parts run on rayon's global thread pool.
    Rayon,
}

/// Keeps track of environment specific information which influences calculations but not results.
#[derive(Clone)]
pub struct Environment {
    /// A logger to report progress.
    pub logger: InfoLogger,
    /// A parallelism mode.
    pub parallelism: Parallelism,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(logger: InfoLogger, parallelism: Parallelism) -> Self {
        Self { logger, parallelism }
    }

    /// Sends message to the logger.
    pub fn log(&self, message: &str) {
        (self.logger)(message)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|_: &str| {}), Parallelism::default())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment").field("parallelism", &self.parallelism).finish_non_exhaustive()
    }
}
