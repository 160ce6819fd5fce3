use crate::models::InteractionMode;
use crate::utils::{Environment, InfoLogger, Parallelism};
use std::sync::Arc;

/// A per-call configuration of the pipeline stages.
#[derive(Clone, Debug)]
pub struct PrometheeConfig {
    /// Amount of decimal places aggregated values are rounded to, `None` disables rounding.
    pub decimal_place: Option<u32>,
    /// A way to combine partial preferences of interacting criteria.
    pub interaction_mode: InteractionMode,
    /// An environment with logger and parallelism settings.
    pub environment: Arc<Environment>,
}

impl Default for PrometheeConfig {
    fn default() -> Self {
        Self { decimal_place: Some(3), interaction_mode: InteractionMode::default(), environment: Arc::default() }
    }
}

impl PrometheeConfig {
    /// Sets amount of decimal places.
    pub fn with_decimal_place(mut self, decimal_place: u32) -> Self {
        self.decimal_place = Some(decimal_place);
        self
    }

    /// Disables rounding.
    pub fn without_rounding(mut self) -> Self {
        self.decimal_place = None;
        self
    }

    /// Sets interaction mode.
    pub fn with_interaction_mode(mut self, interaction_mode: InteractionMode) -> Self {
        self.interaction_mode = interaction_mode;
        self
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.environment = Arc::new(Environment { logger, ..self.environment.as_ref().clone() });
        self
    }

    /// Sets parallelism mode.
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.environment = Arc::new(Environment { parallelism, ..self.environment.as_ref().clone() });
        self
    }
}
