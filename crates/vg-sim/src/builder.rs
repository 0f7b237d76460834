//! Fluent builder for constructing a [`Simulator`].

use vg_core::{EngineConfig, Traveler};
use vg_graph::TravelGraph;

use crate::{SimResult, Simulator};

/// Fluent builder for [`Simulator`].
///
/// # Required inputs
///
/// - the [`TravelGraph`] (borrowed for the lifetime of the run)
/// - the origin label
/// - the initial [`Traveler`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                      |
/// |-------------------|------------------------------|
/// | `.config(c)`      | `EngineConfig::default()`    |
/// | `.max_steps(n)`   | `config.max_steps` (1000)    |
///
/// # Example
///
/// ```rust,ignore
/// let log = SimBuilder::new(&graph, "A", traveler)
///     .config(config)
///     .build()?
///     .run(&mut NoopObserver);
/// ```
pub struct SimBuilder<'g> {
    graph:    &'g TravelGraph,
    origin:   String,
    traveler: Traveler,
    config:   EngineConfig,
}

impl<'g> SimBuilder<'g> {
    pub fn new(graph: &'g TravelGraph, origin: impl Into<String>, traveler: Traveler) -> Self {
        Self {
            graph,
            origin: origin.into(),
            traveler,
            config: EngineConfig::default(),
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the iteration cap only.
    pub fn max_steps(mut self, n: usize) -> Self {
        self.config.max_steps = n;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Simulator`].
    pub fn build(self) -> SimResult<Simulator<'g>> {
        self.config.validate()?;
        Ok(Simulator::with_max_steps(self.graph, &self.origin, self.traveler, self.config.max_steps))
    }
}
