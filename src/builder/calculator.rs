//! Builder for configuring a calculator and its dispatcher.

use crate::builder::error::BuildError;
use crate::core::{
    CalculatorState, ExpressionPolicy, PhaseTrace, StateOptions, DEFAULT_PRECISION,
    DEFAULT_TRACE_CAPACITY, MAX_PRECISION,
};
use crate::dispatch::{InputDispatcher, RenderSink};
use crate::enforcement::ViolationStrategy;

/// Builder for constructing calculators with a fluent API.
#[derive(Clone, Debug)]
pub struct CalculatorBuilder {
    precision: u32,
    expression_policy: ExpressionPolicy,
    trace_capacity: usize,
    on_violation: ViolationStrategy,
}

impl CalculatorBuilder {
    /// Create a builder with the default settings.
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            expression_policy: ExpressionPolicy::default(),
            trace_capacity: DEFAULT_TRACE_CAPACITY,
            on_violation: ViolationStrategy::default(),
        }
    }

    /// Fractional digits kept when a result is displayed.
    pub fn precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }

    /// Treatment of rejected decimal points in the expression log.
    pub fn expression_policy(mut self, policy: ExpressionPolicy) -> Self {
        self.expression_policy = policy;
        self
    }

    /// Maximum number of entries kept in the phase trace.
    pub fn trace_capacity(mut self, capacity: usize) -> Self {
        self.trace_capacity = capacity;
        self
    }

    /// What the dispatcher does when the state breaks an invariant.
    pub fn violation_strategy(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    /// Build a bare calculator state.
    /// Returns an error if a setting is out of range.
    pub fn build_state(&self) -> Result<CalculatorState, BuildError> {
        Ok(CalculatorState::with_options(self.options()?))
    }

    /// Build a dispatcher that renders to `sink`.
    /// Returns an error if a setting is out of range.
    pub fn build<R: RenderSink>(self, sink: R) -> Result<InputDispatcher<R>, BuildError> {
        let state = self.build_state()?;

        if self.trace_capacity == 0 {
            return Err(BuildError::ZeroTraceCapacity);
        }

        Ok(InputDispatcher::from_parts(
            state,
            sink,
            PhaseTrace::with_capacity(self.trace_capacity),
            self.on_violation,
        ))
    }

    fn options(&self) -> Result<StateOptions, BuildError> {
        if self.precision > MAX_PRECISION {
            return Err(BuildError::PrecisionOutOfRange {
                requested: self.precision,
                max: MAX_PRECISION,
            });
        }

        Ok(StateOptions {
            precision: self.precision,
            expression_policy: self.expression_policy,
        })
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::RecordingSink;

    #[test]
    fn builder_uses_default_settings() {
        let dispatcher = CalculatorBuilder::new().build(RecordingSink::new()).unwrap();

        assert_eq!(dispatcher.state(), &CalculatorState::default());
        assert_eq!(dispatcher.trace().capacity(), DEFAULT_TRACE_CAPACITY);
        assert_eq!(
            dispatcher.violation_strategy(),
            ViolationStrategy::IgnoreAndLog
        );
    }

    #[test]
    fn builder_validates_precision() {
        let result = CalculatorBuilder::new()
            .precision(MAX_PRECISION + 1)
            .build(RecordingSink::new());

        assert!(matches!(
            result,
            Err(BuildError::PrecisionOutOfRange { requested: 16, .. })
        ));
    }

    #[test]
    fn builder_requires_trace_capacity() {
        let result = CalculatorBuilder::new()
            .trace_capacity(0)
            .build(RecordingSink::new());

        assert!(matches!(result, Err(BuildError::ZeroTraceCapacity)));
    }

    #[test]
    fn fluent_api_configures_dispatcher() {
        let mut dispatcher = CalculatorBuilder::new()
            .precision(3)
            .expression_policy(ExpressionPolicy::Strict)
            .trace_capacity(4)
            .violation_strategy(ViolationStrategy::Reset)
            .build(RecordingSink::new())
            .unwrap();

        for label in ["1", ".", ".", "/", "3", "="] {
            let _ = dispatcher.dispatch_label(label).unwrap();
        }

        assert_eq!(dispatcher.state().display_value(), "0.333");
        assert_eq!(dispatcher.state().expression_value(), "1./3=");
        assert_eq!(dispatcher.trace().len(), 4);
        assert_eq!(dispatcher.violation_strategy(), ViolationStrategy::Reset);
    }

    #[test]
    fn build_state_applies_options() {
        let state = CalculatorBuilder::new().precision(0).build_state().unwrap();
        assert_eq!(state.options().precision, 0);
    }
}
