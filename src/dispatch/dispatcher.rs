//! Dispatcher that drives the calculator from input events.

use crate::core::{
    CalculatorState, Digit, InputKind, Operator, PhaseChange, PhaseTrace, DECIMAL_POINT,
};
use crate::dispatch::error::DispatchError;
use crate::dispatch::event::{InputEvent, KeyPress};
use crate::dispatch::render::RenderSink;
use crate::enforcement::{check_invariants, ViolationStrategy};
use chrono::Utc;
use stillwater::validation::Validation;
use tracing::{debug, trace, warn};

/// Outcome of dispatching one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Dispatch {
    /// The event was applied and the sink rendered the new state.
    Rendered,
    /// The event did not come from an input button; nothing happened.
    Ignored,
}

/// Routes input events to the calculator state and renders after each.
///
/// The dispatcher owns the only [`CalculatorState`] of a session. Each
/// event is applied and rendered before `dispatch` returns, so events
/// are processed strictly one at a time.
///
/// # Example
///
/// ```rust
/// use pocketcalc::dispatch::{InputDispatcher, KeyPress, RecordingSink};
///
/// let mut dispatcher = InputDispatcher::new(RecordingSink::new());
/// for label in ["6", "/", "2", "="] {
///     dispatcher.dispatch(&KeyPress::from_label(label)).unwrap();
/// }
///
/// let frame = dispatcher.sink().last().unwrap();
/// assert_eq!(frame.display, "3");
/// assert_eq!(frame.expression, "6/2=");
/// ```
pub struct InputDispatcher<R: RenderSink> {
    state: CalculatorState,
    sink: R,
    trace: PhaseTrace,
    on_violation: ViolationStrategy,
}

impl<R: RenderSink> InputDispatcher<R> {
    /// Create a dispatcher over a fresh state with default settings.
    pub fn new(sink: R) -> Self {
        Self::from_parts(
            CalculatorState::default(),
            sink,
            PhaseTrace::new(),
            ViolationStrategy::default(),
        )
    }

    pub(crate) fn from_parts(
        state: CalculatorState,
        sink: R,
        trace: PhaseTrace,
        on_violation: ViolationStrategy,
    ) -> Self {
        Self {
            state,
            sink,
            trace,
            on_violation,
        }
    }

    /// Apply one event and render the result.
    ///
    /// Events without a recognised kind are ignored: no mutation, no
    /// render. An event whose value does not fit its kind is rejected with
    /// an error, also without mutation or render.
    pub fn dispatch<E>(&mut self, event: &E) -> Result<Dispatch, DispatchError>
    where
        E: InputEvent + ?Sized,
    {
        let value = event.value();
        let Some(kind) = event.kind() else {
            trace!(value, "ignoring event from unrecognised control");
            return Ok(Dispatch::Ignored);
        };

        let from = self.state.phase();
        if let Err(err) = self.apply(kind, value) {
            warn!(%kind, value, error = %err, "rejected input event");
            return Err(err);
        }

        self.enforce();

        let to = self.state.phase();
        self.trace = self.trace.record(PhaseChange {
            from,
            to,
            trigger: kind,
            at: Utc::now(),
        });
        debug!(
            %kind,
            value,
            %from,
            %to,
            display = self.state.display_value(),
            "applied input event"
        );

        self.render_now();
        Ok(Dispatch::Rendered)
    }

    /// Classify a keypad label and dispatch it.
    pub fn dispatch_label(&mut self, label: &str) -> Result<Dispatch, DispatchError> {
        self.dispatch(&KeyPress::from_label(label))
    }

    /// Render the current state without applying an event.
    pub fn render_now(&mut self) {
        self.sink
            .render(self.state.display_value(), self.state.expression_value());
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn trace(&self) -> &PhaseTrace {
        &self.trace
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }

    pub fn into_parts(self) -> (CalculatorState, R) {
        (self.state, self.sink)
    }

    // Priority: operator, decimal, clear, then digit.
    fn apply(&mut self, kind: InputKind, value: &str) -> Result<(), DispatchError> {
        match kind {
            InputKind::Operator => {
                let operator: Operator = value.parse()?;
                self.state.handle_operator(operator);
            }
            InputKind::Decimal => {
                if value != DECIMAL_POINT.to_string() {
                    return Err(DispatchError::InvalidDecimal(value.to_string()));
                }
                self.state.input_decimal();
            }
            InputKind::Clear => self.state.reset(),
            InputKind::Digit => {
                let digit: Digit = value.parse()?;
                self.state.input_digit(digit);
            }
        }
        Ok(())
    }

    fn enforce(&mut self) {
        let Validation::Failure(violations) = check_invariants(&self.state) else {
            return;
        };

        for violation in violations.iter() {
            warn!(%violation, "calculator invariant broken");
        }
        if self.on_violation == ViolationStrategy::Reset {
            warn!("resetting calculator after invariant violation");
            self.state.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Phase};
    use crate::dispatch::render::{Frame, RecordingSink};

    fn dispatcher() -> InputDispatcher<RecordingSink> {
        InputDispatcher::new(RecordingSink::new())
    }

    fn press_all(dispatcher: &mut InputDispatcher<RecordingSink>, labels: &[&str]) {
        for label in labels {
            let _ = dispatcher.dispatch_label(label).unwrap();
        }
    }

    #[test]
    fn every_applied_event_renders_once() {
        let mut dispatcher = dispatcher();
        press_all(&mut dispatcher, &["1", "+", "2", "="]);

        let frames = dispatcher.sink().frames();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], Frame::new("1", "1"));
        assert_eq!(frames[1], Frame::new("1", "1+"));
        assert_eq!(frames[2], Frame::new("2", "1+2"));
        assert_eq!(frames[3], Frame::new("3", "1+2="));
    }

    #[test]
    fn unrecognized_events_are_ignored() {
        let mut dispatcher = dispatcher();
        press_all(&mut dispatcher, &["4"]);

        let outcome = dispatcher.dispatch(&KeyPress::unrecognized("%")).unwrap();

        assert_eq!(outcome, Dispatch::Ignored);
        assert_eq!(dispatcher.sink().len(), 1);
        assert_eq!(dispatcher.state().display_value(), "4");
        assert_eq!(dispatcher.trace().len(), 1);
    }

    #[test]
    fn clear_resets_and_renders() {
        let mut dispatcher = dispatcher();
        press_all(&mut dispatcher, &["9", "*", "AC"]);

        assert_eq!(dispatcher.state(), &CalculatorState::default());
        assert_eq!(dispatcher.sink().last(), Some(&Frame::new("0", "")));
    }

    #[test]
    fn misclassified_digit_is_rejected_without_render() {
        let mut dispatcher = dispatcher();
        let result = dispatcher.dispatch(&KeyPress::new(InputKind::Digit, "x"));

        assert_eq!(
            result,
            Err(DispatchError::Input(CalcError::InvalidDigit("x".to_string())))
        );
        assert!(dispatcher.sink().is_empty());
        assert_eq!(dispatcher.state(), &CalculatorState::default());
    }

    #[test]
    fn misclassified_operator_is_rejected() {
        let mut dispatcher = dispatcher();
        let result = dispatcher.dispatch(&KeyPress::new(InputKind::Operator, "%"));
        assert!(matches!(
            result,
            Err(DispatchError::Input(CalcError::UnknownOperator(_)))
        ));
        assert!(dispatcher.trace().is_empty());
    }

    #[test]
    fn decimal_event_must_carry_point() {
        let mut dispatcher = dispatcher();
        let result = dispatcher.dispatch(&KeyPress::new(InputKind::Decimal, ","));
        assert_eq!(result, Err(DispatchError::InvalidDecimal(",".to_string())));
    }

    #[test]
    fn trace_follows_phase_changes() {
        let mut dispatcher = dispatcher();
        press_all(&mut dispatcher, &["5", "+", "*", "3", "C"]);

        assert_eq!(
            dispatcher.trace().path(),
            vec![
                Phase::Idle,
                Phase::Idle,
                Phase::OperandPending,
                Phase::OperandPending,
                Phase::Idle,
                Phase::Idle
            ]
        );
        let triggers: Vec<_> = dispatcher.trace().changes().map(|c| c.trigger).collect();
        assert_eq!(
            triggers,
            vec![
                InputKind::Digit,
                InputKind::Operator,
                InputKind::Operator,
                InputKind::Digit,
                InputKind::Clear
            ]
        );
    }

    // an operator is pending but no first operand was ever captured
    fn operand_less_state() -> CalculatorState {
        serde_json::from_str(
            r#"{
                "display_value": "4",
                "expression_value": "+",
                "first_operand": null,
                "waiting_for_second_operand": false,
                "operator": "+"
            }"#,
        )
        .unwrap()
    }

    fn dispatcher_over(
        state: CalculatorState,
        strategy: ViolationStrategy,
    ) -> InputDispatcher<RecordingSink> {
        InputDispatcher::from_parts(state, RecordingSink::new(), PhaseTrace::new(), strategy)
    }

    #[test]
    fn reset_strategy_clears_broken_state() {
        let mut dispatcher = dispatcher_over(operand_less_state(), ViolationStrategy::Reset);

        let outcome = dispatcher.dispatch_label("5").unwrap();

        assert_eq!(outcome, Dispatch::Rendered);
        assert_eq!(dispatcher.state(), &CalculatorState::default());
        assert_eq!(dispatcher.sink().frames(), &[Frame::new("0", "")]);
        assert_eq!(dispatcher.trace().last().map(|c| c.to), Some(Phase::Idle));
    }

    #[test]
    fn ignore_strategy_keeps_broken_state() {
        let mut dispatcher =
            dispatcher_over(operand_less_state(), ViolationStrategy::IgnoreAndLog);

        let outcome = dispatcher.dispatch_label("5").unwrap();

        assert_eq!(outcome, Dispatch::Rendered);
        assert_eq!(dispatcher.state().display_value(), "45");
        assert_eq!(dispatcher.state().operator(), Some(Operator::Add));
        assert_eq!(dispatcher.state().first_operand(), None);
        assert_eq!(dispatcher.sink().frames(), &[Frame::new("45", "+5")]);
    }

    #[test]
    fn render_now_paints_initial_state() {
        let mut dispatcher = dispatcher();
        dispatcher.render_now();
        assert_eq!(dispatcher.sink().frames(), &[Frame::new("0", "")]);
    }

    #[test]
    fn closure_sink_receives_display_and_expression() {
        let mut screens = Vec::new();
        {
            let mut dispatcher =
                InputDispatcher::new(|display: &str, expression: &str| {
                    screens.push((display.to_string(), expression.to_string()));
                });
            for label in ["5", "/", "0", "="] {
                let _ = dispatcher.dispatch_label(label).unwrap();
            }
        }
        assert_eq!(
            screens.last(),
            Some(&("Infinity".to_string(), "5/0=".to_string()))
        );
    }

    #[test]
    fn into_parts_returns_state_and_sink() {
        let mut dispatcher = dispatcher();
        press_all(&mut dispatcher, &["8"]);
        let (state, sink) = dispatcher.into_parts();
        assert_eq!(state.display_value(), "8");
        assert_eq!(sink.len(), 1);
    }
}
