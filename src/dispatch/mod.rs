//! Input dispatch: the shell around the pure calculator core.
//!
//! A UI layer supplies [`InputEvent`]s and a [`RenderSink`]; the
//! [`InputDispatcher`] routes each event to the matching
//! [`CalculatorState`](crate::core::CalculatorState) operation and renders
//! the display and expression log after it. The core never sees the UI.

mod dispatcher;
mod error;
mod event;
mod render;

pub use crate::core::InputKind;
pub use dispatcher::{Dispatch, InputDispatcher};
pub use error::DispatchError;
pub use event::{InputEvent, KeyPress};
pub use render::{Frame, RecordingSink, RenderSink};
