//! Render sinks that present the calculator display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output surface for the numeric display and the expression log.
///
/// Any `FnMut(&str, &str)` closure is a sink.
pub trait RenderSink {
    fn render(&mut self, display: &str, expression: &str);
}

impl<F> RenderSink for F
where
    F: FnMut(&str, &str),
{
    fn render(&mut self, display: &str, expression: &str) {
        self(display, expression)
    }
}

/// One rendered screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub display: String,
    pub expression: String,
}

impl Frame {
    pub fn new(display: &str, expression: &str) -> Self {
        Self {
            display: display.to_string(),
            expression: expression.to_string(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>20}  {}", self.display, self.expression)
    }
}

/// Sink that keeps every frame it was asked to render.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    frames: Vec<Frame>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, display: &str, expression: &str) {
        self.frames.push(Frame::new(display, expression));
    }
}
