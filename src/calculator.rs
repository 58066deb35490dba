//! Embedder-facing calculator facade.
//!
//! This module provides the thin integration layer between the state machine
//! and a concrete [`CalculationBackend`]. It exposes the key-press surface a
//! presentation layer calls (`press_digit` through `press_clear`) and the render
//! surface it reads (`display_text`, `is_loading`, `viewmodel`).
//!
//! # Architecture
//!
//! The facade runs the cooperative event loop: each key press becomes an
//! [`Event`], the handler returns actions, actions are dispatched to the
//! backend, and any [`BackendResponse`](crate::backend::BackendResponse) is
//! fed back through the handler as a new event before the press call returns.
//!
//! ```text
//! press_*  →  Event  →  handle_event  →  Actions  →  backend dispatch
//!                ↑                                        │
//!                └──────────── BackendResponse ───────────┘
//! ```
//!
//! Embedders bridging to a genuinely remote service bypass this facade's
//! dispatch: they drive [`handle_event`](crate::app::handle_event) directly,
//! ship the emitted requests over their transport, and feed responses back as
//! events when they arrive. The state machine's loading guard and generation
//! check behave identically either way.

use crate::app::{handle_event, Action, CalcState, Event, Phase};
use crate::backend::{dispatch, CalculationBackend};
use crate::domain::Operator;
use crate::ui::DisplayViewModel;
use crate::Config;
use std::collections::VecDeque;

/// Calculator facade owning the state machine and an injected backend.
///
/// # Example
///
/// ```
/// use remcalc::{Calculator, LocalBackend, Operator};
///
/// let mut calc = Calculator::new(Box::new(LocalBackend::new()));
/// calc.press_digit('3');
/// calc.press_operator(Operator::Add);
/// calc.press_digit('4');
/// calc.press_equals();
///
/// assert_eq!(calc.display_text(), "7");
/// assert!(!calc.is_loading());
/// ```
pub struct Calculator {
    /// Core calculator state.
    state: CalcState,

    /// Injected calculation capability.
    backend: Box<dyn CalculationBackend>,
}

impl Calculator {
    /// Creates a calculator in its initial state around the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn CalculationBackend>) -> Self {
        Self {
            state: CalcState::new(),
            backend,
        }
    }

    /// Creates a calculator and initializes tracing from the configuration.
    ///
    /// Equivalent to [`initialize`](crate::initialize) followed by wrapping
    /// the returned state with the backend.
    #[must_use]
    pub fn with_config(backend: Box<dyn CalculationBackend>, config: &Config) -> Self {
        Self {
            state: crate::initialize(config),
            backend,
        }
    }

    /// Presses a digit key (`'0'..='9'`). Returns whether to re-render.
    pub fn press_digit(&mut self, digit: char) -> bool {
        self.apply(Event::Digit(digit))
    }

    /// Presses the decimal point key. Returns whether to re-render.
    pub fn press_decimal(&mut self) -> bool {
        self.apply(Event::Decimal)
    }

    /// Presses an operator key. Returns whether to re-render.
    pub fn press_operator(&mut self, operator: Operator) -> bool {
        self.apply(Event::Operator(operator))
    }

    /// Presses the equals key. Returns whether to re-render.
    pub fn press_equals(&mut self) -> bool {
        self.apply(Event::Equals)
    }

    /// Presses the clear key. Returns whether to re-render.
    pub fn press_clear(&mut self) -> bool {
        self.apply(Event::Clear)
    }

    /// The text to render: a numeric literal or the error marker.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.state.display_text()
    }

    /// Whether a calculation is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The derived phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Read access to the underlying state machine.
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Computes the render-facing view model.
    #[must_use]
    pub fn viewmodel(&self) -> DisplayViewModel {
        self.state.compute_viewmodel()
    }

    /// Runs one event through the cooperative loop, dispatching emitted
    /// requests and feeding responses back until the queue drains.
    fn apply(&mut self, event: Event) -> bool {
        let mut should_render = false;
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            match handle_event(&mut self.state, &event) {
                Ok((render, actions)) => {
                    should_render |= render;
                    for action in actions {
                        match action {
                            Action::PostToBackend(request) => {
                                if let Some(response) =
                                    dispatch::handle_request(self.backend.as_mut(), request)
                                {
                                    queue.push_back(Event::BackendResponse(response));
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                }
            }
        }

        should_render
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
