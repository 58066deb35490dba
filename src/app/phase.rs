//! Derived phase type for the calculator state machine.
//!
//! The state machine does not store a phase discriminant; the phase is a
//! projection of the field combination in [`CalcState`](crate::app::CalcState),
//! computed on demand. Embedders use it to drive presentation decisions
//! (spinner, error styling) and tests use it to assert transitions.

/// The calculator's current phase, derived from its field combination.
///
/// Derivation order matters: `Computing` wins over everything (a request is in
/// flight), then `Error` (the display shows the error marker), then the
/// operand/operator combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operand captured, no operator pending. The initial state.
    Idle,

    /// A first operand is held (captured or carried over from a result), or a
    /// second operand is being typed under a pending operator.
    OperandEntered,

    /// An operator was chosen and the next digit press starts the second
    /// operand.
    AwaitingSecondOperand,

    /// A calculation request is outstanding. All input except clear is
    /// ignored.
    Computing,

    /// The last calculation failed; the display shows the error marker.
    /// Recoverable via clear or fresh digit entry.
    Error,
}
