//! Degenerate-geometry errors.
//!
//! Every fallible operation reports its failure through this enum. Errors
//! are local to a single call: there is no global error state, and no
//! operation has partial side effects to roll back.

use thiserror::Error;

/// Degenerate-geometry failure taxonomy.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A finite slope was required but the line is vertical.
    #[error("line is vertical, slope is undefined")]
    VerticalLine,
    /// Two coincident endpoints define no line.
    #[error("line endpoints coincide, no line is defined")]
    CoincidentEndpoints,
    /// Equal slopes (including two vertical lines) admit no unique crossing.
    #[error("lines are parallel, no unique intersection")]
    ParallelLines,
    /// Element-wise division by a coordinate with a zero component.
    #[error("division by a coordinate with a zero component")]
    ZeroDivisor,
}
