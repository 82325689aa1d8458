// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Stepping Outcomes
//!
//! A stepping operation either completes every requested step or stops at
//! the first step that would cross a representable boundary. Both cases are
//! expected results, so they are communicated as a tagged value rather than
//! through a panic or a shared flag: each call returns its own outcome, and
//! no state leaks between calls or threads.

/// Which representable boundary a stepping operation ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// The maximum representable value (overflow).
    Upper,
    /// The minimum representable value (underflow).
    Lower,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Boundary::Upper => write!(f, "upper boundary (overflow)"),
            Boundary::Lower => write!(f, "lower boundary (underflow)"),
        }
    }
}

/// The single error kind of this crate: the requested number of steps could
/// not be completed because one more step would have crossed a representable
/// boundary.
///
/// This is an expected, recoverable condition. It records which boundary
/// would have been crossed and how many steps completed before the stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryExceeded {
    boundary: Boundary,
    steps_completed: u64,
}

impl BoundaryExceeded {
    #[inline]
    pub fn new(boundary: Boundary, steps_completed: u64) -> Self {
        Self {
            boundary,
            steps_completed,
        }
    }

    /// The boundary the next step would have crossed.
    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// How many steps were applied before the operation stopped.
    #[inline]
    pub fn steps_completed(&self) -> u64 {
        self.steps_completed
    }
}

impl std::fmt::Display for BoundaryExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "step would cross the {} after {} completed steps",
            self.boundary, self.steps_completed
        )
    }
}

impl std::error::Error for BoundaryExceeded {}

/// Result of a bounded stepping operation.
///
/// `Complete` carries the exact accumulated value after all requested steps.
/// `Exceeded` carries the last in-range accumulator as `partial`; that value
/// is only where the operation stopped, not a meaningful result, and callers
/// must branch on the variant rather than use it as an answer.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::ops::outcome::{Boundary, StepOutcome};
/// let done: StepOutcome<u8> = StepOutcome::Complete(255);
/// assert!(done.is_complete());
/// assert_eq!(done.completed_value(), Some(255));
///
/// let stopped: StepOutcome<u8> = StepOutcome::Exceeded {
///     partial: 255,
///     boundary: Boundary::Upper,
///     steps_completed: 5,
/// };
/// assert!(!stopped.is_complete());
/// assert_eq!(stopped.completed_value(), None);
/// assert_eq!(stopped.boundary(), Some(Boundary::Upper));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome<T> {
    /// Every requested step was applied without crossing a boundary.
    Complete(T),
    /// The operation stopped before the step that would have crossed a
    /// boundary.
    Exceeded {
        /// The accumulator as of the last in-range step.
        partial: T,
        /// Which boundary the next step would have crossed.
        boundary: Boundary,
        /// How many steps were applied before the stop.
        steps_completed: u64,
    },
}

impl<T> StepOutcome<T> {
    /// Returns `true` if every requested step completed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, StepOutcome::Complete(_))
    }

    /// Returns `true` if the operation stopped at a boundary.
    #[inline]
    pub fn is_exceeded(&self) -> bool {
        matches!(self, StepOutcome::Exceeded { .. })
    }

    /// The accumulated value if the operation completed, `None` otherwise.
    #[inline]
    pub fn completed_value(self) -> Option<T> {
        match self {
            StepOutcome::Complete(value) => Some(value),
            StepOutcome::Exceeded { .. } => None,
        }
    }

    /// The boundary that stopped the operation, `None` if it completed.
    #[inline]
    pub fn boundary(&self) -> Option<Boundary> {
        match self {
            StepOutcome::Complete(_) => None,
            StepOutcome::Exceeded { boundary, .. } => Some(*boundary),
        }
    }

    /// How many steps were applied before a boundary stopped the operation,
    /// `None` if it completed.
    #[inline]
    pub fn steps_completed(&self) -> Option<u64> {
        match self {
            StepOutcome::Complete(_) => None,
            StepOutcome::Exceeded {
                steps_completed, ..
            } => Some(*steps_completed),
        }
    }

    /// Converts into a `Result` for `?`-style callers, discarding the
    /// partial accumulator on failure.
    #[inline]
    pub fn into_result(self) -> Result<T, BoundaryExceeded> {
        match self {
            StepOutcome::Complete(value) => Ok(value),
            StepOutcome::Exceeded {
                boundary,
                steps_completed,
                ..
            } => Err(BoundaryExceeded::new(boundary, steps_completed)),
        }
    }
}

impl<T> std::fmt::Display for StepOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepOutcome::Complete(value) => write!(f, "Complete({})", value),
            StepOutcome::Exceeded {
                boundary,
                steps_completed,
                ..
            } => write!(
                f,
                "Exceeded({}, after {} steps)",
                boundary, steps_completed
            ),
        }
    }
}
