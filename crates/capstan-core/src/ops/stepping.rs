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

//! # Iterative Bounded Stepping
//!
//! `start + increment*steps` and `start - decrement*steps`, applied one step
//! at a time with a range check before every mutation.
//!
//! ## Why one step at a time
//!
//! A closed-form `increment * steps` can itself overflow and corrupt the
//! check, so the multiplication is never formed. Each iteration asks the
//! [`BoundedStep`] predicate whether the next step fits; only then is the
//! accumulator mutated. The accumulator therefore never holds a wrapped,
//! saturated, or non-finite value at any point, and a failed call returns
//! the last in-range accumulator together with the boundary it ran into.

use crate::num::bounded::BoundedStep;
use crate::ops::outcome::{Boundary, StepOutcome};

/// Applies `increment` to `start` the requested number of times, stopping at
/// the first step that would exceed the maximum representable value of `T`.
///
/// Zero steps complete immediately with `start`, and a zero (or, for signed
/// types, negative) increment completes for any step count. For floats the
/// upper boundary is the finite `MAX`, not infinity.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::ops::stepping::bounded_add;
/// // 255 / 5 == 51: five steps land exactly on u8::MAX.
/// let outcome = bounded_add(0u8, 51, 5);
/// assert_eq!(outcome.completed_value(), Some(255));
///
/// // A sixth step has no headroom left and must fail.
/// let outcome = bounded_add(0u8, 51, 6);
/// assert!(outcome.is_exceeded());
/// assert_eq!(outcome.steps_completed(), Some(5));
/// ```
pub fn bounded_add<T>(start: T, increment: T, steps: u64) -> StepOutcome<T>
where
    T: BoundedStep,
{
    let mut accumulated = start;

    for completed in 0..steps {
        if !accumulated.fits_above(increment) {
            return StepOutcome::Exceeded {
                partial: accumulated,
                boundary: Boundary::Upper,
                steps_completed: completed,
            };
        }
        accumulated = accumulated + increment;
    }

    StepOutcome::Complete(accumulated)
}

/// Applies `decrement` to `start` the requested number of times, stopping at
/// the first step that would fall below the minimum representable value of
/// `T`.
///
/// Symmetric to [`bounded_add`], mirrored around the lower boundary. For
/// unsigned types the lower boundary is zero and the available headroom is
/// the current accumulator itself.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::ops::stepping::bounded_sub;
/// let outcome = bounded_sub(-1i8, 25, 5);
/// assert_eq!(outcome.completed_value(), Some(-126));
///
/// // One more step would land on -151, below i8::MIN.
/// let outcome = bounded_sub(-1i8, 25, 6);
/// assert!(outcome.is_exceeded());
/// assert_eq!(outcome.steps_completed(), Some(5));
/// ```
pub fn bounded_sub<T>(start: T, decrement: T, steps: u64) -> StepOutcome<T>
where
    T: BoundedStep,
{
    let mut accumulated = start;

    for completed in 0..steps {
        if !accumulated.fits_below(decrement) {
            return StepOutcome::Exceeded {
                partial: accumulated,
                boundary: Boundary::Lower,
                steps_completed: completed,
            };
        }
        accumulated = accumulated - decrement;
    }

    StepOutcome::Complete(accumulated)
}
