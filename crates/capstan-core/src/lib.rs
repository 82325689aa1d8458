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

//! # Capstan Core
//!
//! Overflow-safe bounded stepping arithmetic over primitive numeric types.
//! This crate provides generic accumulation routines that apply an increment
//! (or decrement) a fixed number of times and stop the instant one more step
//! would leave the representable range of the operand type, instead of
//! wrapping, saturating, or producing a non-finite value.
//!
//! ## Modules
//!
//! - `num`: The [`BoundedStep`](num::bounded::BoundedStep) capability trait,
//!   implemented for every primitive signed integer, unsigned integer, and
//!   IEEE float. It exposes pre-condition range predicates that decide, before
//!   any arithmetic is performed, whether a step fits between the current
//!   value and the type's representable extrema.
//! - `ops`: The stepping operations [`bounded_add`](ops::stepping::bounded_add)
//!   and [`bounded_sub`](ops::stepping::bounded_sub) together with the tagged
//!   [`StepOutcome`](ops::outcome::StepOutcome) they return.
//!
//! ## Purpose
//!
//! Boundary probing is a routine operation for callers of this crate, so a
//! crossed boundary is an expected outcome rather than a fault: operations
//! never panic, never wrap, and report failure as a value. All range checks
//! are performed *before* mutating the accumulator, so no intermediate result
//! ever leaves the representable range of the operand type.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod ops;
