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

//! # Numeric Foundations
//!
//! The bounded-numeric capability layer. This module defines what it means
//! for a type to participate in bounded stepping: ordering, addition,
//! subtraction, and introspection of the type's own representable extrema,
//! plus pre-condition predicates that decide whether a step fits without
//! performing it.
//!
//! ## Submodules
//!
//! - `bounded`: The [`BoundedStep`](bounded::BoundedStep) trait and its
//!   per-type implementations for all primitive integers and floats.
//!
//! ## Motivation
//!
//! Overflow detection differs fundamentally between representation classes:
//! unsigned integers can compute upper headroom directly but must derive
//! lower headroom from the value itself, signed integers must avoid both
//! overflowing intermediate differences and negating their own minimum, and
//! floats must treat the finite extrema as hard walls rather than spilling
//! into infinities. Encoding each class's correct check once, behind one
//! trait, keeps the stepping operations generic and free of per-type code.

pub mod bounded;
