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

use core::ops::{Add, Sub};
use num_traits::{Bounded, Zero};

/// A capability trait for bounded numeric representations: types with
/// well-defined minimum and maximum representable values that support
/// ordering, addition, and subtraction.
///
/// The two predicates answer, *before* any arithmetic is performed, whether
/// applying a step of the given magnitude would stay inside the representable
/// range. Implementations must never wrap, panic, or produce a non-finite
/// value while answering, even when `self` equals one of the extrema.
///
/// Implementations exist for every primitive signed integer, unsigned
/// integer, and IEEE float. For floats the relevant extrema are the finite
/// `MIN`/`MAX`, not the infinities.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::bounded::BoundedStep;
/// let a: u8 = 200;
/// assert!(a.fits_above(55)); // 200 + 55 == 255 == u8::MAX
/// assert!(!a.fits_above(56)); // 200 + 56 would wrap
///
/// let b: i8 = -120;
/// assert!(b.fits_below(8)); // -120 - 8 == i8::MIN
/// assert!(!b.fits_below(9)); // -120 - 9 would underflow
/// ```
pub trait BoundedStep:
    Copy + PartialOrd + Bounded + Zero + Add<Output = Self> + Sub<Output = Self>
{
    /// Returns `true` if `self + amount` stays at or below the maximum
    /// representable value of this type.
    fn fits_above(self, amount: Self) -> bool;

    /// Returns `true` if `self - amount` stays at or above the minimum
    /// representable value of this type.
    fn fits_below(self, amount: Self) -> bool;
}

// For unsigned types the upper headroom `MAX - self` is always representable
// (self <= MAX), and the lower headroom is the value itself: with a minimum
// of zero, a subtraction fits exactly when the amount does not exceed what is
// currently accumulated.
macro_rules! bounded_step_unsigned_impl {
    ($t:ty) => {
        impl BoundedStep for $t {
            #[inline(always)]
            fn fits_above(self, amount: $t) -> bool {
                amount <= <$t>::MAX - self
            }

            #[inline(always)]
            fn fits_below(self, amount: $t) -> bool {
                amount <= self
            }
        }
    };
}

// For signed types the naive headroom `MAX - self` overflows for negative
// `self`, and `|MIN - self|` may not be representable at all (|MIN| > MAX).
// Both checks are therefore rearranged so the computed difference is always
// representable: for any amount > 0, `MAX - amount` and `MIN + amount` lie
// inside the type's range, and nothing that could equal MIN is ever negated.
// A non-positive amount can never push the value past the checked boundary.
macro_rules! bounded_step_signed_impl {
    ($t:ty) => {
        impl BoundedStep for $t {
            #[inline(always)]
            fn fits_above(self, amount: $t) -> bool {
                amount <= 0 || self <= <$t>::MAX - amount
            }

            #[inline(always)]
            fn fits_below(self, amount: $t) -> bool {
                amount <= 0 || self >= <$t>::MIN + amount
            }
        }
    };
}

// Floats use the same rearranged comparisons as signed integers, against the
// finite extrema. `MAX - amount` and `MIN + amount` are finite for any
// finite amount > 0, whereas the direct lower headroom `self - MIN` can
// round up to infinity and defeat the comparison.
macro_rules! bounded_step_float_impl {
    ($t:ty) => {
        impl BoundedStep for $t {
            #[inline(always)]
            fn fits_above(self, amount: $t) -> bool {
                amount <= 0.0 || self <= <$t>::MAX - amount
            }

            #[inline(always)]
            fn fits_below(self, amount: $t) -> bool {
                amount <= 0.0 || self >= <$t>::MIN + amount
            }
        }
    };
}

bounded_step_unsigned_impl!(u8);
bounded_step_unsigned_impl!(u16);
bounded_step_unsigned_impl!(u32);
bounded_step_unsigned_impl!(u64);
bounded_step_unsigned_impl!(u128);
bounded_step_unsigned_impl!(usize);

bounded_step_signed_impl!(i8);
bounded_step_signed_impl!(i16);
bounded_step_signed_impl!(i32);
bounded_step_signed_impl!(i64);
bounded_step_signed_impl!(i128);
bounded_step_signed_impl!(isize);

bounded_step_float_impl!(f32);
bounded_step_float_impl!(f64);
