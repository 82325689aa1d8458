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

//! Cross-module properties of the bounded stepping operations, checked
//! against a wider reference representation and over randomized operands.

use capstan_core::num::bounded::BoundedStep;
use capstan_core::ops::outcome::Boundary;
use capstan_core::ops::stepping::{bounded_add, bounded_sub};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng() -> StdRng {
    // Fixed seed so failures reproduce.
    StdRng::seed_from_u64(0x1157_2a9e)
}

#[test]
fn zero_increment_completes_for_any_step_count() {
    for steps in [0u64, 1, 7, 1_000, 10_000_000] {
        assert_eq!(bounded_add(123u8, 0, steps).completed_value(), Some(123));
        assert_eq!(bounded_add(-5i64, 0, steps).completed_value(), Some(-5));
        assert_eq!(bounded_sub(0u32, 0, steps).completed_value(), Some(0));
        assert_eq!(bounded_add(2.5f32, 0.0, steps).completed_value(), Some(2.5));
    }
}

#[test]
fn zero_steps_is_identity_at_the_extrema() {
    assert_eq!(bounded_add(u8::MAX, 1, 0).completed_value(), Some(u8::MAX));
    assert_eq!(bounded_sub(u8::MIN, 1, 0).completed_value(), Some(u8::MIN));
    assert_eq!(bounded_add(i8::MAX, 1, 0).completed_value(), Some(i8::MAX));
    assert_eq!(bounded_sub(i8::MIN, 1, 0).completed_value(), Some(i8::MIN));
    assert_eq!(
        bounded_add(f64::MAX, f64::MAX, 0).completed_value(),
        Some(f64::MAX)
    );
}

#[test]
fn failure_is_monotonic_in_step_count() {
    // Once a step count fails, every larger step count fails, and at the
    // same stopping point.
    let first_failing = bounded_add(0u8, 51, 6);
    assert!(first_failing.is_exceeded());

    for extra in 0..64u64 {
        let outcome = bounded_add(0u8, 51, 6 + extra);
        assert_eq!(outcome, first_failing);
    }

    let first_failing = bounded_sub(-1i8, 25, 6);
    assert!(first_failing.is_exceeded());

    for extra in 0..64u64 {
        let outcome = bounded_sub(-1i8, 25, 6 + extra);
        assert_eq!(outcome, first_failing);
    }
}

#[test]
fn unsigned_add_matches_wide_reference() {
    let mut rng = rng();

    for _ in 0..2_000 {
        let start: u16 = rng.random_range(0..=u16::MAX);
        let increment: u16 = rng.random_range(0..=u16::MAX);
        let steps: u64 = rng.random_range(0..=32);

        let exact = start as i128 + increment as i128 * steps as i128;
        let outcome = bounded_add(start, increment, steps);

        if exact <= u16::MAX as i128 {
            assert_eq!(
                outcome.completed_value(),
                Some(exact as u16),
                "start={start} increment={increment} steps={steps}"
            );
        } else {
            assert_eq!(
                outcome.boundary(),
                Some(Boundary::Upper),
                "start={start} increment={increment} steps={steps}"
            );
        }
    }
}

#[test]
fn signed_add_matches_wide_reference() {
    let mut rng = rng();

    for _ in 0..2_000 {
        let start: i16 = rng.random_range(i16::MIN..=i16::MAX);
        let increment: i16 = rng.random_range(0..=i16::MAX);
        let steps: u64 = rng.random_range(0..=32);

        let exact = start as i128 + increment as i128 * steps as i128;
        let outcome = bounded_add(start, increment, steps);

        if exact <= i16::MAX as i128 {
            assert_eq!(
                outcome.completed_value(),
                Some(exact as i16),
                "start={start} increment={increment} steps={steps}"
            );
        } else {
            assert_eq!(
                outcome.boundary(),
                Some(Boundary::Upper),
                "start={start} increment={increment} steps={steps}"
            );
        }
    }
}

#[test]
fn signed_sub_matches_wide_reference() {
    let mut rng = rng();

    for _ in 0..2_000 {
        let start: i16 = rng.random_range(i16::MIN..=i16::MAX);
        let decrement: i16 = rng.random_range(0..=i16::MAX);
        let steps: u64 = rng.random_range(0..=32);

        let exact = start as i128 - decrement as i128 * steps as i128;
        let outcome = bounded_sub(start, decrement, steps);

        if exact >= i16::MIN as i128 {
            assert_eq!(
                outcome.completed_value(),
                Some(exact as i16),
                "start={start} decrement={decrement} steps={steps}"
            );
        } else {
            assert_eq!(
                outcome.boundary(),
                Some(Boundary::Lower),
                "start={start} decrement={decrement} steps={steps}"
            );
        }
    }
}

#[test]
fn unsigned_sub_headroom_is_the_current_value() {
    let mut rng = rng();

    // For a type whose minimum is zero, a single step fits exactly when the
    // decrement does not exceed the current value.
    for _ in 0..2_000 {
        let start: u32 = rng.random_range(0..=u32::MAX);
        let decrement: u32 = rng.random_range(0..=u32::MAX);

        let outcome = bounded_sub(start, decrement, 1);
        if decrement <= start {
            assert_eq!(outcome.completed_value(), Some(start - decrement));
        } else {
            assert_eq!(outcome.boundary(), Some(Boundary::Lower));
            assert_eq!(outcome.steps_completed(), Some(0));
        }
    }

    assert!(0u64.fits_below(0));
    assert!(!0u64.fits_below(1));
}

#[test]
fn f32_accumulation_matches_f64_reference_on_exact_operands() {
    // Small integral operands are exactly representable in both widths, so
    // the f32 accumulation must track the f64 reference bit for bit.
    let mut rng = rng();

    for _ in 0..2_000 {
        let start: f32 = rng.random_range(-1_000..1_000) as f32;
        let increment: f32 = rng.random_range(0..1_000) as f32;
        let steps: u64 = rng.random_range(0..=32);

        let exact = start as f64 + increment as f64 * steps as f64;
        let outcome = bounded_add(start, increment, steps);
        assert_eq!(outcome.completed_value(), Some(exact as f32));
    }
}

#[test]
fn probe_shape_holds_for_every_catalog_width() {
    // The probe shape: five increments of MAX / 5 fit, a sixth does not,
    // and the underflow probe starts from MIN + MAX so that unsigned types
    // (where that sum is MAX) can underflow at all.
    macro_rules! check_probe {
        ($t:ty) => {{
            let increment = <$t>::MAX / (5 as $t);
            assert!(bounded_add(0 as $t, increment, 5).is_complete());
            assert!(bounded_add(0 as $t, increment, 6).is_exceeded());

            let start = <$t>::MIN + <$t>::MAX;
            assert!(bounded_sub(start, increment, 5).is_complete());
            assert!(bounded_sub(start, increment, 6).is_exceeded());
        }};
    }

    check_probe!(i8);
    check_probe!(i16);
    check_probe!(i32);
    check_probe!(i64);
    check_probe!(i128);
    check_probe!(isize);

    check_probe!(u8);
    check_probe!(u16);
    check_probe!(u32);
    check_probe!(u64);
    check_probe!(u128);
    check_probe!(usize);

    check_probe!(f32);
    check_probe!(f64);
}
