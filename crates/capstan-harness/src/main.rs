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

//! # Capstan Harness
//!
//! Drives the bounded stepping operations across the fixed catalog of
//! primitive numeric types and prints one pass/fail line per probe case.
//!
//! Each type gets four probes. The overflow pair starts at zero and applies
//! `MAX / 5` five times (must complete, landing on or near `MAX`) and then
//! six times (must trip the upper boundary). The underflow pair starts at
//! `MIN + MAX` — not `MAX`, so that unsigned types can underflow at all —
//! and applies the same step downward five times (must complete) and six
//! times (must trip the lower boundary).

mod report;

use capstan_core::ops::stepping::{bounded_add, bounded_sub};
use report::ProbeReport;

const STEPS: u64 = 5;

macro_rules! probe_type {
    ($t:ty, $report:expr) => {{
        let type_name = stringify!($t);
        let increment = <$t>::MAX / (STEPS as $t);

        let outcome = bounded_add(0 as $t, increment, STEPS);
        $report.record(
            type_name,
            "add in range",
            true,
            outcome.to_string(),
            outcome.is_complete(),
        );

        let outcome = bounded_add(0 as $t, increment, STEPS + 1);
        $report.record(
            type_name,
            "add overflow",
            false,
            outcome.to_string(),
            outcome.is_complete(),
        );

        let start = <$t>::MIN + <$t>::MAX;

        let outcome = bounded_sub(start, increment, STEPS);
        $report.record(
            type_name,
            "sub in range",
            true,
            outcome.to_string(),
            outcome.is_complete(),
        );

        let outcome = bounded_sub(start, increment, STEPS + 1);
        $report.record(
            type_name,
            "sub underflow",
            false,
            outcome.to_string(),
            outcome.is_complete(),
        );
    }};
}

fn main() {
    println!("Bounded stepping probes across the primitive numeric catalog");
    println!();

    let mut report = ProbeReport::new();
    report.print_header();

    probe_type!(i8, report);
    probe_type!(i16, report);
    probe_type!(i32, report);
    probe_type!(i64, report);
    probe_type!(i128, report);
    probe_type!(isize, report);

    probe_type!(u8, report);
    probe_type!(u16, report);
    probe_type!(u32, report);
    probe_type!(u64, report);
    probe_type!(u128, report);
    probe_type!(usize, report);

    probe_type!(f32, report);
    probe_type!(f64, report);

    report.print_summary();

    if report.failures() > 0 {
        std::process::exit(1);
    }
}
