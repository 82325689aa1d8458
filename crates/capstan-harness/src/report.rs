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

//! Column-aligned pass/fail reporting for the probe runs.

/// Collects probe results and prints one aligned table line per case.
#[derive(Debug, Default)]
pub struct ProbeReport {
    cases: u32,
    failures: u32,
}

impl ProbeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_header(&self) {
        println!(
            "{:<7} | {:<15} | {:<9} | {:<52} | {:<6}",
            "Type", "Case", "Expected", "Observed", "Status"
        );
        println!("{}", "-".repeat(102));
    }

    /// Records one probe case and prints its table line.
    pub fn record(
        &mut self,
        type_name: &str,
        case: &str,
        expect_complete: bool,
        observed: String,
        observed_complete: bool,
    ) {
        self.cases += 1;
        let pass = expect_complete == observed_complete;
        if !pass {
            self.failures += 1;
        }

        let expected = if expect_complete { "Complete" } else { "Exceeded" };
        let status = if pass { "PASS" } else { "FAIL" };

        println!(
            "{:<7} | {:<15} | {:<9} | {:<52} | {:<6}",
            type_name, case, expected, observed, status
        );
    }

    pub fn print_summary(&self) {
        println!("{}", "-".repeat(102));
        println!(
            "{} cases, {} passed, {} failed",
            self.cases,
            self.cases - self.failures,
            self.failures
        );
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }
}
