//! Regression test parameters and operations

use gridalign_core::{LabelGrid, ScalarGrid};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare mode (default) - comparisons contribute to the verdict
    #[default]
    Compare,
    /// Display mode - run without failing the verdict
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current
/// comparison index, mode, and accumulated failures.
pub struct RegParams {
    /// Name of the test (e.g., "binmorph")
    pub test_name: String,
    /// Current comparison index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        if self.mode == RegTestMode::Compare {
            self.success = false;
        }
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if !(diff <= delta) {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare a boolean condition
    pub fn compare_bool(&mut self, description: &str, condition: bool) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: condition for index {}: {}",
                self.test_name, self.index, description
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two scalar grids sample-by-sample within `delta`
    ///
    /// NaN samples compare equal to NaN samples.
    pub fn compare_grids(&mut self, grid1: &ScalarGrid, grid2: &ScalarGrid, delta: f64) -> bool {
        self.index += 1;

        if grid1.width() != grid2.width() || grid1.height() != grid2.height() {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            self.record_failure(msg);
            return false;
        }

        for ix in 0..grid1.width() {
            for iy in 0..grid1.height() {
                let v1 = grid1.value(ix, iy);
                let v2 = grid2.value(ix, iy);
                let same = if v1.is_nan() && v2.is_nan() {
                    true
                } else {
                    (v1 - v2).abs() <= delta
                };
                if !same {
                    let msg = format!(
                        "Failure in {}_reg: grid comparison for index {} - mismatch at ({}, {}): {} vs {}",
                        self.test_name, self.index, ix, iy, v1, v2
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two label grids cell-by-cell for exact equality
    pub fn compare_labels(&mut self, label1: &LabelGrid, label2: &LabelGrid) -> bool {
        self.index += 1;

        if label1.width() != label2.width() || label1.height() != label2.height() {
            let msg = format!(
                "Failure in {}_reg: label comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            self.record_failure(msg);
            return false;
        }

        for x in 0..label1.width() {
            for y in 0..label1.height() {
                if label1.get(x, y) != label2.get(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: label comparison for index {} - mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
