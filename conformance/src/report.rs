//! Verification report types: results, severity levels, and aggregation.

use serde::Serialize;

/// Severity level of a verification check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check identified a warning (non-blocking).
    Warning,
    /// The check failed (a structural invariant is violated).
    Failure,
}

/// A single verification check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Short identifier of the validator that produced this result.
    pub validator: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines.
    pub details: Vec<String>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a failure result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Failure,
            details: Vec::new(),
        }
    }

    /// Creates a failure result with additional detail lines.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// Creates a warning result.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity: Severity::Warning,
            details: Vec::new(),
        }
    }

    /// Returns true if this result represents a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated verification report from all validators.
///
/// A report is a plain value: building one never prints, logs, or aborts.
/// Callers decide how to surface it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// All individual check results across all validators.
    pub results: Vec<CheckResult>,
}

impl VerificationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: VerificationReport) {
        self.results.extend(other.results);
    }

    /// Returns the count of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if all checks passed (no failures).
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// The failure messages, one per violated check.
    ///
    /// This is the diagnostics sequence of the verifier contract: empty
    /// exactly when the report passes.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|r| r.is_failure())
            .map(|r| format!("{}: {}", r.validator, r.message))
            .collect()
    }
}
