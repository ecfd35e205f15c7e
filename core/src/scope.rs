//! The assertion scope: the explicit, accumulating failure collector.
//!
//! Every check in the engine reports through a scope passed by reference;
//! there is no ambient or thread-local assertion state. A check reads as
//!
//! ```
//! # use deep_equiv::{AssertionScope, EquivOptions, Failure};
//! # fn demo(scope: &mut AssertionScope<'_>) -> Result<(), deep_equiv::EquivError> {
//! let held = scope
//!     .for_condition(1 + 1 == 2)
//!     .fail_with(|| Failure::MemberMissing {
//!         path: "subject".to_string(),
//!         name: "total".to_string(),
//!     })?;
//! assert!(held);
//! # Ok(())
//! # }
//! # let options = EquivOptions::default();
//! # let mut scope = AssertionScope::new(&options);
//! # demo(&mut scope).unwrap();
//! ```
//!
//! `fail_with` records the failure lazily when the condition is false and
//! returns whether the condition held, so callers can accumulate a combined
//! boolean across several independent checks without short-circuiting.

use crate::config::{EquivOptions, LimitBehavior};
use crate::report::{EquivError, EquivalencyReport, Failure};

/// Collects failures and warnings for one verification run.
#[derive(Debug)]
pub struct AssertionScope<'o> {
    options: &'o EquivOptions,
    failures: Vec<Failure>,
    warnings: Vec<String>,
    complete: bool,
    truncated: bool,
}

impl<'o> AssertionScope<'o> {
    pub fn new(options: &'o EquivOptions) -> AssertionScope<'o> {
        AssertionScope {
            options,
            failures: Vec::new(),
            warnings: Vec::new(),
            complete: true,
            truncated: false,
        }
    }

    /// Start a condition-based check. The returned clause records a failure
    /// when the condition is false.
    pub fn for_condition(&mut self, condition: bool) -> Condition<'_, 'o> {
        Condition {
            scope: self,
            holds: condition,
        }
    }

    /// Record a failure, honoring the configured failure limit.
    pub(crate) fn record(&mut self, failure: Failure) -> Result<(), EquivError> {
        if self.failures.len() >= self.options.max_failures {
            match self.options.on_limit_exceeded {
                LimitBehavior::ReturnError => {
                    return Err(EquivError::LimitsExceeded {
                        count: self.failures.len() + 1,
                        max: self.options.max_failures,
                    });
                }
                LimitBehavior::ReturnPartialResult => {
                    if !self.truncated {
                        self.truncated = true;
                        self.mark_incomplete(format!(
                            "failure limit of {} reached; further failures were not recorded",
                            self.options.max_failures
                        ));
                    }
                    return Ok(());
                }
            }
        }
        self.failures.push(failure);
        Ok(())
    }

    /// Add a warning and mark the eventual report incomplete.
    pub fn mark_incomplete(&mut self, warning: String) {
        self.warnings.push(warning);
        self.complete = false;
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub(crate) fn into_report(self) -> EquivalencyReport {
        let mut report = EquivalencyReport::new(self.failures);
        report.complete = self.complete;
        report.warnings = self.warnings;
        report
    }
}

/// A pending condition-based check on a scope.
#[derive(Debug)]
pub struct Condition<'s, 'o> {
    scope: &'s mut AssertionScope<'o>,
    holds: bool,
}

impl Condition<'_, '_> {
    /// Record `failure` if the condition did not hold; returns whether it
    /// held. The failure is built lazily, only on the failing path.
    pub fn fail_with<F>(self, failure: F) -> Result<bool, EquivError>
    where
        F: FnOnce() -> Failure,
    {
        if !self.holds {
            self.scope.record(failure())?;
        }
        Ok(self.holds)
    }
}
