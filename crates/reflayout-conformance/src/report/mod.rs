pub mod console;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::check::CheckReport;
use crate::exit_codes;

/// All checks of one suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub checks: Vec<CheckReport>,
}

impl SuiteReport {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            checks: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.checks.iter().map(|c| c.total).sum()
    }

    pub fn failed(&self) -> usize {
        self.checks.iter().map(CheckReport::failed).sum()
    }

    pub fn passed(&self) -> usize {
        self.total() - self.failed()
    }

    pub fn is_success(&self) -> bool {
        self.checks.iter().all(CheckReport::is_success)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            exit_codes::SUCCESS
        } else {
            exit_codes::MISMATCH
        }
    }
}
