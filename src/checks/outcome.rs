//! Check outcome types.
//!
//! Each check produces a `CheckOutcome` describing how the host fared. The
//! live output shows three levels; the final tally only knows pass/fail,
//! so a warning counts as a failure there.

use std::fmt;

/// The result of running a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The check passed.
    Ok {
        /// Extra detail shown in parentheses (e.g., the detected version).
        detail: Option<String>,
    },

    /// The host is not usable as configured.
    Failed {
        /// Why the check failed, if there is anything to say.
        reason: Option<String>,
    },

    /// A non-essential degradation. Still fails the tally.
    Warning {
        /// What is degraded.
        reason: String,
        /// Command that would fix it.
        hint: Option<String>,
    },
}

impl CheckOutcome {
    /// A bare pass.
    pub fn ok() -> Self {
        Self::Ok { detail: None }
    }

    /// A pass with detail. Blank detail is dropped.
    pub fn ok_with(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Ok {
            detail: (!detail.is_empty()).then_some(detail),
        }
    }

    /// A failure with a reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: Some(reason.into()),
        }
    }

    /// A warning with an optional remediation command.
    pub fn warning(reason: impl Into<String>, hint: Option<&str>) -> Self {
        Self::Warning {
            reason: reason.into(),
            hint: hint.map(str::to_string),
        }
    }

    /// Whether this outcome counts as a pass in the summary.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Remediation command, for warnings that carry one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Warning { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (token, detail) = match self {
            Self::Ok { detail } => ("OK", detail.as_deref()),
            Self::Failed { reason } => ("FAILED", reason.as_deref()),
            Self::Warning { reason, .. } => ("WARNING", Some(reason.as_str())),
        };
        match detail {
            Some(detail) => write!(f, "{} ({})", token, detail),
            None => f.write_str(token),
        }
    }
}
