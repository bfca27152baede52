// ============================================================================
// Validation Result
// One optional failure message; validity is derived from its absence
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a single validation call.
///
/// Either valid, or carries exactly one human-readable failure message (the
/// first check that failed). The message may also be a template key rather
/// than literal text; that substitution is the caller's concern. A fresh
/// result is created per call and never shared between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    fail_message: Option<String>,
}

impl ValidationResult {
    /// A passing result with no message.
    pub const fn valid() -> Self {
        Self { fail_message: None }
    }

    /// A failing result carrying the given message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            fail_message: Some(message.into()),
        }
    }

    /// Valid iff no failure message is set.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.fail_message.is_none()
    }

    /// The failure message, if any check failed.
    pub fn fail_message(&self) -> Option<&str> {
        self.fail_message.as_deref()
    }
}
