// ============================================================================
// Validator Module
// Rule sets, results, and the fail-fast validation pipeline
// ============================================================================

mod decimal_validator;
mod result;
mod rules;

pub use decimal_validator::DecimalValidator;
pub use result::ValidationResult;
pub use rules::ValidationRules;
