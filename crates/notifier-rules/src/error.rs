//! Rule model errors.

use crate::catalog::Operator;

/// Reason reported when an item operand is not a known metal type.
pub const NOT_AN_ITEM_KIND: &str = "not a recognized item kind";

/// Reason reported when a price operand is not a usable number.
pub const NOT_A_NON_NEGATIVE_NUMBER: &str = "not a valid non-negative number";

/// Errors produced by the rule model.
///
/// `InvalidOperand` is a user-input problem and can be re-prompted.
/// `MalformedRule` means a persisted rule bypassed validation and should be
/// treated as a corrupt record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid operand: {reason}")]
    InvalidOperand { reason: &'static str },

    #[error("Malformed rule: {operator} with operand {operand:?}")]
    MalformedRule { operator: Operator, operand: String },

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

impl RuleError {
    pub(crate) fn invalid_item_kind() -> Self {
        Self::InvalidOperand {
            reason: NOT_AN_ITEM_KIND,
        }
    }

    pub(crate) fn invalid_number() -> Self {
        Self::InvalidOperand {
            reason: NOT_A_NON_NEGATIVE_NUMBER,
        }
    }
}
