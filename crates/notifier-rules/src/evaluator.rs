//! Rule set evaluation.

use crate::context::PricedItem;
use crate::error::RuleError;
use crate::rule::Rule;
use crate::specification::{AllOf, Specification};

/// Decide whether `item` satisfies every rule in `rules`.
///
/// Rules are checked in order and evaluation stops at the first one that
/// fails. An empty rule set is satisfied by every item.
pub fn evaluate_rule_set(rules: &[Rule], item: &PricedItem) -> Result<bool, RuleError> {
    AllOf(rules).is_satisfied_by(item)
}
