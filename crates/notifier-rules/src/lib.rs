//! Rule model for price-signal notification templates.
//!
//! A template carries a conjunctive set of rules. Each rule pairs an
//! [`Operator`] with an operand, and the whole set is evaluated against a
//! [`PricedItem`] using the Specification Pattern.
//!
//! # Example
//!
//! ```
//! use notifier_rules::prelude::*;
//!
//! let rules = vec![
//!     validate_rule(Operator::ItemIs, "gold").unwrap(),
//!     validate_rule(Operator::PriceLt, "100").unwrap(),
//! ];
//!
//! let item = PricedItem::new("gold", 150.0);
//! assert_eq!(evaluate_rule_set(&rules, &item), Ok(false));
//! ```
//!
//! Everything in this crate is pure and synchronous. Rules are immutable
//! values, so a rule set can be shared across threads and evaluated without
//! coordination.

pub mod catalog;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod operators;
pub mod rule;
pub mod specification;

pub use catalog::{label_of, label_of_identifier, operand_kind_of, MetalType, OperandKind, Operator};
pub use context::PricedItem;
pub use error::RuleError;
pub use evaluator::evaluate_rule_set;
pub use rule::{validate_rule, Rule};

/// Prelude module - import everything you need with `use notifier_rules::prelude::*`
pub mod prelude {
    pub use crate::catalog::{
        label_of, label_of_identifier, operand_kind_of, MetalType, OperandKind, Operator,
    };
    pub use crate::context::PricedItem;
    pub use crate::error::RuleError;
    pub use crate::evaluator::evaluate_rule_set;
    pub use crate::operators::Spec;
    pub use crate::rule::{validate_rule, Rule};
    pub use crate::specification::{AllOf, And, AnyOf, Not, Or, Specification};
}
