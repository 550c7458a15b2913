//! Operator overloading for specification combinators.
//!
//! This module provides implementations of `BitAnd` (&), `BitOr` (|), and `Not` (!)
//! for specifications, allowing ad-hoc rule expressions like:
//!
//! ```
//! use notifier_rules::prelude::*;
//!
//! let gold = validate_rule(Operator::ItemIs, "gold").unwrap();
//! let cheap = validate_rule(Operator::PriceLt, "100").unwrap();
//! let rule = Spec(gold) & !Spec(cheap);
//!
//! assert_eq!(rule.is_satisfied_by(&PricedItem::new("gold", 150.0)), Ok(true));
//! ```

use std::ops::{BitAnd, BitOr, Not as StdNot};

use crate::error::RuleError;
use crate::specification::{And, Not, Or, Specification};

/// Wrapper struct to enable operator overloading on specifications.
#[derive(Debug, Clone)]
pub struct Spec<S>(pub S);

impl<A, B> BitAnd<Spec<B>> for Spec<A> {
    type Output = Spec<And<A, B>>;

    fn bitand(self, rhs: Spec<B>) -> Self::Output {
        Spec(And(self.0, rhs.0))
    }
}

impl<A, B> BitOr<Spec<B>> for Spec<A> {
    type Output = Spec<Or<A, B>>;

    fn bitor(self, rhs: Spec<B>) -> Self::Output {
        Spec(Or(self.0, rhs.0))
    }
}

impl<A> StdNot for Spec<A> {
    type Output = Spec<Not<A>>;

    fn not(self) -> Self::Output {
        Spec(Not(self.0))
    }
}

impl<Ctx, S> Specification<Ctx> for Spec<S>
where
    S: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> Result<bool, RuleError> {
        self.0.is_satisfied_by(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Operator;
    use crate::context::PricedItem;
    use crate::rule::{validate_rule, Rule};

    fn rule(op: Operator, operand: &str) -> Spec<Rule> {
        Spec(validate_rule(op, operand).unwrap())
    }

    #[test]
    fn test_and_operator() {
        let expr = rule(Operator::ItemIs, "gold") & rule(Operator::PriceGte, "10");
        assert_eq!(expr.is_satisfied_by(&PricedItem::new("gold", 10.0)), Ok(true));
        assert_eq!(expr.is_satisfied_by(&PricedItem::new("gold", 9.5)), Ok(false));
    }

    #[test]
    fn test_or_operator() {
        let expr = rule(Operator::ItemIs, "gold") | rule(Operator::ItemIs, "silver");
        assert_eq!(expr.is_satisfied_by(&PricedItem::new("silver", 1.0)), Ok(true));
        assert_eq!(expr.is_satisfied_by(&PricedItem::new("platinum", 1.0)), Ok(false));
    }

    #[test]
    fn test_complex_expression() {
        // (gold & !(price > 500)) | platinum
        let expr = (rule(Operator::ItemIs, "gold") & !rule(Operator::PriceGt, "500"))
            | rule(Operator::ItemIs, "platinum");

        assert_eq!(expr.is_satisfied_by(&PricedItem::new("gold", 400.0)), Ok(true));
        assert_eq!(expr.is_satisfied_by(&PricedItem::new("gold", 600.0)), Ok(false));
        assert_eq!(expr.is_satisfied_by(&PricedItem::new("platinum", 600.0)), Ok(true));
    }
}
