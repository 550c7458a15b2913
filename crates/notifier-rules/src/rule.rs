//! Rules and rule validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{MetalType, OperandKind, Operator};
use crate::context::PricedItem;
use crate::error::RuleError;

/// One operator + operand pair.
///
/// Built through [`validate_rule`], which stores the operand in canonical
/// form. Deserialized rules skip validation, so evaluation re-checks the
/// operand and reports [`RuleError::MalformedRule`] instead of coercing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    operator: Operator,
    operand: String,
}

/// Validate raw user input into a well-formed [`Rule`].
///
/// Item operators take a metal type name. Price operators take a finite,
/// unsigned decimal number; the stored operand is the number's shortest
/// round-trip form, so `"10.00"` becomes `"10"`.
pub fn validate_rule(operator: Operator, raw_operand: &str) -> Result<Rule, RuleError> {
    let operand = match operator.operand_kind() {
        OperandKind::ItemKind => raw_operand.trim().parse::<MetalType>()?.to_string(),
        OperandKind::Numeric => parse_non_negative(raw_operand)
            .ok_or_else(RuleError::invalid_number)?
            .to_string(),
    };

    Ok(Rule { operator, operand })
}

/// Parse a price operand. Signs are rejected outright, including `-0`.
fn parse_non_negative(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with(['+', '-']) {
        return None;
    }

    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

impl Rule {
    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &str {
        &self.operand
    }

    /// Check that the operand still fits the operator.
    pub fn check(&self) -> Result<(), RuleError> {
        match self.operator.operand_kind() {
            OperandKind::ItemKind => self.metal_operand().map(|_| ()),
            OperandKind::Numeric => self.numeric_operand().map(|_| ()),
        }
    }

    /// Evaluate this rule against one item.
    pub fn evaluate(&self, item: &PricedItem) -> Result<bool, RuleError> {
        let matched = match self.operator {
            Operator::ItemIs => item.metal_type == self.metal_operand()?.as_str(),
            Operator::ItemIsNot => item.metal_type != self.metal_operand()?.as_str(),
            Operator::PriceEq => item.price == self.numeric_operand()?,
            Operator::PriceGt => item.price > self.numeric_operand()?,
            Operator::PriceGte => item.price >= self.numeric_operand()?,
            Operator::PriceLt => item.price < self.numeric_operand()?,
            Operator::PriceLte => item.price <= self.numeric_operand()?,
        };

        Ok(matched)
    }

    fn metal_operand(&self) -> Result<MetalType, RuleError> {
        self.operand.trim().parse().map_err(|_| self.malformed())
    }

    fn numeric_operand(&self) -> Result<f64, RuleError> {
        parse_non_negative(&self.operand).ok_or_else(|| self.malformed())
    }

    fn malformed(&self) -> RuleError {
        RuleError::MalformedRule {
            operator: self.operator,
            operand: self.operand.clone(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator.label(), self.operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NOT_AN_ITEM_KIND, NOT_A_NON_NEGATIVE_NUMBER};

    #[test]
    fn test_item_operands() {
        let rule = validate_rule(Operator::ItemIs, "gold").unwrap();
        assert_eq!(rule.operand(), "gold");

        let rule = validate_rule(Operator::ItemIsNot, " platinum ").unwrap();
        assert_eq!(rule.operand(), "platinum");

        assert_eq!(
            validate_rule(Operator::ItemIs, "copper"),
            Err(RuleError::InvalidOperand {
                reason: NOT_AN_ITEM_KIND
            })
        );
        assert!(validate_rule(Operator::ItemIs, "GOLD").is_err());
        assert!(validate_rule(Operator::ItemIs, "").is_err());
    }

    #[test]
    fn test_numeric_operands_are_canonical() {
        assert_eq!(validate_rule(Operator::PriceGte, "10.00").unwrap().operand(), "10");
        assert_eq!(validate_rule(Operator::PriceLt, "0.5").unwrap().operand(), "0.5");
        assert_eq!(validate_rule(Operator::PriceLt, ".5").unwrap().operand(), "0.5");
        assert_eq!(validate_rule(Operator::PriceEq, "0").unwrap().operand(), "0");
        assert_eq!(validate_rule(Operator::PriceGt, "1e3").unwrap().operand(), "1000");
    }

    #[test]
    fn test_numeric_operands_rejected() {
        let invalid = Err(RuleError::InvalidOperand {
            reason: NOT_A_NON_NEGATIVE_NUMBER,
        });
        assert_eq!(validate_rule(Operator::PriceEq, "-5"), invalid);
        assert_eq!(validate_rule(Operator::PriceEq, "+5"), invalid);
        assert_eq!(validate_rule(Operator::PriceEq, "-0"), invalid);
        assert_eq!(validate_rule(Operator::PriceEq, ""), invalid);
        assert_eq!(validate_rule(Operator::PriceEq, "   "), invalid);
        assert_eq!(validate_rule(Operator::PriceEq, "abc"), invalid);
        assert_eq!(validate_rule(Operator::PriceEq, "NaN"), invalid);
        assert_eq!(validate_rule(Operator::PriceEq, "inf"), invalid);
        assert_eq!(validate_rule(Operator::PriceEq, "1e400"), invalid);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let inputs = [
            (Operator::ItemIs, " silver"),
            (Operator::PriceEq, "10.00"),
            (Operator::PriceGt, "0.1"),
            (Operator::PriceLte, "123456789.25"),
            (Operator::PriceGte, "1e21"),
        ];

        for (op, raw) in inputs {
            let first = validate_rule(op, raw).unwrap();
            let second = validate_rule(first.operator(), first.operand()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_deserialized_rule_is_checked() {
        let rule: Rule =
            serde_json::from_str(r#"{"operator":"PRICE_IS_LESS_THAN","operand":"cheap"}"#).unwrap();
        assert_eq!(
            rule.check(),
            Err(RuleError::MalformedRule {
                operator: Operator::PriceLt,
                operand: "cheap".to_string(),
            })
        );

        let rule: Rule =
            serde_json::from_str(r#"{"operator":"PRICE_IS_LESS_THAN","operand":"10.00"}"#).unwrap();
        assert!(rule.check().is_ok());
    }

    #[test]
    fn test_stored_operands_are_trimmed_alike() {
        let item: Rule =
            serde_json::from_str(r#"{"operator":"ITEM_IS","operand":" gold "}"#).unwrap();
        let price: Rule =
            serde_json::from_str(r#"{"operator":"PRICE_IS_EQUAL_TO","operand":" 10.00 "}"#)
                .unwrap();

        assert!(item.check().is_ok());
        assert!(price.check().is_ok());
        assert_eq!(item.evaluate(&PricedItem::new("gold", 10.0)), Ok(true));
        assert_eq!(price.evaluate(&PricedItem::new("gold", 10.0)), Ok(true));
    }

    #[test]
    fn test_display() {
        let rule = validate_rule(Operator::PriceGte, "10.00").unwrap();
        assert_eq!(rule.to_string(), "Price is greater than or equal to 10");
    }
}
