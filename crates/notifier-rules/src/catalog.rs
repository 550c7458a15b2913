//! Operator catalog.
//!
//! The fixed table of supported operators: machine identifiers (as they appear
//! in template JSON), human labels, and the kind of operand each one takes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// A comparison kind a rule can apply to a priced item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "ITEM_IS")]
    ItemIs,
    #[serde(rename = "ITEM_IS_NOT")]
    ItemIsNot,
    #[serde(rename = "PRICE_IS_EQUAL_TO")]
    PriceEq,
    #[serde(rename = "PRICE_IS_GREATER_THAN")]
    PriceGt,
    #[serde(rename = "PRICE_IS_GREATER_THAN_OR_EQUAL_TO")]
    PriceGte,
    #[serde(rename = "PRICE_IS_LESS_THAN")]
    PriceLt,
    #[serde(rename = "PRICE_IS_LESS_THAN_OR_EQUAL_TO")]
    PriceLte,
}

/// What an operator's operand must look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandKind {
    /// One of the [`MetalType`] names
    ItemKind,
    /// A non-negative decimal number
    Numeric,
}

impl Operator {
    /// All operators, in catalog order
    pub const ALL: [Operator; 7] = [
        Operator::ItemIs,
        Operator::ItemIsNot,
        Operator::PriceEq,
        Operator::PriceGt,
        Operator::PriceGte,
        Operator::PriceLt,
        Operator::PriceLte,
    ];

    /// Machine identifier used on the wire
    pub fn identifier(self) -> &'static str {
        match self {
            Self::ItemIs => "ITEM_IS",
            Self::ItemIsNot => "ITEM_IS_NOT",
            Self::PriceEq => "PRICE_IS_EQUAL_TO",
            Self::PriceGt => "PRICE_IS_GREATER_THAN",
            Self::PriceGte => "PRICE_IS_GREATER_THAN_OR_EQUAL_TO",
            Self::PriceLt => "PRICE_IS_LESS_THAN",
            Self::PriceLte => "PRICE_IS_LESS_THAN_OR_EQUAL_TO",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::ItemIs => "Item is",
            Self::ItemIsNot => "Item is not",
            Self::PriceEq => "Price is equal to",
            Self::PriceGt => "Price is greater than",
            Self::PriceGte => "Price is greater than or equal to",
            Self::PriceLt => "Price is less than",
            Self::PriceLte => "Price is less than or equal to",
        }
    }

    /// Operand kind this operator compares against
    pub fn operand_kind(self) -> OperandKind {
        match self {
            Self::ItemIs | Self::ItemIsNot => OperandKind::ItemKind,
            Self::PriceEq | Self::PriceGt | Self::PriceGte | Self::PriceLt | Self::PriceLte => {
                OperandKind::Numeric
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Operator {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.identifier() == s)
            .ok_or_else(|| RuleError::UnknownOperator(s.to_string()))
    }
}

/// Human-readable label of an operator.
pub fn label_of(operator: Operator) -> &'static str {
    operator.label()
}

/// Label for an identifier that has not been parsed yet.
///
/// Unknown identifiers are echoed back unchanged so that a newer server's
/// operators still render as something readable.
pub fn label_of_identifier(raw: &str) -> String {
    raw.parse::<Operator>()
        .map(|op| op.label().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Operand kind of an operator. Single place where item and price operators
/// are told apart.
pub fn operand_kind_of(operator: Operator) -> OperandKind {
    operator.operand_kind()
}

/// Metal types a price signal can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetalType {
    Gold,
    Silver,
    Platinum,
}

impl MetalType {
    pub const ALL: [MetalType; 3] = [MetalType::Gold, MetalType::Silver, MetalType::Platinum];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Platinum => "platinum",
        }
    }
}

impl fmt::Display for MetalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetalType {
    type Err = RuleError;

    /// Exact, case-sensitive match on the metal name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metal| metal.as_str() == s)
            .ok_or_else(RuleError::invalid_item_kind)
    }
}
