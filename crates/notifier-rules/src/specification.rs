//! Core Specification trait and combinators.

use crate::context::PricedItem;
use crate::error::RuleError;
use crate::rule::Rule;

/// A composable predicate over an evaluation context.
///
/// Evaluation is fallible because persisted rules may be malformed; the
/// combinators propagate the first error they hit and otherwise keep the
/// usual short-circuit behaviour of `&&` and `||`.
pub trait Specification<Ctx> {
    /// Check if the specification is satisfied by the given context.
    fn is_satisfied_by(&self, ctx: &Ctx) -> Result<bool, RuleError>;

    /// Combine this specification with another using AND logic.
    fn and<S: Specification<Ctx>>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Combine this specification with another using OR logic.
    fn or<S: Specification<Ctx>>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Negate this specification.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl Specification<PricedItem> for Rule {
    fn is_satisfied_by(&self, item: &PricedItem) -> Result<bool, RuleError> {
        self.evaluate(item)
    }
}

/// AND combinator for specifications.
#[derive(Debug, Clone)]
pub struct And<A, B>(pub A, pub B);

impl<Ctx, A, B> Specification<Ctx> for And<A, B>
where
    A: Specification<Ctx>,
    B: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> Result<bool, RuleError> {
        Ok(self.0.is_satisfied_by(ctx)? && self.1.is_satisfied_by(ctx)?)
    }
}

/// OR combinator for specifications.
#[derive(Debug, Clone)]
pub struct Or<A, B>(pub A, pub B);

impl<Ctx, A, B> Specification<Ctx> for Or<A, B>
where
    A: Specification<Ctx>,
    B: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> Result<bool, RuleError> {
        Ok(self.0.is_satisfied_by(ctx)? || self.1.is_satisfied_by(ctx)?)
    }
}

/// NOT combinator for specifications.
#[derive(Debug, Clone)]
pub struct Not<A>(pub A);

impl<Ctx, A> Specification<Ctx> for Not<A>
where
    A: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> Result<bool, RuleError> {
        Ok(!self.0.is_satisfied_by(ctx)?)
    }
}

/// All specifications in the slice must be satisfied. Empty is `true`.
#[derive(Debug, Clone, Copy)]
pub struct AllOf<'a, S>(pub &'a [S]);

impl<Ctx, S> Specification<Ctx> for AllOf<'_, S>
where
    S: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> Result<bool, RuleError> {
        for spec in self.0 {
            if !spec.is_satisfied_by(ctx)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Any specification in the slice must be satisfied. Empty is `false`.
#[derive(Debug, Clone, Copy)]
pub struct AnyOf<'a, S>(pub &'a [S]);

impl<Ctx, S> Specification<Ctx> for AnyOf<'_, S>
where
    S: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> Result<bool, RuleError> {
        for spec in self.0 {
            if spec.is_satisfied_by(ctx)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
