//! The slot for semantic actions that can be attached to rules.
//!
//! Matching never runs an action.  When and whether actions run is up to
//! whatever layer consumes the rules, which can get at them via
//! [`Action::action`](struct.Action.html#method.action) and
//! [`Action::run_action`](struct.Action.html#method.run_action).

use core::{fmt, ops::Shr};

use crate::{
    Cursor, Matchable, Composable,
    compose::{ActionRules, Composed, compose},
    tuple::Concat,
};


/// A side-effect callback that takes a mutable "context" of the `Ctx` type,
/// which is supplied by the caller and which this crate knows nothing about.
pub trait SemanticAction<Ctx: ?Sized> {
    /// Do the side effect.
    fn run(&self, ctx: &mut Ctx);
}

impl<Ctx, F> SemanticAction<Ctx> for F
    where Ctx: ?Sized,
          F: Fn(&mut Ctx),
{
    #[inline]
    fn run(&self, ctx: &mut Ctx) {
        self(ctx)
    }
}


/// A rule with an attached action.  Matching is exactly that of the inner
/// rule, and the result is the inner rule's result.
///
/// Made by [`Composable::with_action`](trait.Composable.html#method.with_action).
///
/// When composed with `>>`, this decomposes as its inner rule does (see
/// [`ActionRules`](compose/trait.ActionRules.html)).  A single rule stays one
/// element that still carries the action.  An inner [`Seq`](struct.Seq.html)
/// is spliced flat, so e.g. `(a >> b).with_action(f) >> c` has the result type
/// `(A, B, C)`, and that `Seq`'s action is not in the composed `Seq`.
#[derive(Copy, Clone)]
pub struct Action<R, F> {
    rule: R,
    action: F,
}

impl<R, F> Action<R, F> {
    /// Attach `action` to `rule`.
    #[inline]
    pub const fn new(rule: R, action: F) -> Self {
        Self { rule, action }
    }

    /// The inner rule.
    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The attached action.
    #[inline]
    pub fn action(&self) -> &F {
        &self.action
    }

    /// Replace the attached action.
    #[inline]
    pub fn set_action<G>(self, action: G) -> Action<R, G> {
        Action { rule: self.rule, action }
    }

    /// Detach the action and return the inner rule.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rule
    }

    /// Run the attached action with the given context.
    #[inline]
    pub fn run_action<Ctx>(&self, ctx: &mut Ctx)
        where Ctx: ?Sized,
              F: SemanticAction<Ctx>,
    {
        self.action.run(ctx);
    }
}

/// Manually implemented because closures are not `Debug`.
impl<R, F> fmt::Debug for Action<R, F>
    where R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
         .field("rule", &self.rule)
         .finish_non_exhaustive()
    }
}

impl<U, R, F> Matchable<U> for Action<R, F>
    where R: Matchable<U>,
{
    type Attr = R::Attr;

    #[inline]
    fn try_match(&self, cursor: &mut Cursor<'_, U>) -> Option<Self::Attr> {
        self.rule.try_match(cursor)
    }
}

impl<R, F> Composable for Action<R, F>
    where R: ActionRules<F>,
{
    type Rules = R::Rules;

    #[inline]
    fn into_rules(self) -> Self::Rules {
        self.rule.action_rules(self.action)
    }
}

impl<R, F, Rhs> Shr<Rhs> for Action<R, F>
    where R: ActionRules<F>,
          Rhs: Composable,
          R::Rules: Concat<Rhs::Rules>,
{
    type Output = Composed<Self, Rhs>;

    #[inline]
    fn shr(self, rhs: Rhs) -> Self::Output {
        compose(self, rhs)
    }
}
