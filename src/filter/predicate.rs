//! Boolean tests over vertex values and their combinators.

/// A pure, single-argument test over a value.
///
/// Every `Fn(&V) -> bool` closure is a predicate.
pub trait Predicate<V: ?Sized> {
    /// True if `value` satisfies the predicate.
    fn accept(&self, value: &V) -> bool;
}

impl<V: ?Sized, F> Predicate<V> for F
where
    F: Fn(&V) -> bool,
{
    fn accept(&self, value: &V) -> bool {
        self(value)
    }
}

/// Conjunction. The right operand is skipped when the left one rejects.
#[derive(Debug, Clone, Copy)]
pub struct And<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> And<P, Q> {
    pub fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

impl<V: ?Sized, P: Predicate<V>, Q: Predicate<V>> Predicate<V> for And<P, Q> {
    fn accept(&self, value: &V) -> bool {
        self.left.accept(value) && self.right.accept(value)
    }
}

/// Disjunction. The right operand is skipped when the left one accepts.
#[derive(Debug, Clone, Copy)]
pub struct Or<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> Or<P, Q> {
    pub fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

impl<V: ?Sized, P: Predicate<V>, Q: Predicate<V>> Predicate<V> for Or<P, Q> {
    fn accept(&self, value: &V) -> bool {
        self.left.accept(value) || self.right.accept(value)
    }
}

/// Negation.
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    inner: P,
}

impl<P> Not<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<V: ?Sized, P: Predicate<V>> Predicate<V> for Not<P> {
    fn accept(&self, value: &V) -> bool {
        !self.inner.accept(value)
    }
}

/// Builder-style combinators for any predicate.
pub trait PredicateExt<V: ?Sized>: Predicate<V> + Sized {
    /// `self && other`.
    fn and<Q: Predicate<V>>(self, other: Q) -> And<Self, Q> {
        And::new(self, other)
    }

    /// `self || other`.
    fn or<Q: Predicate<V>>(self, other: Q) -> Or<Self, Q> {
        Or::new(self, other)
    }

    /// `!self`.
    fn negate(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<V: ?Sized, P: Predicate<V>> PredicateExt<V> for P {}
