//! Composite termination conditions.
//!
//! Uses macro-generated tuple implementations for zero type erasure.

use super::{Termination, TerminationReason};
use crate::scope::SearchScope;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// The reason reported is that of the first child, in tuple order, that
/// wants to stop.
///
/// # Examples
///
/// ```
/// use raises_solver::termination::{NodeCountTermination, OrTermination, TimeTermination};
///
/// // Terminate after 30 seconds OR 1000 nodes
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(1000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($first_idx:tt: $First:ident $(, $idx:tt: $T:ident)*) => {
        impl<$First $(, $T)*> Termination for OrTermination<($First, $($T,)*)>
        where
            $First: Termination,
            $($T: Termination,)*
        {
            fn check(&self, scope: &SearchScope<'_>) -> Option<TerminationReason> {
                (self.0).$first_idx.check(scope)
                    $(.or_else(|| (self.0).$idx.check(scope)))*
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
