//! Composite termination.
//!
//! Uses macro-generated tuple implementations, no boxing.

use super::Termination;
use crate::stats::SearchStats;

/// Terminates when ANY wrapped condition terminates.
///
/// # Examples
///
/// ```
/// use colorforge_solver::termination::{
///     BacktrackCountTermination, OrTermination, TimeTermination,
/// };
///
/// // Terminate after 30 seconds OR 10 000 backtracks
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     BacktrackCountTermination::new(10_000),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, stats: &SearchStats) -> bool {
                $((self.0).$idx.is_terminated(stats))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
