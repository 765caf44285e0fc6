//! Builders that wire configuration into the search.

use colorforge_config::{SolverConfig, TerminationConfig};

use crate::search::BacktrackingSearch;
use crate::termination::{
    BacktrackCountTermination, OrTermination, StepCountTermination, TimeTermination,
};

/// Termination assembled from a [`TerminationConfig`]; absent limits never
/// fire.
pub type ConfiguredTermination = OrTermination<(
    Option<TimeTermination>,
    Option<StepCountTermination>,
    Option<BacktrackCountTermination>,
)>;

/// Builder for termination conditions from config.
pub struct TerminationBuilder;

impl TerminationBuilder {
    /// Creates a termination from optional config.
    ///
    /// # Example
    ///
    /// ```
    /// use colorforge_config::TerminationConfig;
    /// use colorforge_solver::TerminationBuilder;
    ///
    /// let config = TerminationConfig {
    ///     step_count_limit: Some(10_000),
    ///     ..Default::default()
    /// };
    /// let termination = TerminationBuilder::build(Some(&config));
    /// assert!(termination.0.1.is_some());
    /// assert!(termination.0.0.is_none());
    /// ```
    pub fn build(config: Option<&TerminationConfig>) -> ConfiguredTermination {
        let Some(config) = config else {
            return OrTermination((None, None, None));
        };
        OrTermination((
            config.time_limit().map(TimeTermination::new),
            config.step_count_limit.map(StepCountTermination::new),
            config.backtrack_count_limit.map(BacktrackCountTermination::new),
        ))
    }
}

/// Builder for a fully configured search engine.
pub struct SearchBuilder;

impl SearchBuilder {
    /// Applies the `[search]` and `[termination]` sections of `config`.
    pub fn build(config: &SolverConfig) -> BacktrackingSearch<ConfiguredTermination> {
        BacktrackingSearch::from_config(&config.search)
            .with_termination(TerminationBuilder::build(config.termination.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SearchStats;
    use crate::termination::Termination;
    use colorforge_config::HeuristicScope;

    #[test]
    fn test_unbounded_config() {
        let termination = TerminationBuilder::build(None);
        let mut stats = SearchStats::default();
        stats.selections = u64::MAX;
        stats.backtracks = u64::MAX;
        assert!(!termination.is_terminated(&stats));
    }

    #[test]
    fn test_limits_from_config() {
        let config = TerminationConfig {
            millis_spent_limit: Some(1500),
            backtrack_count_limit: Some(3),
            ..Default::default()
        };
        let termination = TerminationBuilder::build(Some(&config));
        assert!(termination.0 .0.is_some());
        assert!(termination.0 .1.is_none());

        let mut stats = SearchStats::default();
        stats.start();
        stats.backtracks = 2;
        assert!(!termination.is_terminated(&stats));
        stats.backtracks = 3;
        assert!(termination.is_terminated(&stats));
    }

    #[test]
    fn test_search_from_solver_config() {
        let config = SolverConfig::from_toml_str(
            r#"
            [search]
            forward_checking = true
            heuristics = true
            heuristic_scope = "root_only"

            [termination]
            step_count_limit = 2
            "#,
        )
        .unwrap();
        let search = SearchBuilder::build(&config);
        assert!(search.flags().forward_checking);
        assert!(!search.flags().propagation);
        assert_eq!(search.heuristic_scope(), HeuristicScope::RootOnly);
        assert!(search.termination().0 .1.is_some());
    }
}
