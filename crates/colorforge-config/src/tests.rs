//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        palette = ["y", "g", "r", "b", "m"]

        [search]
        forward_checking = true
        propagation = true
        heuristics = true
        heuristic_scope = "root_only"

        [termination]
        seconds_spent_limit = 30
        step_count_limit = 5000

        [benchmark]
        warmup_count = 1
        run_count = 5
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.palette.as_ref().unwrap().len(), 5);
    assert!(config.search.forward_checking);
    assert!(config.search.propagation);
    assert!(config.search.heuristics);
    assert_eq!(config.search.heuristic_scope, HeuristicScope::RootOnly);

    let termination = config.termination.unwrap();
    assert_eq!(termination.seconds_spent_limit, Some(30));
    assert_eq!(termination.step_count_limit, Some(5000));

    let benchmark = config.benchmark.unwrap();
    assert_eq!(benchmark.warmup_count, 1);
    assert_eq!(benchmark.run_count, 5);
    assert!(benchmark.shuffle_nodes);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 7
        search:
          forward_checking: true
        termination:
          millis_spent_limit: 250
        benchmark:
          run_count: 3
          shuffle_nodes: false
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(7));
    assert!(config.search.forward_checking);
    assert!(!config.search.propagation);
    assert_eq!(config.search.heuristic_scope, HeuristicScope::EveryDepth);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
    assert!(!config.benchmark.unwrap().shuffle_nodes);
}

#[test]
fn test_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.search, SearchConfig::default());
    assert!(config.termination.is_none());
}

#[test]
fn test_empty_palette_rejected() {
    let err = SolverConfig::from_toml_str("palette = []").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_runs_rejected() {
    let err = SolverConfig::from_toml_str("[benchmark]\nrun_count = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_scope_rejected() {
    let err = SolverConfig::from_toml_str("[search]\nheuristic_scope = \"sometimes\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SolverConfig::load("definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_time_limit_combines_units() {
    let termination = TerminationConfig {
        seconds_spent_limit: Some(2),
        millis_spent_limit: Some(500),
        ..Default::default()
    };
    assert_eq!(termination.time_limit(), Some(Duration::from_millis(2500)));
    assert!(!termination.is_unbounded());
    assert!(TerminationConfig::default().is_unbounded());
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_termination_seconds(60)
        .with_palette(["red", "green"])
        .with_search(SearchConfig {
            forward_checking: true,
            ..Default::default()
        });

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert_eq!(
        config.palette,
        Some(vec!["red".to_string(), "green".to_string()])
    );
    assert!(config.search.forward_checking);
}
