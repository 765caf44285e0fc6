//! Tests for the backtracking search.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::*;
use crate::termination::{BacktrackCountTermination, ExternalTermination, StepCountTermination};
use colorforge_test::graphs::{
    complete, cycle, isolated, palette, petersen, star, triangle, triangle_with_isolated, wheel,
};
use colorforge_test::{assert_color_count, assert_proper_coloring};

fn every_mode() -> Vec<BacktrackingSearch> {
    let mut modes = Vec::new();
    for flags in SearchFlags::all() {
        modes.push(BacktrackingSearch::new(flags));
        modes.push(BacktrackingSearch::new(flags).with_heuristic_scope(HeuristicScope::RootOnly));
    }
    modes
}

#[test]
fn test_flag_combinations() {
    let all = SearchFlags::all();
    assert_eq!(all[0], SearchFlags::VANILLA);
    assert_eq!(all[7], SearchFlags::new(true, true, true));
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_flag_labels() {
    assert_eq!(SearchFlags::VANILLA.label(), "vanilla");
    assert_eq!(
        SearchFlags::VANILLA.with_forward_checking(true).to_string(),
        "fc"
    );
    assert_eq!(SearchFlags::new(true, true, true).label(), "fc+prop+heur");
}

#[test]
fn test_flags_from_config() {
    let config = SearchConfig {
        forward_checking: true,
        heuristics: true,
        ..Default::default()
    };
    assert_eq!(SearchFlags::from(&config), SearchFlags::new(true, false, true));
}

#[test]
fn test_triangle_three_colors() {
    let graph = triangle();
    for mode in every_mode() {
        let result = mode.solve(&graph, &palette(3));
        let coloring = result.coloring().expect("triangle is 3-colorable");
        assert_proper_coloring(&graph, coloring);
        assert_color_count(coloring, 3);
    }
    assert_eq!(search(&graph, &palette(3), SearchFlags::VANILLA).backtracks, 0);
}

#[test]
fn test_triangle_two_colors_fails() {
    let graph = triangle();
    for mode in every_mode() {
        let result = mode.solve(&graph, &palette(2));
        assert_eq!(result.outcome, SearchOutcome::Unsatisfiable, "{}", mode.flags());
    }
}

#[test]
fn test_even_cycle_two_colors() {
    let graph = cycle(4);
    for mode in every_mode() {
        let result = mode.solve(&graph, &palette(2));
        assert_proper_coloring(&graph, result.coloring().expect("even cycle is bipartite"));
    }
    let result = search(&graph, &palette(2), SearchFlags::VANILLA);
    let coloring = result.coloring().unwrap();
    assert_eq!(coloring.get(&0), Some(&1));
    assert_eq!(coloring.get(&1), Some(&2));
    assert_eq!(coloring.get(&2), Some(&1));
    assert_eq!(coloring.get(&3), Some(&2));
}

#[test]
fn test_odd_cycle_needs_three() {
    let graph = cycle(5);
    for mode in every_mode() {
        assert!(!mode.solve(&graph, &palette(2)).is_solved());
        assert!(mode.solve(&graph, &palette(3)).is_solved());
    }
}

#[test]
fn test_star_two_colors() {
    let graph = star(4);
    for mode in every_mode() {
        let result = mode.solve(&graph, &palette(2));
        assert_proper_coloring(&graph, result.coloring().expect("star is bipartite"));
    }
}

#[test]
fn test_isolated_nodes_single_color() {
    let graph = isolated(5);
    for mode in every_mode() {
        let result = mode.solve(&graph, &palette(1));
        assert!(result.is_solved());
        assert_eq!(result.backtracks, 0);
    }
}

#[test]
fn test_triangle_with_isolated_two_colors_fails() {
    let graph = triangle_with_isolated();
    for mode in every_mode() {
        assert_eq!(
            mode.solve(&graph, &palette(2)).outcome,
            SearchOutcome::Unsatisfiable
        );
    }
}

#[test]
fn test_harder_instances() {
    let cases = [
        (wheel(5), 3, false),
        (wheel(5), 4, true),
        (wheel(6), 3, true),
        (petersen(), 2, false),
        (petersen(), 3, true),
        (complete(5), 4, false),
        (complete(5), 5, true),
    ];
    for (graph, colors, colorable) in &cases {
        for mode in every_mode() {
            let result = mode.solve(graph, &palette(*colors));
            assert_eq!(result.is_solved(), *colorable, "{colors} colors, {}", mode.flags());
            if let Some(coloring) = result.coloring() {
                assert_proper_coloring(graph, coloring);
            }
        }
    }
}

#[test]
fn test_vanilla_backtrack_counts() {
    // A tries 1 then 2; each fails once for B's only legal color and once
    // for itself.
    assert_eq!(search(&triangle(), &palette(2), SearchFlags::VANILLA).backtracks, 4);
    assert_eq!(search(&complete(4), &palette(3), SearchFlags::VANILLA).backtracks, 15);
}

#[test]
fn test_pruning_never_adds_backtracks() {
    let vanilla = SearchFlags::VANILLA;
    let fc = vanilla.with_forward_checking(true);
    let fc_prop = fc.with_propagation(true);
    for (graph, colors) in [(complete(3), 2), (complete(4), 3), (cycle(4), 2)] {
        let count = |flags| search(&graph, &palette(colors), flags).backtracks;
        assert!(count(fc) <= count(vanilla));
        assert!(count(fc_prop) <= count(fc));
    }
    assert_eq!(search(&triangle(), &palette(2), fc_prop).backtracks, 2);
    assert_eq!(search(&complete(4), &palette(3), fc_prop).backtracks, 9);
}

#[test]
fn test_deterministic() {
    let graph = petersen();
    for mode in every_mode() {
        let first = mode.solve(&graph, &palette(3));
        let second = mode.solve(&graph, &palette(3));
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.backtracks, second.backtracks);
    }
}

#[test]
fn test_backtracks_match_stats() {
    let result = search(&complete(4), &palette(3), SearchFlags::new(true, false, false));
    assert_eq!(result.backtracks, result.stats.backtracks);
    assert!(result.stats.wipeouts > 0);
    assert!(result.stats.selections > 0);
}

#[test]
fn test_into_parts() {
    let (outcome, backtracks) = search(&triangle(), &palette(3), SearchFlags::VANILLA).into_parts();
    assert!(outcome.is_solved());
    assert_eq!(backtracks, 0);
    assert_eq!(outcome.label(), "solved");
}

#[test]
fn test_empty_inputs() {
    let empty = Graph::<u32>::empty();
    let result = search(&empty, &palette(0), SearchFlags::VANILLA);
    assert!(result.coloring().is_some_and(|c| c.is_empty()));

    let result = search(&triangle(), &palette(0), SearchFlags::new(true, true, true));
    assert_eq!(result.outcome, SearchOutcome::Unsatisfiable);
    assert_eq!(result.backtracks, 0);
}

#[test]
fn test_colors_come_from_palette_order() {
    let graph = isolated(3);
    let palette = Palette::new(["y", "g", "r"]).unwrap();
    let result = search(&graph, &palette, SearchFlags::VANILLA);
    let coloring = result.into_parts().0.into_coloring().unwrap();
    assert!(coloring.iter().all(|(_, color)| *color == "y"));
}

#[test]
fn test_heuristics_start_with_hub() {
    // MRV ties broken by degree pick the hub, which then takes the first color.
    let graph = star(4);
    let result = search(&graph, &palette(2), SearchFlags::new(false, false, true));
    assert_eq!(result.coloring().unwrap().get(&0), Some(&1));
}

#[test]
fn test_root_only_matches_every_depth_without_heuristics() {
    let graph = petersen();
    for flags in SearchFlags::all().into_iter().filter(|f| !f.heuristics) {
        let every = BacktrackingSearch::new(flags).solve(&graph, &palette(3));
        let root = BacktrackingSearch::new(flags)
            .with_heuristic_scope(HeuristicScope::RootOnly)
            .solve(&graph, &palette(3));
        assert_eq!(every.outcome, root.outcome);
        assert_eq!(every.backtracks, root.backtracks);
    }
}

#[test]
fn test_heuristics_apply_below_the_root() {
    // Both scopes color nodes 0 to 5 alike. Below that, MRV takes node 7
    // before node 6 only when it applies at every depth.
    let graph = petersen();
    let flags = SearchFlags::new(true, false, true);
    let colors = |scope| {
        let result = BacktrackingSearch::new(flags)
            .with_heuristic_scope(scope)
            .solve(&graph, &palette(3));
        assert_eq!(result.backtracks, 0);
        let coloring = result.coloring().expect("petersen is 3-colorable");
        assert_proper_coloring(&graph, coloring);
        coloring.iter().map(|(_, &color)| color).collect::<Vec<u32>>()
    };

    assert_eq!(
        colors(HeuristicScope::EveryDepth),
        vec![1, 2, 1, 2, 3, 2, 3, 3, 1, 1]
    );
    assert_eq!(
        colors(HeuristicScope::RootOnly),
        vec![1, 2, 1, 2, 3, 2, 1, 3, 3, 2]
    );
}

#[test]
fn test_solved_coloring_covers_every_node() {
    for graph in [petersen(), wheel(5), isolated(3), cycle(7)] {
        for mode in every_mode() {
            let result = mode.solve(&graph, &palette(4));
            let coloring = result.coloring().expect("four colors suffice");
            assert_eq!(coloring.len(), graph.node_count());
            assert_proper_coloring(&graph, coloring);
        }
    }
}

#[test]
fn test_step_limit_terminates() {
    let search = BacktrackingSearch::new(SearchFlags::VANILLA)
        .with_termination(StepCountTermination::new(5));
    let result = search.solve(&complete(7), &palette(6));
    assert_eq!(result.outcome, SearchOutcome::Terminated);
    assert_eq!(result.stats.selections, 5);
}

#[test]
fn test_backtrack_limit_terminates() {
    let search = BacktrackingSearch::new(SearchFlags::VANILLA)
        .with_termination(BacktrackCountTermination::new(1));
    let result = search.solve(&triangle(), &palette(2));
    assert_eq!(result.outcome, SearchOutcome::Terminated);
    // The limit is only consulted on selection, so the root's own failure
    // is counted before A's second color is tried.
    assert_eq!(result.backtracks, 2);
}

#[test]
fn test_external_flag_terminates() {
    let flag = Arc::new(AtomicBool::new(true));
    let search = BacktrackingSearch::new(SearchFlags::VANILLA)
        .with_termination(ExternalTermination::new(flag));
    let result = search.solve(&triangle(), &palette(3));
    assert_eq!(result.outcome, SearchOutcome::Terminated);
    assert_eq!(result.stats.selections, 0);
}

#[test]
fn test_from_config() {
    let config = SearchConfig {
        forward_checking: true,
        propagation: true,
        heuristics: true,
        heuristic_scope: HeuristicScope::RootOnly,
    };
    let search = BacktrackingSearch::from_config(&config);
    assert_eq!(search.flags(), SearchFlags::new(true, true, true));
    assert_eq!(search.heuristic_scope(), HeuristicScope::RootOnly);
}
