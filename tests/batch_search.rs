use std::collections::BTreeSet;

use word_grid::core::grid::Grid;
use word_grid::dictionary::Dictionary;
use word_grid::search::batch::{find_all, find_all_par, try_find_all};
use word_grid::search::resources::SearchLimits;
use word_grid::search::{find_word, Strategy};

fn board() -> Grid {
    Grid::from_lines(["CATS", "OXRE", "DEAT", "XXMS"])
}

fn dictionary() -> Dictionary {
    ["CAT", "CATS", "COD", "DOG", "EAT", "SEAT", "TEAM", "RAT", "ZEBRA", "ABA"]
        .into_iter()
        .collect()
}

#[test]
fn found_words_are_a_subset_and_each_is_findable() {
    let grid = board();
    let dict = dictionary();
    for s in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        let found = find_all(&grid, dict.iter(), s);
        assert!(found.iter().all(|w| dict.contains(w)));
        assert!(found.iter().all(|w| find_word(&grid, w, s)));
        for w in dict.iter().filter(|w| !found.contains(*w)) {
            assert!(!find_word(&grid, w, s), "{w} findable but missing from batch");
        }
    }
}

#[test]
fn depth_first_batch_on_a_known_board() {
    let found = find_all(&board(), dictionary().iter(), Strategy::DepthFirst);
    let expected: BTreeSet<String> = ["CAT", "CATS", "COD", "EAT", "RAT", "SEAT", "TEAM"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn words_are_returned_as_given() {
    let grid = board();
    let found = find_all(&grid, ["cat", "Dog", "Seat"], Strategy::DepthFirst);
    let expected: BTreeSet<String> = ["cat", "Seat"].into_iter().map(String::from).collect();
    assert_eq!(found, expected);
}

#[test]
fn empty_inputs_yield_empty_results() {
    let grid = board();
    assert!(find_all(&grid, Vec::<String>::new(), Strategy::BreadthFirst).is_empty());
    assert!(find_all(&grid, [""], Strategy::DepthFirst).is_empty());
}

#[test]
fn parallel_batch_matches_sequential_batch() {
    let grid = board();
    let dict = dictionary();
    for s in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        let seq = find_all(&grid, dict.iter(), s);
        let par = find_all_par(&grid, dict.words(), s);
        assert_eq!(seq, par);
    }
}

#[test]
fn limits_apply_to_each_word() {
    let grid = board();
    let limits = SearchLimits {
        max_frontier_nodes: 64,
        max_steps: 64,
    };
    let found = try_find_all(&grid, dictionary().iter(), Strategy::BreadthFirst, limits).unwrap();
    assert_eq!(
        found,
        find_all(&grid, dictionary().iter(), Strategy::BreadthFirst)
    );
}
