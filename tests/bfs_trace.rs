use word_grid::core::cell::Cell;
use word_grid::core::grid::Grid;
use word_grid::error::TraceError;
use word_grid::search::bfs::{expand, RevisitPolicy};
use word_grid::search::resources::ResourceTracker;
use word_grid::search::trace::{build_trace, TraceNodeId};
use word_grid::search::{find_word, Strategy};

fn id(start: (i32, i32), cell: (i32, i32)) -> TraceNodeId {
    TraceNodeId {
        start: Cell::new(start.0, start.1),
        cell: Cell::new(cell.0, cell.1),
    }
}

#[test]
fn cat_trace_is_a_single_chain() {
    let grid = Grid::from_lines(["CATS", "OXXX", "XXXX", "XXXX"]);
    assert!(find_word(&grid, "CAT", Strategy::BreadthFirst));

    let trace = build_trace(&grid, "CAT").unwrap();
    assert_eq!(trace.word, "CAT");
    assert_eq!(trace.len(), 3);

    let edges: Vec<_> = trace.edges().collect();
    assert_eq!(
        edges,
        vec![
            (id((0, 0), (0, 0)), id((0, 0), (0, 1))),
            (id((0, 0), (0, 1)), id((0, 0), (0, 2))),
        ]
    );
    assert_eq!(trace.starts.len(), 1);
    assert!(trace.starts[0].reached_last_letter);

    let root = trace.roots().next().unwrap();
    assert_eq!(root.label(), "(0,0)\nC");
    assert_eq!(root.id.to_string(), "0-0-0,0");
}

#[test]
fn every_start_cell_gets_its_own_subtree() {
    let grid = Grid::from_lines(["ABAX", "XXXX", "XXXX", "XXXX"]);
    let trace = build_trace(&grid, "AB").unwrap();

    let roots: Vec<Cell> = trace.roots().map(|n| n.cell()).collect();
    assert_eq!(roots, vec![Cell::new(0, 0), Cell::new(0, 2)]);

    // The shared 'B' appears once under each start, with distinct ids.
    assert_eq!(trace.len(), 4);
    assert_eq!(
        trace.parent_of(id((0, 0), (0, 1))),
        Some(id((0, 0), (0, 0)))
    );
    assert_eq!(
        trace.parent_of(id((0, 2), (0, 1))),
        Some(id((0, 2), (0, 2)))
    );
}

#[test]
fn a_cell_is_recorded_once_per_start_under_its_first_discoverer() {
    // Both 'B's neighbour the 'C' at (1,1); only the first one to reach it owns it.
    let grid = Grid::from_lines(["ABXX", "BCXX", "XXXX", "XXXX"]);
    let trace = build_trace(&grid, "ABC").unwrap();

    assert_eq!(trace.len(), 4);
    assert_eq!(
        trace.parent_of(id((0, 0), (1, 1))),
        Some(id((0, 0), (0, 1)))
    );
    assert_eq!(trace.children_of(id((0, 0), (1, 0))).count(), 0);

    // The search expansion has no such dedup and reaches the 'C' twice.
    let letters: Vec<char> = "ABC".chars().collect();
    let mut tracker = ResourceTracker::unbounded();
    let raw = expand(
        &grid,
        &letters,
        Cell::new(0, 0),
        RevisitPolicy::Allow,
        &mut tracker,
    )
    .unwrap();
    let c_nodes = raw.nodes.iter().filter(|n| n.cell == Cell::new(1, 1)).count();
    assert_eq!(c_nodes, 2);
}

#[test]
fn trace_never_steps_back_onto_its_start() {
    // BFS search accepts "ABA" by re-entering (0,0); the trace does not.
    let grid = Grid::from_lines(["ABXX", "XXXX", "XXXX", "XXXX"]);
    assert!(find_word(&grid, "ABA", Strategy::BreadthFirst));

    let trace = build_trace(&grid, "ABA").unwrap();
    assert_eq!(trace.len(), 2);
    assert!(!trace.starts[0].reached_last_letter);
}

#[test]
fn nodes_never_go_past_the_last_letter() {
    let grid = Grid::from_lines(["AAAA", "AAAA", "AAAA", "AAAA"]);
    let trace = build_trace(&grid, "AAA").unwrap();
    assert_eq!(trace.starts.len(), 16);
    assert!(trace.nodes().iter().all(|n| n.depth <= 2));
    assert!(trace.starts.iter().all(|s| s.reached_last_letter));
    // Per-start dedup: at most one node per board cell under each start.
    for start in &trace.starts {
        assert!(start.nodes <= 16);
    }
}

#[test]
fn labels_follow_the_word_letters() {
    let grid = Grid::from_lines(["CATS", "OXXX", "XXXX", "XXXX"]);
    let trace = build_trace(&grid, "cats").unwrap();
    let letters: String = trace.nodes().iter().map(|n| n.letter).collect();
    assert_eq!(letters, "CATS");
    let depths: Vec<usize> = trace.nodes().iter().map(|n| n.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 3]);
}

#[test]
fn missing_first_letter_is_reported() {
    let grid = Grid::from_lines(["CATS", "OXXX", "XXXX", "XXXX"]);
    assert_eq!(
        build_trace(&grid, "DOG").unwrap_err(),
        TraceError::FirstLetterMissing { letter: 'D' }
    );
    assert_eq!(build_trace(&grid, "").unwrap_err(), TraceError::EmptyWord);
}

#[test]
fn trace_serialises_nodes_and_starts() {
    let grid = Grid::from_lines(["CATS", "OXXX", "XXXX", "XXXX"]);
    let trace = build_trace(&grid, "CA").unwrap();
    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(json["word"], "CA");
    assert_eq!(json["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(json["nodes"][1]["parent"]["cell"]["col"], 0);
    assert!(json.get("index").is_none());
}
