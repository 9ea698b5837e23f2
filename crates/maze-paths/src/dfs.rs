//! Depth-first search with backtracking, on an explicit frame stack.

use maze_core::Point;

use crate::error::PathError;
use crate::search::open_endpoints;
use crate::traits::Pather;

/// One cell of the path in progress, with the neighbors still to try.
struct Frame {
    idx: usize,
    neighbors: Vec<Point>,
    next: usize,
}

/// Depth-first search from `from` to `to`.
///
/// Follows one branch until it reaches `to` or runs out of unvisited
/// neighbors, then backtracks by dropping the exhausted cell from the path
/// in progress. The stack of frames *is* that path, so the result is it as
/// soon as its last cell is `to`. Cells are never revisited once entered,
/// even from another branch. `visit` is called with each cell as it is
/// entered and its neighbors listed.
///
/// The result is usually far from the shortest path. Returns an empty path
/// if `to` is unreachable or either endpoint is an obstacle.
pub fn dfs_path<P: Pather>(
    pather: &P,
    from: Point,
    to: Point,
    mut visit: impl FnMut(Point),
) -> Result<Vec<Point>, PathError> {
    let extent = pather.extent();
    let Some((start, goal)) = open_endpoints(pather, from, to)? else {
        return Ok(Vec::new());
    };
    if start == goal {
        return Ok(vec![from]);
    }

    let mut visited = vec![false; extent.len()];
    let mut expanded = 0usize;

    let mut enter = |idx: usize, p: Point| {
        visit(p);
        expanded += 1;
        log::trace!("dfs: entering {p}");
        let mut neighbors = Vec::with_capacity(4);
        pather.neighbors(p, &mut neighbors);
        Frame {
            idx,
            neighbors,
            next: 0,
        }
    };

    visited[start] = true;
    let mut stack = vec![enter(start, from)];

    let found = 'search: loop {
        let Some(top) = stack.last_mut() else {
            break 'search false;
        };

        let mut step = None;
        while top.next < top.neighbors.len() {
            let np = top.neighbors[top.next];
            top.next += 1;
            match extent.index(np) {
                Some(ni) if !visited[ni] => {
                    step = Some((ni, np));
                    break;
                }
                _ => {}
            }
        }

        match step {
            Some((ni, _)) if ni == goal => break 'search true,
            Some((ni, np)) => {
                visited[ni] = true;
                stack.push(enter(ni, np));
            }
            // Dead end: backtrack.
            None => {
                stack.pop();
            }
        }
    };

    drop(enter);
    log::debug!("dfs {from} -> {to}: expanded {expanded} cells, found: {found}");

    if !found {
        return Ok(Vec::new());
    }
    let mut path: Vec<Point> = stack.iter().map(|f| extent.point(f.idx)).collect();
    path.push(to);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::parse_graph;
    use maze_core::{GraphConfig, GridGraph};
    use std::collections::HashSet;

    fn assert_valid(g: &GridGraph, path: &[Point], from: Point, to: Point) {
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {}", w[0], w[1]);
            assert!(g.is_passable(w[1]));
        }
        let unique: HashSet<Point> = path.iter().copied().collect();
        assert_eq!(unique.len(), path.len());
    }

    #[test]
    fn follows_first_branch() {
        let g = GridGraph::open(3, 3, GraphConfig::default()).unwrap();
        let (s, d) = (Point::new(0, 0), Point::new(2, 2));
        let path = dfs_path(&g, s, d, |_| {}).unwrap();
        // Neighbors come +x, -x, +z, -z, so the search snakes through the
        // whole grid instead of taking the 5-cell route.
        assert_eq!(
            path,
            vec![
                s,
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(1, 1),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                d
            ]
        );
        assert_valid(&g, &path, s, d);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let (g, s, d) = parse_graph(
            "\
S..#
.#.#
.#.#
.###
...D",
        );
        let mut seen = Vec::new();
        let path = dfs_path(&g, s, d, |p| seen.push(p)).unwrap();
        assert_valid(&g, &path, s, d);
        assert_eq!(
            path,
            vec![
                s,
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(0, 3),
                Point::new(0, 4),
                Point::new(1, 4),
                Point::new(2, 4),
                d
            ]
        );
        // The pocket on the right was explored first, then abandoned.
        assert_eq!(seen[..5], [s, Point::new(1, 0), Point::new(2, 0), Point::new(2, 1), Point::new(2, 2)]);
    }

    #[test]
    fn unreachable_is_empty_not_source() {
        let (g, s, d) = parse_graph(
            "\
S.#
..#
##D",
        );
        let path = dfs_path(&g, s, d, |_| {}).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn same_endpoints() {
        let g = GridGraph::open(3, 3, GraphConfig::default()).unwrap();
        let p = Point::new(2, 1);
        assert_eq!(dfs_path(&g, p, p, |_| {}).unwrap(), vec![p]);
    }

    #[test]
    fn long_corridor_does_not_recurse() {
        let g = GridGraph::open(200_000, 1, GraphConfig::default()).unwrap();
        let path = dfs_path(&g, Point::new(0, 0), Point::new(199_999, 0), |_| {}).unwrap();
        assert_eq!(path.len(), 200_000);
    }
}
