use maze_core::Point;

use crate::error::PathError;
use crate::frontier::PriorityQueue;
use crate::predecessors::{Predecessors, build_path};
use crate::search::open_endpoints;
use crate::traits::AstarPather;

/// Compute the cheapest path from `from` to `to` using A*.
///
/// Cells are scored by cost so far plus the pather's estimate of the
/// remaining cost. A neighbor is updated, and pushed again, only when a
/// strictly cheaper route to it is found. The result is optimal as long as
/// the estimate is admissible. `visit` is called with each cell as it is
/// taken off the frontier and expanded.
///
/// Returns the full path (including both endpoints), or an empty path if
/// `to` is unreachable or either endpoint is an obstacle.
pub fn astar_path<P: AstarPather>(
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

    let mut came_from = Predecessors::new(extent);
    let mut g = vec![f32::INFINITY; extent.len()];
    let mut closed = vec![false; extent.len()];
    let mut open: PriorityQueue<usize> = PriorityQueue::new();

    came_from.set_root_index(start);
    g[start] = 0.0;
    open.push(start, pather.estimate(from, to));

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    while let Some(ci) = open.pop_min() {
        if ci == goal {
            break;
        }
        // Skip stale entries.
        if closed[ci] {
            continue;
        }
        closed[ci] = true;

        let current_point = extent.point(ci);
        let current_g = g[ci];
        visit(current_point);
        expanded += 1;
        log::trace!("astar: expanding {current_point} (g = {current_g})");

        nbuf.clear();
        pather.neighbors(current_point, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = extent.index(np) else {
                continue;
            };
            let tentative_g = current_g + pather.cost(current_point, np);
            if came_from.reached(ni) && g[ni] <= tentative_g {
                continue;
            }

            came_from.set_index(ni, ci);
            g[ni] = tentative_g;
            closed[ni] = false;
            open.push(ni, tentative_g + pather.estimate(np, to));
        }
    }

    let path = build_path(&came_from, from, to)?;
    log::debug!(
        "astar {from} -> {to}: expanded {expanded} cells, path of {} cells",
        path.len()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_first::{BestFirstPolicy, best_first_path};
    use crate::distance::manhattan;
    use crate::metrics::path_cost;
    use crate::search::parse_graph;
    use maze_core::{GraphConfig, GridGraph};

    #[test]
    fn three_by_three() {
        let g = GridGraph::open(3, 3, GraphConfig::default()).unwrap();
        let (s, d) = (Point::new(0, 0), Point::new(2, 2));
        assert_eq!(manhattan(s, d), 4);
        let path = astar_path(&g, s, d, |_| {}).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], s);
        assert_eq!(path[4], d);
        assert_eq!(path_cost(&g, &path), 4.0);
    }

    #[test]
    fn detours_around_swamp() {
        // Straight across: 4 hops, one into the swamp = 3 + 3 = 6.
        // Around: 6 hops on floor = 6. A heavier swamp makes the detour win.
        let (g, s, d) = parse_graph(
            "\
.....
S.~.D
.....",
        );
        let straight = astar_path(&g, s, d, |_| {}).unwrap();
        assert_eq!(path_cost(&g, &straight), 6.0);

        let terrain = g.cells().iter().map(|c| c.terrain).collect();
        let heavy = GridGraph::new(5, 3, terrain, GraphConfig::default().with_swamp_cost(4.0)).unwrap();
        let path = astar_path(&heavy, s, d, |_| {}).unwrap();
        assert!(!path.contains(&Point::new(2, 1)));
        assert_eq!(path.len(), 7);
        assert_eq!(path_cost(&heavy, &path), 6.0);
    }

    #[test]
    fn expands_fewer_cells_than_uniform_cost() {
        let g = GridGraph::open(20, 20, GraphConfig::default()).unwrap();
        let (s, d) = (Point::new(0, 0), Point::new(19, 0));
        let mut astar_seen = 0;
        let mut ucs_seen = 0;
        let a = astar_path(&g, s, d, |_| astar_seen += 1).unwrap();
        let u = best_first_path(&g, s, d, BestFirstPolicy::UniformCost, |_| ucs_seen += 1).unwrap();
        assert_eq!(path_cost(&g, &a), path_cost(&g, &u));
        assert!(astar_seen < ucs_seen);
    }

    #[test]
    fn walled_off_is_empty() {
        let (g, s, d) = parse_graph(
            "\
S.#..
..#..
..#.D",
        );
        let mut seen = 0;
        assert!(astar_path(&g, s, d, |_| seen += 1).unwrap().is_empty());
        assert_eq!(seen, 6);
    }

    #[test]
    fn obstacle_destination_is_unreachable() {
        let (g, s, _) = parse_graph("S.#\n..D");
        assert!(astar_path(&g, s, Point::new(2, 0), |_| {}).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_endpoint() {
        let g = GridGraph::open(3, 3, GraphConfig::default()).unwrap();
        assert_eq!(
            astar_path(&g, Point::new(0, 3), Point::new(0, 0), |_| {}),
            Err(PathError::OutOfRange(Point::new(0, 3)))
        );
    }
}
