use maze_core::Point;

use crate::error::PathError;
use crate::frontier::PriorityQueue;
use crate::predecessors::{Predecessors, build_path};
use crate::search::open_endpoints;
use crate::traits::AstarPather;

/// How [`best_first_path`] orders its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BestFirstPolicy {
    /// Dijkstra's algorithm: score is the cost so far. Optimal.
    UniformCost,
    /// Score is the heuristic distance to the destination alone. A cell is
    /// never re-examined once discovered, even if a cheaper route to it
    /// turns up later, so paths can be costly.
    Greedy,
}

/// Best-first search from `from` to `to` under `policy`.
///
/// `visit` is called with each cell as it is taken off the frontier and
/// expanded. Returns an empty path if `to` is unreachable or either endpoint
/// is an obstacle.
pub fn best_first_path<P: AstarPather>(
    pather: &P,
    from: Point,
    to: Point,
    policy: BestFirstPolicy,
    mut visit: impl FnMut(Point),
) -> Result<Vec<Point>, PathError> {
    let extent = pather.extent();
    let Some((start, goal)) = open_endpoints(pather, from, to)? else {
        return Ok(Vec::new());
    };

    let mut came_from = Predecessors::new(extent);
    let mut cost = vec![f32::INFINITY; extent.len()];
    let mut closed = vec![false; extent.len()];
    let mut open: PriorityQueue<usize> = PriorityQueue::new();

    came_from.set_root_index(start);
    cost[start] = 0.0;
    open.push(start, 0.0);

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

        let cp = extent.point(ci);
        visit(cp);
        expanded += 1;
        log::trace!("{policy:?}: expanding {cp}");
        let current_cost = cost[ci];

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = extent.index(np) else {
                continue;
            };
            match policy {
                BestFirstPolicy::UniformCost => {
                    let tentative = current_cost + pather.cost(cp, np);
                    if came_from.reached(ni) && cost[ni] <= tentative {
                        continue;
                    }
                    came_from.set_index(ni, ci);
                    cost[ni] = tentative;
                    closed[ni] = false;
                    open.push(ni, tentative);
                }
                BestFirstPolicy::Greedy => {
                    if came_from.reached(ni) {
                        continue;
                    }
                    came_from.set_index(ni, ci);
                    open.push(ni, pather.estimate(np, to));
                }
            }
        }
    }

    let path = build_path(&came_from, from, to)?;
    log::debug!(
        "{policy:?} {from} -> {to}: expanded {expanded} cells, path of {} cells",
        path.len()
    );
    Ok(path)
}
