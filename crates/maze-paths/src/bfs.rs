use std::collections::VecDeque;

use maze_core::Point;

use crate::error::PathError;
use crate::predecessors::{Predecessors, build_path};
use crate::search::open_endpoints;
use crate::traits::Pather;

/// Breadth-first search from `from` to `to`.
///
/// Every step counts the same, so the result has the fewest possible hops.
/// The first visit of a cell is final. `visit` is called with each cell as
/// it is taken off the queue and expanded.
///
/// Returns an empty path if `to` is unreachable or either endpoint is an
/// obstacle.
pub fn bfs_path<P: Pather>(
    pather: &P,
    from: Point,
    to: Point,
    mut visit: impl FnMut(Point),
) -> Result<Vec<Point>, PathError> {
    let extent = pather.extent();
    let Some((start, goal)) = open_endpoints(pather, from, to)? else {
        return Ok(Vec::new());
    };

    let mut came_from = Predecessors::new(extent);
    let mut queue: VecDeque<usize> = VecDeque::new();
    came_from.set_root_index(start);
    queue.push_back(start);

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    while let Some(ci) = queue.pop_front() {
        if ci == goal {
            break;
        }
        let cp = extent.point(ci);
        visit(cp);
        expanded += 1;
        log::trace!("bfs: expanding {cp}");

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = extent.index(np) else {
                continue;
            };
            if came_from.reached(ni) {
                continue;
            }
            came_from.set_index(ni, ci);
            queue.push_back(ni);
        }
    }

    let path = build_path(&came_from, from, to)?;
    log::debug!("bfs {from} -> {to}: expanded {expanded} cells, path of {} cells", path.len());
    Ok(path)
}
