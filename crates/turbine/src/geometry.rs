//! Point-in-polygon test with inclusive boundary.

use serde::Serialize;

/// Relative tolerance for deciding that a point lies on an edge.
const BOUNDARY_TOL: f64 = 1e-9;

/// A (flow, head) coordinate on the selection chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vertex {
    /// Flow, m³/s.
    pub flow: f64,
    /// Head, m.
    pub head: f64,
}

impl Vertex {
    /// Creates a vertex.
    pub const fn new(flow: f64, head: f64) -> Self {
        Self { flow, head }
    }
}

/// Returns `true` if `p` is inside `ring` or on its boundary.
///
/// `ring` may be closed (first vertex repeated at the end) or open; the
/// closing edge is implied either way. Fewer than three distinct vertices
/// enclose nothing, but a point on such a degenerate ring still counts as
/// on the boundary.
pub fn contains_inclusive(ring: &[Vertex], p: Vertex) -> bool {
    if ring.is_empty() {
        return false;
    }
    if on_boundary(ring, p) {
        return true;
    }

    // even-odd ray cast towards +flow
    let mut inside = false;
    for (a, b) in edges(ring) {
        if (a.head > p.head) != (b.head > p.head) {
            let cross_flow = a.flow + (p.head - a.head) * (b.flow - a.flow) / (b.head - a.head);
            if p.flow < cross_flow {
                inside = !inside;
            }
        }
    }
    inside
}

/// Returns `true` if `p` lies on any edge of `ring`, vertices included.
pub fn on_boundary(ring: &[Vertex], p: Vertex) -> bool {
    edges(ring).any(|(a, b)| on_segment(a, b, p))
}

fn edges(ring: &[Vertex]) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
    let n = ring.len();
    (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
}

fn on_segment(a: Vertex, b: Vertex, p: Vertex) -> bool {
    let dx = b.flow - a.flow;
    let dy = b.head - a.head;
    let len_sq = dx * dx + dy * dy;
    let scale = a
        .flow
        .abs()
        .max(a.head.abs())
        .max(b.flow.abs())
        .max(b.head.abs())
        .max(1.0);
    let tol = BOUNDARY_TOL * scale;

    let (cx, cy) = if len_sq == 0.0 {
        (a.flow, a.head)
    } else {
        let t = (((p.flow - a.flow) * dx + (p.head - a.head) * dy) / len_sq).clamp(0.0, 1.0);
        (a.flow + t * dx, a.head + t * dy)
    };
    let dist = ((p.flow - cx).powi(2) + (p.head - cy).powi(2)).sqrt();
    dist <= tol
}
