//! ## Concave Hull
//!
//! This module implements the concaveman concave hull algorithm. Starting
//! from the convex hull, edges are flexed inward toward nearby interior
//! points, one edge at a time, as long as the flex respects the concavity
//! measure and keeps the polygon simple. The current hull is kept as a
//! circular doubly-linked list of vertices backed by an arena, interior
//! points and hull edges are indexed with two R-trees, and candidate points
//! are found with a best-first search ordered by distance to the edge being
//! flexed.
//!
//! # Examples
//!
//! ```
//! use concaveman::{concaveman, Options, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(1.0, 2.0),
//!     Point::new(1.0, 1.0),
//! ];
//! let hull = concaveman(&points, Options::default());
//! // the ring is closed: the first vertex is repeated at the end
//! assert_eq!(hull.first(), hull.last());
//! ```

use crate::convex::{cross, fast_convex_hull};
use crate::geometry::{sq_seg_box_dist, sq_seg_dist, Point, Rect};
use crate::rtree::{Children, RTree, RTreeNode, Spatial};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fan-out of the point and edge indexes.
const NODE_CAPACITY: usize = 16;

/// Tuning options for [`concaveman`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    /// Relative measure of concavity: higher values produce simpler hulls,
    /// closer to the convex hull. Defaults to 2; values below 0 are clamped
    /// to 0.
    pub concavity: f64,
    /// Edges shorter than this are never flexed further. Defaults to 0.
    pub length_threshold: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            concavity: 2.0,
            length_threshold: 0.0,
        }
    }
}

/// A vertex of the current hull, linked into a circular list through arena
/// indices. `rect` caches the bounding box of the edge from this vertex to
/// the next one, and is only valid while the edge sits in the edge index.
#[derive(Debug)]
struct HullNode {
    p: Point,
    prev: usize,
    next: usize,
    rect: Rect,
}

/// A hull edge as stored in the edge index: the arena index of its start
/// vertex plus the box it was inserted under. The index keeps removal
/// identity-based even when two edges span equal boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    node: usize,
    rect: Rect,
}

impl Spatial for Edge {
    fn bbox(&self) -> Rect {
        self.rect
    }
}

/// An entry of the best-first search queue: either an indexed point or a
/// subtree of the point index still to be expanded.
enum QueueEntry<'a> {
    Point(Point),
    Subtree(&'a RTreeNode<Point>),
}

struct Candidate<'a> {
    dist: f64,
    entry: QueueEntry<'a>,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl Eq for Candidate<'_> {}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so the BinaryHeap pops the smallest distance first
        OrderedFloat(other.dist).cmp(&OrderedFloat(self.dist))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the concave hull of a point set.
///
/// Returns the hull as a closed ring: the starting vertex is repeated as the
/// last element. Every returned vertex is one of the input points. The
/// result is only defined for at least three distinct, non-collinear points
/// with finite coordinates; degenerate inputs produce a degenerate ring but
/// never panic.
///
/// # Arguments
///
/// * `points` - The input point set.
/// * `options` - Concavity and edge-length tuning, see [`Options`].
pub fn concaveman(points: &[Point], options: Options) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    // a relative measure of concavity; higher value means simpler hull
    let concavity = options.concavity.max(0.0);
    // when a segment goes below this length threshold, it won't be drilled
    // down further
    let length_threshold = options.length_threshold;

    // duplicate coordinates would defeat identity-based removal from the
    // point index, so only the first occurrence of each point is kept
    let points = dedup_points(points);

    info!("Computing concave hull of {} points", points.len());

    // start with a convex hull of the points
    let hull = fast_convex_hull(&points);

    // index the points with an R-tree
    let mut tree = index_tree::<Point>();
    tree.load(points.clone());

    // turn the convex hull into a linked list and populate the initial edge
    // queue with the nodes
    let mut nodes: Vec<HullNode> = Vec::with_capacity(points.len());
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(hull.len());
    let mut last: Option<usize> = None;
    for &p in &hull {
        tree.remove(&p);
        let index = insert_node(&mut nodes, p, last);
        queue.push_back(index);
        last = Some(index);
    }
    let Some(last) = last else {
        return Vec::new();
    };

    // index the hull edges with a second R-tree, for intersection checks
    let mut edge_tree = index_tree::<Edge>();
    for index in 0..nodes.len() {
        update_rect(&mut nodes, index);
        edge_tree.insert(Edge {
            node: index,
            rect: nodes[index].rect,
        });
    }

    let sq_concavity = concavity * concavity;
    let sq_len_threshold = length_threshold * length_threshold;

    // process edges one by one
    while let Some(index) = queue.pop_front() {
        let a = nodes[index].p;
        let b = nodes[nodes[index].next].p;

        // skip the edge if it's already short enough
        let sq_len = a.distance_sq(&b);
        if sq_len < sq_len_threshold {
            continue;
        }

        let max_sq_len = sq_len / sq_concavity;

        // find the best connection point for the current edge to flex inward to
        let prev = nodes[nodes[index].prev].p;
        let next_next = nodes[nodes[nodes[index].next].next].p;
        let candidate =
            find_candidate(&tree, prev, a, b, next_next, max_sq_len, &nodes, &edge_tree);

        // if we found a connection and it satisfies our concavity measure,
        // connect the edge endpoints through this point and add two new
        // edges to the queue
        if let Some(p) = candidate {
            if p.distance_sq(&a).min(p.distance_sq(&b)) <= max_sq_len {
                debug!("Flexing edge {:?} -> {:?} through {:?}", a, b, p);
                queue.push_back(index);
                let inserted = insert_node(&mut nodes, p, Some(index));
                queue.push_back(inserted);

                // update the point and edge indexes
                tree.remove(&p);
                edge_tree.remove(&Edge {
                    node: index,
                    rect: nodes[index].rect,
                });
                update_rect(&mut nodes, index);
                update_rect(&mut nodes, inserted);
                edge_tree.insert(Edge {
                    node: index,
                    rect: nodes[index].rect,
                });
                edge_tree.insert(Edge {
                    node: inserted,
                    rect: nodes[inserted].rect,
                });
            }
        }
    }

    // convert the resulting hull linked list to a closed polygon ring
    let mut concave = Vec::new();
    let mut index = last;
    loop {
        concave.push(nodes[index].p);
        index = nodes[index].next;
        if index == last {
            break;
        }
    }
    concave.push(nodes[index].p);

    info!("Concave hull has {} vertices", concave.len() - 1);
    concave
}

fn index_tree<T: Spatial>() -> RTree<T> {
    match RTree::new(NODE_CAPACITY) {
        Ok(tree) => tree,
        Err(_) => unreachable!("NODE_CAPACITY is non-zero"),
    }
}

fn dedup_points(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .iter()
        .copied()
        .filter(|p| seen.insert((p.x.to_bits(), p.y.to_bits())))
        .collect()
}

/// Appends a new vertex to the arena, linked right after `prev` (or forming
/// a singleton cycle when `prev` is `None`), and returns its index.
fn insert_node(nodes: &mut Vec<HullNode>, p: Point, prev: Option<usize>) -> usize {
    let index = nodes.len();
    match prev {
        None => nodes.push(HullNode {
            p,
            prev: index,
            next: index,
            rect: Rect::empty(),
        }),
        Some(prev) => {
            let next = nodes[prev].next;
            nodes.push(HullNode {
                p,
                prev,
                next,
                rect: Rect::empty(),
            });
            nodes[next].prev = index;
            nodes[prev].next = index;
        }
    }
    index
}

/// Recomputes the cached bounding box of the edge starting at `index`.
fn update_rect(nodes: &mut [HullNode], index: usize) {
    let p1 = nodes[index].p;
    let p2 = nodes[nodes[index].next].p;
    nodes[index].rect = Rect::of_segment(p1, p2);
}

/// Searches the point index for the best point to flex the edge (b, c)
/// inward to.
///
/// The search walks the index best-first by squared distance to (b, c),
/// using exact point-to-segment distances at the leaves and segment-to-box
/// lower bounds for subtrees; entries farther than `max_dist` are pruned. A
/// point is accepted when it is strictly closer to (b, c) than to either
/// neighbor edge (a, b) and (c, d), and connecting it would not cross any
/// other hull edge.
#[allow(clippy::too_many_arguments)]
fn find_candidate(
    tree: &RTree<Point>,
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    max_dist: f64,
    nodes: &[HullNode],
    edge_tree: &RTree<Edge>,
) -> Option<Point> {
    let mut queue: BinaryHeap<Candidate> = BinaryHeap::new();
    let mut node = Some(tree.root());

    while let Some(current) = node {
        // enqueue the children of the current node by distance to (b, c)
        match &current.children {
            Children::Items(items) => {
                for &p in items {
                    let dist = sq_seg_dist(p, b, c);
                    if dist <= max_dist {
                        queue.push(Candidate {
                            dist,
                            entry: QueueEntry::Point(p),
                        });
                    }
                }
            }
            Children::Nodes(kids) => {
                for child in kids {
                    let dist = sq_seg_box_dist(b, c, &child.rect);
                    if dist <= max_dist {
                        queue.push(Candidate {
                            dist,
                            entry: QueueEntry::Subtree(child),
                        });
                    }
                }
            }
        }

        // pop points off the queue while they are nearer than any subtree
        while matches!(
            queue.peek(),
            Some(Candidate {
                entry: QueueEntry::Point(_),
                ..
            })
        ) {
            let Some(Candidate {
                dist,
                entry: QueueEntry::Point(p),
            }) = queue.pop()
            else {
                unreachable!()
            };

            // skip points that are as close to the adjacent edges (a, b) and
            // (c, d), and points that would introduce self-intersections
            let d0 = sq_seg_dist(p, a, b);
            let d1 = sq_seg_dist(p, c, d);
            if dist < d0
                && dist < d1
                && no_intersections(b, p, nodes, edge_tree)
                && no_intersections(c, p, nodes, edge_tree)
            {
                return Some(p);
            }
        }

        // descend into the nearest remaining subtree
        node = match queue.pop() {
            Some(Candidate {
                entry: QueueEntry::Subtree(child),
                ..
            }) => Some(child),
            _ => None,
        };
    }

    None
}

/// Returns true if the segment (a, b) does not properly cross any indexed
/// hull edge. Edges sharing an endpoint with the segment are not crossings.
fn no_intersections(a: Point, b: Point, nodes: &[HullNode], edge_tree: &RTree<Edge>) -> bool {
    let query = Rect::of_segment(a, b);
    edge_tree.search(&query, |edge| {
        let p = nodes[edge.node].p;
        let q = nodes[nodes[edge.node].next].p;
        !intersects(p, q, a, b)
    })
}

/// Proper crossing test for the segments (p1, q1) and (p2, q2): each
/// segment's endpoints must lie strictly on opposite sides of the other.
/// Collinear overlap is deliberately not reported.
fn intersects(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    (p1 != q2)
        && (q1 != p2)
        && ((cross(p1, q1, p2) > 0.0) != (cross(p1, q1, q2) > 0.0))
        && ((cross(p2, q2, p1) > 0.0) != (cross(p2, q2, q1) > 0.0))
}
