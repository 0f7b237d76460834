//! Travel graph representation and builder.
//!
//! # Data layout
//!
//! The graph is undirected.  Each connection is stored once (indexed by
//! `EdgeId`) and referenced twice from a **Compressed Sparse Row (CSR)**
//! adjacency array, once per endpoint.  Given a `NodeId n`, its incident
//! connections occupy the slice:
//!
//! ```text
//! adjacency[ adj_start[n] .. adj_start[n+1] ]
//! ```
//!
//! Within a slice, entries are sorted by the neighbor's label (byte order),
//! so neighbor enumeration is deterministic regardless of load order.
//!
//! Topology is fixed after `build()`.  The per-connection `blocked` flags are
//! the only mutable state; they are excluded from neighbor queries but never
//! removed.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` to the nearest located `NodeId`, for
//! click-to-select in map views.  Locations without coordinates are not
//! indexed.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use vg_core::{EdgeId, LocationKind, NodeId, Point, ResearchParams};

use crate::{GraphError, GraphResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct LocationEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A node of the travel graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// Unique external identifier.
    pub label:    String,
    /// Map position; both coordinates or neither.
    pub position: Option<Point>,
    pub kind:     LocationKind,
    pub research: ResearchParams,
}

impl Location {
    /// A `Normal` location with no position and default research parameters.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label:    label.into(),
            position: None,
            kind:     LocationKind::Normal,
            research: ResearchParams::default(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    pub fn with_kind(mut self, kind: LocationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_research(mut self, research: ResearchParams) -> Self {
        self.research = research;
        self
    }
}

/// A non-blocked connection seen from one of its endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OpenEdge {
    pub edge:     EdgeId,
    pub neighbor: NodeId,
    pub distance: f64,
}

// ── TravelGraph ───────────────────────────────────────────────────────────────

/// Undirected weighted graph with per-connection blocked flags.
///
/// Do not construct directly; use [`TravelGraphBuilder`] or the loader.
///
/// Route computations borrow the graph immutably, while blocking and
/// unblocking need `&mut self`; the borrow checker therefore serialises edits
/// against in-flight computations.
#[derive(Debug)]
pub struct TravelGraph {
    locations: Vec<Location>,
    index:     FxHashMap<String, NodeId>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Length = `location_count + 1`.
    adj_start: Vec<u32>,
    /// `(neighbor, connection)` pairs, grouped by source node.
    adjacency: Vec<(NodeId, EdgeId)>,

    // ── Connection data (indexed by EdgeId) ───────────────────────────────
    edge_ends:       Vec<(NodeId, NodeId)>,
    edge_distance:   Vec<f64>,
    edge_blocked:    Vec<bool>,
    /// `true` where no distance was supplied and no coordinates were available.
    edge_unresolved: Vec<bool>,

    spatial_idx: RTree<LocationEntry>,
}

impl TravelGraph {
    /// Construct an empty graph with no locations or connections.
    pub fn empty() -> Self {
        TravelGraphBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.edge_ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.locations.len()
    }

    // ── Location attributes ───────────────────────────────────────────────

    /// Resolve an external identifier.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.locations.get(node.index()).map(|l| l.label.as_str())
    }

    pub fn location(&self, node: NodeId) -> Option<&Location> {
        self.locations.get(node.index())
    }

    pub fn coordinates(&self, node: NodeId) -> Option<Point> {
        self.location(node).and_then(|l| l.position)
    }

    /// Category of `node`; `Normal` for unknown nodes.
    pub fn kind(&self, node: NodeId) -> LocationKind {
        self.location(node).map(|l| l.kind).unwrap_or_default()
    }

    /// Research parameters of `node`; defaults for unknown nodes.
    pub fn research(&self, node: NodeId) -> ResearchParams {
        self.location(node).map(|l| l.research).unwrap_or_default()
    }

    /// Labels for a sequence of node ids (unknown ids are skipped).
    pub fn labels(&self, nodes: &[NodeId]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|&n| self.label(n))
            .map(str::to_owned)
            .collect()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// All incident `(neighbor, connection)` pairs of `node`, blocked or not.
    fn incident(&self, node: NodeId) -> &[(NodeId, EdgeId)] {
        if !self.contains(node) {
            return &[];
        }
        let start = self.adj_start[node.index()] as usize;
        let end   = self.adj_start[node.index() + 1] as usize;
        &self.adjacency[start..end]
    }

    /// Non-blocked connections of `node`, in ascending neighbor-label order.
    /// Yields nothing if `node` is not in the graph.
    pub fn open_edges(&self, node: NodeId) -> impl Iterator<Item = OpenEdge> + '_ {
        self.incident(node)
            .iter()
            .filter(|(_, e)| !self.edge_blocked[e.index()])
            .map(|&(neighbor, edge)| OpenEdge {
                edge,
                neighbor,
                distance: self.edge_distance[edge.index()],
            })
    }

    /// `(neighbor, distance)` for every non-blocked connection of `node`.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.open_edges(node).map(|o| (o.neighbor, o.distance))
    }

    /// Number of incident connections, including blocked ones.
    pub fn degree(&self, node: NodeId) -> usize {
        self.incident(node).len()
    }

    /// The connection joining `u` and `v`, if any.
    pub fn connection(&self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        self.incident(u)
            .iter()
            .find(|(n, _)| *n == v)
            .map(|&(_, e)| e)
    }

    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edge_ends.get(edge.index()).copied()
    }

    pub fn edge_distance(&self, edge: EdgeId) -> Option<f64> {
        self.edge_distance.get(edge.index()).copied()
    }

    pub fn edge_is_blocked(&self, edge: EdgeId) -> Option<bool> {
        self.edge_blocked.get(edge.index()).copied()
    }

    /// Connections whose distance defaulted to 0.0 because neither an explicit
    /// distance nor both endpoint coordinates were available.
    pub fn unresolved_distances(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_unresolved
            .iter()
            .enumerate()
            .filter(|(_, unresolved)| **unresolved)
            .map(|(i, _)| EdgeId(i as u32))
    }

    // ── Blocking ──────────────────────────────────────────────────────────

    /// Overwrite the blocked flag of the `u`–`v` connection.
    ///
    /// Returns `false` (and does nothing) if the connection does not exist.
    pub fn set_blocked(&mut self, u: NodeId, v: NodeId, value: bool) -> bool {
        match self.connection(u, v) {
            Some(e) => {
                self.edge_blocked[e.index()] = value;
                true
            }
            None => false,
        }
    }

    /// Flip the blocked flag of the `u`–`v` connection and return the new
    /// value, or `None` if the connection does not exist.
    pub fn toggle_blocked(&mut self, u: NodeId, v: NodeId) -> Option<bool> {
        let e = self.connection(u, v)?;
        let flag = &mut self.edge_blocked[e.index()];
        *flag = !*flag;
        Some(*flag)
    }

    pub fn is_blocked(&self, u: NodeId, v: NodeId) -> Option<bool> {
        self.connection(u, v).map(|e| self.edge_blocked[e.index()])
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The located node closest to `pos`, or `None` if no location has
    /// coordinates.
    pub fn nearest_location(&self, pos: Point) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }
}

// ── TravelGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`TravelGraph`] incrementally, then call [`build`](Self::build).
///
/// Locations must be added before the connections that reference them.
///
/// # Example
///
/// ```
/// use vg_graph::{Location, TravelGraphBuilder};
///
/// let mut b = TravelGraphBuilder::new();
/// b.add_location(Location::new("A").at(0.0, 0.0)).unwrap();
/// b.add_location(Location::new("B").at(3.0, 4.0)).unwrap();
/// b.add_connection("A", "B", None, false).unwrap(); // derived: 5.0
/// let g = b.build();
/// assert_eq!(g.location_count(), 2);
/// assert_eq!(g.connection_count(), 1);
/// ```
pub struct TravelGraphBuilder {
    locations: Vec<Location>,
    index:     FxHashMap<String, NodeId>,
    raw_edges: Vec<RawEdge>,
    pairs:     FxHashSet<(NodeId, NodeId)>,
}

struct RawEdge {
    a:          NodeId,
    b:          NodeId,
    distance:   f64,
    blocked:    bool,
    unresolved: bool,
}

impl TravelGraphBuilder {
    pub fn new() -> Self {
        Self {
            locations: Vec::new(),
            index:     FxHashMap::default(),
            raw_edges: Vec::new(),
            pairs:     FxHashSet::default(),
        }
    }

    /// Add a location and return its `NodeId` (sequential from 0).
    pub fn add_location(&mut self, location: Location) -> GraphResult<NodeId> {
        if self.index.contains_key(&location.label) {
            return Err(GraphError::DuplicateLocation(location.label));
        }
        if location.position.is_some_and(|p| !p.is_finite()) {
            return Err(GraphError::InvalidLocation {
                label:  location.label,
                reason: "coordinates must be finite",
            });
        }
        if !location.research.is_valid() {
            return Err(GraphError::InvalidLocation {
                label:  location.label,
                reason: "research coefficients must be finite and time cost non-negative",
            });
        }
        let id = NodeId::try_from(self.locations.len()).map_err(|_| GraphError::InvalidLocation {
            label:  location.label.clone(),
            reason: "too many locations",
        })?;
        self.index.insert(location.label.clone(), id);
        self.locations.push(location);
        Ok(id)
    }

    /// Add an undirected connection between two existing locations.
    ///
    /// When `distance` is `None` it is derived from the endpoints'
    /// coordinates, or defaults to 0.0 if either endpoint has none (the
    /// connection is then reported by [`TravelGraph::unresolved_distances`]).
    pub fn add_connection(
        &mut self,
        u:        &str,
        v:        &str,
        distance: Option<f64>,
        blocked:  bool,
    ) -> GraphResult<EdgeId> {
        let a = self.lookup(u)?;
        let b = self.lookup(v)?;
        if a == b {
            return Err(GraphError::SelfLoop(u.to_owned()));
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if self.pairs.contains(&key) {
            return Err(GraphError::DuplicateConnection { u: u.to_owned(), v: v.to_owned() });
        }

        let (distance, unresolved) = match distance {
            Some(d) => (d, false),
            None => match (self.locations[a.index()].position, self.locations[b.index()].position) {
                (Some(pa), Some(pb)) => (pa.distance(pb), false),
                _ => {
                    warn!(u, v, "connection has no distance and no coordinates; defaulting to 0.0");
                    (0.0, true)
                }
            },
        };
        if !distance.is_finite() || distance < 0.0 {
            return Err(GraphError::InvalidDistance { u: u.to_owned(), v: v.to_owned(), distance });
        }

        let id = EdgeId::try_from(self.raw_edges.len())
            .map_err(|_| GraphError::TooManyConnections { u: u.to_owned(), v: v.to_owned() })?;
        self.pairs.insert(key);
        self.raw_edges.push(RawEdge { a, b, distance, blocked, unresolved });
        Ok(id)
    }

    /// Convenience: an open connection with an explicit distance.
    pub fn connect(&mut self, u: &str, v: &str, distance: f64) -> GraphResult<EdgeId> {
        self.add_connection(u, v, Some(distance), false)
    }

    pub fn location_count(&self) -> usize { self.locations.len() }
    pub fn connection_count(&self) -> usize { self.raw_edges.len() }

    fn lookup(&self, label: &str) -> GraphResult<NodeId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLocation(label.to_owned()))
    }

    /// Consume the builder and produce a [`TravelGraph`].
    ///
    /// Time complexity: O(E log E) for the adjacency sort + O(N log N) for
    /// the R-tree bulk load.
    pub fn build(self) -> TravelGraph {
        let node_count = self.locations.len();
        let locations  = self.locations;

        // Ids were range-checked on insertion, so the `as u32` casts below are exact.
        // Each connection appears once per endpoint.
        let mut half: Vec<(NodeId, NodeId, EdgeId)> = Vec::with_capacity(self.raw_edges.len() * 2);
        for (i, e) in self.raw_edges.iter().enumerate() {
            let id = EdgeId(i as u32);
            half.push((e.a, e.b, id));
            half.push((e.b, e.a, id));
        }
        half.sort_by(|x, y| {
            x.0.cmp(&y.0)
                .then_with(|| locations[x.1.index()].label.cmp(&locations[y.1.index()].label))
        });

        let mut adj_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &half {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            adj_start[i] += adj_start[i - 1];
        }
        let adjacency: Vec<(NodeId, EdgeId)> = half.iter().map(|&(_, to, e)| (to, e)).collect();

        let edge_ends       = self.raw_edges.iter().map(|e| (e.a, e.b)).collect();
        let edge_distance   = self.raw_edges.iter().map(|e| e.distance).collect();
        let edge_blocked    = self.raw_edges.iter().map(|e| e.blocked).collect();
        let edge_unresolved = self.raw_edges.iter().map(|e| e.unresolved).collect();

        let entries: Vec<LocationEntry> = locations
            .iter()
            .enumerate()
            .filter_map(|(i, l)| {
                l.position.map(|p| LocationEntry { point: [p.x, p.y], id: NodeId(i as u32) })
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        TravelGraph {
            locations,
            index: self.index,
            adj_start,
            adjacency,
            edge_ends,
            edge_distance,
            edge_blocked,
            edge_unresolved,
            spatial_idx,
        }
    }
}

impl Default for TravelGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
