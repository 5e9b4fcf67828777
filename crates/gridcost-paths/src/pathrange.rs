use gridcost_core::{Point, Range};

/// A position with an associated cumulative cost, returned from cost map
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i64,
}

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

/// One entry of a distance table.
#[derive(Clone)]
pub(crate) struct Node {
    /// Best cumulative cost found so far.
    pub(crate) g: i64,
    pub(crate) parent: usize,
    /// Generation in which `g` was written; older entries read as unreached.
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
        }
    }
}

/// Frontier entry: a node index and the cost it was pushed with.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: i64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest entry first;
        // ties go to the lower index so runs are deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in distance tables.
pub const UNREACHABLE: i64 = i64::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Search workspace for a grid rectangle.
///
/// `PathRange` owns the distance tables of both searches so that repeated
/// queries on same-sized grids allocate nothing after the first call. Tables
/// are invalidated lazily by bumping a generation counter. The cost-map table
/// is only allocated by the first [`dijkstra_map`](Self::dijkstra_map) call.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // early-exit search
    pub(crate) search_nodes: Vec<Node>,
    pub(crate) search_generation: u32,
    // full cost map
    pub(crate) dijkstra_nodes: Vec<Node>,
    pub(crate) dijkstra_generation: u32,
    pub(crate) dijkstra_results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            search_nodes: vec![Node::default(); len],
            search_generation: 0,
            dijkstra_nodes: Vec::new(),
            dijkstra_generation: 0,
            dijkstra_results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range.
    ///
    /// If the new size fits within existing capacity, tables are kept and
    /// only the generation counters are bumped. Otherwise the search table is
    /// reallocated and the cost-map table is dropped until it is next needed.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.search_nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.dijkstra_results.clear();

        if new_len <= old_capacity {
            next_generation(&mut self.search_nodes, &mut self.search_generation);
            next_generation(&mut self.dijkstra_nodes, &mut self.dijkstra_generation);
            return;
        }

        self.search_nodes.clear();
        self.search_nodes.resize(new_len, Node::default());
        self.search_generation = 0;

        self.dijkstra_nodes = Vec::new();
        self.dijkstra_generation = 0;
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

/// Advance a table's generation, clearing it outright when the counter wraps
/// so that entries from generation 0 are never mistaken for current ones.
pub(crate) fn next_generation(nodes: &mut [Node], generation: &mut u32) -> u32 {
    *generation = generation.wrapping_add(1);
    if *generation == 0 {
        nodes.fill(Node::default());
        *generation = 1;
    }
    *generation
}
