use super::VertexNo;

/// Insertion-order index of an edge. Edge identity is positional: the
/// store only removes the edge with the highest index.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeIdx(pub usize);

impl EdgeIdx {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// An edge as the editor stores it.
///
/// Weight `0` means "unweighted"; the renderer draws no label for it.
/// `highlight` is an annotation written by analyses and read only by the
/// renderer. Endpoints are unordered; nothing rejects self-loops or
/// parallel edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: VertexNo,
    pub to: VertexNo,
    pub weight: u32,
    pub highlight: bool,
}

impl Edge {
    pub(crate) fn new(from: VertexNo, to: VertexNo, weight: u32) -> Self {
        Self {
            from,
            to,
            weight,
            highlight: false,
        }
    }

    /// True iff `v` is one of the endpoints.
    pub fn touches(&self, v: VertexNo) -> bool {
        self.from == v || self.to == v
    }

    /// True iff the endpoints are `a` and `b` in either order.
    pub fn connects(&self, a: VertexNo, b: VertexNo) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// What algorithms see of an edge: identity, endpoints and weight.
///
/// Cheap to copy and free of annotation state, like the vertex numbers
/// themselves.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeRef {
    pub idx: EdgeIdx,
    pub from: VertexNo,
    pub to: VertexNo,
    pub weight: u32,
}

impl EdgeRef {
    /// The endpoint that is not `v`; `v` itself for a self-loop.
    pub fn other(&self, v: VertexNo) -> VertexNo {
        if self.from == v {
            self.to
        } else {
            self.from
        }
    }
}
