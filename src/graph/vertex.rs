/// 1-based number of a vertex, equal to its position in insertion order.
///
/// Numbers stay dense: the vertex stored at index `i` is always numbered
/// `i + 1`, which is why the store only removes vertices from the end.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexNo(pub usize);

impl VertexNo {
    pub fn new(x: usize) -> Self {
        debug_assert!(x > 0);
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    /// Position of this vertex in the backing sequence.
    pub fn to_index(&self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for VertexNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex as the editor stores it.
///
/// Position and the boolean flags are payload for the rendering layer.
/// Analyses set `leaf`, `set_a` and `set_b` to report results; nothing in
/// this crate ever reads them back for control flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub no: VertexNo,
    pub x: f64,
    pub y: f64,
    pub selected: bool,
    pub leaf: bool,
    pub set_a: bool,
    pub set_b: bool,
}

impl Vertex {
    pub(crate) fn new(no: VertexNo, x: f64, y: f64) -> Self {
        Self {
            no,
            x,
            y,
            selected: false,
            leaf: false,
            set_a: false,
            set_b: false,
        }
    }

    pub(crate) fn clear_flags(&mut self) {
        self.selected = false;
        self.leaf = false;
        self.set_a = false;
        self.set_b = false;
    }
}
