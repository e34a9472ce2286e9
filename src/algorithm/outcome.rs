/// Outcome of an analysis that may not apply to the graph at hand.
///
/// The editor's analyses distinguish "computed false" from "there was
/// nothing to compute on": asking whether an empty graph is connected is
/// answered with [Analysis::NoVertices], not `false`, and counting leaves
/// of a non-tree is [Analysis::NotApplicable]. Call sites discriminate on
/// the variant the same way the UI discriminates on its status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analysis<T> {
    /// The analysis ran and produced a value.
    Value(T),
    /// The graph has no vertices.
    NoVertices,
    /// The analysis is only defined for graphs this one is not.
    NotApplicable,
}

impl<T> Analysis<T> {
    pub fn is_value(&self) -> bool {
        matches!(self, Analysis::Value(_))
    }

    pub fn value(self) -> Option<T> {
        match self {
            Analysis::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Analysis::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Analysis<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Analysis::Value(v) => Analysis::Value(f(v)),
            Analysis::NoVertices => Analysis::NoVertices,
            Analysis::NotApplicable => Analysis::NotApplicable,
        }
    }
}
