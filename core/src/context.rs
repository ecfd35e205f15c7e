//! Validation contexts: where in the object graph a comparison is happening.
//!
//! A [`ValidationContext`] is an immutable path of segments. Child contexts
//! are derived, never mutated in place, so a context can be shared freely
//! across the recursive walk. The rendered path appears verbatim in failure
//! reports (e.g. `item[1,2]` or `config.rows[0]`).

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// A named member of a map.
    Member(String),
    /// An indexed element of a collection, labeled by its index tuple.
    Item(String),
}

/// The location of the current comparands within the compared object graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationContext {
    segments: Vec<Segment>,
}

impl ValidationContext {
    /// The context of the outermost comparand pair.
    pub fn root() -> ValidationContext {
        ValidationContext::default()
    }

    /// Derive the context of a collection element, labeled by its index
    /// tuple (`"3"` for linear collections, `"1,0,2"` for arrays).
    pub fn as_collection_item(&self, label: &str) -> ValidationContext {
        self.child(Segment::Item(label.to_string()))
    }

    /// Derive the context of a named member.
    pub fn as_member(&self, name: &str) -> ValidationContext {
        self.child(Segment::Member(name.to_string()))
    }

    fn child(&self, segment: Segment) -> ValidationContext {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        ValidationContext { segments }
    }

    /// Nesting depth, used by the recursion guard.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Render the human-readable failure path.
    pub fn path(&self) -> String {
        if self.segments.is_empty() {
            return "subject".to_string();
        }
        let mut path = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Member(name) => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(name);
                }
                Segment::Item(label) => {
                    if path.is_empty() {
                        path.push_str("item");
                    }
                    path.push('[');
                    path.push_str(label);
                    path.push(']');
                }
            }
        }
        path
    }
}

impl std::fmt::Display for ValidationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
