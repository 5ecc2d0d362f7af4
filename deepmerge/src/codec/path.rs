//! Locations inside a value tree, reported by decode failures.

use std::fmt;

/// One step from a container to a child value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// Attribute or map key.
    Key(String),
    /// Sequence position.
    Index(usize),
}

/// Path from the root of a value to one of its descendants.
///
/// Renders as `$` for the root, followed by `.key` and `[index]` steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValuePath(Vec<PathSegment>);

impl ValuePath {
    /// The root path.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Segments from the root.
    #[must_use]
    pub const fn segments(&self) -> &[PathSegment] {
        self.0.as_slice()
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
