//! Absolute placement of children inside a wall.

use crate::foundation::core::Dimensions;

/// Absolute offsets of a child inside its parent wall, in pixels.
///
/// `left` takes precedence over `right` and `top` over `bottom`. With no offsets on an axis the
/// child sits at 0 on that axis. Offsets may be negative or push the child past the parent's
/// edge; the overflow is clipped during composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Position {
    /// Distance from the parent's top edge to the child's top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<i64>,
    /// Distance from the parent's left edge to the child's left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<i64>,
    /// Distance from the parent's right edge to the child's right edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<i64>,
    /// Distance from the parent's bottom edge to the child's bottom edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<i64>,
}

impl Position {
    /// Offset from the top-left corner.
    pub fn at(left: i64, top: i64) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            ..Self::default()
        }
    }

    /// Top-left corner of a `child`-sized box inside `parent`.
    pub fn resolve(&self, parent: Dimensions, child: Dimensions) -> (i64, i64) {
        fn axis(start: Option<i64>, end: Option<i64>, outer: u32, inner: u32) -> i64 {
            match (start, end) {
                (Some(s), _) => s,
                (None, Some(e)) => i64::from(outer) - i64::from(inner) - e,
                (None, None) => 0,
            }
        }

        (
            axis(self.left, self.right, parent.width, child.width),
            axis(self.top, self.bottom, parent.height, child.height),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/position.rs"]
mod tests;
