//! Error types for layout operations.

use crate::area::{AreaId, Direction};

/// Errors raised synchronously by structural area operations.
///
/// A call that fails leaves the tree exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AreaError {
    /// `split` was asked for a direction other than vertical or horizontal.
    #[error("invalid split direction: {0}")]
    InvalidDirection(Direction),
    /// A direction string could not be parsed.
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
    /// `split` received no concrete size for either section.
    #[error("split requires at least one explicit section size")]
    BothSizesDynamic,
    /// The area is already split.
    #[error("area {0:?} cannot split twice")]
    AlreadySplit(AreaId),
    /// The area is not split.
    #[error("area {0:?} is not splitted")]
    NotSplit(AreaId),
    /// Section index other than 0 or 1.
    #[error("section index {0} out of range")]
    InvalidSection(usize),
    /// Handle does not refer to a live area.
    #[error("area {0:?} not found")]
    NodeNotFound(AreaId),
    /// The area is a section of another area and cannot be moved or removed on its own.
    #[error("area {0:?} is owned by a split parent")]
    NotARoot(AreaId),
    /// A divider cannot move while one of its sections is hidden.
    #[error("area {0:?} has a hidden section")]
    SectionHidden(AreaId),
    /// Adding an area into its own subtree.
    #[error("area {0:?} cannot be placed inside itself")]
    CyclicContent(AreaId),
    /// A static split needs at least one pane.
    #[error("split widget requires at least one pane")]
    EmptySplit,
}

/// Result type for area operations.
pub type AreaResult<T> = Result<T, AreaError>;
