//! Trellis UI - recursive split-pane layout engine.
//!
//! The engine arranges rectangular surfaces into a binary tree of areas that
//! can be split, resized by dragging a divider, hidden, shown and merged back.
//! It owns no rendering: all geometry goes through a [`SurfaceHost`].
//!
//! # Quick Start
//!
//! ```
//! use trellis_core::geometry::Size;
//! use trellis_core::math::vec2;
//! use trellis_ui::prelude::*;
//!
//! let mut tree = AreaTree::new(HeadlessHost::new(Size::new(400.0, 300.0)));
//! let root = tree.create_area(None, None);
//! let [top, _] = tree
//!     .split(root, Direction::Vertical, [Some(100.into()), None], true)
//!     .unwrap();
//!
//! let bar = tree.node(root).unwrap().splitbar().unwrap().surface();
//! tree.pointer_down(bar, vec2(200.0, 102.0));
//! tree.pointer_move(vec2(200.0, 122.0));
//! tree.pointer_up(vec2(200.0, 122.0));
//!
//! assert_eq!(tree.rendered_size(top).unwrap().height, 120.0);
//! ```

pub mod area;
pub mod container;
pub mod drag;
pub mod error;
pub mod size;
pub mod split;
pub mod surface;

pub use area::{AreaId, AreaNode, AreaSignal, AreaTree, ContentChild, Direction, ResizeCause};
pub use container::{Child, Container};
pub use drag::{DragPhase, DragSession, PointerOutcome, Splitbar};
pub use error::{AreaError, AreaResult};
pub use size::{SizeError, SizeExpr, SizeSpec};
pub use split::Split;
pub use surface::{HeadlessHost, Signal, SignalKind, SurfaceHost, SurfaceId};

pub mod prelude {
    pub use crate::area::{AreaId, AreaTree, Direction, ResizeCause};
    pub use crate::container::Container;
    pub use crate::error::{AreaError, AreaResult};
    pub use crate::size::{SizeExpr, SizeSpec};
    pub use crate::split::Split;
    pub use crate::surface::{HeadlessHost, SurfaceHost};
}
