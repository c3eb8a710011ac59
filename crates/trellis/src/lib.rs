//! Trellis - split-pane layout toolkit
//!
//! Trellis arranges an application's surfaces into an IDE-like tree of
//! resizable areas:
//!
//! - **Areas**: binary split tree with one dynamic section per split
//! - **Dividers**: drag sessions that move a split while keeping minimum sizes
//! - **Propagation**: resize cascades with an idempotence guard
//! - **Static splits**: N-way panes sized by percentage or pixels
//!
//! # Quick Start
//!
//! ```
//! use trellis::prelude::*;
//!
//! trellis::init();
//!
//! let mut tree = AreaTree::new(HeadlessHost::new(Size::new(1280.0, 720.0)));
//! let root = tree.create_area(None, None);
//! let [sidebar, _editor] = tree
//!     .split(root, Direction::Horizontal, [Some(240.into()), None], true)
//!     .unwrap();
//! tree.split(sidebar, Direction::Vertical, [None, Some(SizeSpec::percent(30.0))], true)
//!     .unwrap();
//! tree.resize_roots(ResizeCause::Viewport).unwrap();
//! ```

pub use trellis_core as core;
#[cfg(feature = "ui")]
pub use trellis_ui as ui;

pub use trellis_core::config::AreaConfig;
pub use trellis_core::geometry::{Pos, Rect, Size};

/// Install the default log subscriber, ignoring an already installed one.
pub fn init() {
    if let Err(err) = trellis_core::logging::try_init() {
        tracing::debug!(%err, "logging already initialised");
    }
}

pub mod prelude {
    pub use trellis_core::config::AreaConfig;
    pub use trellis_core::geometry::{Pos, Rect, Size};
    pub use trellis_core::math::{Vec2, vec2};

    #[cfg(feature = "ui")]
    pub use trellis_ui::prelude::*;
}
