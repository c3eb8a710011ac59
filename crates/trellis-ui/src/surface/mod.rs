//! Visual surface abstraction.
//!
//! The layout engine never draws anything itself. It creates, parents, sizes and
//! measures rectangular surfaces through a [`SurfaceHost`], and relays generic
//! signals to content it does not manage. [`HeadlessHost`] is the in-memory
//! implementation used by tests, benches and embedders that do their own drawing.

mod headless;

pub use headless::HeadlessHost;

use std::fmt;

use bitflags::bitflags;
use trellis_core::geometry::{Pos, Size};

use crate::size::SizeExpr;

/// Handle to a surface owned by a [`SurfaceHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub usize);

/// Handle returned when registering a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// What a surface is used for. Doubles as the tag name for queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Visual surface of an area node.
    Area,
    /// Content holder inside an area.
    Content,
    /// Draggable divider between two sections.
    Splitbar,
    /// One pane of a static split widget.
    Pane,
    /// Wrapper around literal markup handed to `add`.
    Markup(String),
    /// Anything else, identified by tag.
    Custom(String),
}

impl SurfaceKind {
    pub fn tag(&self) -> &str {
        match self {
            SurfaceKind::Area => "area",
            SurfaceKind::Content => "content",
            SurfaceKind::Splitbar => "splitbar",
            SurfaceKind::Pane => "pane",
            SurfaceKind::Markup(_) => "markup",
            SurfaceKind::Custom(tag) => tag,
        }
    }
}

/// How a surface places its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Children stacked top to bottom.
    #[default]
    Column,
    /// Children laid out left to right.
    Row,
}

bitflags! {
    /// Presentation state of a surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SurfaceFlags: u8 {
        /// Not displayed; measures as zero and takes no space.
        const HIDDEN = 1 << 0;
        /// Text selection and native drag suppressed.
        const SELECT_DISABLED = 1 << 1;
        /// Acts as a resize affordance.
        const SPLITBAR = 1 << 2;
        /// A drag session is running on this surface.
        const DRAG_ACTIVE = 1 << 3;
    }
}

/// Generic signal delivered to surfaces.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The surface's container changed geometry.
    Resize { size: Size<f32> },
    /// A divider above this surface moved.
    SplitMoved { delta: f32 },
    /// Application defined event.
    Named(String),
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Resize { .. } => SignalKind::Resize,
            Signal::SplitMoved { .. } => SignalKind::SplitMoved,
            Signal::Named(name) => SignalKind::Named(name.clone()),
        }
    }
}

/// Signal filter used when registering listeners.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Resize,
    SplitMoved,
    Named(String),
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Resize => write!(f, "resize"),
            SignalKind::SplitMoved => write!(f, "split_moved"),
            SignalKind::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Callback attached to a surface.
pub type Listener = Box<dyn FnMut(&Signal)>;

/// The drawable-region backend the layout engine runs against.
///
/// Operations on stale handles are no-ops, and measurements of stale handles
/// report zero.
pub trait SurfaceHost {
    fn create_surface(&mut self, kind: SurfaceKind) -> SurfaceId;

    /// Destroy a surface together with every surface below it.
    fn destroy_surface(&mut self, id: SurfaceId);

    fn contains(&self, id: SurfaceId) -> bool;

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: SurfaceId, child: SurfaceId);

    /// Remove a surface from its parent without destroying it.
    fn detach(&mut self, id: SurfaceId);

    fn parent(&self, id: SurfaceId) -> Option<SurfaceId>;

    fn children(&self, id: SurfaceId) -> Vec<SurfaceId>;

    fn kind(&self, id: SurfaceId) -> Option<SurfaceKind>;

    /// Set the width expression. `None` fills the parent.
    fn set_width(&mut self, id: SurfaceId, width: Option<SizeExpr>);

    /// Set the height expression. `None` fills the parent.
    fn set_height(&mut self, id: SurfaceId, height: Option<SizeExpr>);

    fn width(&self, id: SurfaceId) -> Option<SizeExpr>;

    fn height(&self, id: SurfaceId) -> Option<SizeExpr>;

    /// Place the surface at an explicit offset inside its parent, taking it out
    /// of the flow. `None` returns it to the flow.
    fn set_position(&mut self, id: SurfaceId, position: Option<Pos<f32>>);

    fn set_flow(&mut self, id: SurfaceId, flow: Flow);

    fn flags(&self, id: SurfaceId) -> SurfaceFlags;

    fn set_flags(&mut self, id: SurfaceId, flags: SurfaceFlags);

    /// Current rendered size.
    fn rendered_size(&self, id: SurfaceId) -> Size<f32>;

    /// Position of the surface inside its parent.
    fn offset(&self, id: SurfaceId) -> Pos<f32>;

    fn set_name(&mut self, id: SurfaceId, name: Option<String>);

    fn name(&self, id: SurfaceId) -> Option<String>;

    fn add_class(&mut self, id: SurfaceId, class: &str);

    fn classes(&self, id: SurfaceId) -> Vec<String>;

    fn add_event_listener(
        &mut self,
        id: SurfaceId,
        kind: SignalKind,
        listener: Listener,
    ) -> ListenerId;

    fn remove_event_listener(&mut self, id: SurfaceId, listener: ListenerId) -> bool;

    /// Deliver a signal to the listeners registered on `id`.
    fn dispatch(&mut self, id: SurfaceId, signal: &Signal);

    fn insert_flags(&mut self, id: SurfaceId, flags: SurfaceFlags) {
        let current = self.flags(id);
        self.set_flags(id, current | flags);
    }

    fn remove_flags(&mut self, id: SurfaceId, flags: SurfaceFlags) {
        let current = self.flags(id);
        self.set_flags(id, current - flags);
    }

    fn set_visible(&mut self, id: SurfaceId, visible: bool) {
        if visible {
            self.remove_flags(id, SurfaceFlags::HIDDEN);
        } else {
            self.insert_flags(id, SurfaceFlags::HIDDEN);
        }
    }

    fn is_visible(&self, id: SurfaceId) -> bool {
        !self.flags(id).contains(SurfaceFlags::HIDDEN)
    }

    /// Whether `id` is `ancestor` or lives somewhere below it.
    fn is_within(&self, id: SurfaceId, ancestor: SurfaceId) -> bool {
        let mut current = Some(id);
        while let Some(surface) = current {
            if surface == ancestor {
                return true;
            }
            current = self.parent(surface);
        }
        false
    }

    /// Whether a surface matches a simple selector: `#name`, `.class` or a kind tag.
    fn matches(&self, id: SurfaceId, selector: &str) -> bool {
        let selector = selector.trim();
        if let Some(name) = selector.strip_prefix('#') {
            self.name(id).as_deref() == Some(name)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.classes(id).iter().any(|c| c == class)
        } else {
            self.kind(id).is_some_and(|kind| kind.tag() == selector)
        }
    }

    /// Every surface below `scope` (not `scope` itself) matching `selector`, in tree order.
    fn query(&self, scope: SurfaceId, selector: &str) -> Vec<SurfaceId> {
        let mut found = Vec::new();
        let mut stack: Vec<SurfaceId> = self.children(scope).into_iter().rev().collect();
        while let Some(id) = stack.pop() {
            if self.matches(id, selector) {
                found.push(id);
            }
            stack.extend(self.children(id).into_iter().rev());
        }
        found
    }
}
