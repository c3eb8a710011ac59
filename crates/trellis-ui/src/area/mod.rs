//! Recursive split-pane layout tree.
//!
//! An [`AreaTree`] owns every [`AreaNode`] in an arena and drives a
//! [`SurfaceHost`]. Each node owns a visual surface and a content surface; a
//! node may be split exactly once into two sections, one of which can be the
//! *dynamic* section that fills whatever its sized sibling leaves over.
//!
//! ```
//! use trellis_ui::area::{AreaTree, Direction};
//! use trellis_ui::size::SizeSpec;
//! use trellis_ui::surface::HeadlessHost;
//! use trellis_core::geometry::Size;
//!
//! let mut tree = AreaTree::new(HeadlessHost::new(Size::new(400.0, 300.0)));
//! let root = tree.create_area(None, None);
//! let [top, bottom] = tree
//!     .split(root, Direction::Vertical, [Some(SizeSpec::px(100.0)), None], true)
//!     .unwrap();
//!
//! assert_eq!(tree.rendered_size(top).unwrap().height, 100.0);
//! assert_eq!(tree.rendered_size(bottom).unwrap().height, 196.0);
//! assert_eq!(tree.node(root).unwrap().dynamic_section(), Some(bottom));
//! ```

mod propagate;

pub use propagate::{AreaCallback, AreaSignal, ResizeCause};

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use trellis_core::alloc::HashMap;
use trellis_core::config::AreaConfig;
use trellis_core::geometry::Size;
use trellis_core::math::Vec2;

use crate::drag::Splitbar;
use crate::error::{AreaError, AreaResult};
use crate::size::{SizeExpr, SizeSpec, resolve_or_full};
use crate::surface::{Flow, HeadlessHost, SignalKind, SurfaceFlags, SurfaceHost, SurfaceId, SurfaceKind};

/// CSS-style class carried by divider surfaces.
pub const SPLITBAR_CLASS: &str = "splitbar";

/// Handle to a node in an [`AreaTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(pub usize);

/// Split axis of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Not split.
    #[default]
    None,
    /// Sections stacked top/bottom; resized along Y.
    Vertical,
    /// Sections side by side; resized along X.
    Horizontal,
}

impl Direction {
    /// Extent of `size` along the split axis.
    pub fn extent(&self, size: Size<f32>) -> f32 {
        match self {
            Direction::Vertical => size.height,
            Direction::Horizontal => size.width,
            Direction::None => 0.0,
        }
    }

    /// Component of a pointer position along the split axis.
    pub fn component(&self, pos: Vec2) -> f32 {
        match self {
            Direction::Vertical => pos.y,
            Direction::Horizontal => pos.x,
            Direction::None => 0.0,
        }
    }

    fn flow(&self) -> Option<Flow> {
        match self {
            Direction::Vertical => Some(Flow::Column),
            Direction::Horizontal => Some(Flow::Row),
            Direction::None => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::None => write!(f, "none"),
            Direction::Vertical => write!(f, "vertical"),
            Direction::Horizontal => write!(f, "horizontal"),
        }
    }
}

impl FromStr for Direction {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Direction::None),
            "vertical" => Ok(Direction::Vertical),
            "horizontal" => Ok(Direction::Horizontal),
            _ => Err(AreaError::UnknownDirection(s.to_string())),
        }
    }
}

/// One entry of a leaf's content surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentChild {
    /// A nested area tree rooted at this node.
    Managed(AreaId),
    /// Any other surface; it receives generic resize signals.
    Foreign(SurfaceId),
}

/// One rectangular region of the layout tree.
pub struct AreaNode {
    pub(crate) name: Option<String>,
    pub(crate) surface: SurfaceId,
    pub(crate) content: SurfaceId,
    pub(crate) direction: Direction,
    pub(crate) sections: Option<[AreaId; 2]>,
    pub(crate) dynamic: Option<usize>,
    pub(crate) size: Option<SizeExpr>,
    pub(crate) splitbar: Option<Splitbar>,
    pub(crate) parent: Option<AreaId>,
    pub(crate) min_split_size: f32,
    pub(crate) last_size: Option<Size<f32>>,
    pub(crate) observers: Vec<(SignalKind, AreaCallback)>,
}

impl AreaNode {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The drawable region owned by this node.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// The content holder. While the node is split it lives inside section 0.
    pub fn content(&self) -> SurfaceId {
        self.content
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_split(&self) -> bool {
        self.sections.is_some()
    }

    /// Empty, or exactly two sections.
    pub fn sections(&self) -> &[AreaId] {
        self.sections.as_ref().map_or(&[], |sections| sections.as_slice())
    }

    pub fn section(&self, index: usize) -> Option<AreaId> {
        self.sections.and_then(|sections| sections.get(index).copied())
    }

    /// The section that fills the remaining space, if any.
    pub fn dynamic_section(&self) -> Option<AreaId> {
        self.dynamic.and_then(|index| self.section(index))
    }

    /// Explicit size assigned by the parent's split; `None` for the dynamic section and roots.
    pub fn size(&self) -> Option<SizeExpr> {
        self.size
    }

    pub fn splitbar(&self) -> Option<&Splitbar> {
        self.splitbar.as_ref()
    }

    /// The node this one is a section of.
    pub fn parent(&self) -> Option<AreaId> {
        self.parent
    }

    pub fn min_split_size(&self) -> f32 {
        self.min_split_size
    }

    /// Size recorded by the last resize cascade through this node.
    pub fn last_size(&self) -> Option<Size<f32>> {
        self.last_size
    }
}

/// Arena of area nodes driving a surface host.
pub struct AreaTree<H: SurfaceHost = HeadlessHost> {
    pub(crate) host: H,
    pub(crate) config: AreaConfig,
    pub(crate) nodes: IndexMap<AreaId, AreaNode>,
    /// Children of every content surface, keyed by that surface.
    pub(crate) slots: HashMap<SurfaceId, Vec<ContentChild>>,
    pub(crate) splitbar_owners: HashMap<SurfaceId, AreaId>,
    /// Owners whose divider currently tracks document-wide pointer events.
    pub(crate) document_listeners: Vec<AreaId>,
    next_id: usize,
}

impl<H: SurfaceHost> AreaTree<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, AreaConfig::default())
    }

    pub fn with_config(host: H, config: AreaConfig) -> Self {
        Self {
            host,
            config,
            nodes: IndexMap::new(),
            slots: HashMap::new(),
            splitbar_owners: HashMap::new(),
            document_listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &AreaConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, area: AreaId) -> bool {
        self.nodes.contains_key(&area)
    }

    pub fn node(&self, area: AreaId) -> Option<&AreaNode> {
        self.nodes.get(&area)
    }

    pub(crate) fn node_ref(&self, area: AreaId) -> AreaResult<&AreaNode> {
        self.nodes.get(&area).ok_or(AreaError::NodeNotFound(area))
    }

    pub(crate) fn node_mut(&mut self, area: AreaId) -> AreaResult<&mut AreaNode> {
        self.nodes.get_mut(&area).ok_or(AreaError::NodeNotFound(area))
    }

    /// Areas that are not a section of another area.
    pub fn roots(&self) -> Vec<AreaId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(&id, _)| id)
            .collect()
    }

    /// Create a detached root area. Missing sizes default to the full parent extent.
    pub fn create_area(&mut self, width: Option<SizeSpec>, height: Option<SizeSpec>) -> AreaId {
        let surface = self.host.create_surface(SurfaceKind::Area);
        self.host.set_width(surface, Some(resolve_or_full(width.as_ref())));
        self.host.set_height(surface, Some(resolve_or_full(height.as_ref())));
        let content = self.create_content(surface);
        let area = self.alloc_node(surface, content, None);
        tracing::debug!(?area, ?surface, "created area");
        area
    }

    fn create_content(&mut self, surface: SurfaceId) -> SurfaceId {
        let content = self.host.create_surface(SurfaceKind::Content);
        self.host.set_width(content, Some(SizeExpr::FULL));
        self.host.set_height(content, Some(SizeExpr::FULL));
        self.host.append_child(surface, content);
        content
    }

    fn alloc_node(&mut self, surface: SurfaceId, content: SurfaceId, parent: Option<AreaId>) -> AreaId {
        let id = AreaId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            AreaNode {
                name: None,
                surface,
                content,
                direction: Direction::None,
                sections: None,
                dynamic: None,
                size: None,
                splitbar: None,
                parent,
                min_split_size: self.config.min_split_size,
                last_size: None,
                observers: Vec::new(),
            },
        );
        id
    }

    /// Destroy a root area, its sections, everything nested in its content and all their surfaces.
    pub fn remove_area(&mut self, area: AreaId) -> AreaResult<()> {
        if self.node_ref(area)?.parent.is_some() {
            return Err(AreaError::NotARoot(area));
        }
        self.forget_content_child(ContentChild::Managed(area));
        self.discard_subtree(area, None);
        tracing::debug!(?area, "removed area");
        Ok(())
    }

    pub(crate) fn forget_content_child(&mut self, child: ContentChild) {
        for children in self.slots.values_mut() {
            children.retain(|&existing| existing != child);
        }
    }

    /// Drop `root` and everything below it, sparing the content surface `keep`.
    fn discard_subtree(&mut self, root: AreaId, keep: Option<SurfaceId>) {
        let mut stack = vec![root];
        let mut doomed = Vec::new();

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.shift_remove(&id) else {
                continue;
            };
            if let Some(sections) = node.sections {
                stack.extend(sections);
            }
            if let Some(bar) = &node.splitbar {
                self.splitbar_owners.remove(&bar.surface);
                doomed.push(bar.surface);
            }
            self.document_listeners.retain(|&owner| owner != id);
            if Some(node.content) != keep {
                if let Some(children) = self.slots.remove(&node.content) {
                    stack.extend(children.into_iter().filter_map(|child| match child {
                        ContentChild::Managed(nested) => Some(nested),
                        ContentChild::Foreign(_) => None,
                    }));
                }
                doomed.push(node.content);
            }
            doomed.push(node.surface);
        }

        for surface in doomed {
            self.host.destroy_surface(surface);
        }
    }

    /// Name the area; mirrored onto its surface so `#name` queries find it.
    pub fn set_id(&mut self, area: AreaId, name: impl Into<String>) -> AreaResult<()> {
        let name = name.into();
        let surface = self.node_ref(area)?.surface;
        self.host.set_name(surface, Some(name.clone()));
        self.node_mut(area)?.name = Some(name);
        Ok(())
    }

    pub fn id(&self, area: AreaId) -> Option<&str> {
        self.nodes.get(&area).and_then(|node| node.name())
    }

    pub fn set_min_split_size(&mut self, area: AreaId, size: f32) -> AreaResult<()> {
        self.node_mut(area)?.min_split_size = size.max(0.0);
        Ok(())
    }

    pub fn rendered_size(&self, area: AreaId) -> AreaResult<Size<f32>> {
        let surface = self.node_ref(area)?.surface;
        Ok(self.host.rendered_size(surface))
    }

    /// Section `index` of `area`, or `None` when the area is unknown, unsplit, or the index is out of range.
    pub fn get_section(&self, area: AreaId, index: usize) -> Option<AreaId> {
        self.nodes.get(&area).and_then(|node| node.section(index))
    }

    /// Apply `extent` along the split axis and fill the cross axis.
    pub(crate) fn apply_extent(&mut self, surface: SurfaceId, direction: Direction, extent: SizeExpr) {
        match direction {
            Direction::Vertical => {
                self.host.set_height(surface, Some(extent));
                self.host.set_width(surface, Some(SizeExpr::FULL));
            }
            Direction::Horizontal => {
                self.host.set_width(surface, Some(extent));
                self.host.set_height(surface, Some(SizeExpr::FULL));
            }
            Direction::None => {}
        }
    }

    /// Split `area` giving section 0 the configured default percentage and
    /// making section 1 dynamic.
    pub fn split_default(
        &mut self,
        area: AreaId,
        direction: Direction,
        editable: bool,
    ) -> AreaResult<[AreaId; 2]> {
        let first = SizeSpec::percent(self.config.default_split_percent);
        self.split(area, direction, [Some(first), None], editable)
    }

    /// Split `area` into two sections.
    ///
    /// Exactly one of `sizes` may be `None`; that section becomes dynamic and is
    /// sized to the complement of its sibling (less the divider when `editable`).
    /// With two explicit sizes there is no dynamic section. The node's existing
    /// content moves into section 0.
    pub fn split(
        &mut self,
        area: AreaId,
        direction: Direction,
        sizes: [Option<SizeSpec>; 2],
        editable: bool,
    ) -> AreaResult<[AreaId; 2]> {
        let (surface, content, already_split) = {
            let node = self.node_ref(area)?;
            (node.surface, node.content, node.is_split())
        };
        let Some(flow) = direction.flow() else {
            return Err(AreaError::InvalidDirection(direction));
        };
        if already_split {
            return Err(AreaError::AlreadySplit(area));
        }

        let thickness = if editable {
            self.config.splitbar_thickness
        } else {
            0.0
        };
        let (extents, dynamic) = match sizes.map(|size| size.map(|spec| spec.resolve())) {
            [None, Some(second)] => ([second.complement(thickness), second], Some(0)),
            [Some(first), None] => ([first, first.complement(thickness)], Some(1)),
            [Some(first), Some(second)] => ([first, second], None),
            [None, None] => return Err(AreaError::BothSizesDynamic),
        };

        let first_surface = self.host.create_surface(SurfaceKind::Area);
        let second_surface = self.host.create_surface(SurfaceKind::Area);
        self.host.append_child(first_surface, content);
        let second_content = self.create_content(second_surface);

        self.host.set_flow(surface, flow);
        self.host.append_child(surface, first_surface);
        let splitbar = editable.then(|| {
            let bar = self.host.create_surface(SurfaceKind::Splitbar);
            self.host.insert_flags(bar, SurfaceFlags::SPLITBAR);
            self.host.add_class(bar, SPLITBAR_CLASS);
            self.apply_extent(bar, direction, SizeExpr::Px(thickness));
            self.host.append_child(surface, bar);
            Splitbar::new(bar, thickness)
        });
        self.host.append_child(surface, second_surface);

        self.apply_extent(first_surface, direction, extents[0]);
        self.apply_extent(second_surface, direction, extents[1]);

        let first = self.alloc_node(first_surface, content, Some(area));
        let second = self.alloc_node(second_surface, second_content, Some(area));
        for (index, section) in [first, second].into_iter().enumerate() {
            if dynamic != Some(index) {
                self.node_mut(section)?.size = Some(extents[index]);
            }
        }

        if let Some(bar) = &splitbar {
            self.splitbar_owners.insert(bar.surface, area);
        }
        let node = self.node_mut(area)?;
        node.direction = direction;
        node.sections = Some([first, second]);
        node.dynamic = dynamic;
        node.splitbar = splitbar;

        tracing::debug!(
            ?area,
            %direction,
            editable,
            first = %extents[0],
            second = %extents[1],
            "split area"
        );
        Ok([first, second])
    }

    /// Collapse a split back into a single area keeping section `main`'s content.
    pub fn merge(&mut self, area: AreaId, main: usize) -> AreaResult<()> {
        let (surface, sections, splitbar) = {
            let node = self.node_ref(area)?;
            let Some(sections) = node.sections else {
                return Err(AreaError::NotSplit(area));
            };
            (node.surface, sections, node.splitbar.as_ref().map(|bar| bar.surface))
        };
        if main > 1 {
            return Err(AreaError::InvalidSection(main));
        }

        let content = self.node_ref(sections[main])?.content;
        self.host.append_child(surface, content);
        self.host.set_width(content, Some(SizeExpr::FULL));
        self.host.set_height(content, Some(SizeExpr::FULL));

        for section in sections {
            self.discard_subtree(section, Some(content));
        }
        if let Some(bar) = splitbar {
            self.splitbar_owners.remove(&bar);
            self.host.destroy_surface(bar);
        }
        self.document_listeners.retain(|&owner| owner != area);
        self.host.set_flow(surface, Flow::Column);

        let node = self.node_mut(area)?;
        node.content = content;
        node.direction = Direction::None;
        node.sections = None;
        node.dynamic = None;
        node.splitbar = None;

        tracing::debug!(?area, main, "merged area");
        self.on_resize(area, None)?;
        Ok(())
    }

    fn section_parts(&self, area: AreaId, index: usize) -> AreaResult<([AreaId; 2], Direction, Option<SurfaceId>)> {
        let node = self.node_ref(area)?;
        let Some(sections) = node.sections else {
            return Err(AreaError::NotSplit(area));
        };
        if index > 1 {
            return Err(AreaError::InvalidSection(index));
        }
        Ok((
            sections,
            node.direction,
            node.splitbar.as_ref().map(|bar| bar.surface),
        ))
    }

    /// Hide section `index`; its sibling takes the whole area.
    pub fn hide_section(&mut self, area: AreaId, index: usize) -> AreaResult<()> {
        let (sections, direction, splitbar) = self.section_parts(area, index)?;
        let target = self.node_ref(sections[index])?.surface;
        if !self.host.is_visible(target) {
            return Ok(());
        }
        let sibling = self.node_ref(sections[1 - index])?.surface;

        self.host.set_visible(target, false);
        self.apply_extent(sibling, direction, SizeExpr::FULL);
        if let Some(bar) = splitbar {
            self.host.set_visible(bar, false);
        }

        tracing::debug!(?area, index, "hid section");
        self.on_resize(area, None)?;
        Ok(())
    }

    /// Show a hidden section again.
    ///
    /// With a dynamic section the sized sibling gets its recorded size back and
    /// the dynamic one its complement. Without one, sizes recorded by a divider
    /// move (one side the complement of the other) are restored; otherwise the
    /// shown section takes the configured default percentage.
    pub fn show_section(&mut self, area: AreaId, index: usize) -> AreaResult<()> {
        let (sections, direction, splitbar) = self.section_parts(area, index)?;
        let target = self.node_ref(sections[index])?.surface;
        if self.host.is_visible(target) {
            return Ok(());
        }
        let sibling = self.node_ref(sections[1 - index])?.surface;
        let (dynamic, thickness) = {
            let node = self.node_ref(area)?;
            (
                node.dynamic,
                node.splitbar.as_ref().map_or(0.0, |bar| bar.thickness),
            )
        };

        self.host.set_visible(target, true);
        if let Some(bar) = splitbar
            && self.host.is_visible(sibling)
        {
            self.host.set_visible(bar, true);
        }

        match dynamic {
            Some(dynamic) => {
                let fixed = sections[1 - dynamic];
                let extent = self
                    .node_ref(fixed)?
                    .size
                    .unwrap_or(SizeExpr::Percent(self.config.default_split_percent));
                let fixed_surface = self.node_ref(fixed)?.surface;
                let dynamic_surface = self.node_ref(sections[dynamic])?.surface;
                self.apply_extent(fixed_surface, direction, extent);
                self.apply_extent(dynamic_surface, direction, extent.complement(thickness));
            }
            None => {
                let recorded = (
                    self.node_ref(sections[index])?.size,
                    self.node_ref(sections[1 - index])?.size,
                );
                match recorded {
                    (Some(shown), Some(other))
                        if shown.is_complement() || other.is_complement() =>
                    {
                        self.apply_extent(target, direction, shown);
                        self.apply_extent(sibling, direction, other);
                    }
                    _ => {
                        let extent = SizeExpr::Percent(self.config.default_split_percent);
                        let complement = extent.complement(thickness);
                        self.apply_extent(target, direction, extent);
                        self.apply_extent(sibling, direction, complement);
                        self.node_mut(sections[index])?.size = Some(extent);
                        self.node_mut(sections[1 - index])?.size = Some(complement);
                    }
                }
            }
        }

        tracing::debug!(?area, index, "showed section");
        self.on_resize(area, None)?;
        Ok(())
    }

    /// Whether section `index` of `area` is currently shown.
    pub fn is_section_visible(&self, area: AreaId, index: usize) -> bool {
        self.get_section(area, index)
            .and_then(|section| self.nodes.get(&section))
            .is_some_and(|node| self.host.is_visible(node.surface))
    }

    /// Resize a root area, as a host window resize would, then propagate.
    pub fn set_size(
        &mut self,
        area: AreaId,
        width: Option<SizeSpec>,
        height: Option<SizeSpec>,
    ) -> AreaResult<bool> {
        let node = self.node_ref(area)?;
        if node.parent.is_some() {
            return Err(AreaError::NotARoot(area));
        }
        let surface = node.surface;
        self.host.set_width(surface, Some(resolve_or_full(width.as_ref())));
        self.host.set_height(surface, Some(resolve_or_full(height.as_ref())));
        self.on_resize(area, Some(ResizeCause::Explicit))
    }

    /// Stretch the area's height down to the bottom of its parent surface.
    ///
    /// Without a parent surface there is nothing to measure against; the call is
    /// logged and ignored.
    pub fn adjust_height(&mut self, area: AreaId) -> AreaResult<()> {
        let surface = self.node_ref(area)?.surface;
        let Some(parent) = self.host.parent(surface) else {
            tracing::error!(?area, "adjust_height: area has no parent surface");
            return Ok(());
        };

        let available = self.host.rendered_size(parent).height - self.host.offset(surface).y;
        self.host.set_height(surface, Some(SizeExpr::Px(available.max(0.0))));
        self.on_resize(area, None)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> AreaTree {
        AreaTree::new(HeadlessHost::new(Size::new(400.0, 300.0)))
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("Vertical".parse::<Direction>(), Ok(Direction::Vertical));
        assert_eq!(" horizontal ".parse::<Direction>(), Ok(Direction::Horizontal));
        assert!(matches!(
            "diagonal".parse::<Direction>(),
            Err(AreaError::UnknownDirection(_))
        ));
    }

    #[test]
    fn test_split_with_none_direction_fails() {
        let mut tree = tree();
        let root = tree.create_area(None, None);
        assert_eq!(
            tree.split(root, Direction::None, [Some(SizeSpec::percent(50.0)), None], false),
            Err(AreaError::InvalidDirection(Direction::None))
        );
        assert!(!tree.node(root).unwrap().is_split());
    }

    #[test]
    fn test_split_requires_a_concrete_size() {
        let mut tree = tree();
        let root = tree.create_area(None, None);
        assert_eq!(
            tree.split(root, Direction::Vertical, [None, None], true),
            Err(AreaError::BothSizesDynamic)
        );
        assert_eq!(tree.len(), 1);
        assert!(tree.host().query(tree.node(root).unwrap().surface(), "area").is_empty());
    }

    #[test]
    fn test_split_moves_content_into_first_section() {
        let mut tree = tree();
        let root = tree.create_area(None, None);
        let content = tree.node(root).unwrap().content();
        let [first, second] = tree
            .split(root, Direction::Horizontal, [None, Some(SizeSpec::percent(30.0))], false)
            .unwrap();

        assert_eq!(tree.node(first).unwrap().content(), content);
        assert_ne!(tree.node(second).unwrap().content(), content);
        assert_eq!(tree.host().parent(content), Some(tree.node(first).unwrap().surface()));
        assert_eq!(tree.node(root).unwrap().dynamic_section(), Some(first));
        assert_eq!(tree.rendered_size(second).unwrap().width, 120.0);
        assert_eq!(tree.rendered_size(first).unwrap().width, 280.0);
        assert!(tree.node(root).unwrap().splitbar().is_none());
    }

    #[test]
    fn test_surface_order_places_divider_between_sections() {
        let mut tree = tree();
        let root = tree.create_area(None, None);
        let [first, second] = tree
            .split(root, Direction::Vertical, [Some(SizeSpec::px(100.0)), None], true)
            .unwrap();
        let node = tree.node(root).unwrap();
        let bar = node.splitbar().unwrap().surface();
        assert_eq!(
            tree.host().children(node.surface()),
            vec![
                tree.node(first).unwrap().surface(),
                bar,
                tree.node(second).unwrap().surface()
            ]
        );
        assert_eq!(tree.host().rendered_size(bar).height, 4.0);
    }

    #[test]
    fn test_get_section_never_fails() {
        let mut tree = tree();
        let root = tree.create_area(None, None);
        assert_eq!(tree.get_section(root, 0), None);
        let [first, _] = tree
            .split(root, Direction::Vertical, [Some(SizeSpec::px(50.0)), None], false)
            .unwrap();
        assert_eq!(tree.get_section(root, 0), Some(first));
        assert_eq!(tree.get_section(root, 2), None);
        assert_eq!(tree.get_section(AreaId(999), 0), None);
    }

    #[test]
    fn test_adjust_height_without_parent_is_noop() {
        let mut tree = tree();
        let root = tree.create_area(Some(SizeSpec::px(200.0)), Some(SizeSpec::px(80.0)));
        tree.adjust_height(root).unwrap();
        assert_eq!(tree.rendered_size(root).unwrap(), Size::new(200.0, 80.0));
    }

    #[test]
    fn test_set_size_rejects_sections() {
        let mut tree = tree();
        let root = tree.create_area(None, None);
        let [first, _] = tree
            .split(root, Direction::Vertical, [Some(SizeSpec::px(50.0)), None], false)
            .unwrap();
        assert_eq!(
            tree.set_size(first, None, None),
            Err(AreaError::NotARoot(first))
        );
    }
}
