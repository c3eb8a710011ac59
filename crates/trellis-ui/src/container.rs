//! Contract between areas and the widgets placed inside them.
//!
//! Anything container-like (panels, dialogs, tab strips, a [`Split`](crate::split::Split))
//! exposes a root surface through [`Container`] and can be added to a leaf
//! area's content. Areas themselves can be nested the same way.

use crate::area::{AreaId, AreaTree, ContentChild};
use crate::error::{AreaError, AreaResult};
use crate::surface::{Listener, ListenerId, SignalKind, SurfaceHost, SurfaceId, SurfaceKind};

/// A widget with a single root surface.
pub trait Container {
    fn root(&self) -> SurfaceId;
}

/// Something that can be placed into an area's content.
#[derive(Clone, Copy)]
pub enum Child<'a> {
    /// A raw surface.
    Surface(SurfaceId),
    /// Another root area, nested as a managed child.
    Area(AreaId),
    /// Any widget exposing a root surface.
    Container(&'a dyn Container),
    /// Literal markup, wrapped in a markup surface.
    Markup(&'a str),
}

impl From<SurfaceId> for Child<'_> {
    fn from(surface: SurfaceId) -> Self {
        Child::Surface(surface)
    }
}

impl From<AreaId> for Child<'_> {
    fn from(area: AreaId) -> Self {
        Child::Area(area)
    }
}

impl<'a> From<&'a str> for Child<'a> {
    fn from(markup: &'a str) -> Self {
        Child::Markup(markup)
    }
}

impl<'a, C: Container> From<&'a C> for Child<'a> {
    fn from(container: &'a C) -> Self {
        Child::Container(container)
    }
}

impl<H: SurfaceHost> AreaTree<H> {
    /// Place `child` at the end of `area`'s content.
    ///
    /// Nested areas must be roots and may not contain `area`. A surface already
    /// placed in another area moves here.
    pub fn add<'a>(&mut self, area: AreaId, child: impl Into<Child<'a>>) -> AreaResult<ContentChild> {
        let content = self.node_ref(area)?.content;
        let (surface, entry) = match child.into() {
            Child::Area(nested) => {
                let node = self.node_ref(nested)?;
                if node.parent.is_some() {
                    return Err(AreaError::NotARoot(nested));
                }
                let nested_surface = node.surface;
                if self.host.is_within(content, nested_surface) {
                    return Err(AreaError::CyclicContent(nested));
                }
                (nested_surface, ContentChild::Managed(nested))
            }
            Child::Surface(surface) => (surface, ContentChild::Foreign(surface)),
            Child::Container(container) => {
                let root = container.root();
                (root, ContentChild::Foreign(root))
            }
            Child::Markup(markup) => {
                let surface = self
                    .host
                    .create_surface(SurfaceKind::Markup(markup.to_string()));
                (surface, ContentChild::Foreign(surface))
            }
        };

        self.forget_content_child(entry);
        self.host.append_child(content, surface);
        self.slots.entry(content).or_default().push(entry);
        tracing::debug!(?area, ?entry, "added content");
        Ok(entry)
    }

    /// Content children of a leaf area, in insertion order.
    ///
    /// While an area is split its content lives in section 0 and is listed there.
    pub fn content_children(&self, area: AreaId) -> AreaResult<&[ContentChild]> {
        let content = self.node_ref(area)?.content;
        Ok(self.slots.get(&content).map_or(&[], |children| children.as_slice()))
    }

    /// Run a selector query scoped to the area's surface.
    pub fn query(&self, area: AreaId, selector: &str) -> AreaResult<Vec<SurfaceId>> {
        let surface = self.node_ref(area)?.surface;
        Ok(self.host.query(surface, selector))
    }

    pub fn add_event_listener(
        &mut self,
        area: AreaId,
        kind: SignalKind,
        listener: Listener,
    ) -> AreaResult<ListenerId> {
        let surface = self.node_ref(area)?.surface;
        Ok(self.host.add_event_listener(surface, kind, listener))
    }

    pub fn remove_event_listener(&mut self, area: AreaId, listener: ListenerId) -> AreaResult<bool> {
        let surface = self.node_ref(area)?.surface;
        Ok(self.host.remove_event_listener(surface, listener))
    }
}

#[cfg(test)]
mod tests {
    use trellis_core::geometry::Size;

    use super::*;
    use crate::surface::HeadlessHost;

    struct Panel(SurfaceId);

    impl Container for Panel {
        fn root(&self) -> SurfaceId {
            self.0
        }
    }

    #[test]
    fn test_add_wraps_markup() {
        let mut tree = AreaTree::new(HeadlessHost::default());
        let root = tree.create_area(None, None);
        let ContentChild::Foreign(surface) = tree.add(root, "<p>hello</p>").unwrap() else {
            panic!("markup should be foreign content");
        };
        assert_eq!(tree.host().markup(surface), Some("<p>hello</p>"));
        assert_eq!(tree.query(root, "markup").unwrap(), vec![surface]);
    }

    #[test]
    fn test_add_container_uses_root() {
        let mut tree = AreaTree::new(HeadlessHost::default());
        let root = tree.create_area(None, None);
        let panel_root = tree.host_mut().create_surface(SurfaceKind::Custom("panel".into()));
        let panel = Panel(panel_root);
        assert_eq!(
            tree.add(root, &panel).unwrap(),
            ContentChild::Foreign(panel_root)
        );
        assert_eq!(
            tree.host().parent(panel_root),
            Some(tree.node(root).unwrap().content())
        );
    }

    #[test]
    fn test_nested_area_cannot_contain_its_host() {
        let mut tree = AreaTree::new(HeadlessHost::new(Size::new(200.0, 200.0)));
        let outer = tree.create_area(None, None);
        let inner = tree.create_area(None, None);
        tree.add(outer, inner).unwrap();
        assert_eq!(tree.add(inner, outer), Err(AreaError::CyclicContent(outer)));
        assert_eq!(tree.add(inner, inner), Err(AreaError::CyclicContent(inner)));
    }

    #[test]
    fn test_moving_a_surface_forgets_old_slot() {
        let mut tree = AreaTree::new(HeadlessHost::default());
        let a = tree.create_area(None, None);
        let b = tree.create_area(None, None);
        let canvas = tree.host_mut().create_surface(SurfaceKind::Custom("canvas".into()));
        tree.add(a, canvas).unwrap();
        tree.add(b, canvas).unwrap();
        assert!(tree.content_children(a).unwrap().is_empty());
        assert_eq!(
            tree.content_children(b).unwrap(),
            &[ContentChild::Foreign(canvas)]
        );
    }
}
