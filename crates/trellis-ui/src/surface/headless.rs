use indexmap::IndexMap;
use trellis_core::geometry::{Pos, Size};

use super::{
    Flow, Listener, ListenerId, Signal, SignalKind, SurfaceFlags, SurfaceHost, SurfaceId,
    SurfaceKind,
};
use crate::size::SizeExpr;

struct SurfaceData {
    kind: SurfaceKind,
    parent: Option<SurfaceId>,
    children: Vec<SurfaceId>,
    width: Option<SizeExpr>,
    height: Option<SizeExpr>,
    position: Option<Pos<f32>>,
    flow: Flow,
    flags: SurfaceFlags,
    name: Option<String>,
    classes: Vec<String>,
    listeners: Vec<(ListenerId, SignalKind, Listener)>,
}

impl SurfaceData {
    fn new(kind: SurfaceKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            width: None,
            height: None,
            position: None,
            flow: Flow::default(),
            flags: SurfaceFlags::empty(),
            name: None,
            classes: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

/// In-memory surface tree.
///
/// Sizes resolve against the parent's rendered size; detached surfaces resolve
/// against the viewport. A surface with no explicit size fills its parent.
/// Hidden surfaces, and everything below them, measure as zero.
pub struct HeadlessHost {
    surfaces: IndexMap<SurfaceId, SurfaceData>,
    viewport: Size<f32>,
    next_id: usize,
    next_listener: u64,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl HeadlessHost {
    pub fn new(viewport: Size<f32>) -> Self {
        Self {
            surfaces: IndexMap::new(),
            viewport,
            next_id: 0,
            next_listener: 0,
        }
    }

    pub fn viewport(&self) -> Size<f32> {
        self.viewport
    }

    /// Change the viewport detached surfaces measure against.
    pub fn set_viewport(&mut self, viewport: Size<f32>) {
        self.viewport = viewport;
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Markup text held by a markup surface.
    pub fn markup(&self, id: SurfaceId) -> Option<&str> {
        match &self.surfaces.get(&id)?.kind {
            SurfaceKind::Markup(text) => Some(text),
            _ => None,
        }
    }

    fn is_displayed(&self, id: SurfaceId) -> bool {
        let mut current = Some(id);
        while let Some(surface) = current {
            match self.surfaces.get(&surface) {
                Some(data) if data.flags.contains(SurfaceFlags::HIDDEN) => return false,
                Some(data) => current = data.parent,
                None => return false,
            }
        }
        true
    }

    fn measure(&self, id: SurfaceId) -> Size<f32> {
        let Some(data) = self.surfaces.get(&id) else {
            return Size::ZERO;
        };
        let container = match data.parent {
            Some(parent) => self.measure(parent),
            None => self.viewport,
        };
        let width = data
            .width
            .map_or(container.width, |w| w.to_px(container.width));
        let height = data
            .height
            .map_or(container.height, |h| h.to_px(container.height));
        Size::new(width, height)
    }
}

impl SurfaceHost for HeadlessHost {
    fn create_surface(&mut self, kind: SurfaceKind) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        self.surfaces.insert(id, SurfaceData::new(kind));
        id
    }

    fn destroy_surface(&mut self, id: SurfaceId) {
        if !self.surfaces.contains_key(&id) {
            return;
        }
        self.detach(id);

        let mut stack = vec![id];
        while let Some(surface) = stack.pop() {
            if let Some(data) = self.surfaces.shift_remove(&surface) {
                stack.extend(data.children);
            }
        }
    }

    fn contains(&self, id: SurfaceId) -> bool {
        self.surfaces.contains_key(&id)
    }

    fn append_child(&mut self, parent: SurfaceId, child: SurfaceId) {
        if parent == child
            || !self.surfaces.contains_key(&parent)
            || !self.surfaces.contains_key(&child)
            || self.is_within(parent, child)
        {
            return;
        }
        self.detach(child);
        if let Some(data) = self.surfaces.get_mut(&parent) {
            data.children.push(child);
        }
        if let Some(data) = self.surfaces.get_mut(&child) {
            data.parent = Some(parent);
        }
    }

    fn detach(&mut self, id: SurfaceId) {
        let Some(parent) = self.surfaces.get_mut(&id).and_then(|data| data.parent.take()) else {
            return;
        };
        if let Some(data) = self.surfaces.get_mut(&parent) {
            data.children.retain(|&child| child != id);
        }
    }

    fn parent(&self, id: SurfaceId) -> Option<SurfaceId> {
        self.surfaces.get(&id).and_then(|data| data.parent)
    }

    fn children(&self, id: SurfaceId) -> Vec<SurfaceId> {
        self.surfaces
            .get(&id)
            .map(|data| data.children.clone())
            .unwrap_or_default()
    }

    fn kind(&self, id: SurfaceId) -> Option<SurfaceKind> {
        self.surfaces.get(&id).map(|data| data.kind.clone())
    }

    fn set_width(&mut self, id: SurfaceId, width: Option<SizeExpr>) {
        if let Some(data) = self.surfaces.get_mut(&id) {
            data.width = width;
        }
    }

    fn set_height(&mut self, id: SurfaceId, height: Option<SizeExpr>) {
        if let Some(data) = self.surfaces.get_mut(&id) {
            data.height = height;
        }
    }

    fn width(&self, id: SurfaceId) -> Option<SizeExpr> {
        self.surfaces.get(&id).and_then(|data| data.width)
    }

    fn height(&self, id: SurfaceId) -> Option<SizeExpr> {
        self.surfaces.get(&id).and_then(|data| data.height)
    }

    fn set_position(&mut self, id: SurfaceId, position: Option<Pos<f32>>) {
        if let Some(data) = self.surfaces.get_mut(&id) {
            data.position = position;
        }
    }

    fn set_flow(&mut self, id: SurfaceId, flow: Flow) {
        if let Some(data) = self.surfaces.get_mut(&id) {
            data.flow = flow;
        }
    }

    fn flags(&self, id: SurfaceId) -> SurfaceFlags {
        self.surfaces
            .get(&id)
            .map(|data| data.flags)
            .unwrap_or_default()
    }

    fn set_flags(&mut self, id: SurfaceId, flags: SurfaceFlags) {
        if let Some(data) = self.surfaces.get_mut(&id) {
            data.flags = flags;
        }
    }

    fn rendered_size(&self, id: SurfaceId) -> Size<f32> {
        if !self.is_displayed(id) {
            return Size::ZERO;
        }
        self.measure(id)
    }

    fn offset(&self, id: SurfaceId) -> Pos<f32> {
        if let Some(position) = self.surfaces.get(&id).and_then(|data| data.position) {
            return position;
        }
        let Some(parent) = self.parent(id) else {
            return Pos::new(0.0, 0.0);
        };
        let flow = self
            .surfaces
            .get(&parent)
            .map(|data| data.flow)
            .unwrap_or_default();

        let mut offset = Pos::new(0.0, 0.0);
        for sibling in self.children(parent) {
            if sibling == id {
                break;
            }
            if self.surfaces.get(&sibling).is_some_and(|data| data.position.is_some()) {
                continue;
            }
            let size = self.rendered_size(sibling);
            match flow {
                Flow::Column => offset.y += size.height,
                Flow::Row => offset.x += size.width,
            }
        }
        offset
    }

    fn set_name(&mut self, id: SurfaceId, name: Option<String>) {
        if let Some(data) = self.surfaces.get_mut(&id) {
            data.name = name;
        }
    }

    fn name(&self, id: SurfaceId) -> Option<String> {
        self.surfaces.get(&id).and_then(|data| data.name.clone())
    }

    fn add_class(&mut self, id: SurfaceId, class: &str) {
        if let Some(data) = self.surfaces.get_mut(&id)
            && !data.classes.iter().any(|c| c == class)
        {
            data.classes.push(class.to_string());
        }
    }

    fn classes(&self, id: SurfaceId) -> Vec<String> {
        self.surfaces
            .get(&id)
            .map(|data| data.classes.clone())
            .unwrap_or_default()
    }

    fn add_event_listener(
        &mut self,
        id: SurfaceId,
        kind: SignalKind,
        listener: Listener,
    ) -> ListenerId {
        let listener_id = ListenerId(self.next_listener);
        self.next_listener += 1;
        if let Some(data) = self.surfaces.get_mut(&id) {
            data.listeners.push((listener_id, kind, listener));
        }
        listener_id
    }

    fn remove_event_listener(&mut self, id: SurfaceId, listener: ListenerId) -> bool {
        let Some(data) = self.surfaces.get_mut(&id) else {
            return false;
        };
        let before = data.listeners.len();
        data.listeners.retain(|(existing, _, _)| *existing != listener);
        data.listeners.len() != before
    }

    fn dispatch(&mut self, id: SurfaceId, signal: &Signal) {
        let kind = signal.kind();
        if let Some(data) = self.surfaces.get_mut(&id) {
            for (_, filter, listener) in data.listeners.iter_mut() {
                if *filter == kind {
                    listener(signal);
                }
            }
        }
    }
}
