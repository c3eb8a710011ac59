//! Resize propagation and typed area observers.

use trellis_core::geometry::Size;
use trellis_core::profiling::profile_function;

use super::{AreaId, AreaTree, ContentChild};
use crate::error::AreaResult;
use crate::surface::{Signal, SignalKind, SurfaceHost};

/// Sizes closer than this are treated as unchanged by the idempotence guard.
const SIZE_EPSILON: f32 = 0.01;

/// What started a resize cascade.
///
/// Passing a cause to [`AreaTree::on_resize`] enables the idempotence guard:
/// a node whose rendered size matches the last recorded one is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeCause {
    /// The host viewport or window changed.
    Viewport,
    /// `set_size` on a root area.
    Explicit,
    /// A divider moved.
    SplitMoved,
    /// A drag session ended.
    DragEnd,
}

/// Signal delivered to area observers.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaSignal {
    /// The area finished a resize cascade at this size.
    Resized(Size<f32>),
    /// The divider of `owner`, this area or one of its ancestors, moved by `delta`.
    SplitMoved { owner: AreaId, delta: f32 },
}

impl AreaSignal {
    pub fn kind(&self) -> SignalKind {
        match self {
            AreaSignal::Resized(_) => SignalKind::Resize,
            AreaSignal::SplitMoved { .. } => SignalKind::SplitMoved,
        }
    }
}

/// Observer attached to an area.
pub type AreaCallback = Box<dyn FnMut(AreaId, &AreaSignal)>;

impl<H: SurfaceHost> AreaTree<H> {
    /// Re-measure `area` and cascade the resize below it.
    ///
    /// Returns `false` when the idempotence guard skipped the cascade.
    pub fn on_resize(&mut self, area: AreaId, cause: Option<ResizeCause>) -> AreaResult<bool> {
        profile_function!();

        let (surface, sections, content, last) = {
            let node = self.node_ref(area)?;
            (node.surface, node.sections, node.content, node.last_size)
        };
        let size = self.host.rendered_size(surface);
        if cause.is_some() && last.is_some_and(|last| last.approx_eq(&size, SIZE_EPSILON)) {
            tracing::trace!(?area, ?cause, "size unchanged, skipping resize");
            return Ok(false);
        }

        match sections {
            Some(sections) => {
                for section in sections {
                    self.on_resize(section, None)?;
                }
            }
            None => {
                let children = self.slots.get(&content).cloned().unwrap_or_default();
                for child in children {
                    match child {
                        ContentChild::Managed(nested) => {
                            if self.nodes.contains_key(&nested) {
                                self.on_resize(nested, None)?;
                            }
                        }
                        ContentChild::Foreign(surface) => {
                            let size = self.host.rendered_size(surface);
                            self.host.dispatch(surface, &Signal::Resize { size });
                        }
                    }
                }
            }
        }

        self.emit(area, &AreaSignal::Resized(size));
        if let Some(node) = self.nodes.get_mut(&area) {
            node.last_size = Some(size);
        }
        tracing::trace!(?area, ?cause, width = size.width, height = size.height, "resized area");
        Ok(true)
    }

    /// Run a viewport-level resize on every root. Returns how many roots cascaded.
    pub fn resize_roots(&mut self, cause: ResizeCause) -> AreaResult<usize> {
        let mut cascaded = 0;
        for root in self.roots() {
            if self.on_resize(root, Some(cause))? {
                cascaded += 1;
            }
        }
        Ok(cascaded)
    }

    /// Register an observer for one kind of area signal.
    pub fn on(
        &mut self,
        area: AreaId,
        kind: SignalKind,
        callback: impl FnMut(AreaId, &AreaSignal) + 'static,
    ) -> AreaResult<()> {
        self.node_mut(area)?.observers.push((kind, Box::new(callback)));
        Ok(())
    }

    pub fn on_resize_callback(
        &mut self,
        area: AreaId,
        callback: impl FnMut(AreaId, &AreaSignal) + 'static,
    ) -> AreaResult<()> {
        self.on(area, SignalKind::Resize, callback)
    }

    pub fn on_split_moved(
        &mut self,
        area: AreaId,
        callback: impl FnMut(AreaId, &AreaSignal) + 'static,
    ) -> AreaResult<()> {
        self.on(area, SignalKind::SplitMoved, callback)
    }

    fn emit(&mut self, area: AreaId, signal: &AreaSignal) {
        let kind = signal.kind();
        if let Some(node) = self.nodes.get_mut(&area) {
            for (filter, callback) in node.observers.iter_mut() {
                if *filter == kind {
                    callback(area, signal);
                }
            }
        }
    }

    /// Deliver `signal` to `area` and every area nested anywhere below it.
    ///
    /// Returns the number of areas visited.
    pub fn notify(&mut self, area: AreaId, signal: &AreaSignal) -> AreaResult<usize> {
        self.node_ref(area)?;
        let mut targets = vec![area];
        targets.extend(self.descendants(area));
        for &target in &targets {
            self.emit(target, signal);
        }
        Ok(targets.len())
    }

    /// Every area below `area` in pre-order: split sections, and for leaves the
    /// managed areas placed in their content.
    pub fn descendants(&self, area: AreaId) -> Vec<AreaId> {
        let mut found = Vec::new();
        let mut stack = self.children_of(area);
        stack.reverse();
        while let Some(id) = stack.pop() {
            found.push(id);
            let mut children = self.children_of(id);
            children.reverse();
            stack.extend(children);
        }
        found
    }

    /// Leaf areas in the subtree of `area`, `area` itself included when unsplit.
    pub fn leaves(&self, area: AreaId) -> Vec<AreaId> {
        std::iter::once(area)
            .chain(self.descendants(area))
            .filter(|id| self.nodes.get(id).is_some_and(|node| !node.is_split()))
            .collect()
    }

    fn children_of(&self, area: AreaId) -> Vec<AreaId> {
        let Some(node) = self.nodes.get(&area) else {
            return Vec::new();
        };
        match node.sections {
            Some(sections) => sections.to_vec(),
            None => self
                .slots
                .get(&node.content)
                .map(|children| {
                    children
                        .iter()
                        .filter_map(|child| match child {
                            ContentChild::Managed(nested) => Some(*nested),
                            ContentChild::Foreign(_) => None,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
