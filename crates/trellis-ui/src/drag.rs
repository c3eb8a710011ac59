//! Divider drag sessions and pointer routing.
//!
//! Each editable split owns a [`Splitbar`]. Pressing it starts a
//! [`DragSession`] that lives on that divider until the pointer is released;
//! while it is alive the owning area is registered as a document-scope
//! listener, so move and up events reach it wherever the pointer goes.

use trellis_core::math::Vec2;
use trellis_core::profiling::profile_function;

use crate::area::{AreaId, AreaSignal, AreaTree, Direction, ResizeCause};
use crate::error::{AreaError, AreaResult};
use crate::size::SizeExpr;
use crate::surface::{SurfaceFlags, SurfaceHost, SurfaceId};

/// Drag state of a divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Pointer bookkeeping for one press-move-release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start: Vec2,
    last: Vec2,
    /// False until the pointer has travelled past the drag threshold.
    active: bool,
}

impl DragSession {
    pub fn new(pos: Vec2, threshold: f32) -> Self {
        Self {
            start: pos,
            last: pos,
            active: threshold <= 0.0,
        }
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Last pointer position that was turned into a delta.
    pub fn last(&self) -> Vec2 {
        self.last
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance to `pos`, returning the travelled distance along `direction`.
    fn advance(&mut self, pos: Vec2, threshold: f32, direction: Direction) -> Option<f32> {
        if !self.active {
            if pos.distance(self.start) < threshold {
                return None;
            }
            self.active = true;
        }
        let delta = direction.component(pos) - direction.component(self.last);
        self.last = pos;
        Some(delta)
    }
}

/// The divider between the two sections of an editable split.
#[derive(Debug)]
pub struct Splitbar {
    pub(crate) surface: SurfaceId,
    pub(crate) thickness: f32,
    pub(crate) session: Option<DragSession>,
}

impl Splitbar {
    pub(crate) fn new(surface: SurfaceId, thickness: f32) -> Self {
        Self {
            surface,
            thickness,
            session: None,
        }
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }
}

/// How the host should treat a pointer event after routing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerOutcome {
    /// A drag session handled the event.
    pub consumed: bool,
    /// Suppress native selection and drag behaviour for this event.
    pub prevent_default: bool,
}

impl PointerOutcome {
    pub const IGNORED: PointerOutcome = PointerOutcome {
        consumed: false,
        prevent_default: false,
    };

    const HANDLED: PointerOutcome = PointerOutcome {
        consumed: true,
        prevent_default: true,
    };
}

impl<H: SurfaceHost> AreaTree<H> {
    /// Owner of the divider `target` belongs to, walking up from `target`.
    pub fn splitbar_owner(&self, target: SurfaceId) -> Option<AreaId> {
        let mut current = Some(target);
        while let Some(surface) = current {
            if let Some(&owner) = self.splitbar_owners.get(&surface) {
                return Some(owner);
            }
            current = self.host.parent(surface);
        }
        None
    }

    /// Whether a drag session is running on the divider of `area`.
    pub fn is_dragging(&self, area: AreaId) -> bool {
        self.node(area)
            .and_then(|node| node.splitbar())
            .is_some_and(|bar| bar.phase() == DragPhase::Dragging)
    }

    /// Areas whose dividers currently receive document-scope move/up events.
    pub fn active_drags(&self) -> &[AreaId] {
        &self.document_listeners
    }

    /// Pointer pressed on `target`. Starts a session when `target` is a visible divider.
    ///
    /// Pressing a divider that is already dragging restarts its session at `pos`.
    pub fn pointer_down(&mut self, target: SurfaceId, pos: Vec2) -> PointerOutcome {
        let Some(owner) = self.splitbar_owner(target) else {
            return PointerOutcome::IGNORED;
        };
        let threshold = self.config.drag_threshold;
        let Some(node) = self.nodes.get_mut(&owner) else {
            return PointerOutcome::IGNORED;
        };
        let owner_surface = node.surface;
        let Some(bar) = node.splitbar.as_mut() else {
            return PointerOutcome::IGNORED;
        };
        let bar_surface = bar.surface;
        if !self.host.is_visible(bar_surface) {
            return PointerOutcome::IGNORED;
        }

        bar.session = Some(DragSession::new(pos, threshold));
        if !self.document_listeners.contains(&owner) {
            self.document_listeners.push(owner);
        }
        self.host.insert_flags(bar_surface, SurfaceFlags::DRAG_ACTIVE);
        self.host.insert_flags(owner_surface, SurfaceFlags::SELECT_DISABLED);

        tracing::debug!(?owner, x = pos.x, y = pos.y, "drag started");
        PointerOutcome::HANDLED
    }

    /// Pointer moved anywhere in the document.
    pub fn pointer_move(&mut self, pos: Vec2) -> PointerOutcome {
        if self.document_listeners.is_empty() {
            return PointerOutcome::IGNORED;
        }
        let threshold = self.config.drag_threshold;

        for owner in self.document_listeners.clone() {
            let delta = {
                let Some(node) = self.nodes.get_mut(&owner) else {
                    continue;
                };
                let direction = node.direction;
                let Some(session) = node
                    .splitbar
                    .as_mut()
                    .and_then(|bar| bar.session.as_mut())
                else {
                    continue;
                };
                session.advance(pos, threshold, direction)
            };

            match delta {
                Some(delta) if delta != 0.0 => {
                    tracing::trace!(?owner, delta, "drag move");
                    if let Err(err) = self.move_split(owner, delta) {
                        tracing::warn!(?owner, %err, "failed to move split");
                    }
                }
                _ => {}
            }
        }
        PointerOutcome::HANDLED
    }

    /// Pointer released anywhere in the document. Ends every running session.
    ///
    /// A release away from the last move position applies the remaining travel first.
    pub fn pointer_up(&mut self, pos: Vec2) -> PointerOutcome {
        if self.document_listeners.is_empty() {
            return PointerOutcome::IGNORED;
        }
        self.pointer_move(pos);

        for owner in self.end_sessions() {
            if let Err(err) = self.on_resize(owner, Some(ResizeCause::DragEnd)) {
                tracing::warn!(?owner, %err, "resize after drag failed");
            }
            tracing::debug!(?owner, "drag ended");
        }
        PointerOutcome::HANDLED
    }

    /// Drop every running session without a final resize.
    pub fn cancel_drags(&mut self) -> usize {
        let owners = self.end_sessions();
        if !owners.is_empty() {
            tracing::debug!(count = owners.len(), "drags cancelled");
        }
        owners.len()
    }

    fn end_sessions(&mut self) -> Vec<AreaId> {
        let owners = std::mem::take(&mut self.document_listeners);
        for &owner in &owners {
            let Some(node) = self.nodes.get_mut(&owner) else {
                continue;
            };
            let owner_surface = node.surface;
            let Some(bar) = node.splitbar.as_mut() else {
                continue;
            };
            bar.session = None;
            let bar_surface = bar.surface;
            self.host.remove_flags(bar_surface, SurfaceFlags::DRAG_ACTIVE);
            self.host.remove_flags(owner_surface, SurfaceFlags::SELECT_DISABLED);
        }
        owners
    }

    /// Move the divider of `area` by `delta` pixels along its split axis.
    ///
    /// The sized section (section 0 when neither is dynamic) becomes an absolute
    /// size clamped so neither side drops below the area's minimum split size;
    /// its sibling gets the complement. Positive deltas move the divider right
    /// or down. Every area in the subtree is told the split moved.
    ///
    /// Fails with [`AreaError::SectionHidden`] while either section is hidden.
    ///
    /// Returns the new size of the sized section.
    pub fn move_split(&mut self, area: AreaId, delta: f32) -> AreaResult<f32> {
        profile_function!();

        let (surface, sections, direction, dynamic, thickness, min) = {
            let node = self.node_ref(area)?;
            let Some(sections) = node.sections else {
                return Err(AreaError::NotSplit(area));
            };
            (
                node.surface,
                sections,
                node.direction,
                node.dynamic,
                node.splitbar.as_ref().map_or(0.0, |bar| bar.thickness),
                node.min_split_size,
            )
        };
        let fixed_index = dynamic.map_or(0, |dynamic| 1 - dynamic);
        let fixed = sections[fixed_index];
        let other = sections[1 - fixed_index];
        let fixed_surface = self.node_ref(fixed)?.surface;
        let other_surface = self.node_ref(other)?.surface;
        if !self.host.is_visible(fixed_surface) || !self.host.is_visible(other_surface) {
            return Err(AreaError::SectionHidden(area));
        }

        let total = direction.extent(self.host.rendered_size(surface));
        let current = direction.extent(self.host.rendered_size(fixed_surface));
        let signed = if fixed_index == 0 { delta } else { -delta };
        let upper = (total - thickness - min).max(min);
        let new_size = (current + signed).clamp(min, upper);

        let fixed_extent = SizeExpr::Px(new_size);
        let other_extent = fixed_extent.complement(thickness);
        self.apply_extent(fixed_surface, direction, fixed_extent);
        self.apply_extent(other_surface, direction, other_extent);
        self.node_mut(fixed)?.size = Some(fixed_extent);
        if dynamic.is_none() {
            self.node_mut(other)?.size = Some(other_extent);
        }

        tracing::trace!(?area, delta, new_size, "split moved");
        self.notify(area, &AreaSignal::SplitMoved { owner: area, delta })?;
        for section in sections {
            self.on_resize(section, Some(ResizeCause::SplitMoved))?;
        }
        Ok(new_size)
    }
}
