//! Recording implementation of SurfaceHost for testing.
//!
//! Delegates to a [`HeadlessHost`] and records each call so tests can count
//! surface churn, dispatched signals and measurements.

use parking_lot::Mutex;
use trellis_core::geometry::{Pos, Size};
use trellis_ui::size::SizeExpr;
use trellis_ui::surface::{
    Flow, HeadlessHost, Listener, ListenerId, Signal, SignalKind, SurfaceFlags, SurfaceHost,
    SurfaceId, SurfaceKind,
};

/// Records a host operation for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Create { id: SurfaceId, kind: SurfaceKind },
    Destroy { id: SurfaceId },
    Append { parent: SurfaceId, child: SurfaceId },
    Detach { id: SurfaceId },
    SetWidth { id: SurfaceId, width: Option<SizeExpr> },
    SetHeight { id: SurfaceId, height: Option<SizeExpr> },
    SetFlags { id: SurfaceId, flags: SurfaceFlags },
    Measure { id: SurfaceId },
    Dispatch { id: SurfaceId, signal: Signal },
}

/// Surface host that records every mutating call and measurement.
pub struct RecordingHost {
    inner: HeadlessHost,
    calls: Mutex<Vec<HostCall>>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::from_host(HeadlessHost::default())
    }
}

impl RecordingHost {
    pub fn new(viewport: Size<f32>) -> Self {
        Self::from_host(HeadlessHost::new(viewport))
    }

    pub fn from_host(inner: HeadlessHost) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &HeadlessHost {
        &self.inner
    }

    pub fn set_viewport(&mut self, viewport: Size<f32>) {
        self.inner.set_viewport(viewport);
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().push(call);
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    /// Clear all recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn count(&self, predicate: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }

    pub fn count_creates(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Create { .. }))
    }

    pub fn count_destroys(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Destroy { .. }))
    }

    pub fn count_measurements(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Measure { .. }))
    }

    /// Number of signals of `kind` dispatched to any surface.
    pub fn count_dispatches(&self, kind: &SignalKind) -> usize {
        self.count(|call| matches!(call, HostCall::Dispatch { signal, .. } if signal.kind() == *kind))
    }

    /// Signals dispatched to one surface, in order.
    pub fn dispatched_to(&self, id: SurfaceId) -> Vec<Signal> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::Dispatch { id: target, signal } if *target == id => Some(signal.clone()),
                _ => None,
            })
            .collect()
    }
}

impl SurfaceHost for RecordingHost {
    fn create_surface(&mut self, kind: SurfaceKind) -> SurfaceId {
        let id = self.inner.create_surface(kind.clone());
        self.record(HostCall::Create { id, kind });
        id
    }

    fn destroy_surface(&mut self, id: SurfaceId) {
        self.record(HostCall::Destroy { id });
        self.inner.destroy_surface(id);
    }

    fn contains(&self, id: SurfaceId) -> bool {
        self.inner.contains(id)
    }

    fn append_child(&mut self, parent: SurfaceId, child: SurfaceId) {
        self.record(HostCall::Append { parent, child });
        self.inner.append_child(parent, child);
    }

    fn detach(&mut self, id: SurfaceId) {
        self.record(HostCall::Detach { id });
        self.inner.detach(id);
    }

    fn parent(&self, id: SurfaceId) -> Option<SurfaceId> {
        self.inner.parent(id)
    }

    fn children(&self, id: SurfaceId) -> Vec<SurfaceId> {
        self.inner.children(id)
    }

    fn kind(&self, id: SurfaceId) -> Option<SurfaceKind> {
        self.inner.kind(id)
    }

    fn set_width(&mut self, id: SurfaceId, width: Option<SizeExpr>) {
        self.record(HostCall::SetWidth { id, width });
        self.inner.set_width(id, width);
    }

    fn set_height(&mut self, id: SurfaceId, height: Option<SizeExpr>) {
        self.record(HostCall::SetHeight { id, height });
        self.inner.set_height(id, height);
    }

    fn width(&self, id: SurfaceId) -> Option<SizeExpr> {
        self.inner.width(id)
    }

    fn height(&self, id: SurfaceId) -> Option<SizeExpr> {
        self.inner.height(id)
    }

    fn set_position(&mut self, id: SurfaceId, position: Option<Pos<f32>>) {
        self.inner.set_position(id, position);
    }

    fn set_flow(&mut self, id: SurfaceId, flow: Flow) {
        self.inner.set_flow(id, flow);
    }

    fn flags(&self, id: SurfaceId) -> SurfaceFlags {
        self.inner.flags(id)
    }

    fn set_flags(&mut self, id: SurfaceId, flags: SurfaceFlags) {
        self.record(HostCall::SetFlags { id, flags });
        self.inner.set_flags(id, flags);
    }

    fn rendered_size(&self, id: SurfaceId) -> Size<f32> {
        self.record(HostCall::Measure { id });
        self.inner.rendered_size(id)
    }

    fn offset(&self, id: SurfaceId) -> Pos<f32> {
        self.inner.offset(id)
    }

    fn set_name(&mut self, id: SurfaceId, name: Option<String>) {
        self.inner.set_name(id, name);
    }

    fn name(&self, id: SurfaceId) -> Option<String> {
        self.inner.name(id)
    }

    fn add_class(&mut self, id: SurfaceId, class: &str) {
        self.inner.add_class(id, class);
    }

    fn classes(&self, id: SurfaceId) -> Vec<String> {
        self.inner.classes(id)
    }

    fn add_event_listener(
        &mut self,
        id: SurfaceId,
        kind: SignalKind,
        listener: Listener,
    ) -> ListenerId {
        self.inner.add_event_listener(id, kind, listener)
    }

    fn remove_event_listener(&mut self, id: SurfaceId, listener: ListenerId) -> bool {
        self.inner.remove_event_listener(id, listener)
    }

    fn dispatch(&mut self, id: SurfaceId, signal: &Signal) {
        self.record(HostCall::Dispatch {
            id,
            signal: signal.clone(),
        });
        self.inner.dispatch(id, signal);
    }
}
