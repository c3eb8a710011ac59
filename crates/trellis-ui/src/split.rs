//! Static N-way split.
//!
//! Unlike an area split this has any number of panes, no divider and no drag
//! support. Pane sizes go through the same resolver as area sizes.

use crate::area::Direction;
use crate::container::Container;
use crate::error::{AreaError, AreaResult};
use crate::size::{SizeExpr, SizeSpec};
use crate::surface::{Flow, Signal, SurfaceHost, SurfaceId, SurfaceKind};

/// A fixed row or column of panes.
#[derive(Debug, Clone)]
pub struct Split {
    root: SurfaceId,
    direction: Direction,
    panes: Vec<SurfaceId>,
}

impl Split {
    /// Create one pane per entry of `sizes`. `None` entries get an even share (`100% / n`).
    pub fn new<H: SurfaceHost>(
        host: &mut H,
        direction: Direction,
        sizes: &[Option<SizeSpec>],
    ) -> AreaResult<Self> {
        let flow = match direction {
            Direction::Vertical => Flow::Column,
            Direction::Horizontal => Flow::Row,
            Direction::None => return Err(AreaError::InvalidDirection(direction)),
        };
        if sizes.is_empty() {
            return Err(AreaError::EmptySplit);
        }

        let root = host.create_surface(SurfaceKind::Pane);
        host.set_flow(root, flow);
        host.set_width(root, Some(SizeExpr::FULL));
        host.set_height(root, Some(SizeExpr::FULL));

        let even = SizeExpr::Percent(100.0 / sizes.len() as f32);
        let panes = sizes
            .iter()
            .map(|size| {
                let extent = size.as_ref().map_or(even, SizeSpec::resolve);
                let pane = host.create_surface(SurfaceKind::Pane);
                match direction {
                    Direction::Horizontal => {
                        host.set_width(pane, Some(extent));
                        host.set_height(pane, Some(SizeExpr::FULL));
                    }
                    _ => {
                        host.set_height(pane, Some(extent));
                        host.set_width(pane, Some(SizeExpr::FULL));
                    }
                }
                host.append_child(root, pane);
                pane
            })
            .collect();

        tracing::debug!(%direction, panes = sizes.len(), "created split widget");
        Ok(Self {
            root,
            direction,
            panes,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn pane(&self, index: usize) -> Option<SurfaceId> {
        self.panes.get(index).copied()
    }

    pub fn panes(&self) -> &[SurfaceId] {
        &self.panes
    }

    /// Place `child` at the end of pane `index`.
    pub fn add<H: SurfaceHost>(&self, host: &mut H, index: usize, child: SurfaceId) -> AreaResult<()> {
        let pane = self.pane(index).ok_or(AreaError::InvalidSection(index))?;
        host.append_child(pane, child);
        Ok(())
    }

    /// Send a resize signal to every surface placed in the panes. Returns how many were notified.
    pub fn on_resize<H: SurfaceHost>(&self, host: &mut H) -> usize {
        let mut notified = 0;
        for &pane in &self.panes {
            for child in host.children(pane) {
                let size = host.rendered_size(child);
                host.dispatch(child, &Signal::Resize { size });
                notified += 1;
            }
        }
        notified
    }

    /// Destroy the widget and everything placed in it.
    pub fn destroy<H: SurfaceHost>(self, host: &mut H) {
        host.destroy_surface(self.root);
    }
}

impl Container for Split {
    fn root(&self) -> SurfaceId {
        self.root
    }
}
