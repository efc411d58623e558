//! A minimal rendering surface.

use std::cell::Cell;

use crate::event::Event;
use crate::source::{RenderingSurface, SurfaceDestroyed, SurfaceId};

/// A [`RenderingSurface`] with nothing but an identity, a kind and a
/// lifecycle. Useful for hosts that track their views elsewhere, and for
/// tests.
///
/// ```rust
/// use formatmap::{RenderingSurface, TextSurface};
///
/// let surface = TextSurface::new("text editor");
/// assert!(!surface.is_destroyed());
/// surface.destroy();
/// assert!(surface.is_destroyed());
/// ```
#[derive(Debug)]
pub struct TextSurface {
    id: SurfaceId,
    kind: String,
    destroyed: Cell<bool>,
    on_destroyed: Event<SurfaceDestroyed>,
}

impl TextSurface {
    /// Creates a live surface with a fresh id.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_id(SurfaceId::next(), kind)
    }

    /// Creates a live surface with a caller-chosen id.
    pub fn with_id(id: SurfaceId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            destroyed: Cell::new(false),
            on_destroyed: Event::new(),
        }
    }

    /// Destroys the surface, firing the destroyed event. Later calls do
    /// nothing.
    pub fn destroy(&self) {
        if self.destroyed.replace(true) {
            return;
        }
        self.on_destroyed
            .emit(&SurfaceDestroyed { surface: self.id });
        self.on_destroyed.clear();
    }
}

impl RenderingSurface for TextSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    fn destroyed(&self) -> &Event<SurfaceDestroyed> {
        &self.on_destroyed
    }
}

impl Drop for TextSurface {
    fn drop(&mut self) {
        self.destroy();
    }
}
