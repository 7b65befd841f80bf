//! Named mount points that primitives are drawn onto.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::primitives::Primitive;
use super::SectionId;

/// A rendering backend bound to one mount point.
#[cfg_attr(test, mockall::automock)]
pub trait RenderSurface: Send {
    /// Draw one primitive. An error fails the current section only.
    fn draw(&mut self, primitive: &Primitive) -> anyhow::Result<()>;
}

/// Shared log of everything a [`RecordingSurface`] has drawn.
pub type DrawLog = Arc<Mutex<Vec<Primitive>>>;

/// Surface that keeps every primitive it is asked to draw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    log: DrawLog,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the draw log, usable after the surface is moved into a set.
    pub fn log(&self) -> DrawLog {
        Arc::clone(&self.log)
    }
}

impl RenderSurface for RecordingSurface {
    fn draw(&mut self, primitive: &Primitive) -> anyhow::Result<()> {
        let mut log = self
            .log
            .lock()
            .map_err(|_| anyhow::anyhow!("draw log poisoned"))?;
        log.push(primitive.clone());
        Ok(())
    }
}

/// Mount points available to a render pass, keyed by name.
#[derive(Default)]
pub struct RenderTargetSet {
    surfaces: BTreeMap<String, Box<dyn RenderSurface>>,
}

impl std::fmt::Debug for RenderTargetSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderTargetSet")
            .field("targets", &self.surfaces.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl RenderTargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One recording surface for each default section target.
    pub fn standard() -> Self {
        let mut set = Self::new();
        for section in SectionId::ALL {
            set.insert(section.default_target(), RecordingSurface::new());
        }
        set
    }

    /// Add or replace a mount point.
    pub fn insert(&mut self, name: impl Into<String>, surface: impl RenderSurface + 'static) {
        self.surfaces.insert(name.into(), Box::new(surface));
    }

    /// Remove a mount point, returning whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.surfaces.remove(name).is_some()
    }

    /// Builder form of [`remove`](Self::remove).
    pub fn without(mut self, name: &str) -> Self {
        self.remove(name);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.surfaces.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut (dyn RenderSurface + 'static)> {
        self.surfaces.get_mut(name).map(|surface| &mut **surface)
    }
}
