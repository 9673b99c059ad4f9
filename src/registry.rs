// src/registry.rs
use crate::style::{ImageSurface, StyleSnapshot};

/// Index of an image's record in the [`ImageRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageHandle(pub usize);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageRecord {
    pub resized: bool,
    /// Filled on the first press, kept until the record is replaced.
    pub snapshot: Option<StyleSnapshot>,
}

impl ImageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current style unless a snapshot already exists.
    /// Returns `true` when a snapshot was taken.
    pub fn capture_once<S: ImageSurface + ?Sized>(&mut self, surface: &S) -> bool {
        if self.snapshot.is_some() {
            return false;
        }
        self.snapshot = Some(StyleSnapshot::capture(surface));
        true
    }
}

/// Growable handle -> record table. Handles are never reused.
#[derive(Debug, Default)]
pub struct ImageRegistry {
    records: Vec<ImageRecord>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> ImageHandle {
        let handle = ImageHandle(self.records.len());
        self.records.push(ImageRecord::new());
        handle
    }

    pub fn record(&self, handle: ImageHandle) -> Option<&ImageRecord> {
        self.records.get(handle.0)
    }

    pub fn record_mut(&mut self, handle: ImageHandle) -> Option<&mut ImageRecord> {
        self.records.get_mut(handle.0)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
