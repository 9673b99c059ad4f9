// src/page.rs
use crate::config::Config;
use crate::gesture::{Disposition, GestureController, Modifiers, PointerInput};
use crate::registry::{ImageHandle, ImageRegistry};
use crate::style::ImageSurface;
use crate::tree::{collect_images, PageNode};

/// Owns the image registry and the gesture controller for one document.
#[derive(Debug, Default)]
pub struct Page {
    pub registry: ImageRegistry,
    pub controller: GestureController,
}

impl Page {
    pub fn new(config: &Config) -> Self {
        Self {
            registry: ImageRegistry::new(),
            controller: GestureController::new(config.z_index),
        }
    }

    /// Registering the same element twice yields a fresh handle and record.
    pub fn register(&mut self) -> ImageHandle {
        let handle = self.registry.register();
        log::debug!("registered image {:?}", handle);
        handle
    }

    /// Register every image under `root`, root included.
    pub fn scan<N: PageNode>(&mut self, root: &N) -> Vec<(N::Image, ImageHandle)> {
        collect_images(root)
            .into_iter()
            .map(|image| (image, self.register()))
            .collect()
    }

    /// Register the images brought in by one batch of inserted nodes.
    pub fn adopt_inserted<N: PageNode>(&mut self, nodes: &[N]) -> Vec<(N::Image, ImageHandle)> {
        nodes.iter().flat_map(|node| self.scan(node)).collect()
    }

    pub fn press<S: ImageSurface + ?Sized>(
        &mut self,
        handle: ImageHandle,
        surface: &S,
        input: PointerInput,
    ) -> Disposition {
        self.controller
            .press(&mut self.registry, handle, surface, input)
    }

    pub fn motion<S: ImageSurface + ?Sized>(
        &mut self,
        handle: ImageHandle,
        surface: &mut S,
        input: PointerInput,
    ) -> Disposition {
        self.controller
            .motion(&mut self.registry, handle, surface, input)
    }

    pub fn release(&mut self, handle: ImageHandle) -> Disposition {
        self.controller.release(handle)
    }

    pub fn leave(&mut self, handle: ImageHandle) -> Disposition {
        self.controller.leave(handle)
    }

    pub fn click(&mut self, handle: ImageHandle, modifiers: Modifiers) -> Disposition {
        self.controller.click(&self.registry, handle, modifiers)
    }

    pub fn double_click<S: ImageSurface + ?Sized>(
        &mut self,
        handle: ImageHandle,
        surface: &mut S,
        modifiers: Modifiers,
        viewport_height: f64,
    ) -> Disposition {
        self.controller.double_click(
            &mut self.registry,
            handle,
            surface,
            modifiers,
            viewport_height,
        )
    }

    pub fn context_menu<S: ImageSurface + ?Sized>(
        &mut self,
        handle: ImageHandle,
        surface: &mut S,
    ) -> Disposition {
        self.controller
            .context_menu(&mut self.registry, handle, surface)
    }

    #[cfg(test)]
    pub fn is_resized(&self, handle: ImageHandle) -> bool {
        self.registry
            .record(handle)
            .map(|record| record.resized)
            .unwrap_or(false)
    }
}
