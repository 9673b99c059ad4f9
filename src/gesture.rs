// src/gesture.rs
use std::collections::HashMap;

use crate::geometry::{drag_distance, px, scaled_width, Point};
use crate::registry::{ImageHandle, ImageRegistry};
use crate::style::{ImageSurface, StyleProperty};

pub const PRIMARY_BUTTON: i16 = 0;
pub const DEFAULT_Z_INDEX: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl (or Cmd on Mac) hands the gesture back to the browser.
    pub fn bypass(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    pub client: Point,
    pub button: i16,
    pub modifiers: Modifiers,
}

#[cfg(test)]
impl PointerInput {
    pub fn primary(client: Point) -> Self {
        Self {
            client,
            button: PRIMARY_BUTTON,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }
}

/// What the host should do with the browser event after handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the browser run its default action.
    Default,
    /// Prevent the default action, keep propagating.
    PreventDefault,
    /// Prevent the default action and stop propagation.
    Suppress,
}

/// Baseline of one press-drag-release cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub initial_distance: f64,
    pub initial_width: f64,
}

/// Per-image resize state machine.
///
/// Each image is `Idle` unless it has an entry in `sessions`, in which case
/// it is `Dragging`. Restore and fit-to-viewport are one-shot actions.
#[derive(Debug)]
pub struct GestureController {
    z_index: String,
    sessions: HashMap<ImageHandle, DragSession>,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(DEFAULT_Z_INDEX)
    }
}

impl GestureController {
    pub fn new(z_index: i32) -> Self {
        Self {
            z_index: z_index.to_string(),
            sessions: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn is_dragging(&self, handle: ImageHandle) -> bool {
        self.sessions.contains_key(&handle)
    }

    // ------ PRESS ------
    pub fn press<S: ImageSurface + ?Sized>(
        &mut self,
        registry: &mut ImageRegistry,
        handle: ImageHandle,
        surface: &S,
        input: PointerInput,
    ) -> Disposition {
        if input.modifiers.bypass() || input.button != PRIMARY_BUTTON {
            return Disposition::Default;
        }
        let Some(record) = registry.record_mut(handle) else {
            return Disposition::Default;
        };

        if record.capture_once(surface) {
            log::debug!("captured original style for image {:?}", handle);
        }

        self.sessions.insert(
            handle,
            DragSession {
                initial_distance: drag_distance(input.client, surface.origin()),
                initial_width: surface.rendered_width(),
            },
        );

        Disposition::PreventDefault
    }

    // ------ DRAG MOVE ------
    pub fn motion<S: ImageSurface + ?Sized>(
        &mut self,
        registry: &mut ImageRegistry,
        handle: ImageHandle,
        surface: &mut S,
        input: PointerInput,
    ) -> Disposition {
        let Some(session) = self.sessions.get(&handle) else {
            return Disposition::Default;
        };
        let distance = drag_distance(input.client, surface.origin());
        let Some(width) = scaled_width(session.initial_width, session.initial_distance, distance)
        else {
            return Disposition::Default;
        };
        let Some(record) = registry.record_mut(handle) else {
            return Disposition::Default;
        };

        let width = px(width);
        surface.set_style(StyleProperty::MaxWidth, &width);
        surface.set_style(StyleProperty::Width, &width);
        surface.set_style(StyleProperty::MaxHeight, "");
        surface.set_style(StyleProperty::Height, "auto");
        surface.set_style(StyleProperty::ZIndex, &self.z_index);
        if surface.style(StyleProperty::Position).is_empty() {
            surface.set_style(StyleProperty::Position, "relative");
        }

        record.resized = true;
        Disposition::Default
    }

    // ------ DRAG END ------
    pub fn release(&mut self, handle: ImageHandle) -> Disposition {
        self.sessions.remove(&handle);
        Disposition::Default
    }

    pub fn leave(&mut self, handle: ImageHandle) -> Disposition {
        self.sessions.remove(&handle);
        Disposition::Default
    }

    /// Ends the drag. A click on a resized image is swallowed so a wrapping
    /// link does not navigate away.
    pub fn click(
        &mut self,
        registry: &ImageRegistry,
        handle: ImageHandle,
        modifiers: Modifiers,
    ) -> Disposition {
        self.sessions.remove(&handle);
        if modifiers.bypass() {
            return Disposition::Default;
        }
        match registry.record(handle) {
            Some(record) if record.resized => Disposition::Suppress,
            _ => Disposition::Default,
        }
    }

    // ------ FIT TO VIEWPORT ------
    pub fn double_click<S: ImageSurface + ?Sized>(
        &mut self,
        registry: &mut ImageRegistry,
        handle: ImageHandle,
        surface: &mut S,
        modifiers: Modifiers,
        viewport_height: f64,
    ) -> Disposition {
        if modifiers.bypass() {
            return Disposition::Default;
        }
        let Some(record) = registry.record_mut(handle) else {
            return Disposition::Default;
        };
        self.sessions.remove(&handle);

        if record.resized {
            // A stale max-width survives otherwise and caps the fitted image.
            if let Some(snapshot) = &record.snapshot {
                surface.set_style(StyleProperty::MaxWidth, &snapshot.width);
                surface.set_style(StyleProperty::Width, &snapshot.width);
            }
        }

        let height = px(viewport_height);
        surface.set_style(StyleProperty::Position, "fixed");
        surface.set_style(StyleProperty::ZIndex, &self.z_index);
        surface.set_style(StyleProperty::Top, "0");
        surface.set_style(StyleProperty::Left, "0");
        // `auto` is not a max-width keyword; `none` lifts the cap.
        surface.set_style(StyleProperty::MaxWidth, "none");
        surface.set_style(StyleProperty::Width, "auto");
        surface.set_style(StyleProperty::MaxHeight, &height);
        surface.set_style(StyleProperty::Height, &height);

        record.resized = true;
        Disposition::Suppress
    }

    // ------ RESTORE ------
    pub fn context_menu<S: ImageSurface + ?Sized>(
        &mut self,
        registry: &mut ImageRegistry,
        handle: ImageHandle,
        surface: &mut S,
    ) -> Disposition {
        let Some(record) = registry.record_mut(handle) else {
            return Disposition::Default;
        };
        if !record.resized {
            return Disposition::Default;
        }

        record.resized = false;
        match &record.snapshot {
            Some(snapshot) => snapshot.apply(surface),
            None => log::warn!("image {:?} resized without a style snapshot", handle),
        }

        Disposition::Suppress
    }
}
