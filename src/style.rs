// src/style.rs
use crate::geometry::Point;

/// Inline style properties the resizer reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Width,
    Height,
    MaxWidth,
    MaxHeight,
    Position,
    ZIndex,
    Top,
    Left,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::MaxWidth => "max-width",
            StyleProperty::MaxHeight => "max-height",
            StyleProperty::Position => "position",
            StyleProperty::ZIndex => "z-index",
            StyleProperty::Top => "top",
            StyleProperty::Left => "left",
        }
    }
}

/// The inline style an image had before it was first resized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSnapshot {
    pub width: String,
    pub height: String,
    pub position: String,
    pub z_index: String,
}

impl StyleSnapshot {
    pub fn capture<S: ImageSurface + ?Sized>(surface: &S) -> Self {
        Self {
            width: surface.style(StyleProperty::Width),
            height: surface.style(StyleProperty::Height),
            position: surface.style(StyleProperty::Position),
            z_index: surface.style(StyleProperty::ZIndex),
        }
    }

    /// Write the snapshot back. `max-width`/`max-height` follow
    /// `width`/`height` so a fit-to-viewport cap does not linger.
    pub fn apply<S: ImageSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_style(StyleProperty::ZIndex, &self.z_index);
        surface.set_style(StyleProperty::MaxWidth, &self.width);
        surface.set_style(StyleProperty::Width, &self.width);
        surface.set_style(StyleProperty::MaxHeight, &self.height);
        surface.set_style(StyleProperty::Height, &self.height);
        surface.set_style(StyleProperty::Position, &self.position);
    }
}

/// An image element as seen by the gesture controller.
pub trait ImageSurface {
    /// Current inline value, empty when unset.
    fn style(&self, property: StyleProperty) -> String;
    fn set_style(&mut self, property: StyleProperty, value: &str);
    /// Rendered width in CSS pixels.
    fn rendered_width(&self) -> f64;
    /// Top-left corner of the bounding box in client coordinates.
    fn origin(&self) -> Point;
}
