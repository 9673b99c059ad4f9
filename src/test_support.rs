// src/test_support.rs
use std::collections::HashMap;

use crate::geometry::Point;
use crate::style::{ImageSurface, StyleProperty};
use crate::tree::PageNode;

/// In-memory image with an inline style map and a write log.
///
/// Like a browser, it drops values a property does not accept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockImage {
    styles: HashMap<StyleProperty, String>,
    writes: Vec<(StyleProperty, String)>,
    width: f64,
    origin: Point,
}

impl MockImage {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Preset a style without recording it as a write.
    pub fn with_style(mut self, property: StyleProperty, value: &str) -> Self {
        self.styles.insert(property, value.to_string());
        self
    }

    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_rendered_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn writes_to(&self, property: StyleProperty) -> Vec<&str> {
        self.writes
            .iter()
            .filter(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

impl ImageSurface for MockImage {
    fn style(&self, property: StyleProperty) -> String {
        self.styles.get(&property).cloned().unwrap_or_default()
    }

    fn set_style(&mut self, property: StyleProperty, value: &str) {
        if !accepts(property, value) {
            return;
        }
        self.styles.insert(property, value.to_string());
        self.writes.push((property, value.to_string()));
    }

    fn rendered_width(&self) -> f64 {
        self.width
    }

    fn origin(&self) -> Point {
        self.origin
    }
}

fn accepts(property: StyleProperty, value: &str) -> bool {
    !matches!(
        (property, value),
        (StyleProperty::MaxWidth | StyleProperty::MaxHeight, "auto")
    )
}

/// Minimal page tree: elements, images and text leaves.
#[derive(Debug, Clone)]
pub enum MockNode {
    Element(Vec<MockNode>),
    Image(MockImage),
    Text,
}

impl MockNode {
    pub fn element(children: Vec<MockNode>) -> Self {
        MockNode::Element(children)
    }

    pub fn image(image: MockImage) -> Self {
        MockNode::Image(image)
    }

    pub fn text() -> Self {
        MockNode::Text
    }
}

impl PageNode for MockNode {
    type Image = MockImage;

    fn as_image(&self) -> Option<MockImage> {
        match self {
            MockNode::Image(image) => Some(image.clone()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<MockNode> {
        match self {
            MockNode::Element(children) => children.clone(),
            _ => Vec::new(),
        }
    }
}
