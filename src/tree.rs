// src/tree.rs

/// A node of the page tree that may be, or may contain, image elements.
pub trait PageNode: Clone {
    type Image;

    fn as_image(&self) -> Option<Self::Image>;
    /// Direct children; empty for leaves and non-element nodes.
    fn children(&self) -> Vec<Self>;
}

/// Every image in `root`'s subtree, root included, in document order.
///
/// Shared by the initial page scan and the mutation observer.
pub fn collect_images<N: PageNode>(root: &N) -> Vec<N::Image> {
    let mut images = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if let Some(image) = node.as_image() {
            images.push(image);
            continue;
        }
        stack.extend(node.children().into_iter().rev());
    }

    images
}
