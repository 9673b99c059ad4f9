// src/dom.rs
use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, document_element};
use js_sys::{Array, Function, WeakMap};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Event, HtmlImageElement, MouseEvent, MutationObserver, MutationObserverInit, MutationRecord,
    Node,
};

use crate::config::Config;
use crate::error::Error;
use crate::geometry::Point;
use crate::gesture::{Disposition, Modifiers, PointerInput};
use crate::page::Page;
use crate::registry::ImageHandle;
use crate::style::{ImageSurface, StyleProperty};
use crate::tree::PageNode;
use crate::utils::viewport_height;

/// An `<img>` element driven through its inline style.
pub struct DomImage(HtmlImageElement);

impl ImageSurface for DomImage {
    fn style(&self, property: StyleProperty) -> String {
        self.0
            .style()
            .get_property_value(property.css_name())
            .unwrap_or_default()
    }

    fn set_style(&mut self, property: StyleProperty, value: &str) {
        if let Err(e) = self.0.style().set_property(property.css_name(), value) {
            log::warn!("Failed to set {} = {}: {:?}", property.css_name(), value, e);
        }
    }

    fn rendered_width(&self) -> f64 {
        f64::from(self.0.width())
    }

    fn origin(&self) -> Point {
        let rect = self.0.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }
}

#[derive(Clone)]
struct DomNode(Node);

impl PageNode for DomNode {
    type Image = HtmlImageElement;

    fn as_image(&self) -> Option<HtmlImageElement> {
        self.0.dyn_ref::<HtmlImageElement>().cloned()
    }

    fn children(&self) -> Vec<DomNode> {
        let list = self.0.child_nodes();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(DomNode)
            .collect()
    }
}

/// Page state plus the element -> handle association.
///
/// The association lives in a `WeakMap` so it stays off the element's own
/// properties and goes away with the element.
struct Resizer {
    page: RefCell<Page>,
    handles: WeakMap,
    bindings: RefCell<Vec<Binding>>,
}

/// One listener shared by every image. It finds its image through
/// `currentTarget`, so no element is held from Rust.
struct Binding {
    event_type: &'static str,
    capture: bool,
    callback: Function,
}

impl Resizer {
    fn new(config: &Config) -> Rc<Self> {
        let resizer = Rc::new(Self {
            page: RefCell::new(Page::new(config)),
            handles: WeakMap::new(),
            bindings: RefCell::new(Vec::new()),
        });
        *resizer.bindings.borrow_mut() = bindings(&resizer);
        resizer
    }

    fn handle_of(&self, image: &HtmlImageElement) -> Option<ImageHandle> {
        self.handles
            .get(image)
            .as_f64()
            .map(|handle| ImageHandle(handle as usize))
    }

    fn adopt(&self, nodes: &[DomNode]) {
        let adopted = self.page.borrow_mut().adopt_inserted(nodes);
        for (image, handle) in adopted {
            self.attach(&image, handle);
        }
    }

    /// The browser ignores a listener already present with the same
    /// callback and phase, so re-attaching never doubles the handlers.
    fn attach(&self, image: &HtmlImageElement, handle: ImageHandle) {
        self.handles
            .set(image, &JsValue::from_f64(handle.0 as f64));

        for binding in self.bindings.borrow().iter() {
            if let Err(e) = image.add_event_listener_with_callback_and_bool(
                binding.event_type,
                &binding.callback,
                binding.capture,
            ) {
                log::warn!("Failed to bind {} on image: {:?}", binding.event_type, e);
            }
        }
    }
}

/// Make every current and future image on the page resizable.
pub fn install(config: &Config) -> Result<(), Error> {
    let resizer = Resizer::new(config);
    let root: Node = document_element().into();

    let found = resizer.page.borrow_mut().scan(&DomNode(root.clone()));
    log::info!("Found {} images on page", found.len());
    for (image, handle) in found {
        resizer.attach(&image, handle);
    }

    observe(&resizer, &root)?;
    suppress_native_drag();
    Ok(())
}

const CAPTURE: bool = true;
const BUBBLE: bool = false;

fn bindings(resizer: &Rc<Resizer>) -> Vec<Binding> {
    vec![
        // ------ DRAG START ------
        binding(resizer, "mousedown", CAPTURE, |page, handle, surface, event| {
            page.press(handle, &*surface, pointer_input(event))
        }),
        // ------ RESTORE ------
        binding(resizer, "contextmenu", CAPTURE, |page, handle, surface, _| {
            page.context_menu(handle, surface)
        }),
        // ------ FIT TO VIEWPORT ------
        binding(resizer, "dblclick", CAPTURE, |page, handle, surface, event| {
            page.double_click(handle, surface, modifiers(event), viewport_height())
        }),
        // ------ DRAG MOVE ------
        binding(resizer, "mousemove", BUBBLE, |page, handle, surface, event| {
            page.motion(handle, surface, pointer_input(event))
        }),
        // ------ DRAG END ------
        binding(resizer, "mouseout", BUBBLE, |page, handle, _, _| {
            page.leave(handle)
        }),
        binding(resizer, "mouseup", CAPTURE, |page, handle, _, _| {
            page.release(handle)
        }),
        binding(resizer, "click", BUBBLE, |page, handle, _, event| {
            page.click(handle, modifiers(event))
        }),
    ]
}

/// Wrap `handler` in a JS function that lives as long as the page's
/// listeners reference it.
fn binding<F>(
    resizer: &Rc<Resizer>,
    event_type: &'static str,
    capture: bool,
    handler: F,
) -> Binding
where
    F: Fn(&mut Page, ImageHandle, &mut DomImage, &MouseEvent) -> Disposition + 'static,
{
    let resizer = resizer.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(mouse_event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(image) = bound_image(&event) else {
            return;
        };
        let Some(handle) = resizer.handle_of(&image) else {
            return;
        };
        let mut surface = DomImage(image);
        let disposition = {
            let mut page = resizer.page.borrow_mut();
            handler(&mut *page, handle, &mut surface, mouse_event)
        };
        apply(&event, disposition);
    });

    Binding {
        event_type,
        capture,
        callback: callback.into_js_value().unchecked_into(),
    }
}

fn bound_image(event: &Event) -> Option<HtmlImageElement> {
    event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
}

fn apply(event: &Event, disposition: Disposition) {
    match disposition {
        Disposition::Default => {}
        Disposition::PreventDefault => event.prevent_default(),
        Disposition::Suppress => {
            event.prevent_default();
            event.stop_propagation();
        }
    }
}

fn modifiers(event: &MouseEvent) -> Modifiers {
    Modifiers {
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
    }
}

fn pointer_input(event: &MouseEvent) -> PointerInput {
    PointerInput {
        client: Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
        button: event.button(),
        modifiers: modifiers(event),
    }
}

/// Feed images inserted after load through the same registration path.
fn observe(resizer: &Rc<Resizer>, root: &Node) -> Result<(), Error> {
    let resizer = resizer.clone();
    let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
        move |records: Array, _observer: MutationObserver| {
            let added: Vec<DomNode> = records
                .iter()
                .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
                .filter(|record| record.type_() == "childList")
                .flat_map(|record| {
                    let list = record.added_nodes();
                    (0..list.length())
                        .filter_map(|i| list.item(i))
                        .collect::<Vec<_>>()
                })
                .map(DomNode)
                .collect();

            if !added.is_empty() {
                resizer.adopt(&added);
            }
        },
    );

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    init.set_attributes(true);
    init.set_attribute_old_value(true);
    init.set_character_data(true);
    init.set_character_data_old_value(true);
    observer.observe_with_options(root, &init)?;

    // The observer stays registered on the document; the callback must outlive us.
    callback.forget();
    log::debug!("Watching document for inserted images");
    Ok(())
}

fn suppress_native_drag() {
    EventListener::new_with_options(
        &document(),
        "dragstart",
        EventListenerOptions::enable_prevent_default(),
        |event: &Event| event.prevent_default(),
    )
    .forget();
}
