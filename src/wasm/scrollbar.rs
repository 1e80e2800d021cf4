//! DOM binding for the curved scrollbar.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, PointerEvent};

use super::dom::{self, Listener};
use crate::config::ScrollbarConfig;
use crate::constants::{
    SCROLLBAR_ATTR, SCROLLBAR_SVG_CLASS, SCROLLBAR_THUMB_CLASS, SCROLLBAR_TRACK_CLASS,
    SCROLL_CONTENT_CLASS, SVG_NS,
};
use crate::error::{Result, WidgetError};
use crate::scrollbar::{
    attach_each, parse_css_px, ContainerMetrics, ContentMetrics, CurvedScrollbar, ScrollHost,
    ScrollbarEvent, ViewportRect,
};

/// [`ScrollHost`] over a container, its content and the injected SVG paths.
struct DomScrollHost {
    container: HtmlElement,
    content: HtmlElement,
    track: Element,
    thumb: Element,
}

impl ScrollHost for DomScrollHost {
    fn container(&self) -> ContainerMetrics {
        let border_radius = web_sys::window()
            .and_then(|w| w.get_computed_style(&self.container).ok().flatten())
            .and_then(|style| style.get_property_value("border-radius").ok())
            .map(|value| parse_css_px(&value))
            .unwrap_or(0.0);
        ContainerMetrics {
            width: self.container.client_width() as f64,
            height: self.container.client_height() as f64,
            border_radius,
        }
    }

    fn content(&self) -> ContentMetrics {
        ContentMetrics {
            client_height: self.content.client_height() as f64,
            scroll_height: self.content.scroll_height() as f64,
            scroll_top: self.content.scroll_top() as f64,
        }
    }

    fn container_rect(&self) -> ViewportRect {
        let rect = self.container.get_bounding_client_rect();
        ViewportRect {
            top: rect.top(),
            height: rect.height(),
        }
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        self.content.set_scroll_top(scroll_top.round() as i32);
    }

    fn set_track_path(&mut self, d: &str) {
        if let Err(e) = self.track.set_attribute("d", d) {
            log::warn!("Failed to update scrollbar track: {:?}", e);
        }
    }

    fn set_thumb_path(&mut self, d: &str) {
        if let Err(e) = self.thumb.set_attribute("d", d) {
            log::warn!("Failed to update scrollbar thumb: {:?}", e);
        }
    }

    fn capture_pointer(&mut self, pointer_id: i32) -> Result<()> {
        self.thumb.set_pointer_capture(pointer_id)?;
        Ok(())
    }

    fn release_pointer(&mut self, pointer_id: i32) -> Result<()> {
        self.thumb.release_pointer_capture(pointer_id)?;
        Ok(())
    }
}

/// One scrollbar's controller and host, shared by its listeners.
struct Instance {
    scrollbar: CurvedScrollbar,
    host: DomScrollHost,
}

type Shared = Rc<RefCell<Instance>>;

fn dispatch(instance: &Shared, event: ScrollbarEvent) -> bool {
    // A handler that re-enters (e.g. a synchronously dispatched resize) is dropped
    let Ok(mut guard) = instance.try_borrow_mut() else {
        log::debug!("Scrollbar busy, skipping {:?}", event);
        return false;
    };
    let Instance { scrollbar, host } = &mut *guard;
    scrollbar.handle(host, event)
}

fn pointer_id(event: &Event) -> Option<i32> {
    event.dyn_ref::<PointerEvent>().map(|e| e.pointer_id())
}

/// Live scrollbar on a page. Dropping it removes the listeners and the SVG.
pub struct CurvedScrollbarHandle {
    svg: Element,
    _listeners: Vec<Listener>,
    _instance: Shared,
}

impl CurvedScrollbarHandle {
    /// Remove the scrollbar from the page.
    pub fn detach(self) {
        // Dropping `self` removes the listeners and the SVG
    }
}

impl Drop for CurvedScrollbarHandle {
    fn drop(&mut self) {
        self.svg.remove();
    }
}

fn create_svg(document: &Document, tag: &str, class: &str) -> Result<Element> {
    let element = document.create_element_ns(Some(SVG_NS), tag)?;
    element.class_list().add_1(class)?;
    Ok(element)
}

/// Scrollbar settings for one container: its `data-scrollbar` JSON if any,
/// otherwise the page default.
fn container_config(container: &Element, default: &ScrollbarConfig) -> ScrollbarConfig {
    match container.get_attribute(SCROLLBAR_ATTR) {
        Some(json) if !json.trim().is_empty() => match ScrollbarConfig::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid {} value: {}", SCROLLBAR_ATTR, e);
                *default
            }
        },
        _ => *default,
    }
}

/// Attach a curved scrollbar to one container.
pub fn attach(container: HtmlElement, config: &ScrollbarConfig) -> Result<CurvedScrollbarHandle> {
    let content: HtmlElement = dom::query(&container, &format!(".{}", SCROLL_CONTENT_CLASS))
        .ok_or_else(|| WidgetError::missing(format!(".{}", SCROLL_CONTENT_CLASS)))?;
    let config = container_config(&container, config);

    let document = dom::document()?;
    let window = dom::window()?;

    let svg = create_svg(&document, "svg", SCROLLBAR_SVG_CLASS)?;
    svg.set_attribute("aria-hidden", "true")?;
    let track = create_svg(&document, "path", SCROLLBAR_TRACK_CLASS)?;
    let thumb = create_svg(&document, "path", SCROLLBAR_THUMB_CLASS)?;
    svg.append_child(&track)?;
    svg.append_child(&thumb)?;
    container.append_child(&svg)?;

    let mut host = DomScrollHost {
        container: container.clone(),
        content: content.clone(),
        track,
        thumb: thumb.clone(),
    };
    let scrollbar = CurvedScrollbar::attach(config, &mut host);
    let instance: Shared = Rc::new(RefCell::new(Instance { scrollbar, host }));

    let mut listeners = Vec::with_capacity(6);

    let inst = instance.clone();
    listeners.push(Listener::new(&thumb, "pointerdown", move |event: Event| {
        event.prevent_default();
        if let Some(pointer_id) = pointer_id(&event) {
            dispatch(&inst, ScrollbarEvent::PointerDown { pointer_id });
        }
    })?);

    let inst = instance.clone();
    listeners.push(Listener::new(&window, "pointermove", move |event: Event| {
        let Some(pointer_id) = pointer_id(&event) else {
            return;
        };
        let client_y = event
            .dyn_ref::<MouseEvent>()
            .map_or(0.0, |e| e.client_y() as f64);
        dispatch(
            &inst,
            ScrollbarEvent::PointerMove {
                pointer_id,
                client_y,
            },
        );
    })?);

    let inst = instance.clone();
    listeners.push(Listener::new(&window, "pointerup", move |event: Event| {
        if let Some(pointer_id) = pointer_id(&event) {
            dispatch(&inst, ScrollbarEvent::PointerUp { pointer_id });
        }
    })?);

    let inst = instance.clone();
    listeners.push(Listener::new(&thumb, "lostpointercapture", move |event: Event| {
        if let Some(pointer_id) = pointer_id(&event) {
            dispatch(&inst, ScrollbarEvent::PointerCaptureLost { pointer_id });
        }
    })?);

    let inst = instance.clone();
    listeners.push(Listener::new(&content, "scroll", move |_event: Event| {
        dispatch(&inst, ScrollbarEvent::Scrolled);
    })?);

    let inst = instance.clone();
    listeners.push(Listener::new(&window, "resize", move |_event: Event| {
        dispatch(&inst, ScrollbarEvent::Resized);
    })?);

    Ok(CurvedScrollbarHandle {
        svg,
        _listeners: listeners,
        _instance: instance,
    })
}

/// Attach scrollbars to every `[data-scrollbar]` container on the page.
///
/// Containers without a content element are skipped with a warning.
pub fn init_scrollbars(config: &ScrollbarConfig) -> Result<Vec<CurvedScrollbarHandle>> {
    let document = dom::document()?;
    let containers = dom::query_all(&document, &format!("[{}]", SCROLLBAR_ATTR))?;

    let containers = containers
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok());
    let handles = attach_each(containers, |container| attach(container, config));
    log::info!("Initialized {} curved scrollbar(s)", handles.len());
    Ok(handles)
}
