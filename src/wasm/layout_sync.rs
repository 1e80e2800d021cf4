//! DOM binding for the image / scroll panel height sync.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlImageElement, Window};

use super::dom::{self, Listener};
use crate::config::LayoutConfig;
use crate::constants::{
    LAYOUT_CONTAINER_SELECTOR, LAYOUT_IMAGE_SELECTOR, LAYOUT_WRAPPER_SELECTOR, SCROLL_CONTENT_CLASS,
};
use crate::error::Result;
use crate::layout_sync::{LayoutSync, PendingTimer, StylePlan};

/// Delay of the catch-up pass for late layout changes, in milliseconds
const LATE_SYNC_DELAY_MS: i32 = 200;

struct Syncer {
    sync: LayoutSync,
    window: Window,
    /// Set while a pass runs; the resize it dispatches must not start another
    syncing: Cell<bool>,
}

fn apply(plan: &StylePlan, container: &HtmlElement, content: &HtmlElement) -> Result<()> {
    dom::set_style(container, "height", plan.container_height.as_deref())?;
    dom::set_style(container, "overflow", plan.container_overflow)?;
    dom::set_style(content, "height", plan.content_height)?;
    dom::set_style(content, "overflow-y", plan.content_overflow_y)?;
    Ok(())
}

impl Syncer {
    fn run(&self) {
        if self.syncing.replace(true) {
            return;
        }
        if let Err(e) = self.sync_all() {
            log::warn!("Layout sync failed: {}", e);
        }
        // Let the curved scrollbars pick up the new box sizes
        match Event::new("resize") {
            Ok(event) => {
                if let Err(e) = self.window.dispatch_event(&event) {
                    log::debug!("Failed to dispatch resize: {:?}", e);
                }
            }
            Err(e) => log::debug!("Failed to create resize event: {:?}", e),
        }
        self.syncing.set(false);
    }

    fn sync_all(&self) -> Result<()> {
        let document = dom::document()?;
        let viewport_width = self
            .window
            .inner_width()?
            .as_f64()
            .unwrap_or_default();

        let mut synced = 0;
        for wrapper in dom::query_all(&document, LAYOUT_WRAPPER_SELECTOR)? {
            let image: Option<HtmlElement> = dom::query(&wrapper, LAYOUT_IMAGE_SELECTOR);
            let container: Option<HtmlElement> = dom::query(&wrapper, LAYOUT_CONTAINER_SELECTOR);
            let content: Option<HtmlElement> = container
                .as_ref()
                .and_then(|c| dom::query(c, &format!(".{}", SCROLL_CONTENT_CLASS)));
            let (Some(image), Some(container), Some(content)) = (image, container, content) else {
                continue;
            };

            let image_height = match image.client_height() {
                0 => image.get_bounding_client_rect().height(),
                h => h as f64,
            };
            apply(&self.sync.plan(viewport_width, image_height), &container, &content)?;
            synced += 1;
        }
        log::debug!(
            "Layout sync: {} wrapper(s), mobile={}",
            synced,
            self.sync.is_mobile(viewport_width)
        );
        Ok(())
    }
}

/// Live layout sync. Dropping it removes its listeners and cancels the
/// catch-up pass if it has not run yet.
pub struct LayoutSyncHandle {
    window: Window,
    timer: Rc<PendingTimer>,
    _listeners: Vec<Listener>,
    _late_pass: Closure<dyn FnMut()>,
}

impl Drop for LayoutSyncHandle {
    fn drop(&mut self) {
        if let Some(id) = self.timer.cancel() {
            self.window.clear_timeout_with_handle(id);
            log::debug!("Cancelled pending layout sync pass");
        }
    }
}

/// Keep the duo layouts' scroll panels as tall as their images on mobile.
pub fn init_layout_sync(config: &LayoutConfig) -> Result<LayoutSyncHandle> {
    let window = dom::window()?;
    let document = dom::document()?;
    let syncer = Rc::new(Syncer {
        sync: LayoutSync::new(*config),
        window: window.clone(),
        syncing: Cell::new(false),
    });

    let mut listeners = Vec::new();
    for event in ["resize", "orientationchange", "load"] {
        let syncer = syncer.clone();
        listeners.push(Listener::new(&window, event, move |_event: Event| syncer.run())?);
    }

    for wrapper in dom::query_all(&document, LAYOUT_WRAPPER_SELECTOR)? {
        let Some(image) = dom::query::<HtmlImageElement>(&wrapper, LAYOUT_IMAGE_SELECTOR) else {
            continue;
        };
        if !image.complete() {
            let syncer = syncer.clone();
            listeners.push(Listener::new(&image, "load", move |_event: Event| syncer.run())?);
        }
    }

    syncer.run();

    let timer = Rc::new(PendingTimer::new());
    let (late, fired) = (syncer.clone(), timer.clone());
    let late_pass = Closure::<dyn FnMut()>::new(move || {
        if fired.fire() {
            late.run();
        }
    });
    let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        late_pass.as_ref().unchecked_ref(),
        LATE_SYNC_DELAY_MS,
    )?;
    timer.arm(id);

    log::info!("Layout sync initialized");
    Ok(LayoutSyncHandle {
        window,
        timer,
        _listeners: listeners,
        _late_pass: late_pass,
    })
}
