//! Browser entry points.
//!
//! `start` runs when the module loads and wires every widget it finds once
//! the document is ready. The other exports let a page re-run one widget
//! with its own JSON configuration, feed the carousel its data, or tear
//! everything down again.

mod carousel;
mod dom;
mod layout_sync;
mod progress;
mod scrollbar;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Event;

use self::carousel::CarouselHandle;
use self::dom::Listener;
use self::layout_sync::LayoutSyncHandle;
use self::progress::ScrollProgressHandle;
use self::scrollbar::CurvedScrollbarHandle;
use crate::config::WidgetConfig;
use crate::error::Result;
use crate::logging::init_logging;

/// Handles of everything wired on the page. Dropping a handle unwires it.
#[derive(Default)]
struct Page {
    config: WidgetConfig,
    scrollbars: Vec<CurvedScrollbarHandle>,
    progress: Vec<ScrollProgressHandle>,
    carousel: Option<CarouselHandle>,
    layout: Option<LayoutSyncHandle>,
    ready: Option<Listener>,
}

thread_local! {
    static PAGE: RefCell<Page> = RefCell::new(Page::default());
}

/// Parse an optional JSON config, remembering it for later calls.
fn page_config(config_json: Option<String>) -> Result<WidgetConfig> {
    match config_json {
        Some(json) => {
            let config = WidgetConfig::from_json(&json)?;
            PAGE.with(|page| page.borrow_mut().config = config.clone());
            Ok(config)
        }
        None => Ok(PAGE.with(|page| page.borrow().config.clone())),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    init_logging(WidgetConfig::default().log_level);

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let ready = Listener::new(&document, "DOMContentLoaded", |_event: Event| {
            if let Err(e) = init_page(None) {
                log::error!("Widget initialization failed: {:?}", e);
            }
        })?;
        PAGE.with(|page| page.borrow_mut().ready = Some(ready));
        Ok(())
    } else {
        init_page(None)
    }
}

/// Wire every widget present on the page.
#[wasm_bindgen]
pub fn init_page(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = page_config(config_json)?;
    init_logging(config.log_level);

    // Layout first: it settles the box sizes the scrollbars are drawn from
    init_layout_sync(None)?;
    init_scrollbars(None)?;
    init_progress(None)?;
    if let Err(e) = init_carousel(None) {
        log::debug!("No thumbnail carousel on this page: {:?}", e);
    }
    Ok(())
}

/// Attach curved scrollbars to all `[data-scrollbar]` containers,
/// replacing any attached earlier.
#[wasm_bindgen]
pub fn init_scrollbars(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = page_config(config_json)?;
    PAGE.with(|page| page.borrow_mut().scrollbars.clear());
    let handles = scrollbar::init_scrollbars(&config.scrollbar)?;
    PAGE.with(|page| page.borrow_mut().scrollbars = handles);
    Ok(())
}

/// Bind the progress bar and/or ring.
#[wasm_bindgen]
pub fn init_progress(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = page_config(config_json)?;
    PAGE.with(|page| page.borrow_mut().progress.clear());
    let handles = progress::init_progress(&config.progress)?;
    PAGE.with(|page| page.borrow_mut().progress = handles);
    Ok(())
}

/// Bind the thumbnail carousel. Errors if the page has no `#carouselGrid`.
#[wasm_bindgen]
pub fn init_carousel(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = page_config(config_json)?;
    let previous = PAGE.with(|page| page.borrow_mut().carousel.take());
    drop(previous);
    let handle = carousel::init_carousel(&config.carousel)?;
    PAGE.with(|page| page.borrow_mut().carousel = Some(handle));
    Ok(())
}

/// Render thumbnail entries (a JSON array) into the carousel, binding it
/// first if needed.
#[wasm_bindgen]
pub fn render_thumbnails(json: &str) -> std::result::Result<(), JsValue> {
    if PAGE.with(|page| page.borrow().carousel.is_none()) {
        init_carousel(None)?;
    }
    // Take the handle out so DOM work runs without the registry borrowed
    let Some(handle) = PAGE.with(|page| page.borrow_mut().carousel.take()) else {
        return Ok(());
    };
    let result = handle.render_json(json);
    PAGE.with(|page| page.borrow_mut().carousel = Some(handle));
    result.map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn carousel_current_page() -> u32 {
    PAGE.with(|page| {
        page.borrow()
            .carousel
            .as_ref()
            .map_or(1, |c| c.pagination().current_page)
    })
}

#[wasm_bindgen]
pub fn carousel_total_pages() -> u32 {
    PAGE.with(|page| {
        page.borrow()
            .carousel
            .as_ref()
            .map_or(1, |c| c.pagination().total_pages)
    })
}

/// Sync duo layout heights on mobile.
#[wasm_bindgen]
pub fn init_layout_sync(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = page_config(config_json)?;
    let previous = PAGE.with(|page| page.borrow_mut().layout.take());
    drop(previous);
    let handle = layout_sync::init_layout_sync(&config.layout)?;
    PAGE.with(|page| page.borrow_mut().layout = Some(handle));
    Ok(())
}

/// Remove every widget's listeners and injected elements.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|page| std::mem::take(&mut *page.borrow_mut()));
    log::info!(
        "Tearing down {} scrollbar(s), {} progress indicator(s)",
        page.scrollbars.len(),
        page.progress.len()
    );
    for handle in page.scrollbars {
        handle.detach();
    }
    drop(page.progress);
    drop(page.carousel);
    drop(page.layout);
}
