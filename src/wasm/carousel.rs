//! DOM binding for the thumbnail carousel.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{
    CustomEvent, CustomEventInit, Document, Element, Event, HtmlElement, HtmlImageElement,
};

use super::dom::{self, Listener};
use crate::carousel::{
    Cell, CarouselEvent, GroupColumn, Pagination, StripMetrics, Thumbnail, ThumbnailCarousel,
};
use crate::config::CarouselConfig;
use crate::constants::{
    CAROUSEL_CONTAINER_ID, CAROUSEL_GRID_ID, CAROUSEL_PAGE_INDICATOR_ID, CAROUSEL_SELECTED_EVENT,
    CAROUSEL_TEXT_EVENT,
};
use crate::error::{Result, WidgetError};

struct CarouselView {
    carousel: ThumbnailCarousel,
    config: CarouselConfig,
    document: Document,
    grid: Element,
    container: Option<HtmlElement>,
    indicator: Option<Element>,
    /// Listeners on the rendered cells, replaced on every render
    cell_listeners: Vec<Listener>,
}

impl CarouselView {
    fn strip(&self) -> Option<StripMetrics> {
        let container = self.container.as_ref()?;
        Some(StripMetrics {
            scroll_left: container.scroll_left() as f64,
            scroll_width: container.scroll_width() as f64,
            client_width: container.client_width() as f64,
        })
    }

    fn show_page(&self, pagination: Pagination) {
        if let Some(indicator) = &self.indicator {
            indicator.set_text_content(Some(&pagination.label()));
        }
    }

    fn recalculate(&mut self) {
        if let Some(strip) = self.strip() {
            let pagination = self.carousel.on_resize(&strip);
            self.show_page(pagination);
        }
    }

    fn update_current(&mut self) {
        if let Some(strip) = self.strip() {
            let pagination = self.carousel.on_scroll(&strip);
            self.show_page(pagination);
        }
    }
}

type Shared = Rc<RefCell<CarouselView>>;

fn mark_active(document: &Document, id: &str) -> Result<()> {
    for item in dom::query_all(document, ".thumbnail-item.active")? {
        item.class_list().remove_1("active")?;
    }
    let selector = format!("[data-dancer-id=\"{}\"]", id.replace('"', "\\\""));
    if let Some(item) = document.query_selector(&selector)? {
        item.class_list().add_1("active")?;
    }
    Ok(())
}

fn dispatch_json<T: serde::Serialize>(document: &Document, name: &str, detail: &T) -> Result<()> {
    let json = serde_json::to_string(detail)?;
    let init = CustomEventInit::new();
    init.set_detail(&js_sys::JSON::parse(&json)?);
    let event = CustomEvent::new_with_event_init_dict(name, &init)?;
    document.dispatch_event(&event)?;
    Ok(())
}

#[derive(serde::Serialize)]
struct TextDetail<'a> {
    nom: &'a str,
    description: &'a str,
}

fn select(view: &Weak<RefCell<CarouselView>>, id: &str) {
    let Some(view) = view.upgrade() else {
        return;
    };
    let (document, event) = {
        let Ok(mut view) = view.try_borrow_mut() else {
            return;
        };
        (view.document.clone(), view.carousel.select(id))
    };
    let Some(CarouselEvent::Selected(entry)) = event else {
        log::warn!("Unknown thumbnail id: {}", id);
        return;
    };

    let result = mark_active(&document, &entry.id)
        .and_then(|()| dispatch_json(&document, CAROUSEL_SELECTED_EVENT, &entry))
        .and_then(|()| {
            dispatch_json(
                &document,
                CAROUSEL_TEXT_EVENT,
                &TextDetail {
                    nom: &entry.name,
                    description: &entry.description,
                },
            )
        });
    if let Err(e) = result {
        log::warn!("Failed to publish thumbnail selection: {}", e);
    }
}

fn on_click(
    target: &Element,
    view: &Weak<RefCell<CarouselView>>,
    id: &str,
    listeners: &mut Vec<Listener>,
) -> Result<()> {
    let (view, id) = (view.clone(), id.to_string());
    listeners.push(Listener::new(target, "click", move |_event: Event| {
        select(&view, &id);
    })?);
    Ok(())
}

fn placeholder_cell(
    document: &Document,
    label: &str,
    target: &Thumbnail,
    view: &Weak<RefCell<CarouselView>>,
    listeners: &mut Vec<Listener>,
) -> Result<Element> {
    let item = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WidgetError::Dom("placeholder is not an HTML element".into()))?;
    item.set_class_name("thumbnail-item placeholder-item");

    let content = document.create_element("div")?;
    content.set_class_name("placeholder-content");
    let text = document.create_element("span")?;
    text.set_class_name("placeholder-text");
    text.set_text_content(Some(label));
    content.append_child(&text)?;
    item.append_child(&content)?;

    for (property, value) in [
        ("cursor", "pointer"),
        ("display", "flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("background-color", "transparent"),
    ] {
        dom::set_style(&item, property, Some(value))?;
    }
    on_click(&item, view, &target.id, listeners)?;
    Ok(item.into())
}

fn thumbnail_cell(
    document: &Document,
    entry: &Thumbnail,
    index: usize,
    fallback: Option<&str>,
    view: &Weak<RefCell<CarouselView>>,
    listeners: &mut Vec<Listener>,
) -> Result<Element> {
    let item = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WidgetError::Dom("thumbnail is not an HTML element".into()))?;
    item.set_class_name("thumbnail-item");
    item.set_attribute("data-dancer-id", &entry.id)?;
    item.set_attribute("data-clickable", if entry.clickable { "true" } else { "false" })?;
    item.set_attribute("data-index", &index.to_string())?;

    let img = document
        .create_element("img")?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| WidgetError::Dom("img is not an image element".into()))?;
    img.set_src(&entry.thumbnail_image);
    img.set_alt(&entry.name);
    img.set_attribute("loading", "lazy")?;
    if let Some(fallback) = fallback {
        let (image, fallback) = (img.clone(), fallback.to_string());
        listeners.push(Listener::new(&img, "error", move |_event: Event| {
            // Only swap once, a broken fallback must not loop
            if image.get_attribute("src").as_deref() != Some(fallback.as_str()) {
                image.set_src(&fallback);
            }
        })?);
    }

    let overlay = document.create_element("div")?;
    overlay.set_class_name("thumbnail-overlay");
    overlay.set_text_content(Some(&entry.name));

    item.append_child(&img)?;
    item.append_child(&overlay)?;

    if entry.clickable {
        dom::set_style(&item, "cursor", Some("pointer"))?;
        on_click(&item, view, &entry.id, listeners)?;
    } else {
        dom::set_style(&item, "cursor", Some("default"))?;
        dom::set_style(&item, "opacity", Some("0.9"))?;
    }
    Ok(item.into())
}

fn column_element(
    document: &Document,
    column: &GroupColumn<'_>,
    config: &CarouselConfig,
    view: &Weak<RefCell<CarouselView>>,
    listeners: &mut Vec<Listener>,
) -> Result<Element> {
    let element = document.create_element("div")?;
    element.set_class_name("thumbnail-group-column");
    element.set_attribute("data-group", column.group.name())?;

    for cell in &column.cells {
        let child = match cell {
            Cell::Placeholder { target } => {
                placeholder_cell(document, &config.placeholder_label, target, view, listeners)?
            }
            Cell::Thumbnail { entry, index } => thumbnail_cell(
                document,
                entry,
                *index,
                config.fallback_image.as_deref(),
                view,
                listeners,
            )?,
        };
        element.append_child(&child)?;
    }
    Ok(element)
}

/// Live carousel bound to `#carouselGrid`.
pub struct CarouselHandle {
    view: Shared,
    _listeners: Vec<Listener>,
}

impl CarouselHandle {
    /// Rebuild the grid from `entries` and recount the pages.
    pub fn render(&self, entries: Vec<Thumbnail>) -> Result<()> {
        let weak = Rc::downgrade(&self.view);
        let mut view = self
            .view
            .try_borrow_mut()
            .map_err(|_| WidgetError::Dom("carousel is busy".into()))?;
        if !view.carousel.set_entries(entries) {
            return Ok(());
        }

        view.grid.set_inner_html("");
        let mut listeners = Vec::new();
        let columns = view.carousel.columns();
        for column in &columns {
            let element =
                column_element(&view.document, column, &view.config, &weak, &mut listeners)?;
            view.grid.append_child(&element)?;
        }
        let count = columns.len();
        drop(columns);

        view.cell_listeners = listeners;
        view.recalculate();
        log::info!("Rendered thumbnail grid with {} group(s)", count);
        Ok(())
    }

    /// Parse the page's JSON entries and render them.
    pub fn render_json(&self, json: &str) -> Result<()> {
        let entries = ThumbnailCarousel::entries_from_json(json)?;
        self.render(entries)
    }

    pub fn pagination(&self) -> Pagination {
        self.view
            .try_borrow()
            .map(|view| view.carousel.pagination())
            .unwrap_or_default()
    }
}

/// Bind the carousel elements. Fails if `#carouselGrid` is absent.
pub fn init_carousel(config: &CarouselConfig) -> Result<CarouselHandle> {
    let document = dom::document()?;
    let window = dom::window()?;

    let grid: Element = dom::by_id(&document, CAROUSEL_GRID_ID)
        .ok_or_else(|| WidgetError::missing(format!("#{}", CAROUSEL_GRID_ID)))?;
    let container: Option<HtmlElement> = dom::by_id(&document, CAROUSEL_CONTAINER_ID);
    let indicator: Option<Element> = dom::by_id(&document, CAROUSEL_PAGE_INDICATOR_ID);
    if container.is_none() {
        log::warn!("#{} not found, pagination disabled", CAROUSEL_CONTAINER_ID);
    }

    let view: Shared = Rc::new(RefCell::new(CarouselView {
        carousel: ThumbnailCarousel::new(),
        config: config.clone(),
        document,
        grid,
        container: container.clone(),
        indicator,
        cell_listeners: Vec::new(),
    }));

    let mut listeners = Vec::with_capacity(2);
    if let Some(container) = &container {
        let weak = Rc::downgrade(&view);
        listeners.push(Listener::new(container, "scroll", move |_event: Event| {
            if let Some(view) = weak.upgrade()
                && let Ok(mut view) = view.try_borrow_mut()
            {
                view.update_current();
            }
        })?);
    }
    let weak = Rc::downgrade(&view);
    listeners.push(Listener::new(&window, "resize", move |_event: Event| {
        if let Some(view) = weak.upgrade()
            && let Ok(mut view) = view.try_borrow_mut()
        {
            view.recalculate();
        }
    })?);

    log::info!("Thumbnail carousel initialized");
    Ok(CarouselHandle {
        view,
        _listeners: listeners,
    })
}
