//! DOM binding for the scroll progress bar and ring.

use std::rc::Rc;

use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::dom::{self, Listener};
use crate::config::ProgressConfig;
use crate::constants::{PROGRESS_BAR_ID, PROGRESS_RING_ID};
use crate::error::Result;
use crate::progress::{PageMetrics, ProgressStyle, ScrollProgress};

/// Live progress indicator. Dropping it removes its listeners.
pub struct ScrollProgressHandle {
    _listeners: Vec<Listener>,
}

fn page_metrics(window: &Window) -> PageMetrics {
    let Some(document) = window.document() else {
        return PageMetrics::default();
    };
    let root = document.document_element();
    let body_scroll = document.body().map_or(0, |b| b.scroll_top());
    let root_scroll = root.as_ref().map_or(0, |r| r.scroll_top());
    PageMetrics {
        scroll_top: root_scroll.max(body_scroll) as f64,
        scroll_height: root.as_ref().map_or(0, |r| r.scroll_height()) as f64,
        client_height: root.as_ref().map_or(0, |r| r.client_height()) as f64,
    }
}

fn render(progress: &ScrollProgress, element: &HtmlElement, window: &Window) {
    let state = progress.update(&page_metrics(window));
    let result = match progress.style() {
        ProgressStyle::Bar => dom::set_style(element, "width", Some(&progress.bar_width(&state))),
        ProgressStyle::Ring => {
            dom::set_style(element, "display", Some(progress.ring_display(&state))).and_then(
                |()| {
                    dom::set_style(
                        element,
                        "background",
                        Some(&progress.ring_background(&state)),
                    )
                },
            )
        }
    };
    if let Err(e) = result {
        log::debug!("Failed to update progress indicator: {}", e);
    }
}

fn bind(
    element: HtmlElement,
    style: ProgressStyle,
    config: &ProgressConfig,
) -> Result<ScrollProgressHandle> {
    let window = dom::window()?;
    let progress = Rc::new(ScrollProgress::new(style, config.clone()));
    let element = Rc::new(element);
    let mut listeners = Vec::with_capacity(3);

    for event in ["scroll", "load"] {
        let (progress, element, win) = (progress.clone(), element.clone(), window.clone());
        listeners.push(Listener::new(&window, event, move |_event: Event| {
            render(&progress, &element, &win);
        })?);
    }

    if style == ProgressStyle::Ring {
        let win = window.clone();
        listeners.push(Listener::new(&element, "click", move |_event: Event| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        })?);
    }

    render(&progress, &element, &window);
    log::debug!("Bound {:?} progress indicator", style);
    Ok(ScrollProgressHandle {
        _listeners: listeners,
    })
}

/// Bind every progress indicator present on the page: `#myBar` as a bar,
/// `#progress` as a ring. Pages without either get an empty list.
pub fn init_progress(config: &ProgressConfig) -> Result<Vec<ScrollProgressHandle>> {
    let document = dom::document()?;
    let mut handles = Vec::new();

    if let Some(bar) = dom::by_id::<HtmlElement>(&document, PROGRESS_BAR_ID) {
        handles.push(bind(bar, ProgressStyle::Bar, config)?);
    }
    if let Some(ring) = dom::by_id::<HtmlElement>(&document, PROGRESS_RING_ID) {
        handles.push(bind(ring, ProgressStyle::Ring, config)?);
    }
    log::info!("Initialized {} progress indicator(s)", handles.len());
    Ok(handles)
}
