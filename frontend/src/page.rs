//! Wires the landing page behaviors to the live document, once.

use std::rc::Rc;

use log::{debug, error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::PageConfig;
use crate::dom::web::{WebDocument, WebElement};
use crate::dom::{PageDocument, PageElement};
use crate::error::{InteractionError, Result};
use crate::interactions::{
    logo_hover::LogoHover,
    reveal::{RevealEntry, RevealObserver},
    smooth_scroll::SmoothScrollRouter,
    tilt::TiltResponder,
};

/// Elements found at install time. Nodes added later are never wired.
pub struct PageTargets<E> {
    pub anchors: Vec<E>,
    pub features: Vec<E>,
    pub logos: Vec<E>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    pub anchors: usize,
    pub features: usize,
    pub logos: usize,
}

impl<E> PageTargets<E> {
    pub fn report(&self) -> InstallReport {
        InstallReport {
            anchors: self.anchors.len(),
            features: self.features.len(),
            logos: self.logos.len(),
        }
    }
}

pub fn collect_targets<D: PageDocument>(
    document: &D,
    config: &PageConfig,
) -> Result<PageTargets<D::Element>> {
    Ok(PageTargets {
        anchors: document.query_all(&config.anchor_selector)?,
        features: document.query_all(&config.feature_selector)?,
        logos: document.query_all(&config.logo_selector)?,
    })
}

/// Logs a failed event and drops it; later events are unaffected.
fn log_failure<T>(behavior: &str, result: Result<T>) {
    if let Err(err) = result {
        error!("{}: {}", behavior, err);
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| InteractionError::js("addEventListener", err))?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

// web-sys truncates `MouseEvent.pageX` to i32; zoomed pages report fractions.
fn page_coordinate(event: &Event, name: &str) -> Option<f64> {
    Reflect::get(event, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
}

fn bind_tilt(page: &WebDocument, config: &PageConfig) -> Result<()> {
    let responder = TiltResponder::new(page.clone(), config.tilt_target.clone(), config.tilt_divisor);
    listen(page.document(), "mousemove", move |event: Event| {
        let pointer = page_coordinate(&event, "pageX").zip(page_coordinate(&event, "pageY"));
        if let Some((page_x, page_y)) = pointer {
            log_failure("tilt", responder.on_pointer_move(page_x, page_y));
        }
    })
}

fn bind_anchor(router: Rc<SmoothScrollRouter<WebDocument>>, anchor: &WebElement) -> Result<()> {
    let link = anchor.clone();
    listen(anchor.as_element(), "click", move |event: Event| {
        event.prevent_default();
        let href = link.attribute("href").unwrap_or_default();
        match router.on_click(&href) {
            Ok(_) => debug!("smooth scrolling to {}", href),
            Err(err) => error!("smooth scroll: {}", err),
        }
    })
}

/// Starts watching `features`; the observer stays alive for the page's lifetime.
pub fn observe_features(config: &PageConfig, features: &[WebElement]) -> Result<IntersectionObserver> {
    let reveal = RevealObserver::new(config.reveal_class.clone(), config.reveal_threshold);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.threshold()));

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let batch = entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| RevealEntry {
                target: WebElement::new(entry.target()),
                is_intersecting: entry.is_intersecting(),
            });
        log_failure("reveal", reveal.on_entries(batch));
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| InteractionError::js("new IntersectionObserver", err))?;
    for feature in features {
        observer.observe(feature.as_element());
    }
    callback.forget();
    Ok(observer)
}

fn bind_logo(logo: &WebElement) -> Result<()> {
    let entered = logo.clone();
    listen(logo.as_element(), "mouseenter", move |_| {
        log_failure("logo hover", LogoHover.on_enter(&entered));
    })?;

    let left = logo.clone();
    listen(logo.as_element(), "mouseleave", move |_| {
        log_failure("logo hover", LogoHover.on_leave(&left));
    })
}

/// Registers all four behaviors against `page`. Call exactly once.
pub fn install(page: &WebDocument, config: &PageConfig) -> Result<InstallReport> {
    let targets = collect_targets(page, config)?;

    bind_tilt(page, config)?;

    let router = Rc::new(SmoothScrollRouter::new(page.clone()));
    for anchor in &targets.anchors {
        bind_anchor(router.clone(), anchor)?;
    }

    observe_features(config, &targets.features)?;

    for logo in &targets.logos {
        bind_logo(logo)?;
    }

    let report = targets.report();
    info!(
        "page interactions ready: {} anchors, {} features, {} logos",
        report.anchors, report.features, report.logos
    );
    Ok(report)
}

fn start(page: &WebDocument) -> Result<InstallReport> {
    let config = PageConfig::from_override(page.inline_config().as_deref());
    install(page, &config)
}

/// Installs the behaviors once the document structure is ready.
pub fn run() -> Result<()> {
    let page = WebDocument::from_window()?;

    if page.document().ready_state() == "loading" {
        let ready_page = page.clone();
        listen(page.document(), "DOMContentLoaded", move |_| {
            log_failure("install", start(&ready_page));
        })
    } else {
        // The module finished loading after DOMContentLoaded already fired.
        start(&page).map(|_| ())
    }
}
