use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::Array;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Node, PointerEvent,
};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::donation::{DonationAction, DonationPanel};
use crate::drag::{DragScroll, DRAGGING_CLASS};
use crate::lightbox::{Lightbox, LightboxAction, ScrollLockGuard, ScrollSuspender};
use crate::progress::{format_progress, scroll_fraction, SCROLL_PROGRESS_PROPERTY};
use crate::reveal::SeenSections;
use crate::route::Route;

const SECTION_ID_ATTRIBUTE: &str = "data-section-id";

impl Reducible for SeenSections {
    type Action = String;

    fn reduce(self: Rc<Self>, id: String) -> Rc<Self> {
        if self.is_seen(&id) {
            return self;
        }
        let mut next = (*self).clone();
        next.mark_seen(&id);
        Rc::new(next)
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: LightboxAction) -> Rc<Self> {
        match self.transition(action) {
            Some(view) => Rc::new(self.with_view(view)),
            None => self,
        }
    }
}

impl Reducible for DonationPanel {
    type Action = DonationAction;

    fn reduce(self: Rc<Self>, action: DonationAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn passive_listener(
    target: &web_sys::EventTarget,
    event_type: &'static str,
    callback: impl FnMut(&Event) + 'static,
) -> EventListener {
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        callback,
    )
}

fn publish_scroll_progress() {
    let Some(win) = window() else {
        return;
    };
    let Some(root) = win.document().and_then(|d| d.document_element()) else {
        return;
    };

    let scrolled = win.scroll_y().unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let fraction = scroll_fraction(scrolled, f64::from(root.scroll_height()), viewport_height);

    if let Some(root) = root.dyn_ref::<HtmlElement>() {
        let _ = root
            .style()
            .set_property(SCROLL_PROGRESS_PROPERTY, &format_progress(fraction));
    }
}

#[hook]
pub fn use_scroll_progress() {
    use_effect_with((), |_| {
        publish_scroll_progress();
        let listener =
            window().map(|win| passive_listener(&win, "scroll", |_| publish_scroll_progress()));
        move || drop(listener)
    });
}

pub struct SectionReveal {
    seen: UseReducerHandle<SeenSections>,
    nodes: Rc<Vec<(&'static str, NodeRef)>>,
}

impl SectionReveal {
    pub fn node(&self, id: &str) -> NodeRef {
        self.nodes
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, node)| node.clone())
            .unwrap_or_default()
    }

    pub fn class(&self, id: &str) -> &'static str {
        self.seen.section_class(id)
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_sections(
    nodes: &[(&'static str, NodeRef)],
    config: &SiteConfig,
    dispatcher: UseReducerDispatcher<SeenSections>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(id) = entry.target().get_attribute(SECTION_ID_ATTRIBUTE) {
                    dispatcher.dispatch(id);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold()));
    options.set_root_margin(&config.reveal_root_margin());

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok()?;
    for (_, node) in nodes {
        if let Some(element) = node.cast::<Element>() {
            observer.observe(&element);
        }
    }

    Some((observer, callback))
}

/// Rendered sections must carry `data-section-id` and the matching node ref.
#[hook]
pub fn use_section_reveal(ids: &'static [&'static str], config: Rc<SiteConfig>) -> SectionReveal {
    let seen = use_reducer(SeenSections::default);
    let nodes = use_memo((), move |_| {
        ids.iter()
            .map(|id| (*id, NodeRef::default()))
            .collect::<Vec<_>>()
    });

    {
        let nodes = nodes.clone();
        let dispatcher = seen.dispatcher();
        use_effect_with((), move |_| {
            let observation = observe_sections(&nodes, &config, dispatcher);
            move || {
                if let Some((observer, _callback)) = observation {
                    observer.disconnect();
                }
            }
        });
    }

    SectionReveal { seen, nodes }
}

#[hook]
pub fn use_outside_pointer(widget: NodeRef, on_pointer: Callback<bool>) {
    use_effect_with((), move |_| {
        let listeners = window().and_then(|w| w.document()).map(|document| {
            ["mousedown", "touchstart"].map(|event_type| {
                let widget = widget.clone();
                let on_pointer = on_pointer.clone();
                passive_listener(&document, event_type, move |event: &Event| {
                    let Some(widget) = widget.cast::<Node>() else {
                        return;
                    };
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    on_pointer.emit(widget.contains(target.as_ref()));
                })
            })
        });
        move || drop(listeners)
    });
}

fn attach_drag_scroll(element: HtmlElement) -> Vec<EventListener> {
    let state = Rc::new(RefCell::new(DragScroll::default()));
    let mut listeners = Vec::with_capacity(6);

    {
        let state = state.clone();
        let target = element.clone();
        listeners.push(EventListener::new(&element, "pointerdown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let started = state.borrow_mut().begin(
                event.button(),
                f64::from(event.client_x()),
                f64::from(target.scroll_left()),
            );
            if started {
                let _ = target.class_list().add_1(DRAGGING_CLASS);
                let _ = target.set_pointer_capture(event.pointer_id());
            }
        }));
    }

    {
        let state = state.clone();
        let target = element.clone();
        listeners.push(EventListener::new(&element, "pointermove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let next = state.borrow_mut().move_to(f64::from(event.client_x()));
            if let Some(scroll_left) = next {
                target.set_scroll_left(scroll_left.round() as i32);
            }
        }));
    }

    for event_type in ["pointerup", "pointercancel", "pointerleave"] {
        let state = state.clone();
        let target = element.clone();
        listeners.push(EventListener::new(&element, event_type, move |event: &Event| {
            if !state.borrow_mut().end() {
                return;
            }
            let _ = target.class_list().remove_1(DRAGGING_CLASS);
            if let Some(event) = event.dyn_ref::<PointerEvent>() {
                if target.has_pointer_capture(event.pointer_id()) {
                    let _ = target.release_pointer_capture(event.pointer_id());
                }
            }
        }));
    }

    // Pointer capture retargets the trailing click to the row itself.
    listeners.push(EventListener::new_with_options(
        &element,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            if state.borrow_mut().take_click_suppression() {
                event.stop_propagation();
                event.prevent_default();
            }
        },
    ));

    listeners
}

#[hook]
pub fn use_drag_scroll() -> NodeRef {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with((), move |_| {
            let listeners = container.cast::<HtmlElement>().map(attach_drag_scroll);
            move || drop(listeners)
        });
    }

    container
}

#[hook]
pub fn use_lightbox_keys(dispatcher: UseReducerDispatcher<Lightbox>) {
    use_effect_with((), move |_| {
        let listener = window().map(|win| {
            EventListener::new(&win, "keydown", move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Some(action) = LightboxAction::from_key(&event.key()) {
                    dispatcher.dispatch(action);
                }
            })
        });
        move || drop(listener)
    });
}

struct BodyOverflow;

impl BodyOverflow {
    fn body() -> Option<HtmlElement> {
        window()?.document()?.body()
    }
}

impl ScrollSuspender for BodyOverflow {
    fn suspend(&self) {
        if let Some(body) = Self::body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn restore(&self) {
        if let Some(body) = Self::body() {
            let _ = body.style().remove_property("overflow");
        }
    }
}

#[hook]
pub fn use_scroll_lock(active: bool) {
    use_effect_with(active, |active| {
        let guard = active.then(|| ScrollLockGuard::engage(BodyOverflow));
        move || drop(guard)
    });
}

fn current_route() -> Route {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

fn push_history(route: Route) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(route.path()));
    }
}

#[hook]
pub fn use_route() -> (Route, Callback<Route>) {
    let route = use_state(current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "popstate", move |_| route.set(current_route()))
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if next != *route {
                push_history(next);
                route.set(next);
            }
        })
    };

    (*route, navigate)
}
