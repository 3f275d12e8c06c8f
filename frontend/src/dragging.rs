//! DOM wiring for the drag-to-scroll controller
//!
//! Data flows: raw DOM event → PointerSample → DragScrollController → scrollLeft / class list

use std::cell::RefCell;
use std::rc::Rc;

use shared::{
    DragOutcome, DragScrollConfig, DragScrollController, PointerButton, PointerSample,
    ScrollTarget,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement};
use zoon::Mutable;

// === SCROLL TARGET ===

/// The scrollable element plus a mirror of its "active" state for UI signals.
pub struct DomScrollTarget {
    element: HtmlElement,
    active_class: String,
    dragging: Mutable<bool>,
}

impl DomScrollTarget {
    pub fn new(element: HtmlElement, active_class: String, dragging: Mutable<bool>) -> Self {
        Self {
            element,
            active_class,
            dragging,
        }
    }
}

impl ScrollTarget for DomScrollTarget {
    fn scroll_offset(&self) -> f64 {
        // `scroll_left()` truncates to i32; the property itself may be fractional.
        read_number(self.element.as_ref(), "scrollLeft")
            .unwrap_or(self.element.scroll_left() as f64)
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.element.set_scroll_left(offset.round() as i32);
    }

    fn bounding_left(&self) -> f64 {
        self.element.get_bounding_client_rect().left()
    }

    fn set_active(&mut self, active: bool) {
        if let Err(error) = self
            .element
            .class_list()
            .toggle_with_force(&self.active_class, active)
        {
            zoon::eprintln!(
                "drag_scroll: failed to toggle class '{}': {:?}",
                self.active_class,
                error
            );
        }
        self.dragging.set_neq(active);
    }
}

// === EVENT NORMALIZATION ===

fn read_number(object: &JsValue, field: &str) -> Option<f64> {
    js_sys::Reflect::get(object, &JsValue::from_str(field))
        .ok()
        .and_then(|value| value.as_f64())
}

/// Build a sample from any event shape: native mouse/pointer events or plain
/// `Event` objects with coordinate properties assigned by a test harness.
pub fn pointer_sample(event: &Event) -> PointerSample {
    let raw: &JsValue = event.as_ref();

    let page_scroll_x = web_sys::window()
        .and_then(|window| window.scroll_x().ok())
        .unwrap_or(0.0);

    let button = read_number(raw, "which")
        .and_then(|which| PointerButton::from_legacy_which(which as i16))
        .or_else(|| {
            read_number(raw, "button").map(|button| PointerButton::from_dom_button(button as i16))
        });

    PointerSample {
        client_x: read_number(raw, "clientX"),
        page_x: read_number(raw, "pageX"),
        page_scroll_x,
        button,
    }
}

// === LISTENERS ===

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragEventKind {
    Press,
    Move,
    Release,
    Leave,
}

fn listened_events(config: &DragScrollConfig) -> Vec<(&'static str, DragEventKind)> {
    let mut events = Vec::new();
    if config.input_events.listens_to_mouse() {
        events.extend([
            ("mousedown", DragEventKind::Press),
            ("mousemove", DragEventKind::Move),
            ("mouseup", DragEventKind::Release),
            ("mouseleave", DragEventKind::Leave),
        ]);
    }
    if config.input_events.listens_to_pointer() {
        events.extend([
            ("pointerdown", DragEventKind::Press),
            ("pointermove", DragEventKind::Move),
            ("pointerup", DragEventKind::Release),
            ("pointercancel", DragEventKind::Release),
            ("pointerleave", DragEventKind::Leave),
        ]);
    }
    events
}

type SharedController = Rc<RefCell<DragScrollController<DomScrollTarget>>>;

fn handle_event(controller: &SharedController, kind: DragEventKind, event: &Event) {
    let mut controller = controller.borrow_mut();
    let outcome = match kind {
        DragEventKind::Press => controller.press_start(&pointer_sample(event)),
        DragEventKind::Move => controller.pointer_move(&pointer_sample(event)),
        DragEventKind::Release => controller.press_end(),
        DragEventKind::Leave => controller.pointer_leave(),
    };

    if outcome.should_prevent_default() {
        event.prevent_default();
    }

    if controller.config().debug_logging {
        match outcome {
            DragOutcome::Ignored => {}
            DragOutcome::Started {
                anchor_x,
                scroll_offset,
            } => zoon::println!(
                "drag_scroll: {} started (anchor_x={}, scroll={})",
                event.type_(),
                anchor_x,
                scroll_offset
            ),
            DragOutcome::Scrolled {
                delta,
                scroll_offset,
            } => zoon::println!("drag_scroll: delta={} scroll={}", delta, scroll_offset),
            DragOutcome::Ended => zoon::println!("drag_scroll: {} ended session", event.type_()),
        }
    }
}

/// Live listeners on one element. Dropping the binding detaches them.
pub struct DragScrollBinding {
    element: HtmlElement,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    controller: SharedController,
}

impl DragScrollBinding {
    pub fn attach(element: HtmlElement, config: DragScrollConfig, dragging: Mutable<bool>) -> Self {
        let events = listened_events(&config);
        let target = DomScrollTarget::new(element.clone(), config.active_class.clone(), dragging);
        let controller: SharedController =
            Rc::new(RefCell::new(DragScrollController::new(target, config)));

        let mut listeners = Vec::with_capacity(events.len());
        for (event_type, kind) in events {
            let controller = controller.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                handle_event(&controller, kind, &event);
            }) as Box<dyn FnMut(Event)>);

            match element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref()) {
                Ok(()) => listeners.push((event_type, closure)),
                Err(error) => {
                    zoon::eprintln!("drag_scroll: failed to listen to '{}': {:?}", event_type, error)
                }
            }
        }

        Self {
            element,
            listeners,
            controller,
        }
    }
}

impl Drop for DragScrollBinding {
    fn drop(&mut self) {
        for (event_type, closure) in self.listeners.drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        }
        // End a session interrupted by removal so the class does not linger.
        self.controller.borrow_mut().press_end();
    }
}
