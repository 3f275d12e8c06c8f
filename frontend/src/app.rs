use std::cell::RefCell;
use std::rc::Rc;

use shared::DragScrollConfig;
use zoon::*;

use crate::dragging::DragScrollBinding;

const ITEM_COUNT: usize = 25;

/// Root of the page: a horizontally scrollable `.items` row that pans on drag.
#[derive(Clone)]
pub struct DragScrollApp {
    config: DragScrollConfig,
    /// Mirrors the controller's session state for styling and the status line.
    dragging: Mutable<bool>,
}

impl DragScrollApp {
    pub fn new(config: DragScrollConfig) -> Self {
        Self {
            config,
            dragging: Mutable::new(false),
        }
    }

    pub fn root(&self) -> impl Element {
        Column::new()
            .s(Width::fill())
            .s(Height::screen())
            .s(Padding::all(24))
            .s(Gap::new().y(16))
            .s(Background::new().color("rgb(13, 13, 13)"))
            .s(Font::new().color("rgb(230, 230, 230)").size(16))
            .item(
                El::new()
                    .s(Font::new().size(24).weight(FontWeight::SemiBold))
                    .child(Text::new("Drag to scroll")),
            )
            .item(self.status_line())
            .item(self.items_row())
    }

    fn status_line(&self) -> impl Element {
        El::new()
            .s(Font::new().size(14).color("rgb(160, 160, 160)"))
            .child(Text::with_signal(self.dragging.signal().map(|dragging| {
                if dragging { "Dragging" } else { "Idle" }
            })))
    }

    fn items_row(&self) -> impl Element {
        let binding: Rc<RefCell<Option<DragScrollBinding>>> = Rc::new(RefCell::new(None));

        Row::new()
            .s(Width::fill())
            .s(Gap::new().x(16))
            .s(Padding::new().y(24))
            .update_raw_el({
                let config = self.config.clone();
                let dragging = self.dragging.clone();
                let binding = binding.clone();
                move |raw_el| {
                    raw_el
                        .class("items")
                        .style("overflow-x", "scroll")
                        .style("overflow-y", "hidden")
                        .style("white-space", "nowrap")
                        .style("user-select", "none")
                        .style_signal(
                            "cursor",
                            dragging.signal().map(|dragging| {
                                if dragging { "grabbing" } else { "grab" }
                            }),
                        )
                        .after_insert({
                            let binding = binding.clone();
                            move |element| {
                                *binding.borrow_mut() =
                                    Some(DragScrollBinding::attach(element, config, dragging));
                            }
                        })
                        .after_remove(move |_| {
                            binding.borrow_mut().take();
                        })
                }
            })
            .items((1..=ITEM_COUNT).map(item_card))
    }
}

fn item_card(index: usize) -> impl Element {
    El::new()
        .s(Width::exact(220))
        .s(Height::exact(180))
        .s(RoundedCorners::all(8))
        .s(Background::new().color("rgb(38, 38, 46)"))
        .s(Font::new().size(40).weight(FontWeight::Bold))
        .update_raw_el(|raw_el| raw_el.class("item").style("flex-shrink", "0"))
        .child(El::new().s(Align::center()).child(Text::new(format!("{:02}", index))))
}
