//! Notifications the carousel emits to its host.

use std::cell::RefCell;
use std::rc::Rc;

/// On-screen size of a panel in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayDimensions {
    pub width: f32,
    pub height: f32,
}

/// Per-tick scroll position of the selected panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollUpdate {
    pub world_y: f32,
    pub pixel_y: f32,
    pub target_x: f32,
}

pub trait CarouselObserver {
    fn on_selection_change(&mut self, _index: usize, _dims: DisplayDimensions) {}
    fn on_view_change(&mut self, _index: usize, _detail: bool) {}
    fn on_scroll_update(&mut self, _update: ScrollUpdate) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl CarouselObserver for NullObserver {}

#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    SelectionChange { index: usize, dims: DisplayDimensions },
    ViewChange { index: usize, detail: bool },
    Scroll(ScrollUpdate),
}

/// Shared recorder; clone it before handing one copy to the carousel.
#[derive(Clone, Debug, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }

    /// View changes only, in emission order.
    pub fn view_changes(&self) -> Vec<(usize, bool)> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::ViewChange { index, detail } => Some((*index, *detail)),
                _ => None,
            })
            .collect()
    }

    pub fn selections(&self) -> Vec<usize> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::SelectionChange { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }
}

impl CarouselObserver for NotificationLog {
    fn on_selection_change(&mut self, index: usize, dims: DisplayDimensions) {
        self.entries
            .borrow_mut()
            .push(Notification::SelectionChange { index, dims });
    }

    fn on_view_change(&mut self, index: usize, detail: bool) {
        self.entries
            .borrow_mut()
            .push(Notification::ViewChange { index, detail });
    }

    fn on_scroll_update(&mut self, update: ScrollUpdate) {
        self.entries.borrow_mut().push(Notification::Scroll(update));
    }
}
