use aethereal_core::{key_intent, NavIntent};
use web_sys::{KeyboardEvent, MouseEvent, Touch, TouchEvent};

/// Which device produced a swipe. Touch and mouse gestures run through the
/// same tracker but a touch sequence also fires compatibility mouse events,
/// so mouse input is ignored while a touch is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerKind {
    Mouse,
    Touch,
}

fn first_touch(event: &TouchEvent, changed: bool) -> Option<Touch> {
    let list = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    list.item(0)
}

/// Horizontal position of the finger that started a touch.
pub(crate) fn touch_start_x(event: &TouchEvent) -> Option<f32> {
    first_touch(event, false)
        .or_else(|| first_touch(event, true))
        .map(|touch| touch.screen_x() as f32)
}

/// Horizontal position of the finger that lifted.
pub(crate) fn touch_end_x(event: &TouchEvent) -> Option<f32> {
    first_touch(event, true).map(|touch| touch.screen_x() as f32)
}

pub(crate) fn mouse_x(event: &MouseEvent) -> Option<f32> {
    (event.button() == 0).then(|| event.client_x() as f32)
}

/// Keyboard shortcut for a page turn. Auto-repeat and modified keys are
/// left to the browser.
pub(crate) fn keyboard_intent(event: &KeyboardEvent) -> Option<NavIntent> {
    if event.repeat() || event.ctrl_key() || event.meta_key() || event.alt_key() {
        return None;
    }
    key_intent(&event.key())
}
