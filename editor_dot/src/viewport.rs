use eframe::egui::{PointerState, Pos2, Rect, Response};
use lib_dot::{Host, Session};

/// Feeds the size of the canvas area to the session. The session ignores
/// frames where the size did not change.
pub fn update_viewport_size(rect: Rect, session: &mut Session, host: &mut impl Host) {
    session.resize(rect.width(), rect.height(), host);
}

/// Turns egui's per-frame pointer state into press/move/release events, with
/// positions relative to `origin`.
pub fn update_pointer(
    pointer: &PointerState,
    response: &Response,
    origin: Pos2,
    session: &mut Session,
    host: &mut impl Host,
) {
    if pointer.primary_pressed() && response.hovered() {
        if let Some(pos) = pointer.interact_pos() {
            let local = pos - origin;
            session.pointer_down(local.x, local.y, host);
        }
    } else if session.view().dragging && pointer.primary_down() && pointer.is_moving() {
        if let Some(pos) = pointer.latest_pos() {
            let local = pos - origin;
            session.pointer_move(local.x, local.y, host);
        }
    }

    if pointer.primary_released() && session.view().dragging {
        let local = pointer.latest_pos().unwrap_or(origin) - origin;
        session.pointer_up(local.x, local.y);
    }
}
