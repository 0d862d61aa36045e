use crate::addressing;
use crate::data_types::{Axis, CellId, GridAddress};
use crate::grid::{Grid, ResizeSession};
use crate::resize_controller::ResizeController;
use gpui::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub struct GridInputHandler {
    pub grid: Entity<Grid>,
    pub focus_handle: FocusHandle,

    // Geometry shared with the renderer
    pub bounds: Rc<RefCell<Bounds<Pixels>>>,
    pub cell_bounds: Rc<RefCell<HashMap<CellId, Bounds<Pixels>>>>,
}

impl GridInputHandler {
    pub fn new(
        grid: Entity<Grid>,
        focus_handle: FocusHandle,
        bounds: Rc<RefCell<Bounds<Pixels>>>,
        cell_bounds: Rc<RefCell<HashMap<CellId, Bounds<Pixels>>>>,
    ) -> Self {
        Self {
            grid,
            focus_handle,
            bounds,
            cell_bounds,
        }
    }

    /// Opens a resize session when the press lands in a cell's trailing gap
    /// band and an adjacent track pair exists on that side. A press in the
    /// corner gap prefers the column pair and falls back to the row pair.
    pub fn handle_mouse_down(&self, event: &MouseDownEvent, window: &mut Window, cx: &mut App) {
        window.focus(&self.focus_handle);
        if event.button != MouseButton::Left {
            return;
        }
        // Mouse listeners see every window event; only presses inside the
        // container concern the grid.
        if !self.bounds.borrow().contains(&event.position) {
            return;
        }
        let cell_bounds = self.cell_bounds.borrow().clone();
        self.grid.update(cx, |grid, cx| {
            // Only one session at a time; the first press wins.
            if grid.resize_session().is_some() {
                return;
            }
            let column_count = grid.column_count();
            if column_count == 0 {
                return;
            }
            let gap = grid.gap();

            let mut opened: Option<ResizeSession> = None;
            for (index, cell) in grid.cells().enumerate() {
                let Some(bounds) = cell_bounds.get(&cell.id) else {
                    continue;
                };
                let hit = ResizeController::gap_bands(event.position, *bounds, gap);
                if !hit.any() {
                    continue;
                }
                let address = addressing::address_at(index, column_count);
                let Some(axis) = ResizeController::choose_axis(
                    hit,
                    address.column + 1 < grid.column_count(),
                    address.row + 1 < grid.row_count(),
                ) else {
                    continue;
                };
                let (tracks, track_index) = match axis {
                    Axis::Column => (grid.columns(), address.column),
                    Axis::Row => (grid.rows(), address.row),
                };
                let (Some(first), Some(second)) =
                    (tracks.get(track_index), tracks.get(track_index + 1))
                else {
                    continue;
                };
                opened = Some(ResizeController::begin(
                    axis,
                    cell.id,
                    event.position,
                    *bounds,
                    (first, second),
                    tracks.snapshot(),
                ));
                break;
            }

            if let Some(session) = opened {
                grid.begin_resize(session);
                cx.notify();
            }
        });
    }

    /// Applies the live drag. Every failure to resolve the anchor, its
    /// neighbor, or their geometry makes this one move a no-op; the session
    /// itself stays open until pointer-up.
    pub fn handle_mouse_move(&self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut App) {
        let cell_bounds = self.cell_bounds.borrow().clone();
        self.grid.update(cx, |grid, cx| {
            let Some(session) = grid.resize_session().cloned() else {
                return;
            };

            // Button no longer held (released outside the window): reset.
            if event.pressed_button != Some(MouseButton::Left) {
                grid.end_resize();
                cx.notify();
                return;
            }

            if session.tracks_at_start.len() != grid.tracks(session.axis).len() {
                return;
            }
            let column_count = grid.column_count();
            if column_count == 0 {
                return;
            }
            let Some(anchor_index) = grid.index_of(session.anchor) else {
                return;
            };
            let address = addressing::address_at(anchor_index, column_count);
            let neighbor = match session.axis {
                Axis::Column => GridAddress::new(address.row, address.column + 1),
                Axis::Row => GridAddress::new(address.row + 1, address.column),
            };
            let Some(neighbor_id) = grid.cell_at(neighbor).map(|cell| cell.id) else {
                return;
            };
            let (Some(anchor_bounds), Some(neighbor_bounds)) = (
                cell_bounds.get(&session.anchor).copied(),
                cell_bounds.get(&neighbor_id).copied(),
            ) else {
                return;
            };

            let (first, second) = ResizeController::track_pair_for_move(
                &session,
                event.position,
                grid.gap(),
                anchor_bounds,
                neighbor_bounds,
            );
            let track_index = match session.axis {
                Axis::Column => address.column,
                Axis::Row => address.row,
            };
            if grid
                .set_track_pair(session.axis, track_index, first, second)
                .is_ok()
            {
                cx.notify();
            }
        });
    }

    pub fn handle_mouse_up(&self, _event: &MouseUpEvent, _window: &mut Window, cx: &mut App) {
        self.grid.update(cx, |grid, cx| {
            if grid.resize_session().is_some() {
                grid.end_resize();
                cx.notify();
            }
        });
    }
}

impl Clone for GridInputHandler {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            focus_handle: self.focus_handle.clone(),
            bounds: self.bounds.clone(),
            cell_bounds: self.cell_bounds.clone(),
        }
    }
}
