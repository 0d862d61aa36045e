use crate::data_types::{Axis, CellId, TrackSize};
use crate::grid::Grid;
use crate::grid_view::GridView;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Pixel offset and extent of each track on one axis: every track gets its
/// fr share of the space left over after gaps. A zero fr total collapses
/// every track to zero extent rather than dividing by it.
fn track_extents(sizes: &[TrackSize], container: f32, gap: f32) -> Vec<(f32, f32)> {
    if sizes.is_empty() {
        return Vec::new();
    }
    let gap_total = gap * (sizes.len() - 1) as f32;
    let available = (container - gap_total).max(0.0);
    let fr_total: f32 = sizes.iter().map(|size| size.value()).sum();
    let scale = if fr_total > 0.0 {
        available / fr_total
    } else {
        0.0
    };

    let mut origin = 0.0;
    sizes
        .iter()
        .map(|size| {
            let extent = size.value() * scale;
            let slot = (origin, extent);
            origin += extent + gap;
            slot
        })
        .collect()
}

pub struct GridRenderer {
    pub grid: Entity<Grid>,

    // Geometry shared with the input handler
    pub bounds: Rc<RefCell<Bounds<Pixels>>>,
    pub cell_bounds: Rc<RefCell<HashMap<CellId, Bounds<Pixels>>>>,
}

impl GridRenderer {
    pub fn new(
        grid: Entity<Grid>,
        bounds: Rc<RefCell<Bounds<Pixels>>>,
        cell_bounds: Rc<RefCell<HashMap<CellId, Bounds<Pixels>>>>,
    ) -> Self {
        Self {
            grid,
            bounds,
            cell_bounds,
        }
    }

    /// Container-relative rectangles of every cell, row-major.
    pub fn cell_rects(grid: &Grid) -> Vec<Bounds<Pixels>> {
        let gap = f32::from(grid.config.gap_thickness);
        let columns = track_extents(grid.columns().sizes(), f32::from(grid.config.width), gap);
        let rows = track_extents(grid.rows().sizes(), f32::from(grid.config.height), gap);

        let mut rects = Vec::with_capacity(rows.len() * columns.len());
        for (row_origin, row_extent) in &rows {
            for (column_origin, column_extent) in &columns {
                rects.push(Bounds {
                    origin: Point {
                        x: px(*column_origin),
                        y: px(*row_origin),
                    },
                    size: Size {
                        width: px(*column_extent),
                        height: px(*row_extent),
                    },
                });
            }
        }
        rects
    }

    pub fn render(&mut self, _window: &mut Window, cx: &mut Context<GridView>) -> Div {
        let grid = self.grid.read(cx);
        let theme = grid.theme.clone();
        let config = grid.config.clone();
        let rects = Self::cell_rects(grid);

        // Drop geometry of cells that no longer exist so a stale handle (or
        // a drag whose anchor was removed) stops resolving.
        let live: HashSet<CellId> = grid.cells().map(|cell| cell.id).collect();
        self.cell_bounds
            .borrow_mut()
            .retain(|id, _| live.contains(id));

        let mut children = Vec::new();
        for (cell, rect) in grid.cells().zip(rects) {
            let id = cell.id;
            let cell_rc = self.cell_bounds.clone();
            let mut cell_div = div()
                .absolute()
                .left(rect.origin.x)
                .top(rect.origin.y)
                .w(rect.size.width)
                .h(rect.size.height)
                .bg(theme.cell_background)
                .text_size(theme.cell_text_size)
                .text_color(theme.cell_text)
                .child(
                    canvas(
                        move |_, _, _| {},
                        move |bounds, (), _, _| {
                            cell_rc.borrow_mut().insert(id, bounds);
                        },
                    )
                    .absolute()
                    .size_full(),
                );
            if let Some(content) = cell.content.clone() {
                cell_div = cell_div.child(div().absolute().size_full().child(content));
            }
            children.push(cell_div.into_any_element());
        }

        // While a drag is live the whole container shows the axis resize
        // cursor, the analog of the original cursor lock.
        let cursor = grid.resize_session().map(|session| match session.axis {
            Axis::Column => CursorStyle::ResizeLeftRight,
            Axis::Row => CursorStyle::ResizeUpDown,
        });

        let bounds_rc = self.bounds.clone();
        div()
            .w(config.width)
            .h(config.height)
            .relative()
            .bg(config.gap_color)
            .when_some(cursor, |this, cursor| this.cursor(cursor))
            .child(
                canvas(
                    move |_, _, _| {},
                    move |bounds, (), _, _| {
                        *bounds_rc.borrow_mut() = bounds;
                    },
                )
                .absolute()
                .size_full(),
            )
            .children(children)
    }
}
