pub mod input;
pub mod renderer;

use crate::data_types::{CellId, GridAddress, GridConfig, GridError, TrackSize};
use crate::grid::Grid;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::error;

use self::input::GridInputHandler;
use self::renderer::GridRenderer;

/// Queryable handle to one rendered cell.
///
/// Geometry reads go through the live bounds map, so a handle obtained once
/// stays current across later renders and reports `None` once its cell is
/// gone.
#[derive(Clone)]
pub struct CellHandle {
    id: CellId,
    cell_bounds: Rc<RefCell<HashMap<CellId, Bounds<Pixels>>>>,
}

impl CellHandle {
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Window bounds of the rendered cell, `None` until it has painted.
    pub fn bounds(&self) -> Option<Bounds<Pixels>> {
        self.cell_bounds.borrow().get(&self.id).copied()
    }

    pub fn is_rendered(&self) -> bool {
        self.cell_bounds.borrow().contains_key(&self.id)
    }
}

pub struct GridView {
    pub grid: Entity<Grid>,

    // Components (delegates)
    renderer: GridRenderer,
    input: GridInputHandler,

    focus_handle: FocusHandle,
}

impl Focusable for GridView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl GridView {
    pub fn new(config: GridConfig, cx: &mut Context<Self>) -> Self {
        let grid = cx.new(|_| Grid::new(config));
        cx.observe(&grid, |_, _, cx| cx.notify()).detach();

        let focus_handle = cx.focus_handle();

        // Geometry containers shared between renderer and input handler
        let bounds = Rc::new(RefCell::new(Bounds::default()));
        let cell_bounds = Rc::new(RefCell::new(HashMap::new()));

        let renderer = GridRenderer::new(grid.clone(), bounds.clone(), cell_bounds.clone());
        let input = GridInputHandler::new(grid.clone(), focus_handle.clone(), bounds, cell_bounds);

        Self {
            grid,
            renderer,
            input,
            focus_handle,
        }
    }

    pub fn grid(&self) -> &Entity<Grid> {
        &self.grid
    }

    pub fn handle(&self, id: CellId) -> CellHandle {
        CellHandle {
            id,
            cell_bounds: self.renderer.cell_bounds.clone(),
        }
    }

    /// Inserts a row at `index`. The new cell ids come back immediately;
    /// `on_ready` runs once the mutated grid has rendered, with one
    /// queryable handle per new cell in column order.
    pub fn add_row(
        &mut self,
        index: usize,
        size: TrackSize,
        window: &mut Window,
        cx: &mut Context<Self>,
        on_ready: impl FnOnce(Vec<CellHandle>, &mut Window, &mut App) + 'static,
    ) -> Result<Vec<CellId>, GridError> {
        let created = self.grid.update(cx, |grid, cx| {
            let created = grid.add_row(index, size)?;
            cx.notify();
            Ok(created)
        })?;
        self.notify_when_rendered(created.clone(), window, on_ready);
        Ok(created)
    }

    /// Inserts a column at `index`; otherwise identical to [`add_row`],
    /// handles arrive in row order.
    ///
    /// [`add_row`]: GridView::add_row
    pub fn add_column(
        &mut self,
        index: usize,
        size: TrackSize,
        window: &mut Window,
        cx: &mut Context<Self>,
        on_ready: impl FnOnce(Vec<CellHandle>, &mut Window, &mut App) + 'static,
    ) -> Result<Vec<CellId>, GridError> {
        let created = self.grid.update(cx, |grid, cx| {
            let created = grid.add_column(index, size)?;
            cx.notify();
            Ok(created)
        })?;
        self.notify_when_rendered(created.clone(), window, on_ready);
        Ok(created)
    }

    pub fn remove_row(&mut self, index: usize, cx: &mut Context<Self>) -> Result<(), GridError> {
        self.grid.update(cx, |grid, cx| {
            grid.remove_row(index)?;
            cx.notify();
            Ok(())
        })
    }

    pub fn remove_column(&mut self, index: usize, cx: &mut Context<Self>) -> Result<(), GridError> {
        self.grid.update(cx, |grid, cx| {
            grid.remove_column(index)?;
            cx.notify();
            Ok(())
        })
    }

    /// Attaches `content` to the cell at `address`. A bad address (cell not
    /// created yet, or out of bounds) is a recoverable usage error: it is
    /// logged and the call is a no-op.
    pub fn insert(
        &mut self,
        address: GridAddress,
        content: impl Into<AnyView>,
        cx: &mut Context<Self>,
    ) {
        let content = content.into();
        let outcome = self.grid.update(cx, |grid, cx| {
            let outcome = grid.insert(address, content);
            if outcome.is_ok() {
                cx.notify();
            }
            outcome
        });
        if let Err(err) = outcome {
            error!("cell does not exist (yet): {err}");
        }
    }

    /// Schedules `on_ready` for after the mutation has painted: one frame
    /// to render the updated tree, a second so the new cells' geometry has
    /// been captured.
    fn notify_when_rendered(
        &self,
        ids: Vec<CellId>,
        window: &mut Window,
        on_ready: impl FnOnce(Vec<CellHandle>, &mut Window, &mut App) + 'static,
    ) {
        let cell_bounds = self.renderer.cell_bounds.clone();
        window.on_next_frame(move |window, _| {
            window.on_next_frame(move |window, cx| {
                let handles = ids
                    .into_iter()
                    .map(|id| CellHandle {
                        id,
                        cell_bounds: cell_bounds.clone(),
                    })
                    .collect();
                on_ready(handles, window, cx);
            });
        });
    }
}

impl Render for GridView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let element = self.renderer.render(window, cx);
        let input = self.input.clone();
        element
            .id("grid-view")
            .track_focus(&self.focus_handle)
            .on_mouse_down(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_down(e, w, c)
            })
            .on_mouse_move({
                let input = input.clone();
                move |e, w, c| input.handle_mouse_move(e, w, c)
            })
            .on_mouse_up(MouseButton::Left, move |e, w, c| {
                input.handle_mouse_up(e, w, c)
            })
    }
}
