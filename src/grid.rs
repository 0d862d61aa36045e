//! Grid model
//!
//! This module defines the `Grid`, the single source of truth for the
//! layout state. It owns the two track lists, the flat row-major cell
//! sequence, the identity counter, and the active resize session, together
//! with the mutation logic that keeps them consistent (add/remove whole
//! rows and columns, attach cell content, redistribute a track pair).
//!
//! As a GPUI entity it can be updated from any context and notifies its
//! observers (like `GridView`) of any changes.

use crate::addressing;
use crate::data_types::{Axis, CellId, GridAddress, GridConfig, GridError, TrackSize};
use crate::theme::GridTheme;
use crate::tracks::TrackList;
use gpui::{AnyView, Pixels, Point};
use tracing::debug;

/// One grid position.
///
/// A cell does not store its own row/column; its address is derived from
/// its position in the flat sequence and the current column count.
pub struct Cell {
    pub id: CellId,
    /// Caller-supplied payload; actual placement is the view's job.
    pub content: Option<AnyView>,
}

/// Ephemeral state of one live resize drag, created on pointer-down over a
/// gap band and discarded on pointer-up.
#[derive(Clone, Debug)]
pub struct ResizeSession {
    pub axis: Axis,
    /// The cell whose trailing edge is being dragged.
    pub anchor: CellId,
    /// Pointer offset from the anchor's trailing corner at pointer-down.
    pub offset: Point<Pixels>,
    /// Combined extent of the adjacent track pair at session start. With a
    /// fixed container total, fr units and pixels coincide 1:1, so the
    /// total serves both roles for the whole drag.
    pub total: f32,
    /// The axis track list as it was at session start.
    pub tracks_at_start: Vec<TrackSize>,
}

pub struct Grid {
    pub config: GridConfig,
    pub theme: GridTheme,
    rows: TrackList,
    columns: TrackList,
    cells: Vec<Cell>,
    next_cell_id: u64,
    resize: Option<ResizeSession>,
}

impl Grid {
    pub fn new(config: GridConfig) -> Self {
        let rows = TrackList::new(Axis::Row, config.rows.resolve());
        let columns = TrackList::new(Axis::Column, config.columns.resolve());
        let mut grid = Self {
            config,
            theme: GridTheme::default(),
            rows,
            columns,
            cells: Vec::new(),
            next_cell_id: 0,
            resize: None,
        };
        for _ in 0..grid.rows.len() * grid.columns.len() {
            let cell = grid.fresh_cell();
            grid.cells.push(cell);
        }
        grid
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &TrackList {
        &self.rows
    }

    pub fn columns(&self) -> &TrackList {
        &self.columns
    }

    pub fn tracks(&self, axis: Axis) -> &TrackList {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    pub fn gap(&self) -> Pixels {
        self.config.gap_thickness
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_at(&self, address: GridAddress) -> Option<&Cell> {
        let index = addressing::checked_index(address, self.rows.len(), self.columns.len())?;
        self.cells.get(index)
    }

    pub fn index_of(&self, id: CellId) -> Option<usize> {
        self.cells.iter().position(|cell| cell.id == id)
    }

    pub fn address_of(&self, id: CellId) -> Option<GridAddress> {
        let index = self.index_of(id)?;
        if self.columns.is_empty() {
            return None;
        }
        Some(addressing::address_at(index, self.columns.len()))
    }

    fn fresh_cell(&mut self) -> Cell {
        let id = CellId(self.next_cell_id);
        self.next_cell_id += 1;
        Cell { id, content: None }
    }

    /// Inserts a row track at `row_index` and splices one brand-new cell
    /// per existing column into the flat sequence. Returns the new cell
    /// identities in column order.
    ///
    /// New tracks always get all-new cells; reusing a neighbor's cell
    /// across a shifted address would silently move previously inserted
    /// content to the wrong logical position.
    pub fn add_row(&mut self, row_index: usize, size: TrackSize) -> Result<Vec<CellId>, GridError> {
        self.rows.insert(row_index, size)?;
        let column_count = self.columns.len();
        let mut created = Vec::with_capacity(column_count);
        for column in 0..column_count {
            let position = addressing::flat_index(GridAddress::new(row_index, column), column_count);
            let cell = self.fresh_cell();
            created.push(cell.id);
            self.cells.insert(position, cell);
        }
        self.invalidate_resize_on(Axis::Row);
        debug_assert!(self.shape_consistent());
        Ok(created)
    }

    /// Inserts a column track at `column_index` and splices one brand-new
    /// cell per existing row. Returns the new cell identities in row order.
    pub fn add_column(
        &mut self,
        column_index: usize,
        size: TrackSize,
    ) -> Result<Vec<CellId>, GridError> {
        self.columns.insert(column_index, size)?;
        let column_count = self.columns.len();
        let mut created = Vec::with_capacity(self.rows.len());
        for row in 0..self.rows.len() {
            let position = addressing::flat_index(GridAddress::new(row, column_index), column_count);
            let cell = self.fresh_cell();
            created.push(cell.id);
            self.cells.insert(position, cell);
        }
        self.invalidate_resize_on(Axis::Column);
        debug_assert!(self.shape_consistent());
        Ok(created)
    }

    /// Removes the row track at `row_index` and its cells. The targeted
    /// cells are spliced out from the high end down so earlier positions
    /// stay valid during the sweep. An axis may only drop to zero tracks
    /// when the other axis is already empty.
    pub fn remove_row(&mut self, row_index: usize) -> Result<(), GridError> {
        if row_index >= self.rows.len() || (self.rows.len() == 1 && !self.columns.is_empty()) {
            return Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index: row_index,
                len: self.rows.len(),
            });
        }
        let column_count = self.columns.len();
        for column in (0..column_count).rev() {
            let position = addressing::flat_index(GridAddress::new(row_index, column), column_count);
            self.cells.remove(position);
        }
        self.rows.remove_at(row_index)?;
        self.invalidate_resize_on(Axis::Row);
        debug_assert!(self.shape_consistent());
        Ok(())
    }

    pub fn remove_column(&mut self, column_index: usize) -> Result<(), GridError> {
        if column_index >= self.columns.len() || (self.columns.len() == 1 && !self.rows.is_empty())
        {
            return Err(GridError::IndexOutOfRange {
                axis: Axis::Column,
                index: column_index,
                len: self.columns.len(),
            });
        }
        let column_count = self.columns.len();
        for row in (0..self.rows.len()).rev() {
            let position = addressing::flat_index(GridAddress::new(row, column_index), column_count);
            self.cells.remove(position);
        }
        self.columns.remove_at(column_index)?;
        self.invalidate_resize_on(Axis::Column);
        debug_assert!(self.shape_consistent());
        Ok(())
    }

    /// Attaches `content` as the payload of the cell at `address`.
    pub fn insert(&mut self, address: GridAddress, content: AnyView) -> Result<(), GridError> {
        let not_found = GridError::CellNotFound {
            row: address.row,
            column: address.column,
        };
        let index = addressing::checked_index(address, self.rows.len(), self.columns.len())
            .ok_or(not_found.clone())?;
        match self.cells.get_mut(index) {
            Some(cell) => {
                cell.content = Some(content);
                Ok(())
            }
            None => Err(not_found),
        }
    }

    /// Writes both sizes of an adjacent track pair, or neither.
    pub fn set_track_pair(
        &mut self,
        axis: Axis,
        index: usize,
        first: TrackSize,
        second: TrackSize,
    ) -> Result<(), GridError> {
        let tracks = match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.columns,
        };
        if index + 1 >= tracks.len() {
            return Err(GridError::IndexOutOfRange {
                axis,
                index: index + 1,
                len: tracks.len(),
            });
        }
        tracks.set(index, first)?;
        tracks.set(index + 1, second)?;
        Ok(())
    }

    pub fn resize_session(&self) -> Option<&ResizeSession> {
        self.resize.as_ref()
    }

    /// Opens a session unless one is already active (first session wins).
    pub fn begin_resize(&mut self, session: ResizeSession) {
        if self.resize.is_none() {
            debug!(axis = %session.axis, anchor = %session.anchor, "resize session opened");
            self.resize = Some(session);
        }
    }

    pub fn end_resize(&mut self) {
        if self.resize.take().is_some() {
            debug!("resize session closed");
        }
    }

    /// A structural mutation on an axis invalidates any session resizing
    /// that axis; its captured totals and snapshot no longer describe the
    /// track list.
    fn invalidate_resize_on(&mut self, axis: Axis) {
        if self
            .resize
            .as_ref()
            .is_some_and(|session| session.axis == axis)
        {
            debug!(%axis, "resize session ended by structural mutation");
            self.resize = None;
        }
    }

    fn shape_consistent(&self) -> bool {
        self.cells.len() == self.rows.len() * self.columns.len()
    }
}
