//! Row-major cell addressing.
//!
//! Cells are stored flat; a cell's address is derived from its position in
//! that sequence and the current column count. `flat_index` and
//! `address_at` are exact inverses for every in-bounds pair, and the
//! checked probe returns `None` out of bounds so callers can test grid
//! edges without failing.

use crate::data_types::GridAddress;

/// Flat row-major index of `address` under `column_count` columns.
pub fn flat_index(address: GridAddress, column_count: usize) -> usize {
    address.row * column_count + address.column
}

/// Address of the cell stored at `index` under `column_count` columns.
/// `column_count` must be non-zero; an empty axis has no addresses.
pub fn address_at(index: usize, column_count: usize) -> GridAddress {
    debug_assert!(column_count > 0);
    GridAddress::new(index / column_count, index % column_count)
}

/// Bounds-checked flat index, `None` if `address` names no cell.
pub fn checked_index(
    address: GridAddress,
    row_count: usize,
    column_count: usize,
) -> Option<usize> {
    if address.row >= row_count || address.column >= column_count {
        return None;
    }
    Some(flat_index(address, column_count))
}
