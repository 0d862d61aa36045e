use gpui::{px, Bounds, Point, Size};
use gpui_grid::{
    Axis, Grid, GridAddress, GridConfig, GridError, ResizeController, ResizeSession, TrackSize,
    TrackSpec,
};

fn grid(rows: usize, columns: usize) -> Grid {
    Grid::new(GridConfig {
        rows: TrackSpec::Count(rows),
        columns: TrackSpec::Count(columns),
        ..GridConfig::default()
    })
}

fn ids(grid: &Grid) -> Vec<u64> {
    grid.cells().map(|cell| cell.id.raw()).collect()
}

fn id_at(grid: &Grid, row: usize, column: usize) -> u64 {
    grid.cell_at(GridAddress::new(row, column)).unwrap().id.raw()
}

fn session_on(grid: &Grid, axis: Axis, anchor_address: GridAddress) -> ResizeSession {
    let anchor = grid.cell_at(anchor_address).unwrap().id;
    let bounds = Bounds {
        origin: Point {
            x: px(0.0),
            y: px(0.0),
        },
        size: Size {
            width: px(100.0),
            height: px(100.0),
        },
    };
    let tracks = grid.tracks(axis);
    ResizeController::begin(
        axis,
        anchor,
        Point {
            x: px(100.0),
            y: px(100.0),
        },
        bounds,
        (tracks.get(0).unwrap(), tracks.get(1).unwrap()),
        tracks.snapshot(),
    )
}

#[test]
fn test_new_grid_is_row_major_with_fresh_ids() {
    let grid = grid(2, 3);
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.cell_count(), 6);
    assert_eq!(ids(&grid), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(id_at(&grid, 1, 0), 3);
}

#[test]
fn test_round_trip_scenario() {
    // 2 columns x 2 rows, then addColumn(0) and addRow(1) -> a 3x3 grid.
    let mut grid = grid(2, 2);
    let original = ids(&grid);
    assert_eq!(original, vec![0, 1, 2, 3]);

    let column_cells = grid.add_column(0, TrackSize::fr(1.0)).unwrap();
    assert_eq!(column_cells.len(), 2);
    assert_eq!(ids(&grid), vec![4, 0, 1, 5, 2, 3]);

    let row_cells = grid.add_row(1, TrackSize::fr(1.0)).unwrap();
    assert_eq!(row_cells.len(), 3);
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 3);
    assert_eq!(ids(&grid), vec![4, 0, 1, 6, 7, 8, 5, 2, 3]);

    // The original four cells retain their identities at shifted addresses.
    assert_eq!(id_at(&grid, 0, 1), 0);
    assert_eq!(id_at(&grid, 0, 2), 1);
    assert_eq!(id_at(&grid, 2, 1), 2);
    assert_eq!(id_at(&grid, 2, 2), 3);

    // Every newly created cell is distinct and freshly identified.
    let mut fresh: Vec<u64> = column_cells
        .iter()
        .chain(row_cells.iter())
        .map(|id| id.raw())
        .collect();
    fresh.sort_unstable();
    fresh.dedup();
    assert_eq!(fresh.len(), column_cells.len() + row_cells.len());
    assert!(fresh.iter().all(|id| !original.contains(id)));
}

#[test]
fn test_removal_scenario() {
    let mut grid = grid(2, 2);
    grid.add_column(0, TrackSize::fr(1.0)).unwrap();
    grid.add_row(1, TrackSize::fr(1.0)).unwrap();

    // The middle row sits at row-major positions [3, 4, 5].
    let doomed: Vec<u64> = ids(&grid)[3..6].to_vec();
    assert_eq!(doomed, vec![6, 7, 8]);

    grid.remove_row(1).unwrap();
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.column_count(), 3);
    let remaining = ids(&grid);
    assert_eq!(remaining, vec![4, 0, 1, 5, 2, 3]);
    assert!(doomed.iter().all(|id| !remaining.contains(id)));
}

#[test]
fn test_shape_invariant_across_mutation_sequence() {
    let mut grid = grid(2, 2);
    let check = |grid: &Grid| {
        assert_eq!(grid.cell_count(), grid.row_count() * grid.column_count());
    };

    grid.add_row(0, TrackSize::fr(2.0)).unwrap();
    check(&grid);
    grid.add_column(2, TrackSize::fr(0.5)).unwrap();
    check(&grid);
    grid.remove_column(0).unwrap();
    check(&grid);
    grid.add_row(3, TrackSize::fr(1.0)).unwrap();
    check(&grid);
    grid.remove_row(1).unwrap();
    check(&grid);
    grid.remove_row(0).unwrap();
    check(&grid);
    grid.add_column(1, TrackSize::fr(1.0)).unwrap();
    check(&grid);
}

#[test]
fn test_identity_monotonicity() {
    let mut grid = grid(2, 2);
    let mut seen: Vec<u64> = ids(&grid);

    for step in 0..4 {
        let created = if step % 2 == 0 {
            grid.add_row(step, TrackSize::fr(1.0)).unwrap()
        } else {
            grid.add_column(0, TrackSize::fr(1.0)).unwrap()
        };
        for id in created {
            // Strictly increasing issuance, no reuse ever.
            assert!(seen.iter().all(|&old| id.raw() > old));
            seen.push(id.raw());
        }
        if step == 2 {
            grid.remove_row(0).unwrap();
        }
    }

    let mut deduped = seen.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), seen.len());
}

#[test]
fn test_insertion_preserves_existing_addresses() {
    let mut grid = grid(2, 2);
    let top = [id_at(&grid, 0, 0), id_at(&grid, 0, 1)];
    let bottom = [id_at(&grid, 1, 0), id_at(&grid, 1, 1)];

    grid.add_row(1, TrackSize::fr(1.0)).unwrap();

    // Rows before the insertion point keep both identity and address; rows
    // after it keep identity at an address shifted by one.
    assert_eq!([id_at(&grid, 0, 0), id_at(&grid, 0, 1)], top);
    assert_eq!([id_at(&grid, 2, 0), id_at(&grid, 2, 1)], bottom);
}

#[test]
fn test_add_out_of_range_leaves_grid_untouched() {
    let mut grid = grid(2, 2);
    let before = ids(&grid);

    assert_eq!(
        grid.add_row(5, TrackSize::fr(1.0)),
        Err(GridError::IndexOutOfRange {
            axis: Axis::Row,
            index: 5,
            len: 2
        })
    );
    assert_eq!(
        grid.add_column(3, TrackSize::fr(1.0)),
        Err(GridError::IndexOutOfRange {
            axis: Axis::Column,
            index: 3,
            len: 2
        })
    );
    assert_eq!(ids(&grid), before);
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.column_count(), 2);
}

#[test]
fn test_remove_out_of_range() {
    let mut grid = grid(2, 2);
    assert!(grid.remove_row(2).is_err());
    assert!(grid.remove_column(2).is_err());
    assert_eq!(grid.cell_count(), 4);
}

#[test]
fn test_axis_floor_rule() {
    // The last track of an axis may not be removed while the other axis
    // still has tracks.
    let mut one_row = grid(1, 2);
    assert!(one_row.remove_row(0).is_err());
    one_row.remove_column(0).unwrap();
    assert!(one_row.remove_column(0).is_err());

    let mut one_cell = grid(1, 1);
    assert!(one_cell.remove_row(0).is_err());
    assert!(one_cell.remove_column(0).is_err());
}

#[test]
fn test_empty_grid_growth() {
    let mut grid = grid(0, 0);
    assert_eq!(grid.cell_count(), 0);

    assert_eq!(grid.add_row(0, TrackSize::fr(1.0)), Ok(vec![]));
    assert_eq!(grid.cell_count(), 0);

    let created = grid.add_column(0, TrackSize::fr(1.0)).unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(grid.cell_count(), 1);
    assert_eq!(grid.cell_count(), grid.row_count() * grid.column_count());
}

#[test]
fn test_set_track_pair() {
    let mut grid = grid(2, 2);
    grid.set_track_pair(Axis::Column, 0, TrackSize::fr(0.5), TrackSize::fr(1.5))
        .unwrap();
    assert_eq!(
        grid.columns().sizes(),
        &[TrackSize::fr(0.5), TrackSize::fr(1.5)]
    );

    // The pair must fit entirely; nothing is written otherwise.
    assert!(grid
        .set_track_pair(Axis::Column, 1, TrackSize::fr(1.0), TrackSize::fr(1.0))
        .is_err());
    assert_eq!(
        grid.columns().sizes(),
        &[TrackSize::fr(0.5), TrackSize::fr(1.5)]
    );
}

#[test]
fn test_first_resize_session_wins() {
    let mut grid = grid(2, 2);
    let first = session_on(&grid, Axis::Column, GridAddress::new(0, 0));
    let second = session_on(&grid, Axis::Row, GridAddress::new(0, 1));
    let anchor = first.anchor;

    grid.begin_resize(first);
    grid.begin_resize(second);
    let active = grid.resize_session().unwrap();
    assert_eq!(active.anchor, anchor);
    assert_eq!(active.axis, Axis::Column);
}

#[test]
fn test_same_axis_mutation_invalidates_session() {
    let mut grid = grid(3, 3);
    grid.begin_resize(session_on(&grid, Axis::Row, GridAddress::new(0, 0)));
    grid.add_row(0, TrackSize::fr(1.0)).unwrap();
    assert!(grid.resize_session().is_none());

    grid.begin_resize(session_on(&grid, Axis::Column, GridAddress::new(0, 0)));
    grid.remove_column(2).unwrap();
    assert!(grid.resize_session().is_none());
}

#[test]
fn test_cross_axis_mutation_keeps_session() {
    let mut grid = grid(3, 3);
    grid.begin_resize(session_on(&grid, Axis::Row, GridAddress::new(0, 0)));
    let anchor = grid.resize_session().unwrap().anchor;

    grid.add_column(0, TrackSize::fr(1.0)).unwrap();
    let session = grid.resize_session().expect("session should survive");
    assert_eq!(session.anchor, anchor);

    // The anchor still resolves, one column over.
    assert_eq!(grid.address_of(anchor), Some(GridAddress::new(0, 1)));
}

#[test]
fn test_end_resize() {
    let mut grid = grid(2, 2);
    grid.begin_resize(session_on(&grid, Axis::Column, GridAddress::new(0, 0)));
    assert!(grid.resize_session().is_some());
    grid.end_resize();
    assert!(grid.resize_session().is_none());
}
