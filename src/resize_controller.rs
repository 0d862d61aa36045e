use crate::data_types::{Axis, CellId, TrackSize};
use crate::grid::ResizeSession;
use gpui::{Bounds, Pixels, Point};

/// ResizeController handles the business logic of boundary drags (gap-band
/// detection, session capture, clamped remapping) independently of the GPUI
/// infrastructure to facilitate testing.
pub struct ResizeController;

/// Which of a cell's trailing gap bands contain a pointer. Both flags are
/// set for a press in the corner gap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BandHit {
    pub column: bool,
    pub row: bool,
}

impl BandHit {
    pub fn any(self) -> bool {
        self.column || self.row
    }
}

impl ResizeController {
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        value.max(min).min(max)
    }

    /// Linearly remaps `value` from `[start1, stop1]` onto
    /// `[start2, stop2]`. A degenerate source span yields `start2` rather
    /// than NaN.
    pub fn map_range(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32) -> f32 {
        if !(stop1 - start1 > f32::EPSILON) {
            return start2;
        }
        (value - start1) / (stop1 - start1) * (stop2 - start2) + start2
    }

    pub fn clamped_map(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32) -> f32 {
        Self::map_range(
            Self::clamp(value, start1, stop1),
            start1,
            stop1,
            start2,
            stop2,
        )
    }

    /// Gap-band test for one cell: whether `position` sits in the gap strip
    /// trailing the cell's right edge and/or its bottom edge.
    pub fn gap_bands(position: Point<Pixels>, cell: Bounds<Pixels>, gap: Pixels) -> BandHit {
        let x = f32::from(position.x);
        let y = f32::from(position.y);
        let left = f32::from(cell.origin.x);
        let top = f32::from(cell.origin.y);
        let right = left + f32::from(cell.size.width);
        let bottom = top + f32::from(cell.size.height);
        let gap = f32::from(gap);

        let within_x = x >= left && x < right + gap;
        let within_y = y >= top && y < bottom + gap;
        BandHit {
            column: x >= right && within_x && within_y,
            row: y >= bottom && within_y && within_x,
        }
    }

    /// Which axis a press should resize, given the band hit and whether
    /// each axis has a track pair trailing the cell. A press in the corner
    /// gap prefers the column pair and falls back to the row pair; a band
    /// at the grid's outer edge (no trailing pair) never opens a session.
    pub fn choose_axis(hit: BandHit, has_column_pair: bool, has_row_pair: bool) -> Option<Axis> {
        if hit.column && has_column_pair {
            Some(Axis::Column)
        } else if hit.row && has_row_pair {
            Some(Axis::Row)
        } else {
            None
        }
    }

    /// Captures a session for `axis` against the adjacent pair that starts
    /// at the anchor cell's track. Records the pointer's offset from the
    /// anchor's trailing corner, the pair total in absolute terms, and the
    /// axis snapshot.
    pub fn begin(
        axis: Axis,
        anchor: CellId,
        pointer: Point<Pixels>,
        anchor_bounds: Bounds<Pixels>,
        pair: (TrackSize, TrackSize),
        tracks_at_start: Vec<TrackSize>,
    ) -> ResizeSession {
        let offset = Point::new(
            pointer.x - (anchor_bounds.origin.x + anchor_bounds.size.width),
            pointer.y - (anchor_bounds.origin.y + anchor_bounds.size.height),
        );
        ResizeSession {
            axis,
            anchor,
            offset,
            total: pair.0.value() + pair.1.value(),
            tracks_at_start,
        }
    }

    /// New sizes for the adjacent pair under a pointer move.
    ///
    /// The candidate boundary is the pointer plus half a gap, minus the
    /// offset captured at pointer-down; it is clamped to the pixel span the
    /// pair occupies on screen and remapped onto `[0, total]`. Both results
    /// land in `[0, total]` and sum to the captured total for any pointer
    /// position, including ones far outside the span.
    pub fn track_pair_for_move(
        session: &ResizeSession,
        pointer: Point<Pixels>,
        gap: Pixels,
        anchor_bounds: Bounds<Pixels>,
        neighbor_bounds: Bounds<Pixels>,
    ) -> (TrackSize, TrackSize) {
        let half_gap = f32::from(gap) / 2.0;
        let (candidate, span_start, span_end) = match session.axis {
            Axis::Column => (
                f32::from(pointer.x) + half_gap - f32::from(session.offset.x),
                f32::from(anchor_bounds.origin.x),
                f32::from(neighbor_bounds.origin.x) + f32::from(neighbor_bounds.size.width),
            ),
            Axis::Row => (
                f32::from(pointer.y) + half_gap - f32::from(session.offset.y),
                f32::from(anchor_bounds.origin.y),
                f32::from(neighbor_bounds.origin.y) + f32::from(neighbor_bounds.size.height),
            ),
        };
        let first = Self::clamped_map(candidate, span_start, span_end, 0.0, session.total);
        (TrackSize::fr(first), TrackSize::fr(session.total - first))
    }
}
