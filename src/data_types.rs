// Core data structures for the grid engine

use eyre::{bail, Result};
use gpui::{px, Hsla, Pixels};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A proportional ("fr") track size.
///
/// One fr unit of on-screen extent corresponds to the track's value divided
/// by the sum of all values on its axis, times the axis's available extent.
/// The external string convention is `"<number>fr"` (e.g. `"1.5fr"`), used
/// both for configuration and for serialization.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct TrackSize(f32);

impl TrackSize {
    /// Creates a size of `value` fr. NaN and negative inputs collapse to 0,
    /// so degenerate pointer math can never poison a track list.
    pub fn fr(value: f32) -> Self {
        if value > 0.0 {
            Self(value)
        } else {
            Self(0.0)
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Parses `"1.5fr"`. The `fr` suffix is optional so bare numbers coming
    /// from configuration are accepted too.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let number = trimmed.strip_suffix("fr").unwrap_or(trimmed).trim();
        let value: f32 = number
            .parse()
            .map_err(|_| eyre::eyre!("invalid track size: {input:?}"))?;
        if !value.is_finite() || value < 0.0 {
            bail!("track size must be a finite non-negative number: {input:?}");
        }
        Ok(Self(value))
    }
}

impl Default for TrackSize {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for TrackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}fr", self.0)
    }
}

impl FromStr for TrackSize {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for TrackSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TrackSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Identity of one cell.
///
/// Issued in strictly increasing order and never reused, even after the cell
/// is removed, so content and rendered geometry stay traceable to one
/// (row, column) lifetime across asynchronous re-renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub(crate) u64);

impl CellId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}", self.0)
    }
}

/// A (row, column) grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridAddress {
    pub row: usize,
    pub column: usize,
}

impl GridAddress {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// One of the two track axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::Column => "column",
        })
    }
}

/// Track definition for one axis of a new grid: a plain count (every track
/// `1fr`) or an explicit size list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TrackSpec {
    Count(usize),
    Sizes(Vec<TrackSize>),
}

impl TrackSpec {
    pub fn resolve(&self) -> Vec<TrackSize> {
        match self {
            Self::Count(count) => vec![TrackSize::default(); *count],
            Self::Sizes(sizes) => sizes.clone(),
        }
    }
}

impl From<usize> for TrackSpec {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

impl From<Vec<TrackSize>> for TrackSpec {
    fn from(sizes: Vec<TrackSize>) -> Self {
        Self::Sizes(sizes)
    }
}

/// Configuration for a new grid.
///
/// The mount target is whichever GPUI element composes the `GridView`
/// entity as a child; width and height fix the container's extent so fr
/// units map onto a stable pixel total.
#[derive(Clone, Debug)]
pub struct GridConfig {
    pub rows: TrackSpec,
    pub columns: TrackSpec,
    pub gap_thickness: Pixels,
    pub gap_color: Hsla,
    pub width: Pixels,
    pub height: Pixels,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: TrackSpec::Count(2),
            columns: TrackSpec::Count(2),
            gap_thickness: px(20.0),
            gap_color: gpui::black(),
            width: px(640.0),
            height: px(640.0),
        }
    }
}

/// Errors surfaced by structural grid operations.
///
/// Shape, ordering, and identity invariants are programming errors and are
/// never reachable through the public API; these variants cover the
/// recoverable usage errors only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A mutation addressed a track position that does not exist, or would
    /// leave one axis empty while the other still has tracks.
    #[error("track index {index} out of range for {axis} axis of {len} tracks")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        len: usize,
    },

    /// `insert` addressed a (row, column) with no backing cell.
    #[error("no cell at row {row}, column {column}")]
    CellNotFound { row: usize, column: usize },
}
