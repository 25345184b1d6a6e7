//! Yard layout — zone ids, lanes between zones, empty-container rows.
//!
//! The yard is a strip of ten lettered zones (A–J). A lane runs between
//! each adjacent pair and carries a camera feed. Empty containers sit in
//! six rows, each with its own forklift travel band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bounded::FieldRange;
use crate::constants::empty_rows;

/// Identifier of a yard zone, one of the letters `A`..=`J`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct ZoneId(u8);

impl ZoneId {
    pub const COUNT: usize = 10;

    /// All zones in yard order.
    pub const ALL: [ZoneId; Self::COUNT] = [
        ZoneId(0),
        ZoneId(1),
        ZoneId(2),
        ZoneId(3),
        ZoneId(4),
        ZoneId(5),
        ZoneId(6),
        ZoneId(7),
        ZoneId(8),
        ZoneId(9),
    ];

    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        if ('A'..='J').contains(&upper) {
            Some(ZoneId(upper as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(ZoneId(index as u8))
    }

    pub fn letter(&self) -> char {
        (b'A' + self.0) as char
    }

    /// Position in yard order (A = 0).
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The zone to the east, if any.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Error returned when a string is not a zone letter A–J.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseZoneError(pub String);

impl fmt::Display for ParseZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zone id '{}' (expected A-J)", self.0)
    }
}

impl std::error::Error for ParseZoneError {}

impl FromStr for ZoneId {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ZoneId::from_letter(c).ok_or_else(|| ParseZoneError(s.to_string())),
            _ => Err(ParseZoneError(s.to_string())),
        }
    }
}

impl TryFrom<char> for ZoneId {
    type Error = ParseZoneError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        ZoneId::from_letter(c).ok_or_else(|| ParseZoneError(c.to_string()))
    }
}

impl From<ZoneId> for char {
    fn from(id: ZoneId) -> char {
        id.letter()
    }
}

/// Lane between two adjacent zones, numbered 1..=9 (L1 sits between A and B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LaneId(u8);

impl LaneId {
    pub const COUNT: usize = ZoneId::COUNT - 1;

    /// 3D scene x coordinate of each lane marker (z is [`LANE_MARKER_Z`]).
    const MARKER_X: [f32; Self::COUNT] = [
        27.5, 74.5, 119.5, 164.5, 209.5, 254.5, 299.5, 344.5, 389.5,
    ];

    pub fn new(number: u8) -> Option<Self> {
        (1..=Self::COUNT as u8).contains(&number).then_some(LaneId(number))
    }

    /// Lane running east of `zone`, if `zone` is not the last one.
    pub fn east_of(zone: ZoneId) -> Option<Self> {
        zone.next().map(|_| LaneId(zone.index() as u8 + 1))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// The two zones this lane separates, west first.
    pub fn zones(&self) -> (ZoneId, ZoneId) {
        let west = self.0 as usize - 1;
        (ZoneId::ALL[west], ZoneId::ALL[west + 1])
    }

    /// Short marker label, e.g. `L3`.
    pub fn label(&self) -> String {
        format!("L{}", self.0)
    }

    /// Camera panel label, e.g. `Lane C-D`.
    pub fn camera_label(&self) -> String {
        let (west, east) = self.zones();
        format!("Lane {}-{}", west, east)
    }

    pub fn marker_position(&self) -> (f32, f32) {
        (Self::MARKER_X[self.0 as usize - 1], LANE_MARKER_Z)
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

impl TryFrom<u8> for LaneId {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        LaneId::new(number)
            .ok_or_else(|| format!("lane number {} outside 1..={}", number, LaneId::COUNT))
    }
}

impl From<LaneId> for u8 {
    fn from(lane: LaneId) -> u8 {
        lane.0
    }
}

pub const LANE_MARKER_Z: f32 = 30.0;

/// All lanes in yard order.
pub fn lanes() -> Vec<LaneId> {
    (1..=LaneId::COUNT as u8).map(LaneId).collect()
}

/// Placement of one empty-container row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyRowLayout {
    pub id: String,
    /// Forklift x travel band.
    pub band: FieldRange,
    /// Fixed forklift y for the row.
    pub y: f32,
}

/// Layout of row `index` (0-based). Row ids are `Row1`..`Row6`.
pub fn empty_row_layout(index: usize) -> EmptyRowLayout {
    let min_x = empty_rows::FIRST_MIN_X + empty_rows::ROW_STRIDE_X * index as f32;
    EmptyRowLayout {
        id: format!("Row{}", index + 1),
        band: FieldRange {
            min: min_x,
            max: min_x + empty_rows::BAND_WIDTH,
        },
        y: empty_rows::FIRST_Y + empty_rows::ROW_STRIDE_Y * index as f32,
    }
}

pub fn empty_row_layouts() -> Vec<EmptyRowLayout> {
    (0..empty_rows::ROW_COUNT).map(empty_row_layout).collect()
}
