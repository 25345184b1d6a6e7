//! Click-selection state for the monitor panels.
//!
//! Four independent categories: yard zone, lane camera, ship, and 2D
//! section. Each category is either idle or holds one target; selecting a
//! new target replaces the old one rather than stacking. Zone, section and
//! ship clicks toggle when the same target is clicked again. Lane clicks
//! always replace, so a second click on the same lane just moves the
//! recorded click position.

use serde::{Deserialize, Serialize};

use crate::layout::{LaneId, ZoneId};

/// An open lane camera panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneSelection {
    pub lane: LaneId,
    /// Where the lane was clicked, in panel coordinates.
    pub position: f32,
}

/// User actions that change selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionEvent {
    ClickZone(ZoneId),
    CloseZone,
    ClickLane { lane: LaneId, position: f32 },
    CloseLane,
    ClickShip,
    CloseShip,
    ClickSection(ZoneId),
    CloseSection,
    ClearAll,
}

/// State of one category, for callers that want to match on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryState<T> {
    Idle,
    Selected(T),
}

impl<T> From<Option<T>> for CategoryState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => CategoryState::Selected(v),
            None => CategoryState::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    zone: Option<ZoneId>,
    lane: Option<LaneSelection>,
    ship: bool,
    section: Option<ZoneId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::ClickZone(id) => self.click_zone(id),
            SelectionEvent::CloseZone => self.zone = None,
            SelectionEvent::ClickLane { lane, position } => self.click_lane(lane, position),
            SelectionEvent::CloseLane => self.lane = None,
            SelectionEvent::ClickShip => self.click_ship(),
            SelectionEvent::CloseShip => self.ship = false,
            SelectionEvent::ClickSection(id) => self.click_section(id),
            SelectionEvent::CloseSection => self.section = None,
            SelectionEvent::ClearAll => *self = Self::default(),
        }
    }

    pub fn click_zone(&mut self, id: ZoneId) {
        self.zone = toggle(self.zone, id);
    }

    pub fn click_section(&mut self, id: ZoneId) {
        self.section = toggle(self.section, id);
    }

    pub fn click_ship(&mut self) {
        self.ship = !self.ship;
    }

    pub fn click_lane(&mut self, lane: LaneId, position: f32) {
        self.lane = Some(LaneSelection { lane, position });
    }

    pub fn zone(&self) -> CategoryState<ZoneId> {
        self.zone.into()
    }

    pub fn lane(&self) -> CategoryState<LaneSelection> {
        self.lane.into()
    }

    pub fn section(&self) -> CategoryState<ZoneId> {
        self.section.into()
    }

    pub fn ship_selected(&self) -> bool {
        self.ship
    }

    pub fn selected_zone(&self) -> Option<ZoneId> {
        self.zone
    }

    pub fn selected_lane(&self) -> Option<LaneSelection> {
        self.lane
    }

    pub fn selected_section(&self) -> Option<ZoneId> {
        self.section
    }

    /// True when no category holds a selection.
    pub fn is_idle(&self) -> bool {
        self.zone.is_none() && self.lane.is_none() && !self.ship && self.section.is_none()
    }
}

fn toggle(current: Option<ZoneId>, clicked: ZoneId) -> Option<ZoneId> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(c: char) -> ZoneId {
        ZoneId::from_letter(c).unwrap()
    }

    #[test]
    fn test_reclick_same_zone_returns_to_idle() {
        let mut sel = SelectionState::new();
        sel.apply(SelectionEvent::ClickZone(z('C')));
        assert_eq!(sel.zone(), CategoryState::Selected(z('C')));
        sel.apply(SelectionEvent::ClickZone(z('C')));
        assert_eq!(sel.zone(), CategoryState::Idle);
        assert!(sel.is_idle());
    }

    #[test]
    fn test_click_other_zone_replaces_directly() {
        let mut sel = SelectionState::new();
        sel.click_zone(z('C'));
        sel.click_zone(z('D'));
        assert_eq!(sel.zone(), CategoryState::Selected(z('D')));
    }

    #[test]
    fn test_categories_are_independent() {
        let mut sel = SelectionState::new();
        sel.apply(SelectionEvent::ClickZone(z('A')));
        sel.apply(SelectionEvent::ClickShip);
        assert!(sel.ship_selected());
        assert_eq!(sel.selected_zone(), Some(z('A')));

        sel.apply(SelectionEvent::CloseShip);
        assert!(!sel.ship_selected());
        assert_eq!(sel.selected_zone(), Some(z('A')));
    }

    #[test]
    fn test_lane_click_replaces_position() {
        let mut sel = SelectionState::new();
        let l2 = LaneId::new(2).unwrap();
        sel.apply(SelectionEvent::ClickLane {
            lane: l2,
            position: 120.0,
        });
        sel.apply(SelectionEvent::ClickLane {
            lane: l2,
            position: 310.0,
        });
        let lane = sel.selected_lane().unwrap();
        assert_eq!(lane.lane, l2);
        assert_eq!(lane.position, 310.0);

        sel.apply(SelectionEvent::CloseLane);
        assert_eq!(sel.lane(), CategoryState::Idle);
    }

    #[test]
    fn test_ship_click_toggles() {
        let mut sel = SelectionState::new();
        sel.click_ship();
        assert!(sel.ship_selected());
        sel.click_ship();
        assert!(!sel.ship_selected());
    }

    #[test]
    fn test_section_toggle_and_clear() {
        let mut sel = SelectionState::new();
        sel.click_section(z('F'));
        sel.click_zone(z('B'));
        assert_eq!(sel.section(), CategoryState::Selected(z('F')));
        sel.apply(SelectionEvent::ClearAll);
        assert!(sel.is_idle());
    }
}
