use crate::foundation::{
    core::{DOOR_COUNT, DayNumber, Rect, Viewport},
    error::{CalendarError, CalendarResult},
};

/// Door rectangle in viewport pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DoorBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DoorBox {
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn center(self) -> (f64, f64) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One calendar door and its placement.
pub struct Door {
    pub day: DayNumber,
    pub is_open: bool,
    pub position: DoorBox,
    /// Preview asset reference, `day{N}`.
    pub thumbnail_ref: String,
}

impl Door {
    pub fn new(day: DayNumber, position: DoorBox) -> Self {
        Self {
            day,
            is_open: false,
            position,
            thumbnail_ref: day.thumbnail_ref(),
        }
    }
}

/// Positions of all twelve doors for the viewport they were computed for.
///
/// This is also the persisted form: `{ "windows": [...], "viewportSize": {...} }`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub windows: Vec<Door>,
    pub viewport_size: Viewport,
}

impl Layout {
    pub fn door(&self, day: DayNumber) -> Option<&Door> {
        self.windows.iter().find(|d| d.day == day)
    }

    pub fn door_mut(&mut self, day: DayNumber) -> Option<&mut Door> {
        self.windows.iter_mut().find(|d| d.day == day)
    }

    pub fn is_open(&self, day: DayNumber) -> bool {
        self.door(day).is_some_and(|d| d.is_open)
    }

    /// Set a door's open flag. Returns `true` when the flag changed.
    pub fn set_open(&mut self, day: DayNumber, open: bool) -> bool {
        match self.door_mut(day) {
            Some(door) if door.is_open != open => {
                door.is_open = open;
                true
            }
            _ => false,
        }
    }

    pub fn open_count(&self) -> usize {
        self.windows.iter().filter(|d| d.is_open).count()
    }

    /// Check the permutation and bounds invariants.
    pub fn validate(&self) -> CalendarResult<()> {
        if self.windows.len() != usize::from(DOOR_COUNT) {
            return Err(CalendarError::validation(format!(
                "layout must have {DOOR_COUNT} doors, found {}",
                self.windows.len()
            )));
        }
        let mut seen = [false; DOOR_COUNT as usize];
        for door in &self.windows {
            let slot = &mut seen[door.day.index()];
            if *slot {
                return Err(CalendarError::validation(format!(
                    "day {} appears more than once",
                    door.day
                )));
            }
            *slot = true;
        }

        let bounds = self.viewport_size.to_rect();
        for door in &self.windows {
            let p = door.position;
            if !(p.width > 0.0 && p.height > 0.0) {
                return Err(CalendarError::validation(format!(
                    "door {} has a degenerate box",
                    door.day
                )));
            }
            let r = p.to_rect();
            if r.x0 < bounds.x0 || r.y0 < bounds.y0 || r.x1 > bounds.x1 || r.y1 > bounds.y1 {
                return Err(CalendarError::validation(format!(
                    "door {} lies outside the viewport",
                    door.day
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
