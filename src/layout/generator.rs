use crate::{
    foundation::core::{DOOR_COUNT, DayNumber, Viewport},
    foundation::error::{CalendarError, CalendarResult},
    foundation::rng::LayoutRng,
    layout::model::{Door, DoorBox, Layout},
};

/// Share of the cell width a door may occupy.
pub const MAX_CELL_WIDTH_FILL: f64 = 0.9;
/// Share of the cell height a door may occupy.
pub const MAX_CELL_HEIGHT_FILL: f64 = 0.85;
/// Jitter magnitude as a share of the free space left in the cell, per axis.
pub const JITTER_SLACK_SHARE: f64 = 0.1;

/// Grid shape chosen for a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub columns: u32,
    pub rows: u32,
}

impl GridShape {
    /// 3x4 in portrait, 4x3 otherwise.
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.is_portrait() {
            Self {
                columns: 3,
                rows: 4,
            }
        } else {
            Self {
                columns: 4,
                rows: 3,
            }
        }
    }

    pub fn cell_size(self, viewport: Viewport) -> (f64, f64) {
        (
            f64::from(viewport.width) / f64::from(self.columns),
            f64::from(viewport.height) / f64::from(self.rows),
        )
    }
}

/// Door width/height ratio for a viewport, clamped so doors stay neither too thin nor too square.
pub fn target_door_aspect(viewport: Viewport) -> f64 {
    let vp_aspect = viewport.aspect();
    if viewport.is_portrait() {
        (vp_aspect * 1.2).min(1.1)
    } else {
        (vp_aspect * 0.8).max(1.2)
    }
}

/// Largest `(width, height)` with `aspect` that fits the fill limits of a cell.
pub fn door_size_for_cell(cell_w: f64, cell_h: f64, aspect: f64) -> (f64, f64) {
    let max_w = cell_w * MAX_CELL_WIDTH_FILL;
    let max_h = cell_h * MAX_CELL_HEIGHT_FILL;

    let width_limited_h = max_w / aspect;
    if width_limited_h <= max_h {
        (max_w, width_limited_h)
    } else {
        (max_h * aspect, max_h)
    }
}

/// Scatter the twelve doors over `viewport`.
///
/// Output is cell-major (row, then column); each cell's `day` comes from a shuffle of 1..=12.
#[tracing::instrument(skip(rng))]
pub fn generate(viewport: Viewport, rng: &mut LayoutRng) -> CalendarResult<Layout> {
    if viewport.width == 0 || viewport.height == 0 {
        return Err(CalendarError::validation(
            "cannot lay out doors in an empty viewport",
        ));
    }

    let grid = GridShape::for_viewport(viewport);
    let (cell_w, cell_h) = grid.cell_size(viewport);
    let (door_w, door_h) = door_size_for_cell(cell_w, cell_h, target_door_aspect(viewport));
    let slack_x = cell_w - door_w;
    let slack_y = cell_h - door_h;

    let mut days: Vec<DayNumber> = DayNumber::all().collect();
    rng.shuffle(&mut days);

    let mut windows = Vec::with_capacity(usize::from(DOOR_COUNT));
    let mut days = days.into_iter();
    for row in 0..grid.rows {
        for col in 0..grid.columns {
            let Some(day) = days.next() else {
                break;
            };
            let x = f64::from(col) * cell_w
                + slack_x * 0.5
                + rng.symmetric(slack_x * JITTER_SLACK_SHARE);
            let y = f64::from(row) * cell_h
                + slack_y * 0.5
                + rng.symmetric(slack_y * JITTER_SLACK_SHARE);
            windows.push(Door::new(
                day,
                DoorBox {
                    x,
                    y,
                    width: door_w,
                    height: door_h,
                },
            ));
        }
    }

    tracing::debug!(
        columns = grid.columns,
        rows = grid.rows,
        door_w,
        door_h,
        "generated layout"
    );
    Ok(Layout {
        windows,
        viewport_size: viewport,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/generator.rs"]
mod tests;
