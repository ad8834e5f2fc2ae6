use serde::{Deserialize, Serialize};

/// Which third of `extent` the coordinate falls in: 0, 1 or 2.
/// Both cut lines belong to the middle third.
fn third_of(coord: f64, extent: f64) -> usize {
    if coord < extent / 3. {
        0
    } else if coord > extent * 2. / 3. {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalBand {
    Top,
    Middle,
    Bottom,
}

impl VerticalBand {
    pub fn of(cy: f64, canvas_height: f64) -> Self {
        match third_of(cy, canvas_height) {
            0 => VerticalBand::Top,
            2 => VerticalBand::Bottom,
            _ => VerticalBand::Middle,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            VerticalBand::Top => 0,
            VerticalBand::Middle => 1,
            VerticalBand::Bottom => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalBand {
    Left,
    Center,
    Right,
}

impl HorizontalBand {
    pub fn of(cx: f64, canvas_width: f64) -> Self {
        match third_of(cx, canvas_width) {
            0 => HorizontalBand::Left,
            2 => HorizontalBand::Right,
            _ => HorizontalBand::Center,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            HorizontalBand::Left => 0,
            HorizontalBand::Center => 1,
            HorizontalBand::Right => 2,
        }
    }
}

/// Axis used for a position-band check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandAxis {
    Vertical,
    Horizontal,
}
