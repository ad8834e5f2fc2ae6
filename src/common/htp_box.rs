use serde::{Deserialize, Serialize};
use crate::common::{Canvas, HorizontalBand, VerticalBand};

/// Axis-aligned box in image pixels, stored as `(x, y, w, h)` with `y` growing downward.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct HtpBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl HtpBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a box from the corner pair a detector reports.
    ///
    /// # Arguments
    ///
    /// * `x1` - The x-coordinate of the top-left corner.
    /// * `y1` - The y-coordinate of the top-left corner.
    /// * `x2` - The x-coordinate of the bottom-right corner.
    /// * `y2` - The y-coordinate of the bottom-right corner.
    ///
    /// # Returns
    ///
    /// A `HtpBox` with `w = x2 - x1` and `h = y2 - y1`.
    pub fn from_x1y1_x2y2(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x: x1,
            y: y1,
            w: x2 - x1,
            h: y2 - y1,
        }
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> f64 {
        self.w
    }

    /// Returns the height of the bounding box.
    pub fn height(&self) -> f64 {
        self.h
    }

    /// Returns the minimum x-coordinate of the bounding box.
    pub fn x_min(&self) -> f64 {
        self.x
    }

    /// The minimum y-coordinate of the bounding box.
    pub fn y_min(&self) -> f64 {
        self.y
    }

    /// Returns the maximum x-coordinate of the bounding box.
    pub fn x_max(&self) -> f64 {
        self.x + self.w
    }

    /// The maximum y-coordinate of the bounding box.
    pub fn y_max(&self) -> f64 {
        self.y + self.h
    }

    /// Returns the center x-coordinate of the bounding box.
    pub fn cx(&self) -> f64 {
        self.x + self.w / 2.
    }

    /// Returns the center y-coordinate of the bounding box.
    pub fn cy(&self) -> f64 {
        self.y + self.h / 2.
    }

    /// Returns the center point as `(cx, cy)`.
    pub fn center(&self) -> (f64, f64) {
        (self.cx(), self.cy())
    }

    /// Returns the bounding box coordinates and size as `(x, y, w, h)`.
    pub fn xy_wh(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.w, self.h)
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> f64 {
        self.h * self.w
    }

    /// Checks if the point `(px, py)` lies inside the box. All four edges count as inside.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        self.x_min() <= px
            && px <= self.x_max()
            && self.y_min() <= py
            && py <= self.y_max()
    }

    /// Checks if the center of `other` lies inside this box.
    pub fn contains_center_of(&self, other: &HtpBox) -> bool {
        let (cx, cy) = other.center();
        self.contains_point(cx, cy)
    }

    pub fn vertical_band(&self, canvas: &Canvas) -> VerticalBand {
        VerticalBand::of(self.cy(), canvas.height)
    }

    pub fn horizontal_band(&self, canvas: &Canvas) -> HorizontalBand {
        HorizontalBand::of(self.cx(), canvas.width)
    }

    /// Renders the box the way it appears in the feature dump: `[x,y,w,h]`.
    /// Whole numbers keep their decimal point, `[100.0,50.0,500.0,300.0]`.
    pub fn dump(&self) -> String {
        format!("[{:?},{:?},{:?},{:?}]", self.x, self.y, self.w, self.h)
    }
}

/// Divides `numerator` by `denominator`, refusing a denominator that is not strictly positive.
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0. {
        Some(numerator / denominator)
    } else {
        None
    }
}
