//! Geometry for widget placement and hit testing.

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a square of the given side centred on a point.
    #[must_use]
    pub fn centered_square(center: (f32, f32), side: f32) -> Self {
        Self::new(center.0 - side * 0.5, center.1 - side * 0.5, side, side)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the rect has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns the smallest rect covering both. Empty rects are ignored.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }

        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Self::new(x, y, right - x, bottom - y)
    }

    /// Expands the rectangle by the given amount on all sides.
    #[must_use]
    pub fn expand(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }
}

/// Main axis of a bar-like widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Horizontal: minimum on the left.
    #[default]
    Horizontal,
    /// Vertical: minimum at the bottom.
    Vertical,
}

impl Direction {
    /// Picks the main axis from a rect's shape. Square rects are horizontal.
    #[must_use]
    pub fn of(rect: &Rect) -> Self {
        if rect.width >= rect.height {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Length of the rect along this axis.
    #[must_use]
    pub fn main_extent(self, rect: &Rect) -> f32 {
        match self {
            Self::Horizontal => rect.width,
            Self::Vertical => rect.height,
        }
    }

    /// Length of the rect across this axis.
    #[must_use]
    pub fn cross_extent(self, rect: &Rect) -> f32 {
        match self {
            Self::Horizontal => rect.height,
            Self::Vertical => rect.width,
        }
    }

    /// Projects a point onto the axis as a fraction of the rect, 0 at the
    /// minimum end and 1 at the maximum end. Not clamped.
    #[must_use]
    pub fn fraction_at(self, rect: &Rect, x: f32, y: f32) -> f32 {
        let extent = self.main_extent(rect);
        if extent <= 0.0 {
            return 0.0;
        }
        match self {
            Self::Horizontal => (x - rect.x) / extent,
            Self::Vertical => (rect.bottom() - y) / extent,
        }
    }

    /// Inverse of [`Self::fraction_at`]: the point on the rect's centre line
    /// at the given fraction.
    #[must_use]
    pub fn point_at(self, rect: &Rect, fraction: f32) -> (f32, f32) {
        let (cx, cy) = rect.center();
        match self {
            Self::Horizontal => (rect.x + rect.width * fraction, cy),
            Self::Vertical => (cx, rect.bottom() - rect.height * fraction),
        }
    }

    /// Coordinate of a point along this axis.
    #[must_use]
    pub fn main_coord(self, point: (f32, f32)) -> f32 {
        match self {
            Self::Horizontal => point.0,
            Self::Vertical => point.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(50.0, 30.0));
        assert!(!rect.contains(5.0, 30.0));
        assert!(!rect.contains(50.0, 80.0));
    }

    #[test]
    fn test_union_skips_empty() {
        let track = Rect::new(0.0, 0.0, 100.0, 10.0);
        let knob = Rect::new(95.0, -4.0, 18.0, 18.0);

        let both = track.union(&knob);
        assert_eq!(both, Rect::new(0.0, -4.0, 113.0, 18.0));
        assert_eq!(track.union(&Rect::ZERO), track);
    }

    #[test]
    fn test_knob_square_with_overhang() {
        let knob = Rect::centered_square((80.0, 5.0), 10.0).expand(4.0);
        assert_eq!(knob, Rect::new(71.0, -4.0, 18.0, 18.0));
    }

    #[test]
    fn test_direction_from_shape() {
        assert_eq!(Direction::of(&Rect::new(0.0, 0.0, 200.0, 20.0)), Direction::Horizontal);
        assert_eq!(Direction::of(&Rect::new(0.0, 0.0, 20.0, 200.0)), Direction::Vertical);
    }

    #[test]
    fn test_vertical_fraction_grows_upwards() {
        let rect = Rect::new(0.0, 0.0, 10.0, 100.0);
        let axis = Direction::of(&rect);

        assert!((axis.fraction_at(&rect, 5.0, 100.0) - 0.0).abs() < f32::EPSILON);
        assert!((axis.fraction_at(&rect, 5.0, 25.0) - 0.75).abs() < f32::EPSILON);
        assert_eq!(axis.point_at(&rect, 0.75), (5.0, 25.0));
    }
}
