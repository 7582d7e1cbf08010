/// A point in virtual-screen pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle representing a window's position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rect from its four edges.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// X coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Horizontal center of the rectangle.
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Vertical center of the rectangle.
    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    /// Whether the point lies inside the rect (right/bottom exclusive).
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Whether `other` lies entirely inside this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Area shared by the two rects, in square pixels (0 when disjoint).
    pub fn overlap_area(&self, other: &Rect) -> i64 {
        let w = (self.right().min(other.right()) - self.x.max(other.x)).max(0);
        let h = (self.bottom().min(other.bottom()) - self.y.max(other.y)).max(0);
        i64::from(w) * i64::from(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_exclusive() {
        // Arrange
        let r = Rect::new(100, 100, 800, 600);

        // Assert
        assert_eq!(r.right(), 900);
        assert_eq!(r.bottom(), 700);
        assert!(r.contains_point(Point::new(100, 100)));
        assert!(!r.contains_point(Point::new(900, 300)));
    }

    #[test]
    fn overlap_of_disjoint_rects_is_zero() {
        // Arrange
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(200, 0, 100, 100);

        // Assert
        assert_eq!(a.overlap_area(&b), 0);
    }

    #[test]
    fn overlap_of_partial_rects() {
        // Arrange
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);

        // Assert
        assert_eq!(a.overlap_area(&b), 2500);
    }

    #[test]
    fn from_edges_roundtrips() {
        // Act
        let r = Rect::from_edges(10, 20, 110, 220);

        // Assert
        assert_eq!(r, Rect::new(10, 20, 100, 200));
    }
}
