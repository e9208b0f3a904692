/// Viewport-relative box of an element, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shift the rect vertically, e.g. to go from document to viewport coordinates.
    pub fn offset_y(self, dy: f64) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    /// True if the rect lies entirely between `0` and `viewport_height` vertically.
    pub fn fits_vertically(&self, viewport_height: f64) -> bool {
        self.top() >= 0.0 && self.bottom() <= viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_fits_vertically() {
        assert!(Rect::new(0.0, 0.0, 10.0, 100.0).fits_vertically(100.0));
        assert!(!Rect::new(0.0, -1.0, 10.0, 50.0).fits_vertically(100.0));
        assert!(!Rect::new(0.0, 60.0, 10.0, 50.0).fits_vertically(100.0));
    }

    #[test]
    fn test_offset_y() {
        let r = Rect::from_size(10.0, 10.0).offset_y(-25.0);
        assert_eq!(r.top(), -25.0);
        assert_eq!(r.bottom(), -15.0);
    }
}
