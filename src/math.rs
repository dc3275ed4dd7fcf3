use crate::*;

/// Closed range of ray parameters or coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Add<Float> for &Interval {
    type Output = Interval;
    fn add(self, rhs: Float) -> Self::Output {
        let min = self.min + rhs;
        let max = self.max + rhs;
        Self::Output { min, max }
    }
}

impl Interval {
    pub const EMPTY: Self = Self { min: INFINITY, max: NEG_INFINITY };
    pub const UNIVERSE: Self = Self { min: NEG_INFINITY, max: INFINITY };
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    pub const fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }
    pub fn size(&self) -> Float {
        self.max - self.min
    }
    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }
    pub fn surrounds(&self, x: Float) -> bool {
        self.min < x && x < self.max
    }
    /// Unlike `f64::clamp` this never panics, so it is safe on `EMPTY`.
    pub fn clamp(&self, x: Float) -> Float {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }
    /// Grows the interval by `delta` in total, half on each side.
    pub fn expand(&self, delta: Float) -> Interval {
        let padding = delta / 2.0;
        Interval { min: self.min - padding, max: self.max + padding }
    }
    pub fn ordered(x: Float, y: Float) -> Self {
        let (min, max) = if x >= y { (y, x) } else { (x, y) };
        Self { min, max }
    }
    pub fn enclosing(a: &Self, b: &Self) -> Self {
        let min = a.min.min(b.min);
        let max = a.max.max(b.max);
        Interval { min, max }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub orig: Point,
    pub dir: Vector,
    /// Shutter instant in `[0, 1)`, read by moving geometry.
    pub time: Float,
}

impl Ray {
    pub fn new(orig: Point, dir: Vector) -> Self {
        Self { orig, dir, time: 0.0 }
    }
    pub fn with_time(orig: Point, dir: Vector, time: Float) -> Self {
        Self { orig, dir, time }
    }
    pub fn at(&self, t: Float) -> Point {
        self.orig + t * self.dir
    }
}
