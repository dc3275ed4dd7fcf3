use crate::*;

/// Thinnest extent any padded box may have along an axis.
pub const MIN_THICKNESS: Float = 0.0001;

#[derive(Clone, Debug, PartialEq)]
pub struct AABB {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Index<usize> for AABB {
    type Output = Interval;
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds: {}", index),
        }
    }
}

impl Add<&Vector> for &AABB {
    type Output = AABB;
    fn add(self, offset: &Vector) -> Self::Output {
        let x = &self.x + offset.x;
        let y = &self.y + offset.y;
        let z = &self.z + offset.z;
        Self::Output { x, y, z }
    }
}

impl AABB {
    pub const EMPTY: Self = Self {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
    pub const UNIVERSE: Self = Self {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };

    /// Box from explicit axis ranges, taken as given (no padding).
    pub fn from_intervals(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }
    /// Box spanning two opposite corners, padded to `MIN_THICKNESS`.
    pub fn enclosing_point(a: &Point, b: &Point) -> Self {
        let x = Interval::ordered(a.x, b.x);
        let y = Interval::ordered(a.y, b.y);
        let z = Interval::ordered(a.z, b.z);
        Self { x, y, z }.padded()
    }
    pub fn enclosing_volume(a: &Self, b: &Self) -> Self {
        let x = Interval::enclosing(&a.x, &b.x);
        let y = Interval::enclosing(&a.y, &b.y);
        let z = Interval::enclosing(&a.z, &b.z);
        Self { x, y, z }
    }
    /// Slab test. Axis-parallel rays rely on `1/0 = ±inf`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        let mut ray_t = ray_t;
        for axis in 0..3 {
            let interval = &self[axis];
            let dinv = ray.dir[axis].recip();
            let from = ray.orig[axis];

            let t0 = (interval.min - from) * dinv;
            let t1 = (interval.max - from) * dinv;

            let (near, far) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
            if near > ray_t.min {
                ray_t.min = near;
            }
            if far < ray_t.max {
                ray_t.max = far;
            }
            if ray_t.max <= ray_t.min {
                return false;
            }
        }
        true
    }
    fn padded(self) -> Self {
        let x = if self.x.size() < MIN_THICKNESS { self.x.expand(MIN_THICKNESS) } else { self.x };
        let y = if self.y.size() < MIN_THICKNESS { self.y.expand(MIN_THICKNESS) } else { self.y };
        let z = if self.z.size() < MIN_THICKNESS { self.z.expand(MIN_THICKNESS) } else { self.z };
        Self { x, y, z }
    }
}
