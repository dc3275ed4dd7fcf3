use crate::*;
/// Rotates a child about the Y axis by a fixed angle.
pub struct RotateY {
    sin: Float,
    cos: Float,
    bbox: AABB,
    object: Arc<dyn Hittable>,
}

impl RotateY {
    pub fn new(object: Arc<dyn Hittable>, degrees: Float) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let bbox = object.bounding_box();

        let corners = (0..2).flat_map(|i| {
            (0..2).flat_map(move |j| {
                (0..2).map(move |k| {
                    let x = if i == 0 { bbox.x.min } else { bbox.x.max };
                    let y = if j == 0 { bbox.y.min } else { bbox.y.max };
                    let z = if k == 0 { bbox.z.min } else { bbox.z.max };
                    Point::new(cos * x + sin * z, y, -sin * x + cos * z)
                })
            })
        });
        let (min, max) = corners.fold((Point::INFINITY, Point::NEG_INFINITY), |(min, max), p| (min.min(p), max.max(p)));
        let bbox = AABB::enclosing_point(&min, &max);
        Self { sin, cos, bbox, object }
    }
    /// World to object space.
    fn inverse(&self, v: Vector) -> Vector {
        Vector::new(self.cos * v.x - self.sin * v.z, v.y, self.sin * v.x + self.cos * v.z)
    }
    /// Object to world space.
    fn forward(&self, v: Vector) -> Vector {
        Vector::new(self.cos * v.x + self.sin * v.z, v.y, -self.sin * v.x + self.cos * v.z)
    }
}

impl Hittable for RotateY {
    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord> {
        let rotated_ray = Ray::with_time(self.inverse(ray.orig), self.inverse(ray.dir), ray.time);
        self.object.hit(&rotated_ray, t).map(|record| {
            let p = self.forward(record.p);
            let n = self.forward(record.n);
            HitRecord { p, n, ..record }
        })
    }
}
