use crate::*;
/// Shifts a child by a constant offset.
pub struct Translate {
    offset: Vector,
    object: Arc<dyn Hittable>,
    bbox: AABB,
}

impl Translate {
    pub fn new(object: Arc<dyn Hittable>, offset: Vector) -> Self {
        let bbox = object.bounding_box() + &offset;
        Self { object, offset, bbox }
    }
}

impl Hittable for Translate {
    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord> {
        let offset_ray = Ray { orig: ray.orig - self.offset, ..*ray };
        self.object.hit(&offset_ray, t).map(|r| HitRecord { p: r.p + self.offset, ..r })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_hits_and_box() {
        let sphere: Arc<dyn Hittable> =
            Arc::new(Sphere::new(Point::ZERO, 1.0, Arc::new(Lambertian::from_color(Color::ONE))));
        let moved = Translate::new(sphere, Vector::new(10.0, 0.0, 0.0));
        assert_eq!(moved.bounding_box().x, Interval::new(9.0, 11.0));

        let ray = Ray::new(Point::new(10.0, 0.0, -5.0), Vector::Z);
        let rec = moved.hit(&ray, &Interval::new(0.0, INFINITY)).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-12);
        assert!((rec.p - Point::new(10.0, 0.0, -1.0)).length() < 1e-12);
        assert_eq!(rec.n, -Vector::Z);

        let origin_ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::Z);
        assert!(moved.hit(&origin_ray, &Interval::new(0.0, INFINITY)).is_none());
    }

    #[test]
    fn keeps_ray_time_for_moving_children() {
        let mat: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::ONE));
        let sphere: Arc<dyn Hittable> = Arc::new(Sphere::moving(Point::ZERO, Point::new(0.0, 3.0, 0.0), 0.5, mat));
        let moved = Translate::new(sphere, Vector::new(1.0, 0.0, 0.0));
        let ray = Ray::with_time(Point::new(1.0, 3.0, -5.0), Vector::Z, 1.0);
        assert!(moved.hit(&ray, &Interval::new(0.0, INFINITY)).is_some());
    }
}
