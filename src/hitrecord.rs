use crate::*;

/// Result of one successful intersection query.
#[derive(Clone)]
pub struct HitRecord {
    pub p: Point,
    /// Unit normal, always facing against the incoming ray.
    pub n: Vector,
    pub t: Float,
    pub mat: Arc<dyn Material>,
    pub front: bool,
    pub uv: UV,
}

impl HitRecord {
    pub fn new(ray: &Ray, t: Float, outward_normal: Vector, uv: UV, mat: Arc<dyn Material>) -> Self {
        let mut record = HitRecord {
            p: ray.at(t),
            n: outward_normal,
            t,
            mat,
            front: true,
            uv,
        };
        record.set_face_normal(ray, outward_normal);
        record
    }
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vector) -> &Self {
        self.front = outward_normal.dot(ray.dir) < 0.;
        self.n = if self.front { outward_normal } else { -outward_normal };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_faces_the_ray() {
        let mat: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::ONE));
        let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::Z);

        let front = HitRecord::new(&ray, 4.0, -Vector::Z, UV::ZERO, mat.clone());
        assert!(front.front);
        assert_eq!(front.n, -Vector::Z);
        assert_eq!(front.p, Point::new(0.0, 0.0, -1.0));

        let back = HitRecord::new(&ray, 6.0, Vector::Z, UV::ZERO, mat);
        assert!(!back.front);
        assert_eq!(back.n, -Vector::Z);
    }
}
