use crate::*;
/// Sphere, optionally moving linearly between two centers over the shutter.
pub struct Sphere {
    /// Center at time 0 plus the displacement reached at time 1.
    center: Ray,
    radius: Float,
    mat: Arc<dyn Material>,
    bbox: AABB,
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord> {
        let center = self.center_at(ray.time);
        let oc = center - ray.orig;
        let a = ray.dir.length_squared();
        let h = ray.dir.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();
        let mut root = (h - sqrtd) / a;
        if !t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t.surrounds(root) {
                return None;
            }
        }
        let outward_normal = (ray.at(root) - center) / self.radius;
        let uv = Sphere::get_sphere_uv(&outward_normal);
        Some(HitRecord::new(ray, root, outward_normal, uv, self.mat.clone()))
    }
    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }
}

impl Sphere {
    pub fn new(center: Point, radius: Float, mat: Arc<dyn Material>) -> Self {
        let r = Vector::ONE * radius;
        let bbox = AABB::enclosing_point(&(center - r), &(center + r));
        Sphere { center: Ray::new(center, Vector::ZERO), radius, mat, bbox }
    }
    /// Sphere at `from` when `ray.time == 0` and at `to` when it is 1.
    pub fn moving(from: Point, to: Point, radius: Float, mat: Arc<dyn Material>) -> Self {
        let r = Vector::ONE * radius;
        let a = AABB::enclosing_point(&(from - r), &(from + r));
        let b = AABB::enclosing_point(&(to - r), &(to + r));
        let bbox = AABB::enclosing_volume(&a, &b);
        Sphere { center: Ray::new(from, to - from), radius, mat, bbox }
    }
    /// Like `new`, but rejects radii that cannot bound a surface.
    pub fn try_new(center: Point, radius: Float, mat: Arc<dyn Material>) -> GeometryResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self::new(center, radius, mat))
    }
    pub fn center_at(&self, time: Float) -> Point {
        self.center.at(time)
    }
    /// Spherical coordinates of a point on the unit sphere, mapped to `[0, 1]`.
    fn get_sphere_uv(p: &Point) -> UV {
        let t = (-p.y).acos();
        let f = (-p.z).atan2(p.x) + PI;
        let u = f / (2. * PI);
        let v = t / PI;
        UV { x: u, y: v }
    }
}
