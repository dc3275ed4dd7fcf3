use crate::*;
/// Closed box spanning two opposite corners, as six outward-facing quads.
pub fn cuboid(a: Point, b: Point, mat: Arc<dyn Material>) -> HittableList {
    let mut sides: HittableList = HittableList::new();
    let min = a.min(b);
    let max = a.max(b);

    let dx = Vector::new(max.x - min.x, 0.0, 0.0);
    let dy = Vector::new(0.0, max.y - min.y, 0.0);
    let dz = Vector::new(0.0, 0.0, max.z - min.z);

    sides.add(Arc::new(Quad::new(Point::new(min.x, min.y, max.z), dx, dy, mat.clone()))); // front
    sides.add(Arc::new(Quad::new(Point::new(max.x, min.y, max.z), -dz, dy, mat.clone()))); // right
    sides.add(Arc::new(Quad::new(Point::new(max.x, min.y, min.z), -dx, dy, mat.clone()))); // back
    sides.add(Arc::new(Quad::new(Point::new(min.x, min.y, min.z), dz, dy, mat.clone()))); // left
    sides.add(Arc::new(Quad::new(Point::new(min.x, max.y, max.z), dx, -dz, mat.clone()))); // top
    sides.add(Arc::new(Quad::new(Point::new(min.x, min.y, min.z), dx, dz, mat))); // bottom
    sides
}

/// Parallelogram with corner `q` and edges `u`, `v`.
pub struct Quad {
    q: Point,
    u: Vector,
    v: Vector,
    n: Vector,
    w: Vector,
    d: Float,
    mat: Arc<dyn Material>,
    bbox: AABB,
}

impl Quad {
    pub fn new(q: Point, u: Vector, v: Vector, mat: Arc<dyn Material>) -> Self {
        let a = AABB::enclosing_point(&q, &(q + u + v));
        let b = AABB::enclosing_point(&(q + u), &(q + v));
        let bbox = AABB::enclosing_volume(&a, &b);
        let normal = u.cross(v);
        let w = normal / normal.length_squared();
        let n = normal.normalize();
        let d = n.dot(q);
        Self { q, u, v, mat, bbox, n, d, w }
    }
    /// Like `new`, but refuses edges that span no area.
    pub fn try_new(q: Point, u: Vector, v: Vector, mat: Arc<dyn Material>) -> GeometryResult<Self> {
        if u.cross(v).near_zero() {
            return Err(GeometryError::DegenerateQuad { u, v });
        }
        Ok(Self::new(q, u, v, mat))
    }
    fn is_interior(a: Float, b: Float) -> Option<UV> {
        if !Interval::UNIT.contains(a) || !Interval::UNIT.contains(b) {
            None
        } else {
            Some(UV { x: a, y: b })
        }
    }
}

impl Hittable for Quad {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord> {
        let denom = ray.dir.dot(self.n);
        // parallel to the plane
        if denom.abs() < 1e-8 {
            return None;
        }
        let root = (self.d - self.n.dot(ray.orig)) / denom;
        if !t.contains(root) {
            return None;
        }
        let planar_p = ray.at(root) - self.q;
        let alpha = self.w.dot(planar_p.cross(self.v));
        let beta = self.w.dot(self.u.cross(planar_p));
        Quad::is_interior(alpha, beta).map(|uv| HitRecord::new(ray, root, self.n, uv, self.mat.clone()))
    }
    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }
}
