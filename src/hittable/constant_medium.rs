use crate::*;
/// Homogeneous participating medium filling a closed boundary.
///
/// Scattering distance is drawn from the calling thread's stream (see
/// [`with_thread_rng`]), since `hit` has no random context of its own.
pub struct ConstantMedium {
    boundary: Arc<dyn Hittable>,
    neg_inv_density: Float,
    phase_function: Arc<dyn Material>,
}

impl ConstantMedium {
    pub fn from_color(boundary: Arc<dyn Hittable>, density: Float, albedo: Color) -> Self {
        let neg_inv_density = -density.recip();
        let phase_function = Arc::new(Isotropic::from_color(albedo));
        Self { boundary, neg_inv_density, phase_function }
    }
    pub fn from_texture(boundary: Arc<dyn Hittable>, density: Float, tex: Arc<dyn Texture>) -> Self {
        let neg_inv_density = -density.recip();
        let phase_function = Arc::new(Isotropic::from_texture(tex));
        Self { boundary, neg_inv_density, phase_function }
    }
}

impl Hittable for ConstantMedium {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord> {
        let record_all = self.boundary.hit(ray, &Interval::UNIVERSE)?;
        let record_box = self.boundary.hit(ray, &Interval::new(record_all.t + 0.0001, INFINITY))?;
        let t_prev = t.min.max(record_all.t);
        let t_next = t.max.min(record_box.t);
        if t_prev >= t_next {
            return None;
        }
        let t_prev = t_prev.max(0.0);
        let ray_length = ray.dir.length();
        let distance_inside_boundary = (t_next - t_prev) * ray_length;
        let hit_distance = self.neg_inv_density * with_thread_rng(|rng| random_float(rng)).ln();
        if hit_distance > distance_inside_boundary {
            return None;
        }
        let t = t_prev + hit_distance / ray_length;
        // normal and face are meaningless inside a volume
        Some(HitRecord {
            p: ray.at(t),
            n: Vector::X,
            t,
            mat: self.phase_function.clone(),
            front: true,
            uv: UV::ZERO,
        })
    }
    fn bounding_box(&self) -> &AABB {
        self.boundary.bounding_box()
    }
}
