use crate::*;
pub mod constant_medium;
pub mod hittable_list;
pub mod quad;
pub mod rotate;
pub mod sphere;
pub mod translate;

pub use constant_medium::*;
pub use hittable_list::*;
pub use quad::*;
pub use rotate::*;
pub use sphere::*;
pub use translate::*;

/// Geometry a ray can be tested against.
///
/// Implementations are immutable after construction, so one instance can be
/// queried from any number of threads.
pub trait Hittable: Send + Sync {
    /// Hit record for the nearest intersection whose `t` lies in `t`.
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord>;
    fn bounding_box(&self) -> &AABB;
}
