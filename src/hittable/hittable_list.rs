use crate::*;
/// Flat aggregate: every child is tested, the nearest hit wins.
pub struct HittableList {
    pub objects: Vec<Arc<dyn Hittable>>,
    pub bbox: AABB,
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl HittableList {
    pub fn new() -> Self {
        HittableList { objects: Vec::new(), bbox: AABB::EMPTY }
    }
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.bbox = AABB::enclosing_volume(&self.bbox, object.bounding_box());
        self.objects.push(object);
    }
    pub fn clear(&mut self) {
        self.objects.clear();
        self.bbox = AABB::EMPTY;
    }
    pub fn len(&self) -> usize {
        self.objects.len()
    }
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord> {
        let mut t_least = t.max;
        // each hit narrows the window, so the last one found is the closest
        self.objects
            .iter()
            .filter_map(|object| {
                object.hit(ray, &Interval::new(t.min, t_least)).map(|record_tmp| {
                    t_least = record_tmp.t;
                    record_tmp
                })
            })
            .last()
    }
    fn bounding_box(&self) -> &AABB {
        &self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(z: Float) -> Arc<dyn Hittable> {
        Arc::new(Sphere::new(Point::new(0.0, 0.0, z), 1.0, Arc::new(Lambertian::from_color(Color::ONE))))
    }

    #[test]
    fn closest_hit_wins_regardless_of_order() {
        let ray = Ray::new(Point::new(0.0, 0.0, -10.0), Vector::Z);
        for order in [[0.0, 5.0, -5.0], [-5.0, 5.0, 0.0], [5.0, -5.0, 0.0]] {
            let mut list = HittableList::new();
            for z in order {
                list.add(ball(z));
            }
            let rec = list.hit(&ray, &Interval::new(0.0, INFINITY)).unwrap();
            assert!((rec.t - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn respects_the_query_window() {
        let mut list = HittableList::new();
        list.add(ball(0.0));
        list.add(ball(5.0));
        let ray = Ray::new(Point::new(0.0, 0.0, -10.0), Vector::Z);
        let rec = list.hit(&ray, &Interval::new(12.0, INFINITY)).unwrap();
        assert!((rec.t - 14.0).abs() < 1e-12);
        assert!(list.hit(&ray, &Interval::new(0.0, 3.0)).is_none());
    }

    #[test]
    fn bounding_box_is_union_of_children() {
        let mut list = HittableList::new();
        assert!(list.is_empty());
        assert_eq!(list.bounding_box(), &AABB::EMPTY);
        list.add(ball(-3.0));
        list.add(ball(4.0));
        assert_eq!(list.len(), 2);
        assert_eq!(list.bounding_box().z, Interval::new(-4.0, 5.0));
        assert_eq!(list.bounding_box().x, Interval::new(-1.0, 1.0));
        list.clear();
        assert!(list.hit(&Ray::new(Point::ZERO, Vector::Z), &Interval::UNIVERSE).is_none());
        assert_eq!(list.bounding_box(), &AABB::EMPTY);
    }
}
