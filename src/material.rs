use crate::*;

/// Surface response at a hit point.
///
/// Every stochastic choice draws from the `rng` passed by the caller, so a
/// fixed generator makes a scatter fully reproducible.
pub trait Material: Send + Sync {
    /// Attenuation and outgoing ray, or `None` when the ray is absorbed.
    fn scatter(&self, _ray: &Ray, _record: &HitRecord, _rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        None
    }
    fn emitted(&self, _uv: UV, _p: &Point) -> Color {
        Color::ZERO
    }
}

pub struct Lambertian {
    tex: Arc<dyn Texture>,
}

pub struct Metal {
    albedo: Color,
    fuzz: Float,
}

pub struct Dielectric {
    refractive_index: Float,
}

pub struct DiffuseLight {
    tex: Arc<dyn Texture>,
}

pub struct Isotropic {
    tex: Arc<dyn Texture>,
}

impl Lambertian {
    pub fn from_color(albedo: Color) -> Self {
        let tex = Arc::new(SolidColor::from_color(albedo));
        Self { tex }
    }
    pub fn new(tex: Arc<dyn Texture>) -> Self {
        Self { tex }
    }
}

impl Metal {
    /// `fuzz` is clamped into `[0, 1]`.
    pub fn new(albedo: Color, fuzz: Float) -> Self {
        Self { albedo, fuzz: Interval::UNIT.clamp(fuzz) }
    }
}

impl Dielectric {
    pub fn new(refractive_index: Float) -> Self {
        Self { refractive_index }
    }
    /// Schlick's approximation of Fresnel reflectance.
    ///
    /// Matched indices (`ri == 1`) form no interface and never reflect.
    pub fn reflectance(cos: Float, ri: Float) -> Float {
        let r0 = {
            let rt = (1. - ri) / (1. + ri);
            rt * rt
        };
        if r0 == 0.0 {
            return 0.0;
        }
        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }
}

impl DiffuseLight {
    pub fn from_color(albedo: Color) -> Self {
        let tex = Arc::new(SolidColor::from_color(albedo));
        Self { tex }
    }
    pub fn new(tex: Arc<dyn Texture>) -> Self {
        Self { tex }
    }
}

impl Isotropic {
    pub fn from_color(albedo: Color) -> Self {
        let tex = Arc::new(SolidColor::from_color(albedo));
        Self { tex }
    }
    pub fn from_texture(tex: Arc<dyn Texture>) -> Self {
        Self { tex }
    }
}

impl Material for Lambertian {
    fn scatter(&self, ray: &Ray, record: &HitRecord, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let dir = record.n + Vector::random_unit_vector(rng);
        let dir = if dir.near_zero() { record.n } else { dir };
        let attenuation = self.tex.value(record.uv, &record.p);
        Some((attenuation, Ray::with_time(record.p, dir, ray.time)))
    }
}

impl Material for Metal {
    fn scatter(&self, ray: &Ray, record: &HitRecord, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let reflected = ray.dir.reflect(record.n).normalize() + self.fuzz * Vector::random_unit_vector(rng);
        let scattered = Ray::with_time(record.p, reflected, ray.time);
        if scattered.dir.dot(record.n) > 0.0 {
            Some((self.albedo, scattered))
        } else {
            None
        }
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray: &Ray, record: &HitRecord, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let ri = if record.front { self.refractive_index.recip() } else { self.refractive_index };
        let unit = ray.dir.normalize();
        let cos = record.n.dot(-unit).min(1.0);
        let sin = (1.0 - cos * cos).sqrt();
        let dir = if ri * sin > 1.0 || random_float(rng) < Dielectric::reflectance(cos, ri) {
            unit.reflect(record.n)
        } else {
            unit.refract(record.n, ri)
        };
        Some((Color::ONE, Ray::with_time(record.p, dir, ray.time)))
    }
}

impl Material for DiffuseLight {
    // both faces emit
    fn emitted(&self, uv: UV, p: &Point) -> Color {
        self.tex.value(uv, p)
    }
}

impl Material for Isotropic {
    fn scatter(&self, ray: &Ray, record: &HitRecord, rng: &mut dyn RngCore) -> Option<(Color, Ray)> {
        let attenuation = self.tex.value(record.uv, &record.p);
        let dir = Vector::random_unit_vector(rng);
        Some((attenuation, Ray::with_time(record.p, dir, ray.time)))
    }
}
