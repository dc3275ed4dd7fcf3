use std::io::{self, Write};
use std::time::Instant;

use log::{debug, info};

use crate::*;

/// Per-render knobs that do not depend on the scene.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub image_width: usize,
    pub samples_per_pixel: usize,
    pub max_depth: usize,
    pub seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { image_width: 400, samples_per_pixel: 100, max_depth: 50, seed: 0 }
    }
}

/// Where the camera sits and what it sees.
#[derive(Clone, Debug)]
pub struct CameraSetup {
    pub aspect_ratio: Float,
    /// Vertical field of view in degrees.
    pub vfov: Float,
    pub lookfrom: Point,
    pub lookat: Point,
    pub vup: Vector,
    pub background: Color,
    /// Aperture cone angle in degrees; 0 disables depth of field.
    pub defocus_angle: Float,
    pub focus_dist: Float,
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            vfov: 90.0,
            lookfrom: Point::ZERO,
            lookat: Point::new(0.0, 0.0, -1.0),
            vup: Vector::Y,
            background: Color::new(0.7, 0.8, 1.0),
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

pub struct Camera {
    background: Color,
    image_width: usize,
    image_height: usize,
    samples_per_pixel: usize,
    max_depth: usize,
    seed: u64,
    inverse_density: Float,
    center: Point,
    pixel_corner: Point,
    pixel_delta_u: Vector,
    pixel_delta_v: Vector,
    defocus_disk_u: Vector,
    defocus_disk_v: Vector,
    defocus_angle: Float,
}

fn linear_to_gamma(linear: Float) -> Float {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

impl Camera {
    pub fn new(setup: &CameraSetup, settings: &RenderSettings) -> Self {
        let image_width = settings.image_width.max(1);
        let image_height = ((image_width as Float / setup.aspect_ratio) as usize).max(1);
        let samples_per_pixel = settings.samples_per_pixel.max(1);
        let inverse_density = (samples_per_pixel as Float).recip();

        let focus_dist = setup.focus_dist;
        let w = (setup.lookfrom - setup.lookat).normalize();
        let u = setup.vup.cross(w).normalize();
        let v = w.cross(u);
        let h = (setup.vfov / 2.).to_radians().tan();
        let viewport_h = 2.0 * h * focus_dist;
        let viewport_w = viewport_h * (image_width as Float / image_height as Float);
        let center = setup.lookfrom;
        let viewport_u = viewport_w * u;
        let viewport_v = viewport_h * -v;
        let pixel_delta_u = viewport_u / image_width as Float;
        let pixel_delta_v = viewport_v / image_height as Float;
        let viewport_upper_left = center - (focus_dist * w) - 0.5 * (viewport_u + viewport_v);
        let pixel_corner = viewport_upper_left + 0.5 * (pixel_delta_v + pixel_delta_u);

        let defocus_radius = focus_dist * (setup.defocus_angle / 2.).to_radians().tan();
        let defocus_disk_u = defocus_radius * u;
        let defocus_disk_v = defocus_radius * v;
        Camera {
            background: setup.background,
            image_width,
            image_height,
            samples_per_pixel,
            max_depth: settings.max_depth,
            seed: settings.seed,
            inverse_density,
            center,
            pixel_corner,
            pixel_delta_u,
            pixel_delta_v,
            defocus_disk_u,
            defocus_disk_v,
            defocus_angle: setup.defocus_angle,
        }
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// Linear radiance per pixel, row-major from the top-left corner.
    ///
    /// Row `j` draws from stream `j` of the seed, so output only depends on
    /// the seed and the scene.
    pub fn render(&self, world: &dyn Hittable) -> Vec<Color> {
        info!(
            "rendering {}x{} at {} spp, depth {}",
            self.image_width, self.image_height, self.samples_per_pixel, self.max_depth
        );
        let start = Instant::now();
        reseed_thread_rng(self.seed);
        let mut data = Vec::with_capacity(self.image_height * self.image_width);
        for j in 0..self.image_height {
            debug!("scanline {} of {}", j + 1, self.image_height);
            let mut rng = stream(self.seed, j as u64);
            for i in 0..self.image_width {
                let sum = (0..self.samples_per_pixel)
                    .map(|_| {
                        let ray = self.get_ray(i, j, &mut rng);
                        self.color(&ray, world, self.max_depth, &mut rng)
                    })
                    .sum::<Color>();
                data.push(sum * self.inverse_density);
            }
        }
        info!("render finished in {:.2?}", start.elapsed());
        data
    }

    /// Plain-text PPM with gamma 2.
    pub fn write_ppm<W: Write>(&self, pixels: &[Color], out: &mut W) -> io::Result<()> {
        const COLORSPACE: Interval = Interval::new(0.000, 0.999);
        writeln!(out, "P3\n{} {}\n255", self.image_width, self.image_height)?;
        for c in pixels {
            let ir = (256. * COLORSPACE.clamp(linear_to_gamma(c.x))) as u8;
            let ig = (256. * COLORSPACE.clamp(linear_to_gamma(c.y))) as u8;
            let ib = (256. * COLORSPACE.clamp(linear_to_gamma(c.z))) as u8;
            writeln!(out, "{ir} {ig} {ib}")?;
        }
        out.flush()
    }

    fn color(&self, ray: &Ray, world: &dyn Hittable, depth: usize, rng: &mut dyn RngCore) -> Color {
        if depth == 0 {
            return Color::ZERO;
        }
        match world.hit(ray, &Interval::new(0.001, INFINITY)) {
            Some(record) => {
                let emitted = record.mat.emitted(record.uv, &record.p);
                match record.mat.scatter(ray, &record, rng) {
                    Some((attenuation, scattered)) => {
                        emitted + attenuation * self.color(&scattered, world, depth - 1, rng)
                    }
                    None => emitted,
                }
            }
            None => self.background,
        }
    }

    fn get_ray<R: Rng + ?Sized>(&self, i: usize, j: usize, rng: &mut R) -> Ray {
        let (dx, dy) = (random_float(rng) - 0.5, random_float(rng) - 0.5);
        let pixel_sample =
            self.pixel_corner + ((i as Float + dx) * self.pixel_delta_u) + ((j as Float + dy) * self.pixel_delta_v);
        let ray_origin = if self.defocus_angle > 0. { self.defocus_disk_sample(rng) } else { self.center };
        let ray_direction = pixel_sample - ray_origin;
        Ray::with_time(ray_origin, ray_direction, random_float(rng))
    }

    fn defocus_disk_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let p = Point::random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(width: usize) -> RenderSettings {
        RenderSettings { image_width: width, samples_per_pixel: 4, max_depth: 5, seed: 9 }
    }

    fn looking_down_z() -> CameraSetup {
        CameraSetup {
            aspect_ratio: 1.0,
            vfov: 40.0,
            lookfrom: Point::new(0.0, 0.0, 5.0),
            lookat: Point::ZERO,
            background: Color::new(0.1, 0.2, 0.3),
            ..CameraSetup::default()
        }
    }

    #[test]
    fn image_height_follows_aspect_ratio() {
        let camera = Camera::new(&CameraSetup::default(), &settings(160));
        assert_eq!(camera.image_width(), 160);
        assert_eq!(camera.image_height(), 90);
        let tiny = Camera::new(&CameraSetup { aspect_ratio: 100.0, ..CameraSetup::default() }, &settings(10));
        assert_eq!(tiny.image_height(), 1);
    }

    #[test]
    fn empty_world_shows_background() {
        let camera = Camera::new(&looking_down_z(), &settings(4));
        let pixels = camera.render(&HittableList::new());
        assert_eq!(pixels.len(), 16);
        for c in pixels {
            assert!((c - Color::new(0.1, 0.2, 0.3)).length() < 1e-12);
        }
    }

    #[test]
    fn light_filling_the_view_is_seen_directly() {
        let mut world = HittableList::new();
        let light: Arc<dyn Material> = Arc::new(DiffuseLight::from_color(Color::splat(2.0)));
        world.add(Arc::new(Quad::new(
            Point::new(-50.0, -50.0, 0.0),
            Vector::new(100.0, 0.0, 0.0),
            Vector::new(0.0, 100.0, 0.0),
            light,
        )));
        let camera = Camera::new(&looking_down_z(), &settings(3));
        for c in camera.render(&world) {
            assert!((c - Color::splat(2.0)).length() < 1e-12);
        }
    }

    #[test]
    fn depth_limit_returns_black() {
        let mut world = HittableList::new();
        let mirror: Arc<dyn Material> = Arc::new(Metal::new(Color::ONE, 0.0));
        world.add(Arc::new(Sphere::new(Point::ZERO, 1.0, mirror)));
        let camera = Camera::new(&looking_down_z(), &RenderSettings { max_depth: 0, ..settings(2) });
        for c in camera.render(&world) {
            assert_eq!(c, Color::ZERO);
        }
    }

    #[test]
    fn renders_are_reproducible_for_a_seed() {
        let mut world = HittableList::new();
        let diffuse: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::splat(0.5)));
        world.add(Arc::new(Sphere::new(Point::ZERO, 1.0, diffuse)));
        let camera = Camera::new(&looking_down_z(), &settings(6));
        assert_eq!(camera.render(&world), camera.render(&world));
    }

    #[test]
    fn ppm_output_is_gamma_corrected_and_clamped() {
        let camera = Camera::new(&looking_down_z(), &settings(2));
        let pixels = vec![Color::ZERO, Color::splat(0.25), Color::splat(4.0), Color::new(-1.0, Float::NAN, 1.0)];
        let mut out = Vec::new();
        camera.write_ppm(&pixels, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[..3], ["P3", "2 2", "255"]);
        assert_eq!(lines[3], "0 0 0");
        assert_eq!(lines[4], "128 128 128");
        assert_eq!(lines[5], "255 255 255");
        assert_eq!(lines[6], "0 0 255");
    }
}
