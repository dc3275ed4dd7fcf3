//! Built-in scenes.

use clap::ValueEnum;
use log::debug;

use crate::*;

const SKY: Color = Color { x: 0.7, y: 0.8, z: 1.0 };

/// Selectable by its kebab-case name, e.g. `cornell-smoke`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    Spheres,
    MotionBlur,
    Checkered,
    Quads,
    SimpleLight,
    Cornell,
    CornellSmoke,
}

impl Scene {
    /// World and camera placement; random layouts are drawn from `seed`.
    pub fn build(self, seed: u64) -> (HittableList, CameraSetup) {
        let mut rng = stream(seed, SCENE_STREAM);
        let (world, setup) = match self {
            Scene::Spheres => random_spheres(&mut rng, false),
            Scene::MotionBlur => random_spheres(&mut rng, true),
            Scene::Checkered => checkered_spheres(),
            Scene::Quads => quads(),
            Scene::SimpleLight => simple_light(),
            Scene::Cornell => cornell_box(),
            Scene::CornellSmoke => cornell_smoke(),
        };
        debug!("scene {:?}: {} top-level objects", self, world.len());
        (world, setup)
    }
}

fn first_book_camera() -> CameraSetup {
    CameraSetup {
        aspect_ratio: 16.0 / 9.0,
        vfov: 20.0,
        lookfrom: Point::new(13.0, 2.0, 3.0),
        lookat: Point::ZERO,
        vup: Vector::Y,
        background: SKY,
        defocus_angle: 0.6,
        focus_dist: 10.0,
    }
}

fn cornell_camera() -> CameraSetup {
    CameraSetup {
        aspect_ratio: 1.0,
        vfov: 40.0,
        lookfrom: Point::new(278.0, 278.0, -800.0),
        lookat: Point::new(278.0, 278.0, 0.0),
        background: Color::ZERO,
        ..CameraSetup::default()
    }
}

/// Field of small random spheres around three large ones. With `moving`,
/// the diffuse spheres bounce upward during the shutter.
pub fn random_spheres<R: Rng + ?Sized>(rng: &mut R, moving: bool) -> (HittableList, CameraSetup) {
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = if moving {
        let checker = Arc::new(Checkered::from_color(0.32, Color::new(0.2, 0.3, 0.1), Color::splat(0.9)));
        Arc::new(Lambertian::new(checker))
    } else {
        Arc::new(Lambertian::from_color(Color::splat(0.5)))
    };
    world.add(Arc::new(Sphere::new(Point::new(0.0, -1000.0, 0.0), 1000.0, ground)));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random_float(rng);
            let center = Point::new(
                a as Float + 0.9 * random_float(rng),
                0.2,
                b as Float + 0.9 * random_float(rng),
            );
            if (center - Point::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }
            let sphere = if choose_mat < 0.8 {
                let albedo = Color::random(rng, 0.0, 1.0) * Color::random(rng, 0.0, 1.0);
                let mat = Arc::new(Lambertian::from_color(albedo));
                if moving {
                    let to = center + Vector::new(0.0, random_range(rng, 0.0, 0.5), 0.0);
                    Sphere::moving(center, to, 0.2, mat)
                } else {
                    Sphere::new(center, 0.2, mat)
                }
            } else if choose_mat < 0.95 {
                let albedo = Color::random(rng, 0.5, 1.0);
                let fuzz = random_range(rng, 0.0, 0.5);
                Sphere::new(center, 0.2, Arc::new(Metal::new(albedo, fuzz)))
            } else {
                Sphere::new(center, 0.2, Arc::new(Dielectric::new(1.5)))
            };
            world.add(Arc::new(sphere));
        }
    }

    world.add(Arc::new(Sphere::new(Point::new(0.0, 1.0, 0.0), 1.0, Arc::new(Dielectric::new(1.5)))));
    world.add(Arc::new(Sphere::new(
        Point::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::from_color(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Arc::new(Sphere::new(
        Point::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    (world, first_book_camera())
}

pub fn checkered_spheres() -> (HittableList, CameraSetup) {
    let mut world = HittableList::new();
    let checker = Arc::new(Checkered::from_color(0.32, Color::new(0.2, 0.3, 0.1), Color::splat(0.9)));
    let mat: Arc<dyn Material> = Arc::new(Lambertian::new(checker));
    world.add(Arc::new(Sphere::new(Point::new(0.0, -10.0, 0.0), 10.0, mat.clone())));
    world.add(Arc::new(Sphere::new(Point::new(0.0, 10.0, 0.0), 10.0, mat)));
    (world, CameraSetup { defocus_angle: 0.0, ..first_book_camera() })
}

pub fn quads() -> (HittableList, CameraSetup) {
    let mut world = HittableList::new();
    let left_red = Arc::new(Lambertian::from_color(Color::new(1.0, 0.2, 0.2)));
    let back_green = Arc::new(Lambertian::from_color(Color::new(0.2, 1.0, 0.2)));
    let right_blue = Arc::new(Lambertian::from_color(Color::new(0.2, 0.2, 1.0)));
    let upper_orange = Arc::new(Lambertian::from_color(Color::new(1.0, 0.5, 0.0)));
    let lower_teal = Arc::new(Lambertian::from_color(Color::new(0.2, 0.8, 0.8)));

    world.add(Arc::new(Quad::new(
        Point::new(-3.0, -2.0, 5.0),
        Vector::new(0.0, 0.0, -4.0),
        Vector::new(0.0, 4.0, 0.0),
        left_red,
    )));
    world.add(Arc::new(Quad::new(
        Point::new(-2.0, -2.0, 0.0),
        Vector::new(4.0, 0.0, 0.0),
        Vector::new(0.0, 4.0, 0.0),
        back_green,
    )));
    world.add(Arc::new(Quad::new(
        Point::new(3.0, -2.0, 1.0),
        Vector::new(0.0, 0.0, 4.0),
        Vector::new(0.0, 4.0, 0.0),
        right_blue,
    )));
    world.add(Arc::new(Quad::new(
        Point::new(-2.0, 3.0, 1.0),
        Vector::new(4.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 4.0),
        upper_orange,
    )));
    world.add(Arc::new(Quad::new(
        Point::new(-2.0, -3.0, 5.0),
        Vector::new(4.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, -4.0),
        lower_teal,
    )));

    let setup = CameraSetup {
        aspect_ratio: 1.0,
        vfov: 80.0,
        lookfrom: Point::new(0.0, 0.0, 9.0),
        lookat: Point::ZERO,
        background: SKY,
        ..CameraSetup::default()
    };
    (world, setup)
}

pub fn simple_light() -> (HittableList, CameraSetup) {
    let mut world = HittableList::new();
    let orange = Arc::new(SolidColor::from_rgb(1.0, 0.5, 0.2));
    let blue = Arc::new(SolidColor::from_rgb(0.2, 0.5, 1.0));
    world.add(Arc::new(Sphere::new(Point::new(0.0, -1000.0, 0.0), 1000.0, Arc::new(Lambertian::new(orange)))));
    world.add(Arc::new(Sphere::new(Point::new(0.0, 2.0, 0.0), 2.0, Arc::new(Lambertian::new(blue)))));

    let light: Arc<dyn Material> = Arc::new(DiffuseLight::from_color(Color::splat(4.0)));
    world.add(Arc::new(Sphere::new(Point::new(0.0, 7.0, 0.0), 2.0, light.clone())));
    world.add(Arc::new(Quad::new(
        Point::new(3.0, 1.0, -2.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::new(0.0, 2.0, 0.0),
        light,
    )));

    let setup = CameraSetup {
        vfov: 20.0,
        lookfrom: Point::new(26.0, 3.0, 6.0),
        lookat: Point::new(0.0, 2.0, 0.0),
        background: Color::ZERO,
        ..CameraSetup::default()
    };
    (world, setup)
}

/// Walls of the 555-unit Cornell room, lit by `light` at `light_corner`.
fn cornell_room(light: Arc<dyn Material>, light_corner: Point, light_u: Vector, light_v: Vector) -> HittableList {
    let mut world = HittableList::new();
    let red: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.65, 0.05, 0.05)));
    let white: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::splat(0.73)));
    let green: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.12, 0.45, 0.15)));

    let y = Vector::new(0.0, 555.0, 0.0);
    let z = Vector::new(0.0, 0.0, 555.0);
    let x = Vector::new(555.0, 0.0, 0.0);
    world.add(Arc::new(Quad::new(Point::new(555.0, 0.0, 0.0), y, z, green)));
    world.add(Arc::new(Quad::new(Point::ZERO, y, z, red)));
    world.add(Arc::new(Quad::new(light_corner, light_u, light_v, light)));
    world.add(Arc::new(Quad::new(Point::ZERO, x, z, white.clone())));
    world.add(Arc::new(Quad::new(Point::splat(555.0), -x, -z, white.clone())));
    world.add(Arc::new(Quad::new(Point::new(0.0, 0.0, 555.0), x, y, white)));
    world
}

/// A box of `size` turned by `degrees` about Y and moved to `offset`.
fn turned_box(size: Point, degrees: Float, offset: Vector, mat: Arc<dyn Material>) -> Arc<dyn Hittable> {
    let cube: Arc<dyn Hittable> = Arc::new(cuboid(Point::ZERO, size, mat));
    let cube: Arc<dyn Hittable> = Arc::new(RotateY::new(cube, degrees));
    Arc::new(Translate::new(cube, offset))
}

pub fn cornell_box() -> (HittableList, CameraSetup) {
    let light = Arc::new(DiffuseLight::from_color(Color::splat(12.0)));
    let mut world = cornell_room(
        light,
        Point::new(343.0, 554.0, 332.0),
        Vector::new(-130.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, -105.0),
    );
    let white: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::splat(0.73)));
    world.add(turned_box(Point::new(165.0, 330.0, 165.0), 15.0, Vector::new(265.0, 0.0, 295.0), white.clone()));
    world.add(turned_box(Point::splat(165.0), -18.0, Vector::new(130.0, 0.0, 65.0), white));

    let mirror: Arc<dyn Hittable> = Arc::new(Sphere::new(Point::ZERO, 45.0, Arc::new(Metal::new(Color::ONE, 0.0))));
    world.add(Arc::new(Translate::new(mirror, Vector::new(180.0, 210.0, 140.0))));
    let glass: Arc<dyn Hittable> = Arc::new(Sphere::new(Point::ZERO, 75.0, Arc::new(Dielectric::new(1.5))));
    world.add(Arc::new(Translate::new(glass, Vector::new(420.0, 75.0, 100.0))));

    (world, cornell_camera())
}

pub fn cornell_smoke() -> (HittableList, CameraSetup) {
    let light = Arc::new(DiffuseLight::from_color(Color::splat(7.0)));
    let mut world = cornell_room(
        light,
        Point::new(113.0, 554.0, 127.0),
        Vector::new(330.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 305.0),
    );
    let white: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::splat(0.73)));
    let box1 = turned_box(Point::new(165.0, 330.0, 165.0), 15.0, Vector::new(265.0, 0.0, 295.0), white.clone());
    let box2 = turned_box(Point::splat(165.0), -18.0, Vector::new(130.0, 0.0, 65.0), white);
    world.add(Arc::new(ConstantMedium::from_color(box1, 0.01, Color::ZERO)));
    world.add(Arc::new(ConstantMedium::from_color(box2, 0.01, Color::ONE)));

    (world, cornell_camera())
}
