use crate::*;

pub trait Texture: Send + Sync {
    fn value(&self, uv: UV, p: &Point) -> Color;
}

pub struct SolidColor {
    albedo: Color,
}

/// 3D checker pattern picking between two textures by cell parity.
pub struct Checkered {
    inv_scale: Float,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl SolidColor {
    pub fn from_color(albedo: Color) -> Self {
        Self { albedo }
    }
    pub fn from_rgb(x: Float, y: Float, z: Float) -> Self {
        let albedo = Color { x, y, z };
        Self { albedo }
    }
}

impl Checkered {
    pub fn new(scale: Float, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self { inv_scale: scale.recip(), even, odd }
    }
    pub fn from_color(scale: Float, a: Color, b: Color) -> Self {
        Self::new(scale, Arc::new(SolidColor::from_color(a)), Arc::new(SolidColor::from_color(b)))
    }
}

impl Texture for SolidColor {
    fn value(&self, _: UV, _: &Point) -> Color {
        self.albedo
    }
}

impl Texture for Checkered {
    fn value(&self, uv: UV, p: &Point) -> Color {
        let cell = (self.inv_scale * *p).floor();
        match (cell.x as i64 + cell.y as i64 + cell.z as i64).rem_euclid(2) == 0 {
            true => self.even.value(uv, p),
            false => self.odd.value(uv, p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::ZERO;
    const WHITE: Color = Color::ONE;

    #[test]
    fn solid_ignores_coordinates() {
        let tex = SolidColor::from_rgb(0.2, 0.4, 0.6);
        let c = Color::new(0.2, 0.4, 0.6);
        assert_eq!(tex.value(UV::ZERO, &Point::ZERO), c);
        assert_eq!(tex.value(UV::new(0.3, 0.9), &Point::new(-7.0, 1e6, 3.0)), c);
    }

    #[test]
    fn checker_parity_alternates_per_cell() {
        let tex = Checkered::from_color(1.0, WHITE, BLACK);
        let at = |x, y, z| tex.value(UV::ZERO, &Point::new(x, y, z));
        assert_eq!(at(0.0, 0.0, 0.0), WHITE);
        assert_eq!(at(1.0, 0.0, 0.0), BLACK);
        assert_eq!(at(2.0, 0.0, 0.0), WHITE);
        assert_eq!(at(1.0, 1.0, 0.0), WHITE);
        assert_eq!(at(1.0, 1.0, 1.0), BLACK);
    }

    #[test]
    fn checker_handles_negative_cells() {
        let tex = Checkered::from_color(1.0, WHITE, BLACK);
        // floor(-0.5) = -1: odd
        assert_eq!(tex.value(UV::ZERO, &Point::new(-0.5, 0.0, 0.0)), BLACK);
        assert_eq!(tex.value(UV::ZERO, &Point::new(-1.5, 0.0, 0.0)), WHITE);
    }

    #[test]
    fn checker_scale_sets_cell_size() {
        let tex = Checkered::from_color(0.5, WHITE, BLACK);
        assert_eq!(tex.value(UV::ZERO, &Point::new(0.25, 0.0, 0.0)), WHITE);
        assert_eq!(tex.value(UV::ZERO, &Point::new(0.75, 0.0, 0.0)), BLACK);
    }

    #[test]
    fn checker_nests_textures() {
        let inner: Arc<dyn Texture> = Arc::new(Checkered::from_color(0.5, WHITE, BLACK));
        let tex = Checkered::new(1.0, inner, Arc::new(SolidColor::from_color(Color::X)));
        assert_eq!(tex.value(UV::ZERO, &Point::new(0.75, 0.0, 0.0)), BLACK);
        assert_eq!(tex.value(UV::ZERO, &Point::new(1.25, 0.0, 0.0)), Color::X);
    }
}
