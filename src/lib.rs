//! Ray/surface intersection and shading core for an offline path tracer.
//!
//! Geometry lives behind [`Hittable`], surface response behind [`Material`]
//! and [`Texture`]. Everything is immutable once built and shared through
//! [`Arc`], so independent ray queries can run side by side. Randomness is
//! never global to a scatter call: callers pass their own generator.

use std::f64::consts::PI;
use std::f64::{INFINITY, NEG_INFINITY};
use std::ops::{Add, Index};
use std::sync::Arc;

use rand::{Rng, RngCore};

pub mod aabb;
pub mod camera;
pub mod error;
pub mod hitrecord;
pub mod hittable;
pub mod material;
pub mod math;
pub mod random;
pub mod scene;
pub mod texture;

pub use aabb::*;
pub use camera::*;
pub use error::*;
pub use hitrecord::*;
pub use hittable::*;
pub use material::*;
pub use math::*;
pub use random::*;
pub use scene::*;
pub use texture::*;

pub type Color = glam::DVec3;
pub type Point = glam::DVec3;
pub type Vector = glam::DVec3;
pub type UV = glam::DVec2;
pub type Float = f64;
