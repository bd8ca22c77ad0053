//! Shape catalog and sampling dispatch.
//!
//! The catalog order is the cycle order used by shape-advance gestures.

use glam::Vec3;
use rand::Rng;

use crate::shapes::primitives::*;
use crate::shapes::surfaces::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Pyramid,
    Heart,
    Saturn,
    TorusKnot,
    KleinBottle,
    Mobius,
    Torus,
    Dini,
    EightFigure,
    Cochleoid,
    Henneberg,
    Enneper,
    Catalan,
    Trevilley,
    Roman,
}

impl ShapeKind {
    /// Every shape, in cycle order.
    pub const ALL: [ShapeKind; 16] = [
        ShapeKind::Sphere,
        ShapeKind::Pyramid,
        ShapeKind::Heart,
        ShapeKind::Saturn,
        ShapeKind::TorusKnot,
        ShapeKind::KleinBottle,
        ShapeKind::Mobius,
        ShapeKind::Torus,
        ShapeKind::Dini,
        ShapeKind::EightFigure,
        ShapeKind::Cochleoid,
        ShapeKind::Henneberg,
        ShapeKind::Enneper,
        ShapeKind::Catalan,
        ShapeKind::Trevilley,
        ShapeKind::Roman,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of this shape in the cycle.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Shape at `index`, wrapping modulo the catalog length.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// The shape after this one, wrapping back to the first.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Label shown in the UI while this shape is active.
    pub fn display_name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "FIREWORK (SPHERE)",
            ShapeKind::Pyramid => "PYRAMID",
            ShapeKind::Heart => "HEART",
            ShapeKind::Saturn => "SATURN",
            ShapeKind::TorusKnot => "TORUS KNOT (CRAZY)",
            ShapeKind::KleinBottle => "KLEIN BOTTLE (CRAZY)",
            ShapeKind::Mobius => "MOBIUS STRIP",
            ShapeKind::Torus => "SIMPLE TORUS (DONUT)",
            ShapeKind::Dini => "DINI'S SURFACE (SPIRAL)",
            ShapeKind::EightFigure => "EIGHT FIGURE (SPHERICAL)",
            ShapeKind::Cochleoid => "COCHLEOID (SHELL)",
            ShapeKind::Henneberg => "HENNEBERG SURFACE",
            ShapeKind::Enneper => "ENNEPER MINIMAL SURFACE",
            ShapeKind::Catalan => "CATALAN MINIMAL SURFACE",
            ShapeKind::Trevilley => "TREVILLEY MINIMAL SURFACE",
            ShapeKind::Roman => "ROMAN SURFACE",
        }
    }

    /// Draw one point on this shape.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Vec3 {
        sample(self, rng)
    }
}

/// Draw one point on `kind`. Calls are independent of each other, so the
/// caller may invoke this once per particle in any order.
pub fn sample<R: Rng + ?Sized>(kind: ShapeKind, rng: &mut R) -> Vec3 {
    match kind {
        ShapeKind::Sphere => shape_sphere(rng),
        ShapeKind::Pyramid => shape_pyramid(rng),
        ShapeKind::Heart => shape_heart(rng),
        ShapeKind::Saturn => shape_saturn(rng),
        ShapeKind::TorusKnot => shape_torus_knot(rng),
        ShapeKind::KleinBottle => shape_klein_bottle(rng),
        ShapeKind::Mobius => shape_mobius(rng),
        ShapeKind::Torus => shape_torus(rng),
        ShapeKind::Dini => shape_dini(rng),
        ShapeKind::EightFigure => shape_eight_figure(rng),
        ShapeKind::Cochleoid => shape_cochleoid(rng),
        ShapeKind::Henneberg => shape_henneberg(rng),
        ShapeKind::Enneper => shape_enneper(rng),
        ShapeKind::Catalan => shape_catalan(rng),
        ShapeKind::Trevilley => shape_trevilley(rng),
        ShapeKind::Roman => shape_roman(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_catalog_position() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i, "{:?} out of order", kind);
        }
    }

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(ShapeKind::Roman.next(), ShapeKind::Sphere);
        assert_eq!(ShapeKind::Sphere.next(), ShapeKind::Pyramid);
    }
}
