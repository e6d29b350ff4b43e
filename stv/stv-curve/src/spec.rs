//! Curve families and their parameters.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use stv_core::{Mat3, Scalar, Vec3};
use stv_noise::NoiseSource;

use crate::Curve;

/// Frequency applied to the along-line coordinate before sampling noise.
pub const PERLIN_FREQUENCY: Scalar = 0.3;

/// Ground-plane direction a grid line runs along before rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Z,
}

impl Axis {
    /// Splits a local point into (along, across) coordinates.
    #[inline]
    pub fn split(self, p: Vec3) -> (Scalar, Scalar) {
        match self {
            Axis::X => (p.x, p.z),
            Axis::Z => (p.z, p.x),
        }
    }

    #[inline]
    pub fn join(self, along: Scalar, across: Scalar) -> Vec3 {
        match self {
            Axis::X => Vec3::new(along, 0.0, across),
            Axis::Z => Vec3::new(across, 0.0, along),
        }
    }

    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }
}

/// A straight ground-plane line whose cross-axis coordinate is displaced by
/// noise: `across = shift + amplitude · noise(k · along, y_sample, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinParams {
    /// Direction the line runs along.
    pub axis: Axis,
    /// Second noise coordinate; neighbouring grid rows use neighbouring values.
    pub y_sample: Scalar,
    /// Constant cross-axis offset.
    pub shift: Scalar,
    /// Noise amplitude (default 1).
    pub amplitude: Scalar,
    /// Rotation about the vertical axis, radians (default 0).
    pub theta: Scalar,
    /// Uniform scale applied after rotation (default 1).
    pub scale: Scalar,
    /// Along-axis coordinate at t = 0 (default −20).
    pub start: Scalar,
    /// Along-axis coordinate at t = 1 (default 20).
    pub end: Scalar,
}

impl Default for PerlinParams {
    fn default() -> Self {
        Self { axis: Axis::X, y_sample: 0.0, shift: 0.0, amplitude: 1.0, theta: 0.0, scale: 1.0, start: -20.0, end: 20.0 }
    }
}

impl PerlinParams {
    #[inline]
    pub fn along(&self, t: Scalar) -> Scalar {
        self.start + t * (self.end - self.start)
    }

    /// Cross-axis displacement at an along-axis coordinate.
    #[inline]
    pub fn warp(&self, noise: &dyn NoiseSource, along: Scalar) -> Scalar {
        self.shift + self.amplitude * noise.sample(PERLIN_FREQUENCY * along, self.y_sample, 0.0)
    }

    /// Applies rotation and scale to a point in the line's local frame.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        Mat3::from_rotation_y(self.theta) * local * self.scale
    }

    /// Inverse of [`PerlinParams::to_world`].
    #[inline]
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        Mat3::from_rotation_y(-self.theta) * (world / self.scale)
    }

    /// World point for an along-axis coordinate.
    pub fn point_along(&self, noise: &dyn NoiseSource, along: Scalar) -> Vec3 {
        self.to_world(self.axis.join(along, self.warp(noise, along)))
    }
}

/// A Perlin-warped line bound to the noise field it samples.
#[derive(Clone)]
pub struct PerlinCurve {
    pub params: PerlinParams,
    pub noise: Rc<dyn NoiseSource>,
}

impl PerlinCurve {
    pub fn new(params: PerlinParams, noise: Rc<dyn NoiseSource>) -> Self {
        Self { params, noise }
    }
}

impl fmt::Debug for PerlinCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerlinCurve").field("params", &self.params).finish_non_exhaustive()
    }
}

impl Curve for PerlinCurve {
    fn point_at(&self, t: Scalar) -> Vec3 {
        self.params.point_along(self.noise.as_ref(), self.params.along(t))
    }
}

/// Horizontal circle (or arc) of `radius · scale` around the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleParams {
    pub radius: Scalar,
    pub scale: Scalar,
    /// Start angle in radians (default 0).
    pub start: Scalar,
    /// End angle in radians (default 2π).
    pub end: Scalar,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self { radius: 1.0, scale: 1.0, start: 0.0, end: TAU }
    }
}

impl CircleParams {
    pub fn point_at(&self, t: Scalar) -> Vec3 {
        let a = self.start + t * (self.end - self.start);
        Vec3::new(self.radius * a.cos(), 0.0, self.radius * a.sin()) * self.scale
    }
}

/// Full loop of the given radius, either horizontal at height `shift` or,
/// when `theta` is set, a vertical meridian turned by `theta` about the
/// vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopParams {
    pub radius: Scalar,
    pub shift: Scalar,
    pub theta: Option<Scalar>,
    pub scale: Scalar,
}

impl Default for LoopParams {
    fn default() -> Self {
        Self { radius: 1.0, shift: 0.0, theta: None, scale: 1.0 }
    }
}

impl LoopParams {
    pub fn horizontal(radius: Scalar, shift: Scalar) -> Self {
        Self { radius, shift, ..Self::default() }
    }

    pub fn meridian(radius: Scalar, theta: Scalar) -> Self {
        Self { radius, theta: Some(theta), ..Self::default() }
    }

    /// The circle where the horizontal plane at `height` cuts a sphere of
    /// `radius`; heights outside the sphere collapse to a point.
    pub fn latitude(radius: Scalar, height: Scalar) -> Self {
        let r = (radius * radius - height * height).max(0.0).sqrt();
        Self::horizontal(r, height)
    }

    /// Angle in radians: t = 0 → 0, t = 0.5 → π.
    #[inline]
    pub fn angle(&self, t: Scalar) -> Scalar {
        TAU * t
    }

    pub fn point_at_angle(&self, a: Scalar) -> Vec3 {
        let (s, c) = a.sin_cos();
        let r = self.radius;
        let p = match self.theta {
            None => Vec3::new(r * c, self.shift, r * s),
            Some(theta) => Vec3::new(r * c * theta.cos(), self.shift + r * s, r * c * theta.sin()),
        };
        p * self.scale
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        Vec3::new(0.0, self.shift * self.scale, 0.0)
    }
}

/// `(3t − 1.5, sin 2πt, 0) · scale` over t rescaled into [start, end].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SineParams {
    pub scale: Scalar,
    pub start: Scalar,
    pub end: Scalar,
}

impl Default for SineParams {
    fn default() -> Self {
        Self { scale: 1.0, start: 0.0, end: 1.0 }
    }
}

impl SineParams {
    pub fn point_at(&self, t: Scalar) -> Vec3 {
        let tt = self.start + t * (self.end - self.start);
        Vec3::new(3.0 * tt - 1.5, (2.0 * PI * tt).sin(), 0.0) * self.scale
    }
}

/// Every curve family the scenes draw, behind one t → point contract.
#[derive(Clone, Debug)]
pub enum CurveSpec {
    PerlinWarped(PerlinCurve),
    Circle(CircleParams),
    Loop(LoopParams),
    SineWave(SineParams),
}

impl CurveSpec {
    pub fn perlin(params: PerlinParams, noise: Rc<dyn NoiseSource>) -> Self {
        CurveSpec::PerlinWarped(PerlinCurve::new(params, noise))
    }
}

impl Curve for CurveSpec {
    fn point_at(&self, t: Scalar) -> Vec3 {
        match self {
            CurveSpec::PerlinWarped(c) => c.point_at(t),
            CurveSpec::Circle(c) => c.point_at(t),
            CurveSpec::Loop(l) => l.point_at_angle(l.angle(t)),
            CurveSpec::SineWave(s) => s.point_at(t),
        }
    }
}

/// Serialisable description of a curve; Perlin curves get their noise field
/// when bound to a scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveDescriptor {
    Perlin(PerlinParams),
    Circle(CircleParams),
    Loop(LoopParams),
    Sine(SineParams),
}

impl CurveDescriptor {
    pub fn bind(self, noise: &Rc<dyn NoiseSource>) -> CurveSpec {
        match self {
            CurveDescriptor::Perlin(p) => CurveSpec::perlin(p, Rc::clone(noise)),
            CurveDescriptor::Circle(c) => CurveSpec::Circle(c),
            CurveDescriptor::Loop(l) => CurveSpec::Loop(l),
            CurveDescriptor::Sine(s) => CurveSpec::SineWave(s),
        }
    }
}
