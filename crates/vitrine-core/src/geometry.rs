#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Scene coordinates are world units with the origin at the viewport center,
//! `+x` right, `+y` up, `+z` toward the camera.

/// A 2D vector for sizes and scales.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A vector with both components equal.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Linear interpolation toward `other` by `t` in [0, 1].
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Component-wise scale by a scalar.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A 3D vector for positions and Euler rotations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation toward `other` by `t` in [0, 1].
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Whether all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A full item transform: position, planar scale, Euler rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// World position.
    pub position: Vec3,
    /// Planar scale (width, height) in world units.
    pub scale: Vec2,
    /// Euler rotation in radians (x, y, z).
    pub rotation: Vec3,
}

impl Transform {
    /// Identity transform at the origin with zero scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        scale: Vec2::ZERO,
        rotation: Vec3::ZERO,
    };

    /// Create a transform from its three parts.
    #[inline]
    pub const fn new(position: Vec3, scale: Vec2, rotation: Vec3) -> Self {
        Self {
            position,
            scale,
            rotation,
        }
    }

    /// A transform positioned at `position` with the given scale, unrotated.
    #[inline]
    pub const fn at(position: Vec3, scale: Vec2) -> Self {
        Self::new(position, scale, Vec3::ZERO)
    }

    /// Whether every component of the transform is finite.
    ///
    /// A non-finite transform is treated as malformed by animation code:
    /// the affected item is skipped rather than propagated.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.scale.is_finite() && self.rotation.is_finite()
    }
}

/// Viewport dimensions in world units.
///
/// Layout code never consumes raw resize values directly; it goes through
/// [`ViewportMetrics::sanitized`] so a zero or negative dimension (mid-layout
/// resize, hidden tab) falls back to the last known good metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Viewport width, always positive.
    pub width: f32,
    /// Viewport height, always positive.
    pub height: f32,
}

impl ViewportMetrics {
    /// Create metrics from known-positive dimensions.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Validate raw dimensions, falling back to `last_good` when either
    /// dimension is non-positive or non-finite.
    #[must_use]
    pub fn sanitized(width: f32, height: f32, last_good: Self) -> Self {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            Self { width, height }
        } else {
            last_good
        }
    }

    /// Half the viewport width.
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Half the viewport height.
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        // Sensible desktop-ish default so a missing first resize event
        // still yields a usable layout.
        Self::new(1920.0, 1080.0)
    }
}
