use bytemuck::{Pod, Zeroable};

/// A point in 3D space. The fundamental unit of shape geometry.
///
/// `Point3` is plain old data, so a `&[Point3]` produced by the pipeline can
/// be handed to a GPU sink byte-for-byte with [`bytemuck::cast_slice`].
///
/// # Examples
///
/// ```
/// use trazo::Point3;
///
/// let p = Point3::new(1.0, 2.0, 3.0);
/// let q = Point3::xy(10.0, 20.0); // z defaults to 0
/// assert_eq!((p + q).to_array(), [11.0, 22.0, 3.0]);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point on the `z = 0` plane.
    #[inline]
    pub const fn xy(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Projection consumed by the tessellator, which works in the plane.
    #[inline]
    pub(crate) fn to_lyon(self) -> lyon::math::Point {
        lyon::math::point(self.x, self.y)
    }
}

impl core::ops::Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl core::ops::Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl core::ops::Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<(f32, f32)> for Point3 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::xy(x, y)
    }
}

impl From<(f32, f32, f32)> for Point3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}
