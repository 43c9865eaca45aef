/// An RGBA color with 8-bit channels.
///
/// Colors are carried through the pipeline as opaque style data; no color
/// math or color-space conversion happens here. [`Color::normalize`] is the
/// form GPU sinks usually want.
///
/// # Examples
///
/// ```
/// use trazo::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.normalize(), [1.0, 0.0, 0.0, 1.0]);
///
/// let semi_blue = Color::rgba(0, 0, 255, 128);
/// assert_eq!(semi_blue.to_array(), [0, 0, 255, 128]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    /// Opaque black.
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    /// Opaque white.
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    /// An opaque color from red, green and blue channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// A color from all four channels. Alpha 0 is fully transparent,
    /// 255 fully opaque.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// An opaque grayscale color, Processing-style: `gray(0)` is black,
    /// `gray(255)` is white.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self([v, v, v, 255])
    }

    /// Channel values scaled to `[0.0, 1.0]`.
    #[inline]
    pub fn normalize(&self) -> [f32; 4] {
        let [r, g, b, a] = self.0;
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    #[inline]
    pub fn to_array(&self) -> [u8; 4] {
        self.0
    }

    /// True if the alpha channel is zero.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.0[3] == 0
    }
}
