//! Drawable sources and their placement within a composition.
//!
//! Two layers: [`Drawable`] is what callers hand in (an image, a blank
//! spacer, or a whole [`Jointer`]); [`Figure`] is what a composition stores
//! (image or blank only). A nested jointer is flattened into its leaf parts
//! on entry, so a part list never nests and rendering never recurses.

use std::sync::Arc;

use image::{DynamicImage, RgbaImage, imageops};

use crate::jointer::Jointer;

/// Integer 2-D offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i64,
    pub y: i64,
}

impl Vector {
    /// The origin offset.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new vector.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl core::ops::Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// A drawable with size but no pixels — a transparent spacer.
///
/// Takes up room in the layout and contributes nothing at render time.
/// Zero on one axis is fine: `Blank::new(0, h)` is a zero-width column used
/// as a vertical alignment anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Blank {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Blank {
    /// Create a blank spacer.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A leaf drawable stored inside a composition: pixels or transparent space.
///
/// Pixel buffers are held behind [`Arc`], so cloning a figure (which happens
/// on every joint) never copies pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum Figure {
    /// An opaque pixel buffer.
    Image(Arc<RgbaImage>),
    /// A transparent spacer.
    Blank(Blank),
}

impl Figure {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Self::Image(image) => image.width(),
            Self::Blank(blank) => blank.width,
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            Self::Image(image) => image.height(),
            Self::Blank(blank) => blank.height,
        }
    }

    /// Paste onto `canvas` with the top-left corner at `position`.
    /// Blanks draw nothing.
    pub(crate) fn draw(&self, canvas: &mut RgbaImage, position: Vector) {
        match self {
            Self::Image(image) => imageops::replace(canvas, &**image, position.x, position.y),
            Self::Blank(_) => {}
        }
    }
}

/// Anything that can be jointed: an image, a blank spacer, or an existing
/// [`Jointer`].
///
/// Operations accept `impl Into<Drawable>`, so callers pass [`RgbaImage`],
/// [`DynamicImage`], [`Blank`], [`Jointer`], or an `Arc<RgbaImage>` (shared
/// pixel buffer) directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    /// An opaque pixel buffer.
    Image(Arc<RgbaImage>),
    /// A transparent spacer.
    Blank(Blank),
    /// An existing composition; flattened into leaf parts when jointed.
    Jointer(Jointer),
}

impl Drawable {
    /// Width in pixels (bounding-box width for a jointer).
    pub fn width(&self) -> u32 {
        match self {
            Self::Image(image) => image.width(),
            Self::Blank(blank) => blank.width,
            Self::Jointer(jointer) => jointer.width(),
        }
    }

    /// Height in pixels (bounding-box height for a jointer).
    pub fn height(&self) -> u32 {
        match self {
            Self::Image(image) => image.height(),
            Self::Blank(blank) => blank.height,
            Self::Jointer(jointer) => jointer.height(),
        }
    }

    /// Emit leaf parts positioned at `offset`.
    ///
    /// An image or blank becomes a single part; a jointer contributes each
    /// of its (already leaf) parts shifted by `offset`.
    pub(crate) fn into_parts(self, offset: Vector) -> Vec<Part> {
        match self {
            Self::Image(image) => vec![Part::new(Figure::Image(image), offset)],
            Self::Blank(blank) => vec![Part::new(Figure::Blank(blank), offset)],
            Self::Jointer(jointer) => jointer
                .parts()
                .iter()
                .map(|part| part.shifted(offset))
                .collect(),
        }
    }
}

impl From<RgbaImage> for Drawable {
    fn from(image: RgbaImage) -> Self {
        Self::Image(Arc::new(image))
    }
}

impl From<Arc<RgbaImage>> for Drawable {
    fn from(image: Arc<RgbaImage>) -> Self {
        Self::Image(image)
    }
}

impl From<&Arc<RgbaImage>> for Drawable {
    fn from(image: &Arc<RgbaImage>) -> Self {
        Self::Image(Arc::clone(image))
    }
}

impl From<DynamicImage> for Drawable {
    fn from(image: DynamicImage) -> Self {
        Self::Image(Arc::new(image.into_rgba8()))
    }
}

impl From<Blank> for Drawable {
    fn from(blank: Blank) -> Self {
        Self::Blank(blank)
    }
}

impl From<Jointer> for Drawable {
    fn from(jointer: Jointer) -> Self {
        Self::Jointer(jointer)
    }
}

impl From<&Jointer> for Drawable {
    fn from(jointer: &Jointer) -> Self {
        Self::Jointer(jointer.clone())
    }
}

/// A leaf figure bound to an absolute position within a composition.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    figure: Figure,
    position: Vector,
}

impl Part {
    pub(crate) fn new(figure: Figure, position: Vector) -> Self {
        Self { figure, position }
    }

    /// The figure placed here.
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Absolute offset of the figure's top-left corner.
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Width of the figure.
    pub fn width(&self) -> u32 {
        self.figure.width()
    }

    /// Height of the figure.
    pub fn height(&self) -> u32 {
        self.figure.height()
    }

    /// A copy of this part moved by `vector`.
    pub fn shifted(&self, vector: Vector) -> Self {
        Self {
            figure: self.figure.clone(),
            position: self.position + vector,
        }
    }

    pub(crate) fn draw(&self, canvas: &mut RgbaImage) {
        self.figure.draw(canvas, self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([9, 9, 9, 255]))
    }

    // ── Vector ──────────────────────────────────────────────────────────

    #[test]
    fn vector_addition() {
        assert_eq!(Vector::new(3, -4) + Vector::new(-1, 10), Vector::new(2, 6));
        assert_eq!(Vector::ZERO + Vector::new(5, 7), Vector::new(5, 7));
    }

    // ── Figure / Drawable dimensions ────────────────────────────────────

    #[test]
    fn figure_dimensions_delegate_to_source() {
        let image = Figure::Image(Arc::new(solid(40, 25)));
        assert_eq!((image.width(), image.height()), (40, 25));

        let blank = Figure::Blank(Blank::new(0, 120));
        assert_eq!((blank.width(), blank.height()), (0, 120));
    }

    #[test]
    fn drawable_dimensions_for_jointer_are_bounding_box() {
        let jointer = Jointer::new(solid(30, 10));
        let drawable = Drawable::from(&jointer);
        assert_eq!((drawable.width(), drawable.height()), (30, 10));
    }

    // ── Part ────────────────────────────────────────────────────────────

    #[test]
    fn shifted_offsets_position_only() {
        let part = Part::new(Figure::Blank(Blank::new(8, 2)), Vector::new(1, 1));
        let moved = part.shifted(Vector::new(10, -1));
        assert_eq!(moved.position(), Vector::new(11, 0));
        assert_eq!((moved.width(), moved.height()), (8, 2));
        // original untouched
        assert_eq!(part.position(), Vector::new(1, 1));
    }

    // ── Flattening ──────────────────────────────────────────────────────

    #[test]
    fn image_becomes_single_part_at_offset() {
        let parts = Drawable::from(solid(5, 5)).into_parts(Vector::new(7, 3));
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].position(), Vector::new(7, 3));
    }

    #[test]
    fn jointer_flattens_to_absolute_positions() {
        use crate::align::JointAlign;

        let inner = Jointer::new(solid(10, 10)).joint(JointAlign::SideTop, solid(10, 10));
        let parts = Drawable::from(inner).into_parts(Vector::new(100, 50));
        let positions: Vec<Vector> = parts.iter().map(Part::position).collect();
        assert_eq!(positions, vec![Vector::new(100, 50), Vector::new(110, 50)]);
        for part in &parts {
            assert!(matches!(part.figure(), Figure::Image(_)));
        }
    }
}
