//! The compositor: an immutable set of positioned parts with joint,
//! translate, and render operations.

use image::RgbaImage;

use crate::align::JointAlign;
use crate::figure::{Drawable, Part, Vector};

/// An immutable composition of positioned drawables.
///
/// Holds an ordered list of leaf [`Part`]s plus the cached tight bounding
/// box. Every operation returns a new `Jointer`; nothing is mutated in
/// place, so values can be reused, shared across threads, and jointed into
/// several different compositions. Pixels are only touched by
/// [`to_image`](Self::to_image).
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use imagejoint::{Blank, JointAlign, Jointer};
///
/// let badge = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 255, 255]));
/// let icon = RgbaImage::from_pixel(32, 32, Rgba([255, 255, 255, 255]));
///
/// let row = Jointer::new(icon)
///     .joint(JointAlign::SideCenter, Blank::new(4, 0))
///     .joint(JointAlign::SideCenter, badge);
/// assert_eq!(row.size(), (52, 32));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Jointer {
    parts: Vec<Part>,
    width: u32,
    height: u32,
}

impl Jointer {
    /// Composition of a single drawable placed at the origin.
    ///
    /// Constructing from an existing `Jointer` is an identity copy: same
    /// parts, same positions.
    pub fn new(source: impl Into<Drawable>) -> Self {
        Self::from_parts(source.into().into_parts(Vector::ZERO))
    }

    /// Composition with no parts. 0×0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from resolved leaf parts, computing the bounding box.
    pub(crate) fn from_parts(parts: Vec<Part>) -> Self {
        // Tight bounding box from the origin. Parts translated to negative
        // coordinates fall outside it and get clipped at render time.
        let width = parts
            .iter()
            .map(|p| p.position().x + i64::from(p.width()))
            .max()
            .unwrap_or(0)
            .max(0) as u32;
        let height = parts
            .iter()
            .map(|p| p.position().y + i64::from(p.height()))
            .max()
            .unwrap_or(0)
            .max(0) as u32;
        Self {
            parts,
            width,
            height,
        }
    }

    /// Bounding-box width: `max(part.x + part.width)`, 0 when empty.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bounding-box height: `max(part.y + part.height)`, 0 when empty.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` of the bounding box.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The positioned leaf parts, in append order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Whether the composition holds no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Attach `other` to the right of or below this composition.
    ///
    /// The result is a new value; neither input changes. When `other`
    /// overhangs on the aligned axis (e.g. a taller image jointed
    /// `SideCenter`), the existing parts are pushed forward by exactly the
    /// overhang instead of `other` being placed at a negative coordinate —
    /// every part of the result sits at non-negative positions.
    pub fn joint(&self, align: JointAlign, other: impl Into<Drawable>) -> Self {
        let other = other.into();
        let Vector { x: dx, y: dy } = self.placement(align, other.width(), other.height());

        // Split the unconstrained offset into a non-negative shift for the
        // existing parts and a non-negative paste offset for the new ones.
        let shift = Vector::new((-dx).max(0), (-dy).max(0));
        let paste = Vector::new(dx.max(0), dy.max(0));

        let mut parts: Vec<Part> = self.parts.iter().map(|p| p.shifted(shift)).collect();
        parts.extend(other.into_parts(paste));
        Self::from_parts(parts)
    }

    /// Left fold of [`joint`](Self::joint) over a sequence of drawables.
    ///
    /// An empty sequence returns a value equal to `self`.
    pub fn joint_all<D>(&self, align: JointAlign, others: impl IntoIterator<Item = D>) -> Self
    where
        D: Into<Drawable>,
    {
        others
            .into_iter()
            .fold(self.clone(), |acc, other| acc.joint(align, other))
    }

    /// Every part shifted by `vector`, bounding box recomputed.
    ///
    /// A positive shift grows the bounding box; a negative one can push
    /// parts past the origin, where they are clipped at render time.
    pub fn translate(&self, vector: Vector) -> Self {
        Self::from_parts(self.parts.iter().map(|p| p.shifted(vector)).collect())
    }

    /// Unconstrained offset for `other`'s top-left corner, as if both
    /// compositions sat in infinite space. May be negative on the
    /// perpendicular axis when `other` is larger.
    fn placement(&self, align: JointAlign, other_width: u32, other_height: u32) -> Vector {
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        let (ow, oh) = (i64::from(other_width), i64::from(other_height));
        // div_euclid floors on negative values, so centering an overhanging
        // drawable splits the odd pixel the same way as the non-overhang case.
        match align {
            JointAlign::SideTop => Vector::new(w, 0),
            JointAlign::SideCenter => Vector::new(w, (h - oh).div_euclid(2)),
            JointAlign::SideBottom => Vector::new(w, h - oh),
            JointAlign::UnderLeft => Vector::new(0, h),
            JointAlign::UnderCenter => Vector::new((w - ow).div_euclid(2), h),
            JointAlign::UnderRight => Vector::new(w - ow, h),
        }
    }

    /// Render onto a freshly allocated transparent RGBA canvas.
    ///
    /// Image parts are pasted at their absolute positions (pixel
    /// replacement, no blending); blanks contribute nothing. Pure function
    /// of the part list — rendering twice yields identical buffers.
    pub fn to_image(&self) -> RgbaImage {
        let mut canvas = RgbaImage::new(self.width, self.height);
        for part in &self.parts {
            part.draw(&mut canvas);
        }
        canvas
    }
}
