//! Pad a set of drawables to a common bounding box.

use crate::align::PositionAlign;
use crate::figure::{Blank, Drawable};
use crate::jointer::Jointer;

/// Pad each drawable with transparent space up to the maximum width and
/// height of the whole set.
///
/// `align` says where a drawable sits inside its padded box. Each result is
/// built from two blank anchors: a zero-width column the full height (jointed
/// sideways per the vertical half of `align`), then a full-width, zero-height
/// row underneath (per the horizontal half).
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use imagejoint::{PositionAlign, unify_size};
///
/// let wide = RgbaImage::from_pixel(100, 50, Rgba([255, 0, 0, 255]));
/// let tall = RgbaImage::from_pixel(40, 80, Rgba([0, 0, 255, 255]));
///
/// let unified = unify_size(PositionAlign::CenterCenter, [wide, tall]);
/// assert!(unified.iter().all(|j| j.size() == (100, 80)));
/// ```
pub fn unify_size<D>(align: PositionAlign, drawables: impl IntoIterator<Item = D>) -> Vec<Jointer>
where
    D: Into<Drawable>,
{
    let drawables: Vec<Drawable> = drawables.into_iter().map(Into::into).collect();
    let width = drawables.iter().map(Drawable::width).max().unwrap_or(0);
    let height = drawables.iter().map(Drawable::height).max().unwrap_or(0);
    let (vertical, horizontal) = align.split();

    drawables
        .into_iter()
        .map(|drawable| {
            Jointer::new(Blank::new(0, height))
                .joint(vertical, drawable)
                .joint(horizontal, Blank::new(width, 0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Figure, Vector};
    use image::{Rgba, RgbaImage};

    fn solid(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([4, 5, 6, 255]))
    }

    /// Position of the single image part within a unified jointer.
    fn image_position(jointer: &Jointer) -> Vector {
        let mut images = jointer
            .parts()
            .iter()
            .filter(|p| matches!(p.figure(), Figure::Image(_)));
        let part = images.next().expect("one image part");
        assert!(images.next().is_none());
        part.position()
    }

    #[test]
    fn all_results_share_the_max_bounding_box() {
        let unified = unify_size(
            PositionAlign::TopLeft,
            [solid(100, 50), solid(40, 80), solid(60, 60)],
        );
        assert_eq!(unified.len(), 3);
        for jointer in &unified {
            assert_eq!(jointer.size(), (100, 80));
        }
    }

    #[test]
    fn center_center_centers_both_axes() {
        let unified = unify_size(PositionAlign::CenterCenter, [solid(100, 50), solid(40, 80)]);
        assert_eq!(image_position(&unified[0]), Vector::new(0, 15));
        assert_eq!(image_position(&unified[1]), Vector::new(30, 0));
    }

    #[test]
    fn corner_alignments_pin_to_edges() {
        let inputs = || [solid(100, 50), solid(40, 80)];
        let top_left = unify_size(PositionAlign::TopLeft, inputs());
        assert_eq!(image_position(&top_left[0]), Vector::ZERO);
        assert_eq!(image_position(&top_left[1]), Vector::ZERO);

        let bottom_right = unify_size(PositionAlign::BottomRight, inputs());
        assert_eq!(image_position(&bottom_right[0]), Vector::new(0, 30));
        assert_eq!(image_position(&bottom_right[1]), Vector::new(60, 0));
    }

    #[test]
    fn empty_input_yields_no_jointers() {
        let unified = unify_size(PositionAlign::CenterCenter, Vec::<Blank>::new());
        assert!(unified.is_empty());
    }
}
