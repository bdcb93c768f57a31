//! Lazy side-by-side / stacked image composition with 6-way joint alignment.
//!
//! Builds composite raster images by jointing smaller images (or transparent
//! blank spacers) to the right of or below one another. The builder phase is
//! pure integer geometry over immutable values — pixels materialize only at
//! an explicit [`Jointer::to_image`] call.
//!
//! # Modules
//!
//! - [`align`] — Joint alignment (6-way) and position alignment (9-way grid)
//! - [`figure`] — Offsets, blank spacers, leaf figures, and positioned parts
//! - [`jointer`] — The compositor: joint, translate, render
//! - [`unify`] — Pad a set of drawables to a common bounding box
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use imagejoint::{JointAlign, Jointer};
//!
//! let red = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));
//! let green = RgbaImage::from_pixel(100, 50, Rgba([0, 255, 0, 255]));
//!
//! let jointed = Jointer::new(red).joint(JointAlign::SideCenter, green);
//! assert_eq!(jointed.size(), (200, 100));
//!
//! let canvas = jointed.to_image();
//! assert_eq!(canvas.dimensions(), (200, 100));
//! ```

#![forbid(unsafe_code)]

pub mod align;
pub mod figure;
pub mod jointer;
pub mod unify;

pub use align::{JointAlign, PositionAlign};
pub use figure::{Blank, Drawable, Figure, Part, Vector};
pub use jointer::Jointer;
pub use unify::unify_size;
