//! Alignment modes for jointing and for padding to a common size.

/// Where to attach a drawable when jointing, and how to align it along the
/// perpendicular axis.
///
/// `Side*` variants attach to the right edge; `Under*` variants attach below.
///
/// ```text
///     SideTop        SideCenter     SideBottom
///     ┌───┬──┐       ┌───┐          ┌───┐
///     │ A │B │       │ A ├──┐       │ A │
///     │   ├──┘       │   │B │       │   ├──┐
///     └───┘          └───┴──┘       └───┴B─┘
///
///     UnderLeft      UnderCenter    UnderRight
///     ┌────┐         ┌────┐         ┌────┐
///     │ A  │         │ A  │         │ A  │
///     ├──┬─┘         └┬──┬┘         └─┬──┤
///     │B │            │B │            │B │
///     └──┘            └──┘            └──┘
/// ```
///
/// Center alignment uses floor division, so an odd 1-pixel remainder goes to
/// the bottom (for `SideCenter`) or the right (for `UnderCenter`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JointAlign {
    /// Joint to the right, top edges flush.
    SideTop,
    /// Joint to the right, vertically centered.
    SideCenter,
    /// Joint to the right, bottom edges flush.
    SideBottom,
    /// Joint below, left edges flush.
    UnderLeft,
    /// Joint below, horizontally centered.
    UnderCenter,
    /// Joint below, right edges flush.
    UnderRight,
}

/// Position in a 9-way grid. Used by [`unify_size`](crate::unify_size) to
/// say where a drawable sits inside its padded bounding box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionAlign {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    CenterCenter,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl PositionAlign {
    /// Decompose into a `(vertical, horizontal)` joint pair.
    ///
    /// The vertical half is a `Side*` align (controls the row), the
    /// horizontal half an `Under*` align (controls the column).
    pub const fn split(self) -> (JointAlign, JointAlign) {
        match self {
            Self::TopLeft => (JointAlign::SideTop, JointAlign::UnderLeft),
            Self::TopCenter => (JointAlign::SideTop, JointAlign::UnderCenter),
            Self::TopRight => (JointAlign::SideTop, JointAlign::UnderRight),
            Self::CenterLeft => (JointAlign::SideCenter, JointAlign::UnderLeft),
            Self::CenterCenter => (JointAlign::SideCenter, JointAlign::UnderCenter),
            Self::CenterRight => (JointAlign::SideCenter, JointAlign::UnderRight),
            Self::BottomLeft => (JointAlign::SideBottom, JointAlign::UnderLeft),
            Self::BottomCenter => (JointAlign::SideBottom, JointAlign::UnderCenter),
            Self::BottomRight => (JointAlign::SideBottom, JointAlign::UnderRight),
        }
    }
}
