//! Output of the layout renderer: a stem plus its branch groups.
//!
//! Coordinates are in world space with the stem base at the origin and `+y`
//! pointing up. Colours are CSS strings, copied from the plant or set by a
//! skin, and are left for the UI layer to materialize.

use crate::types::LeafType;
use glam::Vec2;

/// How the stem is filled.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(String),
    /// CSS-style linear gradient; `angle_deg` follows CSS (0° = bottom to top).
    LinearGradient {
        angle_deg: f32,
        from: String,
        to: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset: Vec2,
    pub blur: f32,
    pub color: String,
    pub inset: bool,
}

impl Shadow {
    pub fn glow(blur: f32, color: &str) -> Self {
        Self {
            offset: Vec2::ZERO,
            blur,
            color: color.to_owned(),
            inset: false,
        }
    }

    pub fn inset(offset: Vec2, blur: f32, color: &str) -> Self {
        Self {
            offset,
            blur,
            color: color.to_owned(),
            inset: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerRadius {
    /// Fully rounded ends.
    Full,
    Px(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: String,
}

/// Colour filter applied on top of the stem's fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Filter {
    pub hue_rotate_deg: f32,
    pub brightness: f32,
}

/// Visual treatment of the stem. Skins only ever touch this.
#[derive(Clone, Debug, PartialEq)]
pub struct StemStyle {
    pub fill: Fill,
    pub shadows: Vec<Shadow>,
    pub corner_radius: Option<CornerRadius>,
    pub border: Option<Border>,
    pub filter: Option<Filter>,
}

impl StemStyle {
    pub fn solid(color: &str) -> Self {
        Self {
            fill: Fill::Solid(color.to_owned()),
            shadows: Vec::new(),
            corner_radius: None,
            border: None,
            filter: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stem {
    pub length: f32,
    pub width: f32,
    pub style: StemStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub length: f32,
    /// Tilt away from vertical; positive leans right.
    pub angle_deg: f32,
    pub width: f32,
    pub color: String,
}

impl Branch {
    /// Unit vector along the branch, from its attach point outwards.
    pub fn direction(&self) -> Vec2 {
        let (sin, cos) = self.angle_deg.to_radians().sin_cos();
        Vec2::new(sin, cos)
    }

    pub fn tip(&self, attach: Vec2) -> Vec2 {
        attach + self.direction() * self.length
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
    pub index: usize,
    /// Offset from the attach point before drift is applied.
    pub offset: Vec2,
    /// Downward shift applied after `offset`.
    pub drift: f32,
    pub kind: LeafType,
    pub color: String,
    pub opacity: f32,
    pub size: f32,
}

impl Leaf {
    pub fn position(&self, attach: Vec2) -> Vec2 {
        attach + self.offset - Vec2::new(0.0, self.drift)
    }
}

/// A branch line plus the leaves hung around its attach point.
#[derive(Clone, Debug, PartialEq)]
pub struct BranchGroup {
    pub index: usize,
    /// Height of the attach point above the stem base.
    pub attach_height: f32,
    pub branch: Branch,
    pub leaves: Vec<Leaf>,
}

impl BranchGroup {
    pub fn attach_point(&self) -> Vec2 {
        Vec2::new(0.0, self.attach_height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlantLayout {
    pub stem: Stem,
    pub branch_groups: Vec<BranchGroup>,
}

/// Flat drawing primitive produced by [`PlantLayout::shapes`].
#[derive(Clone, Debug, PartialEq)]
pub enum Shape<'a> {
    Stem {
        base: Vec2,
        top: Vec2,
        width: f32,
        style: &'a StemStyle,
    },
    Branch {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: &'a str,
    },
    Leaf {
        center: Vec2,
        size: f32,
        kind: &'a LeafType,
        color: &'a str,
        opacity: f32,
    },
}

impl PlantLayout {
    pub fn leaf_count(&self) -> usize {
        self.branch_groups.iter().map(|g| g.leaves.len()).sum()
    }

    /// Flattens the layout into draw order: stem, then each branch
    /// followed by its leaves.
    pub fn shapes(&self) -> impl Iterator<Item = Shape<'_>> + '_ {
        let stem = Shape::Stem {
            base: Vec2::ZERO,
            top: Vec2::new(0.0, self.stem.length),
            width: self.stem.width,
            style: &self.stem.style,
        };

        let groups = self.branch_groups.iter().flat_map(|group| {
            let attach = group.attach_point();
            let branch = Shape::Branch {
                from: attach,
                to: group.branch.tip(attach),
                width: group.branch.width,
                color: group.branch.color.as_str(),
            };
            let leaves = group.leaves.iter().map(move |leaf| Shape::Leaf {
                center: leaf.position(attach),
                size: leaf.size,
                kind: &leaf.kind,
                color: leaf.color.as_str(),
                opacity: leaf.opacity,
            });
            std::iter::once(branch).chain(leaves)
        });

        std::iter::once(stem).chain(groups)
    }
}
