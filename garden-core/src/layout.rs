//! Plant layout renderer.
//!
//! A render runs in two steps:
//! 1. [`stem_phase`] builds the stem from the plant's height and colour and
//!    applies the active [`Skin`], if any.
//! 2. [`branch_groups`] walks the branch indices, placing each group at its
//!    attach height and hanging its leaves around it.
//!
//! Counts and attach heights depend only on the [`Plant`]; branch length,
//! tilt and leaves per group come from the caller's [`Jitter`].

use crate::{
    config::LayoutConfig,
    jitter::Jitter,
    skin::Skin,
    tree::{Branch, BranchGroup, Leaf, PlantLayout, Stem, StemStyle},
    types::Plant,
};
use glam::Vec2;

/// Renders `plant` into a [`PlantLayout`].
///
/// Total over finite non-negative input: `branches = 0` gives a bare stem,
/// `height = 0` a zero-length one. Values are used as given.
///
/// ### Parameters
/// - `plant` - The stored plant record; never modified.
/// - `skin` - Active cosmetic skin, applied to the stem only.
/// - `cfg` - Geometry constants.
/// - `jitter` - Source of the decorative randomness.
pub fn render_plant<J: Jitter + ?Sized>(
    plant: &Plant,
    skin: Option<Skin>,
    cfg: &LayoutConfig,
    jitter: &mut J,
) -> PlantLayout {
    log::debug!(
        "rendering plant: height={} branches={} leaf_type={} skin={:?}",
        plant.height,
        plant.branches,
        plant.leaf_type,
        skin
    );

    let stem = stem_phase(plant, skin, cfg, jitter);
    let branch_groups = branch_groups(plant, cfg, jitter).collect();

    PlantLayout {
        stem,
        branch_groups,
    }
}

/// Builds the stem of `plant` and applies `skin` to it.
///
/// The stem is as long as the plant is tall and filled with its colour
/// before any skin treatment.
///
/// ### Parameters
/// - `plant` - The stored plant record; never modified.
/// - `skin` - Active cosmetic skin, if any.
/// - `cfg` - Geometry constants; only the stem width is read.
/// - `jitter` - Source for skins that pick a random colour.
pub fn stem_phase<J: Jitter + ?Sized>(
    plant: &Plant,
    skin: Option<Skin>,
    cfg: &LayoutConfig,
    jitter: &mut J,
) -> Stem {
    let mut stem = Stem {
        length: plant.height,
        width: cfg.stem_width,
        style: StemStyle::solid(&plant.color),
    };
    if let Some(skin) = skin {
        skin.apply(&mut stem, jitter);
    }
    stem
}

/// Height above the base where branch `index` of `total` attaches.
///
/// Branches are spread evenly between the base and the tip, never on
/// either end. The ratio is taken in `f64` so the lowest branch stays above
/// the base for very large counts.
#[inline]
pub fn attach_height(height: f32, index: usize, total: usize) -> f32 {
    let ratio = (index + 1) as f64 / (total + 1) as f64;
    (f64::from(height) * (1.0 - ratio)) as f32
}

/// Lazily yields the branch groups of `plant`, top branch first.
pub fn branch_groups<'a, J: Jitter + ?Sized>(
    plant: &'a Plant,
    cfg: &'a LayoutConfig,
    jitter: &'a mut J,
) -> BranchGroups<'a, J> {
    BranchGroups {
        plant,
        cfg,
        jitter,
        next: 0,
        total: plant.branches as usize,
    }
}

/// Iterator returned by [`branch_groups`].
pub struct BranchGroups<'a, J: ?Sized> {
    plant: &'a Plant,
    cfg: &'a LayoutConfig,
    jitter: &'a mut J,
    next: usize,
    total: usize,
}

impl<J: Jitter + ?Sized> Iterator for BranchGroups<'_, J> {
    type Item = BranchGroup;

    fn next(&mut self) -> Option<BranchGroup> {
        if self.next >= self.total {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let cfg = self.cfg;
        let length = self.jitter.uniform(cfg.branch_length_range());
        let side = if index % 2 == 0 { 1.0 } else { -1.0 };
        let angle_deg = side * self.jitter.uniform(cfg.branch_angle_range());

        let branch = Branch {
            length,
            angle_deg,
            width: cfg.branch_width,
            color: self.plant.color.clone(),
        };

        let leaf_count = self.jitter.count(cfg.leaf_count_range());
        let leaves = (0..leaf_count)
            .map(|j| leaf(self.plant, cfg, j))
            .collect();

        Some(BranchGroup {
            index,
            attach_height: attach_height(self.plant.height, index, self.total),
            branch,
            leaves,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl<J: Jitter + ?Sized> ExactSizeIterator for BranchGroups<'_, J> {}

fn leaf(plant: &Plant, cfg: &LayoutConfig, j: usize) -> Leaf {
    let side = if j % 2 == 0 { -1.0 } else { 1.0 };
    Leaf {
        index: j,
        offset: Vec2::new(side * cfg.leaf_side_offset, j as f32 * cfg.leaf_step),
        drift: j as f32 * cfg.leaf_drift,
        kind: plant.leaf_type.clone(),
        color: plant.color.clone(),
        opacity: cfg.leaf_opacity,
        size: cfg.leaf_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        jitter::{MidpointJitter, RandomJitter},
        skin::GOLDEN,
        tree::Fill,
        types::LeafType,
    };
    use rand::{SeedableRng, rngs::StdRng};

    fn seeded(seed: u64) -> RandomJitter<StdRng> {
        RandomJitter::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn bare_stem_when_no_branches() {
        let plant = Plant::new(100.0, 0, "round", "#00ff00");
        let layout = render_plant(&plant, None, &LayoutConfig::default(), &mut seeded(1));

        assert_eq!(layout.stem.length, 100.0);
        assert_eq!(layout.stem.style.fill, Fill::Solid("#00ff00".to_owned()));
        assert!(layout.branch_groups.is_empty());
        assert_eq!(layout.shapes().count(), 1);
    }

    #[test]
    fn three_branches_attach_at_quarters() {
        let plant = Plant::new(200.0, 3, "pointed", "#ff0000");
        let layout = render_plant(&plant, None, &LayoutConfig::default(), &mut seeded(2));

        assert_eq!(layout.stem.length, 200.0);
        let attach: Vec<f32> = layout.branch_groups.iter().map(|g| g.attach_height).collect();
        assert_eq!(attach, vec![150.0, 100.0, 50.0]);
        assert!(
            layout
                .branch_groups
                .iter()
                .all(|g| g.leaves.iter().all(|l| l.kind == LeafType::Pointed))
        );
    }

    #[test]
    fn golden_skin_overrides_stem_fill_only() {
        let plant = Plant::new(120.0, 2, "heart", "#ff0000");
        let layout = render_plant(
            &plant,
            Some(Skin::GoldenLeaves),
            &LayoutConfig::default(),
            &mut seeded(3),
        );

        assert_eq!(layout.stem.style.fill, Fill::Solid(GOLDEN.to_owned()));
        for group in &layout.branch_groups {
            assert_eq!(group.branch.color, "#ff0000");
            assert!(group.leaves.iter().all(|l| l.color == "#ff0000"));
        }
    }

    #[test]
    fn counts_and_ranges_hold_for_many_plants() {
        let cfg = LayoutConfig::default();
        let mut jitter = seeded(4);

        for branches in 0..40u32 {
            let height = 100.0 + branches as f32 * 7.5;
            let plant = Plant::new(height, branches, "round", "#3d6b1f");
            let layout = render_plant(&plant, None, &cfg, &mut jitter);

            assert_eq!(layout.branch_groups.len(), branches as usize);

            for (i, group) in layout.branch_groups.iter().enumerate() {
                assert_eq!(group.index, i);
                assert!(group.attach_height > 0.0 && group.attach_height < height);
                assert!((2..=4).contains(&group.leaves.len()));
                assert!((20.0..=50.0).contains(&group.branch.length));

                let tilt = group.branch.angle_deg;
                assert!((20.0..=40.0).contains(&tilt.abs()));
                assert_eq!(tilt > 0.0, i % 2 == 0, "branch {i} leans the wrong way");
            }
        }
    }

    #[test]
    fn rerendering_keeps_counts_and_attach_heights() {
        let plant = Plant::new(300.0, 5, "heart", "#1b5e20");
        let cfg = LayoutConfig::default();

        let a = render_plant(&plant, None, &cfg, &mut seeded(10));
        let b = render_plant(&plant, None, &cfg, &mut seeded(99));

        assert_eq!(a.branch_groups.len(), b.branch_groups.len());
        for (ga, gb) in a.branch_groups.iter().zip(&b.branch_groups) {
            assert_eq!(ga.attach_height, gb.attach_height);
        }
        assert_eq!(a.stem, b.stem);
    }

    #[test]
    fn midpoint_jitter_gives_exact_geometry() {
        let plant = Plant::new(200.0, 2, "round", "#00ff00");
        let layout = render_plant(&plant, None, &LayoutConfig::default(), &mut MidpointJitter);

        let first = &layout.branch_groups[0];
        assert_eq!(first.branch.length, 35.0);
        assert_eq!(first.branch.angle_deg, 30.0);
        assert_eq!(layout.branch_groups[1].branch.angle_deg, -30.0);

        assert_eq!(first.leaves.len(), 3);
        let offsets: Vec<Vec2> = first.leaves.iter().map(|l| l.offset).collect();
        assert_eq!(
            offsets,
            vec![
                Vec2::new(-10.0, 0.0),
                Vec2::new(10.0, 6.0),
                Vec2::new(-10.0, 12.0),
            ]
        );
        let drifts: Vec<f32> = first.leaves.iter().map(|l| l.drift).collect();
        assert_eq!(drifts, vec![0.0, 5.0, 10.0]);
        assert!(first.leaves.iter().all(|l| l.opacity == 0.85));

        assert_eq!(layout, render_plant(&plant, None, &LayoutConfig::default(), &mut MidpointJitter));
    }

    #[test]
    fn zero_height_is_degenerate_but_fine() {
        let plant = Plant::new(0.0, 2, "round", "#00ff00");
        let layout = render_plant(&plant, None, &LayoutConfig::default(), &mut seeded(6));

        assert_eq!(layout.stem.length, 0.0);
        assert_eq!(layout.branch_groups.len(), 2);
        assert!(layout.branch_groups.iter().all(|g| g.attach_height == 0.0));
    }

    #[test]
    fn branch_groups_iterator_is_exact_size_and_lazy() {
        let plant = Plant::new(90.0, 4, "round", "#00ff00");
        let cfg = LayoutConfig::default();
        let mut jitter = MidpointJitter;

        let mut groups = branch_groups(&plant, &cfg, &mut jitter);
        assert_eq!(groups.len(), 4);

        let first = groups.next().unwrap();
        assert_eq!(first.attach_height, 72.0);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.count(), 3);
    }

    #[test]
    fn attach_height_never_hits_base_or_tip() {
        for total in 1..50 {
            for index in 0..total {
                let h = attach_height(1.0, index, total);
                assert!(h > 0.0 && h < 1.0);
            }
        }
    }

    #[test]
    fn attach_height_stays_above_base_for_huge_counts() {
        let n = 20_000_000;
        assert!(attach_height(100.0, n - 1, n) > 0.0);
        assert!(attach_height(1.0, 0, n) < 1.0);
    }

    #[test]
    fn stem_phase_uses_height_colour_and_configured_width() {
        let plant = Plant::new(75.0, 2, "round", "#336699");
        let cfg = LayoutConfig {
            stem_width: 9.0,
            ..LayoutConfig::default()
        };

        let stem = stem_phase(&plant, None, &cfg, &mut MidpointJitter);
        assert_eq!(stem.length, 75.0);
        assert_eq!(stem.width, 9.0);
        assert_eq!(stem.style, StemStyle::solid("#336699"));

        let golden = stem_phase(&plant, Some(Skin::GoldenLeaves), &cfg, &mut MidpointJitter);
        assert_eq!(golden.style.fill, Fill::Solid(GOLDEN.to_owned()));
        assert_eq!(golden.width, 9.0);
    }
}
