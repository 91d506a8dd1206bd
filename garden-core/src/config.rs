use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Geometry constants used by the layout renderer.
///
/// All lengths are in pixels and angles in degrees. Missing fields fall
/// back to [`LayoutConfig::default`] when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub stem_width: f32,
    pub branch_width: f32,
    pub branch_length_min: f32,
    pub branch_length_max: f32,
    pub branch_angle_min: f32,
    pub branch_angle_max: f32,
    pub leaves_min: usize,
    pub leaves_max: usize,
    /// Vertical step between consecutive leaves of one branch group.
    pub leaf_step: f32,
    /// Horizontal distance of a leaf from the stem axis.
    pub leaf_side_offset: f32,
    /// Extra downward drift per leaf index.
    pub leaf_drift: f32,
    pub leaf_size: f32,
    pub leaf_opacity: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            stem_width: 6.0,
            branch_width: 2.0,
            branch_length_min: 20.0,
            branch_length_max: 50.0,
            branch_angle_min: 20.0,
            branch_angle_max: 40.0,
            leaves_min: 2,
            leaves_max: 4,
            leaf_step: 6.0,
            leaf_side_offset: 10.0,
            leaf_drift: 5.0,
            leaf_size: 8.0,
            leaf_opacity: 0.85,
        }
    }
}

impl LayoutConfig {
    pub fn branch_length_range(&self) -> RangeInclusive<f32> {
        self.branch_length_min..=self.branch_length_max
    }

    pub fn branch_angle_range(&self) -> RangeInclusive<f32> {
        self.branch_angle_min..=self.branch_angle_max
    }

    pub fn leaf_count_range(&self) -> RangeInclusive<usize> {
        self.leaves_min..=self.leaves_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_garden_geometry() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.branch_length_range(), 20.0..=50.0);
        assert_eq!(cfg.branch_angle_range(), 20.0..=40.0);
        assert_eq!(cfg.leaf_count_range(), 2..=4);
        assert_eq!(cfg.leaf_opacity, 0.85);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let cfg: LayoutConfig = serde_json::from_str(r#"{"stem_width": 10}"#).unwrap();
        assert_eq!(cfg.stem_width, 10.0);
        assert_eq!(cfg.leaf_step, LayoutConfig::default().leaf_step);
    }
}
