//! Cosmetic skins and the stem treatment each one applies.

use crate::{
    error::Error,
    jitter::Jitter,
    tree::{Border, CornerRadius, Fill, Filter, Shadow, Stem},
};
use glam::Vec2;
use std::{fmt, str::FromStr};

pub const GOLDEN: &str = "#FFD700";

/// Start colours the rainbow skin chooses from.
pub const RAINBOW_PALETTE: [&str; 4] = ["#ff6b6b", "#4ecdc4", "#45b7d1", "#f7b731"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Skin {
    GlowingPlants,
    NeonBrush,
    GoldenLeaves,
    RainbowGarden,
    RobotPlants,
    CrystalStems,
}

impl Skin {
    pub const ALL: [Skin; 6] = [
        Skin::GlowingPlants,
        Skin::NeonBrush,
        Skin::GoldenLeaves,
        Skin::RainbowGarden,
        Skin::RobotPlants,
        Skin::CrystalStems,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Skin::GlowingPlants => "glowing_plants",
            Skin::NeonBrush => "neon_brush",
            Skin::GoldenLeaves => "golden_leaves",
            Skin::RainbowGarden => "rainbow_garden",
            Skin::RobotPlants => "robot_plants",
            Skin::CrystalStems => "crystal_stems",
        }
    }

    /// Picks the active skin from the keys of the owned cosmetics.
    ///
    /// Only the first key counts. When it is not a skin (or there are no
    /// keys) nothing is applied, even if a later key would match.
    pub fn first_owned<'a>(keys: impl IntoIterator<Item = &'a str>) -> Option<Skin> {
        let first = keys.into_iter().next()?;
        match first.parse() {
            Ok(skin) => Some(skin),
            Err(_) => {
                log::debug!("first owned cosmetic {first:?} is not a skin, rendering plain stems");
                None
            }
        }
    }

    /// Applies this skin's treatment to `stem`. Only the style changes;
    /// geometry is left alone.
    pub fn apply<J: Jitter + ?Sized>(self, stem: &mut Stem, jitter: &mut J) {
        let style = &mut stem.style;
        match self {
            Skin::GlowingPlants => {
                style.shadows = vec![
                    Shadow::glow(15.0, "#00ff00"),
                    Shadow::glow(30.0, "rgba(0, 255, 0, 0.5)"),
                ];
                style.corner_radius = Some(CornerRadius::Full);
            }
            Skin::NeonBrush => {
                style.shadows = vec![Shadow::glow(20.0, "#ff00ff")];
                style.filter = Some(Filter {
                    hue_rotate_deg: 45.0,
                    brightness: 1.3,
                });
            }
            Skin::GoldenLeaves => {
                style.fill = Fill::Solid(GOLDEN.to_owned());
                style.shadows = vec![Shadow::glow(15.0, "rgba(255, 215, 0, 0.8)")];
            }
            Skin::RainbowGarden => {
                let from = RAINBOW_PALETTE[jitter.pick(RAINBOW_PALETTE.len())];
                let to = match &style.fill {
                    Fill::Solid(color) => color.clone(),
                    Fill::LinearGradient { to, .. } => to.clone(),
                };
                style.fill = Fill::LinearGradient {
                    angle_deg: 45.0,
                    from: from.to_owned(),
                    to,
                };
            }
            Skin::RobotPlants => {
                style.corner_radius = Some(CornerRadius::Px(8.0));
                style.border = Some(Border {
                    width: 2.0,
                    color: "#444".to_owned(),
                });
                style.shadows = vec![Shadow::inset(
                    Vec2::new(0.0, 2.0),
                    4.0,
                    "rgba(0, 0, 0, 0.5)",
                )];
            }
            Skin::CrystalStems => {
                style.fill = Fill::LinearGradient {
                    angle_deg: 90.0,
                    from: "rgba(100, 200, 255, 0.8)".to_owned(),
                    to: "rgba(100, 200, 255, 0.4)".to_owned(),
                };
                style.shadows = vec![
                    Shadow::glow(20.0, "rgba(100, 200, 255, 0.6)"),
                    Shadow::inset(Vec2::ZERO, 10.0, "rgba(255, 255, 255, 0.3)"),
                ];
            }
        }
    }
}

impl FromStr for Skin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skin::ALL
            .into_iter()
            .find(|skin| skin.key() == s)
            .ok_or_else(|| Error::UnknownSkin(s.to_owned()))
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
