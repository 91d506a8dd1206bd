//! Garden viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the loaded plants and their
//! current layouts and implements [`eframe::App`] to paint them as a grid
//! of plant cards.

use chrono::Local;
use eframe::App;
use garden_core::{
    caption::PlantCaption,
    color::Rgba,
    config::LayoutConfig,
    jitter::{MidpointJitter, RandomJitter},
    layout::render_plant,
    skin::Skin,
    tree::{CornerRadius, Fill, PlantLayout, Shape, StemStyle},
    types::{LeafType, Plant},
};
use glam::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Painted when a colour string cannot be parsed.
const FALLBACK: Rgba = Rgba::rgb(0x2d, 0x50, 0x16);

/// Card width in world pixels, before zoom.
const CARD_WIDTH: f32 = 160.0;

/// Vertical space reserved under and above the tallest plant.
const CARD_MARGIN: f32 = 60.0;

const GRADIENT_STEPS: usize = 16;

/// Main application state for the garden viewer.
///
/// ### Fields
/// - `plants` - Plants as decoded from the `/plants` payload.
/// - `captions` - Labels for each plant, computed once at startup.
/// - `layouts` - Current layout of each plant, rebuilt by [`Viewer::rerender`].
/// - `skin` - Active cosmetic skin, if any.
/// - `cfg` - Layout geometry.
/// - `rng` - Seeded generator behind the jitter.
/// - `stable` - Use [`MidpointJitter`] instead of random jitter.
/// - `zoom` - World-to-screen scale.
pub struct Viewer {
    plants: Vec<Plant>,
    captions: Vec<PlantCaption>,
    layouts: Vec<PlantLayout>,
    skin: Option<Skin>,
    cfg: LayoutConfig,

    rng: StdRng,
    seed: u64,
    stable: bool,

    zoom: f32,
}

impl Viewer {
    /// Creates a viewer and renders every plant once.
    pub fn new(plants: Vec<Plant>, skin: Option<Skin>, cfg: LayoutConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let now = Local::now();
        let captions = plants.iter().map(|p| PlantCaption::new(p, &now)).collect();

        for plant in &plants {
            if let Err(err) = Rgba::parse_css(&plant.color) {
                log::warn!("{err}; painting it as {FALLBACK}");
            }
        }

        let mut viewer = Self {
            plants,
            captions,
            layouts: Vec::new(),
            skin,
            cfg,
            rng: StdRng::seed_from_u64(seed),
            seed,
            stable: false,
            zoom: 1.0,
        };
        viewer.rerender();
        viewer
    }

    /// Rebuilds every layout with the current skin and jitter mode.
    ///
    /// With random jitter each call draws fresh branch lengths, tilts and
    /// leaf counts; branch counts and attach heights stay the same.
    fn rerender(&mut self) {
        let cfg = self.cfg;
        let skin = self.skin;

        self.layouts = if self.stable {
            self.plants
                .iter()
                .map(|p| render_plant(p, skin, &cfg, &mut MidpointJitter))
                .collect()
        } else {
            let mut jitter = RandomJitter::new(&mut self.rng);
            self.plants
                .iter()
                .map(|p| render_plant(p, skin, &cfg, &mut jitter))
                .collect()
        };
    }

    /// Maps a plant-local world position to the screen, given the screen
    /// position of the stem base. World `+y` is up, screen `+y` is down.
    fn world_to_screen(&self, p: Vec2, base: egui::Pos2) -> egui::Pos2 {
        egui::pos2(base.x + p.x * self.zoom, base.y - p.y * self.zoom)
    }

    fn card_size(&self) -> egui::Vec2 {
        let tallest = self
            .plants
            .iter()
            .map(|p| p.height)
            .fold(0.0_f32, f32::max);
        egui::vec2(CARD_WIDTH, tallest + CARD_MARGIN) * self.zoom
    }

    fn paint_layout(&self, painter: &egui::Painter, layout: &PlantLayout, base: egui::Pos2) {
        for shape in layout.shapes() {
            match shape {
                Shape::Stem {
                    base: from,
                    top,
                    width,
                    style,
                } => self.paint_stem(
                    painter,
                    [self.world_to_screen(from, base), self.world_to_screen(top, base)],
                    width * self.zoom,
                    style,
                ),
                Shape::Branch {
                    from,
                    to,
                    width,
                    color,
                } => {
                    painter.line_segment(
                        [self.world_to_screen(from, base), self.world_to_screen(to, base)],
                        egui::Stroke::new(width * self.zoom, to_color32(css_color(color))),
                    );
                }
                Shape::Leaf {
                    center,
                    size,
                    kind,
                    color,
                    opacity,
                } => {
                    let fill = to_color32(css_color(color).with_opacity(opacity));
                    let center = self.world_to_screen(center, base);
                    paint_leaf(painter, center, size * 0.5 * self.zoom, kind, fill);
                }
            }
        }
    }

    fn paint_stem(&self, painter: &egui::Painter, ends: [egui::Pos2; 2], width: f32, style: &StemStyle) {
        let [bottom, top] = ends;
        let filtered = |c: Rgba| match style.filter {
            Some(f) => c.hue_rotated(f.hue_rotate_deg).brightened(f.brightness),
            None => c,
        };

        // Outer shadows as wide translucent strokes under the stem.
        for shadow in style.shadows.iter().filter(|s| !s.inset) {
            let off = egui::vec2(shadow.offset.x, -shadow.offset.y) * self.zoom;
            let color = css_color(&shadow.color).with_opacity(0.35);
            painter.line_segment(
                [bottom + off, top + off],
                egui::Stroke::new(width + shadow.blur * self.zoom, to_color32(color)),
            );
        }

        if let Some(border) = &style.border {
            painter.line_segment(
                [bottom, top],
                egui::Stroke::new(
                    width + 2.0 * border.width * self.zoom,
                    to_color32(css_color(&border.color)),
                ),
            );
        }

        // Gradients run along the stem; the CSS angle is not reproduced.
        let (base_color, tip_color) = match &style.fill {
            Fill::Solid(c) => {
                let c = filtered(css_color(c));
                (c, c)
            }
            Fill::LinearGradient { from, to, .. } => {
                (filtered(css_color(from)), filtered(css_color(to)))
            }
        };

        if base_color == tip_color {
            painter.line_segment([bottom, top], egui::Stroke::new(width, to_color32(base_color)));
        } else {
            for i in 0..GRADIENT_STEPS {
                let t0 = i as f32 / GRADIENT_STEPS as f32;
                let t1 = (i + 1) as f32 / GRADIENT_STEPS as f32;
                let color = base_color.lerp(tip_color, (t0 + t1) * 0.5);
                painter.line_segment(
                    [bottom.lerp(top, t0), bottom.lerp(top, t1)],
                    egui::Stroke::new(width, to_color32(color)),
                );
            }
        }

        if style.corner_radius == Some(CornerRadius::Full) {
            painter.circle_filled(bottom, width * 0.5, to_color32(base_color));
            painter.circle_filled(top, width * 0.5, to_color32(tip_color));
        }

        for shadow in style.shadows.iter().filter(|s| s.inset) {
            let color = css_color(&shadow.color);
            painter.line_segment(
                [bottom, top],
                egui::Stroke::new((width * 0.4).max(1.0), to_color32(color)),
            );
        }
    }

    /// Builds the top panel UI (skin, jitter controls, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        let mut changed = false;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("🎲 Re-roll").clicked() {
                    changed = true;
                }

                changed |= ui.checkbox(&mut self.stable, "Stable jitter").changed();

                ui.separator();
                egui::ComboBox::from_label("Skin")
                    .selected_text(self.skin.map_or("none", Skin::key))
                    .show_ui(ui, |ui| {
                        changed |= ui.selectable_value(&mut self.skin, None, "none").changed();
                        for skin in Skin::ALL {
                            changed |= ui
                                .selectable_value(&mut self.skin, Some(skin), skin.key())
                                .changed();
                        }
                    });

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.25..=3.0).text("Zoom"));
            });
        });

        if changed {
            self.rerender();
        }
    }

    /// Builds the bottom status bar (counts, seed).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("seed = {}", self.seed));
                ui.separator();
                ui.label(format!(
                    "leaves = {}",
                    self.layouts.iter().map(PlantLayout::leaf_count).sum::<usize>()
                ));
                ui.label(format!(
                    "branches = {}",
                    self.layouts.iter().map(|l| l.branch_groups.len()).sum::<usize>()
                ));
                ui.label(format!("plants = {}", self.plants.len()));
            });
        });
    }

    /// Builds the central panel holding one card per plant.
    fn ui_central_panel(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.plants.is_empty() {
                ui.centered_and_justified(|ui| ui.label("No plants yet. Start drawing!"));
                return;
            }

            let size = self.card_size();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for (layout, caption) in self.layouts.iter().zip(&self.captions) {
                        ui.group(|ui| {
                            ui.vertical(|ui| {
                                let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
                                let rect = response.rect;
                                let base = egui::pos2(rect.center().x, rect.bottom() - CARD_MARGIN * 0.25 * self.zoom);
                                self.paint_layout(&painter, layout, base);

                                ui.label(format!("🍃 {}", caption.leaves));
                                ui.label(format!("🌱 {}", caption.branches));
                                if !caption.created.is_empty() {
                                    ui.small(caption.created.as_str());
                                }
                            });
                        });
                    }
                });
            });
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

fn css_color(css: &str) -> Rgba {
    Rgba::parse_css(css).unwrap_or(FALLBACK)
}

fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, (c.a * 255.0).round() as u8)
}

/// Paints one leaf of radius `r` centred on `center` (screen space).
fn paint_leaf(painter: &egui::Painter, center: egui::Pos2, r: f32, kind: &LeafType, fill: egui::Color32) {
    match kind {
        LeafType::Sharp | LeafType::Pointed => {
            let points = vec![
                center + egui::vec2(0.0, -1.4 * r),
                center + egui::vec2(r, 0.0),
                center + egui::vec2(0.0, 1.4 * r),
                center + egui::vec2(-r, 0.0),
            ];
            painter.add(egui::Shape::convex_polygon(points, fill, egui::Stroke::NONE));
        }
        LeafType::Heart => {
            painter.circle_filled(center + egui::vec2(-0.5 * r, -0.3 * r), 0.55 * r, fill);
            painter.circle_filled(center + egui::vec2(0.5 * r, -0.3 * r), 0.55 * r, fill);
            let points = vec![
                center + egui::vec2(-r, -0.1 * r),
                center + egui::vec2(r, -0.1 * r),
                center + egui::vec2(0.0, r),
            ];
            painter.add(egui::Shape::convex_polygon(points, fill, egui::Stroke::NONE));
        }
        LeafType::Round | LeafType::Other(_) => {
            painter.circle_filled(center, r, fill);
        }
    }
}
