use egui::{Context, RichText, ScrollArea, Ui};

use crate::geometry::{AnnulusRegion, DiskRegion, SURFACE_PRESETS, SurfaceKind};
use crate::ui::state::UiState;
use crate::ui::theme::*;

#[derive(Default)]
pub struct UiActions {
    pub generate: bool,
    pub reset_view: bool,
}

/// Read-only numbers shown in the statistics block.
pub struct ViewStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub generation_ms: f32,
    pub fov: f32,
    pub rotation: [i32; 3],
    pub texture_size: (u32, u32),
}

pub fn draw_side_panel(ctx: &Context, state: &mut UiState, stats: &ViewStats) -> UiActions {
    let mut actions = UiActions::default();

    egui::SidePanel::right("control_panel")
        .min_width(280.0)
        .default_width(300.0)
        .frame(egui::Frame::default().fill(BG_PANEL).inner_margin(14.0))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new("Mesh Viewer").strong());
                ui.label(RichText::new("Parametric surfaces").color(TEXT_MUTED).size(11.0));
                ui.add_space(14.0);

                section_header(ui, "PRESET");
                let selected = state
                    .selected_preset
                    .and_then(|i| SURFACE_PRESETS.get(i))
                    .map_or("Custom", |p| p.name);
                egui::ComboBox::from_id_salt("surface_presets")
                    .selected_text(selected)
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for (i, preset) in SURFACE_PRESETS.iter().enumerate() {
                            if ui
                                .selectable_label(state.selected_preset == Some(i), preset.name)
                                .on_hover_text(preset.description)
                                .clicked()
                            {
                                state.apply_preset(i);
                                actions.generate = true;
                            }
                        }
                    });
                ui.add_space(14.0);

                section_header(ui, "SURFACE");
                let mut changed = false;
                ui.horizontal(|ui| {
                    for kind in [SurfaceKind::Sphere, SurfaceKind::Torus] {
                        if ui
                            .selectable_label(state.surface_kind == kind, kind.label())
                            .clicked()
                            && state.surface_kind != kind
                        {
                            state.surface_kind = kind;
                            changed = true;
                        }
                    }
                });
                ui.add_space(6.0);

                match state.surface_kind {
                    SurfaceKind::Sphere => {
                        changed |= resolution_controls(
                            ui,
                            &mut state.sphere.n_phi,
                            &mut state.sphere.n_theta,
                        );
                        ui.add_space(10.0);
                        section_header(ui, "TEXTURE DISK");
                        changed |= disk_controls(ui, &mut state.sphere.disk);
                    }
                    SurfaceKind::Torus => {
                        changed |= resolution_controls(
                            ui,
                            &mut state.torus.n_phi,
                            &mut state.torus.n_theta,
                        );
                        egui::Grid::new("torus_radii").num_columns(2).show(ui, |ui| {
                            ui.label("Tube a:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut state.torus.tube_radius).speed(0.01).range(0.01..=5.0))
                                .changed();
                            ui.end_row();
                            ui.label("Ring b:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut state.torus.ring_radius).speed(0.01).range(0.0..=5.0))
                                .changed();
                            ui.end_row();
                        });
                        ui.add_space(10.0);
                        section_header(ui, "TEXTURE ANNULUS");
                        changed |= annulus_controls(ui, &mut state.torus.annulus);
                    }
                }

                if changed {
                    state.selected_preset = None;
                    state.needs_generate = true;
                }
                ui.add_space(10.0);

                let (text, fill, text_color) = if state.needs_generate {
                    ("Generate", ACCENT_AMBER, BG_BLACK)
                } else {
                    ("Up to date", BG_WIDGET, ACCENT_AMBER)
                };
                if ui
                    .add(
                        egui::Button::new(RichText::new(text).color(text_color))
                            .fill(fill)
                            .min_size(egui::vec2(ui.available_width(), 30.0)),
                    )
                    .clicked()
                    && state.needs_generate
                {
                    actions.generate = true;
                }
                ui.add_space(14.0);

                ui.separator();
                ui.add_space(10.0);

                section_header(ui, "VIEW");
                ui.horizontal(|ui| {
                    if ui.button("Reset View").clicked() {
                        actions.reset_view = true;
                    }
                    ui.checkbox(&mut state.show_overlay, "Help");
                });
                ui.add_space(14.0);

                stats_panel(ui, stats);
            });
        });

    actions
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED).size(11.0).strong());
    ui.add_space(4.0);
}

fn resolution_controls(ui: &mut Ui, n_phi: &mut u32, n_theta: &mut u32) -> bool {
    let mut changed = false;
    egui::Grid::new("resolution").num_columns(2).show(ui, |ui| {
        ui.label("φ steps:");
        changed |= ui.add(egui::Slider::new(n_phi, 1..=400)).changed();
        ui.end_row();
        ui.label("θ steps:");
        changed |= ui.add(egui::Slider::new(n_theta, 1..=800)).changed();
        ui.end_row();
    });
    changed
}

fn center_controls(ui: &mut Ui, center: &mut glam::Vec2) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label("Center:");
        changed |= ui
            .add(egui::DragValue::new(&mut center.x).speed(0.005).range(0.0..=1.0))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut center.y).speed(0.005).range(0.0..=1.0))
            .changed();
    });
    changed
}

fn disk_controls(ui: &mut Ui, disk: &mut DiskRegion) -> bool {
    let mut changed = center_controls(ui, &mut disk.center);
    ui.horizontal(|ui| {
        ui.label("Radius:");
        changed |= ui.add(egui::Slider::new(&mut disk.radius, 0.0..=1.0)).changed();
    });
    changed
}

fn annulus_controls(ui: &mut Ui, annulus: &mut AnnulusRegion) -> bool {
    let mut changed = center_controls(ui, &mut annulus.center);
    egui::Grid::new("annulus_radii").num_columns(2).show(ui, |ui| {
        ui.label("Inner:");
        changed |= ui
            .add(egui::Slider::new(&mut annulus.inner_radius, 0.0..=1.0))
            .changed();
        ui.end_row();
        ui.label("Outer:");
        changed |= ui
            .add(egui::Slider::new(&mut annulus.outer_radius, 0.0..=1.0))
            .changed();
        ui.end_row();
    });
    changed
}

fn stats_panel(ui: &mut Ui, stats: &ViewStats) {
    section_header(ui, "STATISTICS");
    egui::Frame::default()
        .fill(BG_WIDGET)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .rounding(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.style_mut().override_font_id =
                Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));

            egui::Grid::new("stats").num_columns(2).spacing([20.0, 4.0]).show(ui, |ui| {
                let rows = [
                    ("Vertices", fmt_num(stats.vertex_count)),
                    ("Triangles", fmt_num(stats.triangle_count)),
                    ("Generated", format!("{:.1} ms", stats.generation_ms)),
                    ("FOV", format!("{:.1}°", stats.fov)),
                    (
                        "Rotation",
                        format!(
                            "{:.1} {:.1} {:.1}",
                            stats.rotation[0] as f32 / 16.0,
                            stats.rotation[1] as f32 / 16.0,
                            stats.rotation[2] as f32 / 16.0
                        ),
                    ),
                    (
                        "Texture",
                        format!("{}×{}", stats.texture_size.0, stats.texture_size.1),
                    ),
                ];
                for (label, value) in rows {
                    ui.label(RichText::new(label).color(TEXT_MUTED));
                    ui.label(RichText::new(value).color(ACCENT_TEAL));
                    ui.end_row();
                }
            });
        });
}

pub fn draw_help_overlay(ctx: &Context) {
    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(egui::Color32::from_black_alpha(170))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));
                    ui.label(
                        RichText::new("LMB drag - Pitch/Yaw | RMB drag - Pitch/Roll")
                            .color(TEXT_MUTED),
                    );
                    ui.label(
                        RichText::new("Scroll - Zoom | R - Reset | Esc - Quit").color(TEXT_MUTED),
                    );
                });
        });
}

fn fmt_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}
