use egui::{
    emath::Rot2, pos2, vec2, Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Sense, Shape,
    Stroke,
};

use super::marker::marker_image;
use super::state::GlowChart;
use crate::chart::{AnimationFrame, PixelPoint, PointerEvent};

const BACKGROUND: Color32 = Color32::from_rgb(0x10, 0x10, 0x18);
const GRID: Color32 = Color32::from_rgb(0x1B, 0x1B, 0x23);
const BASE_LINE: Color32 = Color32::from_rgb(0x3A, 0x3A, 0x44);
const GLOW_LINE: Color32 = Color32::from_rgb(0xD0, 0xD4, 0xFF);
const TICK_LABEL: Color32 = Color32::from_rgb(0x3A, 0x3A, 0x44);
const AREA: (u8, u8, u8) = (0x3F, 0x1A, 0xF7);
const HALO: (u8, u8, u8) = (88, 47, 255);

const GRID_SPACING: f32 = 12.0;
const VALUE_TICKS: [f32; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];
/// Every n-th sample gets a label on the time axis.
const TIME_TICK_EVERY: usize = 5;
const MARKER_SIZE: f32 = 200.0;
/// The trace may end a hair past the settled glow x.
const AREA_CUTOFF_SLACK: f32 = 0.5;
/// (stroke width, opacity) of the halo layers under the traced line.
const GLOW_LAYERS: [(f32, f32); 4] = [(42.0, 0.2), (20.0, 0.4), (12.0, 0.6), (8.0, 1.0)];

fn halo(opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(HALO.0, HALO.1, HALO.2, (opacity.clamp(0.0, 1.0) * 255.0) as u8)
}

impl GlowChart {
    /// Draws the chart at its intrinsic size and feeds it this frame's
    /// pointer input.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.config.layout.size(), Sense::hover());

        self.capture_pointer(&response, rect);

        if self.is_mounted() {
            let dt = ui.input(|i| i.stable_dt);
            self.frame(dt);
            ui.ctx().request_repaint();
        }

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let to_screen = |p: PixelPoint| rect.min + vec2(p.x, p.y);
        let painter = ui.painter();
        let anim = self.animation_frame();

        painter.rect_filled(rect, 12.0, BACKGROUND);
        self.draw_grid(painter, rect);
        self.draw_area(painter, &anim, to_screen);

        let base: Vec<Pos2> = self.path().flatten().into_iter().map(to_screen).collect();
        if base.len() > 1 {
            painter.add(Shape::line(base, Stroke::new(2.0, BASE_LINE)));
        }

        self.draw_glow_line(painter, to_screen);
        self.draw_axes(painter, to_screen);
        self.draw_marker(ui.ctx(), painter, &anim, to_screen);

        response
    }

    fn capture_pointer(&mut self, response: &egui::Response, rect: Rect) {
        let hovered = response.hovered();
        if hovered != self.pointer().is_hovering() {
            self.handle_pointer(if hovered {
                PointerEvent::Enter
            } else {
                PointerEvent::Leave
            });
        }
        if let Some(pos) = response.hover_pos() {
            self.handle_pointer(PointerEvent::Move {
                x: pos.x - rect.min.x,
            });
        }
    }

    fn plot_rect(&self, rect: Rect) -> Rect {
        let layout = &self.config.layout;
        Rect::from_min_max(
            rect.min + vec2(layout.margin.left, layout.margin.top),
            rect.min
                + vec2(
                    layout.width - layout.margin.right,
                    layout.height - layout.margin.bottom,
                ),
        )
    }

    /// Diagonal hatching over the plot area, aligned to the chart origin.
    fn draw_grid(&self, painter: &Painter, rect: Rect) {
        let plot = self.plot_rect(rect);
        let painter = painter.with_clip_rect(plot.intersect(painter.clip_rect()));
        let stroke = Stroke::new(0.5, GRID);
        let (top, bottom) = (plot.min.y - rect.min.y, plot.max.y - rect.min.y);
        let first = ((plot.min.x - rect.min.x + top) / GRID_SPACING).floor() as i32;
        let last = ((plot.max.x - rect.min.x + bottom) / GRID_SPACING).ceil() as i32;
        for k in first..=last {
            // Line x + y = k * spacing, in chart-local coordinates.
            let c = k as f32 * GRID_SPACING;
            painter.line_segment(
                [
                    rect.min + vec2(c - top, top),
                    rect.min + vec2(c - bottom, bottom),
                ],
                stroke,
            );
        }
    }

    /// Gradient fill under the trace, cut off at the trailing glow x.
    fn draw_area(
        &self,
        painter: &Painter,
        anim: &AnimationFrame,
        to_screen: impl Fn(PixelPoint) -> Pos2,
    ) {
        let points: Vec<PixelPoint> = self
            .trace()
            .points
            .iter()
            .copied()
            .filter(|p| p.x <= anim.glow_x + AREA_CUTOFF_SLACK)
            .collect();
        if points.len() < 2 {
            return;
        }
        let baseline = self.y_scale().map(0.0);
        let top = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let height = (baseline - top).max(f32::EPSILON);
        let stop = top + 0.2 * height;

        // 0% -> 0.4, 20% -> 0.2, 100% -> 0, all at 0.8 opacity.
        let color_at = |y: f32| {
            let t = ((y - top) / height).clamp(0.0, 1.0);
            let alpha = if t <= 0.2 {
                0.4 - t
            } else {
                0.2 * (1.0 - t) / 0.8
            };
            Color32::from_rgba_unmultiplied(AREA.0, AREA.1, AREA.2, (alpha * 0.8 * 255.0) as u8)
        };

        let mut mesh = Mesh::default();
        for p in &points {
            let mid = p.y.max(stop);
            mesh.colored_vertex(to_screen(*p), color_at(p.y));
            mesh.colored_vertex(to_screen(PixelPoint::new(p.x, mid)), color_at(mid));
            mesh.colored_vertex(to_screen(PixelPoint::new(p.x, baseline)), color_at(baseline));
        }
        for i in 0..points.len() as u32 - 1 {
            let (a, b) = (i * 3, (i + 1) * 3);
            for row in 0..2 {
                mesh.add_triangle(a + row, b + row, a + row + 1);
                mesh.add_triangle(b + row, b + row + 1, a + row + 1);
            }
        }
        painter.add(Shape::mesh(mesh));
    }

    fn draw_glow_line(&self, painter: &Painter, to_screen: impl Fn(PixelPoint) -> Pos2) {
        let points: Vec<Pos2> = self.trace().points.iter().copied().map(to_screen).collect();
        if points.len() < 2 {
            return;
        }
        for (width, opacity) in GLOW_LAYERS {
            painter.add(Shape::line(points.clone(), Stroke::new(width, halo(opacity * 0.12))));
        }
        painter.add(Shape::line(points, Stroke::new(2.0, GLOW_LINE)));
    }

    fn draw_axes(&self, painter: &Painter, to_screen: impl Fn(PixelPoint) -> Pos2) {
        let stroke = Stroke::new(2.0, GRID);
        let font = FontId::proportional(14.0);
        let layout = &self.config.layout;
        let y_scale = self.y_scale();
        let (bottom, top) = layout.y_range();
        let (left, right) = layout.x_range();
        let axis_x = self
            .samples()
            .first()
            .and_then(|s| self.x_scale().map(&s.label))
            .unwrap_or(left);
        let axis_y = y_scale.map(0.0);

        painter.line_segment(
            [
                to_screen(PixelPoint::new(axis_x, bottom)),
                to_screen(PixelPoint::new(axis_x, top)),
            ],
            stroke,
        );
        for value in VALUE_TICKS {
            let anchor = to_screen(PixelPoint::new(axis_x - 14.0, y_scale.map(value) + 8.0));
            painter.text(
                anchor,
                Align2::RIGHT_CENTER,
                format!("{value}%"),
                font.clone(),
                TICK_LABEL,
            );
        }

        painter.line_segment(
            [
                to_screen(PixelPoint::new(left, axis_y)),
                to_screen(PixelPoint::new(right, axis_y)),
            ],
            stroke,
        );
        let labelled = self
            .samples()
            .iter()
            .enumerate()
            .skip(TIME_TICK_EVERY)
            .step_by(TIME_TICK_EVERY);
        for (i, sample) in labelled {
            if let Some(x) = self.x_scale().position(i) {
                let anchor = to_screen(PixelPoint::new(x, axis_y + 4.0));
                painter.text(anchor, Align2::RIGHT_TOP, &sample.label, font.clone(), TICK_LABEL);
            }
        }
    }

    fn draw_marker(
        &mut self,
        ctx: &egui::Context,
        painter: &Painter,
        anim: &AnimationFrame,
        to_screen: impl Fn(PixelPoint) -> Pos2,
    ) {
        let Some(point) = self.marker() else {
            return;
        };
        let opacity = (anim.flare * anim.hover_opacity).clamp(0.0, 1.0);
        if opacity <= 0.0 {
            return;
        }
        let centre = to_screen(point);

        let texture = self.marker_texture.get_or_insert_with(|| {
            let image = marker_image(self.config.marker_path.as_deref());
            ctx.load_texture("glow-marker", image, egui::TextureOptions::LINEAR)
        });

        painter.circle_filled(centre, 24.0, halo(0.35 * opacity));

        let mut mesh = Mesh::with_texture(texture.id());
        mesh.add_rect_with_uv(
            Rect::from_center_size(centre, vec2(MARKER_SIZE, MARKER_SIZE)),
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE.gamma_multiply(opacity),
        );
        mesh.rotate(Rot2::from_angle((anim.rotation + anim.facing).to_radians()), centre);
        painter.add(Shape::mesh(mesh));
    }
}
