use eframe::emath::{self, Rot2};
use eframe::egui::epaint::TextShape;
use eframe::egui::{pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use std::f32::consts::FRAC_PI_2;
use vector_addition::scene::{PlotBounds, Scene, VectorRole};
use vector_addition::types::*;

const PLOT_MARGIN: f32 = 36.0;
const ARROW_WIDTH: f32 = 2.5;
const ARROW_HEAD_LENGTH: f32 = 14.0;
const ARROW_HEAD_ANGLE: f32 = 0.45;
const GUIDE_WIDTH: f32 = 1.5;
const GUIDE_DASH: f32 = 8.0;
const GUIDE_GAP: f32 = 5.0;

pub fn role_color(role: VectorRole) -> Color32 {
    match role {
        VectorRole::FirstOperand => Color32::from_rgb(220, 40, 40),
        VectorRole::SecondOperand => Color32::from_rgb(40, 90, 230),
        VectorRole::Sum => Color32::from_rgb(20, 160, 60),
    }
}

/// Screen rectangle the plot window maps onto. With `equal_aspect` it keeps
/// the window's width:height ratio, centered in `area`.
pub fn plot_frame(area: Rect, bounds: &PlotBounds, equal_aspect: bool) -> Rect {
    let available = area.shrink(PLOT_MARGIN);
    if !equal_aspect {
        return available;
    }
    let scale = (available.width() / bounds.width() as f32).min(available.height() / bounds.height() as f32);
    let size = vec2(bounds.width() as f32 * scale, bounds.height() as f32 * scale);
    Rect::from_center_size(available.center(), size)
}

/// Paints `scene` into a square of `size` points.
pub fn plot_scene(ui: &mut Ui, scene: &Scene, size: f32) {
    let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
    let visuals = ui.visuals().clone();
    let text_color = visuals.text_color();

    let bounds = &scene.bounds;
    let plot_rect = plot_frame(response.rect, bounds, scene.equal_aspect);
    let to_screen = emath::RectTransform::from_to(
        Rect::from_min_max(
            pos2(bounds.xmin as f32, bounds.ymax as f32),
            pos2(bounds.xmax as f32, bounds.ymin as f32),
        ),
        plot_rect,
    );
    let screen_pos = |vector: &Vector2D| -> Pos2 {
        let [x, y] = vector2d_to_xy(vector);
        to_screen.transform_pos(pos2(x, y))
    };

    painter.rect_filled(plot_rect, 0.0, visuals.extreme_bg_color);

    let clipped = painter.with_clip_rect(plot_rect);
    let tick_font = FontId::proportional(11.0);

    if scene.show_grid {
        let grid_stroke = Stroke::new(0.5, visuals.widgets.noninteractive.bg_stroke.color);
        for tick in scene.grid_ticks() {
            let vertical = [screen_pos(&vector2d(tick, bounds.ymin)), screen_pos(&vector2d(tick, bounds.ymax))];
            let horizontal = [screen_pos(&vector2d(bounds.xmin, tick)), screen_pos(&vector2d(bounds.xmax, tick))];
            clipped.line_segment(vertical, grid_stroke);
            clipped.line_segment(horizontal, grid_stroke);

            let label = format!("{tick}");
            painter.text(vertical[0] + vec2(0.0, 4.0), Align2::CENTER_TOP, &label, tick_font.clone(), text_color);
            painter.text(horizontal[0] - vec2(4.0, 0.0), Align2::RIGHT_CENTER, &label, tick_font.clone(), text_color);
        }
    }

    let axis_stroke = Stroke::new(1.0, text_color);
    for axis in &scene.axes {
        clipped.line_segment([screen_pos(&axis.start), screen_pos(&axis.end)], axis_stroke);
    }

    for guide in &scene.guides {
        let stroke = Stroke::new(GUIDE_WIDTH, role_color(guide.parallel_to));
        let points = [screen_pos(&guide.start), screen_pos(&guide.end())];
        clipped.extend(Shape::dashed_line(&points, stroke, GUIDE_DASH, GUIDE_GAP));
    }

    for arrow in &scene.arrows {
        let stroke = Stroke::new(ARROW_WIDTH, role_color(arrow.role));
        paint_arrow(&clipped, screen_pos(&arrow.tail), screen_pos(&arrow.tip()), stroke);
    }

    painter.rect_stroke(plot_rect, 0.0, Stroke::new(1.0, visuals.weak_text_color()));

    paint_legend(&painter, scene, plot_rect, &visuals);

    painter.text(
        pos2(plot_rect.center().x, plot_rect.top() - 8.0),
        Align2::CENTER_BOTTOM,
        &scene.title,
        FontId::proportional(16.0),
        text_color,
    );
    painter.text(
        pos2(plot_rect.center().x, response.rect.bottom() - 2.0),
        Align2::CENTER_BOTTOM,
        &scene.x_label,
        FontId::proportional(13.0),
        text_color,
    );

    let galley = painter.layout_no_wrap(scene.y_label.clone(), FontId::proportional(13.0), text_color);
    let y_label_pos = pos2(
        response.rect.left() + 2.0,
        plot_rect.center().y + galley.size().x / 2.0,
    );
    painter.add(Shape::Text(TextShape::new(y_label_pos, galley, text_color).with_angle(-FRAC_PI_2)));
}

/// Line with a filled head at `tip`. Zero-length arrows are not drawn.
fn paint_arrow(painter: &Painter, tail: Pos2, tip: Pos2, stroke: Stroke) {
    let vector = tip - tail;
    let length = vector.length();
    if length < f32::EPSILON {
        return;
    }

    let direction = vector / length;
    let head_length = ARROW_HEAD_LENGTH.min(length * 0.5);
    let rotation = Rot2::from_angle(ARROW_HEAD_ANGLE);
    let left = tip - head_length * (rotation * direction);
    let right = tip - head_length * (rotation.inverse() * direction);

    painter.line_segment([tail, tip - direction * head_length * 0.5], stroke);
    painter.add(Shape::convex_polygon(vec![tip, left, right], stroke.color, Stroke::NONE));
}

fn paint_legend(painter: &Painter, scene: &Scene, plot_rect: Rect, visuals: &eframe::egui::Visuals) {
    let font = FontId::proportional(13.0);
    let row_height = 18.0;
    let sample_width = 22.0;
    let padding = 6.0;

    let galleys: Vec<_> = scene
        .arrows
        .iter()
        .map(|arrow| painter.layout_no_wrap(arrow.label.clone(), font.clone(), visuals.text_color()))
        .collect();
    let text_width = galleys.iter().map(|g| g.size().x).fold(0.0, f32::max);

    let size = vec2(
        padding * 3.0 + sample_width + text_width,
        padding * 2.0 + row_height * galleys.len() as f32,
    );
    let legend_rect = Rect::from_min_size(
        pos2(plot_rect.right() - size.x - padding, plot_rect.top() + padding),
        size,
    );

    painter.rect_filled(legend_rect, 4.0, visuals.window_fill);
    painter.rect_stroke(legend_rect, 4.0, Stroke::new(0.5, visuals.weak_text_color()));

    for (i, (arrow, galley)) in scene.arrows.iter().zip(galleys).enumerate() {
        let y = legend_rect.top() + padding + row_height * (i as f32 + 0.5);
        let x = legend_rect.left() + padding;
        painter.line_segment(
            [pos2(x, y), pos2(x + sample_width, y)],
            Stroke::new(ARROW_WIDTH, role_color(arrow.role)),
        );
        let text_pos = pos2(x + sample_width + padding, y - galley.size().y / 2.0);
        painter.galley(text_pos, galley, visuals.text_color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_aspect_frame_keeps_one_scale() {
        let area = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 500.0));
        let bounds = PlotBounds { xmin: -20.0, xmax: 20.0, ymin: -10.0, ymax: 10.0 };
        let frame = plot_frame(area, &bounds, true);

        let x_scale = frame.width() / bounds.width() as f32;
        let y_scale = frame.height() / bounds.height() as f32;
        assert!((x_scale - y_scale).abs() < 1e-4);
        assert!(area.contains_rect(frame));
        assert_eq!(frame.center(), area.center());
    }

    #[test]
    fn test_square_window_gets_square_frame() {
        let area = Rect::from_min_size(Pos2::ZERO, vec2(640.0, 640.0));
        let frame = plot_frame(area, &PlotBounds::symmetric(20.0), true);
        assert_eq!(frame.width(), frame.height());
        assert!((frame.width() - (640.0 - PLOT_MARGIN * 2.0)).abs() < 1e-3);
    }

    #[test]
    fn test_free_aspect_fills_area() {
        let area = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 500.0));
        let frame = plot_frame(area, &PlotBounds::symmetric(20.0), false);
        assert_eq!(frame, area.shrink(PLOT_MARGIN));
    }
}
