use anatomy_atlas::anatomy::NodeKind;
use anatomy_atlas::graph::EdgeKind;
use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use super::EdgeLine;

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

/// Fades a colour toward the canvas background.
pub(super) fn fade_color(color: Color32, amount: f32) -> Color32 {
    blend_color(color, CANVAS_COLOR, amount)
}

pub(super) const CANVAS_COLOR: Color32 = Color32::from_rgb(250, 246, 240);
pub(super) const LABEL_COLOR: Color32 = Color32::from_rgb(74, 69, 64);
pub(super) const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(90, 138, 181);

pub(super) fn draw_background(painter: &Painter, rect: Rect, pan: Vec2, zoom: f32) {
    painter.rect_filled(rect, 0.0, CANVAS_COLOR);

    let step = (56.0 * zoom.clamp(0.6, 1.8)).max(20.0);
    let origin = rect.center() + pan;
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(213, 205, 194, 60));

    let mut x = origin.x.rem_euclid(step);
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            stroke,
        );
        x += step;
    }

    let mut y = origin.y.rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            stroke,
        );
        y += step;
    }
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

pub(super) fn edge_visible(rect: Rect, start: Pos2, end: Pos2, padding: f32) -> bool {
    let min_x = start.x.min(end.x) - padding;
    let max_x = start.x.max(end.x) + padding;
    let min_y = start.y.min(end.y) - padding;
    let max_y = start.y.max(end.y) + padding;

    !(max_x < rect.left() || min_x > rect.right() || max_y < rect.top() || min_y > rect.bottom())
}

pub(super) fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Vec2) -> Pos2 {
    rect.center() + pan + world * zoom
}

pub(super) fn screen_to_world(rect: Rect, pan: Vec2, zoom: f32, screen: Pos2) -> Vec2 {
    (screen - rect.center() - pan) / zoom
}

pub(super) fn node_color(kind: NodeKind) -> Color32 {
    match kind {
        NodeKind::Muscle => Color32::from_rgb(0xc4, 0x78, 0x78),
        NodeKind::Bone => Color32::from_rgb(0x8a, 0x9a, 0xa6),
        NodeKind::SoftTissue => Color32::from_rgb(0xb0, 0x96, 0x7e),
        NodeKind::Nerve => Color32::from_rgb(0xb8, 0x9a, 0x30),
        NodeKind::Joint => Color32::from_rgb(0x5d, 0xa5, 0x78),
        NodeKind::Ligament => Color32::from_rgb(0x5a, 0x9a, 0xab),
        NodeKind::Skin => Color32::from_rgb(0x9b, 0x7c, 0xb5),
    }
}

/// World-space radius, growing linearly with degree inside a per-kind range.
pub(super) fn node_radius(kind: NodeKind, degree: usize) -> f32 {
    let (max_degree, min_diameter, max_diameter) = match kind {
        NodeKind::Muscle | NodeKind::Joint => (20.0, 16.0, 40.0),
        NodeKind::Bone | NodeKind::SoftTissue => (30.0, 18.0, 50.0),
        NodeKind::Nerve => (30.0, 14.0, 36.0),
        NodeKind::Ligament => (10.0, 14.0, 34.0),
        NodeKind::Skin => (10.0, 14.0, 32.0),
    };
    let t = ((degree as f32 - 1.0) / (max_degree - 1.0)).clamp(0.0, 1.0);
    (min_diameter + (max_diameter - min_diameter) * t) / 2.0
}

pub(super) struct EdgeStyle {
    pub color: Color32,
    pub width: f32,
    pub line: EdgeLine,
    pub arrow: bool,
}

pub(super) fn edge_style(kind: EdgeKind) -> EdgeStyle {
    let (color, width, line, arrow) = match kind {
        EdgeKind::Origin => (Color32::from_rgb(0xb8, 0x80, 0x40), 1.0, EdgeLine::Solid, true),
        EdgeKind::Insertion => (Color32::from_rgb(0x5a, 0x8a, 0xb5), 1.0, EdgeLine::Solid, true),
        EdgeKind::Innervation => (node_color(NodeKind::Nerve), 1.0, EdgeLine::Dashed, false),
        EdgeKind::Articulation => (node_color(NodeKind::Joint), 2.0, EdgeLine::Solid, false),
        EdgeKind::LigamentAttach => (node_color(NodeKind::Ligament), 1.5, EdgeLine::Dotted, false),
        EdgeKind::SensoryInnervation => (node_color(NodeKind::Skin), 1.0, EdgeLine::Dashed, true),
    };
    EdgeStyle {
        color,
        width,
        line,
        arrow,
    }
}
