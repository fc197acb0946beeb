#![forbid(unsafe_code)]

//! Demo scene: a small node/edge diagram with labels.
//!
//! Edges are thick lines between node centers, nodes are discs, and each
//! label is fitted into the square inscribed in its disc. One node may carry
//! a caret or selection in its label. Drawing order is edges, then nodes,
//! then labels, then the overlay, so later layers cover earlier ones.

use bitpaint_core::geometry::RectF;
use bitpaint_render::{CompositeMode, Raster, Rgb, Surface};
use bitpaint_text::{DrawText, Scale};

/// Frame background.
pub const BACKGROUND: Rgb = Rgb(0xff_ffff);
/// Default edge and node fill.
pub const IDLE: Rgb = Rgb(0x7f_7f7f);
/// Edge on the highlighted path.
pub const EDGE_HIGHLIGHT: Rgb = Rgb(0xff_00ff);
/// Node on the highlighted path.
pub const NODE_HIGHLIGHT: Rgb = Rgb(0xff_f0ff);
/// Label ink.
pub const INK: Rgb = Rgb(0x00_0000);

/// Largest per-axis label scale.
const LABEL_MAX_SCALE: Scale = Scale::uniform(4.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub label: Vec<char>,
    pub highlight: bool,
}

impl Node {
    pub fn new(x: f64, y: f64, radius: f64, label: &str) -> Self {
        Self {
            x,
            y,
            radius,
            label: label.chars().collect(),
            highlight: false,
        }
    }

    /// Bounding box of the disc.
    pub fn bounds(&self) -> RectF {
        RectF::new(
            self.x - self.radius,
            self.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    /// Square inscribed in the disc.
    pub fn label_area(&self) -> RectF {
        let side = self.radius * std::f64::consts::SQRT_2;
        RectF::new(self.x - side / 2.0, self.y - side / 2.0, side, side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
    pub width: f64,
    pub highlight: bool,
}

/// Caret or selection inside one node's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelEdit {
    pub node: usize,
    pub cursor: usize,
    pub selection: isize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub edit: Option<LabelEdit>,
}

impl Scene {
    /// A five-node diagram laid out relative to a `width × height` frame,
    /// with a highlighted path and a partly selected label.
    pub fn sample(width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        let r = w.min(h) / 10.0;

        let mut nodes = vec![
            Node::new(w * 0.15, h * 0.25, r, "src"),
            Node::new(w * 0.50, h * 0.15, r, "a"),
            Node::new(w * 0.50, h * 0.75, r, "b"),
            Node::new(w * 0.85, h * 0.45, r, "sink"),
            Node::new(w * 0.20, h * 0.80, r, "n4"),
        ];
        for i in [0, 1, 3] {
            nodes[i].highlight = true;
        }

        let edge = |src, dst, highlight| Edge {
            src,
            dst,
            width: r / 3.0,
            highlight,
        };
        let edges = vec![
            edge(0, 1, true),
            edge(1, 3, true),
            edge(0, 2, false),
            edge(2, 3, false),
            edge(4, 2, false),
        ];

        Self {
            nodes,
            edges,
            edit: Some(LabelEdit {
                node: 3,
                cursor: 1,
                selection: 2,
            }),
        }
    }
}

/// Draw `scene` over the whole surface.
pub fn render(surface: &mut Surface<'_>, scene: &Scene) {
    let _span = tracing::debug_span!(
        "render_scene",
        width = surface.width(),
        height = surface.height(),
        nodes = scene.nodes.len(),
        edges = scene.edges.len()
    )
    .entered();

    surface.clear(BACKGROUND);

    for edge in &scene.edges {
        let (Some(a), Some(b)) = (scene.nodes.get(edge.src), scene.nodes.get(edge.dst)) else {
            tracing::warn!(src = edge.src, dst = edge.dst, "edge references a missing node");
            continue;
        };
        let color = if edge.highlight { EDGE_HIGHLIGHT } else { IDLE };
        surface.fill_line(CompositeMode::Set, color, (a.x, a.y), (b.x, b.y), edge.width);
    }

    for node in &scene.nodes {
        let color = if node.highlight { NODE_HIGHLIGHT } else { IDLE };
        surface.fill_ellipse(CompositeMode::Set, color, node.bounds());
    }

    for node in &scene.nodes {
        surface.draw_text_area(INK, node.label_area(), LABEL_MAX_SCALE, &node.label);
    }

    if let Some(edit) = scene.edit {
        let Some(node) = scene.nodes.get(edit.node) else {
            tracing::warn!(node = edit.node, "label edit references a missing node");
            return;
        };
        // XOR against the node fill keeps the selected glyphs legible.
        surface.draw_selection_cursor(
            Rgb(0x80_8080),
            node.label_area(),
            LABEL_MAX_SCALE,
            edit.cursor,
            edit.selection,
            &node.label,
        );
    }
}
