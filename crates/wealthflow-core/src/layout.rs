// File: crates/wealthflow-core/src/layout.rs
// Summary: Static flow-diagram layout: hand-placed nodes and S-curve connectors.
// Notes:
// - Node positions are configuration, never computed. The only geometry here
//   is the connector between two placed nodes, which is a pure function of
//   the two centers and the configured anchor offset.

use std::collections::HashMap;

use crate::color::Color;
use crate::error::{ChartError, Result};
use crate::geometry::{Path, Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    /// Display label; `\n` separates lines.
    pub label: String,
    pub color: Color,
    /// Center of the node box.
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    pub source: String,
    pub target: String,
    /// Visual weight; stroke width is `weight * FlowStyle::stroke_scale`.
    pub weight: f64,
    pub label: Option<String>,
}

/// Per-diagram drawing constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowStyle {
    /// Canvas size (viewBox) the node positions were laid out for.
    pub width: u32,
    pub height: u32,
    /// Horizontal distance from a node center to a connector anchor.
    pub anchor_offset: f64,
    pub node_width: f64,
    pub node_height: f64,
    pub corner_radius: f64,
    pub stroke_scale: f64,
    pub link_opacity: f64,
    pub label_line_height: f64,
    pub font_size: f64,
    /// How far link labels sit above the midpoint between node centers.
    pub link_label_lift: f64,
}

impl FlowStyle {
    /// Three-column wealth flow diagram.
    pub const fn wealth_flow() -> Self {
        Self {
            width: 1000,
            height: 600,
            anchor_offset: 80.0,
            node_width: 150.0,
            node_height: 60.0,
            corner_radius: 8.0,
            stroke_scale: 0.5,
            link_opacity: 0.6,
            label_line_height: 14.0,
            font_size: 14.0,
            link_label_lift: 10.0,
        }
    }

    /// Recycling diagram: taller boxes, heavier strokes.
    pub const fn recycling() -> Self {
        Self {
            width: 1000,
            height: 700,
            anchor_offset: 80.0,
            node_width: 150.0,
            node_height: 70.0,
            corner_radius: 10.0,
            stroke_scale: 2.0,
            link_opacity: 0.5,
            label_line_height: 16.0,
            font_size: 13.0,
            link_label_lift: 10.0,
        }
    }
}

impl Default for FlowStyle {
    fn default() -> Self {
        Self::wealth_flow()
    }
}

/// Cubic connector from the right edge of one node to the left edge of another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub start: Point,
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

impl Connector {
    pub fn to_path(&self) -> Path {
        let mut p = Path::new();
        p.move_to(self.start).cubic_to(self.c1, self.c2, self.end);
        p
    }

    /// Shared x of both control points.
    pub fn mid_x(&self) -> f64 {
        self.c1.x
    }
}

/// Horizontal S-curve between two node centers.
///
/// Anchors sit `offset` to the right of `source` and to the left of `target`.
/// Both control points share the anchors' horizontal midpoint; each keeps its
/// own anchor's y.
pub fn connector(source: Point, target: Point, offset: f64) -> Connector {
    let start = Point::new(source.x + offset, source.y);
    let end = Point::new(target.x - offset, target.y);
    let mid_x = (start.x + end.x) / 2.0;
    Connector { start, c1: Point::new(mid_x, start.y), c2: Point::new(mid_x, end.y), end }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkLabel {
    pub text: String,
    pub anchor: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLink {
    pub source: String,
    pub target: String,
    pub connector: Connector,
    /// Links take the color of the node they flow into.
    pub color: Color,
    pub stroke_width: f64,
    pub label: Option<LinkLabel>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelLine {
    pub text: String,
    /// Vertical offset from the node center.
    pub dy: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedNode {
    pub id: String,
    pub rect: Rect,
    pub color: Color,
    pub lines: Vec<LabelLine>,
}

/// Everything a renderer needs for one diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedDiagram {
    pub nodes: Vec<ResolvedNode>,
    pub links: Vec<ResolvedLink>,
    pub style: FlowStyle,
}

/// Split a multi-line label and center the block vertically on the node.
pub fn label_lines(label: &str, line_height: f64) -> Vec<LabelLine> {
    let parts = label.split('\n').collect::<Vec<_>>();
    let first = -((parts.len() as f64 - 1.0) * line_height) / 2.0;
    parts
        .into_iter()
        .enumerate()
        .map(|(i, text)| LabelLine { text: text.to_string(), dy: first + i as f64 * line_height })
        .collect()
}

/// Nodes, links and style for one hand-laid-out diagram.
#[derive(Clone, Debug)]
pub struct FlowDiagram {
    nodes: Vec<Node>,
    links: Vec<Link>,
    index: HashMap<String, usize>,
    pub style: FlowStyle,
}

impl FlowDiagram {
    /// Validate unique node ids and that every link endpoint exists.
    pub fn try_new(nodes: Vec<Node>, links: Vec<Link>, style: FlowStyle) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, n) in nodes.iter().enumerate() {
            if index.insert(n.id.clone(), i).is_some() {
                return Err(ChartError::DuplicateNode(n.id.clone()));
            }
        }
        let diagram = Self { nodes, links, index, style };
        for link in &diagram.links {
            diagram.endpoints(link)?;
        }
        Ok(diagram)
    }

    /// Load from two CSV tables:
    /// nodes `id,name,color,x,y` and links `source,target,value,label`.
    pub fn from_csv(name: &'static str, nodes_csv: &str, links_csv: &str, style: FlowStyle) -> Result<Self> {
        let fixture = |message: String| ChartError::Fixture { name, message };

        let mut nodes = Vec::new();
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(nodes_csv.as_bytes());
        for rec in rdr.records() {
            let rec = rec?;
            let col = |i: usize| rec.get(i).unwrap_or("");
            let coord = |i: usize| col(i).parse::<f64>().map_err(|_| fixture(format!("node '{}': bad coordinate '{}'", col(0), col(i))));
            nodes.push(Node {
                id: col(0).to_string(),
                label: col(1).replace("\\n", "\n"),
                color: Color::from_hex(col(2))?,
                position: Point::new(coord(3)?, coord(4)?),
            });
        }

        let mut links = Vec::new();
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(links_csv.as_bytes());
        for rec in rdr.records() {
            let rec = rec?;
            let col = |i: usize| rec.get(i).unwrap_or("");
            let weight = col(2)
                .parse::<f64>()
                .map_err(|_| fixture(format!("link {} -> {}: bad value '{}'", col(0), col(1), col(2))))?;
            let label = Some(col(3)).filter(|s| !s.is_empty()).map(str::to_string);
            links.push(Link { source: col(0).to_string(), target: col(1).to_string(), weight, label });
        }

        let diagram = Self::try_new(nodes, links, style)?;
        tracing::debug!(fixture = name, nodes = diagram.nodes.len(), links = diagram.links.len(), "loaded flow diagram");
        Ok(diagram)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn position(&self, id: &str) -> Option<Point> {
        self.node(id).map(|n| n.position)
    }

    fn endpoints(&self, link: &Link) -> Result<(&Node, &Node)> {
        let lookup = |id: &str| {
            self.node(id).ok_or_else(|| ChartError::UnknownNode {
                node: id.to_string(),
                from: link.source.clone(),
                to: link.target.clone(),
            })
        };
        Ok((lookup(&link.source)?, lookup(&link.target)?))
    }

    /// Resolve any link against this diagram's node table.
    pub fn resolve_link(&self, link: &Link) -> Result<ResolvedLink> {
        let (src, dst) = self.endpoints(link)?;
        let label = link.label.as_ref().map(|text| {
            let mid = src.position.midpoint(dst.position);
            LinkLabel { text: text.clone(), anchor: Point::new(mid.x, mid.y - self.style.link_label_lift) }
        });
        Ok(ResolvedLink {
            source: link.source.clone(),
            target: link.target.clone(),
            connector: connector(src.position, dst.position, self.style.anchor_offset),
            color: dst.color,
            stroke_width: link.weight * self.style.stroke_scale,
            label,
        })
    }

    pub fn resolve_node(&self, node: &Node) -> ResolvedNode {
        ResolvedNode {
            id: node.id.clone(),
            rect: Rect::centered(node.position, self.style.node_width, self.style.node_height),
            color: node.color,
            lines: label_lines(&node.label, self.style.label_line_height),
        }
    }

    pub fn resolve(&self) -> Result<ResolvedDiagram> {
        let links = self.links.iter().map(|l| self.resolve_link(l)).collect::<Result<Vec<_>>>()?;
        let nodes = self.nodes.iter().map(|n| self.resolve_node(n)).collect();
        Ok(ResolvedDiagram { nodes, links, style: self.style })
    }
}
