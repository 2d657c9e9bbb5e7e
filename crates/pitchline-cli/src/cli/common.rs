//! Common utilities shared across CLI commands.

use std::fs;

use serde::Serialize;

use pitchline::{Group, GroupLayout, Point, Segment};

/// Output format for grouped points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
    Svg,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "svg" => Some(OutputFormat::Svg),
            _ => None,
        }
    }
}

/// A point in JSON/YAML output format.
#[derive(Debug, Serialize)]
pub struct JsonPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for JsonPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A segment in JSON/YAML output format.
#[derive(Debug, Serialize)]
pub struct JsonSegment {
    pub start: JsonPoint,
    pub end: JsonPoint,
    pub length: f64,
}

/// One computed grouping in JSON/YAML output format.
#[derive(Debug, Serialize)]
pub struct JsonGrouping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub segment: JsonSegment,
    pub group_size: usize,
    pub spacing: f64,
    pub gap: f64,
    pub groups: Vec<Vec<JsonPoint>>,
}

impl JsonGrouping {
    pub fn new(name: Option<String>, segment: &Segment, layout: &GroupLayout, groups: &[Group]) -> Self {
        Self {
            name,
            segment: JsonSegment {
                start: segment.start().into(),
                end: segment.end().into(),
                length: segment.length(),
            },
            group_size: layout.group_size,
            spacing: layout.spacing,
            gap: layout.gap,
            groups: groups
                .iter()
                .map(|g| g.iter().copied().map(JsonPoint::from).collect())
                .collect(),
        }
    }
}

/// A segment together with the groups computed for it.
pub struct Placement<'a> {
    pub name: Option<&'a str>,
    pub segment: Segment,
    pub groups: Vec<Group>,
}

/// Parse a point written as `x,y`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("Invalid point '{}': expected X,Y", s))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("Invalid x coordinate in '{}'", s))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("Invalid y coordinate in '{}'", s))?;
    Ok(Point::new(x, y))
}

/// Render groups as plain text, one group per line.
pub fn groups_to_text(groups: &[Group]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        let points: String = group
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("group {}: {}\n", i, points));
    }
    out
}

/// Render placements as SVG: each segment as a `<line>`, each group as a
/// `<g>` of `<circle>` elements. Non-finite points are skipped.
///
/// Fails when the geometry spans more than an `f64` can hold, since the
/// viewBox would not be finite.
pub fn placements_to_svg(placements: &[Placement]) -> Result<String, String> {
    let bounds = placements_bounds(placements).unwrap_or((0.0, 0.0, 10.0, 10.0));
    let (min_x, min_y, max_x, max_y) = bounds;
    let extent = (max_x - min_x).max(max_y - min_y).max(1.0);
    let pad = extent * 0.05;
    let radius = extent / 150.0;
    let stroke = extent / 500.0;

    let view_box = [
        min_x - pad,
        min_y - pad,
        max_x - min_x + 2.0 * pad,
        max_y - min_y + 2.0 * pad,
    ];
    if !view_box.iter().all(|v| v.is_finite()) {
        return Err(format!(
            "Geometry too large for SVG output: bounds ({}, {}) to ({}, {})",
            min_x, min_y, max_x, max_y
        ));
    }

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.2} {:.2} {:.2} {:.2}">
<rect x="{:.2}" y="{:.2}" width="100%" height="100%" fill="white"/>
"#,
        view_box[0],
        view_box[1],
        view_box[2],
        view_box[3],
        view_box[0],
        view_box[1],
    ));

    for (index, placement) in placements.iter().enumerate() {
        let id = placement
            .name
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("segment-{}", index));
        let start = placement.segment.start();
        let end = placement.segment.end();

        svg.push_str(&format!(r#"<g id="{}">"#, escape_attr(&id)));
        svg.push('\n');
        if is_finite(start) && is_finite(end) {
            svg.push_str(&format!(
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"#999999\" stroke-width=\"{:.3}\"/>\n",
                start.x, start.y, end.x, end.y, stroke
            ));
        }

        for (i, group) in placement.groups.iter().enumerate() {
            svg.push_str(&format!(
                "  <g class=\"group\" data-index=\"{}\" fill=\"{}\">\n",
                i,
                group_color(i)
            ));
            for p in group.iter().filter(|p| is_finite(**p)) {
                svg.push_str(&format!(
                    "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.3}\"/>\n",
                    p.x, p.y, radius
                ));
            }
            svg.push_str("  </g>\n");
        }
        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Escape text for use inside a double-quoted XML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Bounding box over all finite segment endpoints and points.
///
/// Returns `(min_x, min_y, max_x, max_y)`.
pub fn placements_bounds(placements: &[Placement]) -> Option<(f64, f64, f64, f64)> {
    let points = placements.iter().flat_map(|pl| {
        [pl.segment.start(), pl.segment.end()]
            .into_iter()
            .chain(pl.groups.iter().flatten().copied())
    });

    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for p in points.filter(|p| is_finite(*p)) {
        bounds = Some(match bounds {
            None => (p.x, p.y, p.x, p.y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            }
        });
    }
    bounds
}

/// Write output to a file, or stdout when no path is given.
pub fn write_output(content: &str, output_path: Option<&str>) -> Result<(), String> {
    match output_path {
        Some(path) => {
            fs::write(path, content).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            eprintln!("Wrote: {}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Advance past a flag and return its value.
pub fn value_of<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Missing value for {}", flag))
}

#[inline]
fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Cycle through a small palette so neighbouring groups are distinguishable.
fn group_color(index: usize) -> &'static str {
    const PALETTE: [&str; 4] = ["#d62728", "#1f77b4", "#2ca02c", "#ff7f0e"];
    PALETTE[index % PALETTE.len()]
}
