//! Recipe system for grouping several segments at once.
//!
//! Recipes are YAML files listing segments. Each segment may override the
//! recipe-wide grouping defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use pitchline::{GroupLayout, Point, Segment};

use super::common::{
    placements_to_svg, value_of, write_output, JsonGrouping, OutputFormat, Placement,
};

/// A batch of segments to group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name/title
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Grouping parameters applied to every segment (can be overridden)
    #[serde(default)]
    pub defaults: LayoutOverrides,

    /// Segments in output order
    pub segments: Vec<RecipeSegment>,
}

/// A single segment entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSegment {
    /// Segment name (for identification)
    pub name: String,

    /// Start point as `[x, y]`
    pub from: [f64; 2],

    /// End point as `[x, y]`
    pub to: [f64; 2],

    /// Parameter overrides (merged with defaults)
    #[serde(flatten)]
    pub layout: LayoutOverrides,

    /// Whether this segment is processed
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Optional grouping parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutOverrides {
    #[serde(default)]
    pub group_size: Option<usize>,
    #[serde(default)]
    pub spacing: Option<f64>,
    #[serde(default)]
    pub gap: Option<f64>,
}

impl LayoutOverrides {
    /// Merge with defaults, preferring self's values.
    pub fn merge_with(&self, defaults: &LayoutOverrides) -> LayoutOverrides {
        LayoutOverrides {
            group_size: self.group_size.or(defaults.group_size),
            spacing: self.spacing.or(defaults.spacing),
            gap: self.gap.or(defaults.gap),
        }
    }

    /// Fill remaining gaps from `GroupLayout::default()`.
    pub fn resolve(&self) -> GroupLayout {
        let base = GroupLayout::default();
        GroupLayout::new(
            self.group_size.unwrap_or(base.group_size),
            self.spacing.unwrap_or(base.spacing),
            self.gap.unwrap_or(base.gap),
        )
    }
}

/// A segment after grouping.
pub struct RenderedSegment {
    pub name: String,
    pub segment: Segment,
    pub layout: GroupLayout,
    pub groups: Vec<pitchline::Group>,
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read recipe file: {}", e))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Failed to parse recipe YAML: {}", e))
    }

    /// Group every enabled segment. The first invalid parameter set aborts.
    pub fn render(&self) -> Result<Vec<RenderedSegment>, String> {
        let mut rendered = Vec::new();

        for entry in &self.segments {
            if !entry.enabled {
                log::debug!("skipping disabled segment '{}'", entry.name);
                continue;
            }

            let layout = entry.layout.merge_with(&self.defaults).resolve();
            let segment = Segment::new(
                Point::new(entry.from[0], entry.from[1]),
                Point::new(entry.to[0], entry.to[1]),
            );
            let groups = layout
                .apply(&segment)
                .map_err(|e| format!("Segment '{}': {}", entry.name, e))?;

            rendered.push(RenderedSegment {
                name: entry.name.clone(),
                segment,
                layout,
                groups,
            });
        }

        Ok(rendered)
    }
}

/// Serialized form of a rendered recipe.
#[derive(Serialize)]
struct RecipeOutput {
    name: String,
    segments: Vec<JsonGrouping>,
}

/// Convert rendered segments to the requested output format.
pub fn rendered_to_string(
    name: &str,
    rendered: &[RenderedSegment],
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Svg => {
            let placements: Vec<Placement> = rendered
                .iter()
                .map(|r| Placement {
                    name: Some(r.name.as_str()),
                    segment: r.segment,
                    groups: r.groups.clone(),
                })
                .collect();
            placements_to_svg(&placements)
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            let output = RecipeOutput {
                name: name.to_string(),
                segments: rendered
                    .iter()
                    .map(|r| JsonGrouping::new(Some(r.name.clone()), &r.segment, &r.layout, &r.groups))
                    .collect(),
            };
            if format == OutputFormat::Json {
                serde_json::to_string_pretty(&output)
                    .map(|s| s + "\n")
                    .map_err(|e| format!("Failed to serialize JSON: {}", e))
            } else {
                serde_yaml::to_string(&output).map_err(|e| format!("Failed to serialize YAML: {}", e))
            }
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for r in rendered {
                out.push_str(&format!("# {}\n", r.name));
                out.push_str(&super::common::groups_to_text(&r.groups));
            }
            Ok(out)
        }
    }
}

/// Execute the recipe command.
pub fn cmd_recipe(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        print_usage();
        return Ok(());
    }

    let mut recipe_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut format = OutputFormat::Json;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-o" | "--output" => output_path = Some(value_of(args, &mut i, flag)?.to_string()),
            "-f" | "--format" => {
                let v = value_of(args, &mut i, flag)?;
                format = OutputFormat::from_name(v).ok_or_else(|| {
                    format!("Unknown format: {}. Use 'text', 'json', 'yaml' or 'svg'.", v)
                })?;
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "--example" => {
                print_example();
                return Ok(());
            }
            arg if !arg.starts_with('-') => {
                recipe_path = Some(arg.to_string());
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    let recipe_path = recipe_path.ok_or("No recipe file specified")?;

    eprintln!("Loading recipe: {}", recipe_path);
    let recipe = Recipe::load(&recipe_path)?;

    eprintln!("Recipe: {}", recipe.name);
    eprintln!("Segments: {}", recipe.segments.len());

    let rendered = recipe.render()?;

    let total_groups: usize = rendered.iter().map(|r| r.groups.len()).sum();
    eprintln!("Generated {} groups across {} segments", total_groups, rendered.len());

    let content = rendered_to_string(&recipe.name, &rendered, format)?;
    write_output(&content, output_path.as_deref())
}

fn print_usage() {
    eprintln!("pitchline recipe - Group several segments described in YAML");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    pitchline recipe <recipe.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -f, --format <fmt>     Output: text, json, yaml, svg (default: json)");
    eprintln!("    -o, --output <file>    Write to file instead of stdout");
    eprintln!("    --example              Print an example recipe YAML");
    eprintln!("    -h, --help             Show this help");
}

const EXAMPLE_RECIPE: &str = r##"# Example pitchline recipe
name: "Fence posts"
description: "Two runs sharing the same spacing"

defaults:
  group_size: 5
  spacing: 2
  gap: 1

segments:
  - name: north
    from: [0, 0]
    to: [10, 10]

  - name: east
    from: [0, 0]
    to: [40, 0]
    group_size: 3
    gap: 4
"##;

fn print_example() {
    print!("{}", EXAMPLE_RECIPE);
}
