//! Group command implementation.

use pitchline::{GroupLayout, Point, Segment};

use super::common::{
    groups_to_text, parse_point, placements_to_svg, value_of, write_output, JsonGrouping,
    OutputFormat, Placement,
};
use super::png::render_png;

/// Options collected from the command line.
struct GroupArgs {
    from: Point,
    to: Point,
    layout: GroupLayout,
    format: OutputFormat,
    output_path: Option<String>,
    png_path: Option<String>,
    png_scale: Option<f64>,
}

/// Execute the group command.
pub fn cmd_group(args: &[String]) -> Result<(), String> {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    let opts = parse_args(args)?;
    let segment = Segment::new(opts.from, opts.to);
    let groups = opts
        .layout
        .apply(&segment)
        .map_err(|e| format!("Cannot group segment: {}", e))?;

    eprintln!(
        "Segment {} -> {} (length {:.4}): {} groups of {}",
        segment.start(),
        segment.end(),
        segment.length(),
        groups.len(),
        opts.layout.group_size
    );

    let placement = Placement { name: None, segment, groups };

    let content = match opts.format {
        OutputFormat::Text => groups_to_text(&placement.groups),
        OutputFormat::Json => {
            let json = JsonGrouping::new(None, &segment, &opts.layout, &placement.groups);
            let mut s = serde_json::to_string_pretty(&json)
                .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
            s.push('\n');
            s
        }
        OutputFormat::Yaml => {
            let yaml = JsonGrouping::new(None, &segment, &opts.layout, &placement.groups);
            serde_yaml::to_string(&yaml).map_err(|e| format!("Failed to serialize YAML: {}", e))?
        }
        OutputFormat::Svg => placements_to_svg(std::slice::from_ref(&placement))?,
    };

    write_output(&content, opts.output_path.as_deref())?;

    if let Some(png_path) = opts.png_path.as_deref() {
        let svg = match opts.format {
            OutputFormat::Svg => content,
            _ => placements_to_svg(std::slice::from_ref(&placement))?,
        };
        let (w, h) = render_png(&svg, png_path, opts.png_scale)?;
        eprintln!("Wrote: {} ({}x{})", png_path, w, h);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<GroupArgs, String> {
    let mut from: Option<Point> = None;
    let mut to: Option<Point> = None;
    let mut layout = GroupLayout::default();
    let mut format = OutputFormat::Text;
    let mut output_path: Option<String> = None;
    let mut png_path: Option<String> = None;
    let mut png_scale: Option<f64> = None;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--from" => from = Some(parse_point(value_of(args, &mut i, flag)?)?),
            "--to" => to = Some(parse_point(value_of(args, &mut i, flag)?)?),
            "-n" | "--group-size" => {
                let v = value_of(args, &mut i, flag)?;
                layout.group_size = v
                    .parse()
                    .map_err(|_| format!("Invalid group size: {}", v))?;
            }
            "-s" | "--spacing" => layout.spacing = parse_f64(value_of(args, &mut i, flag)?, "spacing")?,
            "-g" | "--gap" => layout.gap = parse_f64(value_of(args, &mut i, flag)?, "gap")?,
            "-f" | "--format" => {
                let v = value_of(args, &mut i, flag)?;
                format = OutputFormat::from_name(v).ok_or_else(|| {
                    format!("Unknown format: {}. Use 'text', 'json', 'yaml' or 'svg'.", v)
                })?;
            }
            "--json" => format = OutputFormat::Json,
            "-o" | "--output" => output_path = Some(value_of(args, &mut i, flag)?.to_string()),
            "--png" => png_path = Some(value_of(args, &mut i, flag)?.to_string()),
            "--scale" => png_scale = Some(parse_f64(value_of(args, &mut i, flag)?, "scale")?),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(GroupArgs {
        from: from.ok_or("Missing --from X,Y")?,
        to: to.ok_or("Missing --to X,Y")?,
        layout,
        format,
        output_path,
        png_path,
        png_scale,
    })
}

fn parse_f64(value: &str, what: &str) -> Result<f64, String> {
    value.parse().map_err(|_| format!("Invalid {}: {}", what, value))
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("pitchline group - Place point groups along a segment");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    pitchline group --from X,Y --to X,Y [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -n, --group-size <n>   Points per group (default: 5)");
    eprintln!("    -s, --spacing <f>      Spacing between groups (default: 2)");
    eprintln!("    -g, --gap <f>          Gap between groups (default: 1)");
    eprintln!("    -f, --format <fmt>     Output: text, json, yaml, svg (default: text)");
    eprintln!("    --json                 Shorthand for --format json");
    eprintln!("    -o, --output <file>    Write to file instead of stdout");
    eprintln!("    --png <file>           Also render a PNG preview");
    eprintln!("    --scale <f>            PNG scale factor (default: fit to 1024px)");
    eprintln!("    -h, --help             Show this help");
}
