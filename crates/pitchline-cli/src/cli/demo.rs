//! Demo command: the reference diagonal segment.

use pitchline::{GroupLayout, Point, Segment};

use super::common::groups_to_text;

/// Segment, parameters and rendered text of the demo.
pub fn demo_output() -> Result<String, String> {
    let segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let layout = GroupLayout::default();

    let groups = segment
        .grouped_coordinates(layout.group_size, layout.spacing, layout.gap)
        .map_err(|e| e.to_string())?;

    let mut out = format!(
        "Segment {} -> {}, length {}\ngroup_size={} spacing={} gap={}\n",
        segment.start(),
        segment.end(),
        segment.length(),
        layout.group_size,
        layout.spacing,
        layout.gap
    );
    out.push_str(&groups_to_text(&groups));
    Ok(out)
}

/// Execute the demo command.
pub fn cmd_demo() -> Result<(), String> {
    print!("{}", demo_output()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_prints_four_groups() {
        let out = demo_output().unwrap();
        assert!(out.starts_with("Segment (0, 0) -> (10, 10), length 14.14"));
        assert!(out.contains("group_size=5 spacing=2 gap=1"));
        assert!(out.contains("group 3: (9, 9)"));
        assert!(!out.contains("group 4:"));
    }
}
