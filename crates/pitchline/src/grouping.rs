//! Grouped point placement along a segment.
//!
//! Splits a segment into sequential clusters of points: `group_size` points
//! per cluster, clusters offset from each other by `spacing + gap`.
//!
//! # Example
//! ```
//! use pitchline::{Point, Segment};
//!
//! let segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
//! let groups = segment.grouped_coordinates(5, 2.0, 1.0).unwrap();
//! assert_eq!(groups.len(), 4);
//! assert_eq!(groups[1][0], Point::new(3.0, 3.0));
//! ```
//!
//! The increment between points inside a group is derived from the whole
//! segment delta plus one gap, `(delta + gap) / (group_size - 1)`, not from
//! `spacing`. Callers that depend on the established output rely on this.

use log::{debug, warn};

use crate::geometry::{Point, Segment};

/// One cluster of points, in placement order.
pub type Group = Vec<Point>;

/// Upper bound on the number of points a single call may produce.
pub const MAX_POINTS: usize = 10_000_000;

/// Error type for rejected grouping parameters.
///
/// ## Rust Lesson #20: Error Handling
///
/// Bad input comes back as `Err(...)` instead of an infinite increment or a
/// NaN group count. The caller decides what to do with it.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupingError {
    /// `group_size` was zero.
    InvalidGroupSize(usize),
    /// `spacing + gap` was zero, negative or NaN.
    InvalidSpacingOrGap { spacing: f64, gap: f64 },
    /// The parameters would place an unbounded or excessive number of points.
    TooManyPoints { requested: f64 },
}

impl std::fmt::Display for GroupingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingError::InvalidGroupSize(size) => {
                write!(f, "invalid group size {}: must be at least 1", size)
            }
            GroupingError::InvalidSpacingOrGap { spacing, gap } => write!(
                f,
                "invalid spacing {} and gap {}: spacing + gap must be positive",
                spacing, gap
            ),
            GroupingError::TooManyPoints { requested } => write!(
                f,
                "too many points requested ({}), limit is {}",
                requested, MAX_POINTS
            ),
        }
    }
}

impl std::error::Error for GroupingError {}

/// Parameters for grouping points along a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupLayout {
    /// Points per group (at least 1)
    pub group_size: usize,
    /// Group-to-group offset component, also subtracted once from the length
    pub spacing: f64,
    /// Extra distance between groups
    pub gap: f64,
}

impl Default for GroupLayout {
    fn default() -> Self {
        Self {
            group_size: 5,
            spacing: 2.0,
            gap: 1.0,
        }
    }
}

impl GroupLayout {
    pub fn new(group_size: usize, spacing: f64, gap: f64) -> Self {
        Self { group_size, spacing, gap }
    }

    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Check the parameters without touching any segment.
    pub fn validate(&self) -> Result<(), GroupingError> {
        if self.group_size < 1 {
            return Err(GroupingError::InvalidGroupSize(self.group_size));
        }
        // `!(x > 0)` also catches NaN
        if !(self.spacing + self.gap > 0.0) {
            return Err(GroupingError::InvalidSpacingOrGap {
                spacing: self.spacing,
                gap: self.gap,
            });
        }
        Ok(())
    }

    /// Offset between the origins of consecutive groups.
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.spacing + self.gap
    }

    /// Compute the groups for a segment.
    pub fn apply(&self, segment: &Segment) -> Result<Vec<Group>, GroupingError> {
        if let Err(e) = self.validate() {
            warn!("rejected grouping parameters: {}", e);
            return Err(e);
        }

        let count = count_groups(segment.length(), self.spacing, self.gap)?;
        let total = count as f64 * self.group_size as f64;
        if total > MAX_POINTS as f64 {
            return Err(GroupingError::TooManyPoints { requested: total });
        }

        let (x_inc, y_inc) = increments(segment, self.group_size, self.gap);
        debug!(
            "segment length {} -> {} groups of {} (increment {}, {})",
            segment.length(),
            count,
            self.group_size,
            x_inc,
            y_inc
        );

        let start = segment.start();
        let pitch = self.pitch();

        // ## Rust Lesson #12: Iterator chains
        //
        // Outer map = groups in sequence order, inner map = points within
        // the group. `collect()` builds the nested Vecs in that order.
        let groups = (0..count)
            .map(|i| {
                let offset = i as f64 * pitch;
                (0..self.group_size)
                    .map(|j| {
                        let j = j as f64;
                        Point::new(
                            start.x + offset + j * x_inc,
                            start.y + offset + j * y_inc,
                        )
                    })
                    .collect::<Group>()
            })
            .collect::<Vec<_>>();

        Ok(groups)
    }
}

/// Per-point increment inside a group.
///
/// A single-point group has no internal step, so it gets a zero increment
/// instead of a division by zero.
fn increments(segment: &Segment, group_size: usize, gap: f64) -> (f64, f64) {
    if group_size <= 1 {
        return (0.0, 0.0);
    }
    let (dx, dy) = segment.delta();
    let steps = (group_size - 1) as f64;
    ((dx + gap) / steps, (dy + gap) / steps)
}

/// Number of whole groups that fit, truncated toward zero.
///
/// Negative and NaN quotients yield 0. Assumes `spacing + gap > 0`.
fn count_groups(length: f64, spacing: f64, gap: f64) -> Result<usize, GroupingError> {
    let quotient = ((length - spacing) / (spacing + gap)).trunc();

    if quotient.is_nan() || quotient <= 0.0 {
        return Ok(0);
    }
    if quotient.is_infinite() || quotient > MAX_POINTS as f64 {
        return Err(GroupingError::TooManyPoints { requested: quotient });
    }
    Ok(quotient as usize)
}

impl Segment {
    /// Partition this segment into sequential groups of points.
    ///
    /// Returns `count` groups of exactly `group_size` points each, where
    /// `count = trunc((length - spacing) / (spacing + gap))`, or no groups when
    /// that is not positive. Group `i`, point `j` sits at
    /// `start + i * (spacing + gap) + j * increment` on both axes.
    pub fn grouped_coordinates(
        &self,
        group_size: usize,
        spacing: f64,
        gap: f64,
    ) -> Result<Vec<Group>, GroupingError> {
        GroupLayout::new(group_size, spacing, gap).apply(self)
    }

    /// Number of groups [`Segment::grouped_coordinates`] would produce.
    pub fn group_count(&self, spacing: f64, gap: f64) -> Result<usize, GroupingError> {
        GroupLayout::new(1, spacing, gap).validate()?;
        count_groups(self.length(), spacing, gap)
    }
}

// ============================================================================
// TESTS
// ============================================================================
