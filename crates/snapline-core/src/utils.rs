//! Line utilities: offsets, merging and tolerance search.

use crate::line::{AlignLine, Axis, Role, RoleMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Signed distance from `b` to `a` across `axis`.
///
/// Positive when `a` lies further along the perpendicular direction than `b`.
pub fn axis_offset(a: &AlignLine, b: &AlignLine, axis: Axis) -> f64 {
    a.position(axis) - b.position(axis)
}

/// Map key for a coordinate: exact equality, with `0.0 == -0.0` and all NaNs
/// grouped together.
fn coordinate_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

/// Collapse lines sharing a coordinate into one line covering all of them.
///
/// Lines that do not lie along `axis` are dropped. Output follows the order
/// in which each coordinate was first seen.
pub fn merge_lines(lines: &[AlignLine], axis: Axis) -> Vec<AlignLine> {
    // (coordinate, min, max) per group
    let mut groups: Vec<(f64, f64, f64)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for line in lines.iter().filter(|line| line.lies_along(axis)) {
        let position = line.position(axis);
        let (from, to) = line.span(axis);
        let low = from.min(to);
        let high = from.max(to);

        match index.get(&coordinate_key(position)) {
            Some(&i) => {
                let group = &mut groups[i];
                group.1 = group.1.min(low);
                group.2 = group.2.max(high);
            }
            None => {
                index.insert(coordinate_key(position), groups.len());
                groups.push((position, low, high));
            }
        }
    }

    groups
        .into_iter()
        .map(|(position, low, high)| AlignLine::along(axis, position, low, high))
        .collect()
}

/// Nearest candidate found for each role on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisSnap {
    /// Signed distance from each own line to its nearest candidate.
    pub offset: RoleMap<f64>,
    /// Coordinate of the matched candidate line per role.
    pub absolute: RoleMap<f64>,
    /// Smallest-magnitude offset among the three roles.
    pub min: Option<f64>,
}

impl AxisSnap {
    /// Whether any role found a candidate.
    pub fn is_snapped(&self) -> bool {
        self.min.is_some()
    }
}

/// For each of `targets` (in role order), find the candidate whose offset has
/// the smallest magnitude not exceeding `tolerance`.
///
/// Offsets are measured from the target to the candidate, so adding one to
/// the moving box aligns that role with the candidate. Exact ties keep the
/// earlier candidate; ties between roles keep the earlier role.
pub fn nearest_within_tolerance(
    targets: &[AlignLine; 3],
    candidates: &[AlignLine],
    axis: Axis,
    tolerance: f64,
) -> AxisSnap {
    let mut result = AxisSnap::default();

    for (role, target) in Role::ALL.into_iter().zip(targets) {
        let mut best: Option<(f64, f64)> = None;
        for candidate in candidates {
            let diff = axis_offset(candidate, target, axis);
            // Comparisons with NaN are false, so a NaN offset or tolerance never matches.
            let within = diff.abs() <= tolerance;
            if within && best.is_none_or(|(offset, _)| diff.abs() < offset.abs()) {
                best = Some((diff, candidate.position(axis)));
            }
        }
        if let Some((offset, absolute)) = best {
            result.offset.set(role, offset);
            result.absolute.set(role, absolute);
        }
    }

    result.min = min_offset(&result.offset);
    result
}

/// The role offset with the smallest magnitude, first role winning ties.
pub fn min_offset(offsets: &RoleMap<f64>) -> Option<f64> {
    offsets
        .iter()
        .map(|(_, &offset)| offset)
        .fold(None, |best: Option<f64>, offset| match best {
            Some(current) if current.abs() <= offset.abs() => Some(current),
            _ => Some(offset),
        })
}
