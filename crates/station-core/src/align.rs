//! Alignment and distribution of selected elements.
//!
//! Both operations compute per-element translation deltas from bounding
//! boxes; the scene applies them and commits once.

use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId};
use crate::handles::combined_bounds;

/// Minimum number of elements for an alignment.
pub const MIN_ALIGN_COUNT: usize = 2;
/// Minimum number of elements for a distribution.
pub const MIN_DISTRIBUTE_COUNT: usize = 3;

/// Offsets smaller than this count as already aligned.
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributeAxis {
    Horizontal,
    Vertical,
}

/// Deltas that align `targets` against their combined bounding box.
///
/// Locked elements widen the box but are never moved. Elements that are
/// already in place are left out.
pub fn alignment_deltas(targets: &[&Element], alignment: Alignment) -> Vec<(ElementId, Vec2)> {
    if targets.len() < MIN_ALIGN_COUNT {
        return Vec::new();
    }
    let Some(group) = combined_bounds(targets.iter().copied()) else {
        return Vec::new();
    };
    targets
        .iter()
        .filter(|e| !e.is_locked())
        .filter_map(|e| {
            let b = e.bounds();
            let delta = match alignment {
                Alignment::Left => Vec2::new(group.x0 - b.x0, 0.0),
                Alignment::Center => Vec2::new(group.center().x - b.center().x, 0.0),
                Alignment::Right => Vec2::new(group.x1 - b.x1, 0.0),
                Alignment::Top => Vec2::new(0.0, group.y0 - b.y0),
                Alignment::Middle => Vec2::new(0.0, group.center().y - b.center().y),
                Alignment::Bottom => Vec2::new(0.0, group.y1 - b.y1),
            };
            (delta.hypot() > EPSILON).then(|| (e.id(), delta))
        })
        .collect()
}

fn span(rect: Rect, axis: DistributeAxis) -> (f64, f64) {
    match axis {
        DistributeAxis::Horizontal => (rect.x0, rect.x1),
        DistributeAxis::Vertical => (rect.y0, rect.y1),
    }
}

/// Deltas that equalize the gaps between `targets` along `axis`.
///
/// Elements are ordered by their leading edge. The first and last stay put
/// and the rest are spaced so every gap equals
/// `(total_span - sum_of_extents) / (count - 1)`.
pub fn distribution_deltas(targets: &[&Element], axis: DistributeAxis) -> Vec<(ElementId, Vec2)> {
    if targets.len() < MIN_DISTRIBUTE_COUNT {
        return Vec::new();
    }
    let mut ordered: Vec<(&Element, f64, f64)> = targets
        .iter()
        .map(|e| {
            let (start, end) = span(e.bounds(), axis);
            (*e, start, end)
        })
        .collect();
    ordered.sort_by(|a, b| a.1.total_cmp(&b.1));

    let first = ordered[0].1;
    let last = ordered[ordered.len() - 1].2;
    let extents: f64 = ordered.iter().map(|o| o.2 - o.1).sum();
    let gap = (last - first - extents) / (ordered.len() - 1) as f64;

    let mut deltas = Vec::new();
    let mut cursor = first;
    let count = ordered.len();
    for (i, (element, start, end)) in ordered.into_iter().enumerate() {
        let shift = cursor - start;
        cursor += (end - start) + gap;
        if i == 0 || i == count - 1 || element.is_locked() || shift.abs() <= EPSILON {
            continue;
        }
        let delta = match axis {
            DistributeAxis::Horizontal => Vec2::new(shift, 0.0),
            DistributeAxis::Vertical => Vec2::new(0.0, shift),
        };
        deltas.push((element.id(), delta));
    }
    deltas
}
