use crate::{CoreError, Result as CoreErrorResult, Shift};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Where a new member lands and which existing members make room for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertPlan {
    pub position: i32,
    pub shift: Shift,
}

/// Plan an insertion into a scope of `len` members. `None` appends.
#[track_caller]
pub fn plan_insert(len: i32, requested: Option<i32>) -> CoreErrorResult<InsertPlan> {
    let position = requested.unwrap_or(len);
    if position < 0 || position > len {
        return Err(CoreError::PositionOutOfRange {
            position,
            max: len,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(InsertPlan {
        position,
        shift: Shift::open_gap_at(position),
    })
}

/// Plan the compaction after the member at `position` leaves the scope.
pub fn plan_remove(position: i32) -> Shift {
    Shift::close_gap_at(position)
}

/// Plan a move within one scope of `len` members.
///
/// Returns `None` when `src == dst`. Only the members strictly between the two
/// endpoints (plus the one at `dst`) are shifted; the moved member itself is
/// excluded from the range and written to `dst` directly.
#[track_caller]
pub fn plan_move(len: i32, src: i32, dst: i32) -> CoreErrorResult<Option<Shift>> {
    let max = len - 1;
    for position in [src, dst] {
        if position < 0 || position > max {
            return Err(CoreError::PositionOutOfRange {
                position,
                max,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    let shift = match src.cmp(&dst) {
        std::cmp::Ordering::Equal => return Ok(None),
        std::cmp::Ordering::Less => Shift {
            from: src + 1,
            to: Some(dst),
            delta: -1,
        },
        std::cmp::Ordering::Greater => Shift {
            from: dst,
            to: Some(src - 1),
            delta: 1,
        },
    };

    Ok(Some(shift))
}

/// Assign `position = index` for an explicit ordering of the whole scope.
///
/// `requested` must be a permutation of `current`: unknown, duplicated or
/// missing ids are rejected before anything is assigned.
#[track_caller]
pub fn plan_reorder(current: &[Uuid], requested: &[Uuid]) -> CoreErrorResult<Vec<(Uuid, i32)>> {
    let known: HashSet<Uuid> = current.iter().copied().collect();
    let mut seen = HashSet::with_capacity(requested.len());

    for id in requested {
        if !known.contains(id) {
            return Err(CoreError::InvalidReference {
                message: format!("{id} is not part of this ordering"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !seen.insert(*id) {
            return Err(CoreError::InvalidReference {
                message: format!("{id} appears more than once"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    if seen.len() != known.len() {
        return Err(CoreError::InvalidReference {
            message: format!(
                "ordering lists {} of {} members; every member must be listed",
                seen.len(),
                known.len()
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(requested
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index as i32))
        .collect())
}

/// True when the positions are exactly `0..N` in some order.
pub fn is_dense(positions: impl IntoIterator<Item = i32>) -> bool {
    let mut sorted: Vec<i32> = positions.into_iter().collect();
    sorted.sort_unstable();
    sorted
        .iter()
        .enumerate()
        .all(|(index, position)| *position == index as i32)
}
