/// A contiguous run of positions moved by the same delta.
///
/// `to` is inclusive; `None` means the run extends to the end of the scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub from: i32,
    pub to: Option<i32>,
    pub delta: i32,
}

impl Shift {
    /// Everything at or after `from` moves one slot later.
    pub fn open_gap_at(from: i32) -> Self {
        Self {
            from,
            to: None,
            delta: 1,
        }
    }

    /// Everything after `position` moves one slot earlier.
    pub fn close_gap_at(position: i32) -> Self {
        Self {
            from: position + 1,
            to: None,
            delta: -1,
        }
    }

    pub fn covers(&self, position: i32) -> bool {
        position >= self.from && self.to.is_none_or(|to| position <= to)
    }

    pub fn apply(&self, position: i32) -> i32 {
        if self.covers(position) {
            position + self.delta
        } else {
            position
        }
    }
}
