//! Quantity Staging
//!
//! Client-only counters behind each inventory row's amount input. Nothing
//! here reaches the server until "Add to Cart" commits it.

use std::collections::HashMap;
use std::fmt;

use crate::models::ItemId;

/// Value held by an amount input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedAmount {
    Count(i64),
    /// Text that does not start with an integer. Displayed as `NaN`,
    /// ignored by `+`, `-` and "Add to Cart".
    Invalid,
}

impl Default for StagedAmount {
    fn default() -> Self {
        StagedAmount::Count(0)
    }
}

impl StagedAmount {
    /// Parse the leading integer of the input text (`" 3kg"` is 3).
    ///
    /// Digit runs too long for `i64` saturate instead of failing.
    pub fn parse(text: &str) -> Self {
        let text = text.trim_start();
        let (negative, rest) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let digits = &rest[..digits_end];
        if digits.is_empty() {
            return StagedAmount::Invalid;
        }
        let n = digits.parse::<i64>().unwrap_or(i64::MAX);
        StagedAmount::Count(if negative { -n } else { n })
    }

    pub fn increment(self) -> Self {
        match self {
            StagedAmount::Count(n) => StagedAmount::Count(n.saturating_add(1)),
            StagedAmount::Invalid => StagedAmount::Invalid,
        }
    }

    /// Floors at zero: anything not above zero is left alone.
    pub fn decrement(self) -> Self {
        match self {
            StagedAmount::Count(n) if n > 0 => StagedAmount::Count(n - 1),
            other => other,
        }
    }

    /// Amount "Add to Cart" would commit, if any. Counts past `u32::MAX`
    /// commit `u32::MAX`.
    pub fn committable(self) -> Option<u32> {
        match self {
            StagedAmount::Count(n) if n > 0 => Some(u32::try_from(n).unwrap_or(u32::MAX)),
            _ => None,
        }
    }
}

impl fmt::Display for StagedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StagedAmount::Count(n) => write!(f, "{}", n),
            StagedAmount::Invalid => f.write_str("NaN"),
        }
    }
}

/// Staged amounts of all inventory rows; rows never touched read as 0
#[derive(Debug, Default)]
pub struct Staging {
    amounts: HashMap<ItemId, StagedAmount>,
}

impl Staging {
    pub fn get(&self, id: ItemId) -> StagedAmount {
        self.amounts.get(&id).copied().unwrap_or_default()
    }

    pub fn increment(&mut self, id: ItemId) -> StagedAmount {
        self.apply(id, StagedAmount::increment)
    }

    /// `None` when the row is already at the floor (or holds text that is
    /// not a positive count), in which case nothing changed.
    pub fn decrement(&mut self, id: ItemId) -> Option<StagedAmount> {
        let before = self.get(id);
        let after = before.decrement();
        if after == before {
            return None;
        }
        self.amounts.insert(id, after);
        Some(after)
    }

    /// Take whatever the user typed into the input
    pub fn set_text(&mut self, id: ItemId, text: &str) -> StagedAmount {
        self.apply(id, |_| StagedAmount::parse(text))
    }

    /// Back to all zeros, as after the inventory list is redrawn
    pub fn reset(&mut self) {
        self.amounts.clear();
    }

    fn apply(&mut self, id: ItemId, f: impl FnOnce(StagedAmount) -> StagedAmount) -> StagedAmount {
        let entry = self.amounts.entry(id).or_default();
        *entry = f(*entry);
        *entry
    }
}
