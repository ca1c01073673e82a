//! Rotation cycles and the static cycle table.
//!
//! Each cycle encodes a real rotation roster, so the table is written out by
//! hand rather than derived.  The 8-day cycles are the four KNPC groups; the
//! 4-day cycles are the four KOC groups.  Index 0 of every cycle applies on
//! the rotation epoch (see [`ROTATION_EPOCH`](crate::schedule::ROTATION_EPOCH)).

use std::str::FromStr;

use rota_core::ensure;
use rota_core::errors::{Error, Result};

use crate::shift::Shift::{self, Afternoon, Morning, Night, Off};

/// A named, fixed-length repeating sequence of shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftCycle {
    name: &'static str,
    pattern: &'static [Shift],
}

impl ShiftCycle {
    /// Create a cycle from a static pattern.
    ///
    /// # Panics
    /// Panics (at compile time when used in a `const`/`static`) if `pattern`
    /// is empty.
    pub const fn new(name: &'static str, pattern: &'static [Shift]) -> Self {
        assert!(!pattern.is_empty(), "a shift cycle needs at least one day");
        Self { name, pattern }
    }

    /// The cycle's name, e.g. `"KOC B"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The shifts of one full period, starting at index 0.
    pub fn pattern(&self) -> &'static [Shift] {
        self.pattern
    }

    /// Number of days in one period.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always `false`; cycles are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The shift at `index` within one period.
    pub fn get(&self, index: usize) -> Option<Shift> {
        self.pattern.get(index).copied()
    }
}

impl std::fmt::Display for ShiftCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name)
    }
}

// ── Cycle table ───────────────────────────────────────────────────────────────

const A: [Shift; 8] = [Night, Night, Off, Off, Morning, Morning, Afternoon, Afternoon];
const B: [Shift; 8] = [Morning, Morning, Afternoon, Afternoon, Night, Night, Off, Off];
const C: [Shift; 8] = [Off, Off, Morning, Morning, Afternoon, Afternoon, Night, Night];
const D: [Shift; 8] = [Afternoon, Afternoon, Night, Night, Off, Off, Morning, Morning];

const KOC_A: [Shift; 4] = [Night, Off, Off, Morning];
const KOC_B: [Shift; 4] = [Off, Off, Morning, Night];
const KOC_C: [Shift; 4] = [Off, Morning, Night, Off];
const KOC_D: [Shift; 4] = [Morning, Night, Off, Off];

/// Every registered cycle, in presentation order.
pub static CYCLES: [ShiftCycle; 8] = [
    ShiftCycle::new("A", &A),
    ShiftCycle::new("B", &B),
    ShiftCycle::new("C", &C),
    ShiftCycle::new("D", &D),
    ShiftCycle::new("KOC A", &KOC_A),
    ShiftCycle::new("KOC B", &KOC_B),
    ShiftCycle::new("KOC C", &KOC_C),
    ShiftCycle::new("KOC D", &KOC_D),
];

/// Look up a cycle by its exact name.
///
/// # Errors
/// Returns [`Error::UnknownCycle`] if no cycle has that name.
pub fn cycle(name: &str) -> Result<&'static ShiftCycle> {
    CYCLES
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| Error::UnknownCycle(name.to_string()))
}

/// Names of all registered cycles, in table order.
pub fn cycle_names() -> impl Iterator<Item = &'static str> {
    CYCLES.iter().map(|c| c.name)
}

// ── Company / group selection ─────────────────────────────────────────────────

/// The employer whose rotation groups are being selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Company {
    /// Kuwait National Petroleum Company: 8-day cycles.
    Knpc,
    /// Kuwait Oil Company: 4-day cycles.
    Koc,
}

impl Company {
    /// Cycle-name prefix for this company's groups.
    fn prefix(self) -> &'static str {
        match self {
            Company::Knpc => "",
            Company::Koc => "KOC ",
        }
    }
}

impl FromStr for Company {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KNPC" => Ok(Company::Knpc),
            "KOC" => Ok(Company::Koc),
            other => Err(Error::InvalidArgument(format!(
                "unknown company \"{other}\", expected KNPC or KOC"
            ))),
        }
    }
}

/// Resolve a company's rotation group (`"A"`–`"D"`) to its cycle.
///
/// # Errors
/// * [`Error::Precondition`] if `group` is not a single letter.
/// * [`Error::UnknownCycle`] if the company has no such group.
pub fn cycle_for_group(company: Company, group: &str) -> Result<&'static ShiftCycle> {
    let group = group.trim().to_ascii_uppercase();
    ensure!(
        group.len() == 1 && group.bytes().all(|b| b.is_ascii_alphabetic()),
        "a rotation group is a single letter, got \"{group}\""
    );
    cycle(&format!("{}{group}", company.prefix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape() {
        assert_eq!(CYCLES.len(), 8);
        for c in &CYCLES {
            let expected = if c.name().starts_with("KOC") { 4 } else { 8 };
            assert_eq!(c.len(), expected, "{c}");
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(cycle("A").unwrap().pattern(), &A);
        assert_eq!(cycle("KOC B").unwrap().get(3), Some(Night));
        assert_eq!(cycle("E"), Err(Error::UnknownCycle("E".into())));
        // Names are matched exactly.
        assert!(cycle("koc a").is_err());
    }

    #[test]
    fn names_in_table_order() {
        let names: Vec<&str> = cycle_names().collect();
        assert_eq!(names, ["A", "B", "C", "D", "KOC A", "KOC B", "KOC C", "KOC D"]);
    }

    #[test]
    fn company_groups() {
        assert_eq!(cycle_for_group(Company::Knpc, "c").unwrap().name(), "C");
        assert_eq!(cycle_for_group(Company::Koc, "A").unwrap().name(), "KOC A");
        assert_eq!(
            cycle_for_group(Company::Koc, "E"),
            Err(Error::UnknownCycle("KOC E".into()))
        );
        assert!(matches!(
            cycle_for_group(Company::Knpc, "KOC A"),
            Err(Error::Precondition(_))
        ));
        assert_eq!("koc".parse::<Company>(), Ok(Company::Koc));
        assert!("ACME".parse::<Company>().is_err());
    }

    #[test]
    fn two_days_off_per_period() {
        for c in &CYCLES {
            let off = c.pattern().iter().filter(|s| s.is_off()).count();
            assert_eq!(off, 2, "{c}");
        }
    }
}
