//! `Shift`: the work assignment for one day.

use std::str::FromStr;

use rota_core::errors::{Error, Result};

/// One day's assignment under a rotation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shift {
    /// Morning shift.
    Morning,
    /// Afternoon shift.
    Afternoon,
    /// Night shift.
    Night,
    /// Day off.
    Off,
}

impl Shift {
    /// All shifts, in declaration order.
    pub const ALL: [Shift; 4] = [Shift::Morning, Shift::Afternoon, Shift::Night, Shift::Off];

    /// Display name, e.g. `"Night"`.
    pub fn name(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Night => "Night",
            Shift::Off => "Off",
        }
    }

    /// Return `true` for a day off.
    pub fn is_off(&self) -> bool {
        matches!(self, Shift::Off)
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Shift {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Shift::ALL
            .into_iter()
            .find(|shift| shift.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown shift \"{s}\"")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("night".parse::<Shift>(), Ok(Shift::Night));
        assert_eq!(" OFF ".parse::<Shift>(), Ok(Shift::Off));
        assert_eq!("Afternoon".parse::<Shift>(), Ok(Shift::Afternoon));
        assert!("Evening".parse::<Shift>().is_err());
    }

    #[test]
    fn only_off_is_off() {
        let off: Vec<Shift> = Shift::ALL.into_iter().filter(Shift::is_off).collect();
        assert_eq!(off, [Shift::Off]);
    }
}
