use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The radix a numeral is written in.
///
/// Serialized with the lowercase long name (`"binary"`, `"decimal"`,
/// `"hexadecimal"`), which is also the form analytics payloads use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Binary,
    Decimal,
    Hexadecimal,
}

impl Base {
    /// All bases in display order.
    pub const ALL: [Base; 3] = [Base::Binary, Base::Decimal, Base::Hexadecimal];

    /// Numeric radix of this base.
    pub const fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Long lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Base::Binary => "binary",
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
        }
    }

    /// Short label used in terminal output.
    pub const fn short_name(self) -> &'static str {
        match self {
            Base::Binary => "bin",
            Base::Decimal => "dec",
            Base::Hexadecimal => "hex",
        }
    }

    /// Look up a base by its radix.
    pub fn from_radix(radix: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.radix() == radix)
    }

    /// The two bases that are derived when `self` is the source.
    pub fn others(self) -> [Base; 2] {
        match self {
            Base::Binary => [Base::Decimal, Base::Hexadecimal],
            Base::Decimal => [Base::Binary, Base::Hexadecimal],
            Base::Hexadecimal => [Base::Binary, Base::Decimal],
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Base {
    type Err = TypeError;

    /// Accepts the long name, the short label, or the radix (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "b" | "2" => Ok(Base::Binary),
            "decimal" | "dec" | "d" | "10" => Ok(Base::Decimal),
            "hexadecimal" | "hex" | "h" | "16" => Ok(Base::Hexadecimal),
            _ => Err(TypeError::UnknownBase(s.to_string())),
        }
    }
}
