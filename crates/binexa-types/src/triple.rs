use serde::{Deserialize, Serialize};

use crate::base::Base;

/// Text of one value in all three bases.
///
/// A triple is a plain snapshot; it does not check that its fields agree.
/// The sync controller is responsible for keeping them consistent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumeralTriple {
    pub binary: String,
    pub decimal: String,
    pub hexadecimal: String,
}

impl NumeralTriple {
    pub fn new(
        binary: impl Into<String>,
        decimal: impl Into<String>,
        hexadecimal: impl Into<String>,
    ) -> Self {
        Self {
            binary: binary.into(),
            decimal: decimal.into(),
            hexadecimal: hexadecimal.into(),
        }
    }

    /// Text of the field for `base`.
    pub fn get(&self, base: Base) -> &str {
        match base {
            Base::Binary => &self.binary,
            Base::Decimal => &self.decimal,
            Base::Hexadecimal => &self.hexadecimal,
        }
    }

    /// Replace the text of the field for `base`.
    pub fn set(&mut self, base: Base, text: impl Into<String>) {
        let slot = match base {
            Base::Binary => &mut self.binary,
            Base::Decimal => &mut self.decimal,
            Base::Hexadecimal => &mut self.hexadecimal,
        };
        *slot = text.into();
    }

    /// Returns `true` if all three fields are empty.
    pub fn is_empty(&self) -> bool {
        self.binary.is_empty() && self.decimal.is_empty() && self.hexadecimal.is_empty()
    }

    /// Copy of this triple with every empty field replaced by `"0"`.
    pub fn with_zero_defaults(&self) -> Self {
        let or_zero = |s: &str| {
            if s.is_empty() {
                "0".to_string()
            } else {
                s.to_string()
            }
        };
        Self {
            binary: or_zero(&self.binary),
            decimal: or_zero(&self.decimal),
            hexadecimal: or_zero(&self.hexadecimal),
        }
    }
}
