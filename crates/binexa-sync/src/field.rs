//! Live text fields and the state that groups them.

use binexa_convert::{is_valid_numeral, parse_numeral};
use binexa_types::{Base, NumeralTriple};
use serde::{Deserialize, Serialize};

/// One live text field bound to a base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralField {
    base: Base,
    text: String,
}

impl NumeralField {
    /// Create an empty field for `base`.
    pub fn new(base: Base) -> Self {
        Self {
            base,
            text: String::new(),
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the current text passes the validator for this field's base.
    pub fn is_valid(&self) -> bool {
        is_valid_numeral(&self.text, self.base)
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// The three fields plus the marker naming the authoritative one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionState {
    binary: NumeralField,
    decimal: NumeralField,
    hexadecimal: NumeralField,
    last_edited: Option<Base>,
}

impl Default for ConversionState {
    fn default() -> Self {
        Self {
            binary: NumeralField::new(Base::Binary),
            decimal: NumeralField::new(Base::Decimal),
            hexadecimal: NumeralField::new(Base::Hexadecimal),
            last_edited: None,
        }
    }
}

impl ConversionState {
    pub fn field(&self, base: Base) -> &NumeralField {
        match base {
            Base::Binary => &self.binary,
            Base::Decimal => &self.decimal,
            Base::Hexadecimal => &self.hexadecimal,
        }
    }

    pub(crate) fn field_mut(&mut self, base: Base) -> &mut NumeralField {
        match base {
            Base::Binary => &mut self.binary,
            Base::Decimal => &mut self.decimal,
            Base::Hexadecimal => &mut self.hexadecimal,
        }
    }

    /// The field whose text drives derivation, if any.
    pub fn last_edited(&self) -> Option<Base> {
        self.last_edited
    }

    pub(crate) fn set_last_edited(&mut self, base: Option<Base>) {
        self.last_edited = base;
    }

    /// Plain-text snapshot of all three fields.
    pub fn snapshot(&self) -> NumeralTriple {
        NumeralTriple::new(
            self.binary.text(),
            self.decimal.text(),
            self.hexadecimal.text(),
        )
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        Base::ALL.iter().all(|b| self.field(*b).is_empty())
    }

    /// Check the consistency invariant: either all fields are empty, or all
    /// three parse to the same value.
    pub fn is_consistent(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let values: Vec<Option<u64>> = Base::ALL
            .iter()
            .map(|b| parse_numeral(self.field(*b).text(), *b).ok())
            .collect();
        match values[0] {
            Some(v) => values.iter().all(|x| *x == Some(v)),
            None => false,
        }
    }
}
