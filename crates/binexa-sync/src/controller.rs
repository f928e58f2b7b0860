//! The edit/derive state machine.

use binexa_convert::{derive_others, is_valid_numeral, normalize_input, ConvertError, Derived};
use binexa_types::{Base, NumeralTriple};
use tracing::debug;

use crate::field::{ConversionState, NumeralField};

/// Why an edit was discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The text contains a character outside the field's alphabet.
    InvalidCharacter,
    /// The value does not fit in an unsigned 64-bit integer.
    Overflow,
}

/// Result of feeding one edit to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text was stored and the other two fields re-derived.
    /// `value` is `None` when the accepted text was empty.
    Accepted { value: Option<u64> },
    /// The edit was discarded; no field changed.
    Rejected(RejectReason),
}

impl EditOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EditOutcome::Accepted { .. })
    }
}

/// Owner of the live conversion state.
///
/// The controller is the only writer of its [`ConversionState`]. Each edit
/// is validated, stored, and followed by a full derivation pass before the
/// method returns.
#[derive(Clone, Debug, Default)]
pub struct SyncController {
    state: ConversionState,
}

impl SyncController {
    /// Create a controller with three empty fields.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    pub fn field(&self, base: Base) -> &NumeralField {
        self.state.field(base)
    }

    pub fn text(&self, base: Base) -> &str {
        self.state.field(base).text()
    }

    pub fn last_edited(&self) -> Option<Base> {
        self.state.last_edited()
    }

    pub fn snapshot(&self) -> NumeralTriple {
        self.state.snapshot()
    }

    /// Apply a user edit to the field for `base`.
    ///
    /// Invalid or out-of-range text leaves every field untouched. Accepted
    /// text is stored exactly (after hexadecimal uppercasing) and overwrites
    /// the other two fields with derived text, even if they were mid-edit.
    pub fn edit(&mut self, base: Base, text: &str) -> EditOutcome {
        let text = normalize_input(text, base);
        if !is_valid_numeral(&text, base) {
            debug!(%base, "edit rejected: invalid character");
            return EditOutcome::Rejected(RejectReason::InvalidCharacter);
        }

        let derived = match derive_others(&text, base) {
            Ok(derived) => derived,
            Err(ConvertError::Overflow { .. }) => {
                debug!(%base, len = text.len(), "edit rejected: value out of range");
                return EditOutcome::Rejected(RejectReason::Overflow);
            }
            Err(e) => {
                debug!(%base, error = %e, "edit rejected");
                return EditOutcome::Rejected(RejectReason::InvalidCharacter);
            }
        };

        self.state.field_mut(base).set_text(text);
        self.state.set_last_edited(Some(base));
        let value = derived.value();
        self.apply(derived);
        debug!(%base, ?value, "edit accepted");
        EditOutcome::Accepted { value }
    }

    /// Re-run the derivation pass from the last-edited field.
    ///
    /// No-op when nothing has been edited since the last clear.
    pub fn resync(&mut self) {
        let Some(source) = self.state.last_edited() else {
            return;
        };
        let text = self.state.field(source).text().to_string();
        match derive_others(&text, source) {
            Ok(derived) => self.apply(derived),
            Err(e) => debug!(%source, error = %e, "resync skipped"),
        }
    }

    /// Empty all three fields and forget the last-edited marker.
    pub fn clear(&mut self) {
        for base in Base::ALL {
            self.state.field_mut(base).set_text(String::new());
        }
        self.state.set_last_edited(None);
        debug!("conversion state cleared");
    }

    /// The value currently shown, if any field holds one.
    pub fn value(&self) -> Option<u64> {
        let source = self.state.last_edited()?;
        binexa_convert::parse_numeral(self.text(source), source).ok()
    }

    fn apply(&mut self, derived: Derived) {
        for (base, text) in derived.iter() {
            self.state.field_mut(base).set_text(text.to_string());
        }
    }
}
