use serde::Serialize;

use binexa_history::ConversionEntry;
use binexa_types::Base;

/// Everything a front end needs to render: the three live fields and the
/// saved history, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BinexaView {
    pub binary: String,
    pub decimal: String,
    pub hexadecimal: String,
    pub history: Vec<ConversionEntry>,
}

impl BinexaView {
    pub fn field(&self, base: Base) -> &str {
        match base {
            Base::Binary => &self.binary,
            Base::Decimal => &self.decimal,
            Base::Hexadecimal => &self.hexadecimal,
        }
    }
}
