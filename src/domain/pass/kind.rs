//! Pass kinds and their prices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::DomainError;

/// The two kinds of admission pass sold at the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassKind {
    /// Valid for a year of unlimited admissions.
    #[serde(rename = "year")]
    Annual,

    /// Valid for a single admission; consumed on first use.
    #[serde(rename = "one-time")]
    SingleUse,
}

/// Minor-unit money amount, as the gateway expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    pub value: i64,
}

impl Amount {
    pub fn eur(value: i64) -> Self {
        Self {
            currency: "EUR".to_string(),
            value,
        }
    }
}

impl PassKind {
    /// Price of this kind of pass.
    ///
    /// Minor units: 850 == EUR 8.50. Prices are fixed in code, not
    /// configuration, so a misconfigured deployment cannot sell free passes.
    pub fn price(&self) -> Amount {
        match self {
            PassKind::Annual => Amount::eur(850),
            PassKind::SingleUse => Amount::eur(200),
        }
    }

    /// Wire name of this kind, as stored and sent to the frontend.
    pub fn as_str(&self) -> &'static str {
        match self {
            PassKind::Annual => "year",
            PassKind::SingleUse => "one-time",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PassKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(PassKind::Annual),
            "one-time" => Ok(PassKind::SingleUse),
            other => Err(DomainError::validation(format!(
                "Unknown pass kind '{}', expected 'year' or 'one-time'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_are_fixed_minor_units() {
        assert_eq!(PassKind::Annual.price(), Amount::eur(850));
        assert_eq!(PassKind::SingleUse.price(), Amount::eur(200));
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!("year".parse::<PassKind>().unwrap(), PassKind::Annual);
        assert_eq!("one-time".parse::<PassKind>().unwrap(), PassKind::SingleUse);
        assert!("weekend".parse::<PassKind>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&PassKind::SingleUse).unwrap(),
            "\"one-time\""
        );
        let kind: PassKind = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(kind, PassKind::Annual);
    }
}
