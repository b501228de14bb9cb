use std::fmt;

use serde::{Deserialize, Serialize};

/// Marital status and dependent count of an individual ("orang pribadi")
/// taxpayer.
///
/// PTKP recognizes unmarried (`TK`) and married (`K`) taxpayers with zero to
/// three dependents. Dependents beyond the third do not raise the threshold,
/// so the set is closed at eight values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaxpayerStatus {
    #[serde(rename = "TK/0")]
    Tk0,
    #[serde(rename = "TK/1")]
    Tk1,
    #[serde(rename = "TK/2")]
    Tk2,
    #[serde(rename = "TK/3")]
    Tk3,
    #[serde(rename = "K/0")]
    K0,
    #[serde(rename = "K/1")]
    K1,
    #[serde(rename = "K/2")]
    K2,
    #[serde(rename = "K/3")]
    K3,
}

impl TaxpayerStatus {
    /// Every status, unmarried first, then by dependent count.
    pub const ALL: [Self; 8] = [
        Self::Tk0,
        Self::Tk1,
        Self::Tk2,
        Self::Tk3,
        Self::K0,
        Self::K1,
        Self::K2,
        Self::K3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tk0 => "TK/0",
            Self::Tk1 => "TK/1",
            Self::Tk2 => "TK/2",
            Self::Tk3 => "TK/3",
            Self::K0 => "K/0",
            Self::K1 => "K/1",
            Self::K2 => "K/2",
            Self::K3 => "K/3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "TK/0" => Some(Self::Tk0),
            "TK/1" => Some(Self::Tk1),
            "TK/2" => Some(Self::Tk2),
            "TK/3" => Some(Self::Tk3),
            "K/0" => Some(Self::K0),
            "K/1" => Some(Self::K1),
            "K/2" => Some(Self::K2),
            "K/3" => Some(Self::K3),
            _ => None,
        }
    }

    /// Whether the status carries the married (`K`) prefix.
    pub fn is_married(&self) -> bool {
        matches!(self, Self::K0 | Self::K1 | Self::K2 | Self::K3)
    }

    /// Number of recognized dependents (0..=3).
    pub fn dependents(&self) -> u32 {
        match self {
            Self::Tk0 | Self::K0 => 0,
            Self::Tk1 | Self::K1 => 1,
            Self::Tk2 | Self::K2 => 2,
            Self::Tk3 | Self::K3 => 3,
        }
    }
}

impl fmt::Display for TaxpayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_status() {
        for status in TaxpayerStatus::ALL {
            assert_eq!(TaxpayerStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(TaxpayerStatus::parse("K/4"), None);
        assert_eq!(TaxpayerStatus::parse("X/0"), None);
        assert_eq!(TaxpayerStatus::parse("tk/0"), None);
        assert_eq!(TaxpayerStatus::parse(""), None);
    }

    #[test]
    fn married_statuses_carry_the_k_prefix() {
        assert!(!TaxpayerStatus::Tk0.is_married());
        assert!(!TaxpayerStatus::Tk3.is_married());
        assert!(TaxpayerStatus::K0.is_married());
        assert!(TaxpayerStatus::K3.is_married());
    }

    #[test]
    fn dependents_match_the_status_suffix() {
        assert_eq!(TaxpayerStatus::Tk0.dependents(), 0);
        assert_eq!(TaxpayerStatus::Tk2.dependents(), 2);
        assert_eq!(TaxpayerStatus::K1.dependents(), 1);
        assert_eq!(TaxpayerStatus::K3.dependents(), 3);
    }

    #[test]
    fn display_uses_the_domain_code() {
        assert_eq!(TaxpayerStatus::K2.to_string(), "K/2");
    }
}
