//! Domain models for back-office documents

pub mod company;
pub mod credit_note;
pub mod purchase_order;

use serde::{Deserialize, Serialize};

/// Badge severity used by the document list screens
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusBadge {
    Neutral,
    Info,
    Warning,
    Success,
    Danger,
}

/// Round an amount to the centime (half away from zero).
pub fn round_centimes(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_centimes() {
        assert_eq!(round_centimes(12.344), 12.34);
        assert_eq!(round_centimes(12.346), 12.35);
        assert_eq!(round_centimes(100.0), 100.0);
    }
}
