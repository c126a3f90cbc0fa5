//! ISO/IEC 7812 Major Industry Identifier classification.
//!
//! The first digit of a card number assigns the issuer to a coarse industry
//! category. Pure lookup: every digit 0-9 has an entry.

use serde::{Deserialize, Serialize};

/// Issuer category named by a card number's leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssuerCategory {
    /// 0 — ISO/TC 68 and other industry assignments.
    Standards,
    /// 1 — airlines.
    Airlines,
    /// 2 — airlines, financial and other future industry assignments.
    AirlinesFinancial,
    /// 3 — travel and entertainment.
    TravelEntertainment,
    /// 4 and 5 — banking and financial.
    BankingFinancial,
    /// 6 — merchandising and banking/financial.
    MerchandisingBanking,
    /// 7 — petroleum and other future industry assignments.
    Petroleum,
    /// 8 — healthcare, telecommunications and other future industry
    /// assignments.
    HealthcareTelecom,
    /// 9 — assignment by national standards bodies.
    NationalAssignment,
}

impl IssuerCategory {
    /// Category for a leading digit character; `None` for non-digits.
    pub fn from_leading_digit(digit: char) -> Option<IssuerCategory> {
        match digit {
            '0' => Some(Self::Standards),
            '1' => Some(Self::Airlines),
            '2' => Some(Self::AirlinesFinancial),
            '3' => Some(Self::TravelEntertainment),
            '4' | '5' => Some(Self::BankingFinancial),
            '6' => Some(Self::MerchandisingBanking),
            '7' => Some(Self::Petroleum),
            '8' => Some(Self::HealthcareTelecom),
            '9' => Some(Self::NationalAssignment),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standards => "ISO/TC 68 and other industry assignments",
            Self::Airlines => "Airlines",
            Self::AirlinesFinancial => {
                "Airlines, financial and other future industry assignments"
            }
            Self::TravelEntertainment => "Travel and entertainment",
            Self::BankingFinancial => "Banking and financial",
            Self::MerchandisingBanking => "Merchandising and banking/financial",
            Self::Petroleum => "Petroleum and other future industry assignments",
            Self::HealthcareTelecom => {
                "Healthcare, telecommunications and other future industry assignments"
            }
            Self::NationalAssignment => "For assignment by national standards bodies",
        }
    }

    pub fn all() -> &'static [IssuerCategory] {
        &[
            Self::Standards,
            Self::Airlines,
            Self::AirlinesFinancial,
            Self::TravelEntertainment,
            Self::BankingFinancial,
            Self::MerchandisingBanking,
            Self::Petroleum,
            Self::HealthcareTelecom,
            Self::NationalAssignment,
        ]
    }
}

impl std::fmt::Display for IssuerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
