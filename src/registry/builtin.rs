//! Built-in brand rules.
//!
//! Registration order is the tie-break for numbers that structurally match
//! more than one brand, so specific prefixes are listed ahead of the broad
//! ranges that contain them: forbrugsforeningen's 600722 and discover's
//! 622126-622925 come before rupay's 60 and unionpay's 62, and the
//! US-market diners_us (54/55, colliding with mastercard) sits at the end.

use once_cell::sync::Lazy;
use super::types::{BrandId, BrandRule, PrefixPattern, RuleOptions};

pub(super) static BUILTIN_BRANDS: Lazy<Vec<(BrandId, BrandRule)>> = Lazy::new(|| {
    vec![
        brand("visa", &[13, 16, 19], vec![lit("4")]),
        brand(
            "mastercard",
            &[16],
            vec![range("51", "55"), range("2221", "2720")],
        ),
        brand("amex", &[15], vec![lit("34"), lit("37")]),
        brand(
            "diners_club",
            &[14, 16, 19],
            vec![range("300", "305"), lit("3095"), lit("36"), lit("38"), lit("39")],
        ),
        brand(
            "discover",
            &[16, 19],
            vec![
                lit("6011"),
                range("644", "649"),
                lit("65"),
                range("622126", "622925"),
            ],
        ),
        brand(
            "maestro",
            &[12, 13, 14, 15, 16, 17, 18, 19],
            vec![
                lit("5018"),
                lit("5020"),
                lit("5038"),
                lit("5868"),
                lit("6304"),
                lit("6759"),
                lit("6761"),
                lit("6762"),
                lit("6763"),
            ],
        ),
        brand("dankort", &[16], vec![lit("5019")]),
        brand("forbrugsforeningen", &[16], vec![lit("600722")]),
        brand("solo", &[16, 18, 19], vec![lit("6334"), lit("6767")]),
        brand_with(
            "unionpay",
            &[16, 17, 18, 19],
            vec![lit("62")],
            RuleOptions {
                skip_luhn: true,
                brand_name: None,
            },
        ),
        brand(
            "jcb",
            &[15, 16],
            vec![range("3528", "3589"), lit("1800"), lit("2131")],
        ),
        brand(
            "rupay",
            &[16],
            vec![lit("508"), lit("60"), lit("81"), lit("82")],
        ),
        brand("mir", &[16, 17, 18, 19], vec![range("2200", "2204")]),
        brand_with(
            "diners_us",
            &[16],
            vec![lit("54"), lit("55")],
            RuleOptions {
                skip_luhn: false,
                brand_name: Some("Diners Club US".to_string()),
            },
        ),
        brand_with(
            "en_route",
            &[15],
            vec![lit("2014"), lit("2149")],
            RuleOptions {
                skip_luhn: true,
                brand_name: Some("EnRoute".to_string()),
            },
        ),
    ]
});

fn lit(prefix: &str) -> PrefixPattern {
    PrefixPattern::literal(prefix)
}

fn range(start: &str, end: &str) -> PrefixPattern {
    PrefixPattern::range(start, end)
}

fn brand(id: &str, lengths: &[u8], prefixes: Vec<PrefixPattern>) -> (BrandId, BrandRule) {
    (
        BrandId::new(id),
        BrandRule::new(lengths.iter().copied(), prefixes),
    )
}

fn brand_with(
    id: &str,
    lengths: &[u8],
    prefixes: Vec<PrefixPattern>,
    options: RuleOptions,
) -> (BrandId, BrandRule) {
    (
        BrandId::new(id),
        BrandRule::with_options(lengths.iter().copied(), prefixes, options),
    )
}
