//! Shared card number fixtures.
//!
//! Numbers are public test numbers or hand-built to satisfy the Luhn
//! checksum. `EN_ROUTE` deliberately fails the checksum: the brand is
//! checksum-exempt and must validate regardless.

/// `(expected_brand, number)` pairs that resolve and validate against the
/// built-in registry.
pub const VALID_CARDS: &[(&str, &str)] = &[
    ("visa", "4111111111111111"),
    ("visa", "4012888888881881"),
    ("visa", "4222222222222"),
    ("visa", "4917610000000000003"),
    ("mastercard", "5555555555554444"),
    ("mastercard", "5105105105105100"),
    ("mastercard", "5454545454545454"),
    ("mastercard", "2223000048400011"),
    ("mastercard", "2221000000000009"),
    ("mastercard", "2720000000000005"),
    ("amex", "378282246310005"),
    ("amex", "371449635398431"),
    ("amex", "340000000000009"),
    ("diners_club", "30569309025904"),
    ("diners_club", "38520000023237"),
    ("diners_club", "36148900647913"),
    ("discover", "6011111111111117"),
    ("discover", "6011000990139424"),
    ("discover", "6500000000000002"),
    ("discover", "6221260000000000"),
    ("maestro", "6759649826438453"),
    ("maestro", "6304000000000000"),
    ("maestro", "501800000009"),
    ("dankort", "5019717010103742"),
    ("forbrugsforeningen", "6007220000000004"),
    ("solo", "6334580500000000"),
    ("unionpay", "6212345678901265"),
    ("jcb", "3530111333300000"),
    ("jcb", "3566002020360505"),
    ("jcb", "180012345678905"),
    ("rupay", "6010000000000005"),
    ("mir", "2200000000000004"),
    ("en_route", "201400000000000"),
];

/// Numbers that structurally match no built-in brand at all.
pub const NO_MATCH_NUMBERS: &[&str] = &[
    "1111111111111111",
    "11111",
    "",
    "41111111111111111",
    // Passes the checksum, still matches nothing structurally.
    "99999999999999999999",
    "4111a11111111111",
    // Just outside the mastercard 2221-2720 and mir 2200-2204 ranges.
    "2220999999999999",
    "2721000000000000",
    "2210000000000000",
];
