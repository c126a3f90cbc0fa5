use cardbrand::{luhn, strip_separators, Detector};
use proptest::prelude::*;

proptest! {
    #[test]
    fn exactly_one_check_digit_completes_any_base(base in "[0-9]{11,18}") {
        let completions = (0..=9u8)
            .filter(|&digit| {
                let mut number = base.clone();
                number.push(char::from(b'0' + digit));
                luhn::valid(&number)
            })
            .count();
        prop_assert_eq!(completions, 1);
    }

    #[test]
    fn incrementing_the_check_digit_always_invalidates(base in "[0-9]{11,18}") {
        let completed = (0..=9u8).find_map(|digit| {
            let mut number = base.clone();
            number.push(char::from(b'0' + digit));
            luhn::valid(&number).then_some(number)
        });
        prop_assert!(completed.is_some());
        let mut mutated = completed.unwrap();
        let last = mutated.pop().unwrap().to_digit(10).unwrap();
        mutated.push(char::from_digit((last + 1) % 10, 10).unwrap());
        prop_assert!(!luhn::valid(&mutated));
    }

    #[test]
    fn queries_always_answer_on_arbitrary_input(input in ".{0,64}") {
        let detector = Detector::new(input.as_str());
        let resolved = detector.brand();
        let structural = detector.matching_brands();
        if let Some(brand) = &resolved {
            prop_assert!(structural.contains(brand));
        }
        let _ = detector.is_valid();
        let _ = detector.issuer_category();
        let _ = luhn::valid(&input);
    }

    #[test]
    fn resolution_is_consistent_with_structural_queries(number in "[0-9]{10,20}") {
        let detector = Detector::new(number.as_str());
        if detector.is_valid() {
            prop_assert!(!detector.matching_brands().is_empty());
        }
        if let Some(brand) = detector.brand() {
            prop_assert!(detector.matches_brand(brand.as_str()));
            prop_assert!(detector.is_valid_among(&[brand.as_str()]));
        }
    }

    #[test]
    fn stripping_separators_recovers_the_digits(
        groups in prop::collection::vec("[0-9]{1,6}", 1..6),
        separator in prop::sample::select(vec![" ", "-", " - ", "--"]),
    ) {
        let joined = groups.join(separator);
        prop_assert_eq!(strip_separators(&joined), groups.concat());
    }

    #[test]
    fn separated_input_classifies_like_its_digit_form(digits in "[0-9]{12,19}") {
        use cardbrand::CardNumberExt;
        let grouped: String = digits
            .as_bytes()
            .chunks(4)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(grouped.card_brand(), Detector::new(digits.as_str()).brand());
    }
}
