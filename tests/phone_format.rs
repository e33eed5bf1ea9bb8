use phonebook_cleaner::data::phone::{format_phone, split_extension};
use proptest::prelude::*;

#[test]
fn spaced_plus_seven_is_canonicalised() {
    assert_eq!(format_phone("+7 999 123 45 67"), "+7(999)123-45-67");
}

#[test]
fn leading_eight_becomes_plus_seven() {
    assert_eq!(format_phone("8 (495) 913-04-78"), "+7(495)913-04-78");
    assert_eq!(format_phone("8(495)748-49-73"), "+7(495)748-49-73");
}

#[test]
fn compact_international_number_is_canonicalised() {
    assert_eq!(format_phone("+74959130037"), "+7(495)913-00-37");
}

#[test]
fn any_eleven_digit_number_gets_country_code() {
    assert_eq!(format_phone("9 495 913 00 37"), "+7(495)913-00-37");
}

#[test]
fn extension_is_appended_in_canonical_form() {
    assert_eq!(
        format_phone("+7 (495) 913-11-11 (доб. 0792)"),
        "+7(495)913-11-11 доб.0792"
    );
    assert_eq!(
        format_phone("8 495 913-04-78 ДОБ 55"),
        "+7(495)913-04-78 доб.55"
    );
    assert_eq!(format_phone("8 495 913 0478 ext.12"), "+7(495)913-04-78 доб.12");
}

#[test]
fn marker_letters_inside_words_are_not_an_extension() {
    assert_eq!(format_phone("8 800 text 555 35 35"), "+7(800)555-35-35");
    assert_eq!(format_phone("next 8 800 555 35 35"), "+7(800)555-35-35");
}

#[test]
fn extension_survives_non_canonical_lengths() {
    assert_eq!(format_phone("495 913 0000 доб.12"), "4959130000 доб.12");
}

#[test]
fn blank_input_yields_empty_string() {
    assert_eq!(format_phone(""), "");
    assert_eq!(format_phone("   \t"), "");
}

#[test]
fn extension_without_number_is_dropped() {
    assert_eq!(format_phone("доб. 123"), "");
}

#[test]
fn short_numbers_keep_digits_and_plus() {
    assert_eq!(format_phone("12-34-5"), "12345");
    assert_eq!(format_phone("+1 234 5"), "+12345");
}

#[test]
fn plus_after_leading_punctuation_is_not_kept() {
    assert_eq!(format_phone("(+7) 999 12"), "799912");
}

#[test]
fn split_extension_removes_marker() {
    let (rest, ext) = split_extension("+7 495 913-11-11 доб. 0792");
    assert_eq!(ext.as_deref(), Some("0792"));
    assert!(!rest.contains("доб"));
    assert!(!rest.contains("0792"));

    let (rest, ext) = split_extension("+7 495 913-11-11");
    assert_eq!(ext, None);
    assert_eq!(rest, "+7 495 913-11-11");
}

fn canonical(digits: &str) -> String {
    format!(
        "+7({}){}-{}-{}",
        &digits[1..4],
        &digits[4..7],
        &digits[7..9],
        &digits[9..11]
    )
}

proptest! {
    #[test]
    fn russian_numbers_match_canonical_layout(digits in "[78][0-9]{10}") {
        prop_assert_eq!(format_phone(&digits), canonical(&digits));
    }

    #[test]
    fn separators_do_not_change_result(digits in "[78][0-9]{10}") {
        let spaced = format!(
            "{} ({}) {}-{}-{}",
            &digits[0..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..9],
            &digits[9..11]
        );
        prop_assert_eq!(format_phone(&spaced), canonical(&digits));
    }

    #[test]
    fn canonical_output_is_stable(digits in "[0-9]{11}") {
        let once = format_phone(&digits);
        prop_assert_eq!(format_phone(&once), once.clone());
    }

    #[test]
    fn extension_is_always_appended(digits in "[0-9]{1,14}", ext in "[0-9]{1,5}") {
        let formatted = format_phone(&format!("{digits} доб. {ext}"));
        let suffix = format!(" доб.{ext}");
        prop_assert!(formatted.ends_with(&suffix));
    }
}
