// tests/parser_tests.rs

use pericope::parser::parse;
use pericope::{ParseErrorKind, Reference};

// ---
// Happy-path forms
// ---

#[test]
fn test_space_separated_chapter_and_verse() {
    let reference = parse("Ge 1 2").unwrap();
    assert_eq!(reference.book_index, 0);
    assert_eq!(reference.book_name, "Genesis");
    assert_eq!(reference.from_chapter, 1);
    assert_eq!(reference.from_verse, 2);
    assert_eq!(reference.to_chapter, 1);
    assert_eq!(reference.to_verse, 2);
    assert!(reference.is_single_verse());
    assert!(!reference.is_whole_chapter());
    assert_eq!(reference.to_string(), "Genesis 1:2");
}

#[test]
fn test_colon_single_verse() {
    let reference = parse("Mt 5:3").unwrap();
    assert_eq!(reference.book_name, "Matthew");
    assert_eq!(reference.from_chapter, 5);
    assert_eq!(reference.from_verse, 3);
    assert!(reference.is_single_verse());
    assert_eq!(reference.to_string(), "Matthew 5:3");
}

#[test]
fn test_colon_verse_range() {
    let reference = parse("Jn 3:16-17").unwrap();
    assert_eq!(reference.book_name, "John");
    assert_eq!(reference.from_verse, 16);
    assert_eq!(reference.to_verse, 17);
    assert!(!reference.is_single_verse());
    assert_eq!(reference.to_string(), "John 3:16-17");
}

#[test]
fn test_space_separated_verse_range() {
    let reference = parse("Ge 1 2-4").unwrap();
    assert_eq!(reference.from_verse, 2);
    assert_eq!(reference.to_verse, 4);
    assert_eq!(reference.to_string(), "Genesis 1:2-4");
}

#[test]
fn test_cross_chapter_range() {
    let reference = parse("1Co 13:1-15:58").unwrap();
    assert_eq!(reference.book_name, "1 Corinthians");
    assert_eq!(reference.from_chapter, 13);
    assert_eq!(reference.from_verse, 1);
    assert_eq!(reference.to_chapter, 15);
    assert_eq!(reference.to_verse, 58);
    assert_eq!(reference.to_string(), "1 Corinthians 13:1-15:58");
}

#[test]
fn test_whole_chapter() {
    let reference = parse("Ps 23").unwrap();
    assert_eq!(reference.book_name, "Psalms");
    assert_eq!(reference.from_chapter, 23);
    assert_eq!(reference.from_verse, 1);
    assert_eq!(reference.to_chapter, 23);
    assert_eq!(reference.to_verse, Reference::CHAPTER_END);
    assert_eq!(reference.to_verse, 999);
    assert!(reference.is_whole_chapter());
    assert_eq!(reference.to_string(), "Psalms 23");
}

#[test]
fn test_spaced_book_abbreviation() {
    let reference = parse("1 Sa 3 10").unwrap();
    assert_eq!(reference.book_index, 8);
    assert_eq!(reference.book_name, "1 Samuel");
    assert_eq!(reference.to_string(), "1 Samuel 3:10");
}

#[test]
fn test_surrounding_whitespace_is_tolerated() {
    let reference = parse("  Jn 3:16  ").unwrap();
    assert_eq!(reference.to_string(), "John 3:16");
}

// ---
// Book resolution
// ---

#[test]
fn test_abbreviation_variants_resolve_to_the_same_book() {
    for abbreviation in ["Ge", "Gen", "Gn", "Genesis"] {
        let reference = parse(&format!("{abbreviation} 1 1")).unwrap();
        assert_eq!(reference.book_name, "Genesis", "{abbreviation}");
    }
    for abbreviation in ["Mt", "Mat", "Matt", "Matthew"] {
        let reference = parse(&format!("{abbreviation} 1 1")).unwrap();
        assert_eq!(reference.book_name, "Matthew", "{abbreviation}");
    }
}

#[test]
fn test_book_matching_is_case_insensitive() {
    assert_eq!(parse("ge 1 2").unwrap().book_name, "Genesis");
    assert_eq!(parse("GE 1 2").unwrap().book_name, "Genesis");
    assert_eq!(parse("gEnEsIs 1 2").unwrap().book_name, "Genesis");
}

// ---
// Failures
// ---

#[test]
fn test_unknown_book_names_the_token() {
    let err = parse("XYZ 1 2").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnknownBook);
    assert!(err.to_string().contains("XYZ"));
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(parse("").unwrap_err().kind(), ParseErrorKind::EmptyInput);
    assert_eq!(parse("   ").unwrap_err().kind(), ParseErrorKind::EmptyInput);
}

#[test]
fn test_prose_is_not_a_reference() {
    let err = parse("Genesis chapter one verse two").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnrecognizedFormat);
}

#[test]
fn test_failures_produce_no_partial_reference() {
    // A bad book must fail the whole parse even though the numerals are fine.
    assert!(parse("XYZ 3:16-17").is_err());
}

// ---
// Round-trip properties
// ---

#[test]
fn test_display_output_reparses_to_an_equal_reference() {
    let cases = [
        "Ge 1 2",
        "Mt 5:3",
        "Jn 3:16-17",
        "Ro 8:28-30",
        "1Co 13:1-15:58",
        "Ps 23",
    ];
    for case in cases {
        let first = parse(case).unwrap();
        let second = parse(&first.to_string()).unwrap();
        assert_eq!(first, second, "round-trip failed for: {case}");
    }
}

#[test]
fn test_reference_round_trips_through_serde_json() {
    let reference = parse("1Co 13:1-15:58").unwrap();
    let json = serde_json::to_string(&reference).unwrap();
    let decoded: Reference = serde_json::from_str(&json).unwrap();
    assert_eq!(reference, decoded);
}
