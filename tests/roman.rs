use labelled_numerics::roman::MAX_VALUE;
use labelled_numerics::{
    ChunkOrder, CollectingSink, EncodingMethod, Error, Number, RomanNumeral, SilentSink,
    arab2roman, catalogs, format_chunky, format_nice_roman, label2num, num2label,
    replace_all_arabs, roman2arab,
};

fn arabs() -> Vec<Number> {
    vec![
        Number::Int(1050),
        Number::Int(1999),
        Number::Int(1),
        Number::Int(0),
        Number::Int(3),
        Number::Float(5.67893),
        Number::Int(3999),
    ]
}

const ROMANS: [&str; 7] = [
    "M L",
    "M CM XC IX",
    "I",
    "zero",
    "I I I",
    "V . VI VII VIII IX III",
    "M M M CM XC IX",
];

#[test]
fn arab2roman_fixed_vectors() {
    for (arab, roman) in arabs().into_iter().zip(ROMANS) {
        assert_eq!(arab2roman(arab, &SilentSink).unwrap(), roman, "encoding {arab}");
    }
}

#[test]
fn roman2arab_fixed_vectors() {
    for (arab, roman) in arabs().into_iter().zip(ROMANS) {
        assert_eq!(roman2arab(roman, &SilentSink).unwrap(), arab, "decoding {roman}");
    }
}

#[test]
fn decimal_round_trip_over_full_range() {
    let catalog = catalogs::roman();
    for n in 0..=3999_u64 {
        let label = num2label(n, &catalog, " ", EncodingMethod::Decimal).unwrap();
        assert_eq!(label2num(&label, &catalog, " ").unwrap(), n, "{n} -> {label}");
    }
}

#[test]
fn roman_round_trip_over_full_range() {
    for n in 0..=MAX_VALUE {
        let spaced = arab2roman(n, &SilentSink).unwrap();
        assert_eq!(roman2arab(&spaced, &SilentSink).unwrap(), Number::Int(n));
    }
}

#[test]
fn encode_rejects_out_of_range() {
    for n in [-1_i64, 4000, 10_000] {
        let err = arab2roman(n, &SilentSink).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }), "{n}: {err}");
    }
    assert!(matches!(
        arab2roman(-0.5, &SilentSink),
        Err(Error::OutOfRange { .. })
    ));
    for text in ["year 4000", "x 99999999999999999999 y"] {
        let err = replace_all_arabs(text, &SilentSink).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }), "{text}: {err}");
    }
}

#[test]
fn leading_fraction_zeros_are_dropped() {
    assert_eq!(arab2roman(3.05, &SilentSink).unwrap(), "I I I . V");
    assert_eq!(
        roman2arab(&arab2roman(3.05, &SilentSink).unwrap(), &SilentSink).unwrap(),
        Number::Float(3.5)
    );
}

#[test]
fn zero_digits_only_warn() {
    let sink = CollectingSink::new();
    assert_eq!(arab2roman(2010_i64, &sink).unwrap(), "M M X");
    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("2010"), "{messages:?}");
}

#[test]
fn contiguous_numeral_is_chunked_greedily() {
    let catalog = catalogs::roman();
    let chunked = format_chunky("MMMCMXCVIII", &catalog, " ", ChunkOrder::ByValue, &SilentSink);
    insta::assert_snapshot!(chunked, @"M M M CM XC V I I I");
    insta::assert_snapshot!(format_nice_roman(&chunked), @"MMM CM XC V III");
}

#[test]
fn nice_format_is_idempotent() {
    let samples = ROMANS
        .iter()
        .map(ToString::to_string)
        .chain((0..=3999_i64).step_by(37).map(|n| arab2roman(n, &SilentSink).unwrap()))
        .chain(["I I I . I I I".to_owned(), "X X . V".to_owned()]);
    for spaced in samples {
        let once = format_nice_roman(&spaced);
        assert_eq!(format_nice_roman(&once), once, "{spaced}");
    }
}

#[test]
fn numeral_instances_expose_labels_and_value() {
    let numeral = RomanNumeral::parse("M MM L V I II", &SilentSink).unwrap();
    assert_eq!(numeral.name(), "M M M L V I I I");
    assert_eq!(numeral.nice_label(), "MMM L V III");
    assert_eq!(numeral.arab(), Number::Int(3058));
    assert_eq!(numeral.as_labelled().sum_values().unwrap(), 3058);
    assert_eq!(numeral.to_string(), "MMM L V III");

    let float = RomanNumeral::parse("V . VI VII VIII IX III", &SilentSink).unwrap();
    assert_eq!(float.label(), "V . VI VII VIII IX III");
    assert_eq!(float.arab(), Number::Float(5.67893));
}

#[test]
fn from_arab_parses_encoded_value() {
    let numeral = RomanNumeral::from_arab(1994_i64, &SilentSink).unwrap();
    assert_eq!(numeral.nice_label(), "M CM XC IV");
    assert_eq!(numeral.arab(), Number::Int(1994));
}

#[test]
fn add_to_matches_encoding_of_sum() {
    let arabs = arabs();
    let numerals: Vec<RomanNumeral> = ROMANS
        .iter()
        .map(|roman| RomanNumeral::parse(roman, &SilentSink).unwrap())
        .collect();

    for index in 0..numerals.len() - 2 {
        let (a, b) = (arabs[index], arabs[index + 1]);
        let digits = a.precision().max(b.precision());
        let expected = format_nice_roman(
            &arab2roman(a.plus(b).round_to(digits), &SilentSink).unwrap(),
        );
        let added = numerals[index]
            .add_to(&numerals[index + 1], &SilentSink)
            .unwrap();
        assert_eq!(format_nice_roman(&added), expected, "pair {index}");
    }
}

#[test]
fn add_to_integer_results_are_niceified() {
    let a = RomanNumeral::parse("M CM XC IV", &SilentSink).unwrap();
    let b = RomanNumeral::parse("M I I", &SilentSink).unwrap();
    insta::assert_snapshot!(a.add_to(&b, &SilentSink).unwrap(), @"MM CM XC V I");
}

#[test]
fn add_to_overflow_is_out_of_range() {
    let big = RomanNumeral::parse("MMM", &SilentSink).unwrap();
    assert!(matches!(
        big.add_to(&big, &SilentSink),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn replace_all_arabs_keeps_words() {
    let out = replace_all_arabs("Anno 1999 and  2.5 liters, ok", &SilentSink).unwrap();
    insta::assert_snapshot!(out, @"Anno M CM XC IX and I I . V liters, ok");
}
