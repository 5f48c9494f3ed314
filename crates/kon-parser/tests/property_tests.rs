//! Property-based tests using QuickCheck

use kon_parser::{filter_blank, parse, prepare_tokens, tokenize};
use quickcheck::{QuickCheck, TestResult};

/// Letters, digits, and the structural symbols.
const ALPHABET: &[char] = &[
    'a', 'b', 'x', 'Z', '0', '1', '7', '9', '(', ')', '{', '}', '=', ',',
];

/// Map arbitrary characters onto `ALPHABET`.
fn restrict(s: &str) -> String {
    s.chars()
        .map(|c| ALPHABET[c as usize % ALPHABET.len()])
        .collect()
}

/// Property: the classifier partitions the input losslessly
#[test]
fn prop_tokens_partition_structural_input() {
    fn prop(s: String) -> TestResult {
        let input = restrict(&s);
        let tokens = tokenize(&input);

        let no_empty = tokens.iter().all(|t| !t.is_empty());
        TestResult::from_bool(no_empty && tokens.concat() == input)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: the partition holds for arbitrary text too
#[test]
fn prop_tokens_partition_any_input() {
    fn prop(s: String) -> TestResult {
        let tokens = tokenize(&s);
        TestResult::from_bool(tokens.concat() == s)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: structural symbols are always tokens of their own
#[test]
fn prop_structural_symbols_stand_alone() {
    fn prop(s: String) -> TestResult {
        let input = restrict(&s);
        let ok = tokenize(&input).iter().all(|token| {
            token.chars().count() == 1 || !token.contains(['(', ')', '{', '}', '=', ','])
        });
        TestResult::from_bool(ok)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: whitespace filtering is idempotent
#[test]
fn prop_filter_blank_idempotent() {
    fn prop(s: String) -> TestResult {
        let once = filter_blank(tokenize(&s));
        let twice = filter_blank(once.clone());
        TestResult::from_bool(once == twice)
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: prepared streams contain no blank-only tokens
#[test]
fn prop_prepared_tokens_have_no_blanks() {
    fn prop(s: String) -> TestResult {
        match prepare_tokens(tokenize(&s)) {
            Ok(tokens) => TestResult::from_bool(
                tokens
                    .iter()
                    .all(|t| t == "\n" || !t.chars().all(char::is_whitespace)),
            ),
            Err(_) => TestResult::discard(),
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: parsing arbitrary text returns a result instead of panicking
#[test]
fn prop_parse_is_total() {
    fn prop(s: String) -> TestResult {
        let _ = parse(&s);
        let _ = parse(&restrict(&s));
        TestResult::passed()
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: a document of `name = integer` lines parses to those values
#[test]
fn prop_integer_assignments() {
    fn prop(values: Vec<i32>) -> TestResult {
        let source: String = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("item{i} = {v}\n"))
            .collect();

        let Ok(elements) = parse(&source) else {
            return TestResult::failed();
        };

        let ok = elements.len() == values.len()
            && elements.iter().zip(&values).all(|(element, v)| {
                element
                    .value
                    .as_number()
                    .is_some_and(|n| n.literal == v.to_string() && n.unit.name().is_none())
            });
        TestResult::from_bool(ok)
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(Vec<i32>) -> TestResult);
}
