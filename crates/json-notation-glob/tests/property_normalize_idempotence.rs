use std::collections::HashSet;

use json_notation_glob::{normalize, Glob, Mode};
use proptest::prelude::*;

fn key_note() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("a"), Just("b"), Just("c"), Just("*")]
}

fn array_note() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("[0]"), Just("[1]"), Just("[*]")]
}

fn note() -> impl Strategy<Value = &'static str> {
    prop_oneof![key_note(), array_note()]
}

fn head(array_rooted: bool) -> BoxedStrategy<&'static str> {
    if array_rooted {
        array_note().boxed()
    } else {
        key_note().boxed()
    }
}

/// Globs of depth 1 to 3 with a random sign, all rooted the same way.
fn glob_text(array_rooted: bool) -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        head(array_rooted),
        proptest::collection::vec(note(), 0..3),
    )
        .prop_map(|(negated, head, tail)| {
            let mut text = String::from(if negated { "!" } else { "" });
            text.push_str(head);
            for note in tail {
                if !note.starts_with('[') {
                    text.push('.');
                }
                text.push_str(note);
            }
            text
        })
}

fn glob_list() -> impl Strategy<Value = Vec<String>> {
    any::<bool>()
        .prop_flat_map(|array_rooted| proptest::collection::vec(glob_text(array_rooted), 0..6))
}

fn mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Strict), Just(Mode::Lenient)]
}

fn texts(globs: &[Glob]) -> HashSet<String> {
    globs.iter().map(|g| g.to_string()).collect()
}

proptest! {
    #[test]
    fn normalize_is_idempotent(input in glob_list(), mode in mode()) {
        let globs = Glob::parse_list(&input).unwrap();
        let once = normalize(&globs, mode);
        prop_assert!(once.is_ok(), "{:?} in {:?}: {:?}", input, mode, once);
        let once = once.unwrap();
        let twice = normalize(&once, mode).unwrap();
        prop_assert_eq!(texts(&once), texts(&twice));
    }

    #[test]
    fn normalized_set_is_consistent(input in glob_list(), mode in mode()) {
        let globs = Glob::parse_list(&input).unwrap();
        let out = normalize(&globs, mode);
        prop_assert!(out.is_ok(), "{:?} in {:?}: {:?}", input, mode, out);
        let out = out.unwrap();
        let all = texts(&out);
        prop_assert_eq!(all.len(), out.len());
        for glob in &out {
            prop_assert!(!all.contains(glob.inverted().as_str()));
        }
        if !out.is_empty() {
            prop_assert!(out.iter().any(|g| !g.is_negated()));
        }
        if mode == Mode::Strict {
            prop_assert!(!out.iter().any(Glob::is_negate_all));
        }
    }
}
