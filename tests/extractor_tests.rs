use article_tldr::core::config::Strictness;
use article_tldr::errors::SummarizeError;
use article_tldr::pipeline::extract_three;

const SAMPLES: &[&str] = &[
    "",
    "no punctuation at all",
    "One sentence only.",
    "first point. second point!",
    "Alpha.  Beta?\n\nGamma!  Delta.  Epsilon.",
    "He said \"wait.\" She waited. Then   both    left. Nobody noticed.",
];

#[test]
fn test_lenient_always_yields_three_slots() {
    for sample in SAMPLES {
        let summary = extract_three(sample, Strictness::Lenient).unwrap();
        assert_eq!(summary.sentences().len(), 3);
        // Filled slots come first.
        let filled = summary.filled();
        assert!(summary.sentences()[..filled].iter().all(|s| !s.is_empty()));
        assert!(summary.sentences()[filled..].iter().all(String::is_empty));
    }
}

#[test]
fn test_first_three_sentences_are_kept_in_order() {
    let summary =
        extract_three("Alpha.  Beta?\n\nGamma!  Delta.  Epsilon.", Strictness::Lenient).unwrap();
    assert_eq!(
        summary.sentences(),
        &["Alpha.".to_string(), "Beta?".to_string(), "Gamma!".to_string()]
    );
}

#[test]
fn test_sentences_are_normalized() {
    let summary = extract_three(
        "He said \"wait.\" She waited. Then   both    left. Nobody noticed.",
        Strictness::Lenient,
    )
    .unwrap();
    assert_eq!(summary.sentences()[0], "He said \"wait.\"");
    assert_eq!(summary.sentences()[2], "Then both left.");

    let summary = extract_three("first point. second point!", Strictness::Lenient).unwrap();
    assert_eq!(summary.to_text(), "First point. Second point!");
}

#[test]
fn test_extraction_is_idempotent() {
    for sample in SAMPLES {
        let once = extract_three(sample, Strictness::Lenient).unwrap();
        let twice = extract_three(&once.to_text(), Strictness::Lenient).unwrap();
        assert_eq!(once, twice, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_strict_rejects_short_output() {
    for (sample, expected) in [("", 0), ("One sentence only.", 1), ("One. Two.", 2)] {
        match extract_three(sample, Strictness::Strict) {
            Err(SummarizeError::InsufficientContent { found }) => assert_eq!(found, expected),
            other => panic!("expected InsufficientContent for {sample:?}, got {other:?}"),
        }
    }

    let summary = extract_three("One. Two. Three. Four.", Strictness::Strict).unwrap();
    assert!(summary.is_complete());
}
