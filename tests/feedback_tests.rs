use wordle_solver::{Feedback, FeedbackPattern, ValidationError};

#[test]
fn test_parse_colors() {
    let pattern = FeedbackPattern::parse("bgbyb").unwrap();
    assert_eq!(
        pattern.codes(),
        &[
            Feedback::Absent,
            Feedback::Correct,
            Feedback::Absent,
            Feedback::Present,
            Feedback::Absent,
        ]
    );
}

#[test]
fn test_parse_is_case_insensitive() {
    let lower = FeedbackPattern::parse("gybgy").unwrap();
    let upper = FeedbackPattern::parse("GYBGY").unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_parse_numeric_aliases() {
    let colors = FeedbackPattern::parse("gybgy").unwrap();
    let digits = FeedbackPattern::parse("21021").unwrap();
    assert_eq!(colors, digits);
}

#[test]
fn test_parse_arbitrary_length() {
    assert_eq!(FeedbackPattern::parse("gy").unwrap().len(), 2);
    assert_eq!(FeedbackPattern::parse("bbbbbbbbby").unwrap().len(), 10);
}

#[test]
fn test_parse_rejects_bad_symbol() {
    assert_eq!(
        FeedbackPattern::parse("gybzb"),
        Err(ValidationError::InvalidSymbol('z'))
    );
    assert!(FeedbackPattern::parse("gyb b").is_err());
}

#[test]
fn test_parse_rejects_empty() {
    assert!(FeedbackPattern::parse("").is_err());
}

#[test]
fn test_all_correct() {
    assert!(FeedbackPattern::parse("ggggg").unwrap().is_all_correct());
    assert!(FeedbackPattern::parse("gg").unwrap().is_all_correct());
    assert!(!FeedbackPattern::parse("ggggy").unwrap().is_all_correct());
    assert!(!FeedbackPattern::parse("bbbbb").unwrap().is_all_correct());
}

#[test]
fn test_feedback_from_char() {
    assert_eq!(Feedback::from_char('g'), Some(Feedback::Correct));
    assert_eq!(Feedback::from_char('Y'), Some(Feedback::Present));
    assert_eq!(Feedback::from_char('b'), Some(Feedback::Absent));
    assert_eq!(Feedback::from_char('x'), Some(Feedback::Absent));
    assert_eq!(Feedback::from_char('q'), None);
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackPattern::new(vec![
        Feedback::Correct,
        Feedback::Present,
        Feedback::Absent,
    ]);
    assert_eq!(pattern.to_string(), "🟩🟨⬛");
}
