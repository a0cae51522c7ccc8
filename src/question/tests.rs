//! Tests for question variants and collections.

use super::*;
use crate::error::AuttajaError;
use crate::state::{BUCKET_ENV_VARS, Value};

fn variable(name: &str) -> FreeText {
    FreeText::new("placeholder")
        .with_name(name)
        .with_bucket(BUCKET_ENV_VARS)
        .with_key_name(format!("global.{}", name))
}

fn yes_no(follow_ups: Collection) -> SingleChoice {
    SingleChoice::new(
        "Set up now?",
        [
            (
                "y",
                ChoiceOption::new("Yes")
                    .with_value(true)
                    .with_follow_ups(follow_ups),
            ),
            ("n", ChoiceOption::new("No").with_value(false)),
        ],
    )
    .with_key_name("setup")
}

fn keys(collection: &Collection) -> Vec<Option<String>> {
    collection
        .iter()
        .map(|q| q.key_name().map(str::to_string))
        .collect()
}

// ============================================================================
// FreeText
// ============================================================================

#[test]
fn test_integer_rejects_non_numeric_input() {
    let question = variable("PORT").with_type(VarType::Integer);

    assert!(question.error_for_input("abc").is_some());
    assert!(question.error_for_input("80").is_none());
    assert!(question.error_for_input("").is_none());
}

#[test]
fn test_untyped_accepts_anything() {
    let question = variable("NAME");
    assert!(question.error_for_input("anything at all").is_none());
}

#[test]
fn test_empty_input_uses_default_and_coerces_integer() {
    let question = variable("FOO")
        .with_type(VarType::Integer)
        .with_default(Some("string(5)".to_string()));
    let mut state = State::new();

    question
        .save_input(&mut state, &Resolver::default(), "")
        .unwrap();

    assert_eq!(state.env_var("global.FOO"), Some(&Value::Int(5)));
}

#[test]
fn test_given_input_wins_over_default() {
    let question = variable("FOO").with_default(Some("string(5)".to_string()));
    let mut state = State::new();

    question
        .save_input(&mut state, &Resolver::default(), "typed")
        .unwrap();

    assert_eq!(state.env_var("global.FOO"), Some(&Value::from("typed")));
}

#[test]
fn test_fractional_integer_input_is_truncated() {
    let question = variable("WORKERS").with_type(VarType::Integer);
    let mut state = State::new();

    question
        .save_input(&mut state, &Resolver::default(), "4.7")
        .unwrap();

    assert_eq!(state.env_var("global.WORKERS"), Some(&Value::Int(4)));
}

#[test]
fn test_integer_default_takes_leading_digits() {
    let question = variable("PORT")
        .with_type(VarType::Integer)
        .with_default(Some("string(8080abc)".to_string()));
    let mut state = State::new();

    question
        .save_default(&mut state, &Resolver::default())
        .unwrap();

    assert_eq!(state.env_var("global.PORT"), Some(&Value::Int(8080)));
}

#[test]
fn test_integer_default_without_digits_is_zero() {
    let question = variable("PORT")
        .with_type(VarType::Integer)
        .with_default(Some("string(eighty)".to_string()));
    let mut state = State::new();

    question
        .save_default(&mut state, &Resolver::default())
        .unwrap();

    assert_eq!(state.env_var("global.PORT"), Some(&Value::Int(0)));
}

#[test]
fn test_integer_default_keeps_sign_of_leading_digits() {
    let question = variable("OFFSET")
        .with_type(VarType::Integer)
        .with_default(Some("string(-15 minutes)".to_string()));
    let mut state = State::new();

    question
        .save_default(&mut state, &Resolver::default())
        .unwrap();

    assert_eq!(state.env_var("global.OFFSET"), Some(&Value::Int(-15)));
}

#[test]
fn test_empty_integer_input_without_default_saves_zero() {
    let question = variable("PORT").with_type(VarType::Integer);
    let mut state = State::new();

    question
        .save_input(&mut state, &Resolver::default(), "")
        .unwrap();

    assert_eq!(state.env_var("global.PORT"), Some(&Value::Int(0)));
}

#[test]
fn test_empty_input_without_default_saves_empty_string() {
    let question = variable("OPTIONAL");
    let mut state = State::new();

    question
        .save_input(&mut state, &Resolver::default(), "")
        .unwrap();

    assert_eq!(state.env_var("global.OPTIONAL"), Some(&Value::from("")));
}

#[test]
fn test_should_save_false_discards_answer() {
    let question = variable("FOO").with_save(false);
    let mut state = State::new();

    question
        .save_input(&mut state, &Resolver::default(), "x")
        .unwrap();

    assert!(state.env_var("global.FOO").is_none());
}

#[test]
fn test_save_default_returns_resolved_answer() {
    let question = variable("FOO").with_default(Some("string(bar)".to_string()));
    let mut state = State::new();

    let answer = question
        .save_default(&mut state, &Resolver::default())
        .unwrap();

    assert_eq!(answer.as_deref(), Some("bar"));
    assert_eq!(state.env_var("global.FOO"), Some(&Value::from("bar")));
}

#[test]
fn test_render_puts_annotations_above_text() {
    let question = variable("DB")
        .with_annotations(vec!["# Database".to_string(), "# name".to_string()])
        .with_variable_prompt();

    assert_eq!(
        question.render(),
        "# Database\n# name\nPlease enter a value for DB:"
    );
}

#[test]
fn test_variable_prompt_mentions_example_and_default() {
    let question = variable("HOST")
        .with_example(Some("localhost".to_string()))
        .with_default(Some("string(127.0.0.1)".to_string()))
        .with_variable_prompt();

    assert_eq!(
        question.text(),
        "Please enter a value for HOST (for example: localhost) (or leave empty to use a default):"
    );
}

#[test]
fn test_empty_default_is_no_default() {
    let question = variable("X").with_default(Some(String::new()));
    assert!(!question.has_default());
}

#[test]
fn test_var_type_parse() {
    assert_eq!(VarType::parse("integer", "A").unwrap(), VarType::Integer);
    assert_eq!(VarType::parse("int", "A").unwrap(), VarType::Integer);
    assert_eq!(VarType::parse("string", "A").unwrap(), VarType::String);

    let err = VarType::parse("float", "RATIO").unwrap_err();
    assert!(err.to_string().contains("float"));
    assert!(err.to_string().contains("RATIO"));
}

#[test]
fn test_free_text_has_no_follow_ups() {
    let question = variable("A");
    assert!(question.follow_ups("anything").is_none());
}

// ============================================================================
// SingleChoice
// ============================================================================

#[test]
fn test_single_choice_validates_codes() {
    let question = yes_no(Collection::new());

    assert!(question.error_for_input("y").is_none());
    assert!(question.error_for_input("n").is_none());
    assert!(question.error_for_input("maybe").is_some());
    assert!(question.error_for_input("").is_some());
    assert!(question.error_for_input("Y").is_some());
}

#[test]
fn test_single_choice_saves_option_value() {
    let question = yes_no(Collection::new());
    let mut state = State::new();

    question
        .save_input(&mut state, &Resolver::default(), "n")
        .unwrap();

    assert_eq!(state.get(None, "setup"), Some(&Value::Bool(false)));
}

#[test]
fn test_single_choice_bucket() {
    let question = yes_no(Collection::new()).with_bucket("answers");
    let mut state = State::new();

    question
        .save_input(&mut state, &Resolver::default(), "y")
        .unwrap();

    assert_eq!(state.get(Some("answers"), "setup"), Some(&Value::Bool(true)));
    assert!(state.get(None, "setup").is_none());
}

#[test]
fn test_single_choice_routing_only() {
    let question = yes_no(Collection::new()).with_save(false);
    let mut state = State::new();

    question
        .save_input(&mut state, &Resolver::default(), "y")
        .unwrap();

    assert!(state.get(None, "setup").is_none());
}

#[test]
fn test_single_choice_follow_ups_follow_selected_option() {
    let mut nested = Collection::new();
    nested.push(variable("A"));
    let question = yes_no(nested);

    assert_eq!(question.follow_ups("y").map(Collection::len), Some(1));
    assert!(question.follow_ups("n").is_none());
    assert!(question.follow_ups("x").is_none());
}

#[test]
fn test_single_choice_default_must_be_an_option() {
    let question = yes_no(Collection::new()).with_default("y").unwrap();
    assert!(question.has_default());

    let err = yes_no(Collection::new()).with_default("maybe").unwrap_err();
    assert!(matches!(err, AuttajaError::ConfigError(_)));
    assert!(err.to_string().contains("\"y\", \"n\""));
}

#[test]
fn test_single_choice_save_default() {
    let question = yes_no(Collection::new())
        .with_default("n")
        .unwrap()
        .with_ask(false);
    let mut state = State::new();

    let answer = question
        .save_default(&mut state, &Resolver::default())
        .unwrap();

    assert_eq!(answer.as_deref(), Some("n"));
    assert_eq!(state.get(None, "setup"), Some(&Value::Bool(false)));
    assert!(question.is_silent());
}

#[test]
fn test_single_choice_render_lists_options() {
    let question = yes_no(Collection::new());
    assert_eq!(question.render(), "Set up now?\ny: Yes\nn: No");
}

#[test]
fn test_option_value_defaults_to_text() {
    let option = ChoiceOption::new("Production");
    assert_eq!(option.value(), &Value::from("Production"));
    assert!(option.follow_ups().is_empty());
}

// ============================================================================
// Collection
// ============================================================================

#[test]
fn test_merge_preserves_order() {
    let a = Collection::from(vec![Question::from(variable("A1")), Question::from(variable("A2"))]);
    let b = Collection::from(vec![Question::from(variable("B1"))]);

    let merged = a.clone().merge(b.clone());

    let mut expected = keys(&a);
    expected.extend(keys(&b));
    assert_eq!(keys(&merged), expected);
}

#[test]
fn test_with_key_prefix_prefixes_nested_keys() {
    let mut nested = Collection::new();
    nested.push(FreeText::new("inner").with_key_name("INNER"));
    let mut collection = Collection::new();
    collection.push(FreeText::new("outer").with_key_name("OUTER"));
    collection.push(FreeText::new("unsaved"));
    collection.push(yes_no(nested));

    let prefixed = collection.with_key_prefix("test.");

    assert_eq!(
        keys(&prefixed),
        vec![
            Some("test.OUTER".to_string()),
            None,
            Some("test.setup".to_string())
        ]
    );
    let inner = prefixed.as_slice()[2].follow_ups("y").unwrap();
    assert_eq!(keys(inner), vec![Some("test.INNER".to_string())]);
    // The source collection is untouched.
    assert_eq!(collection.as_slice()[0].key_name(), Some("OUTER"));
}

#[test]
fn test_requires_user_input() {
    let silent = variable("S")
        .with_ask(false)
        .with_default(Some("string(x)".to_string()));
    let silent_without_default = variable("T").with_ask(false);

    let only_silent = Collection::from(vec![Question::from(silent.clone())]);
    assert!(!only_silent.requires_user_input());

    // ask=false without a default still has to be asked.
    let mixed = Collection::from(vec![Question::from(silent), Question::from(silent_without_default)]);
    assert!(mixed.requires_user_input());

    assert!(!Collection::new().requires_user_input());
}
