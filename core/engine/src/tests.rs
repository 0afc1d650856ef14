//! FILENAME: core/engine/src/tests.rs
//! PURPOSE: Unit tests for values, the registry and the evaluator.

use crate::evaluator::evaluate;
use crate::functions::{execute_function, execute_operator, has_function, Function, Operator};
use crate::references::references_used;
use crate::value::{format_number, parse_number, Inputs, Value};
use formula_parser::tokenize;

fn eval_with(formula: &str, inputs: &Inputs) -> Option<Value> {
    evaluate(&tokenize(formula).unwrap(), inputs)
}

fn eval(formula: &str) -> Option<Value> {
    eval_with(formula, &Inputs::new())
}

fn number(formula: &str) -> f64 {
    match eval(formula) {
        Some(Value::Number(n)) => n,
        other => panic!("expected a number from {:?}, got {:?}", formula, other),
    }
}

fn text(formula: &str) -> String {
    match eval(formula) {
        Some(Value::Text(s)) => s,
        other => panic!("expected text from {:?}, got {:?}", formula, other),
    }
}

// ========================================
// VALUE TESTS
// ========================================

#[test]
fn parse_number_accepts_numeric_text() {
    assert_eq!(parse_number(" 42 "), 42.0);
    assert_eq!(parse_number(""), 0.0);
    assert_eq!(parse_number("   "), 0.0);
    assert_eq!(parse_number("1e3"), 1000.0);
    assert_eq!(parse_number(".5"), 0.5);
    assert_eq!(parse_number("-2.5"), -2.5);
    assert_eq!(parse_number("1."), 1.0);
    assert_eq!(parse_number("Infinity"), f64::INFINITY);
    assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
}

#[test]
fn parse_number_rejects_other_text() {
    for input in ["abc", "1a", "inf", "NaN", "0x10", "1 2", "--1"] {
        assert!(parse_number(input).is_nan(), "{}", input);
    }
}

#[test]
fn format_number_drops_trailing_zeros() {
    assert_eq!(format_number(2.0), "2");
    assert_eq!(format_number(1.5), "1.5");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn format_number_uses_exponents_for_extreme_magnitudes() {
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(-2.5e30), "-2.5e+30");
    assert_eq!(format_number(1e-7), "1e-7");
    assert_eq!(format_number(1.5e-7), "1.5e-7");
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(0.000001), "0.000001");
}

#[test]
fn values_convert_both_ways() {
    assert_eq!(Value::from("3").as_number(), 3.0);
    assert_eq!(Value::from(3).as_text(), "3");
    assert_eq!(Value::from(0.25).to_string(), "0.25");
    assert!(Value::from("x").as_number().is_nan());
}

#[test]
fn inputs_deserialize_from_json() {
    let inputs: Inputs = serde_json::from_str(r#"{ "Name": "World", "Age": 3 }"#).unwrap();
    assert_eq!(inputs.get("Name"), Some(&Value::Text("World".to_string())));
    assert_eq!(inputs.get("Age"), Some(&Value::Number(3.0)));
}

#[test]
fn values_serialize_untagged() {
    assert_eq!(serde_json::to_string(&Value::Number(2.0)).unwrap(), "2.0");
    assert_eq!(serde_json::to_string(&Value::from("x")).unwrap(), "\"x\"");
}

// ========================================
// REGISTRY TESTS
// ========================================

#[test]
fn operators_resolve_by_exact_symbol() {
    assert_eq!(Operator::from_symbol("&"), Some(Operator::Concat));
    assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
    assert_eq!(Operator::from_symbol("="), None);
    assert_eq!(Operator::from_symbol("++"), None);
}

#[test]
fn functions_resolve_ignoring_case() {
    assert_eq!(Function::from_name("rOuNd"), Some(Function::Round));
    assert_eq!(Function::from_name("upper"), Some(Function::Upper));
    assert!(has_function("ROUND"));
    assert!(!has_function("sum"));
}

#[test]
fn concat_joins_every_parameter() {
    let params = [Some(Value::from("a")), None, Some(Value::from(1.5)), Some(Value::from("b"))];
    assert_eq!(execute_operator("&", &params), Some(Value::from("a1.5b")));
}

#[test]
fn arithmetic_needs_exactly_two_parameters() {
    let one = [Some(Value::from(1))];
    let three = [Some(Value::from(1)), Some(Value::from(2)), Some(Value::from(3))];
    assert_eq!(execute_operator("+", &one), None);
    assert_eq!(execute_operator("*", &three), None);
    assert_eq!(
        execute_operator("-", &[Some(Value::from(5)), Some(Value::from("2"))]),
        Some(Value::Number(3.0))
    );
}

#[test]
fn arithmetic_with_missing_value_is_nan() {
    let result = execute_operator("+", &[None, Some(Value::from(1))]);
    assert!(matches!(result, Some(Value::Number(n)) if n.is_nan()));
}

#[test]
fn unknown_names_give_nothing() {
    assert_eq!(execute_operator("=", &[Some(Value::from(1)), Some(Value::from(1))]), None);
    assert_eq!(execute_function("sum", &[Some(Value::from(1))]), None);
}

#[test]
fn functions_without_parameters_give_nothing() {
    assert_eq!(execute_function("round", &[]), None);
    assert_eq!(execute_function("upper", &[]), None);
}

#[test]
fn round_sends_halves_up() {
    let round = |n: f64| execute_function("round", &[Some(Value::from(n))]);
    assert_eq!(round(1.5), Some(Value::Number(2.0)));
    assert_eq!(round(2.5), Some(Value::Number(3.0)));
    assert_eq!(round(-1.5), Some(Value::Number(-1.0)));
    assert_eq!(round(-1.6), Some(Value::Number(-2.0)));
    assert_eq!(round(0.49999999999999994), Some(Value::Number(0.0)));
    assert_eq!(
        execute_function("round", &[Some(Value::from("1.4"))]),
        Some(Value::Number(1.0))
    );
}

#[test]
fn upper_converts_numbers_to_text() {
    assert_eq!(
        execute_function("UPPER", &[Some(Value::from(1.5))]),
        Some(Value::from("1.5"))
    );
    assert_eq!(execute_function("upper", &[None]), Some(Value::from("")));
}

// ========================================
// EVALUATOR TESTS
// ========================================

#[test]
fn evaluator_concatenates_references() {
    let mut inputs = Inputs::new();
    inputs.insert("Name".to_string(), Value::from("World"));
    assert_eq!(
        eval_with(r#""Hello " & [Name]"#, &inputs),
        Some(Value::from("Hello World"))
    );
}

#[test]
fn evaluator_runs_the_editor_example() {
    let mut inputs = Inputs::new();
    inputs.insert("First Name".to_string(), Value::from("Andrew"));
    inputs.insert("Some Number".to_string(), Value::from(3));
    assert_eq!(
        eval_with(
            r#""Hello " & [First Name] & "! " & Round(1.2 + [Some Number])"#,
            &inputs
        ),
        Some(Value::from("Hello Andrew! 4"))
    );
}

#[test]
fn evaluator_dispatches_functions() {
    assert_eq!(number("Round(1.6)"), 2.0);
    assert_eq!(text("UPPER(\"hi\")"), "HI");
    assert_eq!(text("upper(\"a\" & Round(2.4))"), "A2");
}

#[test]
fn evaluator_folds_operators_left_to_right() {
    assert_eq!(number("1+2*3"), 9.0);
    assert_eq!(number("1+2+3"), 6.0);
    assert_eq!(number("10-4-3"), 3.0);
    assert_eq!(number("8/2/2"), 2.0);
    assert_eq!(number("1+(2*3)"), 7.0);
}

#[test]
fn evaluator_handles_long_operator_chains() {
    let formula = format!("1{}", "+1".repeat(50_000));
    assert_eq!(number(&formula), 50_001.0);

    let formula = format!("\"x\"{}", " & [Missing] & 1".repeat(10_000));
    assert_eq!(text(&formula).len(), 10_001);
}

#[test]
fn evaluator_subtracts_negative_numbers() {
    assert_eq!(number("1 - -2"), 3.0);
    assert_eq!(number("Round(0 + -1.5)"), -1.0);
}

#[test]
fn evaluator_coerces_between_text_and_numbers() {
    assert_eq!(number("\"2\" * 3"), 6.0);
    assert!(number("\"abc\" + 1").is_nan());
    assert_eq!(text("1 & 2"), "12");
    assert_eq!(text("1.5 & \"x\""), "1.5x");
    assert_eq!(text("(1/0) & \"\""), "Infinity");
}

#[test]
fn evaluator_missing_reference_is_nothing() {
    assert_eq!(eval("[Missing]"), None);
    assert_eq!(text("\"a\" & [Missing]"), "a");
    assert!(number("[Missing] + 1").is_nan());
}

#[test]
fn evaluator_reads_numeric_inputs() {
    let mut inputs = Inputs::new();
    inputs.insert("N".to_string(), Value::from(3));
    assert_eq!(eval_with("[N] * 2", &inputs), Some(Value::Number(6.0)));
    inputs.insert("N".to_string(), Value::from("3"));
    assert_eq!(eval_with("[N] * 2", &inputs), Some(Value::Number(6.0)));
}

#[test]
fn evaluator_unknown_names_give_nothing() {
    assert_eq!(eval("Foo(1)"), None);
    assert_eq!(eval("1 = 1"), None);
    assert_eq!(text("1 = 1 & \"x\""), "x");
    assert_eq!(eval("Round()"), None);
}

#[test]
fn evaluator_invalid_formulas_give_nothing() {
    for formula in ["", "   ", "+5", "Round(1.2", "1 2", "abc", "[A", "()", "1,2", "$"] {
        assert_eq!(eval(formula), None, "{}", formula);
    }
}

#[test]
fn evaluator_reads_unclosed_text() {
    assert_eq!(text("\"abc"), "abc");
    assert_eq!(text("\"\""), "");
}

// ========================================
// REFERENCE TESTS
// ========================================

#[test]
fn references_are_distinct_in_first_seen_order() {
    let tokens = tokenize("[B] & [A] & [B] & Upper([C])").unwrap();
    assert_eq!(references_used(&tokens), vec!["B", "A", "C"]);
}

#[test]
fn references_are_listed_for_unfinished_formulas() {
    let tokens = tokenize("[A] & Round([B]").unwrap();
    assert_eq!(references_used(&tokens), vec!["A", "B"]);
    assert!(references_used(&tokenize("1 + 2").unwrap()).is_empty());
}
