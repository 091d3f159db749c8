//! Tests for the param and typeparam detectors

use super::*;
use crate::smells::XmlDocSmell;
use crate::test_utils::{count, location_of, parse_cs, smells_of, TEST_FILE};

fn params(content: &str) -> Vec<Finding> {
    ParamDetector.detect(&parse_cs(content), TEST_FILE)
}

fn type_params(content: &str) -> Vec<Finding> {
    TypeParamDetector.detect(&parse_cs(content), TEST_FILE)
}

#[test]
fn test_constructor_with_empty_and_missing_param() {
    let content = r#"
/// <summary>Foo.</summary>
public class Foo
{
    /// <summary>Ctor.</summary>
    /// <param name="a"></param>
    public Foo(int a, string b) { }
}
"#;
    let findings = params(content);
    assert_eq!(
        smells_of(&findings),
        vec![XmlDocSmell::EmptyParamDescription, XmlDocSmell::MissingParamTag]
    );
    assert_eq!(findings[0].extra_context(), &["a".to_string()]);
    assert_eq!(findings[1].extra_context(), &["b".to_string()]);
    assert_eq!(count(&findings, XmlDocSmell::DuplicateParamTag), 0);
    assert_eq!(count(&findings, XmlDocSmell::UnknownParamTag), 0);

    // Missing tags point at the parameter identifier
    assert_eq!((findings[1].line(), findings[1].column()), location_of(content, "b)"));
    assert_eq!((findings[0].line(), findings[0].column()), location_of(content, "<param"));
}

#[test]
fn test_missing_count_matches_uncovered_parameters() {
    let content = r#"
class C
{
    /// <summary>Run.</summary>
    /// <param name="second">Second.</param>
    void Run(int first, int second, int third) { }
}
"#;
    let findings = params(content);
    assert_eq!(count(&findings, XmlDocSmell::MissingParamTag), 2);
    assert_eq!(findings.len(), 2);
}

#[test]
fn test_duplicate_and_unknown_param() {
    let content = r#"
class C
{
    /// <summary>Run.</summary>
    /// <param name="x">First.</param>
    /// <param name="x">Second.</param>
    /// <param name="y">Stale.</param>
    void Run(int x) { }
}
"#;
    let findings = params(content);
    assert_eq!(
        smells_of(&findings),
        vec![XmlDocSmell::DuplicateParamTag, XmlDocSmell::UnknownParamTag]
    );
    assert_eq!(findings[1].message(), "<param> references unknown parameter 'y'.");
}

#[test]
fn test_param_without_name_is_left_to_well_formed_check() {
    let content = r#"
class C
{
    /// <summary>Run.</summary>
    /// <param>Orphan description.</param>
    /// <param name="x">X.</param>
    void Run(int x) { }
}
"#;
    assert!(params(content).is_empty());
}

#[test]
fn test_undocumented_and_parameterless_members_are_skipped() {
    let content = r#"
class C
{
    void Undocumented(int x) { }

    /// <summary>No parameters.</summary>
    void Nothing() { }
}
"#;
    assert!(params(content).is_empty());
}

#[test]
fn test_delegate_indexer_and_operator_parameters() {
    let content = r#"
struct Money
{
    /// <summary>Handler.</summary>
    public delegate void Handler(object sender);

    /// <summary>Item.</summary>
    public int this[int index] { get { return index; } }

    /// <summary>Add.</summary>
    /// <param name="a">Left.</param>
    /// <param name="b">Right.</param>
    public static Money operator +(Money a, Money b) { return a; }
}
"#;
    let findings = params(content);
    let names: Vec<&str> = findings.iter().map(|f| f.extra_context()[0].as_str()).collect();
    assert_eq!(names, vec!["sender", "index"]);
    assert_eq!(count(&findings, XmlDocSmell::MissingParamTag), 2);
}

#[test]
fn test_type_parameters_of_types_methods_and_delegates() {
    let content = r#"
/// <summary>Box.</summary>
/// <typeparam name="TValue">Stored value.</typeparam>
public class Box<TValue, TKey>
{
    /// <summary>Map.</summary>
    /// <typeparam name="TResult"></typeparam>
    /// <typeparam name="TOther">Stale.</typeparam>
    public TResult Map<TResult>() { return default; }
}

/// <summary>Factory.</summary>
public delegate T Factory<T>();
"#;
    let findings = type_params(content);
    assert_eq!(
        smells_of(&findings),
        vec![
            XmlDocSmell::MissingTypeParamTag,
            XmlDocSmell::EmptyTypeParamDescription,
            XmlDocSmell::UnknownTypeParamTag,
            XmlDocSmell::MissingTypeParamTag,
        ]
    );
    assert_eq!(findings[0].extra_context(), &["TKey".to_string()]);
    assert_eq!((findings[0].line(), findings[0].column()), location_of(content, "TKey"));
    assert_eq!(findings[3].extra_context(), &["T".to_string()]);
}

#[test]
fn test_duplicate_typeparam() {
    let content = r#"
/// <summary>Pair.</summary>
/// <typeparam name="T">One.</typeparam>
/// <typeparam name="T">Two.</typeparam>
public struct Pair<T> { }
"#;
    let findings = type_params(content);
    assert_eq!(smells_of(&findings), vec![XmlDocSmell::DuplicateTypeParamTag]);
    assert_eq!(findings[0].line(), 4);
}
