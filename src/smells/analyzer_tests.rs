//! End to end tests over all detectors

use super::*;
use crate::smells::{sort_findings, XmlDocSmell};
use crate::test_utils::{count, dump, parse_cs, smells_of, TEST_FILE};

fn analyze(content: &str) -> Vec<Finding> {
    let file = parse_cs(content);
    analyze_source(&file, TEST_FILE, &XmlDocOptions::default())
}

#[test]
fn test_undocumented_declaration_yields_exactly_one_finding() {
    let content = r#"
/// <summary>Calculator.</summary>
public class Calculator
{
    public int Add<T>(int a, int b) { return a + b; }
}
"#;
    let findings = analyze(content);
    dump(&findings);
    assert_eq!(smells_of(&findings), vec![XmlDocSmell::MissingDocumentation]);
}

#[test]
fn test_documented_class_is_clean() {
    let content = r#"
namespace Demo
{
    /// <summary>Calculator.</summary>
    /// <typeparam name="T">Number type.</typeparam>
    public class Calculator<T>
    {
        /// <summary>Adds two numbers.</summary>
        /// <param name="a">Left.</param>
        /// <param name="b">Right.</param>
        /// <returns>The sum of <paramref name="a"/> and <paramref name="b"/>.</returns>
        /// <exception cref="System.OverflowException">On overflow.</exception>
        public int Add(int a, int b) { return checked(a + b); }

        /// <summary>The last result.</summary>
        /// <value>Last value.</value>
        public int Last { get; private set; }
    }
}
"#;
    let findings = analyze(content);
    dump(&findings);
    assert!(findings.is_empty());
}

#[test]
fn test_generic_class_without_typeparam_tag() {
    let content = r#"
/// <summary>Box.</summary>
public class Box<T> { }
"#;
    let findings = analyze(content);
    dump(&findings);
    assert_eq!(smells_of(&findings), vec![XmlDocSmell::MissingTypeParamTag]);
    assert_eq!(findings[0].extra_context(), &["T".to_string()]);
}

#[test]
fn test_generic_interface_and_struct_each_missing_typeparam() {
    let content = r#"
/// <summary>Box.</summary>
public interface IBox<T> { }

/// <summary>Pair.</summary>
public struct S<U> { }
"#;
    let findings = analyze(content);
    assert_eq!(count(&findings, XmlDocSmell::MissingTypeParamTag), 2);
}

#[test]
fn test_param_without_name_is_reported_only_by_well_formed_check() {
    let content = r#"
class C
{
    /// <summary>Run.</summary>
    /// <param>No name.</param>
    /// <param name="x">X.</param>
    void Run(int x) { }
}
"#;
    let findings = analyze(content);
    assert_eq!(count(&findings, XmlDocSmell::ParamMissingName), 1);
    assert_eq!(count(&findings, XmlDocSmell::MissingParamTag), 0);
    assert_eq!(count(&findings, XmlDocSmell::EmptyParamDescription), 0);
    assert_eq!(count(&findings, XmlDocSmell::DuplicateParamTag), 0);
    assert_eq!(count(&findings, XmlDocSmell::UnknownParamTag), 0);
}

#[test]
fn test_rethrow_reported_with_exception_tags_present() {
    let content = r#"
/// <summary>C.</summary>
class C
{
    /// <summary>Run.</summary>
    /// <exception cref="System.Exception">Rethrown.</exception>
    void Run()
    {
        try { } catch (System.Exception) { throw; }
    }
}
"#;
    let findings = analyze(content);
    assert_eq!(smells_of(&findings), vec![XmlDocSmell::RethrowCannotInferException]);
}

#[test]
fn test_returns_on_void_is_not_duplicated_by_member_tags() {
    let content = r#"
/// <summary>C.</summary>
class C
{
    /// <summary>Foo.</summary>
    /// <returns>text</returns>
    void Foo() { }
}
"#;
    let findings = analyze(content);
    assert_eq!(smells_of(&findings), vec![XmlDocSmell::ReturnsOnVoidMember]);
}

#[test]
fn test_analysis_is_idempotent_and_sortable() {
    let content = r#"
class C
{
    /// <summary></summary>
    /// <param name="ghost">Boo.</param>
    /// <foo/>
    int Run(int a) { try { return a; } catch { throw; } }
}
"#;
    let file = parse_cs(content);
    let analyzer = XmlDocAnalyzer::new(&XmlDocOptions::default());
    let first = analyzer.analyze(&file, TEST_FILE);
    let second = analyzer.analyze(&file, TEST_FILE);
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sort_findings(&mut sorted);
    let positions: Vec<(usize, usize)> = sorted.iter().map(|f| (f.line(), f.column())).collect();
    let mut expected = positions.clone();
    expected.sort();
    assert_eq!(positions, expected);
    assert_eq!(sorted.len(), first.len());
}
