//! Tree-sitter node kind constants for C# parsing
//!
//! String constants for the tree-sitter-c-sharp node kinds and field names
//! used when extracting declarations and doc comments.

/// Tree-sitter node kind for namespace declarations
///
/// Example: `namespace MyNamespace { ... }`
pub const NAMESPACE_DECLARATION: &str = "namespace_declaration";

/// Tree-sitter node kind for file-scoped namespace declarations
///
/// Example: `namespace MyNamespace;`
pub const FILE_SCOPED_NAMESPACE_DECLARATION: &str = "file_scoped_namespace_declaration";

/// Tree-sitter node kind for class declarations
///
/// Example: `public class MyClass { ... }`
pub const CLASS_DECLARATION: &str = "class_declaration";

/// Tree-sitter node kind for interface declarations
///
/// Example: `public interface IMyInterface { ... }`
pub const INTERFACE_DECLARATION: &str = "interface_declaration";

/// Tree-sitter node kind for struct declarations
///
/// Example: `public struct MyStruct { ... }`
pub const STRUCT_DECLARATION: &str = "struct_declaration";

/// Tree-sitter node kind for record declarations
///
/// Example: `public record Point(int X, int Y);`
pub const RECORD_DECLARATION: &str = "record_declaration";

/// Tree-sitter node kind for record struct declarations (older grammar revisions)
pub const RECORD_STRUCT_DECLARATION: &str = "record_struct_declaration";

/// Tree-sitter node kind for enum declarations
///
/// Example: `public enum MyEnum { ... }`
pub const ENUM_DECLARATION: &str = "enum_declaration";

/// Tree-sitter node kind for enum members
///
/// Example: `Red = 1`
pub const ENUM_MEMBER_DECLARATION: &str = "enum_member_declaration";

/// Tree-sitter node kind for method declarations
///
/// Example: `public void MyMethod() { ... }`
pub const METHOD_DECLARATION: &str = "method_declaration";

/// Tree-sitter node kind for constructor declarations
///
/// Example: `public MyClass() { ... }`
pub const CONSTRUCTOR_DECLARATION: &str = "constructor_declaration";

/// Tree-sitter node kind for property declarations
///
/// Example: `public string MyProperty { get; set; }`
pub const PROPERTY_DECLARATION: &str = "property_declaration";

/// Tree-sitter node kind for field declarations
///
/// Example: `private int myField;`
pub const FIELD_DECLARATION: &str = "field_declaration";

/// Tree-sitter node kind for event declarations with accessors
///
/// Example: `public event Action MyEvent { add { } remove { } }`
pub const EVENT_DECLARATION: &str = "event_declaration";

/// Tree-sitter node kind for field-like event declarations
///
/// Example: `public event Action MyEvent;`
pub const EVENT_FIELD_DECLARATION: &str = "event_field_declaration";

/// Tree-sitter node kind for delegate declarations
///
/// Example: `public delegate int Callback(int value);`
pub const DELEGATE_DECLARATION: &str = "delegate_declaration";

/// Tree-sitter node kind for operator declarations
///
/// Example: `public static Foo operator +(Foo a, Foo b) { ... }`
pub const OPERATOR_DECLARATION: &str = "operator_declaration";

/// Tree-sitter node kind for conversion operator declarations
///
/// Example: `public static implicit operator int(Foo f) { ... }`
pub const CONVERSION_OPERATOR_DECLARATION: &str = "conversion_operator_declaration";

/// Tree-sitter node kind for indexer declarations
///
/// Example: `public int this[int index] { get { ... } }`
pub const INDEXER_DECLARATION: &str = "indexer_declaration";

/// Tree-sitter node kind for variable declarations
///
/// Example: `int x, y;`
pub const VARIABLE_DECLARATION: &str = "variable_declaration";

/// Tree-sitter node kind for variable declarators
///
/// Example: `x = 5` in `int x = 5;`
pub const VARIABLE_DECLARATOR: &str = "variable_declarator";

/// Tree-sitter node kind for parameter declarations
///
/// Example: `int value` in `void Method(int value)`
pub const PARAMETER: &str = "parameter";

/// Tree-sitter node kind for `params` arrays (older grammar revisions)
pub const PARAMETER_ARRAY: &str = "parameter_array";

/// Tree-sitter node kind for generic type parameters
///
/// Example: `T` in `class Box<T>`
pub const TYPE_PARAMETER: &str = "type_parameter";

/// Tree-sitter node kind for a generic parameter list
///
/// Example: `<T, U>` in `class Pair<T, U>`
pub const TYPE_PARAMETER_LIST: &str = "type_parameter_list";

/// Tree-sitter node kind for simple identifiers
///
/// Example: `MyClass`, `myVariable`
pub const IDENTIFIER: &str = "identifier";

/// Tree-sitter node kind for comments
///
/// Example: `// comment`, `/// <summary>` or `/* comment */`
pub const COMMENT: &str = "comment";

/// Tree-sitter node kind for `throw` statements
pub const THROW_STATEMENT: &str = "throw_statement";

/// Tree-sitter node kind for lambda expressions
pub const LAMBDA_EXPRESSION: &str = "lambda_expression";

/// Tree-sitter node kind for `delegate { ... }` expressions
pub const ANONYMOUS_METHOD_EXPRESSION: &str = "anonymous_method_expression";

/// Tree-sitter node kind for local functions
pub const LOCAL_FUNCTION_STATEMENT: &str = "local_function_statement";

/// Anonymous token kind of the indexer `this` keyword
pub const THIS_KEYWORD: &str = "this";

/// Anonymous token kind of the `operator` keyword
pub const OPERATOR_KEYWORD: &str = "operator";

/// Tree-sitter field name for accessing the name of a declaration
///
/// Used with `node.child_by_field_name(NAME_FIELD)`
pub const NAME_FIELD: &str = "name";

/// Tree-sitter field name for accessing the body of a declaration
///
/// Used with `node.child_by_field_name(BODY_FIELD)`
pub const BODY_FIELD: &str = "body";

/// Tree-sitter field name for property, indexer and event accessors
pub const ACCESSORS_FIELD: &str = "accessors";

/// Tree-sitter field name for the declared type of a member
///
/// Used with `node.child_by_field_name(TYPE_FIELD)`
pub const TYPE_FIELD: &str = "type";

/// Tree-sitter field name for a method return type
pub const RETURNS_FIELD: &str = "returns";

/// Tree-sitter field name for accessing type parameters
///
/// Used with `node.child_by_field_name(TYPE_PARAMETERS_FIELD)`
pub const TYPE_PARAMETERS_FIELD: &str = "type_parameters";

/// Tree-sitter field name for accessing parameters
///
/// Used with `node.child_by_field_name(PARAMETERS_FIELD)`
pub const PARAMETERS_FIELD: &str = "parameters";

/// Prefix for single line XML documentation comments
pub const XML_DOC_COMMENT_PREFIX: &str = "///";

/// Opening delimiter of block XML documentation comments
pub const XML_DOC_BLOCK_START: &str = "/**";

/// Closing delimiter of block comments
pub const BLOCK_COMMENT_END: &str = "*/";

/// The `void` return type
pub const VOID_TYPE: &str = "void";

/// File extension for C# source files
pub const CS_EXTENSION: &str = "cs";
