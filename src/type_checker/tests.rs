use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::{
    expr::{binary_type, unary_type},
    type_checker::analyze,
};
use crate::{
    ast::{
        ast::Program,
        expressions::{BinaryOperator, UnaryOperator},
        statements::Statement,
        types::PrimitiveType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn analyze_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.co".to_string()))?;
    let mut program = parse(tokens, Rc::new("test.co".to_string()))?;
    analyze(&mut program)?;
    Ok(program)
}

fn symbol_type(program: &Program, name: &str) -> Option<PrimitiveType> {
    program
        .symbols(program.code_block())
        .and_then(|symbols| symbols.get(name))
        .map(|symbol| symbol.ty)
}

/// The inferred type of the expression written by the last statement.
fn output_type(source: &str) -> Result<PrimitiveType, Error> {
    let program = analyze_source(source)?;
    let last = *program.statements().last().unwrap();
    let Some(Statement::WriteOutput { expression }) = program.statement(last) else {
        panic!("expected an output statement last");
    };
    Ok(program.expression_type(*expression).unwrap())
}

#[test]
fn test_declarations_register_symbols() {
    let program = analyze_source("declare a : int = 1;\ndeclare b = 2.5;\ndeclare c : bool;").unwrap();
    let symbols = program.symbols(program.code_block()).unwrap();

    assert_eq!(symbols.len(), 3);
    assert_eq!(symbol_type(&program, "a"), Some(PrimitiveType::Integer));
    assert_eq!(symbol_type(&program, "b"), Some(PrimitiveType::Float));
    assert_eq!(symbol_type(&program, "c"), Some(PrimitiveType::Boolean));

    assert!(symbols.get("a").unwrap().initialized);
    assert!(!symbols.get("c").unwrap().initialized);
    assert_eq!(symbols.get("b").unwrap().declared_at_line, 2);
}

#[test]
fn test_arithmetic_types() {
    assert_eq!(output_type("stdout 1 + 2;").unwrap(), PrimitiveType::Integer);
    assert_eq!(output_type("stdout 1 * 2.0;").unwrap(), PrimitiveType::Float);
    assert_eq!(output_type("stdout 1.5 - 2;").unwrap(), PrimitiveType::Float);
    assert_eq!(output_type("stdout ~3;").unwrap(), PrimitiveType::Integer);
    assert_eq!(output_type("stdout ~3.5;").unwrap(), PrimitiveType::Float);
}

#[test]
fn test_division_is_always_float() {
    assert_eq!(output_type("stdout 4 / 2;").unwrap(), PrimitiveType::Float);

    let program = analyze_source("declare x = 4 / 2;").unwrap();
    assert_eq!(symbol_type(&program, "x"), Some(PrimitiveType::Float));

    let error = analyze_source("declare q : int = 4 / 2;").unwrap_err();
    assert_eq!(error.get_error_name(), "TypeError");
}

#[test]
fn test_comparison_and_logic_types() {
    assert_eq!(output_type("stdout 1 < 2.5;").unwrap(), PrimitiveType::Boolean);
    assert_eq!(output_type("stdout true == false;").unwrap(), PrimitiveType::Boolean);
    assert_eq!(output_type("stdout 1 != 2 & true;").unwrap(), PrimitiveType::Boolean);
    assert_eq!(output_type("stdout !(1 >= 2) | false;").unwrap(), PrimitiveType::Boolean);
}

#[test]
fn test_operand_type_errors() {
    for source in [
        "stdout true + 1;",
        "stdout 1 - false;",
        "stdout 1 & true;",
        "stdout true | 2.0;",
        "stdout 1 == true;",
        "stdout ~true;",
        "stdout !1;",
    ] {
        let error = analyze_source(source).unwrap_err();
        assert_eq!(error.get_error_name(), "TypeError", "source: {}", source);
    }
}

#[test]
fn test_operand_error_names_side() {
    let error = analyze_source("stdout 1 +\n true;").unwrap_err();

    assert!(error.to_string().contains("right operand of `+`"), "{}", error);
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_declared_type_mismatch() {
    let error = analyze_source("declare x : int = 1.5;").unwrap_err();

    assert_eq!(error.get_error_name(), "TypeError");
    assert!(error.to_string().contains("`x` (int)"), "{}", error);
    assert!(error.to_string().contains("(float)"), "{}", error);
}

#[test]
fn test_int_does_not_widen_to_float() {
    let error = analyze_source("declare x : float = 1;").unwrap_err();
    assert_eq!(error.get_error_name(), "TypeError");

    let error = analyze_source("declare x : float;\nx : = 2;").unwrap_err();
    assert_eq!(error.get_error_name(), "TypeError");
    assert_eq!(error.get_position().line, 2);
}

#[test]
fn test_undeclared_identifier() {
    let error = analyze_source("declare a : int = 1;\nstdout a + b;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UndeclaredIdentifier {
            identifier: "b".to_string()
        }
    );
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 11);

    for source in ["stdin z;", "z : = 1;"] {
        let error = analyze_source(source).unwrap_err();
        assert_eq!(error.get_error_name(), "UndeclaredIdentifier", "source: {}", source);
    }
}

#[test]
fn test_use_before_declaration() {
    let error = analyze_source("stdout a;\ndeclare a : int = 1;").unwrap_err();

    assert_eq!(error.get_error_name(), "UndeclaredIdentifier");
}

#[test]
fn test_uninitialized_variable() {
    let error = analyze_source("declare a : int;\ndeclare b : int = a * 2;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UninitializedVariable {
            identifier: "a".to_string()
        }
    );
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 18);
}

#[test]
fn test_self_reference_in_assignment_is_uninitialized() {
    let error = analyze_source("declare a : int;\na : = a + 1;").unwrap_err();

    assert_eq!(error.get_error_name(), "UninitializedVariable");
}

#[test]
fn test_input_and_assignment_initialize() {
    assert!(analyze_source("declare a : int;\nstdin a;\nstdout a;").is_ok());
    assert!(analyze_source("declare a : bool;\na : = true;\nstdout !a;").is_ok());

    let program = analyze_source("declare a : float;\nstdin a;").unwrap();
    let symbol = program.symbols(program.code_block()).unwrap().get("a").unwrap();
    assert!(symbol.initialized);
}

#[test]
fn test_duplicate_declaration() {
    let error = analyze_source("declare a : int = 1;\nstdout a;\ndeclare a : float;").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::DuplicateDeclaration {
            identifier: "a".to_string(),
            first_declared_at: 1,
        }
    );
    assert_eq!(error.get_position().line, 3);
}

#[test]
fn test_expression_nodes_are_tagged() {
    let program = analyze_source("declare a : int = 2;\nstdout (a + 1) * 1.5 < 3;").unwrap();
    let tagged: Vec<PrimitiveType> = (0..program.len())
        .map(crate::ast::ast::NodeId)
        .filter_map(|id| program.expression(id).map(|_| program.expression_type(id)))
        .map(|ty| ty.expect("every expression node carries a type"))
        .collect();

    assert!(!tagged.is_empty());
    assert!(tagged.contains(&PrimitiveType::Boolean));
    assert!(tagged.contains(&PrimitiveType::Float));
    assert!(tagged.contains(&PrimitiveType::Integer));
}

#[test]
fn test_mean_of_three() {
    let source = "declare a : int = 1;\n\
                  declare b : int = 2;\n\
                  declare c : int = 3;\n\
                  declare mean = (a + b + c) / 3;\n\
                  stdout mean;\n";
    let program = analyze_source(source).unwrap();

    assert_eq!(program.statements().len(), 5);
    assert_eq!(symbol_type(&program, "mean"), Some(PrimitiveType::Float));
    assert_eq!(output_type(source).unwrap(), PrimitiveType::Float);
}

#[test]
fn test_binary_type_table() {
    use BinaryOperator::*;
    use PrimitiveType::*;

    assert_eq!(binary_type(Add, Integer, Integer), Ok(Integer));
    assert_eq!(binary_type(Multiply, Float, Integer), Ok(Float));
    assert_eq!(binary_type(Divide, Integer, Integer), Ok(Float));
    assert_eq!(binary_type(Less, Integer, Float), Ok(Boolean));
    assert_eq!(binary_type(Equals, Boolean, Boolean), Ok(Boolean));
    assert_eq!(binary_type(And, Boolean, Boolean), Ok(Boolean));

    assert!(binary_type(Subtract, Boolean, Integer)
        .unwrap_err()
        .starts_with("left operand"));
    assert!(binary_type(Or, Boolean, Float)
        .unwrap_err()
        .starts_with("right operand"));
    assert!(binary_type(GreaterEquals, Boolean, Integer).is_err());
}

#[test]
fn test_unary_type_table() {
    assert_eq!(
        unary_type(UnaryOperator::ArithmeticNegation, PrimitiveType::Float),
        Ok(PrimitiveType::Float)
    );
    assert_eq!(
        unary_type(UnaryOperator::LogicalNegation, PrimitiveType::Boolean),
        Ok(PrimitiveType::Boolean)
    );
    assert!(unary_type(UnaryOperator::LogicalNegation, PrimitiveType::Integer).is_err());
    assert!(unary_type(UnaryOperator::ArithmeticNegation, PrimitiveType::Boolean).is_err());
}
