//! Parser integration tests: grammar coverage, error messages, recovery

mod common;

use common::{assert_eq, syntax_errors};
use lox_runtime::ast::{Expr, Literal, Stmt};
use lox_runtime::parse_source;
use rstest::rstest;

fn parse_ok(source: &str) -> Vec<Stmt> {
    let (statements, diagnostics) = parse_source(source);
    assert!(diagnostics.is_empty(), "unexpected errors: {:?}", diagnostics);
    statements
}

#[test]
fn test_precedence_shapes_tree() {
    // 1 + 2 * 3 parses as 1 + (2 * 3)
    let statements = parse_ok("1 + 2 * 3;");
    let Stmt::Expression(Expr::Binary(add)) = &statements[0] else {
        panic!("expected binary expression, got {:?}", statements[0]);
    };
    assert_eq!(add.op.lexeme, "+");
    assert_eq!(*add.left, Expr::Literal(Literal::Number(1.0)));
    assert!(matches!(&*add.right, Expr::Binary(mul) if mul.op.lexeme == "*"));
}

#[test]
fn test_comparison_is_left_associative() {
    let statements = parse_ok("1 - 2 - 3;");
    let Stmt::Expression(Expr::Binary(outer)) = &statements[0] else {
        panic!("expected binary expression");
    };
    assert!(matches!(&*outer.left, Expr::Binary(_)));
    assert_eq!(*outer.right, Expr::Literal(Literal::Number(3.0)));
}

#[test]
fn test_assignment_is_right_associative() {
    let statements = parse_ok("a = b = 1;");
    let Stmt::Expression(Expr::Assign(outer)) = &statements[0] else {
        panic!("expected assignment");
    };
    assert_eq!(outer.name.lexeme, "a");
    assert!(matches!(&*outer.value, Expr::Assign(inner) if inner.name.lexeme == "b"));
}

#[test]
fn test_for_desugars_to_while_in_block() {
    let statements = parse_ok("for (var i = 0; i < 2; i = i + 1) print i;");
    let Stmt::Block(block) = &statements[0] else {
        panic!("expected block, got {:?}", statements[0]);
    };
    assert!(matches!(block[0], Stmt::Var(_)));
    assert!(matches!(block[1], Stmt::While(_)));
}

#[test]
fn test_empty_for_clauses_loop_forever_until_break() {
    let statements = parse_ok("for (;;) break;");
    let Stmt::While(while_stmt) = &statements[0] else {
        panic!("expected bare while, got {:?}", statements[0]);
    };
    assert_eq!(while_stmt.cond, Expr::Literal(Literal::Bool(true)));
}

#[test]
fn test_call_chain() {
    let statements = parse_ok("f(1)(2, 3)();");
    let Stmt::Expression(Expr::Call(outer)) = &statements[0] else {
        panic!("expected call");
    };
    assert!(outer.args.is_empty());
    let Expr::Call(middle) = &*outer.callee else {
        panic!("expected nested call");
    };
    assert_eq!(middle.args.len(), 2);
}

#[rstest]
#[case("print 1", "[line 1] Error at end: Expect ';' after value.")]
#[case("var 1 = 2;", "[line 1] Error at '1': Expect variable name.")]
#[case("1 +;", "[line 1] Error at ';': Expect expression.")]
#[case("(1;", "[line 1] Error at ';': Expect ')' after expression.")]
#[case("1 = 2;", "[line 1] Error at '=': Invalid assignment target.")]
#[case("if 1 print 2;", "[line 1] Error at '1': Expect '(' after 'if'.")]
#[case("while (true print 1;", "[line 1] Error at 'print': Expect ')' after condition.")]
#[case("{ print 1;", "[line 1] Error at end: Expect '}' after block.")]
#[case("fun (a) {}", "[line 1] Error at '(': Expect function name.")]
#[case("fun f(a b) {}", "[line 1] Error at 'b': Expect ')' after parameters.")]
#[case("fun f() print 1;", "[line 1] Error at 'print': Expect '{' before function body.")]
#[case("f(1, 2;", "[line 1] Error at ';': Expect ')' after arguments.")]
#[case("class;", "[line 1] Error at 'class': Expect expression.")]
fn test_syntax_error_messages(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(syntax_errors(source), vec![expected.to_string()]);
}

#[rstest]
#[case("break;", "[line 1] Error at 'break': Can't use 'break' outside of a loop.")]
#[case("return 1;", "[line 1] Error at 'return': Can't return from top-level code.")]
#[case(
    "while (true) { fun f() { break; } }",
    "[line 1] Error at 'break': Can't use 'break' outside of a loop."
)]
fn test_placement_errors(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(syntax_errors(source), vec![expected.to_string()]);
}

#[test]
fn test_placement_allowed_inside_constructs() {
    parse_ok("while (true) { if (true) break; }");
    parse_ok("for (;;) { { break; } }");
    parse_ok("fun f() { while (true) { return 1; } }");
    parse_ok("fun f() { return; }");
}

#[test]
fn test_recovery_reports_each_statement() {
    let errors = syntax_errors("var = 1;\nprint 2;\nvar b = ;\nprint 3;");
    assert_eq!(
        errors,
        vec![
            "[line 1] Error at '=': Expect variable name.",
            "[line 3] Error at ';': Expect expression.",
        ]
    );
}

#[rstest]
#[case(
    "while (true) { + break }\nprint 1;",
    &[
        "[line 1] Error at '+': Expect expression.",
        "[line 1] Error at '}': Expect ';' after 'break'.",
        "[line 2] Error at end: Expect '}' after block.",
    ]
)]
#[case(
    "while (true) { var = 1; break; }",
    &["[line 1] Error at '=': Expect variable name."]
)]
fn test_recovery_stops_at_break(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(syntax_errors(source), expected.to_vec());
}

#[test]
fn test_recovery_keeps_good_statements() {
    let (statements, diagnostics) = parse_source("print 1;\nprint );\nprint 3;");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(statements.len(), 2);
}

#[test]
fn test_too_many_arguments() {
    let args = vec!["1"; 256].join(", ");
    let errors = syntax_errors(&format!("f({});", args));
    assert_eq!(
        errors,
        vec!["[line 1] Error at '1': Can't have more than 255 arguments."]
    );
}

#[test]
fn test_max_arguments_accepted() {
    let args = vec!["1"; 255].join(", ");
    parse_ok(&format!("f({});", args));
}

#[test]
fn test_too_many_parameters() {
    let params: Vec<String> = (0..256).map(|i| format!("p{}", i)).collect();
    let errors = syntax_errors(&format!("fun f({}) {{}}", params.join(", ")));
    assert_eq!(
        errors,
        vec!["[line 1] Error at 'p255': Can't have more than 255 parameters."]
    );
}
