//! AST dump command - print the syntax tree in prefix form

use super::{format_diagnostic, read_source};
use anyhow::Result;
use lox_runtime::ast::*;
use lox_runtime::{parse_source, Token, EXIT_OK, EXIT_SYNTAX_ERROR};
use std::rc::Rc;

/// Renders nodes as parenthesized prefix expressions
///
/// `1 + 2 * 3` prints as `(+ 1 (* 2 3))`; statements use their keyword as
/// the head, e.g. `(print x)` or `(while c body)`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    /// One line per top-level statement
    pub fn print_program(&mut self, statements: &[Stmt]) -> String {
        statements
            .iter()
            .map(|stmt| self.print_stmt(stmt) + "\n")
            .collect()
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({}", name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&self.print_expr(expr));
        }
        out.push(')');
        out
    }

    fn statements(&mut self, head: String, statements: &[Stmt]) -> String {
        let mut out = head;
        for stmt in statements {
            out.push(' ');
            out.push_str(&stmt.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_literal(&mut self, literal: &Literal) -> String {
        literal.to_string()
    }

    fn visit_grouping(&mut self, expr: &GroupExpr) -> String {
        self.parenthesize("group", &[&*expr.expr])
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        self.parenthesize(&expr.op.lexeme, &[&*expr.expr])
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        self.parenthesize(&expr.op.lexeme, &[&*expr.left, &*expr.right])
    }

    fn visit_logical(&mut self, expr: &LogicalExpr) -> String {
        self.parenthesize(&expr.op.lexeme, &[&*expr.left, &*expr.right])
    }

    fn visit_variable(&mut self, expr: &VariableExpr) -> String {
        expr.name.lexeme.clone()
    }

    fn visit_assign(&mut self, expr: &AssignExpr) -> String {
        format!("(= {} {})", expr.name.lexeme, expr.value.accept(self))
    }

    fn visit_call(&mut self, expr: &CallExpr) -> String {
        let mut parts: Vec<&Expr> = vec![&*expr.callee];
        parts.extend(expr.args.iter());
        self.parenthesize("call", &parts)
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_expression(&mut self, expr: &Expr) -> String {
        self.parenthesize(";", &[expr])
    }

    fn visit_print(&mut self, stmt: &PrintStmt) -> String {
        self.parenthesize("print", &[&stmt.expr])
    }

    fn visit_var(&mut self, decl: &VarDecl) -> String {
        match &decl.initializer {
            Some(init) => format!("(var {} = {})", decl.name.lexeme, init.accept(self)),
            None => format!("(var {})", decl.name.lexeme),
        }
    }

    fn visit_block(&mut self, statements: &[Stmt]) -> String {
        self.statements("(block".to_string(), statements)
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> String {
        let cond = stmt.cond.accept(self);
        let then_branch = stmt.then_branch.accept(self);
        match &stmt.else_branch {
            Some(else_branch) => format!(
                "(if-else {} {} {})",
                cond,
                then_branch,
                else_branch.accept(self)
            ),
            None => format!("(if {} {})", cond, then_branch),
        }
    }

    fn visit_while(&mut self, stmt: &WhileStmt) -> String {
        let cond = stmt.cond.accept(self);
        format!("(while {} {})", cond, stmt.body.accept(self))
    }

    fn visit_break(&mut self, _keyword: &Token) -> String {
        "(break)".to_string()
    }

    fn visit_function(&mut self, decl: &Rc<FunctionDecl>) -> String {
        let params: Vec<&str> = decl.params.iter().map(|p| p.lexeme.as_str()).collect();
        let head = format!("(fun {} ({})", decl.name.lexeme, params.join(" "));
        self.statements(head, &decl.body)
    }

    fn visit_return(&mut self, stmt: &ReturnStmt) -> String {
        match &stmt.value {
            Some(value) => self.parenthesize("return", &[value]),
            None => "(return)".to_string(),
        }
    }
}

/// Print the syntax tree of a file; syntax errors go to stderr
pub fn run(file_path: &str, json: bool) -> Result<i32> {
    let source = read_source(file_path)?;
    let (statements, diagnostics) = parse_source(&source);

    if !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            eprintln!("{}", format_diagnostic(diagnostic, json));
        }
        return Ok(EXIT_SYNTAX_ERROR);
    }

    print!("{}", AstPrinter.print_program(&statements));
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_runtime::TokenKind;

    fn print(source: &str) -> String {
        let (statements, diagnostics) = parse_source(source);
        assert!(diagnostics.is_empty(), "unexpected errors: {:?}", diagnostics);
        AstPrinter.print_program(&statements)
    }

    #[test]
    fn test_hand_built_expression() {
        let expr = Expr::Binary(BinaryExpr {
            left: Box::new(Expr::Unary(UnaryExpr {
                op: Token::new(TokenKind::Minus, "-", 1),
                expr: Box::new(Expr::Literal(Literal::Number(123.0))),
            })),
            op: Token::new(TokenKind::Star, "*", 1),
            right: Box::new(Expr::Grouping(GroupExpr {
                expr: Box::new(Expr::Literal(Literal::Number(45.67))),
            })),
        });
        assert_eq!(AstPrinter.print_expr(&expr), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn test_statements() {
        insta::assert_snapshot!(print(r#"
            var a = 1;
            var b;
            print 1 + 2 * 3;
            { var a = "hello world"; print a; }
            if (a and b) print a; else b = a or nil;
            while (true) break;
            a;
        "#), @r"
        (var a = 1)
        (var b)
        (print (+ 1 (* 2 3)))
        (block (var a = hello world) (print a))
        (if-else (and a b) (print a) (; (= b (or a nil))))
        (while true (break))
        (; a)
        ");
    }

    #[test]
    fn test_functions_and_desugared_for() {
        insta::assert_snapshot!(print(r#"
            fun add(a, b) { return a + b; }
            fun noop() { return; }
            print add(1, 2);
            for (var i = 0; i < 2; i = i + 1) print i;
        "#), @r"
        (fun add (a b) (return (+ a b)))
        (fun noop () (return))
        (print (call add 1 2))
        (block (var i = 0) (while (< i 2) (block (print i) (; (= i (+ i 1))))))
        ");
    }
}
