//! Abstract Syntax Tree (AST) definitions
//!
//! Expressions and statements are closed enums. Tools outside the crate
//! (pretty-printers, linters) walk the tree through [`ExprVisitor`] and
//! [`StmtVisitor`]; `accept` dispatches with an exhaustive match so adding a
//! node kind is a compile error for every visitor.

use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Literal value appearing in source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Nil => write!(f, "nil"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", crate::value::format_number(*n)),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Literal),
    Grouping(GroupExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Logical(LogicalExpr),
    Variable(VariableExpr),
    Assign(AssignExpr),
    Call(CallExpr),
}

/// Parenthesized expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupExpr {
    pub expr: Box<Expr>,
}

/// Unary expression (`!x`, `-x`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: Token,
    pub expr: Box<Expr>,
}

/// Binary expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: Token,
    pub right: Box<Expr>,
}

/// Short-circuiting `and` / `or`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub op: Token,
    pub right: Box<Expr>,
}

/// Variable reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableExpr {
    pub name: Token,
}

/// Assignment to an existing variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignExpr {
    pub name: Token,
    pub value: Box<Expr>,
}

/// Function call expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    /// Closing paren, used to locate call-site errors
    pub paren: Token,
    pub args: Vec<Expr>,
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Expression(Expr),
    Print(PrintStmt),
    Var(VarDecl),
    Block(Vec<Stmt>),
    If(IfStmt),
    While(WhileStmt),
    Break(Token),
    /// Shared so closures can hold the declaration without cloning the body
    Function(Rc<FunctionDecl>),
    Return(ReturnStmt),
}

/// `print expr;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintStmt {
    pub keyword: Token,
    pub expr: Expr,
}

/// Variable declaration (`var x = init;` or `var x;`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: Token,
    pub initializer: Option<Expr>,
}

/// If statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

/// While loop (also the target of `for` desugaring)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Box<Stmt>,
}

/// Function declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

/// Return statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub keyword: Token,
    pub value: Option<Expr>,
}

/// Visitor over expression nodes
pub trait ExprVisitor {
    type Output;

    fn visit_literal(&mut self, literal: &Literal) -> Self::Output;
    fn visit_grouping(&mut self, expr: &GroupExpr) -> Self::Output;
    fn visit_unary(&mut self, expr: &UnaryExpr) -> Self::Output;
    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_logical(&mut self, expr: &LogicalExpr) -> Self::Output;
    fn visit_variable(&mut self, expr: &VariableExpr) -> Self::Output;
    fn visit_assign(&mut self, expr: &AssignExpr) -> Self::Output;
    fn visit_call(&mut self, expr: &CallExpr) -> Self::Output;
}

/// Visitor over statement nodes
pub trait StmtVisitor {
    type Output;

    fn visit_expression(&mut self, expr: &Expr) -> Self::Output;
    fn visit_print(&mut self, stmt: &PrintStmt) -> Self::Output;
    fn visit_var(&mut self, decl: &VarDecl) -> Self::Output;
    fn visit_block(&mut self, statements: &[Stmt]) -> Self::Output;
    fn visit_if(&mut self, stmt: &IfStmt) -> Self::Output;
    fn visit_while(&mut self, stmt: &WhileStmt) -> Self::Output;
    fn visit_break(&mut self, keyword: &Token) -> Self::Output;
    fn visit_function(&mut self, decl: &Rc<FunctionDecl>) -> Self::Output;
    fn visit_return(&mut self, stmt: &ReturnStmt) -> Self::Output;
}

impl Expr {
    /// Dispatch to the matching visitor method
    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Literal(lit) => visitor.visit_literal(lit),
            Expr::Grouping(e) => visitor.visit_grouping(e),
            Expr::Unary(e) => visitor.visit_unary(e),
            Expr::Binary(e) => visitor.visit_binary(e),
            Expr::Logical(e) => visitor.visit_logical(e),
            Expr::Variable(e) => visitor.visit_variable(e),
            Expr::Assign(e) => visitor.visit_assign(e),
            Expr::Call(e) => visitor.visit_call(e),
        }
    }
}

impl Stmt {
    /// Dispatch to the matching visitor method
    pub fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Expression(e) => visitor.visit_expression(e),
            Stmt::Print(s) => visitor.visit_print(s),
            Stmt::Var(decl) => visitor.visit_var(decl),
            Stmt::Block(stmts) => visitor.visit_block(stmts),
            Stmt::If(s) => visitor.visit_if(s),
            Stmt::While(s) => visitor.visit_while(s),
            Stmt::Break(keyword) => visitor.visit_break(keyword),
            Stmt::Function(decl) => visitor.visit_function(decl),
            Stmt::Return(s) => visitor.visit_return(s),
        }
    }
}
