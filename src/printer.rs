//! Parenthesized prefix rendering of expression trees
//!
//! Used for debugging and as the reference output in tests:
//!
//! ```text
//! -123 * (45.67)   →   (* (- 123) (group 45.67))
//! ```

use crate::parser::ast::{Binary, Expr, ExprVisitor, Grouping, LiteralExpr, Unary};

/// Renders an [`Expr`] as a Lisp-like string.
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::new();
        out.push('(');
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_binary_expr(&mut self, expr: &Binary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.left, &*expr.right])
    }

    fn visit_grouping_expr(&mut self, expr: &Grouping) -> String {
        self.parenthesize("group", &[&*expr.expression])
    }

    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> String {
        match &expr.value {
            Some(value) => value.to_string(),
            None => "nil".to_string(),
        }
    }

    fn visit_unary_expr(&mut self, expr: &Unary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.right])
    }
}
