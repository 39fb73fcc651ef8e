// AST (Abstract Syntax Tree) definitions for Lox expressions

use super::token::{Literal, Token};

/// Binary expression: `left operator right`
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Parenthesized expression
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    pub expression: Box<Expr>,
}

/// Literal value; `None` is `nil`
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Option<Literal>,
}

/// Prefix expression: `operator right`
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Expression tree. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(Binary),
    Grouping(Grouping),
    Literal(LiteralExpr),
    Unary(Unary),
}

/// One operation per [`Expr`] variant.
///
/// Implement this to add a new traversal (printing, evaluation, checks)
/// without touching the node types. Adding a variant to [`Expr`] requires
/// updating every implementation.
pub trait ExprVisitor {
    /// Result produced for each visited node.
    type Output;

    fn visit_binary_expr(&mut self, expr: &Binary) -> Self::Output;
    fn visit_grouping_expr(&mut self, expr: &Grouping) -> Self::Output;
    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> Self::Output;
    fn visit_unary_expr(&mut self, expr: &Unary) -> Self::Output;
}

impl Expr {
    /// Dispatch to the visitor method matching this node's variant.
    pub fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: ExprVisitor + ?Sized,
    {
        match self {
            Expr::Binary(expr) => visitor.visit_binary_expr(expr),
            Expr::Grouping(expr) => visitor.visit_grouping_expr(expr),
            Expr::Literal(expr) => visitor.visit_literal_expr(expr),
            Expr::Unary(expr) => visitor.visit_unary_expr(expr),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping(Grouping {
            expression: Box::new(expression),
        })
    }

    pub fn literal(value: Option<Literal>) -> Self {
        Expr::Literal(LiteralExpr { value })
    }

    pub fn nil() -> Self {
        Self::literal(None)
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary(Unary {
            operator,
            right: Box::new(right),
        })
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::literal(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::TokenKind;

    /// Counts nodes, to check dispatch reaches every variant.
    struct NodeCounter;

    impl ExprVisitor for NodeCounter {
        type Output = usize;

        fn visit_binary_expr(&mut self, expr: &Binary) -> usize {
            1 + expr.left.accept(self) + expr.right.accept(self)
        }

        fn visit_grouping_expr(&mut self, expr: &Grouping) -> usize {
            1 + expr.expression.accept(self)
        }

        fn visit_literal_expr(&mut self, _expr: &LiteralExpr) -> usize {
            1
        }

        fn visit_unary_expr(&mut self, expr: &Unary) -> usize {
            1 + expr.right.accept(self)
        }
    }

    /// Sums numeric literals, a second traversal with a different result type.
    struct Summer;

    impl ExprVisitor for Summer {
        type Output = f64;

        fn visit_binary_expr(&mut self, expr: &Binary) -> f64 {
            expr.left.accept(self) + expr.right.accept(self)
        }

        fn visit_grouping_expr(&mut self, expr: &Grouping) -> f64 {
            expr.expression.accept(self)
        }

        fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> f64 {
            match expr.value {
                Some(Literal::Number(n)) => n,
                _ => 0.0,
            }
        }

        fn visit_unary_expr(&mut self, expr: &Unary) -> f64 {
            -expr.right.accept(self)
        }
    }

    fn sample() -> Expr {
        // -(1) + (2)
        Expr::binary(
            Expr::unary(
                Token::new(TokenKind::Minus, "-", None, 1),
                Expr::from(Literal::Number(1.0)),
            ),
            Token::new(TokenKind::Plus, "+", None, 1),
            Expr::grouping(Expr::from(Literal::Number(2.0))),
        )
    }

    #[test]
    fn test_accept_dispatches_on_variant() {
        assert_eq!(sample().accept(&mut NodeCounter), 5);
    }

    #[test]
    fn test_result_type_chosen_by_visitor() {
        assert_eq!(sample().accept(&mut Summer), 1.0);
    }

    #[test]
    fn test_nil_literal_has_no_value() {
        assert_eq!(Expr::nil(), Expr::Literal(LiteralExpr { value: None }));
    }
}
