//! Expression parsing implementation
//!
//! Recursive descent with one method per precedence level, lowest first:
//!
//! ```text
//! ||  →  &&  →  == !=  →  < <= > >=  →  + -  →  * / %  →  unary - !  →  primary
//! ```
//!
//! All binary levels are left-associative. Unary operators and parentheses
//! count toward the parser's nesting limit and every binary operator counts
//! toward its operator limit, so tree depth stays bounded no matter what
//! text is submitted.

use crate::parser::ast::{BinOp, Expr, UnOp};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_logical_or()
    }

    /// Parse logical OR (||)
    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;

        while self.match_token(&TokenKind::OrOr) {
            self.count_operator()?;
            let right = self.parse_logical_and()?;
            left = binary(BinOp::Or, left, right);
        }

        Ok(left)
    }

    /// Parse logical AND (&&)
    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.match_token(&TokenKind::AndAnd) {
            self.count_operator()?;
            let right = self.parse_equality()?;
            left = binary(BinOp::And, left, right);
        }

        Ok(left)
    }

    /// Parse equality (==, !=)
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        loop {
            let op = if self.match_token(&TokenKind::EqEq) {
                BinOp::Eq
            } else if self.match_token(&TokenKind::NotEq) {
                BinOp::Ne
            } else {
                break;
            };
            self.count_operator()?;
            let right = self.parse_comparison()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse relational comparison (<, <=, >, >=)
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            let op = if self.match_token(&TokenKind::Lt) {
                BinOp::Lt
            } else if self.match_token(&TokenKind::Le) {
                BinOp::Le
            } else if self.match_token(&TokenKind::Gt) {
                BinOp::Gt
            } else if self.match_token(&TokenKind::Ge) {
                BinOp::Ge
            } else {
                break;
            };
            self.count_operator()?;
            let right = self.parse_additive()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse additive (+, -)
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = if self.match_token(&TokenKind::Plus) {
                BinOp::Add
            } else if self.match_token(&TokenKind::Minus) {
                BinOp::Sub
            } else {
                break;
            };
            self.count_operator()?;
            let right = self.parse_multiplicative()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse multiplicative (*, /, %)
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = if self.match_token(&TokenKind::Star) {
                BinOp::Mul
            } else if self.match_token(&TokenKind::Slash) {
                BinOp::Div
            } else if self.match_token(&TokenKind::Percent) {
                BinOp::Mod
            } else {
                break;
            };
            self.count_operator()?;
            let right = self.parse_unary()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix unary operators (-, !)
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = if self.match_token(&TokenKind::Minus) {
            UnOp::Neg
        } else if self.match_token(&TokenKind::Bang) {
            UnOp::Not
        } else {
            return self.parse_primary();
        };

        self.enter()?;
        let operand = self.parse_unary();
        self.leave();

        Ok(Expr::Unary {
            op,
            operand: Box::new(operand?),
        })
    }

    /// Parse literals, variables and parenthesized expressions
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::IntLiteral(n) => {
                self.advance();
                Ok(Expr::IntLiteral(n))
            }
            TokenKind::FloatLiteral(x) => {
                self.advance();
                Ok(Expr::FloatLiteral(x))
            }
            TokenKind::StringLiteral(s) => {
                self.advance();
                Ok(Expr::StringLiteral(s))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::BoolLiteral(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::BoolLiteral(false))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::Variable(name))
            }
            TokenKind::LParen => {
                self.advance();
                self.enter()?;
                let inner = self.parse_expression();
                self.leave();
                let inner = inner?;
                self.expect_token(&TokenKind::RParen, "Expected ')'")?;
                Ok(inner)
            }
            other => Err(self.error(format!("Expected expression, found {}", other))),
        }
    }
}

fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}
