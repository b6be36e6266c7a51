//! Formula evaluation.
//!
//! A formula body is tokenized, every reference is replaced by the referenced
//! cell's current value, and the resulting arithmetic expression is handed to
//! a Rhai engine. Only float literals, `+ - * /` and parentheses ever reach
//! Rhai, so the expression cannot call functions or touch variables.

use rhai::{Dynamic, Engine};

use super::cell::{CellKind, Computed, Grid};
use super::cell_ref::CellRef;
use super::error::FormulaError;
use super::format::float_literal;
use super::tokenize::{Token, tokenize};

const MAX_EXPR_DEPTH: usize = 64;
const MAX_OPERATIONS: u64 = 10_000;

/// Create a Rhai engine limited to evaluating small arithmetic expressions.
pub fn create_engine() -> Engine {
    let mut engine = Engine::new();
    engine.set_max_expr_depths(MAX_EXPR_DEPTH, MAX_EXPR_DEPTH);
    engine.set_max_operations(MAX_OPERATIONS);
    engine
}

/// Turns raw cell text into a computed value.
pub struct FormulaEvaluator {
    engine: Engine,
}

impl FormulaEvaluator {
    pub fn new() -> Self {
        FormulaEvaluator {
            engine: create_engine(),
        }
    }

    /// Evaluate `raw` against the computed values currently held by `grid`.
    ///
    /// Literal text is returned unchanged. Formula failures are returned as
    /// [`Computed::Error`]; they never escape as `Err`.
    pub fn evaluate(&self, raw: &str, grid: &Grid) -> Computed {
        match CellKind::classify(raw) {
            CellKind::Literal(text) => Computed::Text(text.to_string()),
            CellKind::Formula(body) => match self.evaluate_formula(body, grid) {
                Ok(n) => Computed::Number(n),
                Err(e) => Computed::Error(e),
            },
        }
    }

    /// Evaluate a formula body (without the `=` prefix).
    pub fn evaluate_formula(&self, body: &str, grid: &Grid) -> Result<f64, FormulaError> {
        let tokens = tokenize(body, grid.shape())?;
        let expr = to_expression(&tokens, grid)?;

        let result: Dynamic = self
            .engine
            .eval_expression(&expr)
            .map_err(|e| FormulaError::Evaluation(e.to_string()))?;
        let n = result
            .as_float()
            .map_err(|ty| FormulaError::Evaluation(format!("expected a number, got {ty}")))?;

        if n.is_finite() {
            Ok(n)
        } else {
            Err(FormulaError::NonFinite)
        }
    }
}

impl Default for FormulaEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Render tokens as a Rhai expression with references substituted.
fn to_expression(tokens: &[Token], grid: &Grid) -> Result<String, FormulaError> {
    let mut parts = Vec::with_capacity(tokens.len());
    for token in tokens {
        let part = match token {
            Token::Number(n) => float_literal(*n),
            Token::Ref(at) => float_literal(resolve(*at, grid)?),
            Token::Op(op) => op.to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        };
        parts.push(part);
    }
    // Spaces keep adjacent operators apart (`* *` is not `**`, `/ /` is not a comment).
    Ok(parts.join(" "))
}

/// The numeric value a reference contributes to a formula.
fn resolve(at: CellRef, grid: &Grid) -> Result<f64, FormulaError> {
    match grid.cell(at)?.computed() {
        Computed::Number(n) => Ok(*n),
        Computed::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Err(FormulaError::NotANumber {
                    reference: at.to_string(),
                    value: text.clone(),
                }),
            }
        }
        Computed::Error(_) => Err(FormulaError::ReferencedError(at.to_string())),
    }
}
