use crate::error_handling::*;
use crate::parsing::*;

/// Operand and operator stacks for one evaluation. The operand stack
/// starts with a `0`, which is what gives a leading `-` or `+` its unary
/// meaning.
pub struct Yard {
    values: Vec<f64>,
    stack: Vec<Operator>,
}

impl Yard {
    pub fn new() -> Self {
        Self{values: vec![0.0], stack: Vec::new()}
    }

    fn add_value(&mut self, value: f64) {
        self.values.push(value);
    }

    fn add_left_paren(&mut self) {
        self.stack.push(Operator::left_paren);
    }

    /// Pops the right operand, then the left one, and applies the
    /// operator on top of the stack.
    fn reduce(&mut self) -> Result<()> {
        let right = self.values.pop().ok_or(CalcError::invalid_syntax)?;
        let left = self.values.pop().ok_or(CalcError::invalid_syntax)?;
        let operator = self.stack.pop().ok_or(CalcError::invalid_syntax)?;
        self.values.push(operator.call(left, right)?);
        Ok(())
    }

    fn add_right_paren(&mut self) -> Result<()> {
        loop {
            match self.stack.last() {
                Some(Operator::left_paren) => {
                    self.stack.pop();
                    return Ok(());
                },
                Some(_) => self.reduce()?,
                None => return Err(CalcError::invalid_syntax),
            }
        }
    }

    // `>=` folds equal precedence left to right
    fn add_operator(&mut self, operator: Operator) -> Result<()> {
        while self.stack.last().filter(|top| top.precedence() >= operator.precedence()).is_some() {
            self.reduce()?;
        }
        self.stack.push(operator);
        Ok(())
    }

    pub fn add(&mut self, node: ExprNode) -> Result<()> {
        match node {
            ExprNode::value(value) => self.add_value(value),
            ExprNode::operator(Operator::left_paren) => self.add_left_paren(),
            ExprNode::operator(Operator::right_paren) => self.add_right_paren()?,
            ExprNode::operator(operator) => self.add_operator(operator)?,
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<f64> {
        while !self.stack.is_empty() {
            self.reduce()?;
        }
        self.values.last().copied().ok_or(CalcError::invalid_syntax)
    }
}

impl Default for Yard {
    fn default() -> Self {
        Self::new()
    }
}

pub fn evaluate(expression: &[ExprNode]) -> Result<f64> {
    let mut yard = Yard::new();
    for node in expression {
        yard.add(*node)?;
    }
    yard.finish()
}
