use crate::error_handling::*;
use crate::scanning::*;
use crate::variables::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    addition,
    subtraction,
    multiplication,
    division,
    left_paren,
    right_paren,
    /// Tokenizes as an operator but has no arithmetic meaning.
    other(char),
}

impl Operator {
    pub fn precedence(&self) -> i32 {
        use Operator::*;
        match self {
            addition | subtraction => 1,
            multiplication | division => 2,
            _ => 0,
        }
    }

    pub fn call(&self, left: f64, right: f64) -> Result<f64> {
        use Operator::*;
        match self {
            addition => Ok(left + right),
            subtraction => Ok(left - right),
            multiplication => Ok(left * right),
            division => Ok(left / right),
            _ => Err(CalcError::invalid_syntax),
        }
    }
}

impl From<char> for Operator {
    fn from(symbol: char) -> Self {
        use Operator::*;
        match symbol {
            '+' => addition,
            '-' => subtraction,
            '*' => multiplication,
            '/' => division,
            '(' => left_paren,
            ')' => right_paren,
            c => other(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprNode {
    value(f64),
    operator(Operator),
}

/// Collects one statement's expression, up to but not including its
/// terminator.
pub fn parse<S: Scanner>(scanner: &mut S, variables: &Variables) -> Result<Vec<ExprNode>> {
    if scanner.get_current().ends_statement() {
        return Err(CalcError::invalid_syntax);
    }
    parse_continuing(scanner, variables, Vec::new())
}

/// Like `parse`, appending to nodes the caller already consumed.
pub fn parse_continuing<S: Scanner>(
    scanner: &mut S,
    variables: &Variables,
    mut expression: Vec<ExprNode>,
) -> Result<Vec<ExprNode>> {
    loop {
        let node = match scanner.get_current() {
            Token::end_statement | Token::end_of_input => return Ok(expression),
            Token::number(value) => ExprNode::value(*value),
            Token::identifier(name) => ExprNode::value(variables.lookup(name)?),
            Token::operator(symbol) => ExprNode::operator(Operator::from(*symbol)),
            _ => return Err(CalcError::invalid_syntax),
        };
        expression.push(node);
        scanner.advance();
    }
}
