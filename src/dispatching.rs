use crate::error_handling::*;
use crate::evaluating::*;
use crate::parsing::*;
use crate::scanning::*;
use crate::variables::*;

use std::io::{self, Write};

/// One shell session: the variables it has assigned and where its
/// results and error messages go.
pub struct Session<O: Write, E: Write> {
    variables: Variables,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Session<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self{variables: Variables::new(), out, err}
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Runs statements until the input ends.
    pub fn run<S: Scanner>(&mut self, scanner: &mut S) -> io::Result<()> {
        while self.step(scanner)? {}
        Ok(())
    }

    /// Handles the statement at the scanner's current token. Returns
    /// `false` once there is nothing left to read.
    pub fn step<S: Scanner>(&mut self, scanner: &mut S) -> io::Result<bool> {
        match scanner.get_current() {
            Token::end_of_input => return Ok(false),
            Token::end_statement => {
                scanner.advance();
                return Ok(true);
            },
            _ => {},
        }

        match self.statement(scanner) {
            Ok(Some(value)) => writeln!(self.out, "{value:.6}")?,
            Ok(None) => {},
            Err(e) => {
                writeln!(self.err, "Error: {e}")?;
                skip_statement(scanner);
            },
        }

        if *scanner.get_current() == Token::end_statement {
            scanner.advance();
        }
        Ok(true)
    }

    /// The value to print, if the statement produces one.
    fn statement<S: Scanner>(&mut self, scanner: &mut S) -> Result<Option<f64>> {
        match scanner.get_current().clone() {
            Token::identifier(name) => {
                scanner.advance();
                if *scanner.get_current() == Token::operator('=') {
                    scanner.advance();
                    let value = evaluate(&parse(scanner, &self.variables)?)?;
                    self.variables.set(name, value);
                    Ok(None)
                } else {
                    let first = ExprNode::value(self.variables.lookup(&name)?);
                    let expression = parse_continuing(scanner, &self.variables, vec![first])?;
                    Ok(Some(evaluate(&expression)?))
                }
            },

            Token::print => {
                scanner.advance();
                match scanner.get_current() {
                    Token::number(_) | Token::identifier(_) => {
                        Ok(Some(evaluate(&parse(scanner, &self.variables)?)?))
                    },
                    _ => Err(CalcError::invalid_syntax),
                }
            },

            Token::number(_) | Token::operator(_) => {
                Ok(Some(evaluate(&parse(scanner, &self.variables)?)?))
            },

            _ => Err(CalcError::invalid_syntax),
        }
    }
}

/// Abandons the rest of a failed statement, up to its terminator.
fn skip_statement<S: Scanner>(scanner: &mut S) {
    while !scanner.get_current().ends_statement() {
        scanner.advance();
    }
}
