use std::io::{self, BufRead, Write};
use std::iter::Peekable;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    number(f64),
    identifier(String),
    operator(char),
    print,
    end_statement,
    end_of_input,
    other(char),
}

impl Token {
    pub fn ends_statement(&self) -> bool {
        matches!(self, Token::end_statement | Token::end_of_input)
    }
}

/// One token of lookahead over a token source.
pub trait Scanner {
    fn get_current(&mut self) -> &Token;
    fn advance(&mut self);

    fn is_valid(&mut self) -> bool {
        *self.get_current() != Token::end_of_input
    }
}

static END_OF_INPUT: Token = Token::end_of_input;

/// Replays tokens that were produced elsewhere.
pub struct SimpleScanner {
    tokens: Vec<Token>,
    index: usize,
}

impl SimpleScanner {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self{tokens, index: 0}
    }
}

impl Scanner for SimpleScanner {
    fn get_current(&mut self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&END_OF_INPUT)
    }

    fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }
}

/// Tokenizes a character stream on demand.
///
/// The current token is only read from the stream the first time it is
/// asked for after an `advance`, so a line-oriented source is not polled
/// for the next line until the caller actually needs it.
pub struct CharScanner<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    token: Option<Token>,
}

impl<I: Iterator<Item = char>> CharScanner<I> {
    pub fn new(source: I) -> Self {
        Self {
            chars: source.peekable(),
            token: None,
        }
    }
}

impl<I: Iterator<Item = char>> Scanner for CharScanner<I> {
    fn get_current(&mut self) -> &Token {
        let chars = &mut self.chars;
        self.token.get_or_insert_with(|| next_token(chars))
    }

    fn advance(&mut self) {
        // a token nobody looked at still has to be read off the stream
        if self.token.take().is_none() {
            next_token(&mut self.chars);
        }
    }
}

fn is_operator(character: char) -> bool {
    matches!(character, '+' | '-' | '*' | '/' | '=' | '>' | '<' | '|' | '&' | '(' | ')')
}

fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

fn is_line_end(character: char) -> bool {
    character == '\n' || character == '\r'
}

fn take_while<I, P>(chars: &mut Peekable<I>, predicate: P) -> String
where
    I: Iterator<Item = char>,
    P: Fn(char) -> bool,
{
    let mut text = String::new();
    while let Some(c) = chars.next_if(|c| predicate(*c)) {
        text.push(c);
    }
    text
}

/// Converts the longest valid prefix, `0.0` when there is none.
fn parse_number(text: &str) -> f64 {
    let end = text.match_indices('.').nth(1).map_or(text.len(), |(index, _)| index);
    text[..end].parse().unwrap_or(0.0)
}

fn identifier_or_keyword(text: String) -> Token {
    if text == "print" {
        Token::print
    } else {
        Token::identifier(text)
    }
}

pub fn next_token<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> Token {
    loop {
        take_while(chars, |c| c.is_ascii_whitespace());

        let Some(&first) = chars.peek() else {
            return Token::end_of_input;
        };

        if first == '#' {
            take_while(chars, |c| !is_line_end(c));
        } else if first.is_ascii_alphabetic() {
            return identifier_or_keyword(take_while(chars, |c| c.is_ascii_alphanumeric()));
        } else if is_digit_or_dot(first) {
            return Token::number(parse_number(&take_while(chars, is_digit_or_dot)));
        } else {
            chars.next();
            return match first {
                ';' => Token::end_statement,
                c if is_operator(c) => Token::operator(c),
                c => Token::other(c),
            };
        }
    }
}

pub const PROMPT: &str = "> ";

/// Characters read one line at a time, optionally announcing each read
/// with a prompt. Bytes that are not UTF-8 come through as U+FFFD. A failed
/// read or prompt write ends the stream and is kept for `take_failure`.
pub struct LineInput<R: BufRead, W: Write> {
    reader: R,
    pending: std::vec::IntoIter<char>,
    prompt: Option<W>,
    finished: bool,
    failure: Option<io::Error>,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt: Option<W>) -> Self {
        Self {
            reader,
            pending: Vec::new().into_iter(),
            prompt,
            finished: false,
            failure: None,
        }
    }

    /// The I/O error that ended the stream, if it did not end at EOF.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }

    fn show_prompt(&mut self) -> io::Result<()> {
        if let Some(prompt) = &mut self.prompt {
            write!(prompt, "{PROMPT}")?;
            prompt.flush()?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.show_prompt()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        if !line.ends_with('\n') {
            line.push('\n');
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Iterator for LineInput<R, W> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.pending.next() {
                return Some(c);
            }
            if self.finished {
                return None;
            }

            match self.read_line() {
                Ok(Some(line)) => self.pending = line.chars().collect::<Vec<_>>().into_iter(),
                Ok(None) => self.finished = true,
                Err(e) => {
                    self.finished = true;
                    self.failure = Some(e);
                },
            }
        }
    }
}
