use std::fmt;

/// Shape of the leading command-line token.
///
/// Exactly one shape applies to any token: a dash followed by a digit is
/// `Numeric`, a dash followed by a letter is `TypeOnly` unless a digit
/// comes right after the letter, which makes it `Combined`. Everything
/// else, including the bare token `-`, is `Plain`.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenShape {
    Numeric(String),
    TypeOnly(char),
    Combined(char, String),
    Plain,
}

pub fn classify(token: &str) -> TokenShape {
    let mut chars = token.chars();
    if chars.next() != Some('-') {
        return TokenShape::Plain;
    }
    let letter = match chars.next() {
        Some(c) => c,
        None => return TokenShape::Plain,
    };
    let rest = chars.as_str();
    if letter.is_ascii_digit() {
        TokenShape::Numeric(token[1..].to_string())
    } else if rest.starts_with(|c: char| c.is_ascii_digit()) {
        TokenShape::Combined(letter, rest.to_string())
    } else {
        TokenShape::TypeOnly(letter)
    }
}

/// A count as it arrived on the command line. Validation happens later,
/// so a token that is not an integer is carried verbatim for error
/// messages to echo back.
#[derive(Debug, Clone, PartialEq)]
pub enum Count {
    Value(i64),
    Raw(String),
}

impl Count {
    pub fn parse(token: &str) -> Count {
        token
            .parse::<i64>()
            .map(Count::Value)
            .unwrap_or_else(|_| Count::Raw(token.to_string()))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Value(n) => write!(f, "{}", n),
            Count::Raw(token) => write!(f, "{}", token),
        }
    }
}

/// Normalized invocation: mode-driving option letter, requested count,
/// and the files to process in output order.
///
/// `option` is whatever letter the leading token carried; rejecting
/// letters other than `n`/`c` is the engine's job, not the parser's.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub option: char,
    pub count: Count,
    pub files: Vec<String>,
}

/// Lexical classification only: never fails, never validates. The
/// returned request is complete for any token list, empty included.
pub fn parse(args: &[String]) -> Request {
    let shape = match args.first() {
        Some(token) => classify(token),
        None => TokenShape::Plain,
    };
    match shape {
        TokenShape::Numeric(raw) => Request {
            option: 'n',
            count: Count::parse(&raw),
            files: args[1..].to_vec(),
        },
        TokenShape::TypeOnly(letter) => Request {
            option: letter,
            count: match args.get(1) {
                Some(token) => Count::parse(token),
                None => Count::Raw(String::new()),
            },
            files: args.iter().skip(2).cloned().collect(),
        },
        TokenShape::Combined(letter, raw) => Request {
            option: letter,
            count: Count::parse(&raw),
            files: args[1..].to_vec(),
        },
        TokenShape::Plain => Request {
            option: 'n',
            count: Count::Value(10),
            files: args.to_vec(),
        },
    }
}
