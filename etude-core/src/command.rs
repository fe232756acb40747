use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::numeric::IntType;

/// One playground command, parsed from a line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    New(usize),
    Push(Vec<IntType>),
    Pop,
    Top,
    Show,
    Info,
    Help,
    Quit,
}

lazy_static! {
    static ref RE_WS: Regex = Regex::new(r"^\s+").unwrap();
    static ref RE_INT: Regex = Regex::new(r"^-?[0-9]+").unwrap();
    static ref RE_WORD: Regex = Regex::new(r"^[a-zA-Z]+").unwrap();
}

#[derive(Debug, PartialEq)]
enum Tok {
    Word(String),
    Int(IntType),
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn eat_whitespace(&mut self) {
        if let Some(mat) = RE_WS.find(&self.input[self.pos..]) {
            self.pos += mat.end();
        }
    }

    fn next_token(&mut self) -> Result<Option<Tok>, CommandError> {
        self.eat_whitespace();
        if self.pos >= self.input.len() {
            return Ok(None);
        }
        if let Some(mat) = RE_INT.find(&self.input[self.pos..]) {
            self.pos += mat.end();
            return match mat.as_str().parse::<IntType>() {
                Ok(n) => Ok(Some(Tok::Int(n))),
                Err(e) => Err(CommandError::new(format!("int error: {}", e))),
            };
        }
        if let Some(mat) = RE_WORD.find(&self.input[self.pos..]) {
            self.pos += mat.end();
            return Ok(Some(Tok::Word(mat.as_str().to_lowercase())));
        }
        let c = self.input[self.pos..].chars().next().unwrap_or('?');
        Err(CommandError::new(format!("unexpected character {:?}", c)))
    }

    fn tokens(mut self) -> Result<Vec<Tok>, CommandError> {
        let mut toks = vec![];
        while let Some(tok) = self.next_token()? {
            toks.push(tok);
        }
        Ok(toks)
    }
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let toks = Scanner::new(line).tokens()?;
    let (head, rest) = match toks.split_first() {
        Some((Tok::Word(w), rest)) => (w.as_str(), rest),
        Some((Tok::Int(_), _)) => {
            return Err(CommandError::new(
                "commands start with a word, try help".to_string(),
            ))
        }
        None => return Err(CommandError::new("empty command".to_string())),
    };
    match head {
        "new" => match rest {
            [Tok::Int(n)] if *n >= 0 => Ok(Command::New(*n as usize)),
            _ => Err(CommandError::new("usage: new <capacity>".to_string())),
        },
        "push" => {
            if rest.is_empty() {
                return Err(CommandError::new(
                    "push needs at least one integer".to_string(),
                ));
            }
            let mut values = Vec::with_capacity(rest.len());
            for tok in rest {
                match tok {
                    Tok::Int(n) => values.push(*n),
                    Tok::Word(w) => {
                        return Err(CommandError::new(format!(
                            "push takes integers, got {}",
                            w
                        )))
                    }
                }
            }
            Ok(Command::Push(values))
        }
        "pop" => no_args(rest, Command::Pop, head),
        "top" | "peek" => no_args(rest, Command::Top, head),
        "show" => no_args(rest, Command::Show, head),
        "info" => no_args(rest, Command::Info, head),
        "help" => no_args(rest, Command::Help, head),
        "quit" | "exit" => no_args(rest, Command::Quit, head),
        _ => Err(CommandError::new(format!(
            "unknown command {}, try help",
            head
        ))),
    }
}

fn no_args(rest: &[Tok], command: Command, name: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::new(format!("{} takes no arguments", name)))
    }
}

#[derive(Debug, PartialEq)]
pub struct CommandError {
    reason: String,
}

impl CommandError {
    pub fn new(reason: String) -> Self {
        Self { reason }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CommandError: {}", self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_parse(input: &str, expected: Command) {
        assert_eq!(expected, parse(input).unwrap());
    }

    #[test]
    fn test_parse_1() {
        test_parse("new 5", Command::New(5));
        test_parse("new 0", Command::New(0));
    }

    #[test]
    fn test_parse_2() {
        test_parse("push 10", Command::Push(vec![10]));
        test_parse("push 1 2 -3", Command::Push(vec![1, 2, -3]));
    }

    #[test]
    fn test_parse_3() {
        test_parse("pop", Command::Pop);
        test_parse("top", Command::Top);
        test_parse("peek", Command::Top);
        test_parse("show", Command::Show);
        test_parse("info", Command::Info);
        test_parse("help", Command::Help);
    }

    #[test]
    fn test_parse_4() {
        test_parse("quit", Command::Quit);
        test_parse("exit", Command::Quit);
    }

    #[test]
    fn test_parse_5() {
        test_parse("  PUSH   7  ", Command::Push(vec![7]));
        test_parse("Pop", Command::Pop);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
        assert!(parse("nonsense").is_err());
        assert!(parse("push").is_err());
        assert!(parse("push x").is_err());
        assert!(parse("pop 3").is_err());
        assert!(parse("new").is_err());
        assert!(parse("new -1").is_err());
        assert!(parse("new 2 3").is_err());
        assert!(parse("7").is_err());
        assert!(parse("push 1 @").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_int() {
        assert!(parse("push 99999999999999999999").is_err());
    }
}
