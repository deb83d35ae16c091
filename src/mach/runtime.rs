use super::{Opcode, Session, Val, HELP};
use crate::error;
use crate::lang::{lex, literal, Error, Token, Word};
use std::rc::Rc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Longest the pending token list may grow through expansion.
pub const MAX_PENDING: usize = 1 << 20;

/// ## Events for the front end

#[derive(Debug, PartialEq)]
pub enum Event {
    /// The line is finished; ready for more input.
    Stopped,
    /// The cycle budget ran out with tokens still pending.
    Running,
    /// The line was aborted. Changes made before the error remain.
    Error(Error),
    /// Text for the user, e.g. from `help`.
    Print(String),
    /// `exit` was executed.
    Exit,
}

/// ## Line evaluator
///
/// Tokens of the current line wait in `pending` in reverse order, so the
/// next token to run is at the back. Macro invocations and `repeat` push
/// their expansion back onto the list, where it is classified and
/// executed like the rest of the line. Executed tokens are gone.

#[derive(Debug, Default)]
pub struct Runtime {
    session: Session,
    pending: Vec<Rc<str>>,
    interrupted: bool,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Replaces any pending work with a new line. Returns false if the
    /// line had no tokens.
    pub fn enter(&mut self, line: &str) -> bool {
        self.pending = lex(line);
        self.pending.reverse();
        self.interrupted = false;
        !self.pending.is_empty()
    }

    /// Abandon the pending line. The next `execute` reports it.
    pub fn interrupt(&mut self) {
        if !self.pending.is_empty() {
            debug!(pending = self.pending.len(), "interrupted");
            self.pending.clear();
            self.interrupted = true;
        }
    }

    /// Execute at most `cycles` tokens of the pending line.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.interrupted {
            self.interrupted = false;
            return Event::Error(error!(Break));
        }
        for _ in 0..cycles {
            let raw = match self.pending.pop() {
                Some(raw) => raw,
                None => return Event::Stopped,
            };
            match self.step(raw) {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => {
                    debug!(%error, "aborting line");
                    self.pending.clear();
                    return Event::Error(error);
                }
            }
        }
        if self.pending.is_empty() {
            Event::Stopped
        } else {
            Event::Running
        }
    }

    /// Classification pipeline: variable, macro, directive or command,
    /// then numeric literal.
    fn classify(&self, raw: &Rc<str>) -> Result<Token> {
        if let Some(val) = self.session.var.fetch(raw) {
            return Ok(Token::Literal(val));
        }
        if let Some(body) = self.session.macros.fetch(raw) {
            return Ok(Token::Invoke(raw.clone(), body));
        }
        if let Some(token) = Token::from_string(raw) {
            return Ok(token);
        }
        literal(raw).map(Token::Literal)
    }

    fn step(&mut self, raw: Rc<str>) -> Result<Option<Event>> {
        let token = self.classify(&raw)?;
        trace!(pending = self.pending.len(), token = %raw, "dispatch");
        match token {
            Token::Repeat => self.repeat()?,
            Token::Macro => {
                let definition: Vec<Rc<str>> = self.pending.drain(..).rev().collect();
                let name = self.session.macros.define(&definition)?;
                debug!(%name, "macro defined");
            }
            Token::Invoke(name, body) => {
                debug!(%name, len = body.len(), "expanding macro");
                self.expand(body.len(), body.iter().rev().cloned())?;
            }
            Token::Assign(name) => self.session.var.store(&name, &mut self.session.stack)?,
            Token::DupN(n) => self.session.stack.duplicate(n)?,
            Token::Word(Word::Help) => return Ok(Some(Event::Print(HELP.to_string()))),
            Token::Word(Word::Exit) => {
                self.pending.clear();
                return Ok(Some(Event::Exit));
            }
            Token::Word(word) => self.apply(word)?,
            Token::Literal(val) => self.session.stack.push(val),
        }
        Ok(None)
    }

    /// `n repeat t` becomes `t t ... t` with `n` copies.
    fn repeat(&mut self) -> Result<()> {
        let action = match self.pending.last() {
            Some(action) => action.clone(),
            None => {
                return Err(error!(MissingArgument; "Action to repeat is required after \"repeat\" command"))
            }
        };
        let count = match self.session.stack.last() {
            Some(Val::Integer(n)) if *n >= 1 => usize::try_from(*n).unwrap_or(usize::MAX),
            Some(_) => return Err(error!(InvalidRepeatCount)),
            None => return Err(error!(InvalidRepeatCount; "Integer number of repeats is required")),
        };
        debug!(%action, count, "expanding repeat");
        self.pending.pop();
        self.expand(count, std::iter::repeat(action).take(count))?;
        self.session.stack.pop()?;
        Ok(())
    }

    /// Push `count` tokens, given last to run first, onto the pending list.
    fn expand<I>(&mut self, count: usize, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = Rc<str>>,
    {
        if self.pending.len().saturating_add(count) > MAX_PENDING {
            return Err(error!(OutOfMemory; "Expansion is too large"));
        }
        self.pending.extend(tokens);
        Ok(())
    }

    /// Operands are popped before the call and pushed back if it fails.
    fn apply(&mut self, word: Word) -> Result<()> {
        let opcode = match Opcode::for_word(word) {
            Some(opcode) => opcode,
            None => return Err(error!(UnparsableToken)),
        };
        let stack_len = self.session.stack.len();
        if stack_len < opcode.arity() {
            return Err(match opcode.arity() {
                1 => error!(MissingArgument; "This operation requires one argument"),
                _ => error!(MissingArgument; "This operation requires two arguments"),
            });
        }
        let session = &mut self.session;
        let result = match opcode {
            Opcode::Nullary(f) => f(session).and_then(normalized),
            Opcode::Unary(f) => {
                let val = session.stack.pop()?;
                let result = f(session, val).and_then(normalized);
                if result.is_err() {
                    session.stack.push(val);
                }
                result
            }
            Opcode::Binary(f) => {
                let (lhs, rhs) = session.stack.pop_2()?;
                let result = f(session, lhs, rhs).and_then(normalized);
                if result.is_err() {
                    session.stack.push(lhs);
                    session.stack.push(rhs);
                }
                result
            }
        }?;
        if let Some(val) = result {
            session.stack.push(val);
        }
        Ok(())
    }
}

fn normalized(result: Option<Val>) -> Result<Option<Val>> {
    match result {
        Some(Val::Float(n)) => Val::normalize(n).map(Some),
        other => Ok(other),
    }
}
