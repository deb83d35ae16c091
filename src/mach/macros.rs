use crate::error;
use crate::lang::{is_reserved, Error};
use std::collections::BTreeMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Macro memory
///
/// Bodies are kept as raw tokens and resolved each time they are invoked.

#[derive(Debug, Default)]
pub struct Macros {
    macros: BTreeMap<Rc<str>, Rc<[Rc<str>]>>,
}

impl Macros {
    pub fn new() -> Macros {
        Macros::default()
    }

    pub fn clear(&mut self) {
        self.macros.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    pub fn fetch(&self, name: &str) -> Option<Rc<[Rc<str>]>> {
        self.macros.get(name).cloned()
    }

    /// Defines a macro from the tokens following `macro`: a name, then
    /// the body.
    pub fn define(&mut self, definition: &[Rc<str>]) -> Result<Rc<str>> {
        let (name, body) = match definition.split_first() {
            Some(split) => split,
            None => return Err(error!(MissingArgument; "Macro name is required after \"macro\"")),
        };
        if is_reserved(name) {
            return Err(error!(ReservedName; format!(
                "\"{}\" is an internal command. Please choose another name",
                name
            )));
        }
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(error!(InvalidName));
        }
        if body.iter().any(|t| t.as_ref() == "macro") {
            return Err(error!(NestedMacro));
        }
        self.macros.insert(name.clone(), body.into());
        Ok(name.clone())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rc<str>])> {
        self.macros.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
}
