use super::{Stack, Val};
use crate::error;
use crate::lang::{is_reserved, Error};
use std::collections::BTreeMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: BTreeMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Option<Val> {
        self.vars.get(var_name).copied()
    }

    /// Pops the top of `stack` into `var_name`.
    pub fn store(&mut self, var_name: &Rc<str>, stack: &mut Stack<Val>) -> Result<()> {
        if is_reserved(var_name) {
            return Err(error!(ReservedName; format!(
                "\"{}\" is an internal command. Please choose another name",
                var_name
            )));
        }
        if stack.is_empty() {
            return Err(error!(EmptyStack; "No value to save as a variable"));
        }
        let value = stack.pop()?;
        self.vars.insert(var_name.clone(), value);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Val)> {
        self.vars.iter().map(|(k, v)| (k.as_ref(), *v))
    }
}
