use super::{Macros, Radix, Stack, Val, Var};

/// ## Session state
///
/// Everything a line of input can change. Lives as long as the process.

#[derive(Debug, Default)]
pub struct Session {
    pub stack: Stack<Val>,
    pub var: Var,
    pub macros: Macros,
    pub radix: Radix,
    pub vertical: bool,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    pub fn clear_vars(&mut self) {
        self.var.clear();
    }

    pub fn clear_macros(&mut self) {
        self.macros.clear();
    }

    /// Stack, variables and macros. Display settings are kept.
    pub fn clear_all(&mut self) {
        self.clear_stack();
        self.clear_vars();
        self.clear_macros();
    }

    pub fn toggle_vertical(&mut self) {
        self.vertical = !self.vertical;
    }

    pub fn render_stack(&self) -> String {
        let separator = if self.vertical { "\n" } else { " " };
        self.stack
            .iter()
            .map(|v| self.radix.format(*v))
            .collect::<Vec<String>>()
            .join(separator)
    }

    /// `x=1, y=2`
    pub fn render_vars(&self) -> String {
        self.var
            .iter()
            .map(|(name, val)| format!("{}={}", name, val))
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// `kib: 1024 *, sq: dup *`
    pub fn render_macros(&self) -> String {
        self.macros
            .iter()
            .map(|(name, body)| format!("{}: {}", name, body.join(" ")))
            .collect::<Vec<String>>()
            .join(", ")
    }
}
