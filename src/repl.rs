use crate::interpreter::{SystemContext, TreeWalkInterpreter};

/// Line-at-a-time session over one persistent global environment.
pub struct Repl<C: SystemContext> {
    interpreter: TreeWalkInterpreter,
    context: C,
}

impl<C> Repl<C>
where
    C: SystemContext,
{
    pub fn new(context: C) -> Self {
        Self {
            interpreter: TreeWalkInterpreter::new(),
            context,
        }
    }

    /// Evaluates one line of input. Returns `false` once the session
    /// should stop, on a blank line or one containing `exit`.
    pub fn interact(&mut self, line: &str) -> bool {
        if line.trim().is_empty() || line.contains("exit") {
            return false;
        }

        match self.interpreter.run(line) {
            Ok(value) => self.context.writeln(&value.to_string()),
            Err(error) => self.context.ewriteln(&format!("Error: {error}")),
        }
        true
    }

    pub fn into_context(self) -> C {
        self.context
    }
}
