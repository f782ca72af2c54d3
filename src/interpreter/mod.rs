pub mod context;
pub mod environment;
pub mod error;
mod tree;

pub use environment::Environment;
pub use tree::{evaluate, TreeWalkInterpreter};

pub trait SystemContext {
    fn writeln(&mut self, text: &str);
    fn ewriteln(&mut self, text: &str);
}
