use super::SystemContext;

pub struct StdioContext;

impl SystemContext for StdioContext {
    fn writeln(&mut self, text: &str) {
        println!("{text}");
    }

    fn ewriteln(&mut self, text: &str) {
        eprintln!("{text}");
    }
}

/// Collects output in memory, errors included, in the order written.
pub struct BufferedContext {
    buffer: String,
}

impl BufferedContext {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn into_data(self) -> String {
        self.buffer
    }
}

impl Default for BufferedContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemContext for BufferedContext {
    fn writeln(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn ewriteln(&mut self, text: &str) {
        self.writeln(text);
    }
}
