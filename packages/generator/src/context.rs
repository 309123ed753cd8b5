/// Output buffer with indentation tracking, shared by every renderer.
pub struct Context {
    depth: usize,
    indent: &'static str,
    buffer: String,
}

impl Context {
    pub fn new() -> Self {
        Self {
            depth: 0,
            indent: "  ",
            buffer: String::new(),
        }
    }

    pub fn add_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append a pre-formatted multi-line block, re-indenting each line.
    pub fn add_block(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.buffer.push('\n');
            } else {
                self.add_line(line);
            }
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn get_output(self) -> String {
        self.buffer
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut ctx = Context::new();
        ctx.add_line("<div>");
        ctx.indent();
        ctx.add_line("<p>hola</p>");
        ctx.dedent();
        ctx.add_line("</div>");

        assert_eq!(ctx.get_output(), "<div>\n  <p>hola</p>\n</div>\n");
    }

    #[test]
    fn test_add_block_reindents() {
        let mut ctx = Context::new();
        ctx.indent();
        ctx.add_block("a\nb");
        assert_eq!(ctx.get_output(), "  a\n  b\n");
    }
}
