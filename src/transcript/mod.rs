// Styled output log shared by the front-ends

/// How a transcript line should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Echo of what the user typed, prompt included
    Input,
    Output,
    Error,
    /// Banners and shell notices
    Info,
}

/// A line of terminal output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub text: String,
    pub style: LineStyle,
}

/// Append-only terminal output, cleared only by the `clear` command
#[derive(Debug, Clone)]
pub struct Transcript {
    pub lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Append `text`, one transcript line per `\n`-separated piece
    pub fn push(&mut self, text: &str, style: LineStyle) {
        for piece in text.split('\n') {
            self.lines.push(TranscriptLine {
                text: piece.to_string(),
                style,
            });
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of every line, for the line-based front-end and tests
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.text.clone()).collect()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_text_splits() {
        let mut transcript = Transcript::new();
        transcript.push("a\nb", LineStyle::Info);
        assert_eq!(transcript.get_output(), vec!["a", "b"]);
        assert!(transcript.lines.iter().all(|l| l.style == LineStyle::Info));
    }

    #[test]
    fn test_clear() {
        let mut transcript = Transcript::new();
        transcript.push("x", LineStyle::Output);
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
