//! Cursor-aware text buffer.

use crate::error::CodeBufferError;

/// Text content plus a cursor ("dot") measured in bytes.
///
/// Invariant: `dot <= content.len()` and `dot` lies on a char boundary. The fields
/// are private so every mutation goes through a method that keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeBuffer {
    content: String,
    dot: usize,
}

impl CodeBuffer {
    pub fn new(content: impl Into<String>, dot: usize) -> Result<Self, CodeBufferError> {
        let content = content.into();
        check_dot(&content, dot)?;
        Ok(Self { content, dot })
    }

    /// A buffer with the cursor at the end of `content`.
    pub fn at_end(content: impl Into<String>) -> Self {
        let content = content.into();
        let dot = content.len();
        Self { content, dot }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn dot(&self) -> usize {
        self.dot
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn set_dot(&mut self, dot: usize) -> Result<(), CodeBufferError> {
        check_dot(&self.content, dot)?;
        self.dot = dot;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.dot = 0;
    }

    pub fn insert_at_dot(&mut self, text: &str) {
        self.content.insert_str(self.dot, text);
        self.dot += text.len();
    }

    /// Removes the character ending at the dot. Returns `false` at the start of the buffer.
    pub fn delete_before_dot(&mut self) -> bool {
        let Some(last) = self.content[..self.dot].chars().next_back() else {
            return false;
        };
        let start = self.dot - last.len_utf8();
        self.content.replace_range(start..self.dot, "");
        self.dot = start;
        true
    }

    /// Replaces the `len` bytes ending at the dot with `text` and moves the dot past it.
    pub fn replace_before_dot(&mut self, len: usize, text: &str) -> Result<(), CodeBufferError> {
        let start = self
            .dot
            .checked_sub(len)
            .ok_or(CodeBufferError::DotOutOfRange {
                dot: len,
                len: self.dot,
            })?;
        if !self.content.is_char_boundary(start) {
            return Err(CodeBufferError::NotCharBoundary { dot: start });
        }
        self.content.replace_range(start..self.dot, text);
        self.dot = start + text.len();
        Ok(())
    }

    /// Replaces the whole content and puts the dot at its end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        *self = Self::at_end(content);
    }
}

fn check_dot(content: &str, dot: usize) -> Result<(), CodeBufferError> {
    if dot > content.len() {
        return Err(CodeBufferError::DotOutOfRange {
            dot,
            len: content.len(),
        });
    }
    if !content.is_char_boundary(dot) {
        return Err(CodeBufferError::NotCharBoundary { dot });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CodeBuffer;
    use crate::error::CodeBufferError;
    use pretty_assertions::assert_eq;

    fn buf(content: &str, dot: usize) -> CodeBuffer {
        CodeBuffer::new(content, dot).expect("valid buffer")
    }

    #[test]
    fn insert_splices_at_dot() {
        let mut b = buf("ecto", 2);
        b.insert_at_dot("h");
        assert_eq!(b, buf("echto", 3));
        b.insert_at_dot("é");
        assert_eq!(b, buf("echéto", 5));
    }

    #[test]
    fn backspace_removes_a_whole_character() {
        let mut b = buf("café", 5);
        assert!(b.delete_before_dot());
        assert_eq!(b, buf("caf", 3));
    }

    #[test]
    fn backspace_in_the_middle() {
        let mut b = buf("abc", 2);
        assert!(b.delete_before_dot());
        assert_eq!(b, buf("ac", 1));
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut b = buf("abc", 0);
        assert!(!b.delete_before_dot());
        assert_eq!(b, buf("abc", 0));
    }

    #[test]
    fn dot_must_be_in_range_and_on_a_boundary() {
        assert_eq!(
            CodeBuffer::new("ab", 3),
            Err(CodeBufferError::DotOutOfRange { dot: 3, len: 2 })
        );
        assert_eq!(
            CodeBuffer::new("é", 1),
            Err(CodeBufferError::NotCharBoundary { dot: 1 })
        );
        let mut b = buf("é", 0);
        assert!(b.set_dot(1).is_err());
        assert_eq!(b.dot(), 0);
    }

    #[test]
    fn replace_before_dot_moves_dot_past_replacement() {
        let mut b = buf("xy ex z", 5);
        b.replace_before_dot(2, "example").expect("valid replace");
        assert_eq!(b, buf("xy example z", 10));
    }

    #[test]
    fn replace_before_dot_rejects_split_characters() {
        let mut b = buf("aé", 3);
        assert!(b.replace_before_dot(1, "x").is_err());
        assert!(b.replace_before_dot(4, "x").is_err());
        assert_eq!(b, buf("aé", 3));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(buf("ab", 1), buf("ab", 1));
        assert_ne!(buf("ab", 1), buf("ab", 2));
    }
}
