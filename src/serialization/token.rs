use super::core::{GeomResult, GeometryError};

/// A half-open span `[start, end)` over the body of a WKT string.
///
/// Construction trims surrounding whitespace and strips one matching pair of
/// enclosing parentheses, so a token always exposes bare content. Child
/// tokens borrow the same source text; nothing is copied until a leaf
/// coordinate word is parsed.
#[derive(Clone, Copy, Debug)]
pub struct WktToken<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> WktToken<'a> {
    /// Build a token over `text[start..end]`, trimming whitespace and one
    /// enclosing paren pair.
    ///
    /// The trailing `)` is only stripped when a leading `(` was, so a span
    /// like `POINT (1 1)` keeps its inner parentheses intact.
    pub fn new(text: &'a str, mut start: usize, mut end: usize) -> Self {
        let bytes = text.as_bytes();
        while start < end && bytes[start].is_ascii_whitespace() {
            start += 1;
        }
        let mut removed_leading_paren = false;
        if start < end && bytes[start] == b'(' {
            start += 1;
            removed_leading_paren = true;
        }
        while end > start && bytes[end - 1].is_ascii_whitespace() {
            end -= 1;
        }
        if end > start && bytes[end - 1] == b')' && removed_leading_paren {
            end -= 1;
        }
        Self { text, start, end }
    }

    /// A token with no content
    pub fn empty(text: &'a str) -> Self {
        Self {
            text,
            start: 0,
            end: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The trimmed, paren-stripped substring this token spans
    pub fn text(&self) -> &'a str {
        &self.text[self.start..self.end]
    }

    /// Iterate over the top-level comma-separated sub-tokens.
    ///
    /// Splitting honors parenthesis nesting: a comma only separates children
    /// at nesting depth zero. The iterator derives purely from the stored
    /// span, so it can be restarted by calling `children` again. A token
    /// whose content has no top-level comma yields exactly one child equal
    /// to itself minus enclosing parens.
    pub fn children(&self) -> Children<'a> {
        Children {
            text: self.text,
            end: self.end,
            cur_start: self.start,
            cur_end: self.start,
            nesting: 0,
            done: self.is_empty(),
        }
    }

    /// Iterate over the whitespace-separated numeric words of this token
    pub fn coords(self) -> impl Iterator<Item = GeomResult<f64>> + 'a {
        self.text().split_whitespace().map(|word| {
            word.parse::<f64>()
                .map_err(|_| GeometryError::NumericFormat(String::from(word)))
        })
    }
}

impl std::fmt::Display for WktToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Lazy iterator over a token's top-level comma-separated children
pub struct Children<'a> {
    text: &'a str,
    end: usize,
    cur_start: usize,
    cur_end: usize,
    nesting: i32,
    done: bool,
}

impl<'a> Iterator for Children<'a> {
    type Item = WktToken<'a>;

    fn next(&mut self) -> Option<WktToken<'a>> {
        if self.done {
            return None;
        }
        let bytes = self.text.as_bytes();
        loop {
            if self.cur_end + 1 >= self.end {
                self.done = true;
                return Some(WktToken::new(self.text, self.cur_start, self.end));
            }
            match bytes[self.cur_end] {
                b'(' => self.nesting += 1,
                b')' => self.nesting -= 1,
                b',' if self.nesting == 0 => {
                    let child = WktToken::new(self.text, self.cur_start, self.cur_end);
                    self.cur_start = self.cur_end + 1;
                    while self.cur_start < self.end
                        && bytes[self.cur_start].is_ascii_whitespace()
                    {
                        self.cur_start += 1;
                    }
                    self.cur_end = self.cur_start;
                    return Some(child);
                }
                _ => {}
            }
            self.cur_end += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> WktToken<'_> {
        WktToken::new(s, 0, s.len())
    }

    #[test]
    fn test_trim_and_paren_strip() {
        let t = token("  (10 10, 20 20)  ");
        assert_eq!(t.text(), "10 10, 20 20");

        // No leading paren, trailing paren kept
        let t = token("POINT (1 1)");
        assert_eq!(t.text(), "POINT (1 1)");

        // Only one enclosing pair is removed
        let t = token("((1 2))");
        assert_eq!(t.text(), "(1 2)");
    }

    #[test]
    fn test_empty_tokens() {
        assert!(token("").is_empty());
        assert!(WktToken::empty("whatever").is_empty());
        assert_eq!(token("()").text(), "");
        assert!(token("()").children().next().is_none());
    }

    #[test]
    fn test_split_nested_groups() {
        let t = token("(10 10, 20 20),(30 30, 40 40)");
        let children: Vec<WktToken> = t.children().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].text(), "10 10, 20 20");
        assert_eq!(children[1].text(), "30 30, 40 40");

        // Each child splits further into its coordinate groups
        for child in children {
            let groups: Vec<WktToken> = child.children().collect();
            assert_eq!(groups.len(), 2);
        }
    }

    #[test]
    fn test_no_comma_yields_self() {
        let t = token("30 10");
        let children: Vec<WktToken> = t.children().collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].text(), "30 10");
    }

    #[test]
    fn test_children_restartable() {
        let t = token("1 1, 2 2, 3 3");
        assert_eq!(t.children().count(), 3);
        assert_eq!(t.children().count(), 3);
    }

    #[test]
    fn test_coords() {
        let words: GeomResult<Vec<f64>> = token("30 10").coords().collect();
        assert_eq!(words.unwrap(), vec![30.0, 10.0]);

        let words: GeomResult<Vec<f64>> = token("  1.5   -2e3  ").coords().collect();
        assert_eq!(words.unwrap(), vec![1.5, -2000.0]);

        let empty: GeomResult<Vec<f64>> = token("").coords().collect();
        assert!(empty.unwrap().is_empty());
    }

    #[test]
    fn test_coords_invalid_word() {
        let result: GeomResult<Vec<f64>> = token("1 abc").coords().collect();
        match result {
            Err(GeometryError::NumericFormat(word)) => assert_eq!(word, "abc"),
            other => panic!("Expected a numeric format error, got {other:?}"),
        }
    }

    #[test]
    fn test_collection_member_spans() {
        let t = token("POINT (1 1), LINESTRING (1 1, 2 2)");
        let members: Vec<String> = t.children().map(|c| c.to_string()).collect();
        assert_eq!(members, vec!["POINT (1 1)", "LINESTRING (1 1, 2 2)"]);
    }
}
