use super::DumpError;

/// An element of an XML document. Attributes are skipped, and the text of an element is the
/// concatenation of its character data (outside of child elements).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Element {
    pub(super) name: String,
    pub(super) children: Vec<Element>,
    pub(super) text: String,
}

impl Element {
    pub(super) fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    pub(super) fn children_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// Parses the root element of an XML document.
///
/// Supports the subset of XML in which constraint dumps are written: a prolog, comments,
/// processing instructions, a doctype, CDATA sections, nested elements with attributes, and the
/// predefined and numeric character references.
pub(super) struct XmlParser<'src> {
    source: &'src [u8],
    position: usize,
}

impl<'src> XmlParser<'src> {
    pub(super) fn new(source: &'src [u8]) -> Self {
        XmlParser {
            source,
            position: 0,
        }
    }

    pub(super) fn parse_document(mut self) -> Result<Element, DumpError> {
        self.skip_misc()?;
        if self.peek() != Some(b'<') {
            return Err(self.error("expected the root element"));
        }

        let root = self.parse_element()?;

        self.skip_misc()?;
        if self.position < self.source.len() {
            return Err(self.error("unexpected content after the root element"));
        }

        Ok(root)
    }

    /// Skips whitespace, comments, processing instructions and the doctype.
    fn skip_misc(&mut self) -> Result<(), DumpError> {
        loop {
            self.skip_whitespace();

            if self.starts_with(b"<?") {
                self.skip_past(b"?>")?;
            } else if self.starts_with(b"<!--") {
                self.skip_past(b"-->")?;
            } else if self.starts_with(b"<!DOCTYPE") {
                self.skip_past(b">")?;
            } else {
                return Ok(());
            }
        }
    }

    /// Parses an element, starting at its `<`.
    fn parse_element(&mut self) -> Result<Element, DumpError> {
        self.expect(b"<")?;
        let name = self.parse_name()?;
        let is_empty = self.skip_attributes()?;

        let mut element = Element {
            name,
            children: Vec::new(),
            text: String::new(),
        };
        if is_empty {
            return Ok(element);
        }

        loop {
            if self.starts_with(b"</") {
                self.position += 2;
                let closing_name = self.parse_name()?;
                if closing_name != element.name {
                    return Err(self.error(format!(
                        "expected closing tag of '{}', got '{closing_name}'",
                        element.name
                    )));
                }
                self.skip_whitespace();
                self.expect(b">")?;

                return Ok(element);
            } else if self.starts_with(b"<!--") {
                self.skip_past(b"-->")?;
            } else if self.starts_with(b"<![CDATA[") {
                self.position += b"<![CDATA[".len();
                let start = self.position;
                self.skip_past(b"]]>")?;
                element
                    .text
                    .push_str(&self.text_between(start, self.position - 3)?);
            } else if self.starts_with(b"<?") {
                self.skip_past(b"?>")?;
            } else if self.starts_with(b"<") {
                let child = self.parse_element()?;
                element.children.push(child);
            } else if self.peek().is_some() {
                let text = self.parse_character_data()?;
                element.text.push_str(&text);
            } else {
                return Err(self.error(format!("unclosed element '{}'", element.name)));
            }
        }
    }

    fn parse_name(&mut self) -> Result<String, DumpError> {
        let start = self.position;
        while self
            .peek()
            .is_some_and(|byte| !byte.is_ascii_whitespace() && !b"/>=<".contains(&byte))
        {
            self.position += 1;
        }

        if start == self.position {
            return Err(self.error("expected a name"));
        }

        self.text_between(start, self.position)
    }

    /// Skips the attributes of a start tag up to and including its `>`. Returns whether the tag
    /// was an empty-element tag.
    fn skip_attributes(&mut self) -> Result<bool, DumpError> {
        loop {
            match self.peek() {
                Some(b'>') => {
                    self.position += 1;
                    return Ok(false);
                }
                Some(b'/') => {
                    self.position += 1;
                    self.expect(b">")?;
                    return Ok(true);
                }
                Some(quote @ (b'"' | b'\'')) => {
                    self.position += 1;
                    self.skip_past(&[quote])?;
                }
                Some(_) => self.position += 1,
                None => return Err(self.error("unclosed start tag")),
            }
        }
    }

    fn parse_character_data(&mut self) -> Result<String, DumpError> {
        let mut text = String::new();
        let mut start = self.position;

        while let Some(byte) = self.peek() {
            match byte {
                b'<' => break,
                b'&' => {
                    text.push_str(&self.text_between(start, self.position)?);
                    text.push(self.parse_reference()?);
                    start = self.position;
                }
                _ => self.position += 1,
            }
        }

        text.push_str(&self.text_between(start, self.position)?);
        Ok(text)
    }

    /// Parses a character reference such as `&amp;` or `&#65;`, starting at its `&`.
    fn parse_reference(&mut self) -> Result<char, DumpError> {
        let start = self.position;
        self.skip_past(b";")?;
        let reference = self.text_between(start + 1, self.position - 1)?;

        let character = match reference.as_str() {
            "lt" => Some('<'),
            "gt" => Some('>'),
            "amp" => Some('&'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            numeric => numeric
                .strip_prefix("#x")
                .map(|hex| u32::from_str_radix(hex, 16))
                .or_else(|| numeric.strip_prefix('#').map(str::parse::<u32>))
                .and_then(Result::ok)
                .and_then(char::from_u32),
        };

        character.ok_or_else(|| DumpError::ParseError {
            offset: start,
            reason: format!("unknown reference '&{reference};'"),
        })
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
            self.position += 1;
        }
    }

    /// Moves to just after the next occurrence of `pattern`.
    fn skip_past(&mut self, pattern: &[u8]) -> Result<(), DumpError> {
        let offset = self.source[self.position..]
            .windows(pattern.len())
            .position(|window| window == pattern)
            .ok_or_else(|| {
                self.error(format!(
                    "expected '{}'",
                    String::from_utf8_lossy(pattern)
                ))
            })?;

        self.position += offset + pattern.len();
        Ok(())
    }

    fn expect(&mut self, expected: &[u8]) -> Result<(), DumpError> {
        if !self.starts_with(expected) {
            return Err(self.error(format!(
                "expected '{}'",
                String::from_utf8_lossy(expected)
            )));
        }

        self.position += expected.len();
        Ok(())
    }

    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.source[self.position..].starts_with(prefix)
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    fn text_between(&self, start: usize, end: usize) -> Result<String, DumpError> {
        std::str::from_utf8(&self.source[start..end])
            .map(str::to_owned)
            .map_err(|_| DumpError::ParseError {
                offset: start,
                reason: "invalid utf-8".to_owned(),
            })
    }

    fn error(&self, reason: impl Into<String>) -> DumpError {
        DumpError::ParseError {
            offset: self.position,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Element, DumpError> {
        XmlParser::new(source.as_bytes()).parse_document()
    }

    #[test]
    fn nested_elements_and_text_are_parsed() {
        let root = parse(
            r#"<?xml version="1.0"?>
<!-- a dump -->
<ROOT version="2"><A>one</A><B><C>two</C></B><D/></ROOT>
"#,
        )
        .expect("valid document");

        assert_eq!("ROOT", root.name);
        assert_eq!(3, root.children.len());
        assert_eq!("one", root.child("A").expect("A").text);
        let b = root.child("B").expect("B");
        assert_eq!("two", b.child("C").expect("C").text);
        assert!(root.child("D").expect("D").children.is_empty());
    }

    #[test]
    fn references_and_cdata_are_decoded() {
        let root = parse("<A>x &lt; y &amp;&#65;&#x42;<![CDATA[<raw>]]></A>").expect("valid");

        assert_eq!("x < y &AB<raw>", root.text);
    }

    #[test]
    fn attributes_with_angle_brackets_in_quotes_are_skipped() {
        let root = parse(r#"<A note="a > b" other='/'><B/></A>"#).expect("valid document");

        assert_eq!(1, root.children.len());
    }

    #[test]
    fn mismatched_closing_tag_is_rejected() {
        assert!(matches!(
            parse("<A><B></A></B>"),
            Err(DumpError::ParseError { .. })
        ));
    }

    #[test]
    fn unclosed_element_is_rejected() {
        assert!(matches!(parse("<A><B>text"), Err(DumpError::ParseError { .. })));
    }

    #[test]
    fn content_after_the_root_is_rejected() {
        assert!(matches!(parse("<A/><B/>"), Err(DumpError::ParseError { .. })));
    }

    #[test]
    fn unknown_reference_is_rejected() {
        assert!(matches!(
            parse("<A>&nbsp;</A>"),
            Err(DumpError::ParseError { offset: 3, .. })
        ));
    }
}
