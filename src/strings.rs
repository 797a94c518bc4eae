use crate::{
    diagnostic::{Error, Result},
    ser::{FileBlock, FileWriter},
};
use codemap::Span;
use ecow::EcoString;
use std::collections::{btree_map::Entry, BTreeMap};

/// Language codes; index 0 is the default language with an empty code.
pub const LANGUAGES: [&str; 3] = ["", "en_GB", "nl_NL"];

/// Index of `code` in the language list.
pub fn language_index(code: &str, span: Span) -> Result<usize> {
    LANGUAGES
        .iter()
        .position(|lang| *lang == code)
        .ok_or_else(|| {
            Box::new(Error::UnknownLanguage {
                span,
                code: code.into(),
            })
        })
}

#[derive(Debug, Clone)]
struct LanguageText {
    span: Span,
    text: EcoString,
}

/// A string with its name and translations.
#[derive(Debug)]
pub struct TextNode {
    pub name: EcoString,
    texts: [Option<LanguageText>; LANGUAGES.len()],
}

impl TextNode {
    pub fn new(name: EcoString) -> Self {
        Self {
            name,
            texts: Default::default(),
        }
    }

    pub fn set_text(&mut self, language: usize, span: Span, text: EcoString) {
        self.texts[language] = Some(LanguageText { span, text });
    }

    pub fn has_default_text(&self) -> bool {
        self.texts[0].is_some()
    }

    /// A span representing the node, for diagnostics.
    fn span(&self) -> Option<Span> {
        self.texts.iter().flatten().next().map(|text| text.span)
    }

    /// Take over the texts of `other`, which must not overlap.
    fn merge(&mut self, other: Self) -> Result<()> {
        for (language, text) in other.texts.into_iter().enumerate() {
            let Some(text) = text else { continue };
            match &self.texts[language] {
                Some(existing) => {
                    return Err(Box::new(Error::StringConflict {
                        name: self.name.clone(),
                        lang: LANGUAGES[language].into(),
                        first: existing.span,
                        second: text.span,
                    }))
                }
                None => self.texts[language] = Some(text),
            }
        }
        Ok(())
    }

    /// Size of this string's record in a TEXT block.
    fn size(&self) -> usize {
        let languages: usize = self
            .texts
            .iter()
            .flatten()
            .map(|text| 2 + 1 + 1 + text.text.len() + 1)
            .sum();
        let codes: usize = self
            .texts
            .iter()
            .enumerate()
            .filter(|(_, text)| text.is_some())
            .map(|(language, _)| LANGUAGES[language].len())
            .sum();
        2 + 1 + self.name.len() + 1 + languages + codes
    }

    fn save(&self, block: &mut FileBlock) {
        block.save_u16(self.size() as u16);
        block.save_u8(self.name.len() as u8 + 1);
        block.save_bytes(self.name.as_bytes());
        block.save_u8(0);
        // The default language comes last.
        let order = (1..LANGUAGES.len()).chain([0]);
        for language in order {
            let Some(text) = &self.texts[language] else { continue };
            let code = LANGUAGES[language];
            block.save_u16((2 + 1 + code.len() + 1 + text.text.len() + 1) as u16);
            block.save_u8(code.len() as u8 + 1);
            block.save_bytes(code.as_bytes());
            block.save_u8(0);
            block.save_bytes(text.text.as_bytes());
            block.save_u8(0);
        }
    }
}

/// A collection of named strings, one `TextNode` per name, ordered by name.
#[derive(Debug, Default)]
pub struct Strings {
    texts: BTreeMap<EcoString, TextNode>,
}

impl Strings {
    /// Add a text node, merging translations of an already known name.
    pub fn add(&mut self, node: TextNode) -> Result<()> {
        match self.texts.entry(node.name.clone()) {
            Entry::Vacant(vacant) => {
                vacant.insert(node);
                Ok(())
            }
            Entry::Occupied(mut occupied) => occupied.get_mut().merge(node),
        }
    }

    /// Check that every required name is present and that every string has
    /// a text in the default language.
    pub fn verify(&self, required: &[&'static str], span: Span) -> Result<()> {
        for name in required {
            if !self.texts.contains_key(*name) {
                return Err(Box::new(Error::MissingShopString { span, name }));
            }
        }
        for node in self.texts.values() {
            if !node.has_default_text() {
                return Err(Box::new(Error::MissingDefaultText {
                    span: node.span().unwrap_or(span),
                    name: node.name.clone(),
                }));
            }
        }
        Ok(())
    }

    fn size(&self) -> usize {
        self.texts.values().map(TextNode::size).sum()
    }

    /// Emit the TEXT block and return its block number.
    pub fn write(&self, writer: &mut FileWriter) -> u32 {
        let mut block = FileBlock::new("TEXT", 1, self.size());
        for node in self.texts.values() {
            node.save(&mut block);
        }
        block.check_end();
        writer.add_block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codemap::CodeMap;

    fn span() -> Span {
        let mut code_map = CodeMap::new();
        let file = code_map.add_file("test".to_owned(), "x".to_owned());
        file.span
    }

    fn text_node(name: &str, language: usize, text: &str) -> TextNode {
        let mut node = TextNode::new(name.into());
        node.set_text(language, span(), text.into());
        node
    }

    #[test]
    fn conflicting_definitions_are_rejected() {
        let mut strings = Strings::default();
        strings.add(text_node("buy", 1, "Buy")).unwrap();
        let err = strings.add(text_node("buy", 1, "Purchase")).unwrap_err();
        match *err {
            Error::StringConflict { name, lang, .. } => {
                assert_eq!(name, "buy");
                assert_eq!(lang, "en_GB");
            }
            other => panic!("expected a string conflict, got {other:?}"),
        }
    }

    #[test]
    fn translations_of_one_name_merge() {
        let mut strings = Strings::default();
        strings.add(text_node("buy", 0, "Buy")).unwrap();
        strings.add(text_node("buy", 2, "Koop")).unwrap();
        assert!(strings.verify(&["buy"], span()).is_ok());
    }

    #[test]
    fn missing_required_names_are_detected() {
        let mut strings = Strings::default();
        strings.add(text_node("buy", 0, "Buy")).unwrap();
        assert!(matches!(
            *strings.verify(&["sell"], span()).unwrap_err(),
            Error::MissingShopString { name: "sell", .. }
        ));
    }

    #[test]
    fn missing_default_text_is_detected() {
        let mut strings = Strings::default();
        strings.add(text_node("buy", 1, "Buy")).unwrap();
        assert!(matches!(
            *strings.verify(&["buy"], span()).unwrap_err(),
            Error::MissingDefaultText { .. }
        ));
    }

    #[test]
    fn emitted_bytes_match_the_size_function() {
        let mut strings = Strings::default();
        strings.add(text_node("zebra", 0, "Zebra")).unwrap();
        strings.add(text_node("apple", 0, "Apple")).unwrap();
        let mut node = text_node("pear", 0, "Pear");
        node.set_text(1, span(), "Pear (en)".into());
        node.set_text(2, span(), "Peer".into());
        strings.add(node).unwrap();

        let mut writer = FileWriter::new();
        assert_eq!(strings.write(&mut writer), 1);
        let bytes = writer.blocks()[0].as_bytes();
        assert_eq!(bytes.len(), 12 + strings.size());

        // Records are sorted by name; the first name is `apple`.
        assert_eq!(bytes[12 + 2], "apple".len() as u8 + 1);
        assert_eq!(&bytes[12 + 3..12 + 8], b"apple");
    }

    #[test]
    fn default_language_is_emitted_last() {
        let mut node = text_node("buy", 0, "Buy");
        node.set_text(1, span(), "Buy (en)".into());
        let mut strings = Strings::default();
        strings.add(node).unwrap();

        let mut writer = FileWriter::new();
        strings.write(&mut writer);
        let bytes = writer.blocks()[0].as_bytes();
        let payload = &bytes[12..];
        // Record header: length, name, terminator.
        let mut pos = 2 + 1 + 4;
        // First language block carries the en_GB code.
        assert_eq!(payload[pos + 2], b"en_GB".len() as u8 + 1);
        assert_eq!(&payload[pos + 3..pos + 8], b"en_GB");
        pos += payload[pos] as usize + payload[pos + 1] as usize * 256;
        // The trailing block is the default language with an empty code.
        assert_eq!(payload[pos + 2], 1);
        assert_eq!(payload[pos + 3], 0);
    }
}
