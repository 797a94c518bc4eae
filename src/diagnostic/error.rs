use super::{emit_all, plural, primary, secondary, Diagnostic};
use codemap::{CodeMap, Span};
use codemap_diagnostic::SpanLabel as Label;
use ecow::EcoString;
use std::io;

#[derive(Debug)]
pub enum Error {
    BitsetElementNotNumber {
        span: Span,
    },
    CannotNegate {
        span: Span,
    },
    CouldNotCreateRcdFile {
        path: String,
        inner: io::Error,
    },
    CouldNotReadImage {
        span: Span,
        path: String,
        message: String,
    },
    CouldNotWriteRcdFile {
        path: String,
        inner: io::Error,
    },
    ExpressionNeedsSingleName {
        span: Span,
    },
    FailedToReadSourceCode {
        inner: io::Error,
    },
    FieldMissing {
        span: Span,
        tag: EcoString,
        field: String,
    },
    FieldNotNumber {
        span: Span,
        tag: EcoString,
        field: EcoString,
    },
    FieldNotSprite {
        span: Span,
        tag: EcoString,
        field: EcoString,
    },
    FieldNotString {
        span: Span,
        tag: EcoString,
        field: EcoString,
    },
    FieldNotStrings {
        span: Span,
        tag: EcoString,
        field: EcoString,
    },
    MissingDefaultText {
        span: Span,
        name: EcoString,
    },
    MissingShopString {
        span: Span,
        name: &'static str,
    },
    NodeArgCount {
        span: Span,
        tag: EcoString,
        expected: usize,
        got: usize,
    },
    NodeArgNotString {
        span: Span,
        tag: EcoString,
        index: usize,
    },
    NotAFileNode {
        span: Span,
    },
    NotAGameBlock {
        span: Span,
    },
    NotANodeGroup {
        span: Span,
    },
    Parse(String),
    SpriteCopy {
        span: Span,
        tag: EcoString,
        message: String,
    },
    StringConflict {
        name: EcoString,
        lang: EcoString,
        first: Span,
        second: Span,
    },
    SubNodeUnsupported {
        span: Span,
        name: EcoString,
        row: usize,
        col: usize,
    },
    TooManyChildNodes {
        span: Span,
        tag: EcoString,
        limit: usize,
    },
    UnknownBitMask {
        span: Span,
        name: String,
    },
    UnknownIdentifier {
        span: Span,
        name: EcoString,
    },
    UnknownLanguage {
        span: Span,
        code: EcoString,
    },
    UnknownNode {
        span: Span,
        tag: EcoString,
    },
    ValueShouldHaveName {
        span: Span,
    },
    ValueShouldNotHaveName {
        span: Span,
    },
    WrongChildNode {
        span: Span,
        tag: EcoString,
        expected: &'static str,
    },
}

impl Error {
    pub fn emit(&self, code_map: &CodeMap) {
        use Error::*;
        let diagnostics = match self {
            BitsetElementNotNumber { span } => vec![error(
                "bitset element must be a number between 0 and 63",
                vec![primary(*span, None)],
            )],
            CannotNegate { span } => vec![error(
                "cannot negate the value of the child expression",
                vec![primary(*span, None)],
            )],
            CouldNotCreateRcdFile { path, inner } => vec![
                error(
                    format!("could not open `{path}` for writing"),
                    Vec::new(),
                ),
                note(inner.to_string()),
            ],
            CouldNotReadImage {
                span,
                path,
                message,
            } => vec![
                error(
                    format!("failed to load image `{path}`"),
                    vec![primary(*span, None)],
                ),
                note(message.clone()),
            ],
            CouldNotWriteRcdFile { path, inner } => vec![
                error(format!("failed to write `{path}`"), Vec::new()),
                note(inner.to_string()),
            ],
            ExpressionNeedsSingleName { span } => vec![error(
                "expression must have a single name",
                vec![primary(*span, None)],
            )],
            FailedToReadSourceCode { inner } => vec![
                error("failed to read source code", Vec::new()),
                note(inner.to_string()),
            ],
            FieldMissing { span, tag, field } => vec![error(
                format!(
                    "cannot find a value for field `{field}` in node `{tag}`"
                ),
                vec![primary(*span, None)],
            )],
            FieldNotNumber { span, tag, field } => vec![error(
                format!(
                    "field `{field}` of node `{tag}` is not a numeric value"
                ),
                vec![primary(*span, None)],
            )],
            FieldNotSprite { span, tag, field } => vec![error(
                format!("field `{field}` of node `{tag}` is not a sprite"),
                vec![primary(*span, None)],
            )],
            FieldNotString { span, tag, field } => vec![error(
                format!(
                    "field `{field}` of node `{tag}` is not a string value"
                ),
                vec![primary(*span, None)],
            )],
            FieldNotStrings { span, tag, field } => vec![error(
                format!(
                    "field `{field}` of node `{tag}` is not a strings node"
                ),
                vec![primary(*span, None)],
            )],
            MissingDefaultText { span, name } => vec![error(
                format!(
                    "string `{name}` has no text in the default language"
                ),
                vec![primary(*span, None)],
            )],
            MissingShopString { span, name } => vec![error(
                format!("missing shop string `{name}`"),
                vec![primary(*span, None)],
            )],
            NodeArgCount {
                span,
                tag,
                expected,
                got,
            } => vec![error(
                format!(
                    "node `{tag}` expected {expected} {} but got {got}",
                    plural(*expected, "argument", "arguments"),
                ),
                vec![primary(*span, None)],
            )],
            NodeArgNotString { span, tag, index } => vec![error(
                format!(
                    "argument {} of node `{tag}` is not a string",
                    index + 1,
                ),
                vec![primary(*span, None)],
            )],
            NotAFileNode { span } => vec![error(
                "node is not a file node",
                vec![primary(*span, None)],
            )],
            NotAGameBlock { span } => vec![error(
                "only game blocks can be added to a file node",
                vec![primary(*span, None)],
            )],
            NotANodeGroup { span } => vec![error(
                "only node groups may be added here",
                vec![primary(*span, None)],
            )],
            Parse(parse_error) => {
                vec![
                    error("syntax error", Vec::new()),
                    note(parse_error.clone()),
                ]
            }
            SpriteCopy { span, tag, message } => vec![error(
                format!("loading of the sprite for `{tag}` failed"),
                vec![primary(*span, message.clone())],
            )],
            StringConflict {
                name,
                lang,
                first,
                second,
            } => vec![error(
                format!(
                    "string `{name}` is defined twice for language `{lang}`"
                ),
                vec![
                    primary(*second, "redefined here".to_owned()),
                    secondary(*first, "first defined here".to_owned()),
                ],
            )],
            SubNodeUnsupported {
                span,
                name,
                row,
                col,
            } => vec![error(
                format!(
                    "cannot assign sub node (row={row}, column={col}) \
                    to variable `{name}`"
                ),
                vec![primary(*span, None)],
            )],
            TooManyChildNodes { span, tag, limit } => vec![error(
                format!(
                    "node `{tag}` cannot store more than {limit} {}",
                    plural(*limit, "child node", "child nodes"),
                ),
                vec![primary(*span, None)],
            )],
            UnknownBitMask { span, name } => vec![error(
                format!("cannot find a bitmask named `{name}`"),
                vec![primary(*span, None)],
            )],
            UnknownIdentifier { span, name } => vec![error(
                format!("identifier `{name}` is not known"),
                vec![primary(*span, None)],
            )],
            UnknownLanguage { span, code } => vec![error(
                format!("unknown language `{code}`"),
                vec![primary(*span, None)],
            )],
            UnknownNode { span, tag } => vec![error(
                format!("do not know how to check and simplify node `{tag}`"),
                vec![primary(*span, None)],
            )],
            ValueShouldHaveName { span } => vec![error(
                "value should have a name",
                vec![primary(*span, None)],
            )],
            ValueShouldNotHaveName { span } => vec![error(
                "value should not have a name",
                vec![primary(*span, None)],
            )],
            WrongChildNode {
                span,
                tag,
                expected,
            } => vec![error(
                format!("node `{tag}` expects `{expected}` child nodes"),
                vec![primary(*span, None)],
            )],
        };

        emit_all(&diagnostics, code_map);
    }
}

fn error(message: impl Into<String>, labels: Vec<Label>) -> Diagnostic {
    Diagnostic {
        level: codemap_diagnostic::Level::Error,
        message: message.into(),
        code: None,
        spans: labels,
    }
}

fn note(message: impl Into<String>) -> Diagnostic {
    Diagnostic {
        level: codemap_diagnostic::Level::Note,
        message: message.into(),
        code: None,
        spans: Vec::new(),
    }
}
