mod error;
pub use error::Error;
mod warning;
pub use warning::Warning;

use codemap::{CodeMap, Span};
use codemap_diagnostic::{ColorConfig, Emitter, SpanLabel, SpanStyle};

pub type Result<T> = std::result::Result<T, Box<Error>>;

type Diagnostic = codemap_diagnostic::Diagnostic;

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

fn primary(span: Span, label: impl Into<Option<String>>) -> SpanLabel {
    SpanLabel {
        span,
        label: label.into(),
        style: SpanStyle::Primary,
    }
}

fn secondary(span: Span, label: impl Into<Option<String>>) -> SpanLabel {
    SpanLabel {
        span,
        label: label.into(),
        style: SpanStyle::Secondary,
    }
}

fn emit_all(diagnostics: &[Diagnostic], code_map: &CodeMap) {
    Emitter::stderr(ColorConfig::Auto, Some(code_map)).emit(diagnostics);
}
