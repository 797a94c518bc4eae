use super::{emit_all, primary, Diagnostic};
use codemap::{CodeMap, Span};
use codemap_diagnostic::SpanLabel as Label;
use ecow::EcoString;

pub enum Warning {
    NameIgnored {
        span: Span,
    },
    UnusedNamedValue {
        span: Span,
        name: EcoString,
        tag: EcoString,
    },
    UnusedUnnamedValue {
        span: Span,
        tag: EcoString,
    },
}

impl Warning {
    pub fn emit(&self, code_map: &CodeMap) {
        use Warning::*;
        let diagnostic = match self {
            NameIgnored { span } => warning(
                "unexpected name, ignoring",
                vec![primary(*span, None)],
            ),
            UnusedNamedValue { span, name, tag } => warning(
                format!("named value `{name}` was not used in node `{tag}`"),
                vec![primary(*span, None)],
            ),
            UnusedUnnamedValue { span, tag } => warning(
                format!("unnamed value in node `{tag}` was not used"),
                vec![primary(*span, None)],
            ),
        };

        emit_all(&[diagnostic], code_map);
    }
}

fn warning(message: impl Into<String>, labels: Vec<Label>) -> Diagnostic {
    Diagnostic {
        level: codemap_diagnostic::Level::Warning,
        message: message.into(),
        code: None,
        spans: labels,
    }
}
