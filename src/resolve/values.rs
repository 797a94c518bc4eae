use super::Resolver;
use crate::{
    ast::{Expression, Group, Name, NamedValue, Symbol},
    blocks::{BlockNode, SpriteBlock},
    diagnostic::{Error, Result, Warning},
    strings::Strings,
};
use codemap::Span;
use ecow::EcoString;

/// A named or unnamed value collected from a node body.
pub struct ValueInformation {
    pub name: EcoString,
    pub span: Span,
    expr: Option<Expression>,
    node: Option<BlockNode>,
    pub used: bool,
}

impl ValueInformation {
    fn with_expr(name: EcoString, span: Span, expr: Expression) -> Self {
        Self {
            name,
            span,
            expr: Some(expr),
            node: None,
            used: false,
        }
    }

    fn with_node(name: EcoString, span: Span, node: BlockNode) -> Self {
        Self {
            name,
            span,
            expr: None,
            node: Some(node),
            used: false,
        }
    }

    pub fn get_number(&mut self, node: &str) -> Result<i64> {
        match &self.expr {
            Some(Expression::Number(value, _)) => Ok(*value),
            _ => Err(Box::new(Error::FieldNotNumber {
                span: self.span,
                tag: node.into(),
                field: self.name.clone(),
            })),
        }
    }

    pub fn get_string(&mut self, node: &str) -> Result<EcoString> {
        match &self.expr {
            Some(Expression::Str(text, _)) => Ok(text.clone()),
            _ => Err(Box::new(Error::FieldNotString {
                span: self.span,
                tag: node.into(),
                field: self.name.clone(),
            })),
        }
    }

    /// Take ownership of the sprite stored in this value. Taking it twice
    /// fails, the slot is emptied by the first extraction.
    pub fn get_sprite(&mut self, node: &str) -> Result<SpriteBlock> {
        match self.node.take() {
            Some(BlockNode::Sprite(sprite)) => Ok(sprite),
            _ => Err(Box::new(Error::FieldNotSprite {
                span: self.span,
                tag: node.into(),
                field: self.name.clone(),
            })),
        }
    }

    pub fn get_strings(&mut self, node: &str) -> Result<Strings> {
        match self.node.take() {
            Some(BlockNode::Strings(strings)) => Ok(strings),
            _ => Err(Box::new(Error::FieldNotStrings {
                span: self.span,
                tag: node.into(),
                field: self.name.clone(),
            })),
        }
    }

    pub fn take_node(&mut self) -> Option<BlockNode> {
        self.node.take()
    }
}

/// The named and unnamed values of one node body, ready for extraction.
pub struct Values {
    node_tag: EcoString,
    node_span: Span,
    pub named: Vec<ValueInformation>,
    pub unnamed: Vec<ValueInformation>,
}

impl Values {
    pub fn new(node_tag: EcoString, node_span: Span) -> Self {
        Self {
            node_tag,
            node_span,
            named: Vec::new(),
            unnamed: Vec::new(),
        }
    }

    /// Collect the body of a node. Expressions are evaluated under the
    /// schema's `symbols`, nested node groups are resolved recursively, and
    /// name tables are splayed into one entry per valid cell.
    pub fn prepare(
        &mut self,
        resolver: &Resolver,
        values: Vec<NamedValue>,
        allow_named: bool,
        allow_unnamed: bool,
        symbols: &[Symbol],
    ) -> Result<()> {
        for value in values {
            let Some(name) = value.name else {
                if !allow_unnamed {
                    return Err(Box::new(Error::ValueShouldHaveName {
                        span: value.group.span(),
                    }));
                }
                let span = value.group.span();
                let info = match value.group {
                    Group::Node(group) => ValueInformation::with_node(
                        "???".into(),
                        span,
                        resolver.convert_node_group(group)?,
                    ),
                    Group::Expression(expr) => ValueInformation::with_expr(
                        "???".into(),
                        span,
                        expr.evaluate(symbols)?,
                    ),
                };
                self.unnamed.push(info);
                continue;
            };

            if !allow_named {
                return Err(Box::new(Error::ValueShouldNotHaveName {
                    span: name.span(),
                }));
            }
            match value.group {
                Group::Node(group) => {
                    let mut block = resolver.convert_node_group(group)?;
                    match name {
                        Name::Single(single) => {
                            self.named.push(ValueInformation::with_node(
                                single.name,
                                single.span,
                                block,
                            ));
                        }
                        Name::Table(table) => {
                            for (row, cells) in table.rows.iter().enumerate()
                            {
                                for (col, cell) in cells.iter().enumerate() {
                                    if !cell.is_valid() {
                                        continue;
                                    }
                                    let sub = block.get_sub_node(
                                        row, col, &cell.name, cell.span,
                                    )?;
                                    self.named.push(
                                        ValueInformation::with_node(
                                            cell.name.clone(),
                                            cell.span,
                                            sub,
                                        ),
                                    );
                                }
                            }
                        }
                    }
                }
                Group::Expression(expr) => match name {
                    Name::Single(single) => {
                        self.named.push(ValueInformation::with_expr(
                            single.name,
                            single.span,
                            expr.evaluate(symbols)?,
                        ));
                    }
                    Name::Table(table) => {
                        return Err(Box::new(
                            Error::ExpressionNeedsSingleName {
                                span: table.span,
                            },
                        ))
                    }
                },
            }
        }
        Ok(())
    }

    /// Find the first unused value named `field` and mark it used.
    pub fn find_value(
        &mut self,
        field: &str,
    ) -> Result<&mut ValueInformation> {
        match self
            .named
            .iter()
            .position(|info| !info.used && info.name.as_str() == field)
        {
            Some(index) => {
                let info = &mut self.named[index];
                info.used = true;
                Ok(info)
            }
            None => Err(Box::new(Error::FieldMissing {
                span: self.node_span,
                tag: self.node_tag.clone(),
                field: field.to_owned(),
            })),
        }
    }

    /// Like [`Self::find_value`], for optional fields.
    pub fn has_value(&mut self, field: &str) -> Option<&mut ValueInformation> {
        let index = self
            .named
            .iter()
            .position(|info| !info.used && info.name.as_str() == field)?;
        let info = &mut self.named[index];
        info.used = true;
        Some(info)
    }

    /// Warn about collected values no builder asked for.
    pub fn verify_usage(&self, resolver: &Resolver) {
        for info in &self.unnamed {
            if !info.used {
                Warning::UnusedUnnamedValue {
                    span: info.span,
                    tag: self.node_tag.clone(),
                }
                .emit(resolver.code_map);
            }
        }
        for info in &self.named {
            if !info.used {
                Warning::UnusedNamedValue {
                    span: info.span,
                    name: info.name.clone(),
                    tag: self.node_tag.clone(),
                }
                .emit(resolver.code_map);
            }
        }
    }
}
