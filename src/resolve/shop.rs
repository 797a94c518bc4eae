//! Builders for the shop block and the localized string nodes.

use super::{expand_no_expression, symbols, Resolver, Values};
use crate::{
    ast::NodeGroup,
    blocks::{BlockNode, Recolouring, ShopBlock, SHOP_STRING_NAMES},
    diagnostic::{Error, Result},
    strings::{language_index, Strings, TextNode},
};

fn store_recolour(
    slots: &mut [Recolouring; 3],
    recolour: Recolouring,
) -> bool {
    for slot in slots {
        if slot.is_unset() {
            *slot = recolour;
            return true;
        }
    }
    false
}

pub(super) fn convert_shop_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<ShopBlock> {
    expand_no_expression(&group)?;
    let span = group.span;
    let mut vals = Values::new(group.tag.clone(), span);
    vals.prepare(resolver, group.values, true, true, symbols::SHOP_SYMBOLS)?;

    let tile_width = vals.find_value("tile_width")?.get_number("SHOP")? as u16;
    let height = vals.find_value("height")?.get_number("SHOP")? as u8;
    let flags = vals.find_value("flags")?.get_number("SHOP")? as u8;
    let ne_view = vals.find_value("ne")?.get_sprite("SHOP")?;
    let se_view = vals.find_value("se")?.get_sprite("SHOP")?;
    let sw_view = vals.find_value("sw")?.get_sprite("SHOP")?;
    let nw_view = vals.find_value("nw")?.get_sprite("SHOP")?;
    let item_cost = [
        vals.find_value("cost_item1")?.get_number("SHOP")? as u32,
        vals.find_value("cost_item2")?.get_number("SHOP")? as u32,
    ];
    let ownership_cost =
        vals.find_value("cost_ownership")?.get_number("SHOP")? as u32;
    let opened_cost =
        vals.find_value("cost_opened")?.get_number("SHOP")? as u32;
    let item_type = [
        vals.find_value("type_item1")?.get_number("SHOP")? as u8,
        vals.find_value("type_item2")?.get_number("SHOP")? as u8,
    ];
    let texts = vals.find_value("texts")?.get_strings("SHOP")?;
    texts.verify(SHOP_STRING_NAMES, span)?;

    let mut recolours = <[Recolouring; 3]>::default();
    for value in &mut vals.unnamed {
        if value.used {
            continue;
        }
        match value.take_node() {
            Some(BlockNode::Recolour(recolour)) => {
                if !store_recolour(&mut recolours, recolour) {
                    return Err(Box::new(Error::TooManyChildNodes {
                        span: value.span,
                        tag: "SHOP".into(),
                        limit: 3,
                    }));
                }
                value.used = true;
            }
            _ => {
                return Err(Box::new(Error::WrongChildNode {
                    span: value.span,
                    tag: "SHOP".into(),
                    expected: "recolour",
                }))
            }
        }
    }

    vals.verify_usage(resolver);
    Ok(ShopBlock {
        tile_width,
        height,
        flags,
        ne_view,
        se_view,
        sw_view,
        nw_view,
        recolours,
        item_cost,
        ownership_cost,
        opened_cost,
        item_type,
        texts,
    })
}

pub(super) fn convert_strings_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<Strings> {
    expand_no_expression(&group)?;
    let mut vals = Values::new(group.tag.clone(), group.span);
    vals.prepare(resolver, group.values, false, true, &[])?;

    let mut strings = Strings::default();
    for value in &mut vals.unnamed {
        if value.used {
            continue;
        }
        match value.take_node() {
            Some(BlockNode::Text(text)) => {
                strings.add(text)?;
                value.used = true;
            }
            _ => {
                return Err(Box::new(Error::WrongChildNode {
                    span: value.span,
                    tag: "strings".into(),
                    expected: "string",
                }))
            }
        }
    }

    vals.verify_usage(resolver);
    Ok(strings)
}

pub(super) fn convert_string_node(
    resolver: &Resolver,
    group: NodeGroup,
) -> Result<TextNode> {
    expand_no_expression(&group)?;
    let span = group.span;
    let mut vals = Values::new(group.tag.clone(), span);
    vals.prepare(resolver, group.values, true, false, &[])?;

    let name = vals.find_value("name")?.get_string("string")?;
    let text = vals.find_value("text")?.get_string("string")?;
    let language = match vals.has_value("lang") {
        Some(value) => {
            let lang_span = value.span;
            let code = value.get_string("string")?;
            language_index(&code, lang_span)?
        }
        None => 0,
    };
    vals.verify_usage(resolver);

    let mut node = TextNode::new(name);
    node.set_text(language, span, text);
    Ok(node)
}
