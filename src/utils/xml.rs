use std::str::FromStr;
use rust_decimal::Decimal;
use xmltree::{Element, EmitterConfig, XMLNode};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) fn parse_document(bytes: &[u8]) -> LibraryResult<Element> {
    Element::parse(bytes).map_err(LibraryError::from)
}

pub(crate) fn write_document(root: &Element) -> LibraryResult<Vec<u8>> {
    let mut buf = Vec::new();
    root.write_with_config(&mut buf, EmitterConfig::new().perform_indent(true))
        .map_err(|err| LibraryError::serialization(format!("xml writing {:?}", err).as_str()))?;
    Ok(buf)
}

pub(crate) fn is_element_named(node: &XMLNode, name: &str) -> bool {
    matches!(node, XMLNode::Element(e) if e.name == name)
}

// child elements with the given name, in document order
pub(crate) fn child_elements<'a>(element: &'a Element, name: &'a str) -> impl Iterator<Item=&'a Element> + 'a {
    element.children.iter().filter_map(move |node| match node {
        XMLNode::Element(e) if e.name == name => Some(e),
        _ => None,
    })
}

pub(crate) fn child_position(element: &Element, name: &str) -> Option<usize> {
    element.children.iter().position(|node| is_element_named(node, name))
}

// text of the first child with the given name; an empty child yields an empty string
pub(crate) fn parse_string_child(name: &str, element: &Element) -> Option<String> {
    element.get_child(name).map(element_text)
}

pub(crate) fn parse_string_attribute(name: &str, element: &Element) -> Option<String> {
    element.attributes.get(name).cloned()
}

pub(crate) fn parse_number_child(name: &str, element: &Element) -> i32 {
    parse_string_child(name, element)
        .and_then(|s| s.trim().parse::<i32>().ok())
        .unwrap_or(0)
}

pub(crate) fn parse_decimal_child(name: &str, element: &Element) -> Decimal {
    parse_string_child(name, element)
        .and_then(|s| {
            let s = s.trim();
            Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)).ok()
        })
        .unwrap_or(Decimal::ZERO)
}

pub(crate) fn element_text(element: &Element) -> String {
    element.get_text().map(|t| t.into_owned()).unwrap_or_default()
}

pub(crate) fn text_element(name: &str, text: &str) -> Element {
    let mut element = Element::new(name);
    if !text.is_empty() {
        element.children.push(XMLNode::Text(text.to_string()));
    }
    element
}

// replaces the text of the first child with the given name, appending the child when missing
pub(crate) fn set_child_text(element: &mut Element, name: &str, text: &str) {
    match element.get_mut_child(name) {
        Some(child) => {
            child.children.retain(|node| matches!(node, XMLNode::Element(_)));
            if !text.is_empty() {
                child.children.insert(0, XMLNode::Text(text.to_string()));
            }
        }
        None => element.children.push(XMLNode::Element(text_element(name, text))),
    }
}
