use std::fmt;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use super::{Folder, Leaf, Node};
use crate::{Result, SerializeConfig, TableError};

const ROOT_TAG: &str = "symboltable";
const FOLDER_TAG: &str = "folder";
const SYMBOL_TAG: &str = "symbol";

/// Writes `root` as an XML document.
pub(crate) fn write_xml(root: &Folder, options: &SerializeConfig) -> Result<Vec<u8>> {
	let mut writer = match options.indent {
		0 => Writer::new(Vec::new()),
		indent => Writer::new_with_indent(Vec::new(), b' ', indent),
	};
	if options.declaration {
		writer
			.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
			.map_err(xml_error)?;
	}
	write_element(&mut writer, ROOT_TAG, BytesStart::new(ROOT_TAG), &root.children)?;
	Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, tag: &str, start: BytesStart<'_>, children: &[Node]) -> Result<()> {
	if children.is_empty() {
		return writer.write_event(Event::Empty(start)).map_err(xml_error);
	}
	writer.write_event(Event::Start(start)).map_err(xml_error)?;
	for child in children {
		match child {
			Node::Folder(folder) => {
				let start = BytesStart::new(FOLDER_TAG).with_attributes([("name", folder.name.as_str())]);
				write_element(writer, FOLDER_TAG, start, &folder.children)?;
			}
			Node::Symbol(leaf) => write_leaf(writer, leaf)?,
		}
	}
	writer.write_event(Event::End(BytesEnd::new(tag))).map_err(xml_error)
}

fn write_leaf(writer: &mut Writer<Vec<u8>>, leaf: &Leaf) -> Result<()> {
	let id = leaf.id.to_string();
	let kind = leaf.kind.ordinal().to_string();
	let start = BytesStart::new(SYMBOL_TAG).with_attributes([
		("id", id.as_str()),
		("name", leaf.name.as_str()),
		("desc", leaf.description.as_str()),
		("type", kind.as_str()),
	]);
	writer.write_event(Event::Empty(start)).map_err(xml_error)
}

fn xml_error(err: impl fmt::Display) -> TableError {
	TableError::Serialize(err.to_string())
}
