//! Folder tree reconstruction from dotted names.
//!
//! Every segment of a dotted name except the last becomes a [`Folder`]; the
//! last becomes a [`Leaf`]. Names are processed in lexicographic order, which
//! fixes the sibling order and makes the first of two colliding paths win.

use std::collections::BTreeMap;

use tagdb_value::ValueKind;

use crate::{Symbol, SymbolId};

mod xml;


pub(crate) use xml::write_xml;

/// Interior node named after one path segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Folder {
	pub name: String,
	pub children: Vec<Node>,
}

/// Terminal node standing for one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
	pub id: SymbolId,
	/// Last segment of the symbol's dotted name.
	pub name: String,
	pub description: String,
	pub kind: ValueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Folder(Folder),
	Symbol(Leaf),
}

impl Node {
	pub fn name(&self) -> &str {
		match self {
			Node::Folder(folder) => &folder.name,
			Node::Symbol(leaf) => &leaf.name,
		}
	}
}

impl Folder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			children: Vec::new(),
		}
	}

	/// Builds the tree rooted at an unnamed folder.
	///
	/// When several symbols share a name only the one with the lowest id is
	/// kept, so `symbols` should arrive in ascending id order.
	pub fn from_symbols<'a>(symbols: impl IntoIterator<Item = &'a Symbol>) -> Self {
		let mut by_name: BTreeMap<&str, &Symbol> = BTreeMap::new();
		for symbol in symbols {
			by_name.entry(symbol.name()).or_insert(symbol);
		}

		let mut root = Folder::default();
		for (name, symbol) in by_name {
			root.insert_path(name, symbol);
		}
		root
	}

	fn insert_path(&mut self, path: &str, symbol: &Symbol) {
		let mut folder = self;
		let mut segments = path.split('.').peekable();
		while let Some(segment) = segments.next() {
			if segments.peek().is_none() {
				if folder.child(segment).is_none() {
					folder.children.push(Node::Symbol(Leaf {
						id: symbol.id(),
						name: segment.to_string(),
						description: symbol.description().to_string(),
						kind: symbol.kind(),
					}));
				}
				return;
			}
			folder = match folder.folder_or_insert(segment) {
				Some(next) => next,
				None => return,
			};
		}
	}

	/// First child named `name`, of either type.
	pub fn child(&self, name: &str) -> Option<&Node> {
		self.children.iter().find(|node| node.name() == name)
	}

	/// Child folder named `name`.
	pub fn folder(&self, name: &str) -> Option<&Folder> {
		self.children.iter().find_map(|node| match node {
			Node::Folder(folder) if folder.name == name => Some(folder),
			_ => None,
		})
	}

	/// Leaf named `name`.
	pub fn leaf(&self, name: &str) -> Option<&Leaf> {
		self.children.iter().find_map(|node| match node {
			Node::Symbol(leaf) if leaf.name == name => Some(leaf),
			_ => None,
		})
	}

	// Only folders are matched here, so a leaf and a folder may share a name.
	fn folder_or_insert(&mut self, name: &str) -> Option<&mut Folder> {
		if self.folder(name).is_none() {
			self.children.push(Node::Folder(Folder::new(name)));
		}
		self.children.iter_mut().find_map(|node| match node {
			Node::Folder(folder) if folder.name == name => Some(folder),
			_ => None,
		})
	}

	/// Counts the leaves below this folder.
	pub fn leaf_count(&self) -> usize {
		self.children
			.iter()
			.map(|node| match node {
				Node::Folder(folder) => folder.leaf_count(),
				Node::Symbol(_) => 1,
			})
			.sum()
	}
}
