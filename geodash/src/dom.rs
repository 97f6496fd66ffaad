//! The document the dashboard builds its sections in.
//!
//! [`Document`] is the small part of a DOM the dashboard needs: lookup by id, element
//! creation and tree mutation. [`HtmlDocument`] is an in-memory implementation that
//! serialises to HTML.

use anyhow::{Result, ensure};
use std::collections::BTreeMap;

/// Handle of an element inside a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

pub trait Document {
	/// Finds an element attached to the document by its `id` attribute.
	fn get_element_by_id(&self, id: &str) -> Option<NodeId>;

	/// Creates a detached element.
	fn create_element(&mut self, tag: &str) -> NodeId;

	fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

	/// Detaches all children of an element.
	fn clear_children(&mut self, node: NodeId) -> Result<()>;

	fn set_text(&mut self, node: NodeId, text: &str) -> Result<()>;

	fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()>;
}

#[derive(Clone, Debug)]
struct Element {
	tag: String,
	attributes: BTreeMap<String, String>,
	text: Option<String>,
	children: Vec<NodeId>,
	parent: Option<NodeId>,
}

/// In-memory element tree rooted at `<body>`.
#[derive(Clone, Debug)]
pub struct HtmlDocument {
	elements: Vec<Element>,
}

impl Default for HtmlDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl HtmlDocument {
	/// Creates a document with an empty `<body>`.
	#[must_use]
	pub fn new() -> Self {
		let mut document = HtmlDocument { elements: Vec::new() };
		document.create_element("body");
		document
	}

	/// Creates a document whose body holds one `<div>` with the given id.
	#[must_use]
	pub fn with_container(id: &str) -> Self {
		let mut document = Self::new();
		let div = document.create_element("div");
		document.elements[div.0].attributes.insert("id".to_string(), id.to_string());
		document.attach(document.body(), div);
		document
	}

	#[must_use]
	pub fn body(&self) -> NodeId {
		NodeId(0)
	}

	#[must_use]
	pub fn tag(&self, node: NodeId) -> Option<&str> {
		self.elements.get(node.0).map(|e| e.tag.as_str())
	}

	#[must_use]
	pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
		self.elements.get(node.0)?.attributes.get(name).map(String::as_str)
	}

	#[must_use]
	pub fn text(&self, node: NodeId) -> Option<&str> {
		self.elements.get(node.0)?.text.as_deref()
	}

	#[must_use]
	pub fn children(&self, node: NodeId) -> &[NodeId] {
		self.elements.get(node.0).map(|e| e.children.as_slice()).unwrap_or_default()
	}

	/// Serialises the body's content.
	#[must_use]
	pub fn to_html(&self) -> String {
		let mut html = String::new();
		for child in self.children(self.body()) {
			self.write_element(*child, 0, &mut html);
		}
		html
	}

	fn write_element(&self, node: NodeId, depth: usize, html: &mut String) {
		let element = &self.elements[node.0];
		let indent = "\t".repeat(depth);
		html.push_str(&indent);
		html.push('<');
		html.push_str(&element.tag);
		for (name, value) in &element.attributes {
			html.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
		}
		html.push('>');

		if element.children.is_empty() {
			if let Some(text) = &element.text {
				html.push_str(&escape_html(text));
			}
		} else {
			html.push('\n');
			if let Some(text) = &element.text {
				html.push_str(&format!("{indent}\t{}\n", escape_html(text)));
			}
			for child in &element.children {
				self.write_element(*child, depth + 1, html);
			}
			html.push_str(&indent);
		}

		html.push_str(&format!("</{}>\n", element.tag));
	}

	fn check(&self, node: NodeId) -> Result<()> {
		ensure!(node.0 < self.elements.len(), "unknown element {node:?}");
		Ok(())
	}

	fn attach(&mut self, parent: NodeId, child: NodeId) {
		if let Some(old_parent) = self.elements[child.0].parent.take() {
			self.elements[old_parent.0].children.retain(|c| *c != child);
		}
		self.elements[child.0].parent = Some(parent);
		self.elements[parent.0].children.push(child);
	}

	fn is_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
		loop {
			if node == ancestor {
				return true;
			}
			match self.elements[node.0].parent {
				Some(parent) => node = parent,
				None => return false,
			}
		}
	}

	fn find_attached(&self, node: NodeId, id: &str) -> Option<NodeId> {
		if self.attribute(node, "id") == Some(id) {
			return Some(node);
		}
		self.children(node).iter().find_map(|child| self.find_attached(*child, id))
	}
}

impl Document for HtmlDocument {
	fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
		self.find_attached(self.body(), id)
	}

	fn create_element(&mut self, tag: &str) -> NodeId {
		self.elements.push(Element {
			tag: tag.to_string(),
			attributes: BTreeMap::new(),
			text: None,
			children: Vec::new(),
			parent: None,
		});
		NodeId(self.elements.len() - 1)
	}

	fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
		self.check(parent)?;
		self.check(child)?;
		ensure!(
			!self.is_ancestor(child, parent),
			"cannot append {child:?} into its own subtree"
		);
		self.attach(parent, child);
		Ok(())
	}

	fn clear_children(&mut self, node: NodeId) -> Result<()> {
		self.check(node)?;
		for child in std::mem::take(&mut self.elements[node.0].children) {
			self.elements[child.0].parent = None;
		}
		self.elements[node.0].text = None;
		Ok(())
	}

	fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
		self.check(node)?;
		self.elements[node.0].text = Some(text.to_string());
		Ok(())
	}

	fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
		self.check(node)?;
		self.elements[node.0].attributes.insert(name.to_string(), value.to_string());
		Ok(())
	}
}

/// Escapes text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn lookup_only_finds_attached_elements() {
		let mut doc = HtmlDocument::with_container("dashboard");
		let container = doc.get_element_by_id("dashboard").unwrap();
		assert_eq!(doc.tag(container), Some("div"));

		let detached = doc.create_element("div");
		doc.set_attribute(detached, "id", "floating").unwrap();
		assert_eq!(doc.get_element_by_id("floating"), None);

		doc.append_child(container, detached).unwrap();
		assert_eq!(doc.get_element_by_id("floating"), Some(detached));
		assert_eq!(doc.get_element_by_id("missing"), None);
	}

	#[test]
	fn clear_children_detaches() {
		let mut doc = HtmlDocument::with_container("root");
		let root = doc.get_element_by_id("root").unwrap();
		let child = doc.create_element("p");
		doc.set_attribute(child, "id", "child").unwrap();
		doc.append_child(root, child).unwrap();
		doc.set_text(root, "stale").unwrap();

		doc.clear_children(root).unwrap();
		assert!(doc.children(root).is_empty());
		assert_eq!(doc.text(root), None);
		assert_eq!(doc.get_element_by_id("child"), None);
	}

	#[test]
	fn append_moves_between_parents() {
		let mut doc = HtmlDocument::new();
		let a = doc.create_element("div");
		let b = doc.create_element("div");
		let c = doc.create_element("span");
		doc.append_child(a, c).unwrap();
		doc.append_child(b, c).unwrap();
		assert!(doc.children(a).is_empty());
		assert_eq!(doc.children(b), &[c]);
	}

	#[test]
	fn append_rejects_cycles() {
		let mut doc = HtmlDocument::new();
		let a = doc.create_element("div");
		let b = doc.create_element("div");
		doc.append_child(a, b).unwrap();
		assert!(doc.append_child(b, a).is_err());
		assert!(doc.append_child(a, a).is_err());
	}

	#[test]
	fn to_html_escapes_and_indents() {
		let mut doc = HtmlDocument::with_container("main");
		let main = doc.get_element_by_id("main").unwrap();
		let heading = doc.create_element("h3");
		doc.set_text(heading, "Sales & <Revenue>").unwrap();
		doc.append_child(main, heading).unwrap();

		assert_eq!(
			doc.to_html(),
			"<div id=\"main\">\n\t<h3>Sales &amp; &lt;Revenue&gt;</h3>\n</div>\n"
		);
	}

	#[test]
	fn escape_quotes() {
		assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
	}
}
