//! Queryable XML tree.
//!
//! DWML documents are small (tens of kilobytes) and are queried many times
//! per extraction, so the document is read once into an arena of nodes and
//! every query walks that arena. Queries are plain recursive descent over
//! tag names with optional attribute predicates; there is no path language.

use std::fmt;

use ndfd_common::{NdfdError, NdfdResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Index of a node inside its [`Document`].
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed, immutable XML document.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Parse XML text into a document.
    ///
    /// # Errors
    /// `NdfdError::MalformedXml` for anything that is not a single
    /// well-formed element tree: syntax errors, mismatched or unclosed tags,
    /// truncated input, no root element or more than one.
    pub fn parse(xml: &str) -> NdfdResult<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut nodes: Vec<NodeData> = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();

        loop {
            let event = reader.read_event_into(&mut buf).map_err(|e| {
                NdfdError::MalformedXml(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            })?;

            match event {
                Event::Start(e) => {
                    let id = open_node(&mut nodes, &stack, &e)?;
                    stack.push(id);
                }
                Event::Empty(e) => {
                    open_node(&mut nodes, &stack, &e)?;
                }
                Event::End(_) => {
                    let id = stack.pop().ok_or_else(|| {
                        NdfdError::MalformedXml("closing tag without an open element".to_string())
                    })?;
                    let trimmed = nodes[id].text.trim().to_string();
                    nodes[id].text = trimmed;
                }
                Event::Text(t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| NdfdError::MalformedXml(e.to_string()))?;
                    append_text(&mut nodes, &stack, &text)?;
                }
                Event::CData(c) => {
                    let raw = c.into_inner();
                    let text = String::from_utf8_lossy(&raw);
                    append_text(&mut nodes, &stack, &text)?;
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
            buf.clear();
        }

        if let Some(&open) = stack.last() {
            return Err(NdfdError::MalformedXml(format!(
                "unexpected end of input inside <{}>",
                nodes[open].tag
            )));
        }
        if nodes.is_empty() {
            return Err(NdfdError::MalformedXml("document has no root element".to_string()));
        }

        Ok(Self { nodes })
    }

    /// The document element.
    pub fn root(&self) -> Node<'_> {
        Node { doc: self, id: 0 }
    }

    /// Node by id.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id < self.nodes.len()).then_some(Node { doc: self, id })
    }

    /// Every element named `tag`, root included, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<Node<'_>> {
        self.find_all_where(tag, |_| true)
    }

    /// Every element named `tag` that satisfies `predicate`, in document order.
    pub fn find_all_where<F>(&self, tag: &str, predicate: F) -> Vec<Node<'_>>
    where
        F: Fn(&Node<'_>) -> bool,
    {
        let root = self.root();
        let mut out = Vec::new();
        if root.tag() == tag && predicate(&root) {
            out.push(root);
        }
        root.collect_descendants(tag, &predicate, &mut out);
        out
    }

    /// First element named `tag` satisfying `predicate`, root included.
    pub fn first_matching<F>(&self, tag: &str, predicate: F) -> Option<Node<'_>>
    where
        F: Fn(&Node<'_>) -> bool,
    {
        let root = self.root();
        if root.tag() == tag && predicate(&root) {
            return Some(root);
        }
        root.first_matching(tag, predicate)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn open_node(nodes: &mut Vec<NodeData>, stack: &[NodeId], e: &BytesStart<'_>) -> NdfdResult<NodeId> {
    let parent = stack.last().copied();
    if parent.is_none() && !nodes.is_empty() {
        return Err(NdfdError::MalformedXml("more than one root element".to_string()));
    }

    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| NdfdError::MalformedXml(format!("in <{}>: {}", tag, err)))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| NdfdError::MalformedXml(format!("in <{}>: {}", tag, err)))?
            .into_owned();
        attributes.push((key, value));
    }

    let id = nodes.len();
    nodes.push(NodeData {
        tag,
        attributes,
        text: String::new(),
        parent,
        children: Vec::new(),
    });
    if let Some(parent) = parent {
        nodes[parent].children.push(id);
    }
    Ok(id)
}

fn append_text(nodes: &mut [NodeData], stack: &[NodeId], text: &str) -> NdfdResult<()> {
    match stack.last() {
        Some(&id) => {
            nodes[id].text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(NdfdError::MalformedXml("text outside the root element".to_string())),
    }
}

/// Borrowed handle to one element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a NodeData {
        &self.doc.nodes[self.id]
    }

    fn wrap(&self, id: NodeId) -> Node<'a> {
        Node { doc: self.doc, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tag(&self) -> &'a str {
        &self.data().tag
    }

    /// Trimmed text content; empty when the element has none.
    pub fn text(&self) -> &'a str {
        &self.data().text
    }

    /// Text content, `None` when empty.
    pub fn text_opt(&self) -> Option<&'a str> {
        let text = self.text();
        (!text.is_empty()).then_some(text)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.data()
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.data()
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Attribute value or a `MissingAttribute` lookup error.
    pub fn required_attr(&self, name: &str) -> NdfdResult<&'a str> {
        self.attr(name)
            .ok_or_else(|| NdfdError::missing_attribute(name, self.tag()))
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.data().parent.map(|id| self.wrap(id))
    }

    /// Closest ancestor named `tag`.
    pub fn nearest_ancestor(&self, tag: &str) -> Option<Node<'a>> {
        let mut current = self.parent();
        while let Some(node) = current {
            if node.tag() == tag {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    /// Direct children in document order.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&id| Node { doc, id })
    }

    /// Direct children named `tag` in document order.
    pub fn children_named(&self, tag: &'a str) -> impl Iterator<Item = Node<'a>> + 'a {
        self.children().filter(move |c| c.tag() == tag)
    }

    /// First direct child named `tag`.
    pub fn child(&self, tag: &str) -> Option<Node<'a>> {
        self.children().find(|c| c.tag() == tag)
    }

    /// First direct child named `tag` or a `MissingElement` lookup error.
    pub fn required_child(&self, tag: &str) -> NdfdResult<Node<'a>> {
        self.child(tag)
            .ok_or_else(|| NdfdError::missing_element(tag, self.tag()))
    }

    /// Follows `a/b/c` through first matching direct children.
    pub fn child_path(&self, path: &str) -> Option<Node<'a>> {
        path.split('/')
            .filter(|step| !step.is_empty())
            .try_fold(*self, |node, step| node.child(step))
    }

    /// The element immediately after this one under the same parent.
    pub fn next_sibling(&self) -> Option<Node<'a>> {
        let parent = self.parent()?;
        let siblings = &parent.data().children;
        let pos = siblings.iter().position(|&id| id == self.id)?;
        siblings.get(pos + 1).map(|&id| self.wrap(id))
    }

    /// Elements named `value_tag` that share this node's parent, in document
    /// order. This is how a parameter's `<name>` reaches its values.
    pub fn sibling_values(&self, value_tag: &str) -> Vec<Node<'a>> {
        match self.parent() {
            Some(parent) => parent.children().filter(|c| c.tag() == value_tag).collect(),
            None => Vec::new(),
        }
    }

    /// Descendants named `tag` (excluding this node) in document order.
    pub fn find_all(&self, tag: &str) -> Vec<Node<'a>> {
        self.find_all_where(tag, |_| true)
    }

    /// Descendants named `tag` satisfying `predicate`, in document order.
    pub fn find_all_where<F>(&self, tag: &str, predicate: F) -> Vec<Node<'a>>
    where
        F: Fn(&Node<'a>) -> bool,
    {
        let mut out = Vec::new();
        self.collect_descendants(tag, &predicate, &mut out);
        out
    }

    /// First descendant named `tag` satisfying `predicate`.
    pub fn first_matching<F>(&self, tag: &str, predicate: F) -> Option<Node<'a>>
    where
        F: Fn(&Node<'a>) -> bool,
    {
        self.first_descendant(tag, &predicate)
    }

    fn collect_descendants<F>(&self, tag: &str, predicate: &F, out: &mut Vec<Node<'a>>)
    where
        F: Fn(&Node<'a>) -> bool,
    {
        for child in self.children() {
            if child.tag() == tag && predicate(&child) {
                out.push(child);
            }
            child.collect_descendants(tag, predicate, out);
        }
    }

    fn first_descendant<F>(&self, tag: &str, predicate: &F) -> Option<Node<'a>>
    where
        F: Fn(&Node<'a>) -> bool,
    {
        for child in self.children() {
            if child.tag() == tag && predicate(&child) {
                return Some(child);
            }
            if let Some(found) = child.first_descendant(tag, predicate) {
                return Some(found);
            }
        }
        None
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("tag", &self.tag())
            .finish()
    }
}
