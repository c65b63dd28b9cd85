// SVG document adapter implementation using roxmltree
use crate::error::SvgError;
use crate::kinds::{INKSCAPE_NS, classify};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use zpath_query::{DocumentNode, Matches, NodeKind, Preorder, QueryError, preorder, query};

/// Wrapper around roxmltree::Document whose document element is `<svg>`.
pub struct SvgDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> SvgDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, SvgError> {
        let doc = roxmltree::Document::parse(text)?;
        let tag = doc.root_element().tag_name().name();
        if tag != "svg" {
            return Err(SvgError::NotSvg(tag.to_string()));
        }
        log::debug!("Parsed SVG document with {} XML node(s)", doc.descendants().count());
        Ok(Self { doc })
    }

    /// The `<svg>` element, the origin of document order.
    pub fn root_node(&self) -> SvgNode<'_, 'input> {
        SvgNode::new(self.doc.root_element())
    }

    pub fn find_by_id(&self, id: &str) -> Option<SvgNode<'_, 'input>> {
        self.doc
            .descendants()
            .find(|n| n.is_element() && n.attribute("id") == Some(id))
            .map(SvgNode::new)
    }

    /// Resolves a user selection given as element ids. Order is irrelevant;
    /// queries reconcile it to document order.
    pub fn select_ids<I, S>(&self, ids: I) -> Result<Vec<SvgNode<'_, 'input>>, SvgError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| {
                let id = id.as_ref();
                self.find_by_id(id)
                    .ok_or_else(|| SvgError::UnknownId(id.to_string()))
            })
            .collect()
    }

    /// Every element in document order, starting with the root.
    pub fn nodes(&self) -> Preorder<'_, SvgNode<'_, 'input>> {
        preorder(self.root_node())
    }

    /// Runs `expression` against the whole document with the default engine.
    pub fn query(&self, expression: &str) -> Result<Matches<SvgNode<'_, 'input>>, QueryError> {
        let root = self.root_node();
        query(root, [root], expression)
    }
}

/// An element of an [`SvgDocument`], classified once on creation.
#[derive(Clone, Copy)]
pub struct SvgNode<'a, 'input: 'a> {
    node: roxmltree::Node<'a, 'input>,
    kind: NodeKind,
}

impl<'a, 'input: 'a> SvgNode<'a, 'input> {
    pub fn new(node: roxmltree::Node<'a, 'input>) -> Self {
        Self {
            node,
            kind: classify(node),
        }
    }

    pub fn inner(&self) -> roxmltree::Node<'a, 'input> {
        self.node
    }

    pub fn tag_name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// The Inkscape label (`inkscape:label`), shown as the layer name in the editor.
    pub fn label(&self) -> Option<&'a str> {
        self.node.attribute((INKSCAPE_NS, "label"))
    }
}

impl<'a, 'input: 'a> PartialEq for SvgNode<'a, 'input> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<'a, 'input: 'a> Eq for SvgNode<'a, 'input> {}

impl<'a, 'input: 'a> Hash for SvgNode<'a, 'input> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.id().hash(state);
    }
}

impl<'a, 'input: 'a> fmt::Debug for SvgNode<'a, 'input> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SvgNode({}#{})", self.kind, self.id())
    }
}

impl<'a, 'input: 'a> DocumentNode<'a> for SvgNode<'a, 'input> {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn id(&self) -> Cow<'a, str> {
        match self.node.attribute("id") {
            Some(id) => Cow::Borrowed(id),
            None => Cow::Owned(format!("{}#{}", self.tag_name(), self.node.id().get())),
        }
    }

    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        Box::new(
            self.node
                .children()
                .filter(|n| n.is_element())
                .map(SvgNode::new),
        )
    }
}
