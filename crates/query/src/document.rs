//! Defines the read-only view of a layered vector document that queries run against.
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// The closed set of element kinds a document node can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The document element itself.
    Root,
    Layer,
    Group,
    Path,
    Image,
    Rectangle,
    Circle,
    Ellipse,
    Line,
    Polyline,
    Polygon,
    Text,
    TextSpan,
    Use,
    Anchor,
    Defs,
    NamedView,
    Metadata,
    Style,
    Other,
}

impl NodeKind {
    /// The display name of the kind, as shown in traces and reports.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "SvgDocument",
            NodeKind::Layer => "Layer",
            NodeKind::Group => "Group",
            NodeKind::Path => "PathElement",
            NodeKind::Image => "Image",
            NodeKind::Rectangle => "Rectangle",
            NodeKind::Circle => "Circle",
            NodeKind::Ellipse => "Ellipse",
            NodeKind::Line => "Line",
            NodeKind::Polyline => "Polyline",
            NodeKind::Polygon => "Polygon",
            NodeKind::Text => "TextElement",
            NodeKind::TextSpan => "Tspan",
            NodeKind::Use => "Use",
            NodeKind::Anchor => "Anchor",
            NodeKind::Defs => "Defs",
            NodeKind::NamedView => "NamedView",
            NodeKind::Metadata => "Metadata",
            NodeKind::Style => "StyleElement",
            NodeKind::Other => "Other",
        }
    }

    /// Layers and groups hold children that queries descend into.
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Layer | NodeKind::Group)
    }

    /// Non-visual kinds that are excluded from top-level visual queries.
    pub fn is_bookkeeping(self) -> bool {
        matches!(
            self,
            NodeKind::Defs | NodeKind::NamedView | NodeKind::Metadata | NodeKind::Style
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The contract for a node in a read-only, hierarchical document.
///
/// The query engine is written exclusively against this trait, so any host
/// document (parsed SVG, an in-memory mock, ...) can be queried once it exposes
/// kinds, identifiers and ordered children.
///
/// `'a` is the lifetime of the underlying document. Handles are cheap `Copy`
/// values; equality and hashing must follow node identity.
pub trait DocumentNode<'a>: fmt::Debug + Clone + Copy + PartialEq + Eq + Hash {
    /// The element kind of this node.
    fn kind(&self) -> NodeKind;

    /// An identifier that is unique and stable for the lifetime of the document.
    fn id(&self) -> Cow<'a, str>;

    /// The child nodes in document order. Empty for leaves.
    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// Whether queries may recurse into this node's children.
    fn is_container(&self) -> bool {
        self.kind().is_container()
    }
}

/// Formats a node as `Kind(id)`.
pub fn describe<'a, N: DocumentNode<'a>>(node: &N) -> String {
    format!("{}({})", node.kind(), node.id())
}

/// Formats every node in `nodes` with [`describe`].
pub fn describe_all<'a, N: DocumentNode<'a>>(nodes: &[N]) -> Vec<String> {
    nodes.iter().map(describe).collect()
}

/// Lazy preorder (document order) traversal, starting with the root itself.
#[derive(Debug, Clone)]
pub struct Preorder<'a, N: DocumentNode<'a>> {
    stack: Vec<N>,
    _marker: PhantomData<&'a ()>,
}

/// Walks the whole tree under `root` in document order. Calling it again restarts the walk.
pub fn preorder<'a, N: DocumentNode<'a>>(root: N) -> Preorder<'a, N> {
    Preorder {
        stack: vec![root],
        _marker: PhantomData,
    }
}

impl<'a, N: DocumentNode<'a>> Iterator for Preorder<'a, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        let children: Vec<N> = node.children().collect();
        self.stack.extend(children.into_iter().rev());
        Some(node)
    }
}

// Test utilities - publicly available for integration testing in downstream crates
pub mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct MockNodeData {
        kind: NodeKind,
        label: String,
        children: Vec<usize>,
    }

    /// An arena-backed tree. Node 0 is always the document root.
    #[derive(Debug)]
    pub struct MockTree {
        nodes: Vec<MockNodeData>,
    }

    /// A handle into a [`MockTree`]. Identity is the arena index.
    #[derive(Debug, Clone, Copy)]
    pub struct MockNode<'a> {
        pub id: usize,
        pub tree: &'a MockTree,
    }

    impl<'a> PartialEq for MockNode<'a> {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }
    impl<'a> Eq for MockNode<'a> {}

    impl<'a> Hash for MockNode<'a> {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            self.id.hash(state);
        }
    }

    impl Default for MockTree {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockTree {
        pub fn new() -> Self {
            Self {
                nodes: vec![MockNodeData {
                    kind: NodeKind::Root,
                    label: "svg".to_string(),
                    children: vec![],
                }],
            }
        }

        /// Appends a node as the last child of `parent` and returns its index.
        pub fn add(&mut self, parent: usize, kind: NodeKind, label: &str) -> usize {
            let id = self.nodes.len();
            self.nodes.push(MockNodeData {
                kind,
                label: label.to_string(),
                children: vec![],
            });
            self.nodes[parent].children.push(id);
            id
        }

        pub fn root(&self) -> MockNode<'_> {
            self.node(0)
        }

        pub fn node(&self, id: usize) -> MockNode<'_> {
            MockNode { id, tree: self }
        }

        pub fn nodes(&self, ids: &[usize]) -> Vec<MockNode<'_>> {
            ids.iter().map(|&id| self.node(id)).collect()
        }

        pub fn len(&self) -> usize {
            self.nodes.len()
        }

        pub fn is_empty(&self) -> bool {
            self.nodes.is_empty()
        }
    }

    impl<'a> DocumentNode<'a> for MockNode<'a> {
        fn kind(&self) -> NodeKind {
            self.tree.nodes[self.id].kind
        }

        fn id(&self) -> Cow<'a, str> {
            Cow::Borrowed(self.tree.nodes[self.id].label.as_str())
        }

        fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
            let tree = self.tree; // Re-borrow to help the lifetime checker
            Box::new(
                tree.nodes[self.id]
                    .children
                    .iter()
                    .map(move |&id| MockNode { id, tree }),
            )
        }
    }

    /// Creates a small Inkscape-like document. Indices follow document order:
    /// ```text
    /// svg                 0
    ///   defs              1  (Defs)
    ///   namedview         2  (NamedView)
    ///   layer1            3  (Layer)
    ///     g0              4  (Group)
    ///       p0            5  (Path)
    ///       g0a           6  (Group)
    ///         p1          7  (Path)
    ///     g1              8  (Group)
    ///       img0          9  (Image)
    ///     g2             10  (Group)
    ///     p2             11  (Path)
    ///   layer2           12  (Layer)
    ///     p3             13  (Path)
    ///     rect0          14  (Rectangle)
    ///   metadata         15  (Metadata)
    /// ```
    pub fn create_test_tree() -> MockTree {
        let mut tree = MockTree::new();
        tree.add(0, NodeKind::Defs, "defs");
        tree.add(0, NodeKind::NamedView, "namedview");
        let layer1 = tree.add(0, NodeKind::Layer, "layer1");
        let g0 = tree.add(layer1, NodeKind::Group, "g0");
        tree.add(g0, NodeKind::Path, "p0");
        let g0a = tree.add(g0, NodeKind::Group, "g0a");
        tree.add(g0a, NodeKind::Path, "p1");
        let g1 = tree.add(layer1, NodeKind::Group, "g1");
        tree.add(g1, NodeKind::Image, "img0");
        tree.add(layer1, NodeKind::Group, "g2");
        tree.add(layer1, NodeKind::Path, "p2");
        let layer2 = tree.add(0, NodeKind::Layer, "layer2");
        tree.add(layer2, NodeKind::Path, "p3");
        tree.add(layer2, NodeKind::Rectangle, "rect0");
        tree.add(0, NodeKind::Metadata, "metadata");
        tree
    }
}
