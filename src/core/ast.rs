//! Markup syntax tree.
//!
//! Nodes live in an arena owned by [`SyntaxTree`] and reference each other by
//! [`NodeId`]. The root is always a [`NodeKind::Document`] node. The tree is
//! built once by a parser and only read afterwards.

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading {
        level: u8,
    },
    Paragraph,
    Blockquote,
    CodeBlock {
        fenced: bool,
        info: String,
        /// Literal source lines, line endings included.
        lines: Vec<String>,
    },
    ThematicBreak,
    HtmlBlock,
    Image {
        destination: String,
        title: String,
    },
    List {
        ordered: bool,
        start: Option<u64>,
    },
    ListItem,
    Table,
    TableHeader,
    TableRow,
    TableCell,
    Text(String),
    Emphasis,
    Strong,
    Strikethrough,
    Link {
        destination: String,
        title: String,
    },
    CodeSpan(String),
    SoftBreak,
    HardBreak,
    Html(String),
    /// Container for constructs without a dedicated kind; only its children render.
    Fragment,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Traversal control returned by an enter/leave callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    Continue,
    /// Do not descend. The leave callback still runs.
    SkipChildren,
}

impl SyntaxTree {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Appends a new node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id].kind
    }

    pub fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn parent_kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.parent(id).map(|parent| self.kind(parent))
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[Self::ROOT].children.is_empty()
    }

    /// Siblings that come before `id` under the same parent.
    pub fn previous_siblings(&self, id: NodeId) -> &[NodeId] {
        let (before, _) = self.split_siblings(id);
        before
    }

    /// Siblings that come after `id` under the same parent.
    pub fn next_siblings(&self, id: NodeId) -> &[NodeId] {
        let (_, after) = self.split_siblings(id);
        after
    }

    fn split_siblings(&self, id: NodeId) -> (&[NodeId], &[NodeId]) {
        let Some(parent) = self.parent(id) else {
            return (&[], &[]);
        };
        let siblings = self.children(parent);
        match siblings.iter().position(|&sibling| sibling == id) {
            Some(pos) => (&siblings[..pos], &siblings[pos + 1..]),
            None => (&[], &[]),
        }
    }

    /// Literal text of the subtree: text runs and code spans, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(t) | NodeKind::CodeSpan(t) => out.push_str(t),
            NodeKind::SoftBreak | NodeKind::HardBreak => out.push(' '),
            NodeKind::CodeBlock { lines, .. } => lines.iter().for_each(|l| out.push_str(l)),
            _ => {}
        }
        for &child in self.children(id) {
            self.collect_text(child, out);
        }
    }

    /// Depth-first traversal from the root.
    ///
    /// `visit` is called with `entering = true` before a node's children and
    /// with `entering = false` after them. Returning
    /// [`WalkStatus::SkipChildren`] on entry skips the children only.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&SyntaxTree, NodeId, bool) -> WalkStatus,
    {
        self.walk_from(Self::ROOT, visit);
    }

    pub fn walk_from<F>(&self, id: NodeId, visit: &mut F)
    where
        F: FnMut(&SyntaxTree, NodeId, bool) -> WalkStatus,
    {
        if visit(self, id, true) == WalkStatus::Continue {
            for &child in self.children(id) {
                self.walk_from(child, visit);
            }
        }
        visit(self, id, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> (SyntaxTree, Vec<NodeId>) {
        let mut tree = SyntaxTree::new();
        let table = tree.append(SyntaxTree::ROOT, NodeKind::Table);
        let row = tree.append(table, NodeKind::TableRow);
        let cells = ["a", "", "c"]
            .iter()
            .map(|text| {
                let cell = tree.append(row, NodeKind::TableCell);
                if !text.is_empty() {
                    tree.append(cell, NodeKind::Text(text.to_string()));
                }
                cell
            })
            .collect();
        (tree, cells)
    }

    #[test]
    fn test_sibling_queries() {
        let (tree, cells) = sample_row();
        assert_eq!(tree.previous_siblings(cells[0]).len(), 0);
        assert_eq!(tree.previous_siblings(cells[2]), &cells[..2]);
        assert_eq!(tree.next_siblings(cells[1]), &cells[2..]);
        assert!(tree.next_siblings(SyntaxTree::ROOT).is_empty());
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let mut tree = SyntaxTree::new();
        let para = tree.append(SyntaxTree::ROOT, NodeKind::Paragraph);
        tree.append(para, NodeKind::Text("Hello ".into()));
        let strong = tree.append(para, NodeKind::Strong);
        tree.append(strong, NodeKind::Text("world".into()));
        tree.append(para, NodeKind::CodeSpan("!".into()));
        assert_eq!(tree.text_content(para), "Hello world!");
    }

    #[test]
    fn test_walk_skip_children_still_leaves() {
        let (tree, _) = sample_row();
        let mut trace = Vec::new();
        tree.walk(&mut |tree, id, entering| {
            trace.push((id, entering));
            if matches!(tree.kind(id), NodeKind::TableCell) {
                WalkStatus::SkipChildren
            } else {
                WalkStatus::Continue
            }
        });
        // Text nodes under cells are never visited.
        assert!(trace
            .iter()
            .all(|(id, _)| !matches!(tree.kind(*id), NodeKind::Text(_))));
        // Every visited node has both an enter and a leave event.
        assert_eq!(trace.len(), 2 * (tree.len() - 2));
        assert_eq!(trace.first(), Some(&(SyntaxTree::ROOT, true)));
        assert_eq!(trace.last(), Some(&(SyntaxTree::ROOT, false)));
    }
}
