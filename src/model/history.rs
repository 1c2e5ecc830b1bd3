//! Version history data model
//!
//! [`HistoryEvent`]s come from the lshistory parser; [`HistoryTree`] folds
//! them into a forest of branch/version nodes.

use std::ops::Index;

use crate::cleartool::constants::history::{CHECKOUT, KIND_BRANCH, KIND_VERSION};

/// One history record of an element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryEvent {
    /// Event time as printed by cleartool
    pub timestamp: String,

    /// User who performed the operation
    pub user: String,

    /// Operation verb (e.g. "checkout", "checkin", "mkbranch")
    pub operation: String,

    /// Object kind (e.g. "version", "branch")
    pub kind: String,

    /// Branch/version path, e.g. `["main", "bugfix", "3"]`
    pub path: Vec<String>,

    /// Text of the indented line following the record
    pub comment: Option<String>,

    /// Element-creation header; `path` holds the bare file name
    pub element: bool,
}

/// Marker shown in front of a node description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Branch created under an already visited branch, or a new element
    PlusSign,
    /// Revisited branch or a version following a checkout
    ReturningArrow,
    /// Fresh checkout
    CheckMark,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::PlusSign => '+',
            Glyph::ReturningArrow => '⤷',
            Glyph::CheckMark => '✓',
        }
    }
}

/// Identity of a node inside its [`HistoryTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A single path segment in the version tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNode {
    pub label: String,
    pub glyph: Glyph,
    pub user: String,
    pub operation: String,
    pub kind: String,
    pub timestamp: String,
    pub comment: Option<String>,
    children: Vec<NodeId>,
}

impl HistoryNode {
    fn from_event(label: &str, event: &HistoryEvent, glyph: Glyph) -> Self {
        Self {
            label: label.to_string(),
            glyph,
            user: event.user.clone(),
            operation: event.operation.clone(),
            kind: event.kind.clone(),
            timestamp: event.timestamp.clone(),
            comment: None,
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Expandable iff some later event extended this node's path
    pub fn is_collapsible(&self) -> bool {
        !self.children.is_empty()
    }

    /// Text rendered next to the label
    ///
    /// Format: `✓ checkout version • alice 01-Jan-24  ≡my comment`
    pub fn description(&self) -> String {
        let comment = match &self.comment {
            Some(comment) => format!("  ≡{}", comment),
            None => " ".to_string(),
        };
        format!(
            "{} {} {} • {} {}{}",
            self.glyph.symbol(),
            self.operation,
            self.kind,
            self.user,
            self.timestamp,
            comment
        )
    }
}

/// Forest of history nodes
///
/// Nodes live in an arena and are never removed; a [`NodeId`] stays valid
/// for the lifetime of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryTree {
    nodes: Vec<HistoryNode>,
    roots: Vec<NodeId>,
}

impl HistoryTree {
    /// Fold an ordered event list into a forest
    pub fn from_events(events: &[HistoryEvent]) -> Self {
        let mut builder = TreeBuilder::default();
        for event in events {
            builder.insert(event);
        }
        builder.tree
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&HistoryNode> {
        self.nodes.get(id.0)
    }

    /// Total node count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Siblings under `parent` (`None` = forest roots)
    pub fn siblings(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            Some(id) => &self[id].children,
            None => &self.roots,
        }
    }

    /// First sibling under `parent` carrying `label`
    pub fn find_child(&self, parent: Option<NodeId>, label: &str) -> Option<NodeId> {
        self.siblings(parent)
            .iter()
            .copied()
            .find(|&id| self[id].label == label)
    }

    fn push(&mut self, parent: Option<NodeId>, node: HistoryNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }
}

impl Index<NodeId> for HistoryTree {
    type Output = HistoryNode;

    fn index(&self, id: NodeId) -> &HistoryNode {
        &self.nodes[id.0]
    }
}

/// Folding state for one build
#[derive(Default)]
struct TreeBuilder {
    tree: HistoryTree,
    /// Last created node; receives the comment of the event being folded
    cursor: Option<NodeId>,
}

impl TreeBuilder {
    fn insert(&mut self, event: &HistoryEvent) {
        if event.element {
            if let Some(name) = event.path.first() {
                self.create(None, HistoryNode::from_event(name, event, Glyph::PlusSign));
            }
        } else {
            self.insert_path(event);
        }

        if let (Some(comment), Some(cursor)) = (&event.comment, self.cursor) {
            self.tree.nodes[cursor.0].comment = Some(comment.clone());
        }
    }

    fn insert_path(&mut self, event: &HistoryEvent) {
        let last = event.path.len().saturating_sub(1);
        let mut parent: Option<NodeId> = None;

        for (depth, segment) in event.path.iter().enumerate() {
            let Some(found) = self.tree.find_child(parent, segment) else {
                let glyph = if event.operation == CHECKOUT {
                    Glyph::CheckMark
                } else {
                    Glyph::ReturningArrow
                };
                parent = Some(self.create(parent, HistoryNode::from_event(segment, event, glyph)));
                continue;
            };

            if depth == last {
                let existing = &self.tree[found];
                let follows_checkout =
                    existing.kind == KIND_VERSION && existing.operation == CHECKOUT;

                if event.kind == KIND_BRANCH {
                    let node = HistoryNode::from_event(segment, event, Glyph::PlusSign);
                    self.create(Some(found), node);
                } else if event.kind == KIND_VERSION && follows_checkout {
                    // Keep the version that followed the checkout visible
                    let node = HistoryNode::from_event(segment, event, Glyph::ReturningArrow);
                    self.create(parent, node);
                }
            }

            parent = Some(found);
        }
    }

    fn create(&mut self, parent: Option<NodeId>, node: HistoryNode) -> NodeId {
        let id = self.tree.push(parent, node);
        self.cursor = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(operation: &str, kind: &str, path: &[&str]) -> HistoryEvent {
        HistoryEvent {
            timestamp: "01-Jan-24".to_string(),
            user: "alice".to_string(),
            operation: operation.to_string(),
            kind: kind.to_string(),
            path: path.iter().map(|s| s.to_string()).collect(),
            comment: None,
            element: false,
        }
    }

    fn with_comment(mut event: HistoryEvent, comment: &str) -> HistoryEvent {
        event.comment = Some(comment.to_string());
        event
    }

    fn labels(tree: &HistoryTree, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| tree[id].label.clone()).collect()
    }

    #[test]
    fn test_empty_events_empty_forest() {
        let tree = HistoryTree::from_events(&[]);
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }

    #[test]
    fn test_single_checkout() {
        let tree = HistoryTree::from_events(&[event("checkout", "version", &["main", "1"])]);

        assert_eq!(labels(&tree, tree.roots()), vec!["main"]);
        let main = &tree[tree.roots()[0]];
        assert_eq!(labels(&tree, main.children()), vec!["1"]);

        let leaf = &tree[main.children()[0]];
        assert_eq!(leaf.glyph, Glyph::CheckMark);
        assert!(!leaf.is_collapsible());
        assert!(main.is_collapsible());
    }

    #[test]
    fn test_non_checkout_creates_returning_arrow() {
        let tree = HistoryTree::from_events(&[event("checkin", "version", &["main", "1"])]);
        let main = &tree[tree.roots()[0]];
        assert_eq!(main.glyph, Glyph::ReturningArrow);
        assert_eq!(tree[main.children()[0]].glyph, Glyph::ReturningArrow);
    }

    #[test]
    fn test_shared_prefix_reuses_node() {
        let events = [
            event("checkin", "version", &["main", "1"]),
            event("checkin", "version", &["main", "2"]),
        ];
        let tree = HistoryTree::from_events(&events);

        assert_eq!(tree.roots().len(), 1);
        let main = tree.roots()[0];
        assert_eq!(tree.find_child(None, "main"), Some(main));
        assert_eq!(labels(&tree, tree[main].children()), vec!["1", "2"]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_divergence_at_first_differing_segment() {
        let tree = HistoryTree::from_events(&[
            event("checkin", "version", &["main", "bugfix", "1"]),
            event("checkin", "version", &["main", "feature", "1"]),
        ]);

        let main = tree.roots()[0];
        assert_eq!(labels(&tree, tree[main].children()), vec!["bugfix", "feature"]);
    }

    #[test]
    fn test_branch_revisit_appends_child() {
        let first = HistoryTree::from_events(&[event("checkin", "version", &["main", "1"])]);
        let tree = HistoryTree::from_events(&[
            event("checkin", "version", &["main", "1"]),
            event("mkbranch", "branch", &["main"]),
        ]);

        assert!(tree.len() > first.len());
        let main = tree.roots()[0];
        let children = tree[main].children();
        assert_eq!(labels(&tree, children), vec!["1", "main"]);
        assert_eq!(tree[children[1]].glyph, Glyph::PlusSign);
    }

    #[test]
    fn test_version_after_checkout_adds_sibling() {
        let tree = HistoryTree::from_events(&[
            event("checkout", "version", &["main", "3"]),
            event("checkin", "version", &["main", "3"]),
        ]);

        let main = tree.roots()[0];
        let children = tree[main].children();
        assert_eq!(labels(&tree, children), vec!["3", "3"]);
        assert_eq!(tree[children[0]].glyph, Glyph::CheckMark);
        assert_eq!(tree[children[1]].glyph, Glyph::ReturningArrow);
        assert_eq!(tree[children[1]].operation, "checkin");
    }

    #[test]
    fn test_duplicate_version_suppressed() {
        let tree = HistoryTree::from_events(&[
            event("checkin", "version", &["main", "3"]),
            event("checkin", "version", &["main", "3"]),
        ]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_comment_on_last_created_node() {
        let tree = HistoryTree::from_events(&[with_comment(
            event("checkout", "version", &["main", "3"]),
            "my comment",
        )]);

        let main = tree.roots()[0];
        let leaf = &tree[tree[main].children()[0]];
        assert_eq!(leaf.comment.as_deref(), Some("my comment"));
        assert_eq!(tree[main].comment, None);
        assert!(leaf.description().contains("my comment"));
        assert!(leaf.description().contains("alice"));
    }

    #[test]
    fn test_comment_without_new_node_goes_to_previous_node() {
        let tree = HistoryTree::from_events(&[
            event("checkin", "version", &["main", "3"]),
            with_comment(event("checkin", "version", &["main", "3"]), "again"),
        ]);

        let main = tree.roots()[0];
        assert_eq!(tree[tree[main].children()[0]].comment.as_deref(), Some("again"));
    }

    #[test]
    fn test_comment_with_no_node_dropped() {
        let tree = HistoryTree::from_events(&[with_comment(event("checkin", "version", &[]), "lost")]);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_element_event_adds_root() {
        let mut created = event("create file", "element", &["foo.c"]);
        created.element = true;
        let tree = HistoryTree::from_events(&[event("checkin", "version", &["main", "1"]), created]);

        assert_eq!(labels(&tree, tree.roots()), vec!["main", "foo.c"]);
        assert_eq!(tree[tree.roots()[1]].glyph, Glyph::PlusSign);
    }

    #[test]
    fn test_build_is_deterministic() {
        let events = [
            event("checkout", "version", &["main", "3"]),
            event("mkbranch", "branch", &["main", "bugfix"]),
            with_comment(event("checkin", "version", &["main", "bugfix", "1"]), "fix"),
        ];
        assert_eq!(HistoryTree::from_events(&events), HistoryTree::from_events(&events));
    }

    #[test]
    fn test_description_without_comment() {
        let tree = HistoryTree::from_events(&[event("checkout", "version", &["main"])]);
        assert_eq!(
            tree[tree.roots()[0]].description(),
            "✓ checkout version • alice 01-Jan-24 "
        );
    }

    #[test]
    fn test_description_with_comment() {
        let tree = HistoryTree::from_events(&[with_comment(
            event("checkout", "version", &["main"]),
            "wip",
        )]);
        assert_eq!(
            tree[tree.roots()[0]].description(),
            "✓ checkout version • alice 01-Jan-24  ≡wip"
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let tree = HistoryTree::default();
        assert!(tree.get(NodeId(0)).is_none());
    }
}
