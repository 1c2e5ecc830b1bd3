//! History View for browsing the version tree of the active element
//!
//! The tree sits under a synthetic "Changes" root. Every node starts
//! expanded; the view flattens the visible part into rows after each change.

mod input;
mod render;

use std::collections::HashSet;

use crate::model::{HistoryNode, HistoryTree, NodeId};
use crate::ui::navigation::ListCursor;

/// Action returned by the History View after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// No action needed
    None,
    /// Fetch the history of the active file
    Fetch,
}

/// One visible row of the flattened tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRow {
    /// `None` for the "Changes" root
    pub node: Option<NodeId>,
    pub depth: usize,
}

const ROOT_ROW: HistoryRow = HistoryRow {
    node: None,
    depth: 0,
};

/// History View state
#[derive(Debug)]
pub struct HistoryView {
    tree: HistoryTree,
    /// File whose history is shown
    element: Option<String>,
    collapsed: HashSet<NodeId>,
    root_collapsed: bool,
    rows: Vec<HistoryRow>,
    pub(super) cursor: ListCursor,
}

impl Default for HistoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryView {
    pub fn new() -> Self {
        Self {
            tree: HistoryTree::default(),
            element: None,
            collapsed: HashSet::new(),
            root_collapsed: false,
            rows: vec![ROOT_ROW],
            cursor: ListCursor::default(),
        }
    }

    /// Replace the displayed tree; expansion and selection are reset
    pub fn set_tree(&mut self, element: impl Into<String>, tree: HistoryTree) {
        self.tree = tree;
        self.element = Some(element.into());
        self.collapsed.clear();
        self.root_collapsed = false;
        self.cursor.reset();
        self.rebuild_rows();
    }

    /// Drop the tree, back to the fetch hint
    pub fn clear(&mut self) {
        self.tree = HistoryTree::default();
        self.element = None;
        self.collapsed.clear();
        self.cursor.reset();
        self.rebuild_rows();
    }

    pub fn tree(&self) -> &HistoryTree {
        &self.tree
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.selected
    }

    pub fn selected_row(&self) -> Option<HistoryRow> {
        self.rows.get(self.cursor.selected).copied()
    }

    /// Node under the cursor (`None` on the "Changes" root)
    pub fn selected_node(&self) -> Option<&HistoryNode> {
        self.selected_row()
            .and_then(|row| row.node)
            .and_then(|id| self.tree.get(id))
    }

    /// Whether the row can be expanded or collapsed
    pub fn is_collapsible(&self, row: HistoryRow) -> bool {
        match row.node {
            Some(id) => self.tree[id].is_collapsible(),
            None => !self.tree.is_empty(),
        }
    }

    pub fn is_expanded(&self, row: HistoryRow) -> bool {
        self.is_collapsible(row)
            && match row.node {
                Some(id) => !self.collapsed.contains(&id),
                None => !self.root_collapsed,
            }
    }

    pub fn select_next(&mut self) {
        self.cursor.next(self.rows.len());
    }

    pub fn select_prev(&mut self) {
        self.cursor.prev();
    }

    pub fn select_first(&mut self) {
        self.cursor.first();
    }

    pub fn select_last(&mut self) {
        self.cursor.last(self.rows.len());
    }

    pub fn toggle_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            let expanded = self.is_expanded(row);
            self.set_expanded(row, !expanded);
        }
    }

    pub fn expand_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            self.set_expanded(row, true);
        }
    }

    /// Collapse the selected node, or jump to its parent row when it is
    /// already collapsed or a leaf
    pub fn collapse_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if self.is_expanded(row) {
            self.set_expanded(row, false);
        } else if let Some(parent) = self.parent_row_index(self.cursor.selected) {
            self.cursor.selected = parent;
        }
    }

    fn set_expanded(&mut self, row: HistoryRow, expanded: bool) {
        if !self.is_collapsible(row) {
            return;
        }
        match row.node {
            Some(id) if expanded => {
                self.collapsed.remove(&id);
            }
            Some(id) => {
                self.collapsed.insert(id);
            }
            None => self.root_collapsed = !expanded,
        }
        self.rebuild_rows();
    }

    fn parent_row_index(&self, index: usize) -> Option<usize> {
        let depth = self.rows.get(index)?.depth;
        self.rows[..index].iter().rposition(|row| row.depth < depth)
    }

    fn rebuild_rows(&mut self) {
        let mut rows = vec![ROOT_ROW];

        if self.is_expanded(ROOT_ROW) {
            let mut stack: Vec<(NodeId, usize)> =
                self.tree.roots().iter().rev().map(|&id| (id, 1)).collect();

            while let Some((id, depth)) = stack.pop() {
                let row = HistoryRow {
                    node: Some(id),
                    depth,
                };
                rows.push(row);
                if self.is_expanded(row) {
                    stack.extend(
                        self.tree[id]
                            .children()
                            .iter()
                            .rev()
                            .map(|&child| (child, depth + 1)),
                    );
                }
            }
        }

        self.rows = rows;
        self.cursor.clamp(self.rows.len());
    }
}
