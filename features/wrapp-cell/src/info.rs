//! Info trees describing what cells contribute to a container.
//!
//! A tree is built from [InfoNode]s and leaf lines and rendered with [Display].

use std::fmt::{self, Display, Write};

/// Spaces each nesting level is indented by
const INDENT_BY: usize = 4;

/// Part of an info tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Info {
    /// A single line
    Leaf(String),
    Node(InfoNode),
}

impl From<InfoNode> for Info {
    fn from(node: InfoNode) -> Self {
        Info::Node(node)
    }
}

impl Info {
    /// Writes the tree starting at the given indentation
    pub fn print(&self, indent: usize, w: &mut impl Write) -> fmt::Result {
        match self {
            Info::Leaf(line) => writeln!(w, "{:indent$}{}", "", line),
            Info::Node(node) => node.print(indent, w),
        }
    }
}

impl Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(0, f)
    }
}

/// A labeled node with child lines and nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoNode {
    header: String,
    condensed: bool,
    children: Vec<Info>,
}

impl InfoNode {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }

    /// Renders children without blank lines between them
    pub fn set_condensed(&mut self) {
        self.condensed = true;
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn children(&self) -> &[Info] {
        &self.children
    }

    /// Appends a single line
    pub fn add_leaf(&mut self, line: impl Display) {
        self.children.push(Info::Leaf(line.to_string()));
    }

    pub fn add(&mut self, child: impl Into<Info>) {
        self.children.push(child.into());
    }

    /// Writes the node starting at the given indentation
    ///
    /// A node without header writes its children at the same indentation.
    pub fn print(&self, mut indent: usize, w: &mut impl Write) -> fmt::Result {
        if !self.header.is_empty() {
            writeln!(w, "{:indent$}{}:", "", self.header)?;
            indent += INDENT_BY;
        }

        for (i, child) in self.children.iter().enumerate() {
            child.print(indent, w)?;
            if !self.condensed && i != self.children.len() - 1 {
                writeln!(w)?;
            }
        }
        Ok(())
    }
}

impl Display for InfoNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(0, f)
    }
}
