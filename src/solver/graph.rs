use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};

use crate::solver::a_star::SearchNode;

type Nd = usize;
type Ed = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    Queued,
    Duplicate,
    Unique,
}

/// Every node the search created, indexed by creation order.
#[derive(Debug)]
pub(crate) struct Graph<'a> {
    nodes: Vec<(&'a SearchNode<'a>, Type)>,
    edges: Vec<Ed>,
}

impl<'a> Graph<'a> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, node: &'a SearchNode<'a>) {
        assert_eq!(node.index, self.nodes.len(), "Nodes must be added in creation order");

        self.nodes.push((node, Type::Queued));
        if let Some(prev) = node.prev {
            self.edges.push((prev.index, node.index));
        }
    }

    pub(crate) fn mark_duplicate(&mut self, node: &SearchNode<'_>) {
        self.nodes[node.index].1 = Type::Duplicate;
    }

    pub(crate) fn mark_unique(&mut self, node: &SearchNode<'_>) {
        self.nodes[node.index].1 = Type::Unique;
    }

    pub(crate) fn write_dot<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut writer = Vec::new();
        dot::render(self, &mut writer)?;
        let s = String::from_utf8_lossy(&writer);
        let s = s.replace("digraph G {", "digraph G {\n    graph [fontname = \"hack\"];\n    node [fontname = \"hack\"];\n    edge [fontname = \"hack\"];");
        fs::write(path, &s)
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph<'a> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let node = self.nodes[*n].0;
        LabelText::EscStr(
            format!(
                "d: {}, h: {}\ncost: {}\n{}",
                node.dist,
                node.cost - node.dist,
                node.cost,
                node.board
            )
            .into(),
        )
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        let node_type = self.nodes[*n].1;
        if node_type == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        let node_type = self.nodes[*n].1;
        Some(LabelText::LabelStr(
            match node_type {
                Type::Unique => "red",
                Type::Duplicate => "gray",
                Type::Queued => return None,
            }
            .into(),
        ))
    }
}
