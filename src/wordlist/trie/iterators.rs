use crate::wordlist::trie::node::{NodeArena, NodeId};

/// Pre-order walk yielding every stored word below a starting node.
///
/// Uses an explicit stack, so word length does not bound recursion depth.
/// Children are visited in character order, which makes the output sorted.
pub struct Words<'a> {
    nodes: &'a NodeArena,
    stack: Vec<(NodeId, String)>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(nodes: &'a NodeArena, start: NodeId, path: String) -> Words<'a> {
        Words {
            nodes,
            stack: vec![(start, path)],
        }
    }

    pub(crate) fn empty(nodes: &'a NodeArena) -> Words<'a> {
        Words {
            nodes,
            stack: vec![],
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, path)) = self.stack.pop() {
            let node = &self.nodes[id];
            // reversed so the smallest child is popped first
            for (&c, &child) in node.children.iter().rev() {
                let mut child_path = String::with_capacity(path.len() + c.len_utf8());
                child_path.push_str(&path);
                child_path.push(c);
                self.stack.push((child, child_path));
            }
            if node.is_terminating {
                return Some(path);
            }
        }
        None
    }
}
