use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};

/// Handle to a node slot inside a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);
}

#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) value: Option<char>,
    pub(crate) children: BTreeMap<char, NodeId>,
    pub(crate) is_terminating: bool,
    /// Back link for pruning walks. Never owns anything.
    pub(crate) parent: Option<NodeId>,
}

impl TrieNode {
    fn new(value: char, parent: NodeId) -> TrieNode {
        TrieNode {
            value: Some(value),
            children: BTreeMap::new(),
            is_terminating: false,
            parent: Some(parent),
        }
    }

    pub(crate) fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("is_terminating", &self.is_terminating)
            .field("parent", &self.parent)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Owns every node of a trie. Slot 0 is always the root; freed slots are
/// recycled by later insertions.
pub(crate) struct NodeArena {
    slots: Vec<Option<TrieNode>>,
    free: Vec<usize>,
}

impl NodeArena {
    pub(crate) fn new() -> NodeArena {
        NodeArena {
            slots: vec![Some(TrieNode::default())],
            free: vec![],
        }
    }

    /// Returns the child of `parent` keyed by `value`, creating it if needed.
    pub(crate) fn add_child(&mut self, parent: NodeId, value: char) -> NodeId {
        if let Some(existing) = self[parent].child(value) {
            return existing;
        }
        let node = TrieNode::new(value, parent);
        let id = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };
        self[parent].children.insert(value, id);
        id
    }

    /// Unlinks a leaf from its parent and frees its slot. Returns the parent.
    /// The root cannot be detached.
    pub(crate) fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        if id == NodeId::ROOT {
            return None;
        }
        debug_assert!(self[id].is_leaf(), "only leaves can be detached");
        let node = self.slots[id.0].take()?;
        self.free.push(id.0);
        let parent = node.parent?;
        if let Some(value) = node.value {
            self[parent].children.remove(&value);
        }
        Some(parent)
    }

    /// Number of live nodes, root included.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = TrieNode;

    fn index(&self, id: NodeId) -> &TrieNode {
        self.slots[id.0].as_ref().expect("dangling trie node id")
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut TrieNode {
        self.slots[id.0].as_mut().expect("dangling trie node id")
    }
}
