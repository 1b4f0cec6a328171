//! Level-order binary tree codec.
//!
//! Trees travel as JSON arrays in breadth-first order with `null` for a
//! missing child: `[3,9,20,null,null,15,7]`. Trailing nulls are dropped on
//! output and an empty tree is `[]`. Every generated program carries a
//! textual copy of this algorithm; this module is the native reference.

use std::collections::VecDeque;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{EvalError, EvalResult};

/// A binary tree node carrying a payload of type `T`.
///
/// Construction, cloning, comparison and drop never recurse, so a
/// degenerate chain of any length is handled without growing the stack.
#[derive(Debug)]
pub struct TreeNode<T> {
    pub val: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    pub fn new(val: T) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(
        val: T,
        left: Option<Box<TreeNode<T>>>,
        right: Option<Box<TreeNode<T>>>,
    ) -> Self {
        Self { val, left, right }
    }

    /// Number of nodes in this subtree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    fn clone(&self) -> Self {
        match deserialize_level_order(&serialize_level_order(Some(self))) {
            Some(root) => *root,
            None => TreeNode::new(self.val.clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.val != b.val {
                return false;
            }
            for (x, y) in [(&a.left, &b.left), (&a.right, &b.right)] {
                match (x, y) {
                    (Some(x), Some(y)) => stack.push((&**x, &**y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

/// Build a tree from level-order values.
///
/// Returns `None` for an empty slice or a null root. Values past the last
/// node that can take children are ignored, as in the generated helpers.
pub fn deserialize_level_order<T: Clone>(values: &[Option<T>]) -> Option<Box<TreeNode<T>>> {
    values.first()?.as_ref()?;

    // parents[i] = (parent index, is right child) of the node at values[i]
    let mut parents: Vec<Option<(usize, bool)>> = vec![None; values.len()];
    let mut queue = VecDeque::from([0usize]);
    let mut i = 1;
    while let Some(parent) = queue.pop_front() {
        if i >= values.len() {
            break;
        }
        if values[i].is_some() {
            parents[i] = Some((parent, false));
            queue.push_back(i);
        }
        i += 1;
        if i < values.len() && values[i].is_some() {
            parents[i] = Some((parent, true));
            queue.push_back(i);
        }
        i += 1;
    }

    let mut nodes: Vec<Option<Box<TreeNode<T>>>> = values
        .iter()
        .map(|v| v.clone().map(|v| Box::new(TreeNode::new(v))))
        .collect();
    // a child always sits after its parent, so attaching in reverse
    // order moves every subtree exactly once
    for i in (1..nodes.len()).rev() {
        let Some((parent, is_right)) = parents[i] else {
            continue;
        };
        let child = nodes[i].take();
        if let Some(node) = nodes[parent].as_mut() {
            if is_right {
                node.right = child;
            } else {
                node.left = child;
            }
        }
    }
    nodes.into_iter().next().flatten()
}

/// Flatten a tree into level-order values with trailing `None`s removed.
pub fn serialize_level_order<T: Clone>(root: Option<&TreeNode<T>>) -> Vec<Option<T>> {
    let mut values = Vec::new();
    let Some(root) = root else {
        return values;
    };
    let mut queue: VecDeque<Option<&TreeNode<T>>> = VecDeque::from([Some(root)]);
    while let Some(slot) = queue.pop_front() {
        match slot {
            Some(node) => {
                values.push(Some(node.val.clone()));
                queue.push_back(node.left.as_deref());
                queue.push_back(node.right.as_deref());
            }
            None => values.push(None),
        }
    }
    while matches!(values.last(), Some(None)) {
        values.pop();
    }
    values
}

/// Decode a level-order JSON array. `null` is accepted as the empty tree.
pub fn tree_from_json<T: DeserializeOwned + Clone>(
    value: &Value,
) -> EvalResult<Option<Box<TreeNode<T>>>> {
    let items = match value {
        Value::Null => return Ok(None),
        Value::Array(items) => items,
        other => return Err(EvalError::mismatch("tree", "array", other)),
    };
    let values = items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Null => Ok(None),
            item => serde_json::from_value(item.clone())
                .map(Some)
                .map_err(|e| EvalError::TypeMismatch {
                    context: format!("tree[{i}]"),
                    expected: std::any::type_name::<T>().to_string(),
                    found: e.to_string(),
                }),
        })
        .collect::<EvalResult<Vec<Option<T>>>>()?;
    Ok(deserialize_level_order(&values))
}

/// Encode a tree as a level-order JSON array.
pub fn tree_to_json<T: Serialize + Clone>(root: Option<&TreeNode<T>>) -> EvalResult<Value> {
    serde_json::to_value(serialize_level_order(root)).map_err(|e| EvalError::Encode(e.to_string()))
}
