//! Python 3 program generator.

use std::collections::BTreeSet;

use indoc::indoc;
use stubgen_types::ast::{Signature, TypeExpr};

use crate::mapper::{PythonMapper, TypeMapper};
use crate::template::{argument_list, assemble, fill, indent, TemplateGenerator};

const BASE_IMPORTS: &[&str] = &["import json", "import sys"];

const TREE_IMPORTS: &[&str] = &[
    "from collections import deque",
    "from typing import Generic",
    "from typing import Optional",
    "from typing import TypeVar",
];

const TREE_NODE: &str = indoc!(
    r#"
    T = TypeVar("T")


    # Definition for a binary tree node
    class TreeNode(Generic[T]):
        def __init__(
            self,
            val: Optional[T] = None,
            left: "Optional[TreeNode[T]]" = None,
            right: "Optional[TreeNode[T]]" = None,
        ):
            self.val = val
            self.left = left
            self.right = right
    "#
);

const SOLUTION: &str = indoc!(
    r#"
    class Solution:
        def #NAME(#PARAMS) -> #RETURN_TYPE:
            # Write your logic here
            return #DEFAULT
    "#
);

const TREE_HELPERS: &str = indoc!(
    r#"
    def deserialize_tree(values):
        if not values or values[0] is None:
            return None
        root = TreeNode(values[0])
        queue = deque([root])
        i = 1
        while queue and i < len(values):
            node = queue.popleft()
            if i < len(values) and values[i] is not None:
                node.left = TreeNode(values[i])
                queue.append(node.left)
            i += 1
            if i < len(values) and values[i] is not None:
                node.right = TreeNode(values[i])
                queue.append(node.right)
            i += 1
        return root


    def serialize_tree(root):
        if root is None:
            return []
        values = []
        queue = deque([root])
        while queue:
            node = queue.popleft()
            if node is None:
                values.append(None)
                continue
            values.append(node.val)
            queue.append(node.left)
            queue.append(node.right)
        while values and values[-1] is None:
            values.pop()
        return values
    "#
);

const MAIN: &str = indoc!(
    r#"
    def main():
    #BODY


    if __name__ == "__main__":
        main()
    "#
);

/// Generates `class Solution` plus a stdin/stdout JSON scaffold.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonGenerator {
    mapper: PythonMapper,
}

impl PythonGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn imports(&self, signature: &Signature) -> BTreeSet<String> {
        let mut imports = self.mapper.imports(signature.all_types());
        imports.extend(BASE_IMPORTS.iter().map(|s| s.to_string()));
        if signature.uses_tree() {
            imports.extend(TREE_IMPORTS.iter().map(|s| s.to_string()));
        }
        imports
    }

    fn solution(&self, signature: &Signature) -> String {
        let params: Vec<String> = std::iter::once("self".to_string())
            .chain(
                signature
                    .parameters
                    .iter()
                    .map(|p| format!("{}: {}", p.name, self.mapper.map_type(&p.ty))),
            )
            .collect();
        fill(
            SOLUTION,
            &[
                ("#NAME", signature.function_name.as_str()),
                ("#PARAMS", params.join(", ").as_str()),
                ("#RETURN_TYPE", self.mapper.map_type(&signature.returns).as_str()),
                ("#DEFAULT", self.mapper.idioms().default_value(&signature.returns).as_str()),
            ],
        )
    }

    fn main(&self, signature: &Signature) -> String {
        let mut body = vec!["data = json.loads(sys.stdin.read())".to_string()];
        for param in &signature.parameters {
            let name = &param.name;
            body.push(match &param.ty {
                TypeExpr::Tree(_) => format!("{name} = deserialize_tree(data[\"{name}\"])"),
                TypeExpr::Graph => format!(
                    "{name} = {{int(key): value for key, value in data[\"{name}\"].items()}}"
                ),
                _ => format!("{name} = data[\"{name}\"]"),
            });
        }
        body.push("solution = Solution()".to_string());
        body.push(format!(
            "result = solution.{}({})",
            signature.function_name,
            argument_list(signature)
        ));
        let output = if signature.returns.is_tree() {
            "serialize_tree(result)"
        } else {
            "result"
        };
        body.push(format!("print(json.dumps({output}))"));

        fill(MAIN, &[("#BODY", indent(&body.join("\n"), "    ").as_str())])
    }
}

impl TemplateGenerator for PythonGenerator {
    type Mapper = PythonMapper;

    fn mapper(&self) -> &PythonMapper {
        &self.mapper
    }

    fn generate(&self, signature: &Signature) -> String {
        let uses_tree = signature.uses_tree();
        let imports = self.imports(signature).into_iter().collect::<Vec<_>>().join("\n");
        let mut sections = vec![imports];
        if uses_tree {
            sections.push(TREE_NODE.to_string());
        }
        sections.push(self.solution(signature));
        sections.push("# Do not edit below this line".to_string());
        if uses_tree {
            sections.push(TREE_HELPERS.to_string());
        }
        sections.push(self.main(signature));
        assemble(&sections, "\n\n\n")
    }
}
