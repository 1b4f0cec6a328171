//! JavaScript (Node.js) program generator.

use indoc::indoc;
use stubgen_types::ast::Signature;

use crate::mapper::{JavaScriptMapper, TypeMapper};
use crate::template::{argument_list, assemble, fill, indent, TemplateGenerator};

const TREE_NODE: &str = indoc!(
    r#"
    // Definition for a binary tree node
    function TreeNode(val, left, right) {
        this.val = (val === undefined ? 0 : val);
        this.left = (left === undefined ? null : left);
        this.right = (right === undefined ? null : right);
    }
    "#
);

const SOLUTION: &str = indoc!(
    r#"
    /**
    #DOC
     */
    function #NAME(#PARAMS) {
        // Write your logic here
        return #DEFAULT;
    }
    "#
);

const TREE_HELPERS: &str = indoc!(
    r#"
    function deserializeTree(values) {
        if (!Array.isArray(values) || values.length === 0 || values[0] === null) {
            return null;
        }
        const root = new TreeNode(values[0]);
        const queue = [root];
        let i = 1;
        while (queue.length > 0 && i < values.length) {
            const node = queue.shift();
            if (i < values.length && values[i] !== null) {
                node.left = new TreeNode(values[i]);
                queue.push(node.left);
            }
            i++;
            if (i < values.length && values[i] !== null) {
                node.right = new TreeNode(values[i]);
                queue.push(node.right);
            }
            i++;
        }
        return root;
    }

    function serializeTree(root) {
        if (!root) {
            return [];
        }
        const values = [];
        const queue = [root];
        while (queue.length > 0) {
            const node = queue.shift();
            if (!node) {
                values.push(null);
                continue;
            }
            values.push(node.val);
            queue.push(node.left);
            queue.push(node.right);
        }
        while (values.length > 0 && values[values.length - 1] === null) {
            values.pop();
        }
        return values;
    }
    "#
);

const MAIN: &str = indoc!(
    r#"
    const readline = require('readline');

    const rl = readline.createInterface({ input: process.stdin });
    const lines = [];
    rl.on('line', (line) => lines.push(line));
    rl.on('close', () => {
    #BODY
    });
    "#
);

/// Generates a top-level function with JSDoc plus a `readline` scaffold.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptGenerator {
    mapper: JavaScriptMapper,
}

impl JavaScriptGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn jsdoc(&self, signature: &Signature) -> String {
        let mut lines: Vec<String> = signature
            .parameters
            .iter()
            .map(|p| format!(" * @param {{{}}} {}", self.mapper.map_type(&p.ty), p.name))
            .collect();
        lines.push(format!(" * @return {{{}}}", self.mapper.map_type(&signature.returns)));
        lines.join("\n")
    }

    fn main(&self, signature: &Signature) -> String {
        let mut body = vec!["const data = JSON.parse(lines.join('\\n'));".to_string()];
        for param in &signature.parameters {
            let name = &param.name;
            body.push(if param.ty.is_tree() {
                format!("const {name} = deserializeTree(data[\"{name}\"]);")
            } else {
                format!("const {name} = data[\"{name}\"];")
            });
        }
        body.push(format!(
            "const result = {}({});",
            signature.function_name,
            argument_list(signature)
        ));
        let output = if signature.returns.is_tree() {
            "serializeTree(result)"
        } else {
            "result"
        };
        body.push(format!("console.log(JSON.stringify({output}));"));
        fill(MAIN, &[("#BODY", indent(&body.join("\n"), "    ").as_str())])
    }
}

impl TemplateGenerator for JavaScriptGenerator {
    type Mapper = JavaScriptMapper;

    fn mapper(&self) -> &JavaScriptMapper {
        &self.mapper
    }

    fn generate(&self, signature: &Signature) -> String {
        let uses_tree = signature.uses_tree();
        let solution = fill(
            SOLUTION,
            &[
                ("#DOC", self.jsdoc(signature).as_str()),
                ("#NAME", signature.function_name.as_str()),
                ("#PARAMS", argument_list(signature).as_str()),
                ("#DEFAULT", self.mapper.idioms().default_value(&signature.returns).as_str()),
            ],
        );

        let mut sections = Vec::new();
        if uses_tree {
            sections.push(TREE_NODE.to_string());
        }
        sections.push(solution);
        sections.push("// Do not edit below this line".to_string());
        if uses_tree {
            sections.push(TREE_HELPERS.to_string());
        }
        sections.push(self.main(signature));
        assemble(&sections, "\n\n")
    }
}
