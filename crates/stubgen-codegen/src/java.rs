//! Java 17 program generator (Gson for JSON).

use std::collections::BTreeSet;

use indoc::indoc;
use stubgen_types::ast::{Signature, TypeExpr};

use crate::mapper::{JavaMapper, TypeMapper};
use crate::template::{argument_list, assemble, fill, indent, TemplateGenerator};

const BASE_IMPORTS: &[&str] = &[
    "import com.google.gson.*;",
    "import com.google.gson.reflect.TypeToken;",
    "import java.io.*;",
    "import java.util.*;",
];

const TREE_IMPORTS: &[&str] = &["import java.lang.reflect.Type;"];

const TREE_NODE: &str = indoc!(
    r#"
    // Definition for a binary tree node
    class TreeNode<T> {
        T val;
        TreeNode<T> left;
        TreeNode<T> right;

        TreeNode() {}

        TreeNode(T val) {
            this.val = val;
        }

        TreeNode(T val, TreeNode<T> left, TreeNode<T> right) {
            this.val = val;
            this.left = left;
            this.right = right;
        }
    }
    "#
);

const SOLUTION: &str = indoc!(
    r#"
    public class Solution {
        public #RETURN_TYPE #NAME(#PARAMS) {
            // Write your logic here
            return #DEFAULT;
        }

        // Do not edit below this line
        private static final Gson GSON = new Gson();
    #HELPERS
        public static void main(String[] args) throws IOException {
            BufferedReader reader = new BufferedReader(new InputStreamReader(System.in));
            StringBuilder input = new StringBuilder();
            String line;
            while ((line = reader.readLine()) != null) {
                input.append(line);
            }
            JsonObject data = JsonParser.parseString(input.toString()).getAsJsonObject();
    #BODY
        }
    }
    "#
);

const TREE_HELPERS: &str = indoc!(
    r#"
    private static <T> TreeNode<T> deserializeTree(JsonElement data, Type type) {
        if (data == null || !data.isJsonArray()) {
            return null;
        }
        JsonArray values = data.getAsJsonArray();
        if (values.size() == 0 || values.get(0).isJsonNull()) {
            return null;
        }
        TreeNode<T> root = new TreeNode<>(GSON.<T>fromJson(values.get(0), type));
        Queue<TreeNode<T>> queue = new LinkedList<>();
        queue.offer(root);
        int i = 1;
        while (!queue.isEmpty() && i < values.size()) {
            TreeNode<T> node = queue.poll();
            if (i < values.size() && !values.get(i).isJsonNull()) {
                node.left = new TreeNode<>(GSON.<T>fromJson(values.get(i), type));
                queue.offer(node.left);
            }
            i++;
            if (i < values.size() && !values.get(i).isJsonNull()) {
                node.right = new TreeNode<>(GSON.<T>fromJson(values.get(i), type));
                queue.offer(node.right);
            }
            i++;
        }
        return root;
    }

    private static <T> JsonArray serializeTree(TreeNode<T> root) {
        JsonArray values = new JsonArray();
        if (root == null) {
            return values;
        }
        Queue<TreeNode<T>> queue = new LinkedList<>();
        queue.offer(root);
        while (!queue.isEmpty()) {
            TreeNode<T> node = queue.poll();
            if (node == null) {
                values.add(JsonNull.INSTANCE);
                continue;
            }
            values.add(GSON.toJsonTree(node.val));
            queue.offer(node.left);
            queue.offer(node.right);
        }
        while (values.size() > 0 && values.get(values.size() - 1).isJsonNull()) {
            values.remove(values.size() - 1);
        }
        return values;
    }
    "#
);

/// Generates `public class Solution` with a Gson-based `main`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaGenerator {
    mapper: JavaMapper,
}

impl JavaGenerator {
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

    /// Runtime type handed to Gson: `int[].class` or a `TypeToken` for generics.
    fn type_literal(mapped: &str) -> String {
        if mapped.contains('<') {
            format!("new TypeToken<{mapped}>() {{}}.getType()")
        } else {
            format!("{mapped}.class")
        }
    }

    fn extraction(&self, name: &str, ty: &TypeExpr) -> String {
        let mapped = self.mapper.map_type(ty);
        match ty {
            TypeExpr::Tree(payload) => {
                let payload = match payload {
                    Some(payload) => self.mapper.map_type_argument(payload),
                    None => "Integer".to_string(),
                };
                format!(
                    "{mapped} {name} = deserializeTree(data.get(\"{name}\"), {});",
                    Self::type_literal(&payload)
                )
            }
            _ => format!(
                "{mapped} {name} = GSON.fromJson(data.get(\"{name}\"), {});",
                Self::type_literal(&mapped)
            ),
        }
    }

    fn body(&self, signature: &Signature) -> String {
        let mut body: Vec<String> = signature
            .parameters
            .iter()
            .map(|p| self.extraction(&p.name, &p.ty))
            .collect();
        body.push("Solution solution = new Solution();".to_string());
        body.push(format!(
            "{} result = solution.{}({});",
            self.mapper.map_type(&signature.returns),
            signature.function_name,
            argument_list(signature)
        ));
        let output = if signature.returns.is_tree() {
            "serializeTree(result)"
        } else {
            "result"
        };
        body.push(format!("System.out.println(GSON.toJson({output}));"));
        indent(&body.join("\n"), "        ")
    }
}

impl TemplateGenerator for JavaGenerator {
    type Mapper = JavaMapper;

    fn mapper(&self) -> &JavaMapper {
        &self.mapper
    }

    fn generate(&self, signature: &Signature) -> String {
        let uses_tree = signature.uses_tree();
        let params: Vec<String> = signature
            .parameters
            .iter()
            .map(|p| format!("{} {}", self.mapper.map_type(&p.ty), p.name))
            .collect();
        let helpers = if uses_tree {
            format!("\n{}\n", indent(TREE_HELPERS, "    "))
        } else {
            String::new()
        };
        let solution = fill(
            SOLUTION,
            &[
                ("#RETURN_TYPE", self.mapper.map_type(&signature.returns).as_str()),
                ("#NAME", signature.function_name.as_str()),
                ("#PARAMS", params.join(", ").as_str()),
                ("#DEFAULT", self.mapper.idioms().default_value(&signature.returns).as_str()),
                ("#HELPERS", helpers.as_str()),
                ("#BODY", self.body(signature).as_str()),
            ],
        );

        let imports = self.imports(signature).into_iter().collect::<Vec<_>>().join("\n");
        let mut sections = vec![imports];
        if uses_tree {
            sections.push(TREE_NODE.to_string());
        }
        sections.push(solution);
        assemble(&sections, "\n\n")
    }
}
