//! C++20 program generator (nlohmann::json for JSON).

use std::collections::BTreeSet;

use indoc::indoc;
use stubgen_types::ast::{Primitive, Signature, TypeExpr};

use crate::idioms;
use crate::mapper::{CppMapper, TypeMapper};
use crate::template::{argument_list, assemble, fill, indent, uses_graph, TemplateGenerator};

const BASE_INCLUDES: &[&str] = &[
    "#include <iostream>",
    "#include <queue>",
    "#include <sstream>",
    "#include <string>",
    "#include <vector>",
];

const PRELUDE: &str = indoc!(
    r#"
    #include <nlohmann/json.hpp>

    using namespace std;
    using json = nlohmann::json;
    "#
);

const TREE_NODE: &str = indoc!(
    r#"
    // Definition for a binary tree node
    template <typename T = int>
    struct TreeNode {
        T val;
        TreeNode *left;
        TreeNode *right;
        TreeNode() : val(), left(nullptr), right(nullptr) {}
        TreeNode(T x) : val(x), left(nullptr), right(nullptr) {}
        TreeNode(T x, TreeNode *left, TreeNode *right) : val(x), left(left), right(right) {}
    };
    "#
);

const SOLUTION: &str = indoc!(
    r#"
    class Solution {
    public:
        #RETURN_TYPE #NAME(#PARAMS) {
            // Write your logic here
            return #DEFAULT;
        }
    };
    "#
);

const TREE_HELPERS: &str = indoc!(
    r#"
    template <typename T = int>
    TreeNode<T>* deserializeTree(const json& data) {
        if (!data.is_array() || data.empty() || data[0].is_null()) {
            return nullptr;
        }
        TreeNode<T>* root = new TreeNode<T>(data[0].get<T>());
        queue<TreeNode<T>*> q;
        q.push(root);
        size_t i = 1;
        while (!q.empty() && i < data.size()) {
            TreeNode<T>* node = q.front();
            q.pop();
            if (i < data.size() && !data[i].is_null()) {
                node->left = new TreeNode<T>(data[i].get<T>());
                q.push(node->left);
            }
            i++;
            if (i < data.size() && !data[i].is_null()) {
                node->right = new TreeNode<T>(data[i].get<T>());
                q.push(node->right);
            }
            i++;
        }
        return root;
    }

    template <typename T>
    json serializeTree(TreeNode<T>* root) {
        json values = json::array();
        if (!root) {
            return values;
        }
        queue<TreeNode<T>*> q;
        q.push(root);
        while (!q.empty()) {
            TreeNode<T>* node = q.front();
            q.pop();
            if (!node) {
                values.push_back(nullptr);
                continue;
            }
            values.push_back(node->val);
            q.push(node->left);
            q.push(node->right);
        }
        while (!values.empty() && values.back().is_null()) {
            values.erase(values.size() - 1);
        }
        return values;
    }
    "#
);

// JSON object keys are strings; graph node ids are ints.
const GRAPH_HELPERS: &str = indoc!(
    r#"
    unordered_map<int, vector<int>> deserializeGraph(const json& data) {
        unordered_map<int, vector<int>> graph;
        for (auto it = data.begin(); it != data.end(); ++it) {
            graph[stoi(it.key())] = it.value().get<vector<int>>();
        }
        return graph;
    }

    json serializeGraph(const unordered_map<int, vector<int>>& graph) {
        json values = json::object();
        for (const auto& [node, neighbors] : graph) {
            values[to_string(node)] = neighbors;
        }
        return values;
    }
    "#
);

const MAIN: &str = indoc!(
    r#"
    int main() {
        stringstream buffer;
        buffer << cin.rdbuf();
        json data = json::parse(buffer.str());

    #BODY
        return 0;
    }
    "#
);

/// Generates `class Solution` plus an nlohmann::json based `main`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppGenerator {
    mapper: CppMapper,
}

impl CppGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn includes(&self, signature: &Signature) -> BTreeSet<String> {
        let mut includes = self.mapper.imports(signature.all_types());
        includes.extend(BASE_INCLUDES.iter().map(|s| s.to_string()));
        includes
    }

    fn extraction(&self, name: &str, ty: &TypeExpr) -> String {
        let mapped = self.mapper.map_type(ty);
        match ty {
            TypeExpr::Tree(payload) => {
                let payload = match payload {
                    Some(payload) => self.mapper.map_type(payload),
                    None => idioms::CPP.primitive(Primitive::Int).to_string(),
                };
                format!("{mapped} {name} = deserializeTree<{payload}>(data.at(\"{name}\"));")
            }
            TypeExpr::Graph => {
                format!("{mapped} {name} = deserializeGraph(data.at(\"{name}\"));")
            }
            _ => format!("{mapped} {name} = data.at(\"{name}\").get<{mapped}>();"),
        }
    }

    fn main(&self, signature: &Signature) -> String {
        let mut body: Vec<String> = signature
            .parameters
            .iter()
            .map(|p| self.extraction(&p.name, &p.ty))
            .collect();
        if !body.is_empty() {
            body.push(String::new());
        }
        body.push("Solution solution;".to_string());
        body.push(format!(
            "{} result = solution.{}({});",
            self.mapper.map_type(&signature.returns),
            signature.function_name,
            argument_list(signature)
        ));
        let output = match &signature.returns {
            TypeExpr::Tree(_) => "serializeTree(result)",
            TypeExpr::Graph => "serializeGraph(result)",
            _ => "json(result)",
        };
        body.push(format!("cout << {output}.dump() << endl;"));
        fill(MAIN, &[("#BODY", indent(&body.join("\n"), "    ").as_str())])
    }
}

impl TemplateGenerator for CppGenerator {
    type Mapper = CppMapper;

    fn mapper(&self) -> &CppMapper {
        &self.mapper
    }

    fn generate(&self, signature: &Signature) -> String {
        let uses_tree = signature.uses_tree();
        let params: Vec<String> = signature
            .parameters
            .iter()
            .map(|p| format!("{} {}", self.mapper.map_type(&p.ty), p.name))
            .collect();
        let solution = fill(
            SOLUTION,
            &[
                ("#RETURN_TYPE", self.mapper.map_type(&signature.returns).as_str()),
                ("#NAME", signature.function_name.as_str()),
                ("#PARAMS", params.join(", ").as_str()),
                ("#DEFAULT", self.mapper.idioms().default_value(&signature.returns).as_str()),
            ],
        );

        let includes = self.includes(signature).into_iter().collect::<Vec<_>>().join("\n");
        let mut sections = vec![format!("{includes}\n{PRELUDE}")];
        if uses_tree {
            sections.push(TREE_NODE.to_string());
        }
        sections.push(solution);
        sections.push("// Do not edit below this line".to_string());
        if uses_tree {
            sections.push(TREE_HELPERS.to_string());
        }
        if uses_graph(signature) {
            sections.push(GRAPH_HELPERS.to_string());
        }
        sections.push(self.main(signature));
        assemble(&sections, "\n\n")
    }
}
