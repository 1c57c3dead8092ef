use crate::dependents_analysis::domain::DependentsTree;
use crate::ports::outbound::DependentsRenderer;
use crate::shared::Result;

/// Spaces added per nesting step
const INDENT_STEP: usize = 2;

/// YamlRenderer adapter writing the dependents tree as block-style YAML
///
/// Layout for a root with one dependent:
///
/// ```yaml
/// name: "core"
/// dependents:
///   "implementation":
///     - name: "app"
/// ```
///
/// All scalars are double-quoted. Characters a YAML reader would fold, strip
/// or reject (controls, Unicode line separators, BOM) are written as escapes.
pub struct YamlRenderer;

impl YamlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a scalar as a YAML double-quoted string
    fn quote(value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for c in value.chars() {
            match c {
                '"' => quoted.push_str("\\\""),
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                c if Self::needs_escape(c) => {
                    quoted.push_str(&format!("\\u{:04X}", u32::from(c)));
                }
                _ => quoted.push(c),
            }
        }
        quoted.push('"');
        quoted
    }

    /// Non-printable or line-breaking in YAML
    fn needs_escape(c: char) -> bool {
        c.is_control()
            || matches!(
                c,
                '\u{2028}' | '\u{2029}' | '\u{FEFF}' | '\u{FFFE}' | '\u{FFFF}'
            )
    }

    /// Writes `node` as a mapping whose keys start at column `key_indent`.
    /// `first_line_prefix` replaces the indentation of the first key (used for `- ` items).
    fn render_node(
        output: &mut String,
        node: &DependentsTree,
        key_indent: usize,
        first_line_prefix: &str,
    ) {
        let pad = " ".repeat(key_indent);
        output.push_str(first_line_prefix);
        output.push_str(&format!("name: {}\n", Self::quote(&node.name)));

        if node.dependents.is_empty() {
            return;
        }

        output.push_str(&format!("{}dependents:\n", pad));

        let tag_indent = key_indent + INDENT_STEP;
        let item_indent = tag_indent + INDENT_STEP;
        for (configuration, dependents) in &node.dependents {
            output.push_str(&format!(
                "{}{}:\n",
                " ".repeat(tag_indent),
                Self::quote(configuration)
            ));

            let item_prefix = format!("{}- ", " ".repeat(item_indent));
            for dependent in dependents {
                Self::render_node(output, dependent, item_indent + INDENT_STEP, &item_prefix);
            }
        }
    }
}

impl Default for YamlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DependentsRenderer for YamlRenderer {
    fn render(&self, tree: &DependentsTree) -> Result<String> {
        let mut output = String::new();
        Self::render_node(&mut output, tree, 0, "");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_tree() -> DependentsTree {
        let web = DependentsTree::leaf("example:web");
        let app = DependentsTree::new(
            "example:app",
            BTreeMap::from([("implementation".to_string(), vec![web])]),
        );
        DependentsTree::new(
            "example:core",
            BTreeMap::from([
                ("api".to_string(), vec![DependentsTree::leaf("example:service")]),
                (
                    "implementation".to_string(),
                    vec![app, DependentsTree::leaf("example:worker")],
                ),
            ]),
        )
    }

    #[test]
    fn test_render_root_without_dependents() {
        let output = YamlRenderer::new()
            .render(&DependentsTree::leaf("core"))
            .unwrap();
        assert_eq!(output, "name: \"core\"\n");
        assert!(!output.contains("dependents"));
    }

    #[test]
    fn test_render_exact_layout() {
        let output = YamlRenderer::new().render(&sample_tree()).unwrap();
        let expected = r#"name: "example:core"
dependents:
  "api":
    - name: "example:service"
  "implementation":
    - name: "example:app"
      dependents:
        "implementation":
          - name: "example:web"
    - name: "example:worker"
"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_is_valid_yaml() {
        let tree = sample_tree();
        let output = YamlRenderer::new().render(&tree).unwrap();

        let parsed: DependentsTree = serde_yaml_ng::from_str(&output).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_quote_escapes_special_characters() {
        assert_eq!(YamlRenderer::quote("plain"), "\"plain\"");
        assert_eq!(YamlRenderer::quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(YamlRenderer::quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(YamlRenderer::quote("a\rb"), "\"a\\rb\"");
        assert_eq!(YamlRenderer::quote("a\u{7}b"), "\"a\\u0007b\"");
        assert_eq!(YamlRenderer::quote("a\u{85}b"), "\"a\\u0085b\"");
        assert_eq!(YamlRenderer::quote("a\u{2028}b"), "\"a\\u2028b\"");
        assert_eq!(YamlRenderer::quote("caf\u{e9}"), "\"caf\u{e9}\"");
    }

    #[test]
    fn test_render_names_with_special_characters_round_trip() {
        let tree = DependentsTree::new(
            "weird \"core\"",
            BTreeMap::from([(
                "impl: \\x".to_string(),
                vec![DependentsTree::leaf("# not a comment")],
            )]),
        );
        let output = YamlRenderer::new().render(&tree).unwrap();

        let parsed: DependentsTree = serde_yaml_ng::from_str(&output).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_render_names_with_control_characters_round_trip() {
        let names = [
            "carriage\rreturn",
            "bell\u{7}",
            "del\u{7f}",
            "next\u{85}line",
            "line\u{2028}separator",
            "paragraph\u{2029}separator",
            "\u{feff}bom",
            "tab\tand\nnewline",
        ];
        let tree = DependentsTree::new(
            names[0],
            BTreeMap::from([(
                "implementation\r".to_string(),
                names[1..].iter().map(|n| DependentsTree::leaf(*n)).collect(),
            )]),
        );
        let output = YamlRenderer::new().render(&tree).unwrap();

        assert!(!output.contains('\r'));
        assert_eq!(output.lines().count(), names.len() + 2);
        let parsed: DependentsTree = serde_yaml_ng::from_str(&output).unwrap();
        assert_eq!(parsed, tree);
    }
}
