//! Method declaration extraction from Java syntax trees

use serde::Serialize;
use tree_sitter::Node;

/// Node kind of a Java method declaration.
///
/// Constructors, compact constructors and annotation elements have kinds of
/// their own and are not matched.
pub const METHOD_DECLARATION: &str = "method_declaration";

/// One extracted method declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRecord<'a> {
    /// Simple name of the method
    pub name: &'a str,
    /// Verbatim source text of the whole declaration
    pub method: &'a str,
    /// Whether the declaration has an implementation block
    #[serde(rename = "hasBody")]
    pub has_body: bool,
}

/// Pre-order iterator over the method declarations of a tree.
///
/// Uses an explicit work stack so deeply nested sources cannot overflow the
/// call stack. Descent continues below a matched method, which yields the
/// methods of local and anonymous classes after their enclosing method.
pub struct MethodDeclarations<'tree, 'src> {
    source: &'src str,
    stack: Vec<Node<'tree>>,
}

impl<'tree, 'src> MethodDeclarations<'tree, 'src> {
    pub fn new(root: Node<'tree>, source: &'src str) -> Self {
        Self {
            source,
            stack: vec![root],
        }
    }

    fn record_for(&self, node: Node<'tree>) -> Option<MethodRecord<'src>> {
        let name = node.child_by_field_name("name")?;
        Some(MethodRecord {
            name: self.source.get(name.byte_range())?,
            method: self.source.get(node.byte_range())?,
            has_body: node.child_by_field_name("body").is_some(),
        })
    }
}

impl<'tree, 'src> Iterator for MethodDeclarations<'tree, 'src> {
    type Item = MethodRecord<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            let mut cursor = node.walk();
            let children: Vec<Node<'tree>> = node.named_children(&mut cursor).collect();
            self.stack.extend(children.into_iter().rev());

            if node.kind() == METHOD_DECLARATION {
                if let Some(record) = self.record_for(node) {
                    return Some(record);
                }
                tracing::debug!(
                    line = node.start_position().row + 1,
                    "skipping method declaration without a name"
                );
            }
        }
        None
    }
}
