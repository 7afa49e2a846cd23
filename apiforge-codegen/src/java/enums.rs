//! Java enum generation.

use apiforge_schema::{ElementPath, EnumDef};

use crate::block::Block;
use crate::emit::to_line_comment;

/// Generator for Java enum declarations.
pub struct EnumGenerator;

impl EnumGenerator {
    /// Creates a new enum generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates the enum declaration of one enumeration, without the
    /// per-file package header.
    #[must_use]
    pub fn generate(&self, path: &ElementPath, enu: &EnumDef) -> String {
        let name = &path.name;
        let mut file = Block::flat("");

        file.scope(format!("public enum {name} "), |b| {
            for item in &enu.items {
                if item.comment.is_some() {
                    b.lines(&to_line_comment(item.comment.as_deref()));
                }
                b.line(format!("{}({}),", item.name, item.value));
            }
            b.line(";");
            b.line("");
            b.line("private int value;");
            b.scope(format!("private {name}(int value) "), |b| {
                b.line("this.value = value;");
            });
            b.scope("public int getValue() ", |b| {
                b.line("return value;");
            });
            b.scope(format!("public static {name} find(int value) "), |b| {
                b.scope("switch(value) ", |b| {
                    for item in &enu.items {
                        b.line(format!("case {}: return {};", item.value, item.name));
                    }
                    b.line("default: return null;");
                });
            });
        });

        file.render()
    }
}

impl Default for EnumGenerator {
    fn default() -> Self {
        Self::new()
    }
}
