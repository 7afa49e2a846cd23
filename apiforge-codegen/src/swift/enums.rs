//! Swift enum generation.

use apiforge_schema::{ElementPath, EnumDef};

use crate::block::Block;

/// Generator for Swift enum declarations.
pub struct EnumGenerator;

impl EnumGenerator {
    /// Creates a new enum generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Appends the enum declaration of one enumeration to the file block.
    pub fn generate(&self, file: &mut Block, path: &ElementPath, enu: &EnumDef) {
        let name = &path.name;
        file.scope(format!("public enum {name}: String "), |b| {
            for item in &enu.items {
                b.line(format!("case {}", item.name));
            }
            b.line("");
            b.scope("public func code() -> Int ", |b| {
                b.scope("switch self ", |b| {
                    for item in &enu.items {
                        b.line(format!("case .{}: return {}", item.name, item.value));
                    }
                });
            });
        });
    }
}

impl Default for EnumGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_enum() {
        let enu = EnumDef::new("Role").item("Admin", 1).item("Guest", 2);
        let path = ElementPath::new("user", "Role");
        let mut file = Block::flat("");
        EnumGenerator::new().generate(&mut file, &path, &enu);
        let source = file.render();

        assert!(source.contains("public enum Role: String {"));
        assert!(source.contains("    case Admin"));
        assert!(source.contains("    public func code() -> Int {"));
        assert!(source.contains("        switch self {"));
        assert!(source.contains("            case .Guest: return 2"));
    }
}
