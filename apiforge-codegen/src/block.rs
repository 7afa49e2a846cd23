//! Structured block emitter.
//!
//! A [`Block`] is an ordered tree of lines and child blocks with a prefix
//! and a rendering style. Backends build one block tree per generated file
//! and render it to an indented string; the emitter knows nothing about the
//! target language beyond the literal strings it is handed.
//!
//! ```
//! use apiforge_codegen::block::Block;
//!
//! let mut class = Block::new("public class Point ");
//! class.line("public int x;");
//! class.line("public int y;");
//! assert_eq!(
//!     class.render(),
//!     "public class Point {\n    public int x;\n    public int y;\n}\n"
//! );
//! ```

/// One indentation unit.
pub const INDENT_UNIT: &str = "    ";

/// Prefixes every non-empty line of `s` with one indentation unit.
///
/// Zero-length lines stay untouched so blank separators remain blank rather
/// than becoming whitespace-only lines. `indent("")` is the empty string.
#[must_use]
pub fn indent(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 4);
    let mut at_line_start = true;
    for ch in s.chars() {
        if at_line_start && ch != '\n' {
            out.push_str(INDENT_UNIT);
        }
        at_line_start = ch == '\n';
        out.push(ch);
    }
    out
}

/// Rendering style of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockStyle {
    /// `prefix{` ... `}` with the body indented.
    #[default]
    Wrapped,
    /// `prefix` followed by the indented body, no closing delimiter. Used
    /// for top-level file bodies that are indented but not brace-wrapped.
    Indented,
    /// `prefix` followed by the body as-is. Used for whole-file containers
    /// whose top-level declarations must stay unindented.
    Flat,
}

/// An item of a block: a literal line or a nested child block.
#[derive(Debug, Clone)]
enum Item {
    Line(String),
    Child(Block),
}

/// An ordered, nested text scope.
///
/// Items render in insertion order; order is never changed. A block tree is
/// exclusively owned by the code path constructing it and discarded after
/// rendering.
#[derive(Debug, Clone)]
pub struct Block {
    prefix: String,
    style: BlockStyle,
    items: Vec<Item>,
}

impl Block {
    /// Creates an empty block with the default `Wrapped` style.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            style: BlockStyle::Wrapped,
            items: Vec::new(),
        }
    }

    /// Creates an empty block with the `Flat` style.
    #[must_use]
    pub fn flat(prefix: impl Into<String>) -> Self {
        let mut block = Self::new(prefix);
        block.style = BlockStyle::Flat;
        block
    }

    /// Creates an empty block with the `Indented` style.
    #[must_use]
    pub fn indented(prefix: impl Into<String>) -> Self {
        let mut block = Self::new(prefix);
        block.style = BlockStyle::Indented;
        block
    }

    /// Sets the rendering style.
    pub fn set_style(&mut self, style: BlockStyle) {
        self.style = style;
    }

    /// Appends a literal line. The text is an opaque payload.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.items.push(Item::Line(text.into()));
        self
    }

    /// Appends every line of a multi-line string as a separate line item.
    ///
    /// Convenience for verbatim code fragments; equivalent to calling
    /// [`Block::line`] once per line.
    pub fn lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.line(line);
        }
        self
    }

    /// Appends a new child block with the given prefix and returns a
    /// mutable handle to it for fluent chaining.
    pub fn child(&mut self, prefix: impl Into<String>) -> &mut Block {
        self.items.push(Item::Child(Block::new(prefix)));
        match self.items.last_mut() {
            Some(Item::Child(block)) => block,
            _ => unreachable!("a child block was just appended"),
        }
    }

    /// Appends an already-constructed block as a child. Used to compose
    /// results produced by a recursive builder call.
    pub fn push_block(&mut self, child: Block) -> &mut Self {
        self.items.push(Item::Child(child));
        self
    }

    /// Appends a new child block with the given prefix and hands it to the
    /// callback. Builder-callback ergonomics; carries no semantics beyond
    /// [`Block::child`].
    pub fn scope(&mut self, prefix: impl Into<String>, f: impl FnOnce(&mut Block)) -> &mut Self {
        let mut block = Block::new(prefix);
        f(&mut block);
        self.push_block(block)
    }

    /// Renders the tree to its textual form.
    ///
    /// Pure and deterministic: structurally identical trees render to
    /// byte-identical output, and rendering may be repeated freely.
    #[must_use]
    pub fn render(&self) -> String {
        let mut body = String::new();
        for item in &self.items {
            match item {
                Item::Line(text) => {
                    body.push_str(text);
                    body.push('\n');
                }
                Item::Child(child) => {
                    body.push_str(&child.render());
                    body.push('\n');
                }
            }
        }

        if self.style != BlockStyle::Flat {
            body = indent(&body);
        }

        match self.style {
            BlockStyle::Wrapped => format!("{}{{\n{}}}\n", self.prefix, body),
            BlockStyle::Indented | BlockStyle::Flat => format!("{}\n{}", self.prefix, body),
        }
    }
}
