use std::fmt::Write as _;

use crate::ast::{AttrEntry, AttrValue, Node};
use crate::attrs::resolve_attrs;
use crate::emit::{DirectiveInvocation, render_expression};
use crate::error::CompileError;
use crate::parse::parse_document;

/// How elements with no content close: `<img />` vs `<img>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Html,
    #[default]
    Xhtml,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompileOptions {
    pub format: OutputFormat,
    /// Escaping policy. When true, emitted expression fragments carry the
    /// pre-escaped mark so a downstream renderer will not escape them again.
    pub escape: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Xhtml,
            escape: true,
        }
    }
}

/// Compiles markup source into handlebars template text. Each compiler owns
/// its options for its whole lifetime; concurrent compiles never share state.
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn compile(&self, source: &str) -> Result<String, CompileError> {
        let nodes = parse_document(source)?;
        self.render_nodes(&nodes)
    }

    /// Fragments join with single newlines and no trailing newline, so block
    /// bodies nest without blank lines.
    fn render_nodes(&self, nodes: &[Node]) -> Result<String, CompileError> {
        let mut parts = Vec::with_capacity(nodes.len());
        for node in nodes {
            parts.push(self.render_node(node)?);
        }
        Ok(parts.join("\n"))
    }

    fn render_node(&self, node: &Node) -> Result<String, CompileError> {
        match node {
            Node::Text(t) => Ok(t.clone()),
            Node::Directive {
                name,
                escaped,
                args,
                options,
                children,
            } => {
                let body = if children.is_empty() {
                    None
                } else {
                    Some(self.render_nodes(children)?)
                };
                let inv = DirectiveInvocation {
                    name: name.clone(),
                    escaped: *escaped,
                    args: args.clone(),
                    options: options.clone(),
                    body,
                };
                Ok(render_expression(&inv, self.options.escape).value)
            }
            Node::Element {
                tag,
                attrs,
                text,
                children,
            } => self.render_element(tag, attrs, text.as_deref(), children),
        }
    }

    fn render_element(
        &self,
        tag: &str,
        attrs: &[AttrEntry],
        text: Option<&str>,
        children: &[Node],
    ) -> Result<String, CompileError> {
        let (fragments, remaining) = resolve_attrs(tag, attrs, self.options.escape)?;

        let mut out = format!("<{tag}");
        for fragment in &fragments {
            out.push(' ');
            out.push_str(fragment);
        }
        for attr in &remaining {
            let AttrValue::Str(value) = &attr.value else {
                return Err(CompileError::malformed_attr(&attr.name, tag, "a string value"));
            };
            let _ = write!(out, " {}='{}'", attr.name, escape_attr(value));
        }

        if text.is_none() && children.is_empty() {
            if is_void(tag) {
                match self.options.format {
                    OutputFormat::Xhtml => out.push_str(" />"),
                    OutputFormat::Html => out.push('>'),
                }
            } else {
                let _ = write!(out, "></{tag}>");
            }
            return Ok(out);
        }

        if children.is_empty() {
            let _ = write!(out, ">{}</{tag}>", text.unwrap_or(""));
            return Ok(out);
        }

        let mut inner: Vec<String> = Vec::with_capacity(children.len() + 1);
        if let Some(t) = text {
            inner.push(t.to_string());
        }
        for child in children {
            inner.push(self.render_node(child)?);
        }
        let _ = write!(out, ">\n{}\n</{tag}>", inner.join("\n"));
        Ok(out)
    }
}

/// Compile with the default options (xhtml output, escaping policy on).
pub fn compile(source: &str) -> Result<String, CompileError> {
    Compiler::new(CompileOptions::default()).compile(source)
}

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
