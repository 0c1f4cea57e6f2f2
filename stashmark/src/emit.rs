use std::fmt::Write as _;

/// The four observable directive shapes, dispatched in one place instead of
/// resolving an emitter by name at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveForm {
    InlineEscaped,
    InlineUnescaped,
    BlockEscaped,
    BlockUnescaped,
}

/// One expression directive occurrence, ready for emission. Built either
/// from a `= hb ...` line or synthesized by the attribute resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveInvocation {
    pub name: String,
    pub escaped: bool,
    pub args: Vec<String>,
    pub options: Vec<(String, String)>,
    /// Pre-rendered inner fragment for the block form.
    pub body: Option<String>,
}

impl DirectiveInvocation {
    pub fn inline(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            escaped: true,
            args: Vec::new(),
            options: Vec::new(),
            body: None,
        }
    }

    pub fn form(&self) -> DirectiveForm {
        match (self.escaped, self.body.is_some()) {
            (true, false) => DirectiveForm::InlineEscaped,
            (false, false) => DirectiveForm::InlineUnescaped,
            (true, true) => DirectiveForm::BlockEscaped,
            (false, true) => DirectiveForm::BlockUnescaped,
        }
    }
}

/// A rendered fragment plus the "already safe, do not re-escape" capability
/// flag. The flag never changes the characters of `value`; it only tells a
/// downstream renderer whether the text may be spliced without escaping.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkedText {
    pub value: String,
    pub pre_escaped: bool,
}

/// Render one directive invocation. `escape_enabled` is the process-wide
/// escaping policy: when false the returned fragment carries no pre-escaped
/// mark, whatever the directive form.
pub fn render_expression(inv: &DirectiveInvocation, escape_enabled: bool) -> MarkedText {
    // An entirely empty invocation (empty source) must not produce a bare
    // delimiter pair.
    if inv.name.is_empty() && inv.args.is_empty() && inv.options.is_empty() && inv.body.is_none() {
        return MarkedText {
            value: String::new(),
            pre_escaped: escape_enabled,
        };
    }

    let (open, close) = match inv.form() {
        DirectiveForm::InlineEscaped | DirectiveForm::BlockEscaped => ("{{", "}}"),
        DirectiveForm::InlineUnescaped | DirectiveForm::BlockUnescaped => ("{{{", "}}}"),
    };

    let head = invocation_head(inv);
    let value = match inv.form() {
        DirectiveForm::InlineEscaped | DirectiveForm::InlineUnescaped => {
            format!("{open}{head}{close}")
        }
        DirectiveForm::BlockEscaped | DirectiveForm::BlockUnescaped => {
            let body = inv.body.as_deref().unwrap_or("");
            format!("{open}#{head}{close}{body}{open}/{name}{close}", name = inv.name)
        }
    };

    MarkedText {
        value,
        pre_escaped: escape_enabled,
    }
}

/// `name arg1 arg2 key="value"`: arguments verbatim, then options
/// double-quoted, both in declaration order.
fn invocation_head(inv: &DirectiveInvocation) -> String {
    let mut head = String::new();
    for piece in std::iter::once(inv.name.as_str()).chain(inv.args.iter().map(String::as_str)) {
        if piece.is_empty() {
            continue;
        }
        if !head.is_empty() {
            head.push(' ');
        }
        head.push_str(piece);
    }
    for (key, value) in &inv.options {
        if !head.is_empty() {
            head.push(' ');
        }
        let _ = write!(head, "{key}=\"{value}\"");
    }
    head
}
