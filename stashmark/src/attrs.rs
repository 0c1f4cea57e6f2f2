use crate::ast::{AttrEntry, AttrValue};
use crate::emit::{DirectiveInvocation, render_expression};
use crate::error::CompileError;

/// Attribute key carrying a mapping of target attributes to expression names.
pub const BIND_KEY: &str = "bind";
/// Attribute key carrying an action expression (`"edit article on=\"click\""`).
pub const ACTION_KEY: &str = "action";
/// Attribute key carrying one or more bare inline expressions.
pub const EXPR_KEY: &str = "hb";

/// Split an element's attribute dictionary into rendered directive fragments
/// and the ordinary attributes that pass through untouched.
///
/// Fragments come back in a fixed order regardless of where the special keys
/// appeared in the dictionary: bind, action, inline expressions. Ordinary
/// attributes keep their source order.
pub fn resolve_attrs(
    element: &str,
    attrs: &[AttrEntry],
    escape_enabled: bool,
) -> Result<(Vec<String>, Vec<AttrEntry>), CompileError> {
    let mut bind_fragment = None;
    let mut action_fragment = None;
    let mut expr_fragments = Vec::new();
    let mut remaining = Vec::new();

    for attr in attrs {
        match attr.name.as_str() {
            BIND_KEY => bind_fragment = Some(resolve_bind(element, &attr.value, escape_enabled)?),
            ACTION_KEY => {
                action_fragment = Some(resolve_action(element, &attr.value, escape_enabled)?)
            }
            EXPR_KEY => resolve_exprs(element, &attr.value, escape_enabled, &mut expr_fragments)?,
            _ => remaining.push(attr.clone()),
        }
    }

    let mut fragments = Vec::new();
    fragments.extend(bind_fragment);
    fragments.extend(action_fragment);
    fragments.extend(expr_fragments);
    Ok((fragments, remaining))
}

/// `bind: { src: "logoUri" }` → `{{bind-attr src="logoUri"}}`.
fn resolve_bind(
    element: &str,
    value: &AttrValue,
    escape_enabled: bool,
) -> Result<String, CompileError> {
    let AttrValue::Map(pairs) = value else {
        return Err(CompileError::malformed_attr(
            BIND_KEY,
            element,
            "a mapping of attribute names to expression names",
        ));
    };
    let inv = DirectiveInvocation {
        options: pairs.clone(),
        ..DirectiveInvocation::inline("bind-attr")
    };
    Ok(render_expression(&inv, escape_enabled).value)
}

/// `action: 'edit article on="click"'` → `{{action edit article on="click"}}`.
/// The text after the action name is passed through verbatim, never re-parsed.
fn resolve_action(
    element: &str,
    value: &AttrValue,
    escape_enabled: bool,
) -> Result<String, CompileError> {
    let expected = "a non-empty action expression string";
    let AttrValue::Str(raw) = value else {
        return Err(CompileError::malformed_attr(ACTION_KEY, element, expected));
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CompileError::malformed_attr(ACTION_KEY, element, expected));
    }
    let (name, rest) = split_first_word(raw);
    let mut inv = DirectiveInvocation::inline("action");
    inv.args.push(name.to_string());
    if let Some(rest) = rest {
        inv.args.push(rest.to_string());
    }
    Ok(render_expression(&inv, escape_enabled).value)
}

/// `hb: "expr"` or `hb: ["a", "b withArg"]` → one `{{...}}` per entry.
fn resolve_exprs(
    element: &str,
    value: &AttrValue,
    escape_enabled: bool,
    fragments: &mut Vec<String>,
) -> Result<(), CompileError> {
    let expected = "an expression string or a list of expression strings";
    let entries: Vec<&str> = match value {
        AttrValue::Str(s) => vec![s.as_str()],
        AttrValue::List(items) => items.iter().map(String::as_str).collect(),
        AttrValue::Map(_) => {
            return Err(CompileError::malformed_attr(EXPR_KEY, element, expected));
        }
    };
    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(CompileError::malformed_attr(EXPR_KEY, element, expected));
        }
        let (name, rest) = split_first_word(entry);
        let mut inv = DirectiveInvocation::inline(name);
        if let Some(rest) = rest {
            inv.args.push(rest.to_string());
        }
        fragments.push(render_expression(&inv, escape_enabled).value);
    }
    Ok(())
}

/// Split on the first whitespace run: `"edit article on=..."` →
/// `("edit", Some("article on=..."))`.
fn split_first_word(s: &str) -> (&str, Option<&str>) {
    match s.find(char::is_whitespace) {
        Some(at) => (&s[..at], Some(s[at..].trim_start())),
        None => (s, None),
    }
}
