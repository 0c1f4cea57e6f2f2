use pest::Parser;
use pest::iterators::Pair;

use crate::ast::{AttrEntry, AttrValue, Node};
use crate::error::CompileError;

#[derive(pest_derive::Parser)]
#[grammar = "grammar.pest"]
struct LineParser;

/// One meaningful source line. Blank lines are dropped before tree building.
struct Line<'a> {
    number: usize,
    indent: usize,
    content: &'a str,
}

/// Parse markup source into a node tree. Nesting is driven entirely by
/// indentation: a line indented deeper than its predecessor becomes a child,
/// and all siblings within one block must share the same indentation.
pub fn parse_document(source: &str) -> Result<Vec<Node>, CompileError> {
    let lines = split_lines(source)?;
    let mut idx = 0usize;
    parse_block(&lines, &mut idx, 0)
}

fn split_lines(source: &str) -> Result<Vec<Line<'_>>, CompileError> {
    let mut lines = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let number = i + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let trimmed = raw.trim_start();
        let leading = &raw[..raw.len() - trimmed.len()];
        if leading.contains('\t') {
            return Err(CompileError::parse(number, "tab character in indentation"));
        }
        lines.push(Line {
            number,
            indent: leading.len(),
            content: trimmed.trim_end(),
        });
    }
    Ok(lines)
}

fn parse_block<'a>(
    lines: &[Line<'a>],
    idx: &mut usize,
    indent: usize,
) -> Result<Vec<Node>, CompileError> {
    let mut nodes = Vec::new();
    while *idx < lines.len() {
        let line = &lines[*idx];
        if line.indent < indent {
            break;
        }
        if line.indent > indent {
            return Err(CompileError::parse(line.number, "inconsistent indentation"));
        }
        *idx += 1;

        let children = if *idx < lines.len() && lines[*idx].indent > indent {
            let child_indent = lines[*idx].indent;
            parse_block(lines, idx, child_indent)?
        } else {
            Vec::new()
        };

        let node = match line.content.as_bytes()[0] {
            b'%' => {
                let (tag, attrs, text) = parse_element_line(line)?;
                Node::Element {
                    tag,
                    attrs,
                    text,
                    children,
                }
            }
            b'=' => parse_directive_line(line, children)?,
            _ => {
                if !children.is_empty() {
                    return Err(CompileError::parse(
                        line.number,
                        "nesting within plain text is illegal",
                    ));
                }
                Node::Text(line.content.to_string())
            }
        };
        nodes.push(node);
    }
    Ok(nodes)
}

fn parse_element_line(line: &Line<'_>) -> Result<(String, Vec<AttrEntry>, Option<String>), CompileError> {
    // A `{` directly after the tag always introduces a dictionary; parsing
    // with the strict rule keeps a malformed one from degrading into text.
    let rule = if dict_follows_tag(line.content) {
        Rule::element_dict_line
    } else {
        Rule::element_line
    };
    let parsed = LineParser::parse(rule, line.content)
        .map_err(|e| grammar_error(line.number, e))?
        .next()
        .ok_or_else(|| CompileError::parse(line.number, "empty element line"))?;

    let mut tag = String::new();
    let mut attrs = Vec::new();
    let mut text = None;
    for p in parsed.into_inner() {
        match p.as_rule() {
            Rule::ident => tag = p.as_str().to_string(),
            Rule::dict => attrs = parse_dict(p, line.number)?,
            Rule::inline_text => {
                let t = p.as_str().trim();
                if !t.is_empty() {
                    text = Some(t.to_string());
                }
            }
            _ => {}
        }
    }
    Ok((tag, attrs, text))
}

fn parse_directive_line(line: &Line<'_>, children: Vec<Node>) -> Result<Node, CompileError> {
    let parsed = LineParser::parse(Rule::directive_line, line.content)
        .map_err(|e| grammar_error(line.number, e))?
        .next()
        .ok_or_else(|| CompileError::parse(line.number, "empty directive line"))?;

    let mut keyword = "";
    let mut expression = None;
    let mut options = Vec::new();
    for p in parsed.into_inner() {
        match p.as_rule() {
            Rule::keyword => keyword = p.as_str(),
            Rule::string => expression = Some(unquote(p.as_str())),
            Rule::opt_pair => {
                let mut name = String::new();
                let mut value = String::new();
                for part in p.into_inner() {
                    match part.as_rule() {
                        Rule::ident => name = part.as_str().to_string(),
                        Rule::string => value = unquote(part.as_str()),
                        _ => {}
                    }
                }
                options.push((name, value));
            }
            _ => {}
        }
    }

    let escaped = !keyword.ends_with('!');
    if keyword.trim_end_matches('!') != "hb" {
        return Err(CompileError::UnknownDirectiveForm {
            line: line.number,
            found: keyword.to_string(),
        });
    }
    let Some(expression) = expression else {
        return Err(CompileError::parse(
            line.number,
            "expected a quoted expression after the directive keyword",
        ));
    };

    let mut words = expression.split_whitespace().map(str::to_string);
    let name = words.next().unwrap_or_default();
    let args: Vec<String> = words.collect();

    Ok(Node::Directive {
        name,
        escaped,
        args,
        options,
        children,
    })
}

fn parse_dict(dict: Pair<'_, Rule>, number: usize) -> Result<Vec<AttrEntry>, CompileError> {
    let mut entries = Vec::new();
    for p in dict.into_inner() {
        if p.as_rule() != Rule::pair {
            continue;
        }
        let mut name = String::new();
        let mut value = None;
        for part in p.into_inner() {
            match part.as_rule() {
                Rule::ident => name = part.as_str().to_string(),
                Rule::value => value = Some(parse_value(part, number)?),
                _ => {}
            }
        }
        let value = value
            .ok_or_else(|| CompileError::parse(number, format!("attribute `{name}` has no value")))?;
        entries.push(AttrEntry { name, value });
    }
    Ok(entries)
}

fn parse_value(value: Pair<'_, Rule>, number: usize) -> Result<AttrValue, CompileError> {
    let inner = value
        .into_inner()
        .next()
        .ok_or_else(|| CompileError::parse(number, "empty attribute value"))?;
    match inner.as_rule() {
        Rule::string => Ok(AttrValue::Str(unquote(inner.as_str()))),
        Rule::list => {
            let items = inner
                .into_inner()
                .filter(|p| p.as_rule() == Rule::string)
                .map(|p| unquote(p.as_str()))
                .collect();
            Ok(AttrValue::List(items))
        }
        Rule::dict => {
            // One level of nesting, string values only.
            let mut pairs = Vec::new();
            for p in inner.into_inner() {
                if p.as_rule() != Rule::pair {
                    continue;
                }
                let mut name = String::new();
                let mut val = None;
                for part in p.into_inner() {
                    match part.as_rule() {
                        Rule::ident => name = part.as_str().to_string(),
                        Rule::value => {
                            let v = part.into_inner().next();
                            match v {
                                Some(s) if s.as_rule() == Rule::string => {
                                    val = Some(unquote(s.as_str()));
                                }
                                _ => {
                                    return Err(CompileError::parse(
                                        number,
                                        "nested dictionaries may only contain string values",
                                    ));
                                }
                            }
                        }
                        _ => {}
                    }
                }
                let val = val.ok_or_else(|| {
                    CompileError::parse(number, format!("attribute `{name}` has no value"))
                })?;
                pairs.push((name, val));
            }
            Ok(AttrValue::Map(pairs))
        }
        _ => Err(CompileError::parse(number, "unsupported attribute value")),
    }
}

fn dict_follows_tag(content: &str) -> bool {
    let rest = &content[1..];
    let tag_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(rest.len());
    rest[tag_end..].starts_with('{')
}

fn grammar_error(number: usize, err: pest::error::Error<Rule>) -> CompileError {
    CompileError::parse(number, err.variant.message().into_owned())
}

fn unquote(s: &str) -> String {
    let inner = if s.len() >= 2 { &s[1..s.len() - 1] } else { s };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(q @ ('"' | '\'' | '\\')) => out.push(q),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
