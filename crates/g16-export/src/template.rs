// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Minimal text templates for contract rendering.
//!
//! Actions sit between `{{` and `}}`:
//! - `{{name}}` substitutes a text value
//! - `{{len name}}` is the length of a list value
//! - `{{sub a b}}` is integer subtraction; parentheses group arguments
//! - `{{range name}} … {{end}}` repeats its body per list record, where
//!   `{{.field}}` reads the current record
//!
//! A `range`/`end` tag alone on its line takes the whole line with it.

use std::collections::BTreeMap;

use crate::ExportError;

/// One entry of a list value
pub type Record = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Text(String),
    List(Vec<Record>),
}

/// Named values a template renders against
#[derive(Clone, Debug, Default)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.to_string(), Value::Text(value.into()));
        self
    }

    pub fn set_list(&mut self, name: &str, records: Vec<Record>) -> &mut Self {
        self.values.insert(name.to_string(), Value::List(records));
        self
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Expr {
    Var(String),
    Field(String),
    Int(i64),
    Len(String),
    Sub(Box<Expr>, Box<Expr>),
}

#[derive(Clone, Debug)]
enum Node {
    Text(String),
    Action { expr: Expr, line: usize },
    Range { list: String, body: Vec<Node>, line: usize },
}

enum Evaluated<'a> {
    Text(&'a str),
    Int(i64),
}

/// A parsed template
#[derive(Clone, Debug)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    pub fn parse(src: &str) -> Result<Self, ExportError> {
        // open ranges: (list name, enclosing nodes, line)
        let mut stack: Vec<(String, Vec<Node>, usize)> = Vec::new();
        let mut nodes = Vec::new();
        let mut pos = 0;

        while let Some(found) = src[pos..].find("{{") {
            let open = pos + found;
            let line = line_at(src, open);
            let close = src[open..]
                .find("}}")
                .map(|i| open + i)
                .ok_or_else(|| template_err(line, "unclosed action"))?;
            let action = src[open + 2..close].trim();

            let mut text = &src[pos..open];
            let mut next = close + 2;
            if is_block(action) {
                let line_begins = pos == 0 || src[..pos].ends_with('\n');
                if let Some((kept, skip)) = standalone(text, &src[next..], line_begins) {
                    text = kept;
                    next += skip;
                }
            }
            if !text.is_empty() {
                nodes.push(Node::Text(text.to_string()));
            }

            if action == "end" {
                let (list, outer, range_line) = stack
                    .pop()
                    .ok_or_else(|| template_err(line, "`end` without `range`"))?;
                let body = std::mem::replace(&mut nodes, outer);
                nodes.push(Node::Range {
                    list,
                    body,
                    line: range_line,
                });
            } else if let Some(list) = action.strip_prefix("range ") {
                let list = list.trim();
                if !is_ident(list) {
                    return Err(template_err(line, format!("bad range target `{list}`")));
                }
                stack.push((list.to_string(), std::mem::take(&mut nodes), line));
            } else {
                let expr = parse_expr(action).map_err(|reason| template_err(line, reason))?;
                nodes.push(Node::Action { expr, line });
            }
            pos = next;
        }

        if let Some((list, _, line)) = stack.pop() {
            return Err(template_err(line, format!("`range {list}` is never closed")));
        }
        if pos < src.len() {
            nodes.push(Node::Text(src[pos..].to_string()));
        }
        Ok(Self { nodes })
    }

    pub fn render(&self, ctx: &Context, out: &mut String) -> Result<(), ExportError> {
        render_nodes(&self.nodes, ctx, None, out)
    }

    pub fn render_to_string(&self, ctx: &Context) -> Result<String, ExportError> {
        let mut out = String::new();
        self.render(ctx, &mut out)?;
        Ok(out)
    }
}

fn render_nodes(
    nodes: &[Node],
    ctx: &Context,
    record: Option<&Record>,
    out: &mut String,
) -> Result<(), ExportError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Action { expr, line } => match eval(expr, ctx, record).map_err(|r| template_err(*line, r))? {
                Evaluated::Text(s) => out.push_str(s),
                Evaluated::Int(n) => out.push_str(&n.to_string()),
            },
            Node::Range { list, body, line } => {
                let records = match ctx.get(list) {
                    Some(Value::List(records)) => records,
                    Some(Value::Text(_)) => return Err(template_err(*line, format!("`{list}` is not a list"))),
                    None => return Err(template_err(*line, format!("no value named `{list}`"))),
                };
                for r in records {
                    render_nodes(body, ctx, Some(r), out)?;
                }
            }
        }
    }
    Ok(())
}

fn eval<'a>(expr: &Expr, ctx: &'a Context, record: Option<&'a Record>) -> Result<Evaluated<'a>, String> {
    match expr {
        Expr::Var(name) => match ctx.get(name) {
            Some(Value::Text(s)) => Ok(Evaluated::Text(s)),
            Some(Value::List(_)) => Err(format!("`{name}` is a list")),
            None => Err(format!("no value named `{name}`")),
        },
        Expr::Field(name) => {
            let record = record.ok_or_else(|| format!("`.{name}` used outside range"))?;
            record
                .get(name)
                .map(|s| Evaluated::Text(s))
                .ok_or_else(|| format!("record has no field `{name}`"))
        }
        Expr::Int(n) => Ok(Evaluated::Int(*n)),
        Expr::Len(name) => match ctx.get(name) {
            Some(Value::List(records)) => Ok(Evaluated::Int(records.len() as i64)),
            Some(Value::Text(_)) => Err(format!("`{name}` is not a list")),
            None => Err(format!("no value named `{name}`")),
        },
        Expr::Sub(a, b) => {
            let a = as_int(eval(a, ctx, record)?)?;
            let b = as_int(eval(b, ctx, record)?)?;
            a.checked_sub(b)
                .map(Evaluated::Int)
                .ok_or_else(|| "integer overflow in `sub`".to_string())
        }
    }
}

fn as_int(value: Evaluated<'_>) -> Result<i64, String> {
    match value {
        Evaluated::Int(n) => Ok(n),
        Evaluated::Text(s) => s.parse().map_err(|_| format!("`{s}` is not an integer")),
    }
}

fn parse_expr(action: &str) -> Result<Expr, String> {
    let grouped = action.replace(['(', ')'], " ");
    let mut tokens = grouped.split_whitespace();
    let expr = parse_tokens(&mut tokens)?;
    match tokens.next() {
        None => Ok(expr),
        Some(extra) => Err(format!("unexpected `{extra}` in `{action}`")),
    }
}

// prefix notation, fixed arity: `sub len ic 1` is sub(len(ic), 1)
fn parse_tokens<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Expr, String> {
    match tokens.next() {
        None => Err("empty action".to_string()),
        Some("len") => match tokens.next() {
            Some(name) if is_ident(name) => Ok(Expr::Len(name.to_string())),
            _ => Err("`len` takes a value name".to_string()),
        },
        Some("sub") => {
            let a = parse_tokens(tokens)?;
            let b = parse_tokens(tokens)?;
            Ok(Expr::Sub(Box::new(a), Box::new(b)))
        }
        Some(field) if field.starts_with('.') => {
            let name = &field[1..];
            if !is_ident(name) {
                return Err(format!("bad field `{field}`"));
            }
            Ok(Expr::Field(name.to_string()))
        }
        Some(token) => {
            if let Ok(n) = token.parse::<i64>() {
                Ok(Expr::Int(n))
            } else if is_ident(token) {
                Ok(Expr::Var(token.to_string()))
            } else {
                Err(format!("bad token `{token}`"))
            }
        }
    }
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_block(action: &str) -> bool {
    action == "end" || action.starts_with("range ")
}

/// If a block tag is the only thing on its line, returns the text before it
/// minus the line's indentation, and how many bytes after it to skip
/// (through the newline). `line_begins` says whether `before` starts a line.
fn standalone<'a>(before: &'a str, after: &str, line_begins: bool) -> Option<(&'a str, usize)> {
    let line_start = match before.rfind('\n') {
        Some(i) => i + 1,
        None if line_begins => 0,
        None => return None,
    };
    if !before[line_start..].chars().all(|c| c == ' ' || c == '\t') {
        return None;
    }
    let line_end = match after.find('\n') {
        Some(i) => i + 1,
        None => after.len(),
    };
    if !after[..line_end].trim().is_empty() {
        return None;
    }
    Some((&before[..line_start], line_end))
}

fn line_at(src: &str, offset: usize) -> usize {
    src[..offset].matches('\n').count() + 1
}

fn template_err(line: usize, reason: impl Into<String>) -> ExportError {
    ExportError::Template {
        line,
        reason: reason.into(),
    }
}
