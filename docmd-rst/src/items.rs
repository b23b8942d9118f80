//! List item rewrites for NumPy-style parameter and attribute entries.
//!
//! All helpers take a left-trimmed line and return the Markdown bullet that
//! replaces it, or `None` when the line has a different shape.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)] // literal patterns
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("item patterns are valid regular expressions")
}

// no whitespace before the name, to avoid matching prose
static DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?P<argument>[^:\s]+) : (?P<type>.+)$"));

static VARIADIC: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?P<marker>\*\*kwargs|\*args)$"));

static NUMBERED_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?P<names>[^:\s]+\d(?:, [^:\s]+\d)+), \.\.\. : (?P<type>.+)$")
});

/// `name : type` becomes ``- `name`: type``.
#[must_use]
pub fn definition(line: &str) -> Option<String> {
    let captures = DEFINITION.captures(line)?;
    let argument = captures.name("argument")?.as_str();
    let kind = captures.name("type")?.as_str();
    Some(format!("- `{argument}`: {kind}"))
}

/// A bare `*args` or `**kwargs` line.
#[must_use]
pub fn variadic(line: &str) -> Option<String> {
    let marker = VARIADIC.captures(line)?.name("marker")?.as_str();
    Some(format!("- `{marker}`"))
}

/// `x1, x2, ... : type` lists every name, then the ellipsis, then the type.
#[must_use]
pub fn numbered_group(line: &str) -> Option<String> {
    let captures = NUMBERED_GROUP.captures(line)?;
    let kind = captures.name("type")?.as_str();
    let names = captures
        .name("names")?
        .as_str()
        .split(", ")
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("- {names}, `...`: {kind}"))
}
