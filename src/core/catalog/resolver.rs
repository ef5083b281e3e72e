use super::operators::{operator_spec, OperatorSpec, OPERATORS};
use crate::core::errors::{Result, ScriptError};
use glob::{MatchOptions, Pattern};
use log::debug;

/// Shell-style matching: `*`, `?`, `[seq]`, `[!seq]`, case-sensitive
const OPERATOR_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Check whether `operator` matches the whole of the shell-style `pattern`.
///
/// A malformed pattern matches nothing.
pub fn pattern_matches(pattern: &str, operator: &str) -> bool {
    Pattern::new(pattern).map_or(false, |pattern| pattern.matches_with(operator, OPERATOR_MATCH))
}

/// Find the first pattern, in order, matching `operator`.
///
/// # Arguments
/// * `patterns` - Catalog patterns in lookup order
/// * `operator` - Operator type of a module
///
/// # Returns
/// The first matching pattern, or `None` when the operator is unregistered
pub fn match_operator<'a, I>(patterns: I, operator: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    patterns.into_iter().find(|pattern| pattern_matches(pattern, operator))
}

/// Find the first role key, in order, that case-insensitively starts with
/// `requested`.
pub fn match_role<'a, I>(role_keys: I, requested: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let requested = requested.to_lowercase();
    role_keys
        .into_iter()
        .find(|key| key.to_lowercase().starts_with(&requested))
}

/// Catalog entry for an operator type, if the type has special port naming.
pub fn lookup_operator(operator: &str) -> Option<&'static OperatorSpec> {
    let pattern = match_operator(OPERATORS.iter().map(|spec| spec.pattern), operator)?;
    operator_spec(pattern)
}

/// Resolve the textual port identifier the design tool expects.
///
/// Unregistered operators and unknown roles fall back to `name` unchanged;
/// a missing index counts as 0.
pub fn resolve_port(operator: &str, name: &str, index: Option<usize>) -> Result<String> {
    let Some(spec) = lookup_operator(operator) else {
        debug!("Operator '{}' is not in the catalog, passing port '{}' through", operator, name);
        return Ok(name.to_string());
    };

    let Some(role) = match_role(spec.role_keys(), name).and_then(|key| spec.role(key)) else {
        debug!(
            "Operator '{}' (pattern '{}') declares no role matching '{}', passing it through",
            operator, spec.pattern, name
        );
        return Ok(name.to_string());
    };

    let index = index.unwrap_or(0);
    role.format.format(index).ok_or_else(|| match role.format.positions() {
        Some(available) => ScriptError::PortIndexOutOfRange {
            operator: operator.to_string(),
            role: role.key.to_string(),
            index,
            available,
        },
        None => ScriptError::PortIndexOverflow {
            operator: operator.to_string(),
            role: role.key.to_string(),
            index,
        },
    })
}
