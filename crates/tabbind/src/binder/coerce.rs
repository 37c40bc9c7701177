//! Text conversion for each primitive kind.

use crate::error::CoercionError;
use crate::field::Accessor;

/// Render a field of `record` as cell text.
pub(crate) fn format_cell<R>(accessor: &Accessor<R>, record: &R) -> String {
    match *accessor {
        Accessor::String { get, .. } => get(record).clone(),
        Accessor::Integer { get, .. } => get(record).to_string(),
        Accessor::Float { get, .. } => get(record).to_string(),
        Accessor::Boolean { get, .. } => get(record).to_string(),
    }
}

/// Parse `raw` and store it into a field of `record`.
pub(crate) fn assign_cell<R>(
    accessor: &Accessor<R>,
    record: &mut R,
    raw: &str,
) -> Result<(), CoercionError> {
    match *accessor {
        Accessor::String { set, .. } => set(record, raw.to_string()),
        Accessor::Integer { set, .. } => set(record, raw.parse::<i64>()?),
        Accessor::Float { set, .. } => set(record, raw.parse::<f64>()?),
        Accessor::Boolean { set, .. } => set(record, parse_bool(raw)?),
    }
    Ok(())
}

/// Parse a boolean cell.
///
/// Accepts `1`/`0`, `t`/`f` in either case, and `true`/`false` in any case.
pub fn parse_bool(raw: &str) -> Result<bool, CoercionError> {
    match raw {
        "1" | "t" | "T" => Ok(true),
        "0" | "f" | "F" => Ok(false),
        _ if raw.eq_ignore_ascii_case("true") => Ok(true),
        _ if raw.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(CoercionError::Boolean(raw.to_string())),
    }
}
