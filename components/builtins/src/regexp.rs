//! RegExp construction
//!
//! Patterns are compiled with the `regex` crate to reject malformed sources
//! up front. Only the source text and canonical flags are kept on the object.

use core_types::{JsError, JsResult, ObjectKind, ObjectRef};
use regex::RegexBuilder;

use crate::realm::Realm;

/// Flag characters in canonical (`RegExp.prototype.flags`) order.
const FLAG_ORDER: &str = "dgimsuvy";

/// Validates `flags` and returns them in canonical order.
fn parse_flags(flags: &str) -> JsResult<String> {
    let mut seen = [false; FLAG_ORDER.len()];
    for ch in flags.chars() {
        let index = FLAG_ORDER
            .find(ch)
            .ok_or_else(|| JsError::syntax_error(format!("Invalid flag: '{}'", ch)))?;
        if seen[index] {
            return Err(JsError::syntax_error(format!(
                "Invalid flags: duplicate '{}'",
                ch
            )));
        }
        seen[index] = true;
    }
    let sorted: String = FLAG_ORDER
        .chars()
        .zip(seen)
        .filter_map(|(ch, on)| on.then_some(ch))
        .collect();
    if sorted.contains('u') && sorted.contains('v') {
        return Err(JsError::syntax_error(
            "Invalid flags: 'v' incompatible with 'u'",
        ));
    }
    Ok(sorted)
}

impl Realm {
    /// `new RegExp(pattern, flags)`
    ///
    /// # Errors
    ///
    /// `SyntaxError` for unknown or duplicate flags and for patterns the
    /// regex engine cannot compile.
    pub fn new_regexp(&self, pattern: &str, flags: &str) -> JsResult<ObjectRef> {
        let flags = parse_flags(flags)?;
        RegexBuilder::new(pattern)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|e| JsError::syntax_error(format!("Invalid regular expression: {}", e)))?;

        Ok(ObjectRef::new(
            ObjectKind::RegExp {
                source: pattern.to_owned(),
                flags,
            },
            Some(self.intrinsics().regexp_prototype.clone()),
        ))
    }
}
