//! Match arm patterns.

use amy_ir::{Literal, MatchPattern, Name, StringInterner};

use crate::errors::{arity_mismatch, type_mismatch, EvalError};
use crate::stack::ensure_sufficient_stack;
use crate::Value;

/// Try `pattern` against `value`.
///
/// Returns the bindings, left to right, when the pattern matches and
/// `None` when it does not. Shape errors the type checker rules out
/// (a constructor pattern against a non-constructor value, a sub-pattern
/// count differing from the value's) are internal errors.
pub(super) fn try_match(
    pattern: &MatchPattern,
    value: &Value,
    interner: &StringInterner,
) -> Result<Option<Vec<(Name, Value)>>, EvalError> {
    let mut bindings = Vec::new();
    if match_into(pattern, value, interner, &mut bindings)? {
        Ok(Some(bindings))
    } else {
        Ok(None)
    }
}

fn match_into(
    pattern: &MatchPattern,
    value: &Value,
    interner: &StringInterner,
    bindings: &mut Vec<(Name, Value)>,
) -> Result<bool, EvalError> {
    match pattern {
        MatchPattern::Wildcard => Ok(true),
        MatchPattern::Binding(name) => {
            bindings.push((*name, value.clone()));
            Ok(true)
        }
        MatchPattern::Literal(literal) => Ok(literal_matches(*literal, value, interner)),
        MatchPattern::Constructor { constructor, args } => {
            let Value::CaseClass {
                constructor: actual,
                args: fields,
            } = value
            else {
                return Err(type_mismatch("case class", value.type_name()));
            };
            if actual != constructor {
                return Ok(false);
            }
            if args.len() != fields.len() {
                return Err(arity_mismatch(
                    constructor.display(interner),
                    fields.len(),
                    args.len(),
                ));
            }
            ensure_sufficient_stack(|| {
                for (sub_pattern, field) in args.iter().zip(fields.iter()) {
                    if !match_into(sub_pattern, field, interner, bindings)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            })
        }
    }
}

fn literal_matches(literal: Literal, value: &Value, interner: &StringInterner) -> bool {
    match (literal, value) {
        (Literal::Int(a), Value::Int(b)) => a == *b,
        (Literal::Bool(a), Value::Bool(b)) => a == *b,
        (Literal::Str(contents), Value::Str(s)) => interner.lookup(contents) == &**s,
        (Literal::Unit, Value::Unit) => true,
        _ => false,
    }
}
