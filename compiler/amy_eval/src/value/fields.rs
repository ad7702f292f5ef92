//! Constructor argument storage.

use std::ops::Deref;
use std::sync::Arc;

use super::Value;

/// Shared, immutable arguments of a constructor value.
///
/// Dropping the last handle to a long list would otherwise recurse once per
/// cell, so `Drop` unlinks uniquely owned nested fields onto a work list.
#[derive(Clone, Debug)]
pub struct CaseFields(Arc<[Value]>);

impl From<Vec<Value>> for CaseFields {
    fn from(values: Vec<Value>) -> Self {
        CaseFields(values.into())
    }
}

impl Deref for CaseFields {
    type Target = [Value];

    #[inline]
    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl Drop for CaseFields {
    fn drop(&mut self) {
        let Some(values) = Arc::get_mut(&mut self.0) else {
            return;
        };
        let mut pending: Vec<Value> = take_nested(values).collect();
        while let Some(mut value) = pending.pop() {
            if let Value::CaseClass { args, .. } = &mut value {
                if let Some(inner) = Arc::get_mut(&mut args.0) {
                    pending.extend(take_nested(inner));
                }
            }
            // `value` now holds no uniquely owned case classes; dropping it is shallow.
        }
    }
}

/// Move every constructor value out of `values`, leaving `Unit` behind.
fn take_nested(values: &mut [Value]) -> impl Iterator<Item = Value> + '_ {
    values
        .iter_mut()
        .filter(|value| matches!(value, Value::CaseClass { .. }))
        .map(|value| std::mem::replace(value, Value::Unit))
}

#[cfg(test)]
mod tests {
    use amy_ir::{Name, QualifiedName};

    use super::*;

    fn cons() -> QualifiedName {
        QualifiedName::new(Name::from_raw(0), Name::from_raw(1))
    }

    fn nil() -> QualifiedName {
        QualifiedName::new(Name::from_raw(0), Name::from_raw(2))
    }

    fn list(len: i32) -> Value {
        let mut list = Value::case_class(nil(), Vec::new());
        for n in 0..len {
            list = Value::case_class(cons(), vec![Value::int(n), list]);
        }
        list
    }

    #[test]
    fn dropping_a_long_list_does_not_recurse() {
        // Far deeper than a recursive drop survives on a test thread.
        drop(list(1_000_000));
    }

    #[test]
    fn shared_tails_survive_dropping_one_owner() {
        let tail = list(3);
        let head = Value::case_class(cons(), vec![Value::int(9), tail.clone()]);
        drop(head);
        let Value::CaseClass { args, .. } = &tail else {
            panic!("expected a constructor value");
        };
        assert_eq!(args.len(), 2);
        assert_eq!(args[0], Value::int(2));
    }
}
