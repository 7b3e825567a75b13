/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property-based generators for [`JsonValue`] trees.
//!
//! The main entry point is [`gen_json_value(depth)`], which generates a
//! structurally diverse document of bounded depth covering every
//! variant: scalars at the leaves, arrays and objects as the recursive
//! cases. Numbers are drawn from both the integer and float halves of
//! [`Number`] so that round-trip tests exercise both encodings.
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use proptest::prelude::*;

use crate::JsonMap;
use crate::JsonValue;
use crate::Number;

/// Generates a leaf (non-recursive) JSON value.
pub fn gen_json_leaf() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i64>().prop_map(|n| JsonValue::Number(n.into())),
        gen_finite_f64().prop_map(JsonValue::from),
        "[a-zA-Z0-9 _\\-]{0,12}".prop_map(JsonValue::String),
    ]
}

/// Generates a [`JsonValue`] of at most `depth` levels of nesting, with
/// arrays and objects of up to 6 members per level.
pub fn gen_json_value(depth: u32) -> impl Strategy<Value = JsonValue> {
    gen_json_leaf().prop_recursive(depth, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|entries| {
                // Duplicate keys collapse, as they would in a parsed
                // document.
                JsonValue::Object(entries.into_iter().collect::<JsonMap>())
            }),
        ]
    })
}

fn gen_finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite floats only", |value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use proptest::strategy::ValueTree;
    use proptest::test_runner::Config;
    use proptest::test_runner::TestRunner;

    use super::*;

    #[test]
    fn print_some_documents() {
        let mut runner = TestRunner::new(Config::default());

        for _ in 0..64 {
            let strat = gen_json_value(3);
            let value = strat.new_tree(&mut runner).unwrap().current();
            println!("{}", value);
        }
    }

    proptest! {
        #[test]
        fn generated_depth_is_bounded(value in gen_json_value(3)) {
            fn depth(value: &JsonValue) -> u32 {
                match value {
                    JsonValue::Array(items) => {
                        1 + items.iter().map(depth).max().unwrap_or(0)
                    }
                    JsonValue::Object(entries) => {
                        1 + entries.values().map(depth).max().unwrap_or(0)
                    }
                    _ => 0,
                }
            }
            prop_assert!(depth(&value) <= 4);
        }
    }
}
