// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;

#[test]
fn test_mutable_struct_evolution() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    // Order v2 adds a member and drops another; the shared members line up.
    let v1 = register(&lookup, "Order_v1", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[
            member(1, "order_id", TypeIdentifier::TK_UINT64),
            member(2, "quantity", TypeIdentifier::TK_INT32),
            member(3, "note", TypeIdentifier::string(128)),
        ],
    ));
    let v2 = register(&lookup, "Order_v2", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[
            member(1, "order_id", TypeIdentifier::TK_UINT64),
            member(2, "quantity", TypeIdentifier::TK_INT32),
            member(4, "priority", TypeIdentifier::TK_UINT8),
        ],
    ));

    assert!(checker.assignable_id_id(&v1, &v2));
    assert!(checker.assignable_id_id(&v2, &v1));
}

#[test]
fn test_extensibility_must_match() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let members = [member(0, "a", TypeIdentifier::TK_INT32)];
    let fin = register(&lookup, "Fin", build_struct(StructTypeFlag::IS_FINAL, &members));
    let app = register(&lookup, "App", build_struct(StructTypeFlag::IS_APPENDABLE, &members));
    let mutb = register(&lookup, "Mut", build_struct(StructTypeFlag::IS_MUTABLE, &members));

    assert!(!checker.assignable_id_id(&fin, &app));
    assert!(!checker.assignable_id_id(&app, &mutb));
    assert!(!checker.assignable_id_id(&mutb, &fin));
}

#[test]
fn test_final_requires_same_member_count() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let one = register(&lookup, "One", build_struct(
        StructTypeFlag::IS_FINAL,
        &[member(0, "a", TypeIdentifier::TK_INT32)],
    ));
    let two = register(&lookup, "Two", build_struct(
        StructTypeFlag::IS_FINAL,
        &[
            member(0, "a", TypeIdentifier::TK_INT32),
            member(1, "b", TypeIdentifier::TK_INT32),
        ],
    ));

    assert!(!checker.assignable_id_id(&one, &two));
    assert!(!checker.assignable_id_id(&two, &one));
}

#[test]
fn test_final_requires_same_member_order() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let ab = register(&lookup, "AB", build_struct(
        StructTypeFlag::IS_FINAL,
        &[
            member(0, "a", TypeIdentifier::TK_INT32),
            member(1, "b", TypeIdentifier::TK_FLOAT32),
        ],
    ));
    let ba = register(&lookup, "BA", build_struct(
        StructTypeFlag::IS_FINAL,
        &[
            member(1, "b", TypeIdentifier::TK_FLOAT32),
            member(0, "a", TypeIdentifier::TK_INT32),
        ],
    ));

    assert!(!checker.assignable_id_id(&ab, &ba));
}

#[test]
fn test_appendable_writer_may_extend() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let base = register(&lookup, "Base", build_struct(
        StructTypeFlag::IS_APPENDABLE,
        &[
            member(0, "a", TypeIdentifier::TK_INT32),
            member(1, "b", TypeIdentifier::TK_FLOAT64),
        ],
    ));
    let extended = register(&lookup, "Extended", build_struct(
        StructTypeFlag::IS_APPENDABLE,
        &[
            member(0, "a", TypeIdentifier::TK_INT32),
            member(1, "b", TypeIdentifier::TK_FLOAT64),
            member(2, "c", TypeIdentifier::string(32)),
        ],
    ));

    // Old reader, new writer: trailing member ignored.
    assert!(checker.assignable_id_id(&base, &extended));
    // New reader, old writer: trailing member absent, still assignable.
    assert!(checker.assignable_id_id(&extended, &base));
}

#[test]
fn test_appendable_prefix_type_mismatch() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let a = register(&lookup, "PfxA", build_struct(
        StructTypeFlag::IS_APPENDABLE,
        &[member(0, "a", TypeIdentifier::TK_INT32)],
    ));
    let b = register(&lookup, "PfxB", build_struct(
        StructTypeFlag::IS_APPENDABLE,
        &[member(0, "a", TypeIdentifier::TK_INT64)],
    ));

    assert!(!checker.assignable_id_id(&a, &b));
}

#[test]
fn test_optionality_must_agree_on_shared_positions() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let required = register(&lookup, "Req", build_struct(
        StructTypeFlag::IS_APPENDABLE,
        &[member(0, "a", TypeIdentifier::TK_INT32)],
    ));
    let optional = register(&lookup, "Opt", build_struct(
        StructTypeFlag::IS_APPENDABLE,
        &[optional_member(0, "a", TypeIdentifier::TK_INT32)],
    ));

    assert!(!checker.assignable_id_id(&required, &optional));
    assert!(!checker.assignable_id_id(&optional, &required));
}

#[test]
fn test_no_common_member_fails() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let left = register(&lookup, "Left", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(0, "a", TypeIdentifier::TK_INT32)],
    ));
    let right = register(&lookup, "Right", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(1, "b", TypeIdentifier::TK_INT32)],
    ));

    assert!(!checker.assignable_id_id(&left, &right));
}

#[test]
fn test_same_id_different_name_is_a_conflict() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let left = register(&lookup, "NmA", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(0, "speed", TypeIdentifier::TK_INT32)],
    ));
    let right = register(&lookup, "NmB", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(0, "velocity", TypeIdentifier::TK_INT32)],
    ));

    assert!(!checker.assignable_id_id(&left, &right));

    // Relaxed by configuration: ids alone decide the match.
    let relaxed = TypeAssignability::with_config(
        &lookup,
        TypeConsistencyConfig {
            ignore_member_names: true,
            ..TypeConsistencyConfig::default()
        },
    );
    assert!(relaxed.assignable_id_id(&left, &right));
}

#[test]
fn test_same_name_different_id_is_a_conflict() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let left = register(&lookup, "IdA", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[
            member(0, "shared", TypeIdentifier::TK_INT32),
            member(1, "extra", TypeIdentifier::TK_INT32),
        ],
    ));
    let right = register(&lookup, "IdB", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[
            member(0, "shared", TypeIdentifier::TK_INT32),
            member(2, "extra", TypeIdentifier::TK_INT32),
        ],
    ));

    // "extra" exists on both sides under different ids.
    assert!(!checker.assignable_id_id(&left, &right));
}

#[test]
fn test_must_understand_requires_a_match() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let reader = register(&lookup, "MuReader", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(0, "a", TypeIdentifier::TK_INT32)],
    ));
    let writer = register(&lookup, "MuWriter", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[
            member(0, "a", TypeIdentifier::TK_INT32),
            must_understand_member(9, "critical", TypeIdentifier::TK_INT32),
        ],
    ));

    // The writer's must-understand member has no reader counterpart.
    assert!(!checker.assignable_id_id(&reader, &writer));
}

#[test]
fn test_optional_must_understand_may_go_unmatched() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let mut spec = must_understand_member(9, "advisory", TypeIdentifier::TK_INT32);
    spec.flags = spec.flags.with(MemberFlag::IS_OPTIONAL);

    let reader = register(&lookup, "OmReader", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(0, "a", TypeIdentifier::TK_INT32)],
    ));
    let writer = register(&lookup, "OmWriter", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(0, "a", TypeIdentifier::TK_INT32), spec],
    ));

    assert!(checker.assignable_id_id(&reader, &writer));
}

#[test]
fn test_key_member_requires_a_match() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let keyed = register(&lookup, "Keyed", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[
            key_member(0, "id", TypeIdentifier::TK_UINT32),
            member(1, "payload", TypeIdentifier::TK_FLOAT64),
        ],
    ));
    let keyless = register(&lookup, "Keyless", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(1, "payload", TypeIdentifier::TK_FLOAT64)],
    ));

    // The key member misses its counterpart, both directions.
    assert!(!checker.assignable_id_id(&keyed, &keyless));
    assert!(!checker.assignable_id_id(&keyless, &keyed));
}

#[test]
fn test_nested_struct_members_recurse() {
    let lookup = TypeLookup::new();
    let checker = TypeAssignability::new(&lookup);

    let inner_v1 = register(&lookup, "Inner_v1", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(0, "x", TypeIdentifier::TK_INT32)],
    ));
    let inner_v2 = register(&lookup, "Inner_v2", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[
            member(0, "x", TypeIdentifier::TK_INT32),
            member(1, "y", TypeIdentifier::TK_INT32),
        ],
    ));
    let inner_bad = register(&lookup, "Inner_bad", build_struct(
        StructTypeFlag::IS_MUTABLE,
        &[member(0, "x", TypeIdentifier::TK_FLOAT32)],
    ));

    let outer = |name: &str, inner: &TypeIdentifier| {
        register(&lookup, name, build_struct(
            StructTypeFlag::IS_MUTABLE,
            &[member(0, "inner", inner.clone())],
        ))
    };
    let o1 = outer("Outer1", &inner_v1);
    let o2 = outer("Outer2", &inner_v2);
    let obad = outer("OuterBad", &inner_bad);

    assert!(checker.assignable_id_id(&o1, &o2));
    assert!(!checker.assignable_id_id(&o1, &obad));
}
