// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;
use crate::type_object::{
    CommonEnumeratedLiteral, CommonStructMember, CommonUnionMember, EnumTypeFlag,
    EnumeratedLiteralFlag, MemberFlag, MinimalAliasBody, MinimalAliasHeader, MinimalAliasType,
    CommonAliasBody, MinimalDiscriminatorMember, MinimalEnumeratedHeader, MinimalEnumeratedLiteral,
    MinimalEnumeratedType, MinimalMemberDetail, MinimalStructHeader, MinimalStructMember,
    MinimalStructType, MinimalTypeDetail, MinimalUnionHeader, MinimalUnionMember,
    MinimalUnionType, StructTypeFlag, UnionTypeFlag,
};
use crate::{EquivalenceHash, MinimalTypeObject, TypeConsistencyConfig, TypeIdentifier, TypeLookup};

mod structs;

#[derive(Clone)]
struct MemberSpec {
    id: u32,
    name: &'static str,
    type_id: TypeIdentifier,
    flags: MemberFlag,
}

fn member(id: u32, name: &'static str, type_id: TypeIdentifier) -> MemberSpec {
    MemberSpec {
        id,
        name,
        type_id,
        flags: MemberFlag::empty(),
    }
}

fn key_member(id: u32, name: &'static str, type_id: TypeIdentifier) -> MemberSpec {
    MemberSpec {
        id,
        name,
        type_id,
        flags: MemberFlag::IS_KEY,
    }
}

fn optional_member(id: u32, name: &'static str, type_id: TypeIdentifier) -> MemberSpec {
    MemberSpec {
        id,
        name,
        type_id,
        flags: MemberFlag::IS_OPTIONAL,
    }
}

fn must_understand_member(id: u32, name: &'static str, type_id: TypeIdentifier) -> MemberSpec {
    MemberSpec {
        id,
        name,
        type_id,
        flags: MemberFlag::IS_MUST_UNDERSTAND,
    }
}

fn build_struct(flags: StructTypeFlag, members: &[MemberSpec]) -> MinimalTypeObject {
    let member_seq = members
        .iter()
        .map(|spec| MinimalStructMember {
            common: CommonStructMember {
                member_id: spec.id,
                member_flags: spec.flags,
                member_type_id: spec.type_id.clone(),
            },
            detail: MinimalMemberDetail::from_name(spec.name),
        })
        .collect();

    MinimalTypeObject::Struct(MinimalStructType {
        struct_flags: flags,
        header: MinimalStructHeader {
            base_type: None,
            detail: MinimalTypeDetail::new(),
        },
        member_seq,
    })
}

#[derive(Clone)]
struct ArmSpec {
    id: u32,
    name: &'static str,
    labels: Vec<i32>,
    type_id: TypeIdentifier,
    flags: MemberFlag,
}

fn arm(id: u32, name: &'static str, labels: &[i32], type_id: TypeIdentifier) -> ArmSpec {
    ArmSpec {
        id,
        name,
        labels: labels.to_vec(),
        type_id,
        flags: MemberFlag::empty(),
    }
}

fn default_arm(id: u32, name: &'static str, labels: &[i32], type_id: TypeIdentifier) -> ArmSpec {
    ArmSpec {
        id,
        name,
        labels: labels.to_vec(),
        type_id,
        flags: MemberFlag::IS_DEFAULT,
    }
}

fn build_union(
    flags: UnionTypeFlag,
    discriminator: TypeIdentifier,
    arms: &[ArmSpec],
) -> MinimalTypeObject {
    build_union_with_disc_flags(flags, discriminator, MemberFlag::empty(), arms)
}

fn build_union_with_disc_flags(
    flags: UnionTypeFlag,
    discriminator: TypeIdentifier,
    disc_flags: MemberFlag,
    arms: &[ArmSpec],
) -> MinimalTypeObject {
    let member_seq = arms
        .iter()
        .map(|spec| MinimalUnionMember {
            common: CommonUnionMember {
                member_id: spec.id,
                member_flags: spec.flags,
                member_type_id: spec.type_id.clone(),
                label_seq: spec.labels.clone(),
            },
            detail: MinimalMemberDetail::from_name(spec.name),
        })
        .collect();

    MinimalTypeObject::Union(MinimalUnionType {
        union_flags: flags,
        header: MinimalUnionHeader {
            discriminator: MinimalDiscriminatorMember {
                member_flags: disc_flags,
                type_id: discriminator,
            },
            detail: MinimalTypeDetail::new(),
        },
        member_seq,
    })
}

fn build_enum(flags: EnumTypeFlag, bit_bound: i16, literals: &[(&str, i32)]) -> MinimalTypeObject {
    let literal_seq = literals
        .iter()
        .map(|&(name, value)| MinimalEnumeratedLiteral {
            common: CommonEnumeratedLiteral {
                value,
                flags: EnumeratedLiteralFlag::empty(),
            },
            detail: MinimalMemberDetail::from_name(name),
        })
        .collect();

    MinimalTypeObject::Enumerated(MinimalEnumeratedType {
        enum_flags: flags,
        header: MinimalEnumeratedHeader {
            bit_bound,
            detail: MinimalTypeDetail::new(),
        },
        literal_seq,
    })
}

fn build_bitmask(bit_bound: i16, flags: &[(&str, u16)]) -> MinimalTypeObject {
    use crate::type_object::{
        BitflagFlag, CommonBitflag, MinimalBitflag, MinimalBitmaskHeader, MinimalBitmaskType,
    };

    let flag_seq = flags
        .iter()
        .map(|&(name, position)| MinimalBitflag {
            common: CommonBitflag {
                position,
                flags: BitflagFlag::empty(),
            },
            detail: MinimalMemberDetail::from_name(name),
        })
        .collect();

    MinimalTypeObject::Bitmask(MinimalBitmaskType {
        header: MinimalBitmaskHeader {
            bit_bound,
            detail: MinimalTypeDetail::new(),
        },
        flag_seq,
    })
}

fn build_alias(target: TypeIdentifier) -> MinimalTypeObject {
    MinimalTypeObject::Alias(MinimalAliasType {
        alias_flags: crate::type_object::AliasTypeFlag::empty(),
        header: MinimalAliasHeader {
            detail: MinimalTypeDetail::new(),
        },
        body: MinimalAliasBody {
            common: CommonAliasBody {
                related_flags: crate::type_object::TypeRelationFlag::empty(),
                related_type: target,
            },
        },
    })
}

/// Register `obj` under a hash identifier derived from `name`.
fn register(lookup: &TypeLookup, name: &str, obj: MinimalTypeObject) -> TypeIdentifier {
    let id = TypeIdentifier::minimal(EquivalenceHash::compute(name.as_bytes()));
    lookup.insert(id.clone(), obj);
    id
}
