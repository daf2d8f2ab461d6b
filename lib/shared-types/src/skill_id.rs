use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_newtype;
use crate::macros::impls_for_uuid_newtype;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SkillId(Uuid);

impls_for_uuid_newtype!(SkillId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(SkillId);

/// Id of one user's claim on one skill.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct UserSkillId(Uuid);

impls_for_uuid_newtype!(UserSkillId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(UserSkillId);
