use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_newtype;
use crate::macros::impls_for_uuid_newtype;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TestId(Uuid);

impls_for_uuid_newtype!(TestId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(TestId);

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct QuestionId(Uuid);

impls_for_uuid_newtype!(QuestionId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(QuestionId);

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct AttemptId(Uuid);

impls_for_uuid_newtype!(AttemptId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(AttemptId);
