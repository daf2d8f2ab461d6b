use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_newtype;
use crate::macros::impls_for_uuid_newtype;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct JobId(Uuid);

impls_for_uuid_newtype!(JobId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(JobId);

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ApplicationId(Uuid);

impls_for_uuid_newtype!(ApplicationId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(ApplicationId);
