use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Type, ValueRef};

/// Text form of a `processed_dttm` column.
///
/// Text columns pass through unchanged. `TIMESTAMP` and `TIMESTAMPTZ`
/// columns are rendered as RFC 3339 in UTC, e.g. `2024-03-01T08:30:00Z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LastChange(pub String);

impl LastChange {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDateTime> for LastChange {
    fn from(value: NaiveDateTime) -> Self {
        value.and_utc().into()
    }
}

impl From<DateTime<Utc>> for LastChange {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Type<Postgres> for LastChange {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
            || <NaiveDateTime as Type<Postgres>>::compatible(ty)
            || <DateTime<Utc> as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for LastChange {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let ty = value.type_info().into_owned();

        if <DateTime<Utc> as Type<Postgres>>::compatible(&ty) {
            let at = <DateTime<Utc> as Decode<'r, Postgres>>::decode(value)?;
            Ok(at.into())
        } else if <NaiveDateTime as Type<Postgres>>::compatible(&ty) {
            let at = <NaiveDateTime as Decode<'r, Postgres>>::decode(value)?;
            Ok(at.into())
        } else {
            Ok(Self(<String as Decode<'r, Postgres>>::decode(value)?))
        }
    }
}
