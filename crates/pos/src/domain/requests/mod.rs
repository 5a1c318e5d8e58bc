mod category;
mod product;

pub use self::category::CategoryRequest;
pub use self::product::ProductRequest;

use serde::{Deserialize, Deserializer};

/// Explicit `null` decodes like a missing field, leaving the zero value
/// for validation to report.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
