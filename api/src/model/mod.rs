pub mod admin;
pub mod grid;
pub mod page;
pub mod reservation;

use serde::{Deserialize, Deserializer};

// JSON の null は未指定と同じ扱いにする
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
