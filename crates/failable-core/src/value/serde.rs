//! Serde support: encode only valid values, re-validate on decode.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Error as _, Serialize, Serializer};

use super::{ConstrainedValue, State};
use crate::rule::ValidationRule;

impl<T: Serialize, R> Serialize for ConstrainedValue<T, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.state {
            State::Value(value) => value.serialize(serializer),
            State::Error(err) => Err(S::Error::custom(format_args!(
                "cannot encode error as value of type `{}`: {}",
                std::any::type_name::<T>(),
                err
            ))),
        }
    }
}

impl<'de, T, R> Deserialize<'de> for ConstrainedValue<T, R>
where
    T: Deserialize<'de>,
    R: ValidationRule<Supported = T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = T::deserialize(deserializer)?;
        ConstrainedValue::try_new(raw).map_err(D::Error::custom)
    }
}
