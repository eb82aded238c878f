//! Type-erased view of a validation rule.

use std::any::{Any, TypeId};

use super::{Subrules, ValidationRule};
use crate::error::{ValidationError, ValidationResult};

/// Object-safe view of a [`ValidationRule`].
///
/// Implemented for every `ValidationRule` by a blanket impl; values are
/// passed as `&dyn Any` and downcast to the rule's supported type before
/// being checked.
pub trait AnyRule: Send + Sync {
    /// `TypeId` of the rule's supported type.
    fn supported_type(&self) -> TypeId;

    /// Name of the rule's supported type, for diagnostics.
    fn supported_type_name(&self) -> &'static str;

    /// Downcasts `value` and checks it with the rule's own check.
    ///
    /// Fails with [`ValidationError::InvalidType`] when `value` is not of the
    /// supported type.
    fn validate_any(&self, value: &dyn Any) -> ValidationResult;

    /// The rule's sub-rules.
    fn subrules_any(&self) -> Subrules<'_>;

    /// Name used in log events.
    fn rule_name(&self) -> &'static str;
}

impl dyn AnyRule + '_ {
    /// Returns true if this rule checks values of type `T`.
    pub fn supports<T: 'static>(&self) -> bool {
        self.supported_type() == TypeId::of::<T>()
    }
}

impl<R: ValidationRule> AnyRule for R {
    fn supported_type(&self) -> TypeId {
        TypeId::of::<R::Supported>()
    }

    fn supported_type_name(&self) -> &'static str {
        std::any::type_name::<R::Supported>()
    }

    fn validate_any(&self, value: &dyn Any) -> ValidationResult {
        match value.downcast_ref::<R::Supported>() {
            Some(supported) => self.validate(supported),
            None => Err(ValidationError::invalid_type::<R::Supported>()),
        }
    }

    fn subrules_any(&self) -> Subrules<'_> {
        self.subrules()
    }

    fn rule_name(&self) -> &'static str {
        self.name()
    }
}

impl std::fmt::Debug for dyn AnyRule + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyRule")
            .field("rule", &self.rule_name())
            .field("supported", &self.supported_type_name())
            .finish()
    }
}
