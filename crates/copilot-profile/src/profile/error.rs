use thiserror::Error;

/// Construction-time validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("invalid value for `{field}`: {constraint} (got {value})")]
    Invalid {
        /// Mapping key path, e.g. `memory.shortTermWindow`.
        field: &'static str,
        constraint: &'static str,
        value: String,
    },
}

impl ProfileError {
    pub(crate) fn invalid(
        field: &'static str,
        constraint: &'static str,
        value: impl ToString,
    ) -> Self {
        ProfileError::Invalid {
            field,
            constraint,
            value: value.to_string(),
        }
    }

    /// Key path of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ProfileError::Invalid { field, .. } => field,
        }
    }
}
