use thiserror::Error;

pub type BindResult<T> = std::result::Result<T, BindError>;

/// Errors surfaced by the binding layer.
///
/// All of these abort the single host call that raised them; none of them
/// invalidates the registry or previously constructed values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    /// An operand did not have the structural shape the adapter required:
    /// not a record, a required field missing or non-numeric, or a scalar
    /// position filled with something other than a number.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Wrong number of positional arguments, beyond what constructor
    /// defaulting covers.
    #[error("Invalid arity for {what}: expected {expected} arguments, got {actual}")]
    ArityMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// No type with this name has been registered.
    #[error("Unknown type '{0}'")]
    UnknownType(String),

    /// The receiver's type defines no such method.
    #[error("Unknown method '{method}' for type '{type_name}'")]
    UnknownMethod { type_name: String, method: String },

    /// The type's static namespace defines no such function.
    #[error("Unknown static function '{name}' for type '{type_name}'")]
    UnknownStatic { type_name: String, name: String },

    /// The resolved operand type defines no such operator.
    #[error("Type '{type_name}' does not define operator '{operator}'")]
    UnknownOperator {
        type_name: String,
        operator: &'static str,
    },
}
