//! Setting descriptor types
//! Type definitions for declarative setting configuration

use crate::constants::errors::{
    SETTING_PARSE_ERROR, SETTING_VALIDATION_ERROR, UNKNOWN_SETTING,
};
use crate::error::{EditError, ErrorType};

/// Typed value after parsing and validation
/// Setters receive this, never raw strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean value
    Bool(bool),
    /// Enum value (canonicalized identifier)
    Enum(String),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone)]
pub enum SettingType {
    /// Boolean setting (true/false, on/off, yes/no, 1/0)
    Boolean,
    /// Enum setting with static variant list
    Enum {
        /// Valid enum variants (static string slices)
        variants: &'static [&'static str],
    },
}

/// Structured error for setting operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Failed to parse string value
    ParseError(String),
    /// Value failed validation
    ValidationError(String),
    /// Unknown or ambiguous option name
    UnknownOption(String),
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            SettingError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            SettingError::UnknownOption(name) => write!(f, "Unknown option: {name}"),
        }
    }
}

impl std::error::Error for SettingError {}

impl From<SettingError> for EditError {
    fn from(err: SettingError) -> Self {
        match err {
            SettingError::ParseError(msg) => {
                EditError::new(ErrorType::Parse, SETTING_PARSE_ERROR, msg)
            }
            SettingError::ValidationError(msg) => {
                EditError::new(ErrorType::Settings, SETTING_VALIDATION_ERROR, msg)
            }
            SettingError::UnknownOption(name) => EditError::new(
                ErrorType::Settings,
                UNKNOWN_SETTING,
                format!("Unknown option: {name}"),
            ),
        }
    }
}

/// Setter function signature
///
/// Function pointers (not trait objects) for static dispatch.
/// Receives parsed and validated `SettingValue`, never raw strings.
pub type SettingSetter<T> = fn(&mut T, SettingValue) -> Result<(), SettingError>;

/// Setting descriptor: name, aliases, type, and setter function
#[derive(Debug, Clone)]
pub struct SettingDescriptor<T> {
    /// Canonical setting name
    pub name: &'static str,
    /// Short aliases (e.g., &["ff"])
    pub aliases: &'static [&'static str],
    /// One-line description listed in `--help`
    pub description: &'static str,
    /// Setting type for parsing and validation
    pub ty: SettingType,
    /// Setter function pointer
    pub set: SettingSetter<T>,
}
