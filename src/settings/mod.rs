//! Editor settings
//! Declarative registry of options accepted through `--set NAME=VALUE`

pub mod descriptor;
pub mod matcher;
pub mod registry;

pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::SettingsRegistry;

use crate::document::LineEnding;

/// Options that shape how the document is written back to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Forced line ending; `None` keeps whatever the file used
    pub line_ending: Option<LineEnding>,
    /// Write through a temporary file and rename it over the target
    pub atomic_save: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        EditorOptions {
            line_ending: None,
            atomic_save: true,
        }
    }
}

fn set_line_ending(options: &mut EditorOptions, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Enum(s) => match s.to_lowercase().as_str() {
            "lf" | "unix" => {
                options.line_ending = Some(LineEnding::LF);
                Ok(())
            }
            "crlf" | "windows" | "dos" => {
                options.line_ending = Some(LineEnding::CRLF);
                Ok(())
            }
            _ => Err(SettingError::ValidationError(format!(
                "Invalid line ending: {s}. Expected 'lf' or 'crlf'"
            ))),
        },
        _ => Err(SettingError::ValidationError(
            "Expected enum value for line ending".to_string(),
        )),
    }
}

fn set_atomic_save(options: &mut EditorOptions, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            options.atomic_save = b;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

const EDITOR_SETTINGS: &[SettingDescriptor<EditorOptions>] = &[
    SettingDescriptor {
        name: "line_ending",
        aliases: &["ff", "fileformat"],
        description: "Line ending written on save (lf/crlf)",
        ty: SettingType::Enum {
            variants: &["lf", "crlf", "unix", "dos", "windows"],
        },
        set: set_line_ending,
    },
    SettingDescriptor {
        name: "atomic_save",
        aliases: &["atomic"],
        description: "Save through a temporary file and rename",
        ty: SettingType::Boolean,
        set: set_atomic_save,
    },
];

#[must_use]
pub fn create_settings_registry() -> SettingsRegistry<EditorOptions> {
    SettingsRegistry::new(EDITOR_SETTINGS)
}
