//! Global constants for the ledit editor

pub mod ui {
    /// Separator between a line number and its text, also used in the prompt
    pub const LINE_MARKER: &str = "> ";

    /// Notice printed when the target file does not exist yet
    pub const MSG_NEW_FILE: &str = "Creating new file";
}

pub mod commands {
    /// Save and exit
    pub const SAVE_AND_EXIT: &str = "E";
    /// Exit without saving
    pub const QUIT: &str = "Q";
    /// Move the insertion point
    pub const INSERT_AT: &str = "I";
    /// List lines
    pub const LIST: &str = "L";
    /// Delete lines
    pub const DELETE: &str = "D";
}

pub mod errors {
    // Error Codes
    pub const INVALID_INSERT: &str = "INVALID_INSERT";
    pub const INVALID_LINE: &str = "INVALID_LINE";
    pub const INVALID_RANGE: &str = "INVALID_RANGE";
    pub const NO_PREVIOUS_LINE: &str = "NO_PREVIOUS_LINE";
    pub const NEW_FILE: &str = "NEW_FILE";
    pub const LOAD_FAILED: &str = "LOAD_FAILED";
    pub const SAVE_FAILED: &str = "SAVE_FAILED";
    pub const UTF8_ERROR: &str = "UTF8_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const SETTING_PARSE_ERROR: &str = "SETTING_PARSE_ERROR";
    pub const SETTING_VALIDATION_ERROR: &str = "SETTING_VALIDATION_ERROR";
    pub const UNKNOWN_SETTING: &str = "UNKNOWN_SETTING";

    // Error Messages
    pub const MSG_INVALID_INSERT: &str = "Invalid line number for insertion.";
    pub const MSG_INVALID_LIST_LINE: &str = "Invalid line number for listing.";
    pub const MSG_INVALID_LIST_RANGE: &str = "Invalid range for listing.";
    pub const MSG_INVALID_DELETE_LINE: &str = "Invalid line number to delete.";
    pub const MSG_INVALID_DELETE_RANGE: &str = "Invalid range for deletion.";
    pub const MSG_NO_PREVIOUS_LINE: &str = "No previous line to delete.";
    pub const MSG_SAVE_FAILED: &str = "Error saving file";
    pub const MSG_LOAD_FAILED: &str = "Could not read file";
}

pub mod logging {
    /// Environment variable holding the tracing filter directive
    pub const FILTER_ENV: &str = "LEDIT_LOG";
    /// Filter used when the environment variable is unset or invalid
    pub const DEFAULT_FILTER: &str = "info";
    /// Log file written when logging is enabled without an explicit path
    pub const DEFAULT_LOG_FILE: &str = "ledit.log";
}
