//! Settings registry
//! Registry that holds setting descriptors and applies values to an options struct

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::matcher::{MatchResult, NameDef, NameMatcher};

/// Settings registry
///
/// Holds static setting descriptors and provides:
/// - Option name resolution (aliases, prefixes)
/// - Value parsing and validation
/// - Setter dispatch
#[derive(Debug)]
pub struct SettingsRegistry<T: 'static> {
    settings: &'static [SettingDescriptor<T>],
}

impl<T: 'static> Clone for SettingsRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsRegistry<T> {}

impl<T: 'static> SettingsRegistry<T> {
    /// Create a new registry from static descriptors
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<T>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    /// All descriptors in declaration order
    #[must_use]
    pub fn descriptors(&self) -> &'static [SettingDescriptor<T>] {
        self.settings
    }

    /// Listing of every setting with its aliases and description, for `--help`
    #[must_use]
    pub fn help_text(&self) -> String {
        let mut text = String::from("Settings (--set NAME=VALUE):");
        for desc in self.descriptors() {
            let names: Vec<&str> = std::iter::once(desc.name)
                .chain(desc.aliases.iter().copied())
                .collect();
            text.push_str(&format!("\n  {}  {}", names.join(", "), desc.description));
        }
        text
    }

    fn build_matcher(&self) -> NameMatcher {
        self.settings.iter().fold(NameMatcher::new(), |matcher, desc| {
            let def = desc
                .aliases
                .iter()
                .fold(NameDef::new(desc.name), |def, alias| def.with_alias(*alias));
            matcher.register(def)
        })
    }

    /// Resolve a user-typed option name to its descriptor
    pub fn resolve(&self, name: &str) -> Result<&'static SettingDescriptor<T>, SettingError> {
        let matched = match self.build_matcher().match_name(name) {
            MatchResult::Exact(n) | MatchResult::Prefix(n) => n,
            MatchResult::Ambiguous { prefix, matches } => {
                return Err(SettingError::UnknownOption(format!(
                    "{prefix} (ambiguous: matches {})",
                    matches.join(", ")
                )));
            }
            MatchResult::Unknown(_) => return Err(SettingError::UnknownOption(name.to_string())),
        };

        self.settings
            .iter()
            .find(|d| d.name == matched)
            .ok_or_else(|| SettingError::UnknownOption(name.to_string()))
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Boolean => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                _ => Err(SettingError::ParseError(format!(
                    "Invalid boolean value: {value}"
                ))),
            },
            SettingType::Enum { variants } => {
                let val_lower = value.trim().to_lowercase();
                variants
                    .iter()
                    .find(|v| v.to_lowercase() == val_lower)
                    .map(|canonical| SettingValue::Enum((*canonical).to_string()))
                    .ok_or_else(|| {
                        SettingError::ParseError(format!(
                            "Invalid enum value: {value}. Valid values: {variants:?}"
                        ))
                    })
            }
        }
    }

    /// Apply `value` to the setting called `name`
    ///
    /// Flow: resolve name, parse value by type, call the setter.
    pub fn apply(&self, name: &str, value: &str, target: &mut T) -> Result<(), SettingError> {
        let desc = self.resolve(name)?;
        let typed = Self::parse_value(&desc.ty, value)?;
        (desc.set)(target, typed)?;
        tracing::debug!(setting = desc.name, value, "applied setting");
        Ok(())
    }

    /// Apply an assignment of the form `name=value`.
    ///
    /// A bare `name` turns a boolean setting on; `noname` turns it off.
    pub fn apply_assignment(&self, assignment: &str, target: &mut T) -> Result<(), SettingError> {
        if let Some((name, value)) = assignment.split_once('=') {
            return self.apply(name.trim(), value, target);
        }

        let name = assignment.trim();
        if let Some(stripped) = name.strip_prefix("no") {
            if let Ok(desc) = self.resolve(stripped) {
                if matches!(desc.ty, SettingType::Boolean) {
                    return self.apply(desc.name, "false", target);
                }
            }
        }

        let desc = self.resolve(name)?;
        match desc.ty {
            SettingType::Boolean => self.apply(desc.name, "true", target),
            SettingType::Enum { .. } => Err(SettingError::ParseError(format!(
                "Missing value for {}",
                desc.name
            ))),
        }
    }
}
