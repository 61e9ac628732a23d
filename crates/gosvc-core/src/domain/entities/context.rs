use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::names::DerivedNames;

/// Variable names available to every template.
pub mod keys {
    pub const EXPORTED_NAME: &str = "ExportedName";
    pub const UNEXPORTED_NAME: &str = "UnexportedName";
    pub const FOLDER_NAME: &str = "FolderName";
    pub const MODULE_PATH: &str = "ModulePath";
    pub const OWNER_NAME: &str = "OwnerName";

    /// Short aliases understood by older skeleton templates.
    pub const SERVICE: &str = "Service";
    pub const SERVICE_UNEXPORTED: &str = "service";
    pub const MODULE: &str = "Module";
}

/// Flat key/value set used to fill template placeholders.
///
/// Built once from [`DerivedNames`] at the start of a run and only read
/// afterwards. `BTreeMap` keeps iteration order stable for display and
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubstitutionContext {
    variables: BTreeMap<String, String>,
}

impl SubstitutionContext {
    /// Context with no variables; mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            variables: BTreeMap::new(),
        }
    }

    pub fn from_names(names: &DerivedNames) -> Self {
        let pairs = [
            (keys::EXPORTED_NAME, names.exported_name()),
            (keys::UNEXPORTED_NAME, names.unexported_name()),
            (keys::FOLDER_NAME, names.folder_name()),
            (keys::MODULE_PATH, names.module_path().as_str()),
            (keys::OWNER_NAME, names.owner_name()),
            (keys::SERVICE, names.exported_name()),
            (keys::SERVICE_UNEXPORTED, names.unexported_name()),
            (keys::MODULE, names.module_path().as_str()),
        ];

        Self {
            variables: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Add or override a variable, consuming self.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    /// The folder the project is generated into.
    pub fn folder_name(&self) -> Option<&str> {
        self.get(keys::FOLDER_NAME)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.variables
    }
}

impl From<&DerivedNames> for SubstitutionContext {
    fn from(names: &DerivedNames) -> Self {
        Self::from_names(names)
    }
}
