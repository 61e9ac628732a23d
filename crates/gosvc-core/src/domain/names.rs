//! Name derivation from a module path.
//!
//! Every generated project needs a handful of spellings of the same name:
//! the directory it lives in, an exported Go identifier and an unexported one.
//! All of them come from the final segment of the module path.
//!
//! | Input segment       | Folder              | Exported        | Unexported      |
//! |---------------------|---------------------|-----------------|-----------------|
//! | `my-cool_service`   | `my-cool_service`   | `MyCoolService` | `myCoolService` |
//! | `billing.v2`        | `billing.v2`        | `BillingV2`     | `billingV2`     |
//! | `API`               | `API`               | `API`           | `aPI`           |
//!
//! Words are split on `-`, `.` and `_`; each word has the first letter of
//! every alphanumeric run upper-cased and the rest left untouched, then the
//! words are concatenated. Anything outside ASCII letters, digits and `_` is
//! dropped from the identifiers, so `café` becomes `Caf`. Only the very first
//! character is lower-cased for the unexported form.

use serde::Serialize;

use super::{error::DomainError, value_objects::ModulePath};

/// Hosts whose second path segment names the owning account.
pub const KNOWN_HOSTS: &[&str] = &[
    "github.com",
    "gitlab.com",
    "bitbucket.org",
    "codeberg.org",
    "gitee.com",
];

const WORD_SEPARATORS: [char; 3] = ['-', '.', '_'];

/// Names derived once per run from the module path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    module_path: ModulePath,
    folder_name: String,
    exported_name: String,
    unexported_name: String,
    owner_name: String,
}

impl DerivedNames {
    pub fn module_path(&self) -> &ModulePath {
        &self.module_path
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn exported_name(&self) -> &str {
        &self.exported_name
    }

    pub fn unexported_name(&self) -> &str {
        &self.unexported_name
    }

    /// Owner account, empty when the path is not under a known host.
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn owner(&self) -> Option<&str> {
        Some(self.owner_name.as_str()).filter(|o| !o.is_empty())
    }
}

/// Derive every name variant from a raw module path.
///
/// # Errors
///
/// - [`DomainError::InvalidModulePath`] for empty or relative-looking paths,
///   or a final segment that is not a single safe directory name.
/// - [`DomainError::EmptyIdentifier`] when the final segment contains no
///   ASCII letters or digits.
pub fn derive(raw: &str) -> Result<DerivedNames, DomainError> {
    derive_from(ModulePath::parse(raw)?)
}

/// Same as [`derive`] for an already validated path.
pub fn derive_from(module_path: ModulePath) -> Result<DerivedNames, DomainError> {
    let folder_name = module_path.last_segment().to_string();
    if matches!(folder_name.as_str(), "." | "..") || folder_name.contains('\\') {
        return Err(DomainError::invalid_path(
            module_path.as_str(),
            format!("'{folder_name}' is not a valid directory name"),
        ));
    }

    let exported_name = exported_identifier(&folder_name);
    if exported_name.is_empty() {
        return Err(DomainError::EmptyIdentifier {
            path: module_path.to_string(),
        });
    }
    let unexported_name = lower_first(&exported_name);
    let owner_name = owner_of(&module_path);

    Ok(DerivedNames {
        module_path,
        folder_name,
        exported_name,
        unexported_name,
        owner_name,
    })
}

fn exported_identifier(folder_name: &str) -> String {
    folder_name
        .trim()
        .split(WORD_SEPARATORS)
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<String>()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Upper-case the first letter of every alphanumeric run.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_boundary = true;

    for c in word.chars() {
        if at_boundary && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !c.is_alphanumeric();
    }

    out
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn owner_of(module_path: &ModulePath) -> String {
    let mut segments = module_path.segments();
    match (segments.next(), segments.next()) {
        (Some(host), Some(owner)) if !owner.is_empty() && is_known_host(host) => {
            owner.to_string()
        }
        _ => String::new(),
    }
}

fn is_known_host(segment: &str) -> bool {
    KNOWN_HOSTS
        .iter()
        .any(|host| host.eq_ignore_ascii_case(segment))
}
