// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging groups and the group registry

use std::io::Write;

use thiserror::Error;

/// Stable index identifying a registered logging group.
///
/// Returned by `register_group` and accepted by the group-addressed call
/// family. Indices are assigned in registration order and never reused.
pub type GroupId = usize;

/// Index of the default logging group (empty name, present from startup).
pub const DEFAULT_GROUP: GroupId = 0;

/// Errors from the group registration protocol
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("logging group name {0:?} already exists")]
    DuplicateName(String),
}

/// A named output destination with its own on/off switch
pub(crate) struct GroupData {
    pub(crate) name: String,
    pub(crate) output: Box<dyn Write + Send>,
    pub(crate) enabled: bool,
}

/// Append-only collection of logging groups.
///
/// Index 0 is always the default group: empty name, stdout, enabled. Groups
/// are never removed or renamed for the process lifetime. The dispatch
/// worker is the only reader of `enabled`/`output` after construction;
/// registration appends under the registry mutex from the caller's thread.
pub(crate) struct GroupRegistry {
    groups: Vec<GroupData>,
}

impl GroupRegistry {
    pub(crate) fn new() -> Self {
        Self {
            groups: vec![GroupData {
                name: String::new(),
                output: Box::new(std::io::stdout()),
                enabled: true,
            }],
        }
    }

    /// Append a new group and return its index.
    ///
    /// Names must be unique, including the default group's empty name. A
    /// rejected registration leaves the registry untouched.
    pub(crate) fn register(
        &mut self,
        name: &str,
        output: Box<dyn Write + Send>,
        enabled: bool,
    ) -> Result<GroupId, RegistryError> {
        if self.groups.iter().any(|g| g.name == name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        self.groups.push(GroupData {
            name: name.to_string(),
            output,
            enabled,
        });
        Ok(self.groups.len() - 1)
    }

    /// Replace the default group's output, preserving its enabled flag.
    pub(crate) fn set_default_output(&mut self, output: Box<dyn Write + Send>) {
        self.groups[DEFAULT_GROUP].output = output;
    }

    /// Set a group's enabled flag. Unknown indices are ignored.
    pub(crate) fn set_enabled(&mut self, group: GroupId, on: bool) {
        if let Some(g) = self.groups.get_mut(group) {
            g.enabled = on;
        }
    }

    pub(crate) fn get_mut(&mut self, group: GroupId) -> Option<&mut GroupData> {
        self.groups.get_mut(group)
    }

    /// Flush every sink, ignoring write errors.
    pub(crate) fn flush_all(&mut self) {
        for g in &mut self.groups {
            let _ = g.output.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink() -> Box<dyn Write + Send> {
        Box::new(Vec::<u8>::new())
    }

    #[test]
    fn test_default_group_present() {
        let mut registry = GroupRegistry::new();
        let default = registry.get_mut(DEFAULT_GROUP).unwrap();
        assert_eq!(default.name, "");
        assert!(default.enabled);
    }

    #[test]
    fn test_register_assigns_sequential_indices() {
        let mut registry = GroupRegistry::new();
        let a = registry.register("audit", sink(), true).unwrap();
        let b = registry.register("metrics", sink(), false).unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert!(!registry.get_mut(b).unwrap().enabled);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = GroupRegistry::new();
        registry.register("audit", sink(), true).unwrap();

        let err = registry.register("audit", sink(), true).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("audit".to_string()));
    }

    #[test]
    fn test_empty_name_collides_with_default() {
        let mut registry = GroupRegistry::new();
        let err = registry.register("", sink(), true).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName(String::new()));
    }

    #[test]
    fn test_rejection_does_not_corrupt_registry() {
        let mut registry = GroupRegistry::new();
        registry.register("audit", sink(), true).unwrap();
        registry.register("audit", sink(), true).unwrap_err();

        // A later valid registration still gets the next index
        let id = registry.register("metrics", sink(), true).unwrap();
        assert_eq!(id, 2);
    }

    #[test]
    fn test_set_default_output_preserves_enabled() {
        let mut registry = GroupRegistry::new();
        registry.set_enabled(DEFAULT_GROUP, false);
        registry.set_default_output(sink());
        assert!(!registry.get_mut(DEFAULT_GROUP).unwrap().enabled);

        registry.set_enabled(DEFAULT_GROUP, true);
        registry.set_default_output(sink());
        assert!(registry.get_mut(DEFAULT_GROUP).unwrap().enabled);
    }

    #[test]
    fn test_set_enabled_unknown_index_ignored() {
        let mut registry = GroupRegistry::new();
        registry.set_enabled(42, true);
        assert!(registry.get_mut(42).is_none());
    }
}
