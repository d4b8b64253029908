// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::InventoryError;
use crate::types::{Connection, InventoryHost};

type Vars = BTreeMap<String, Value>;

const ALL: &str = "all";

/// A group as written in the YAML file. Every key may be absent or null.
#[derive(Debug, Clone, Default, Deserialize)]
struct GroupDef {
    #[serde(default)]
    hosts: Option<BTreeMap<String, Option<Vars>>>,
    #[serde(default)]
    children: Option<BTreeMap<String, Option<GroupDef>>>,
    #[serde(default)]
    vars: Option<Vars>,
}

/// A group after parsing: its own variables and every host beneath it.
#[derive(Debug, Clone, Default, PartialEq)]
struct Group {
    /// Distance from `all`. Deeper groups override shallower ones.
    depth: usize,
    vars: Vars,
    members: BTreeSet<String>,
}

/// The hosts and groups declared in an inventory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    /// Variables set on each host itself.
    hosts: BTreeMap<String, Vars>,
    groups: BTreeMap<String, Group>,
}

impl Inventory {
    /// Reads and parses an inventory file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        tracing::debug!("loading inventory from {}", path.display());
        let text: String =
            std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Parses inventory YAML held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid inventory.
    pub fn from_yaml_str(text: &str) -> Result<Self, InventoryError> {
        Self::parse(text, "<inline>")
    }

    fn parse(text: &str, origin: &str) -> Result<Self, InventoryError> {
        let top_level: Option<BTreeMap<String, Option<GroupDef>>> = if text.trim().is_empty() {
            None
        } else {
            serde_yaml::from_str(text).map_err(|source| InventoryError::Parse {
                origin: origin.to_string(),
                source,
            })?
        };
        let top_level: BTreeMap<String, GroupDef> = top_level
            .unwrap_or_default()
            .into_iter()
            .map(|(name, group)| (name, group.unwrap_or_default()))
            .collect();

        let mut inventory: Self = Self::default();
        for (name, group) in &top_level {
            // Every other top-level group is an implicit child of `all`
            let depth: usize = usize::from(name != ALL);
            let mut lineage: Vec<String> = Vec::new();
            inventory.visit(name, group, depth, &top_level, &mut lineage)?;
        }

        let everyone: BTreeSet<String> = inventory.hosts.keys().cloned().collect();
        let all: &mut Group = inventory.groups.entry(String::from(ALL)).or_default();
        all.depth = 0;
        all.members = everyone;
        tracing::debug!(
            hosts = inventory.hosts.len(),
            groups = inventory.groups.len(),
            "inventory parsed"
        );
        Ok(inventory)
    }

    /// Records `group` and its descendants, returning every host beneath it.
    fn visit(
        &mut self,
        name: &str,
        group: &GroupDef,
        depth: usize,
        top_level: &BTreeMap<String, GroupDef>,
        lineage: &mut Vec<String>,
    ) -> Result<BTreeSet<String>, InventoryError> {
        if lineage.iter().any(|ancestor| ancestor == name) {
            return Err(InventoryError::GroupCycle(name.to_string()));
        }
        lineage.push(name.to_string());

        let mut members: BTreeSet<String> = BTreeSet::new();
        for (host, host_vars) in group.hosts.iter().flatten() {
            self.hosts
                .entry(host.clone())
                .or_default()
                .extend(host_vars.clone().unwrap_or_default());
            members.insert(host.clone());
        }

        for (child, inline) in group.children.iter().flatten() {
            if let Some(inline) = inline {
                members.extend(self.visit(child, inline, depth + 1, top_level, lineage)?);
            }
            // A null child refers to a group declared at the top level
            if let Some(declared) = top_level.get(child) {
                members.extend(self.visit(child, declared, depth + 1, top_level, lineage)?);
            }
            let entry: &mut Group = self.groups.entry(child.clone()).or_default();
            entry.depth = entry.depth.max(depth + 1);
        }

        lineage.pop();
        let entry: &mut Group = self.groups.entry(name.to_string()).or_default();
        entry.depth = entry.depth.max(depth);
        entry.vars.extend(group.vars.clone().unwrap_or_default());
        entry.members.extend(members.iter().cloned());
        Ok(members)
    }

    /// Names of every declared group, including the implicit `all`.
    #[must_use]
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Selects hosts by pattern.
    ///
    /// A pattern is a group name, a host name, `all` or `*`. Several patterns
    /// may be joined with `,` or `:` to select their union. A comma-separated
    /// part that names a group or host as a whole is not split on `:`, so
    /// IPv6 names such as `::1` can be selected. Hosts are returned sorted by
    /// name, each once.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NoMatch`] if any part of the pattern names
    /// neither a group nor a host, or if the selection is empty.
    pub fn hosts(&self, pattern: &str) -> Result<Vec<InventoryHost>, InventoryError> {
        let mut selected: BTreeSet<&str> = BTreeSet::new();

        for segment in pattern.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            if self.select(segment, &mut selected) {
                continue;
            }
            for part in segment
                .split(':')
                .map(str::trim)
                .filter(|part| !part.is_empty())
            {
                if !self.select(part, &mut selected) {
                    return Err(InventoryError::NoMatch(part.to_string()));
                }
            }
        }
        if selected.is_empty() {
            return Err(InventoryError::NoMatch(pattern.to_string()));
        }

        Ok(selected
            .into_iter()
            .map(|name| self.host(name))
            .collect())
    }

    /// Adds the hosts named by a single pattern part, returning whether it
    /// matched anything declared.
    fn select<'a>(&'a self, part: &str, selected: &mut BTreeSet<&'a str>) -> bool {
        if part == "*" {
            selected.extend(self.hosts.keys().map(String::as_str));
        } else if let Some(group) = self.groups.get(part) {
            selected.extend(group.members.iter().map(String::as_str));
        } else if let Some((name, _)) = self.hosts.get_key_value(part) {
            selected.insert(name.as_str());
        } else {
            return false;
        }
        true
    }

    /// Effective variables of a host: group variables from `all` down to the
    /// deepest group, then the host's own.
    fn effective_vars(&self, name: &str) -> Vars {
        let mut groups: Vec<(&String, &Group)> = self
            .groups
            .iter()
            .filter(|(_, group)| group.members.contains(name))
            .collect();
        groups.sort_by_key(|(group_name, group)| (group.depth, *group_name));

        let mut vars: Vars = Vars::new();
        for (_, group) in groups {
            vars.extend(group.vars.clone());
        }
        if let Some(own) = self.hosts.get(name) {
            vars.extend(own.clone());
        }
        vars
    }

    fn host(&self, name: &str) -> InventoryHost {
        let vars: Vars = self.effective_vars(name);
        InventoryHost {
            name: name.to_string(),
            connection: Connection::resolve(
                name,
                vars.get("ansible_connection").and_then(Value::as_str),
            ),
        }
    }
}
