/// The identifier conventions of a SUMO network export.
///
/// Internal edges model the interior of a junction and are named with a
/// reserved prefix (`:J3_0`). Large junctions are sometimes referred to by a
/// decorated name (`cluster_J3`), so junction identifiers are compared after
/// stripping everything before a configurable anchor character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingConvention {
    internal_prefix: String,
    junction_anchor: Option<char>,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new(":", Some('J'))
    }
}

impl NamingConvention {
    /// Creates a naming convention.
    pub fn new(internal_prefix: &str, junction_anchor: Option<char>) -> Self {
        Self {
            internal_prefix: internal_prefix.to_string(),
            junction_anchor,
        }
    }

    /// Returns true if the edge identifier names an internal edge.
    pub fn is_internal(&self, edge_id: &str) -> bool {
        !self.internal_prefix.is_empty() && edge_id.starts_with(&self.internal_prefix)
    }

    /// Reduces a junction identifier to its canonical form.
    pub fn normalize<'a>(&self, junction_id: &'a str) -> &'a str {
        let id = junction_id
            .strip_prefix(self.internal_prefix.as_str())
            .unwrap_or(junction_id);
        match self.junction_anchor {
            Some(anchor) => id.find(anchor).map_or(id, |idx| &id[idx..]),
            None => id,
        }
    }
}
