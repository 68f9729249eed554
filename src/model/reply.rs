/// Validated generator output for one turn. Transient: consumed by the
/// engine to build the next Scene, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorReply {
    pub description: String,
    pub options: Vec<String>,
    pub deltas: Vec<ItemDelta>,
}

/// One signed inventory operation from the generator's
/// `inventoryUpdates` array.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemDelta {
    Add(String),
    Remove(String),
}

impl ItemDelta {
    /// Decodes the wire form: a leading '-' marks a removal, anything
    /// else is an addition.
    pub fn from_wire(entry: &str) -> Self {
        match entry.strip_prefix('-') {
            Some(item) => ItemDelta::Remove(item.to_string()),
            None => ItemDelta::Add(entry.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_prefix_selects_removal() {
        assert_eq!(ItemDelta::from_wire("torch"), ItemDelta::Add("torch".into()));
        assert_eq!(ItemDelta::from_wire("-torch"), ItemDelta::Remove("torch".into()));
    }
}
