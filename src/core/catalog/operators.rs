/// Formatting rule turning a zero-based port index into the identifier the
/// design tool expects for one role of one operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortFormat {
    /// `prefix` followed by the index zero-padded to three digits (`I007`).
    Padded(&'static str),
    /// `prefix` followed by `index + offset`, unpadded (`I1` for index 0).
    Offset(&'static str, usize),
    /// A literal that ignores the index (`Switch`, `ElseI`).
    Fixed(&'static str),
    /// One letter per position (`R`, `G`, `B`).
    Positional(&'static [&'static str]),
}

impl PortFormat {
    /// Render the identifier for `index`.
    ///
    /// # Arguments
    /// * `index` - Zero-based port index
    ///
    /// # Returns
    /// The identifier, or `None` when a positional role has no entry at
    /// `index` or an offset index does not fit in `usize`
    pub fn format(&self, index: usize) -> Option<String> {
        match self {
            PortFormat::Padded(prefix) => Some(format!("{}{:03}", prefix, index)),
            PortFormat::Offset(prefix, offset) => index
                .checked_add(*offset)
                .map(|shifted| format!("{}{}", prefix, shifted)),
            PortFormat::Fixed(literal) => Some(literal.to_string()),
            PortFormat::Positional(letters) => letters.get(index).map(|letter| letter.to_string()),
        }
    }

    /// Number of valid indices, `None` if unbounded.
    pub fn positions(&self) -> Option<usize> {
        match self {
            PortFormat::Positional(letters) => Some(letters.len()),
            _ => None,
        }
    }
}

/// One declared port role of an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSpec {
    /// Role key matched against requested port names (`I`, `O`, `Condition`)
    pub key: &'static str,
    pub format: PortFormat,
}

impl RoleSpec {
    pub const fn new(key: &'static str, format: PortFormat) -> Self {
        Self { key, format }
    }
}

/// Catalog entry: an operator-type pattern and the roles it declares
#[derive(Debug, Clone, Copy)]
pub struct OperatorSpec {
    /// Shell-style pattern (`CMP_*`) or a plain operator name
    pub pattern: &'static str,
    /// Roles in declaration order; role lookup is first-match-wins
    pub roles: &'static [RoleSpec],
}

impl OperatorSpec {
    pub fn role_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.roles.iter().map(|role| role.key)
    }

    pub fn role(&self, key: &str) -> Option<&RoleSpec> {
        self.roles.iter().find(|role| role.key == key)
    }
}

const RGB: &[&str] = &["R", "G", "B"];
const AB: &[&str] = &["A", "B"];

const PADDED_INPUTS: &[RoleSpec] = &[RoleSpec::new("I", PortFormat::Padded("I"))];
const PADDED_OUTPUTS: &[RoleSpec] = &[RoleSpec::new("O", PortFormat::Padded("O"))];
const OFFSET_INPUTS: &[RoleSpec] = &[RoleSpec::new("I", PortFormat::Offset("I", 1))];

/// Operators with tool-specific port naming, in lookup order.
///
/// Operator types missing here pass requested port names through unchanged.
pub static OPERATORS: &[OperatorSpec] = &[
    OperatorSpec { pattern: "ADD", roles: PADDED_INPUTS },
    OperatorSpec { pattern: "AND", roles: PADDED_INPUTS },
    OperatorSpec { pattern: "BRANCH", roles: PADDED_OUTPUTS },
    OperatorSpec {
        pattern: "CASE",
        roles: &[
            RoleSpec::new("I", PortFormat::Padded("I")),
            RoleSpec::new("Switch", PortFormat::Fixed("Switch")),
        ],
    },
    OperatorSpec {
        pattern: "CMP_*",
        roles: &[
            RoleSpec::new("A", PortFormat::Fixed("A")),
            RoleSpec::new("B", PortFormat::Fixed("B")),
            RoleSpec::new("I", PortFormat::Positional(AB)),
        ],
    },
    OperatorSpec {
        pattern: "DIV",
        roles: &[
            RoleSpec::new("I", PortFormat::Offset("I", 1)),
            RoleSpec::new("R", PortFormat::Fixed("R")),
        ],
    },
    OperatorSpec {
        pattern: "HierarchicalBox",
        roles: &[
            RoleSpec::new("I", PortFormat::Padded("I")),
            RoleSpec::new("O", PortFormat::Padded("O")),
            RoleSpec::new("INBOUND", PortFormat::Padded("INBOUND#I")),
            RoleSpec::new("OUTBOUND", PortFormat::Padded("OUTBOUND#O")),
        ],
    },
    OperatorSpec {
        pattern: "IF",
        roles: &[
            RoleSpec::new("I", PortFormat::Padded("I")),
            RoleSpec::new("Condition", PortFormat::Padded("Condition")),
            RoleSpec::new("Else", PortFormat::Fixed("ElseI")),
        ],
    },
    OperatorSpec {
        pattern: "MergeComponents",
        roles: &[
            RoleSpec::new("R", PortFormat::Fixed("R")),
            RoleSpec::new("G", PortFormat::Fixed("G")),
            RoleSpec::new("B", PortFormat::Fixed("B")),
            RoleSpec::new("I", PortFormat::Positional(RGB)),
        ],
    },
    OperatorSpec { pattern: "MergeKernel", roles: PADDED_INPUTS },
    OperatorSpec { pattern: "MergeParallel", roles: PADDED_INPUTS },
    OperatorSpec { pattern: "MergePixel", roles: PADDED_INPUTS },
    OperatorSpec { pattern: "MULT", roles: OFFSET_INPUTS },
    OperatorSpec { pattern: "OR", roles: PADDED_INPUTS },
    OperatorSpec {
        pattern: "SplitComponents",
        roles: &[
            RoleSpec::new("R", PortFormat::Fixed("R")),
            RoleSpec::new("G", PortFormat::Fixed("G")),
            RoleSpec::new("B", PortFormat::Fixed("B")),
            RoleSpec::new("O", PortFormat::Positional(RGB)),
        ],
    },
    OperatorSpec { pattern: "SplitKernel", roles: PADDED_OUTPUTS },
    OperatorSpec { pattern: "SplitParallel", roles: PADDED_OUTPUTS },
    OperatorSpec { pattern: "SUB", roles: OFFSET_INPUTS },
    OperatorSpec { pattern: "XNOR", roles: PADDED_INPUTS },
    OperatorSpec { pattern: "XOR", roles: PADDED_INPUTS },
];

/// Look up a catalog entry by its exact pattern text.
///
/// Used by the resolver once a pattern has matched an operator type.
pub fn operator_spec(pattern: &str) -> Option<&'static OperatorSpec> {
    OPERATORS.iter().find(|spec| spec.pattern == pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_format() {
        let format = PortFormat::Padded("I");
        assert_eq!(format.format(0).as_deref(), Some("I000"));
        assert_eq!(format.format(7).as_deref(), Some("I007"));
        assert_eq!(format.format(123).as_deref(), Some("I123"));
        assert_eq!(format.positions(), None);
    }

    #[test]
    fn test_offset_format() {
        let format = PortFormat::Offset("I", 1);
        assert_eq!(format.format(0).as_deref(), Some("I1"));
        assert_eq!(format.format(9).as_deref(), Some("I10"));
        assert_eq!(format.format(usize::MAX), None);
        assert_eq!(format.positions(), None);
    }

    #[test]
    fn test_fixed_format_ignores_index() {
        let format = PortFormat::Fixed("ElseI");
        assert_eq!(format.format(0).as_deref(), Some("ElseI"));
        assert_eq!(format.format(5).as_deref(), Some("ElseI"));
    }

    #[test]
    fn test_positional_format() {
        let format = PortFormat::Positional(RGB);
        assert_eq!(format.format(0).as_deref(), Some("R"));
        assert_eq!(format.format(2).as_deref(), Some("B"));
        assert_eq!(format.format(3), None);
        assert_eq!(format.positions(), Some(3));
    }

    #[test]
    fn test_hierarchical_box_roles() {
        let spec = operator_spec("HierarchicalBox").unwrap();
        let keys: Vec<&str> = spec.role_keys().collect();
        assert_eq!(keys, vec!["I", "O", "INBOUND", "OUTBOUND"]);
        assert_eq!(spec.role("INBOUND").unwrap().format.format(0).as_deref(), Some("INBOUND#I000"));
        assert_eq!(spec.role("OUTBOUND").unwrap().format.format(1).as_deref(), Some("OUTBOUND#O001"));
    }

    #[test]
    fn test_branch_declares_only_outputs() {
        let spec = operator_spec("BRANCH").unwrap();
        assert!(spec.role("O").is_some());
        assert!(spec.role("I").is_none());
    }

    #[test]
    fn test_patterns_are_unique() {
        for (i, spec) in OPERATORS.iter().enumerate() {
            assert!(
                OPERATORS[i + 1..].iter().all(|other| other.pattern != spec.pattern),
                "duplicate catalog pattern '{}'",
                spec.pattern
            );
        }
    }
}
