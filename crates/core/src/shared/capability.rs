use std::collections::HashMap;

/// Queries whether a versioned platform feature contract is present.
///
/// Hosts answer from their real platform facilities; tests substitute a
/// static table. The query is pure: no side effects, no caching contract.
pub trait CapabilityQuery: Send + Sync {
    fn is_api_contract_present(&self, contract: &str, min_version: u16) -> bool;
}

/// Contract table probed once at host startup, or hand-built in tests.
#[derive(Clone, Debug, Default)]
pub struct StaticCapabilities {
    contracts: HashMap<String, u16>,
}

impl StaticCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contract at the given version, replacing any existing entry.
    pub fn with_contract(mut self, contract: &str, version: u16) -> Self {
        self.contracts.insert(contract.to_string(), version);
        self
    }
}

impl CapabilityQuery for StaticCapabilities {
    fn is_api_contract_present(&self, contract: &str, min_version: u16) -> bool {
        self.contracts
            .get(contract)
            .is_some_and(|&version| version >= min_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::absent(None, 3, false)]
    #[case::below_minimum(Some(2), 3, false)]
    #[case::exact_minimum(Some(3), 3, true)]
    #[case::above_minimum(Some(5), 3, true)]
    fn test_contract_presence(
        #[case] version: Option<u16>,
        #[case] min: u16,
        #[case] expected: bool,
    ) {
        let mut caps = StaticCapabilities::new();
        if let Some(v) = version {
            caps = caps.with_contract("TestContract", v);
        }
        assert_eq!(caps.is_api_contract_present("TestContract", min), expected);
    }

    #[test]
    fn test_unrelated_contract_is_absent() {
        let caps = StaticCapabilities::new().with_contract("Other", 9);
        assert!(!caps.is_api_contract_present("TestContract", 1));
    }

    #[test]
    fn test_with_contract_replaces_version() {
        let caps = StaticCapabilities::new()
            .with_contract("TestContract", 1)
            .with_contract("TestContract", 4);
        assert!(caps.is_api_contract_present("TestContract", 3));
    }
}
