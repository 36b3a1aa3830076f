use serde::{Deserialize, Serialize};

/// A blockchain network registered with the indexer.
///
/// Reference data owned by an external registration process; the viewer only
/// reads it. `id` is the surrogate key every other entity points at, while
/// `chain_id` is the network identifier string (e.g. `cosmoshub-4`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: i32,
    pub chain_id: String,
    pub chain_name: String,
    pub icon_url: Option<String>,
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chain_deserializes_with_null_links() {
        let chain: Chain = serde_json::from_value(json!({
            "id": 1,
            "chain_id": "cosmoshub-4",
            "chain_name": "Cosmos Hub",
            "icon_url": null,
            "website": null
        }))
        .unwrap();

        assert_eq!(chain.id, 1);
        assert_eq!(chain.chain_id, "cosmoshub-4");
        assert_eq!(chain.icon_url, None);
        assert_eq!(chain.website, None);
    }

    #[test]
    fn test_chain_roundtrips_optional_links() {
        let chain = Chain {
            id: 2,
            chain_id: "osmosis-1".to_string(),
            chain_name: "Osmosis".to_string(),
            icon_url: Some("https://example.com/osmo.png".to_string()),
            website: Some("https://osmosis.zone".to_string()),
        };

        let value = serde_json::to_value(&chain).unwrap();
        assert_eq!(value["icon_url"], "https://example.com/osmo.png");

        let back: Chain = serde_json::from_value(value).unwrap();
        assert_eq!(back, chain);
    }
}
