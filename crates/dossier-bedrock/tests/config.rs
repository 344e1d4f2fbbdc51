use dossier_bedrock::config::{BedrockConfig, CredentialSource, DEFAULT_MODEL_ID, DEFAULT_REGION};

#[test]
fn empty_config_uses_defaults() {
    let config: BedrockConfig = serde_json::from_str("{}").expect("empty config should parse");

    assert_eq!(config.region, DEFAULT_REGION);
    assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    assert!(matches!(config.credentials, CredentialSource::DefaultChain));
}

#[test]
fn inline_credentials_parse_from_tagged_form() {
    let json = r#"{
        "region": "eu-west-1",
        "credentials": {
            "type": "inline",
            "access_key_id": "AKIA_TEST",
            "secret_access_key": "secret"
        }
    }"#;

    let config: BedrockConfig = serde_json::from_str(json).expect("inline config should parse");
    assert_eq!(config.region, "eu-west-1");
    match config.credentials {
        CredentialSource::Inline {
            access_key_id,
            session_token,
            ..
        } => {
            assert_eq!(access_key_id, "AKIA_TEST");
            assert_eq!(session_token, None);
        }
        other => panic!("expected inline credentials, got {other:?}"),
    }
}

#[test]
fn profile_credentials_round_trip() {
    let config = BedrockConfig {
        region: "us-west-2".to_string(),
        credentials: CredentialSource::Profile {
            profile_name: "staging".to_string(),
        },
        model_id: DEFAULT_MODEL_ID.to_string(),
    };

    let json = serde_json::to_string(&config).expect("config should serialize");
    assert!(json.contains(r#""type":"profile""#));

    let parsed: BedrockConfig = serde_json::from_str(&json).expect("config should parse back");
    match parsed.credentials {
        CredentialSource::Profile { profile_name } => assert_eq!(profile_name, "staging"),
        other => panic!("expected profile credentials, got {other:?}"),
    }
}
