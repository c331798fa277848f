// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

//! Address round-trip and tamper-detection tests.

use bbp_address::encoding::{ToBase58Check, ALPHABET};
use bbp_address::{
    decode_address, encode_address, parse_for_network, Address, AddressConfig, AddressError,
    AddressKind, NetworkType, CHECKED_ADDRESS_SIZE, IDENTIFIER_SIZE,
};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

mod address_properties {
    use super::*;

    proptest! {
        /// Property: any (version, identifier) survives encode then decode
        #[test]
        fn prop_address_round_trip(
            version in any::<u8>(),
            identifier in prop::array::uniform20(any::<u8>())
        ) {
            let text = encode_address(version, &identifier).expect("20-byte identifier");
            let (decoded_version, decoded_identifier) =
                decode_address(&text, IDENTIFIER_SIZE).expect("own output must decode");

            prop_assert_eq!(decoded_version, version);
            prop_assert_eq!(decoded_identifier, identifier.to_vec());

            let address: Address = text.parse().expect("own output must parse");
            prop_assert_eq!(address, Address::new(version, identifier));
        }

        /// Property: replacing one character never yields a valid address
        #[test]
        fn prop_single_character_tamper_detected(
            version in any::<u8>(),
            identifier in prop::array::uniform20(any::<u8>()),
            position in any::<prop::sample::Index>(),
            replacement in any::<prop::sample::Index>()
        ) {
            let text = encode_address(version, &identifier).expect("20-byte identifier");
            let mut chars: Vec<char> = text.chars().collect();
            let at = position.index(chars.len());

            let original = chars[at];
            let mut substitute = ALPHABET[replacement.index(ALPHABET.len())] as char;
            if substitute == original {
                substitute = if original == 'z' { '1' } else { 'z' };
            }
            chars[at] = substitute;
            let tampered: String = chars.into_iter().collect();

            let result = decode_address(&tampered, IDENTIFIER_SIZE);
            prop_assert!(
                matches!(
                    result,
                    Err(AddressError::InvalidChecksum) | Err(AddressError::InvalidLength { .. })
                ),
                "tampered {} decoded as {:?}",
                tampered,
                result
            );
        }
    }
}

mod address_scenarios {
    use super::*;

    #[test]
    fn test_foreign_character_substitution() {
        init_tracing();
        for bad in ['0', 'O', 'I', 'l', '+'] {
            let mut text = String::from("B4YNHuaXAgpbyP5QgM3H6S41AuKcsRCEaB");
            text.replace_range(5..6, &bad.to_string());
            assert_eq!(
                decode_address(&text, IDENTIFIER_SIZE),
                Err(AddressError::InvalidCharacter { character: bad, index: 5 })
            );
        }
    }

    #[test]
    fn test_length_mismatch_both_directions() {
        let short = [25u8; 20].to_base58_check();
        assert_eq!(
            decode_address(&short, IDENTIFIER_SIZE),
            Err(AddressError::InvalidLength { expected: CHECKED_ADDRESS_SIZE, actual: 24 })
        );

        let long = [25u8; 22].to_base58_check();
        assert_eq!(
            decode_address(&long, IDENTIFIER_SIZE),
            Err(AddressError::InvalidLength { expected: CHECKED_ADDRESS_SIZE, actual: 26 })
        );
        assert!(matches!(long.parse::<Address>(), Err(AddressError::InvalidLength { .. })));
    }

    #[test]
    fn test_configured_network_validation() {
        init_tracing();
        let config = AddressConfig::from_toml_str("network = \"testnet\"").expect("valid config");
        let prefixes = config.effective_prefixes();

        let (address, kind) = parse_for_network("yLKSrCjLQFsfVgX8RjdctZ797d54atPjnV", &prefixes)
            .expect("testnet burn address");
        assert_eq!(kind, AddressKind::PubkeyHash);
        assert!(address.is_burn());

        assert_eq!(
            parse_for_network("B4T5ciTCkWauSqVAcVKy88ofjcSasUkSYU", &prefixes),
            Err(AddressError::UnexpectedVersion(25))
        );
    }

    #[test]
    fn test_burn_address_per_network() {
        for (network, expected) in [
            (NetworkType::MainNet, "B4T5ciTCkWauSqVAcVKy88ofjcSasUkSYU"),
            (NetworkType::TestNet, "yLKSrCjLQFsfVgX8RjdctZ797d54atPjnV"),
            (NetworkType::RegTest, "yLKSrCjLQFsfVgX8RjdctZ797d54atPjnV"),
        ] {
            let address = Address::burn(network.address_version());
            assert_eq!(address.to_string(), expected);
        }
    }

    #[test]
    fn test_serde_uses_base58_text() {
        let address = Address::burn(25);
        let json = serde_json::to_string(&address).expect("serialize");
        assert_eq!(json, "\"B4T5ciTCkWauSqVAcVKy88ofjcSasUkSYU\"");

        let back: Address = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, address);

        let err = serde_json::from_str::<Address>("\"B4T5ciTCkWauSqVAcVKy88ofjcSasUkSYV\"")
            .expect_err("bad checksum");
        assert!(err.to_string().contains("invalid checksum"));
    }
}
