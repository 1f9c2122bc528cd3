use rand::Rng;

const UUID_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Random version-4 UUID in canonical lowercase form.
pub fn generate_uuid_v4() -> String {
    generate_uuid_v4_with_rng(&mut rand::thread_rng())
}

pub fn generate_uuid_v4_with_rng<R: Rng + ?Sized>(rng: &mut R) -> String {
    UUID_TEMPLATE
        .chars()
        .map(|c| match c {
            'x' => hex_digit(rng.gen_range(0..16)),
            // RFC 4122 variant: 10xx
            'y' => hex_digit((rng.gen_range(0..16) & 0x3) | 0x8),
            other => other,
        })
        .collect()
}

fn hex_digit(nibble: u32) -> char {
    // nibble is always < 16
    char::from_digit(nibble, 16).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn layout_version_and_variant() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let id = generate_uuid_v4_with_rng(&mut rng);
            let bytes = id.as_bytes();

            assert_eq!(id.len(), 36);
            for hyphen in [8, 13, 18, 23] {
                assert_eq!(bytes[hyphen], b'-');
            }
            assert_eq!(bytes[14], b'4');
            assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b'), "variant in {}", id);
            assert!(id.chars().all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn parses_as_rfc4122_v4() {
        let id = generate_uuid_v4();
        let parsed = ::uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), ::uuid::Variant::RFC4122);
        assert_eq!(parsed.hyphenated().to_string(), id);
    }

    #[test]
    fn all_variant_digits_appear() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(generate_uuid_v4_with_rng(&mut rng).as_bytes()[19]);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(generate_uuid_v4(), generate_uuid_v4());
    }
}
