use rand::Rng;

/// 식당 코드에 사용하는 문자 (혼동되기 쉬운 0/O, 1/I/L 제외)
pub const RESTAURANT_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// 식당 코드 길이
pub const RESTAURANT_CODE_LENGTH: usize = 6;

/// 무작위 식당 코드 생성
pub fn generate_restaurant_code() -> String {
    generate_code_with(&mut rand::thread_rng(), RESTAURANT_CODE_LENGTH)
}

fn generate_code_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..RESTAURANT_CODE_ALPHABET.len());
            RESTAURANT_CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// 외부 입력 코드 정규화 (대소문자 무시, 앞뒤 공백 제거)
pub fn normalize_restaurant_code(raw: &str) -> Option<String> {
    let code = raw.trim().to_ascii_uppercase();
    let valid = code.len() == RESTAURANT_CODE_LENGTH
        && code.bytes().all(|b| RESTAURANT_CODE_ALPHABET.contains(&b));
    valid.then_some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn should_generate_code_with_fixed_length() {
        let code = generate_restaurant_code();

        assert_eq!(code.len(), RESTAURANT_CODE_LENGTH);
    }

    #[test]
    fn should_only_use_unambiguous_characters() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let code = generate_code_with(&mut rng, RESTAURANT_CODE_LENGTH);
            assert!(code.bytes().all(|b| RESTAURANT_CODE_ALPHABET.contains(&b)));
            assert!(!code.contains('0') && !code.contains('O') && !code.contains('I'));
        }
    }

    #[test]
    fn should_normalize_lowercase_code() {
        assert_eq!(
            normalize_restaurant_code(" ab3xyz "),
            Some("AB3XYZ".to_string())
        );
    }

    #[test]
    fn should_reject_code_with_wrong_length_or_characters() {
        assert_eq!(normalize_restaurant_code("AB3XY"), None);
        assert_eq!(normalize_restaurant_code("AB3XY0"), None);
        assert_eq!(normalize_restaurant_code(""), None);
    }
}
