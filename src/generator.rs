//! Random password generator for the "generate" button.

use rand::seq::SliceRandom;
use rand::Rng;

/// Length of every generated password.
pub const GENERATED_LENGTH: usize = 14;

/// Alphabet the generator draws from: letters, digits and ten symbols,
/// 72 in total. Narrower than the character-class check's symbol table
/// (`_` and `+` are never generated); both stay explicit on purpose.
const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Generates a 14-character password, uniform with replacement over the
/// fixed alphabet.
///
/// Convenience for the UI, not a cryptographic source; the caller is
/// expected to re-evaluate the new value.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Same as [`generate`] but with a caller-supplied RNG.
pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    (0..GENERATED_LENGTH)
        .map(|_| {
            let byte = ALPHABET.choose(rng).copied().unwrap_or(b'a');
            byte as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_length() {
        assert_eq!(generate().chars().count(), GENERATED_LENGTH);
    }

    #[test]
    fn test_generate_alphabet_size() {
        assert_eq!(ALPHABET.len(), 72);
    }

    #[test]
    fn test_generate_stays_in_alphabet() {
        for _ in 0..1000 {
            let pwd = generate();
            assert_eq!(pwd.len(), GENERATED_LENGTH);
            for c in pwd.bytes() {
                assert!(
                    ALPHABET.contains(&c),
                    "generated char {:?} outside alphabet",
                    c as char
                );
            }
        }
    }

    #[test]
    fn test_generate_with_seeded_rng_is_deterministic() {
        let a = generate_with(&mut StdRng::seed_from_u64(7));
        let b = generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_varies_between_calls() {
        // 72^14 outcomes; a collision here means a broken RNG hookup
        assert_ne!(generate(), generate());
    }
}
