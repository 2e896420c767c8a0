// src/generators/password.rs
use chrono::Utc;
use rand::{seq::SliceRandom, Rng};
use rand_core::OsRng;

use crate::complexity;
use crate::models::{GeneratedPassword, GenerationOptions};
use crate::rules::{self, ValidationError, LOWER, MAX_BATCH_SIZE, SPECIAL, UPPER};

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generates a batch of passwords satisfying the requested character
    /// classes at the exact requested length.
    ///
    /// Every enabled class is guaranteed at least one character: a random
    /// permutation of the output positions is drawn, one permuted position is
    /// consumed per enabled class for a character from that class, and the
    /// remaining positions are filled uniformly from the combined alphabet.
    ///
    /// The complexity label is computed once per batch, from the first
    /// generated password, and shared by every entry.
    pub fn generate(
        &self,
        options: &GenerationOptions,
    ) -> Result<Vec<GeneratedPassword>, ValidationError> {
        rules::check_length(options.length)?;

        if !options.lower_case && !options.upper_case && !options.special_case {
            return Err(ValidationError::NoCharacterClassSelected);
        }

        if options.amount > MAX_BATCH_SIZE {
            return Err(ValidationError::BatchTooLarge(options.amount));
        }

        let mut alphabet = Vec::new();
        if options.lower_case {
            alphabet.extend_from_slice(LOWER);
        }
        if options.upper_case {
            alphabet.extend_from_slice(UPPER);
        }
        if options.special_case {
            alphabet.extend_from_slice(SPECIAL);
        }

        let mut out = Vec::with_capacity(options.amount);
        let mut batch_complexity = None;

        for _ in 0..options.amount {
            // Fresh OS randomness per password, never a seeded stream.
            let mut rng = OsRng;

            let mut indexes: Vec<usize> = (0..options.length).collect();
            indexes.shuffle(&mut rng);

            let mut password = vec![0u8; options.length];
            let mut next = 0;

            // One guaranteed character per enabled class. MIN_PASSWORD_LEN
            // covers the at-most-three positions consumed here.
            if options.lower_case {
                password[indexes[next]] = LOWER[rng.gen_range(0..LOWER.len())];
                next += 1;
            }
            if options.upper_case {
                password[indexes[next]] = UPPER[rng.gen_range(0..UPPER.len())];
                next += 1;
            }
            if options.special_case {
                password[indexes[next]] = SPECIAL[rng.gen_range(0..SPECIAL.len())];
                next += 1;
            }

            for j in next..options.length {
                password[indexes[j]] = alphabet[rng.gen_range(0..alphabet.len())];
            }

            let password: String = password.into_iter().map(char::from).collect();

            let complexity = match batch_complexity {
                Some(tier) => tier,
                None => {
                    let tier = complexity::classify(&password)?;
                    batch_complexity = Some(tier);
                    tier
                }
            };

            out.push(GeneratedPassword {
                password,
                complexity,
                generated_at: Utc::now(),
            });
        }

        Ok(out)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::Complexity;
    use crate::rules::{MAX_PASSWORD_LEN, MIN_PASSWORD_LEN};

    fn options(
        length: usize,
        lower_case: bool,
        upper_case: bool,
        special_case: bool,
        amount: usize,
    ) -> GenerationOptions {
        GenerationOptions {
            length,
            lower_case,
            upper_case,
            special_case,
            amount,
        }
    }

    #[test]
    fn preconditions_fail_in_contract_order() {
        let generator = PasswordGenerator::new();

        // Length is checked before the class flags.
        assert!(matches!(
            generator.generate(&options(MIN_PASSWORD_LEN - 1, false, false, false, 1)),
            Err(ValidationError::InvalidLength(_))
        ));
        assert!(matches!(
            generator.generate(&options(MAX_PASSWORD_LEN + 1, true, false, false, 1)),
            Err(ValidationError::InvalidLength(_))
        ));
        assert!(matches!(
            generator.generate(&options(16, false, false, false, 1)),
            Err(ValidationError::NoCharacterClassSelected)
        ));
        assert!(matches!(
            generator.generate(&options(16, true, false, false, MAX_BATCH_SIZE + 1)),
            Err(ValidationError::BatchTooLarge(_))
        ));
    }

    #[test]
    fn boundary_lengths_succeed() {
        let generator = PasswordGenerator::new();
        for length in [MIN_PASSWORD_LEN, MAX_PASSWORD_LEN] {
            let batch = generator
                .generate(&options(length, true, true, true, 1))
                .unwrap();
            assert_eq!(batch[0].password.chars().count(), length);
        }
    }

    #[test]
    fn every_requested_class_appears() {
        let generator = PasswordGenerator::new();
        for length in [3, 4, 17, 32] {
            let batch = generator
                .generate(&options(length, true, true, true, 1))
                .unwrap();
            let password = &batch[0].password;

            assert_eq!(password.chars().count(), length);
            assert!(password.bytes().any(|b| LOWER.contains(&b)));
            assert!(password.bytes().any(|b| UPPER.contains(&b)));
            assert!(password.bytes().any(|b| SPECIAL.contains(&b)));
        }
    }

    #[test]
    fn disabled_classes_never_appear() {
        let generator = PasswordGenerator::new();
        let batch = generator
            .generate(&options(32, true, false, false, 5))
            .unwrap();
        for entry in &batch {
            assert!(entry.password.bytes().all(|b| LOWER.contains(&b)));
        }
    }

    #[test]
    fn batch_has_requested_amount_and_one_shared_label() {
        let generator = PasswordGenerator::new();
        let batch = generator
            .generate(&options(17, true, true, true, 20))
            .unwrap();

        assert_eq!(batch.len(), 20);
        let label = batch[0].complexity;
        assert!(batch.iter().all(|entry| entry.complexity == label));
    }

    #[test]
    fn seventeen_chars_with_all_classes_is_ultra() {
        let generator = PasswordGenerator::new();
        let batch = generator
            .generate(&options(17, true, true, true, 3))
            .unwrap();
        for entry in &batch {
            assert_eq!(entry.complexity, Complexity::Ultra);
        }
    }

    #[test]
    fn five_lowercase_chars_is_low() {
        let generator = PasswordGenerator::new();
        let batch = generator
            .generate(&options(5, true, false, false, 1))
            .unwrap();
        assert_eq!(batch[0].complexity, Complexity::Low);
    }
}
