use rand::Rng;

use crate::generators::strength::analyze_password_strength;
use crate::models::{CharacterCategory, GeneratedPassword, GenerationRequest};

#[derive(Debug, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate and score a password using the thread-local CSPRNG.
    pub fn generate_password(&self, request: &GenerationRequest) -> GeneratedPassword {
        self.generate_password_with_rng(request, &mut rand::thread_rng())
    }

    pub fn generate_password_with_rng<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> GeneratedPassword {
        let used_fallback = request.categories.is_empty();
        if used_fallback {
            log::warn!("No character type selected, falling back to uppercase");
        }

        let password = build_password(request, rng);
        let strength = analyze_password_strength(&password);
        log::debug!(
            "Generated {}-character password, strength {} ({})",
            password.chars().count(),
            strength.score,
            strength.label
        );

        GeneratedPassword {
            password,
            strength,
            used_fallback,
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a password with one guaranteed character per category.
///
/// The result is `max(length, categories)` characters long. An empty
/// category set is treated as uppercase only.
pub fn build_password<R: Rng + ?Sized>(request: &GenerationRequest, rng: &mut R) -> String {
    let categories: Vec<CharacterCategory> = if request.categories.is_empty() {
        vec![CharacterCategory::Uppercase]
    } else {
        request.categories.iter().copied().collect()
    };

    let mut available: Vec<char> = Vec::new();
    let mut password: Vec<char> = Vec::with_capacity(request.length.max(categories.len()));

    for category in &categories {
        let alphabet: Vec<char> = category.alphabet().chars().collect();
        password.push(random_char(&alphabet, rng));
        available.extend(alphabet);
    }

    while password.len() < request.length {
        password.push(random_char(&available, rng));
    }

    shuffle(&mut password, rng);
    password.into_iter().collect()
}

fn random_char<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())]
}

/// Fisher-Yates, walking down from the last index.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
