use rand::Rng;

/// Fixed ordered pool of substitute glyphs for operator encoding.
///
/// None of these collide with the canonical operator symbols (`+`, `-`,
/// `x`) or with digits, so an encoded expression never reads as a plain
/// one by accident.
pub const GLYPH_POOL: [char; 27] = [
    '@', '#', '$', '%', '&', '*', '!', '?', '~',
    '^', ';', ':', '§', '±', '¿', '¡', 'Δ', 'Σ',
    'Φ', 'Ψ', 'Ω', 'π', 'λ', 'µ', '€', '£', '¥',
];

/// The glyph pool, shuffled once and dealt from without replacement.
pub struct GlyphPool {
    glyphs: Vec<char>,
    cursor: usize,
}

impl GlyphPool {
    /// Build the full pool and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut glyphs: Vec<char> = GLYPH_POOL.to_vec();

        // Fisher-Yates shuffle
        for i in (1..glyphs.len()).rev() {
            let j = rng.gen_range(0..=i);
            glyphs.swap(i, j);
        }

        GlyphPool { glyphs, cursor: 0 }
    }

    /// Deal one glyph; panics if the pool is exhausted.
    pub fn deal(&mut self) -> char {
        assert!(self.cursor < self.glyphs.len(), "Glyph pool exhausted");
        let glyph = self.glyphs[self.cursor];
        self.cursor += 1;
        glyph
    }

    /// Remaining glyphs available.
    pub fn remaining(&self) -> usize {
        self.glyphs.len() - self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pool_has_27_unique_glyphs() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = GlyphPool::new_shuffled(&mut rng);
        let all: Vec<char> = (0..27).map(|_| pool.deal()).collect();

        // All unique
        let mut seen = std::collections::HashSet::new();
        for g in &all {
            assert!(seen.insert(*g), "Duplicate glyph: {}", g);
        }
        assert_eq!(all.len(), 27);
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn pool_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<char> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool = GlyphPool::new_shuffled(&mut rng);
            (0..5).map(|_| pool.deal()).collect()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn pool_never_deals_a_canonical_operator_symbol() {
        for g in GLYPH_POOL {
            assert!(
                !matches!(g, '+' | '-' | 'x'),
                "Pool glyph '{}' collides with a canonical operator symbol",
                g
            );
            assert!(!g.is_ascii_digit(), "Pool glyph '{}' is a digit", g);
        }
    }
}
