use rand::Rng;
use rand::seq::SliceRandom;

/// Return a random permutation of `word`'s characters.
///
/// Reshuffles until the result differs from the input. Words of two or fewer
/// characters, and words made of a single repeated character, take the first
/// shuffle since no different arrangement may exist.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let single_arrangement = chars.windows(2).all(|pair| pair[0] == pair[1]);

    loop {
        chars.shuffle(rng);
        let scrambled: String = chars.iter().collect();
        if scrambled != word || chars.len() <= 2 || single_arrangement {
            return scrambled;
        }
    }
}
