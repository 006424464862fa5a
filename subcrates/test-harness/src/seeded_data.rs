use rand::{
    distributions::{Alphanumeric, Standard},
    prelude::{Rng, SeedableRng},
};
use rand_chacha::ChaCha20Rng;


/// Generates `size_in_bytes` bytes of random (seeded) data.
///
/// ```rust
/// # use fs_assertions_test_harness::seeded_binary_data;
/// let data: Vec<u8> = seeded_binary_data(1024 * 16, 37510903939111);
/// assert_eq!(data.len(), 1024 * 16);
/// ```
pub fn seeded_binary_data(size_in_bytes: usize, seed: u64) -> Vec<u8> {
    let random_generator = ChaCha20Rng::seed_from_u64(seed);

    let mut data: Vec<u8> = Vec::with_capacity(size_in_bytes);
    data.extend(
        random_generator
            .sample_iter::<u8, _>(Standard)
            .take(size_in_bytes),
    );

    data
}


/// Generates `line_count` lines of random (seeded) text.
///
/// Lines consist of ASCII letters, digits and spaces, never contain line separators,
/// and may be empty or start with whitespace.
pub fn generate_seeded_text_lines(line_count: usize, seed: u64) -> Vec<String> {
    let mut random_generator = ChaCha20Rng::seed_from_u64(seed);

    (0..line_count)
        .map(|_| {
            let indent = random_generator.gen_range(0..4usize);
            let length = random_generator.gen_range(0..40usize);

            let words: String = (&mut random_generator)
                .sample_iter(Alphanumeric)
                .take(length)
                .map(|byte| {
                    if byte % 7 == 0 {
                        ' '
                    } else {
                        char::from(byte)
                    }
                })
                .collect();

            format!("{}{}", " ".repeat(indent), words)
        })
        .collect()
}
