use bitmaprle::{compress, expand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTHS: [u8; 7] = [1, 2, 3, 5, 8, 13, 16];

fn roundtrip(width: u8, input: &[u8]) {
    let mut compressed = vec![];
    compress(width, input, &mut compressed).unwrap();
    let mut output = vec![];
    expand(width, &compressed[..], &mut output).unwrap();
    assert_eq!(
        input, output,
        "roundtrip failed for width {width}, {} input bytes",
        input.len()
    );
}

#[test]
fn fixed_inputs_roundtrip() {
    for &width in &WIDTHS {
        roundtrip(width, &[]);
        roundtrip(width, &[0x00]);
        roundtrip(width, &[0xFF]);
        roundtrip(width, &[0xAA, 0x55]);
        roundtrip(width, &[0u8; 200]);
        roundtrip(width, &[0xFFu8; 200]);
        roundtrip(width, b"\x00\x00\xFF\xFF\x00\x0F\xF0");
    }
}

#[test]
fn random_inputs_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x5EDC0DEC);
    for &width in &WIDTHS {
        for _ in 0..20 {
            let len = rng.gen_range(0..300);
            let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            roundtrip(width, &input);
        }
    }
}

#[test]
fn clustered_inputs_roundtrip() {
    // run-structured data, the shape the codec is actually for
    let mut rng = StdRng::seed_from_u64(0xB17);
    for &width in &WIDTHS {
        for _ in 0..10 {
            let mut bits = vec![];
            let mut value = false;
            while bits.len() < 4000 {
                let run = rng.gen_range(1..600);
                bits.extend(std::iter::repeat(value).take(run));
                value = !value;
            }
            bits.truncate(4000); // 500 bytes exactly
            let input: Vec<u8> = bits
                .chunks(8)
                .map(|c| c.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
                .collect();
            roundtrip(width, &input);
        }
    }
}

#[test]
fn compression_wins_on_sparse_data() {
    // 500 zero bytes: 4000-bit run -> a handful of 8-bit fields
    let input = [0u8; 500];
    let mut compressed = vec![];
    compress(8, &input[..], &mut compressed).unwrap();
    assert!(compressed.len() < input.len() / 10);
}
