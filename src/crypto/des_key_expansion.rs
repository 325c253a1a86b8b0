use crate::crypto::des_tables::{PC1, PC2};
use crate::crypto::key_expansion::{DesKey, KeyExpansion, ROUND_KEY_SIZE, ROUNDS, RoundKeys};
use crate::crypto::utils::{get_bit, permute_bits, rotate_left_28, set_bit};

const SHIFT_BITS: [u32; ROUNDS] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &DesKey) -> RoundKeys {
        // 1. PC-1: 64-bit key -> 56 bits in 7 bytes, parity dropped
        let mut permuted = [0u8; 7];
        permute_bits(key, &PC1, &mut permuted);

        // 2. Split into C and D, 28 bits each
        let mut c: u32 = 0;
        let mut d: u32 = 0;
        for i in 0..28 {
            c = (c << 1) | get_bit(&permuted, i) as u32;
            d = (d << 1) | get_bit(&permuted, i + 28) as u32;
        }

        // 3. Per round: rotate both halves, recombine, compress with PC-2
        let mut round_keys: RoundKeys = [[0; ROUND_KEY_SIZE]; ROUNDS];
        for (round_key, &shift) in round_keys.iter_mut().zip(&SHIFT_BITS) {
            c = rotate_left_28(c, shift);
            d = rotate_left_28(d, shift);

            let mut combined = [0u8; 7];
            for i in 0..28 {
                set_bit(&mut combined, i, (c >> (27 - i)) & 1 == 1);
                set_bit(&mut combined, i + 28, (d >> (27 - i)) & 1 == 1);
            }

            permute_bits(&combined, &PC2, round_key);
        }

        round_keys
    }
}
