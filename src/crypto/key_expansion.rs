pub const ROUNDS: usize = 16;
pub const KEY_SIZE: usize = 8;
pub const ROUND_KEY_SIZE: usize = 6;

/// 64-bit master key, parity bits included but never checked.
pub type DesKey = [u8; KEY_SIZE];
/// 48-bit round key packed into 6 bytes.
pub type RoundKey = [u8; ROUND_KEY_SIZE];
/// The 16 round keys, index 0 feeding encryption round 1.
pub type RoundKeys = [RoundKey; ROUNDS];

pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &DesKey) -> RoundKeys;
}
