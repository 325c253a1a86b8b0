use des_key_schedule::crypto::des_key_expansion::DesKeyExpansion;
use des_key_schedule::crypto::key_expansion::KeyExpansion;

fn main() {
    let key = *b"abcdefgh";
    let round_keys = DesKeyExpansion.generate_round_keys(&key);

    for (round, round_key) in round_keys.iter().enumerate() {
        print!("SubKey {:2}: ", round);
        for byte in round_key {
            print!("{:02x} ", byte);
        }
        println!();
    }
}
