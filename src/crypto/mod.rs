pub mod des_key_expansion;
pub mod des_tables;
pub mod key_expansion;
pub mod utils;

use std::sync::Arc;

use crate::crypto::key_expansion::{DesKey, KeyExpansion, RoundKeys};

impl KeyExpansion for Arc<dyn KeyExpansion> {
    fn generate_round_keys(&self, key: &DesKey) -> RoundKeys {
        (**self).generate_round_keys(key)
    }
}
