#![no_main]

//! Config and state loading fuzzer.
//!
//! Arbitrary bytes are fed to the JSON loaders. Anything that loads must
//! either be rejected by validation or produce a playable match.

use broadside::game::check_invariants;
use broadside::{Engine, GameConfig, GameState};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = serde_json::from_str::<GameConfig>(text) {
        if config.validate().is_ok() {
            let engine = Engine::with_seed(config, 0).unwrap();
            assert!(check_invariants(&engine.state()).is_empty());
        }
    }

    // Hand-written states may break invariants, but checking them must not panic.
    if let Ok(state) = serde_json::from_str::<GameState>(text) {
        let _ = check_invariants(&state);
    }
});
