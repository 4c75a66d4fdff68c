#![no_main]

use level_align::{AlignOptions, AppState, Building};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // Gültige Gebäude müssen sich mit Standard-Ursprüngen starten lassen
    if let Ok(building) = Building::from_json(content) {
        let state = AppState::new(building, AlignOptions::default());
        assert_eq!(state.store.origin_count(), state.building.level_count());
    }
});
