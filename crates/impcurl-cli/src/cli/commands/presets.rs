//! `impcurl presets` – list preset names.

use impcurl_core::PresetName;

pub fn run_presets() {
    for name in PresetName::ALL {
        let preset = name.build();
        println!(
            "{:<18} {}",
            name,
            preset.headers.get("User-Agent").unwrap_or("-")
        );
    }
    println!("{:<18} one of the above, chosen per run", "random");
}
