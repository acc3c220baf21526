// File: crates/heatmap-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for the PNG backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font manager lookups)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
