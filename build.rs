fn main() {
    // Stamped into the CLI version string
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=MOBOTRAY_BUILD_DATE={}", build_date);
}
