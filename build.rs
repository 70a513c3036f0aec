/// Expose the compilation target triple as an environment variable at build time.
///
/// `calckit version` reports it through `constants::TARGET`.
fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        std::env::var("TARGET").unwrap()
    );
}
