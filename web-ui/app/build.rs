fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");

	// Empty means "same origin as the page".
	let api_base_url = std::env::var("API_BASE_URL").unwrap_or_default();
	let env = std::env::var("ENV").unwrap_or_else(|_| "Local".to_string());

	println!("cargo:rustc-env=API_BASE_URL={api_base_url}");
	println!("cargo:rustc-env=ENV={env}");

	println!("cargo:rerun-if-env-changed=API_BASE_URL");
	println!("cargo:rerun-if-env-changed=ENV");
}
