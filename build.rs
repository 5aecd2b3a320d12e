const RELAY_ENV: &[&str] = &[
    "PORTFOLIO_EMAILJS_SERVICE_ID",
    "PORTFOLIO_EMAILJS_CONTACT_TEMPLATE",
    "PORTFOLIO_EMAILJS_REPLY_TEMPLATE",
    "PORTFOLIO_EMAILJS_PUBLIC_KEY",
];

fn main() {
    // Footer copyright year comes from the build timestamp
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    // Relay keys are baked into the bundle
    for var in RELAY_ENV {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
