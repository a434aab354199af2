use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Variables de .env -> option_env!() en config.rs
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // El entorno real tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in [
        "BACKEND_URL",
        "ENVIRONMENT",
        "ENABLE_LOGGING",
        "NETWORK_TIMEOUT_MS",
        "LOGOUT_DELAY_MS",
        "TOAST_DURATION_MS",
        "AUTH_TOKEN_KEY",
        "LOGIN_URL",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
