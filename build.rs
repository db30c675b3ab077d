use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

fn write_str(out: &mut File, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "#[allow(unused)]\npub const APP_METADATA_{}: &str = \"{}\";", key.to_uppercase(), value)
}

fn write_bytes(out: &mut File, key: &str, value: &[u8]) -> io::Result<()> {
    let body = value.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ");
    writeln!(
        out,
        "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[{}];",
        key.to_uppercase(),
        value.len(),
        body
    )
}

// Derives a deterministic key of the requested length from the package name
// when no explicit key material is provided via the environment.
fn pad_to(mut seed: String, len: usize) -> Vec<u8> {
    seed.truncate(len);
    while seed.len() < len {
        seed.push('!');
    }
    seed.into_bytes()
}

fn main() -> io::Result<()> {
    // .env is optional; explicit key material takes precedence over defaults
    let _ = dotenv();

    let out_dir = env::var("OUT_DIR").unwrap();
    let mut out = File::create(Path::new(&out_dir).join("app_metadata.rs"))?;

    let pkg_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "prodo".to_string());
    write_str(&mut out, "NAME", &pkg_name)?;
    write_str(&mut out, "VERSION", &env::var("CARGO_PKG_VERSION").unwrap())?;

    // Expose [package.metadata] entries (owner, etc.) to the application
    let manifest = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let manifest: Value = toml::from_str(&manifest).expect("Failed to parse Cargo.toml");
    if let Some(meta) = manifest.get("package").and_then(|p| p.get("metadata")).and_then(|m| m.as_table()) {
        for (key, value) in meta {
            if let Some(value) = value.as_str() {
                write_str(&mut out, key, value)?;
            }
        }
    }

    let (key, iv) = match (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            if key.len() != KEY_LEN {
                panic!("ENCRYPTION_KEY must be exactly {} bytes long, got {}", KEY_LEN, key.len());
            }
            if iv.len() != IV_LEN {
                panic!("ENCRYPTION_IV must be exactly {} bytes long, got {}", IV_LEN, iv.len());
            }
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            println!("cargo:warning=ENCRYPTION_KEY or ENCRYPTION_IV not set; using defaults derived from the package name.");
            println!("cargo:warning=For production builds provide both in a .env file.");
            (
                pad_to(format!("{}_default_encryption_key_32b", pkg_name), KEY_LEN),
                pad_to(format!("{}_iv_16b", pkg_name), IV_LEN),
            )
        }
    };

    write_bytes(&mut out, "ENCRYPTION_KEY", &key)?;
    write_bytes(&mut out, "ENCRYPTION_IV", &iv)?;

    Ok(())
}
