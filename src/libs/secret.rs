//! Encrypted at-rest storage for small secrets.
//!
//! Values (the backend bearer token, primarily) are AES-256-CBC encrypted
//! with compile-time key material embedded by `build.rs`, then base64
//! encoded and written to the application data directory. This keeps
//! credentials out of plain-text files without requiring a system keyring.

use aes::Aes256;
use anyhow::{anyhow, Result};
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use std::fs;
use std::path::PathBuf;

use super::data_storage::DataStorage;

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone)]
pub struct Secret {
    file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    /// Creates a store backed by `file_name` inside the app data directory.
    pub fn new(file_name: &str) -> Self {
        let file_path = DataStorage::new().get_path(file_name).unwrap_or_else(|_| PathBuf::from(file_name));

        Self {
            file_path,
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        }
    }

    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    /// Encrypts and persists `value`, replacing any previous content.
    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        fs::write(&self.file_path, encoded.as_bytes())?;
        Ok(())
    }

    /// Reads and decrypts the stored value.
    pub fn load(&self) -> Result<String> {
        let encoded = fs::read_to_string(&self.file_path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let plaintext = cipher.decrypt_vec(&ciphertext).map_err(|e| anyhow!("failed to decrypt secret: {}", e))?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Removes the stored value. Missing files are not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
