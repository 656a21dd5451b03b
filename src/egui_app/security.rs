//! Credential encryption
//!
//! The login endpoint expects `username:password` encrypted with the
//! service's RSA public key (PKCS#1 v1.5 padding) and base64 encoded.
//! When the key cannot be used the caller falls back to
//! [`mock_encrypt_credentials`], a plain base64 blob the simulated responder
//! understands.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rsa::pkcs8::DecodePublicKey;
use rsa::rand_core::OsRng;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};

use crate::shared::error::EncryptionError;

/// Service public key (SPKI, 2048 bit)
const PUBLIC_KEY_PEM: &str = "-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAuIGVY6DVBZ/X4rWIOC5B
kwXupvlRDZibogBmdkoER0Z3WX8PtyWcpf09fcvjaBw6Xwcw73E6uQMWMbSYR/Q8
/6lk7TjQ7bDBnJ5M2ZI3cXhVEth2sGPfdrTWwiDjmyTOCtUUrs7DkC1vwV/uWQNo
/Ed2wTdY6VKk8Dnkg4yZwqfzwFzJ82dh8zh0l08UHP+35B5SqDkbi4x/xCf7Qgp4
g7omgBLfxqsTAllWAs2Ra+1jn3xzr4gOdbNZpXuoCRfrcrE/EcXbTxaPqArXSzff
VZqjR5ulv5o5dRPT4vu7f2RKAhheXfWjQ3fzmlrckBfQf2EC3aBUu4mZmnzMIYJt
MQIDAQAB
-----END PUBLIC KEY-----
";

/// RSA encryptor bound to one public key
#[derive(Debug, Clone)]
pub struct RsaEncryption {
    public_key: RsaPublicKey,
}

impl RsaEncryption {
    /// Encryptor for the built-in service key
    pub fn service_key() -> Result<Self, EncryptionError> {
        Self::from_pem(PUBLIC_KEY_PEM)
    }

    /// Parse an SPKI `-----BEGIN PUBLIC KEY-----` block
    pub fn from_pem(pem: &str) -> Result<Self, EncryptionError> {
        let public_key =
            RsaPublicKey::from_public_key_pem(pem.trim()).map_err(|e| EncryptionError::InvalidKey(e.to_string()))?;
        Ok(Self { public_key })
    }

    pub fn from_key(public_key: RsaPublicKey) -> Self {
        Self { public_key }
    }

    /// Encrypt `username:password` and return it base64 encoded
    pub fn encrypt_credentials(&self, username: &str, password: &str) -> Result<String, EncryptionError> {
        let credentials = format!("{}:{}", username, password);
        let encrypted = self
            .public_key
            .encrypt(&mut OsRng, Pkcs1v15Encrypt, credentials.as_bytes())?;
        let encoded = STANDARD.encode(encrypted);
        tracing::debug!("[AUTH] Credentials encrypted, base64 length {}", encoded.len());
        Ok(encoded)
    }
}

/// Encrypt with the service key, falling back to the mock blob if that fails
pub fn encrypt_or_mock(encryption: Option<&RsaEncryption>, username: &str, password: &str) -> String {
    match encryption.map(|rsa| rsa.encrypt_credentials(username, password)) {
        Some(Ok(blob)) => blob,
        Some(Err(e)) => {
            tracing::warn!("[AUTH] RSA encryption failed, using mock credentials: {}", e);
            mock_encrypt_credentials(username, password)
        }
        None => mock_encrypt_credentials(username, password),
    }
}

/// Plain base64 of `username:password`
pub fn mock_encrypt_credentials(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, password))
}
