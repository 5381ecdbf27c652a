use hmac::{Hmac, Mac};
use rand::RngExt;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs session strings so clients cannot edit the board they hand back.
#[derive(Clone)]
pub struct Signer {
    mac: HmacSha256,
}

impl Signer {
    pub fn new(key: &[u8]) -> Self {
        Signer {
            mac: HmacSha256::new_from_slice(key).expect("HMAC can take key of any size"),
        }
    }

    /// Per-process key, used when no secret is configured.
    pub fn random() -> Self {
        Self::new(generate_key().as_bytes())
    }

    /// Hex HMAC-SHA256 of `session`.
    pub fn sign(&self, session: &str) -> String {
        hex::encode(self.mac(session).finalize().into_bytes())
    }

    pub fn verify(&self, session: &str, signature: &str) -> bool {
        let Ok(given) = hex::decode(signature) else {
            return false;
        };
        self.mac(session).verify_slice(&given).is_ok()
    }

    fn mac(&self, session: &str) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(session.as_bytes());
        mac
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Signer(..)")
    }
}

fn generate_key() -> String {
    let mut rng = rand::rng();
    (0..32)
        .map(|_| {
            let idx = rng.random_range(0..62);
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"[idx] as char
        })
        .collect()
}
