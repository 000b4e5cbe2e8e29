//! Safari presets.

use super::Preset;
use crate::params::{Flags, Headers};

const SAFARI_CIPHERS: &str = "TLS_AES_128_GCM_SHA256:TLS_AES_256_GCM_SHA384:TLS_CHACHA20_POLY1305_SHA256:TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384:TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256:TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256:TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384:TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256:TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256:TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384:TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256:TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA:TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA:TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384:TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256:TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA:TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA:TLS_RSA_WITH_AES_256_GCM_SHA384:TLS_RSA_WITH_AES_128_GCM_SHA256:TLS_RSA_WITH_AES_256_CBC_SHA256:TLS_RSA_WITH_AES_128_CBC_SHA256:TLS_RSA_WITH_AES_256_CBC_SHA:TLS_RSA_WITH_AES_128_CBC_SHA:TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA:TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA:TLS_RSA_WITH_3DES_EDE_CBC_SHA";

const SAFARI_SIGNATURE_HASHES: &str = "ecdsa_secp256r1_sha256,rsa_pss_rsae_sha256,rsa_pkcs1_sha256,ecdsa_secp384r1_sha384,ecdsa_sha1,rsa_pss_rsae_sha384,rsa_pss_rsae_sha384,rsa_pkcs1_sha384,rsa_pss_rsae_sha512,rsa_pkcs1_sha512,rsa_pkcs1_sha1";

const SAFARI_153_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.3 Safari/605.1.15";

pub(super) fn safari153() -> Preset {
    // Accept mirrors the User-Agent string; kept as captured.
    let headers = Headers::new()
        .with("User-Agent", SAFARI_153_UA)
        .with("Accept", SAFARI_153_UA)
        .with("Accept-Language", "en-us")
        .with("Accept-Encoding", "gzip, deflate, br");
    let flags = Flags::new()
        .with("ciphers", SAFARI_CIPHERS)
        .with("curves", "X25519:P-256:P-384:P-521")
        .with("signature-hashes", SAFARI_SIGNATURE_HASHES)
        .with("http2", true)
        .with("compressed", true)
        .with("tlsv1.0", true)
        .with("no-tls-session-ticket", true)
        .with("http2-pseudo-headers-order", "mspa");
    Preset::new(headers, flags)
}

pub(super) fn safari155() -> Preset {
    let mut preset = safari153();
    preset.headers.extend(
        &Headers::new()
            .with("User-Agent", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.5 Safari/605.1.15")
            .with("Accept", SAFARI_153_UA)
            .with("Accept-Language", "en-GB,en-US;q=0.9,en;q=0.8")
            .with("Accept-Encoding", "gzip, deflate, br"),
    );
    preset.flags.set("cert-compression", "zlib");
    preset
}
