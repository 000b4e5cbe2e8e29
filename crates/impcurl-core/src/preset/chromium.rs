//! Chrome and Edge presets. Every Chromium preset derives from `chrome99`
//! and only overrides the headers and flags that changed between releases.

use super::Preset;
use crate::params::{Flags, Headers};

const CHROME_CIPHERS: &str = "TLS_AES_128_GCM_SHA256,TLS_AES_256_GCM_SHA384,TLS_CHACHA20_POLY1305_SHA256,ECDHE-ECDSA-AES128-GCM-SHA256,ECDHE-RSA-AES128-GCM-SHA256,ECDHE-ECDSA-AES256-GCM-SHA384,ECDHE-RSA-AES256-GCM-SHA384,ECDHE-ECDSA-CHACHA20-POLY1305,ECDHE-RSA-CHACHA20-POLY1305,ECDHE-RSA-AES128-SHA,ECDHE-RSA-AES256-SHA,AES128-GCM-SHA256,AES256-GCM-SHA384,AES128-SHA,AES256-SHA";

const ACCEPT_V7: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";

const EDGE_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";

pub(super) fn chrome99() -> Preset {
    let headers = Headers::new()
        .with("sec-ch-ua", r#"" Not A;Brand";v="99", "Chromium";v="99", "Google Chrome";v="99""#)
        .with("sec-ch-ua-mobile", "?0")
        .with("sec-ch-ua-platform", r#""Windows""#)
        .with("Upgrade-Insecure-Requests", "1")
        .with("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.51 Safari/537.36")
        .with("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9")
        .with("Sec-Fetch-Site", "none")
        .with("Sec-Fetch-Mode", "navigate")
        .with("Sec-Fetch-User", "?1")
        .with("Sec-Fetch-Dest", "document")
        .with("Accept-Encoding", "gzip, deflate, br")
        .with("Accept-Language", "en-US,en;q=0.9");
    let flags = Flags::new()
        .with("ciphers", CHROME_CIPHERS)
        .with("http2", true)
        .with("compressed", true)
        .with("tlsv1.2", true)
        .with("alps", true)
        .with("cert-compression", "brotli");
    Preset::new(headers, flags)
}

/// `chrome99` with `overrides` applied on top of its headers.
fn chrome99_with(overrides: Headers) -> Preset {
    let mut preset = chrome99();
    preset.headers.extend(&overrides);
    preset
}

/// Flags shared by Chrome 110 and later.
fn modern_flags() -> Flags {
    Flags::new()
        .with("http2-no-server-push", true)
        .with("tls-permute-extensions", true)
}

pub(super) fn chrome99_android() -> Preset {
    chrome99_with(
        Headers::new()
            .with("sec-ch-ua-mobile", "?1")
            .with("sec-ch-ua-platform", r#""Android""#)
            .with("User-Agent", "Mozilla/5.0 (Linux; Android 12; Pixel 6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.58 Mobile Safari/537.36"),
    )
}

pub(super) fn chrome100() -> Preset {
    chrome99_with(
        Headers::new()
            .with("sec-ch-ua", r#"" Not A;Brand";v="99", "Chromium";v="100", "Google Chrome";v="100""#)
            .with("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/100.0.4896.75 Safari/537.36"),
    )
}

pub(super) fn chrome101() -> Preset {
    chrome99_with(
        Headers::new()
            .with("sec-ch-ua", r#"" Not A;Brand";v="99", "Chromium";v="101", "Google Chrome";v="101""#)
            .with("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.4951.67 Safari/537.36"),
    )
}

pub(super) fn chrome104() -> Preset {
    chrome99_with(
        Headers::new()
            .with("sec-ch-ua", r#""Chromium";v="104", " Not A;Brand";v="99", "Google Chrome";v="104""#)
            .with("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/104.0.0.0 Safari/537.36"),
    )
}

pub(super) fn chrome107() -> Preset {
    let mut preset = chrome99_with(
        Headers::new()
            .with("sec-ch-ua", r#""Google Chrome";v="107", "Chromium";v="107", "Not=A?Brand";v="24""#)
            .with("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36"),
    );
    preset.flags.set("http2-no-server-push", true);
    preset
}

pub(super) fn chrome110() -> Preset {
    let mut preset = chrome99_with(
        Headers::new()
            .with("sec-ch-ua", r#""Chromium";v="110", "Not A(Brand";v="24", "Google Chrome";v="110""#)
            .with("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36")
            .with("Accept", ACCEPT_V7),
    );
    preset.flags.extend(&modern_flags());
    preset
}

pub(super) fn chrome116() -> Preset {
    let mut preset = chrome99_with(
        Headers::new()
            .with("sec-ch-ua", r#""Chromium";v="116", "Not)A;Brand";v="24", "Google Chrome";v="116""#)
            .with("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36")
            .with("Accept", ACCEPT_V7),
    );
    preset.flags.extend(&modern_flags());
    preset
}

pub(super) fn edge99() -> Preset {
    chrome99_with(
        Headers::new()
            .with("sec-ch-ua", r#"" Not A;Brand";v="99", "Chromium";v="99", "Microsoft Edge";v="99""#)
            .with("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.51 Safari/537.36 Edg/99.0.1150.30")
            .with("Accept", EDGE_ACCEPT),
    )
}

pub(super) fn edge101() -> Preset {
    chrome99_with(
        Headers::new()
            .with("sec-ch-ua", r#"" Not A;Brand";v="99", "Chromium";v="101", "Microsoft Edge";v="101""#)
            .with("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.4951.64 Safari/537.36 Edg/101.0.1210.47")
            .with("Accept", EDGE_ACCEPT),
    )
}
