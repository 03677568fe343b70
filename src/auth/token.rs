//
//  clumio-sdk
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Token input and validation helpers for `clumio auth login`.

use anyhow::{bail, Result};

/// Reads a single token line from standard input.
///
/// Used by `clumio auth login --with-token`, e.g. `clumio auth login --with-token < token.txt`.
pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Checks that a token is plausible before it is stored.
///
/// Clumio tokens are opaque to the client, so this only rejects values that cannot be sent as
/// a bearer credential: empty strings, whitespace, control characters and non-ASCII text.
pub fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        bail!("Token is empty");
    }
    if token.chars().any(char::is_whitespace) {
        bail!("Token must not contain whitespace");
    }
    if !token.chars().all(|c| c.is_ascii_graphic()) {
        bail!("Token must contain only printable ASCII characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_token() {
        assert!(validate_token("eyJhbGciOiJSUzI1NiJ9.e30.sig").is_ok());
        assert!(validate_token("").is_err());
        assert!(validate_token("abc def").is_err());
        assert!(validate_token("abc\u{7}").is_err());
        assert!(validate_token("tökén").is_err());
    }
}
