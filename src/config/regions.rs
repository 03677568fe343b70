//
//  clumio-sdk
//  config/regions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Clumio regions and base path handling.
//!
//! Each Clumio deployment region has its own API host:
//!
//! | Region | Base path |
//! |--------|-----------|
//! | `us-west-2` | `https://us-west-2.api.clumio.com` |
//! | `us-east-1` | `https://us-east-1.api.clumio.com` |
//! | `ca-central-1` | `https://ca-central-1.ca.api.clumio.com` |
//! | `eu-central-1` | `https://eu-central-1.de.api.clumio.com` |

use anyhow::{bail, Context, Result};
use url::Url;

/// Base path used when nothing is configured.
pub const DEFAULT_BASE_PATH: &str = "https://us-west-2.api.clumio.com";

/// A Clumio deployment region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub base_path: &'static str,
}

/// All known Clumio regions.
pub const REGIONS: &[Region] = &[
    Region {
        name: "us-west-2",
        base_path: "https://us-west-2.api.clumio.com",
    },
    Region {
        name: "us-east-1",
        base_path: "https://us-east-1.api.clumio.com",
    },
    Region {
        name: "ca-central-1",
        base_path: "https://ca-central-1.ca.api.clumio.com",
    },
    Region {
        name: "eu-central-1",
        base_path: "https://eu-central-1.de.api.clumio.com",
    },
];

/// Returns the base path for a region name.
pub fn region_base_path(name: &str) -> Option<&'static str> {
    let name = name.trim().to_lowercase();
    REGIONS
        .iter()
        .find(|region| region.name == name)
        .map(|region| region.base_path)
}

/// Returns the region whose API host matches `base_path`, if any.
pub fn region_for_base_path(base_path: &str) -> Option<&'static str> {
    let url = normalize_base_path(base_path).ok()?;
    let host = url.host_str()?;
    REGIONS
        .iter()
        .find(|region| region.base_path.trim_start_matches("https://") == host)
        .map(|region| region.name)
}

/// Turns user input into an absolute base path URL.
///
/// Accepts a region name (`us-east-1`), a bare host (`us-east-1.api.clumio.com`) or a full URL.
/// Bare hosts get `https://`. Query strings and fragments are rejected.
pub fn normalize_base_path(input: &str) -> Result<Url> {
    let input = input.trim();
    if input.is_empty() {
        bail!("Base path is empty");
    }

    if let Some(base_path) = region_base_path(input) {
        return Ok(Url::parse(base_path)?);
    }

    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let url = Url::parse(&candidate).with_context(|| format!("Invalid base path: {}", input))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("Base path must use http or https: {}", input);
    }
    if url.host_str().is_none() {
        bail!("Base path has no host: {}", input);
    }
    if url.query().is_some() || url.fragment().is_some() {
        bail!("Base path must not contain a query or fragment: {}", input);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lookup() {
        assert_eq!(
            region_base_path("EU-Central-1"),
            Some("https://eu-central-1.de.api.clumio.com")
        );
        assert_eq!(region_base_path("ap-south-1"), None);
        assert_eq!(
            region_for_base_path("ca-central-1.ca.api.clumio.com/"),
            Some("ca-central-1")
        );
        assert_eq!(region_for_base_path("http://127.0.0.1:8080"), None);
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(
            normalize_base_path("us-east-1").unwrap().as_str(),
            "https://us-east-1.api.clumio.com/"
        );
        assert_eq!(
            normalize_base_path(" us-west-2.api.clumio.com/ ").unwrap().as_str(),
            "https://us-west-2.api.clumio.com/"
        );
        assert_eq!(
            normalize_base_path("http://127.0.0.1:8080").unwrap().as_str(),
            "http://127.0.0.1:8080/"
        );
        assert!(normalize_base_path("").is_err());
        assert!(normalize_base_path("ftp://example.com").is_err());
        assert!(normalize_base_path("https://example.com/?a=1").is_err());
    }
}
