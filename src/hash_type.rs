// Copyright 2023 Turing Machines
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Hashing schemes supported by `openssl passwd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    Md5,
    Sha256,
    Sha512,
}

impl HashType {
    /// The `openssl passwd` flag selecting this scheme.
    pub fn flag(&self) -> &'static str {
        match self {
            HashType::Md5 => "-1",
            HashType::Sha256 => "-5",
            HashType::Sha512 => "-6",
        }
    }
}

impl Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashType::Md5 => write!(f, "md5"),
            HashType::Sha256 => write!(f, "sha-256"),
            HashType::Sha512 => write!(f, "sha-512"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown hash type `{0}`, expected one of md5, sha-256, sha-512")]
pub struct UnknownHashType(String);

impl FromStr for HashType {
    type Err = UnknownHashType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(HashType::Md5),
            "sha-256" => Ok(HashType::Sha256),
            "sha-512" => Ok(HashType::Sha512),
            other => Err(UnknownHashType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_mapping() {
        assert_eq!(HashType::Md5.flag(), "-1");
        assert_eq!(HashType::Sha256.flag(), "-5");
        assert_eq!(HashType::Sha512.flag(), "-6");
    }

    #[test]
    fn parse_known_names() {
        assert_eq!("md5".parse(), Ok(HashType::Md5));
        assert_eq!("sha-256".parse(), Ok(HashType::Sha256));
        assert_eq!("sha-512".parse(), Ok(HashType::Sha512));
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert!(HashType::from_str("sha512").is_err());
        assert!(HashType::from_str("SHA-512").is_err());
        assert!(HashType::from_str("").is_err());
    }

    #[test]
    fn display_round_trips() {
        for hash_type in [HashType::Md5, HashType::Sha256, HashType::Sha512] {
            assert_eq!(hash_type.to_string().parse(), Ok(hash_type));
        }
    }
}
