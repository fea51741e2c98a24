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
#![deny(clippy::mod_module_files)]

//! Shadow password hashing through the `openssl passwd` CLI.
//!
//! Converts password strings into hashed values suitable for `/etc/shadow`
//! on most *NIX systems. Hashing is delegated to the `openssl` binary
//! rather than `crypt(3)`, so hashes for any of the supported schemes can
//! be produced even on hosts whose libc lacks them (e.g. producing sha-512
//! hashes on macOS for a remote Linux system).
//!
//! ```no_run
//! use pw_hash::{pw_hash, HashType};
//!
//! # fn main() -> Result<(), pw_hash::HashError> {
//! let hash = pw_hash("Secret123!", HashType::Sha512, "abcXYZ012")?;
//! assert!(hash.starts_with("$6$abcXYZ012$"));
//! # Ok(())
//! # }
//! ```

pub mod environment_probe;
pub mod hash_errors;
pub mod hash_type;
pub mod password_hasher;
pub mod process_runner;

pub use environment_probe::{EnvironmentProbe, HostEnvironment};
pub use hash_errors::HashError;
pub use hash_type::HashType;
pub use password_hasher::{pw_hash, PasswordHasher};
pub use process_runner::{HostProcessRunner, ProcessOutput, ProcessRunner};
