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
use crate::environment_probe::{locate_openssl, EnvironmentProbe, HostEnvironment};
use crate::hash_errors::HashError;
use crate::hash_type::HashType;
use crate::process_runner::{HostProcessRunner, ProcessRunner};
use tracing::debug;

/// Produces `/etc/shadow` style password hashes by delegating to the
/// `openssl passwd` tool.
///
/// Both the environment probe and the process runner are injectable; use
/// [`PasswordHasher::new`] for the real host implementations.
pub struct PasswordHasher<E, R> {
    environment: E,
    runner: R,
}

impl PasswordHasher<HostEnvironment, HostProcessRunner> {
    pub fn new() -> Self {
        PasswordHasher {
            environment: HostEnvironment,
            runner: HostProcessRunner,
        }
    }
}

impl Default for PasswordHasher<HostEnvironment, HostProcessRunner> {
    fn default() -> Self {
        PasswordHasher::new()
    }
}

impl<E, R> PasswordHasher<E, R>
where
    E: EnvironmentProbe,
    R: ProcessRunner,
{
    pub fn with_parts(environment: E, runner: R) -> Self {
        PasswordHasher {
            environment,
            runner,
        }
    }

    /// Hash `password` with the given scheme and salt.
    ///
    /// Returns the crypt-format line the tool prints, e.g.
    /// `$6$abcXYZ012$...` for [`HashType::Sha512`], with its trailing line
    /// terminator removed.
    pub fn hash(
        &self,
        password: &str,
        hash_type: HashType,
        salt: &str,
    ) -> Result<String, HashError> {
        if password.is_empty() {
            return Err(HashError::EmptyPassword);
        }
        validate_salt(salt)?;

        let openssl = locate_openssl(&self.environment)?;
        debug!("hashing {} with {}", hash_type, openssl.display());

        // The password travels over stdin only; placing it in the argument
        // vector would expose it in the process list.
        let output = self
            .runner
            .run(
                &openssl,
                &["passwd", hash_type.flag(), "-salt", salt, "-stdin"],
                password.as_bytes(),
            )
            .map_err(|source| HashError::Spawn {
                program: openssl.clone(),
                source,
            })?;

        if !output.success() {
            return Err(HashError::ToolFailed {
                program: openssl,
                code: output.code,
                stderr: output.stderr,
            });
        }

        let mut hash = String::from_utf8(output.stdout)?;
        // Exactly one trailing line terminator comes off; everything else
        // is the tool's output, verbatim.
        if hash.ends_with('\n') {
            hash.pop();
            if hash.ends_with('\r') {
                hash.pop();
            }
        }
        Ok(hash)
    }
}

fn validate_salt(salt: &str) -> Result<(), HashError> {
    let valid = !salt.is_empty()
        && salt
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '/');

    if valid {
        Ok(())
    } else {
        Err(HashError::InvalidSalt(salt.to_string()))
    }
}

/// Hash `password` with the host openssl tool.
pub fn pw_hash(password: &str, hash_type: HashType, salt: &str) -> Result<String, HashError> {
    PasswordHasher::new().hash(password, hash_type, salt)
}
