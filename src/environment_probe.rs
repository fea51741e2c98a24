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
use crate::hash_errors::HashError;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ambient host state consulted while locating the hashing tool. Factored
/// out so tests can substitute deterministic fixtures for the real
/// installation layout and `PATH`.
pub trait EnvironmentProbe {
    /// Directory holding binaries shipped alongside this program, if it can
    /// be determined.
    fn install_bin_dir(&self) -> Option<PathBuf>;

    /// The `PATH` variable of the current process.
    fn search_path(&self) -> Option<OsString>;
}

/// Probe backed by the real process environment.
pub struct HostEnvironment;

impl EnvironmentProbe for HostEnvironment {
    fn install_bin_dir(&self) -> Option<PathBuf> {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
    }

    fn search_path(&self) -> Option<OsString> {
        env::var_os("PATH")
    }
}

fn openssl_binary() -> String {
    format!("openssl{}", env::consts::EXE_SUFFIX)
}

/// Resolve a path to the `openssl` executable.
///
/// A copy shipped in the install directory wins over whatever happens to be
/// on `PATH`, so behavior stays stable on hosts where the system openssl is
/// absent or too old to know the requested scheme. The result is not
/// cached; each call probes the filesystem again.
pub fn locate_openssl(probe: &impl EnvironmentProbe) -> Result<PathBuf, HashError> {
    let binary = openssl_binary();
    let bin_dir = probe.install_bin_dir();

    if let Some(dir) = &bin_dir {
        let bundled = dir.join(&binary);
        if is_executable(&bundled) {
            debug!("using bundled {}", bundled.display());
            return Ok(bundled);
        }
    }

    if let Some(path) = probe.search_path() {
        for dir in env::split_paths(&path) {
            if dir.as_os_str().is_empty() {
                continue;
            }
            let candidate = dir.join(&binary);
            if is_executable(&candidate) {
                debug!("using {} from PATH", candidate.display());
                return Ok(candidate);
            }
        }
    }

    Err(HashError::ExecutableNotFound {
        binary,
        searched: bin_dir.map_or_else(
            || "the install directory".to_string(),
            |dir| dir.display().to_string(),
        ),
    })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use nix::unistd::{access, AccessFlags};
    path.is_file() && access(path, AccessFlags::X_OK).is_ok()
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
