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
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of a finished subprocess.
#[derive(Debug)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    pub stderr: String,
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a program with all three stdio streams captured. Factored out so
/// the hashing logic is testable without spawning real binaries.
pub trait ProcessRunner {
    fn run(&self, program: &Path, args: &[&str], stdin: &[u8]) -> io::Result<ProcessOutput>;
}

/// Runner spawning real subprocesses.
pub struct HostProcessRunner;

impl ProcessRunner for HostProcessRunner {
    fn run(&self, program: &Path, args: &[&str], stdin: &[u8]) -> io::Result<ProcessOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // The write end must be closed before output is collected,
        // otherwise a tool reading stdin to EOF never terminates. Writing
        // everything up front cannot fill the output pipe for payloads of
        // this size (a single password line).
        let Some(mut pipe) = child.stdin.take() else {
            unreachable!("stdin was requested piped")
        };
        pipe.write_all(stdin)?;
        drop(pipe);

        let output = child.wait_with_output()?;
        Ok(ProcessOutput {
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
