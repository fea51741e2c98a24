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
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashError {
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("salt `{0}` must be non-empty and consist of characters [A-Za-z0-9./]")]
    InvalidSalt(String),
    #[error("no `{binary}` executable in {searched} or on PATH")]
    ExecutableNotFound { binary: String, searched: String },
    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    #[error("{} exited with code {}: {stderr}", .program.display(), exit_code(.code))]
    ToolFailed {
        program: PathBuf,
        code: Option<i32>,
        stderr: String,
    },
    #[error("hash output is not valid utf-8: {0}")]
    NonUtf8Output(#[from] std::string::FromUtf8Error),
}

fn exit_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "<signal>".to_string(), |code| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_message_carries_diagnostics() {
        let error = HashError::ToolFailed {
            program: PathBuf::from("/usr/bin/openssl"),
            code: Some(1),
            stderr: "boom".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("/usr/bin/openssl"));
        assert!(message.contains('1'));
        assert!(message.contains("boom"));
    }

    #[test]
    fn signal_termination_has_no_numeric_code() {
        let error = HashError::ToolFailed {
            program: PathBuf::from("openssl"),
            code: None,
            stderr: String::new(),
        };
        assert!(error.to_string().contains("<signal>"));
    }
}
