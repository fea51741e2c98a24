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
use anyhow::Context;
use clap::{command, Arg};
use pw_hash::{pw_hash, HashType};
use std::io::Read;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logger();

    let matches = command!()
        .about("Hash a password read from stdin into /etc/shadow format")
        .arg(
            Arg::new("hash-type")
                .required(true)
                .help("hashing scheme: md5, sha-256 or sha-512"),
        )
        .arg(
            Arg::new("salt")
                .required(true)
                .help("salt, characters [A-Za-z0-9./]"),
        )
        .get_matches();

    let hash_type = matches
        .get_one::<String>("hash-type")
        .expect("`hash-type` argument required");
    let hash_type = HashType::from_str(hash_type)?;
    let salt = matches
        .get_one::<String>("salt")
        .expect("`salt` argument required");

    let mut password = String::new();
    std::io::stdin()
        .read_to_string(&mut password)
        .context("error reading password from stdin")?;
    // Tolerate the newline a terminal or `echo` appends.
    let password = password
        .strip_suffix('\n')
        .map(|pw| pw.strip_suffix('\r').unwrap_or(pw))
        .unwrap_or(password.as_str());

    let hash = pw_hash(password, hash_type, salt)?;
    println!("{hash}");
    Ok(())
}

fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}
