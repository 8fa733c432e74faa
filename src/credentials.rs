// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt;

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const NAME_LENGTH: usize = 8;
pub const PASSWORD_LENGTH: usize = 12;

const NAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Never contains a quote or backslash, so generated passwords are valid SQL
/// string literals as-is.
const PASSWORD_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!$()-_~";

/// Owner credentials for a provisioned database.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Generates role names and passwords from a random source owned by the
/// generator.
pub struct CredentialGenerator<R = StdRng> {
    rng: R,
}

impl CredentialGenerator<StdRng> {
    /// Seeds a generator once from the operating system.
    pub fn from_os_rng() -> Self {
        CredentialGenerator {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> CredentialGenerator<R> {
    pub fn new(rng: R) -> Self {
        CredentialGenerator { rng }
    }

    /// Eight lowercase ASCII letters; safe as an unquoted identifier.
    pub fn generate_name(&mut self) -> String {
        trace!("Generating random role name");
        sample_string(&mut self.rng, NAME_CHARSET, NAME_LENGTH)
    }

    pub fn generate_password(&mut self) -> String {
        trace!("Generating random password");
        sample_string(&mut self.rng, PASSWORD_CHARSET, PASSWORD_LENGTH)
    }

    pub fn generate(&mut self) -> Credentials {
        Credentials {
            username: self.generate_name(),
            password: self.generate_password(),
        }
    }
}

fn sample_string<R: Rng>(rng: &mut R, charset: &[u8], length: usize) -> String {
    (0..length)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}
