// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Modular polynomial rolling hash.

use serde::{Deserialize, Serialize};

use crate::matchers::{Result, SearchError};

/// Default polynomial base.
pub const DEFAULT_BASE: u64 = 256;

/// Default prime modulus.
pub const DEFAULT_MODULUS: u64 = 9973;

/// Base and modulus of the hash polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingHashParams {
    /// Polynomial base, in `1..modulus`
    pub base: u64,

    /// Prime modulus, at most `u32::MAX`
    pub modulus: u64,
}

impl Default for RollingHashParams {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl RollingHashParams {
    /// Creates validated hash parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidHashParameters`] unless `modulus` is a
    /// prime and `base` lies in `1..modulus`.
    pub fn new(base: u64, modulus: u64) -> Result<Self> {
        let params = Self { base, modulus };
        params.validate()?;
        Ok(params)
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidHashParameters`] unless `modulus` is a
    /// prime of at most 32 bits and `base` lies in `1..modulus`.
    pub fn validate(&self) -> Result<()> {
        if self.modulus > u64::from(u32::MAX) {
            return Err(SearchError::InvalidHashParameters(format!(
                "modulus {} does not fit in 32 bits",
                self.modulus
            )));
        }
        if !is_prime(self.modulus) {
            return Err(SearchError::InvalidHashParameters(format!(
                "modulus {} is not a prime",
                self.modulus
            )));
        }
        if self.base == 0 || self.base >= self.modulus {
            return Err(SearchError::InvalidHashParameters(format!(
                "base {} must be in 1..{}",
                self.base, self.modulus
            )));
        }
        Ok(())
    }

    /// `base^(len-1) mod modulus`: the weight of the leading symbol of a
    /// window of `len` symbols.
    pub fn leading_weight(&self, len: usize) -> u64 {
        let mut weight = 1;
        for _ in 1..len {
            weight = self.mul(weight, self.base);
        }
        weight
    }

    #[inline]
    fn mul(&self, a: u64, b: u64) -> u64 {
        ((u128::from(a) * u128::from(b)) % u128::from(self.modulus)) as u64
    }

    #[inline]
    fn reduce(&self, code: u32) -> u64 {
        u64::from(code) % self.modulus
    }
}

/// Trial division; moduli are small enough for this to be cheap.
pub(crate) fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Hash accumulator over a window of symbol codes.
///
/// The value is reduced after every update and always lies in
/// `[0, modulus)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    params: RollingHashParams,
    leading_weight: u64,
    value: u64,
}

impl RollingHash {
    /// Creates an empty accumulator for windows of `window_len` symbols.
    pub fn new(params: RollingHashParams, window_len: usize) -> Self {
        Self {
            params,
            leading_weight: params.leading_weight(window_len),
            value: 0,
        }
    }

    /// Hashes a whole window of codes with Horner's rule.
    pub fn from_codes<I: IntoIterator<Item = u32>>(
        params: RollingHashParams,
        window_len: usize,
        codes: I,
    ) -> Self {
        let mut hash = Self::new(params, window_len);
        for code in codes {
            hash.push(code);
        }
        hash
    }

    /// Appends one code on the right (Horner step).
    pub fn push(&mut self, code: u32) {
        let shifted = self.params.mul(self.value, self.params.base);
        self.value = (shifted + self.params.reduce(code)) % self.params.modulus;
    }

    /// Slides the window by one: drops `outgoing` on the left and appends
    /// `incoming` on the right.
    pub fn roll(&mut self, outgoing: u32, incoming: u32) {
        let modulus = self.params.modulus;
        let contribution = self.params.mul(self.params.reduce(outgoing), self.leading_weight);
        // Add the modulus before subtracting to stay non-negative.
        self.value = (self.value + modulus - contribution) % modulus;
        self.push(incoming);
    }

    /// Current hash value.
    pub fn value(&self) -> u64 {
        self.value
    }
}
