//! Textbook RSA over small primes.
//!
//! This is a teaching cipher: each character is encrypted on its own and
//! the primes are tiny. Encryption is only reversible for characters whose
//! code point is below the modulus `n`; larger code points decrypt to the
//! wrong character, and invalid results come back as U+FFFD.

use num_integer::Integer;
use rand::Rng;
use tracing::debug;

use crate::input::{format_list, parse_key_pair, Field, RawInput};
use crate::options::Options;
use crate::strategy::{Algorithm, Description, ExecutionContext, WorkshopError};

/// Trial-division primality test.
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Whether `min..=max` holds at least two primes.
///
/// Stops scanning at the second prime found.
#[must_use]
pub fn has_two_primes(min: u64, max: u64) -> bool {
    (min..=max)
        .filter(|&c| i64::try_from(c).is_ok_and(is_prime))
        .nth(1)
        .is_some()
}

/// Draw two distinct primes uniformly from `min..=max`.
///
/// Fails when the range holds fewer than two primes.
pub fn generate_primes<R: Rng + ?Sized>(
    rng: &mut R,
    min: u64,
    max: u64,
) -> Result<(u64, u64), WorkshopError> {
    if !has_two_primes(min, max) {
        return Err(WorkshopError::Precondition(format!(
            "No two primes between {min} and {max}"
        )));
    }
    let mut primes: Vec<u64> = Vec::with_capacity(2);
    while primes.len() < 2 {
        let candidate = rng.gen_range(min..=max);
        if i64::try_from(candidate).is_ok_and(is_prime) && !primes.contains(&candidate) {
            primes.push(candidate);
        }
    }
    Ok((primes[0], primes[1]))
}

/// `base^exp mod modulus` by square-and-multiply.
#[must_use]
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = u128::from(modulus);
    let mut base = u128::from(base) % m;
    let mut result: u128 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    // result < modulus, which fits in u64
    u64::try_from(result).unwrap_or_default()
}

/// Inverse of `a` modulo `m`, if `gcd(a, m) == 1`.
#[must_use]
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    let egcd = i128::from(a).extended_gcd(&i128::from(m));
    if egcd.gcd != 1 {
        return None;
    }
    let inverse = egcd.x.rem_euclid(i128::from(m));
    u64::try_from(inverse).ok()
}

/// Key material for one session. All five values are derived together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaKeys {
    pub p: u64,
    pub q: u64,
    /// Modulus `p * q`.
    pub n: u64,
    /// Totient `(p - 1) * (q - 1)`.
    pub r: u64,
    /// Public exponent.
    pub e: u64,
    /// Private exponent, `e^-1 mod r`.
    pub d: u64,
}

impl RsaKeys {
    /// Derive `n`, `r`, `e`, and `d` from two primes.
    ///
    /// `e` is the preferred exponent unless it is not below `r`, in which
    /// case the fallback is used.
    pub fn derive(p: u64, q: u64, opts: &Options) -> Result<Self, WorkshopError> {
        if p < 2 || q < 2 {
            return Err(WorkshopError::Validation(
                "Please enter two prime numbers".into(),
            ));
        }
        let too_large = || WorkshopError::Validation("Keys too large for this cipher".into());
        let n = p.checked_mul(q).ok_or_else(too_large)?;
        let r = (p - 1).checked_mul(q - 1).ok_or_else(too_large)?;

        let e = if opts.public_exponent >= r {
            opts.fallback_exponent
        } else {
            opts.public_exponent
        };
        let d = mod_inverse(e, r).ok_or_else(|| {
            WorkshopError::Precondition("e and r are not coprime. Try different primes.".into())
        })?;

        debug!(p, q, n, r, e, "derived RSA keys");
        Ok(Self { p, q, n, r, e, d })
    }

    /// Encrypt each character code separately.
    #[must_use]
    pub fn encrypt(&self, message: &str) -> Vec<u64> {
        message
            .chars()
            .map(|c| mod_pow(u64::from(u32::from(c)), self.e, self.n))
            .collect()
    }

    /// Decrypt a ciphertext produced by [`RsaKeys::encrypt`].
    #[must_use]
    pub fn decrypt(&self, cipher: &[u64]) -> String {
        cipher
            .iter()
            .map(|&c| {
                u32::try_from(mod_pow(c, self.d, self.n))
                    .ok()
                    .and_then(char::from_u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
            })
            .collect()
    }
}

/// Where the primes for a session come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Draw two random primes.
    Random,
    /// Primes entered by the user, already checked.
    Supplied(u64, u64),
}

/// Normalized RSA input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaRequest {
    pub message: String,
    pub keys: KeySource,
}

/// Keys, ciphertext, and the decrypted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaOutcome {
    pub keys: RsaKeys,
    pub ciphertext: Vec<u64>,
    pub plaintext: String,
}

/// Toy RSA strategy: encrypt then immediately decrypt a message.
pub struct ToyRsa;

impl ToyRsa {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check user-supplied keys.
    pub fn parse_keys(raw: &str) -> Result<KeySource, WorkshopError> {
        match parse_key_pair(raw)? {
            None => Ok(KeySource::Random),
            Some((p, q)) => {
                if !is_prime(p) || !is_prime(q) {
                    return Err(WorkshopError::Validation(
                        "Please enter two prime numbers".into(),
                    ));
                }
                // Primes are positive, so these conversions hold.
                let p = u64::try_from(p).unwrap_or_default();
                let q = u64::try_from(q).unwrap_or_default();
                Ok(KeySource::Supplied(p, q))
            }
        }
    }

    /// Derive keys from `source`, drawing primes from `rng` when random.
    pub fn session_keys<R: Rng + ?Sized>(
        source: KeySource,
        opts: &Options,
        rng: &mut R,
    ) -> Result<RsaKeys, WorkshopError> {
        let (p, q) = match source {
            KeySource::Random => generate_primes(rng, opts.prime_min, opts.prime_max)?,
            KeySource::Supplied(p, q) => (p, q),
        };
        RsaKeys::derive(p, q, opts)
    }
}

impl Default for ToyRsa {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for ToyRsa {
    type Input = RsaRequest;
    type Output = RsaOutcome;

    fn validate(
        &self,
        raw: &RawInput,
        _opts: &Options,
    ) -> Result<Option<RsaRequest>, WorkshopError> {
        let keys = Self::parse_keys(raw.get(Field::Keys))?;
        let message = raw.get(Field::Text);
        if message.is_empty() {
            return Ok(None);
        }
        Ok(Some(RsaRequest {
            message: message.to_string(),
            keys,
        }))
    }

    fn compute(
        &self,
        request: RsaRequest,
        ctx: &ExecutionContext<'_>,
    ) -> Result<RsaOutcome, WorkshopError> {
        let keys = Self::session_keys(request.keys, ctx.options, &mut rand::thread_rng())?;
        let ciphertext = keys.encrypt(&request.message);
        let plaintext = keys.decrypt(&ciphertext);
        Ok(RsaOutcome {
            keys,
            ciphertext,
            plaintext,
        })
    }

    fn describe(&self, output: &RsaOutcome) -> Description {
        Description::new(
            "RSA",
            format!(
                "Encrypted: '{} to {}'",
                output.plaintext,
                format_list(&output.ciphertext)
            ),
        )
    }

    fn render(&self, output: &RsaOutcome) -> String {
        let keys = &output.keys;
        format!(
            "Keys: p={}, q={}, n={}, e={}, d={}\nEncrypted text: {}\nDecrypted text: {}",
            keys.p,
            keys.q,
            keys.n,
            keys.e,
            keys.d,
            format_list(&output.ciphertext),
            output.plaintext
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn primality() {
        let primes: Vec<i64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(!is_prime(-7));
        assert!(is_prime(997));
        assert!(!is_prime(999));
        assert!(is_prime(1_000_000_007));
    }

    #[test]
    fn generated_primes_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let (p, q) = generate_primes(&mut rng, 10, 1000).unwrap();
            assert_ne!(p, q);
            for k in [p, q] {
                assert!((10..=1000).contains(&k));
                assert!(is_prime(i64::try_from(k).unwrap()));
            }
        }
    }

    #[test]
    fn prime_poor_ranges_are_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(!has_two_primes(24, 28));
        assert!(!has_two_primes(23, 28));
        assert!(has_two_primes(23, 29));
        let err = generate_primes(&mut rng, 24, 28).unwrap_err();
        assert_eq!(
            err,
            WorkshopError::Precondition("No two primes between 24 and 28".into())
        );
        let (p, q) = generate_primes(&mut rng, 29, 31).unwrap();
        assert_eq!((p.min(q), p.max(q)), (29, 31));
    }

    #[test]
    fn modular_arithmetic() {
        assert_eq!(mod_pow(4, 13, 497), 445);
        assert_eq!(mod_pow(5, 0, 7), 1);
        assert_eq!(mod_pow(5, 3, 1), 0);
        assert_eq!(mod_inverse(3, 3016), Some(2011));
        assert_eq!(mod_inverse(3, 3120), None);
        assert_eq!(mod_inverse(17, 3120), Some(2753));
    }

    #[test]
    fn derive_uses_fallback_exponent_for_small_totient() {
        let keys = RsaKeys::derive(59, 53, &Options::default()).unwrap();
        assert_eq!(keys.n, 3127);
        assert_eq!(keys.r, 3016);
        assert_eq!(keys.e, 3);
        assert_eq!(keys.d, 2011);
        assert_eq!(keys.e * keys.d % keys.r, 1);
    }

    #[test]
    fn derive_uses_public_exponent_for_large_totient() {
        let keys = RsaKeys::derive(983, 991, &Options::default()).unwrap();
        assert_eq!(keys.e, 65_537);
        assert_eq!(u128::from(keys.e) * u128::from(keys.d) % u128::from(keys.r), 1);
    }

    #[test]
    fn derive_reports_non_coprime_exponent() {
        // r = 60 * 52 = 3120 is divisible by the fallback exponent 3.
        let err = RsaKeys::derive(61, 53, &Options::default()).unwrap_err();
        assert!(matches!(err, WorkshopError::Precondition(_)));
        assert_eq!(err.to_string(), "e and r are not coprime. Try different primes.");
    }

    #[test]
    fn round_trip_with_supplied_keys() {
        let keys = RsaKeys::derive(59, 53, &Options::default()).unwrap();
        let message = "Hello, World!";
        let cipher = keys.encrypt(message);
        assert_eq!(cipher.len(), message.chars().count());
        assert!(cipher
            .iter()
            .zip(message.chars())
            .any(|(&c, m)| c != u64::from(u32::from(m))));
        assert_eq!(keys.decrypt(&cipher), message);
    }

    #[test]
    fn round_trip_with_random_keys() {
        let mut rng = StdRng::seed_from_u64(11);
        let opts = Options::default();
        let mut successes = 0;
        for _ in 0..40 {
            if let Ok(keys) = ToyRsa::session_keys(KeySource::Random, &opts, &mut rng) {
                assert_eq!(keys.decrypt(&keys.encrypt("toy cipher")), "toy cipher");
                successes += 1;
            }
        }
        assert!(successes > 0);
    }

    #[test]
    fn codes_above_modulus_are_lossy() {
        // n = 2 * 3 = 6 is far below 'A' (65).
        let keys = RsaKeys::derive(2, 3, &Options::default()).unwrap();
        assert_eq!(keys.n, 6);
        assert_ne!(keys.decrypt(&keys.encrypt("A")), "A");
    }

    #[test]
    fn parse_keys_rules() {
        assert_eq!(ToyRsa::parse_keys("").unwrap(), KeySource::Random);
        assert_eq!(ToyRsa::parse_keys("59, 53").unwrap(), KeySource::Supplied(59, 53));
        assert_eq!(
            ToyRsa::parse_keys("60, 53").unwrap_err().to_string(),
            "Please enter two prime numbers"
        );
        assert_eq!(
            ToyRsa::parse_keys("59").unwrap_err().to_string(),
            "Format must be: prime, prime"
        );
    }

    #[test]
    fn empty_message_is_skipped() {
        let algo = ToyRsa::new();
        let raw = RawInput::new("").with_keys("59,53");
        assert_eq!(algo.validate(&raw, &Options::default()).unwrap(), None);
    }

    #[test]
    fn invalid_keys_fail_even_with_empty_message() {
        let algo = ToyRsa::new();
        let raw = RawInput::new("").with_keys("4,6");
        assert!(algo.validate(&raw, &Options::default()).is_err());
    }

    #[test]
    fn describe_and_render() {
        let algo = ToyRsa::new();
        let keys = RsaKeys::derive(59, 53, &Options::default()).unwrap();
        let ciphertext = keys.encrypt("hi");
        let output = RsaOutcome {
            keys,
            plaintext: keys.decrypt(&ciphertext),
            ciphertext: ciphertext.clone(),
        };
        let expected_list = format_list(&ciphertext);
        assert_eq!(
            algo.describe(&output).detail,
            format!("Encrypted: 'hi to {expected_list}'")
        );
        let rendered = algo.render(&output);
        assert!(rendered.contains(&format!("Encrypted text: {expected_list}")));
        assert!(rendered.ends_with("Decrypted text: hi"));
    }
}
