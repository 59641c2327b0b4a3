//! Palindromic substring counting by dynamic programming.

use crate::input::{Field, RawInput};
use crate::options::Options;
use crate::strategy::{Algorithm, Description, ExecutionContext, WorkshopError};

/// Every palindromic substring, overlapping occurrences counted separately.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palindromes {
    /// Substrings by increasing length, left to right within a length.
    pub found: Vec<String>,
}

impl Palindromes {
    /// Number of palindromic substrings.
    #[must_use]
    pub fn count(&self) -> usize {
        self.found.len()
    }
}

/// Find all palindromic substrings of `s`, working on characters.
///
/// `memo[i][j]` holds whether `s[i..=j]` is a palindrome. Lengths 1 and 2
/// are seeded directly; longer spans need matching ends around a
/// palindromic interior.
#[must_use]
pub fn find_palindromes(s: &str) -> Palindromes {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut memo = vec![vec![false; n]; n];
    let mut found = Vec::new();
    let substring = |i: usize, j: usize| chars[i..=j].iter().collect::<String>();

    for i in 0..n {
        memo[i][i] = true;
        found.push(substring(i, i));
    }

    for i in 0..n.saturating_sub(1) {
        if chars[i] == chars[i + 1] {
            memo[i][i + 1] = true;
            found.push(substring(i, i + 1));
        }
    }

    for len in 3..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            if chars[i] == chars[j] && memo[i + 1][j - 1] {
                memo[i][j] = true;
                found.push(substring(i, j));
            }
        }
    }

    Palindromes { found }
}

/// Input text and its palindromes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeReport {
    pub text: String,
    pub palindromes: Palindromes,
}

/// Palindromic substring counter strategy.
pub struct PalindromeCounter;

impl PalindromeCounter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PalindromeCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for PalindromeCounter {
    type Input = String;
    type Output = PalindromeReport;

    fn validate(&self, raw: &RawInput, _opts: &Options) -> Result<Option<String>, WorkshopError> {
        let text = raw.get(Field::Text).trim();
        Ok((!text.is_empty()).then(|| text.to_string()))
    }

    fn compute(
        &self,
        text: String,
        _ctx: &ExecutionContext<'_>,
    ) -> Result<PalindromeReport, WorkshopError> {
        let palindromes = find_palindromes(&text);
        Ok(PalindromeReport { text, palindromes })
    }

    fn describe(&self, output: &PalindromeReport) -> Description {
        Description::new(
            "Looked at",
            format!(
                "{} and found {} palindromes",
                output.text,
                output.palindromes.count()
            ),
        )
    }

    fn render(&self, output: &PalindromeReport) -> String {
        format!(
            "Total Palindromes: {}\n{}",
            output.palindromes.count(),
            output.palindromes.found.join(", ")
        )
    }
}
