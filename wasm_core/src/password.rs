//! Heuristic password strength scoring.
//!
//! The score starts from length and character-class bonuses, subtracts
//! penalties for weak patterns, and is clamped to `0..=100`. Entropy is the
//! usual `length * log2(charset)` estimate and is reported separately.

use serde::Serialize;

const COMMON_PATTERNS: &[&str] = &["123", "234", "abc", "qwerty", "password", "admin"];

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    fn for_score(score: u8) -> Self {
        match score {
            0..=39 => StrengthLabel::Weak,
            40..=59 => StrengthLabel::Fair,
            60..=79 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
    pub feedback: Vec<String>,
    /// Estimated bits of entropy, rounded.
    pub entropy: u32,
}

#[derive(Debug, Default, Clone, Copy)]
struct CharClasses {
    lower: bool,
    upper: bool,
    digit: bool,
    symbol: bool,
}

impl CharClasses {
    fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut acc, ch| {
            match ch {
                'a'..='z' => acc.lower = true,
                'A'..='Z' => acc.upper = true,
                '0'..='9' => acc.digit = true,
                _ => acc.symbol = true,
            }
            acc
        })
    }

    fn charset_size(self) -> u32 {
        let mut size = 0;
        if self.lower {
            size += 26;
        }
        if self.upper {
            size += 26;
        }
        if self.digit {
            size += 10;
        }
        if self.symbol {
            size += 32;
        }
        size
    }
}

pub fn analyze(password: &str) -> PasswordStrength {
    let mut feedback = Vec::new();
    let mut score: i32 = 0;
    let length = password.chars().count();
    let classes = CharClasses::of(password);

    if length >= 8 {
        score += 20;
    } else {
        feedback.push("Use at least 8 characters".to_string());
    }
    if length >= 12 {
        score += 10;
    }
    if length >= 16 {
        score += 10;
    }

    for (present, hint) in [
        (classes.lower, "Include lowercase letters"),
        (classes.upper, "Include uppercase letters"),
        (classes.digit, "Include numbers"),
        (classes.symbol, "Include special characters (!@#$%^&*)"),
    ] {
        if present {
            score += 15;
        } else {
            feedback.push(hint.to_string());
        }
    }

    if has_triple_repeat(password) {
        score -= 10;
        feedback.push("Avoid repeated characters".to_string());
    }
    if length > 0 && password.chars().all(|c| c.is_ascii_digit()) {
        score -= 20;
        feedback.push("Don't use only numbers".to_string());
    }
    if length > 0 && password.chars().all(|c| c.is_ascii_alphabetic()) {
        score -= 10;
        feedback.push("Mix letters with numbers and symbols".to_string());
    }
    let lowered = password.to_lowercase();
    if COMMON_PATTERNS.iter().any(|pattern| lowered.contains(pattern)) {
        score -= 15;
        feedback.push("Avoid common words and sequences".to_string());
    }

    let charset = classes.charset_size();
    let entropy = if charset == 0 {
        0
    } else {
        (length as f64 * f64::from(charset).log2()).round() as u32
    };

    let score = score.clamp(0, 100) as u8;
    if feedback.is_empty() {
        feedback.push("Your password looks great!".to_string());
    }
    PasswordStrength {
        score,
        label: StrengthLabel::for_score(score),
        feedback,
        entropy,
    }
}

fn has_triple_repeat(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}
