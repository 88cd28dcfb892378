//! Tokenizer: splits raw resume text into linguistic tokens with alphabetic/stopword flags.
//!
//! `NlpPipeline` carries a `Box<dyn Tokenizer>`, so a model-backed tokenizer can be
//! swapped in without touching the keyword extractor.

use crate::analysis::stopwords::is_stopword;

/// A single token as produced by a `Tokenizer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Every character is alphabetic.
    pub is_alpha: bool,
    pub is_stop: bool,
}

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Rule-based English tokenizer.
///
/// A word is a maximal run of alphanumeric characters. Any other non-whitespace
/// character becomes a single punctuation token. An apostrophe inside a word splits
/// off a known clitic (`n't`, `'ll`, `'ve`, `'re`, `'d`, `'s`, `'m`) as its own
/// non-alphabetic token; any other inner apostrophe stays part of the word.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishTokenizer;

const CLITIC_SUFFIXES: &[&str] = &["ll", "ve", "re", "d", "s", "m"];

impl Tokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if ch.is_alphanumeric() {
                current.push(ch);
                i += 1;
                continue;
            }

            if is_apostrophe(ch) && !current.is_empty() {
                let end = chars[i + 1..]
                    .iter()
                    .position(|c| !c.is_alphanumeric())
                    .map_or(chars.len(), |offset| i + 1 + offset);
                if end > i + 1 {
                    let suffix: String = chars[i + 1..end].iter().collect();
                    let lower = suffix.to_lowercase();

                    if CLITIC_SUFFIXES.contains(&lower.as_str()) {
                        tokens.push(stem_token(std::mem::take(&mut current)));
                        tokens.push(make_token(format!("{ch}{suffix}")));
                        i = end;
                        continue;
                    }

                    if lower == "t" && current.chars().count() > 1 && current.ends_with(['n', 'N']) {
                        let n = current.pop().unwrap_or('n');
                        tokens.push(stem_token(std::mem::take(&mut current)));
                        tokens.push(make_token(format!("{n}{ch}{suffix}")));
                        i = end;
                        continue;
                    }

                    // O'Brien, rock'n'roll
                    current.push(ch);
                    i += 1;
                    continue;
                }
            }

            if !current.is_empty() {
                tokens.push(make_token(std::mem::take(&mut current)));
            }
            if !ch.is_whitespace() {
                tokens.push(make_token(ch.to_string()));
            }
            i += 1;
        }
        if !current.is_empty() {
            tokens.push(make_token(current));
        }

        tokens
    }
}

fn is_apostrophe(ch: char) -> bool {
    ch == '\'' || ch == '\u{2019}'
}

fn make_token(text: String) -> Token {
    let is_alpha = text.chars().all(char::is_alphabetic);
    let is_stop = is_alpha && is_stopword(&text);
    Token {
        text,
        is_alpha,
        is_stop,
    }
}

/// Word left in front of a clitic. Irregular negated stems ("wo" in "won't")
/// are checked against the stopword list under their full form.
fn stem_token(text: String) -> Token {
    let mut token = make_token(text);
    if token.is_alpha && !token.is_stop {
        let full = match token.text.to_lowercase().as_str() {
            "wo" => Some("will"),
            "ca" => Some("can"),
            "sha" => Some("shall"),
            _ => None,
        };
        token.is_stop = full.is_some_and(is_stopword);
    }
    token
}

/// Lowercased word tokens (alphanumeric runs), punctuation dropped.
pub fn words(text: &str) -> Vec<String> {
    EnglishTokenizer
        .tokenize(text)
        .into_iter()
        .filter(|t| t.text.chars().all(char::is_alphanumeric))
        .map(|t| t.text.to_lowercase())
        .collect()
}
