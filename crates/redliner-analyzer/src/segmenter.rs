//! Rule-based sentence boundary detection

use redliner_domain::traits::SentenceSegmenter;

/// Words that end in a period without ending the sentence
const ABBREVIATIONS: &[&str] = &["vs", "cf", "approx"];

/// Titles; only abbreviations when a capitalised name follows
const TITLES: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "st"];

/// Company and name suffixes; a capitalised next word starts a new sentence
const SUFFIXES: &[&str] = &["inc", "ltd", "co", "corp", "jr", "sr"];

/// Reference markers; only abbreviations when a number follows ("No. 12")
const NUMBERED: &[&str] = &["no", "art", "sec", "para"];

/// Labels for lettered references ("Schedule B.")
const HEADINGS: &[&str] = &[
    "schedule", "exhibit", "appendix", "annex", "attachment", "section", "article", "part",
    "clause", "item", "plan", "option", "class", "tier",
];

/// Punctuation-driven sentence segmenter
///
/// A sentence ends after `.`, `!` or `?` (together with any closing quotes or
/// brackets) when followed by whitespace or the end of the text. Blank lines
/// always end a sentence. Periods after dotted initialisms (`U.S.`) and known
/// abbreviations do not. Context-dependent abbreviations (`Dr.`, `Inc.`,
/// `No.`) and single-letter initials are decided by the word that follows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSegmenter;

impl PunctuationSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSegmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        for paragraph in paragraphs(text) {
            segment_paragraph(&paragraph, &mut sentences);
        }
        sentences
    }
}

/// Split on blank lines, keeping single line breaks inside a paragraph
fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

fn segment_paragraph(paragraph: &str, sentences: &mut Vec<String>) {
    let chars: Vec<(usize, char)> = paragraph.char_indices().collect();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        // Absorb runs like "?!" or ".)" into the same boundary
        let mut j = i + 1;
        while j < chars.len() && (is_terminator(chars[j].1) || is_closing(chars[j].1)) {
            j += 1;
        }

        let end = chars.get(j).map_or(paragraph.len(), |(p, _)| *p);
        let at_boundary = chars.get(j).is_none_or(|(_, next)| next.is_whitespace());

        if at_boundary && !(c == '.' && is_abbreviation(&paragraph[start..pos], &paragraph[end..])) {
            push_sentence(&paragraph[start..end], sentences);
            start = end;
        }
        i = j;
    }

    push_sentence(&paragraph[start..], sentences);
}

fn push_sentence(raw: &str, sentences: &mut Vec<String>) {
    let sentence = raw.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

/// Whether the period closing `prefix` belongs to an abbreviation, given the
/// text after the boundary
fn is_abbreviation(prefix: &str, rest: &str) -> bool {
    let mut words = prefix.split_whitespace().rev();
    let word = words
        .next()
        .unwrap_or("")
        .trim_start_matches(['(', '"', '\'', '[']);

    if word.is_empty() {
        return false;
    }

    let next = rest
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_start_matches(['(', '"', '\'', '[']);
    let next_upper = next.chars().next().is_some_and(char::is_uppercase);
    let next_digit = next.chars().next().is_some_and(|c| c.is_ascii_digit());

    // Dotted initialism ("U.S.", "e.g.")
    if word.contains('.')
        && word
            .split('.')
            .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
    {
        return true;
    }

    // Single initial ("J. Doe"), unless it labels a reference ("Schedule B.")
    if word.chars().count() == 1 && word.chars().all(char::is_uppercase) {
        let labelled = words.next().is_some_and(|previous| {
            let previous = previous
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            HEADINGS.contains(&previous.as_str())
        });
        return !labelled && next_upper;
    }

    let lower = word.to_lowercase();
    let lower = lower.as_str();
    if ABBREVIATIONS.contains(&lower) {
        true
    } else if TITLES.contains(&lower) {
        next_upper
    } else if SUFFIXES.contains(&lower) {
        !next_upper
    } else if NUMBERED.contains(&lower) {
        next_digit
    } else {
        false
    }
}
