//! English inflection rules.
//!
//! Regular spelling rules plus small irregular tables. Multi-word heads such
//! as phrasal verbs ("pick up") inflect their first word only.

/// Irregular verbs: (base, past, past participle).
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("be", "was", "been"),
    ("have", "had", "had"),
    ("do", "did", "done"),
    ("go", "went", "gone"),
    ("say", "said", "said"),
    ("make", "made", "made"),
    ("take", "took", "taken"),
    ("give", "gave", "given"),
    ("get", "got", "got"),
    ("come", "came", "come"),
    ("see", "saw", "seen"),
    ("know", "knew", "known"),
    ("think", "thought", "thought"),
    ("find", "found", "found"),
    ("tell", "told", "told"),
    ("eat", "ate", "eaten"),
    ("run", "ran", "run"),
    ("write", "wrote", "written"),
    ("read", "read", "read"),
    ("buy", "bought", "bought"),
    ("bring", "brought", "brought"),
    ("sit", "sat", "sat"),
    ("stand", "stood", "stood"),
    ("leave", "left", "left"),
    ("put", "put", "put"),
    ("hit", "hit", "hit"),
    ("throw", "threw", "thrown"),
    ("break", "broke", "broken"),
    ("speak", "spoke", "spoken"),
    ("drink", "drank", "drunk"),
    ("sing", "sang", "sung"),
    ("swim", "swam", "swum"),
    ("fly", "flew", "flown"),
    ("drive", "drove", "driven"),
    ("ride", "rode", "ridden"),
    ("fall", "fell", "fallen"),
    ("feel", "felt", "felt"),
    ("keep", "kept", "kept"),
    ("sleep", "slept", "slept"),
    ("meet", "met", "met"),
    ("send", "sent", "sent"),
    ("build", "built", "built"),
    ("lose", "lost", "lost"),
    ("win", "won", "won"),
    ("catch", "caught", "caught"),
    ("teach", "taught", "taught"),
    ("choose", "chose", "chosen"),
    ("begin", "began", "begun"),
    ("forget", "forgot", "forgotten"),
];

/// Irregular nouns: (singular, plural).
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("person", "people"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("sheep", "sheep"),
    ("fish", "fish"),
    ("deer", "deer"),
    ("series", "series"),
];

fn split_head(word: &str) -> (&str, &str) {
    match word.find(' ') {
        Some(i) => (&word[..i], &word[i..]),
        None => (word, ""),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    matches!((chars.next(), chars.next()), (Some('y'), Some(c)) if !is_vowel(c))
}

fn ends_with_sibilant(word: &str) -> bool {
    ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
}

/// Consonant-vowel-consonant endings double their last letter ("stop" → "stopped").
fn doubles_final_consonant(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 3 || chars.len() > 4 {
        return false;
    }
    let n = chars.len();
    let (a, b, c) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !matches!(c, 'w' | 'x' | 'y')
}

fn irregular_verb(base: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    IRREGULAR_VERBS.iter().find(|(b, _, _)| *b == base)
}

fn regular_past(base: &str) -> String {
    if base.ends_with('e') {
        format!("{base}d")
    } else if ends_with_consonant_y(base) {
        format!("{}ied", &base[..base.len() - 1])
    } else if doubles_final_consonant(base) {
        let last = base.chars().last().unwrap_or_default();
        format!("{base}{last}ed")
    } else {
        format!("{base}ed")
    }
}

/// The simple past of a verb.
#[must_use]
pub fn past(verb: &str) -> String {
    let (head, rest) = split_head(verb);
    let inflected = irregular_verb(head).map_or_else(|| regular_past(head), |(_, p, _)| (*p).to_string());
    format!("{inflected}{rest}")
}

/// The past participle of a verb.
#[must_use]
pub fn past_participle(verb: &str) -> String {
    let (head, rest) = split_head(verb);
    let inflected =
        irregular_verb(head).map_or_else(|| regular_past(head), |(_, _, pp)| (*pp).to_string());
    format!("{inflected}{rest}")
}

/// The third-person singular present of a verb.
#[must_use]
pub fn third_singular(verb: &str) -> String {
    let (head, rest) = split_head(verb);
    let inflected = match head {
        "be" => "is".to_string(),
        "have" => "has".to_string(),
        "do" | "go" => format!("{head}es"),
        _ if ends_with_consonant_y(head) => format!("{}ies", &head[..head.len() - 1]),
        _ if ends_with_sibilant(head) => format!("{head}es"),
        _ => format!("{head}s"),
    };
    format!("{inflected}{rest}")
}

/// The plural of a noun.
#[must_use]
pub fn plural(noun: &str) -> String {
    // Multi-word nouns ("ice cream") pluralise their last word.
    let (rest, last) = match noun.rfind(' ') {
        Some(i) => (&noun[..=i], &noun[i + 1..]),
        None => ("", noun),
    };
    let inflected = if let Some((_, p)) = IRREGULAR_NOUNS.iter().find(|(s, _)| *s == last) {
        (*p).to_string()
    } else if ends_with_consonant_y(last) {
        format!("{}ies", &last[..last.len() - 1])
    } else if ends_with_sibilant(last) {
        format!("{last}es")
    } else {
        format!("{last}s")
    };
    format!("{rest}{inflected}")
}

/// Chooses "a" or "an" for the word that follows.
#[must_use]
pub fn indefinite_article(next: &str) -> &'static str {
    match next.chars().next() {
        Some(c) if is_vowel(c.to_ascii_lowercase()) => "an",
        _ => "a",
    }
}
