//! Orthographic modifiers used by the modified-spelling pattern
//!
//! Each modifier is a total, pure function. A precondition that does not hold
//! yields [`Modification::NotApplicable`], never an error.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Outcome of applying a modifier to a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modification {
    Applied(String),
    NotApplicable,
}

impl Modification {
    pub fn is_applied(&self) -> bool {
        matches!(self, Modification::Applied(_))
    }

    /// The transformed word, if the modifier applied
    pub fn applied(self) -> Option<String> {
        match self {
            Modification::Applied(word) => Some(word),
            Modification::NotApplicable => None,
        }
    }
}

/// A named spelling transform
#[derive(Debug, Clone, Copy)]
pub struct Modifier {
    pub name: &'static str,
    pub apply: fn(&str) -> Modification,
}

/// All modifiers, in the order the modified-spelling pattern tries them
pub const MODIFIERS: &[Modifier] = &[
    Modifier { name: "drop-vowels", apply: drop_vowels },
    Modifier { name: "drop-er", apply: drop_er },
    Modifier { name: "add-ify", apply: add_ify },
    Modifier { name: "add-ly", apply: add_ly },
    Modifier { name: "double-consonant", apply: double_consonant },
    Modifier { name: "swap-c-k", apply: swap_c_k },
    Modifier { name: "swap-s-z", apply: swap_s_z },
    Modifier { name: "swap-i-y", apply: swap_i_y },
    Modifier { name: "add-io", apply: add_io },
];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Drop the last vowel when consonants follow it: `flicker` -> `flickr`
pub fn drop_vowels(word: &str) -> Modification {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return Modification::NotApplicable;
    }

    match chars.iter().rposition(|&c| is_vowel(c)) {
        Some(idx) if idx > 0 && idx < chars.len() - 1 => {
            let dropped: String = chars
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .map(|(_, c)| *c)
                .collect();
            Modification::Applied(dropped)
        }
        _ => Modification::NotApplicable,
    }
}

/// `flicker` -> `flickr`
pub fn drop_er(word: &str) -> Modification {
    if word.chars().count() <= 4 || !word.ends_with("er") {
        return Modification::NotApplicable;
    }
    let stem = &word[..word.len() - 2];
    Modification::Applied(format!("{}r", stem))
}

/// `cloud` -> `cloudify`, `simple` -> `simplify`
pub fn add_ify(word: &str) -> Modification {
    if word.is_empty() || word.ends_with("ify") {
        return Modification::NotApplicable;
    }
    let stem = match word.strip_suffix('e').or_else(|| word.strip_suffix('y')) {
        Some(stem) if !stem.is_empty() => stem,
        _ => word,
    };
    Modification::Applied(format!("{}ify", stem))
}

/// `time` -> `timely`
pub fn add_ly(word: &str) -> Modification {
    if word.chars().count() < 2 || word.ends_with('y') {
        return Modification::NotApplicable;
    }
    Modification::Applied(format!("{}ly", word))
}

/// `grub` -> `grubb`
pub fn double_consonant(word: &str) -> Modification {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 3 {
        return Modification::NotApplicable;
    }

    let last = chars[chars.len() - 1];
    let before = chars[chars.len() - 2];
    if is_consonant(last) && !matches!(last, 'w' | 'x' | 'y') && is_vowel(before) {
        Modification::Applied(format!("{}{}", word, last))
    } else {
        Modification::NotApplicable
    }
}

/// `click` -> `klik`
pub fn swap_c_k(word: &str) -> Modification {
    if !word.contains('c') {
        return Modification::NotApplicable;
    }
    Modification::Applied(word.replace("ck", "k").replace('c', "k"))
}

/// `tools` -> `toolz`
pub fn swap_s_z(word: &str) -> Modification {
    match word.strip_suffix('s') {
        Some(stem) if stem.chars().count() >= 2 => Modification::Applied(format!("{}z", stem)),
        _ => Modification::NotApplicable,
    }
}

/// `pixel` -> `pyxel`; a leading `i` is kept
pub fn swap_i_y(word: &str) -> Modification {
    let mut changed = false;
    let swapped: String = word
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i > 0 && c == 'i' {
                changed = true;
                'y'
            } else {
                c
            }
        })
        .collect();

    if changed {
        Modification::Applied(swapped)
    } else {
        Modification::NotApplicable
    }
}

/// `cloud` -> `cloudio`
pub fn add_io(word: &str) -> Modification {
    match word.chars().last() {
        Some(last) if word.chars().count() >= 3 && is_consonant(last) => {
            Modification::Applied(format!("{}io", word))
        }
        _ => Modification::NotApplicable,
    }
}
