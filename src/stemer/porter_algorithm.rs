// Porter-family (Snowball) stemmer for Russian. Endings are matched inside
// the RV region (everything after the first vowel); the derivational step
// additionally requires R2. Suffix tables are ordered longest first.

const PERFECTIVE_GERUNDS_1: [&str; 3] = ["вшись", "вши", "в"];
const PERFECTIVE_GERUNDS_2: [&str; 6] = ["ившись", "ывшись", "ивши", "ывши", "ив", "ыв"];
const REFLEXIVES: [&str; 2] = ["ся", "сь"];
const ADJECTIVES: [&str; 26] = [
    "ими", "ыми", "его", "ого", "ему", "ому", "ее", "ие", "ые", "ое", "ей", "ий", "ый",
    "ой", "ем", "им", "ым", "ом", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
];
const PARTICIPLES_1: [&str; 5] = ["ем", "нн", "вш", "ющ", "щ"];
const PARTICIPLES_2: [&str; 3] = ["ивш", "ывш", "ующ"];
const VERBS_1: [&str; 17] = [
    "ете", "йте", "ешь", "нно", "ла", "на", "ли", "ем", "ло", "но", "ет", "ют", "ны",
    "ть", "й", "л", "н",
];
const VERBS_2: [&str; 29] = [
    "ейте", "уйте", "ила", "ыла", "ена", "ите", "или", "ыли", "ило", "ыло", "ено",
    "ует", "уют", "ены", "ить", "ыть", "ишь", "ей", "уй", "ил", "ыл", "им", "ым",
    "ен", "ят", "ит", "ыт", "ую", "ю",
];
const NOUNS: [&str; 36] = [
    "иями", "ями", "ами", "ией", "иям", "ием", "иях", "ев", "ов", "ие", "ье", "еи",
    "ии", "ей", "ой", "ий", "ям", "ем", "ам", "ом", "ах", "ях", "ию", "ью", "ия",
    "ья", "а", "е", "и", "й", "о", "у", "ы", "ь", "ю", "я",
];
const SUPERLATIVES: [&str; 2] = ["ейше", "ейш"];
const DERIVATIONALS: [&str; 2] = ["ость", "ост"];

fn is_vowel(c: char) -> bool {
    matches!(c, 'а' | 'е' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я')
}

fn is_russian(c: char) -> bool {
    ('а'..='я').contains(&c) || c == 'ё'
}

// RV: everything after the first vowel.
fn rv_start(word: &[char]) -> usize {
    for i in 0..word.len() {
        if is_vowel(word[i]) {
            return i + 1;
        }
    }
    word.len()
}

// R2: the region after the first vowel-consonant pair inside R1, where R1 is
// the region after the first vowel-consonant pair of the word.
fn r2_start(word: &[char]) -> usize {
    let mut r1 = word.len();
    for i in 1..word.len() {
        if is_vowel(word[i - 1]) && !is_vowel(word[i]) {
            r1 = i + 1;
            break;
        }
    }

    for i in (r1 + 1)..word.len() {
        if is_vowel(word[i - 1]) && !is_vowel(word[i]) {
            return i + 1;
        }
    }
    word.len()
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    let suffix_chars: Vec<char> = suffix.chars().collect();
    word.ends_with(&suffix_chars)
}

fn remove_first(word: &mut Vec<char>, suffixes: &[&str], region: usize) -> bool {
    for suffix in suffixes {
        let len = suffix.chars().count();
        if word.len() >= len && word.len() - len >= region && ends_with(word, suffix) {
            word.truncate(word.len() - len);
            return true;
        }
    }
    false
}

// Group-1 endings only count when preceded by "а" or "я"; the preceding
// letter itself stays on the stem.
fn remove_first_after_a(word: &mut Vec<char>, suffixes: &[&str], region: usize) -> bool {
    for suffix in suffixes {
        let len = suffix.chars().count();
        if word.len() > len && word.len() - len > region && ends_with(word, suffix) {
            let prev = word[word.len() - len - 1];
            if prev == 'а' || prev == 'я' {
                word.truncate(word.len() - len);
                return true;
            }
        }
    }
    false
}

pub fn porter_stem(word: &str) -> String {
    let mut word: Vec<char> = word
        .to_lowercase()
        .chars()
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect();

    if !word.iter().all(|c| is_russian(*c)) {
        // Latin tokens, numbers etc. pass through lowercased.
        return word.into_iter().collect();
    }

    let rv = rv_start(&word);
    let r2 = r2_start(&word);

    // Step 1: strip a perfective gerund, or a reflexive ending followed by
    // one of the adjectival / verb / noun endings.
    if !remove_first_after_a(&mut word, &PERFECTIVE_GERUNDS_1, rv)
        && !remove_first(&mut word, &PERFECTIVE_GERUNDS_2, rv)
    {
        remove_first(&mut word, &REFLEXIVES, rv);

        if remove_first(&mut word, &ADJECTIVES, rv) {
            if !remove_first_after_a(&mut word, &PARTICIPLES_1, rv) {
                remove_first(&mut word, &PARTICIPLES_2, rv);
            }
        } else if !remove_first_after_a(&mut word, &VERBS_1, rv)
            && !remove_first(&mut word, &VERBS_2, rv)
        {
            remove_first(&mut word, &NOUNS, rv);
        }
    }

    // Step 2: trailing "и".
    if word.len() > rv && word.last() == Some(&'и') {
        word.pop();
    }

    // Step 3: derivational ending, R2 only.
    remove_first(&mut word, &DERIVATIONALS, r2);

    // Step 4: undouble "нн", strip a superlative, drop a trailing soft sign.
    if word.len() >= 2 && word.len() - 2 >= rv && ends_with(&word, "нн") {
        word.pop();
    } else if remove_first(&mut word, &SUPERLATIVES, rv) {
        if word.len() >= 2 && word.len() - 2 >= rv && ends_with(&word, "нн") {
            word.pop();
        }
    } else if word.len() > rv && word.last() == Some(&'ь') {
        word.pop();
    }

    word.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_endings_are_stripped() {
        assert_eq!(porter_stem("факультеты"), "факультет");
        assert_eq!(porter_stem("факультетов"), "факультет");
        assert_eq!(porter_stem("баллы"), "балл");
        assert_eq!(porter_stem("баллов"), "балл");
        assert_eq!(porter_stem("университете"), "университет");
    }

    #[test]
    fn verb_endings_are_stripped() {
        assert_eq!(porter_stem("перечислите"), "перечисл");
        assert_eq!(porter_stem("перечислить"), "перечисл");
    }

    #[test]
    fn inflected_forms_share_a_stem() {
        assert_eq!(porter_stem("факультеты"), porter_stem("факультетов"));
        assert_eq!(porter_stem("направления"), porter_stem("направлений"));
    }

    #[test]
    fn adjective_then_participle() {
        assert_eq!(porter_stem("сделанный"), "сдела");
    }

    #[test]
    fn derivational_suffix_in_r2() {
        assert_eq!(porter_stem("возможность"), "возможн");
    }

    #[test]
    fn yo_is_folded_to_ye() {
        assert_eq!(porter_stem("учёба"), "учеб");
    }

    #[test]
    fn input_is_lowercased() {
        assert_eq!(porter_stem("Перечислите"), porter_stem("перечислите"));
    }

    #[test]
    fn non_russian_tokens_pass_through() {
        assert_eq!(porter_stem("Hello"), "hello");
        assert_eq!(porter_stem("404"), "404");
    }

    #[test]
    fn short_words_are_untouched() {
        assert_eq!(porter_stem("и"), "и");
        assert_eq!(porter_stem(""), "");
    }
}
