use regex::Regex;
use std::collections::HashSet;
use std::error::Error;
use std::fs;

pub fn tokenize(text: &str) -> Vec<String> {
    let re = Regex::new(r"[a-zа-яё0-9]+").unwrap();
    let lowered = text.to_lowercase();
    re.find_iter(&lowered)
        .map(|word| word.as_str().to_string())
        .collect()
}

pub fn load_stop_words(path: &str) -> Result<HashSet<String>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    let stop_words = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    Ok(stop_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_lowercases() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
        assert_eq!(tokenize("Какие факультеты?"), vec!["какие", "факультеты"]);
    }

    #[test]
    fn pure_punctuation_yields_nothing() {
        assert!(tokenize("?!., --- ...").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn digits_survive_tokenization() {
        assert_eq!(tokenize("баллы 2024 года"), vec!["баллы", "2024", "года"]);
    }

    #[test]
    fn shipped_stop_word_files_load() {
        let russian = load_stop_words("stop_words/russian.txt").unwrap();
        assert!(russian.contains("и"));
        assert!(russian.contains("есть"));

        let english = load_stop_words("stop_words/english.txt").unwrap();
        assert!(english.contains("the"));
        assert!(english.contains("is"));
    }

    #[test]
    fn missing_stop_word_file_is_an_error() {
        assert!(load_stop_words("stop_words/no_such_language.txt").is_err());
    }
}
