//! QWERTY keystrokes to the Russian ЙЦУКЕН layout.

/// Keys with a Cyrillic counterpart, in physical row order
pub const MAPPED_KEYS: &[char] = &[
    'q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', '[', ']', //
    'a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', ';', '\'', //
    'z', 'x', 'c', 'v', 'b', 'n', 'm', ',', '.', '/', //
    'Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', '{', '}', //
    'A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', ':', '"', //
    'Z', 'X', 'C', 'V', 'B', 'N', 'M', '<', '>', '?', //
    '`', '~', '@', '#', '$', '^', '&',
];

/// Character produced by the same physical key on the Russian layout.
/// Anything without a counterpart comes back unchanged.
pub const fn map_key(ch: char) -> char {
    match ch {
        // top row
        'q' => 'й',
        'w' => 'ц',
        'e' => 'у',
        'r' => 'к',
        't' => 'е',
        'y' => 'н',
        'u' => 'г',
        'i' => 'ш',
        'o' => 'щ',
        'p' => 'з',
        '[' => 'х',
        ']' => 'ъ',
        // home row
        'a' => 'ф',
        's' => 'ы',
        'd' => 'в',
        'f' => 'а',
        'g' => 'п',
        'h' => 'р',
        'j' => 'о',
        'k' => 'л',
        'l' => 'д',
        ';' => 'ж',
        '\'' => 'э',
        // bottom row
        'z' => 'я',
        'x' => 'ч',
        'c' => 'с',
        'v' => 'м',
        'b' => 'и',
        'n' => 'т',
        'm' => 'ь',
        ',' => 'б',
        '.' => 'ю',
        '/' => '.',

        'Q' => 'Й',
        'W' => 'Ц',
        'E' => 'У',
        'R' => 'К',
        'T' => 'Е',
        'Y' => 'Н',
        'U' => 'Г',
        'I' => 'Ш',
        'O' => 'Щ',
        'P' => 'З',
        '{' => 'Х',
        '}' => 'Ъ',
        'A' => 'Ф',
        'S' => 'Ы',
        'D' => 'В',
        'F' => 'А',
        'G' => 'П',
        'H' => 'Р',
        'J' => 'О',
        'K' => 'Л',
        'L' => 'Д',
        ':' => 'Ж',
        '"' => 'Э',
        'Z' => 'Я',
        'X' => 'Ч',
        'C' => 'С',
        'V' => 'М',
        'B' => 'И',
        'N' => 'Т',
        'M' => 'Ь',
        '<' => 'Б',
        '>' => 'Ю',
        '?' => ',',

        // number row and backtick
        '`' => 'ё',
        '~' => 'Ё',
        '@' => '"',
        '#' => '№',
        '$' => ';',
        '^' => ':',
        '&' => '?',
        _ => ch,
    }
}

/// Convert a whole string key by key
pub fn translate(input: &str) -> String {
    input.chars().map(map_key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn is_cyrillic_letter(ch: char) -> bool {
        matches!(ch, 'А'..='я' | 'Ё' | 'ё')
    }

    #[test]
    fn words_typed_on_latin_keyboard() {
        assert_eq!(translate("ghbdtn"), "привет");
        assert_eq!(translate("Vjcrdf"), "Москва");
        assert_eq!(translate("cgfcb,j"), "спасибо");
        assert_eq!(translate("`krf"), "ёлка");
    }

    #[test]
    fn full_rows_match_the_layout() {
        assert_eq!(
            translate("qwertyuiop[]asdfghjkl;'zxcvbnm,./"),
            "йцукенгшщзхъфывапролджэячсмитьбю."
        );
        assert_eq!(
            translate("QWERTYUIOP{}ASDFGHJKL:\"ZXCVBNM<>?"),
            "ЙЦУКЕНГШЩЗХЪФЫВАПРОЛДЖЭЯЧСМИТЬБЮ,"
        );
    }

    #[test]
    fn every_latin_letter_maps_to_cyrillic() {
        for ch in ('a'..='z').chain('A'..='Z') {
            let mapped = map_key(ch);
            assert!(is_cyrillic_letter(mapped), "{ch} -> {mapped}");
        }
    }

    #[test]
    fn case_entries_are_independent() {
        for ch in 'a'..='z' {
            let lower = map_key(ch);
            let upper = map_key(ch.to_ascii_uppercase());
            assert_eq!(lower.to_uppercase().next(), Some(upper), "{ch}");
        }
    }

    #[test]
    fn punctuation_keys() {
        assert_eq!(translate("[];',./"), "хъжэбю.");
        assert_eq!(translate("{}:\"<>?"), "ХЪЖЭБЮ,");
        assert_eq!(translate("`~@#$^&"), "ёЁ\"№;:?");
    }

    #[test]
    fn table_is_total_over_mapped_keys() {
        assert_eq!(MAPPED_KEYS.len(), 52 + 21);
        for &key in MAPPED_KEYS {
            assert_ne!(map_key(key), key, "{key} has no mapping");
        }
    }

    #[test]
    fn unmapped_characters_pass_through() {
        for ch in ['1', '9', ' ', '-', '!', '%', '*', '(', ')', '_', '=', '+', '\\', '|', 'é', '中'] {
            assert_eq!(map_key(ch), ch);
        }
        assert_eq!(translate("123 -=!"), "123 -=!");
    }

    #[test]
    fn cyrillic_text_is_stable() {
        let text = "Съешь же ещё этих мягких французских булок 42";
        assert_eq!(translate(text), text);
        assert_eq!(translate(&translate("ghbdtn vbh")), "привет мир");
    }
}
