use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Strict slugification.
///
/// Currency and a few other symbols are spelled out in place (`&` becomes
/// `and`, `$500` becomes `dollar500`). Any other punctuation is dropped
/// outright ("Don't" becomes `dont`, not `don-t`); whitespace, `-` and `_`
/// separate words. What remains goes through [`slug::slugify`], which
/// transliterates non-ASCII letters, lowercases and collapses separators into
/// single hyphens.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl DefaultSlugGenerator {
    fn keep(c: char) -> bool {
        c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '_'
    }

    fn symbol_word(c: char) -> Option<&'static str> {
        let word = match c {
            '&' => "and",
            '|' => "or",
            '<' => "less",
            '>' => "greater",
            '$' => "dollar",
            '%' => "percent",
            '¢' => "cent",
            '£' => "pound",
            '¤' => "currency",
            '¥' => "yen",
            '©' => "c",
            '®' => "r",
            '€' => "euro",
            '₹' => "indian rupee",
            '₽' => "russian ruble",
            '₩' => "won",
            '₺' => "turkish lira",
            '₿' => "bitcoin",
            '∑' => "sum",
            '∞' => "infinity",
            '♥' => "love",
            _ => return None,
        };
        Some(word)
    }
}

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut prepared = String::with_capacity(input.len());
        for c in input.chars() {
            if let Some(word) = Self::symbol_word(c) {
                prepared.push_str(word);
            } else if Self::keep(c) {
                prepared.push(c);
            }
        }
        slugify(prepared)
    }
}
