//! Display formatting for storefront values

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Currency presentation for prices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub currency_symbol: String,
    pub thousands_separator: String,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "¥".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

impl PriceFormat {
    /// Render `amount` with the currency symbol and grouped digits,
    /// e.g. `15000` -> `¥15,000`.
    pub fn format(&self, amount: u64) -> String {
        format!(
            "{}{}",
            self.currency_symbol,
            group_digits(amount, &self.thousands_separator)
        )
    }
}

/// Insert `separator` between every group of three digits
pub fn group_digits(amount: u64, separator: &str) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}

/// Cut `text` to at most `max_chars` characters, ending in an ellipsis when cut.
///
/// Counts chars, not bytes, so multi-byte text is never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Cut `text` to fit in `max_cells` terminal cells, ending in an ellipsis when cut.
///
/// Wide characters (CJK) take two cells each.
pub fn truncate_width(text: &str, max_cells: usize) -> String {
    if text.width() <= max_cells {
        return text.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }

    let budget = max_cells - '…'.width().unwrap_or(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
