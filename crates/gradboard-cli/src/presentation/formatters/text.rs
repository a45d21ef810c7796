use gradboard_engine::Tone;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Terminal columns taken by `text`; CJK and fullwidth forms count double
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(ch: char) -> usize {
    let cp = ch as u32;
    let wide = matches!(cp,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F
        | 0x1F900..=0x1F9FF
        | 0x20000..=0x2FFFD
        | 0x30000..=0x3FFFD);
    if wide { 2 } else { 1 }
}

/// Cut `text` to at most `max_width` columns, marking the cut with `…`
pub fn truncate(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate or right-pad to exactly `width` columns
pub fn pad(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(display_width(&cut));
    format!("{}{}", cut, " ".repeat(fill))
}

/// Colour only when stdout is a terminal and NO_COLOR is unset
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn paint(text: &str, tone: Tone) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    match tone {
        Tone::Danger => text.red().to_string(),
        Tone::Warning => text.yellow().to_string(),
        Tone::Info => text.cyan().to_string(),
        Tone::Primary => text.blue().to_string(),
        Tone::Secondary => text.dimmed().to_string(),
    }
}

pub fn dim(text: &str) -> String {
    if colors_enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_counts_double() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("北京大学"), 8);
        assert_eq!(display_width("A区"), 3);
    }

    #[test]
    fn test_pad_and_truncate() {
        assert_eq!(pad("北京", 6), "北京  ");
        assert_eq!(truncate("北京大学", 5), "北京…");
        assert_eq!(display_width(&pad("北京大学计算机", 7)), 7);
        assert_eq!(pad("abc", 3), "abc");
    }
}
