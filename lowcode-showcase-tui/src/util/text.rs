//! 按终端显示宽度处理文本
//!
//! 天城文、泰米尔文等字符的显示宽度与 `char` 数量不一致，换行与对齐都按 `unicode-width` 计算。

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 字符串的显示宽度
pub fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// 右侧补空格到 `target` 显示宽度
pub fn pad_right(text: &str, target: usize) -> String {
    format!("{}{}", text, " ".repeat(target.saturating_sub(width(text))))
}

/// 左侧补空格到 `target` 显示宽度
pub fn pad_left(text: &str, target: usize) -> String {
    format!("{}{}", " ".repeat(target.saturating_sub(width(text))), text)
}

/// 按词换行，单词超宽时按字符截断
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = width(word);
        let needed = if current.is_empty() { word_width } else { current_width + 1 + word_width };

        if needed <= max_width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // 超长单词
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_by_words() {
        assert_eq!(
            wrap("Build applications faster with visual tools", 20),
            vec!["Build applications", "faster with visual", "tools"]
        );
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn test_pad_uses_display_width() {
        // 全角字符占两列
        assert_eq!(pad_right("界", 4), "界  ");
        assert_eq!(pad_left("80%", 5), "  80%");
        assert_eq!(pad_right("too long", 3), "too long");
    }
}
