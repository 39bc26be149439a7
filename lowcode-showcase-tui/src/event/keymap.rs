//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 符号键（`?`、`[`）在部分终端上带 SHIFT 修饰，比较时忽略 SHIFT
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        let modifiers = match key.code {
            KeyCode::Char(c) if !c.is_ascii_alphanumeric() => {
                key.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => key.modifiers,
        };
        modifiers == self.modifiers
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const ALT_QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 语言与主题
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const PREV_LANGUAGE: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const NEXT_LANGUAGE: KeyBinding = KeyBinding::key(KeyCode::Char(']'));
    pub const THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));

    // 拖放
    pub const PICK_UP: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const DROP: KeyBinding = KeyBinding::key(KeyCode::Enter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_must_match_exactly() {
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let alt = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);

        assert!(DefaultKeymap::QUIT.matches(&plain));
        assert!(!DefaultKeymap::QUIT.matches(&alt));
        assert!(DefaultKeymap::ALT_QUIT.matches(&alt));
    }

    #[test]
    fn test_symbol_keys_tolerate_shift() {
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        let alt = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::ALT);
        assert!(DefaultKeymap::HELP_ALT.matches(&shifted));
        assert!(!DefaultKeymap::HELP_ALT.matches(&alt));

        let bracket = KeyEvent::new(KeyCode::Char(']'), KeyModifiers::SHIFT);
        assert!(DefaultKeymap::NEXT_LANGUAGE.matches(&bracket));
        assert!(!DefaultKeymap::PREV_LANGUAGE.matches(&bracket));

        // 字母键仍然区分 SHIFT
        let upper_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::SHIFT);
        assert!(!DefaultKeymap::QUIT.matches(&upper_q));
    }
}
