//! 快捷键映射

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
    /// 字符键忽略 Shift（如 `?` 在多数键盘上需要 Shift）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers - KeyModifiers::SHIFT
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Save / Load
    pub const SAVE: KeyBinding = KeyBinding::ctrl(KeyCode::Char('s'));
    pub const SAVE_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const LOAD: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));

    // 统计同步
    pub const SUBMIT: KeyBinding = KeyBinding::alt(KeyCode::Char('u'));
    pub const REFETCH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));

    // 路线编辑
    pub const EDIT_ROUTE: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const CONFIRM_ROUTE: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
    pub const TOGGLE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 分类
    pub const CLASSIFY_SINGLE_ONE_STAR: KeyBinding = KeyBinding::key(KeyCode::Char('1'));
    pub const CLASSIFY_DOUBLE_ONE_STAR: KeyBinding = KeyBinding::key(KeyCode::Char('2'));
    pub const CLASSIFY_SINGLE_TWO_STAR: KeyBinding = KeyBinding::key(KeyCode::Char('3'));
    pub const CLEAR_CLASSIFICATION: KeyBinding = KeyBinding::key(KeyCode::Char('0'));
}
