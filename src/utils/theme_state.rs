#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn label(&self) -> &'static str {
        if self.is_dark {
            "🌞"
        } else {
            "🌙"
        }
    }
}
