use gpui::*;

#[derive(Clone, Debug)]
pub struct GridTheme {
    pub cell_background: Hsla,
    pub cell_text: Hsla,
    pub cell_text_size: Pixels,
    pub accent: Hsla,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            cell_background: gpui::white().alpha(0.06),
            cell_text: gpui::white().alpha(0.8),
            cell_text_size: px(12.0),
            accent: gpui::blue(),
        }
    }
}
