use serde::{Deserialize, Serialize};

/// text settings for all plots. when `draw_text` is false, or no usable font
/// is found, plots are drawn without titles, labels or annotations.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Typography {
    pub draw_text: bool,
    /// a TrueType/OpenType font file. when unset, common system font
    /// locations are searched.
    pub font_path: Option<String>,
    pub title_size: f64,
    pub label_size: f64,
    pub annotation_size: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            draw_text: true,
            font_path: None,
            title_size: 26.0,
            label_size: 18.0,
            annotation_size: 16.0,
        }
    }
}

impl Typography {
    /// no text at all, which keeps rendering independent of installed fonts
    pub fn disabled() -> Typography {
        Typography {
            draw_text: false,
            ..Default::default()
        }
    }
}
