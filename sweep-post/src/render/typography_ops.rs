use crate::config::Typography;
use plotters::style::{register_font, FontDesc, FontFamily, FontStyle};
use std::{path::Path, sync::OnceLock};

/// places a sans-serif font is commonly installed
const SYSTEM_FONT_CANDIDATES: [&str; 8] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// true if plots should draw text. the first call with text enabled registers
/// the sans-serif font with plotters; when no font can be loaded text is
/// disabled for the rest of the process.
pub fn text_enabled(typography: &Typography) -> bool {
    if !typography.draw_text {
        return false;
    }
    *FONT_REGISTERED.get_or_init(|| register_sans_serif(typography.font_path.as_deref()))
}

/// the registered sans-serif font at `size`
pub fn font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

fn register_sans_serif(font_path: Option<&str>) -> bool {
    let candidates = font_path
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().copied());
    for candidate in candidates {
        let path = Path::new(candidate);
        if !path.is_file() {
            continue;
        }
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("failed reading font '{candidate}': {e}");
                continue;
            }
        };
        // plotters keeps registered fonts for the life of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match register_font("sans-serif", FontStyle::Normal, bytes) {
            Ok(_) => {
                log::debug!("registered plot font '{candidate}'");
                return true;
            }
            Err(_) => log::warn!("font '{candidate}' is not a usable TrueType/OpenType font"),
        }
    }
    log::warn!("no usable font found, plots will be drawn without text");
    false
}
