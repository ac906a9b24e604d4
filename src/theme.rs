//! Design tokens and the process-wide style sheet generated from them.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fonts {
    pub inter: &'static str,
    pub lexend: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub white: &'static str,
    pub black: &'static str,

    pub gray50: &'static str,
    pub gray100: &'static str,
    pub gray200: &'static str,
    pub gray500: &'static str,
    pub gray800: &'static str,

    pub green500: &'static str,

    pub purple300: &'static str,
    pub purple400: &'static str,
    pub purple500: &'static str,
    pub purple800: &'static str,

    pub fonts: Fonts,
}

pub const LIGHT: Theme = Theme {
    white: "#FFF",
    black: "#000",

    gray50: "#F7F8FA",
    gray100: "#E6E8EB",
    gray200: "#AFB2B1",
    gray500: "#808080",
    gray800: "#494D4B",

    green500: "#04D361",

    purple300: "#9F75FF",
    purple400: "#9164FA",
    purple500: "#8257E5",
    purple800: "#6F48C9",

    fonts: Fonts {
        inter: "Inter",
        lexend: "Lexend",
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
}

impl ThemeName {
    pub fn tokens(self) -> Theme {
        match self {
            ThemeName::Light => LIGHT,
        }
    }
}

/// Converts a `#RGB` or `#RRGGBB` colour into an `rgba(...)` expression.
/// Anything else is returned unchanged.
pub fn rgba(hex: &str, alpha: f32) -> String {
    let Some(channels) = parse_hex(hex) else {
        warn!(color = hex, "not a hex colour, leaving as-is");
        return hex.to_string();
    };
    let [r, g, b] = channels;
    format!("rgba({r}, {g}, {b}, {})", alpha.clamp(0.0, 1.0))
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(digits.chars()) {
                let nibble = c.to_digit(16)? as u8;
                *slot = nibble * 17;
            }
            Some(out)
        }
        6 => {
            let mut out = [0u8; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(out)
        }
        _ => None,
    }
}

pub fn global_css(theme: &Theme) -> String {
    format!(
        r#"
* {{
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}}

@media (max-width: 1080px) {{
  html {{
    font-size: 93.75%;
  }}
}}

@media (max-width: 720px) {{
  html {{
    font-size: 87.5%;
  }}
}}

body {{
  background: {gray50};
}}

body,
input,
textarea,
button {{
  font: 500 1rem {inter}, sans-serif;
  color: {gray500};
}}

h1 {{
  font-size: 2rem;
}}

h2 {{
  font-size: 1.5rem;
}}

button {{
  cursor: pointer;
}}
"#,
        gray50 = theme.gray50,
        gray500 = theme.gray500,
        inter = theme.fonts.inter,
    )
}

/// Installs the global reset and base typography. Render once, at the root.
#[component]
pub fn GlobalStyle(theme: Theme) -> Element {
    let css = global_css(&theme);
    rsx! {
        document::Style { "{css}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_expands_long_and_short_hex() {
        assert_eq!(rgba("#9164FA", 0.8), "rgba(145, 100, 250, 0.8)");
        assert_eq!(rgba("#000", 0.0), "rgba(0, 0, 0, 0)");
        assert_eq!(rgba("#FFF", 1.0), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn rgba_leaves_unknown_colours_alone() {
        assert_eq!(rgba("purple", 0.5), "purple");
        assert_eq!(rgba("#12345", 0.5), "#12345");
        assert_eq!(rgba("#GGGGGG", 0.5), "#GGGGGG");
    }

    #[test]
    fn global_css_reads_tokens() {
        let css = global_css(&LIGHT);
        assert!(css.contains("background: #F7F8FA;"));
        assert!(css.contains("color: #808080;"));
        assert!(css.contains("font-size: 93.75%;"));
        assert!(css.contains("font-size: 87.5%;"));
    }

    #[test]
    fn theme_name_resolves_tokens() {
        let name: ThemeName = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(name.tokens(), LIGHT);
    }
}
