use crate::theme::{rgba, Theme};

const ACTIVE_FILTER: &str = "invert(0.35) sepia(1) saturate(3) hue-rotate(100deg)";

/// Style sheet for the player panel, parameterised by the theme tokens.
pub fn player_css(theme: &Theme) -> String {
    format!(
        r#"
.player {{
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  width: 26.5rem;
  height: 100vh;
  padding: 3rem 4rem;
  background: {purple500};
  color: {white};
}}

.player strong {{
  font-family: {lexend}, sans-serif;
  font-weight: 600;
}}

.player-header {{
  display: flex;
  align-items: center;
  gap: 16px;
}}

.player-current {{
  text-align: center;
}}

.player-current img {{
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  border-radius: 1.5rem;
}}

.player-current strong {{
  display: block;
  margin-top: 2rem;
  font: 600 1.25rem {lexend}, sans-serif;
  line-height: 1.75rem;
}}

.player-current span {{
  display: block;
  opacity: 0.6;
  margin-top: 1rem;
  line-height: 1.5rem;
}}

.player-empty {{
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 20rem;
  padding: 4rem;
  border: 1px dashed {purple300};
  border-radius: 1.5rem;
  background: linear-gradient(143.8deg, {gradient_from}, {gradient_to});
  text-align: center;
}}

.player-footer {{
  align-self: stretch;
}}

.player-footer.empty {{
  opacity: 0.5;
}}

.player-progress {{
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
}}

.player-progress span {{
  display: inline-block;
  width: 4rem;
  text-align: center;
}}

.player-slider {{
  flex: 1;
}}

.player-slider input {{
  width: 100%;
  accent-color: {green500};
}}

.player-slider-empty {{
  width: 100%;
  height: 4px;
  border-radius: 2px;
  background: {purple300};
}}

.player-buttons {{
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  margin-top: 2.5rem;
}}

.player-buttons button {{
  border: 0;
  background: transparent;
  font-size: 0;
  transition: filter 0.2s;
}}

.player-buttons button:disabled {{
  cursor: default;
  opacity: 0.5;
}}

.player-buttons button:hover:not(:disabled) {{
  filter: brightness(0.7);
}}

.player-buttons button.active {{
  filter: {active};
}}

.player-buttons button.active:hover {{
  filter: brightness(0.6) {active};
}}

.player-buttons button.play {{
  width: 4rem;
  height: 4rem;
  border-radius: 1rem;
  background: {purple400};
}}

.player-buttons button.play:hover:not(:disabled) {{
  filter: brightness(0.95);
}}
"#,
        purple300 = theme.purple300,
        purple400 = theme.purple400,
        purple500 = theme.purple500,
        green500 = theme.green500,
        white = theme.white,
        lexend = theme.fonts.lexend,
        gradient_from = rgba(theme.purple400, 0.8),
        gradient_to = rgba(theme.black, 0.0),
        active = ACTIVE_FILTER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::LIGHT;

    #[test]
    fn player_css_uses_theme_tokens() {
        let css = player_css(&LIGHT);
        assert!(css.contains("background: #8257E5;"));
        assert!(css.contains("accent-color: #04D361;"));
        assert!(css.contains("rgba(145, 100, 250, 0.8), rgba(0, 0, 0, 0)"));
        assert!(css.contains("font-family: Lexend, sans-serif;"));
    }
}
