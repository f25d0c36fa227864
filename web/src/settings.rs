use crate::theme::ThemeChoice;
use crate::utils::*;
use inundito_core as game;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum BoardSize {
    Small,
    #[default]
    Classic,
    Large,
}

impl BoardSize {
    pub(crate) const ALL: [Self; 3] = [Self::Small, Self::Classic, Self::Large];

    pub(crate) const fn size(self) -> game::Coord2 {
        use BoardSize::*;
        match self {
            Small => (8, 8),
            Classic => game::GameConfig::DEFAULT_SIZE,
            Large => (32, 32),
        }
    }

    pub(crate) const fn label(self) -> &'static str {
        use BoardSize::*;
        match self {
            Small => "8 × 8",
            Classic => "16 × 16",
            Large => "32 × 32",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum PaletteChoice {
    #[default]
    Classic,
    Bold,
}

impl PaletteChoice {
    pub(crate) const ALL: [Self; 2] = [Self::Classic, Self::Bold];

    pub(crate) fn palette(self) -> game::Palette {
        use game::Rgb;
        match self {
            Self::Classic => game::Palette::default(),
            Self::Bold => game::Palette::new(vec![
                Rgb(0xe63946),
                Rgb(0xf4a261),
                Rgb(0x2a9d8f),
                Rgb(0x457b9d),
                Rgb(0x8338ec),
                Rgb(0x1d3557),
            ])
            .unwrap_or_default(),
        }
    }

    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic (4 colors)",
            Self::Bold => "Bold (6 colors)",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub board: BoardSize,
    pub palette: PaletteChoice,
    pub theme: ThemeChoice,
}

impl Settings {
    pub(crate) fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new(self.board.size(), self.palette.palette())
    }

    /// Whether switching to `other` requires abandoning the current board.
    pub(crate) fn changes_board(&self, other: &Settings) -> bool {
        self.board != other.board || self.palette != other.palette
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "inundito:settings:v1";
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub settings: Settings,
    pub on_apply: Callback<Settings>,
    pub on_close: Callback<()>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let settings = props.settings;

    let board_buttons = BoardSize::ALL.iter().map(|&board| {
        let on_apply = props.on_apply.clone();
        let onclick = Callback::from(move |_| on_apply.emit(Settings { board, ..settings }));
        let selected = (board == settings.board).then_some("selected");
        html! { <button class={classes!(selected)} {onclick}>{board.label()}</button> }
    });

    let palette_buttons = PaletteChoice::ALL.iter().map(|&palette| {
        let on_apply = props.on_apply.clone();
        let onclick = Callback::from(move |_| on_apply.emit(Settings { palette, ..settings }));
        let selected = (palette == settings.palette).then_some("selected");
        html! {
            <button class={classes!(selected)} {onclick}>
                { palette.label() }
                <span class="swatches">
                    {
                        for palette.palette().iter().map(|color| html! {
                            <i style={format!("background-color: {color}")}/>
                        })
                    }
                </span>
            </button>
        }
    });

    let theme_buttons = [ThemeChoice::Auto, ThemeChoice::Light, ThemeChoice::Dark]
        .into_iter()
        .map(|theme| {
            let on_apply = props.on_apply.clone();
            let onclick = Callback::from(move |_| on_apply.emit(Settings { theme, ..settings }));
            let selected = (theme == settings.theme).then_some("selected");
            html! { <button class={classes!(selected)} {onclick}>{theme.label()}</button> }
        });

    let on_close = props.on_close.clone();
    let cb_close = Callback::from(move |_| on_close.emit(()));

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <section>
                    <h3>{"Board"}</h3>
                    { for board_buttons }
                </section>
                <section>
                    <h3>{"Palette"}</h3>
                    { for palette_buttons }
                </section>
                <section>
                    <h3>{"Theme"}</h3>
                    { for theme_buttons }
                </section>
                <footer>
                    <button onclick={cb_close}>{"Close"}</button>
                </footer>
            </article>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inundito_core::Palette;

    #[test]
    fn presets_produce_valid_palettes() {
        assert_eq!(PaletteChoice::Classic.palette().len(), 4);
        assert_eq!(PaletteChoice::Bold.palette().len(), 6);
        assert!(PaletteChoice::Bold.palette() != Palette::default());
    }

    #[test]
    fn board_change_detection_ignores_theme() {
        let base = Settings::default();
        let themed = Settings {
            theme: ThemeChoice::Dark,
            ..base
        };
        let resized = Settings {
            board: BoardSize::Large,
            ..base
        };

        assert!(!base.changes_board(&themed));
        assert!(base.changes_board(&resized));
    }

    #[test]
    fn default_settings_match_the_original_game() {
        let config = Settings::default().game_config();
        assert_eq!(config.size, (16, 16));
        assert_eq!(config.palette.len(), 4);
    }
}
