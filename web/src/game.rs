use crate::settings::{Settings, SettingsView};
use crate::utils::*;
use chrono::prelude::*;
use clap::Args;
use gloo::timers::callback::Interval;
use inundito_core as game;
use inundito_core::GridGenerator;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap()
}

/// One game from first click to win: the core engine plus the wall-clock
/// bookkeeping the frontend shows next to the move counter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct GameSession {
    pub engine: game::PlayEngine,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    fn new(engine: game::PlayEngine) -> Self {
        Self {
            engine,
            started_at: None,
            ended_at: None,
        }
    }

    fn fresh(seed: u64, settings: &Settings) -> Self {
        let grid = game::RandomGridGenerator::new(seed).generate(settings.game_config());
        Self::new(game::PlayEngine::new(grid))
    }

    fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    /// Routes a click into the engine; only accepted moves start the clock
    /// or stop it on the winning move.
    fn select(&mut self, coords: game::Coord2, now: DateTime<Utc>) -> bool {
        let outcome = self.engine.handle_select(coords);
        if outcome.has_update() {
            if self.started_at.is_none() {
                self.started_at = Some(now);
            }
            if self.engine.is_won() && self.ended_at.is_none() {
                self.ended_at = Some(now);
            }
        }
        outcome.has_update()
    }
}

impl StorageKey for GameSession {
    const KEY: &'static str = "inundito:game:v1";
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CellMsg {
    Select(game::Coord2),
    Hover(game::Coord2),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellEvent(CellMsg),
    LeaveGrid,
    Tick,
    NewGame,
    ToggleSettings,
    UpdateSettings(Settings),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    color: game::Rgb,
    #[prop_or_default]
    dim: bool,
    callback: Callback<CellMsg>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        x,
        y,
        color,
        dim,
        callback,
    } = props.clone();

    let class = classes!("cell", dim.then_some("dim"));
    let style = format!("background-color: {color}");

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("({}, {}) click", x, y);
            callback.emit(CellMsg::Select((x, y)));
        })
    };

    let onmouseenter = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            callback.emit(CellMsg::Hover((x, y)));
        })
    };

    html! {
        <td {class} {style} {onclick} {onmouseenter}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    settings: Settings,
    session: GameSession,
    prev_time: u32,
    settings_open: bool,
    _tick_interval: Interval,
}

impl GameView {
    // Drives the per-frame step() highlight recompute and the clock.
    const TICK_MILLIS: u32 = 100;

    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(Self::TICK_MILLIS, move || link.send_message(Msg::Tick))
    }

    fn get_time(&self) -> u32 {
        self.session.elapsed_secs(utc_now())
    }

    fn new_session(&self) -> GameSession {
        GameSession::fresh(js_random_seed(), &self.settings)
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings = Settings::local_or_default();
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let session =
            GameSession::local_load().unwrap_or_else(|| GameSession::fresh(seed, &settings));

        Self {
            settings,
            session,
            prev_time: 0,
            settings_open: false,
            _tick_interval: GameView::create_timer(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use CellMsg::*;
        use Msg::*;

        match msg {
            CellEvent(Select(pos)) => {
                log::debug!("select cell: {:?}", pos);
                let updated = self.session.select(pos, utc_now());
                if updated {
                    // The flood may have merged blobs under the pointer.
                    self.session.engine.step();
                    self.session.local_save();
                }
                updated
            }
            CellEvent(Hover(pos)) => {
                let prev = self.session.engine.highlight().clone();
                self.session.engine.set_pointer(Some(pos));
                self.session.engine.step();
                prev != *self.session.engine.highlight()
            }
            LeaveGrid => {
                log::trace!("pointer left the board");
                self.session.engine.set_pointer(None);
                self.session.engine.step();
                true
            }
            Tick => {
                let prev = self.session.engine.highlight().clone();
                self.session.engine.step();
                let mut updated = prev != *self.session.engine.highlight();

                let time = self.get_time();
                if self.prev_time != time {
                    self.prev_time = time;
                    updated = true;
                }
                updated
            }
            NewGame => {
                self.session = self.new_session();
                self.session.local_save();
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            UpdateSettings(settings) => {
                if self.settings == settings {
                    return false;
                }
                if settings.theme != self.settings.theme {
                    settings.theme.apply();
                }
                let board_changed = self.settings.changes_board(&settings);
                self.settings = settings;
                self.settings.local_save();
                if board_changed {
                    self.session = self.new_session();
                    self.session.local_save();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let engine = &self.session.engine;
        let (cols, rows) = engine.size();
        let won = engine.is_won();
        let highlight = engine.highlight();
        let highlight_active = !won && !highlight.is_empty();
        let palette = engine.grid().palette();

        let moves = format_for_counter(engine.moves() as i32);
        let elapsed_time = format_for_counter(self.get_time() as i32);
        let mode_class = classes!(if won { "won" } else { "playing" });

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);
        let cb_leave = ctx.link().callback(|_: MouseEvent| LeaveGrid);
        let cb_apply = ctx.link().callback(UpdateSettings);
        let cb_close_settings = ctx.link().callback(|()| ToggleSettings);

        html! {
            <div class="inundito">
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside title="moves">{moves}</aside>
                    <span><button class={mode_class} onclick={cb_new_game}/></span>
                    <aside title="seconds">{elapsed_time}</aside>
                </nav>
                <table onmouseleave={cb_leave}>
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                {
                                    for (0..cols).map(|x| {
                                        let pos = (x, y);
                                        let color = palette
                                            .color(engine.color_at(pos))
                                            .unwrap_or(game::Rgb(0));
                                        let dim = highlight_active && !highlight.contains(&pos);
                                        let callback = ctx.link().callback(Msg::CellEvent);
                                        html! {
                                            <CellView {x} {y} {color} {dim} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                if won {
                    <aside class="banner">
                        { format!("You WIN! Score: {}", engine.moves()) }
                        <br/>
                        { "Start a new game to play again." }
                    </aside>
                }
                <SettingsView
                    open={self.settings_open}
                    settings={self.settings}
                    on_apply={cb_apply}
                    on_close={cb_close_settings}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inundito_core::{ColorGrid, Palette, PlayEngine, Rgb};

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
    }

    fn two_cell_session() -> GameSession {
        let palette = Palette::new(vec![Rgb(0x96ceb4), Rgb(0xffeead)]).unwrap();
        let grid = ColorGrid::from_color_indices((2, 1), &[0, 1], palette).unwrap();
        GameSession::new(PlayEngine::new(grid))
    }

    #[test]
    fn winning_click_records_score_and_end_time() {
        let mut session = two_cell_session();

        assert!(session.select((0, 0), t(10)));

        assert!(session.engine.is_won());
        assert_eq!(session.engine.moves(), 1);
        assert_eq!(session.started_at, Some(t(10)));
        assert_eq!(session.ended_at, Some(t(10)));
    }

    #[test]
    fn rejected_clicks_never_start_the_clock() {
        let mut session = two_cell_session();

        assert!(!session.select((9, 9), t(5)));
        assert_eq!(session.started_at, None);
        assert_eq!(session.engine.moves(), 0);
    }

    #[test]
    fn clock_stops_at_the_winning_move() {
        let mut session = two_cell_session();

        session.select((0, 0), t(3));
        assert_eq!(session.elapsed_secs(t(60)), 0);
    }

    #[test]
    fn clock_runs_while_playing() {
        let palette = Palette::default();
        let grid = ColorGrid::from_color_indices((2, 1), &[0, 2], palette).unwrap();
        let mut session = GameSession::new(PlayEngine::new(grid));

        assert_eq!(session.elapsed_secs(t(100)), 0);
        session.select((0, 0), t(100));
        assert!(!session.engine.is_won());
        assert_eq!(session.elapsed_secs(t(142)), 42);
    }

    #[test]
    fn clicks_after_the_win_leave_the_session_alone() {
        let mut session = two_cell_session();

        session.select((0, 0), t(1));
        assert!(!session.select((1, 0), t(2)));
        assert_eq!(session.engine.moves(), 1);
        assert_eq!(session.ended_at, Some(t(1)));
    }

    #[test]
    fn fresh_sessions_come_from_the_settings_seeded_generator() {
        let settings = Settings::default();
        let a = GameSession::fresh(99, &settings);
        let b = GameSession::fresh(99, &settings);

        assert_eq!(a.engine.size(), (16, 16));
        assert_eq!(a, b);
        assert!(!a.engine.is_won() || a.engine.grid().is_uniform());
    }

    #[test]
    fn storage_key_uses_versioned_namespace() {
        assert_eq!(<GameSession as StorageKey>::KEY, "inundito:game:v1");
    }
}
