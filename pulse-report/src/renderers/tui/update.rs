use super::app::{FeedbackType, Field, TuiApp};
use super::msg::UiMsg;
use crate::dashboard::{DashboardState, Msg};

/// Longest value a date field accepts (`YYYY-MM-DD`)
const MAX_DATE_LEN: usize = 10;

/// Side effects produced by the reducer. The main loop should execute them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Forward to the dashboard controller
    Dispatch(Msg),
    SaveSnapshot,
    Quit,
}

pub fn update(app: &mut TuiApp, state: &DashboardState, msg: UiMsg) -> Effect {
    match msg {
        UiMsg::Quit => Effect::Quit,
        UiMsg::FocusNext => {
            app.focus = app.focus.next();
            Effect::None
        }
        UiMsg::FocusPrev => {
            app.focus = app.focus.previous();
            Effect::None
        }
        UiMsg::Type(c) => edit_date(app.focus, state, |date| {
            if (c.is_ascii_digit() || c == '-') && date.len() < MAX_DATE_LEN {
                date.push(c);
            }
        }),
        UiMsg::Backspace => edit_date(app.focus, state, |date| {
            date.pop();
        }),
        UiMsg::NextStream if app.focus == Field::Stream => {
            Effect::Dispatch(Msg::SelectStream(state.selected_stream.next()))
        }
        UiMsg::PrevStream if app.focus == Field::Stream => {
            Effect::Dispatch(Msg::SelectStream(state.selected_stream.previous()))
        }
        UiMsg::NextStream | UiMsg::PrevStream => Effect::None,
        UiMsg::Activate => match app.focus {
            Field::Action(kind) if state.is_enabled(kind) => {
                app.output_scroll = 0;
                Effect::Dispatch(Msg::Generate(kind))
            }
            Field::Action(kind) => {
                app.show_feedback(
                    format!("{} is unavailable while a report is loading", kind.button_label()),
                    FeedbackType::Warning,
                );
                Effect::None
            }
            Field::Stream => Effect::Dispatch(Msg::SelectStream(state.selected_stream.next())),
            Field::FromDate | Field::ToDate => {
                app.focus = app.focus.next();
                Effect::None
            }
        },
        UiMsg::ScrollUp => {
            app.output_scroll = app.output_scroll.saturating_sub(1);
            Effect::None
        }
        UiMsg::ScrollDown => {
            app.output_scroll = app.output_scroll.saturating_add(1);
            Effect::None
        }
        UiMsg::SaveSnapshot => Effect::SaveSnapshot,
    }
}

fn edit_date(focus: Field, state: &DashboardState, edit: impl FnOnce(&mut String)) -> Effect {
    match focus {
        Field::FromDate => {
            let mut date = state.from_date.clone();
            edit(&mut date);
            changed(&state.from_date, date, Msg::SetFromDate)
        }
        Field::ToDate => {
            let mut date = state.to_date.clone();
            edit(&mut date);
            changed(&state.to_date, date, Msg::SetToDate)
        }
        _ => Effect::None,
    }
}

fn changed(current: &str, date: String, msg: fn(String) -> Msg) -> Effect {
    if date == current {
        Effect::None
    } else {
        Effect::Dispatch(msg(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReportKind, Stream};
    use std::path::PathBuf;

    fn app() -> TuiApp {
        TuiApp::new(PathBuf::from("pulse.html"))
    }

    #[test]
    fn test_typing_edits_focused_date() {
        let mut app = app();
        let mut state = DashboardState::new();
        state.from_date = "2024-01-0".to_string();

        let effect = update(&mut app, &state, UiMsg::Type('5'));
        assert_eq!(effect, Effect::Dispatch(Msg::SetFromDate("2024-01-05".to_string())));

        state.from_date = "2024-01-05".to_string();
        assert_eq!(update(&mut app, &state, UiMsg::Type('9')), Effect::None);
        assert_eq!(update(&mut app, &state, UiMsg::Type('x')), Effect::None);

        app.focus = Field::ToDate;
        state.to_date = "2024".to_string();
        assert_eq!(
            update(&mut app, &state, UiMsg::Backspace),
            Effect::Dispatch(Msg::SetToDate("202".to_string()))
        );
    }

    #[test]
    fn test_arrows_cycle_stream_only_when_focused() {
        let mut app = app();
        let state = DashboardState::new();

        assert_eq!(update(&mut app, &state, UiMsg::NextStream), Effect::None);

        app.focus = Field::Stream;
        assert_eq!(
            update(&mut app, &state, UiMsg::NextStream),
            Effect::Dispatch(Msg::SelectStream(Stream::IdentityTrust))
        );
        assert_eq!(
            update(&mut app, &state, UiMsg::PrevStream),
            Effect::Dispatch(Msg::SelectStream(Stream::Aic))
        );
    }

    #[test]
    fn test_enter_on_button_generates_report() {
        let mut app = app();
        let mut state = DashboardState::new();
        app.focus = Field::Action(ReportKind::Risk);
        app.output_scroll = 4;

        assert_eq!(
            update(&mut app, &state, UiMsg::Activate),
            Effect::Dispatch(Msg::Generate(ReportKind::Risk))
        );
        assert_eq!(app.output_scroll, 0);

        state.is_loading = true;
        app.focus = Field::Action(ReportKind::Holidays);
        assert_eq!(update(&mut app, &state, UiMsg::Activate), Effect::None);
        assert!(app.action_feedback.is_some());
    }

    #[test]
    fn test_save_and_quit() {
        let mut app = app();
        let state = DashboardState::new();
        assert_eq!(update(&mut app, &state, UiMsg::SaveSnapshot), Effect::SaveSnapshot);
        assert_eq!(update(&mut app, &state, UiMsg::Quit), Effect::Quit);
    }
}
