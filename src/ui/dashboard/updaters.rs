//! Dashboard state update logic
//!
//! Per-tick updates and key handling

use super::state::{DashboardState, KeyAction};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl DashboardState {
    /// Advance the animation tick and apply any finished load cycles.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            self.controller.apply(outcome);
        }
    }

    /// Handle a single key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('c') if ctrl => return KeyAction::Quit,
            KeyCode::Char('r') if ctrl => {
                self.controller.retry();
            }
            KeyCode::F(5) => {
                self.controller.retry();
            }
            KeyCode::Enter => {
                if self.controller.submit_location(&self.input) {
                    self.input.clear();
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }
        KeyAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{DashboardController, DashboardView, LoadOutcome};
    use crate::ui::app::UIConfig;
    use crate::weather::error::ProviderError;
    use crate::weather::{SimulatedProvider, WeatherProvider};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn dashboard(
        provider: Arc<dyn WeatherProvider>,
    ) -> (DashboardState, mpsc::Sender<LoadOutcome>) {
        let (sender, receiver) = mpsc::channel(8);
        let controller = DashboardController::new(
            "New York".to_string(),
            provider,
            Duration::from_secs(1),
            sender.clone(),
        );
        let state = DashboardState::new(controller, receiver, UIConfig::new(false));
        (state, sender)
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> KeyAction {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_edits_the_input_field() {
        let (mut state, _sender) = dashboard(Arc::new(SimulatedProvider::new(Duration::ZERO, 0.0)));
        type_text(&mut state, "Osloo");
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.input, "Oslo");
    }

    #[test]
    fn enter_with_blank_input_keeps_location() {
        let (mut state, _sender) = dashboard(Arc::new(SimulatedProvider::new(Duration::ZERO, 0.0)));
        type_text(&mut state, "   ");
        assert_eq!(press(&mut state, KeyCode::Enter), KeyAction::Continue);
        assert_eq!(state.controller.location(), "New York");
        assert_eq!(state.controller.cycle(), 0);
        assert_eq!(state.input, "   ");
    }

    #[tokio::test]
    async fn enter_submits_and_update_applies_outcome() {
        let (mut state, _sender) = dashboard(Arc::new(SimulatedProvider::new(Duration::ZERO, 0.0)));
        type_text(&mut state, "  Paris  ");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.controller.location(), "Paris");
        assert!(state.input.is_empty());
        assert!(state.controller.view().is_loading());

        for _ in 0..100 {
            state.update();
            if !state.controller.view().is_loading() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(matches!(
            state.controller.view(),
            DashboardView::Display(report) if report.current.location == "Paris"
        ));
    }

    #[tokio::test]
    async fn ctrl_r_retries_after_failure() {
        let (mut state, sender) = dashboard(Arc::new(SimulatedProvider::new(Duration::ZERO, 1.0)));
        sender
            .send(LoadOutcome {
                cycle: 0,
                location: "New York".to_string(),
                result: Err(ProviderError::Unavailable {
                    location: "New York".to_string(),
                }),
            })
            .await
            .unwrap();
        state.update();
        assert!(matches!(state.controller.view(), DashboardView::Error(_)));

        state.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(state.controller.view().is_loading());
        assert_eq!(state.controller.cycle(), 1);
        assert!(state.input.is_empty());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let (mut state, _sender) = dashboard(Arc::new(SimulatedProvider::new(Duration::ZERO, 0.0)));
        assert_eq!(press(&mut state, KeyCode::Esc), KeyAction::Quit);
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        // Plain 'q' is just text.
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyAction::Continue);
        assert_eq!(state.input, "q");
    }
}
