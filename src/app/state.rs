use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::{error, warn};

use crate::api::{ApiEvent, Request};
use crate::color;
use crate::types::SavedPalette;

use super::{AppEvent, AppView};

/// How long a toast stays on screen. A newer toast restarts the clock.
const TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Default file name for palette exports.
const EXPORT_PATH: &str = "palette.png";

/// Single-slot transient notification.
struct Toast {
    text: String,
    deadline: Instant,
}

/// The top-level application state. Every slot is mutated only on the UI
/// thread; store results arrive over `api_events` and are drained each tick.
pub struct App {
    pub running: bool,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub palette: Vec<String>,
    pub saved_palettes: Vec<SavedPalette>,
    pub name_input: String,
    pub name_input_active: bool,
    pub loading: bool,
    pub error: Option<String>,
    toast: Option<Toast>,
    pub selected_color_index: usize,
    pub selected_saved_index: usize,
    pub selected_saved_color_index: usize,
    requests: Sender<Request>,
    api_events: Receiver<ApiEvent>,
}

impl App {
    /// Build the initial state: a fresh working palette and a list fetch
    /// already in flight, mirroring the first render of the workspace.
    pub fn new(requests: Sender<Request>, api_events: Receiver<ApiEvent>) -> Self {
        let mut app = Self {
            running: true,
            view: AppView::Workspace,
            view_history: Vec::new(),
            palette: color::generate_palette(),
            saved_palettes: Vec::new(),
            name_input: String::new(),
            name_input_active: false,
            loading: false,
            error: None,
            toast: None,
            selected_color_index: 0,
            selected_saved_index: 0,
            selected_saved_color_index: 0,
            requests,
            api_events,
        };
        app.fetch_saved_palettes();
        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                self.drain_api_events();
                self.expire_toast();
            }
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.name_input_active {
            self.handle_name_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('g') => self.generate(),
            KeyCode::Char('n') => {
                self.navigate_to(AppView::Workspace);
                self.name_input_active = true;
            }
            KeyCode::Char('s') => self.save_palette(),
            KeyCode::Char('e') => self.export_palette(Path::new(EXPORT_PATH)),
            KeyCode::Char('c') => self.copy_selected_color(),
            KeyCode::Char('r') => self.fetch_saved_palettes(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.view == AppView::Saved {
                    self.delete_selected_palette();
                }
            }
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Tab => match self.view {
                AppView::Workspace => self.navigate_to(AppView::Saved),
                AppView::Saved => self.navigate_to(AppView::Workspace),
                AppView::Help => {}
            },
            KeyCode::Esc => self.go_back(),
            KeyCode::Left => self.select_prev_color(),
            KeyCode::Right => self.select_next_color(),
            KeyCode::Up => {
                if self.view == AppView::Saved {
                    self.selected_saved_index = self.selected_saved_index.saturating_sub(1);
                    self.clamp_saved_color_selection();
                }
            }
            KeyCode::Down => {
                if self.view == AppView::Saved && !self.saved_palettes.is_empty() {
                    self.selected_saved_index =
                        (self.selected_saved_index + 1).min(self.saved_palettes.len() - 1);
                    self.clamp_saved_color_selection();
                }
            }
            _ => {}
        }
    }

    fn handle_name_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.save_palette(),
            KeyCode::Esc => self.name_input_active = false,
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Char(c) => self.name_input.push(c),
            _ => {}
        }
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view);
            self.view = view;
        }
    }

    fn go_back(&mut self) {
        if let Some(view) = self.view_history.pop() {
            self.view = view;
        }
    }

    /// Replace the working palette wholesale with five fresh draws.
    pub fn generate(&mut self) {
        self.palette = color::generate_palette();
        self.selected_color_index = 0;
    }

    /// Kick off a save of the working palette. The name must be non-empty
    /// after trimming; nothing else is validated client-side. The input is
    /// only cleared once the store confirms the exchange completed.
    pub fn save_palette(&mut self) {
        let name = self.name_input.trim().to_string();
        if name.is_empty() {
            self.show_toast("Enter palette name first");
            return;
        }
        self.send_request(Request::Create {
            name,
            colors: self.palette.clone(),
        });
    }

    /// Fire a list fetch. The previous saved list stays visible until the
    /// result arrives; a new fetch resets the persistent error slot.
    pub fn fetch_saved_palettes(&mut self) {
        self.loading = true;
        self.error = None;
        self.send_request(Request::List);
    }

    fn delete_selected_palette(&mut self) {
        let Some(palette) = self.saved_palettes.get(self.selected_saved_index) else {
            return;
        };
        self.send_request(Request::Delete {
            id: palette.id.clone(),
        });
    }

    fn copy_selected_color(&mut self) {
        let color = match self.view {
            AppView::Saved => self
                .saved_palettes
                .get(self.selected_saved_index)
                .and_then(|p| p.colors.get(self.selected_saved_color_index)),
            _ => self.palette.get(self.selected_color_index),
        };
        if let Some(color) = color.cloned() {
            self.copy_color(color);
        }
    }

    /// Write a color to the system clipboard. Clipboard errors are logged,
    /// never surfaced; the toast is raised regardless.
    pub fn copy_color(&mut self, color: String) {
        if let Err(err) = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(color.clone())) {
            warn!("clipboard write failed: {err}");
        }
        self.show_toast(format!("Copied {color}"));
    }

    /// Rasterize the working palette to a PNG. Unlike the save/delete paths
    /// this is local I/O, so failures surface immediately.
    pub fn export_palette(&mut self, path: &Path) {
        match crate::export::write_png(&self.palette, path) {
            Ok(()) => self.show_toast(format!("Exported {}", path.display())),
            Err(err) => {
                error!("palette export failed: {err:#}");
                self.show_toast("Export failed");
            }
        }
    }

    fn select_prev_color(&mut self) {
        match self.view {
            AppView::Saved => {
                self.selected_saved_color_index = self.selected_saved_color_index.saturating_sub(1);
            }
            _ => self.selected_color_index = self.selected_color_index.saturating_sub(1),
        }
    }

    fn select_next_color(&mut self) {
        match self.view {
            AppView::Saved => {
                let len = self
                    .saved_palettes
                    .get(self.selected_saved_index)
                    .map(|p| p.colors.len())
                    .unwrap_or(0);
                if len > 0 {
                    self.selected_saved_color_index =
                        (self.selected_saved_color_index + 1).min(len - 1);
                }
            }
            _ => {
                self.selected_color_index =
                    (self.selected_color_index + 1).min(self.palette.len().saturating_sub(1));
            }
        }
    }

    fn clamp_saved_color_selection(&mut self) {
        let len = self
            .saved_palettes
            .get(self.selected_saved_index)
            .map(|p| p.colors.len())
            .unwrap_or(0);
        self.selected_saved_color_index = self.selected_saved_color_index.min(len.saturating_sub(1));
    }

    fn send_request(&self, request: Request) {
        if self.requests.send(request).is_err() {
            error!("palette store worker is gone, dropping request");
        }
    }

    fn drain_api_events(&mut self) {
        while let Ok(event) = self.api_events.try_recv() {
            self.apply_api_event(event);
        }
    }

    /// Apply one store completion. List failures land in the persistent
    /// error slot, save failures in a toast, delete failures only in the
    /// diagnostic log; the asymmetry is deliberate.
    fn apply_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Listed(Ok(palettes)) => {
                self.saved_palettes = palettes;
                self.loading = false;
                self.selected_saved_index = self
                    .selected_saved_index
                    .min(self.saved_palettes.len().saturating_sub(1));
                self.clamp_saved_color_selection();
            }
            ApiEvent::Listed(Err(err)) => {
                self.error = Some(err.to_string());
                self.loading = false;
            }
            ApiEvent::Saved(Ok(())) => {
                self.name_input.clear();
                self.name_input_active = false;
                self.show_toast("Palette saved");
                self.fetch_saved_palettes();
            }
            ApiEvent::Saved(Err(_)) => self.show_toast("Failed to save palette"),
            ApiEvent::Deleted { id, result } => {
                if let Err(err) = result {
                    error!("failed to delete palette {id}: {err}");
                }
                self.fetch_saved_palettes();
            }
        }
    }

    /// Raise a toast. Last write wins on both text and timer.
    pub fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some(Toast {
            text: text.into(),
            deadline: Instant::now() + TOAST_DURATION,
        });
    }

    pub fn toast_text(&self) -> Option<&str> {
        self.toast.as_ref().map(|t| t.text.as_str())
    }

    fn expire_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.deadline <= Instant::now() {
                self.toast = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver, Sender};

    use super::*;
    use crate::api::StoreError;
    use crate::types::PaletteId;

    /// Build an app wired to loopback channels instead of a live worker, so
    /// tests can inspect emitted requests and inject completions.
    fn test_app() -> (App, Receiver<Request>, Sender<ApiEvent>) {
        let (request_tx, request_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let app = App::new(request_tx, event_rx);
        // Constructing the app fires the initial list fetch.
        assert_eq!(request_rx.recv().unwrap(), Request::List);
        (app, request_rx, event_tx)
    }

    fn spec_palette() -> Vec<String> {
        ["#aabbcc", "#112233", "#445566", "#778899", "#ffffff"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    fn saved(id: u64, name: &str) -> SavedPalette {
        SavedPalette {
            id: PaletteId::Num(id),
            name: name.to_string(),
            colors: spec_palette(),
        }
    }

    fn transport_failure() -> StoreError {
        StoreError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[test]
    fn starts_with_a_working_palette_and_a_list_in_flight() {
        let (app, _requests, _events) = test_app();
        assert_eq!(app.palette.len(), color::PALETTE_SIZE);
        assert!(app.loading);
        assert!(app.error.is_none());
    }

    #[test]
    fn save_with_blank_name_sends_nothing() {
        let (mut app, requests, _events) = test_app();
        app.name_input = "   ".to_string();
        app.save_palette();
        assert_eq!(app.toast_text(), Some("Enter palette name first"));
        assert!(requests.try_recv().is_err(), "no request should be issued");
    }

    #[test]
    fn save_trims_name_and_sends_working_colors() {
        let (mut app, requests, _events) = test_app();
        app.palette = spec_palette();
        app.name_input = " Sunset ".to_string();
        app.save_palette();
        assert_eq!(
            requests.recv().unwrap(),
            Request::Create {
                name: "Sunset".to_string(),
                colors: spec_palette(),
            }
        );
        // The input is only cleared once the store confirms completion.
        assert_eq!(app.name_input, " Sunset ");

        app.apply_api_event(ApiEvent::Saved(Ok(())));
        assert!(app.name_input.is_empty());
        assert_eq!(app.toast_text(), Some("Palette saved"));
        assert_eq!(requests.recv().unwrap(), Request::List, "save resyncs");
    }

    #[test]
    fn failed_save_keeps_the_name_and_raises_a_toast() {
        let (mut app, requests, _events) = test_app();
        app.name_input = "Sunset".to_string();
        app.save_palette();
        requests.recv().unwrap();

        app.apply_api_event(ApiEvent::Saved(Err(transport_failure())));
        assert_eq!(app.name_input, "Sunset");
        assert_eq!(app.toast_text(), Some("Failed to save palette"));
        assert!(requests.try_recv().is_err(), "no resync on failed save");
    }

    #[test]
    fn list_success_replaces_the_saved_list() {
        let (mut app, _requests, _events) = test_app();
        app.apply_api_event(ApiEvent::Listed(Ok(vec![saved(1, "X")])));
        assert_eq!(app.saved_palettes, vec![saved(1, "X")]);
        assert!(!app.loading);

        // The next successful fetch replaces the collection wholesale.
        app.apply_api_event(ApiEvent::Listed(Ok(vec![saved(2, "Y"), saved(3, "Z")])));
        assert_eq!(app.saved_palettes.len(), 2);
        assert_eq!(app.saved_palettes[0], saved(2, "Y"));
    }

    #[test]
    fn list_failure_keeps_prior_list_and_sets_error() {
        let (mut app, _requests, _events) = test_app();
        app.apply_api_event(ApiEvent::Listed(Ok(vec![saved(1, "X")])));

        app.fetch_saved_palettes();
        assert!(app.loading);
        app.apply_api_event(ApiEvent::Listed(Err(transport_failure())));
        assert_eq!(app.saved_palettes, vec![saved(1, "X")]);
        assert!(!app.loading);
        assert!(!app.error.as_deref().unwrap_or_default().is_empty());
    }

    #[test]
    fn refetch_clears_the_error_slot() {
        let (mut app, _requests, _events) = test_app();
        app.apply_api_event(ApiEvent::Listed(Err(transport_failure())));
        assert!(app.error.is_some());
        app.fetch_saved_palettes();
        assert!(app.error.is_none());
    }

    #[test]
    fn delete_failure_stays_silent_but_resyncs() {
        let (mut app, requests, _events) = test_app();
        app.apply_api_event(ApiEvent::Listed(Ok(vec![saved(1, "X")])));

        app.apply_api_event(ApiEvent::Deleted {
            id: PaletteId::Num(1),
            result: Err(transport_failure()),
        });
        assert!(app.error.is_none());
        assert!(app.toast_text().is_none());
        assert_eq!(requests.recv().unwrap(), Request::List);
    }

    #[test]
    fn copy_color_raises_exact_toast() {
        let (mut app, _requests, _events) = test_app();
        app.copy_color("#ff0000".to_string());
        assert_eq!(app.toast_text(), Some("Copied #ff0000"));
    }

    #[test]
    fn newer_toast_wins() {
        let (mut app, _requests, _events) = test_app();
        app.show_toast("first");
        app.show_toast("second");
        assert_eq!(app.toast_text(), Some("second"));
        // A fresh toast survives the next tick.
        app.update(AppEvent::Tick);
        assert_eq!(app.toast_text(), Some("second"));
    }

    #[test]
    fn generate_replaces_the_palette_wholesale() {
        let (mut app, _requests, _events) = test_app();
        app.palette = spec_palette();
        app.selected_color_index = 4;
        app.generate();
        assert_eq!(app.palette.len(), color::PALETTE_SIZE);
        assert_ne!(app.palette, spec_palette());
        assert_eq!(app.selected_color_index, 0);
    }

    #[test]
    fn typing_feeds_the_name_input() {
        let (mut app, requests, _events) = test_app();
        app.update(AppEvent::KeyPress(KeyCode::Char('n')));
        assert!(app.name_input_active);
        for c in "Mar s".chars() {
            app.update(AppEvent::KeyPress(KeyCode::Char(c)));
        }
        app.update(AppEvent::KeyPress(KeyCode::Backspace));
        assert_eq!(app.name_input, "Mar ");
        // 'q' while typing goes into the buffer instead of quitting.
        app.update(AppEvent::KeyPress(KeyCode::Char('q')));
        assert!(app.running);
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        assert!(matches!(requests.recv().unwrap(), Request::Create { .. }));
    }

    #[test]
    fn delete_key_targets_the_selected_saved_palette() {
        let (mut app, requests, _events) = test_app();
        app.apply_api_event(ApiEvent::Listed(Ok(vec![saved(1, "X"), saved(2, "Y")])));
        app.update(AppEvent::KeyPress(KeyCode::Tab));
        assert_eq!(app.view, AppView::Saved);
        app.update(AppEvent::KeyPress(KeyCode::Down));
        app.update(AppEvent::KeyPress(KeyCode::Char('d')));
        assert_eq!(
            requests.recv().unwrap(),
            Request::Delete {
                id: PaletteId::Num(2)
            }
        );
    }
}
