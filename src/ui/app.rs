//! Main TUI application state and logic

use crate::config::VisualizerConfig;
use crate::error::OpError;
use crate::history::StepHistory;
use crate::narrator::{
    Algorithm, AnimationSpeed, CancelToken, SortSteps, SpeedControl, StepEvent, StepKind,
    TerminalOutcome,
};
use crate::ops::{self, parse_value, Action, Effect, StructureKind};
use crate::sequence::{RunTicket, Sequence, SequenceStore};
use crate::ui::panes::{
    render_info_pane, render_narration_pane, render_status_bar, render_structure_pane,
    InfoRenderData, NarrationRenderData, PlaybackState, StatusRenderData, StructureRenderData,
};
use crate::ui::theme::ThemeMode;
use crate::ui::view::{FrameView, Highlights};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Tabs},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Speed change per `[` / `]` press
const SPEED_STEP: u8 = 5;

/// Longest accepted value input, sign included
const MAX_INPUT_LEN: usize = 12;

/// A transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    shown_at: Instant,
}

/// A sort in flight; owns the store's run ticket until it ends
struct SortSession {
    steps: SortSteps,
    ticket: RunTicket,
    cancel: CancelToken,
    paused: bool,
    last_step: Option<Instant>,
}

/// The main application state
pub struct App {
    config: VisualizerConfig,

    /// Active structure view
    structure: StructureKind,

    /// Authoritative sequence of the active structure
    store: SequenceStore,

    /// Value typed by the user
    pub input: String,

    pub theme: ThemeMode,

    speed: SpeedControl,

    session: Option<SortSession>,

    /// Most recent sort step, shown until the next operation
    current_step: Option<StepEvent>,

    /// Steps of the current or last sort
    history: Option<StepHistory>,

    /// Whether ←/→ are browsing `history`
    reviewing: bool,

    message: Option<StatusMessage>,

    /// Found/peeked positions from the last operation
    marks: Highlights,

    /// Sequence before the last change, for identity-matched transitions
    previous: Option<Sequence>,

    rng: StdRng,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: VisualizerConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an app whose shuffles come from `rng`
    pub fn with_rng(config: VisualizerConfig, rng: StdRng) -> Self {
        let structure = config.structure;
        let store = SequenceStore::new(config.seeds.sequence(structure));
        let speed = SpeedControl::new(config.speed);
        App {
            config,
            structure,
            store,
            input: String::new(),
            theme: ThemeMode::default(),
            speed,
            session: None,
            current_step: None,
            history: None,
            reviewing: false,
            message: None,
            marks: Highlights::default(),
            previous: None,
            rng,
            should_quit: false,
        }
    }

    pub fn structure(&self) -> StructureKind {
        self.structure
    }

    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed.get()
    }

    pub fn is_sorting(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.paused)
    }

    pub fn is_reviewing(&self) -> bool {
        self.reviewing
    }

    pub fn history(&self) -> Option<&StepHistory> {
        self.history.as_ref()
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// The step whose state is on screen
    pub fn displayed_step(&self) -> Option<&StepEvent> {
        if self.reviewing {
            self.history.as_ref().and_then(|h| h.current())
        } else {
            self.current_step.as_ref()
        }
    }

    /// The sequence on screen
    pub fn displayed_sequence(&self) -> &Sequence {
        match self.displayed_step() {
            Some(step) if self.reviewing => &step.snapshot,
            _ => self.store.current(),
        }
    }

    pub fn frame_view(&self) -> FrameView {
        let highlights = self
            .displayed_step()
            .map(Highlights::from_step)
            .unwrap_or_else(|| self.marks.clone());
        let previous = if self.reviewing {
            self.history.as_ref().and_then(|h| {
                h.position()
                    .checked_sub(1)
                    .and_then(|i| h.get(i))
                    .map(|step| &step.snapshot)
            })
        } else {
            self.previous.as_ref()
        };
        FrameView::build(self.displayed_sequence(), previous, &highlights)
    }

    pub fn playback_state(&self) -> PlaybackState {
        match &self.session {
            Some(session) if session.paused => PlaybackState::Paused,
            Some(_) => PlaybackState::Playing,
            None if self.reviewing => PlaybackState::Reviewing,
            None => PlaybackState::Idle,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Short poll so playback keeps moving without input
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        if let Some(session) = &self.session {
            session.cancel.cancel();
        }
        self.tick(Instant::now());
        Ok(())
    }

    /// Advance time: expire messages and play the next sort step when due
    pub fn tick(&mut self, now: Instant) {
        self.expire_message(now);

        let delay = self.config.pacing.delay(self.speed.get());
        let Some(session) = self.session.as_ref() else {
            return;
        };

        if session.cancel.is_cancelled() {
            self.finish_sort(true);
            return;
        }
        if session.paused {
            return;
        }
        if let Some(last) = session.last_step {
            if now.saturating_duration_since(last) < delay {
                return;
            }
        }

        self.advance_sort(now);
    }

    /// Play exactly one step of the running sort
    fn advance_sort(&mut self, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(step) = session.steps.next() else {
            self.finish_sort(false);
            return;
        };
        session.last_step = Some(now);

        let before = self.store.current().clone();
        if let Err(err) = self.store.publish(&session.ticket, step.snapshot.clone()) {
            tracing::warn!(%err, "failed to publish sort step");
        }
        self.previous = Some(before);

        tracing::trace!(step = step.kind.label(), narration = %step.narration);
        if let Some(history) = self.history.as_mut() {
            if let Err(err) = history.push(step.clone()) {
                tracing::debug!(%err, "step history full");
            }
        }

        let complete = step.kind == StepKind::SortComplete;
        self.current_step = Some(step);
        if complete {
            self.finish_sort(false);
        }
    }

    fn finish_sort(&mut self, cancelled: bool) {
        let Some(session) = self.session.take() else {
            return;
        };
        let algorithm = session.steps.algorithm();
        let steps = session.steps.emitted();
        let sequence = session.steps.snapshot();
        let outcome = if cancelled {
            TerminalOutcome::Cancelled { sequence, steps }
        } else {
            TerminalOutcome::Completed { sequence, steps }
        };

        if let Err(err) = self
            .store
            .publish(&session.ticket, outcome.sequence().clone())
            .and_then(|()| self.store.finish_run(session.ticket))
        {
            tracing::warn!(%err, "failed to release sort run");
        }

        if outcome.is_cancelled() {
            tracing::info!(%algorithm, steps, "sort cancelled");
            self.flash(
                format!("{} cancelled after {} steps", algorithm, outcome.steps()),
                false,
            );
        } else {
            tracing::info!(%algorithm, steps, "sort complete");
            self.flash(
                format!("{} complete in {} steps", algorithm, outcome.steps()),
                false,
            );
        }
    }

    fn start_sort(&mut self, algorithm: Algorithm) {
        if !self.structure.supports_sorting() {
            return;
        }
        let ticket = match self.store.begin_run() {
            Ok(ticket) => ticket,
            Err(err) => {
                self.flash(OpError::from(err).to_string(), true);
                return;
            }
        };

        tracing::info!(%algorithm, len = self.store.current().len(), "starting sort");
        self.reviewing = false;
        self.marks = Highlights::default();
        self.current_step = None;
        self.history = Some(StepHistory::new(self.config.history_limit_bytes));
        self.session = Some(SortSession {
            steps: SortSteps::new(self.store.current().clone(), algorithm),
            ticket,
            cancel: CancelToken::new(),
            paused: false,
            last_step: None,
        });
        self.flash(format!("Running {}...", algorithm), false);
    }

    /// Switch to another structure, starting from its seed
    pub fn select_structure(&mut self, kind: StructureKind) {
        if self.is_sorting() {
            self.flash(OpError::Busy.to_string(), true);
            return;
        }
        tracing::info!(structure = kind.title(), "switching structure");
        self.structure = kind;
        self.store = SequenceStore::new(self.config.seeds.sequence(kind));
        self.input.clear();
        self.current_step = None;
        self.history = None;
        self.reviewing = false;
        self.marks = Highlights::default();
        self.previous = None;
        self.message = None;
    }

    /// Apply a structure operation to the store
    pub fn perform(&mut self, action: Action) {
        if !self.structure.supports(&action) {
            return;
        }
        if self.store.is_running() {
            self.flash(OpError::Busy.to_string(), true);
            return;
        }

        self.reviewing = false;
        self.current_step = None;
        self.marks = Highlights::default();

        let (next, result) = ops::apply(
            self.structure,
            self.store.current(),
            self.store.seed(),
            action,
            &mut self.rng,
        );

        match &result {
            Ok(Effect::Found { index, .. }) => self.marks.found = Some(*index),
            Ok(Effect::Peeked { index, .. }) => self.marks.peeked = Some(*index),
            _ => {}
        }

        if result.is_ok() && action.is_mutating() {
            match self.store.replace(next) {
                Ok(previous) => self.previous = Some(previous),
                Err(err) => {
                    self.flash(OpError::from(err).to_string(), true);
                    return;
                }
            }
            // Recorded steps no longer describe the store
            self.history = None;
            if matches!(action, Action::PushBack(_) | Action::PushFront(_)) {
                self.input.clear();
            }
        }

        let text = self.structure.describe(&action, &result);
        self.flash(text, result.is_err());
    }

    /// Run an action that needs the typed value; does nothing if it is invalid
    fn perform_with_value(&mut self, make: fn(i64) -> Action) {
        if let Ok(value) = parse_value(&self.input) {
            self.perform(make(value));
        }
    }

    fn flash(&mut self, text: String, is_error: bool) {
        self.message = Some(StatusMessage {
            text,
            is_error,
            shown_at: Instant::now(),
        });
    }

    fn expire_message(&mut self, now: Instant) {
        let ttl = Duration::from_millis(self.config.message_ttl_ms);
        let expired = self
            .message
            .as_ref()
            .is_some_and(|m| now.saturating_duration_since(m.shown_at) >= ttl);
        if expired {
            self.message = None;
            if !self.is_sorting() {
                self.marks = Highlights::default();
                self.previous = None;
            }
        }
    }

    fn adjust_speed(&mut self, faster: bool) {
        let current = self.speed.get();
        let next = if faster {
            current.faster(SPEED_STEP)
        } else {
            current.slower(SPEED_STEP)
        };
        self.speed.set(next);
        let delay = self.config.pacing.delay(next);
        self.flash(
            format!("Speed {} ({} ms per step)", next, delay.as_millis()),
            false,
        );
    }

    fn toggle_pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.paused = !session.paused;
        let text = if session.paused { "Paused" } else { "Playing..." };
        self.flash(text.to_string(), false);
    }

    fn escape(&mut self) {
        if let Some(session) = &self.session {
            session.cancel.cancel();
        } else if self.reviewing {
            self.reviewing = false;
        } else {
            self.input.clear();
        }
    }

    fn review(&mut self, navigate: fn(&mut StepHistory)) {
        if self.is_sorting() {
            return;
        }
        let Some(history) = self.history.as_mut() else {
            return;
        };
        if history.is_empty() {
            return;
        }
        if !self.reviewing {
            self.reviewing = true;
            history.jump_to_end();
        }
        navigate(history);
    }

    fn push_input(&mut self, c: char) {
        if self.input.len() < MAX_INPUT_LEN {
            self.input.push(c);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.escape(),
            KeyCode::Tab => self.select_structure(self.structure.next()),
            KeyCode::BackTab => self.select_structure(self.structure.prev()),

            // Value input
            KeyCode::Char(c @ '0'..='9') => self.push_input(c),
            KeyCode::Char('-') => {
                if self.input.is_empty() {
                    self.input.push('-');
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }

            // Playback
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('[') => self.adjust_speed(false),
            KeyCode::Char(']') => self.adjust_speed(true),
            KeyCode::Char('b') => self.start_sort(Algorithm::BubbleSort),
            KeyCode::Char('k') => self.start_sort(Algorithm::QuickSort),
            KeyCode::Right if self.is_paused() => self.advance_sort(Instant::now()),
            KeyCode::Left => self.review(|h| {
                h.step_backward();
            }),
            KeyCode::Right => self.review(|h| {
                h.step_forward();
            }),
            KeyCode::Home => self.review(StepHistory::rewind_to_start),
            KeyCode::End => self.review(StepHistory::jump_to_end),

            // Structure operations
            KeyCode::Enter | KeyCode::Char('a') => self.perform_with_value(Action::PushBack),
            KeyCode::Char('h') => self.perform_with_value(Action::PushFront),
            KeyCode::Char('/') | KeyCode::Char('f') => self.perform_with_value(Action::Search),
            KeyCode::Char('r') => {
                let action = match self.structure {
                    StructureKind::Queue | StructureKind::LinkedList => Action::PopFront,
                    StructureKind::Array | StructureKind::Stack => Action::PopBack,
                };
                self.perform(action);
            }
            KeyCode::Char('R') => self.perform(Action::PopBack),
            KeyCode::Char('p') => {
                let action = match self.structure {
                    StructureKind::Stack => Action::PeekBack,
                    _ => Action::PeekFront,
                };
                self.perform(action);
            }
            KeyCode::Char('s') => self.perform(Action::Shuffle),
            KeyCode::Char('x') => self.perform(Action::Reset),

            KeyCode::Char('t') => self.theme = self.theme.toggle(),
            _ => {}
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let theme = self.theme.palette();
        let size = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), size);

        // Tabs | structure + info | narration | status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
            .split(rows[1]);

        let selected = StructureKind::ALL
            .iter()
            .position(|k| *k == self.structure)
            .unwrap_or(0);
        let tabs = Tabs::new(
            StructureKind::ALL
                .iter()
                .map(|k| Line::from(k.title()))
                .collect::<Vec<_>>(),
        )
        .select(selected)
        .style(Style::default().fg(theme.comment))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
        frame.render_widget(tabs, rows[0]);

        let view = self.frame_view();
        let subtitle = self
            .session
            .as_ref()
            .map(|s| s.steps.algorithm().to_string())
            .or_else(|| self.reviewing.then(|| "review".to_string()));
        render_structure_pane(
            frame,
            columns[0],
            StructureRenderData {
                kind: self.structure,
                view: &view,
                theme,
                subtitle,
            },
        );

        let input_valid = parse_value(&self.input).is_ok();
        let speed = self.speed.get();
        render_info_pane(
            frame,
            columns[1],
            InfoRenderData {
                title: self.structure.title(),
                rows: self.structure.info(self.displayed_sequence()),
                speed,
                delay: self.config.pacing.delay(speed),
                input: &self.input,
                input_valid,
                theme,
            },
        );

        let step = self.displayed_step();
        let position = self.history.as_ref().filter(|h| !h.is_empty()).map(|h| {
            if self.reviewing {
                (h.position(), h.len())
            } else {
                (h.len() - 1, h.len())
            }
        });
        render_narration_pane(
            frame,
            rows[2],
            NarrationRenderData {
                narration: step.map(|s| s.narration.as_str()),
                step_label: step.map(|s| s.kind.label()),
                position: step.and(position),
                theme,
            },
        );

        render_status_bar(
            frame,
            rows[3],
            StatusRenderData {
                structure: self.structure,
                message: self.message.as_ref().map(|m| m.text.as_str()),
                is_error: self.message.as_ref().is_some_and(|m| m.is_error),
                playback: self.playback_state(),
                input_valid,
                theme,
            },
        );
    }
}
