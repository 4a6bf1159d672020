use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use folio::cli::Cli;
use folio::config::Config;
use folio::data::Portfolio;
use folio::event_pump::{EventPump, Poll};
use folio::key_handler::{KeyHandler, PageAction};
use folio::prefs::{JsonFileStore, MemoryStore, PreferenceStore};
use folio::render_context::{Hit, HitMap, RenderContext};
use folio::scheduler::Scheduler;
use folio::screen::Screen;
use folio::state::{
    navbar_elevated, CursorFollower, LoadingOverlay, LoadingTask, OffsetTween, RevealKind,
    RevealTracker, Section, SectionNavigator, SectionTask, SliderController, SliderTask,
    ThemeState, Typewriter, TypingTask, VerticalSpan, MOBILE_MENU_MAX_WIDTH,
};
use folio::viewport::TerminalViewport;

/// Redraw interval while something on screen is moving.
const FRAME: Duration = Duration::from_millis(33);
/// Longest sleep when nothing is animating; keeps the caret blinking.
const IDLE: Duration = Duration::from_millis(250);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    if let Some(path) = &config.log_path {
        init_tracing(path, cli.verbose)?;
    }

    let content = match cli.content.as_ref().or(config.content_path.as_ref()) {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::default(),
    };
    let prefs: Box<dyn PreferenceStore> = match &config.preferences_path {
        Some(path) => match JsonFileStore::open(path) {
            Ok(store) => {
                info!(path = %store.path().display(), "preferences opened");
                Box::new(store)
            }
            Err(err) => {
                warn!(error = %err, "preferences unavailable, theme will not persist");
                Box::new(MemoryStore::new())
            }
        },
        None => Box::new(MemoryStore::new()),
    };

    let (columns, rows) = crossterm::terminal::size()?;
    let mut viewport = TerminalViewport::new(
        columns,
        rows,
        config.cell_width_px,
        config.cell_height_px,
        &config.card_margin,
    );
    viewport.width_override = cli.width_px;

    let terminal = ratatui::init();
    if let Err(err) = crossterm::execute!(std::io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(err).wrap_err("cannot enable mouse capture");
    }
    let result = App::new(content, viewport, prefs).run(terminal, EventPump::spawn());
    if let Err(err) = crossterm::execute!(std::io::stdout(), DisableMouseCapture) {
        warn!(error = %err, "cannot disable mouse capture");
    }
    ratatui::restore();
    result
}

fn init_tracing(path: &Path, verbose: bool) -> color_eyre::Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("cannot open log file {}", path.display()))?;
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Every timer on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Slider(SliderTask),
    Sections(SectionTask),
    Typing(TypingTask),
    Loading(LoadingTask),
}

impl From<SliderTask> for Timer {
    fn from(task: SliderTask) -> Self {
        Timer::Slider(task)
    }
}

impl From<SectionTask> for Timer {
    fn from(task: SectionTask) -> Self {
        Timer::Sections(task)
    }
}

impl From<TypingTask> for Timer {
    fn from(task: TypingTask) -> Self {
        Timer::Typing(task)
    }
}

impl From<LoadingTask> for Timer {
    fn from(task: LoadingTask) -> Self {
        Timer::Loading(task)
    }
}

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    scheduler: Scheduler<Timer>,
    content: Portfolio,
    viewport: TerminalViewport,
    prefs: Box<dyn PreferenceStore>,
    slider: SliderController,
    track: OffsetTween,
    sections: SectionNavigator,
    typewriter: Typewriter,
    cursor: CursorFollower,
    theme: ThemeState,
    reveal: RevealTracker,
    loading: LoadingOverlay,
    show_help: bool,
    status_message: String,
    hits: HitMap,
}

impl App {
    pub fn new(content: Portfolio, mut viewport: TerminalViewport, prefs: Box<dyn PreferenceStore>) -> Self {
        viewport.card_count = content.projects.len();
        let theme = ThemeState::load(prefs.as_ref());
        let reveal = RevealTracker::observe(Self::reveal_layout(&content, &viewport));

        let mut app = Self {
            running: false,
            screen: Screen::new(),
            key_handler: KeyHandler::new(),
            scheduler: Scheduler::new(),
            typewriter: Typewriter::new(&content.greeting),
            content,
            viewport,
            prefs,
            slider: SliderController::new(),
            track: OffsetTween::settled(0.0),
            sections: SectionNavigator::new(Section::ALL.len()),
            cursor: CursorFollower::new(),
            theme,
            reveal,
            loading: LoadingOverlay::new(),
            show_help: false,
            status_message: String::new(),
            hits: HitMap::new(),
        };
        app.update_status_message();
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal, pump: EventPump) -> color_eyre::Result<()> {
        self.running = true;
        let started = Instant::now();
        terminal.draw(|frame| self.render(frame))?;
        self.on_load();

        while self.running {
            self.tick(started.elapsed());
            terminal.draw(|frame| self.render(frame))?;

            match pump.wait(self.next_wake()) {
                Poll::Event(event) => {
                    let action = self.key_handler.on_event(event);
                    self.handle_action_at(started.elapsed(), action);
                    while let Some(event) = pump.try_next() {
                        let action = self.key_handler.on_event(event);
                        self.handle_action_at(started.elapsed(), action);
                    }
                }
                Poll::Timeout => {}
                Poll::Closed => self.quit(),
            }
        }
        info!("folio closed");
        Ok(())
    }

    /// First frame is up: start the page's timers.
    fn on_load(&mut self) {
        info!(
            columns = self.viewport.columns,
            rows = self.viewport.rows,
            width_px = self.viewport.width_px(),
            "page loaded"
        );
        self.loading.on_load(&mut self.scheduler);
        self.typewriter.start(&mut self.scheduler);
        self.slider.activate(&mut self.scheduler);
        self.refresh_reveal();
    }

    /// Runs every timer due by `now`.
    fn tick(&mut self, now: Duration) {
        while let Some(timer) = self.scheduler.next_due(now) {
            match timer {
                Timer::Slider(task) => {
                    self.slider.handle_task(task, &self.viewport);
                    self.sync_track();
                }
                Timer::Sections(task) => self.sections.handle_task(task),
                Timer::Typing(task) => self.typewriter.handle_task(task, &mut self.scheduler),
                Timer::Loading(task) => self.loading.handle_task(task),
            }
        }
    }

    fn next_wake(&self) -> Duration {
        let now = self.scheduler.now();
        let animating = self.track.is_running(now) || self.loading.is_shown();
        let cap = if animating { FRAME } else { IDLE };
        self.scheduler
            .next_deadline()
            .map(|due| due.saturating_sub(now))
            .unwrap_or(cap)
            .min(cap)
    }

    fn render(&mut self, frame: &mut Frame) {
        let now = self.scheduler.now();
        let view = self.slider.view();
        let ctx = RenderContext {
            content: &self.content,
            palette: self.theme.palette(),
            now,
            section: self.sections.current_section().unwrap_or(Section::Home),
            active_link: self.sections.active_link(),
            compact_nav: self.viewport.width_px() <= MOBILE_MENU_MAX_WIDTH,
            menu_open: self.sections.menu_open(),
            navbar_elevated: navbar_elevated(self.scroll_position()),
            theme_icon: self.theme.icon(),
            typed_text: self.typewriter.visible_text(),
            slider: view,
            slider_first: self.slider.current_index(),
            slider_visible: self.slider.visible_count(),
            track_offset_columns: self.track.value_at(now),
            card_slot_columns: self.viewport.card_slot_columns(),
            reveal: &self.reveal,
            first_skill_target: Section::Skills.index() + 1,
            cursor: self.cursor,
            loading: self.loading.phase(),
            show_help: self.show_help,
            status: &self.status_message,
        };
        self.hits = self.screen.render(frame, &ctx);
    }

    /// Handles input that arrived at `now`. Timers due before it fire first,
    /// so anything the action schedules is timed from the moment of input.
    fn handle_action_at(&mut self, now: Duration, action: PageAction) {
        self.tick(now);
        if self.handle_action(action) {
            self.quit();
        }
    }

    fn handle_action(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::Quit => return true,
            PageAction::Back => {
                if self.show_help {
                    self.show_help = false;
                } else if self.sections.menu_open() {
                    self.sections.toggle_menu();
                }
            }
            PageAction::Help => self.show_help = !self.show_help,
            PageAction::Scroll(key) => {
                if self.sections.on_key(key, &mut self.scheduler) {
                    self.refresh_reveal();
                }
            }
            PageAction::Wheel(delta) => {
                if self.sections.on_wheel(delta, &mut self.scheduler) {
                    self.refresh_reveal();
                }
            }
            PageAction::SlidePrevious => {
                if self.slider.go_previous(&self.viewport, &mut self.scheduler) {
                    self.sync_track();
                }
            }
            PageAction::SlideNext => {
                if self.slider.go_next(&self.viewport, &mut self.scheduler) {
                    self.sync_track();
                }
            }
            PageAction::GoToSection(index) => self.follow_link(index),
            PageAction::ToggleTheme => self.toggle_theme(),
            PageAction::ToggleMenu => self.sections.toggle_menu(),
            PageAction::PointerDown { row, .. } => {
                self.sections.on_touch_start(self.viewport.rows_to_px(row));
            }
            PageAction::PointerUp { column, row } => {
                let y = self.viewport.rows_to_px(row);
                if self.sections.on_touch_end(y, &mut self.scheduler) {
                    self.refresh_reveal();
                } else if self.show_help {
                    self.show_help = false;
                } else if let Some(hit) = self.hits.at(column, row) {
                    self.click(hit);
                }
            }
            PageAction::PointerMove { column, row } => {
                self.cursor.move_to(column, row);
                self.cursor.set_hover(self.hits.at(column, row).is_some());
            }
            PageAction::Resize { columns, rows } => {
                self.viewport.resize(columns, rows);
                self.slider.on_viewport_resize(&mut self.scheduler);
                self.refresh_reveal();
            }
            PageAction::None => {}
        }
        self.update_status_message();
        false
    }

    fn click(&mut self, hit: Hit) {
        debug!(?hit, "click");
        match hit {
            Hit::NavLink(index) => self.follow_link(index),
            Hit::ThemeToggle => self.toggle_theme(),
            Hit::MenuButton => self.sections.toggle_menu(),
            Hit::SlidePrevious => {
                if self.slider.go_previous(&self.viewport, &mut self.scheduler) {
                    self.sync_track();
                }
            }
            Hit::SlideNext => {
                if self.slider.go_next(&self.viewport, &mut self.scheduler) {
                    self.sync_track();
                }
            }
            Hit::Card(_) | Hit::Skill(_) => {}
        }
    }

    fn follow_link(&mut self, index: usize) {
        let Some(section) = Section::from_index(index) else {
            return;
        };
        let width = self.viewport.width_px();
        if self.sections.follow_link(section.anchor(), width, &mut self.scheduler) {
            self.refresh_reveal();
        }
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle(self.prefs.as_mut());
    }

    fn scroll_position(&self) -> f64 {
        self.sections.current() as f64 * self.viewport.section_height_px()
    }

    /// Animates the card track toward the slider's latest offset.
    fn sync_track(&mut self) {
        let target = self.viewport.px_to_columns(self.slider.view().offset);
        self.track.retarget(target, self.scheduler.now());
    }

    /// Sections and skill items in document order with their page spans.
    fn reveal_layout(content: &Portfolio, viewport: &TerminalViewport) -> Vec<(RevealKind, VerticalSpan)> {
        let spans = viewport.section_spans(Section::ALL.len());
        let mut elements = Vec::new();
        for (section, span) in Section::ALL.iter().zip(&spans) {
            elements.push((RevealKind::Section, VerticalSpan::new(span.top, span.height)));
            if *section == Section::Skills {
                for index in 0..content.skills.len() {
                    elements.push((RevealKind::SkillItem, viewport.skill_span(span.top, index)));
                }
            }
        }
        elements
    }

    fn refresh_reveal(&mut self) {
        let spans = self.viewport.section_spans(Section::ALL.len());
        self.sections.on_scroll(self.scroll_position(), &spans);
        let layout = Self::reveal_layout(&self.content, &self.viewport);
        self.reveal.relayout(layout.into_iter().map(|(_, span)| span));
        let window = VerticalSpan::new(self.scroll_position(), self.viewport.section_height_px());
        let revealed = self.reveal.update(window, self.scheduler.now());
        if !revealed.is_empty() {
            debug!(?revealed, "revealed");
        }
    }

    fn update_status_message(&mut self) {
        let section = self.sections.current_section().unwrap_or(Section::Home);
        self.status_message = match section {
            Section::Projects => {
                let total = self.content.projects.len();
                if total == 0 {
                    "Projects: none".to_string()
                } else {
                    let first = self.slider.current_index();
                    let last = (first + self.slider.visible_count()).min(total);
                    format!("Projects {}-{} of {}", first + 1, last, total)
                }
            }
            other => format!("{} ({}/{})", other.title(), other.index() + 1, Section::ALL.len()),
        };
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
