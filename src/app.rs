use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

use chrono::Local;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};

use crate::daytime::TimezoneResolver;
use crate::events::Subscription;
use crate::list::WeatherListRow;
use crate::owm::WeatherInformation;
use crate::preferences::{PreferenceChange, PreferencesService};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Day/night depends on the clock, so rows are rebuilt at least this often.
const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

pub struct Location {
    pub info: WeatherInformation,
    pub is_bookmark: bool,
}

pub struct App<'a, R: ?Sized> {
    locations: Vec<Location>,
    preferences: &'a PreferencesService,
    resolver: &'a R,
    rows: Vec<WeatherListRow>,
    last_refresh: Instant,
}

impl<'a, R: TimezoneResolver + ?Sized> App<'a, R> {
    pub fn new(locations: Vec<Location>, preferences: &'a PreferencesService, resolver: &'a R) -> Self {
        let mut app = Self {
            locations,
            preferences,
            resolver,
            rows: Vec::new(),
            last_refresh: Instant::now(),
        };
        app.rebuild_rows();
        app
    }

    pub fn rows(&self) -> &[WeatherListRow] {
        &self.rows
    }

    fn rebuild_rows(&mut self) {
        let temperature_unit = self.preferences.temperature_unit();
        let distance_unit = self.preferences.distance_unit();
        self.rows = self
            .locations
            .iter()
            .map(|loc| {
                WeatherListRow::build(
                    &loc.info,
                    temperature_unit,
                    distance_unit,
                    self.resolver,
                    loc.is_bookmark,
                )
            })
            .collect();
        self.last_refresh = Instant::now();
    }

    /// Rebuilds the rows if a preference change has been pushed since the
    /// last call. Returns whether it did.
    pub fn apply_changes(&mut self, changes: &Subscription<PreferenceChange>) -> bool {
        match changes.latest() {
            Some(change) => {
                tracing::debug!(?change, "preferences changed, rebuilding rows");
                self.rebuild_rows();
                true
            }
            None => false,
        }
    }

    /// Rebuilds the rows once `REFRESH_INTERVAL` has passed since the last
    /// rebuild. Returns whether it did.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_refresh) < REFRESH_INTERVAL {
            return false;
        }
        tracing::debug!("refresh interval elapsed, rebuilding rows");
        self.rebuild_rows();
        self.last_refresh = now;
        true
    }

    /// Applies a key press. Returns `false` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('t') => {
                let next = self.preferences.temperature_unit().cycle();
                self.preferences.set_temperature_unit(next);
            }
            KeyCode::Char('d') => {
                let next = self.preferences.distance_unit().toggle();
                self.preferences.set_distance_unit(next);
            }
            _ => {}
        }
        true
    }
}

pub fn run_app<B: Backend, R: TimezoneResolver + ?Sized>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, R>,
) -> io::Result<()> {
    let changes = app.preferences.subscribe();
    let result = event_loop(terminal, app, &changes);
    app.preferences.unsubscribe(changes);
    result
}

fn event_loop<B: Backend, R: TimezoneResolver + ?Sized>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, R>,
    changes: &Subscription<PreferenceChange>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }

        if !app.apply_changes(changes) {
            app.on_tick(Instant::now());
        }
    }
}

fn row_style(row: &WeatherListRow) -> Style {
    let color = match (row.is_bookmark, row.is_day_time) {
        (true, true) => Color::Yellow,
        (true, false) => Color::Blue,
        (false, true) => Color::Green,
        (false, false) => Color::Cyan,
    };
    Style::default().fg(color)
}

fn display_row(row: &WeatherListRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!(" {}", row.symbol)),
        Cell::from(row.city.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(row.temperature.clone()),
        Cell::from(row.cloud_coverage.clone()),
        Cell::from(row.humidity.clone()),
        Cell::from(row.windspeed.clone()),
    ])
    .style(row_style(row))
}

fn display_headline(preferences: &PreferencesService) -> Paragraph<'static> {
    let prefs = preferences.current();
    Paragraph::new(vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled("Nearby weather", Style::default().fg(Color::Yellow)),
            Span::raw(" : "),
            Span::styled(
                format!(
                    "{} / {}",
                    prefs.temperature_unit.suffix(),
                    prefs.distance_unit.speed_label()
                ),
                Style::default().fg(Color::Blue),
            ),
        ]),
        Line::from(format!(
            " {}   [t] temperature unit  [d] distance unit  [q] quit",
            Local::now().format("%d-%m-%Y %H:%M")
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}

fn ui<R: TimezoneResolver + ?Sized>(f: &mut Frame, app: &App<'_, R>) {
    let vert_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(f.area());

    f.render_widget(display_headline(app.preferences), vert_layout[0]);

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Locations ", Style::default().fg(Color::Yellow)))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded);

    let header = Row::new(vec!["", "City", "Temp", "Clouds", "Humidity", "Wind"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app.rows.iter().map(display_row).collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(list_block);

    f.render_widget(table, vert_layout[1]);
}
