use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;

use startup_atlas::{
    all_stages, all_tags, featured, filter_companies, recently_updated, AtlasConfig, Company,
    Facet, FilterParams, LinkOpener, Readiness, RECENT_LIMIT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Directory,
    Filters,
    Highlights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Directory => Page::Filters,
            Page::Filters => Page::Highlights,
            Page::Highlights => Page::Directory,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Directory => Page::Highlights,
            Page::Filters => Page::Directory,
            Page::Highlights => Page::Filters,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Directory => "Directory",
            Page::Filters => "Filters",
            Page::Highlights => "Featured & Recent",
        }
    }
}

pub struct App {
    pub companies: Vec<Company>,
    pub filtered: Vec<Company>,
    pub params: FilterParams,
    pub state: TableState,
    pub current_page: Page,
    pub input_mode: InputMode,
    pub show_detail: bool,
    pub tags: Vec<String>,
    pub stages: Vec<String>,
    pub tag_cursor: usize,
    /// Blocking message; every key dismisses it first
    pub notice: Option<String>,
    pub status: Option<String>,
    config: AtlasConfig,
}

impl App {
    pub fn new(companies: Vec<Company>, config: AtlasConfig) -> Self {
        let tags = all_tags(&companies);
        let stages = all_stages(&companies);

        let mut app = Self {
            filtered: Vec::new(),
            companies,
            params: FilterParams::new(),
            state: TableState::default(),
            current_page: Page::Directory,
            input_mode: InputMode::Normal,
            show_detail: false,
            tags,
            stages,
            tag_cursor: 0,
            notice: None,
            status: None,
            config,
        };
        app.apply(FilterParams::new());
        app
    }

    /// Replace the parameter snapshot and recompute the visible list.
    pub fn apply(&mut self, params: FilterParams) {
        self.filtered = filter_companies(&self.companies, &params);
        self.params = params;

        // Reset selection to first item
        if !self.filtered.is_empty() {
            self.state.select(Some(0));
        } else {
            self.state.select(None);
            self.show_detail = false;
        }
    }

    pub fn toggle_detail(&mut self) {
        if self.selected_company().is_some() {
            self.show_detail = !self.show_detail;
        }
    }

    pub fn selected_company(&self) -> Option<&Company> {
        self.state.selected().and_then(|i| self.filtered.get(i))
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = self.params.query.clone();
        query.push(c);
        self.apply(self.params.with_query(query));
    }

    pub fn pop_search_char(&mut self) {
        let mut query = self.params.query.clone();
        query.pop();
        self.apply(self.params.with_query(query));
    }

    /// all → green → yellow → red → all
    pub fn cycle_readiness(&mut self) {
        let next = match self.params.readiness {
            Facet::All => Facet::Only(Readiness::Green),
            Facet::Only(Readiness::Green) => Facet::Only(Readiness::Yellow),
            Facet::Only(Readiness::Yellow) => Facet::Only(Readiness::Red),
            Facet::Only(Readiness::Red) => Facet::All,
        };
        self.apply(self.params.with_readiness(next));
    }

    /// all → each known stage in sorted order → all
    pub fn cycle_stage(&mut self) {
        let next = match &self.params.stage {
            Facet::All => self.stages.first().cloned().map_or(Facet::All, Facet::Only),
            Facet::Only(current) => {
                let pos = self.stages.iter().position(|s| s == current);
                match pos.and_then(|i| self.stages.get(i + 1)) {
                    Some(stage) => Facet::Only(stage.clone()),
                    None => Facet::All,
                }
            }
        };
        self.apply(self.params.with_stage(next));
    }

    pub fn cycle_sort(&mut self) {
        self.apply(self.params.with_sort(self.params.sort.next()));
    }

    pub fn reset_filters(&mut self) {
        self.apply(self.params.reset());
    }

    pub fn next_tag(&mut self) {
        if !self.tags.is_empty() {
            self.tag_cursor = (self.tag_cursor + 1) % self.tags.len();
        }
    }

    pub fn previous_tag(&mut self) {
        if !self.tags.is_empty() {
            self.tag_cursor = (self.tag_cursor + self.tags.len() - 1) % self.tags.len();
        }
    }

    pub fn toggle_tag_at_cursor(&mut self) {
        if let Some(tag) = self.tags.get(self.tag_cursor).cloned() {
            self.apply(self.params.toggle_tag(&tag));
        }
    }

    pub fn request_intro<O: LinkOpener>(&mut self, opener: &O) {
        let company = match self.selected_company() {
            Some(c) => c.clone(),
            None => return,
        };

        match startup_atlas::request_intro(&self.config, &company, opener) {
            Ok(url) => self.status = Some(format!("Opened intro form: {}", url)),
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn next(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + 10).min(len - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(10));
        self.state.select(Some(i));
    }

    pub fn stats(&self) -> DirectoryStats {
        let mut stats = DirectoryStats {
            total: self.companies.len(),
            visible: self.filtered.len(),
            ..Default::default()
        };

        for c in &self.companies {
            match c.readiness {
                Readiness::Green => stats.green += 1,
                Readiness::Yellow => stats.yellow += 1,
                Readiness::Red => stats.red += 1,
            }
        }

        stats
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub visible: usize,
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
}

pub fn run_ui<O: LinkOpener>(app: &mut App, opener: &O) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app, opener);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    exit_status(res)
}

/// Outcome of the event loop, reported once the terminal is restored.
fn exit_status(res: io::Result<()>) -> Result<()> {
    if let Err(err) = &res {
        tracing::error!(error = %err, "terminal UI exited with an error");
    }
    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend, O: LinkOpener>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    opener: &O,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if app.dismiss_notice() {
            continue;
        }

        if app.input_mode == InputMode::Search {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => app.input_mode = InputMode::Normal,
                KeyCode::Backspace => app.pop_search_char(),
                KeyCode::Char(c) => app.push_search_char(c),
                _ => {}
            }
            continue;
        }

        app.status = None;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Esc => {
                if app.show_detail {
                    app.show_detail = false;
                } else {
                    return Ok(());
                }
            }
            KeyCode::Enter => app.toggle_detail(),
            KeyCode::Tab => app.next_page(),
            KeyCode::BackTab => app.previous_page(),
            KeyCode::Char('/') => {
                app.current_page = Page::Directory;
                app.input_mode = InputMode::Search;
            }
            KeyCode::Char('r') => app.cycle_readiness(),
            KeyCode::Char('s') => app.cycle_stage(),
            KeyCode::Char('o') => app.cycle_sort(),
            KeyCode::Char('c') => app.reset_filters(),
            KeyCode::Char('i') => app.request_intro(opener),
            KeyCode::Left | KeyCode::Char('h') if app.current_page == Page::Filters => {
                app.previous_tag()
            }
            KeyCode::Right | KeyCode::Char('l') if app.current_page == Page::Filters => {
                app.next_tag()
            }
            KeyCode::Char(' ') if app.current_page == Page::Filters => app.toggle_tag_at_cursor(),
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.previous(),
            KeyCode::PageDown => app.page_down(),
            KeyCode::PageUp => app.page_up(),
            KeyCode::Home if !app.filtered.is_empty() => app.state.select(Some(0)),
            KeyCode::End if !app.filtered.is_empty() => {
                app.state.select(Some(app.filtered.len() - 1))
            }
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Length(3), // Search + active filters
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_search_bar(f, chunks[1], app);

    if app.show_detail && app.current_page == Page::Directory {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[2]);

        render_table(f, content_chunks[0], app);
        render_profile(f, content_chunks[1], app);
    } else {
        match app.current_page {
            Page::Directory => render_table(f, chunks[2], app),
            Page::Filters => render_filters(f, chunks[2], app),
            Page::Highlights => render_highlights(f, chunks[2], app),
        }
    }

    render_status_bar(f, chunks[3], app);

    if let Some(notice) = &app.notice {
        render_notice(f, notice);
    }
}

fn readiness_color(readiness: Readiness) -> Color {
    match readiness {
        Readiness::Green => Color::Green,
        Readiness::Yellow => Color::Yellow,
        Readiness::Red => Color::Red,
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();

    let pages = [Page::Directory, Page::Filters, Page::Highlights];

    let mut tab_spans = vec![Span::styled(
        "Japan Startup Atlas  ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("{} of {} startups", stats.visible, stats.total),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    for (readiness, count) in [
        (Readiness::Green, stats.green),
        (Readiness::Yellow, stats.yellow),
        (Readiness::Red, stats.red),
    ] {
        tab_spans.push(Span::styled(
            format!("{} {}  ", readiness.meta().emoji, count),
            Style::default().fg(readiness_color(readiness)),
        ));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let searching = app.input_mode == InputMode::Search;
    let params = &app.params;

    let mut spans = vec![
        Span::styled(" Search: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(
            if params.query.is_empty() && !searching {
                "name, tag, city…".to_string()
            } else {
                params.query.clone()
            },
            if searching {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
    ];
    if searching {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }

    spans.push(Span::raw("   Readiness: "));
    spans.push(Span::styled(params.readiness.to_string(), Style::default().fg(Color::Yellow)));
    spans.push(Span::raw("  Stage: "));
    spans.push(Span::styled(params.stage.to_string(), Style::default().fg(Color::Yellow)));
    spans.push(Span::raw("  Sort: "));
    spans.push(Span::styled(params.sort.label(), Style::default().fg(Color::Yellow)));
    if !params.tags.is_empty() {
        spans.push(Span::raw("  Tags: "));
        spans.push(Span::styled(params.tags.join(" + "), Style::default().fg(Color::Magenta)));
    }

    let border = if searching { Color::Yellow } else { Color::White };
    let bar = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)));

    f.render_widget(bar, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    if app.filtered.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("  No startups match your filters."),
            Line::from("  Try removing a tag or press 'c' to reset filters."),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Startups "));
        f.render_widget(empty, area);
        return;
    }

    let header_cells = ["Name", "Readiness", "Stage", "Founded", "HQ", "Tags"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.filtered.iter().map(|c| {
        let meta = c.readiness.meta();
        let cells = vec![
            Cell::from(truncate(&c.name_en, 24)),
            Cell::from(format!("{} {}", meta.emoji, meta.label))
                .style(Style::default().fg(readiness_color(c.readiness))),
            Cell::from(c.funding_stage.clone()),
            Cell::from(c.founded.to_string()),
            Cell::from(truncate(&c.hq, 20)),
            Cell::from(truncate(&c.tags.iter().take(5).cloned().collect::<Vec<_>>().join(", "), 40)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(26),
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(22),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" Startups ({} results) ", app.filtered.len())),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {}: ", label), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(value),
    ])
}

fn bullets(lines: &mut Vec<Line<'static>>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::from(""));
    lines.push(section_title(title));
    for item in items {
        lines.push(Line::from(format!("  • {}", item)));
    }
}

fn render_profile(f: &mut Frame, area: Rect, app: &App) {
    let c = match app.selected_company() {
        Some(c) => c,
        None => {
            let no_selection = Paragraph::new("No startup selected").block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Company Profile "),
            );
            f.render_widget(no_selection, area);
            return;
        }
    };

    let meta = c.readiness.meta();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", c.display_name()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", c.one_liner),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Readiness: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{} {}", meta.emoji, meta.label),
                Style::default().fg(readiness_color(c.readiness)),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", meta.partner_note),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        field("Founded", c.founded.to_string()),
        field("HQ", c.hq.clone()),
        field("Stage", c.funding_stage.clone()),
        field("Total Funding", c.total_funding.to_string()),
        field("Website", c.website.clone()),
        field("Tags", c.tags.join(", ")),
    ];

    bullets(&mut lines, "WHAT THEY DO", &c.what_they_do);
    bullets(&mut lines, "WHY IT MATTERS IN JAPAN", &c.why_matters_in_japan);
    bullets(&mut lines, "TARGET CUSTOMERS", &c.target_customers);
    bullets(&mut lines, "BUSINESS MODEL", &c.business_model);
    bullets(&mut lines, "COMPETITIVE LANDSCAPE", &c.competitive_landscape);
    bullets(&mut lines, "WHAT MAKES IT INTERESTING", &c.what_makes_interesting);

    if !c.editors_note.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_title("EDITOR'S NOTE"));
        lines.push(Line::from(format!("  {}", c.editors_note)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("  ─────────────────────────────────────"));
    if !c.disclosure.is_empty() {
        lines.push(field("Disclosure", c.disclosure.clone()));
    }
    if !c.last_updated.is_empty() {
        lines.push(field("Last updated", c.last_updated.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  i", Style::default().fg(Color::Yellow)),
        Span::styled(
            " Request an introduction   Enter/Esc close",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
    ]));

    let profile = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Company Profile "),
    );

    f.render_widget(profile, area);
}

fn render_filters(f: &mut Frame, area: Rect, app: &App) {
    let params = &app.params;
    let choice = |active: bool| {
        if active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut readiness_spans = vec![Span::raw("  "), Span::styled("[all] ", choice(params.readiness.is_all()))];
    for r in Readiness::ALL {
        let meta = r.meta();
        readiness_spans.push(Span::styled(
            format!("[{} {}] ", meta.emoji, meta.label),
            choice(params.readiness == Facet::Only(r)),
        ));
    }

    let mut stage_spans = vec![Span::raw("  "), Span::styled("[all] ", choice(params.stage.is_all()))];
    for s in &app.stages {
        stage_spans.push(Span::styled(
            format!("[{}] ", s),
            choice(params.stage == Facet::Only(s.clone())),
        ));
    }

    let mut tag_lines = Vec::new();
    let mut current = vec![Span::raw("  ")];
    for (i, t) in app.tags.iter().enumerate() {
        let selected = params.tags.contains(t);
        let mut style = choice(selected);
        if i == app.tag_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        current.push(Span::styled(format!("[{}]", t), style));
        current.push(Span::raw(" "));
        if (i + 1) % 6 == 0 {
            tag_lines.push(Line::from(std::mem::replace(&mut current, vec![Span::raw("  ")])));
        }
    }
    if current.len() > 1 {
        tag_lines.push(Line::from(current));
    }

    let mut content = vec![
        Line::from(""),
        section_title("Readiness  (r to cycle)"),
        Line::from(readiness_spans),
        Line::from(""),
        section_title("Stage  (s to cycle)"),
        Line::from(stage_spans),
        Line::from(""),
        section_title("Tags  (←/→ move, Space toggle)"),
    ];
    content.extend(tag_lines);
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Tip: selecting multiple tags uses AND logic.",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" Filters ({} results) ", app.filtered.len())),
    );

    f.render_widget(paragraph, area);
}

fn render_highlights(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let card = |c: &Company, extra: String| -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(format!("  {} ", c.name_en), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::raw(c.readiness.meta().emoji),
                Span::styled(extra, Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(Span::styled(format!("  {}", c.one_liner), Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                format!("  {}", c.tags.iter().take(3).cloned().collect::<Vec<_>>().join(" · ")),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(""),
        ]
    };

    let featured_lines: Vec<Line> = featured(&app.companies)
        .iter()
        .flat_map(|c| card(c, String::new()))
        .collect();

    let recent_lines: Vec<Line> = recently_updated(&app.companies, RECENT_LIMIT)
        .iter()
        .flat_map(|c| card(c, format!(" · {}", c.last_updated)))
        .collect();

    let featured_panel = Paragraph::new(featured_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Featured "));
    let recent_panel = Paragraph::new(recent_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Recently updated "));

    f.render_widget(featured_panel, chunks[0]);
    f.render_widget(recent_panel, chunks[1]);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.filtered.len();

    let mut status_spans = vec![Span::styled(
        format!(" Row: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(status) = &app.status {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(status.clone(), Style::default().fg(Color::Green)));
    }

    let keys: &[(&str, &str)] = if app.input_mode == InputMode::Search {
        &[("Enter/Esc", " Done"), ("Backspace", " Delete")]
    } else {
        &[
            ("/", " Search"),
            ("r", " Readiness"),
            ("s", " Stage"),
            ("o", " Sort"),
            ("c", " Reset"),
            ("Enter", " Profile"),
            ("i", " Intro"),
            ("Tab", " Page"),
        ]
    };
    for (key, label) in keys {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(*label));
    }
    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_notice(f: &mut Frame, notice: &str) {
    let area = centered_rect(60, 30, f.size());

    let mut lines = vec![Line::from("")];
    lines.extend(notice.lines().map(|l| Line::from(format!("  {}", l))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to continue",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Notice "),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use startup_atlas::{AtlasError, Catalog, SortMode};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> startup_atlas::error::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn app() -> App {
        App::new(Catalog::default().into_companies(), AtlasConfig::default())
    }

    #[test]
    fn test_new_app_shows_everything() {
        let app = app();
        assert_eq!(app.filtered.len(), 4);
        assert_eq!(app.state.selected(), Some(0));
        assert_eq!(app.stats(), DirectoryStats { total: 4, visible: 4, green: 1, yellow: 3, red: 0 });
    }

    #[test]
    fn test_typing_filters_live() {
        let mut app = app();
        for c in "osaka".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.filtered.len(), 1);
        assert_eq!(app.selected_company().map(|c| c.id.as_str()), Some("carbonweave"));

        app.pop_search_char();
        assert_eq!(app.params.query, "osak");
    }

    #[test]
    fn test_cycle_readiness_wraps() {
        let mut app = app();
        app.cycle_readiness();
        assert_eq!(app.params.readiness, Facet::Only(Readiness::Green));
        assert_eq!(app.filtered.len(), 1);
        app.cycle_readiness();
        app.cycle_readiness();
        assert_eq!(app.params.readiness, Facet::Only(Readiness::Red));
        assert!(app.filtered.is_empty());
        assert_eq!(app.state.selected(), None);
        app.cycle_readiness();
        assert!(app.params.readiness.is_all());
    }

    #[test]
    fn test_cycle_stage_visits_every_stage() {
        let mut app = app();
        let mut seen = Vec::new();
        for _ in 0..app.stages.len() {
            app.cycle_stage();
            seen.push(app.params.stage.to_string());
        }
        assert_eq!(seen, app.stages);
        app.cycle_stage();
        assert!(app.params.stage.is_all());
    }

    #[test]
    fn test_toggle_tag_and_reset() {
        let mut app = app();
        app.tag_cursor = app.tags.iter().position(|t| t == "Climate").unwrap();
        app.toggle_tag_at_cursor();
        assert_eq!(app.filtered.len(), 2);

        app.cycle_sort();
        assert_eq!(app.params.sort, SortMode::Name);
        app.reset_filters();
        assert_eq!(app.params, FilterParams::new());
        assert_eq!(app.filtered.len(), 4);
    }

    #[test]
    fn test_intro_without_config_raises_notice() {
        let mut app = app();
        let opener = RecordingOpener::default();
        app.request_intro(&opener);

        assert_eq!(app.notice, Some(AtlasError::IntroFormNotConfigured.to_string()));
        assert!(opener.opened.borrow().is_empty());
        assert!(app.dismiss_notice());
        assert!(!app.dismiss_notice());
    }

    #[test]
    fn test_intro_with_config_opens_link() {
        let config = AtlasConfig::default().with_intro_form_url(Some("https://forms.example.com".into()));
        let mut app = App::new(Catalog::default().into_companies(), config);
        let opener = RecordingOpener::default();
        app.request_intro(&opener);

        assert!(app.notice.is_none());
        assert_eq!(*opener.opened.borrow(), vec!["https://forms.example.com".to_string()]);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        app.previous();
        assert_eq!(app.state.selected(), Some(3));
        app.next();
        assert_eq!(app.state.selected(), Some(0));
        app.page_down();
        assert_eq!(app.state.selected(), Some(3));
        app.page_up();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_event_loop_error_is_returned() {
        assert!(exit_status(Ok(())).is_ok());

        let err = exit_status(Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone")))
            .unwrap_err();
        assert!(err.to_string().contains("terminal gone"));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("サステナブル・ラボ", 4), "サステ…");
        assert_eq!(truncate("ABEJA", 10), "ABEJA");
    }
}
