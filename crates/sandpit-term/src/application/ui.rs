//! The render loop: terminal setup and teardown, frame composition, and the
//! translation of rendered geometry back into hit-test data for the mouse.

use std::io;
use std::ops::Range;

use anyhow::{bail, Result};
use crossterm::cursor::Show;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};
use sandpit_core::workspace::{
    Severity, EMPTY_OUTPUT_PLACEHOLDER, NO_PROBLEMS_PLACEHOLDER, TERMINAL_PLACEHOLDER,
};
use sandpit_core::{FullscreenHost, Surface};
use tokio::sync::mpsc;

use crate::domain::models::{Action, Event};
use crate::domain::services::session::FrameGeometry;
use crate::domain::services::{ActionsService, EditorSession, EventsService, SessionProps};

/// Terminal emulators expose no portable fullscreen request, so this host
/// always refuses and the layout controller's chrome-hiding fallback takes
/// over. Exiting has nothing to undo.
pub struct TerminalFullscreenHost;

impl FullscreenHost for TerminalFullscreenHost {
    fn request_fullscreen(&mut self) -> Result<()> {
        bail!("the host terminal does not expose a fullscreen API")
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Best-effort terminal restoration for the panic path.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        Show
    );
}

pub async fn start_loop(props: SessionProps) -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    tokio::spawn(async move {
        if let Err(err) = ActionsService::start(event_tx, &mut action_rx).await {
            tracing::error!(error = ?err, "actions service stopped");
        }
    });

    let mut events = EventsService::new(event_rx);
    let mut session = EditorSession::new(props, action_tx)?;

    let (width, height) = crossterm::terminal::size().unwrap_or((120, 40));
    session.handle_event(Event::Resized { width, height })?;

    loop {
        terminal.draw(|frame| render(frame, &mut session))?;

        let event = events.next().await?;
        session.handle_event(event)?;

        if session.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn render(frame: &mut Frame, session: &mut EditorSession) {
    let area = frame.area();
    let chrome = !session.layout.is_fullscreen();
    let show_tab_bar = chrome && !session.layout.is_compact();

    let mut constraints: Vec<Constraint> = Vec::new();
    if show_tab_bar {
        constraints.push(Constraint::Length(1));
    }
    if session.search_visible {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(3));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(session.layout.output_height()));
    if chrome {
        constraints.push(Constraint::Length(1));
    }

    let rows = Layout::vertical(constraints).split(area);
    let mut next = 0;
    let mut take = || {
        let rect = rows[next];
        next += 1;
        rect
    };

    let tab_bar_area = show_tab_bar.then(&mut take);
    let search_area = session.search_visible.then(&mut take);
    let editor_area = take();
    let divider_area = take();
    let output_area = take();
    let status_area = chrome.then(&mut take);

    let mut geometry = FrameGeometry::default();

    if let Some(tab_bar_area) = tab_bar_area {
        geometry.tab_bar_row = Some(tab_bar_area.y);
        geometry.tab_spans = render_tab_bar(frame, tab_bar_area, session);
    }
    if let Some(search_area) = search_area {
        render_search_bar(frame, search_area, session);
    }

    session.editor.layout(editor_area);
    session.editor.render(frame, editor_area);

    geometry.divider_row = divider_area.y;
    render_divider(frame, divider_area, session.layout.is_resizing());

    let (surface_header_row, surface_spans) = render_output_panel(frame, output_area, session);
    geometry.surface_header_row = surface_header_row;
    geometry.surface_spans = surface_spans;

    if let Some(status_area) = status_area {
        render_status_bar(frame, status_area, session);
    }

    if session.palette_visible {
        render_palette(frame, area, session);
    }

    session.set_frame_geometry(geometry);
}

fn render_tab_bar(
    frame: &mut Frame,
    area: Rect,
    session: &EditorSession,
) -> Vec<(usize, Range<u16>)> {
    let mut spans: Vec<Span> = Vec::new();
    let mut hits = Vec::new();
    let mut column = area.x;

    for (index, tab) in session.tabs.iter().enumerate() {
        let marker = if tab.dirty { " ●" } else { "" };
        let label = format!(" {}{} ", tab.name, marker);
        let width = label.chars().count() as u16;
        let style = if tab.active {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        hits.push((index, column..column + width));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("│"));
        column += width + 1;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    hits
}

fn render_search_bar(frame: &mut Frame, area: Rect, session: &EditorSession) {
    use crate::domain::services::session::SearchField;

    let field_style = |field: SearchField| {
        if session.search_field == field {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        }
    };

    let line = Line::from(vec![
        Span::raw(" Search: "),
        Span::styled(session.search_query.clone(), field_style(SearchField::Query)),
        Span::raw("  Replace: "),
        Span::styled(
            session.replace_query.clone(),
            field_style(SearchField::Replace),
        ),
        Span::styled("  (Tab switches, Esc closes)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_divider(frame: &mut Frame, area: Rect, resizing: bool) {
    let style = if resizing {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let rule = "─".repeat(area.width as usize);
    frame.render_widget(Paragraph::new(rule).style(style), area);
}

fn render_output_panel(
    frame: &mut Frame,
    area: Rect,
    session: &mut EditorSession,
) -> (u16, Vec<(Surface, Range<u16>)>) {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);
    let header = rows[0];
    let content = rows[1];

    let mut spans: Vec<Span> = Vec::new();
    let mut hits = Vec::new();
    let mut column = header.x;

    for surface in [Surface::Output, Surface::Problems, Surface::Terminal] {
        let label = match surface {
            Surface::Problems => {
                format!(" Problems ({}) ", session.workspace.diagnostic_count())
            }
            other => format!(" {other} "),
        };
        let width = label.chars().count() as u16;
        let style = if session.workspace.selected() == surface {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        hits.push((surface, column..column + width));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("│"));
        column += width + 1;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), header);

    match session.workspace.selected() {
        Surface::Output => render_output_surface(frame, content, session),
        Surface::Problems => render_problems_surface(frame, content, session),
        Surface::Terminal => {
            frame.render_widget(placeholder_paragraph(TERMINAL_PLACEHOLDER), content);
        }
    }

    (header.y, hits)
}

fn render_output_surface(frame: &mut Frame, area: Rect, session: &mut EditorSession) {
    if session.workspace.records().is_empty() {
        frame.render_widget(placeholder_paragraph(EMPTY_OUTPUT_PLACEHOLDER), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for record in session.workspace.records() {
        lines.push(Line::styled(
            format!(
                "[{}] {}",
                record.timestamp.format("%H:%M:%S"),
                record.language
            ),
            Style::default().fg(Color::DarkGray),
        ));
        for text in &record.lines {
            lines.push(Line::raw(text.clone()));
        }
    }

    // Scroll is measured from the bottom; zero sticks to the latest output.
    let height = area.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    if session.output_scroll > max_scroll {
        session.output_scroll = max_scroll;
    }
    let end = lines.len() - session.output_scroll;
    let start = end.saturating_sub(height);

    frame.render_widget(Paragraph::new(lines[start..end].to_vec()), area);
}

fn render_problems_surface(frame: &mut Frame, area: Rect, session: &EditorSession) {
    if session.workspace.diagnostic_count() == 0 {
        frame.render_widget(placeholder_paragraph(NO_PROBLEMS_PLACEHOLDER), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for diagnostic in session.workspace.visible_diagnostics() {
        let icon = match diagnostic.severity {
            Severity::Error => "🔴",
            Severity::Warning => "🟡",
            Severity::Info => "🔵",
        };
        lines.push(Line::raw(format!(
            "{icon} Line {}, Column {}: {}",
            diagnostic.line, diagnostic.column, diagnostic.message
        )));
    }
    if let Some(notice) = session.workspace.overflow_notice() {
        lines.push(Line::styled(notice, Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, session: &EditorSession) {
    let (row, column) = session.editor.cursor();
    let left = if session.is_running {
        format!(
            " ⏳ Running {}...",
            session.running_language.as_deref().unwrap_or("")
        )
    } else {
        " Ready".to_string()
    };
    let middle = format!(
        " │ {} problems │ Ln {}, Col {} │ {} lines",
        session.workspace.diagnostic_count(),
        row + 1,
        column + 1,
        session.editor.line_count()
    );
    let right = format!("{} │ UTF-8 ", session.active_tab().language.to_uppercase());

    let used = left.chars().count() + middle.chars().count() + right.chars().count();
    let padding = (area.width as usize).saturating_sub(used);
    let text = format!("{left}{middle}{}{right}", " ".repeat(padding));

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White)),
        area,
    );
}

fn render_palette(frame: &mut Frame, area: Rect, session: &EditorSession) {
    let entries = session.filtered_palette();
    let width = 44.min(area.width);
    let height = (entries.len() as u16 + 3).min(area.height);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + 2.min(area.height.saturating_sub(height)),
        width,
        height,
    );

    let mut lines = vec![Line::from(format!("> {}", session.palette_filter))];
    for (index, entry) in entries.iter().enumerate() {
        let binding = entry.keybinding.unwrap_or("");
        let style = if index == session.palette_index {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::styled(
            format!(" {:<28} {:>10} ", entry.label, binding),
            style,
        ));
    }

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Commands ")),
        rect,
    );
}

fn placeholder_paragraph(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )
}
