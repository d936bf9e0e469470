//! Session orchestration: tabs, the active buffer, and the wiring between
//! user intent and the execution engine.
//!
//! Every user-triggerable behavior funnels through [`EditorSession::execute_command`].
//! Keyboard shortcuts, palette entries, and mouse affordances all resolve to
//! a [`SessionCommand`] first, so no input route can drift from the others.

use anyhow::{bail, Result};
use ratatui::layout::Rect;
use sandpit_core::{
    ExecutionRecord, FullscreenHost, LayoutController, OutputWorkspace, Surface,
};
use tokio::sync::mpsc;
use tui_textarea::{Input, Key};

use crate::domain::models::{
    Action, EditorTab, EditorTheme, EditorWidgetBox, Event, PaletteEntry, SessionCommand, PALETTE,
};

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Focus {
    #[default]
    Editor,
    Search,
    Palette,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchField {
    #[default]
    Query,
    Replace,
}

/// Geometry of the last rendered frame, kept for mouse hit-testing. Rows
/// default to off-screen so clicks before the first render hit nothing.
#[derive(Clone, Debug)]
pub struct FrameGeometry {
    pub tab_bar_row: Option<u16>,
    pub tab_spans: Vec<(usize, std::ops::Range<u16>)>,
    pub divider_row: u16,
    pub surface_header_row: u16,
    pub surface_spans: Vec<(Surface, std::ops::Range<u16>)>,
}

impl Default for FrameGeometry {
    fn default() -> FrameGeometry {
        FrameGeometry {
            tab_bar_row: None,
            tab_spans: vec![],
            divider_row: u16::MAX,
            surface_header_row: u16::MAX,
            surface_spans: vec![],
        }
    }
}

pub struct SessionProps {
    pub tabs: Vec<EditorTab>,
    pub editor: EditorWidgetBox,
    pub theme: EditorTheme,
    pub fullscreen_host: Box<dyn FullscreenHost + Send>,
    pub expanded_output_height: u16,
    pub default_language: String,
}

pub struct EditorSession {
    pub tabs: Vec<EditorTab>,
    active: usize,
    pub editor: EditorWidgetBox,
    fullscreen_host: Box<dyn FullscreenHost + Send>,
    pub workspace: OutputWorkspace,
    pub layout: LayoutController,
    pub search_visible: bool,
    pub search_query: String,
    pub replace_query: String,
    pub search_field: SearchField,
    pub palette_visible: bool,
    pub palette_filter: String,
    pub palette_index: usize,
    /// Advisory UI state only; runs are never gated on it.
    pub is_running: bool,
    pub running_language: Option<String>,
    pub output_scroll: usize,
    pub should_quit: bool,
    focus: Focus,
    geometry: FrameGeometry,
    untitled_counter: usize,
    default_language: String,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl EditorSession {
    pub fn new(
        mut props: SessionProps,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Result<EditorSession> {
        if props.tabs.is_empty() {
            bail!("the session needs at least one tab");
        }

        for tab in &mut props.tabs {
            tab.active = false;
        }
        props.tabs[0].active = true;

        let mut editor = props.editor;
        editor.apply_theme(&props.theme);
        editor.set_value(&props.tabs[0].content);

        let untitled_counter = props.tabs.len();
        Ok(EditorSession {
            tabs: props.tabs,
            active: 0,
            editor,
            fullscreen_host: props.fullscreen_host,
            workspace: OutputWorkspace::new(),
            layout: LayoutController::new(120, 40, props.expanded_output_height),
            search_visible: false,
            search_query: String::new(),
            replace_query: String::new(),
            search_field: SearchField::default(),
            palette_visible: false,
            palette_filter: String::new(),
            palette_index: 0,
            is_running: false,
            running_language: None,
            output_scroll: 0,
            should_quit: false,
            focus: Focus::default(),
            geometry: FrameGeometry::default(),
            untitled_counter,
            default_language: props.default_language,
            action_tx,
        })
    }

    pub fn active_tab(&self) -> &EditorTab {
        &self.tabs[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn set_frame_geometry(&mut self, geometry: FrameGeometry) {
        self.geometry = geometry;
    }

    /// The single execution path for every user-triggerable behavior.
    pub fn execute_command(&mut self, command: SessionCommand) -> Result<()> {
        match command {
            SessionCommand::Run => {
                self.sync_active_tab();
                self.workspace.select(Surface::Output);
                self.is_running = true;
                let tab = &self.tabs[self.active];
                self.running_language = Some(tab.language.clone());
                self.action_tx.send(Action::RunCode {
                    language: tab.language.clone(),
                    source: tab.content.clone(),
                })?;
            }
            SessionCommand::OpenPreview => {
                self.sync_active_tab();
                let tab = &self.tabs[self.active];
                self.action_tx.send(Action::OpenPreview {
                    language: tab.language.clone(),
                    source: tab.content.clone(),
                })?;
            }
            SessionCommand::ClearOutput => {
                self.workspace.clear();
                self.output_scroll = 0;
            }
            SessionCommand::ToggleOutputPanel => self.layout.toggle_preset(),
            SessionCommand::ToggleFullscreen => {
                self.layout.toggle_fullscreen(self.fullscreen_host.as_mut());
            }
            SessionCommand::ToggleSearch => {
                self.search_visible = !self.search_visible;
                self.focus = if self.search_visible {
                    Focus::Search
                } else {
                    Focus::Editor
                };
            }
            SessionCommand::TogglePalette => {
                self.palette_visible = !self.palette_visible;
                self.palette_filter.clear();
                self.palette_index = 0;
                self.focus = if self.palette_visible {
                    Focus::Palette
                } else {
                    Focus::Editor
                };
            }
            SessionCommand::SelectSurface(surface) => self.workspace.select(surface),
            SessionCommand::NextTab => self.activate_tab((self.active + 1) % self.tabs.len()),
            SessionCommand::PrevTab => {
                self.activate_tab((self.active + self.tabs.len() - 1) % self.tabs.len())
            }
            SessionCommand::CloseTab => self.close_active_tab(),
            SessionCommand::NewTab => self.open_untitled_tab(),
            SessionCommand::Quit => self.should_quit = true,
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::EditorInput(input) => self.handle_input(input)?,
            Event::Paste(text) => self.handle_paste(&text),
            Event::RunRequested => self.execute_command(SessionCommand::Run)?,
            Event::PreviewRequested => self.execute_command(SessionCommand::OpenPreview)?,
            Event::ToggleOutputPanel => self.execute_command(SessionCommand::ToggleOutputPanel)?,
            Event::ToggleFullscreen => self.execute_command(SessionCommand::ToggleFullscreen)?,
            Event::ToggleSearch => self.execute_command(SessionCommand::ToggleSearch)?,
            Event::TogglePalette => self.execute_command(SessionCommand::TogglePalette)?,
            Event::NextTab => self.execute_command(SessionCommand::NextTab)?,
            Event::PrevTab => self.execute_command(SessionCommand::PrevTab)?,
            Event::CloseTab => self.execute_command(SessionCommand::CloseTab)?,
            Event::NewTab => self.execute_command(SessionCommand::NewTab)?,
            Event::Quit => self.execute_command(SessionCommand::Quit)?,
            Event::Escape => self.dismiss()?,
            Event::ScrollUp => self.output_scroll = self.output_scroll.saturating_add(1),
            Event::ScrollDown => self.output_scroll = self.output_scroll.saturating_sub(1),
            Event::MouseDown { column, row } => self.handle_mouse_down(column, row),
            Event::MouseDrag { row } => {
                if self.layout.is_resizing() {
                    self.layout.drag_to(row);
                }
            }
            Event::MouseUp => self.layout.drag_end(),
            Event::Resized { width, height } => {
                if self.layout.container_resized(width, height) {
                    // The widget owns an internal canvas; give it the new
                    // editor pane extent so it can re-measure.
                    let editor_height =
                        height.saturating_sub(self.layout.output_height().saturating_add(1));
                    self.editor.layout(Rect::new(0, 0, width, editor_height));
                }
            }
            Event::Tick => {}
            Event::ExecutionStarted { language } => {
                self.is_running = true;
                self.running_language = Some(language);
            }
            Event::ExecutionFinished(record) => {
                self.workspace.append(record);
                self.is_running = false;
                self.running_language = None;
                self.output_scroll = 0;
            }
            Event::PreviewReport(lines) => {
                let language = self.tabs[self.active].language.clone();
                self.workspace.append(ExecutionRecord::new(&language, lines));
                self.workspace.select(Surface::Output);
            }
        }
        Ok(())
    }

    pub fn filtered_palette(&self) -> Vec<&'static PaletteEntry> {
        let needle = self.palette_filter.to_lowercase();
        PALETTE
            .iter()
            .filter(|entry| entry.label.to_lowercase().contains(&needle))
            .collect()
    }

    fn handle_input(&mut self, input: Input) -> Result<()> {
        match self.focus {
            Focus::Palette => self.handle_palette_input(input)?,
            Focus::Search => self.handle_search_input(input),
            Focus::Editor => {
                if self.editor.handle_input(input) {
                    self.tabs[self.active].dirty = true;
                    self.refresh_diagnostics();
                }
            }
        }
        Ok(())
    }

    /// Mirrors the widget's live diagnostics into the problems surface.
    fn refresh_diagnostics(&mut self) {
        let diagnostics = self.editor.diagnostics();
        self.workspace.set_diagnostics(diagnostics);
    }

    fn handle_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Editor => {
                self.editor.insert_text(text);
                self.tabs[self.active].dirty = true;
                self.refresh_diagnostics();
            }
            Focus::Search => self.active_search_field().push_str(text),
            Focus::Palette => {
                self.palette_filter.push_str(text);
                self.palette_index = 0;
            }
        }
    }

    fn handle_palette_input(&mut self, input: Input) -> Result<()> {
        match input.key {
            Key::Char(c) if !input.ctrl && !input.alt => {
                self.palette_filter.push(c);
                self.palette_index = 0;
            }
            Key::Backspace => {
                self.palette_filter.pop();
                self.palette_index = 0;
            }
            Key::Down => {
                let len = self.filtered_palette().len();
                if len > 0 {
                    self.palette_index = (self.palette_index + 1) % len;
                }
            }
            Key::Up => {
                let len = self.filtered_palette().len();
                if len > 0 {
                    self.palette_index = (self.palette_index + len - 1) % len;
                }
            }
            Key::Enter => {
                let command = self
                    .filtered_palette()
                    .get(self.palette_index)
                    .map(|entry| entry.command);
                self.palette_visible = false;
                self.palette_filter.clear();
                self.focus = Focus::Editor;
                if let Some(command) = command {
                    self.execute_command(command)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_search_input(&mut self, input: Input) {
        match input.key {
            Key::Char(c) if !input.ctrl && !input.alt => self.active_search_field().push(c),
            Key::Backspace => {
                self.active_search_field().pop();
            }
            Key::Tab => {
                self.search_field = match self.search_field {
                    SearchField::Query => SearchField::Replace,
                    SearchField::Replace => SearchField::Query,
                };
            }
            // The fields carry no behavior of their own; Enter is inert.
            _ => {}
        }
    }

    fn active_search_field(&mut self) -> &mut String {
        match self.search_field {
            SearchField::Query => &mut self.search_query,
            SearchField::Replace => &mut self.replace_query,
        }
    }

    /// Escape unwinds one layer at a time: palette, search, fullscreen.
    fn dismiss(&mut self) -> Result<()> {
        if self.palette_visible {
            self.execute_command(SessionCommand::TogglePalette)?;
        } else if self.search_visible {
            self.execute_command(SessionCommand::ToggleSearch)?;
        } else if self.layout.is_fullscreen() {
            self.execute_command(SessionCommand::ToggleFullscreen)?;
        }
        Ok(())
    }

    fn handle_mouse_down(&mut self, column: u16, row: u16) {
        if row == self.geometry.divider_row {
            self.layout.drag_start(row);
            return;
        }
        if Some(row) == self.geometry.tab_bar_row {
            let clicked = self
                .geometry
                .tab_spans
                .iter()
                .find(|(_, span)| span.contains(&column))
                .map(|(index, _)| *index);
            if let Some(index) = clicked {
                self.activate_tab(index);
            }
            return;
        }
        if row == self.geometry.surface_header_row {
            let surface = self
                .geometry
                .surface_spans
                .iter()
                .find(|(_, span)| span.contains(&column))
                .map(|(surface, _)| *surface);
            if let Some(surface) = surface {
                self.workspace.select(surface);
            }
        }
    }

    fn sync_active_tab(&mut self) {
        self.tabs[self.active].content = self.editor.value();
    }

    fn activate_tab(&mut self, index: usize) {
        if index == self.active || index >= self.tabs.len() {
            return;
        }
        self.sync_active_tab();
        self.tabs[self.active].active = false;
        self.active = index;
        self.tabs[index].active = true;
        let content = self.tabs[index].content.clone();
        self.editor.set_value(&content);
    }

    fn close_active_tab(&mut self) {
        self.tabs.remove(self.active);
        if self.tabs.is_empty() {
            self.untitled_counter += 1;
            let mut tab = EditorTab::new(
                &format!("untitled-{}", self.untitled_counter),
                &self.default_language,
                "",
            );
            tab.active = true;
            self.tabs.push(tab);
            self.active = 0;
        } else {
            self.active = self.active.min(self.tabs.len() - 1);
            self.tabs[self.active].active = true;
        }
        let content = self.tabs[self.active].content.clone();
        self.editor.set_value(&content);
    }

    fn open_untitled_tab(&mut self) {
        self.sync_active_tab();
        self.untitled_counter += 1;
        let tab = EditorTab::new(
            &format!("untitled-{}", self.untitled_counter),
            &self.default_language,
            "",
        );
        self.tabs[self.active].active = false;
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
        self.tabs[self.active].active = true;
        self.editor.set_value("");
    }
}
