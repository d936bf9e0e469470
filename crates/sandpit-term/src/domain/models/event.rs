use sandpit_core::ExecutionRecord;
use tui_textarea::Input;

/// Everything the UI loop reacts to: translated terminal input, geometry
/// changes, and completions coming back from the actions service.
#[derive(Debug)]
pub enum Event {
    EditorInput(Input),
    Paste(String),
    RunRequested,
    ToggleOutputPanel,
    PreviewRequested,
    ToggleFullscreen,
    ToggleSearch,
    TogglePalette,
    Escape,
    NextTab,
    PrevTab,
    CloseTab,
    NewTab,
    ScrollUp,
    ScrollDown,
    MouseDown { column: u16, row: u16 },
    MouseDrag { row: u16 },
    MouseUp,
    Resized { width: u16, height: u16 },
    Tick,
    Quit,
    ExecutionStarted { language: String },
    ExecutionFinished(ExecutionRecord),
    PreviewReport(Vec<String>),
}
