use sandpit_core::Surface;

/// Every user-triggerable action in the sandbox. Keyboard shortcuts, the
/// command palette, and mouse affordances all resolve to one of these and
/// are executed by the same session method — there is no second path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Run,
    OpenPreview,
    ClearOutput,
    ToggleOutputPanel,
    ToggleFullscreen,
    ToggleSearch,
    TogglePalette,
    SelectSurface(Surface),
    NextTab,
    PrevTab,
    CloseTab,
    NewTab,
    Quit,
}

pub struct PaletteEntry {
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
    pub command: SessionCommand,
}

pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        label: "Run Code",
        keybinding: Some("F5"),
        command: SessionCommand::Run,
    },
    PaletteEntry {
        label: "Preview in Browser",
        keybinding: Some("Ctrl+B"),
        command: SessionCommand::OpenPreview,
    },
    PaletteEntry {
        label: "Clear Output",
        keybinding: None,
        command: SessionCommand::ClearOutput,
    },
    PaletteEntry {
        label: "Toggle Output Panel",
        keybinding: Some("Ctrl+J"),
        command: SessionCommand::ToggleOutputPanel,
    },
    PaletteEntry {
        label: "Toggle Fullscreen",
        keybinding: Some("F11"),
        command: SessionCommand::ToggleFullscreen,
    },
    PaletteEntry {
        label: "Find and Replace",
        keybinding: Some("Ctrl+F"),
        command: SessionCommand::ToggleSearch,
    },
    PaletteEntry {
        label: "Show Output Surface",
        keybinding: None,
        command: SessionCommand::SelectSurface(Surface::Output),
    },
    PaletteEntry {
        label: "Show Problems Surface",
        keybinding: None,
        command: SessionCommand::SelectSurface(Surface::Problems),
    },
    PaletteEntry {
        label: "Show Terminal Surface",
        keybinding: None,
        command: SessionCommand::SelectSurface(Surface::Terminal),
    },
    PaletteEntry {
        label: "New Tab",
        keybinding: Some("Ctrl+T"),
        command: SessionCommand::NewTab,
    },
    PaletteEntry {
        label: "Close Tab",
        keybinding: Some("Ctrl+W"),
        command: SessionCommand::CloseTab,
    },
    PaletteEntry {
        label: "Next Tab",
        keybinding: Some("Alt+Right"),
        command: SessionCommand::NextTab,
    },
    PaletteEntry {
        label: "Quit",
        keybinding: Some("Ctrl+C"),
        command: SessionCommand::Quit,
    },
];
