use std::cell::Cell;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::io::config_io::resolve_config;
use crate::model::{AppState, Config, Intent, Item, ItemId};
use crate::ops::{Store, views};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
}

/// What the edit buffer will be committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// The "What needs to be done?" input
    NewItem,
    /// Inline rename of an existing item
    Rename(ItemId),
}

/// Main application state: the store plus everything only the view needs
pub struct App {
    pub store: Store,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the visible items
    pub cursor: usize,
    /// Scroll offset (first visible item row)
    pub scroll_offset: usize,
    pub edit_target: Option<EditTarget>,
    pub edit_buffer: String,
    /// Byte offset of the edit cursor in `edit_buffer`
    pub edit_cursor: usize,
    /// Help overlay visible
    pub show_help: bool,
    pub help_scroll: usize,
    /// Set whenever the screen needs drawing; the store raises it on every change
    pub needs_redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn new(mut store: Store, config: &Config) -> Self {
        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        store.subscribe(move |_| flag.set(true));

        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            edit_target: None,
            edit_buffer: String::new(),
            edit_cursor: 0,
            show_help: false,
            help_scroll: 0,
            needs_redraw,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        views::visible_items(self.store.state())
    }

    /// The item under the cursor, if the visible list is non-empty
    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.cursor).copied()
    }

    /// Forward an intent to the store, then keep the cursor on the list
    pub fn dispatch(&mut self, intent: Intent) {
        self.store.dispatch(intent);
        self.clamp_cursor();
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Move the cursor by `delta` rows, stopping at either end
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_items().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Move the cursor onto the item with this id, if it is visible
    pub fn select_id(&mut self, id: ItemId) {
        if let Some(pos) = self.visible_items().iter().position(|item| item.id == id) {
            self.cursor = pos;
        }
    }

    /// Open the new-item input with an empty buffer
    pub fn begin_new_item(&mut self) {
        self.begin_edit(EditTarget::NewItem, String::new());
    }

    /// Start an inline rename of the selected item, pre-filled with its name
    pub fn begin_rename(&mut self) {
        let Some((id, name)) = self
            .selected_item()
            .map(|item| (item.id, item.name.clone()))
        else {
            return;
        };
        self.begin_edit(EditTarget::Rename(id), name);
    }

    fn begin_edit(&mut self, target: EditTarget, text: String) {
        self.edit_cursor = text.len();
        self.edit_buffer = text;
        self.edit_target = Some(target);
        self.mode = Mode::Edit;
    }

    /// Leave edit mode without dispatching anything
    pub fn end_edit(&mut self) {
        self.edit_target = None;
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(config_path, &cwd)?;

    let mut app = App::new(Store::default(), &config);
    info!("starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!(items = app.state().items.len(), "tui exited");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.needs_redraw.replace(false) {
            terminal.draw(|frame| render::render(frame, app))?;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    // cursor and edit-buffer changes never reach the store
                    app.needs_redraw.set(true);
                }
                Event::Resize(..) => app.needs_redraw.set(true),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
