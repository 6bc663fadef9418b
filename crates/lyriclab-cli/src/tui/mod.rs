use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use lyriclab_core::structure::{SectionType, TEMPLATES};
use lyriclab_core::{SongForm, SongSpec};

pub mod structure_view;

/// Which pane has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The list of section types that can be added.
    Palette,
    /// The song's section sequence.
    Sequence,
}

/// Application state for the structure editor.
#[derive(Debug)]
pub struct App {
    pub form: SongForm,
    pub path: PathBuf,
    pub focus: Focus,
    pub palette_index: usize,
    pub selected: usize,
    /// The selected section is picked up and moves with the cursor.
    pub moving: bool,
    /// Position in the template list for the next `t` press.
    pub template_cursor: usize,
    pub dirty: bool,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(form: SongForm, path: PathBuf) -> Self {
        Self {
            form,
            path,
            focus: Focus::Sequence,
            palette_index: 0,
            selected: 0,
            moving: false,
            template_cursor: 0,
            dirty: false,
            status: String::new(),
            should_quit: false,
        }
    }

    /// Load the spec file, or start from defaults when it does not exist yet.
    pub fn open(path: PathBuf) -> Result<Self> {
        let spec = if path.exists() {
            SongSpec::load(&path)
                .with_context(|| format!("Failed to read spec file {}", path.display()))?
        } else {
            SongSpec::default()
        };
        let mut app = Self::new(SongForm::from_spec(spec), path);
        if !app.path.exists() {
            app.status = "New spec file; press s to create it".to_string();
        }
        Ok(app)
    }

    fn section_count(&self) -> usize {
        self.form.structure().len()
    }

    fn clamp_selection(&mut self) {
        let count = self.section_count();
        if count == 0 {
            self.selected = 0;
            self.moving = false;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.moving {
                    self.moving = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Tab => {
                self.moving = false;
                self.focus = match self.focus {
                    Focus::Palette => Focus::Sequence,
                    Focus::Sequence => Focus::Palette,
                };
            }
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('t') => self.next_template(),
            _ => match self.focus {
                Focus::Palette => self.handle_palette_key(key),
                Focus::Sequence => self.handle_sequence_key(key),
            },
        }
    }

    fn handle_palette_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.palette_index + 1 < SectionType::ALL.len() {
                    self.palette_index += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.palette_index = self.palette_index.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char('a') => {
                let kind = SectionType::ALL[self.palette_index];
                self.form.structure_editor().add_section(kind);
                self.selected = self.section_count() - 1;
                self.dirty = true;
                self.status = format!("Added {}", kind.label());
            }
            _ => {}
        }
    }

    fn handle_sequence_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('j') | KeyCode::Down => self.step(1),
            KeyCode::Char('k') | KeyCode::Up => self.step(-1),
            KeyCode::Char(' ' | 'm') | KeyCode::Enter => {
                if self.section_count() > 0 {
                    self.moving = !self.moving;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                self.moving = false;
                if let Some(removed) = self.form.structure_editor().remove_section(self.selected)
                {
                    self.dirty = true;
                    self.status = format!("Removed {}", removed.label());
                    self.clamp_selection();
                }
            }
            _ => {}
        }
    }

    /// Move the cursor, carrying the selected section along while moving.
    fn step(&mut self, delta: isize) {
        let count = self.section_count();
        if count == 0 {
            return;
        }
        let Some(target) = self
            .selected
            .checked_add_signed(delta)
            .filter(|&target| target < count)
        else {
            return;
        };
        if self.moving && self.form.structure_editor().reorder(self.selected, target) {
            self.dirty = true;
        }
        self.selected = target;
    }

    fn next_template(&mut self) {
        let template = &TEMPLATES[self.template_cursor % TEMPLATES.len()];
        self.template_cursor = (self.template_cursor + 1) % TEMPLATES.len();
        if self.form.structure_editor().apply_template(template.id) {
            self.moving = false;
            self.selected = 0;
            self.dirty = true;
            self.status = format!("Applied template: {}", template.name);
        }
    }

    fn save(&mut self) {
        match self.form.spec().save(&self.path) {
            Ok(()) => {
                self.dirty = false;
                self.status = format!("Saved {}", self.path.display());
            }
            Err(error) => {
                log::warn!("Could not save {}: {}", self.path.display(), error);
                self.status = format!("Save failed: {error}");
            }
        }
    }
}

/// Run the structure editor on a spec file.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub fn run_tui(path: PathBuf) -> Result<()> {
    let app = App::open(path)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = result?;
    if app.dirty {
        println!("Structure not saved: {}", app.form.spec().structure);
    } else {
        println!("{}", app.form.spec().structure);
    }
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<App> {
    loop {
        terminal.draw(|frame| structure_view::render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit {
            return Ok(app);
        }
    }
}
