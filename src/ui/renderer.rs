/// Presentation layer: double-buffered, diff-based terminal renderer.
///
/// How it works:
///   1. Build the next frame into `front` buffer (array of Cell)
///   2. Compare each cell with `back` buffer (previous frame)
///   3. Only emit terminal commands for cells that changed
///   4. All commands are batched with `queue!`, flushed once at the end
///   5. Swap front/back
///
/// This eliminates flicker caused by full-screen redraws.
///
/// The renderer owns no game rules: it reads the App snapshot and draws
/// one of three screens (menu, setup dialog, game).

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::app::{App, SetupField};
use crate::domain::gallows;
use crate::domain::session::{Phase, MAX_WRONG};

// ── Palette ──

const VIOLET: Color = Color::Rgb { r: 139, g: 92, b: 246 };
const EMERALD: Color = Color::Rgb { r: 16, g: 185, b: 129 };
const ROSE: Color = Color::Rgb { r: 225, g: 29, b: 72 };
const GOLD: Color = Color::Rgb { r: 255, g: 200, b: 50 };
const GREY: Color = Color::Rgb { r: 161, g: 161, b: 170 };
const KEY_BG: Color = Color::Rgb { r: 63, g: 63, b: 70 };
const PANEL_BG: Color = Color::Rgb { r: 39, g: 39, b: 42 };

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    /// Explicit dark background for all "empty" terminal cells, so the
    /// inter-row gap color always matches the cell color (no visible
    /// horizontal lines on VTE-based terminals).
    const BASE_BG: Color = Color::Rgb { r: 24, g: 24, b: 27 };

    const BLANK: Cell = Cell { ch: ' ', fg: Color::White, bg: Cell::BASE_BG };

    /// Sentinel cell used to invalidate the back buffer.
    /// Different from any real cell, so every position will be diff'd.
    const INVALID: Cell = Cell { ch: '?', fg: Color::Magenta, bg: Color::Magenta };

    /// Normalize bg: Color::Reset → BASE_BG so that every cell gets an
    /// explicit background color (never terminal-default).
    #[inline]
    fn norm_bg(bg: Color) -> Color {
        match bg {
            Color::Reset => Self::BASE_BG,
            other => other,
        }
    }

    fn new(ch: char, fg: Color, bg: Color) -> Self {
        Cell { ch, fg, bg: Self::norm_bg(bg) }
    }
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer { width: w, height: h, cells: vec![Cell::BLANK; w * h] }
    }

    fn resize(&mut self, w: usize, h: usize) {
        if self.width != w || self.height != h {
            self.width = w;
            self.height = h;
            self.cells = vec![Cell::BLANK; w * h];
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    /// Write a string at (x, y) with given colors. Each char occupies 1 column.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::new(ch, fg, bg));
            cx += 1;
        }
    }

    /// Fill a full row with a background color.
    fn fill_row(&mut self, y: usize, fg: Color, bg: Color) {
        for x in 0..self.width {
            self.set(x, y, Cell::new(' ', fg, bg));
        }
    }
}

// ── Screen: which layout the front buffer holds ──

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Setup,
    Game,
}

fn screen_of(app: &App) -> Screen {
    if app.setup.is_some() {
        Screen::Setup
    } else if app.session.phase == Phase::Menu {
        Screen::Menu
    } else {
        Screen::Game
    }
}

// ── Renderer ──

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    term_w: usize,
    term_h: usize,
    last_screen: Option<Screen>,
    keyboard_columns: usize,
}

impl Renderer {
    pub fn new(keyboard_columns: usize) -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(0, 0),
            back: FrameBuffer::new(0, 0),
            term_w: 0,
            term_h: 0,
            last_screen: None,
            keyboard_columns,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            SetBackgroundColor(Cell::BASE_BG),
            Clear(ClearType::All)
        )?;

        let (tw, th) = terminal::size().unwrap_or((80, 24));
        self.term_w = tw as usize;
        self.term_h = th as usize;
        self.front.resize(self.term_w, self.term_h);
        self.back.resize(self.term_w, self.term_h);
        // Force full repaint on first frame: back ≠ front for every cell.
        self.back.cells.fill(Cell::INVALID);

        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    pub fn render(&mut self, app: &App) -> io::Result<()> {
        // Detect terminal resize
        let (tw, th) = terminal::size().unwrap_or((80, 24));
        if tw as usize != self.term_w || th as usize != self.term_h {
            self.term_w = tw as usize;
            self.term_h = th as usize;
            self.front.resize(self.term_w, self.term_h);
            self.back.resize(self.term_w, self.term_h);
            // Force full repaint after resize.
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
        }

        // Detect screen change → clear for clean transition
        let screen = screen_of(app);
        if self.last_screen != Some(screen) {
            self.back.cells.fill(Cell::INVALID);
            queue!(self.writer, SetBackgroundColor(Cell::BASE_BG), Clear(ClearType::All))?;
            self.last_screen = Some(screen);
        }

        // Build front buffer
        self.front.clear();

        match screen {
            Screen::Menu => self.compose_menu(app),
            Screen::Setup => self.compose_setup(app),
            Screen::Game => self.compose_game(app),
        }

        self.compose_message_bar(app);

        // Diff and emit
        self.flush_diff()?;

        // Swap: current front becomes next back
        std::mem::swap(&mut self.front, &mut self.back);

        Ok(())
    }

    // ── Diff flush: only write changed cells ──

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut last_bg = Cell::BASE_BG;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        // Set explicit base colors at start of frame. Not ResetColor:
        // the terminal's native default may differ from BASE_BG and
        // cause line artifacts.
        queue!(
            self.writer,
            SetForegroundColor(Color::White),
            SetBackgroundColor(Cell::BASE_BG),
        )?;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let cell = self.front.get(x, y);
                if cell == self.back.get(x, y) {
                    need_move = true;
                    continue;
                }

                // Position cursor if needed
                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }

                // Set colors only if changed
                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }

                queue!(self.writer, Print(cell.ch))?;
                last_x = x;
                last_y = y;
            }
        }

        self.writer.flush()
    }

    // ── Menu screen ──

    fn compose_menu(&mut self, _app: &App) {
        let title = [
            r" _   _    _    _   _  ____ __  __    _    _   _ ",
            r"| | | |  / \  | \ | |/ ___|  \/  |  / \  | \ | |",
            r"| |_| | / _ \ |  \| | |  _| |\/| | / _ \ |  \| |",
            r"|  _  |/ ___ \| |\  | |_| | |  | |/ ___ \| |\  |",
            r"|_| |_/_/   \_\_| \_|\____|_|  |_/_/   \_\_| \_|",
        ];

        for (i, line) in title.iter().enumerate() {
            self.front.put_str(4, 2 + i, line, GOLD, Color::Reset);
        }

        self.front.put_str(4, 8, "Choose your game mode", GREY, Color::Reset);

        let menu_base = 11;
        self.front.put_str(8, menu_base, "  1     Single Player", VIOLET, Color::Reset);
        self.front.put_str(8, menu_base + 1, "  2     Two Players", EMERALD, Color::Reset);
        self.front.put_str(8, menu_base + 2, "  Q     Quit", Color::White, Color::Reset);

        let help = [
            "Single player: guess a random word from a built-in category.",
            "Two players: one player enters a secret word for the other.",
        ];
        for (i, line) in help.iter().enumerate() {
            self.front.put_str(8, menu_base + 5 + i, line, Color::DarkGrey, Color::Reset);
        }
    }

    // ── Two-player setup dialog ──

    fn compose_setup(&mut self, app: &App) {
        let Some(draft) = &app.setup else { return };

        const BOX_W: usize = 48;
        let left = self.front.width.saturating_sub(BOX_W) / 2;
        let top = 4;

        let horiz: String = "═".repeat(BOX_W - 2);
        self.front.put_str(left, top, &format!("╔{horiz}╗"), EMERALD, PANEL_BG);
        for dy in 1..9 {
            self.front.put_str(left, top + dy, "║", EMERALD, PANEL_BG);
            for x in left + 1..left + BOX_W - 1 {
                self.front.set(x, top + dy, Cell::new(' ', Color::White, PANEL_BG));
            }
            self.front.put_str(left + BOX_W - 1, top + dy, "║", EMERALD, PANEL_BG);
        }
        self.front.put_str(left, top + 9, &format!("╚{horiz}╝"), EMERALD, PANEL_BG);

        self.front.put_str(left + 3, top + 1, "Enter Your Word", Color::White, PANEL_BG);
        self.front.put_str(left + 3, top + 2, "Player 2, no peeking!", GREY, PANEL_BG);

        self.compose_setup_field(left, top + 4, "Word:    ", &draft.word,
            draft.focus == SetupField::Word, app.anim_tick);
        self.compose_setup_field(left, top + 6, "Category:", &draft.category,
            draft.focus == SetupField::Category, app.anim_tick);

        self.front.put_str(left + 3, top + 8, "ENTER: Start   TAB: Switch field   ESC: Cancel",
            Color::DarkGrey, PANEL_BG);
    }

    fn compose_setup_field(&mut self, left: usize, row: usize, label: &str, value: &str, focused: bool, anim_tick: u32) {
        const BOX_W: usize = 48;
        let (arrow, label_fg) = if focused { ("▸", EMERALD) } else { (" ", GREY) };
        self.front.put_str(left + 2, row, arrow, EMERALD, PANEL_BG);
        self.front.put_str(left + 3, row, label, label_fg, PANEL_BG);

        // Show the tail when the value outgrows the field.
        let field_x = left + 13;
        let field_w = BOX_W - 16;
        let chars: Vec<char> = value.chars().collect();
        let start = chars.len().saturating_sub(field_w - 1);
        let shown: String = chars[start..].iter().collect();
        self.front.put_str(field_x, row, &shown, Color::White, PANEL_BG);

        if focused && (anim_tick / 3) % 2 == 0 {
            let cursor_x = field_x + shown.chars().count();
            if cursor_x < left + BOX_W - 2 {
                self.front.set(cursor_x, row, Cell::new('_', EMERALD, PANEL_BG));
            }
        }
    }

    // ── Game screen ──

    fn compose_game(&mut self, app: &App) {
        let s = &app.session;

        // ── HUD row ──
        self.front.fill_row(0, Color::White, PANEL_BG);
        let hud = format!(" Attempts {}/{} ", s.wrong_attempts, MAX_WRONG);
        self.front.put_str(0, 0, &hud, Color::White, PANEL_BG);

        // ── Category ──
        self.front.put_str(2, 2, "Category: ", GREY, Color::Reset);
        self.front.put_str(12, 2, &s.category, VIOLET, Color::Reset);

        // ── Gallows ──
        let mut row = 4;
        for line in gallows::frame(s.wrong_attempts).lines() {
            self.front.put_str(4, row, line, EMERALD, Color::Reset);
            row += 1;
        }
        row += 1;

        // ── Masked word, one space between characters ──
        let spaced: String = s
            .masked_word()
            .chars()
            .flat_map(|c| [c, ' '])
            .collect();
        self.front.put_str(4, row, spaced.trim_end(), Color::White, Color::Reset);
        row += 2;

        // ── Won / lost banner ──
        match s.phase {
            Phase::Won => {
                self.front.put_str(4, row, "Congratulations! You won!", EMERALD, Color::Reset);
                self.front.put_str(4, row + 1, "ENTER: Play Again   ESC: Menu", Color::DarkGrey, Color::Reset);
                row += 3;
            }
            Phase::Lost => {
                let reveal = format!("Game Over! The word was: {}", s.word);
                self.front.put_str(4, row, &reveal, ROSE, Color::Reset);
                self.front.put_str(4, row + 1, "ENTER: Play Again   ESC: Menu", Color::DarkGrey, Color::Reset);
                row += 3;
            }
            _ => {}
        }

        // ── Keyboard grid ──
        row = self.compose_keyboard(app, row);

        // ── Help bar ──
        if row + 1 < self.front.height {
            let help = match s.phase {
                Phase::Playing => " Type a letter to guess   ESC: Menu",
                _ => " ESC: Menu",
            };
            self.front.put_str(0, row + 1, help, Color::DarkGrey, Color::Reset);
        }
    }

    /// Draw the A–Z keyboard starting at `top`; returns the row after it.
    fn compose_keyboard(&mut self, app: &App, top: usize) -> usize {
        let s = &app.session;
        let playing = s.phase == Phase::Playing;

        let mut row = top;
        let mut col = 0;
        for letter in 'A'..='Z' {
            let (fg, bg) = if s.is_guessed(letter) {
                if s.word.contains(letter) {
                    (Color::White, EMERALD)
                } else {
                    (Color::White, ROSE)
                }
            } else if playing {
                (Color::White, KEY_BG)
            } else {
                (Color::DarkGrey, PANEL_BG)
            };

            let x = 4 + col * 4;
            self.front.put_str(x, row, &format!(" {letter} "), fg, bg);

            col += 1;
            if col >= self.keyboard_columns {
                col = 0;
                row += 2;
            }
        }
        if col > 0 {
            row += 2;
        }
        row
    }

    // ── Message bar (all screens) ──

    fn compose_message_bar(&mut self, app: &App) {
        if app.message.is_empty() {
            return;
        }
        let msg_row = self.front.height.saturating_sub(1);
        self.front.fill_row(msg_row, Color::Black, GOLD);
        let msg = format!(" ◈ {} ", app.message);
        self.front.put_str(0, msg_row, &msg, Color::Black, GOLD);
    }
}
