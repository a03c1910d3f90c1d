//! Browser front end: canvas board plus a few DOM overlays.
//!
//! This is a thin adapter. Pointer events are hit-tested to grid cells and fed
//! into [`GameSession`]; after every event the board is redrawn from the
//! session's read projections. No game rule lives here.
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, PointerEvent, window};

use crate::config::GameConfig;
use crate::grid::Coordinate;
use crate::puzzle::{self, Puzzle, PuzzleCatalogue};
use crate::session::{CellState, GameSession};

// --- Layout -----------------------------------------------------------------

pub const CELL_SIZE: f64 = 48.0;
pub const CELL_GAP: f64 = 8.0;
pub const BOARD_PADDING: f64 = 16.0;
const CONNECTOR_WIDTH: f64 = 6.0;

const SELECTION_COLOR: &str = "#3b82f6";

/// Colours for found words, cycled by found order.
pub const WORD_COLORS: [&str; 10] = [
    "#facc15", // yellow
    "#10b981", // emerald
    "#3b82f6", // blue
    "#ef4444", // red
    "#8b5cf6", // violet
    "#f59e0b", // amber
    "#06b6d4", // cyan
    "#84cc16", // lime
    "#ec4899", // pink
    "#6366f1", // indigo
];

pub fn word_color(ordinal: usize) -> &'static str {
    WORD_COLORS[ordinal % WORD_COLORS.len()]
}

/// Pixel geometry of a rows×cols board of round cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
}

impl BoardLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    fn pitch() -> f64 {
        CELL_SIZE + CELL_GAP
    }

    /// Canvas (width, height) in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        let w = self.cols as f64 * Self::pitch() - CELL_GAP + BOARD_PADDING * 2.0;
        let h = self.rows as f64 * Self::pitch() - CELL_GAP + BOARD_PADDING * 2.0;
        (w as u32, h as u32)
    }

    pub fn cell_center(&self, cell: Coordinate) -> (f64, f64) {
        let r = CELL_SIZE / 2.0;
        (
            BOARD_PADDING + cell.col as f64 * Self::pitch() + r,
            BOARD_PADDING + cell.row as f64 * Self::pitch() + r,
        )
    }

    /// Cell whose circle contains the canvas-local point, if any.
    ///
    /// Gaps and circle corners hit nothing, so a diagonal drag can cross the
    /// corner between two cells without brushing their orthogonal neighbours.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Coordinate> {
        let lx = x - BOARD_PADDING;
        let ly = y - BOARD_PADDING;
        if lx < 0.0 || ly < 0.0 {
            return None;
        }
        let col = (lx / Self::pitch()).floor() as usize;
        let row = (ly / Self::pitch()).floor() as usize;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let cell = Coordinate::new(row, col);
        let (cx, cy) = self.cell_center(cell);
        let r = CELL_SIZE / 2.0;
        if (x - cx).powi(2) + (y - cy).powi(2) <= r * r {
            Some(cell)
        } else {
            None
        }
    }
}

// --- Runtime state ----------------------------------------------------------

struct BoardState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    layout: BoardLayout,
    session: GameSession,
}

thread_local! {
    static BOARD_STATE: std::cell::RefCell<Option<BoardState>> = const { std::cell::RefCell::new(None) };
}

// --- WASM Entry -------------------------------------------------------------

/// Pick today's puzzle from `catalogue_json` (or the built-ins when empty) and
/// mount the board.
pub fn start_board_mode(config: &GameConfig, catalogue_json: Option<&str>) -> Result<(), JsValue> {
    let catalogue = match catalogue_json {
        Some(json) => PuzzleCatalogue::from_json(json, config),
        None => PuzzleCatalogue::builtin(config),
    }
    .map_err(to_js)?;
    let today = puzzle::today();
    let puzzle = match catalogue_json {
        Some(_) => catalogue.by_date(today),
        None => catalogue.daily(today),
    }
    .map_err(to_js)?
    .clone();
    mount(puzzle, config)
}

fn mount(puzzle: Puzzle, config: &GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let session = GameSession::with_config(puzzle, config).map_err(to_js)?;
    let layout = BoardLayout::new(session.grid().rows(), session.grid().cols());
    let (width, height) = layout.canvas_size();

    // Create / reuse canvas. Listeners read BOARD_STATE, so a reused canvas
    // already has them.
    let existing = doc.get_element_by_id("ws-board-canvas");
    let fresh = existing.is_none();
    let canvas: HtmlCanvasElement = if let Some(el) = existing {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("ws-board-canvas");
        // touch-action:none keeps touch drags from scrolling the page
        c.set_attribute("style", "display:block; margin:72px auto 0; touch-action:none; user-select:none; background:#ffffff; border-radius:12px; box-shadow:0 4px 18px rgba(0,0,0,0.15);").ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    ctx.set_font("bold 18px 'Fira Sans', sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    ensure_overlays(&doc)?;
    set_text(&doc, "ws-theme", &format!("Theme: {}", session.theme()));

    let state = BoardState {
        canvas: canvas.clone(),
        ctx,
        layout,
        session,
    };
    BOARD_STATE.with(|b| b.replace(Some(state)));

    if fresh {
        install_listeners(&canvas)?;
    }
    with_state(redraw);
    Ok(())
}

fn install_listeners(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    // Press: start a drag and capture the pointer so moves outside the canvas
    // still arrive here.
    {
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: PointerEvent| {
            evt.prevent_default();
            let id = evt.pointer_id();
            let started = with_state(|st| {
                let started = match st.layout.cell_at(evt.offset_x() as f64, evt.offset_y() as f64) {
                    Some(cell) => st.session.pointer_down_from(id, cell),
                    None => false,
                };
                redraw(st);
                started
            });
            if started == Some(true) {
                target.set_pointer_capture(id).ok();
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Move: extend or backtrack
    {
        let closure = Closure::wrap(Box::new(move |evt: PointerEvent| {
            let id = evt.pointer_id();
            with_state(|st| {
                if let Some(cell) = st.layout.cell_at(evt.offset_x() as f64, evt.offset_y() as f64) {
                    st.session.pointer_move_from(id, cell);
                    redraw(st);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Release (and leaving the surface uncaptured) evaluates the selection
    for kind in ["pointerup", "pointerleave"] {
        let closure = Closure::wrap(Box::new(move |evt: PointerEvent| {
            let id = evt.pointer_id();
            with_state(|st| {
                if st.session.pointer_up_from(id).is_some() {
                    redraw(st);
                }
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // System interruption discards the selection
    {
        let closure = Closure::wrap(Box::new(move |evt: PointerEvent| {
            let id = evt.pointer_id();
            with_state(|st| {
                st.session.pointer_cancel_from(id);
                redraw(st);
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn with_state<R>(f: impl FnOnce(&mut BoardState) -> R) -> Option<R> {
    BOARD_STATE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Current session snapshot as JSON, for hosts that render their own UI.
pub fn snapshot_json() -> Result<String, JsValue> {
    with_state(|st| serde_json::to_string(&st.session.snapshot()))
        .ok_or_else(|| JsValue::from_str("board not started"))?
        .map_err(to_js)
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// --- Rendering --------------------------------------------------------------

fn redraw(state: &mut BoardState) {
    render_board(state);
    if let Some(doc) = window().and_then(|w| w.document()) {
        update_overlays(&doc, &state.session);
    }
}

fn render_board(state: &BoardState) {
    let ctx = &state.ctx;
    let layout = &state.layout;
    let session = &state.session;
    let w = state.canvas.width() as f64;
    let h = state.canvas.height() as f64;

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, w, h);

    // Connectors sit beneath the cells
    ctx.set_line_width(CONNECTOR_WIDTH);
    ctx.set_line_cap("round");
    for (ordinal, found) in session.found().iter().enumerate() {
        draw_connectors(ctx, layout, &found.path, word_color(ordinal));
    }
    draw_connectors(ctx, layout, session.current_path(), SELECTION_COLOR);

    let grid = session.grid();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = Coordinate::new(row, col);
            let Some(letter) = grid.letter(cell) else {
                continue;
            };
            let (fill, border, text) = match session.cell_state(cell) {
                CellState::Selected(_) => (SELECTION_COLOR.to_string(), "#2563eb", "#ffffff"),
                // hex colour + "40" alpha gives the pale found-cell tint
                CellState::Found(ordinal) => (format!("{}40", word_color(ordinal)), word_color(ordinal), "#000000"),
                CellState::Free => ("#f3f4f6".to_string(), "#d1d5db", "#1f2937"),
            };
            let (cx, cy) = layout.cell_center(cell);
            ctx.begin_path();
            ctx.arc(cx, cy, CELL_SIZE / 2.0 - 1.0, 0.0, std::f64::consts::TAU).ok();
            // Found tint is translucent; paint white first so connectors don't show through
            ctx.set_fill_style_str("#ffffff");
            ctx.fill();
            ctx.set_fill_style_str(&fill);
            ctx.fill();
            ctx.set_line_width(2.0);
            ctx.set_stroke_style_str(border);
            ctx.stroke();
            ctx.set_fill_style_str(text);
            ctx.fill_text(&letter.to_string(), cx, cy).ok();
        }
    }
}

fn draw_connectors(ctx: &CanvasRenderingContext2d, layout: &BoardLayout, path: &[Coordinate], color: &str) {
    if path.len() < 2 {
        return;
    }
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(CONNECTOR_WIDTH);
    for pair in path.windows(2) {
        let (x1, y1) = layout.cell_center(pair[0]);
        let (x2, y2) = layout.cell_center(pair[1]);
        line(ctx, x1, y1, x2, y2);
    }
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

// --- DOM overlays -----------------------------------------------------------

const OVERLAYS: [(&str, &str); 5] = [
    ("ws-theme", "position:fixed; top:14px; left:50%; transform:translateX(-50%); font-family:'Fira Sans', sans-serif; font-size:18px; color:#4b5563;"),
    ("ws-current", "position:fixed; top:42px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:18px; font-weight:600; color:#1f2937; min-height:22px;"),
    ("ws-progress", "position:fixed; top:12px; left:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:#f3f4f6; border:1px solid #d1d5db; border-radius:6px; color:#1f2937;"),
    ("ws-words", "position:fixed; top:48px; left:12px; font-family:'Fira Code', monospace; font-size:14px; line-height:1.7; color:#4b5563;"),
    ("ws-complete", "position:fixed; bottom:24px; left:50%; transform:translateX(-50%); font-family:'Fira Sans', sans-serif; font-size:20px; font-weight:700; padding:10px 18px; background:#dcfce7; color:#166534; border-radius:8px; display:none;"),
];

fn ensure_overlays(doc: &Document) -> Result<(), JsValue> {
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    for (id, style) in OVERLAYS {
        if doc.get_element_by_id(id).is_none() {
            let div = doc.create_element("div")?;
            div.set_id(id);
            div.set_attribute("style", style).ok();
            body.append_child(&div)?;
        }
    }
    Ok(())
}

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn update_overlays(doc: &Document, session: &GameSession) {
    let (found, total) = session.progress();
    set_text(doc, "ws-current", session.selected_letters());
    set_text(doc, "ws-progress", &format!("Found: {found} / {total}"));

    if let Some(el) = doc.get_element_by_id("ws-words") {
        // Entries are A-Z or '?', safe to inline
        let html: String = session
            .word_list()
            .iter()
            .map(|e| {
                if e.found {
                    format!("<div style='color:#166534;text-decoration:line-through;'>{}</div>", e.display)
                } else {
                    format!("<div>{}</div>", e.display)
                }
            })
            .collect();
        el.set_inner_html(&html);
    }

    if let Some(el) = doc.get_element_by_id("ws-complete") {
        let (text, style) = completion_banner(session.is_complete());
        el.set_text_content(Some(text));
        el.set_attribute("style", &style).ok();
    }
}

/// Text and inline style of the `ws-complete` overlay.
fn completion_banner(complete: bool) -> (&'static str, String) {
    let base = OVERLAYS[4].1;
    if complete {
        ("Congratulations! You found all words!", base.replace("display:none;", "display:block;"))
    } else {
        ("", base.to_string())
    }
}
