//! Terminal preview of the deck (native only).
//!
//! The terminal stands in for the browser: the header menu shows in desktop
//! mode and the tab bar in mobile mode, exactly as the page's CSS does, and the
//! terminal width (columns × cell size) drives the viewport classifier.
//! Navigation is pointer-only; keys only quit or rebind cards.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::config::DeckConfig;
use crate::constants::viewport::TERMINAL_CELL_PX;
use crate::deck::Deck;
use crate::flip::{PointerKind, TapTarget};
use crate::navigation::{self, ListenerTable, SlideNavigator};
use crate::page::current_footer_text;
use crate::surface::SurfaceKind;

/// Cards shown under every slide in the preview.
pub const PREVIEW_CARDS: usize = 3;

const CARD_NAMES: [&str; PREVIEW_CARDS] = ["Anna", "Boris", "Vera"];

#[derive(Clone, Copy, Debug, Default)]
struct CardHit {
    area: Rect,
    link: Option<Rect>,
}

/// Clickable regions from the last frame.
#[derive(Debug, Default)]
struct Hits {
    header: Vec<Rect>,
    tabs: Vec<Rect>,
    prev: Option<Rect>,
    next: Option<Rect>,
    cards: Vec<CardHit>,
}

pub struct Preview {
    deck: Rc<RefCell<Deck>>,
    header: ListenerTable,
    tabs: ListenerTable,
    hits: Hits,
    hovered: Option<usize>,
    brand: String,
    quit: bool,
}

pub fn width_px(columns: u16) -> u32 {
    columns as u32 * TERMINAL_CELL_PX
}

impl Preview {
    pub fn new(cfg: &DeckConfig, columns: u16) -> Result<Self> {
        let deck = Rc::new(RefCell::new(Deck::headless(cfg, width_px(columns), PREVIEW_CARDS)?));
        let mut header = ListenerTable::new(cfg.total_slides);
        let mut tabs = ListenerTable::new(cfg.total_slides);
        navigation::bind(&deck, &mut header, &mut tabs);
        Ok(Self {
            deck,
            header,
            tabs,
            hits: Hits::default(),
            hovered: None,
            brand: cfg.brand.clone(),
            quit: false,
        })
    }

    pub fn deck(&self) -> std::cell::Ref<'_, Deck> {
        self.deck.borrow()
    }

    pub fn quit_flag(&self) -> bool {
        self.quit
    }

    pub fn on_resize(&mut self, columns: u16) {
        self.deck.borrow_mut().on_resize(width_px(columns));
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let at = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(at),
            MouseEventKind::Moved => self.hover(at),
            _ => {}
        }
    }

    fn click(&mut self, at: Position) {
        if let Some(i) = self.hits.header.iter().position(|r| r.contains(at)) {
            self.header.fire(i);
            return;
        }
        if let Some(i) = self.hits.tabs.iter().position(|r| r.contains(at)) {
            self.tabs.fire(i);
            return;
        }
        if self.hits.prev.is_some_and(|r| r.contains(at)) {
            self.deck.borrow_mut().previous_slide();
            return;
        }
        if self.hits.next.is_some_and(|r| r.contains(at)) {
            self.deck.borrow_mut().next_slide();
            return;
        }
        let Some((i, hit)) = self.card_at(at) else {
            return;
        };
        let mut deck = self.deck.borrow_mut();
        let flipped = deck.cards().is_flipped(i).unwrap_or(false);
        let target = if hit.link.is_some_and(|r| r.contains(at)) {
            TapTarget::Link
        } else if flipped {
            TapTarget::Back
        } else {
            TapTarget::Front
        };
        let out = deck.card_tap(i, target);
        if target == TapTarget::Link && out.is_some() {
            log::info!("open profile link for {}", CARD_NAMES[i % PREVIEW_CARDS]);
        }
    }

    fn hover(&mut self, at: Position) {
        let now = self.card_at(at).map(|(i, _)| i);
        if now == self.hovered {
            return;
        }
        let mut deck = self.deck.borrow_mut();
        if let Some(prev) = self.hovered {
            deck.card_pointer(prev, PointerKind::Leave);
        }
        if let Some(next) = now {
            deck.card_pointer(next, PointerKind::Enter);
        }
        self.hovered = now;
    }

    fn card_at(&self, at: Position) -> Option<(usize, CardHit)> {
        self.hits
            .cards
            .iter()
            .enumerate()
            .find(|(_, hit)| hit.area.contains(at))
            .map(|(i, hit)| (i, *hit))
    }

    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match (code, modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            (KeyCode::Char('r'), _) => {
                self.deck.borrow_mut().rebind();
            }
            _ => {}
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let deck = self.deck.borrow();
        let desktop = deck.is_desktop_mode();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header menu (desktop) / title (mobile)
                Constraint::Min(0),    // slide panel
                Constraint::Length(1), // tab bar (mobile)
                Constraint::Length(1), // footer
            ])
            .split(f.area());

        let mut hits = Hits::default();

        // Header: arrow controls and nav items (desktop), brand only on mobile.
        let mut x = chunks[0].x;
        let mut spans = vec![Span::styled(
            format!(" {} ", self.brand),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        x += spans[0].width() as u16;
        if desktop {
            let header = deck.synchronizer().active_flags(SurfaceKind::Header);
            x = push_button(&mut spans, &mut hits.prev, x, chunks[0].y, " ◀ ", false);
            for (i, active) in header.iter().enumerate() {
                let mut slot = None;
                x = push_button(&mut spans, &mut slot, x, chunks[0].y, &format!(" Slide {} ", i + 1), *active);
                hits.header.extend(slot);
            }
            push_button(&mut spans, &mut hits.next, x, chunks[0].y, " ▶ ", false);
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

        // Slide panel
        let panels = deck.synchronizer().active_flags(SurfaceKind::Panels);
        let active = panels.iter().position(|&on| on).unwrap_or(0);
        let panel = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Slide {} / {} ", active + 1, deck.total_slides()));
        let inner = panel.inner(chunks[1]);
        f.render_widget(panel, chunks[1]);

        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(5)])
            .split(inner);
        let mode_hint = if desktop {
            "Hover a card to flip it."
        } else {
            "Tap a card to flip it; tap the back to flip it back."
        };
        f.render_widget(
            Paragraph::new(format!("Content of slide {}. {mode_hint}", active + 1))
                .wrap(Wrap { trim: true }),
            body[0],
        );

        let card_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, PREVIEW_CARDS as u32); PREVIEW_CARDS])
            .split(body[1]);
        for (i, area) in card_cols.iter().enumerate() {
            let flipped = deck.cards().is_flipped(i).unwrap_or(false);
            hits.cards.push(draw_card(f, *area, CARD_NAMES[i], flipped));
        }

        // Tab bar (mobile)
        if !desktop {
            let tabs = deck.synchronizer().active_flags(SurfaceKind::Tabs);
            let mut spans = Vec::new();
            let mut x = chunks[2].x;
            for (i, active) in tabs.iter().enumerate() {
                let mut slot = None;
                x = push_button(&mut spans, &mut slot, x, chunks[2].y, &format!(" {} ", i + 1), *active);
                hits.tabs.extend(slot);
            }
            f.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);
        }

        let footer = format!(
            "{}  ·  {} {}px  ·  click to navigate, r rebind, q quit",
            current_footer_text(&self.brand),
            deck.mode(),
            deck.viewport().width()
        );
        f.render_widget(
            Paragraph::new(footer).style(Style::default().add_modifier(Modifier::DIM)),
            chunks[3],
        );

        drop(deck);
        self.hits = hits;
    }
}

/// Append a clickable label and record its area; returns the next x.
fn push_button(
    spans: &mut Vec<Span<'static>>,
    hit: &mut Option<Rect>,
    x: u16,
    y: u16,
    label: &str,
    active: bool,
) -> u16 {
    let width = Span::raw(label.to_string()).width() as u16;
    let style = if active {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default()
    };
    spans.push(Span::styled(label.to_string(), style));
    *hit = Some(Rect::new(x, y, width, 1));
    x + width
}

fn draw_card(f: &mut Frame, area: Rect, name: &str, flipped: bool) -> CardHit {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if flipped { BorderType::Double } else { BorderType::Plain });
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !flipped {
        let text = vec![
            Line::from(Span::styled(name.to_string(), Style::default().add_modifier(Modifier::BOLD))),
            Line::from("Team member"),
        ];
        f.render_widget(Paragraph::new(text), inner);
        return CardHit { area, link: None };
    }

    f.render_widget(
        Paragraph::new(format!("About {name}")).wrap(Wrap { trim: true }),
        inner,
    );
    let link = (inner.height >= 2).then(|| Rect::new(inner.x, inner.y + inner.height - 1, inner.width.min(11), 1));
    if let Some(link) = link {
        f.render_widget(
            Paragraph::new("[ profile ]").style(Style::default().add_modifier(Modifier::UNDERLINED)),
            link,
        );
    }
    CardHit { area, link }
}

/// Run the preview until the user quits.
pub fn run(cfg: &DeckConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    let result = Preview::new(cfg, size.width).and_then(|mut preview| run_loop(&mut preview, &mut terminal));

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run_loop(
    preview: &mut Preview,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| preview.draw(f))?;
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(k) if k.kind == KeyEventKind::Press => preview.on_key(k.code, k.modifiers),
                Event::Mouse(m) => preview.on_mouse(m),
                Event::Resize(columns, _) => preview.on_resize(columns),
                _ => {}
            }
        }
        if preview.quit_flag() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn moved(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn render(preview: &mut Preview, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| preview.draw(f)).unwrap();
        terminal
    }

    #[test]
    fn header_click_navigates_on_desktop() {
        let mut preview = Preview::new(&DeckConfig::default(), 160).unwrap();
        render(&mut preview, 160, 24);

        let third = preview.hits.header[2];
        preview.on_mouse(click(third.x + 1, third.y));
        assert_eq!(preview.deck().current_slide(), 2);
        assert!(preview.hits.tabs.is_empty(), "tab bar hidden on desktop");

        let next = preview.hits.next.unwrap();
        preview.on_mouse(click(next.x, next.y));
        assert_eq!(preview.deck().current_slide(), 3);
    }

    #[test]
    fn tab_click_navigates_on_mobile() {
        let mut preview = Preview::new(&DeckConfig::default(), 80).unwrap();
        render(&mut preview, 80, 24);
        assert!(!preview.deck().is_desktop_mode());

        let last = *preview.hits.tabs.last().unwrap();
        preview.on_mouse(click(last.x, last.y));
        assert_eq!(preview.deck().current_slide(), 4);
    }

    #[test]
    fn hover_flips_cards_on_desktop() {
        let mut preview = Preview::new(&DeckConfig::default(), 160).unwrap();
        render(&mut preview, 160, 24);

        let card = preview.hits.cards[1].area;
        preview.on_mouse(moved(card.x + 1, card.y + 1));
        assert_eq!(preview.deck().cards().flipped_flags(), vec![false, true, false]);

        preview.on_mouse(moved(0, 0));
        assert_eq!(preview.deck().cards().flipped_flags(), vec![false, false, false]);
    }

    #[test]
    fn tap_flips_and_link_does_not_flip_back_on_mobile() {
        let mut preview = Preview::new(&DeckConfig::default(), 80).unwrap();
        render(&mut preview, 80, 24);

        let card = preview.hits.cards[0].area;
        preview.on_mouse(click(card.x + 1, card.y + 1));
        assert_eq!(preview.deck().cards().is_flipped(0), Some(true));

        render(&mut preview, 80, 24);
        let link = preview.hits.cards[0].link.expect("back face shows a link");
        preview.on_mouse(click(link.x, link.y));
        assert_eq!(preview.deck().cards().is_flipped(0), Some(true));

        preview.on_mouse(click(card.x + 1, card.y + 1));
        assert_eq!(preview.deck().cards().is_flipped(0), Some(false));
    }

    #[test]
    fn resize_switches_visible_navigation() {
        let mut preview = Preview::new(&DeckConfig::default(), 160).unwrap();
        preview.on_resize(90);
        render(&mut preview, 90, 24);
        assert!(preview.hits.header.is_empty());
        assert_eq!(preview.hits.tabs.len(), 5);
    }
}
