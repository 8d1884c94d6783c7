//! Carousel Snap Demo
//!
//! Simulates a horizontal carousel of cards that snaps each fling to the
//! leading card, one page at a time.
//!
//! Run with: cargo run -p blinc_snap --example carousel
//! Set RUST_LOG=blinc_snap=trace to see every snap decision.

use blinc_snap::prelude::*;
use blinc_snap::DEFAULT_DENSITY_DPI;
use tracing_subscriber::EnvFilter;

const CARD_WIDTH: i32 = 280;
const CARD_GAP: i32 = 16;
const VIEWPORT: i32 = 360;
const PADDING: i32 = 24;

/// Horizontally scrolling row of equally sized cards
struct Carousel {
    cards: usize,
    offset: i32,
    locale: &'static str,
}

#[derive(Clone, Copy, Debug)]
struct Card {
    position: usize,
    start: i32,
}

impl Carousel {
    fn stride() -> i32 {
        CARD_WIDTH + CARD_GAP
    }

    fn max_offset(&self) -> i32 {
        let content = PADDING * 2 + self.cards as i32 * Self::stride() - CARD_GAP;
        (content - VIEWPORT).max(0)
    }

    fn visible(&self) -> Vec<Card> {
        (0..self.cards)
            .map(|position| Card {
                position,
                start: PADDING + position as i32 * Self::stride() - self.offset,
            })
            .filter(|card| card.start + CARD_WIDTH > 0 && card.start < VIEWPORT)
            .collect()
    }

    fn completely_visible(&self) -> impl Iterator<Item = Card> {
        self.visible().into_iter().filter(|card| {
            card.start >= PADDING && card.start + CARD_WIDTH <= VIEWPORT - PADDING
        })
    }

    fn scroll_clamped(&mut self, delta: i32) {
        self.offset = (self.offset + delta).clamp(0, self.max_offset());
    }
}

impl SnapLayout for Carousel {
    type Child = Card;

    fn layout(&self) -> Option<LayoutKind> {
        Some(LayoutKind::horizontal())
    }

    fn child_count(&self) -> usize {
        self.visible().len()
    }

    fn child_at(&self, index: usize) -> Option<Card> {
        self.visible().get(index).copied()
    }

    fn child_adapter_position(&self, child: Card) -> Option<usize> {
        Some(child.position)
    }

    fn item_count(&self) -> usize {
        self.cards
    }

    fn first_completely_visible_position(&self) -> Option<usize> {
        self.completely_visible().next().map(|card| card.position)
    }

    fn last_completely_visible_position(&self) -> Option<usize> {
        self.completely_visible().last().map(|card| card.position)
    }

    fn decorated_start(&self, _axis: Axis, child: Card) -> i32 {
        child.start
    }

    fn decorated_end(&self, _axis: Axis, child: Card) -> i32 {
        child.start + CARD_WIDTH + CARD_GAP
    }

    fn start_after_padding(&self, _axis: Axis) -> i32 {
        PADDING
    }

    fn end_after_padding(&self, _axis: Axis) -> i32 {
        VIEWPORT - PADDING
    }

    fn end(&self, _axis: Axis) -> i32 {
        VIEWPORT
    }

    fn find_child_for_position(&self, position: usize) -> Option<Card> {
        self.visible().into_iter().find(|card| card.position == position)
    }

    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::from_locale(self.locale)
    }

    fn density_dpi(&self) -> f32 {
        DEFAULT_DENSITY_DPI * 2.0
    }
}

impl ScrollContainer for Carousel {
    fn scroll_by(&mut self, dx: i32, _dy: i32) {
        self.scroll_clamped(dx);
    }

    fn smooth_scroll_by(&mut self, dx: i32, _dy: i32) {
        self.scroll_clamped(dx);
    }

    fn scroll_to_position(&mut self, position: usize) {
        self.offset = (position as i32 * Self::stride()).clamp(0, self.max_offset());
    }

    fn smooth_scroll_to_position(&mut self, position: usize) {
        self.scroll_to_position(position);
    }
}

/// Fling, clamp, settle on a card, then animate the final alignment
fn fling(snap: &mut SnapCalculator, carousel: &mut Carousel, velocity: i32) {
    snap.on_scroll_state_changed(ScrollState::Dragging);
    snap.find_snap_view(&*carousel);

    let travel = snap.calculate_scroll_distance(&*carousel, velocity, 0);
    snap.on_scroll_state_changed(ScrollState::Settling);
    carousel.scroll_clamped(travel.dx);

    if let Some(card) = snap.find_snap_view(&*carousel) {
        if let Some(action) = snap.smooth_scroll_action(&*carousel, card) {
            let start = carousel.offset;
            let mut elapsed = 0;
            while !action.is_finished(elapsed) {
                elapsed += 16;
                let (dx, _) = action.offset_at(elapsed);
                carousel.offset = (start + dx).clamp(0, carousel.max_offset());
            }
        }
    }

    snap.on_scroll_state_changed(ScrollState::Idle);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blinc_snap=debug")),
        )
        .init();

    let config = SnapConfig::pager();
    let mut snap = SnapCalculator::from_config(&config)?
        .with_listener(|position| tracing::info!(position, "settled on card"));

    let mut carousel = Carousel {
        cards: 8,
        offset: 0,
        locale: "en-US",
    };
    snap.attach(&mut carousel);

    for velocity in [2_500, 6_000, 600, -9_000, 30_000] {
        tracing::info!(velocity, offset = carousel.offset, "fling");
        fling(&mut snap, &mut carousel, velocity);
    }

    snap.smooth_scroll_to_position(&mut carousel, 3);
    tracing::info!(offset = carousel.offset, "jumped to card 3");

    Ok(())
}
