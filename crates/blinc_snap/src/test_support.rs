//! In-memory list host shared by the unit tests

use crate::edge::{Axis, LayoutDirection};
use crate::host::{LayoutKind, ScrollContainer, SnapLayout, DEFAULT_DENSITY_DPI};

/// Realized child: adapter position plus decorated bounds on the main axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TestChild {
    pub position: usize,
    pub start: i32,
    pub end: i32,
}

/// Scroll requests issued by the calculator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HostCall {
    ScrollBy(i32, i32),
    SmoothScrollBy(i32, i32),
    ScrollToPosition(usize),
    SmoothScrollToPosition(usize),
    ClearFlingHandler,
}

/// Linear list of uniformly sized items, or of explicitly placed children
#[derive(Clone, Debug)]
pub(crate) struct TestList {
    layout: Option<LayoutKind>,
    axis: Axis,
    item_count: usize,
    item_size: i32,
    extent: i32,
    padding_start: i32,
    padding_end: i32,
    scroll: i32,
    placed: Option<Vec<TestChild>>,
    direction: LayoutDirection,
    dpi: f32,
    pub calls: Vec<HostCall>,
}

impl TestList {
    fn new(axis: Axis, item_count: usize, item_size: i32, extent: i32) -> Self {
        Self {
            layout: Some(LayoutKind::Linear {
                orientation: axis,
                reversed: false,
            }),
            axis,
            item_count,
            item_size,
            extent,
            padding_start: 0,
            padding_end: 0,
            scroll: 0,
            placed: None,
            direction: LayoutDirection::Ltr,
            dpi: DEFAULT_DENSITY_DPI,
            calls: Vec::new(),
        }
    }

    pub fn horizontal(item_count: usize, item_size: i32, extent: i32) -> Self {
        Self::new(Axis::Horizontal, item_count, item_size, extent)
    }

    pub fn vertical(item_count: usize, item_size: i32, extent: i32) -> Self {
        Self::new(Axis::Vertical, item_count, item_size, extent)
    }

    pub fn with_padding(mut self, start: i32, end: i32) -> Self {
        self.padding_start = start;
        self.padding_end = end;
        self
    }

    pub fn scrolled(mut self, offset: i32) -> Self {
        self.scroll = offset;
        self
    }

    /// Replace the uniform items with explicit `(position, start, end)` children
    pub fn with_children(mut self, children: &[(usize, i32, i32)]) -> Self {
        self.placed = Some(
            children
                .iter()
                .map(|&(position, start, end)| TestChild {
                    position,
                    start,
                    end,
                })
                .collect(),
        );
        self
    }

    pub fn reversed(mut self) -> Self {
        self.layout = Some(LayoutKind::Linear {
            orientation: self.axis,
            reversed: true,
        });
        self
    }

    pub fn rtl(mut self) -> Self {
        self.direction = LayoutDirection::Rtl;
        self
    }

    pub fn with_layout(mut self, layout: Option<LayoutKind>) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn children(&self) -> Vec<TestChild> {
        if let Some(placed) = &self.placed {
            return placed.clone();
        }
        (0..self.item_count)
            .map(|position| {
                let start = self.padding_start + position as i32 * self.item_size - self.scroll;
                TestChild {
                    position,
                    start,
                    end: start + self.item_size,
                }
            })
            .filter(|child| child.end > 0 && child.start < self.extent)
            .collect()
    }

    fn completely_visible(&self) -> impl Iterator<Item = TestChild> + '_ {
        let lo = self.padding_start;
        let hi = self.extent - self.padding_end;
        self.children()
            .into_iter()
            .filter(move |child| child.start >= lo && child.end <= hi)
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        let delta = match self.axis {
            Axis::Horizontal => dx,
            Axis::Vertical => dy,
        };
        self.scroll += delta;
        if let Some(placed) = &mut self.placed {
            for child in placed.iter_mut() {
                child.start -= delta;
                child.end -= delta;
            }
        }
    }
}

impl SnapLayout for TestList {
    type Child = TestChild;

    fn layout(&self) -> Option<LayoutKind> {
        self.layout
    }

    fn child_count(&self) -> usize {
        self.children().len()
    }

    fn child_at(&self, index: usize) -> Option<TestChild> {
        self.children().get(index).copied()
    }

    fn child_adapter_position(&self, child: TestChild) -> Option<usize> {
        Some(child.position)
    }

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn first_completely_visible_position(&self) -> Option<usize> {
        self.completely_visible().next().map(|c| c.position)
    }

    fn last_completely_visible_position(&self) -> Option<usize> {
        self.completely_visible().last().map(|c| c.position)
    }

    fn decorated_start(&self, axis: Axis, child: TestChild) -> i32 {
        if axis == self.axis {
            child.start
        } else {
            0
        }
    }

    fn decorated_end(&self, axis: Axis, child: TestChild) -> i32 {
        if axis == self.axis {
            child.end
        } else {
            0
        }
    }

    fn start_after_padding(&self, axis: Axis) -> i32 {
        if axis == self.axis {
            self.padding_start
        } else {
            0
        }
    }

    fn end_after_padding(&self, axis: Axis) -> i32 {
        if axis == self.axis {
            self.extent - self.padding_end
        } else {
            0
        }
    }

    fn end(&self, axis: Axis) -> i32 {
        if axis == self.axis {
            self.extent
        } else {
            0
        }
    }

    fn find_child_for_position(&self, position: usize) -> Option<TestChild> {
        self.children().into_iter().find(|c| c.position == position)
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn density_dpi(&self) -> f32 {
        self.dpi
    }
}

impl ScrollContainer for TestList {
    fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.calls.push(HostCall::ScrollBy(dx, dy));
        self.shift(dx, dy);
    }

    fn smooth_scroll_by(&mut self, dx: i32, dy: i32) {
        self.calls.push(HostCall::SmoothScrollBy(dx, dy));
        self.shift(dx, dy);
    }

    fn scroll_to_position(&mut self, position: usize) {
        self.calls.push(HostCall::ScrollToPosition(position));
    }

    fn smooth_scroll_to_position(&mut self, position: usize) {
        self.calls.push(HostCall::SmoothScrollToPosition(position));
    }

    fn clear_fling_handler(&mut self) {
        self.calls.push(HostCall::ClearFlingHandler);
    }
}
