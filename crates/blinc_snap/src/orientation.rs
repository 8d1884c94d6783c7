//! Per-axis accessor over the host layout

use crate::edge::Axis;
use crate::host::SnapLayout;

/// Reads child bounds and container extents along one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationHelper {
    axis: Axis,
}

impl OrientationHelper {
    /// Helper for an axis
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    /// Helper for horizontal lists
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Helper for vertical lists
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn decorated_start<L: SnapLayout>(&self, layout: &L, child: L::Child) -> i32 {
        layout.decorated_start(self.axis, child)
    }

    pub fn decorated_end<L: SnapLayout>(&self, layout: &L, child: L::Child) -> i32 {
        layout.decorated_end(self.axis, child)
    }

    pub fn start_after_padding<L: SnapLayout>(&self, layout: &L) -> i32 {
        layout.start_after_padding(self.axis)
    }

    pub fn end_after_padding<L: SnapLayout>(&self, layout: &L) -> i32 {
        layout.end_after_padding(self.axis)
    }

    pub fn end<L: SnapLayout>(&self, layout: &L) -> i32 {
        layout.end(self.axis)
    }

    /// Visible extent between the paddings
    pub fn total_space<L: SnapLayout>(&self, layout: &L) -> i32 {
        self.end_after_padding(layout) - self.start_after_padding(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestList;

    #[test]
    fn test_helper_reads_its_axis() {
        let list = TestList::horizontal(5, 100, 250).with_padding(20, 10);
        let helper = OrientationHelper::horizontal();

        assert_eq!(helper.start_after_padding(&list), 20);
        assert_eq!(helper.end_after_padding(&list), 240);
        assert_eq!(helper.end(&list), 250);
        assert_eq!(helper.total_space(&list), 220);

        // Cross axis has no padding in the test list
        let cross = OrientationHelper::vertical();
        assert_eq!(cross.start_after_padding(&list), 0);
    }

    #[test]
    fn test_helper_child_bounds() {
        let list = TestList::vertical(4, 50, 120);
        let helper = OrientationHelper::vertical();
        let child = list.child_at(1).unwrap();

        assert_eq!(helper.decorated_start(&list, child), 50);
        assert_eq!(helper.decorated_end(&list, child), 100);
    }
}
