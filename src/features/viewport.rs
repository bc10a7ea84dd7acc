//! Scroll position of the rating list and its edge flags

/// Offsets within this distance of zero count as "at top"
pub const TOP_TOLERANCE: f32 = 1.0;
/// Offsets within this distance of the maximum count as "at bottom"
pub const BOTTOM_TOLERANCE: f32 = 5.0;

/// Viewport over a list of fixed-height rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    offset: f32,
    height: f32,
    row_height: f32,
    row_count: usize,
    at_top: bool,
    at_bottom: bool,
}

impl Viewport {
    pub fn new(row_count: usize, row_height: f32, height: f32) -> Self {
        let mut viewport = Self {
            offset: 0.0,
            height: height.max(0.0),
            row_height: row_height.max(1.0),
            row_count,
            at_top: true,
            at_bottom: false,
        };
        viewport.refresh_edges();
        viewport
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn at_top(&self) -> bool {
        self.at_top
    }

    pub fn at_bottom(&self) -> bool {
        self.at_bottom
    }

    pub fn content_height(&self) -> f32 {
        self.row_count as f32 * self.row_height
    }

    /// `row_count * row_height - height`, never negative
    pub fn max_offset(&self) -> f32 {
        (self.content_height() - self.height).max(0.0)
    }

    /// Index of the row at the top edge
    pub fn first_visible_row(&self) -> usize {
        let row = (self.offset / self.row_height).floor() as usize;
        row.min(self.row_count.saturating_sub(1))
    }

    /// Rows that fit in the viewport, counting a partially visible one
    pub fn visible_row_count(&self) -> usize {
        if self.height <= 0.0 {
            return 1;
        }
        (self.height / self.row_height).ceil() as usize + 1
    }

    /// Record a scroll event and recompute the edge flags
    pub fn on_scroll(&mut self, offset: f32, height: f32) {
        self.height = height.max(0.0);
        self.offset = offset.clamp(0.0, self.max_offset());
        self.refresh_edges();
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0.0;
        self.at_top = true;
        self.at_bottom = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.at_top = false;
        self.at_bottom = true;
    }

    fn refresh_edges(&mut self) {
        self.at_top = self.offset <= TOP_TOLERANCE;
        self.at_bottom = self.offset >= self.max_offset() - BOTTOM_TOLERANCE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        // 50 rows of 150px in a 600px viewport
        Viewport::new(50, 150.0, 600.0)
    }

    #[test]
    fn starts_at_top() {
        let vp = viewport();
        assert!(vp.at_top());
        assert!(!vp.at_bottom());
        assert_eq!(vp.max_offset(), 6900.0);
    }

    #[test]
    fn scroll_recomputes_edges_with_tolerance() {
        let mut vp = viewport();

        vp.on_scroll(1.0, 600.0);
        assert!(vp.at_top());

        vp.on_scroll(300.0, 600.0);
        assert!(!vp.at_top());
        assert!(!vp.at_bottom());

        vp.on_scroll(6896.0, 600.0);
        assert!(vp.at_bottom());

        vp.on_scroll(6890.0, 600.0);
        assert!(!vp.at_bottom());
    }

    #[test]
    fn jumps_set_flags() {
        let mut vp = viewport();
        vp.scroll_to_bottom();
        assert_eq!(vp.offset(), 6900.0);
        assert!(vp.at_bottom());
        assert!(!vp.at_top());

        vp.scroll_to_top();
        assert_eq!(vp.offset(), 0.0);
        assert!(vp.at_top());
        assert!(!vp.at_bottom());
    }

    #[test]
    fn visible_rows() {
        let mut vp = viewport();
        assert_eq!(vp.first_visible_row(), 0);
        assert_eq!(vp.visible_row_count(), 5);

        vp.on_scroll(1530.0, 600.0);
        assert_eq!(vp.first_visible_row(), 10);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut vp = Viewport::new(2, 150.0, 600.0);
        vp.on_scroll(100.0, 600.0);
        assert_eq!(vp.offset(), 0.0);
        assert!(vp.at_top());
        assert!(vp.at_bottom());
    }
}
