/// Axis-aligned rectangle in viewport pixels, same shape as a `DOMRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap of two rects. Edge-adjacent rects still intersect with an empty
    /// overlap, which is how the browser treats zero-area targets.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Root margin in pixels. Positive values grow the root, negative values shrink it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub fn bottom(px: f64) -> Self {
        Self { bottom: px, ..Self::default() }
    }

    pub fn apply(&self, root: &Rect) -> Rect {
        Rect::new(
            root.x - self.left,
            root.y - self.top,
            root.width + self.left + self.right,
            root.height + self.top + self.bottom,
        )
    }

    /// CSS shorthand accepted by `IntersectionObserverInit.rootMargin`.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Visible fraction of `target` inside `root` after the margin is applied,
/// or `None` when they don't intersect at all.
pub fn intersection_ratio(target: &Rect, root: &Rect, margin: &RootMargin) -> Option<f64> {
    let root = margin.apply(root);
    let overlap = target.intersection(&root)?;
    let area = target.area();
    if area == 0.0 {
        return Some(1.0);
    }
    Some((overlap.area() / area).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn margin_renders_as_css_shorthand() {
        assert_eq!(RootMargin::bottom(-50.0).to_css(), "0px 0px -50px 0px");
    }

    #[test]
    fn negative_bottom_margin_shrinks_root() {
        let shrunk = RootMargin::bottom(-50.0).apply(&viewport());
        assert_eq!(shrunk, Rect::new(0.0, 0.0, 1000.0, 750.0));
    }

    #[test]
    fn fully_visible_target_has_ratio_one() {
        let target = Rect::new(100.0, 100.0, 200.0, 200.0);
        let ratio = intersection_ratio(&target, &viewport(), &RootMargin::bottom(-50.0));
        assert_eq!(ratio, Some(1.0));
    }

    #[test]
    fn element_just_inside_bottom_edge_is_hidden_by_margin() {
        // top edge 30px above the fold, well below the shrunk root
        let target = Rect::new(0.0, 770.0, 1000.0, 100.0);
        assert_eq!(intersection_ratio(&target, &viewport(), &RootMargin::default()), Some(0.3));
        assert_eq!(intersection_ratio(&target, &viewport(), &RootMargin::bottom(-50.0)), None);
    }

    #[test]
    fn partial_overlap_is_fraction_of_target_area() {
        let target = Rect::new(0.0, 700.0, 500.0, 100.0);
        let ratio = intersection_ratio(&target, &viewport(), &RootMargin::bottom(-50.0))
            .unwrap_or_default();
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_area_target_on_the_edge_counts_as_visible() {
        let target = Rect::new(10.0, 0.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&target, &viewport(), &RootMargin::default()), Some(1.0));
    }
}
