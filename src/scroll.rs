//! Scroll progress maths shared by the indicator component.

/// The percentage label only appears once the page has been scrolled past
/// this offset.
pub const LABEL_THRESHOLD_PX: f64 = 100.0;

/// Circumference of the r=46 progress ring in the 100x100 viewBox.
pub const PROGRESS_RING_CIRCUMFERENCE: f64 = 289.027;

/// How far down the document the viewport is, in [0, 1]. Zero when the
/// document fits in the viewport.
pub fn scroll_ratio(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let track = document_height - viewport_height;
    if track > 0.0 {
        (offset / track).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Stroke dash offset that leaves an arc proportional to `ratio` visible.
pub fn dash_offset(circumference: f64, ratio: f64) -> f64 {
    circumference - circumference * ratio
}

pub fn percent_label(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_document_top() {
        assert_eq!(scroll_ratio(0.0, 5000.0, 800.0), 0.0);
    }

    #[test]
    fn one_at_document_bottom() {
        assert_eq!(scroll_ratio(4200.0, 5000.0, 800.0), 1.0);
    }

    #[test]
    fn monotone_in_the_offset() {
        let mut last = 0.0;
        for offset in [0.0, 100.0, 1000.0, 2500.0, 4200.0] {
            let ratio = scroll_ratio(offset, 5000.0, 800.0);
            assert!(ratio >= last);
            last = ratio;
        }
    }

    #[test]
    fn clamped_past_the_bottom() {
        assert_eq!(scroll_ratio(9999.0, 5000.0, 800.0), 1.0);
    }

    #[test]
    fn short_documents_never_divide_by_zero() {
        assert_eq!(scroll_ratio(0.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_ratio(50.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn dash_offset_tracks_the_ratio() {
        assert_eq!(dash_offset(PROGRESS_RING_CIRCUMFERENCE, 0.0), PROGRESS_RING_CIRCUMFERENCE);
        assert_eq!(dash_offset(PROGRESS_RING_CIRCUMFERENCE, 1.0), 0.0);
        assert_eq!(dash_offset(200.0, 0.25), 150.0);
    }

    #[test]
    fn percent_label_rounds() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(0.499), "50%");
        assert_eq!(percent_label(1.0), "100%");
    }
}
