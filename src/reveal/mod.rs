//! Scroll-triggered entrance animations.
//!
//! Elements tagged with [`CANDIDATE`] start hidden and offset; the first time
//! at least 10% of one is inside the viewport (bottom edge pulled up 50px) it
//! gets the fade-up animation and stays visible for good.

pub mod controller;
pub mod dom;
pub mod geometry;
pub mod session;

pub use dom::use_scroll_reveal;

pub const CANDIDATE_CLASS: &str = "animate-on-scroll";
pub const HIDDEN_CLASS: &str = "opacity-0";
pub const OFFSET_CLASS: &str = "translate-y-8";
pub const REVEALED_CLASS: &str = "animate-fade-up";

/// Full class list for an element that should reveal on scroll.
pub const CANDIDATE: &str = "animate-on-scroll opacity-0 translate-y-8";

/// Inline style staggering the `index`th item of a row.
pub fn stagger_delay(index: usize) -> String {
    format!("transition-delay: {}ms; animation-delay: {}ms;", index * 100, index * 100)
}

/// Inline style delaying a hero element's entrance animation.
pub fn entrance_delay(seconds: f32) -> String {
    format!("animation-delay: {}s;", seconds)
}

pub const REVEAL_CSS: &str = r#"
    .opacity-0 {
        opacity: 0;
    }
    .translate-y-8 {
        transform: translateY(2rem);
    }
    .animate-on-scroll {
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .animate-fade-up {
        animation: fade-up 0.6s ease-out both;
    }
    @keyframes fade-up {
        from { opacity: 0; transform: translateY(2rem); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (prefers-reduced-motion: reduce) {
        .animate-fade-up, .animate-on-scroll {
            animation: none;
            transition: none;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_class_list_carries_every_marker() {
        let classes: Vec<&str> = CANDIDATE.split_whitespace().collect();
        assert_eq!(classes, vec![CANDIDATE_CLASS, HIDDEN_CLASS, OFFSET_CLASS]);
    }

    #[test]
    fn stagger_grows_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay(0), "transition-delay: 0ms; animation-delay: 0ms;");
        assert_eq!(stagger_delay(3), "transition-delay: 300ms; animation-delay: 300ms;");
    }

    #[test]
    fn entrance_delay_is_in_seconds() {
        assert_eq!(entrance_delay(0.2), "animation-delay: 0.2s;");
    }
}
