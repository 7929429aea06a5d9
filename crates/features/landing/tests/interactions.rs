use amia_landing::faq::{MAIL_SUBJECT, clipboard_text};
use amia_landing::{FaqAccordion, FaqClick, FaqItem, Reveal, RevealConfig, RevealDirection, Theme};
use proptest::prelude::*;
use std::time::Duration;

fn accordion() -> FaqAccordion {
    FaqAccordion::new(vec![
        FaqItem::answer("What is AMIA?", "A retail analytics platform."),
        FaqItem::answer("Which countries?", "All of Latin America."),
        FaqItem::page("Can I book a demo?", "Yes.", "/demo-request"),
        FaqItem::mail("Something else?", "Write to us.", "hola@example.com"),
    ])
}

proptest! {
    #[test]
    fn at_most_one_item_is_open(clicks in proptest::collection::vec(0usize..6, 0..30)) {
        let mut faq = accordion();
        for index in clicks {
            faq.click(index);
            let open = (0..faq.items().len()).filter(|i| faq.open() == Some(*i)).count();
            prop_assert!(open <= 1);
            if let Some(i) = faq.open() {
                prop_assert!(i < 2, "link items never open");
            }
        }
    }

    #[test]
    fn reveal_is_one_shot(ratios in proptest::collection::vec(0.0f32..=1.0, 1..20)) {
        let mut reveal = Reveal::default();
        let mut fired = 0;
        for ratio in ratios {
            let was_visible = reveal.is_visible();
            if reveal.observe(ratio) {
                fired += 1;
            }
            if was_visible {
                prop_assert!(reveal.is_visible());
            }
        }
        prop_assert!(fired <= 1);
    }
}

#[test]
fn clicking_open_item_closes_it() {
    let mut faq = accordion();
    assert_eq!(faq.click(0), FaqClick::Opened(0));
    assert_eq!(faq.click(1), FaqClick::Opened(1));
    assert!(!faq.is_answer_visible(0));
    assert_eq!(faq.click(1), FaqClick::Closed(1));
    assert_eq!(faq.open(), None);
    assert_eq!(faq.click(9), FaqClick::Ignored);
}

#[test]
fn link_items_do_not_toggle() {
    let mut faq = accordion();
    faq.click(0);
    assert_eq!(faq.click(2), FaqClick::Navigate("/demo-request".to_owned()));
    assert!(matches!(faq.click(3), FaqClick::Mail(link) if link.starts_with("mailto:hola@example.com?")));
    assert_eq!(faq.open(), Some(0));
}

#[test]
fn hover_previews_answer() {
    let mut faq = accordion();
    faq.hover(Some(1));
    assert!(faq.is_answer_visible(1));
    faq.hover(None);
    assert!(!faq.is_answer_visible(1));
}

#[test]
fn items_enter_after_section_reveal() {
    let mut faq = accordion();
    assert!(!faq.is_item_shown(0, Duration::from_secs(5)));

    assert!(faq.reveal_section());
    assert!(!faq.reveal_section());
    assert!(faq.is_item_shown(0, Duration::ZERO));
    assert!(!faq.is_item_shown(2, Duration::from_millis(599)));
    assert!(faq.is_item_shown(2, Duration::from_millis(600)));
    assert!(!faq.is_item_shown(4, Duration::from_secs(60)));
}

#[test]
fn clipboard_fallback_mentions_subject() {
    let text = clipboard_text("hola@example.com");
    assert!(text.starts_with("Email: hola@example.com\n"));
    assert!(text.contains(MAIL_SUBJECT));
}

#[test]
fn reveal_shows_on_threshold_and_stays() {
    let mut reveal = Reveal::new(RevealConfig::default().direction(RevealDirection::Right));
    assert_eq!(reveal.style().translate_x, -50.0);
    assert!(reveal.observe(0.1));
    assert!(!reveal.observe(0.0));
    assert!(reveal.is_visible());
    let style = reveal.style();
    assert_eq!((style.opacity, style.translate_x, style.translate_y), (1.0, 0.0, 0.0));
}

#[test]
fn theme_toggles_between_light_and_dark() {
    assert_eq!(Theme::Light.toggled(false), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(false), Theme::Light);
    assert_eq!(Theme::System.toggled(true), Theme::Light);
}
