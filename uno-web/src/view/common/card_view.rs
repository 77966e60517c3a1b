use uno_core::{Card, Color};
use yew::{classes, function_component, html, Callback, Properties};

#[derive(Properties, PartialEq)]
pub struct CardViewProps {
    /// `None` renders the gray placeholder tile of an empty pile.
    #[prop_or_default]
    pub card: Option<Card>,
    #[prop_or(false)]
    pub face_down: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
}

/// Background color of a face-up card.
pub fn color_hex(color: Color) -> &'static str {
    match color {
        Color::Red => "#e53935",
        Color::Blue => "#1e88e5",
        Color::Green => "#43a047",
        Color::Yellow => "#fdd835",
        Color::Black => "#111",
    }
}

const CARD_BACK: &str = "#111";
const CARD_FALLBACK: &str = "#222";

pub fn card_fill(card: Option<&Card>, face_down: bool) -> &'static str {
    if face_down {
        return CARD_BACK;
    }
    match card {
        Some(card) => color_hex(card.color()),
        None => CARD_FALLBACK,
    }
}

/// A face-down card always shows the fixed back label, whatever it hides.
pub fn card_label(card: Option<&Card>, face_down: bool) -> String {
    if face_down {
        return "UNO".to_string();
    }
    match card {
        Some(card) => card.value().to_string(),
        None => String::new(),
    }
}

#[function_component(CardView)]
pub fn card_view(props: &CardViewProps) -> Html {
    let fill = card_fill(props.card.as_ref(), props.face_down);
    let label = card_label(props.card.as_ref(), props.face_down);
    let clickable = props.onclick.is_some();
    let style = format!(
        "width: 78px; height: 112px; border-radius: 14px; \
         border: 2px solid rgba(255,255,255,0.22); background: {}; color: white; \
         box-shadow: 0 10px 24px rgba(0,0,0,0.45); cursor: {};",
        fill,
        if clickable { "pointer" } else { "default" },
    );
    let onclick = {
        let callback = props.onclick.clone();
        Callback::from(move |_| {
            if let Some(callback) = &callback {
                callback.emit(());
            }
        })
    };
    html! {
        <button class={classes!("uno-card", props.face_down.then_some("is-face-down"))}
            {style} {onclick}>
            <span style="font-size: 28px; font-weight: 900;">{label}</span>
        </button>
    }
}
