use crate::constants::CARD_OFFSET_PX;
use crate::geo;
use wasm_bindgen::JsCast;
use web_sys as web;

const CARD_CLASSES: &str =
    "fixed z-10 pointer-events-none rounded-lg bg-slate-900/80 px-3 py-2 text-sm text-slate-100 shadow-lg";

/// Markup for one location's info card.
pub fn card_html(loc: &geo::Location) -> String {
    format!(
        "<div class=\"font-semibold\">{}</div><div class=\"text-xs text-slate-300\">{}</div>",
        loc.name,
        geo::format_coords(loc.lat, loc.lon)
    )
}

/// Create one hidden card per location under the `card-layer` container
/// (created on demand if the page does not provide one).
pub fn build_cards(
    document: &web::Document,
    locations: &[geo::Location],
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let layer = match document.get_element_by_id("card-layer") {
        Some(el) => el,
        None => {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_id("card-layer");
            let body = document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body to attach cards to"))?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el
        }
    };

    let mut cards = Vec::with_capacity(locations.len());
    for loc in locations {
        let el: web::HtmlElement = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_class_name(CARD_CLASSES);
        el.set_inner_html(&card_html(loc));
        _ = el.set_attribute("style", "opacity:0;left:-1000px;top:-1000px");
        layer
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        cards.push(el);
    }
    Ok(cards)
}

/// Move a card next to the cursor and set its opacity. Fully transparent
/// cards are parked off-screen so they never cover the canvas.
pub fn place_card(el: &web::HtmlElement, client_x: f64, client_y: f64, opacity: f32) {
    if opacity < 0.005 {
        _ = el.set_attribute("style", "opacity:0;left:-1000px;top:-1000px");
        return;
    }
    _ = el.set_attribute(
        "style",
        &format!(
            "opacity:{:.3};left:{:.0}px;top:{:.0}px",
            opacity,
            client_x + CARD_OFFSET_PX,
            client_y + CARD_OFFSET_PX
        ),
    );
}
