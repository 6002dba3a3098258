//! Page model and HTML rendering.
//!
//! # Design
//! The page is held as typed regions rather than markup so that handlers can
//! address a single card by id (the medicine name) the way a DOM lookup
//! would. Rendering turns each region into the fragment that would be its
//! `innerHTML`; `Page::render` wraps them into a full document with plain
//! forms, so the page works without any script.

use medicine_core::Medicine;

pub const NO_MEDICINES: &str = "No Medicine Found";
pub const NOT_AVAILABLE: &str = "Not Available.";
pub const AVERAGE_UNAVAILABLE: &str = "No data available right now.";

/// One rendered medicine card plus any inline errors appended to it.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineCard {
    pub medicine: Medicine,
    pub errors: Vec<String>,
}

impl MedicineCard {
    pub fn new(medicine: Medicine) -> Self {
        Self {
            medicine,
            errors: Vec::new(),
        }
    }

    /// DOM id of the card.
    pub fn id(&self) -> &str {
        &self.medicine.name
    }

    pub fn price_text(&self) -> String {
        match self.medicine.price {
            Some(price) => format!("£{}", number_text(price)),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn render(&self) -> String {
        let name = html_escape(&self.medicine.name);
        let heading = if self.medicine.name.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            name.clone()
        };
        let action = format!("/medicines/{}", urlencoding::encode(&self.medicine.name));

        let mut html = format!(
            concat!(
                r#"<div id="{name}" class="medicine-item shadow">"#,
                r#"<div class="medicine-item-details">"#,
                "<h3>{heading}</h3>",
                "<p>Price: {price}</p>",
                r#"<form class="deleteForm" method="post" action="{action}/delete">"#,
                r#"<button type="submit">Delete</button>"#,
                "</form>",
                "</div>",
                r#"<div class="medicine-item-edit">"#,
                r#"<form class="editForm" method="post" action="{action}/price" data-medicine-name="{name}">"#,
                r#"<label class="editFormItem" for="newPrice-{name}"><span style="font-weight: bold;">Update Price</span></label>"#,
                r#"<input class="editFormItem" type="number" step="0.01" name="newPrice" id="newPrice-{name}" placeholder="New Price" required/>"#,
                r#"<input class="editFormItem" type="submit" name="editButton" value="Update Medicine"/>"#,
                "</form>",
                "</div>",
            ),
            name = name,
            heading = heading,
            price = html_escape(&self.price_text()),
            action = html_escape(&action),
        );
        for error in &self.errors {
            html.push_str(&format!(r#"<span class="update-error">Error: {}</span>"#, html_escape(error)));
        }
        html.push_str("</div>");
        html
    }
}

/// Contents of the medicine list container.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRegion {
    /// The list endpoint returned no data at all.
    NoData,
    Items(Vec<MedicineCard>),
    /// An error message replaced the whole region.
    Message(String),
}

impl ListRegion {
    pub fn render(&self) -> String {
        match self {
            ListRegion::NoData => format!("<p>{NO_MEDICINES}</p>"),
            ListRegion::Message(message) => format!("<p>{}</p>", html_escape(message)),
            ListRegion::Items(cards) => {
                let mut html = String::from(r#"<div class="medicine-list">"#);
                for card in cards {
                    html.push_str(&card.render());
                }
                html.push_str("</div>");
                html
            }
        }
    }
}

/// Contents of the average price container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRegion {
    Pending,
    Price(f64),
    Unavailable,
}

impl AverageRegion {
    pub fn render(&self) -> String {
        match self {
            AverageRegion::Pending => String::new(),
            AverageRegion::Price(price) => {
                format!(r#"<p class="avg-price">Average Medicine Price: £{}</p>"#, two_decimals(*price))
            }
            AverageRegion::Unavailable => AVERAGE_UNAVAILABLE.to_string(),
        }
    }
}

/// The two text inputs of the create form.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub list: ListRegion,
    pub average: AverageRegion,
    pub create_form: CreateForm,
    /// A blocking message the host must show before anything else.
    pub alert: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            list: ListRegion::Items(Vec::new()),
            average: AverageRegion::Pending,
            create_form: CreateForm::default(),
            alert: None,
        }
    }
}

impl Page {
    pub fn cards(&self) -> &[MedicineCard] {
        match &self.list {
            ListRegion::Items(cards) => cards,
            _ => &[],
        }
    }

    /// First card whose id equals `id`, if it is currently rendered.
    pub fn card_mut(&mut self, id: &str) -> Option<&mut MedicineCard> {
        match &mut self.list {
            ListRegion::Items(cards) => cards.iter_mut().find(|card| card.id() == id),
            _ => None,
        }
    }

    /// Full HTML document for the current state.
    pub fn render(&self) -> String {
        let alert = self
            .alert
            .as_deref()
            .map(|message| format!(r#"<div class="alert" role="alert">{}</div>"#, html_escape(message)))
            .unwrap_or_default();

        format!(
            concat!(
                "<!DOCTYPE html>\n",
                r#"<html lang="en"><head><meta charset="utf-8"><title>Medicines</title></head><body>"#,
                "{alert}",
                r#"<div class="container left">"#,
                r#"<form class="create-medicine" method="post" action="/medicines">"#,
                r#"<label for="mName">Name</label><input type="text" id="mName" name="name" value="{name}"/>"#,
                r#"<label for="mPrice">Price</label><input type="text" id="mPrice" name="price" value="{price}"/>"#,
                r#"<input type="submit" value="Create Medicine"/>"#,
                "</form>",
                r#"<div class="average-price">{average}</div>"#,
                "</div>",
                r#"<div class="container right">{list}</div>"#,
                "</body></html>\n",
            ),
            alert = alert,
            name = html_escape(&self.create_form.name),
            price = html_escape(&self.create_form.price),
            average = self.average.render(),
            list = self.list.render(),
        )
    }
}

/// Shortest round-trip text for a price, switching to exponent notation
/// (`1e-7`, `1e+21`) outside `[1e-6, 1e21)` like script number printing.
pub fn number_text(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&magnitude) || !magnitude.is_finite() {
        return format!("{value}");
    }
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => text,
    }
}

/// Two fixed decimals. A value lying exactly halfway between two cents
/// rounds away from zero; `{:.2}` alone would round it to even.
pub fn two_decimals(value: f64) -> String {
    if value.abs() >= 1e21 {
        return number_text(value);
    }
    // Exact ties are odd multiples of 1/8 (x.125, x.375, x.625, x.875).
    let eighths = value * 8.0;
    if eighths.fract() != 0.0 || eighths % 2.0 == 0.0 {
        return format!("{value:.2}");
    }
    let cents = (eighths.abs() as u128 * 25 + 1) / 2;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Simple HTML escaping for text and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
