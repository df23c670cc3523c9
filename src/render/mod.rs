//! Plain-text rendering of the page.
//!
//! Consumes view-model state only; it never talks to the backend.

use crate::core::{ContactFormViewModel, MenuItem, MenuState, MenuViewModel, SubmissionStatus};
use chrono::Datelike;
use std::fmt::Write;

pub const SITE_NAME: &str = "Midori Teehaus";
pub const MENU_LOADING: &str = "Loading menu…";
pub const MENU_EMPTY: &str = "Menu coming soon. Check back shortly!";

const NAV_LINKS: [&str; 4] = ["Menu", "About", "Visit", "Contact"];

pub fn navbar() -> String {
    format!("茶 {}  |  {}", SITE_NAME, NAV_LINKS.join("  "))
}

pub fn hero() -> String {
    [
        "Serene sips. Hand-crafted matcha. Cozy moments.",
        "",
        "Welcome to Midori Teehaus, your neighborhood destination for premium Japanese teas,",
        "specialty coffee, and freshly baked treats. Settle in and stay awhile.",
    ]
    .join("\n")
}

pub fn about() -> String {
    [
        "Our Story",
        "",
        "Inspired by the calm of tea houses in Kyoto, Midori Teehaus blends Japanese tea traditions with",
        "a modern, neighborhood vibe. We whisk ceremonial-grade matcha to order and pair it with",
        "carefully sourced teas, espresso, and seasonal pastries baked every morning.",
    ]
    .join("\n")
}

pub fn visit() -> String {
    [
        "Visit Us",
        "",
        "123 Midori Lane, Green District",
        "Open daily: 8:00 – 18:00",
        "Weekend Brunch: 9:00 – 14:00",
        "",
        "Tip: Try our signature Matcha Latte with oat milk and a yuzu croissant.",
    ]
    .join("\n")
}

pub fn footer_for_year(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, SITE_NAME)
}

pub fn footer() -> String {
    footer_for_year(chrono::Local::now().year())
}

/// Tabs line, active tab in brackets.
pub fn category_tabs(menu: &MenuViewModel) -> String {
    menu.tabs()
        .iter()
        .map(|tab| {
            if tab == menu.active_category() {
                format!("[{}]", tab)
            } else {
                tab.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn menu_card(item: &MenuItem) -> String {
    let mut out = format!("{}  {}", item.name, item.formatted_price());
    if let Some(desc) = item.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(out, "\n  {}", desc);
    }
    if !item.tags().is_empty() {
        let tags: Vec<String> = item.tags().iter().map(|t| format!("#{}", t)).collect();
        let _ = write!(out, "\n  {}", tags.join(" "));
    }
    out
}

pub fn menu_section(menu: &MenuViewModel) -> String {
    let mut out = String::from("Menu\n");
    let _ = writeln!(out, "{}", category_tabs(menu));
    out.push('\n');

    match menu.state() {
        MenuState::Loading => out.push_str(MENU_LOADING),
        MenuState::Failed(msg) => out.push_str(msg),
        MenuState::Loaded => {
            let visible = menu.visible_items();
            if visible.is_empty() {
                out.push_str(MENU_EMPTY);
            } else {
                let cards: Vec<String> = visible.into_iter().map(menu_card).collect();
                out.push_str(&cards.join("\n\n"));
            }
        }
    }
    out
}

/// Status line shown next to the send button, if any.
pub fn contact_status(contact: &ContactFormViewModel) -> Option<String> {
    let status = contact.status();
    let message = status.message()?;
    let line = match status {
        SubmissionStatus::Error(_) => format!("✗ {}", message),
        SubmissionStatus::Success(_) => format!("✓ {}", message),
        _ => message.to_string(),
    };
    Some(line)
}

pub fn contact_section(contact: &ContactFormViewModel) -> String {
    let form = contact.form();
    let button = if contact.is_busy() {
        SubmissionStatus::SENDING
    } else {
        "Send message"
    };
    let mut out = String::from("Get in touch\n\n");
    let _ = writeln!(out, "Name:    {}", form.name);
    let _ = writeln!(out, "Email:   {}", form.email);
    let _ = writeln!(out, "Subject: {}", form.subject);
    let _ = writeln!(out, "Message: {}", form.message);
    let _ = write!(out, "[{}]", button);
    if let Some(status) = contact_status(contact) {
        let _ = write!(out, "  {}", status);
    }
    out
}

pub fn page(menu: &MenuViewModel, contact: &ContactFormViewModel) -> String {
    [
        navbar(),
        hero(),
        menu_section(menu),
        about(),
        visit(),
        contact_section(contact),
        footer(),
    ]
    .join("\n\n────────\n\n")
}
